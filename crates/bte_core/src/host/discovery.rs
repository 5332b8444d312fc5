//! Locating the host's scripting runtime.
//!
//! DaVinci Resolve exposes its automation API as a Python module installed
//! alongside the application. A launcher must find that module before any
//! exporter logic can run; failure here is fatal and reported to the
//! operator, never recovered from. The probe order matches the stock
//! launcher: `PYTHONPATH` entries first, then the platform's default
//! install location.

use std::env;
use std::path::PathBuf;

use super::errors::{HostError, HostResult};

/// File name of the host's scripting entry module.
pub const SCRIPTING_MODULE: &str = "DaVinciResolveScript.py";

/// Default install location of the scripting modules for this platform.
///
/// Returns `None` on platforms the host does not ship for, or on Windows
/// when `PROGRAMDATA` is unset.
pub fn default_modules_dir() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        Some(PathBuf::from(
            "/Library/Application Support/Blackmagic Design/DaVinci Resolve/Developer/Scripting/Modules",
        ))
    } else if cfg!(target_os = "windows") {
        env::var_os("PROGRAMDATA").map(|programdata| {
            let mut dir = PathBuf::from(programdata);
            dir.push("Blackmagic Design");
            dir.push("DaVinci Resolve");
            dir.push("Support");
            dir.push("Developer");
            dir.push("Scripting");
            dir.push("Modules");
            dir
        })
    } else if cfg!(target_os = "linux") {
        Some(PathBuf::from("/opt/resolve/libs/Fusion/Modules"))
    } else {
        None
    }
}

/// Locate the host's scripting module on this machine.
///
/// Probes every `PYTHONPATH` entry, then the platform default from
/// [`default_modules_dir`].
pub fn locate_scripting_module() -> HostResult<PathBuf> {
    let mut dirs: Vec<PathBuf> = env::var_os("PYTHONPATH")
        .map(|paths| env::split_paths(&paths).collect())
        .unwrap_or_default();
    if let Some(default) = default_modules_dir() {
        dirs.push(default);
    }

    find_module_in(dirs).ok_or_else(|| HostError::ScriptingModuleNotFound {
        expected: default_modules_dir().unwrap_or_else(|| PathBuf::from(SCRIPTING_MODULE)),
    })
}

/// First directory in `dirs` that contains the scripting module.
fn find_module_in<I>(dirs: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    dirs.into_iter()
        .map(|dir| dir.join(SCRIPTING_MODULE))
        .find(|candidate| candidate.is_file())
}
