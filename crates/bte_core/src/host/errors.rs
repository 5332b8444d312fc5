//! Error types for the host automation surface.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the host automation API or its discovery.
///
/// The exporter performs no recovery of its own: host failures propagate to
/// the launcher/UI layer, and a failure mid-batch leaves already-enqueued
/// jobs in the host's render queue.
#[derive(Error, Debug)]
pub enum HostError {
    /// The host's scripting module could not be located. Fatal; nothing can
    /// run without it.
    #[error("scripting module not found (expected in {})", .expected.display())]
    ScriptingModuleNotFound { expected: PathBuf },

    /// No project is currently open in the host.
    #[error("no project is currently open")]
    NoProject,

    /// A 1-based timeline index fell outside the project's timeline list.
    #[error("timeline index {index} out of range (project has {count})")]
    TimelineIndexOutOfRange { index: usize, count: usize },

    /// A preset name was not found among the host's saved render presets.
    #[error("unknown render preset '{0}'")]
    UnknownPreset(String),

    /// A timeline is missing a required host setting.
    #[error("timeline '{timeline}' has no '{key}' setting")]
    MissingSetting { timeline: String, key: String },

    /// A host setting had a value the exporter could not interpret.
    #[error("timeline '{timeline}' reports unusable {key}: '{value}'")]
    InvalidSetting {
        timeline: String,
        key: String,
        value: String,
    },

    /// A host API call failed.
    #[error("host call '{call}' failed: {message}")]
    Api { call: String, message: String },
}

impl HostError {
    /// Create an out-of-range index error.
    pub fn index_out_of_range(index: usize, count: usize) -> Self {
        Self::TimelineIndexOutOfRange { index, count }
    }

    /// Create a missing setting error.
    pub fn missing_setting(timeline: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingSetting {
            timeline: timeline.into(),
            key: key.into(),
        }
    }

    /// Create an invalid setting error.
    pub fn invalid_setting(
        timeline: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidSetting {
            timeline: timeline.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a failed API call error.
    pub fn api(call: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            call: call.into(),
            message: message.into(),
        }
    }
}

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;
