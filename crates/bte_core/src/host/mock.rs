//! Scripted host double recording every render-control call.

use crate::models::{Folder, Timeline};

use super::{EditHost, HostError, HostResult, RenderSettings};

/// One recorded render-control call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    LoadRenderPreset(String),
    SetCurrentTimeline(String),
    SetRenderSettings(RenderSettings),
    AddRenderJob,
}

/// In-memory [`EditHost`] for tests.
///
/// Snapshot getters serve the configured project state; render-control calls
/// are appended to `calls` for assertions.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    pub preset_names: Vec<String>,
    pub timeline_list: Vec<Timeline>,
    pub root: Folder,
    pub calls: Vec<HostCall>,
    /// When set, the nth `add_render_job` call (1-based) fails.
    pub fail_add_on: Option<usize>,
    adds_seen: usize,
}

impl ScriptedHost {
    pub fn new(root: Folder, timeline_list: Vec<Timeline>, preset_names: Vec<String>) -> Self {
        Self {
            preset_names,
            timeline_list,
            root,
            calls: Vec::new(),
            fail_add_on: None,
            adds_seen: 0,
        }
    }

    /// Number of recorded `AddRenderJob` calls.
    pub fn jobs_enqueued(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HostCall::AddRenderJob))
            .count()
    }

    /// Number of recorded `LoadRenderPreset` calls.
    pub fn presets_loaded(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HostCall::LoadRenderPreset(_)))
            .count()
    }
}

impl EditHost for ScriptedHost {
    fn render_preset_names(&self) -> HostResult<Vec<String>> {
        Ok(self.preset_names.clone())
    }

    fn timeline_count(&self) -> HostResult<usize> {
        Ok(self.timeline_list.len())
    }

    fn timeline_by_index(&self, index: usize) -> HostResult<Timeline> {
        if index == 0 || index > self.timeline_list.len() {
            return Err(HostError::index_out_of_range(
                index,
                self.timeline_list.len(),
            ));
        }
        Ok(self.timeline_list[index - 1].clone())
    }

    fn media_root(&self) -> HostResult<Folder> {
        Ok(self.root.clone())
    }

    fn load_render_preset(&mut self, name: &str) -> HostResult<()> {
        if !self.preset_names.iter().any(|preset| preset == name) {
            return Err(HostError::UnknownPreset(name.to_string()));
        }
        self.calls.push(HostCall::LoadRenderPreset(name.to_string()));
        Ok(())
    }

    fn set_current_timeline(&mut self, timeline_name: &str) -> HostResult<()> {
        self.calls
            .push(HostCall::SetCurrentTimeline(timeline_name.to_string()));
        Ok(())
    }

    fn set_render_settings(&mut self, settings: &RenderSettings) -> HostResult<()> {
        self.calls
            .push(HostCall::SetRenderSettings(settings.clone()));
        Ok(())
    }

    fn add_render_job(&mut self) -> HostResult<()> {
        self.adds_seen += 1;
        if self.fail_add_on == Some(self.adds_seen) {
            return Err(HostError::api("AddRenderJob", "scripted failure"));
        }
        self.calls.push(HostCall::AddRenderJob);
        Ok(())
    }
}
