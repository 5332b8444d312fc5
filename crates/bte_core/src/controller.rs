//! Event-facing controller wiring catalog, selection, and submission.
//!
//! The UI layer owns the window, the tree widget, and the event loop; its
//! entire contract with this crate is: build a controller at window open,
//! translate widget events into [`UiEvent`]s, and act on the returned
//! [`EventOutcome`]. Every handler runs to completion on the host's single
//! dispatch thread; nothing here suspends or spawns.

use std::collections::BTreeSet;

use crate::catalog::{build_catalog, Catalog, NodeId};
use crate::host::{EditHost, HostResult};
use crate::models::{RenderPreset, Timeline};
use crate::render::submit_renders;

/// A user-triggered event, as translated by the UI adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The raw tree selection changed; carries every selected node id.
    SelectionChanged(BTreeSet<NodeId>),
    /// The submit button was clicked with the current widget state.
    SubmitRequested {
        /// Index into [`ExportController::preset_names`].
        preset_index: usize,
        /// State of the "cut off slate" checkbox.
        cut_off_slate: bool,
    },
    /// The window was closed.
    WindowClosed,
}

/// What the adapter should do after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Mark exactly these leaf ids selected in the tree.
    MarkSelected(BTreeSet<NodeId>),
    /// Jobs were handed to the host's render queue.
    Submitted { jobs: usize },
    /// Tear down the window and stop the event loop.
    Exit,
}

/// Session state behind the exporter window.
///
/// Built once at window open: snapshots the project, builds the catalog and
/// the preset dropdown list, then serves events until the window closes.
/// The host session is held by value; there is no global.
pub struct ExportController<H: EditHost> {
    host: H,
    catalog: Catalog,
    timelines: Vec<Timeline>,
    presets: Vec<String>,
    selection: BTreeSet<NodeId>,
}

impl<H: EditHost> ExportController<H> {
    /// Snapshot the project and build the selection view.
    pub fn new(host: H) -> HostResult<Self> {
        let timelines = host.timelines()?;
        let media_root = host.media_root()?;
        let catalog = build_catalog(&media_root, &timelines);

        let mut presets = vec![RenderPreset::CURRENT_SETTINGS_LABEL.to_string()];
        presets.extend(host.render_preset_names()?);

        tracing::info!(
            timelines = timelines.len(),
            presets = presets.len(),
            "exporter ready"
        );

        Ok(Self {
            host,
            catalog,
            timelines,
            presets,
            selection: BTreeSet::new(),
        })
    }

    /// The pruned catalog to display.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Dropdown labels: "Current Settings" followed by the host's presets.
    pub fn preset_names(&self) -> &[String] {
        &self.presets
    }

    /// The current normalized selection (timeline leaves only).
    pub fn selection(&self) -> &BTreeSet<NodeId> {
        &self.selection
    }

    /// The host session.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Preset choice at a dropdown index; out of range falls back to
    /// current settings.
    pub fn preset_at(&self, index: usize) -> RenderPreset {
        self.presets
            .get(index)
            .map(|label| RenderPreset::from_label(label))
            .unwrap_or_default()
    }

    /// Handle one user event to completion.
    pub fn handle_event(&mut self, event: UiEvent) -> HostResult<EventOutcome> {
        match event {
            UiEvent::SelectionChanged(raw) => {
                self.selection = self.catalog.normalize_selection(&raw);
                Ok(EventOutcome::MarkSelected(self.selection.clone()))
            }
            UiEvent::SubmitRequested {
                preset_index,
                cut_off_slate,
            } => {
                let preset = self.preset_at(preset_index);
                let resolved = self
                    .catalog
                    .resolve_timelines(&self.selection, &self.timelines);
                submit_renders(&mut self.host, &resolved, &preset, cut_off_slate)?;
                Ok(EventOutcome::Submitted {
                    jobs: resolved.len(),
                })
            }
            UiEvent::WindowClosed => Ok(EventOutcome::Exit),
        }
    }
}
