//! Core enums used throughout the application.

/// Kind of a media pool clip, as reported by the host's `Type` clip property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipKind {
    Timeline,
    Video,
    Audio,
    VideoAudio,
    Still,
    Multicam,
    Compound,
    /// Any clip type the exporter does not care about.
    Other,
}

impl ClipKind {
    /// Parse the host's `Type` clip property value.
    pub fn from_property(value: &str) -> Self {
        match value {
            "Timeline" => ClipKind::Timeline,
            "Video" => ClipKind::Video,
            "Audio" => ClipKind::Audio,
            "Video + Audio" => ClipKind::VideoAudio,
            "Still" => ClipKind::Still,
            "Multicam" => ClipKind::Multicam,
            "Compound" => ClipKind::Compound,
            _ => ClipKind::Other,
        }
    }

    /// Whether this clip is a timeline reference.
    pub fn is_timeline(&self) -> bool {
        matches!(self, ClipKind::Timeline)
    }
}

impl std::fmt::Display for ClipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipKind::Timeline => write!(f, "Timeline"),
            ClipKind::Video => write!(f, "Video"),
            ClipKind::Audio => write!(f, "Audio"),
            ClipKind::VideoAudio => write!(f, "Video + Audio"),
            ClipKind::Still => write!(f, "Still"),
            ClipKind::Multicam => write!(f, "Multicam"),
            ClipKind::Compound => write!(f, "Compound"),
            ClipKind::Other => write!(f, "Other"),
        }
    }
}

/// Render preset choice for a submission batch.
///
/// The preset dropdown always lists [`RenderPreset::CURRENT_SETTINGS_LABEL`]
/// at index 0 ahead of the host's named presets; picking it means the
/// project's currently configured render settings are used unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderPreset {
    /// Keep whatever render configuration the project already has.
    #[default]
    CurrentSettings,
    /// Load the named preset before configuring any timeline.
    Named(String),
}

impl RenderPreset {
    /// Display label of the sentinel "don't load anything" choice.
    pub const CURRENT_SETTINGS_LABEL: &'static str = "Current Settings";

    /// Build a choice from a dropdown label.
    pub fn from_label(label: &str) -> Self {
        if label == Self::CURRENT_SETTINGS_LABEL {
            RenderPreset::CurrentSettings
        } else {
            RenderPreset::Named(label.to_string())
        }
    }

    /// Display label for this choice.
    pub fn label(&self) -> &str {
        match self {
            RenderPreset::CurrentSettings => Self::CURRENT_SETTINGS_LABEL,
            RenderPreset::Named(name) => name,
        }
    }

    /// Whether this is the sentinel "use current settings" choice.
    pub fn is_current_settings(&self) -> bool {
        matches!(self, RenderPreset::CurrentSettings)
    }
}

impl std::fmt::Display for RenderPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
