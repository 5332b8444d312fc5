//! Batch render-job submission.

use crate::host::{EditHost, HostError, HostResult, RenderSettings};
use crate::models::{RenderPreset, Timeline, FRAME_RATE_KEY};

use super::frame::slate_mark_in;

/// Per-timeline render parameters, consumed immediately by the host queue.
#[derive(Debug, Clone)]
pub struct RenderRequest<'a> {
    pub preset: &'a RenderPreset,
    pub cut_off_slate: bool,
    pub timeline: &'a Timeline,
}

/// Enqueue one render job per timeline, in the given order.
///
/// A named preset is loaded exactly once before the loop; loading affects
/// the project's render configuration globally, so it happens even when
/// `timelines` is empty. No deduplication is performed. Any host failure
/// propagates immediately, leaving jobs enqueued so far in the queue.
pub fn submit_renders<H: EditHost>(
    host: &mut H,
    timelines: &[&Timeline],
    preset: &RenderPreset,
    cut_off_slate: bool,
) -> HostResult<()> {
    if let RenderPreset::Named(name) = preset {
        tracing::info!(preset = %name, "loading render preset");
        host.load_render_preset(name)?;
    }

    for timeline in timelines {
        enqueue_render(
            host,
            RenderRequest {
                preset,
                cut_off_slate,
                timeline,
            },
        )?;
    }

    Ok(())
}

/// Configure and enqueue a single render job.
///
/// The host applies render settings to its current timeline, so the context
/// switch comes first, then the frame selection, then the job.
fn enqueue_render<H: EditHost>(host: &mut H, request: RenderRequest<'_>) -> HostResult<()> {
    let timeline = request.timeline;

    host.set_current_timeline(&timeline.name)?;
    host.set_render_settings(&RenderSettings::all_frames())?;

    if request.cut_off_slate {
        let raw = timeline
            .setting(FRAME_RATE_KEY)
            .ok_or_else(|| HostError::missing_setting(&timeline.name, FRAME_RATE_KEY))?;
        let rate: f64 = raw
            .trim()
            .parse()
            .map_err(|_| HostError::invalid_setting(&timeline.name, FRAME_RATE_KEY, raw))?;

        let mark_in = slate_mark_in(rate);
        tracing::debug!(timeline = %timeline.name, rate, mark_in, "forcing in-point past slate");
        host.set_render_settings(&RenderSettings::with_mark_in(mark_in))?;
    }

    host.add_render_job()?;
    tracing::info!(timeline = %timeline.name, preset = %request.preset, "render job queued");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::{HostCall, ScriptedHost};
    use crate::models::Folder;

    fn host_with_presets() -> ScriptedHost {
        ScriptedHost::new(
            Folder::new("Master"),
            Vec::new(),
            vec!["H.264 Master".to_string(), "ProRes Proxy".to_string()],
        )
    }

    #[test]
    fn one_job_per_timeline() {
        let mut host = host_with_presets();
        let timelines = vec![
            Timeline::new("A").with_frame_rate("24"),
            Timeline::new("B").with_frame_rate("24"),
            Timeline::new("C").with_frame_rate("24"),
        ];
        let refs: Vec<&Timeline> = timelines.iter().collect();

        submit_renders(&mut host, &refs, &RenderPreset::CurrentSettings, false).unwrap();

        assert_eq!(host.jobs_enqueued(), 3);
        assert_eq!(host.presets_loaded(), 0);
    }

    #[test]
    fn named_preset_loads_once_even_for_empty_batch() {
        let mut host = host_with_presets();
        let preset = RenderPreset::Named("H.264 Master".to_string());

        submit_renders(&mut host, &[], &preset, false).unwrap();

        assert_eq!(
            host.calls,
            vec![HostCall::LoadRenderPreset("H.264 Master".to_string())]
        );
    }

    #[test]
    fn named_preset_loads_once_regardless_of_batch_size() {
        let mut host = host_with_presets();
        let timelines = vec![Timeline::new("A"), Timeline::new("B")];
        let refs: Vec<&Timeline> = timelines.iter().collect();
        let preset = RenderPreset::Named("ProRes Proxy".to_string());

        submit_renders(&mut host, &refs, &preset, false).unwrap();

        assert_eq!(host.presets_loaded(), 1);
        assert_eq!(host.jobs_enqueued(), 2);
    }

    #[test]
    fn per_timeline_call_sequence_without_slate_cut() {
        let mut host = host_with_presets();
        let timeline = Timeline::new("Reel 1").with_frame_rate("25");

        submit_renders(&mut host, &[&timeline], &RenderPreset::CurrentSettings, false).unwrap();

        assert_eq!(
            host.calls,
            vec![
                HostCall::SetCurrentTimeline("Reel 1".to_string()),
                HostCall::SetRenderSettings(RenderSettings::all_frames()),
                HostCall::AddRenderJob,
            ]
        );
    }

    #[test]
    fn slate_cut_sets_mark_in_from_frame_rate() {
        let mut host = host_with_presets();
        let timeline = Timeline::new("Reel 1").with_frame_rate("23.976");

        submit_renders(&mut host, &[&timeline], &RenderPreset::CurrentSettings, true).unwrap();

        assert_eq!(
            host.calls,
            vec![
                HostCall::SetCurrentTimeline("Reel 1".to_string()),
                HostCall::SetRenderSettings(RenderSettings::all_frames()),
                HostCall::SetRenderSettings(RenderSettings::with_mark_in(86_400)),
                HostCall::AddRenderJob,
            ]
        );
    }

    #[test]
    fn slate_cut_corrects_floored_host_rates() {
        let mut host = host_with_presets();
        let timeline = Timeline::new("Reel 1").with_frame_rate("59");

        submit_renders(&mut host, &[&timeline], &RenderPreset::CurrentSettings, true).unwrap();

        assert!(host
            .calls
            .contains(&HostCall::SetRenderSettings(RenderSettings::with_mark_in(
                216_000
            ))));
    }

    #[test]
    fn missing_frame_rate_fails_only_with_slate_cut() {
        let timeline = Timeline::new("No Rate");

        let mut host = host_with_presets();
        submit_renders(&mut host, &[&timeline], &RenderPreset::CurrentSettings, false).unwrap();

        let mut host = host_with_presets();
        let err = submit_renders(&mut host, &[&timeline], &RenderPreset::CurrentSettings, true)
            .unwrap_err();
        assert!(matches!(err, HostError::MissingSetting { .. }));
    }

    #[test]
    fn unparsable_frame_rate_is_rejected() {
        let mut host = host_with_presets();
        let timeline = Timeline::new("Bad Rate").with_frame_rate("variable");

        let err = submit_renders(&mut host, &[&timeline], &RenderPreset::CurrentSettings, true)
            .unwrap_err();
        assert!(matches!(err, HostError::InvalidSetting { .. }));
    }

    #[test]
    fn mid_batch_failure_keeps_earlier_jobs() {
        let mut host = host_with_presets();
        host.fail_add_on = Some(2);
        let timelines = vec![Timeline::new("A"), Timeline::new("B"), Timeline::new("C")];
        let refs: Vec<&Timeline> = timelines.iter().collect();

        let err = submit_renders(&mut host, &refs, &RenderPreset::CurrentSettings, false);

        assert!(err.is_err());
        // The first job stays enqueued, the third is never attempted.
        assert_eq!(host.jobs_enqueued(), 1);
        assert!(!host
            .calls
            .contains(&HostCall::SetCurrentTimeline("C".to_string())));
    }
}
