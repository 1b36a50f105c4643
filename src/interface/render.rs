//! Log-only renderer, used by the headless driver

use crate::application::view::{ControlsRenderer, ControlsView};
use tracing::info;

/// Renders the in-call controls as a log line
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRenderer;

impl TracingRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn describe(view: &ControlsView) -> String {
        let mut enabled = Vec::new();
        let matrix = &view.enabled;
        for (name, on) in [
            ("mute", matrix.mute),
            ("speaker", matrix.speaker),
            ("bluetooth", matrix.bluetooth),
            ("dialpad", matrix.dialpad),
            ("clear_call", matrix.clear_call),
            ("add_call", matrix.add_call),
        ] {
            if on {
                enabled.push(name);
            }
        }

        format!(
            "mode={:?} locker={} buttons={} enabled=[{}] mute={} speaker={} bluetooth={}",
            view.mode,
            view.locker_visible,
            view.buttons_visible,
            enabled.join(","),
            view.mute_checked,
            view.speaker_checked,
            view.bluetooth_checked
        )
    }
}

impl ControlsRenderer for TracingRenderer {
    fn render(&self, view: &ControlsView) {
        info!("In-call controls: {}", Self::describe(view));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_initial_view() {
        let view = ControlsView::initial(true);
        assert_eq!(
            TracingRenderer::describe(&view),
            "mode=NoAction locker=false buttons=false enabled=[add_call] mute=false speaker=false bluetooth=false"
        );
    }
}
