use input_event::KeyEvent;

use crate::{
    capture::{self, Clock, LocalClock},
    chord::{Action, ChordDetector, Verdict},
    config::{CaptureSettings, LOG_TARGET},
    display::DisplaySubsystem,
};

/// receiver of every input event the host dispatches
///
/// Called synchronously, in event order, on the host's input thread.
pub trait InputHook {
    fn on_input(&mut self, event: &KeyEvent) -> Verdict;
}

impl<F> InputHook for F
where
    F: FnMut(&KeyEvent) -> Verdict,
{
    fn on_input(&mut self, event: &KeyEvent) -> Verdict {
        self(event)
    }
}

/// input hook saving a screenshot on LOGO+P
pub struct ScreenshotHook {
    detector: ChordDetector,
    display: Box<dyn DisplaySubsystem>,
    clock: Box<dyn Clock>,
    settings: CaptureSettings,
}

impl ScreenshotHook {
    /// hook writing to the default location, timestamped with local time
    pub fn new(display: Box<dyn DisplaySubsystem>) -> Self {
        Self::with_settings(display, Box::new(LocalClock), CaptureSettings::default())
    }

    pub fn with_settings(
        display: Box<dyn DisplaySubsystem>,
        clock: Box<dyn Clock>,
        settings: CaptureSettings,
    ) -> Self {
        Self {
            detector: ChordDetector::new(),
            display,
            clock,
            settings,
        }
    }

    pub fn detector(&self) -> &ChordDetector {
        &self.detector
    }

    fn run(&self, action: Action) {
        match action {
            Action::Capture => {
                log::info!(target: LOG_TARGET, "LOGO+P detected, taking screenshot...");
                let res = capture::save_screenshot(
                    self.display.as_ref(),
                    self.clock.as_ref(),
                    &self.settings,
                );
                if let Err(e) = res {
                    log::error!(target: LOG_TARGET, "{e}");
                }
            }
        }
    }
}

impl InputHook for ScreenshotHook {
    fn on_input(&mut self, event: &KeyEvent) -> Verdict {
        let (verdict, action) = self.detector.feed(event);
        if let Some(action) = action {
            log::debug!(target: LOG_TARGET, "{event} -> {action}");
            self.run(action);
        }
        verdict
    }
}
