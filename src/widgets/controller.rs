//! Timer state machine driven by poll results
//!
//! The controller is evaluated once per poll of the device-timer widget.
//! It owns the session flags (initialization latches and the last observed
//! value) and emits commands for the tick task; it performs no I/O itself.

use crate::client::Sample;

/// Command for the timer after evaluating one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Begin (or resume) the one-second tick. `seed` carries the elapsed
    /// seconds to start from when this is the first active poll of the
    /// session; `None` resumes from the current count.
    Start { seed: Option<u64> },
    /// Cancel the tick and reset elapsed seconds to zero
    Stop,
}

/// What one evaluation of the state machine decided
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Whether the device was classified active for this poll
    pub device_active: bool,
    /// Whether the seconds display should be refreshed from the sample's
    /// context (first poll ever, and every poll while inactive)
    pub show_context_seconds: bool,
    /// Timer command, if any transition fired
    pub command: Option<TimerCommand>,
}

/// State machine of the device-activity timer widget
#[derive(Debug)]
pub struct TimerController {
    initial_seconds_displayed: bool,
    initial_seconds_captured: bool,
    running: bool,
    last_observed_value: Option<f64>,
}

impl TimerController {
    /// Create a controller in the STOPPED state with no sample observed yet
    pub fn new() -> Self {
        Self {
            initial_seconds_displayed: false,
            initial_seconds_captured: false,
            running: false,
            last_observed_value: None,
        }
    }

    /// Whether the timer is currently running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Evaluate one poll result.
    ///
    /// Transition precedence, per poll:
    /// 1. active and initial seconds not yet captured: seed the counter from
    ///    the sample's context seconds and start;
    /// 2. active and stopped: start, keeping the current count;
    /// 3. inactive: stop and reset, regardless of prior state;
    /// 4. while running, a changed value stops and resets even though the
    ///    device stays active;
    /// 5. the observed value is recorded after the rules, every poll.
    ///
    /// Rule 3 before rule 4: an inactive poll has already stopped the timer,
    /// so a simultaneous value change cannot fire rule 4 in the same poll.
    pub fn step(&mut self, sample: &Sample, device_active: bool) -> StepOutcome {
        let mut show_context_seconds = false;
        if !self.initial_seconds_displayed {
            show_context_seconds = true;
            self.initial_seconds_displayed = true;
        }
        if !device_active {
            show_context_seconds = true;
        }

        let mut command = None;
        if device_active && !self.initial_seconds_captured {
            self.initial_seconds_captured = true;
            self.running = true;
            command = Some(TimerCommand::Start {
                seed: Some(sample.context_seconds.unwrap_or(0)),
            });
        } else if device_active && !self.running {
            self.running = true;
            command = Some(TimerCommand::Start { seed: None });
        } else if !device_active {
            self.running = false;
            command = Some(TimerCommand::Stop);
        }

        if self.running {
            if let Some(last) = self.last_observed_value {
                if last != sample.value {
                    self.running = false;
                    command = Some(TimerCommand::Stop);
                }
            }
        }
        self.last_observed_value = Some(sample.value);

        StepOutcome {
            device_active,
            show_context_seconds,
            command,
        }
    }
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new()
    }
}
