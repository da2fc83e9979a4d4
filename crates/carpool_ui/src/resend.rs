//! Countdown gating how soon a new verification code may be requested. The
//! timer owns no clock: the caller ticks it once per second and drops its
//! interval on teardown.

pub const RESEND_COOLDOWN_SECS: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Counting { remaining: u32 },
    Eligible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResendTimer {
    duration: u32,
    remaining: u32,
}

impl Default for ResendTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResendTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_duration(RESEND_COOLDOWN_SECS)
    }

    #[must_use]
    pub fn with_duration(seconds: u32) -> Self {
        Self {
            duration: seconds,
            remaining: seconds,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        if self.remaining == 0 {
            TimerState::Eligible
        } else {
            TimerState::Counting {
                remaining: self.remaining,
            }
        }
    }

    #[must_use]
    pub fn can_resend(&self) -> bool {
        self.remaining == 0
    }

    /// Advances the countdown by one second. No-op once eligible.
    pub fn tick(&mut self) -> TimerState {
        self.remaining = self.remaining.saturating_sub(1);
        self.state()
    }

    pub fn restart(&mut self) {
        self.remaining = self.duration;
    }
}
