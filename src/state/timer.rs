//! Countdown gating the "Resend OTP" action.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

pub const RESEND_COOLDOWN_SECS: u32 = 30;

/// Whole-second countdown. `tick` is driven once per elapsed second by the
/// component that renders the OTP entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResendTimer {
    seconds_remaining: u32,
}

impl Default for ResendTimer {
    fn default() -> Self {
        Self { seconds_remaining: RESEND_COOLDOWN_SECS }
    }
}

impl ResendTimer {
    #[must_use]
    pub fn seconds_remaining(self) -> u32 {
        self.seconds_remaining
    }

    #[must_use]
    pub fn can_resend(self) -> bool {
        self.seconds_remaining == 0
    }

    /// Advance by one second. Returns `false` once the countdown is exhausted.
    pub fn tick(&mut self) -> bool {
        if self.seconds_remaining == 0 {
            return false;
        }
        self.seconds_remaining -= 1;
        true
    }

    /// Restart the countdown after a successful resend.
    pub fn reset(&mut self) {
        self.seconds_remaining = RESEND_COOLDOWN_SECS;
    }
}
