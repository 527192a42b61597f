//! Round countdown derived from the server's round-start timestamp. Remaining
//! time is recomputed from wall-clock time on every tick rather than counted
//! down locally, so a throttled or suspended tab cannot drift the clock.

use std::fmt;

/// Pad absorbing network and render latency before a round is called expired.
pub const GRACE_MS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Counting,
    Expired,
    /// Game has a winner; ticking is suspended but the last display value is
    /// kept so the clock holds steady instead of disappearing.
    Frozen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Low,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRemaining {
    /// Whole seconds until the effective end time; negative once past it.
    pub total: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeRemaining {
    pub fn from_diff_ms(diff_ms: f64) -> TimeRemaining {
        let total = (diff_ms / 1000.0).floor() as i64;
        let clamped = total.max(0);
        TimeRemaining {
            total,
            minutes: (clamped / 60) % 60,
            seconds: clamped % 60,
        }
    }

    pub fn urgency(&self) -> Urgency {
        if self.total <= 10 {
            Urgency::Critical
        } else if self.total <= 30 {
            Urgency::Low
        } else {
            Urgency::Normal
        }
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Countdown state machine. Expiration is reported exactly once per distinct
/// effective end time, no matter how many ticks land after it.
#[derive(Debug)]
pub struct CountdownClock {
    end_ms: Option<f64>,
    phase: TimerPhase,
    last: Option<TimeRemaining>,
    fired: bool,
}

impl Default for CountdownClock {
    fn default() -> Self {
        CountdownClock::new()
    }
}

impl CountdownClock {
    pub fn new() -> CountdownClock {
        CountdownClock {
            end_ms: None,
            phase: TimerPhase::Idle,
            last: None,
            fired: false,
        }
    }

    /// Point the clock at a new effective end time. A changed end time fully
    /// resets the machine (phase, last display, the fired-once latch); an
    /// unchanged one is a no-op so re-renders cannot re-arm expiration.
    pub fn retarget(&mut self, end_ms: f64) {
        if self.end_ms == Some(end_ms) {
            return;
        }
        self.end_ms = Some(end_ms);
        self.phase = TimerPhase::Counting;
        self.last = None;
        self.fired = false;
    }

    pub fn freeze(&mut self) {
        if self.phase != TimerPhase::Idle {
            self.phase = TimerPhase::Frozen;
        }
    }

    pub fn thaw(&mut self) {
        if self.phase == TimerPhase::Frozen {
            self.phase = TimerPhase::Counting;
        }
    }

    /// Recompute remaining time from the wall clock. While frozen this keeps
    /// returning the last computed value untouched.
    pub fn tick(&mut self, now_ms: f64) -> Option<TimeRemaining> {
        let end_ms = self.end_ms?;
        match self.phase {
            TimerPhase::Idle | TimerPhase::Frozen => self.last,
            TimerPhase::Counting | TimerPhase::Expired => {
                let remaining = TimeRemaining::from_diff_ms(end_ms - now_ms);
                if remaining.total < 0 {
                    self.phase = TimerPhase::Expired;
                }
                self.last = Some(remaining);
                self.last
            }
        }
    }

    /// True exactly once after the clock passes its end time.
    pub fn take_expiration(&mut self) -> bool {
        if self.phase == TimerPhase::Expired && !self.fired {
            self.fired = true;
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn last(&self) -> Option<TimeRemaining> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: f64 = 1_700_000_000_000.0;

    fn end_for(duration_ms: f64) -> f64 {
        T + duration_ms + GRACE_MS
    }

    #[test]
    fn formats_zero_padded_minutes_and_seconds() {
        let remaining = TimeRemaining::from_diff_ms(65_000.0);
        assert_eq!(remaining.to_string(), "01:05");
        let remaining = TimeRemaining::from_diff_ms(9_000.0);
        assert_eq!(remaining.to_string(), "00:09");
    }

    #[test]
    fn display_clamps_below_zero() {
        let remaining = TimeRemaining::from_diff_ms(-3_500.0);
        assert!(remaining.total < 0);
        assert_eq!(remaining.to_string(), "00:00");
    }

    #[test]
    fn urgency_thresholds() {
        assert_eq!(TimeRemaining::from_diff_ms(31_000.0).urgency(), Urgency::Normal);
        assert_eq!(TimeRemaining::from_diff_ms(30_000.0).urgency(), Urgency::Low);
        assert_eq!(TimeRemaining::from_diff_ms(10_000.0).urgency(), Urgency::Critical);
    }

    #[test]
    fn expires_once_per_end_time() {
        // 60s round, observed 61.5s after the round started: past the 1s grace.
        let mut clock = CountdownClock::new();
        clock.retarget(end_for(60_000.0));
        clock.tick(T + 61_500.0);
        assert_eq!(clock.phase(), TimerPhase::Expired);
        assert!(clock.take_expiration());
        clock.tick(T + 62_500.0);
        clock.tick(T + 63_500.0);
        assert!(!clock.take_expiration());
    }

    #[test]
    fn grace_pad_delays_expiration() {
        let mut clock = CountdownClock::new();
        clock.retarget(end_for(60_000.0));
        clock.tick(T + 60_500.0);
        assert_eq!(clock.phase(), TimerPhase::Counting);
        assert!(!clock.take_expiration());
    }

    #[test]
    fn retarget_resets_the_fired_latch() {
        let mut clock = CountdownClock::new();
        clock.retarget(end_for(1_000.0));
        clock.tick(T + 5_000.0);
        assert!(clock.take_expiration());

        // New round: a fresh end time must arm expiration again.
        clock.retarget(end_for(120_000.0));
        assert_eq!(clock.phase(), TimerPhase::Counting);
        clock.tick(T + 125_000.0);
        assert!(clock.take_expiration());
    }

    #[test]
    fn retarget_with_same_end_is_a_noop() {
        let mut clock = CountdownClock::new();
        clock.retarget(end_for(1_000.0));
        clock.tick(T + 5_000.0);
        assert!(clock.take_expiration());
        clock.retarget(end_for(1_000.0));
        clock.tick(T + 6_000.0);
        assert!(!clock.take_expiration());
    }

    #[test]
    fn frozen_clock_holds_its_last_value() {
        let mut clock = CountdownClock::new();
        clock.retarget(end_for(60_000.0));
        let before = clock.tick(T + 10_000.0);
        clock.freeze();
        let held = clock.tick(T + 200_000.0);
        assert_eq!(held, before);
        assert!(!clock.take_expiration());
    }

    #[test]
    fn thaw_resumes_counting() {
        let mut clock = CountdownClock::new();
        clock.retarget(end_for(60_000.0));
        clock.tick(T + 10_000.0);
        clock.freeze();
        clock.thaw();
        assert_eq!(clock.phase(), TimerPhase::Counting);
        clock.tick(T + 30_000.0);
        assert_eq!(clock.last().map(|r| r.total), Some(31));
    }
}
