//! Animated numeric readouts.
//!
//! A run interpolates linearly from `start` to `end` over wall-clock time,
//! measured from the timestamp of its first frame. Each run holds the slot's
//! generation token taken when it began; as soon as a newer run claims the
//! slot the older one stops writing and ends, so the latest caller always wins.

use crate::core::format;
use crate::core::timing::FrameClock;

use super::board::{Generation, SlotSurface};

/// Linear progress in `[0, 1]`. A zero or negative duration completes at once.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 || !duration_ms.is_finite() {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

pub fn interpolate(start: f64, end: f64, progress: f64) -> f64 {
    if progress >= 1.0 {
        end
    } else {
        start + progress * (end - start)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The final frame showed `end`.
    Completed,
    /// A newer run took over the slot before this one finished.
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRun {
    pub key: &'static str,
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
    pub decimals: usize,
    pub token: Generation,
}

impl AnimationRun {
    /// Claim `key` on `surface` and prepare a run from its displayed value to `end`.
    ///
    /// An unparseable display starts the count from zero.
    pub fn begin<S: SlotSurface>(
        surface: &mut S,
        key: &'static str,
        end: f64,
        duration_ms: f64,
    ) -> Result<Self, super::SlotError> {
        let start = surface.displayed_number(key)?.unwrap_or(0.0);
        let token = surface.begin_animation(key)?;
        Ok(Self {
            key,
            start,
            end,
            duration_ms,
            decimals: format::decimals_for_slot(key),
            token,
        })
    }

    pub fn text_at(&self, progress: f64) -> String {
        format::format_fixed(interpolate(self.start, self.end, progress), self.decimals)
    }

    /// Step the run once per frame until it shows `end` or is superseded.
    pub async fn drive<S, C>(self, mut surface: S, clock: C) -> RunOutcome
    where
        S: SlotSurface,
        C: FrameClock,
    {
        let started_at = clock.next_frame().await;
        let mut now = started_at;
        loop {
            let p = progress(now - started_at, self.duration_ms);
            if !surface.commit_frame(self.key, self.token, self.text_at(p)) {
                tracing::debug!(slot = self.key, "animation superseded");
                return RunOutcome::Superseded;
            }
            if p >= 1.0 {
                return RunOutcome::Completed;
            }
            now = clock.next_frame().await;
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::future::{ready, Future};

    use crate::core::timing::FrameClock;

    /// Deterministic clock advancing a fixed step per frame.
    #[derive(Debug)]
    pub struct SteppedClock {
        now: Cell<f64>,
        step: f64,
        frames: Cell<u32>,
    }

    impl SteppedClock {
        pub fn new(start: f64, step: f64) -> Self {
            Self {
                now: Cell::new(start),
                step,
                frames: Cell::new(0),
            }
        }

        pub fn frames(&self) -> u32 {
            self.frames.get()
        }
    }

    impl FrameClock for &SteppedClock {
        fn next_frame(&self) -> impl Future<Output = f64> {
            let now = self.now.get();
            self.now.set(now + self.step);
            self.frames.set(self.frames.get() + 1);
            ready(now)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::SteppedClock;
    use super::*;
    use crate::gauges::{SlotBoard, SlotRegistry};
    use futures::executor::block_on;

    fn board_showing(key: &str, text: &str) -> SlotBoard {
        let mut board = SlotBoard::mount(&SlotRegistry::standard());
        board.set_number_text(key, text.to_string()).unwrap();
        board
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(-5.0, 500.0), 0.0);
        assert_eq!(progress(250.0, 500.0), 0.5);
        assert_eq!(progress(900.0, 500.0), 1.0);
        assert_eq!(progress(0.0, 0.0), 1.0);
    }

    #[test]
    fn run_ends_exactly_on_target() {
        let mut board = board_showing("combined-fuel", "9.0");
        let run = AnimationRun::begin(&mut board, "combined-fuel", 8.5, 500.0).unwrap();
        assert_eq!(run.start, 9.0);

        let clock = SteppedClock::new(1_000.0, 16.7);
        let outcome = block_on(run.drive(&mut board, &clock));

        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(board.text("combined-fuel"), Some("8.5"));
        // 500 ms at 16.7 ms per frame, plus the first frame that fixes the origin.
        assert!(clock.frames() >= 30 && clock.frames() <= 32, "{}", clock.frames());
    }

    #[test]
    fn whole_number_slots_have_no_decimals() {
        let mut board = board_showing("combined-mpg", "31");
        let run = AnimationRun::begin(&mut board, "combined-mpg", 27.4, 500.0).unwrap();
        let clock = SteppedClock::new(0.0, 100.0);
        block_on(run.drive(&mut board, &clock));
        assert_eq!(board.text("combined-mpg"), Some("27"));
    }

    #[test]
    fn unreadable_display_counts_from_zero() {
        let mut board = board_showing("annual-fuel-cost", "—");
        let run = AnimationRun::begin(&mut board, "annual-fuel-cost", 2510.0, 500.0).unwrap();
        assert_eq!(run.start, 0.0);
        assert_eq!(run.text_at(0.5), "1255.0");
    }

    #[test]
    fn superseded_run_stops_and_latest_wins() {
        let mut board = board_showing("city-fuel", "10.7");
        let old = AnimationRun::begin(&mut board, "city-fuel", 12.0, 500.0).unwrap();
        let new = AnimationRun::begin(&mut board, "city-fuel", 6.2, 500.0).unwrap();

        let clock = SteppedClock::new(0.0, 50.0);
        assert_eq!(block_on(old.drive(&mut board, &clock)), RunOutcome::Superseded);
        assert_eq!(block_on(new.drive(&mut board, &clock)), RunOutcome::Completed);
        assert_eq!(board.text("city-fuel"), Some("6.2"));
    }

    #[test]
    fn zero_duration_writes_final_value_on_first_frame() {
        let mut board = board_showing("highway-fuel", "7.4");
        let run = AnimationRun::begin(&mut board, "highway-fuel", 5.55, 0.0).unwrap();
        let clock = SteppedClock::new(0.0, 16.0);
        assert_eq!(block_on(run.drive(&mut board, &clock)), RunOutcome::Completed);
        assert_eq!(clock.frames(), 1);
        assert_eq!(board.text("highway-fuel"), Some(format::format_fixed(5.55, 1).as_str()));
    }
}
