//! Transition restart.
//!
//! Browsers skip a CSS transition when a property is written with a value it
//! already holds, or when two writes land before the next style flush. A
//! widget that must visibly re-animate on every update is therefore keyed by a
//! `ReplayEpoch`: each `restart` yields a new key, the widget is remounted, and
//! its entry animation (`@keyframes` with only a `from` frame) plays again from
//! the reset state to the newly written value.

use std::fmt;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReplayEpoch(u64);

impl ReplayEpoch {
    /// Advance to a fresh epoch. Every call produces a key never seen before for this slot.
    pub fn restart(&mut self) -> Self {
        self.0 = self.0.wrapping_add(1);
        *self
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReplayEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "replay-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_always_changes_the_key() {
        let mut epoch = ReplayEpoch::default();
        let first = epoch.restart();
        let second = epoch.restart();
        assert_ne!(first, second);
        assert_ne!(first.to_string(), second.to_string());
        assert_eq!(epoch, second);
    }
}
