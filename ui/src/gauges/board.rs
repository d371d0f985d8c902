//! Display state of every slot and the surface the render pipeline writes to.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use thiserror::Error;

use crate::core::format;

use super::registry::{SlotKind, SlotRegistry};
use super::ring::CIRCUMFERENCE;
use super::transition::ReplayEpoch;

/// Why a single slot was left untouched during a render cycle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlotError {
    #[error("element with id {key} not found")]
    MissingTarget { key: String },
    #[error("metric {metric} absent from result")]
    MissingMetric { metric: String },
    #[error("metric {metric} is malformed: {reason}")]
    MalformedMetric { metric: String, reason: String },
    #[error("slot {key} does not accept this kind of update")]
    KindMismatch { key: String },
}

impl SlotError {
    pub fn missing(key: &str) -> Self {
        Self::MissingTarget {
            key: key.to_string(),
        }
    }
}

/// Per-slot animation generation. Only the holder of the current token may write.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Write access to the page's visual slots.
///
/// The Dioxus page implements this on its `Signal<SlotBoard>`; tests use a bare
/// `SlotBoard` or a fake with slots removed.
pub trait SlotSurface {
    /// Reset-then-set the ring's dash offset so its fill animation replays.
    fn write_ring(&mut self, key: &str, offset: f64) -> Result<(), SlotError>;

    /// Replace a text readout, optionally restarting its appear transition.
    fn write_text(&mut self, key: &str, text: String, restart: bool) -> Result<(), SlotError>;

    /// Numeric value currently shown by an animated readout, if it parses.
    fn displayed_number(&self, key: &str) -> Result<Option<f64>, SlotError>;

    /// Claim the slot for a new animation run, superseding any run in flight.
    fn begin_animation(&mut self, key: &str) -> Result<Generation, SlotError>;

    /// Write one animation frame. Returns `false` once `token` has been superseded.
    fn commit_frame(&mut self, key: &str, token: Generation, text: String) -> bool;
}

impl<S: SlotSurface + ?Sized> SlotSurface for &mut S {
    fn write_ring(&mut self, key: &str, offset: f64) -> Result<(), SlotError> {
        (**self).write_ring(key, offset)
    }

    fn write_text(&mut self, key: &str, text: String, restart: bool) -> Result<(), SlotError> {
        (**self).write_text(key, text, restart)
    }

    fn displayed_number(&self, key: &str) -> Result<Option<f64>, SlotError> {
        (**self).displayed_number(key)
    }

    fn begin_animation(&mut self, key: &str) -> Result<Generation, SlotError> {
        (**self).begin_animation(key)
    }

    fn commit_frame(&mut self, key: &str, token: Generation, text: String) -> bool {
        (**self).commit_frame(key, token, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingState {
    pub offset: f64,
    pub replay: ReplayEpoch,
}

impl Default for RingState {
    fn default() -> Self {
        Self {
            offset: CIRCUMFERENCE,
            replay: ReplayEpoch::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberState {
    pub text: String,
    pub generation: Generation,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextState {
    pub text: String,
    pub replay: ReplayEpoch,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlotState {
    Ring(RingState),
    Number(NumberState),
    Text(TextState),
}

/// Current visual state of all mounted slots, keyed by element id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotBoard {
    slots: BTreeMap<&'static str, SlotState>,
}

impl SlotBoard {
    /// One blank slot per registry entry: empty rings and empty readouts.
    pub fn mount(registry: &SlotRegistry) -> Self {
        let slots = registry
            .iter()
            .map(|spec| {
                let state = match spec.kind {
                    SlotKind::Ring { .. } => SlotState::Ring(RingState::default()),
                    SlotKind::AnimatedNumber => SlotState::Number(NumberState::default()),
                    SlotKind::Text { .. } => SlotState::Text(TextState::default()),
                };
                (spec.key, state)
            })
            .collect();
        Self { slots }
    }

    /// Drop a slot, as if its element were missing from the page.
    pub fn unmount(&mut self, key: &str) -> Option<SlotState> {
        self.slots.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn ring(&self, key: &str) -> Option<RingState> {
        match self.slots.get(key) {
            Some(SlotState::Ring(ring)) => Some(*ring),
            _ => None,
        }
    }

    /// Text currently shown by a number or text slot.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.slots.get(key) {
            Some(SlotState::Number(number)) => Some(number.text.as_str()),
            Some(SlotState::Text(text)) => Some(text.text.as_str()),
            _ => None,
        }
    }

    pub fn text_replay(&self, key: &str) -> Option<ReplayEpoch> {
        match self.slots.get(key) {
            Some(SlotState::Text(text)) => Some(text.replay),
            _ => None,
        }
    }

    /// Set an animated readout's text outright, superseding any run in flight.
    pub fn set_number_text(&mut self, key: &str, text: String) -> Result<(), SlotError> {
        match self.slots.get_mut(key) {
            Some(SlotState::Number(number)) => {
                number.generation = number.generation.next();
                number.text = text;
                Ok(())
            }
            Some(_) => Err(SlotError::KindMismatch {
                key: key.to_string(),
            }),
            None => Err(SlotError::missing(key)),
        }
    }
}

impl SlotSurface for SlotBoard {
    fn write_ring(&mut self, key: &str, offset: f64) -> Result<(), SlotError> {
        match self.slots.get_mut(key) {
            Some(SlotState::Ring(ring)) => {
                // The remounted circle starts from the empty ring and eases to `offset`.
                ring.replay.restart();
                ring.offset = offset;
                Ok(())
            }
            Some(_) => Err(SlotError::KindMismatch {
                key: key.to_string(),
            }),
            None => Err(SlotError::missing(key)),
        }
    }

    fn write_text(&mut self, key: &str, text: String, restart: bool) -> Result<(), SlotError> {
        match self.slots.get_mut(key) {
            Some(SlotState::Text(slot)) => {
                slot.text = text;
                if restart {
                    slot.replay.restart();
                }
                Ok(())
            }
            Some(_) => Err(SlotError::KindMismatch {
                key: key.to_string(),
            }),
            None => Err(SlotError::missing(key)),
        }
    }

    fn displayed_number(&self, key: &str) -> Result<Option<f64>, SlotError> {
        match self.slots.get(key) {
            Some(SlotState::Number(number)) => Ok(format::parse_display(&number.text)),
            Some(_) => Err(SlotError::KindMismatch {
                key: key.to_string(),
            }),
            None => Err(SlotError::missing(key)),
        }
    }

    fn begin_animation(&mut self, key: &str) -> Result<Generation, SlotError> {
        match self.slots.get_mut(key) {
            Some(SlotState::Number(number)) => {
                number.generation = number.generation.next();
                Ok(number.generation)
            }
            Some(_) => Err(SlotError::KindMismatch {
                key: key.to_string(),
            }),
            None => Err(SlotError::missing(key)),
        }
    }

    fn commit_frame(&mut self, key: &str, token: Generation, text: String) -> bool {
        match self.slots.get_mut(key) {
            Some(SlotState::Number(number)) if number.generation == token => {
                number.text = text;
                true
            }
            _ => false,
        }
    }
}

impl SlotSurface for Signal<SlotBoard> {
    fn write_ring(&mut self, key: &str, offset: f64) -> Result<(), SlotError> {
        self.with_mut(|board| board.write_ring(key, offset))
    }

    fn write_text(&mut self, key: &str, text: String, restart: bool) -> Result<(), SlotError> {
        self.with_mut(|board| board.write_text(key, text, restart))
    }

    fn displayed_number(&self, key: &str) -> Result<Option<f64>, SlotError> {
        self.peek().displayed_number(key)
    }

    fn begin_animation(&mut self, key: &str) -> Result<Generation, SlotError> {
        self.with_mut(|board| board.begin_animation(key))
    }

    fn commit_frame(&mut self, key: &str, token: Generation, text: String) -> bool {
        // Superseded frames must not mark the board dirty.
        let current = matches!(
            self.peek().slots.get(key),
            Some(SlotState::Number(number)) if number.generation == token
        );
        current && self.with_mut(|board| board.commit_frame(key, token, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> SlotBoard {
        SlotBoard::mount(&SlotRegistry::standard())
    }

    #[test]
    fn mount_creates_every_registered_slot() {
        let board = board();
        assert_eq!(board.len(), SlotRegistry::standard().len());
        assert_eq!(board.ring("co2-bar"), Some(RingState::default()));
        assert_eq!(board.text("co2-tax"), Some(""));
    }

    #[test]
    fn ring_write_restarts_and_records_offset() {
        let mut board = board();
        board.write_ring("combined-ring", 120.0).unwrap();
        let first = board.ring("combined-ring").unwrap();
        board.write_ring("combined-ring", 120.0).unwrap();
        let second = board.ring("combined-ring").unwrap();
        assert_eq!(first.offset, second.offset);
        assert_ne!(first.replay, second.replay);
    }

    #[test]
    fn wrong_kind_and_missing_slots_are_reported() {
        let mut board = board();
        assert!(matches!(
            board.write_ring("co2-tax", 10.0),
            Err(SlotError::KindMismatch { .. })
        ));
        board.unmount("co2-tax");
        assert_eq!(
            board.write_text("co2-tax", "1".into(), true),
            Err(SlotError::missing("co2-tax"))
        );
    }

    #[test]
    fn stale_generation_cannot_commit() {
        let mut board = board();
        let old = board.begin_animation("city-fuel").unwrap();
        let new = board.begin_animation("city-fuel").unwrap();
        assert!(new > old);
        assert!(!board.commit_frame("city-fuel", old, "1.0".into()));
        assert!(board.commit_frame("city-fuel", new, "2.0".into()));
        assert_eq!(board.text("city-fuel"), Some("2.0"));
    }

    #[test]
    fn text_restart_is_optional() {
        let mut board = board();
        let before = board.text_replay("co2-value").unwrap();
        board.write_text("co2-value", "201.4 g/km".into(), false).unwrap();
        assert_eq!(board.text_replay("co2-value"), Some(before));
        board.write_text("co2-value", "201.4 g/km".into(), true).unwrap();
        assert_ne!(board.text_replay("co2-value"), Some(before));
    }
}
