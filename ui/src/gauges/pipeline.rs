//! Render pipeline: fans one `MetricResult` out to every declared slot.

use crate::predict::MetricResult;

use super::animate::AnimationRun;
use super::board::{SlotError, SlotSurface};
use super::registry::{SlotKind, SlotRegistry, SlotSpec};
use super::ring;

/// Outcome of one render cycle.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderCycle {
    /// Slots written synchronously (rings and text) or claimed for animation.
    pub applied: Vec<&'static str>,
    /// Slots left untouched, with the reason.
    pub skipped: Vec<(&'static str, SlotError)>,
    /// Animations claimed by this cycle. Each must be driven independently.
    pub runs: Vec<AnimationRun>,
}

impl RenderCycle {
    pub fn skipped_keys(&self) -> Vec<&'static str> {
        self.skipped.iter().map(|(key, _)| *key).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPipeline {
    registry: SlotRegistry,
    animation_ms: f64,
}

impl RenderPipeline {
    pub fn new(registry: SlotRegistry, animation_ms: f64) -> Self {
        Self {
            registry,
            animation_ms,
        }
    }

    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    /// Write every slot from `result`. Failures are per slot and never abort the cycle.
    pub fn render<S: SlotSurface>(&self, result: &MetricResult, surface: &mut S) -> RenderCycle {
        let mut cycle = RenderCycle::default();
        for spec in self.registry.iter() {
            match self.apply(spec, result, surface) {
                Ok(run) => {
                    cycle.applied.push(spec.key);
                    cycle.runs.extend(run);
                }
                Err(err) => {
                    match &err {
                        SlotError::MissingTarget { .. } => {
                            tracing::error!(slot = spec.key, %err, "slot skipped")
                        }
                        _ => tracing::warn!(slot = spec.key, %err, "slot skipped"),
                    }
                    cycle.skipped.push((spec.key, err));
                }
            }
        }
        cycle
    }

    /// Write final values with no animation. Used for the initial page state.
    pub fn seed<S: SlotSurface>(&self, result: &MetricResult, surface: &mut S) -> RenderCycle {
        let mut cycle = self.render(result, surface);
        for run in cycle.runs.drain(..) {
            surface.commit_frame(run.key, run.token, run.text_at(1.0));
        }
        cycle
    }

    fn apply<S: SlotSurface>(
        &self,
        spec: &'static SlotSpec,
        result: &MetricResult,
        surface: &mut S,
    ) -> Result<Option<AnimationRun>, SlotError> {
        let value = result
            .get(spec.metric)
            .ok_or_else(|| SlotError::MissingMetric {
                metric: spec.metric.to_string(),
            })?;

        match spec.kind {
            SlotKind::Ring { max } => {
                let raw = value.as_number().ok_or_else(|| malformed(spec, "not a number"))?;
                update_ring(surface, spec.key, ring::percentage_of(raw, max))?;
                Ok(None)
            }
            SlotKind::AnimatedNumber => {
                let end = value.as_number().ok_or_else(|| malformed(spec, "not a number"))?;
                let run = AnimationRun::begin(surface, spec.key, end, self.animation_ms)?;
                tracing::debug!(slot = spec.key, from = run.start, to = end, "animating");
                Ok(Some(run))
            }
            SlotKind::Text { unit, replay } => {
                let text = value
                    .display()
                    .ok_or_else(|| malformed(spec, "not displayable"))?;
                let text = match unit {
                    Some(unit) => format!("{text} {unit}"),
                    None => text,
                };
                surface.write_text(spec.key, text, replay)?;
                Ok(None)
            }
        }
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new(
            SlotRegistry::standard(),
            crate::core::config::DEFAULT_ANIMATION_MS,
        )
    }
}

/// Clamp `percentage`, convert it to a dash offset and replay the ring's fill.
pub fn update_ring<S: SlotSurface>(
    surface: &mut S,
    key: &str,
    percentage: f64,
) -> Result<f64, SlotError> {
    let offset = ring::ring_offset(percentage).ok_or_else(|| SlotError::MalformedMetric {
        metric: key.to_string(),
        reason: format!("percentage {percentage} is not finite"),
    })?;
    tracing::debug!(slot = key, percentage, offset, "updating ring");
    surface.write_ring(key, offset)?;
    Ok(offset)
}

fn malformed(spec: &SlotSpec, reason: &str) -> SlotError {
    SlotError::MalformedMetric {
        metric: spec.metric.to_string(),
        reason: reason.to_string(),
    }
}
