//! Gauges on the predictor page and the pipeline that keeps them in sync.

mod animate;
mod board;
mod pipeline;
mod registry;
mod ring;
mod transition;
mod view;

pub use animate::{interpolate, progress, AnimationRun, RunOutcome};
pub use board::{
    Generation, NumberState, RingState, SlotBoard, SlotError, SlotState, SlotSurface, TextState,
};
pub use pipeline::{update_ring, RenderCycle, RenderPipeline};
pub use registry::{SlotKind, SlotRegistry, SlotSpec, STANDARD_SLOTS};
pub use ring::{clamp_percentage, percentage_of, ring_offset, CIRCUMFERENCE};
pub use transition::ReplayEpoch;
pub use view::{AnimatedReadout, RingGauge, TextReadout};

#[cfg(test)]
pub(crate) use animate::testing;
