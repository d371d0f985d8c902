//! Vehicle prediction: form model, backend client and the controllers feeding the gauges.

mod backend;
pub mod catalog;
mod controller;
mod form;
mod result;
mod view;

pub use backend::{HttpBackend, PredictionBackend};
pub use controller::{
    reset_prediction, submit_prediction, LoadingGuard, LoadingIndicator, SubmitOutcome,
};
pub use form::VehicleForm;
pub use result::{MetricResult, MetricValue, NOT_APPLICABLE};
pub use view::PredictorView;

#[cfg(test)]
pub(crate) use controller::testing;
