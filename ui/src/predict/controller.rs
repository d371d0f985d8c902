//! Form submission and reset controllers.
//!
//! Both hand a `MetricResult` to the render pipeline; neither touches slots
//! directly. Submission owns the loading indicator for its whole lifetime
//! through `LoadingGuard`, so the indicator is hidden on success, on failure,
//! on validation errors, and when the submission future is dropped midway.

use dioxus::prelude::*;

use crate::core::error::{AppError, ValidationError};

use super::backend::PredictionBackend;
use super::form::VehicleForm;
use super::result::MetricResult;

/// Anything that can show or hide the page's loading indicator.
pub trait LoadingIndicator {
    fn set_visible(&mut self, visible: bool);
}

impl LoadingIndicator for Signal<bool> {
    fn set_visible(&mut self, visible: bool) {
        self.set(visible);
    }
}

/// Shows the indicator on creation and hides it when dropped.
pub struct LoadingGuard<L: LoadingIndicator> {
    indicator: L,
}

impl<L: LoadingIndicator> LoadingGuard<L> {
    pub fn show(mut indicator: L) -> Self {
        indicator.set_visible(true);
        Self { indicator }
    }
}

impl<L: LoadingIndicator> Drop for LoadingGuard<L> {
    fn drop(&mut self) {
        self.indicator.set_visible(false);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected(ValidationError),
    /// The backend answered with an error or could not be reached.
    Failed(AppError),
    /// A prediction to feed into the render pipeline.
    Received(MetricResult),
}

/// Validate the form and, if it passes, request a prediction.
pub async fn submit_prediction<B, L>(form: &VehicleForm, backend: &B, loading: L) -> SubmitOutcome
where
    B: PredictionBackend,
    L: LoadingIndicator,
{
    let _loading = LoadingGuard::show(loading);

    if let Err(err) = form.validate() {
        tracing::debug!(year = %form.vehicle_year, "submission rejected");
        return SubmitOutcome::Rejected(err);
    }

    match backend.predict(form).await {
        Ok(result) => {
            tracing::info!(metrics = result.len(), "prediction received");
            SubmitOutcome::Received(result)
        }
        Err(err) => {
            tracing::error!(%err, "error in prediction");
            SubmitOutcome::Failed(err)
        }
    }
}

/// Restore the form's defaults and return the figures to display for them.
pub fn reset_prediction(form: &mut VehicleForm) -> MetricResult {
    form.reset();
    MetricResult::defaults()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::core::error::AppError;
    use crate::insights::InsightsPayload;
    use crate::predict::{MetricResult, PredictionBackend, VehicleForm};

    /// Records every visibility change.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingIndicator(pub Rc<RefCell<Vec<bool>>>);

    impl super::LoadingIndicator for RecordingIndicator {
        fn set_visible(&mut self, visible: bool) {
            self.0.borrow_mut().push(visible);
        }
    }

    /// Canned responses with a call counter.
    #[derive(Debug, Default)]
    pub struct FakeBackend {
        pub prediction: Option<Result<MetricResult, AppError>>,
        pub insights: Option<Result<InsightsPayload, AppError>>,
        pub calls: Cell<u32>,
    }

    impl PredictionBackend for FakeBackend {
        async fn predict(&self, _form: &VehicleForm) -> Result<MetricResult, AppError> {
            self.calls.set(self.calls.get() + 1);
            self.prediction
                .clone()
                .unwrap_or_else(|| Err(AppError::Network("no canned prediction".into())))
        }

        async fn emission_insights(&self) -> Result<InsightsPayload, AppError> {
            self.calls.set(self.calls.get() + 1);
            self.insights
                .clone()
                .unwrap_or_else(|| Err(AppError::Network("no canned insights".into())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FakeBackend, RecordingIndicator};
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::future::Future;

    fn form(year: &str) -> VehicleForm {
        VehicleForm {
            vehicle_year: year.into(),
            ..VehicleForm::default()
        }
    }

    #[test]
    fn out_of_range_year_never_reaches_the_network() {
        let backend = FakeBackend::default();
        let indicator = RecordingIndicator::default();

        let outcome = block_on(submit_prediction(&form("2016"), &backend, indicator.clone()));

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(ValidationError::YearOutOfRange { year: 2016 })
        );
        assert_eq!(backend.calls.get(), 0);
        assert_eq!(*indicator.0.borrow(), vec![true, false]);
    }

    #[test]
    fn success_hands_back_the_prediction() {
        let result = MetricResult::defaults().with("combined_fuel", 8.5);
        let backend = FakeBackend {
            prediction: Some(Ok(result.clone())),
            ..FakeBackend::default()
        };
        let indicator = RecordingIndicator::default();

        let outcome = block_on(submit_prediction(&form("2022"), &backend, indicator.clone()));

        assert_eq!(outcome, SubmitOutcome::Received(result));
        assert_eq!(backend.calls.get(), 1);
        assert_eq!(*indicator.0.borrow(), vec![true, false]);
    }

    #[test]
    fn http_failure_still_hides_loading() {
        let err = AppError::Http {
            context: "Prediction",
            status: 500,
            body: "boom".into(),
        };
        let backend = FakeBackend {
            prediction: Some(Err(err.clone())),
            ..FakeBackend::default()
        };
        let indicator = RecordingIndicator::default();

        let outcome = block_on(submit_prediction(&form("2020"), &backend, indicator.clone()));

        assert_eq!(outcome, SubmitOutcome::Failed(err));
        assert_eq!(*indicator.0.borrow(), vec![true, false]);
    }

    struct StalledBackend;

    impl PredictionBackend for StalledBackend {
        fn predict(
            &self,
            _form: &VehicleForm,
        ) -> impl Future<Output = Result<MetricResult, AppError>> {
            std::future::pending()
        }

        fn emission_insights(
            &self,
        ) -> impl Future<Output = Result<crate::insights::InsightsPayload, AppError>> {
            std::future::pending()
        }
    }

    #[test]
    fn dropping_an_unfinished_submission_hides_loading() {
        let indicator = RecordingIndicator::default();
        let form = form("2020");
        {
            let mut submission = Box::pin(submit_prediction(&form, &StalledBackend, indicator.clone()));
            let waker = futures::task::noop_waker();
            let mut cx = std::task::Context::from_waker(&waker);
            assert!(submission.as_mut().poll(&mut cx).is_pending());
            assert_eq!(*indicator.0.borrow(), vec![true]);
        }
        assert_eq!(*indicator.0.borrow(), vec![true, false]);
    }

    #[test]
    fn reset_restores_form_and_metrics() {
        let mut form = VehicleForm {
            vehicle_year: "2018".into(),
            make: "Honda".into(),
            transmission: "Manual".into(),
            fuel_type: "D".into(),
        };
        let result = reset_prediction(&mut form);
        assert_eq!(form, VehicleForm::default());
        assert_eq!(result, MetricResult::defaults());
    }
}
