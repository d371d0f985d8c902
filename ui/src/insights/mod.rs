//! Emission insights: backend payload, chart adaptation and the SVG view.

mod charts;
mod payload;
mod view;

pub use charts::{
    Bar, BarChartSpec, BarRect, ChartLayout, ChartTheme, TooltipBox, THEME, TOOLTIP_HEIGHT,
    Y_AXIS_TITLE,
};
pub use payload::{
    EmissionInsights, EngineEmission, FuelEmission, InsightsPayload, TopCombination,
    TransmissionEmission,
};
pub use view::{BarChart, EmissionInsightsView};

use crate::core::error::AppError;
use crate::predict::PredictionBackend;

/// Fetch insights once and adapt them to chart specs.
///
/// An incomplete payload is logged and yields no charts. Transport and HTTP
/// failures are returned to the caller.
pub async fn load_insights<B: PredictionBackend>(backend: &B) -> Result<Vec<BarChartSpec>, AppError> {
    let payload = backend.emission_insights().await?;
    match payload.validate() {
        Ok(insights) => Ok(insights.charts().into()),
        Err(AppError::IncompleteInsights { missing }) => {
            tracing::warn!(?missing, "Incomplete emission insights data");
            Ok(Vec::new())
        }
        Err(err) => Err(err),
    }
}
