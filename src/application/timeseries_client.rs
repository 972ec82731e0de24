// Client trait for the remote timeseries data service
use crate::application::error::ToolError;
use crate::domain::signal::{SeriesMetadata, SeriesPoint, TimeWindow};
use async_trait::async_trait;
use serde::Deserialize;

/// Success body of the data service: the exact ordered series plus its
/// available bounds. This layer never resamples or drops points.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesResponse {
    pub timeseries: Vec<SeriesPoint>,
    pub metadata: SeriesMetadata,
}

#[async_trait]
pub trait TimeseriesClient: Send + Sync {
    /// Fetch the series for one signal, bounded by `window` where bounds
    /// are present. Non-success responses surface as [`ToolError::Fetch`];
    /// no retries at this layer.
    async fn fetch_series(
        &self,
        signal_id: i64,
        window: &TimeWindow,
    ) -> Result<SeriesResponse, ToolError>;
}
