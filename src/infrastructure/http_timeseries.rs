// HTTP client for the timeseries data service
use crate::application::error::ToolError;
use crate::application::timeseries_client::{SeriesResponse, TimeseriesClient};
use crate::domain::signal::TimeWindow;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpTimeseriesClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTimeseriesClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TimeseriesClient for HttpTimeseriesClient {
    async fn fetch_series(
        &self,
        signal_id: i64,
        window: &TimeWindow,
    ) -> Result<SeriesResponse, ToolError> {
        let url = format!("{}/signals/timeseries/{}", self.base_url, signal_id);

        // Bounds are passed only when present; the service defaults an
        // absent bound to the full available range.
        let mut request = self.client.get(&url);
        if let Some(start) = window.start {
            request = request.query(&[("start_time", start)]);
        }
        if let Some(end) = window.end {
            request = request.query(&[("end_time", end)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ToolError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolError::Fetch {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<SeriesResponse>()
            .await
            .map_err(|e| ToolError::Transport(e.to_string()))
    }
}
