// Visualization service - the plot tool pipeline:
// resolve -> fetch -> render -> merge, short-circuiting on failure
use crate::application::catalog_repository::CatalogRepository;
use crate::application::error::{ToolError, ToolResult};
use crate::application::renderer::render;
use crate::application::resolver::SignalResolver;
use crate::application::session::Session;
use crate::application::timeseries_client::{SeriesResponse, TimeseriesClient};
use crate::domain::artifact::{OutputFormat, RenderArtifact};
use crate::domain::conversation::{ArtifactEntry, ChatMessage};
use crate::domain::signal::{SignalIdentity, TimeWindow};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Arguments of one plot-tool invocation, as decided by the agent.
#[derive(Debug, Clone, Deserialize)]
pub struct PlotSignalRequest {
    pub tool_call_id: String,
    #[serde(default)]
    pub signal_id: Option<i64>,
    #[serde(default)]
    pub signal_name: Option<String>,
    #[serde(default)]
    pub case_name: Option<String>,
    #[serde(default)]
    pub start_time: Option<f64>,
    #[serde(default)]
    pub end_time: Option<f64>,
    #[serde(default)]
    pub format: OutputFormat,
    /// Ordered conversation log, newest last. Used to associate an
    /// interactive plot with the human message that asked for it.
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

enum ToolOutcome {
    StateDelta(ArtifactEntry),
    Payload(serde_json::Value),
}

#[derive(Clone)]
pub struct VisualizationService {
    resolver: SignalResolver,
    timeseries: Arc<dyn TimeseriesClient>,
    session: Arc<Session>,
}

impl VisualizationService {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        timeseries: Arc<dyn TimeseriesClient>,
        session: Arc<Session>,
    ) -> Self {
        Self {
            resolver: SignalResolver::new(catalog),
            timeseries,
            session,
        }
    }

    /// Run the full pipeline for one tool call. Every component error is
    /// converted into a textual failure result here; nothing propagates
    /// past the tool boundary.
    pub async fn plot_signal(&self, request: PlotSignalRequest) -> ToolResult {
        let tool_call_id = request.tool_call_id.clone();
        match self.run(&request).await {
            Ok(ToolOutcome::StateDelta(entry)) => ToolResult::StateDelta {
                tool_call_id,
                content: "Successfully fetched and plotted signal timeseries data".to_string(),
                entry,
            },
            Ok(ToolOutcome::Payload(content)) => ToolResult::Success {
                tool_call_id,
                content,
            },
            Err(err) => {
                tracing::warn!("plot tool failed: {err}");
                ToolResult::failure(tool_call_id, &err)
            }
        }
    }

    async fn run(&self, request: &PlotSignalRequest) -> Result<ToolOutcome, ToolError> {
        let signal = self
            .resolver
            .resolve(
                request.signal_id,
                request.signal_name.as_deref(),
                request.case_name.as_deref(),
            )
            .await?;
        tracing::debug!("resolved signal {} ({}/{})", signal.id, signal.name, signal.case_name);

        let window = TimeWindow {
            start: request.start_time,
            end: request.end_time,
        };
        let response = self.timeseries.fetch_series(signal.id, &window).await?;
        tracing::debug!(
            "fetched {} points for signal {}",
            response.timeseries.len(),
            signal.id
        );

        let artifact = render(&signal, &response.timeseries, request.format)?;
        match artifact {
            RenderArtifact::Interactive(plot) => {
                let entry = self
                    .session
                    .append_interactive_result(plot, &request.messages)
                    .await;
                Ok(ToolOutcome::StateDelta(entry))
            }
            RenderArtifact::Document { markup, truncated } => {
                let mut content = summary(&signal, &window, &response);
                content["plot_html"] = json!(markup);
                content["plot_html_truncated"] = json!(truncated);
                Ok(ToolOutcome::Payload(content))
            }
            RenderArtifact::Image { base64_png } => {
                let mut content = summary(&signal, &window, &response);
                content["plot_image"] = json!(base64_png);
                Ok(ToolOutcome::Payload(content))
            }
        }
    }
}

/// Common success payload for the non-interactive formats: the resolved
/// signal, the effective time range, and the point count.
fn summary(
    signal: &SignalIdentity,
    window: &TimeWindow,
    response: &SeriesResponse,
) -> serde_json::Value {
    let (min_available, max_available) = response.metadata.time_range;
    json!({
        "success": true,
        "signal": {
            "id": signal.id,
            "name": signal.name,
            "description": signal.description,
            "unit": signal.unit,
            "case": signal.case_name,
        },
        "timerange": {
            "start": window.start.unwrap_or(min_available),
            "end": window.end.unwrap_or(max_available),
            "min_available": min_available,
            "max_available": max_available,
        },
        "data_points_count": response.metadata.returned_points,
    })
}
