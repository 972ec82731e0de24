// HTTP request handlers - the tool boundary and the state surface
use crate::application::error::ToolResult;
use crate::application::visualization_service::PlotSignalRequest;
use crate::domain::conversation::ConversationState;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Json, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::{Stream, StreamExt};
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::wrappers::WatchStream;

#[derive(Deserialize)]
pub struct SignalTypesRequest {
    pub tool_call_id: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Catalog tool: signal name -> {description, unit, cases}.
/// Always answers with a ToolResult, failures included.
pub async fn signal_types(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignalTypesRequest>,
) -> Json<ToolResult> {
    Json(state.catalog_service.signal_catalog(request.tool_call_id).await)
}

/// Plot tool: resolve, fetch, render, and (for interactive plots) merge
/// into conversation state.
pub async fn plot_signal(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlotSignalRequest>,
) -> Json<ToolResult> {
    Json(state.visualization_service.plot_signal(request).await)
}

/// Current conversation state snapshot for the rendering surface.
pub async fn conversation_state(State(state): State<Arc<AppState>>) -> Json<ConversationState> {
    Json(state.session.snapshot().await)
}

/// Push every state change to the rendering surface as server-sent events.
pub async fn stream_conversation_state(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = WatchStream::new(state.state_rx.clone()).map(|snapshot| {
        let event = Event::default().json_data(&snapshot).unwrap_or_else(|e| {
            tracing::error!("failed to serialize conversation state: {e}");
            Event::default().data("{}")
        });
        Ok(event)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
