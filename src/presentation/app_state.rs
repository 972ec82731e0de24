// Application state for HTTP handlers
use crate::application::catalog_service::CatalogService;
use crate::application::session::Session;
use crate::application::visualization_service::VisualizationService;
use crate::domain::conversation::ConversationState;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
    pub visualization_service: VisualizationService,
    pub session: Arc<Session>,
    pub state_rx: watch::Receiver<ConversationState>,
}
