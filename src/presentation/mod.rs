// Presentation layer - HTTP surface for tools and the rendering surface
pub mod app_state;
pub mod handlers;
