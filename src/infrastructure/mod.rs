// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_timeseries;
pub mod sqlite_catalog;
pub mod state_publisher;

