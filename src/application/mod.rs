// Application layer - Use cases and ports around the tool pipeline
pub mod catalog_repository;
pub mod catalog_service;
pub mod error;
pub mod renderer;
pub mod resolver;
pub mod session;
pub mod timeseries_client;
pub mod visualization_service;

#[cfg(test)]
pub mod test_support;
