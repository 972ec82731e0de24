// Domain layer - Core models with no external dependencies
pub mod artifact;
pub mod conversation;
pub mod signal;
