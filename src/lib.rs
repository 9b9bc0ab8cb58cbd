// Infrastructure layer (shared components)
pub mod config;
pub mod error;

// Domain layer (business logic)
pub mod backend;
pub mod render;

// Application layer
pub mod api;
pub mod server;
