pub mod chat;
pub mod cook;
pub mod inventory;
pub mod middleware;
pub mod protocol;
pub mod recipes;
pub mod rest;
pub mod shopping;
pub mod state;

// Re-export the router builder so the binary only needs one import.
pub use rest::{build_router, ApiDoc};
pub use middleware::log_requests;
