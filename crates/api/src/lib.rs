//! Draft & trade ownership engine server library.
//!
//! Exposes the engine, configuration, state, error handling and routes so
//! integration tests and the binary entrypoint can both access them.

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod response;
pub mod routes;
pub mod state;
