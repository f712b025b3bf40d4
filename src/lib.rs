//! showroom - an in-memory CRUD REST API
//!
//! Two parallel resource families behind one axum router: task lists with
//! their items, and car dealers / car makes / cars. All state is volatile
//! process memory; every response uses the uniform
//! `{success, data|error}` envelope.

pub mod api;
pub mod app;
pub mod config;
pub mod model;
pub mod server;
pub mod store;
