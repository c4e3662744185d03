//! ByteMart+ storefront library.
//!
//! This crate provides the storefront as a library so the full router can be
//! driven from tests. The binary in `main.rs` adds error tracking and serves it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

pub use routes::app;
pub use state::AppState;
