//! # Rollcall
//!
//! A small user/item registry service with a set of demonstration HTTP
//! endpoints. The crate exposes a REST API via Axum backed by a swappable
//! repository layer.
//!
//! ## Architecture
//!
//! The crate is organized into a few logical modules:
//!
//! - [`api`]: Core domain types (users, items, typed identifiers)
//! - [`db`]: Repository pattern, storage backends, and the service layer
//! - [`http`]: Axum-based HTTP server, routes, and request handlers
//!
//! ## Storage backends
//!
//! Two repository implementations are available behind feature flags:
//!
//! - `local-repo` (default): in-memory storage for development and tests
//! - `postgres-repo`: PostgreSQL via Diesel with connection pooling and
//!   idempotent startup migrations

pub mod api;

pub mod db;

#[cfg(feature = "http-server")]
pub mod http;
