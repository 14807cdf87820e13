//! Owl console access service library crate.
//!
//! # Purpose
//! Exposes the console API surface, configuration, observability and the
//! snapshot store for use by the binary and tests.
//!
//! # Notes
//! Authorization decisions live in `owl-authz`; this crate only identifies the
//! caller, picks the snapshot and shapes responses.
pub mod api;
pub mod app;
pub mod config;
pub mod model;
pub mod observability;
pub mod store;
