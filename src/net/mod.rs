//! Networking modules for the admin API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the authenticated request core (bearer attach, 401 recovery),
//! `api` exposes the typed endpoint calls, `types` defines the wire schema,
//! and `error` the failure type callers see.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
