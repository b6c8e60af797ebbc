//! # pulse-gateway
//!
//! Outbound HTTP client implementing the content gateway port from
//! `pulse-core` against the remote content-management service.
//!
//! The reaction service is the only store of reaction rows, but content
//! records live in a separate subsystem. This crate does the batch-hydration
//! calls, forwarding the caller's identity headers so the remote service
//! applies its own visibility rules.

mod client;

pub use client::HttpContentGateway;
