//! HTTP API Client
//!
//! Thin glue over the remote task API. Everything here returns
//! `Result<T, String>` with the error already normalized for display.

pub mod client;

pub use client::*;
