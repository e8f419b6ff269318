//! cb-cli library
//!
//! This module exports the HTTP client for use in tests and other crates.

pub(crate) mod client;


pub use client::{CliClientResult, Client, ClientError, FrameReader};
