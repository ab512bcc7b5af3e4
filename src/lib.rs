//! docserve - static file HTTP server
//!
//! Core library: request parsing, handler dispatch and file serving.

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod server;
