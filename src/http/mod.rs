//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one request per connection, only the
//! request line is read, and every connection is closed after its response.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine and byte-level send/receive
//! - **`buffer`**: Fixed-capacity receive buffer
//! - **`parser`**: Parses the request line into a [`request::Request`]
//! - **`request`**: Method and path types
//! - **`response`**: Status codes and response heads
//! - **`writer`**: Serializes heads and writes the fixed status-only responses
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │  Accepted   │──── read error ──────┐
//!        └──────┬──────┘                      │
//!               │ one read (≤ buffer capacity)│
//!               ▼                             │
//!        ┌─────────────┐                      │
//!        │  Received   │──── parse error ─────┤
//!        └──────┬──────┘                      │
//!               │ request line parsed         │
//!               ▼                             │
//!        ┌─────────────┐                      │
//!        │   Parsed    │                      │
//!        └──────┬──────┘                      │
//!               │ dispatched to a handler     │
//!               ▼                             │
//!        ┌─────────────┐                      │
//!        │  Responded  │                      │
//!        └──────┬──────┘                      │
//!               ▼                             ▼
//!        ┌──────────────────────────────────────┐
//!        │        Closing → Closed              │
//!        └──────────────────────────────────────┘
//! ```

pub mod buffer;
pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
