//! Adapter implementations of the task repository port.
//!
//! - [`http::HttpTaskRepository`]: REST client for the task backend
//! - [`memory::InMemoryTaskRepository`]: thread-safe in-memory storage for
//!   tests and offline use

pub mod http;
pub mod memory;
