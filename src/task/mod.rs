//! Task tracking for Taskdesk.
//!
//! Tasks are held by a remote backend; this module validates and shapes them
//! on the client. Creating a task derives its due date from its category,
//! editing enforces the status workflow and due-date deferral, and listing
//! applies the client-side filter. The module follows hexagonal architecture:
//!
//! - Domain types and pure engines in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
