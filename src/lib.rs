//! Taskdesk: client for a REST task-tracking backend.
//!
//! This crate lists, creates, edits and deletes task records held by a remote
//! backend, filters task lists on the client, and enforces the task status
//! workflow (`New` → `Completed` ⇄ `Resumed`) including due-date deferral.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (REST API, in-memory)
//!
//! # Modules
//!
//! - [`config`]: Backend selection resolved at startup
//! - [`task`]: Task records, status workflow, filtering and lifecycle flows

pub mod config;
pub mod task;
