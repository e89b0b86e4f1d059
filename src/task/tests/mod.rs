//! Unit tests for the task module.
//!
//! Tests are organised by component: the record model, the status workflow
//! engine, the filter engine and the lifecycle service.

mod support;
