//! Application services for task tracking flows.

mod lifecycle;

pub use lifecycle::{
    CreateTaskRequest, DeleteOutcome, DeleteTaskRequest, EditSession, TaskLifecycleError,
    TaskLifecycleResult, TaskLifecycleService,
};
