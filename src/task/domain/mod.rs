//! Domain model for task tracking.
//!
//! The task record, its status workflow and the list filter are pure domain
//! logic; repository access stays outside of the domain boundary.

mod category;
pub mod dates;
mod error;
pub mod filter;
mod ids;
mod status;
mod task;
pub mod workflow;

pub use category::{Category, default_due_offset};
pub use error::{ParseCategoryError, ParseTaskStatusError, TaskDomainError};
pub use filter::{FilterCriteria, FilterInputs, filter_tasks};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{MAX_DESCRIPTION_LENGTH, PersistedTaskData, Task, TaskDetails, TaskDraft};
pub use workflow::{
    EditTaskForm, FieldAvailability, FormField, allowed_next_statuses, default_due_date,
    deferral_enabled, field_availability, plan_edit, resolve_due_date,
};
