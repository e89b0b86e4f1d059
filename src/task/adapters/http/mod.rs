//! REST adapter for the task backend.

mod error;
mod repository;

pub use error::HttpAdapterError;
pub use repository::HttpTaskRepository;
