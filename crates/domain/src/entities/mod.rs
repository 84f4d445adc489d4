//! Homework entities: the static templates and their per-character instances

pub mod task_instance;
pub mod task_template;

pub use task_instance::{TaskInstance, TaskProgress};
pub use task_template::{TaskTemplate, TemplateCatalog};
