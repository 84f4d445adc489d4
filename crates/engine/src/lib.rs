//! Homework engine library.
//!
//! Owns the homework board and exposes it to a presentation layer.
//!
//! ## Structure
//!
//! - `app` - [`HomeworkApp`], the single owner of board and reset state
//! - `api/` - request dispatch and snapshot mapping for renderers
//! - `infrastructure/` - clock port and adapters, environment configuration

pub mod api;
pub mod app;
pub mod infrastructure;

pub use app::{AppError, HomeworkApp};
