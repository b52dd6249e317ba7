//! Utility functions shared across the application.

mod editor;
mod error;
mod hash;
pub(crate) mod permissions;

pub use editor::open_in_editor;
pub use error::{exit_code, format_error};
pub use hash::content_hash;
pub use permissions::restrict_file_permissions;
