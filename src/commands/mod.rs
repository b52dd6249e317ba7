//! Command handlers for the securefile CLI.

mod config_cmd;
mod edit;
mod inspect;
mod manage;

pub use config_cmd::handle_config;
pub use edit::{EditOutcome, handle_edit};
pub use inspect::{handle_bits, handle_check, handle_size};
pub use manage::{handle_clone, handle_create, handle_remove, handle_secure};
