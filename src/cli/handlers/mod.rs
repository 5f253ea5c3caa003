//! Command handlers for CLI operations

pub mod check;
pub mod form;
pub mod notify;

pub use check::CheckCommandHandler;
pub use form::FormCommandHandler;
pub use notify::NotifyCommandHandler;
