//! Asset catalog locators.

mod shell;
mod walk;

pub use shell::ShellLocator;
pub use walk::WalkLocator;
