//! Runner module for the pull request commands.
//!
//! # Architecture
//!
//! - `traits.rs` - Defines the `RunResult` returned to the binary
//! - `workspace.rs` - Defaults detected from the working directory
//! - `command.rs` - Validates configuration and dispatches to the handlers

pub mod command;
pub mod traits;
pub mod workspace;

pub use command::CommandRunner;
pub use traits::RunResult;
pub use workspace::WorkspaceDefaults;
