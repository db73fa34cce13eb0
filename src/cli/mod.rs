//! Command-line interface.
//!
//! Every subcommand stands in for one page of the blog: it mounts the
//! corresponding view, lets it settle and prints the result.
//!
//! ```ignore
//! use blogfront::cli::{handle_command, Cli};
//!
//! let cli = Cli::parse();
//! let status = handle_command(&client, &cli.command).await?;
//! ```

pub mod args;
pub mod commands;

pub use args::{Cli, Command};
pub use commands::{handle_command, CommandStatus};
