//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogfront")]
#[command(version)]
#[command(about = "Read, bookmark and comment on blog posts from the terminal", long_about = None)]
pub struct Cli {
    /// API origin (overrides config and BLOGFRONT_API_ORIGIN)
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List posts, featured first
    Posts,
    /// Show one post and its comments
    Post {
        /// Post id
        id: String,
    },
    /// Bookmark a post for the signed-in user
    Bookmark {
        post_id: String,
        /// Remove the bookmark instead
        #[arg(long)]
        remove: bool,
    },
    /// Comment on a post
    Comment { post_id: String, text: String },
    /// Sign in (password is prompted)
    Login { username: String },
    /// Create an account (password is prompted)
    Signup { name: String, username: String },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
}
