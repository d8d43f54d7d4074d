//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// `chatbar` - terminal chat composer
///
/// Type `@` to address a message to another assistant, or `/` to expand a
/// saved prompt. Assistants and prompts are read from JSON files.
#[derive(Parser, Debug, Default)]
#[command(name = "chatbar", version, about, long_about = None)]
pub struct Args {
    /// Assistant corpus (JSON array). Defaults to `.chatbar/assistants.json`
    #[arg(long, value_name = "PATH")]
    pub assistants: Option<PathBuf>,

    /// Prompt corpus (JSON array). Defaults to `.chatbar/prompts.json`
    #[arg(long, value_name = "PATH")]
    pub prompts: Option<PathBuf>,

    /// Base URL that "create new" navigation paths are joined onto
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Log at debug level (overridden by `RUST_LOG`)
    #[arg(short, long)]
    pub verbose: bool,
}
