//! `chatbar` - terminal chat composer with inline suggestions
//!
//! Typing `@name` offers assistants to address the next message to, and
//! `/shortcut` offers saved prompts to expand into the input. The engine in
//! [`composer`] is free of terminal types; [`app`] drives it from key events.

pub mod app;
pub mod cli;
pub mod composer;
pub mod fs;
pub mod logging;
pub mod tui;
