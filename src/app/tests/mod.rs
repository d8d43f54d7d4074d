//! Tests for the app module.
//!
//! This module is organized into submodules by functionality:
//! - `helpers` - Shared test utilities
//! - `input` - Text input, key bindings, and paste handling
//! - `mention` - `@` assistant panel through the key handlers
//! - `persistence` - Startup loading of settings and corpora
//! - `settings` - Settings panel tests
//! - `shortcut` - `/` prompt panel through the key handlers
//! - `ui` - Rendered screen tests

#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod mention;
