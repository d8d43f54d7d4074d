//! Rendering methods for the App.
//!
//! - **Chat mode**: header, transcript, override banner, composer, footer,
//!   and the suggestion panel above the composer
//! - **Settings panel**: modal overlay drawn over the chat screen

mod chat;
mod settings;

use ratatui::Frame;

use super::{App, AppMode};

impl App {
    /// Renders the application UI.
    pub fn render(&self, frame: &mut Frame) {
        match self.mode {
            AppMode::Chat => self.render_chat(frame),
            AppMode::Settings => {
                // Chat stays visible behind the overlay
                self.render_chat(frame);
                self.render_settings(frame);
            }
        }
    }
}
