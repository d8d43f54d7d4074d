//! Custom TUI widgets.

pub mod suggestion_popup;
pub mod transcript;

pub use suggestion_popup::{MAX_SUGGESTION_POPUP_ROWS, SuggestionPopup};
pub use transcript::{
    MAX_TRANSCRIPT_LINES, TranscriptLine, TranscriptLineKind, TranscriptWidget,
    calculate_visual_line_count,
};
