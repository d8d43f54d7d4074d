//! Trigger detection for `@` mentions and `/` shortcuts.
//!
//! The caret is treated as sitting at the end of the buffer, so only the
//! buffer's tail is inspected. A trigger is a sigil at a word boundary
//! (buffer start or after whitespace) followed by zero or more word
//! characters running to the end of the buffer.
//!
//! ## Examples
//!
//! | Buffer        | Trigger             |
//! |---------------|---------------------|
//! | `hello @jo`   | `Mention("jo")`     |
//! | `/`           | `Shortcut("")`      |
//! | `foo@bar`     | `None`              |
//! | `@jo `        | `None`              |

/// Sigil that opens an assistant mention.
pub const MENTION_SIGIL: char = '@';

/// Sigil that opens a prompt shortcut.
pub const SHORTCUT_SIGIL: char = '/';

/// The trigger state derived from the composer buffer.
///
/// Mentions and shortcuts are mutually exclusive: the buffer tail can only
/// end in one sigil-led word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Trigger {
    /// Plain text, no suggestion panel.
    #[default]
    None,
    /// `@fragment` at the end of the buffer.
    Mention(String),
    /// `/fragment` at the end of the buffer.
    Shortcut(String),
}

impl Trigger {
    /// Returns true for `Mention` and `Shortcut`.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Classifies the tail of `buffer` as a mention, a shortcut, or neither.
///
/// # Examples
///
/// ```
/// use chatbar::composer::{Trigger, detect_trigger};
///
/// assert_eq!(detect_trigger("hello @jo"), Trigger::Mention("jo".to_string()));
/// assert_eq!(detect_trigger("/weld"), Trigger::Shortcut("weld".to_string()));
/// assert_eq!(detect_trigger("foo@bar"), Trigger::None);
/// ```
#[must_use]
pub fn detect_trigger(buffer: &str) -> Trigger {
    if let Some(fragment) = trailing_fragment(buffer, MENTION_SIGIL) {
        return Trigger::Mention(fragment.to_string());
    }
    if let Some(fragment) = trailing_fragment(buffer, SHORTCUT_SIGIL) {
        return Trigger::Shortcut(fragment.to_string());
    }
    Trigger::None
}

/// Word characters as understood by the trigger pattern: ASCII letters,
/// digits and underscore.
#[must_use]
pub const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Returns the word run after `sigil` if the buffer ends with
/// `(start|whitespace) sigil word*`.
fn trailing_fragment(buffer: &str, sigil: char) -> Option<&str> {
    // Everything before the trailing word run
    let head = buffer.trim_end_matches(is_word_char);
    let fragment = &buffer[head.len()..];

    let before_sigil = head.strip_suffix(sigil)?;

    // The sigil must sit at a word boundary
    match before_sigil.chars().next_back() {
        None => Some(fragment),
        Some(ch) if ch.is_whitespace() => Some(fragment),
        Some(_) => None,
    }
}
