//! Catalogue-level rendering applied to resolved text.
//!
//! Every catalogue renders the text it resolves through [`render`], so the
//! escaping flags carried by a resolution request behave identically whether
//! the text came from an in-memory map, a parsed file, or a decorator. The
//! translator never escapes anything itself; it forwards [`RenderOptions`]
//! to the catalogue and uses whatever comes back.

use std::borrow::Cow;

use serde::Deserialize;

/// Rendering flags attached to a resolution request.
///
/// The default leaves text unescaped and interprets backslash sequences.
///
/// ```
/// use glossa_common::RenderOptions;
///
/// let options = RenderOptions::default();
/// assert!(!options.escape_for_embedded_code);
/// assert!(options.interpret_escapes);
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Backslash-escape quotes, backslashes, and NUL so the text can be
    /// embedded in a string literal of generated script code.
    pub escape_for_embedded_code: bool,
    /// Interpret `\\`, `\t`, and `\n` sequences in the resolved text. Ignored
    /// when [`Self::escape_for_embedded_code`] is set.
    pub interpret_escapes: bool,
}

impl RenderOptions {
    /// Construct options from both flags.
    #[must_use]
    pub const fn new(escape_for_embedded_code: bool, interpret_escapes: bool) -> Self {
        Self {
            escape_for_embedded_code,
            interpret_escapes,
        }
    }

    /// Options producing text safe to embed in script source.
    #[must_use]
    pub const fn embedded_code() -> Self {
        Self::new(true, true)
    }

    /// Options returning the text exactly as stored.
    #[must_use]
    pub const fn verbatim() -> Self {
        Self::new(false, false)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(false, true)
    }
}

/// Render resolved catalogue text according to `options`.
///
/// ```
/// use glossa_common::{RenderOptions, render};
///
/// assert_eq!(render("it's", RenderOptions::embedded_code()), "it\\'s");
/// assert_eq!(render("a\\tb", RenderOptions::default()), "a\tb");
/// assert_eq!(render("a\\tb", RenderOptions::verbatim()), "a\\tb");
/// ```
#[must_use]
pub fn render(text: &str, options: RenderOptions) -> String {
    if options.escape_for_embedded_code {
        escape_for_embedded_code(text)
    } else if options.interpret_escapes {
        interpret_escapes(text).into_owned()
    } else {
        text.to_owned()
    }
}

/// Prefix `'`, `"`, and `\` with a backslash and spell NUL as `\0`.
#[must_use]
pub fn escape_for_embedded_code(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '\'' | '"' | '\\' => {
                escaped.push('\\');
                escaped.push(character);
            }
            '\0' => escaped.push_str("\\0"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Replace `\\`, `\t`, and `\n` with a backslash, TAB, and LF.
///
/// The text is scanned once from left to right, so the output of one
/// replacement is never reinterpreted. Any other backslash is kept as-is.
#[must_use]
pub fn interpret_escapes(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }

    let mut interpreted = String::with_capacity(text.len());
    let mut characters = text.chars().peekable();
    while let Some(character) = characters.next() {
        if character != '\\' {
            interpreted.push(character);
            continue;
        }

        let replacement = match characters.peek() {
            Some('\\') => Some('\\'),
            Some('t') => Some('\t'),
            Some('n') => Some('\n'),
            _ => None,
        };

        match replacement {
            Some(resolved) => {
                characters.next();
                interpreted.push(resolved);
            }
            None => interpreted.push('\\'),
        }
    }

    Cow::Owned(interpreted)
}
