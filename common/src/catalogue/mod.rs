//! The catalogue contract consumed by the translator.
//!
//! A [`Catalogue`] is an already-loaded key to text lookup for one language.
//! The translator needs exactly three operations from it: a presence check, a
//! rendering lookup that never fails, and the ordered plural suffix candidates
//! for a count. Anything satisfying the contract (an in-memory map, a parsed
//! file, a database view, a decorator such as [`DebugCatalogue`]) can back a
//! translator without changes to the resolution rules.
//!
//! [`MessageCatalogue`] is the bundled in-memory implementation. Loading
//! catalogues from disk is left to the embedding application.

use thiserror::Error;

use crate::render::RenderOptions;

mod debug;
mod message;

pub use debug::DebugCatalogue;
pub use message::MessageCatalogue;

/// Language tag used when no other language is configured.
pub const FALLBACK_LANGUAGE: &str = "en-GB";

/// Key to text lookup for a single language.
///
/// Implementations must be immutable from the caller's perspective: the
/// translator treats every call as a pure query.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait Catalogue: Send + Sync {
    /// Whether the catalogue defines `key`.
    fn has_key(&self, key: &str) -> bool;

    /// Resolve `key` and render it according to `options`.
    ///
    /// Returns `key` itself, rendered the same way, when the catalogue does
    /// not define it. An empty key resolves to an empty string.
    fn lookup(&self, key: &str, options: RenderOptions) -> String;

    /// Candidate key suffixes for `count`, most specific first.
    ///
    /// An empty sequence is valid and means only the plain key is eligible.
    fn plural_suffixes(&self, count: i64) -> Vec<String>;
}

/// Errors raised while assembling catalogues.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    /// The language tag could not be parsed.
    #[error("invalid language tag `{tag}`")]
    InvalidLanguage {
        /// The rejected tag.
        tag: String,
    },

    /// Two catalogues of different languages were merged.
    #[error("cannot merge `{found}` messages into a `{expected}` catalogue")]
    LanguageMismatch {
        /// Language of the receiving catalogue.
        expected: String,
        /// Language of the catalogue being merged.
        found: String,
    },
}
