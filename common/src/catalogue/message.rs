//! In-memory catalogue with case-insensitive keys and a fallback chain.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use unic_langid::LanguageIdentifier;

use super::{Catalogue, CatalogueError};
use crate::localise::{DefaultLocalise, Localise};
use crate::render::{RenderOptions, render};

/// Messages for one language held in memory.
///
/// Keys are matched case-insensitively by storing and querying them in upper
/// case. When a key is not defined locally the optional fallback catalogue is
/// consulted, and so on along its own chain.
///
/// ```
/// use glossa_common::{Catalogue, MessageCatalogue, RenderOptions};
///
/// let mut catalogue = MessageCatalogue::new("en-GB")?;
/// catalogue.add_message("greeting", "Hello");
///
/// assert!(catalogue.has_key("GREETING"));
/// assert_eq!(catalogue.lookup("Greeting", RenderOptions::default()), "Hello");
/// assert_eq!(catalogue.lookup("missing", RenderOptions::default()), "missing");
/// # Ok::<(), glossa_common::CatalogueError>(())
/// ```
#[derive(Clone)]
pub struct MessageCatalogue {
    language: LanguageIdentifier,
    messages: HashMap<String, String>,
    localise: Arc<dyn Localise>,
    fallback: Option<Arc<MessageCatalogue>>,
}

impl MessageCatalogue {
    /// Create an empty catalogue for the language tag `language`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::InvalidLanguage`] when the tag cannot be
    /// parsed.
    pub fn new(language: &str) -> Result<Self, CatalogueError> {
        let identifier = LanguageIdentifier::from_str(language.trim()).map_err(|_| {
            CatalogueError::InvalidLanguage {
                tag: language.to_owned(),
            }
        })?;

        Ok(Self::for_language(identifier))
    }

    /// Create an empty catalogue for an already parsed language identifier.
    #[must_use]
    pub fn for_language(language: LanguageIdentifier) -> Self {
        Self {
            language,
            messages: HashMap::new(),
            localise: Arc::new(DefaultLocalise),
            fallback: None,
        }
    }

    /// Replace the language rules used for plural suffixes and transliteration.
    #[must_use]
    pub fn with_localise(mut self, localise: impl Localise + 'static) -> Self {
        self.localise = Arc::new(localise);
        self
    }

    /// Return the catalogue's language.
    #[must_use]
    pub fn language(&self) -> &LanguageIdentifier {
        &self.language
    }

    /// Define `key`, replacing any previous text.
    pub fn add_message(&mut self, key: &str, text: impl Into<String>) {
        self.messages.insert(normalise_key(key), text.into());
    }

    /// Define every `(key, text)` pair in `messages`.
    pub fn add_messages<I, K, V>(&mut self, messages: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, text) in messages {
            self.add_message(key.as_ref(), text);
        }
    }

    /// Whether this catalogue itself defines `key`, ignoring the fallback.
    #[must_use]
    pub fn defines(&self, key: &str) -> bool {
        self.messages.contains_key(&normalise_key(key))
    }

    /// Whether `key` is defined here or anywhere along the fallback chain.
    #[must_use]
    pub fn has_message(&self, key: &str) -> bool {
        self.message(key).is_some()
    }

    /// The first definition of `key` along the fallback chain.
    #[must_use]
    pub fn message(&self, key: &str) -> Option<&str> {
        let normalised = normalise_key(key);
        let mut current = Some(self);
        while let Some(catalogue) = current {
            if let Some(text) = catalogue.messages.get(&normalised) {
                return Some(text.as_str());
            }
            current = catalogue.fallback.as_deref();
        }
        None
    }

    /// Consult `fallback` for keys this catalogue does not define.
    pub fn set_fallback(&mut self, fallback: Arc<Self>) -> &mut Self {
        self.fallback = Some(fallback);
        self
    }

    /// Return the fallback catalogue, if any.
    #[must_use]
    pub fn fallback(&self) -> Option<&Arc<Self>> {
        self.fallback.as_ref()
    }

    /// Add the messages of `other` that this catalogue does not yet define.
    ///
    /// Only the local messages of `other` are merged; its fallback chain is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::LanguageMismatch`] when `other` belongs to a
    /// different language.
    pub fn merge(&mut self, other: &Self) -> Result<(), CatalogueError> {
        if other.language != self.language {
            return Err(CatalogueError::LanguageMismatch {
                expected: self.language.to_string(),
                found: other.language.to_string(),
            });
        }

        for (key, text) in &other.messages {
            self.messages
                .entry(key.clone())
                .or_insert_with(|| text.clone());
        }
        Ok(())
    }

    /// Locally defined keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.messages.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of locally defined messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no messages are defined locally.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Transliterate `text` using the catalogue's language rules.
    #[must_use]
    pub fn transliterate(&self, text: &str) -> String {
        self.localise.transliterate(text)
    }
}

impl fmt::Debug for MessageCatalogue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MessageCatalogue")
            .field("language", &self.language)
            .field("messages", &self.messages.len())
            .field("fallback", &self.fallback.as_ref().map(|next| next.language()))
            .finish_non_exhaustive()
    }
}

impl Catalogue for MessageCatalogue {
    fn has_key(&self, key: &str) -> bool {
        self.has_message(key)
    }

    fn lookup(&self, key: &str, options: RenderOptions) -> String {
        if key.is_empty() {
            return String::new();
        }

        render(self.message(key).unwrap_or(key), options)
    }

    fn plural_suffixes(&self, count: i64) -> Vec<String> {
        self.localise.plural_suffixes(count)
    }
}

fn normalise_key(key: &str) -> String {
    key.to_ascii_uppercase()
}
