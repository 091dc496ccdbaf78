//! Translator configuration loaded from TOML.
//!
//! Configuration selects the language of the initial catalogue, whether
//! lookups are wrapped in the debug decorator, and the default render options
//! applications pass to the `_with` operations. It is applied when the
//! translator is built; the translator itself never stores it.
//!
//! ```toml
//! [language]
//! default = "en-GB"
//! debug = false
//!
//! [rendering]
//! escape_for_embedded_code = false
//! interpret_escapes = true
//! ```

use std::fs;
use std::sync::Arc;

use camino::Utf8Path;
use glossa_common::{Catalogue, DebugCatalogue, FALLBACK_LANGUAGE, MessageCatalogue, RenderOptions};
use log::debug;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::translator::Translator;

/// Settings applied when building a [`Translator`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TranslatorConfig {
    /// Language selection and debugging.
    pub language: LanguageConfig,
    /// Render options for lookups that do not specify their own.
    pub rendering: RenderOptions,
}

/// The `[language]` table.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LanguageConfig {
    /// Tag of the language used for the initial catalogue.
    ///
    /// Whitespace is trimmed and blank values are ignored, so `default = ""`
    /// selects the bundled fallback language.
    pub default: Option<String>,
    /// Mark resolved text and record orphan keys.
    pub debug: bool,
}

impl TranslatorConfig {
    /// Parse configuration from TOML text.
    ///
    /// ```
    /// use glossa::TranslatorConfig;
    ///
    /// let config = TranslatorConfig::from_toml_str("[language]\ndefault = \"cy\"\n")?;
    /// assert_eq!(config.default_language(), "cy");
    /// # Ok::<(), glossa::ConfigError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |file| {
            fs::read_to_string(file).map_err(|source| ConfigError::Read {
                path: file.to_path_buf(),
                source,
            })
        })
    }

    /// Load configuration for `path` using the supplied reader.
    ///
    /// This exists so tests can supply configuration text without touching
    /// the file system.
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use glossa::TranslatorConfig;
    ///
    /// let config = TranslatorConfig::load_with(Utf8Path::new("glossa.toml"), |_| {
    ///     Ok("[language]\ndebug = true\n".to_owned())
    /// })?;
    /// assert!(config.language.debug);
    /// # Ok::<(), glossa::ConfigError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates the reader's error, or [`ConfigError::Parse`] when the text
    /// is invalid.
    pub fn load_with<F>(path: &Utf8Path, reader: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&Utf8Path) -> Result<String, ConfigError>,
    {
        let source = reader(path)?;
        let config = Self::from_toml_str(&source)?;
        debug!(target: "glossa::config", "loaded translator configuration from {path}");
        Ok(config)
    }

    /// The configured language tag, or the fallback language.
    #[must_use]
    pub fn default_language(&self) -> &str {
        self.language
            .default
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .unwrap_or(FALLBACK_LANGUAGE)
    }

    /// Render options for lookups that do not specify their own.
    #[must_use]
    pub const fn render_options(&self) -> RenderOptions {
        self.rendering
    }

    /// An empty catalogue for [`Self::default_language`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Catalogue`] when the language tag is invalid.
    pub fn empty_catalogue(&self) -> Result<MessageCatalogue, ConfigError> {
        Ok(MessageCatalogue::new(self.default_language())?)
    }

    /// Build a translator over `catalogue`, decorated for debugging when
    /// `[language] debug` is set.
    #[must_use]
    pub fn build_translator(&self, catalogue: Arc<dyn Catalogue>) -> Translator {
        if self.language.debug {
            Translator::new(Arc::new(DebugCatalogue::new(catalogue)))
        } else {
            Translator::new(catalogue)
        }
    }
}
