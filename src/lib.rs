//! Runtime string translation with pluralisation and alternate-key fallback.
//!
//! A [`Translator`] resolves message keys against one [`Catalogue`]:
//!
//! - [`Translator::translate`] looks a key up and substitutes named tokens;
//! - [`Translator::alt`] prefers `KEY_ALT` and falls back to `KEY`;
//! - [`Translator::plural`] picks `KEY_<count>` or a language suffix such as
//!   `KEY_MORE` and formats the count into it;
//! - [`Translator::format`] and [`Translator::print_format`] interpolate
//!   percent-style positional arguments.
//!
//! Catalogues come from `glossa-common`; [`MessageCatalogue`] is an
//! in-memory implementation and [`DebugCatalogue`] marks resolved text to
//! expose untranslated strings. [`TranslatorConfig`] loads the initial
//! language and rendering settings from TOML.

mod arguments;
pub mod config;
mod error;
mod resolve;
mod substitute;
mod translator;

pub use arguments::Argument;
pub use config::{LanguageConfig, TranslatorConfig};
pub use error::{ConfigError, TranslateError};
pub use glossa_common::{
    Catalogue, CatalogueError, DebugCatalogue, DefaultLocalise, FALLBACK_LANGUAGE, FormatArg,
    FormatError, Localise, MessageCatalogue, RenderOptions,
};
pub use translator::Translator;
