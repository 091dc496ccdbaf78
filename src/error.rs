//! Error types for translation and configuration.
//!
//! Missing keys are not errors: catalogues resolve them to the key itself.
//! Only formatting, argument placement, output, and configuration failures
//! surface here.

use std::io;

use camino::Utf8PathBuf;
use glossa_common::{CatalogueError, FormatError};
use thiserror::Error;

/// Errors raised by the value-returning and printing translator operations.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The resolved template could not be interpolated, for example because
    /// it has more placeholders than positional arguments were supplied.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Render options were passed somewhere other than the trailing slot.
    #[error("render options must be the last argument, found them at position {position}")]
    MisplacedOptions {
        /// Zero-based position of the offending argument.
        position: usize,
    },

    /// Writing the formatted text failed.
    #[error("failed to write formatted text: {0}")]
    Output(#[from] io::Error),
}

/// Errors raised while loading translator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration from {path}: {source}")]
    Read {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid TOML or contains unknown keys.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configured language could not be used to create a catalogue.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}
