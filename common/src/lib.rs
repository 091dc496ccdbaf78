//! Catalogue contract, rendering rules, and positional formatting shared by
//! the glossa translator.
//!
//! The crate deliberately knows nothing about key resolution policy: it
//! provides what a catalogue must answer and how resolved text is rendered
//! and interpolated. Enable the `test-support` feature to obtain a
//! `MockCatalogue` generated by `mockall`.

pub mod catalogue;
pub mod localise;
pub mod render;
pub mod sprintf;

#[cfg(any(test, feature = "test-support"))]
pub use catalogue::MockCatalogue;
pub use catalogue::{
    Catalogue, CatalogueError, DebugCatalogue, FALLBACK_LANGUAGE, MessageCatalogue,
};
pub use localise::{DefaultLocalise, Localise};
pub use render::{RenderOptions, escape_for_embedded_code, interpret_escapes, render};
pub use sprintf::{FormatArg, FormatError, sprintf};
