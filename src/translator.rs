//! The translator facade.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use glossa_common::{Catalogue, FormatArg, RenderOptions, sprintf};
use log::warn;

use crate::arguments::{Argument, Invocation, split_trailing_options};
use crate::error::TranslateError;
use crate::resolve::{alt_key, plural_key};
use crate::substitute::substitute;

/// Resolves message keys against one catalogue and formats the result.
///
/// The translator holds nothing but its catalogue: every operation is a pure
/// query against it. Replacing the catalogue needs `&mut self`, so sharing a
/// translator across threads while swapping catalogues requires the embedder
/// to provide exclusive access, for example through a lock.
///
/// ```
/// use std::sync::Arc;
/// use glossa::{MessageCatalogue, Translator};
///
/// let mut catalogue = MessageCatalogue::new("en-GB")?;
/// catalogue.add_message("GREETING", "Hello %name%");
/// catalogue.add_message("CARS", "I have %d cars!");
/// let translator = Translator::new(Arc::new(catalogue));
///
/// assert_eq!(translator.translate("greeting", &[("%name%", "Ada")]), "Hello Ada");
/// assert_eq!(translator.format("CARS", &[3.into()])?, "I have 3 cars!");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct Translator {
    catalogue: Arc<dyn Catalogue>,
}

impl Translator {
    /// Create a translator backed by `catalogue`.
    #[must_use]
    pub const fn new(catalogue: Arc<dyn Catalogue>) -> Self {
        Self { catalogue }
    }

    /// Return the active catalogue.
    #[must_use]
    pub const fn catalogue(&self) -> &Arc<dyn Catalogue> {
        &self.catalogue
    }

    /// Replace the active catalogue.
    ///
    /// Text already returned is unaffected; subsequent lookups use the new
    /// catalogue.
    pub fn set_catalogue(&mut self, catalogue: Arc<dyn Catalogue>) -> &mut Self {
        self.catalogue = catalogue;
        self
    }

    /// Translate `key` with default render options.
    ///
    /// See [`Self::translate_with`].
    #[must_use]
    pub fn translate(&self, key: &str, parameters: &[(&str, &str)]) -> String {
        self.translate_with(key, parameters, RenderOptions::default())
    }

    /// Translate `key`, then replace each parameter token with its value.
    ///
    /// An empty key yields an empty string without consulting the catalogue.
    /// Keys the catalogue lacks come back as the key itself, rendered like any
    /// other text.
    #[must_use]
    pub fn translate_with(
        &self,
        key: &str,
        parameters: &[(&str, &str)],
        options: RenderOptions,
    ) -> String {
        if key.is_empty() {
            return String::new();
        }

        let text = self.catalogue.lookup(key, options);
        if parameters.is_empty() {
            text
        } else {
            substitute(&text, parameters)
        }
    }

    /// Translate `KEY_ALT` when defined, otherwise `key`.
    #[must_use]
    pub fn alt(&self, key: &str, alt: &str, parameters: &[(&str, &str)]) -> String {
        self.alt_with(key, alt, parameters, RenderOptions::default())
    }

    /// [`Self::alt`] with explicit render options.
    #[must_use]
    pub fn alt_with(
        &self,
        key: &str,
        alt: &str,
        parameters: &[(&str, &str)],
        options: RenderOptions,
    ) -> String {
        let resolved = alt_key(self.catalogue.as_ref(), key, alt);
        self.translate_with(&resolved, parameters, options)
    }

    /// Resolve the plural form of `key` for `count` and format it.
    ///
    /// Candidate keys are `KEY_<count>` followed by `KEY_<suffix>` for each
    /// suffix the catalogue supplies; the first defined one wins and `key`
    /// itself is the last resort. The resolved text is a template whose
    /// positional arguments are `count` followed by `args`. A trailing
    /// [`Argument::Options`] sets the render options.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Format`] when the template cannot be
    /// interpolated and [`TranslateError::MisplacedOptions`] when options are
    /// not the last argument.
    pub fn plural(
        &self,
        key: &str,
        count: i64,
        args: &[Argument],
    ) -> Result<String, TranslateError> {
        let Invocation { options, values } = split_trailing_options(args)?;
        let resolved = plural_key(self.catalogue.as_ref(), key, count);

        let mut positional = Vec::with_capacity(values.len() + 1);
        positional.push(FormatArg::Int(count));
        positional.extend(values);
        self.interpolate(&resolved, &positional, options)
    }

    /// Translate `key` and interpolate `args` into the result.
    ///
    /// A trailing [`Argument::Options`] sets the render options instead of
    /// filling a placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Format`] when the template has more
    /// placeholders than values or is malformed, and
    /// [`TranslateError::MisplacedOptions`] when options are not the last
    /// argument.
    pub fn format(&self, key: &str, args: &[Argument]) -> Result<String, TranslateError> {
        let Invocation { options, values } = split_trailing_options(args)?;
        self.interpolate(key, &values, options)
    }

    /// [`Self::format`], writing the result to standard output.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// As [`Self::format`], plus [`TranslateError::Output`] when standard
    /// output cannot be written.
    pub fn print_format(&self, key: &str, args: &[Argument]) -> Result<usize, TranslateError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.print_format_to(&mut handle, key, args)
    }

    /// [`Self::format`], writing the result to `writer`.
    ///
    /// Nothing is written when formatting fails. Returns the number of bytes
    /// written.
    ///
    /// # Errors
    ///
    /// As [`Self::format`], plus [`TranslateError::Output`] when `writer`
    /// fails.
    pub fn print_format_to<W>(
        &self,
        writer: &mut W,
        key: &str,
        args: &[Argument],
    ) -> Result<usize, TranslateError>
    where
        W: Write + ?Sized,
    {
        let text = self.format(key, args)?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(text.len())
    }

    fn interpolate(
        &self,
        key: &str,
        values: &[FormatArg],
        options: RenderOptions,
    ) -> Result<String, TranslateError> {
        let template = self.translate_with(key, &[], options);
        sprintf(&template, values).map_err(|error| {
            warn!(
                target: "glossa::translator",
                "failed to format `{key}` with {supplied} arguments: {error}",
                supplied = values.len(),
            );
            TranslateError::from(error)
        })
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Translator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_common::{FormatError, MockCatalogue};
    use mockall::Sequence;
    use mockall::predicate::{always, eq};
    use rstest::rstest;

    fn echo_catalogue() -> MockCatalogue {
        let mut catalogue = MockCatalogue::new();
        catalogue.expect_has_key().return_const(false);
        catalogue
            .expect_lookup()
            .returning(|key, _| key.to_owned());
        catalogue
            .expect_plural_suffixes()
            .returning(|_| Vec::new());
        catalogue
    }

    #[test]
    fn empty_key_never_reaches_the_catalogue() {
        let mut catalogue = MockCatalogue::new();
        catalogue.expect_lookup().never();
        let translator = Translator::new(Arc::new(catalogue));

        assert_eq!(translator.translate("", &[("%x%", "y")]), "");
    }

    #[rstest]
    #[case("Bar")]
    #[case("Some arbitrary key")]
    fn undefined_keys_come_back_unchanged(#[case] key: &str) {
        let translator = Translator::new(Arc::new(echo_catalogue()));

        assert_eq!(translator.translate(key, &[]), key);
    }

    #[test]
    fn render_options_are_forwarded_to_the_catalogue() {
        let mut catalogue = MockCatalogue::new();
        catalogue
            .expect_lookup()
            .with(eq("KEY"), eq(RenderOptions::embedded_code()))
            .times(1)
            .returning(|_, _| "escaped".to_owned());
        let translator = Translator::new(Arc::new(catalogue));

        assert_eq!(
            translator.translate_with("KEY", &[], RenderOptions::embedded_code()),
            "escaped"
        );
    }

    #[test]
    fn alt_resolves_the_compound_key_when_defined() {
        let mut catalogue = MockCatalogue::new();
        catalogue
            .expect_has_key()
            .with(eq("FOO_GOO"))
            .return_const(true);
        catalogue
            .expect_lookup()
            .with(eq("FOO_GOO"), always())
            .times(1)
            .returning(|_, _| "%description% Car".to_owned());
        let translator = Translator::new(Arc::new(catalogue));

        assert_eq!(
            translator.alt("FOO", "GOO", &[("%description%", "Green")]),
            "Green Car"
        );
    }

    #[test]
    fn plural_tries_the_exact_count_before_language_suffixes() {
        let mut catalogue = MockCatalogue::new();
        let mut sequence = Sequence::new();
        catalogue
            .expect_plural_suffixes()
            .returning(|_| vec!["MORE".to_owned()]);
        catalogue
            .expect_has_key()
            .with(eq("BAR_3"))
            .times(1)
            .in_sequence(&mut sequence)
            .return_const(true);
        catalogue
            .expect_lookup()
            .with(eq("BAR_3"), always())
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _| "exactly %d".to_owned());
        let translator = Translator::new(Arc::new(catalogue));

        let text = translator
            .plural("BAR", 3, &[])
            .unwrap_or_else(|error| panic!("plural should format: {error}"));

        assert_eq!(text, "exactly 3");
    }

    #[test]
    fn plural_passes_extra_arguments_after_the_count() {
        let mut catalogue = MockCatalogue::new();
        catalogue.expect_plural_suffixes().returning(|_| Vec::new());
        catalogue.expect_has_key().return_const(false);
        catalogue
            .expect_lookup()
            .returning(|_, _| "%d files in %s".to_owned());
        let translator = Translator::new(Arc::new(catalogue));

        let text = translator
            .plural("FILES", 2, &["docs".into()])
            .unwrap_or_else(|error| panic!("plural should format: {error}"));

        assert_eq!(text, "2 files in docs");
    }

    #[test]
    fn plural_consumes_trailing_options() {
        let mut catalogue = MockCatalogue::new();
        catalogue.expect_plural_suffixes().returning(|_| Vec::new());
        catalogue.expect_has_key().return_const(false);
        catalogue
            .expect_lookup()
            .with(eq("FILES"), eq(RenderOptions::embedded_code()))
            .times(1)
            .returning(|_, _| "%d file\\'s in %s".to_owned());
        let translator = Translator::new(Arc::new(catalogue));

        let text = translator
            .plural(
                "FILES",
                1,
                &["docs".into(), RenderOptions::embedded_code().into()],
            )
            .unwrap_or_else(|error| panic!("plural should format: {error}"));

        assert_eq!(text, "1 file\\'s in docs");
    }

    #[test]
    fn repeated_translation_is_idempotent() {
        let mut catalogue = MockCatalogue::new();
        catalogue
            .expect_lookup()
            .with(eq("GREETING"), always())
            .times(2)
            .returning(|_, _| "Hello %name%".to_owned());
        let translator = Translator::new(Arc::new(catalogue));

        let first = translator.translate("GREETING", &[("%name%", "Ada")]);
        let second = translator.translate("GREETING", &[("%name%", "Ada")]);

        assert_eq!(first, "Hello Ada");
        assert_eq!(first, second);
    }

    #[test]
    fn format_reports_missing_arguments() {
        let mut catalogue = MockCatalogue::new();
        catalogue
            .expect_lookup()
            .returning(|_, _| "I have %d cars!".to_owned());
        let translator = Translator::new(Arc::new(catalogue));

        let result = translator.format("MANY_CARS", &[]);

        assert!(matches!(
            result,
            Err(TranslateError::Format(FormatError::Arity {
                required: 1,
                supplied: 0
            }))
        ));
    }

    #[test]
    fn trailing_options_select_the_rendering() {
        let mut catalogue = MockCatalogue::new();
        catalogue
            .expect_lookup()
            .with(eq("QUOTE"), eq(RenderOptions::embedded_code()))
            .times(1)
            .returning(|_, _| "it\\'s %s".to_owned());
        let translator = Translator::new(Arc::new(catalogue));

        let text = translator
            .format("QUOTE", &["mine".into(), RenderOptions::embedded_code().into()])
            .unwrap_or_else(|error| panic!("format should succeed: {error}"));

        assert_eq!(text, "it\\'s mine");
    }

    #[test]
    fn print_format_to_writes_and_counts_bytes() {
        let mut catalogue = MockCatalogue::new();
        catalogue
            .expect_lookup()
            .returning(|_, _| "I have %d cars!".to_owned());
        let translator = Translator::new(Arc::new(catalogue));
        let mut buffer = Vec::new();

        let written = translator
            .print_format_to(&mut buffer, "MANY_CARS", &[3.into()])
            .unwrap_or_else(|error| panic!("printing should succeed: {error}"));

        assert_eq!(buffer, b"I have 3 cars!");
        assert_eq!(written, buffer.len());
    }

    #[test]
    fn failed_formatting_writes_nothing() {
        let translator = Translator::new(Arc::new(echo_catalogue()));
        let mut buffer = Vec::new();

        let result = translator.print_format_to(&mut buffer, "%s", &[]);

        assert!(result.is_err());
        assert!(buffer.is_empty());
    }

    #[test]
    fn replacing_the_catalogue_does_not_touch_earlier_results() {
        let mut first = MockCatalogue::new();
        first.expect_lookup().returning(|_, _| "first".to_owned());
        let mut second = MockCatalogue::new();
        second.expect_lookup().returning(|_, _| "second".to_owned());
        let mut translator = Translator::new(Arc::new(first));

        let before = translator.translate("KEY", &[]);
        translator.set_catalogue(Arc::new(second));
        let after = translator.translate("KEY", &[]);

        assert_eq!(before, "first");
        assert_eq!(after, "second");
    }
}
