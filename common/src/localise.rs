//! Language-specific hooks consulted by catalogues.
//!
//! A [`Localise`] supplies the ordered plural suffix candidates for a count
//! and a transliteration hook. Catalogues hold one per language and delegate
//! to it; the translator only ever sees the suffixes through the
//! [`Catalogue`](crate::Catalogue) contract.

/// Per-language pluralisation and transliteration rules.
///
/// Both methods have defaults matching a language with no special rules: the
/// count itself is the only suffix candidate and transliteration leaves the
/// text untouched.
///
/// ```
/// use glossa_common::Localise;
///
/// struct ZeroOneMore;
///
/// impl Localise for ZeroOneMore {
///     fn plural_suffixes(&self, count: i64) -> Vec<String> {
///         match count {
///             0 => vec!["0".into()],
///             1 => vec!["1".into()],
///             _ => vec!["MORE".into()],
///         }
///     }
/// }
///
/// assert_eq!(ZeroOneMore.plural_suffixes(7), vec!["MORE".to_string()]);
/// assert_eq!(ZeroOneMore.transliterate("café"), "café");
/// ```
pub trait Localise: Send + Sync {
    /// Candidate key suffixes for `count`, most specific first.
    fn plural_suffixes(&self, count: i64) -> Vec<String> {
        vec![count.to_string()]
    }

    /// Transliterate `text` into a restricted character set.
    fn transliterate(&self, text: &str) -> String {
        text.to_owned()
    }
}

/// Localise implementation using the trait defaults.
///
/// Suitable for languages such as `en-GB` whose catalogues define exact-count
/// keys only.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DefaultLocalise;

impl Localise for DefaultLocalise {}
