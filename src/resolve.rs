//! Effective-key resolution for alternate and plural lookups.
//!
//! Both searches build compound keys of the form `KEY_SUFFIX` and keep the
//! first one the catalogue defines, falling back to the plain key.

use std::borrow::Cow;

use glossa_common::Catalogue;
use log::debug;

/// Join `key` and `suffix` with an underscore.
pub(crate) fn compound_key(key: &str, suffix: &str) -> String {
    format!("{key}_{suffix}")
}

/// `KEY_ALT` when the catalogue defines it, otherwise `key`.
///
/// An empty `alt` still yields the compound `KEY_`.
pub(crate) fn alt_key<'a>(catalogue: &dyn Catalogue, key: &'a str, alt: &str) -> Cow<'a, str> {
    let compound = compound_key(key, alt);
    if catalogue.has_key(&compound) {
        return Cow::Owned(compound);
    }

    debug!(
        target: "glossa::resolve",
        "alternate key `{compound}` is undefined; falling back to `{key}`",
    );
    Cow::Borrowed(key)
}

/// Plural suffix candidates for `count`, most specific first.
///
/// The count itself always comes first so an exact-count key such as
/// `KEY_3` outranks every language rule. The catalogue's suffixes follow in
/// the order given, without reordering or de-duplication.
pub(crate) fn plural_candidates(catalogue: &dyn Catalogue, count: i64) -> Vec<String> {
    let mut candidates = vec![count.to_string()];
    candidates.extend(catalogue.plural_suffixes(count));
    candidates
}

/// The first `KEY_CANDIDATE` the catalogue defines, otherwise `key`.
pub(crate) fn plural_key<'a>(catalogue: &dyn Catalogue, key: &'a str, count: i64) -> Cow<'a, str> {
    let candidates = plural_candidates(catalogue, count);
    candidates
        .iter()
        .map(|suffix| compound_key(key, suffix))
        .find(|compound| catalogue.has_key(compound))
        .map_or_else(
            || {
                debug!(
                    target: "glossa::resolve",
                    "no plural form of `{key}` for {count} (tried {candidates:?}); using the plain key",
                );
                Cow::Borrowed(key)
            },
            Cow::Owned,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_common::MockCatalogue;
    use mockall::Sequence;
    use mockall::predicate::eq;
    use rstest::rstest;

    fn catalogue_defining(
        defined: &'static [&'static str],
        suffixes: &'static [&'static str],
    ) -> MockCatalogue {
        let mut catalogue = MockCatalogue::new();
        catalogue
            .expect_has_key()
            .returning(move |key| defined.iter().any(|candidate| *candidate == key));
        catalogue
            .expect_plural_suffixes()
            .returning(move |_| suffixes.iter().map(|suffix| (*suffix).to_owned()).collect());
        catalogue
    }

    #[rstest]
    #[case("GOO", "FOO_GOO")]
    #[case("BOO", "FOO_BOO")]
    #[case("", "FOO")]
    #[case("HOO", "FOO")]
    fn alternate_key_falls_back_to_plain_key(#[case] alt: &str, #[case] expected: &str) {
        let catalogue = catalogue_defining(&["FOO", "FOO_GOO", "FOO_BOO"], &[]);

        assert_eq!(alt_key(&catalogue, "FOO", alt), expected);
    }

    #[test]
    fn empty_alternate_checks_the_trailing_underscore_key() {
        let mut catalogue = MockCatalogue::new();
        catalogue
            .expect_has_key()
            .with(eq("FOO_"))
            .times(1)
            .return_const(true);

        assert_eq!(alt_key(&catalogue, "FOO", ""), "FOO_");
    }

    #[rstest]
    #[case(0, &["0"], "BAR")]
    #[case(1, &["1"], "BAR")]
    #[case(3, &["MORE"], "BAR_MORE")]
    #[case(-2, &["MORE"], "BAR_MORE")]
    fn plural_key_uses_catalogue_suffixes(
        #[case] count: i64,
        #[case] suffixes: &'static [&'static str],
        #[case] expected: &str,
    ) {
        let catalogue = catalogue_defining(&["BAR", "BAR_MORE"], suffixes);

        assert_eq!(plural_key(&catalogue, "BAR", count), expected);
    }

    #[test]
    fn exact_count_key_outranks_language_suffixes() {
        let catalogue = catalogue_defining(&["KEY_3", "KEY_MORE"], &["MORE"]);

        assert_eq!(plural_key(&catalogue, "KEY", 3), "KEY_3");
        assert_eq!(plural_key(&catalogue, "KEY", 4), "KEY_MORE");
    }

    #[test]
    fn candidates_keep_catalogue_order_and_duplicates() {
        let catalogue = catalogue_defining(&[], &["few", "3", "few"]);

        assert_eq!(
            plural_candidates(&catalogue, 3),
            vec!["3", "few", "3", "few"]
        );
    }

    #[test]
    fn candidates_are_tried_in_order_until_one_matches() {
        let mut catalogue = MockCatalogue::new();
        let mut sequence = Sequence::new();
        catalogue
            .expect_plural_suffixes()
            .with(eq(2))
            .times(1)
            .returning(|_| vec!["TWO".to_owned(), "MORE".to_owned()]);
        for (key, defined) in [("CARS_2", false), ("CARS_TWO", true)] {
            catalogue
                .expect_has_key()
                .with(eq(key))
                .times(1)
                .in_sequence(&mut sequence)
                .return_const(defined);
        }

        assert_eq!(plural_key(&catalogue, "CARS", 2), "CARS_TWO");
    }

    #[test]
    fn empty_suffix_list_leaves_only_the_count_and_plain_key() {
        let catalogue = catalogue_defining(&["ITEMS"], &[]);

        assert_eq!(plural_candidates(&catalogue, 7), vec!["7"]);
        assert_eq!(plural_key(&catalogue, "ITEMS", 7), "ITEMS");
    }
}
