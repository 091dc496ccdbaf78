//! The `xx-XX` test language shared by the integration suites.

use glossa::{Localise, MessageCatalogue};

/// Plural and transliteration rules of the `xx-XX` test language.
pub struct TestLocalise;

impl Localise for TestLocalise {
    fn plural_suffixes(&self, count: i64) -> Vec<String> {
        match count {
            0 => vec!["0".to_owned()],
            1 => vec!["1".to_owned()],
            _ => vec!["MORE".to_owned()],
        }
    }

    fn transliterate(&self, text: &str) -> String {
        text.chars()
            .map(|character| match character {
                'a' => 'b',
                'c' => 'd',
                'e' => 'f',
                'g' => 'h',
                other => other,
            })
            .collect()
    }
}

/// A catalogue holding the `xx-XX` test messages.
pub fn test_catalogue() -> MessageCatalogue {
    let mut catalogue = MessageCatalogue::new("xx-XX")
        .unwrap_or_else(|error| panic!("test language should parse: {error}"))
        .with_localise(TestLocalise);
    catalogue.add_messages([
        ("FOO", "Bar"),
        ("FOO_GOO", "Car"),
        ("FOO_BOO", "%description% Car"),
        ("BAR_MORE", "%d Bars"),
        ("MANY_CARS", "I have %d cars!"),
    ]);
    catalogue
}
