//! Literal token substitution for named parameters.

/// Replace every occurrence of each token in `text` with its value.
///
/// The text is scanned once from left to right. At each position the first
/// supplied token that matches wins, so supplied order breaks ties between
/// overlapping tokens. Inserted values are never rescanned and empty tokens
/// are ignored.
pub(crate) fn substitute(text: &str, parameters: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        let matched = parameters
            .iter()
            .find(|(token, _)| !token.is_empty() && rest.starts_with(token));
        if let Some((token, value)) = matched {
            output.push_str(value);
            rest = rest.get(token.len()..).unwrap_or_default();
            continue;
        }

        let mut characters = rest.chars();
        if let Some(character) = characters.next() {
            output.push(character);
        }
        rest = characters.as_str();
    }

    output
}
