use std::borrow::Cow;

/// A positional value consumed by one conversion in a template.
///
/// Values are coerced loosely to whatever the conversion asks for: strings
/// contribute their leading number to numeric conversions, floats truncate
/// toward zero for integer conversions, and every value has a text form.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatArg {
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating-point number.
    Float(f64),
    /// Text.
    Str(String),
}

impl FormatArg {
    /// Signed integer view of the value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        match self {
            Self::Int(value) => *value,
            Self::UInt(value) => i64::try_from(*value).unwrap_or(i64::MAX),
            // Saturating conversion; NaN becomes zero.
            Self::Float(value) => *value as i64,
            Self::Str(text) => numeric_prefix(text).map_or(0, |(digits, plain)| {
                let exact = if plain { digits.parse().ok() } else { None };
                exact.unwrap_or_else(|| digits.parse::<f64>().map_or(0, |number| number as i64))
            }),
        }
    }

    /// Unsigned integer view of the value.
    ///
    /// Negative integers are reinterpreted as their two's complement bit
    /// pattern, so `-1` becomes `u64::MAX`.
    #[must_use]
    pub fn as_u64(&self) -> u64 {
        match self {
            Self::UInt(value) => *value,
            Self::Str(text) => match numeric_prefix(text) {
                Some((digits, true)) => digits
                    .trim_start_matches('+')
                    .parse::<u64>()
                    .unwrap_or_else(|_| self.as_i64() as u64),
                _ => self.as_i64() as u64,
            },
            Self::Int(_) | Self::Float(_) => self.as_i64() as u64,
        }
    }

    /// Floating-point view of the value.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(value) => *value as f64,
            Self::UInt(value) => *value as f64,
            Self::Float(value) => *value,
            Self::Str(text) => leading_number(text).unwrap_or(0.0),
        }
    }

    /// Text view of the value.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Int(value) => Cow::Owned(value.to_string()),
            Self::UInt(value) => Cow::Owned(value.to_string()),
            Self::Float(value) => Cow::Owned(value.to_string()),
            Self::Str(text) => Cow::Borrowed(text.as_str()),
        }
    }
}

/// Parse the longest numeric prefix of `text` after leading whitespace.
///
/// Accepts an optional sign, digits, an optional fraction, and an optional
/// exponent, so `"12 apples"` yields `12.0` and `"1e3x"` yields `1000.0`.
fn leading_number(text: &str) -> Option<f64> {
    numeric_prefix(text)?.0.parse().ok()
}

/// The longest numeric prefix of `text` after leading whitespace, flagged
/// `true` when it is a plain integer with no fraction or exponent.
fn numeric_prefix(text: &str) -> Option<(&str, bool)> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .iter()
            .skip(start)
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integral = digits_from(end);
    end += integral;

    let mut fractional = 0;
    let mut plain = true;
    if bytes.get(end) == Some(&b'.') {
        fractional = digits_from(end + 1);
        if integral > 0 || fractional > 0 {
            end += 1 + fractional;
            plain = false;
        }
    }

    if integral == 0 && fractional == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
            plain = false;
        }
    }

    Some((trimmed.get(..end)?, plain))
}

macro_rules! from_integer {
    ($variant:ident: $target:ty => $($source:ty),+) => {
        $(
            impl From<$source> for FormatArg {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

from_integer!(Int: i64 => i8, i16, i32, i64);
from_integer!(UInt: u64 => u8, u16, u32, u64);

impl From<usize> for FormatArg {
    fn from(value: usize) -> Self {
        Self::UInt(u64::try_from(value).unwrap_or(u64::MAX))
    }
}

impl From<f32> for FormatArg {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<char> for FormatArg {
    fn from(value: char) -> Self {
        Self::Str(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12 apples", Some(12.0))]
    #[case("  -3.5kg", Some(-3.5))]
    #[case("1e3x", Some(1000.0))]
    #[case(".5", Some(0.5))]
    #[case("7.", Some(7.0))]
    #[case("2e", Some(2.0))]
    #[case("abc", None)]
    #[case("-", None)]
    #[case("", None)]
    fn parses_leading_numbers(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(leading_number(input), expected);
    }

    #[rstest]
    #[case(FormatArg::Int(-7), -7)]
    #[case(FormatArg::UInt(u64::MAX), i64::MAX)]
    #[case(FormatArg::Float(3.9), 3)]
    #[case(FormatArg::Float(-3.9), -3)]
    #[case(FormatArg::from("42 items"), 42)]
    #[case(FormatArg::from("none"), 0)]
    #[case(FormatArg::from("9007199254740993"), 9_007_199_254_740_993)]
    #[case(FormatArg::from("-9223372036854775808 below"), i64::MIN)]
    #[case(FormatArg::from("99999999999999999999"), i64::MAX)]
    #[case(FormatArg::from("2.5e3"), 2500)]
    fn coerces_to_signed(#[case] value: FormatArg, #[case] expected: i64) {
        assert_eq!(value.as_i64(), expected);
    }

    #[test]
    fn negative_values_wrap_when_unsigned() {
        assert_eq!(FormatArg::Int(-1).as_u64(), u64::MAX);
        assert_eq!(FormatArg::from("18446744073709551615").as_u64(), u64::MAX);
        assert_eq!(FormatArg::from("-1").as_u64(), u64::MAX);
        assert_eq!(
            FormatArg::from("18446744073709551614 left").as_u64(),
            u64::MAX - 1
        );
    }

    #[test]
    fn text_view_of_numbers() {
        assert_eq!(FormatArg::Float(1.5).as_text(), "1.5");
        assert_eq!(FormatArg::Float(2.0).as_text(), "2");
        assert_eq!(FormatArg::from(3_u8).as_text(), "3");
        assert_eq!(FormatArg::from('x').as_text(), "x");
    }
}
