//! Percent-style positional formatting of resolved templates.
//!
//! Templates use `%[argnum$][flags][width][.precision]conversion` directives:
//!
//! | Part | Meaning |
//! | --- | --- |
//! | `argnum$` | one-based explicit argument; does not advance the sequential position |
//! | `-` | left-justify within the width |
//! | `+` | print `+` for non-negative numbers |
//! | `0`, space, `'c` | pad with zero, space, or `c` |
//! | `width` | minimum width in characters |
//! | `.precision` | decimals for `e`/`f`, significant digits for `g`, maximum characters for `s` |
//!
//! Conversions: `%` `b` `c` `d` `e` `E` `f` `F` `g` `G` `o` `s` `u` `x` `X`.
//! Surplus arguments are ignored; a directive without a matching argument
//! fails with [`FormatError::Arity`]. Widths and precisions above `i32::MAX`
//! are rejected, and floating-point precision is truncated to 53 digits.

use std::iter;

use thiserror::Error;

mod argument;
mod directive;

pub use argument::FormatArg;
use directive::{Conversion, Directive, Piece};

/// Most digits a floating-point conversion prints after the point.
const MAX_FLOAT_PRECISION: usize = 53;

/// Errors raised while interpolating positional arguments.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The template references more arguments than were supplied.
    #[error("template requires {required} arguments but {supplied} were supplied")]
    Arity {
        /// Number of arguments the failing directive needed.
        required: usize,
        /// Number of arguments available.
        supplied: usize,
    },

    /// A directive ends in a conversion character that is not recognised.
    #[error("unknown format specifier `{specifier}` at byte {offset}")]
    UnknownSpecifier {
        /// The unrecognised conversion character.
        specifier: char,
        /// Byte offset of the directive's `%`.
        offset: usize,
    },

    /// The template ends in the middle of a directive.
    #[error("missing format specifier for the directive at byte {offset}")]
    MissingSpecifier {
        /// Byte offset of the directive's `%`.
        offset: usize,
    },

    /// A directive requests a width above `i32::MAX`.
    #[error("format width is out of range at byte {offset}")]
    WidthOutOfRange {
        /// Byte offset of the directive's `%`.
        offset: usize,
    },

    /// A directive requests a precision above `i32::MAX`.
    #[error("format precision is out of range at byte {offset}")]
    PrecisionOutOfRange {
        /// Byte offset of the directive's `%`.
        offset: usize,
    },

    /// A directive names argument zero.
    #[error("argument number must be greater than zero at byte {offset}")]
    ZeroArgumentNumber {
        /// Byte offset of the directive's `%`.
        offset: usize,
    },
}

/// Interpolate `args` into `template`.
///
/// ```
/// use glossa_common::{FormatArg, FormatError, sprintf};
///
/// let text = sprintf("I have %d cars!", &[FormatArg::from(3)])?;
/// assert_eq!(text, "I have 3 cars!");
///
/// assert_eq!(
///     sprintf("%s and %s", &[FormatArg::from("one")]),
///     Err(FormatError::Arity { required: 2, supplied: 1 }),
/// );
/// # Ok::<(), FormatError>(())
/// ```
///
/// # Errors
///
/// Returns [`FormatError`] when the template is malformed or references an
/// argument that was not supplied.
pub fn sprintf(template: &str, args: &[FormatArg]) -> Result<String, FormatError> {
    let mut output = String::with_capacity(template.len());
    let mut cursor = template.char_indices().peekable();
    let mut next_argument = 0;

    while let Some((offset, character)) = cursor.next() {
        if character != '%' {
            output.push(character);
            continue;
        }

        let directive = match directive::parse(&mut cursor, offset)? {
            Piece::Percent => {
                output.push('%');
                continue;
            }
            Piece::Directive(directive) => directive,
        };

        let index = match directive.argument {
            Some(explicit) => explicit,
            None => {
                next_argument += 1;
                next_argument - 1
            }
        };
        let argument = args.get(index).ok_or(FormatError::Arity {
            required: index.saturating_add(1),
            supplied: args.len(),
        })?;
        output.push_str(&convert(&directive, argument));
    }

    Ok(output)
}

fn convert(directive: &Directive, argument: &FormatArg) -> String {
    let precision = directive.precision;
    match directive.conversion {
        Conversion::Text => {
            let text = argument.as_text();
            let clipped = match precision {
                Some(limit) => text.chars().take(limit).collect(),
                None => text.into_owned(),
            };
            pad(directive, "", &clipped)
        }
        Conversion::Char => u32::try_from(argument.as_i64())
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
            .to_string(),
        Conversion::Decimal => {
            let value = argument.as_i64();
            pad(
                directive,
                sign(directive, value < 0),
                &value.unsigned_abs().to_string(),
            )
        }
        Conversion::Unsigned => pad(directive, "", &argument.as_u64().to_string()),
        Conversion::Binary => pad(directive, "", &format!("{:b}", argument.as_u64())),
        Conversion::Octal => pad(directive, "", &format!("{:o}", argument.as_u64())),
        Conversion::LowerHex => pad(directive, "", &format!("{:x}", argument.as_u64())),
        Conversion::UpperHex => pad(directive, "", &format!("{:X}", argument.as_u64())),
        Conversion::Fixed => {
            let value = argument.as_f64();
            let decimals = float_precision(precision);
            let body = format!("{:.decimals$}", value.abs());
            pad(directive, sign(directive, value < 0.0), &body)
        }
        Conversion::Exponent { upper } => {
            let value = argument.as_f64();
            let body = exponent(value.abs(), float_precision(precision), upper);
            pad(directive, sign(directive, value < 0.0), &body)
        }
        Conversion::General { upper } => {
            let value = argument.as_f64();
            let body = general(value.abs(), float_precision(precision), upper);
            pad(directive, sign(directive, value < 0.0), &body)
        }
    }
}

fn float_precision(precision: Option<usize>) -> usize {
    precision.map_or(6, |digits| digits.min(MAX_FLOAT_PRECISION))
}

const fn sign(directive: &Directive, negative: bool) -> &'static str {
    if negative {
        "-"
    } else if directive.force_sign {
        "+"
    } else {
        ""
    }
}

fn pad(directive: &Directive, sign: &str, body: &str) -> String {
    let length = sign.chars().count() + body.chars().count();
    let fill = directive.width.saturating_sub(length);
    let zero_fill = directive.pad == '0' && directive.conversion.is_numeric();

    if fill == 0 {
        format!("{sign}{body}")
    } else if directive.left_justify {
        let pad = if zero_fill { ' ' } else { directive.pad };
        format!("{sign}{body}{}", repeat(pad, fill))
    } else if zero_fill {
        format!("{sign}{}{body}", repeat('0', fill))
    } else {
        format!("{}{sign}{body}", repeat(directive.pad, fill))
    }
}

fn repeat(character: char, count: usize) -> String {
    iter::repeat_n(character, count).collect()
}

/// Scientific notation with an explicitly signed exponent, e.g. `1.5e+3`.
fn exponent(value: f64, precision: usize, upper: bool) -> String {
    let scientific = format!("{value:.precision$e}");
    match scientific.split_once('e') {
        Some((mantissa, power)) => join_exponent(mantissa, power, upper),
        None => scientific,
    }
}

/// Shortest of fixed and scientific notation for `precision` significant
/// digits, with trailing zeros removed.
fn general(value: f64, precision: usize, upper: bool) -> String {
    let significant = precision.max(1);
    let scientific = format!("{value:.prec$e}", prec = significant - 1);
    let Some((mantissa, power)) = scientific.split_once('e') else {
        return scientific;
    };

    let magnitude: i64 = power.parse().unwrap_or(0);
    let limit = i64::try_from(significant).unwrap_or(i64::MAX);
    if magnitude < -4 || magnitude >= limit {
        return join_exponent(trim_fraction(mantissa), power, upper);
    }

    let decimals = usize::try_from(limit - 1 - magnitude).unwrap_or(0);
    trim_fraction(&format!("{value:.decimals$}")).to_owned()
}

fn join_exponent(mantissa: &str, power: &str, upper: bool) -> String {
    let marker = if upper { 'E' } else { 'e' };
    let sign = if power.starts_with('-') { "" } else { "+" };
    format!("{mantissa}{marker}{sign}{power}")
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
