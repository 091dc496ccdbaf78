//! Parsing of a single `%` directive.

use std::iter::Peekable;
use std::str::CharIndices;

use super::FormatError;

pub(super) type Cursor<'a> = Peekable<CharIndices<'a>>;

/// Largest width or precision a directive may request (`i32::MAX`).
const MAX_FIELD: usize = 2_147_483_647;

/// Conversion requested by a directive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Conversion {
    Binary,
    Char,
    Decimal,
    Unsigned,
    Octal,
    LowerHex,
    UpperHex,
    Exponent { upper: bool },
    Fixed,
    General { upper: bool },
    Text,
}

impl Conversion {
    const fn from_specifier(specifier: char) -> Option<Self> {
        let conversion = match specifier {
            'b' => Self::Binary,
            'c' => Self::Char,
            'd' | 'i' => Self::Decimal,
            'u' => Self::Unsigned,
            'o' => Self::Octal,
            'x' => Self::LowerHex,
            'X' => Self::UpperHex,
            'e' => Self::Exponent { upper: false },
            'E' => Self::Exponent { upper: true },
            'f' | 'F' => Self::Fixed,
            'g' => Self::General { upper: false },
            'G' => Self::General { upper: true },
            's' => Self::Text,
            _ => return None,
        };
        Some(conversion)
    }

    /// Whether `0` padding goes between the sign and the digits.
    pub(super) const fn is_numeric(self) -> bool {
        !matches!(self, Self::Text | Self::Char)
    }
}

/// `%[argnum$][flags][width][.precision]conversion`
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Directive {
    /// Zero-based explicit argument index.
    pub(super) argument: Option<usize>,
    pub(super) left_justify: bool,
    pub(super) force_sign: bool,
    pub(super) pad: char,
    pub(super) width: usize,
    pub(super) precision: Option<usize>,
    pub(super) conversion: Conversion,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum Piece {
    Percent,
    Directive(Directive),
}

/// Parse the directive following the `%` found at byte `offset`.
pub(super) fn parse(cursor: &mut Cursor<'_>, offset: usize) -> Result<Piece, FormatError> {
    if next_if_eq(cursor, '%') {
        return Ok(Piece::Percent);
    }

    let mut directive = Directive {
        argument: parse_argument_number(cursor, offset)?,
        left_justify: false,
        force_sign: false,
        pad: ' ',
        width: 0,
        precision: None,
        conversion: Conversion::Text,
    };
    parse_flags(cursor, &mut directive, offset)?;
    directive.width = bounded(read_number(cursor), FormatError::WidthOutOfRange { offset })?
        .unwrap_or(0);
    if next_if_eq(cursor, '.') {
        let precision = bounded(read_number(cursor), FormatError::PrecisionOutOfRange { offset })?;
        directive.precision = Some(precision.unwrap_or(0));
    }

    let (_, specifier) = cursor
        .next()
        .ok_or(FormatError::MissingSpecifier { offset })?;
    directive.conversion = Conversion::from_specifier(specifier)
        .ok_or(FormatError::UnknownSpecifier { specifier, offset })?;

    Ok(Piece::Directive(directive))
}

fn parse_argument_number(
    cursor: &mut Cursor<'_>,
    offset: usize,
) -> Result<Option<usize>, FormatError> {
    let mut lookahead = cursor.clone();
    let Some(number) = read_number(&mut lookahead) else {
        return Ok(None);
    };
    if !next_if_eq(&mut lookahead, '$') {
        // The digits belong to the flags or width.
        return Ok(None);
    }

    *cursor = lookahead;
    number
        .checked_sub(1)
        .map(Some)
        .ok_or(FormatError::ZeroArgumentNumber { offset })
}

fn parse_flags(
    cursor: &mut Cursor<'_>,
    directive: &mut Directive,
    offset: usize,
) -> Result<(), FormatError> {
    loop {
        match cursor.peek().map(|&(_, character)| character) {
            Some('-') => directive.left_justify = true,
            Some('+') => directive.force_sign = true,
            Some('0') => directive.pad = '0',
            Some(' ') => directive.pad = ' ',
            Some('\'') => {
                cursor.next();
                let (_, pad) = cursor
                    .next()
                    .ok_or(FormatError::MissingSpecifier { offset })?;
                directive.pad = pad;
                continue;
            }
            _ => return Ok(()),
        }
        cursor.next();
    }
}

fn read_number(cursor: &mut Cursor<'_>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some((_, digit)) = cursor.next_if(|(_, character)| character.is_ascii_digit()) {
        let digit_value = digit
            .to_digit(10)
            .and_then(|number| usize::try_from(number).ok())
            .unwrap_or(0);
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit_value),
        );
    }
    value
}

fn bounded(value: Option<usize>, error: FormatError) -> Result<Option<usize>, FormatError> {
    match value {
        Some(number) if number > MAX_FIELD => Err(error),
        other => Ok(other),
    }
}

fn next_if_eq(cursor: &mut Cursor<'_>, expected: char) -> bool {
    cursor
        .next_if(|&(_, character)| character == expected)
        .is_some()
}
