//! Positional arguments accepted by the formatting operations.
//!
//! The formatting operations take a slice of [`Argument`]s. Every entry is a
//! value consumed by a placeholder, except that a trailing
//! [`Argument::Options`] is taken as the render options for the lookup.

use glossa_common::{FormatArg, RenderOptions};

use crate::error::TranslateError;

/// One entry in the argument list of [`Translator::format`] and friends.
///
/// [`Translator::format`]: crate::Translator::format
///
/// ```
/// use glossa::{Argument, RenderOptions};
///
/// let args: [Argument; 3] = [3.into(), "cars".into(), RenderOptions::embedded_code().into()];
/// assert!(matches!(args[2], Argument::Options(_)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    /// A value for the next placeholder.
    Value(FormatArg),
    /// Render options; only valid as the last argument.
    Options(RenderOptions),
}

impl Argument {
    /// The one place an argument is recognised as an options object.
    const fn as_options(&self) -> Option<RenderOptions> {
        match self {
            Self::Options(options) => Some(*options),
            Self::Value(_) => None,
        }
    }
}

impl From<RenderOptions> for Argument {
    fn from(options: RenderOptions) -> Self {
        Self::Options(options)
    }
}

impl From<FormatArg> for Argument {
    fn from(value: FormatArg) -> Self {
        Self::Value(value)
    }
}

macro_rules! value_argument {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for Argument {
                fn from(value: $source) -> Self {
                    Self::Value(FormatArg::from(value))
                }
            }
        )+
    };
}

value_argument!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, char, String);

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self::Value(FormatArg::from(value))
    }
}

/// Arguments split into render options and placeholder values.
#[derive(Debug, PartialEq)]
pub(crate) struct Invocation {
    pub(crate) options: RenderOptions,
    pub(crate) values: Vec<FormatArg>,
}

/// Consume a trailing options argument, if any, and collect the values.
///
/// Without a trailing options argument the default [`RenderOptions`] apply.
pub(crate) fn split_trailing_options(args: &[Argument]) -> Result<Invocation, TranslateError> {
    let (options, positional) = args
        .split_last()
        .and_then(|(last, leading)| last.as_options().map(|trailing| (trailing, leading)))
        .unwrap_or((RenderOptions::default(), args));

    let values = positional
        .iter()
        .enumerate()
        .map(|(position, argument)| match argument {
            Argument::Value(value) => Ok(value.clone()),
            Argument::Options(_) => Err(TranslateError::MisplacedOptions { position }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Invocation { options, values })
}
