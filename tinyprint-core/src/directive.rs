//! Format string parsing
//!
//! A format string is a run of literal bytes interleaved with conversion
//! directives:
//!
//! ```text
//! % [flags] [width] [. precision] [l] specifier
//! ```
//!
//! Parsing is a single left-to-right pass driven one byte at a time by
//! [`DirectiveParser`], the same way a UART frame parser is fed. Nothing
//! is ever re-read.

use crate::config::{clamp_precision, MAX_WIDTH};

/// Character used to fill a field up to its width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pad {
    #[default]
    Space,
    Zero,
}

impl Pad {
    /// The fill byte
    pub fn byte(self) -> u8 {
        match self {
            Pad::Space => b' ',
            Pad::Zero => b'0',
        }
    }
}

/// Directive flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flags {
    /// `+`: print `+` for non-negative signed values
    pub force_sign: bool,
    /// `0`: pad with zeros instead of spaces
    pub zero_pad: bool,
    /// `#`: radix prefix for hex and octal
    pub alternate: bool,
}

impl Flags {
    /// Fill character selected by the flags
    pub fn pad(&self) -> Pad {
        if self.zero_pad {
            Pad::Zero
        } else {
            Pad::Space
        }
    }
}

/// Integer argument width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Length {
    /// Native `int`
    #[default]
    Default,
    /// `l`: native `long`
    Wide,
}

/// Letter case for hex digits and the exponent marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Case {
    Lower,
    Upper,
}

/// Conversion selected by the final directive character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Specifier {
    /// `c`
    Char,
    /// `s`
    String,
    /// `d`
    SignedInt,
    /// `u`
    UnsignedInt,
    /// `x`
    HexLower,
    /// `X`
    HexUpper,
    /// `o`
    Octal,
    /// `p`
    Pointer,
    /// `f`
    Fixed,
    /// `e` / `E`
    Scientific(Case),
    /// `%`
    Percent,
    /// Anything else; echoed back literally
    Unrecognized(u8),
}

impl Specifier {
    /// Classify a specifier byte
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'c' => Specifier::Char,
            b's' => Specifier::String,
            b'd' => Specifier::SignedInt,
            b'u' => Specifier::UnsignedInt,
            b'x' => Specifier::HexLower,
            b'X' => Specifier::HexUpper,
            b'o' => Specifier::Octal,
            b'p' => Specifier::Pointer,
            b'f' => Specifier::Fixed,
            b'e' => Specifier::Scientific(Case::Lower),
            b'E' => Specifier::Scientific(Case::Upper),
            b'%' => Specifier::Percent,
            other => Specifier::Unrecognized(other),
        }
    }

    /// Whether this conversion takes the next positional argument
    pub fn consumes_argument(&self) -> bool {
        !matches!(self, Specifier::Percent | Specifier::Unrecognized(_))
    }

    /// Whether precision means anything for this conversion
    pub fn uses_precision(&self) -> bool {
        matches!(self, Specifier::Fixed | Specifier::Scientific(_))
    }
}

/// A parsed `%...` directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Conversion {
    pub flags: Flags,
    /// Minimum field width, at most [`MAX_WIDTH`]; `0` means no padding
    pub width: usize,
    /// Present only if the directive contained a `.`
    pub precision: Option<u8>,
    pub length: Length,
    pub specifier: Specifier,
}

impl Conversion {
    /// Fraction digits for `f`/`e`/`E`: explicit, else the default, clamped
    pub fn float_precision(&self) -> u8 {
        clamp_precision(self.precision)
    }
}

/// One unit of a format string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Directive {
    /// Byte copied to the output
    Literal(u8),
    /// Conversion to perform
    Conversion(Conversion),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Outside a directive
    Literal,
    /// After `%`, reading `+`, `0`, `#`
    Flags,
    /// Reading width digits
    Width,
    /// After `.`, reading precision digits
    Precision,
    /// Waiting for `l` or the specifier
    Length,
    /// After `l`, waiting for the specifier
    Specifier,
}

/// State machine turning format bytes into [`Directive`]s
#[derive(Debug, Clone)]
pub struct DirectiveParser {
    state: ParseState,
    flags: Flags,
    width: usize,
    precision: Option<u8>,
    length: Length,
}

impl Default for DirectiveParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveParser {
    /// Create a parser positioned outside any directive
    pub fn new() -> Self {
        Self {
            state: ParseState::Literal,
            flags: Flags::default(),
            width: 0,
            precision: None,
            length: Length::Default,
        }
    }

    /// Drop any partially parsed directive
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// True when no directive is in progress
    pub fn is_idle(&self) -> bool {
        self.state == ParseState::Literal
    }

    /// Feed one format byte
    ///
    /// Returns a directive once one is complete, `None` while inside a
    /// `%...` sequence.
    pub fn feed(&mut self, byte: u8) -> Option<Directive> {
        loop {
            match self.state {
                ParseState::Literal => {
                    if byte == b'%' {
                        self.state = ParseState::Flags;
                        return None;
                    }
                    return Some(Directive::Literal(byte));
                }
                ParseState::Flags => match byte {
                    b'+' => {
                        self.flags.force_sign = true;
                        return None;
                    }
                    b'0' => {
                        self.flags.zero_pad = true;
                        return None;
                    }
                    b'#' => {
                        self.flags.alternate = true;
                        return None;
                    }
                    _ => self.state = ParseState::Width,
                },
                ParseState::Width => {
                    if let Some(digit) = decimal_digit(byte) {
                        self.width = (self.width * 10 + digit as usize).min(MAX_WIDTH);
                        return None;
                    }
                    if byte == b'.' {
                        self.precision = Some(0);
                        self.state = ParseState::Precision;
                        return None;
                    }
                    self.state = ParseState::Length;
                }
                ParseState::Precision => {
                    if let Some(digit) = decimal_digit(byte) {
                        let precision = self.precision.unwrap_or(0);
                        self.precision =
                            Some(precision.saturating_mul(10).saturating_add(digit));
                        return None;
                    }
                    self.state = ParseState::Length;
                }
                ParseState::Length => {
                    if byte == b'l' {
                        self.length = Length::Wide;
                        self.state = ParseState::Specifier;
                        return None;
                    }
                    return Some(self.complete(byte));
                }
                ParseState::Specifier => return Some(self.complete(byte)),
            }
        }
    }

    fn complete(&mut self, byte: u8) -> Directive {
        let specifier = Specifier::from_byte(byte);
        let conversion = Conversion {
            flags: self.flags,
            width: self.width,
            precision: if specifier.uses_precision() {
                self.precision
            } else {
                None
            },
            length: self.length,
            specifier,
        };
        self.reset();
        Directive::Conversion(conversion)
    }
}

fn decimal_digit(byte: u8) -> Option<u8> {
    byte.is_ascii_digit().then(|| byte - b'0')
}

/// Iterator over the directives of a format string
///
/// Stops at the first zero byte or the end of the slice. A directive cut
/// short by the end of input is discarded.
#[derive(Debug, Clone)]
pub struct Directives<'a> {
    bytes: core::slice::Iter<'a, u8>,
    parser: DirectiveParser,
    done: bool,
}

impl<'a> Directives<'a> {
    pub fn new(format: &'a [u8]) -> Self {
        Self {
            bytes: format.iter(),
            parser: DirectiveParser::new(),
            done: false,
        }
    }
}

impl Iterator for Directives<'_> {
    type Item = Directive;

    fn next(&mut self) -> Option<Directive> {
        if self.done {
            return None;
        }
        for &byte in self.bytes.by_ref() {
            if byte == 0 {
                break;
            }
            if let Some(directive) = self.parser.feed(byte) {
                return Some(directive);
            }
        }
        self.done = true;
        if !self.parser.is_idle() {
            trace!("format string ended inside a directive");
            self.parser.reset();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    fn parse(format: &str) -> Vec<Directive, 16> {
        Directives::new(format.as_bytes()).collect()
    }

    fn conversion(format: &str) -> Conversion {
        match parse(format).as_slice() {
            [Directive::Conversion(c)] => *c,
            other => panic!("expected one conversion, got {:?}", other),
        }
    }

    #[test]
    fn test_literals_pass_through() {
        let directives = parse("ab\n");
        assert_eq!(
            directives.as_slice(),
            &[
                Directive::Literal(b'a'),
                Directive::Literal(b'b'),
                Directive::Literal(b'\n'),
            ]
        );
    }

    #[test]
    fn test_plain_conversion() {
        let c = conversion("%d");
        assert_eq!(c.specifier, Specifier::SignedInt);
        assert_eq!(c.flags, Flags::default());
        assert_eq!(c.width, 0);
        assert_eq!(c.precision, None);
        assert_eq!(c.length, Length::Default);
    }

    #[test]
    fn test_flags_width_in_any_order() {
        let c = conversion("%0+#+12x");
        assert!(c.flags.force_sign);
        assert!(c.flags.zero_pad);
        assert!(c.flags.alternate);
        assert_eq!(c.flags.pad(), Pad::Zero);
        assert_eq!(c.width, 12);
        assert_eq!(c.specifier, Specifier::HexLower);
    }

    #[test]
    fn test_zero_after_width_digit_is_width() {
        let c = conversion("%10d");
        assert!(!c.flags.zero_pad);
        assert_eq!(c.width, 10);
    }

    #[test]
    fn test_precision_and_default() {
        assert_eq!(conversion("%.3f").precision, Some(3));
        assert_eq!(conversion("%.3f").float_precision(), 3);
        assert_eq!(conversion("%f").float_precision(), 6);
        // A bare '.' means precision zero
        assert_eq!(conversion("%.e").precision, Some(0));
        assert_eq!(conversion("%8.2E").width, 8);
    }

    #[test]
    fn test_precision_dropped_for_integers() {
        assert_eq!(conversion("%.3d").precision, None);
    }

    #[test]
    fn test_wide_length() {
        let c = conversion("%lu");
        assert_eq!(c.length, Length::Wide);
        assert_eq!(c.specifier, Specifier::UnsignedInt);
        assert_eq!(conversion("%+08ld").length, Length::Wide);
    }

    #[test]
    fn test_specifier_table() {
        assert_eq!(Specifier::from_byte(b'c'), Specifier::Char);
        assert_eq!(Specifier::from_byte(b's'), Specifier::String);
        assert_eq!(Specifier::from_byte(b'X'), Specifier::HexUpper);
        assert_eq!(Specifier::from_byte(b'o'), Specifier::Octal);
        assert_eq!(Specifier::from_byte(b'p'), Specifier::Pointer);
        assert_eq!(Specifier::from_byte(b'E'), Specifier::Scientific(Case::Upper));
        assert_eq!(Specifier::from_byte(b'%'), Specifier::Percent);
        assert_eq!(Specifier::from_byte(b'q'), Specifier::Unrecognized(b'q'));
        assert!(!Specifier::Percent.consumes_argument());
        assert!(!Specifier::Unrecognized(b'q').consumes_argument());
        assert!(Specifier::Pointer.consumes_argument());
    }

    #[test]
    fn test_unrecognized_after_wide() {
        assert_eq!(conversion("%lq").specifier, Specifier::Unrecognized(b'q'));
        // A second 'l' is the specifier, not another length
        assert_eq!(conversion("%ll").specifier, Specifier::Unrecognized(b'l'));
    }

    #[test]
    fn test_truncated_directive_is_dropped() {
        let directives = parse("a%+5");
        assert_eq!(directives.as_slice(), &[Directive::Literal(b'a')]);
    }

    #[test]
    fn test_stops_at_nul() {
        let directives: Vec<Directive, 4> = Directives::new(b"ab\0cd").collect();
        assert_eq!(directives.len(), 2);
    }

    #[test]
    fn test_width_clamped() {
        assert_eq!(conversion("%300d").width, MAX_WIDTH);
        let c = conversion("%99999999999999999999999d");
        assert_eq!(c.width, MAX_WIDTH);
        assert_eq!(conversion("%.999f").precision, Some(u8::MAX));
    }

    #[test]
    fn test_parser_resets_between_directives() {
        let directives = parse("%05d%x");
        match directives.as_slice() {
            [Directive::Conversion(first), Directive::Conversion(second)] => {
                assert_eq!(first.width, 5);
                assert_eq!(second.width, 0);
                assert!(!second.flags.zero_pad);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
