//! Positional arguments
//!
//! The caller builds an ordered slice of [`Arg`] values; the engine takes
//! exactly one per argument-consuming directive, left to right, through
//! an [`ArgCursor`]. There is no random access.
//!
//! Integer directives follow C promotion rules: signed and unsigned
//! values (and characters) are reinterpreted rather than rejected. Other
//! pairings fail with [`FormatError::TypeMismatch`].

use crate::error::FormatError;

/// Kind of an [`Arg`], used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgKind {
    Char,
    Str,
    Int,
    Uint,
    Ptr,
    Float,
}

/// One positional argument
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arg<'a> {
    /// Single byte for `%c`
    Char(u8),
    /// Byte string for `%s`, read up to the first zero byte
    Str(&'a [u8]),
    /// Signed integer (`int` and `long` are both 32-bit here)
    Int(i32),
    /// Unsigned integer
    Uint(u32),
    /// Address for `%p`
    Ptr(usize),
    /// Single-precision float for `%f` / `%e`
    Float(f32),
}

impl Arg<'_> {
    pub fn kind(&self) -> ArgKind {
        match self {
            Arg::Char(_) => ArgKind::Char,
            Arg::Str(_) => ArgKind::Str,
            Arg::Int(_) => ArgKind::Int,
            Arg::Uint(_) => ArgKind::Uint,
            Arg::Ptr(_) => ArgKind::Ptr,
            Arg::Float(_) => ArgKind::Float,
        }
    }
}

impl From<u8> for Arg<'_> {
    fn from(value: u8) -> Self {
        Arg::Char(value)
    }
}

impl From<char> for Arg<'_> {
    /// Non-ASCII characters become `?`; the engine is byte-oriented
    fn from(value: char) -> Self {
        Arg::Char(u8::try_from(value).ok().filter(u8::is_ascii).unwrap_or(b'?'))
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(value: &'a [u8]) -> Self {
        Arg::Str(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Arg::Str(value)
    }
}

impl From<i8> for Arg<'_> {
    fn from(value: i8) -> Self {
        Arg::Int(value.into())
    }
}

impl From<i16> for Arg<'_> {
    fn from(value: i16) -> Self {
        Arg::Int(value.into())
    }
}

impl From<i32> for Arg<'_> {
    fn from(value: i32) -> Self {
        Arg::Int(value)
    }
}

impl From<u16> for Arg<'_> {
    fn from(value: u16) -> Self {
        Arg::Uint(value.into())
    }
}

impl From<u32> for Arg<'_> {
    fn from(value: u32) -> Self {
        Arg::Uint(value)
    }
}

impl<T> From<*const T> for Arg<'_> {
    fn from(value: *const T) -> Self {
        Arg::Ptr(value as usize)
    }
}

impl<T> From<*mut T> for Arg<'_> {
    fn from(value: *mut T) -> Self {
        Arg::Ptr(value as usize)
    }
}

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Arg::Float(value)
    }
}

impl From<f64> for Arg<'_> {
    /// Narrowed to `f32`: the renderers work in single precision
    fn from(value: f64) -> Self {
        Arg::Float(value as f32)
    }
}

/// Forward-only reader over the argument list
#[derive(Debug, Clone)]
pub struct ArgCursor<'a, 'b> {
    args: &'b [Arg<'a>],
    index: usize,
}

impl<'a, 'b> ArgCursor<'a, 'b> {
    pub fn new(args: &'b [Arg<'a>]) -> Self {
        Self { args, index: 0 }
    }

    fn take(&mut self) -> Result<(usize, Arg<'a>), FormatError> {
        let index = self.index;
        let arg = *self.args.get(index).ok_or_else(|| {
            warn!("argument {} missing", index);
            FormatError::MissingArgument { index }
        })?;
        self.index += 1;
        Ok((index, arg))
    }

    fn mismatch(index: usize, expected: ArgKind, found: &Arg<'_>) -> FormatError {
        warn!("argument {} has the wrong type", index);
        FormatError::TypeMismatch {
            index,
            expected,
            found: found.kind(),
        }
    }

    /// Next argument as a signed integer (`%d`)
    pub fn next_signed(&mut self) -> Result<i32, FormatError> {
        match self.take()? {
            (_, Arg::Int(v)) => Ok(v),
            (_, Arg::Uint(v)) => Ok(v as i32),
            (_, Arg::Char(c)) => Ok(c.into()),
            (index, other) => Err(Self::mismatch(index, ArgKind::Int, &other)),
        }
    }

    /// Next argument as an unsigned integer (`%u`, `%x`, `%o`)
    pub fn next_unsigned(&mut self) -> Result<u32, FormatError> {
        match self.take()? {
            (_, Arg::Uint(v)) => Ok(v),
            (_, Arg::Int(v)) => Ok(v as u32),
            (_, Arg::Char(c)) => Ok(c.into()),
            (index, other) => Err(Self::mismatch(index, ArgKind::Uint, &other)),
        }
    }

    /// Next argument as a single byte (`%c`)
    pub fn next_char(&mut self) -> Result<u8, FormatError> {
        match self.take()? {
            (_, Arg::Char(c)) => Ok(c),
            (_, Arg::Int(v)) => Ok(v as u8),
            (_, Arg::Uint(v)) => Ok(v as u8),
            (index, other) => Err(Self::mismatch(index, ArgKind::Char, &other)),
        }
    }

    /// Next argument as a byte string (`%s`)
    pub fn next_str(&mut self) -> Result<&'a [u8], FormatError> {
        match self.take()? {
            (_, Arg::Str(s)) => Ok(s),
            (index, other) => Err(Self::mismatch(index, ArgKind::Str, &other)),
        }
    }

    /// Next argument as an address (`%p`)
    pub fn next_pointer(&mut self) -> Result<usize, FormatError> {
        match self.take()? {
            (_, Arg::Ptr(p)) => Ok(p),
            (_, Arg::Uint(v)) => Ok(v as usize),
            (index, other) => Err(Self::mismatch(index, ArgKind::Ptr, &other)),
        }
    }

    /// Next argument as a float (`%f`, `%e`)
    pub fn next_float(&mut self) -> Result<f32, FormatError> {
        match self.take()? {
            (_, Arg::Float(v)) => Ok(v),
            (index, other) => Err(Self::mismatch(index, ArgKind::Float, &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Arg::from('A'), Arg::Char(b'A'));
        assert_eq!(Arg::from('é'), Arg::Char(b'?'));
        assert_eq!(Arg::from("hi"), Arg::Str(b"hi"));
        assert_eq!(Arg::from(-5i16), Arg::Int(-5));
        assert_eq!(Arg::from(7u16), Arg::Uint(7));
        assert_eq!(Arg::from(1.5f64), Arg::Float(1.5));
        assert_eq!(Arg::from(0x1234 as *const u8), Arg::Ptr(0x1234));
    }

    #[test]
    fn test_cursor_is_positional() {
        let args = [Arg::Int(1), Arg::Str(b"x"), Arg::Float(2.0)];
        let mut cursor = ArgCursor::new(&args);
        assert_eq!(cursor.next_signed(), Ok(1));
        assert_eq!(cursor.next_str(), Ok(&b"x"[..]));
        assert_eq!(cursor.next_float(), Ok(2.0));
        assert_eq!(
            cursor.next_signed(),
            Err(FormatError::MissingArgument { index: 3 })
        );
    }

    #[test]
    fn test_integer_promotion() {
        let args = [Arg::Int(-1), Arg::Uint(0xFFFF_FFFF), Arg::Char(b'A'), Arg::Int(0x141)];
        let mut cursor = ArgCursor::new(&args);
        assert_eq!(cursor.next_unsigned(), Ok(0xFFFF_FFFF));
        assert_eq!(cursor.next_signed(), Ok(-1));
        assert_eq!(cursor.next_signed(), Ok(65));
        assert_eq!(cursor.next_char(), Ok(b'A'));
    }

    #[test]
    fn test_type_mismatch_reports_position() {
        let args = [Arg::Int(3), Arg::Float(1.0)];
        let mut cursor = ArgCursor::new(&args);
        assert_eq!(
            cursor.next_str(),
            Err(FormatError::TypeMismatch {
                index: 0,
                expected: ArgKind::Str,
                found: ArgKind::Int,
            })
        );
        assert_eq!(
            cursor.next_signed(),
            Err(FormatError::TypeMismatch {
                index: 1,
                expected: ArgKind::Int,
                found: ArgKind::Float,
            })
        );
    }

    #[test]
    fn test_pointer_accepts_uint() {
        let args = [Arg::Uint(0x20), Arg::Ptr(0x40), Arg::Int(1)];
        let mut cursor = ArgCursor::new(&args);
        assert_eq!(cursor.next_pointer(), Ok(0x20));
        assert_eq!(cursor.next_pointer(), Ok(0x40));
        assert!(cursor.next_pointer().is_err());
    }
}
