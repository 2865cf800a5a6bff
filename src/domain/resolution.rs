//! Target image resolution parsed from `"<width>x<height>"`.

use crate::domain::DomainError;
use serde::Serialize;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Positive pixel dimensions of the rendered image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    pub width: NonZeroU32,
    pub height: NonZeroU32,
}

impl Resolution {
    pub const SEPARATOR: char = 'x';

    pub const fn new(width: NonZeroU32, height: NonZeroU32) -> Self {
        Self { width, height }
    }

    pub const fn width_u32(self) -> u32 {
        self.width.get()
    }

    pub const fn height_u32(self) -> u32 {
        self.height.get()
    }

    pub const fn as_u32_tuple(self) -> (u32, u32) {
        (self.width.get(), self.height.get())
    }

    /// Parse `"<width>x<height>"`, e.g. `"800x600"`.
    ///
    /// Exactly one lowercase `x` is required and both sides must be positive
    /// integers. Whitespace is not trimmed.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let mut parts = input.split(Self::SEPARATOR);
        let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DomainError::Resolution(format!(
                "'{}' must contain exactly one '{}' separator",
                input,
                Self::SEPARATOR
            )));
        };
        Ok(Self {
            width: parse_dimension(input, "width", width)?,
            height: parse_dimension(input, "height", height)?,
        })
    }
}

fn parse_dimension(input: &str, name: &str, raw: &str) -> Result<NonZeroU32, DomainError> {
    let value: i32 = raw.parse().map_err(|_| {
        DomainError::Resolution(format!("'{}': {} '{}' is not a valid integer", input, name, raw))
    })?;
    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| {
            DomainError::Resolution(format!("'{}': {} must be positive, got {}", input, name, value))
        })
}

impl FromStr for Resolution {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<(u32, u32)> for Resolution {
    type Error = DomainError;

    fn try_from((width, height): (u32, u32)) -> Result<Self, Self::Error> {
        let width = NonZeroU32::new(width)
            .ok_or_else(|| DomainError::Resolution("width must be positive".to_string()))?;
        let height = NonZeroU32::new(height)
            .ok_or_else(|| DomainError::Resolution("height must be positive".to_string()))?;
        Ok(Self { width, height })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.width, Self::SEPARATOR, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let r = Resolution::parse("800x600").unwrap();
        assert_eq!(r.as_u32_tuple(), (800, 600));
        assert_eq!(r.to_string(), "800x600");
    }

    #[test]
    fn test_parse_separator_count() {
        assert!(matches!(
            Resolution::parse("800600"),
            Err(DomainError::Resolution(_))
        ));
        assert!(matches!(
            Resolution::parse("8x00x600"),
            Err(DomainError::Resolution(_))
        ));
        // uppercase X is not a separator
        assert!(Resolution::parse("800X600").is_err());
    }

    #[test]
    fn test_parse_non_integer() {
        let err = Resolution::parse("800xabc").unwrap_err();
        assert!(err.to_string().contains("not a valid integer"));
        assert!(Resolution::parse("x600").is_err());
        assert!(Resolution::parse("800x").is_err());
        assert!(Resolution::parse("99999999999x600").is_err());
    }

    #[test]
    fn test_parse_non_positive() {
        let err = Resolution::parse("0x600").unwrap_err();
        assert!(err.to_string().contains("must be positive"));
        assert!(Resolution::parse("800x-1").is_err());
    }

    #[test]
    fn test_parse_no_trimming() {
        assert!(Resolution::parse(" 800x600").is_err());
        assert!(Resolution::parse("800 x 600").is_err());
    }

    #[test]
    fn test_from_str_and_try_from() {
        let r: Resolution = "1024x768".parse().unwrap();
        assert_eq!(Resolution::try_from((1024, 768)).unwrap(), r);
        assert!(Resolution::try_from((0, 768)).is_err());
    }
}
