// ABOUTME: Validated container serial numbers in the KON-<code>-<NNNN> format.
// ABOUTME: Parsing rejects anything an issuer could not have produced.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SerialNumberError {
    #[error("serial number must start with 'KON-'")]
    BadPrefix,

    #[error("unknown cargo class code: '{0}'")]
    UnknownClassCode(String),

    #[error("serial suffix must be exactly four digits, got '{0}'")]
    BadSuffix(String),
}

/// Single-letter cargo class code embedded in a serial number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassCode {
    Liquid,
    Gas,
    Refrigerated,
}

impl ClassCode {
    pub fn letter(self) -> char {
        match self {
            ClassCode::Liquid => 'L',
            ClassCode::Gas => 'G',
            ClassCode::Refrigerated => 'C',
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "L" => Some(ClassCode::Liquid),
            "G" => Some(ClassCode::Gas),
            "C" => Some(ClassCode::Refrigerated),
            _ => None,
        }
    }
}

/// A container serial number like `KON-L-0042`.
///
/// Serials identify containers in reports and ship operations. They are not
/// guaranteed unique when issued from a random source; ships own containers
/// by value, so identity never hinges on uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerialNumber {
    code: ClassCode,
    number: u16,
}

impl SerialNumber {
    /// Build a serial from its parts. The numeric suffix wraps into the
    /// four-digit range.
    pub fn new(code: ClassCode, number: u16) -> Self {
        Self {
            code,
            number: number % 10_000,
        }
    }

    /// Parse a serial from its textual form.
    pub fn parse(value: &str) -> Result<Self, SerialNumberError> {
        let rest = value
            .strip_prefix("KON-")
            .ok_or(SerialNumberError::BadPrefix)?;

        let (code, suffix) = rest
            .split_once('-')
            .ok_or_else(|| SerialNumberError::UnknownClassCode(rest.to_string()))?;

        let code = ClassCode::from_code(code)
            .ok_or_else(|| SerialNumberError::UnknownClassCode(code.to_string()))?;

        if suffix.len() != 4 || !suffix.chars().all(|c| c.is_ascii_digit()) {
            return Err(SerialNumberError::BadSuffix(suffix.to_string()));
        }
        let number = suffix
            .parse()
            .map_err(|_| SerialNumberError::BadSuffix(suffix.to_string()))?;

        Ok(Self { code, number })
    }

    pub fn code(&self) -> ClassCode {
        self.code
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KON-{}-{:04}", self.code.letter(), self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_to_four_digits() {
        let serial = SerialNumber::new(ClassCode::Liquid, 7);
        assert_eq!(serial.to_string(), "KON-L-0007");
    }

    #[test]
    fn parse_round_trips_display() {
        for code in [ClassCode::Liquid, ClassCode::Gas, ClassCode::Refrigerated] {
            let serial = SerialNumber::new(code, 1234);
            assert_eq!(SerialNumber::parse(&serial.to_string()), Ok(serial));
        }
    }

    #[test]
    fn parse_rejects_bad_prefix() {
        assert_eq!(
            SerialNumber::parse("CON-L-0001"),
            Err(SerialNumberError::BadPrefix)
        );
    }

    #[test]
    fn parse_rejects_unknown_class_code() {
        assert!(matches!(
            SerialNumber::parse("KON-X-0001"),
            Err(SerialNumberError::UnknownClassCode(code)) if code == "X"
        ));
    }

    #[test]
    fn parse_rejects_short_suffix() {
        assert!(matches!(
            SerialNumber::parse("KON-G-001"),
            Err(SerialNumberError::BadSuffix(_))
        ));
    }

    #[test]
    fn suffix_wraps_into_four_digit_range() {
        let serial = SerialNumber::new(ClassCode::Gas, 10_007);
        assert_eq!(serial.to_string(), "KON-G-0007");
    }
}
