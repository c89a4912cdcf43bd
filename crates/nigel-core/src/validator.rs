//! # Validator
//!
//! Classifies the raw, string-typed value of the `n` query parameter.
//!
//! ## Integer Grammar
//!
//! ```text
//! input   := ws* sign? digit+ ( "." "0"* )? ws*
//! sign    := "+" | "-"
//! ```
//!
//! An integral decimal suffix (`"10.0"`, `"10."`) is accepted; any non-zero
//! fractional digit is not. Magnitudes wider than 64 bits are still integers:
//! they are classified by sign as too large or non-positive instead of being
//! reported as malformed.

use serde::Serialize;

use crate::error::ValidationError;

/// Default ceiling for accepted input.
///
/// The sieve allocates one byte per candidate, so this bounds a single
/// request at roughly 10 MB of marker memory.
pub const DEFAULT_MAX_N: u64 = 10_000_000;

/// Name of the query parameter carrying N.
pub const PARAMETER_NAME: &str = "n";

/// Raw values longer than this are rejected without parsing.
const MAX_INPUT_LEN: usize = 1000;

/// A positive integer N with `1 ≤ N ≤ MAX_N`.
///
/// Only [`Validator::validate`] constructs this type, so holding one is
/// proof that the bound check has happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ValidatedInput(u64);

impl ValidatedInput {
    /// The validated value of N.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ValidatedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input validator holding the configured ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    max_n: u64,
}

impl Validator {
    /// Create a validator that accepts `1..=max_n`.
    pub fn new(max_n: u64) -> Self {
        Self { max_n }
    }

    /// The configured ceiling.
    pub fn max_n(&self) -> u64 {
        self.max_n
    }

    /// Validate the raw query value.
    ///
    /// `None` means the parameter was absent, which is distinct from
    /// `Some("")` (present but empty, hence not an integer).
    pub fn validate(&self, raw: Option<&str>) -> Result<ValidatedInput, ValidationError> {
        let raw = raw.ok_or(ValidationError::MissingParameter)?;
        let parsed = parse_integer(raw)?;

        match (parsed.negative, parsed.magnitude) {
            (_, Magnitude::Zero) | (true, _) => Err(ValidationError::NonPositive),
            (false, Magnitude::Fits(v)) if v <= self.max_n => Ok(ValidatedInput(v)),
            (false, _) => Err(ValidationError::ExceedsMaximum { max_n: self.max_n }),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_N)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Magnitude {
    Zero,
    Fits(u64),
    TooLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ParsedInteger {
    negative: bool,
    magnitude: Magnitude,
}

fn parse_integer(raw: &str) -> Result<ParsedInteger, ValidationError> {
    if raw.len() > MAX_INPUT_LEN {
        return Err(ValidationError::InvalidType);
    }

    let trimmed = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = match unsigned.split_once('.') {
        Some((integral, fraction)) if fraction.bytes().all(|b| b == b'0') => integral,
        Some(_) => return Err(ValidationError::InvalidType),
        None => unsigned,
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidType);
    }

    let significant = digits.trim_start_matches('0');
    let magnitude = if significant.is_empty() {
        Magnitude::Zero
    } else {
        // All bytes are digits, so the only possible parse failure is overflow.
        significant
            .parse::<u64>()
            .map_or(Magnitude::TooLarge, Magnitude::Fits)
    };

    Ok(ParsedInteger {
        negative,
        magnitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(raw: Option<&str>) -> Result<u64, ValidationError> {
        Validator::default().validate(raw).map(ValidatedInput::get)
    }

    #[test]
    fn absent_is_missing_parameter() {
        assert_eq!(check(None), Err(ValidationError::MissingParameter));
    }

    #[test]
    fn plain_positive_integers() {
        assert_eq!(check(Some("1")), Ok(1));
        assert_eq!(check(Some("10")), Ok(10));
        assert_eq!(check(Some("1000")), Ok(1000));
        assert_eq!(check(Some("10000000")), Ok(10_000_000));
    }

    #[test]
    fn sign_whitespace_and_leading_zeros() {
        assert_eq!(check(Some("+7")), Ok(7));
        assert_eq!(check(Some("  42\t")), Ok(42));
        assert_eq!(check(Some("007")), Ok(7));
    }

    #[test]
    fn integral_decimal_suffix_is_accepted() {
        assert_eq!(check(Some("10.0")), Ok(10));
        assert_eq!(check(Some("10.000")), Ok(10));
        assert_eq!(check(Some("10.")), Ok(10));
    }

    #[test]
    fn non_integers_are_invalid_type() {
        for raw in [
            "", " ", "abc", "10.5", "1e3", "1_000", "0x10", "ten", "+", "-", ".0", "1 0", "- 5",
            "10.0.0", "١٢",
        ] {
            assert_eq!(
                check(Some(raw)),
                Err(ValidationError::InvalidType),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn overlong_input_is_invalid_type() {
        let raw = "1".repeat(MAX_INPUT_LEN + 1);
        assert_eq!(check(Some(&raw)), Err(ValidationError::InvalidType));
    }

    #[test]
    fn zero_and_negatives_are_non_positive() {
        for raw in ["0", "-0", "000", "0.0", "-5", "-1", "-99999999999999999999999999"] {
            assert_eq!(
                check(Some(raw)),
                Err(ValidationError::NonPositive),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn above_ceiling_exceeds_maximum() {
        let max = ValidationError::ExceedsMaximum {
            max_n: DEFAULT_MAX_N,
        };
        assert_eq!(check(Some("10000001")), Err(max.clone()));
        assert_eq!(check(Some("18446744073709551615")), Err(max.clone()));
        assert_eq!(check(Some("99999999999999999999999999")), Err(max));
    }

    #[test]
    fn configured_ceiling_is_respected() {
        let validator = Validator::new(100);
        assert_eq!(validator.max_n(), 100);
        assert_eq!(validator.validate(Some("100")).map(ValidatedInput::get), Ok(100));
        assert_eq!(
            validator.validate(Some("101")),
            Err(ValidationError::ExceedsMaximum { max_n: 100 })
        );
    }

    #[test]
    fn validated_input_serializes_as_number() {
        let input = Validator::default().validate(Some("17")).unwrap();
        assert_eq!(serde_json::to_string(&input).unwrap(), "17");
        assert_eq!(input.to_string(), "17");
    }
}
