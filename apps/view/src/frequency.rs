use std::fmt;

use crate::error::FrequencyInputError;

/// A lookup frequency in whole hertz, always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrequencyHz(u64);

impl FrequencyHz {
    pub const fn hz(self) -> u64 {
        self.0
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn khz(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Parses user input in kHz, e.g. `7016.5` becomes 7 016 500 Hz.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn parse_khz(input: &str) -> Result<Self, FrequencyInputError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(FrequencyInputError::Empty);
        }

        let khz = trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| FrequencyInputError::NotANumber(trimmed.to_string()))?;
        if khz <= 0.0 {
            return Err(FrequencyInputError::NotPositive);
        }

        let hz = (khz * 1000.0).round();
        if hz < 1.0 || hz >= u64::MAX as f64 {
            return Err(FrequencyInputError::OutOfRange(trimmed.to_string()));
        }

        Ok(Self(hz as u64))
    }
}

impl fmt::Display for FrequencyHz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kHz", self.khz())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_khz_rounds_to_whole_hz() {
        assert_eq!(FrequencyHz::parse_khz("7016.5").map(FrequencyHz::hz), Ok(7_016_500));
        assert_eq!(FrequencyHz::parse_khz(" 14025 ").map(FrequencyHz::hz), Ok(14_025_000));
        assert_eq!(FrequencyHz::parse_khz("3.5004").map(FrequencyHz::hz), Ok(3_500));
    }

    #[test]
    fn rejects_empty_non_numeric_and_non_positive_input() {
        assert_eq!(FrequencyHz::parse_khz(""), Err(FrequencyInputError::Empty));
        assert_eq!(FrequencyHz::parse_khz("   "), Err(FrequencyInputError::Empty));
        assert_eq!(
            FrequencyHz::parse_khz("abc"),
            Err(FrequencyInputError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            FrequencyHz::parse_khz("NaN"),
            Err(FrequencyInputError::NotANumber("NaN".to_string()))
        );
        assert_eq!(
            FrequencyHz::parse_khz("inf"),
            Err(FrequencyInputError::NotANumber("inf".to_string()))
        );
        assert_eq!(FrequencyHz::parse_khz("-3"), Err(FrequencyInputError::NotPositive));
        assert_eq!(FrequencyHz::parse_khz("0"), Err(FrequencyInputError::NotPositive));
    }

    #[test]
    fn positive_values_without_whole_hz_are_out_of_range() {
        assert_eq!(
            FrequencyHz::parse_khz("0.0004"),
            Err(FrequencyInputError::OutOfRange("0.0004".to_string()))
        );
        assert_eq!(
            FrequencyHz::parse_khz("1e30"),
            Err(FrequencyInputError::OutOfRange("1e30".to_string()))
        );
        assert_eq!(
            FrequencyInputError::OutOfRange("1e30".to_string()).to_string(),
            "1e30 kHz is outside the range that can be looked up."
        );
    }

    #[test]
    fn displays_in_khz() -> Result<(), FrequencyInputError> {
        assert_eq!(FrequencyHz::parse_khz("7016.5")?.to_string(), "7016.5 kHz");
        assert_eq!(FrequencyHz::parse_khz("14000")?.to_string(), "14000 kHz");
        Ok(())
    }
}
