//! Date and time structures
//!
//! The 7-byte Date Time layout (`year:u16, month, day, hours, minutes,
//! seconds`) is embedded in many measurements. A zero year, month or day
//! means "not known".

use crate::error::CodecError;
use alloc::vec::Vec;

/// Date Time structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    /// Year, 1582..=9999, or 0 if unknown
    pub year: u16,
    /// Month, 1..=12, or 0 if unknown
    pub month: u8,
    /// Day of month, 1..=31, or 0 if unknown
    pub day: u8,
    /// Hours, 0..=23
    pub hours: u8,
    /// Minutes, 0..=59
    pub minutes: u8,
    /// Seconds, 0..=59
    pub seconds: u8,
}

impl DateTime {
    /// Encoded size in bytes
    pub const LEN: usize = 7;

    /// Create a new date time
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8, hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            year,
            month,
            day,
            hours,
            minutes,
            seconds,
        }
    }

    /// Decode the 7-byte structure without range checks
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] if fewer than 7 bytes are given.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        if data.len() < Self::LEN {
            return Err(CodecError::insufficient(Self::LEN, data.len()));
        }
        Ok(Self {
            year: u16::from_le_bytes([data[0], data[1]]),
            month: data[2],
            day: data[3],
            hours: data[4],
            minutes: data[5],
            seconds: data[6],
        })
    }

    /// Encode after validating every field
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] if a field is outside its range.
    pub fn encode(&self) -> Result<[u8; 7], CodecError> {
        self.validate()?;
        let year = self.year.to_le_bytes();
        Ok([
            year[0],
            year[1],
            self.month,
            self.day,
            self.hours,
            self.minutes,
            self.seconds,
        ])
    }

    /// Check every field against its permitted range
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.year != 0 {
            CodecError::check_range("year", f64::from(self.year), 1582.0, 9999.0)?;
        }
        CodecError::check_range("month", f64::from(self.month), 0.0, 12.0)?;
        CodecError::check_range("day", f64::from(self.day), 0.0, 31.0)?;
        CodecError::check_range("hours", f64::from(self.hours), 0.0, 23.0)?;
        CodecError::check_range("minutes", f64::from(self.minutes), 0.0, 59.0)?;
        CodecError::check_range("seconds", f64::from(self.seconds), 0.0, 59.0)
    }

    /// Whether year, month and day are all known
    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.year != 0 && self.month != 0 && self.day != 0
    }
}

/// Day of Week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DayOfWeek {
    /// Day of week is not known
    Unknown = 0,
    /// Monday
    Monday = 1,
    /// Tuesday
    Tuesday = 2,
    /// Wednesday
    Wednesday = 3,
    /// Thursday
    Thursday = 4,
    /// Friday
    Friday = 5,
    /// Saturday
    Saturday = 6,
    /// Sunday
    Sunday = 7,
}

impl DayOfWeek {
    /// Decode a raw day; 8..=255 are reserved
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Reserved`] for reserved values.
    pub fn from_raw(raw: u8) -> Result<Self, CodecError> {
        Ok(match raw {
            0 => Self::Unknown,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            7 => Self::Sunday,
            _ => {
                return Err(CodecError::Reserved {
                    field: "day of week",
                    value: u32::from(raw),
                });
            }
        })
    }
}

/// Date Time followed by Day of Week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DayDateTime {
    /// Calendar date and time
    pub date_time: DateTime,
    /// Day of week
    pub day_of_week: DayOfWeek,
}

impl DayDateTime {
    /// Encoded size in bytes
    pub const LEN: usize = 8;

    /// # Errors
    ///
    /// Returns an error on short input or a reserved day of week.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        if data.len() < Self::LEN {
            return Err(CodecError::insufficient(Self::LEN, data.len()));
        }
        Ok(Self {
            date_time: DateTime::decode(data)?,
            day_of_week: DayOfWeek::from_raw(data[7])?,
        })
    }

    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CodecError> {
        self.date_time.validate()
    }

    /// # Errors
    ///
    /// Propagates date time validation failures.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = self.date_time.encode()?.to_vec();
        out.push(self.day_of_week as u8);
        Ok(out)
    }
}

/// Day Date Time followed by 1/256 second fractions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExactTime256 {
    /// Date, time and weekday
    pub day_date_time: DayDateTime,
    /// Fractions of a second in 1/256 units
    pub fractions256: u8,
}

impl ExactTime256 {
    /// Encoded size in bytes
    pub const LEN: usize = 9;

    /// # Errors
    ///
    /// Returns an error on short input or a reserved day of week.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        if data.len() < Self::LEN {
            return Err(CodecError::insufficient(Self::LEN, data.len()));
        }
        Ok(Self {
            day_date_time: DayDateTime::decode(data)?,
            fractions256: data[8],
        })
    }

    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CodecError> {
        self.day_date_time.validate()
    }

    /// # Errors
    ///
    /// Propagates date time validation failures.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = self.day_date_time.encode()?;
        out.push(self.fractions256);
        Ok(out)
    }
}

/// Time Exponential 8: `1.1^(N - 64)` seconds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeExponential {
    /// A duration in seconds
    Seconds(f64),
    /// Longer than the total life of the device (raw `0xFE`)
    GreaterThanLifetime,
    /// Duration is not known (raw `0xFF`)
    Unknown,
}

impl TimeExponential {
    /// Decode a raw Time Exponential 8 value
    #[must_use]
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Seconds(0.0),
            0xFE => Self::GreaterThanLifetime,
            0xFF => Self::Unknown,
            n => Self::Seconds(libm::pow(1.1, f64::from(n) - 64.0)),
        }
    }

    /// Encode to the nearest raw value
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_raw(self) -> u8 {
        match self {
            Self::GreaterThanLifetime => 0xFE,
            Self::Unknown => 0xFF,
            Self::Seconds(s) if s <= 0.0 => 0,
            Self::Seconds(s) => {
                let n = libm::round(libm::log(s) / libm::log(1.1) + 64.0);
                n.clamp(1.0, 253.0) as u8
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_time_decode_encode() {
        let bytes = [0xE8, 0x07, 0x03, 0x0F, 0x0E, 0x1E, 0x2D];
        let dt = DateTime::decode(&bytes).unwrap();
        assert_eq!(dt, DateTime::new(2024, 3, 15, 14, 30, 45));
        assert!(dt.is_known());
        assert_eq!(dt.encode().unwrap(), bytes);
    }

    #[test]
    fn test_date_time_validation() {
        assert!(DateTime::new(2024, 13, 1, 0, 0, 0).validate().is_err());
        assert!(DateTime::new(1000, 1, 1, 0, 0, 0).validate().is_err());
        assert!(DateTime::new(0, 0, 0, 0, 0, 0).validate().is_ok());
        assert!(DateTime::decode(&[0xE8, 0x07]).is_err());
    }

    #[test]
    fn test_day_of_week() {
        assert_eq!(DayOfWeek::from_raw(7).unwrap(), DayOfWeek::Sunday);
        assert!(DayOfWeek::from_raw(8).is_err());
    }

    #[test]
    fn test_exact_time_256() {
        let bytes = [0xE8, 0x07, 0x01, 0x01, 0x00, 0x00, 0x00, 0x01, 0x80];
        let time = ExactTime256::decode(&bytes).unwrap();
        assert_eq!(time.day_date_time.day_of_week, DayOfWeek::Monday);
        assert_eq!(time.fractions256, 0x80);
        assert_eq!(time.encode().unwrap(), bytes);
    }

    #[test]
    fn test_time_exponential() {
        assert_eq!(TimeExponential::from_raw(0), TimeExponential::Seconds(0.0));
        assert_eq!(TimeExponential::from_raw(64), TimeExponential::Seconds(1.0));
        assert_eq!(TimeExponential::from_raw(0xFF), TimeExponential::Unknown);
        assert_eq!(TimeExponential::from_raw(64).to_raw(), 64);
        assert_eq!(TimeExponential::from_raw(100).to_raw(), 100);
    }
}
