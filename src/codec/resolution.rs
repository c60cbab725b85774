//! Scaled integer fields
//!
//! SIG characteristics describe fixed-point fields as `value = raw × M × 10^d × 2^b`.
//! [`Resolution`] captures the three factors and converts in both directions.
//! Negative decimal exponents divide by an exact power of ten so that
//! `2404 × 10^-2` decodes to `24.04` and not `24.040000000000003`.

use crate::error::CodecError;

const POW10: [f64; 10] = [1.0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9];

/// Fixed-point scale of a raw integer field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Resolution {
    /// Integer multiplier `M`
    pub multiplier: i32,
    /// Decimal exponent `d`
    pub decimal_exponent: i8,
    /// Binary exponent `b`
    pub binary_exponent: i8,
}

impl Resolution {
    /// Raw value is the physical value
    pub const UNIT: Self = Self::decimal(0);

    /// `10^d` resolution
    #[must_use]
    pub const fn decimal(decimal_exponent: i8) -> Self {
        Self {
            multiplier: 1,
            decimal_exponent,
            binary_exponent: 0,
        }
    }

    /// `2^b` resolution
    #[must_use]
    pub const fn binary(binary_exponent: i8) -> Self {
        Self {
            multiplier: 1,
            decimal_exponent: 0,
            binary_exponent,
        }
    }

    /// `M × 10^d` resolution
    #[must_use]
    pub const fn scaled(multiplier: i32, decimal_exponent: i8) -> Self {
        Self {
            multiplier,
            decimal_exponent,
            binary_exponent: 0,
        }
    }

    /// Convert a raw field to its physical value
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn apply(&self, raw: i64) -> f64 {
        let mut value = raw as f64 * f64::from(self.multiplier);
        value = scale_decimal(value, i32::from(self.decimal_exponent));
        if self.binary_exponent != 0 {
            value *= libm::exp2(f64::from(self.binary_exponent));
        }
        value
    }

    /// Convert a physical value back to the nearest raw integer
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] for non-finite values.
    #[allow(clippy::cast_possible_truncation)]
    pub fn unapply(&self, field: &'static str, value: f64) -> Result<i64, CodecError> {
        if !value.is_finite() {
            return Err(CodecError::OutOfRange {
                field,
                value,
                min: f64::MIN,
                max: f64::MAX,
            });
        }
        let mut raw = value / f64::from(self.multiplier);
        raw = scale_decimal(raw, -i32::from(self.decimal_exponent));
        if self.binary_exponent != 0 {
            raw *= libm::exp2(-f64::from(self.binary_exponent));
        }
        Ok(libm::round(raw) as i64)
    }
}

/// Multiply by `10^exponent`, dividing by the exact power for negative exponents
#[must_use]
pub fn scale_decimal(value: f64, exponent: i32) -> f64 {
    let magnitude = exponent.unsigned_abs() as usize;
    let factor = POW10
        .get(magnitude)
        .copied()
        .unwrap_or_else(|| libm::pow(10.0, f64::from(exponent.unsigned_abs())));
    if exponent < 0 {
        value / factor
    } else {
        value * factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_resolution() {
        let res = Resolution::decimal(-2);
        assert_eq!(res.apply(2404), 24.04);
        assert_eq!(res.unapply("temperature", 24.04).unwrap(), 2404);
        assert_eq!(res.apply(-2404), -24.04);
    }

    #[test]
    fn test_binary_resolution() {
        let volts = Resolution::binary(-6);
        assert_eq!(volts.apply(192), 3.0);
        assert_eq!(volts.unapply("voltage", 3.0).unwrap(), 192);
    }

    #[test]
    fn test_scaled_resolution() {
        let half_kg = Resolution::scaled(5, -3);
        assert_eq!(half_kg.apply(14000), 70.0);
        assert_eq!(half_kg.unapply("weight", 70.0).unwrap(), 14000);
    }

    #[test]
    fn test_unapply_rejects_nan() {
        assert!(Resolution::UNIT.unapply("x", f64::NAN).is_err());
    }
}
