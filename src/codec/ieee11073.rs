//! IEEE-11073-20601 medical floats
//!
//! `SFLOAT` packs a 4-bit signed exponent and a 12-bit signed mantissa into
//! 16 bits, `FLOAT` packs an 8-bit exponent and a 24-bit mantissa into 32
//! bits. Both reserve a handful of exponent-zero bit patterns as sentinels,
//! which round-trip bit-exactly.

use super::resolution::scale_decimal;
use crate::characteristic::{SpecialValue, SpecialValueKind};

macro_rules! medical_float {
    (
        $(#[$meta:meta])*
        $name:ident {
            raw: $raw:ty,
            mantissa: $mant:ty,
            mantissa_bits: $mbits:expr,
            exponent_bits: $ebits:expr,
            nan: $nan:literal,
            nres: $nres:literal,
            pos_inf: $pinf:literal,
            neg_inf: $ninf:literal,
            reserved: $reserved:literal,
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum $name {
            /// A finite value `mantissa × 10^exponent`
            Value {
                /// Signed mantissa
                mantissa: $mant,
                /// Signed base-10 exponent
                exponent: i8,
            },
            /// Not a Number
            NaN,
            /// Not at this resolution
            NRes,
            /// Positive infinity
            PositiveInfinity,
            /// Negative infinity
            NegativeInfinity,
            /// Reserved for future use
            Reserved,
        }

        impl $name {
            const MANTISSA_MASK: $raw = (1 << $mbits) - 1;
            const MANTISSA_MIN: i64 = -(1 << ($mbits - 1));
            const MANTISSA_MAX: i64 = (1 << ($mbits - 1)) - 1;
            /// Exponent-zero mantissas beyond this are sentinels
            const MANTISSA_LIMIT_AT_ZERO: i64 = Self::MANTISSA_MAX - 2;
            const EXPONENT_MIN: i32 = -(1 << ($ebits - 1));
            const EXPONENT_MAX: i32 = (1 << ($ebits - 1)) - 1;

            /// Raw bit pattern of NaN
            pub const NAN_RAW: $raw = $nan;
            /// Raw bit pattern of NRes
            pub const NRES_RAW: $raw = $nres;
            /// Raw bit pattern of +INFINITY
            pub const POSITIVE_INFINITY_RAW: $raw = $pinf;
            /// Raw bit pattern of -INFINITY
            pub const NEGATIVE_INFINITY_RAW: $raw = $ninf;
            /// Raw bit pattern of the reserved value
            pub const RESERVED_RAW: $raw = $reserved;

            /// Decode a raw bit pattern
            #[must_use]
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            pub const fn from_raw(raw: $raw) -> Self {
                match raw {
                    $nan => Self::NaN,
                    $nres => Self::NRes,
                    $pinf => Self::PositiveInfinity,
                    $ninf => Self::NegativeInfinity,
                    $reserved => Self::Reserved,
                    _ => {
                        let shift = <$raw>::BITS - $mbits;
                        let mantissa = (((raw & Self::MANTISSA_MASK) << shift) as i64
                            as $mant)
                            >> shift;
                        let exponent = ((raw as i64 as $mant) >> $mbits) as i8;
                        Self::Value { mantissa, exponent }
                    }
                }
            }

            /// Encode to the raw bit pattern
            #[must_use]
            #[allow(clippy::cast_sign_loss)]
            pub const fn to_raw(self) -> $raw {
                match self {
                    Self::NaN => $nan,
                    Self::NRes => $nres,
                    Self::PositiveInfinity => $pinf,
                    Self::NegativeInfinity => $ninf,
                    Self::Reserved => $reserved,
                    Self::Value { mantissa, exponent } => {
                        (((exponent as $raw) << $mbits) & !Self::MANTISSA_MASK)
                            | (mantissa as $raw & Self::MANTISSA_MASK)
                    }
                }
            }

            /// Convert to `f64`; NaN, NRes and Reserved map to `f64::NAN`
            #[must_use]
            pub fn to_f64(self) -> f64 {
                match self {
                    Self::Value { mantissa, exponent } => {
                        scale_decimal(f64::from(mantissa), i32::from(exponent))
                    }
                    Self::PositiveInfinity => f64::INFINITY,
                    Self::NegativeInfinity => f64::NEG_INFINITY,
                    Self::NaN | Self::NRes | Self::Reserved => f64::NAN,
                }
            }

            /// Encode an `f64` with the smallest exponent whose mantissa fits
            ///
            /// The full mantissa range is available at non-zero exponents;
            /// at exponent zero the sentinel patterns are skipped.
            /// Trailing decimal zeros are folded into the exponent, never past
            /// zero, so whole numbers encode with exponent 0 when they fit.
            /// Infinities and NaN map onto their sentinels. Magnitudes too large
            /// for the format map onto the matching infinity.
            #[must_use]
            #[allow(clippy::cast_possible_truncation)]
            pub fn from_f64(value: f64) -> Self {
                if value.is_nan() {
                    return Self::NaN;
                }
                if value.is_infinite() {
                    return if value > 0.0 {
                        Self::PositiveInfinity
                    } else {
                        Self::NegativeInfinity
                    };
                }
                for exponent in Self::EXPONENT_MIN..=Self::EXPONENT_MAX {
                    let scaled = libm::round(scale_decimal(value, -exponent));
                    let (min, max) = if exponent == 0 {
                        (-Self::MANTISSA_LIMIT_AT_ZERO, Self::MANTISSA_LIMIT_AT_ZERO)
                    } else {
                        (Self::MANTISSA_MIN, Self::MANTISSA_MAX)
                    };
                    if scaled >= min as f64 && scaled <= max as f64 {
                        let mut mantissa = scaled as i64;
                        let mut exponent = exponent;
                        while mantissa != 0 && mantissa % 10 == 0 && exponent < 0 {
                            mantissa /= 10;
                            exponent += 1;
                        }
                        if mantissa == 0 {
                            exponent = 0;
                        }
                        return Self::Value {
                            mantissa: mantissa as $mant,
                            exponent: exponent as i8,
                        };
                    }
                }
                if value > 0.0 {
                    Self::PositiveInfinity
                } else {
                    Self::NegativeInfinity
                }
            }

            /// Whether this is a finite value
            #[must_use]
            pub const fn is_value(&self) -> bool {
                matches!(self, Self::Value { .. })
            }

            /// The sentinel carried by this value, if any
            #[must_use]
            pub fn special(self) -> Option<SpecialValue> {
                let kind = match self {
                    Self::Value { .. } => return None,
                    Self::NaN => SpecialValueKind::NaN,
                    Self::NRes => SpecialValueKind::NotAtThisResolution,
                    Self::PositiveInfinity => SpecialValueKind::PositiveInfinity,
                    Self::NegativeInfinity => SpecialValueKind::NegativeInfinity,
                    Self::Reserved => SpecialValueKind::Reserved,
                };
                Some(SpecialValue::new(kind, u32::from(self.to_raw())))
            }

            /// Rebuild the sentinel from a [`SpecialValue`], if it is one of ours
            #[must_use]
            pub fn from_special(special: SpecialValue) -> Option<Self> {
                match special.kind {
                    SpecialValueKind::NaN => Some(Self::NaN),
                    SpecialValueKind::NotAtThisResolution => Some(Self::NRes),
                    SpecialValueKind::PositiveInfinity => Some(Self::PositiveInfinity),
                    SpecialValueKind::NegativeInfinity => Some(Self::NegativeInfinity),
                    SpecialValueKind::Reserved => Some(Self::Reserved),
                    _ => None,
                }
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                Self::from_f64(value)
            }
        }
    };
}

medical_float! {
    /// IEEE-11073 16-bit `SFLOAT`
    SFloat {
        raw: u16,
        mantissa: i16,
        mantissa_bits: 12,
        exponent_bits: 4,
        nan: 0x07FF,
        nres: 0x0800,
        pos_inf: 0x07FE,
        neg_inf: 0x0802,
        reserved: 0x0801,
    }
}

medical_float! {
    /// IEEE-11073 32-bit `FLOAT`
    MedFloat32 {
        raw: u32,
        mantissa: i32,
        mantissa_bits: 24,
        exponent_bits: 8,
        nan: 0x007F_FFFF,
        nres: 0x0080_0000,
        pos_inf: 0x007F_FFFE,
        neg_inf: 0x0080_0002,
        reserved: 0x0080_0001,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sfloat_decode() {
        // exponent -1, mantissa 365 => 36.5
        let value = SFloat::from_raw(0xF16D);
        assert_eq!(
            value,
            SFloat::Value {
                mantissa: 365,
                exponent: -1
            }
        );
        assert_eq!(value.to_f64(), 36.5);

        // negative mantissa
        let negative = SFloat::from_raw(0x0FFF);
        assert_eq!(negative.to_f64(), -1.0);
    }

    #[test]
    fn test_sfloat_sentinels_round_trip() {
        for raw in [0x07FF, 0x0800, 0x07FE, 0x0802, 0x0801] {
            let decoded = SFloat::from_raw(raw);
            assert!(!decoded.is_value());
            assert_eq!(decoded.to_raw(), raw);
            let special = decoded.special().unwrap();
            assert_eq!(SFloat::from_special(special), Some(decoded));
        }
        assert!(SFloat::from_raw(0x07FF).to_f64().is_nan());
        assert_eq!(SFloat::from_raw(0x07FE).to_f64(), f64::INFINITY);
    }

    #[test]
    fn test_sfloat_encode() {
        assert_eq!(SFloat::from_f64(36.5).to_raw(), 0xF16D);
        assert_eq!(SFloat::from_f64(120.0).to_raw(), 0x0078);
        assert_eq!(SFloat::from_f64(30_000.0).to_f64(), 30_000.0);
        assert_eq!(SFloat::from_f64(0.0).to_raw(), 0x0000);
        assert_eq!(SFloat::from_f64(f64::NAN).to_raw(), SFloat::NAN_RAW);
        assert_eq!(
            SFloat::from_f64(f64::NEG_INFINITY).to_raw(),
            SFloat::NEGATIVE_INFINITY_RAW
        );
        assert_eq!(SFloat::from_f64(-12.5).to_f64(), -12.5);
    }

    #[test]
    fn test_float_decode_and_encode() {
        // exponent -2, mantissa 3650 => 36.5
        let raw = 0xFE00_0E42;
        let value = MedFloat32::from_raw(raw);
        assert_eq!(value.to_f64(), 36.5);
        assert_eq!(MedFloat32::from_f64(36.5).to_f64(), 36.5);
        assert_eq!(MedFloat32::from_f64(-0.25).to_f64(), -0.25);
    }

    #[test]
    fn test_sfloat_every_finite_pattern_round_trips() {
        for raw in 0..=u16::MAX {
            let decoded = SFloat::from_raw(raw);
            if !decoded.is_value() {
                continue;
            }
            let value = decoded.to_f64();
            assert_eq!(SFloat::from_f64(value).to_f64(), value, "{raw:#06X}");
        }
        // mantissa 2046 is only a sentinel at exponent zero
        assert_eq!(SFloat::from_raw(0x37FE).to_f64(), 2_046_000.0);
        assert_eq!(SFloat::from_f64(2_046_000.0).to_raw(), 0x37FE);
        assert_eq!(SFloat::from_f64(-204.8).to_raw(), 0xF800);
        assert_eq!(SFloat::from_f64(2046.0).to_f64(), 2050.0);
    }

    #[test]
    fn test_float_extreme_mantissas_round_trip() {
        let mantissas = [-0x80_0000, -0x7F_FFFF, -0x7F_FFFE, 0x7F_FFFE, 0x7F_FFFF, 1, -1];
        for exponent in [-9i32, -5, -1, 1, 3, 9] {
            for mantissa in mantissas {
                let raw = ((exponent as u32) << 24) | (mantissa as u32 & 0x00FF_FFFF);
                let decoded = MedFloat32::from_raw(raw);
                assert!(decoded.is_value(), "{raw:#010X}");
                let value = decoded.to_f64();
                assert_eq!(MedFloat32::from_f64(value).to_f64(), value, "{raw:#010X}");
            }
        }
    }

    #[test]
    fn test_float_sentinels_round_trip() {
        for raw in [0x007F_FFFF, 0x0080_0000, 0x007F_FFFE, 0x0080_0002, 0x0080_0001] {
            assert_eq!(MedFloat32::from_raw(raw).to_raw(), raw);
        }
    }
}
