//! Code generators for the simple characteristic shapes
//!
//! Most SIG characteristics are a single scaled integer, an enumerated code,
//! a flag set or a string. The macros here emit the codec type and its
//! [`Characteristic`](super::Characteristic) impl for those shapes.

use super::{SpecialValue, SpecialValueKind};
use crate::error::CodecError;
use crate::uuid::BluetoothUuid;
use alloc::vec::Vec;

/// A little-endian integer field occupying a whole payload
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawField {
    width: usize,
    signed: bool,
}

impl RawField {
    pub(crate) const fn new(width: usize, signed: bool) -> Self {
        Self { width, signed }
    }

    /// Raw bits and the (sign extended) integer value
    pub(crate) fn read(self, data: &[u8]) -> Result<(u64, i64), CodecError> {
        let bits = crate::codec::decode_unsigned(data, 0, self.width)?;
        let value = if self.signed {
            crate::codec::decode_signed(data, 0, self.width)?
        } else {
            #[allow(clippy::cast_possible_wrap)]
            let value = bits as i64;
            value
        };
        Ok((bits, value))
    }

    const fn bounds(self) -> (i64, i64) {
        let bits = 8 * self.width as u32;
        if self.signed {
            (-(1i64 << (bits - 1)), (1i64 << (bits - 1)) - 1)
        } else {
            (0, (1i64 << bits) - 1)
        }
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
    pub(crate) fn write(self, field: &'static str, raw: i64) -> Result<Vec<u8>, CodecError> {
        let (min, max) = self.bounds();
        if raw < min || raw > max {
            return Err(CodecError::OutOfRange {
                field,
                value: raw as f64,
                min: min as f64,
                max: max as f64,
            });
        }
        Ok((raw as u64).to_le_bytes()[..self.width].to_vec())
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn find_special(
        bits: u64,
        specials: &[(u64, SpecialValueKind)],
    ) -> Option<SpecialValue> {
        specials
            .iter()
            .find(|(raw, _)| *raw == bits)
            .map(|&(raw, kind)| SpecialValue::new(kind, raw as u32))
    }

    pub(crate) fn write_special(
        self,
        special: SpecialValue,
        specials: &[(u64, SpecialValueKind)],
        uuid: BluetoothUuid,
    ) -> Result<Vec<u8>, CodecError> {
        specials
            .iter()
            .find(|(raw, _)| *raw == u64::from(special.raw))
            .or_else(|| specials.iter().find(|(_, kind)| *kind == special.kind))
            .map(|(raw, _)| raw.to_le_bytes()[..self.width].to_vec())
            .ok_or(CodecError::Unsupported(uuid))
    }
}

/// Reject reserved enumeration codes
pub(crate) fn check_reserved(
    field: &'static str,
    reserved: bool,
    raw: u32,
) -> Result<(), CodecError> {
    if reserved {
        Err(CodecError::Reserved { field, value: raw })
    } else {
        Ok(())
    }
}

/// Enumerated code with a catch-all `Reserved` variant
macro_rules! sig_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $repr:ty {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// Code reserved for future use
            Reserved($repr),
        }

        impl $name {
            /// Decode a raw code; unassigned codes become `Reserved`
            #[must_use]
            pub const fn from_raw(raw: $repr) -> Self {
                match raw {
                    $($value => Self::$variant,)*
                    other => Self::Reserved(other),
                }
            }

            /// Raw wire code
            #[must_use]
            pub const fn to_raw(self) -> $repr {
                match self {
                    $(Self::$variant => $value,)*
                    Self::Reserved(raw) => raw,
                }
            }

            /// Whether the code is reserved
            #[must_use]
            pub const fn is_reserved(self) -> bool {
                matches!(self, Self::Reserved(_))
            }
        }
    };
}

/// Single-byte enumerated characteristic over a [`sig_enum!`] type
macro_rules! enum_characteristic {
    (
        $(#[$meta:meta])*
        $name:ident => $value:ty {
            uuid: $uuid:literal,
            name: $display:literal,
            id: $id:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl $crate::characteristic::Characteristic for $name {
            type Value = $value;
            const INFO: $crate::characteristic::CharacteristicInfo =
                $crate::characteristic::CharacteristicInfo::new(
                    $uuid,
                    $display,
                    $id,
                    None,
                    $crate::characteristic::ValueType::Enum,
                );
            const LENGTH: $crate::characteristic::LengthRule =
                $crate::characteristic::LengthRule::Exact(1);

            fn decode_value(
                data: &[u8],
                _ctx: &$crate::characteristic::ParseContext<'_>,
            ) -> Result<$crate::characteristic::Decoded<$value>, $crate::error::CodecError> {
                Ok($crate::characteristic::Decoded::Value(<$value>::from_raw(data[0])))
            }

            fn encode_value(value: &$value) -> Result<alloc::vec::Vec<u8>, $crate::error::CodecError> {
                Ok(alloc::vec![value.to_raw()])
            }

            fn validate(value: &$value) -> Result<(), $crate::error::CodecError> {
                $crate::characteristic::check_reserved(
                    $display,
                    value.is_reserved(),
                    u32::from(value.to_raw()),
                )
            }
        }
    };
}

/// Whole-payload integer scaled to `f64` by a [`Resolution`](crate::codec::Resolution)
macro_rules! scaled_characteristic {
    (
        $(#[$meta:meta])*
        $name:ident {
            uuid: $uuid:literal,
            name: $display:literal,
            id: $id:literal,
            unit: $unit:expr,
            width: $width:literal,
            signed: $signed:literal,
            resolution: $res:expr,
            range: $min:expr => $max:expr,
            special: [$($sraw:literal => $skind:ident),* $(,)?] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl $name {
            const FIELD: $crate::characteristic::RawField =
                $crate::characteristic::RawField::new($width, $signed);
            const SPECIALS: &'static [(u64, $crate::characteristic::SpecialValueKind)] =
                &[$(($sraw, $crate::characteristic::SpecialValueKind::$skind)),*];

            /// Fixed-point resolution of the raw field
            pub const RESOLUTION: $crate::codec::Resolution = $res;
        }

        impl $crate::characteristic::Characteristic for $name {
            type Value = f64;
            const INFO: $crate::characteristic::CharacteristicInfo =
                $crate::characteristic::CharacteristicInfo::new(
                    $uuid,
                    $display,
                    $id,
                    $unit,
                    $crate::characteristic::ValueType::Float,
                );
            const LENGTH: $crate::characteristic::LengthRule =
                $crate::characteristic::LengthRule::Exact($width);

            fn decode_value(
                data: &[u8],
                ctx: &$crate::characteristic::ParseContext<'_>,
            ) -> Result<$crate::characteristic::Decoded<f64>, $crate::error::CodecError> {
                let (bits, raw) = Self::FIELD.read(data)?;
                if let Some(special) = $crate::characteristic::RawField::find_special(bits, Self::SPECIALS)
                    .filter(|_| ctx.validate)
                {
                    return Ok($crate::characteristic::Decoded::Special(special));
                }
                Ok($crate::characteristic::Decoded::Value(Self::RESOLUTION.apply(raw)))
            }

            fn encode_value(value: &f64) -> Result<alloc::vec::Vec<u8>, $crate::error::CodecError> {
                let raw = Self::RESOLUTION.unapply($display, *value)?;
                Self::FIELD.write($display, raw)
            }

            fn validate(value: &f64) -> Result<(), $crate::error::CodecError> {
                $crate::error::CodecError::check_range($display, *value, $min, $max)
            }

            fn encode_special(
                special: $crate::characteristic::SpecialValue,
            ) -> Result<alloc::vec::Vec<u8>, $crate::error::CodecError> {
                Self::FIELD.write_special(special, Self::SPECIALS, <Self as $crate::characteristic::Characteristic>::INFO.uuid)
            }
        }
    };
}

/// Whole-payload integer kept as an integer
macro_rules! integer_characteristic {
    (
        $(#[$meta:meta])*
        $name:ident {
            uuid: $uuid:literal,
            name: $display:literal,
            id: $id:literal,
            unit: $unit:expr,
            value: $vt:ty,
            width: $width:literal,
            signed: $signed:literal,
            range: $min:expr => $max:expr,
            special: [$($sraw:literal => $skind:ident),* $(,)?] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl $name {
            const FIELD: $crate::characteristic::RawField =
                $crate::characteristic::RawField::new($width, $signed);
            const SPECIALS: &'static [(u64, $crate::characteristic::SpecialValueKind)] =
                &[$(($sraw, $crate::characteristic::SpecialValueKind::$skind)),*];
        }

        impl $crate::characteristic::Characteristic for $name {
            type Value = $vt;
            const INFO: $crate::characteristic::CharacteristicInfo =
                $crate::characteristic::CharacteristicInfo::new(
                    $uuid,
                    $display,
                    $id,
                    $unit,
                    $crate::characteristic::ValueType::Int,
                );
            const LENGTH: $crate::characteristic::LengthRule =
                $crate::characteristic::LengthRule::Exact($width);

            fn decode_value(
                data: &[u8],
                ctx: &$crate::characteristic::ParseContext<'_>,
            ) -> Result<$crate::characteristic::Decoded<$vt>, $crate::error::CodecError> {
                let (bits, raw) = Self::FIELD.read(data)?;
                if let Some(special) = $crate::characteristic::RawField::find_special(bits, Self::SPECIALS)
                    .filter(|_| ctx.validate)
                {
                    return Ok($crate::characteristic::Decoded::Special(special));
                }
                $crate::codec::narrow::<$vt>($display, raw).map($crate::characteristic::Decoded::Value)
            }

            fn encode_value(value: &$vt) -> Result<alloc::vec::Vec<u8>, $crate::error::CodecError> {
                Self::FIELD.write($display, i64::from(*value))
            }

            fn validate(value: &$vt) -> Result<(), $crate::error::CodecError> {
                $crate::error::CodecError::check_range($display, f64::from(*value), $min, $max)
            }

            fn encode_special(
                special: $crate::characteristic::SpecialValue,
            ) -> Result<alloc::vec::Vec<u8>, $crate::error::CodecError> {
                Self::FIELD.write_special(special, Self::SPECIALS, <Self as $crate::characteristic::Characteristic>::INFO.uuid)
            }
        }
    };
}

/// IEEE-11073 SFLOAT characteristic decoded to `f64`
macro_rules! sfloat_characteristic {
    (
        $(#[$meta:meta])*
        $name:ident {
            uuid: $uuid:literal,
            name: $display:literal,
            id: $id:literal,
            unit: $unit:expr,
            range: $min:expr => $max:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl $crate::characteristic::Characteristic for $name {
            type Value = f64;
            const INFO: $crate::characteristic::CharacteristicInfo =
                $crate::characteristic::CharacteristicInfo::new(
                    $uuid,
                    $display,
                    $id,
                    $unit,
                    $crate::characteristic::ValueType::Float,
                );
            const LENGTH: $crate::characteristic::LengthRule =
                $crate::characteristic::LengthRule::Exact(2);

            fn decode_value(
                data: &[u8],
                ctx: &$crate::characteristic::ParseContext<'_>,
            ) -> Result<$crate::characteristic::Decoded<f64>, $crate::error::CodecError> {
                let value = $crate::codec::SFloat::from_raw(u16::from_le_bytes([data[0], data[1]]));
                match value.special() {
                    Some(special) if ctx.validate => Ok($crate::characteristic::Decoded::Special(special)),
                    _ => Ok($crate::characteristic::Decoded::Value(value.to_f64())),
                }
            }

            fn encode_value(value: &f64) -> Result<alloc::vec::Vec<u8>, $crate::error::CodecError> {
                Ok($crate::codec::SFloat::from_f64(*value).to_raw().to_le_bytes().to_vec())
            }

            fn validate(value: &f64) -> Result<(), $crate::error::CodecError> {
                $crate::error::CodecError::check_range($display, *value, $min, $max)
            }

            fn encode_special(
                special: $crate::characteristic::SpecialValue,
            ) -> Result<alloc::vec::Vec<u8>, $crate::error::CodecError> {
                $crate::codec::SFloat::from_special(special)
                    .map(|v| v.to_raw().to_le_bytes().to_vec())
                    .ok_or($crate::error::CodecError::Unsupported(
                        <Self as $crate::characteristic::Characteristic>::INFO.uuid,
                    ))
            }
        }
    };
}

/// UTF-8 string characteristic, optionally with a fixed NUL-padded length
macro_rules! utf8_characteristic {
    (
        $(#[$meta:meta])*
        $name:ident {
            uuid: $uuid:literal,
            name: $display:literal,
            id: $id:literal $(,)?
        }
    ) => {
        utf8_characteristic! {
            $(#[$meta])*
            $name {
                uuid: $uuid,
                name: $display,
                id: $id,
                length: $crate::characteristic::LengthRule::Any,
            }
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident {
            uuid: $uuid:literal,
            name: $display:literal,
            id: $id:literal,
            length: $length:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl $crate::characteristic::Characteristic for $name {
            type Value = alloc::string::String;
            const INFO: $crate::characteristic::CharacteristicInfo =
                $crate::characteristic::CharacteristicInfo::new(
                    $uuid,
                    $display,
                    $id,
                    None,
                    $crate::characteristic::ValueType::String,
                );
            const LENGTH: $crate::characteristic::LengthRule = $length;

            fn decode_value(
                data: &[u8],
                _ctx: &$crate::characteristic::ParseContext<'_>,
            ) -> Result<$crate::characteristic::Decoded<alloc::string::String>, $crate::error::CodecError> {
                $crate::codec::decode_utf8(data).map($crate::characteristic::Decoded::Value)
            }

            fn encode_value(
                value: &alloc::string::String,
            ) -> Result<alloc::vec::Vec<u8>, $crate::error::CodecError> {
                let mut out = value.as_bytes().to_vec();
                if let $crate::characteristic::LengthRule::Exact(n) = Self::LENGTH {
                    if out.len() > n {
                        return Err($crate::error::CodecError::InvalidLength {
                            rule: Self::LENGTH,
                            actual: out.len(),
                        });
                    }
                    out.resize(n, 0);
                }
                Ok(out)
            }
        }
    };
}

/// Flag set characteristic; unassigned bits are preserved
macro_rules! bitfield_characteristic {
    (
        $(#[$meta:meta])*
        $name:ident => $(#[$vmeta:meta])* $value:ident {
            uuid: $uuid:literal,
            name: $display:literal,
            id: $id:literal,
            width: $width:literal,
            bits: {
                $(
                    $(#[$fmeta:meta])*
                    $flag:ident = $bit:literal
                ),* $(,)?
            } $(,)?
        }
    ) => {
        $(#[$vmeta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub struct $value {
            /// Raw flag bits
            pub bits: u32,
        }

        impl $value {
            /// Wrap raw flag bits
            #[must_use]
            pub const fn from_bits(bits: u32) -> Self {
                Self { bits }
            }

            $(
                $(#[$fmeta])*
                #[must_use]
                pub const fn $flag(&self) -> bool {
                    self.bits & (1 << $bit) != 0
                }
            )*
        }

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl $name {
            const FIELD: $crate::characteristic::RawField =
                $crate::characteristic::RawField::new($width, false);
        }

        impl $crate::characteristic::Characteristic for $name {
            type Value = $value;
            const INFO: $crate::characteristic::CharacteristicInfo =
                $crate::characteristic::CharacteristicInfo::new(
                    $uuid,
                    $display,
                    $id,
                    None,
                    $crate::characteristic::ValueType::BitField,
                );
            const LENGTH: $crate::characteristic::LengthRule =
                $crate::characteristic::LengthRule::Exact($width);

            #[allow(clippy::cast_possible_truncation)]
            fn decode_value(
                data: &[u8],
                _ctx: &$crate::characteristic::ParseContext<'_>,
            ) -> Result<$crate::characteristic::Decoded<$value>, $crate::error::CodecError> {
                let (bits, _) = Self::FIELD.read(data)?;
                Ok($crate::characteristic::Decoded::Value($value::from_bits(bits as u32)))
            }

            fn encode_value(value: &$value) -> Result<alloc::vec::Vec<u8>, $crate::error::CodecError> {
                Self::FIELD.write($display, i64::from(value.bits))
            }
        }
    };
}
