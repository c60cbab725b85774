//! Bluetooth UUIDs
//!
//! All UUIDs are normalized to their 128-bit value so that `0x2A19`,
//! `"2a19"` and `"00002A19-0000-1000-8000-00805F9B34FB"` compare equal.
//! Short (16-bit and 32-bit) aliases are expanded over the Bluetooth Base UUID.

use crate::error::CodecError;
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

/// The Bluetooth Base UUID `00000000-0000-1000-8000-00805F9B34FB`
pub const BLUETOOTH_BASE_UUID: u128 = 0x0000_0000_0000_1000_8000_0080_5f9b_34fb;

const BASE_MASK: u128 = (1 << 96) - 1;

const EXPECTED_FORMAT: &str =
    "4, 8 or 32 hex digits, optionally 0x-prefixed, or the 8-4-4-4-12 form";

/// A normalized 128-bit Bluetooth UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BluetoothUuid(u128);

impl BluetoothUuid {
    /// Build a UUID from its full 128-bit value
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(value)
    }

    /// Expand a 16-bit SIG alias over the Base UUID
    #[must_use]
    pub const fn from_u16(short: u16) -> Self {
        Self(((short as u128) << 96) | BLUETOOTH_BASE_UUID)
    }

    /// Expand a 32-bit SIG alias over the Base UUID
    #[must_use]
    pub const fn from_u32(short: u32) -> Self {
        Self(((short as u128) << 96) | BLUETOOTH_BASE_UUID)
    }

    /// Build a UUID from 16 bytes in big-endian (textual) order
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self(u128::from_be_bytes(bytes))
    }

    /// Build a UUID from a little-endian over-the-air field of 2, 4 or 16 bytes
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidLength`] for any other length.
    pub fn from_le_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        match bytes.len() {
            2 => Ok(Self::from_u16(u16::from_le_bytes([bytes[0], bytes[1]]))),
            4 => Ok(Self::from_u32(u32::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ]))),
            16 => {
                let mut raw = [0u8; 16];
                raw.copy_from_slice(bytes);
                Ok(Self(u128::from_le_bytes(raw)))
            }
            actual => Err(CodecError::InvalidLength {
                rule: crate::characteristic::LengthRule::Between(2, 16),
                actual,
            }),
        }
    }

    /// The full 128-bit value
    #[must_use]
    pub const fn as_u128(&self) -> u128 {
        self.0
    }

    /// Whether the UUID is derived from the Base UUID
    #[must_use]
    pub const fn is_sig(&self) -> bool {
        (self.0 & BASE_MASK) == BLUETOOTH_BASE_UUID
    }

    /// The 16-bit alias, if the UUID is a Base-UUID derived 16-bit value
    #[must_use]
    pub const fn to_u16(&self) -> Option<u16> {
        if self.is_sig() && (self.0 >> 96) <= 0xFFFF {
            Some((self.0 >> 96) as u16)
        } else {
            None
        }
    }

    /// The 32-bit alias, if the UUID is Base-UUID derived
    #[must_use]
    pub const fn to_u32(&self) -> Option<u32> {
        if self.is_sig() {
            Some((self.0 >> 96) as u32)
        } else {
            None
        }
    }

    /// The shortest over-the-air little-endian encoding (2, 4 or 16 bytes)
    #[must_use]
    pub fn to_le_vec(&self) -> alloc::vec::Vec<u8> {
        if let Some(short) = self.to_u16() {
            short.to_le_bytes().to_vec()
        } else if let Some(short) = self.to_u32() {
            short.to_le_bytes().to_vec()
        } else {
            self.0.to_le_bytes().to_vec()
        }
    }

    /// Four uppercase hex digits for 16-bit SIG UUIDs, the long form otherwise
    #[must_use]
    pub fn to_short_string(&self) -> heapless::String<36> {
        let mut out = heapless::String::new();
        match self.to_u16() {
            Some(short) => {
                let _ = fmt::write(&mut out, format_args!("{short:04X}"));
            }
            None => {
                let _ = fmt::write(&mut out, format_args!("{self}"));
            }
        }
        out
    }

    /// Parse any of the accepted textual forms
    ///
    /// Accepted: `"2A19"`, `"0x2A19"`, `"00002A19"`, 32 bare hex digits and
    /// `"00002A19-0000-1000-8000-00805F9B34FB"`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidFormat`] naming the rejected input.
    pub fn parse(input: &str) -> Result<Self, CodecError> {
        let invalid = || CodecError::InvalidFormat {
            input: input.to_string(),
            expected: EXPECTED_FORMAT,
        };

        let trimmed = input.trim();
        let body = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let mut digits: heapless::String<32> = heapless::String::new();
        if body.len() == 36 {
            for (i, c) in body.char_indices() {
                if matches!(i, 8 | 13 | 18 | 23) {
                    if c != '-' {
                        return Err(invalid());
                    }
                } else {
                    digits.push(c).map_err(|()| invalid())?;
                }
            }
        } else {
            digits.push_str(body).map_err(|()| invalid())?;
        }

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            4 => u16::from_str_radix(&digits, 16)
                .map(Self::from_u16)
                .map_err(|_| invalid()),
            8 => u32::from_str_radix(&digits, 16)
                .map(Self::from_u32)
                .map_err(|_| invalid()),
            32 => u128::from_str_radix(&digits, 16)
                .map(Self)
                .map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for BluetoothUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(
            f,
            "{:08X}-{:04X}-{:04X}-{:04X}-{:012X}",
            (v >> 96) as u32,
            ((v >> 80) & 0xFFFF) as u16,
            ((v >> 64) & 0xFFFF) as u16,
            ((v >> 48) & 0xFFFF) as u16,
            (v & 0xFFFF_FFFF_FFFF) as u64
        )
    }
}

impl FromStr for BluetoothUuid {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u16> for BluetoothUuid {
    fn from(short: u16) -> Self {
        Self::from_u16(short)
    }
}

impl From<u32> for BluetoothUuid {
    fn from(short: u32) -> Self {
        Self::from_u32(short)
    }
}

impl From<u128> for BluetoothUuid {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for BluetoothUuid {
    type Error = CodecError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_long_forms_are_equal() {
        let short = BluetoothUuid::from_u16(0x2A19);
        let long = BluetoothUuid::parse("00002A19-0000-1000-8000-00805F9B34FB").unwrap();
        let lower = BluetoothUuid::parse("00002a19-0000-1000-8000-00805f9b34fb").unwrap();
        assert_eq!(short, long);
        assert_eq!(short, lower);
        assert_eq!(short, BluetoothUuid::parse("2a19").unwrap());
        assert_eq!(short, BluetoothUuid::parse("0x2A19").unwrap());
        assert_eq!(short, BluetoothUuid::parse("00002A19").unwrap());
        assert_eq!(
            short,
            BluetoothUuid::parse("00002A1900001000800000805F9B34FB").unwrap()
        );
    }

    #[test]
    fn test_formatting() {
        let uuid = BluetoothUuid::from_u16(0x2a6e);
        assert_eq!(uuid.to_short_string().as_str(), "2A6E");
        assert_eq!(
            uuid.to_string(),
            "00002A6E-0000-1000-8000-00805F9B34FB"
        );

        let custom = BluetoothUuid::from_u128(0x12345678_9abc_def0_1234_56789abcdef0);
        assert_eq!(custom.to_u16(), None);
        assert_eq!(
            custom.to_short_string().as_str(),
            "12345678-9ABC-DEF0-1234-56789ABCDEF0"
        );
    }

    #[test]
    fn test_round_trip_long_form() {
        let text = "6E400001-B5A3-F393-E0A9-E50E24DCCA9E";
        let uuid = BluetoothUuid::parse(text).unwrap();
        assert_eq!(uuid.to_string(), text);
    }

    #[test]
    fn test_invalid_inputs() {
        for input in ["", "2A1", "XYZW", "00002A19-0000-1000-8000_00805F9B34FB", "2A19A"] {
            let err = BluetoothUuid::parse(input).unwrap_err();
            assert!(matches!(err, CodecError::InvalidFormat { .. }), "{input}");
        }
    }

    #[test]
    fn test_le_slices() {
        assert_eq!(
            BluetoothUuid::from_le_slice(&[0x0F, 0x18]).unwrap(),
            BluetoothUuid::from_u16(0x180F)
        );
        assert_eq!(
            BluetoothUuid::from_le_slice(&[0x0F, 0x18, 0x00, 0x00]).unwrap(),
            BluetoothUuid::from_u16(0x180F)
        );
        let uuid = BluetoothUuid::from_u128(0x6E400001_B5A3_F393_E0A9_E50E24DCCA9E);
        let le = uuid.to_le_vec();
        assert_eq!(le.len(), 16);
        assert_eq!(BluetoothUuid::from_le_slice(&le).unwrap(), uuid);
        assert!(BluetoothUuid::from_le_slice(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_u32_alias() {
        let uuid = BluetoothUuid::from_u32(0x1234_5678);
        assert_eq!(uuid.to_u32(), Some(0x1234_5678));
        assert_eq!(uuid.to_u16(), None);
        assert_eq!(uuid.to_le_vec(), alloc::vec![0x78, 0x56, 0x34, 0x12]);
    }
}
