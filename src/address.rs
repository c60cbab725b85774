use crate::characteristic::LengthRule;
use crate::error::CodecError;
use alloc::string::ToString;
use core::fmt;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// A Bluetooth Device Address (`BD_ADDR`)
///
/// Bytes are stored most significant first, the order in which the address
/// is written (`AA:BB:CC:DD:EE:FF`). Over the air the order is reversed; use
/// [`BluetoothAddress::from_le_bytes`] for wire data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BluetoothAddress(pub [u8; 6]);

impl BluetoothAddress {
    /// Create a new Bluetooth address from bytes, most significant first
    #[must_use]
    pub const fn new(addr: [u8; 6]) -> Self {
        Self(addr)
    }

    /// Create an address from its over-the-air little-endian byte order
    #[must_use]
    pub const fn from_le_bytes(le: [u8; 6]) -> Self {
        Self([le[5], le[4], le[3], le[2], le[1], le[0]])
    }

    /// The address in over-the-air little-endian byte order
    #[must_use]
    pub const fn to_le_bytes(&self) -> [u8; 6] {
        let b = self.0;
        [b[5], b[4], b[3], b[2], b[1], b[0]]
    }

    /// Get the raw address bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Whether the two most significant bits mark a random static address
    #[must_use]
    pub const fn is_static_random(&self) -> bool {
        self.0[0] & 0xC0 == 0xC0
    }

    /// Format the address as a colon-separated uppercase hex string
    #[must_use]
    pub fn format_hex(&self) -> heapless::String<17> {
        let mut result = heapless::String::new();
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                result.push(':').ok();
            }
            result.push(char::from(HEX_UPPER[usize::from(byte >> 4)])).ok();
            result.push(char::from(HEX_UPPER[usize::from(byte & 0x0F)])).ok();
        }
        result
    }

    /// Parse a colon-separated hex string, case-insensitive
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidFormat`] unless the input is six
    /// two-digit hex groups separated by colons.
    pub fn from_hex(hex: &str) -> Result<Self, CodecError> {
        let invalid = || CodecError::InvalidFormat {
            input: hex.to_string(),
            expected: "six colon-separated hex bytes, e.g. AA:BB:CC:DD:EE:FF",
        };
        if hex.len() != 17 || !hex.chars().all(|c| c.is_ascii_hexdigit() || c == ':') {
            return Err(invalid());
        }

        let mut bytes = [0u8; 6];
        for (i, byte) in hex.split(':').enumerate() {
            if i >= 6 || byte.len() != 2 {
                return Err(invalid());
            }
            bytes[i] = u8::from_str_radix(byte, 16).map_err(|_| invalid())?;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for BluetoothAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_hex())
    }
}

impl core::str::FromStr for BluetoothAddress {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 6]> for BluetoothAddress {
    fn from(addr: [u8; 6]) -> Self {
        Self(addr)
    }
}

impl From<BluetoothAddress> for [u8; 6] {
    fn from(addr: BluetoothAddress) -> Self {
        addr.0
    }
}

/// `BdAddr` holds the little-endian wire order
impl From<BluetoothAddress> for bt_hci::param::BdAddr {
    fn from(addr: BluetoothAddress) -> Self {
        bt_hci::param::BdAddr::new(addr.to_le_bytes())
    }
}

impl From<bt_hci::param::BdAddr> for BluetoothAddress {
    fn from(bd_addr: bt_hci::param::BdAddr) -> Self {
        let mut le = [0u8; 6];
        le.copy_from_slice(bd_addr.raw());
        Self::from_le_bytes(le)
    }
}

impl From<BluetoothAddress> for heapless::String<17> {
    fn from(addr: BluetoothAddress) -> Self {
        addr.format_hex()
    }
}

impl TryFrom<&str> for BluetoothAddress {
    type Error = CodecError;

    fn try_from(hex: &str) -> Result<Self, Self::Error> {
        BluetoothAddress::from_hex(hex)
    }
}

impl TryFrom<&[u8]> for BluetoothAddress {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let addr: [u8; 6] = bytes
            .try_into()
            .map_err(|_| CodecError::InvalidLength {
                rule: LengthRule::Exact(6),
                actual: bytes.len(),
            })?;
        Ok(BluetoothAddress(addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bluetooth_address_format_hex() {
        let addr = BluetoothAddress::new([0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC]);
        assert_eq!(addr.format_hex().as_str(), "12:34:56:78:9A:BC");
        assert_eq!(addr.to_string(), "12:34:56:78:9A:BC");
    }

    #[test]
    fn test_bluetooth_address_format_hex_edge_cases() {
        let addr_zero = BluetoothAddress::new([0x00; 6]);
        assert_eq!(addr_zero.format_hex().as_str(), "00:00:00:00:00:00");

        let addr_max = BluetoothAddress::new([0xFF; 6]);
        assert_eq!(addr_max.format_hex().as_str(), "FF:FF:FF:FF:FF:FF");

        let addr_mixed = BluetoothAddress::new([0x0A, 0xB1, 0x2C, 0xD3, 0x4E, 0xF5]);
        assert_eq!(addr_mixed.format_hex().as_str(), "0A:B1:2C:D3:4E:F5");
    }

    #[test]
    fn test_bluetooth_address_parse() {
        let addr: BluetoothAddress = "aa:bb:cc:dd:ee:ff".parse().unwrap();
        assert_eq!(addr.as_bytes(), &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);

        assert!(BluetoothAddress::from_hex("AA:BB:CC:DD:EE").is_err());
        assert!(BluetoothAddress::from_hex("AABB:CC:DD:EE:FF:").is_err());
        assert!(matches!(
            BluetoothAddress::from_hex("GG:BB:CC:DD:EE:FF"),
            Err(CodecError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_bluetooth_address_wire_order() {
        let addr = BluetoothAddress::from_le_bytes([0xFF, 0xEE, 0xDD, 0xCC, 0xBB, 0xAA]);
        assert_eq!(addr.format_hex().as_str(), "AA:BB:CC:DD:EE:FF");
        assert_eq!(addr.to_le_bytes(), [0xFF, 0xEE, 0xDD, 0xCC, 0xBB, 0xAA]);
        assert!(addr.is_static_random() == false);

        let bd_addr: bt_hci::param::BdAddr = addr.into();
        assert_eq!(bd_addr.raw(), &[0xFF, 0xEE, 0xDD, 0xCC, 0xBB, 0xAA]);
        assert_eq!(BluetoothAddress::from(bd_addr), addr);
    }

    #[test]
    fn test_bluetooth_address_try_from_slice() {
        let bytes = &[0x12u8, 0x34, 0x56, 0x78, 0x9A, 0xBC][..];
        let addr = BluetoothAddress::try_from(bytes).unwrap();
        assert_eq!(addr.as_bytes(), &[0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC]);

        assert!(BluetoothAddress::try_from(&[0x12u8, 0x34, 0x56][..]).is_err());
        assert!(BluetoothAddress::try_from(&[0u8; 8][..]).is_err());

        let err = BluetoothAddress::try_from(&[0u8; 7][..]).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidLength {
                rule: LengthRule::Exact(6),
                actual: 7
            }
        );
        assert_eq!(err.to_string(), "Invalid length: need 6 bytes, got 7");

        let hex_string: heapless::String<17> = addr.into();
        assert_eq!(hex_string.as_str(), "12:34:56:78:9A:BC");
    }
}
