//! Bluetooth SIG assigned numbers
//!
//! Read-only lookup tables for the names, identifiers and codes the codecs
//! and the advertising parser need to render human readable output. Every
//! table is a sorted `static` slice searched with a binary search, so lookups
//! allocate nothing and need no initialization.

mod characteristics;
mod descriptors;
mod gap;
mod services;
mod units;

use characteristics::CHARACTERISTICS;
use descriptors::{DESCRIPTORS, FORMAT_TYPES};
use gap::{AD_TYPES, APPEARANCE_CATEGORIES, COMPANIES, URI_SCHEMES};
use services::SERVICES;
use units::UNITS;

/// Name and identifier of a 16-bit SIG UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UuidRecord {
    /// 16-bit assigned number
    pub uuid: u16,
    /// Human readable name
    pub name: &'static str,
    /// Reverse-DNS identifier, e.g. `org.bluetooth.service.battery_service`
    pub identifier: &'static str,
}

impl UuidRecord {
    const fn new(uuid: u16, name: &'static str, identifier: &'static str) -> Self {
        Self {
            uuid,
            name,
            identifier,
        }
    }
}

/// A unit of measurement (`0x27xx`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnitRecord {
    /// 16-bit assigned number
    pub uuid: u16,
    /// Quantity and unit, e.g. `"thermodynamic temperature (degree Celsius)"`
    pub name: &'static str,
    /// Printable symbol, empty for dimensionless units
    pub symbol: &'static str,
}

/// A Characteristic Presentation Format type code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FormatTypeRecord {
    /// Format code
    pub code: u8,
    /// Short name, e.g. `"uint16"`
    pub short_name: &'static str,
    /// Description
    pub description: &'static str,
    /// Size in bits, `None` for variable length formats
    pub bits: Option<u16>,
}

fn find<T: Copy, K: Ord>(table: &[T], key: K, key_of: impl Fn(&T) -> K) -> Option<T> {
    table
        .binary_search_by(|entry| key_of(entry).cmp(&key))
        .ok()
        .map(|index| table[index])
}

/// Name and identifier of a characteristic UUID
#[must_use]
pub fn characteristic(uuid: u16) -> Option<UuidRecord> {
    find(CHARACTERISTICS, uuid, |r| r.uuid)
}

/// Look up a characteristic by name or identifier, ignoring ASCII case
///
/// Accepts the display name (`"Battery Level"`), the full identifier
/// (`"org.bluetooth.characteristic.battery_level"`) or its last segment
/// (`"battery_level"`).
#[must_use]
pub fn characteristic_by_name(name: &str) -> Option<UuidRecord> {
    let name = name.trim();
    CHARACTERISTICS.iter().copied().find(|record| {
        record.name.eq_ignore_ascii_case(name)
            || record.identifier.eq_ignore_ascii_case(name)
            || record
                .identifier
                .rsplit('.')
                .next()
                .is_some_and(|tail| tail.eq_ignore_ascii_case(name))
    })
}

/// Name and identifier of a service UUID
#[must_use]
pub fn service(uuid: u16) -> Option<UuidRecord> {
    find(SERVICES, uuid, |r| r.uuid)
}

/// Name and identifier of a descriptor UUID
#[must_use]
pub fn descriptor(uuid: u16) -> Option<UuidRecord> {
    find(DESCRIPTORS, uuid, |r| r.uuid)
}

/// Unit of measurement by its `0x27xx` UUID
#[must_use]
pub fn unit(uuid: u16) -> Option<UnitRecord> {
    find(UNITS, uuid, |r| r.uuid)
}

/// Presentation Format type by code
#[must_use]
pub fn format_type(code: u8) -> Option<FormatTypeRecord> {
    find(FORMAT_TYPES, code, |r| r.code)
}

/// URI scheme prefix for the scheme code of a URI AD structure
#[must_use]
pub fn uri_scheme(code: u8) -> Option<&'static str> {
    find(URI_SCHEMES, code, |r| r.0).map(|r| r.1)
}

/// Company name by SIG company identifier
#[must_use]
pub fn company(id: u16) -> Option<&'static str> {
    find(COMPANIES, id, |r| r.0).map(|r| r.1)
}

/// Appearance category name (appearance value bits 6..=15)
#[must_use]
pub fn appearance_category(category: u16) -> Option<&'static str> {
    find(APPEARANCE_CATEGORIES, category, |r| r.0).map(|r| r.1)
}

/// Name of an AD structure type
#[must_use]
pub fn ad_type_name(ad_type: u8) -> Option<&'static str> {
    find(AD_TYPES, ad_type, |r| r.0).map(|r| r.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted<K: Ord + core::fmt::Debug>(keys: impl Iterator<Item = K>) {
        let keys: alloc::vec::Vec<K> = keys.collect();
        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1], "{:?} is not before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_tables_sorted() {
        assert_sorted(CHARACTERISTICS.iter().map(|r| r.uuid));
        assert_sorted(SERVICES.iter().map(|r| r.uuid));
        assert_sorted(DESCRIPTORS.iter().map(|r| r.uuid));
        assert_sorted(UNITS.iter().map(|r| r.uuid));
        assert_sorted(FORMAT_TYPES.iter().map(|r| r.code));
        assert_sorted(URI_SCHEMES.iter().map(|r| r.0));
        assert_sorted(COMPANIES.iter().map(|r| r.0));
        assert_sorted(APPEARANCE_CATEGORIES.iter().map(|r| r.0));
        assert_sorted(AD_TYPES.iter().map(|r| r.0));
    }

    #[test]
    fn test_characteristic_lookup() {
        let record = characteristic(0x2A19).unwrap();
        assert_eq!(record.name, "Battery Level");
        assert_eq!(record.identifier, "org.bluetooth.characteristic.battery_level");
        assert!(characteristic(0x1234).is_none());
    }

    #[test]
    fn test_characteristic_by_name() {
        assert_eq!(characteristic_by_name("battery level").unwrap().uuid, 0x2A19);
        assert_eq!(
            characteristic_by_name("org.bluetooth.characteristic.heart_rate_measurement")
                .unwrap()
                .uuid,
            0x2A37
        );
        assert_eq!(characteristic_by_name("humidity").unwrap().uuid, 0x2A6F);
        assert!(characteristic_by_name("flux capacitor").is_none());
    }

    #[test]
    fn test_service_and_descriptor_lookup() {
        assert_eq!(service(0x180F).unwrap().name, "Battery");
        assert_eq!(service(0x181A).unwrap().name, "Environmental Sensing");
        assert_eq!(
            descriptor(0x2902).unwrap().name,
            "Client Characteristic Configuration"
        );
    }

    #[test]
    fn test_units_and_formats() {
        assert_eq!(unit(0x272F).unwrap().symbol, "°C");
        assert_eq!(unit(0x27AD).unwrap().symbol, "%");
        let format = format_type(0x06).unwrap();
        assert_eq!(format.short_name, "uint16");
        assert_eq!(format.bits, Some(16));
        assert_eq!(format_type(0x19).unwrap().bits, None);
    }

    #[test]
    fn test_gap_tables() {
        assert_eq!(uri_scheme(0x17), Some("https:"));
        assert_eq!(company(0x004C), Some("Apple, Inc."));
        assert_eq!(appearance_category(12), Some("Thermometer"));
        assert_eq!(ad_type_name(0xFF), Some("Manufacturer Specific Data"));
        assert!(ad_type_name(0x00).is_none());
    }
}
