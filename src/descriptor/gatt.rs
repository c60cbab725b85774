//! Core GATT descriptors (0x2900 - 0x2905)

use super::{Descriptor, DescriptorInfo};
use crate::characteristic::{LengthRule, ValueType, check_reserved};
use crate::codec::{ByteReader, ByteWriter, decode_utf8};
use crate::error::CodecError;
use crate::metadata::{self, FormatTypeRecord, UnitRecord};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Characteristic Extended Properties value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExtendedProperties {
    /// Reliable Write is permitted
    pub reliable_write: bool,
    /// The User Description descriptor is writable
    pub writable_auxiliaries: bool,
    /// Bits other than the two assigned ones
    pub reserved: u16,
}

impl ExtendedProperties {
    const RELIABLE_WRITE: u16 = 0x0001;
    const WRITABLE_AUXILIARIES: u16 = 0x0002;
}

/// Characteristic Extended Properties (0x2900)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtendedPropertiesDescriptor;

impl Descriptor for ExtendedPropertiesDescriptor {
    type Value = ExtendedProperties;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x2900,
        "Characteristic Extended Properties",
        "org.bluetooth.descriptor.gatt.characteristic_extended_properties",
        None,
        ValueType::BitField,
    );
    const LENGTH: LengthRule = LengthRule::Exact(2);

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        let bits = ByteReader::new(data).read_u16()?;
        Ok(ExtendedProperties {
            reliable_write: bits & ExtendedProperties::RELIABLE_WRITE != 0,
            writable_auxiliaries: bits & ExtendedProperties::WRITABLE_AUXILIARIES != 0,
            reserved: bits & !0x0003,
        })
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut bits = value.reserved;
        if value.reliable_write {
            bits |= ExtendedProperties::RELIABLE_WRITE;
        }
        if value.writable_auxiliaries {
            bits |= ExtendedProperties::WRITABLE_AUXILIARIES;
        }
        Ok(bits.to_le_bytes().to_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        check_reserved(
            "Characteristic Extended Properties",
            value.reserved != 0,
            u32::from(value.reserved),
        )
    }
}

/// Characteristic User Description (0x2901)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserDescriptionDescriptor;

impl Descriptor for UserDescriptionDescriptor {
    type Value = String;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x2901,
        "Characteristic User Description",
        "org.bluetooth.descriptor.gatt.characteristic_user_description",
        None,
        ValueType::String,
    );
    const LENGTH: LengthRule = LengthRule::Any;

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        decode_utf8(data)
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(value.as_bytes().to_vec())
    }
}

/// Client Characteristic Configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClientConfiguration {
    /// Server may send notifications
    pub notifications_enabled: bool,
    /// Server may send indications
    pub indications_enabled: bool,
}

impl ClientConfiguration {
    const NOTIFICATIONS: u16 = 0x0001;
    const INDICATIONS: u16 = 0x0002;

    /// Notifications on, indications off
    pub const NOTIFY: Self = Self {
        notifications_enabled: true,
        indications_enabled: false,
    };

    /// Indications on, notifications off
    pub const INDICATE: Self = Self {
        notifications_enabled: false,
        indications_enabled: true,
    };
}

/// Client Characteristic Configuration (0x2902)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientConfigurationDescriptor;

impl Descriptor for ClientConfigurationDescriptor {
    type Value = ClientConfiguration;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x2902,
        "Client Characteristic Configuration",
        "org.bluetooth.descriptor.gatt.client_characteristic_configuration",
        None,
        ValueType::BitField,
    );
    const LENGTH: LengthRule = LengthRule::Exact(2);

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        let bits = ByteReader::new(data).read_u16()?;
        check_reserved(
            "Client Characteristic Configuration",
            bits & !0x0003 != 0,
            u32::from(bits),
        )?;
        Ok(ClientConfiguration {
            notifications_enabled: bits & ClientConfiguration::NOTIFICATIONS != 0,
            indications_enabled: bits & ClientConfiguration::INDICATIONS != 0,
        })
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let bits = [
            (ClientConfiguration::NOTIFICATIONS, value.notifications_enabled),
            (ClientConfiguration::INDICATIONS, value.indications_enabled),
        ]
        .iter()
        .filter(|(_, set)| *set)
        .fold(0u16, |acc, (flag, _)| acc | *flag);
        Ok(bits.to_le_bytes().to_vec())
    }
}

/// Server Characteristic Configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServerConfiguration {
    /// The value is included in advertising data
    pub broadcasts_enabled: bool,
}

/// Server Characteristic Configuration (0x2903)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerConfigurationDescriptor;

impl Descriptor for ServerConfigurationDescriptor {
    type Value = ServerConfiguration;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x2903,
        "Server Characteristic Configuration",
        "org.bluetooth.descriptor.gatt.server_characteristic_configuration",
        None,
        ValueType::BitField,
    );
    const LENGTH: LengthRule = LengthRule::Exact(2);

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        let bits = ByteReader::new(data).read_u16()?;
        check_reserved(
            "Server Characteristic Configuration",
            bits & !0x0001 != 0,
            u32::from(bits),
        )?;
        Ok(ServerConfiguration {
            broadcasts_enabled: bits & 0x0001 != 0,
        })
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(u16::from(value.broadcasts_enabled).to_le_bytes().to_vec())
    }
}

/// Namespace byte of descriptions assigned by the Bluetooth SIG
pub const NAMESPACE_BLUETOOTH_SIG: u8 = 0x01;

/// A description code from the Bluetooth SIG namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NamespaceDescription {
    /// `0x0000`
    Unknown,
    /// `0x0001 ..= 0x00FF`: first, second, ...
    Ordinal(u8),
    /// Positional names such as "front" or "internal"
    Named(&'static str),
    /// A code the namespace does not assign
    Unassigned(u16),
}

impl NamespaceDescription {
    const NAMED: [&'static str; 17] = [
        "front",
        "back",
        "top",
        "bottom",
        "upper",
        "lower",
        "main",
        "backup",
        "auxiliary",
        "supplementary",
        "flash",
        "inside",
        "outside",
        "left",
        "right",
        "internal",
        "external",
    ];

    /// Resolve a description code
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Self::Unknown,
            1..=0xFF => Self::Ordinal(code as u8),
            0x0100..=0x0110 => Self::Named(Self::NAMED[usize::from(code - 0x0100)]),
            other => Self::Unassigned(other),
        }
    }
}

impl fmt::Display for NamespaceDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            Self::Ordinal(n) => {
                let suffix = match (n % 10, n % 100) {
                    (1, 11) | (2, 12) | (3, 13) => "th",
                    (1, _) => "st",
                    (2, _) => "nd",
                    (3, _) => "rd",
                    _ => "th",
                };
                write!(f, "{n}{suffix}")
            }
            Self::Named(name) => f.write_str(name),
            Self::Unassigned(code) => write!(f, "unassigned (0x{code:04X})"),
        }
    }
}

/// Characteristic Presentation Format value
///
/// The raw codes are authoritative for encoding. The resolved records are
/// filled in by [`PresentationFormat::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationFormat {
    /// Format type code
    pub format: u8,
    /// Base-10 exponent applied to integer formats
    pub exponent: i8,
    /// Unit UUID (`0x27xx`)
    pub unit: u16,
    /// Namespace of `description`
    pub namespace: u8,
    /// Description code within `namespace`
    pub description: u16,
    /// Resolved format type
    pub format_type: Option<FormatTypeRecord>,
    /// Resolved unit
    pub unit_record: Option<UnitRecord>,
    /// Resolved description, only for the Bluetooth SIG namespace
    pub description_info: Option<NamespaceDescription>,
}

impl PresentationFormat {
    /// Build a value from raw codes and resolve them against the metadata tables
    #[must_use]
    pub fn new(format: u8, exponent: i8, unit: u16, namespace: u8, description: u16) -> Self {
        Self {
            format,
            exponent,
            unit,
            namespace,
            description,
            format_type: metadata::format_type(format),
            unit_record: metadata::unit(unit),
            description_info: (namespace == NAMESPACE_BLUETOOTH_SIG)
                .then(|| NamespaceDescription::from_code(description)),
        }
    }

    /// Short name of the format type, e.g. `"sint16"`
    #[must_use]
    pub fn format_name(&self) -> Option<&'static str> {
        self.format_type.map(|record| record.short_name)
    }

    /// Unit symbol, e.g. `"°C"`
    #[must_use]
    pub fn unit_symbol(&self) -> Option<&'static str> {
        self.unit_record.map(|record| record.symbol)
    }

    /// Apply the exponent to a raw integer reading
    #[must_use]
    pub fn scale(&self, raw: i64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let raw = raw as f64;
        raw * libm::pow(10.0, f64::from(self.exponent))
    }
}

/// Characteristic Presentation Format (0x2904)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationFormatDescriptor;

impl Descriptor for PresentationFormatDescriptor {
    type Value = PresentationFormat;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x2904,
        "Characteristic Presentation Format",
        "org.bluetooth.descriptor.gatt.characteristic_presentation_format",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(7);

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        let mut reader = ByteReader::new(data);
        Ok(PresentationFormat::new(
            reader.read_u8()?,
            reader.read_i8()?,
            reader.read_u16()?,
            reader.read_u8()?,
            reader.read_u16()?,
        ))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::with_capacity(7);
        writer
            .write_u8(value.format)
            .write_i8(value.exponent)
            .write_u16(value.unit)
            .write_u8(value.namespace)
            .write_u16(value.description);
        Ok(writer.into_vec())
    }
}

/// Characteristic Aggregate Format (0x2905)
///
/// Lists the attribute handles of the Presentation Format descriptors that
/// together describe an aggregated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregateFormatDescriptor;

impl Descriptor for AggregateFormatDescriptor {
    type Value = Vec<u16>;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x2905,
        "Characteristic Aggregate Format",
        "org.bluetooth.descriptor.gatt.characteristic_aggregate_format",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Multiple { base: 0, step: 2 };

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        Ok(data
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect())
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(value.iter().flat_map(|handle| handle.to_le_bytes()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_extended_properties() {
        let props = ExtendedPropertiesDescriptor::decode(&[0x03, 0x00]).unwrap();
        assert!(props.reliable_write);
        assert!(props.writable_auxiliaries);
        assert_eq!(ExtendedPropertiesDescriptor::encode(&props).unwrap(), [0x03, 0x00]);
        assert!(matches!(
            ExtendedPropertiesDescriptor::decode(&[0x04, 0x00]),
            Err(CodecError::Reserved { .. })
        ));
    }

    #[test]
    fn test_cccd() {
        let config = ClientConfigurationDescriptor::decode(&[0x01, 0x00]).unwrap();
        assert_eq!(config, ClientConfiguration::NOTIFY);
        assert_eq!(
            ClientConfigurationDescriptor::encode(&ClientConfiguration::INDICATE).unwrap(),
            [0x02, 0x00]
        );
        assert!(ClientConfigurationDescriptor::decode(&[0x08, 0x00]).is_err());
    }

    #[test]
    fn test_user_description() {
        assert_eq!(
            UserDescriptionDescriptor::decode(b"Outdoor").unwrap(),
            "Outdoor"
        );
        assert!(matches!(
            UserDescriptionDescriptor::decode(&[0xC3, 0x28]),
            Err(CodecError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_presentation_format_resolves_codes() {
        // sint16, exponent -2, degrees Celsius, SIG namespace, "internal"
        let bytes = [0x0E, 0xFE, 0x2F, 0x27, 0x01, 0x0F, 0x01];
        let format = PresentationFormatDescriptor::decode(&bytes).unwrap();
        assert_eq!(format.format_name(), Some("sint16"));
        assert_eq!(format.exponent, -2);
        assert_eq!(format.unit_symbol(), Some("°C"));
        assert_eq!(
            format.description_info,
            Some(NamespaceDescription::Named("internal"))
        );
        assert!((format.scale(2150) - 21.5).abs() < 1e-9);
        assert_eq!(PresentationFormatDescriptor::encode(&format).unwrap(), bytes);
    }

    #[test]
    fn test_presentation_format_foreign_namespace() {
        let format = PresentationFormatDescriptor::decode(&[0x04, 0x00, 0xAD, 0x27, 0x02, 0x01, 0x00])
            .unwrap();
        assert_eq!(format.unit_symbol(), Some("%"));
        assert_eq!(format.description_info, None);
    }

    #[test]
    fn test_namespace_description_display() {
        assert_eq!(NamespaceDescription::from_code(1).to_string(), "1st");
        assert_eq!(NamespaceDescription::from_code(12).to_string(), "12th");
        assert_eq!(NamespaceDescription::from_code(23).to_string(), "23rd");
        assert_eq!(NamespaceDescription::from_code(0x0101).to_string(), "back");
        assert_eq!(
            NamespaceDescription::from_code(0x0200),
            NamespaceDescription::Unassigned(0x0200)
        );
    }

    #[test]
    fn test_aggregate_format() {
        let handles = AggregateFormatDescriptor::decode(&[0x10, 0x00, 0x14, 0x00]).unwrap();
        assert_eq!(handles, [0x0010, 0x0014]);
        assert!(AggregateFormatDescriptor::decode(&[0x10]).is_err());
    }
}
