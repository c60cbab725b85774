//! Class of Device
//!
//! The 24-bit field carried by AD type 0x0D and by BR/EDR extended inquiry
//! responses:
//! - Major Service Classes (bits 23-13)
//! - Major Device Class (bits 12-8)
//! - Minor Device Class (bits 7-2)
//! - Format Type (bits 1-0, always `0b00`)

use crate::error::CodecError;
use core::fmt;

sig_enum! {
    /// Device category
    pub enum MajorDeviceClass: u8 {
        /// Miscellaneous
        Miscellaneous = 0x00,
        /// Desktop, server, laptop, tablet
        Computer = 0x01,
        /// Cellular, cordless, smartphone
        Phone = 0x02,
        /// LAN / network access point
        LanNetworkAccessPoint = 0x03,
        /// Headset, speaker, display
        AudioVideo = 0x04,
        /// Keyboard, mouse, joystick
        Peripheral = 0x05,
        /// Printer, scanner, camera, display
        Imaging = 0x06,
        /// Watch, glasses
        Wearable = 0x07,
        /// Robot, vehicle, controller
        Toy = 0x08,
        /// Thermometer, scale, monitor
        Health = 0x09,
        /// Uncategorized
        Uncategorized = 0x1F,
    }
}

impl MajorDeviceClass {
    /// Human readable category
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Miscellaneous => "Miscellaneous",
            Self::Computer => "Computer",
            Self::Phone => "Phone",
            Self::LanNetworkAccessPoint => "LAN/Network Access Point",
            Self::AudioVideo => "Audio/Video",
            Self::Peripheral => "Peripheral",
            Self::Imaging => "Imaging",
            Self::Wearable => "Wearable",
            Self::Toy => "Toy",
            Self::Health => "Health",
            Self::Uncategorized => "Uncategorized",
            Self::Reserved(_) => "Reserved",
        }
    }

    /// Human readable minor class within this category
    #[must_use]
    pub const fn minor_description(self, minor: u8) -> Option<&'static str> {
        match (self, minor) {
            (Self::Computer, 0x01) => Some("Desktop workstation"),
            (Self::Computer, 0x02) => Some("Server-class computer"),
            (Self::Computer, 0x03) => Some("Laptop"),
            (Self::Computer, 0x04) => Some("Handheld PC/PDA"),
            (Self::Computer, 0x05) => Some("Palm-sized PC/PDA"),
            (Self::Computer, 0x06) => Some("Wearable computer"),
            (Self::Computer, 0x07) => Some("Tablet"),
            (Self::Phone, 0x01) => Some("Cellular"),
            (Self::Phone, 0x02) => Some("Cordless"),
            (Self::Phone, 0x03) => Some("Smartphone"),
            (Self::Phone, 0x04) => Some("Wired modem or voice gateway"),
            (Self::AudioVideo, 0x01) => Some("Wearable headset device"),
            (Self::AudioVideo, 0x02) => Some("Hands-free device"),
            (Self::AudioVideo, 0x04) => Some("Microphone"),
            (Self::AudioVideo, 0x05) => Some("Loudspeaker"),
            (Self::AudioVideo, 0x06) => Some("Headphones"),
            (Self::AudioVideo, 0x07) => Some("Portable audio"),
            (Self::AudioVideo, 0x08) => Some("Car audio"),
            (Self::AudioVideo, 0x0A) => Some("HiFi audio device"),
            (Self::Peripheral, minor) => match (minor >> 4) & 0x3 {
                1 => Some("Keyboard"),
                2 => Some("Pointing device"),
                3 => Some("Combo keyboard/pointing device"),
                _ => match minor & 0xF {
                    1 => Some("Joystick"),
                    2 => Some("Gamepad"),
                    3 => Some("Remote control"),
                    4 => Some("Sensing device"),
                    _ => None,
                },
            },
            (Self::Wearable, 0x01) => Some("Wristwatch"),
            (Self::Wearable, 0x05) => Some("Glasses"),
            (Self::Health, 0x01) => Some("Blood pressure monitor"),
            (Self::Health, 0x02) => Some("Thermometer"),
            (Self::Health, 0x03) => Some("Weighing scale"),
            (Self::Health, 0x04) => Some("Glucose meter"),
            (Self::Health, 0x05) => Some("Pulse oximeter"),
            (Self::Health, 0x06) => Some("Heart/pulse rate monitor"),
            (Self::Health, 0x08) => Some("Step counter"),
            (Self::Health, 0x09) => Some("Body composition analyzer"),
            (major, 0x00) if !major.is_reserved() => Some("Uncategorized"),
            _ => None,
        }
    }
}

/// Names of the major service class bits, bit 13 first
const SERVICE_CLASS_NAMES: [(u32, &str); 9] = [
    (13, "Limited Discoverable"),
    (16, "Positioning"),
    (17, "Networking"),
    (18, "Rendering"),
    (19, "Capturing"),
    (20, "Object Transfer"),
    (21, "Audio"),
    (22, "Telephony"),
    (23, "Information"),
];

/// A 24-bit Class of Device value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClassOfDevice(u32);

impl ClassOfDevice {
    /// Wrap a raw value; bits above 23 are discarded
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw & 0x00FF_FFFF)
    }

    /// Decode the 3 little-endian bytes of an AD structure
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] unless exactly 3 bytes are given.
    pub fn from_le_slice(data: &[u8]) -> Result<Self, CodecError> {
        match data {
            [b0, b1, b2] => Ok(Self::from_raw(u32::from_le_bytes([*b0, *b1, *b2, 0]))),
            _ => Err(CodecError::insufficient(3, data.len())),
        }
    }

    /// Raw 24-bit value
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Major device class (bits 12-8)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn major_device_class(self) -> MajorDeviceClass {
        MajorDeviceClass::from_raw(((self.0 >> 8) & 0x1F) as u8)
    }

    /// Minor device class (bits 7-2)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn minor_device_class(self) -> u8 {
        ((self.0 >> 2) & 0x3F) as u8
    }

    /// Major service class bits (bits 23-13)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn major_service_classes(self) -> u16 {
        ((self.0 >> 13) & 0x7FF) as u16
    }

    /// Names of the advertised service classes
    pub fn service_classes(self) -> impl Iterator<Item = &'static str> {
        SERVICE_CLASS_NAMES
            .into_iter()
            .filter(move |(bit, _)| (self.0 & (1 << bit)) != 0)
            .map(|(_, name)| name)
    }
}

impl fmt::Display for ClassOfDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = self.major_device_class();
        f.write_str(major.description())?;
        if let Some(minor) = major.minor_description(self.minor_device_class()) {
            write!(f, " ({minor})")?;
        }
        for (i, service) in self.service_classes().enumerate() {
            f.write_str(if i == 0 { " - Services: " } else { ", " })?;
            f.write_str(service)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn test_headset() {
        let cod = ClassOfDevice::from_le_slice(&[0x04, 0x04, 0x24]).unwrap();
        assert_eq!(cod.raw(), 0x24_0404);
        assert_eq!(cod.major_device_class(), MajorDeviceClass::AudioVideo);
        assert_eq!(cod.minor_device_class(), 0x01);
        assert_eq!(cod.service_classes().collect::<Vec<_>>(), ["Rendering", "Audio"]);
        assert_eq!(
            cod.to_string(),
            "Audio/Video (Wearable headset device) - Services: Rendering, Audio"
        );
    }

    #[test]
    fn test_reserved_major_class() {
        let cod = ClassOfDevice::from_raw(0x0000_0A00);
        assert_eq!(cod.major_device_class(), MajorDeviceClass::Reserved(0x0A));
        assert_eq!(cod.to_string(), "Reserved");
        assert!(ClassOfDevice::from_le_slice(&[0x00, 0x01]).is_err());
    }
}
