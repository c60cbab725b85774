//! Location and Navigation characteristics

use super::{
    Characteristic, CharacteristicInfo, Decoded, LengthRule, ParseContext, ValueType,
};
use crate::codec::{ByteReader, ByteWriter, DateTime, Resolution};
use crate::error::CodecError;
use alloc::vec::Vec;

/// Quality of the reported position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PositionStatus {
    /// No position available
    #[default]
    NoPosition,
    /// Position is valid
    Ok,
    /// Position is an estimate
    Estimated,
    /// Last known position
    LastKnown,
}

/// Where the elevation comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ElevationSource {
    /// Positioning system
    #[default]
    PositioningSystem,
    /// Barometric air pressure
    BarometricAirPressure,
    /// Database service
    DatabaseService,
    /// Other source
    Other,
}

/// Latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coordinates {
    /// Degrees north, 1e-7 resolution
    pub latitude: f64,
    /// Degrees east, 1e-7 resolution
    pub longitude: f64,
}

/// Location and Speed value
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocationAndSpeed {
    /// Speed in m/s
    pub speed: Option<f64>,
    /// Distance travelled in metres
    pub total_distance: Option<f64>,
    /// Position
    pub location: Option<Coordinates>,
    /// Elevation in metres
    pub elevation: Option<f64>,
    /// Heading in degrees
    pub heading: Option<f64>,
    /// Seconds since the last update
    pub rolling_time: Option<u8>,
    /// UTC time of the fix
    pub utc_time: Option<DateTime>,
    /// Quality of the position
    pub position_status: PositionStatus,
    /// Speed and distance are 3D rather than 2D
    pub speed_3d: bool,
    /// Source of the elevation
    pub elevation_source: ElevationSource,
    /// Heading comes from a magnetic compass rather than movement
    pub heading_from_compass: bool,
}

/// Location and Speed (0x2A67)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocationAndSpeedCharacteristic;

impl LocationAndSpeedCharacteristic {
    const FLAG_SPEED: u16 = 1 << 0;
    const FLAG_DISTANCE: u16 = 1 << 1;
    const FLAG_LOCATION: u16 = 1 << 2;
    const FLAG_ELEVATION: u16 = 1 << 3;
    const FLAG_HEADING: u16 = 1 << 4;
    const FLAG_ROLLING_TIME: u16 = 1 << 5;
    const FLAG_UTC_TIME: u16 = 1 << 6;
    const POSITION_STATUS_SHIFT: u16 = 7;
    const FLAG_SPEED_3D: u16 = 1 << 9;
    const ELEVATION_SOURCE_SHIFT: u16 = 10;
    const FLAG_HEADING_COMPASS: u16 = 1 << 12;

    const SPEED: Resolution = Resolution::decimal(-2);
    const DISTANCE: Resolution = Resolution::decimal(-1);
    const DEGREES: Resolution = Resolution::decimal(-7);
    const ELEVATION: Resolution = Resolution::decimal(-2);
    const HEADING: Resolution = Resolution::decimal(-2);

    fn flags(value: &LocationAndSpeed) -> u16 {
        let mut flags = [
            (Self::FLAG_SPEED, value.speed.is_some()),
            (Self::FLAG_DISTANCE, value.total_distance.is_some()),
            (Self::FLAG_LOCATION, value.location.is_some()),
            (Self::FLAG_ELEVATION, value.elevation.is_some()),
            (Self::FLAG_HEADING, value.heading.is_some()),
            (Self::FLAG_ROLLING_TIME, value.rolling_time.is_some()),
            (Self::FLAG_UTC_TIME, value.utc_time.is_some()),
            (Self::FLAG_SPEED_3D, value.speed_3d),
            (Self::FLAG_HEADING_COMPASS, value.heading_from_compass),
        ]
        .iter()
        .filter(|(_, set)| *set)
        .fold(0u16, |acc, (flag, _)| acc | *flag);
        let status: u16 = match value.position_status {
            PositionStatus::NoPosition => 0,
            PositionStatus::Ok => 1,
            PositionStatus::Estimated => 2,
            PositionStatus::LastKnown => 3,
        };
        let source: u16 = match value.elevation_source {
            ElevationSource::PositioningSystem => 0,
            ElevationSource::BarometricAirPressure => 1,
            ElevationSource::DatabaseService => 2,
            ElevationSource::Other => 3,
        };
        flags |= status << Self::POSITION_STATUS_SHIFT;
        flags |= source << Self::ELEVATION_SOURCE_SHIFT;
        flags
    }
}

impl Characteristic for LocationAndSpeedCharacteristic {
    type Value = LocationAndSpeed;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A67,
        "Location and Speed Characteristic",
        "org.bluetooth.characteristic.location_and_speed",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Between(2, 28);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        let flags = reader.read_u16()?;
        let mut value = LocationAndSpeed {
            position_status: match (flags >> Self::POSITION_STATUS_SHIFT) & 0x03 {
                0 => PositionStatus::NoPosition,
                1 => PositionStatus::Ok,
                2 => PositionStatus::Estimated,
                _ => PositionStatus::LastKnown,
            },
            speed_3d: flags & Self::FLAG_SPEED_3D != 0,
            elevation_source: match (flags >> Self::ELEVATION_SOURCE_SHIFT) & 0x03 {
                0 => ElevationSource::PositioningSystem,
                1 => ElevationSource::BarometricAirPressure,
                2 => ElevationSource::DatabaseService,
                _ => ElevationSource::Other,
            },
            heading_from_compass: flags & Self::FLAG_HEADING_COMPASS != 0,
            ..LocationAndSpeed::default()
        };

        if flags & Self::FLAG_SPEED != 0 {
            value.speed = Some(Self::SPEED.apply(i64::from(reader.read_u16()?)));
        }
        if flags & Self::FLAG_DISTANCE != 0 {
            value.total_distance = Some(Self::DISTANCE.apply(i64::from(reader.read_u24()?)));
        }
        if flags & Self::FLAG_LOCATION != 0 {
            let latitude = Self::DEGREES.apply(i64::from(reader.read_i32()?));
            let longitude = Self::DEGREES.apply(i64::from(reader.read_i32()?));
            value.location = Some(Coordinates {
                latitude,
                longitude,
            });
        }
        if flags & Self::FLAG_ELEVATION != 0 {
            value.elevation = Some(Self::ELEVATION.apply(i64::from(reader.read_i24()?)));
        }
        if flags & Self::FLAG_HEADING != 0 {
            value.heading = Some(Self::HEADING.apply(i64::from(reader.read_u16()?)));
        }
        if flags & Self::FLAG_ROLLING_TIME != 0 {
            value.rolling_time = Some(reader.read_u8()?);
        }
        if flags & Self::FLAG_UTC_TIME != 0 {
            value.utc_time = Some(reader.read_date_time()?);
        }
        Ok(Decoded::Value(value))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        use crate::codec::narrow;

        let mut writer = ByteWriter::with_capacity(28);
        writer.write_u16(Self::flags(value));
        if let Some(speed) = value.speed {
            writer.write_u16(narrow("speed", Self::SPEED.unapply("speed", speed)?)?);
        }
        if let Some(distance) = value.total_distance {
            let raw = Self::DISTANCE.unapply("total distance", distance)?;
            writer.write_u24(narrow("total distance", raw)?)?;
        }
        if let Some(location) = &value.location {
            let latitude = Self::DEGREES.unapply("latitude", location.latitude)?;
            let longitude = Self::DEGREES.unapply("longitude", location.longitude)?;
            writer
                .write_i32(narrow("latitude", latitude)?)
                .write_i32(narrow("longitude", longitude)?);
        }
        if let Some(elevation) = value.elevation {
            let raw = Self::ELEVATION.unapply("elevation", elevation)?;
            writer.write_i24(narrow("elevation", raw)?)?;
        }
        if let Some(heading) = value.heading {
            writer.write_u16(narrow("heading", Self::HEADING.unapply("heading", heading)?)?);
        }
        if let Some(rolling_time) = value.rolling_time {
            writer.write_u8(rolling_time);
        }
        if let Some(utc) = &value.utc_time {
            writer.write_date_time(utc)?;
        }
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        if let Some(location) = &value.location {
            CodecError::check_range("latitude", location.latitude, -90.0, 90.0)?;
            CodecError::check_range("longitude", location.longitude, -180.0, 180.0)?;
        }
        if let Some(heading) = value.heading {
            CodecError::check_range("heading", heading, 0.0, 359.99)?;
        }
        match &value.utc_time {
            Some(utc) => utc.validate(),
            None => Ok(()),
        }
    }
}

bitfield_characteristic! {
    /// LN Feature (0x2A6A)
    LnFeatureCharacteristic =>
    /// Supported Location and Navigation features
    LnFeature {
        uuid: 0x2A6A,
        name: "LN Feature",
        id: "org.bluetooth.characteristic.ln_feature",
        width: 4,
        bits: {
            /// Instantaneous speed supported
            speed_supported = 0,
            /// Total distance supported
            total_distance_supported = 1,
            /// Location supported
            location_supported = 2,
            /// Elevation supported
            elevation_supported = 3,
            /// Heading supported
            heading_supported = 4,
            /// Rolling time supported
            rolling_time_supported = 5,
            /// UTC time supported
            utc_time_supported = 6,
            /// Remaining distance supported
            remaining_distance_supported = 7,
            /// Remaining vertical distance supported
            remaining_vertical_distance_supported = 8,
            /// Estimated time of arrival supported
            estimated_time_of_arrival_supported = 9,
            /// Number of beacons in solution supported
            beacons_in_solution_supported = 10,
            /// Number of beacons in view supported
            beacons_in_view_supported = 11,
            /// Time to first fix supported
            time_to_first_fix_supported = 12,
            /// Estimated horizontal position error supported
            horizontal_error_supported = 13,
            /// Estimated vertical position error supported
            vertical_error_supported = 14,
            /// Horizontal dilution of precision supported
            horizontal_dilution_supported = 15,
            /// Vertical dilution of precision supported
            vertical_dilution_supported = 16,
            /// Location and speed content masking supported
            content_masking_supported = 17,
            /// Fix rate setting supported
            fix_rate_setting_supported = 18,
            /// Elevation setting supported
            elevation_setting_supported = 19,
            /// Position status supported
            position_status_supported = 20,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_and_speed() {
        let ctx = ParseContext::default();
        // speed + location, position ok
        let bytes = [
            0x85, 0x00, 0xF4, 0x01, 0x80, 0xEA, 0x4D, 0x1F, 0xC0, 0xDD, 0x91, 0x07,
        ];
        let location = LocationAndSpeedCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(location.speed, Some(5.0));
        assert_eq!(location.position_status, PositionStatus::Ok);
        let coordinates = location.location.unwrap();
        assert_eq!(coordinates.latitude, 52.52);
        assert_eq!(coordinates.longitude, 12.7);
        assert!(location.elevation.is_none());
        assert_eq!(
            LocationAndSpeedCharacteristic::encode(&location).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_elevation_source_and_heading() {
        let ctx = ParseContext::default();
        let bytes = [0x18, 0x14, 0x10, 0x27, 0x00, 0x28, 0x23];
        let location = LocationAndSpeedCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(location.elevation, Some(100.0));
        assert_eq!(location.heading, Some(90.0));
        assert_eq!(location.elevation_source, ElevationSource::BarometricAirPressure);
        assert!(location.heading_from_compass);
        assert_eq!(
            LocationAndSpeedCharacteristic::encode(&location).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_utc_time_out_of_range() {
        // UTC time only: year 65535, month 200, day 200, 99:99:99
        let bytes = [0x40, 0x00, 0xFF, 0xFF, 200, 200, 99, 99, 99];
        let err = LocationAndSpeedCharacteristic::decode(&bytes, &ParseContext::default())
            .unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { field: "year", .. }));

        let raw = LocationAndSpeedCharacteristic::decode(
            &bytes,
            &ParseContext::default().with_validation(false),
        )
        .unwrap()
        .into_value()
        .unwrap();
        assert_eq!(raw.utc_time.map(|utc| utc.month), Some(200));
    }

    #[test]
    fn test_ln_feature() {
        let ctx = ParseContext::default();
        let feature = LnFeatureCharacteristic::decode(&[0x05, 0x00, 0x10, 0x00], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert!(feature.speed_supported());
        assert!(feature.location_supported());
        assert!(feature.position_status_supported());
        assert!(!feature.heading_supported());
    }
}
