//! Running, cycling speed/cadence and cycling power characteristics

use super::{
    Characteristic, CharacteristicInfo, Decoded, LengthRule, ParseContext, ValueType,
};
use crate::codec::{ByteReader, ByteWriter, Resolution};
use crate::error::CodecError;
use alloc::vec::Vec;

const EVENT_TIME_1024: Resolution = Resolution::binary(-10);
const EVENT_TIME_2048: Resolution = Resolution::binary(-11);

fn write_scaled_u16(
    writer: &mut ByteWriter,
    field: &'static str,
    resolution: Resolution,
    value: f64,
) -> Result<(), CodecError> {
    let raw = resolution.unapply(field, value)?;
    writer.write_u16(crate::codec::narrow(field, raw)?);
    Ok(())
}

fn write_scaled_i16(
    writer: &mut ByteWriter,
    field: &'static str,
    resolution: Resolution,
    value: f64,
) -> Result<(), CodecError> {
    let raw = resolution.unapply(field, value)?;
    writer.write_i16(crate::codec::narrow(field, raw)?);
    Ok(())
}

/// Cumulative wheel revolutions and the time of the latest wheel event
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WheelRevolutions {
    /// Revolutions since the sensor was reset
    pub cumulative: u32,
    /// Event timestamp in seconds; rolls over with the 16-bit wire field
    pub last_event_time: f64,
}

/// Cumulative crank revolutions and the time of the latest crank event
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CrankRevolutions {
    /// Revolutions since the sensor was reset
    pub cumulative: u16,
    /// Event timestamp in seconds, 1/1024 s resolution, rolls over at 64 s
    pub last_event_time: f64,
}

impl CrankRevolutions {
    /// Cadence in revolutions per minute between two readings
    ///
    /// Handles one rollover of both counters. Returns `None` when no
    /// crank event happened in between.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cadence_since(&self, previous: &Self) -> Option<f64> {
        let revolutions = self.cumulative.wrapping_sub(previous.cumulative);
        let now = EVENT_TIME_1024.unapply("crank event time", self.last_event_time).ok()? as u16;
        let then =
            EVENT_TIME_1024.unapply("crank event time", previous.last_event_time).ok()? as u16;
        let ticks = now.wrapping_sub(then);
        if ticks == 0 {
            return None;
        }
        Some(f64::from(revolutions) * 60.0 * 1024.0 / f64::from(ticks))
    }
}

/// RSC Measurement value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RscMeasurement {
    /// Speed in m/s
    pub speed: f64,
    /// Steps per minute
    pub cadence: u8,
    /// Stride length in metres
    pub stride_length: Option<f64>,
    /// Total distance in metres
    pub total_distance: Option<f64>,
    /// Running rather than walking
    pub running: bool,
}

/// RSC Measurement (0x2A53)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RscMeasurementCharacteristic;

impl RscMeasurementCharacteristic {
    const FLAG_STRIDE: u8 = 0x01;
    const FLAG_DISTANCE: u8 = 0x02;
    const FLAG_RUNNING: u8 = 0x04;

    const SPEED: Resolution = Resolution::binary(-8);
    const STRIDE: Resolution = Resolution::decimal(-2);
    const DISTANCE: Resolution = Resolution::decimal(-1);
}

impl Characteristic for RscMeasurementCharacteristic {
    type Value = RscMeasurement;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A53,
        "RSC Measurement",
        "org.bluetooth.characteristic.rsc_measurement",
        Some("m/s"),
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Between(4, 10);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        let flags = reader.read_u8()?;
        let speed = Self::SPEED.apply(i64::from(reader.read_u16()?));
        let cadence = reader.read_u8()?;
        let stride_length = if flags & Self::FLAG_STRIDE != 0 {
            Some(Self::STRIDE.apply(i64::from(reader.read_u16()?)))
        } else {
            None
        };
        let total_distance = if flags & Self::FLAG_DISTANCE != 0 {
            Some(Self::DISTANCE.apply(i64::from(reader.read_u32()?)))
        } else {
            None
        };
        Ok(Decoded::Value(RscMeasurement {
            speed,
            cadence,
            stride_length,
            total_distance,
            running: flags & Self::FLAG_RUNNING != 0,
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut flags = 0;
        if value.stride_length.is_some() {
            flags |= Self::FLAG_STRIDE;
        }
        if value.total_distance.is_some() {
            flags |= Self::FLAG_DISTANCE;
        }
        if value.running {
            flags |= Self::FLAG_RUNNING;
        }

        let mut writer = ByteWriter::with_capacity(10);
        writer.write_u8(flags);
        write_scaled_u16(&mut writer, "speed", Self::SPEED, value.speed)?;
        writer.write_u8(value.cadence);
        if let Some(stride) = value.stride_length {
            write_scaled_u16(&mut writer, "stride length", Self::STRIDE, stride)?;
        }
        if let Some(distance) = value.total_distance {
            let raw = Self::DISTANCE.unapply("total distance", distance)?;
            writer.write_u32(crate::codec::narrow("total distance", raw)?);
        }
        Ok(writer.into_vec())
    }
}

bitfield_characteristic! {
    /// RSC Feature (0x2A54)
    RscFeatureCharacteristic =>
    /// Supported Running Speed and Cadence features
    RscFeature {
        uuid: 0x2A54,
        name: "RSC Feature",
        id: "org.bluetooth.characteristic.rsc_feature",
        width: 2,
        bits: {
            /// Instantaneous stride length measurement supported
            stride_length_supported = 0,
            /// Total distance measurement supported
            total_distance_supported = 1,
            /// Walking or running status supported
            walking_running_status_supported = 2,
            /// Calibration procedure supported
            calibration_supported = 3,
            /// Multiple sensor locations supported
            multiple_sensor_locations_supported = 4,
        },
    }
}

/// CSC Measurement value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CscMeasurement {
    /// Wheel revolution data, event time at 1/1024 s
    pub wheel: Option<WheelRevolutions>,
    /// Crank revolution data
    pub crank: Option<CrankRevolutions>,
}

/// CSC Measurement (0x2A5B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CscMeasurementCharacteristic;

impl CscMeasurementCharacteristic {
    const FLAG_WHEEL: u8 = 0x01;
    const FLAG_CRANK: u8 = 0x02;
}

impl Characteristic for CscMeasurementCharacteristic {
    type Value = CscMeasurement;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A5B,
        "CSC Measurement",
        "org.bluetooth.characteristic.csc_measurement",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Between(1, 11);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        let flags = reader.read_u8()?;
        let wheel = if flags & Self::FLAG_WHEEL != 0 {
            Some(WheelRevolutions {
                cumulative: reader.read_u32()?,
                last_event_time: EVENT_TIME_1024.apply(i64::from(reader.read_u16()?)),
            })
        } else {
            None
        };
        let crank = if flags & Self::FLAG_CRANK != 0 {
            Some(CrankRevolutions {
                cumulative: reader.read_u16()?,
                last_event_time: EVENT_TIME_1024.apply(i64::from(reader.read_u16()?)),
            })
        } else {
            None
        };
        Ok(Decoded::Value(CscMeasurement { wheel, crank }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut flags = 0;
        if value.wheel.is_some() {
            flags |= Self::FLAG_WHEEL;
        }
        if value.crank.is_some() {
            flags |= Self::FLAG_CRANK;
        }

        let mut writer = ByteWriter::with_capacity(11);
        writer.write_u8(flags);
        if let Some(wheel) = &value.wheel {
            writer.write_u32(wheel.cumulative);
            write_scaled_u16(
                &mut writer,
                "wheel event time",
                EVENT_TIME_1024,
                wheel.last_event_time,
            )?;
        }
        if let Some(crank) = &value.crank {
            writer.write_u16(crank.cumulative);
            write_scaled_u16(
                &mut writer,
                "crank event time",
                EVENT_TIME_1024,
                crank.last_event_time,
            )?;
        }
        Ok(writer.into_vec())
    }
}

bitfield_characteristic! {
    /// CSC Feature (0x2A5C)
    CscFeatureCharacteristic =>
    /// Supported Cycling Speed and Cadence features
    CscFeature {
        uuid: 0x2A5C,
        name: "CSC Feature",
        id: "org.bluetooth.characteristic.csc_feature",
        width: 2,
        bits: {
            /// Wheel revolution data supported
            wheel_revolution_supported = 0,
            /// Crank revolution data supported
            crank_revolution_supported = 1,
            /// Multiple sensor locations supported
            multiple_sensor_locations_supported = 2,
        },
    }
}

sig_enum! {
    /// Mounting location of a fitness sensor
    pub enum SensorLocation: u8 {
        /// Other
        Other = 0,
        /// Top of shoe
        TopOfShoe = 1,
        /// In shoe
        InShoe = 2,
        /// Hip
        Hip = 3,
        /// Front wheel
        FrontWheel = 4,
        /// Left crank
        LeftCrank = 5,
        /// Right crank
        RightCrank = 6,
        /// Left pedal
        LeftPedal = 7,
        /// Right pedal
        RightPedal = 8,
        /// Front hub
        FrontHub = 9,
        /// Rear dropout
        RearDropout = 10,
        /// Chainstay
        Chainstay = 11,
        /// Rear wheel
        RearWheel = 12,
        /// Rear hub
        RearHub = 13,
        /// Chest
        Chest = 14,
        /// Spider
        Spider = 15,
        /// Chain ring
        ChainRing = 16,
    }
}

enum_characteristic! {
    /// Sensor Location (0x2A5D)
    SensorLocationCharacteristic => SensorLocation {
        uuid: 0x2A5D,
        name: "Sensor Location",
        id: "org.bluetooth.characteristic.sensor_location",
    }
}

/// Angles of the largest and smallest force or torque, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExtremeAngles {
    /// Angle of the maximum, 12 bits
    pub maximum: u16,
    /// Angle of the minimum, 12 bits
    pub minimum: u16,
}

/// Pedal power balance and which pedal it refers to
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PedalPowerBalance {
    /// Percentage of power from the reference pedal
    pub percent: f64,
    /// Reference is the left pedal (otherwise unknown)
    pub left_reference: bool,
}

/// Cycling Power Measurement value
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CyclingPowerMeasurement {
    /// Instantaneous power in watts
    pub instantaneous_power: i16,
    /// Pedal power balance
    pub pedal_power_balance: Option<PedalPowerBalance>,
    /// Accumulated torque in N·m
    pub accumulated_torque: Option<f64>,
    /// Accumulated torque is crank based rather than wheel based
    pub torque_source_crank: bool,
    /// Wheel revolution data, event time at 1/2048 s
    pub wheel: Option<WheelRevolutions>,
    /// Crank revolution data
    pub crank: Option<CrankRevolutions>,
    /// Maximum and minimum force in newtons
    pub extreme_force: Option<(i16, i16)>,
    /// Maximum and minimum torque in N·m
    pub extreme_torque: Option<(f64, f64)>,
    /// Angles of the extremes
    pub extreme_angles: Option<ExtremeAngles>,
    /// Top dead spot angle in degrees
    pub top_dead_spot_angle: Option<u16>,
    /// Bottom dead spot angle in degrees
    pub bottom_dead_spot_angle: Option<u16>,
    /// Accumulated energy in kJ
    pub accumulated_energy: Option<u16>,
    /// The sensor asks the collector to run offset compensation
    pub offset_compensation_indicator: bool,
}

/// Cycling Power Measurement (0x2A63)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CyclingPowerMeasurementCharacteristic;

impl CyclingPowerMeasurementCharacteristic {
    const FLAG_BALANCE: u16 = 1 << 0;
    const FLAG_BALANCE_LEFT: u16 = 1 << 1;
    const FLAG_TORQUE: u16 = 1 << 2;
    const FLAG_TORQUE_CRANK: u16 = 1 << 3;
    const FLAG_WHEEL: u16 = 1 << 4;
    const FLAG_CRANK: u16 = 1 << 5;
    const FLAG_EXTREME_FORCE: u16 = 1 << 6;
    const FLAG_EXTREME_TORQUE: u16 = 1 << 7;
    const FLAG_EXTREME_ANGLES: u16 = 1 << 8;
    const FLAG_TOP_DEAD_SPOT: u16 = 1 << 9;
    const FLAG_BOTTOM_DEAD_SPOT: u16 = 1 << 10;
    const FLAG_ENERGY: u16 = 1 << 11;
    const FLAG_OFFSET_COMPENSATION: u16 = 1 << 12;

    const BALANCE: Resolution = Resolution::binary(-1);
    const TORQUE: Resolution = Resolution::binary(-5);

    fn flags(value: &CyclingPowerMeasurement) -> u16 {
        let present = [
            (Self::FLAG_BALANCE, value.pedal_power_balance.is_some()),
            (
                Self::FLAG_BALANCE_LEFT,
                value.pedal_power_balance.is_some_and(|b| b.left_reference),
            ),
            (Self::FLAG_TORQUE, value.accumulated_torque.is_some()),
            (Self::FLAG_TORQUE_CRANK, value.torque_source_crank),
            (Self::FLAG_WHEEL, value.wheel.is_some()),
            (Self::FLAG_CRANK, value.crank.is_some()),
            (Self::FLAG_EXTREME_FORCE, value.extreme_force.is_some()),
            (Self::FLAG_EXTREME_TORQUE, value.extreme_torque.is_some()),
            (Self::FLAG_EXTREME_ANGLES, value.extreme_angles.is_some()),
            (Self::FLAG_TOP_DEAD_SPOT, value.top_dead_spot_angle.is_some()),
            (Self::FLAG_BOTTOM_DEAD_SPOT, value.bottom_dead_spot_angle.is_some()),
            (Self::FLAG_ENERGY, value.accumulated_energy.is_some()),
            (
                Self::FLAG_OFFSET_COMPENSATION,
                value.offset_compensation_indicator,
            ),
        ];
        present
            .iter()
            .filter(|(_, set)| *set)
            .fold(0u16, |acc, (flag, _)| acc | *flag)
    }
}

impl Characteristic for CyclingPowerMeasurementCharacteristic {
    type Value = CyclingPowerMeasurement;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A63,
        "Cycling Power Measurement",
        "org.bluetooth.characteristic.cycling_power_measurement",
        Some("W"),
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Between(4, 34);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        let flags = reader.read_u16()?;
        let mut value = CyclingPowerMeasurement {
            instantaneous_power: reader.read_i16()?,
            torque_source_crank: flags & Self::FLAG_TORQUE_CRANK != 0,
            offset_compensation_indicator: flags & Self::FLAG_OFFSET_COMPENSATION != 0,
            ..CyclingPowerMeasurement::default()
        };

        if flags & Self::FLAG_BALANCE != 0 {
            value.pedal_power_balance = Some(PedalPowerBalance {
                percent: Self::BALANCE.apply(i64::from(reader.read_u8()?)),
                left_reference: flags & Self::FLAG_BALANCE_LEFT != 0,
            });
        }
        if flags & Self::FLAG_TORQUE != 0 {
            value.accumulated_torque = Some(Self::TORQUE.apply(i64::from(reader.read_u16()?)));
        }
        if flags & Self::FLAG_WHEEL != 0 {
            value.wheel = Some(WheelRevolutions {
                cumulative: reader.read_u32()?,
                last_event_time: EVENT_TIME_2048.apply(i64::from(reader.read_u16()?)),
            });
        }
        if flags & Self::FLAG_CRANK != 0 {
            value.crank = Some(CrankRevolutions {
                cumulative: reader.read_u16()?,
                last_event_time: EVENT_TIME_1024.apply(i64::from(reader.read_u16()?)),
            });
        }
        if flags & Self::FLAG_EXTREME_FORCE != 0 {
            value.extreme_force = Some((reader.read_i16()?, reader.read_i16()?));
        }
        if flags & Self::FLAG_EXTREME_TORQUE != 0 {
            let maximum = Self::TORQUE.apply(i64::from(reader.read_i16()?));
            let minimum = Self::TORQUE.apply(i64::from(reader.read_i16()?));
            value.extreme_torque = Some((maximum, minimum));
        }
        if flags & Self::FLAG_EXTREME_ANGLES != 0 {
            let packed = reader.read_u24()?;
            #[allow(clippy::cast_possible_truncation)]
            let angles = ExtremeAngles {
                maximum: (packed & 0x0FFF) as u16,
                minimum: (packed >> 12) as u16,
            };
            value.extreme_angles = Some(angles);
        }
        if flags & Self::FLAG_TOP_DEAD_SPOT != 0 {
            value.top_dead_spot_angle = Some(reader.read_u16()?);
        }
        if flags & Self::FLAG_BOTTOM_DEAD_SPOT != 0 {
            value.bottom_dead_spot_angle = Some(reader.read_u16()?);
        }
        if flags & Self::FLAG_ENERGY != 0 {
            value.accumulated_energy = Some(reader.read_u16()?);
        }
        Ok(Decoded::Value(value))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::with_capacity(34);
        writer
            .write_u16(Self::flags(value))
            .write_i16(value.instantaneous_power);
        if let Some(balance) = &value.pedal_power_balance {
            let raw = Self::BALANCE.unapply("pedal power balance", balance.percent)?;
            writer.write_u8(crate::codec::narrow("pedal power balance", raw)?);
        }
        if let Some(torque) = value.accumulated_torque {
            write_scaled_u16(&mut writer, "accumulated torque", Self::TORQUE, torque)?;
        }
        if let Some(wheel) = &value.wheel {
            writer.write_u32(wheel.cumulative);
            write_scaled_u16(
                &mut writer,
                "wheel event time",
                EVENT_TIME_2048,
                wheel.last_event_time,
            )?;
        }
        if let Some(crank) = &value.crank {
            writer.write_u16(crank.cumulative);
            write_scaled_u16(
                &mut writer,
                "crank event time",
                EVENT_TIME_1024,
                crank.last_event_time,
            )?;
        }
        if let Some((maximum, minimum)) = value.extreme_force {
            writer.write_i16(maximum).write_i16(minimum);
        }
        if let Some((maximum, minimum)) = value.extreme_torque {
            write_scaled_i16(&mut writer, "maximum torque", Self::TORQUE, maximum)?;
            write_scaled_i16(&mut writer, "minimum torque", Self::TORQUE, minimum)?;
        }
        if let Some(angles) = &value.extreme_angles {
            let packed = u32::from(angles.maximum & 0x0FFF)
                | (u32::from(angles.minimum & 0x0FFF) << 12);
            writer.write_u24(packed)?;
        }
        if let Some(angle) = value.top_dead_spot_angle {
            writer.write_u16(angle);
        }
        if let Some(angle) = value.bottom_dead_spot_angle {
            writer.write_u16(angle);
        }
        if let Some(energy) = value.accumulated_energy {
            writer.write_u16(energy);
        }
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        if let Some(balance) = &value.pedal_power_balance {
            CodecError::check_range("pedal power balance", balance.percent, 0.0, 100.0)?;
        }
        if let Some(angles) = &value.extreme_angles {
            CodecError::check_range("maximum angle", f64::from(angles.maximum), 0.0, 4095.0)?;
            CodecError::check_range("minimum angle", f64::from(angles.minimum), 0.0, 4095.0)?;
        }
        Ok(())
    }
}

bitfield_characteristic! {
    /// Cycling Power Feature (0x2A65)
    CyclingPowerFeatureCharacteristic =>
    /// Supported Cycling Power features
    CyclingPowerFeature {
        uuid: 0x2A65,
        name: "Cycling Power Feature",
        id: "org.bluetooth.characteristic.cycling_power_feature",
        width: 4,
        bits: {
            /// Pedal power balance supported
            pedal_power_balance_supported = 0,
            /// Accumulated torque supported
            accumulated_torque_supported = 1,
            /// Wheel revolution data supported
            wheel_revolution_supported = 2,
            /// Crank revolution data supported
            crank_revolution_supported = 3,
            /// Extreme magnitudes supported
            extreme_magnitudes_supported = 4,
            /// Extreme angles supported
            extreme_angles_supported = 5,
            /// Top and bottom dead spot angles supported
            dead_spot_angles_supported = 6,
            /// Accumulated energy supported
            accumulated_energy_supported = 7,
            /// Offset compensation indicator supported
            offset_compensation_indicator_supported = 8,
            /// Offset compensation supported
            offset_compensation_supported = 9,
            /// Measurement content masking supported
            content_masking_supported = 10,
            /// Multiple sensor locations supported
            multiple_sensor_locations_supported = 11,
            /// Crank length adjustment supported
            crank_length_adjustment_supported = 12,
            /// Chain length adjustment supported
            chain_length_adjustment_supported = 13,
            /// Chain weight adjustment supported
            chain_weight_adjustment_supported = 14,
            /// Span length adjustment supported
            span_length_adjustment_supported = 15,
            /// Sensor measures torque rather than force
            torque_based = 16,
            /// Instantaneous measurement direction supported
            measurement_direction_supported = 17,
            /// Factory calibration date supported
            factory_calibration_date_supported = 18,
            /// Enhanced offset compensation supported
            enhanced_offset_compensation_supported = 19,
        },
    }
}

impl CyclingPowerFeature {
    /// Distributed system support, bits 20..=21
    #[must_use]
    pub const fn distributed_system_support(&self) -> u8 {
        ((self.bits >> 20) & 0x03) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsc_measurement() {
        let ctx = ParseContext::default();
        // running, stride and distance present
        let bytes = [0x07, 0x00, 0x03, 0xB4, 0x8C, 0x00, 0xE8, 0x03, 0x00, 0x00];
        let rsc = RscMeasurementCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(rsc.speed, 3.0);
        assert_eq!(rsc.cadence, 180);
        assert_eq!(rsc.stride_length, Some(1.4));
        assert_eq!(rsc.total_distance, Some(100.0));
        assert!(rsc.running);
        assert_eq!(RscMeasurementCharacteristic::encode(&rsc).unwrap(), bytes);

        assert!(RscMeasurementCharacteristic::decode(&[0x00, 0x00, 0x03], &ctx).is_err());
    }

    #[test]
    fn test_csc_measurement() {
        let ctx = ParseContext::default();
        let bytes = [
            0x03, 0x10, 0x00, 0x00, 0x00, 0x00, 0x04, 0x05, 0x00, 0x00, 0x08,
        ];
        let csc = CscMeasurementCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        let wheel = csc.wheel.unwrap();
        assert_eq!(wheel.cumulative, 16);
        assert_eq!(wheel.last_event_time, 1.0);
        let crank = csc.crank.unwrap();
        assert_eq!(crank.cumulative, 5);
        assert_eq!(crank.last_event_time, 2.0);
        assert_eq!(CscMeasurementCharacteristic::encode(&csc).unwrap(), bytes);

        let wheel_only = CscMeasurementCharacteristic::decode(&bytes[..7], &ctx);
        assert!(wheel_only.is_err());
    }

    #[test]
    fn test_crank_cadence() {
        let previous = CrankRevolutions {
            cumulative: 10,
            last_event_time: 1.0,
        };
        let current = CrankRevolutions {
            cumulative: 11,
            last_event_time: 1.5,
        };
        assert_eq!(current.cadence_since(&previous), Some(120.0));
        assert_eq!(previous.cadence_since(&previous), None);
    }

    #[test]
    fn test_sensor_location() {
        let ctx = ParseContext::default();
        assert_eq!(
            SensorLocationCharacteristic::decode(&[0x05], &ctx).unwrap(),
            Decoded::Value(SensorLocation::LeftCrank)
        );
        assert!(SensorLocationCharacteristic::decode(&[0x20], &ctx).is_err());
    }

    #[test]
    fn test_cycling_power_measurement() {
        let ctx = ParseContext::default();
        // balance (left), crank data, accumulated energy
        let bytes = [
            0x23, 0x08, 0xFA, 0x00, 0x64, 0x0A, 0x00, 0x00, 0x04, 0x0C, 0x00,
        ];
        let power = CyclingPowerMeasurementCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(power.instantaneous_power, 250);
        assert_eq!(
            power.pedal_power_balance,
            Some(PedalPowerBalance {
                percent: 50.0,
                left_reference: true,
            })
        );
        assert_eq!(power.crank.unwrap().cumulative, 10);
        assert_eq!(power.crank.unwrap().last_event_time, 1.0);
        assert_eq!(power.accumulated_energy, Some(12));
        assert_eq!(
            CyclingPowerMeasurementCharacteristic::encode(&power).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_cycling_power_extreme_angles() {
        let ctx = ParseContext::default();
        let bytes = [0x00, 0x01, 0x64, 0x00, 0x5A, 0x40, 0x0B];
        let power = CyclingPowerMeasurementCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(
            power.extreme_angles,
            Some(ExtremeAngles {
                maximum: 90,
                minimum: 180,
            })
        );
        assert_eq!(
            CyclingPowerMeasurementCharacteristic::encode(&power).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_cycling_power_feature() {
        let ctx = ParseContext::default();
        let feature = CyclingPowerFeatureCharacteristic::decode(&[0x0C, 0x00, 0x11, 0x00], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert!(feature.wheel_revolution_supported());
        assert!(feature.crank_revolution_supported());
        assert!(feature.torque_based());
        assert_eq!(feature.distributed_system_support(), 1);
    }
}
