//! Current Time and Reference Time characteristics

use super::{
    Characteristic, CharacteristicInfo, Decoded, LengthRule, ParseContext, ValueType,
};
use crate::codec::{self, ByteReader, ByteWriter, Resolution};
use crate::error::CodecError;
use alloc::vec;
use alloc::vec::Vec;

macro_rules! date_time_characteristic {
    ($(#[$meta:meta])* $name:ident => $value:ty, $uuid:literal, $display:literal, $id:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl Characteristic for $name {
            type Value = $value;
            const INFO: CharacteristicInfo =
                CharacteristicInfo::new($uuid, $display, $id, None, ValueType::DateTime);
            const LENGTH: LengthRule = LengthRule::Exact(<$value>::LEN);

            fn decode_value(
                data: &[u8],
                _ctx: &ParseContext<'_>,
            ) -> Result<Decoded<Self::Value>, CodecError> {
                <$value>::decode(data).map(Decoded::Value)
            }

            fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
                Ok(value.encode()?.to_vec())
            }

            fn validate(value: &Self::Value) -> Result<(), CodecError> {
                value.validate()
            }
        }
    };
}

date_time_characteristic!(
    /// Date Time (0x2A08)
    DateTimeCharacteristic => codec::DateTime,
    0x2A08,
    "Date Time",
    "org.bluetooth.characteristic.date_time"
);
date_time_characteristic!(
    /// Day Date Time (0x2A0A)
    DayDateTimeCharacteristic => codec::DayDateTime,
    0x2A0A,
    "Day Date Time",
    "org.bluetooth.characteristic.day_date_time"
);
date_time_characteristic!(
    /// Exact Time 256 (0x2A0C)
    ExactTime256Characteristic => codec::ExactTime256,
    0x2A0C,
    "Exact Time 256",
    "org.bluetooth.characteristic.exact_time_256"
);

/// Day of Week (0x2A09)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayOfWeekCharacteristic;

impl Characteristic for DayOfWeekCharacteristic {
    type Value = codec::DayOfWeek;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A09,
        "Day of Week",
        "org.bluetooth.characteristic.day_of_week",
        None,
        ValueType::Enum,
    );
    const LENGTH: LengthRule = LengthRule::Exact(1);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        codec::DayOfWeek::from_raw(data[0]).map(Decoded::Value)
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(vec![*value as u8])
    }
}

sig_enum! {
    /// Daylight saving time offset
    pub enum DstOffset: u8 {
        /// Standard time
        StandardTime = 0,
        /// Half an hour daylight time (+0.5h)
        HalfAnHourDaylightTime = 2,
        /// Daylight time (+1h)
        DaylightTime = 4,
        /// Double daylight time (+2h)
        DoubleDaylightTime = 8,
        /// DST offset is not known
        NotKnown = 255,
    }
}

impl DstOffset {
    /// Offset in hours, `None` when not known or reserved
    #[must_use]
    pub fn hours(self) -> Option<f64> {
        match self {
            Self::NotKnown | Self::Reserved(_) => None,
            other => Some(f64::from(other.to_raw()) / 4.0),
        }
    }
}

enum_characteristic! {
    /// DST Offset (0x2A0D)
    DstOffsetCharacteristic => DstOffset {
        uuid: 0x2A0D,
        name: "DST Offset",
        id: "org.bluetooth.characteristic.dst_offset",
    }
}

integer_characteristic! {
    /// Time Zone (0x2A0E), offset from UTC in 15 minute steps
    TimeZoneCharacteristic {
        uuid: 0x2A0E,
        name: "Time Zone",
        id: "org.bluetooth.characteristic.time_zone",
        unit: None,
        value: i8,
        width: 1,
        signed: true,
        range: -48.0 => 56.0,
        special: [0x80 => NotKnown],
    }
}

/// Local Time Information value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalTimeInformation {
    /// Offset from UTC in 15 minute steps, `-128` if not known
    pub time_zone: i8,
    /// Daylight saving offset
    pub dst_offset: DstOffset,
}

/// Local Time Information (0x2A0F)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalTimeInformationCharacteristic;

impl Characteristic for LocalTimeInformationCharacteristic {
    type Value = LocalTimeInformation;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A0F,
        "Local Time Information",
        "org.bluetooth.characteristic.local_time_information",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(2);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        Ok(Decoded::Value(LocalTimeInformation {
            time_zone: i8::from_le_bytes([data[0]]),
            dst_offset: DstOffset::from_raw(data[1]),
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(vec![value.time_zone.to_le_bytes()[0], value.dst_offset.to_raw()])
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        if value.time_zone != i8::MIN {
            CodecError::check_range("time zone", f64::from(value.time_zone), -48.0, 56.0)?;
        }
        super::check_reserved(
            "DST offset",
            value.dst_offset.is_reserved(),
            u32::from(value.dst_offset.to_raw()),
        )
    }
}

scaled_characteristic! {
    /// Time Accuracy (0x2A12), drift in 1/8 second steps
    TimeAccuracyCharacteristic {
        uuid: 0x2A12,
        name: "Time Accuracy",
        id: "org.bluetooth.characteristic.time_accuracy",
        unit: Some("s"),
        width: 1,
        signed: false,
        resolution: Resolution::binary(-3),
        range: 0.0 => 31.625,
        special: [0xFE => AtOrAboveMaximum, 0xFF => NotKnown],
    }
}

sig_enum! {
    /// Time source
    pub enum TimeSource: u8 {
        /// Unknown
        Unknown = 0,
        /// Network Time Protocol
        NetworkTimeProtocol = 1,
        /// GPS
        Gps = 2,
        /// Radio time signal
        RadioTimeSignal = 3,
        /// Manual
        Manual = 4,
        /// Atomic clock
        AtomicClock = 5,
        /// Cellular network
        CellularNetwork = 6,
    }
}

enum_characteristic! {
    /// Time Source (0x2A13)
    TimeSourceCharacteristic => TimeSource {
        uuid: 0x2A13,
        name: "Time Source",
        id: "org.bluetooth.characteristic.time_source",
    }
}

/// Reference Time Information value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReferenceTimeInformation {
    /// Source of the reference time
    pub source: TimeSource,
    /// Accuracy in 1/8 second steps, 254 out of range, 255 unknown
    pub accuracy: u8,
    /// Days since the last update, 255 means 255 or more
    pub days_since_update: u8,
    /// Hours since the last update, 255 means 255 or more days
    pub hours_since_update: u8,
}

/// Reference Time Information (0x2A14)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReferenceTimeInformationCharacteristic;

impl Characteristic for ReferenceTimeInformationCharacteristic {
    type Value = ReferenceTimeInformation;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A14,
        "Reference Time Information",
        "org.bluetooth.characteristic.reference_time_information",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(4);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        Ok(Decoded::Value(ReferenceTimeInformation {
            source: TimeSource::from_raw(data[0]),
            accuracy: data[1],
            days_since_update: data[2],
            hours_since_update: data[3],
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(vec![
            value.source.to_raw(),
            value.accuracy,
            value.days_since_update,
            value.hours_since_update,
        ])
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        if value.hours_since_update != u8::MAX {
            CodecError::check_range(
                "hours since update",
                f64::from(value.hours_since_update),
                0.0,
                23.0,
            )?;
        }
        Ok(())
    }
}

/// Reasons the Current Time was adjusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdjustReason {
    /// Raw reason bits
    pub bits: u8,
}

impl AdjustReason {
    /// Manually adjusted
    #[must_use]
    pub const fn manual_time_update(&self) -> bool {
        self.bits & 0x01 != 0
    }

    /// Updated from an external reference
    #[must_use]
    pub const fn external_reference_time_update(&self) -> bool {
        self.bits & 0x02 != 0
    }

    /// Time zone changed
    #[must_use]
    pub const fn change_of_time_zone(&self) -> bool {
        self.bits & 0x04 != 0
    }

    /// Daylight saving changed
    #[must_use]
    pub const fn change_of_dst(&self) -> bool {
        self.bits & 0x08 != 0
    }
}

/// Current Time value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurrentTime {
    /// Exact time
    pub exact_time: codec::ExactTime256,
    /// Why the time was last adjusted
    pub adjust_reason: AdjustReason,
}

/// Current Time (0x2A2B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrentTimeCharacteristic;

impl Characteristic for CurrentTimeCharacteristic {
    type Value = CurrentTime;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A2B,
        "Current Time",
        "org.bluetooth.characteristic.current_time",
        None,
        ValueType::DateTime,
    );
    const LENGTH: LengthRule = LengthRule::Exact(codec::ExactTime256::LEN + 1);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        let exact_time = codec::ExactTime256::decode(reader.read_bytes(codec::ExactTime256::LEN)?)?;
        Ok(Decoded::Value(CurrentTime {
            exact_time,
            adjust_reason: AdjustReason {
                bits: reader.read_u8()?,
            },
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::with_capacity(Self::LENGTH_BYTES);
        writer
            .write_bytes(&value.exact_time.encode()?)
            .write_u8(value.adjust_reason.bits);
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        value.exact_time.validate()
    }
}

impl CurrentTimeCharacteristic {
    const LENGTH_BYTES: usize = codec::ExactTime256::LEN + 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::SpecialValueKind;
    use crate::codec::DayOfWeek;

    const CURRENT_TIME: [u8; 10] = [0xE8, 0x07, 0x03, 0x0F, 0x0E, 0x1E, 0x2D, 0x05, 0x40, 0x01];

    #[test]
    fn test_current_time() {
        let ctx = ParseContext::default();
        let time = CurrentTimeCharacteristic::decode(&CURRENT_TIME, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        let day = time.exact_time.day_date_time;
        assert_eq!(day.date_time, codec::DateTime::new(2024, 3, 15, 14, 30, 45));
        assert_eq!(day.day_of_week, DayOfWeek::Friday);
        assert_eq!(time.exact_time.fractions256, 0x40);
        assert!(time.adjust_reason.manual_time_update());
        assert_eq!(CurrentTimeCharacteristic::encode(&time).unwrap(), CURRENT_TIME);
    }

    #[test]
    fn test_date_time_length() {
        let ctx = ParseContext::default();
        assert!(matches!(
            DateTimeCharacteristic::decode(&CURRENT_TIME[..6], &ctx),
            Err(CodecError::InvalidLength { .. })
        ));
        assert!(DateTimeCharacteristic::decode(&CURRENT_TIME[..7], &ctx).is_ok());
    }

    #[test]
    fn test_date_time_range_check() {
        let ctx = ParseContext::default();
        let bad_month = [0xE8, 0x07, 0x0D, 0x01, 0x00, 0x00, 0x00];
        assert!(matches!(
            DateTimeCharacteristic::decode(&bad_month, &ctx),
            Err(CodecError::OutOfRange { field: "month", .. })
        ));
        assert!(DateTimeCharacteristic::decode(&bad_month, &ctx.with_validation(false)).is_ok());
        assert!(
            DateTimeCharacteristic::encode(&codec::DateTime::new(2024, 13, 1, 0, 0, 0)).is_err()
        );
    }

    #[test]
    fn test_time_zone() {
        let ctx = ParseContext::default();
        assert_eq!(
            TimeZoneCharacteristic::decode(&[0x04], &ctx).unwrap(),
            Decoded::Value(4)
        );
        let unknown = TimeZoneCharacteristic::decode(&[0x80], &ctx).unwrap();
        assert_eq!(unknown.special().unwrap().kind, SpecialValueKind::NotKnown);
        assert!(TimeZoneCharacteristic::decode(&[0x40], &ctx).is_err());
    }

    #[test]
    fn test_time_accuracy() {
        let ctx = ParseContext::default();
        assert_eq!(
            TimeAccuracyCharacteristic::decode(&[0x04], &ctx).unwrap(),
            Decoded::Value(0.5)
        );
        assert_eq!(
            TimeAccuracyCharacteristic::decode(&[0xFE], &ctx)
                .unwrap()
                .special()
                .unwrap()
                .kind,
            SpecialValueKind::AtOrAboveMaximum
        );
    }

    #[test]
    fn test_dst_offset() {
        assert_eq!(DstOffset::from_raw(4).hours(), Some(1.0));
        assert_eq!(DstOffset::NotKnown.hours(), None);
        let ctx = ParseContext::default();
        assert!(DstOffsetCharacteristic::decode(&[0x03], &ctx).is_err());
    }

    #[test]
    fn test_local_time_information() {
        let ctx = ParseContext::default();
        let info = LocalTimeInformationCharacteristic::decode(&[0xF8, 0x04], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(info.time_zone, -8);
        assert_eq!(info.dst_offset, DstOffset::DaylightTime);
        assert_eq!(
            LocalTimeInformationCharacteristic::encode(&info).unwrap(),
            [0xF8, 0x04]
        );
    }
}
