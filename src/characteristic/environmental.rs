//! Environmental Sensing characteristics
//!
//! Almost all of these are a single fixed-point integer. Temperature and
//! Humidity reserve their all-ones/most-negative pattern for "not known".

use super::{
    Characteristic, CharacteristicInfo, Decoded, LengthRule, ParseContext, ValueType,
};
use crate::codec::{ByteReader, ByteWriter, Resolution};
use crate::error::CodecError;
use alloc::vec::Vec;

scaled_characteristic! {
    /// Magnetic Declination (0x2A2C)
    MagneticDeclinationCharacteristic {
        uuid: 0x2A2C,
        name: "Magnetic Declination",
        id: "org.bluetooth.characteristic.magnetic_declination",
        unit: Some("°"),
        width: 2,
        signed: false,
        resolution: Resolution::decimal(-2),
        range: 0.0 => 359.99,
        special: [],
    }
}

scaled_characteristic! {
    /// Elevation (0x2A6C)
    ElevationCharacteristic {
        uuid: 0x2A6C,
        name: "Elevation",
        id: "org.bluetooth.characteristic.elevation",
        unit: Some("m"),
        width: 3,
        signed: true,
        resolution: Resolution::decimal(-2),
        range: -83_886.08 => 83_886.07,
        special: [],
    }
}

scaled_characteristic! {
    /// Pressure (0x2A6D)
    PressureCharacteristic {
        uuid: 0x2A6D,
        name: "Pressure",
        id: "org.bluetooth.characteristic.pressure",
        unit: Some("Pa"),
        width: 4,
        signed: false,
        resolution: Resolution::decimal(-1),
        range: 0.0 => 429_496_729.5,
        special: [],
    }
}

scaled_characteristic! {
    /// Temperature (0x2A6E)
    TemperatureCharacteristic {
        uuid: 0x2A6E,
        name: "Temperature",
        id: "org.bluetooth.characteristic.temperature",
        unit: Some("°C"),
        width: 2,
        signed: true,
        resolution: Resolution::decimal(-2),
        range: -273.15 => 327.67,
        special: [0x8000 => NotKnown],
    }
}

scaled_characteristic! {
    /// Humidity (0x2A6F)
    HumidityCharacteristic {
        uuid: 0x2A6F,
        name: "Humidity",
        id: "org.bluetooth.characteristic.humidity",
        unit: Some("%"),
        width: 2,
        signed: false,
        resolution: Resolution::decimal(-2),
        range: 0.0 => 100.0,
        special: [0xFFFF => NotKnown],
    }
}

scaled_characteristic! {
    /// True Wind Speed (0x2A70)
    TrueWindSpeedCharacteristic {
        uuid: 0x2A70,
        name: "True Wind Speed",
        id: "org.bluetooth.characteristic.true_wind_speed",
        unit: Some("m/s"),
        width: 2,
        signed: false,
        resolution: Resolution::decimal(-2),
        range: 0.0 => 655.35,
        special: [],
    }
}

scaled_characteristic! {
    /// True Wind Direction (0x2A71)
    TrueWindDirectionCharacteristic {
        uuid: 0x2A71,
        name: "True Wind Direction",
        id: "org.bluetooth.characteristic.true_wind_direction",
        unit: Some("°"),
        width: 2,
        signed: false,
        resolution: Resolution::decimal(-2),
        range: 0.0 => 359.99,
        special: [],
    }
}

scaled_characteristic! {
    /// Apparent Wind Speed (0x2A72)
    ApparentWindSpeedCharacteristic {
        uuid: 0x2A72,
        name: "Apparent Wind Speed",
        id: "org.bluetooth.characteristic.apparent_wind_speed",
        unit: Some("m/s"),
        width: 2,
        signed: false,
        resolution: Resolution::decimal(-2),
        range: 0.0 => 655.35,
        special: [],
    }
}

scaled_characteristic! {
    /// Apparent Wind Direction (0x2A73)
    ApparentWindDirectionCharacteristic {
        uuid: 0x2A73,
        name: "Apparent Wind Direction",
        id: "org.bluetooth.characteristic.apparent_wind_direction",
        unit: Some("°"),
        width: 2,
        signed: false,
        resolution: Resolution::decimal(-2),
        range: 0.0 => 359.99,
        special: [],
    }
}

scaled_characteristic! {
    /// Gust Factor (0x2A74), unitless ratio
    GustFactorCharacteristic {
        uuid: 0x2A74,
        name: "Gust Factor",
        id: "org.bluetooth.characteristic.gust_factor",
        unit: None,
        width: 1,
        signed: false,
        resolution: Resolution::decimal(-1),
        range: 0.0 => 25.5,
        special: [],
    }
}

integer_characteristic! {
    /// Pollen Concentration (0x2A75), grains per cubic meter
    PollenConcentrationCharacteristic {
        uuid: 0x2A75,
        name: "Pollen Concentration",
        id: "org.bluetooth.characteristic.pollen_concentration",
        unit: Some("grains/m³"),
        value: u32,
        width: 3,
        signed: false,
        range: 0.0 => 16_777_215.0,
        special: [],
    }
}

integer_characteristic! {
    /// UV Index (0x2A76)
    UvIndexCharacteristic {
        uuid: 0x2A76,
        name: "UV Index",
        id: "org.bluetooth.characteristic.uv_index",
        unit: None,
        value: u8,
        width: 1,
        signed: false,
        range: 0.0 => 255.0,
        special: [],
    }
}

scaled_characteristic! {
    /// Irradiance (0x2A77)
    IrradianceCharacteristic {
        uuid: 0x2A77,
        name: "Irradiance",
        id: "org.bluetooth.characteristic.irradiance",
        unit: Some("W/m²"),
        width: 2,
        signed: false,
        resolution: Resolution::decimal(-1),
        range: 0.0 => 6553.5,
        special: [],
    }
}

scaled_characteristic! {
    /// Rainfall (0x2A78), 1 mm resolution expressed in meters
    RainfallCharacteristic {
        uuid: 0x2A78,
        name: "Rainfall",
        id: "org.bluetooth.characteristic.rainfall",
        unit: Some("m"),
        width: 2,
        signed: false,
        resolution: Resolution::decimal(-3),
        range: 0.0 => 65.535,
        special: [],
    }
}

integer_characteristic! {
    /// Wind Chill (0x2A79)
    WindChillCharacteristic {
        uuid: 0x2A79,
        name: "Wind Chill",
        id: "org.bluetooth.characteristic.wind_chill",
        unit: Some("°C"),
        value: i8,
        width: 1,
        signed: true,
        range: -128.0 => 127.0,
        special: [],
    }
}

integer_characteristic! {
    /// Heat Index (0x2A7A)
    HeatIndexCharacteristic {
        uuid: 0x2A7A,
        name: "Heat Index",
        id: "org.bluetooth.characteristic.heat_index",
        unit: Some("°C"),
        value: i8,
        width: 1,
        signed: true,
        range: -128.0 => 127.0,
        special: [],
    }
}

integer_characteristic! {
    /// Dew Point (0x2A7B)
    DewPointCharacteristic {
        uuid: 0x2A7B,
        name: "Dew Point",
        id: "org.bluetooth.characteristic.dew_point",
        unit: Some("°C"),
        value: i8,
        width: 1,
        signed: true,
        range: -128.0 => 127.0,
        special: [],
    }
}

scaled_characteristic! {
    /// Temperature Celsius (0x2A1F)
    TemperatureCelsiusCharacteristic {
        uuid: 0x2A1F,
        name: "Temperature Celsius",
        id: "org.bluetooth.characteristic.temperature_celsius",
        unit: Some("°C"),
        width: 2,
        signed: true,
        resolution: Resolution::decimal(-1),
        range: -273.1 => 3276.7,
        special: [],
    }
}

scaled_characteristic! {
    /// Temperature Fahrenheit (0x2A20)
    TemperatureFahrenheitCharacteristic {
        uuid: 0x2A20,
        name: "Temperature Fahrenheit",
        id: "org.bluetooth.characteristic.temperature_fahrenheit",
        unit: Some("°F"),
        width: 2,
        signed: true,
        resolution: Resolution::decimal(-1),
        range: -459.6 => 3276.7,
        special: [],
    }
}

const FLUX_RESOLUTION: Resolution = Resolution::decimal(-7);

/// Magnetic flux density vector in tesla
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagneticFluxDensity {
    /// X axis
    pub x: f64,
    /// Y axis
    pub y: f64,
    /// Z axis, `None` for the 2D characteristic
    pub z: Option<f64>,
}

fn decode_flux(data: &[u8], axes: usize) -> Result<MagneticFluxDensity, CodecError> {
    let mut reader = ByteReader::new(data);
    let x = FLUX_RESOLUTION.apply(i64::from(reader.read_i16()?));
    let y = FLUX_RESOLUTION.apply(i64::from(reader.read_i16()?));
    let z = if axes == 3 {
        Some(FLUX_RESOLUTION.apply(i64::from(reader.read_i16()?)))
    } else {
        None
    };
    Ok(MagneticFluxDensity { x, y, z })
}

fn encode_flux(value: &MagneticFluxDensity, axes: usize) -> Result<Vec<u8>, CodecError> {
    let mut writer = ByteWriter::with_capacity(2 * axes);
    for component in [Some(value.x), Some(value.y), value.z].into_iter().take(axes) {
        let raw = FLUX_RESOLUTION.unapply("magnetic flux density", component.unwrap_or(0.0))?;
        writer.write_i16(crate::codec::narrow("magnetic flux density", raw)?);
    }
    Ok(writer.into_vec())
}

/// Magnetic Flux Density - 2D (0x2AA0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MagneticFluxDensity2DCharacteristic;

impl Characteristic for MagneticFluxDensity2DCharacteristic {
    type Value = MagneticFluxDensity;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2AA0,
        "Magnetic Flux Density - 2D",
        "org.bluetooth.characteristic.magnetic_flux_density_2d",
        Some("T"),
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(4);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        decode_flux(data, 2).map(Decoded::Value)
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        encode_flux(value, 2)
    }
}

/// Magnetic Flux Density - 3D (0x2AA1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MagneticFluxDensity3DCharacteristic;

impl Characteristic for MagneticFluxDensity3DCharacteristic {
    type Value = MagneticFluxDensity;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2AA1,
        "Magnetic Flux Density - 3D",
        "org.bluetooth.characteristic.magnetic_flux_density_3d",
        Some("T"),
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(6);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        decode_flux(data, 3).map(Decoded::Value)
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        encode_flux(value, 3)
    }
}

sig_enum! {
    /// Barometric pressure trend
    pub enum PressureTrend: u8 {
        /// Unknown
        Unknown = 0,
        /// Continuously falling
        ContinuouslyFalling = 1,
        /// Continuously rising
        ContinuouslyRising = 2,
        /// Falling, then steady
        FallingThenSteady = 3,
        /// Rising, then steady
        RisingThenSteady = 4,
        /// Falling before a lesser rise
        FallingBeforeLesserRise = 5,
        /// Falling before a greater rise
        FallingBeforeGreaterRise = 6,
        /// Rising before a greater fall
        RisingBeforeGreaterFall = 7,
        /// Rising before a lesser fall
        RisingBeforeLesserFall = 8,
        /// Steady
        Steady = 9,
    }
}

enum_characteristic! {
    /// Barometric Pressure Trend (0x2AA3)
    BarometricPressureTrendCharacteristic => PressureTrend {
        uuid: 0x2AA3,
        name: "Barometric Pressure Trend",
        id: "org.bluetooth.characteristic.barometric_pressure_trend",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::{SpecialValueKind, SpecialValuePolicy};

    #[test]
    fn test_temperature() {
        let ctx = ParseContext::default();
        let value = TemperatureCharacteristic::decode(&[0x64, 0x09], &ctx).unwrap();
        assert_eq!(value, Decoded::Value(24.04));
        assert_eq!(TemperatureCharacteristic::encode(&24.04).unwrap(), [0x64, 0x09]);

        let negative = TemperatureCharacteristic::decode(&[0x18, 0xFC], &ctx).unwrap();
        assert_eq!(negative, Decoded::Value(-10.0));
    }

    #[test]
    fn test_temperature_not_known() {
        let ctx = ParseContext::default();
        let special = TemperatureCharacteristic::decode(&[0x00, 0x80], &ctx)
            .unwrap()
            .special()
            .unwrap();
        assert_eq!(special.kind, SpecialValueKind::NotKnown);
        assert_eq!(special.raw, 0x8000);
        assert_eq!(
            TemperatureCharacteristic::encode_special(special).unwrap(),
            [0x00, 0x80]
        );

        let strict = ctx.with_special_values(SpecialValuePolicy::Raise);
        assert!(matches!(
            TemperatureCharacteristic::decode(&[0x00, 0x80], &strict),
            Err(CodecError::SpecialValue(_))
        ));

        let raw = TemperatureCharacteristic::decode(&[0x00, 0x80], &ctx.with_validation(false));
        assert_eq!(raw.unwrap(), Decoded::Value(-327.68));
    }

    #[test]
    fn test_humidity() {
        let ctx = ParseContext::default();
        assert_eq!(
            HumidityCharacteristic::decode(&[0x10, 0x27], &ctx).unwrap(),
            Decoded::Value(100.0)
        );
        assert!(HumidityCharacteristic::decode(&[0x11, 0x27], &ctx).is_err());
        assert!(
            HumidityCharacteristic::decode(&[0xFF, 0xFF], &ctx)
                .unwrap()
                .is_special()
        );
        assert!(HumidityCharacteristic::encode(&100.5).is_err());
    }

    #[test]
    fn test_pressure_and_elevation() {
        let ctx = ParseContext::default();
        let pressure = PressureCharacteristic::decode(&[0x02, 0x76, 0x0F, 0x00], &ctx).unwrap();
        assert_eq!(pressure, Decoded::Value(101_325.0));
        assert_eq!(
            PressureCharacteristic::encode(&101_325.0).unwrap(),
            [0x02, 0x76, 0x0F, 0x00]
        );

        let elevation = ElevationCharacteristic::decode(&[0x0C, 0xFE, 0xFF], &ctx).unwrap();
        assert_eq!(elevation, Decoded::Value(-5.0));
        assert_eq!(
            ElevationCharacteristic::encode(&-5.0).unwrap(),
            [0x0C, 0xFE, 0xFF]
        );
    }

    #[test]
    fn test_signed_byte_quantities() {
        let ctx = ParseContext::default();
        assert_eq!(
            DewPointCharacteristic::decode(&[0xF6], &ctx).unwrap(),
            Decoded::Value(-10)
        );
        assert_eq!(WindChillCharacteristic::encode(&-3).unwrap(), [0xFD]);
    }

    #[test]
    fn test_magnetic_flux_density() {
        let ctx = ParseContext::default();
        let flux = MagneticFluxDensity3DCharacteristic::decode(
            &[0x10, 0x27, 0xF0, 0xD8, 0x00, 0x00],
            &ctx,
        )
        .unwrap()
        .into_value()
        .unwrap();
        assert!((flux.x - 0.001).abs() < 1e-12);
        assert!((flux.y + 0.001).abs() < 1e-12);
        assert_eq!(flux.z, Some(0.0));
        assert!(MagneticFluxDensity2DCharacteristic::decode(&[0x00; 6], &ctx).is_err());
    }

    #[test]
    fn test_pressure_trend() {
        let ctx = ParseContext::default();
        assert_eq!(
            BarometricPressureTrendCharacteristic::decode(&[0x09], &ctx).unwrap(),
            Decoded::Value(PressureTrend::Steady)
        );
        assert!(matches!(
            BarometricPressureTrendCharacteristic::decode(&[0x0A], &ctx),
            Err(CodecError::Reserved { value: 10, .. })
        ));
        assert_eq!(
            BarometricPressureTrendCharacteristic::decode(&[0x0A], &ctx.with_validation(false))
                .unwrap(),
            Decoded::Value(PressureTrend::Reserved(10))
        );
    }
}
