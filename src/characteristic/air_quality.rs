//! Air quality characteristics
//!
//! CO2 and VOC are plain `uint16` counts. The gas and particulate mass
//! concentrations are `SFLOAT` in kg/m³.

use crate::codec::SFloat;

/// Largest finite SFLOAT, `2047 × 10^7`
const SFLOAT_MAX: f64 = 2.047e10;

integer_characteristic! {
    /// CO2 Concentration (0x2B8C)
    Co2ConcentrationCharacteristic {
        uuid: 0x2B8C,
        name: "CO2 Concentration",
        id: "org.bluetooth.characteristic.co2_concentration",
        unit: Some("ppm"),
        value: u16,
        width: 2,
        signed: false,
        range: 0.0 => 65533.0,
        special: [0xFFFE => AtOrAboveMaximum, 0xFFFF => NotKnown],
    }
}

integer_characteristic! {
    /// VOC Concentration (0x2BE7)
    VocConcentrationCharacteristic {
        uuid: 0x2BE7,
        name: "VOC Concentration",
        id: "org.bluetooth.characteristic.voc_concentration",
        unit: Some("ppb"),
        value: u16,
        width: 2,
        signed: false,
        range: 0.0 => 65533.0,
        special: [0xFFFE => AtOrAboveMaximum, 0xFFFF => NotKnown],
    }
}

macro_rules! mass_concentration {
    ($($(#[$meta:meta])* $name:ident($uuid:literal, $display:literal, $id:literal);)*) => {
        $(
            sfloat_characteristic! {
                $(#[$meta])*
                $name {
                    uuid: $uuid,
                    name: $display,
                    id: $id,
                    unit: Some("kg/m³"),
                    range: 0.0 => SFLOAT_MAX,
                }
            }
        )*
    };
}

mass_concentration! {
    /// Ammonia Concentration (0x2BCF)
    AmmoniaConcentrationCharacteristic(
        0x2BCF,
        "Ammonia Concentration",
        "org.bluetooth.characteristic.ammonia_concentration"
    );
    /// Carbon Monoxide Concentration (0x2BD0)
    CarbonMonoxideConcentrationCharacteristic(
        0x2BD0,
        "Carbon Monoxide Concentration",
        "org.bluetooth.characteristic.carbon_monoxide_concentration"
    );
    /// Methane Concentration (0x2BD1)
    MethaneConcentrationCharacteristic(
        0x2BD1,
        "Methane Concentration",
        "org.bluetooth.characteristic.methane_concentration"
    );
    /// Nitrogen Dioxide Concentration (0x2BD2)
    NitrogenDioxideConcentrationCharacteristic(
        0x2BD2,
        "Nitrogen Dioxide Concentration",
        "org.bluetooth.characteristic.nitrogen_dioxide_concentration"
    );
    /// Non-Methane Volatile Organic Compounds Concentration (0x2BD3)
    NonMethaneVocConcentrationCharacteristic(
        0x2BD3,
        "Non-Methane Volatile Organic Compounds Concentration",
        "org.bluetooth.characteristic.non-methane_volatile_organic_compounds_concentration"
    );
    /// Ozone Concentration (0x2BD4)
    OzoneConcentrationCharacteristic(
        0x2BD4,
        "Ozone Concentration",
        "org.bluetooth.characteristic.ozone_concentration"
    );
    /// Particulate Matter - PM1 Concentration (0x2BD5)
    Pm1ConcentrationCharacteristic(
        0x2BD5,
        "Particulate Matter - PM1 Concentration",
        "org.bluetooth.characteristic.particulate_matter_pm1_concentration"
    );
    /// Particulate Matter - PM2.5 Concentration (0x2BD6)
    Pm25ConcentrationCharacteristic(
        0x2BD6,
        "Particulate Matter - PM2.5 Concentration",
        "org.bluetooth.characteristic.particulate_matter_pm2_5_concentration"
    );
    /// Particulate Matter - PM10 Concentration (0x2BD7)
    Pm10ConcentrationCharacteristic(
        0x2BD7,
        "Particulate Matter - PM10 Concentration",
        "org.bluetooth.characteristic.particulate_matter_pm10_concentration"
    );
    /// Sulfur Dioxide Concentration (0x2BD8)
    SulfurDioxideConcentrationCharacteristic(
        0x2BD8,
        "Sulfur Dioxide Concentration",
        "org.bluetooth.characteristic.sulfur_dioxide_concentration"
    );
    /// Sulfur Hexafluoride Concentration (0x2BD9)
    SulfurHexafluorideConcentrationCharacteristic(
        0x2BD9,
        "Sulfur Hexafluoride Concentration",
        "org.bluetooth.characteristic.sulfur_hexafluoride_concentration"
    );
}

/// Convert a kg/m³ concentration to µg/m³
#[must_use]
pub fn to_micrograms_per_cubic_metre(kg_per_cubic_metre: f64) -> f64 {
    kg_per_cubic_metre * 1e9
}

/// Nearest SFLOAT to a µg/m³ concentration expressed in kg/m³
#[must_use]
pub fn from_micrograms_per_cubic_metre(micrograms: f64) -> SFloat {
    SFloat::from_f64(crate::codec::resolution::scale_decimal(micrograms, -9))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::{Characteristic, Decoded, ParseContext, SpecialValueKind};

    #[test]
    fn test_co2() {
        let ctx = ParseContext::default();
        assert_eq!(
            Co2ConcentrationCharacteristic::decode(&[0x20, 0x03], &ctx).unwrap(),
            Decoded::Value(800)
        );
        let special = Co2ConcentrationCharacteristic::decode(&[0xFE, 0xFF], &ctx)
            .unwrap()
            .special()
            .unwrap();
        assert_eq!(special.kind, SpecialValueKind::AtOrAboveMaximum);
        assert_eq!(
            Co2ConcentrationCharacteristic::encode_special(special).unwrap(),
            [0xFE, 0xFF]
        );
        assert_eq!(
            Co2ConcentrationCharacteristic::decode(&[0xFF, 0xFF], &ctx.with_validation(false))
                .unwrap(),
            Decoded::Value(0xFFFF)
        );
    }

    #[test]
    fn test_pm25() {
        let ctx = ParseContext::default();
        // 120 × 10^-8 kg/m³, i.e. 1200 µg/m³
        let decoded = Pm25ConcentrationCharacteristic::decode(&[0x78, 0x80], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(libm::round(to_micrograms_per_cubic_metre(decoded)), 1200.0);
        assert_eq!(from_micrograms_per_cubic_metre(1200.0).to_raw(), 0x900C);
        assert!(
            Pm25ConcentrationCharacteristic::decode(&[0xFF, 0x07], &ctx)
                .unwrap()
                .is_special()
        );
    }
}
