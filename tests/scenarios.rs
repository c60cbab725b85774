use bluesig::descriptor::gatt::ClientConfiguration;
use bluesig::{
    BluetoothUuid, CharacteristicValue, Decoded, DescriptorValue, ParseContext, SigTranslator,
    parse_advertising_data,
};

fn battery() -> BluetoothUuid {
    BluetoothUuid::parse("2A19").unwrap()
}

#[test]
fn test_battery_level_decodes_percent() {
    let result = bluesig::parse_characteristic(&battery(), &[0x64], &ParseContext::default());
    assert!(result.parse_success());
    assert_eq!(result.value(), Some(&CharacteristicValue::BatteryLevel(100)));
    assert_eq!(result.info.unit, Some("%"));
}

#[test]
fn test_battery_level_encodes_back() {
    let bytes = bluesig::build_value(&battery(), &CharacteristicValue::BatteryLevel(100)).unwrap();
    assert_eq!(bytes, b"\x64");
}

#[test]
fn test_temperature_applies_resolution() {
    let uuid = BluetoothUuid::parse("2A6E").unwrap();
    let result = bluesig::parse_characteristic(&uuid, &[0x64, 0x09], &ParseContext::default());
    assert_eq!(
        result.outcome,
        Ok(Decoded::Value(CharacteristicValue::Temperature(24.04)))
    );
}

#[test]
fn test_cccd_flags_and_length_error() {
    let cccd = BluetoothUuid::from_u16(0x2902);
    let ok = bluesig::parse_descriptor(&cccd, b"\x03\x00");
    let Some(DescriptorValue::ClientCharacteristicConfiguration(ClientConfiguration {
        notifications_enabled,
        indications_enabled,
    })) = ok.value()
    else {
        panic!("unexpected result {ok:?}");
    };
    assert!(*notifications_enabled);
    assert!(*indications_enabled);

    let failed = bluesig::parse_descriptor(&cccd, b"\x01");
    assert!(!failed.parse_success());
    assert!(failed.error_message().unwrap().contains("need 2 bytes, got 1"));
}

#[test]
fn test_unknown_service_data_uuid_is_skipped() {
    let unknown = BluetoothUuid::parse("12345678-0000-4000-8000-00805F9B34FB").unwrap();
    // 128-bit service data with payload [0x02, 0x03], then Battery Level
    let mut ad = vec![0x13, 0x21];
    ad.extend_from_slice(&unknown.as_u128().to_le_bytes());
    ad.extend_from_slice(&[0x02, 0x03]);
    ad.extend_from_slice(&[0x04, 0x16, 0x19, 0x2A, 0x50]);

    let data = parse_advertising_data(&ad);
    assert_eq!(data.service_data.len(), 2);

    let parsed = SigTranslator::default().parse_service_data(&data);
    assert_eq!(parsed.len(), 1);
    assert!(!parsed.contains_key(&unknown));
    assert_eq!(
        parsed[&battery()].value(),
        Some(&CharacteristicValue::BatteryLevel(80))
    );
}

#[test]
fn test_manufacturer_data_keyed_by_company() {
    let ad = [
        0x02, 0x01, 0x06, // flags
        0x05, 0xFF, 0x4C, 0x00, 0x02, 0x15, // Apple
        0x04, 0xFF, 0x59, 0x00, 0x01, // Nordic
    ];
    let data = parse_advertising_data(&ad);
    assert_eq!(data.manufacturer_data.len(), 2);
    assert_eq!(data.manufacturer_data[&0x004C], [0x02, 0x15]);
    assert_eq!(data.manufacturer_data[&0x0059], [0x01]);
}

#[test]
fn test_batch_failures_stay_isolated() {
    let temperature = BluetoothUuid::from_u16(0x2A6E);
    let unknown = BluetoothUuid::from_u16(0xFFF0);
    let batch: [(BluetoothUuid, &[u8]); 5] = [
        (battery(), &[0x64]),
        (unknown, &[0x01, 0x02]),
        (temperature, &[0x64]),
        (battery(), &[0x2A]),
        (temperature, &[0x64, 0x09]),
    ];
    let results = bluesig::parse_characteristics(&batch);
    assert_eq!(results.len(), 5);
    assert!(results[0].1.parse_success());
    assert!(!results[1].1.parse_success());
    assert!(!results[2].1.parse_success());
    assert_eq!(results[2].1.raw, [0x64]);
    assert_eq!(
        results[3].1.value(),
        Some(&CharacteristicValue::BatteryLevel(42))
    );
    assert_eq!(
        results[4].1.value(),
        Some(&CharacteristicValue::Temperature(24.04))
    );
}
