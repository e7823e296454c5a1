use ciborium::{cbor, value::Value};

use super::{Aaguid, Response, DEFAULT_MIN_PIN_LENGTH};
use crate::CapabilityMap;

const AAGUID: [u8; 16] = [
    0xee, 0x88, 0x28, 0x79, 0x72, 0x1c, 0x49, 0x13, 0x97, 0x75, 0x3d, 0xfc, 0xce, 0x97, 0x07, 0x2a,
];

fn to_cbor(value: &Value) -> Vec<u8> {
    let mut serialized = Vec::new();
    ciborium::ser::into_writer(value, &mut serialized).expect("Could not serialize to cbor");
    serialized
}

#[test]
fn decodes_a_ctap_2_1_response() {
    let input = cbor!({
        0x01 => vec!["U2F_V2", "FIDO_2_0", "FIDO_2_1_PRE", "FIDO_2_1"],
        0x02 => vec!["credProtect", "hmac-secret", "largeBlobKey", "credBlob", "minPinLength"],
        0x03 => Value::Bytes(AAGUID.to_vec()),
        0x04 => {
            "rk" => true,
            "up" => true,
            "plat" => false,
            "alwaysUv" => false,
            "credMgmt" => true,
            "authnrCfg" => true,
            "clientPin" => true,
            "largeBlobs" => true,
            "pinUvAuthToken" => true,
            "setMinPINLength" => true,
            "makeCredUvNotRqd" => true,
            "credentialMgmtPreview" => true
        },
        0x05 => 1200,
        0x06 => vec![2, 1],
        0x0C => false,
        0x0D => 6,
        0x0E => 328707
    })
    .unwrap();

    let response = Response::from_cbor(&to_cbor(&input)).expect("Could not deserialize");

    assert_eq!(
        response.versions,
        vec!["U2F_V2", "FIDO_2_0", "FIDO_2_1_PRE", "FIDO_2_1"]
    );
    assert_eq!(response.extensions.as_ref().map(Vec::len), Some(5));
    assert_eq!(response.aaguid, Aaguid(AAGUID));
    assert_eq!(response.force_pin_change, Some(false));
    assert_eq!(response.min_pin_length, Some(6));
    assert_eq!(response.firmware_version, Some(328707));

    let options = response.options.as_ref().expect("options should be present");
    assert_eq!(options.len(), 12);
    assert_eq!(options.get_optional_bool("credMgmt"), Some(true));
    assert_eq!(options.get_optional_bool("bioEnroll"), None);
}

#[test]
fn missing_optional_members_use_defaults() {
    let input = cbor!({
        0x01 => vec!["FIDO_2_0"],
        0x03 => Value::Bytes([0; 16].to_vec()),
    })
    .unwrap();

    let response = Response::from_cbor(&to_cbor(&input)).expect("Could not deserialize");

    assert_eq!(response.aaguid, Aaguid::new_empty());
    assert_eq!(response.options, None);
    assert_eq!(response.min_pin_length, None);
    assert_eq!(response.min_pin_length_or_default(), DEFAULT_MIN_PIN_LENGTH);
    assert!(!response.force_pin_change_or_default());
}

#[test]
fn unknown_members_are_skipped() {
    let input = cbor!({
        0x01 => vec!["FIDO_2_1"],
        0x03 => Value::Bytes(AAGUID.to_vec()),
        0x09 => vec!["usb", "nfc"],
        0x0A => [{ "alg" => -7, "type" => "public-key" }],
        0x14 => 25,
        0x7F => "vendor",
        0x0D => 8,
    })
    .unwrap();

    let response = Response::from_cbor(&to_cbor(&input)).expect("Could not deserialize");

    assert_eq!(response.min_pin_length_or_default(), 8);
    assert_eq!(response.versions, vec!["FIDO_2_1"]);
}

#[test]
fn missing_aaguid_is_an_error() {
    let input = cbor!({
        0x01 => vec!["FIDO_2_0"],
    })
    .unwrap();

    Response::from_cbor(&to_cbor(&input)).expect_err("aaguid is a required member");
}

#[test]
fn short_aaguid_is_an_error() {
    let input = cbor!({
        0x01 => vec!["FIDO_2_0"],
        0x03 => Value::Bytes(vec![0x01, 0x02]),
    })
    .unwrap();

    Response::from_cbor(&to_cbor(&input)).expect_err("aaguid must be 16 bytes");
}

#[test]
fn options_with_non_text_ids_are_skipped() {
    let input = cbor!({
        0x01 => vec!["FIDO_2_1"],
        0x03 => Value::Bytes(AAGUID.to_vec()),
        0x04 => {
            "clientPin" => true,
            1 => true,
            "alwaysUv" => false
        },
    })
    .unwrap();

    let response = Response::from_cbor(&to_cbor(&input)).expect("Could not deserialize");

    let options = response.options.as_ref().expect("options should be present");
    assert_eq!(options.len(), 2);
    assert_eq!(options.get_optional_bool("clientPin"), Some(true));
    assert_eq!(options.get_optional_bool("alwaysUv"), Some(false));
}

#[test]
fn duplicate_members_are_an_error() {
    let input = Value::Map(vec![
        (Value::from(0x01), cbor!(["FIDO_2_0"]).unwrap()),
        (Value::from(0x03), Value::Bytes(AAGUID.to_vec())),
        (Value::from(0x0D), Value::from(4)),
        (Value::from(0x0D), Value::from(6)),
    ]);

    Response::from_cbor(&to_cbor(&input)).expect_err("minPINLength is set twice");
}

#[test]
fn serialization_round_trip() {
    let expected = Response {
        versions: vec!["FIDO_2_0".into(), "FIDO_2_1".into()],
        extensions: Some(vec!["credProtect".into()]),
        aaguid: Aaguid(AAGUID),
        options: Some(
            [
                ("rk".to_owned(), Value::Bool(true)),
                ("bioEnroll".to_owned(), Value::Bool(false)),
            ]
            .into_iter()
            .collect(),
        ),
        force_pin_change: None,
        min_pin_length: Some(6),
        firmware_version: None,
    };
    let mut serialized = Vec::new();
    ciborium::ser::into_writer(&expected, &mut serialized).expect("Could not serialize to cbor");

    let deserialized = Response::from_cbor(&serialized).expect("Could not deserialize");

    assert_eq!(deserialized, expected);
}

#[test]
fn serialization_expected_wire_fmt() {
    let input = Response {
        versions: vec!["FIDO_2_1".into()],
        aaguid: Aaguid::new_empty(),
        min_pin_length: Some(8),
        ..Default::default()
    };
    let mut serialized = Vec::new();
    ciborium::ser::into_writer(&input, &mut serialized).expect("Could not serialize to cbor");

    let deserialized: Value =
        ciborium::de::from_reader(serialized.as_slice()).expect("Could not deserialize");

    let expected = cbor!({
        0x01 => vec!["FIDO_2_1"],
        0x03 => Value::Bytes([0; 16].to_vec()),
        // absent members are skipped
        0x0D => 8
    })
    .unwrap();

    assert_eq!(deserialized, expected);
}
