use ciborium::{cbor, value::Value};
use fido_types::ctap2::{get_info::Response, Aaguid};

use super::Session;
use crate::{source::MockSessionHandle, Options, SessionError, SessionInfo};

fn response() -> Response {
    let options = cbor!({
        "clientPin" => true,
        "credentialMgmtPreview" => true,
        "bioEnroll" => false,
    })
    .unwrap();
    let Value::Map(entries) = options else {
        panic!("expected a cbor map");
    };

    Response {
        versions: vec!["FIDO_2_1_PRE".to_owned()],
        aaguid: Aaguid([0x11; 16]),
        options: Some(
            entries
                .into_iter()
                .map(|(k, v)| (k.into_text().expect("text key"), v))
                .collect(),
        ),
        min_pin_length: Some(6),
        ..Default::default()
    }
}

fn handle_with(info: Option<Response>) -> MockSessionHandle {
    let mut handle = MockSessionHandle::new();
    handle
        .expect_cached_info()
        .times(1)
        .returning(move || info.clone());
    handle
}

#[test]
fn builds_from_cached_info() {
    let handle = handle_with(Some(response()));

    let session = Session::new(&handle, true).expect("cached info is available");

    assert!(session.unlocked);
    assert_eq!(session.info, SessionInfo::from(&response()));
    assert_eq!(
        session.info.options,
        Options {
            client_pin: true,
            cred_mgmt: false,
            credential_mgmt_preview: true,
            bio_enroll: Some(false),
            always_uv: false,
        }
    );
    assert_eq!(session.info.min_pin_length, 6);
}

#[test]
fn missing_cached_info_fails() {
    let handle = handle_with(None);

    let error = Session::new(&handle, false).expect_err("no info was cached");

    assert_eq!(error, SessionError::NoCachedInfo);
    assert_eq!(
        error.to_string(),
        "the session has no cached authenticator info"
    );
}

#[test]
fn equality_is_structural() {
    let info = SessionInfo::from(&response());

    assert_eq!(
        Session::from_info(info.clone(), true),
        Session::from_info(info.clone(), true)
    );
    assert_ne!(
        Session::from_info(info.clone(), true),
        Session::from_info(info, false)
    );
}

#[test]
#[cfg(not(feature = "serialize_bytes_as_base64_string"))]
fn serializes_with_wire_names() {
    let session = Session::from_info(SessionInfo::from(&response()), false);

    let json = serde_json::to_value(&session).expect("could not serialize");

    assert_eq!(json["unlocked"], serde_json::json!(false));
    assert_eq!(json["info"]["min_pin_length"], serde_json::json!(6));
    assert_eq!(json["info"]["force_pin_change"], serde_json::json!(false));
    assert_eq!(json["info"]["options"]["bioEnroll"], serde_json::json!(false));
    assert_eq!(json["info"]["aaguid"], serde_json::json!(vec![0x11; 16]));
}

#[test]
fn json_round_trip() {
    let expected = Session::from_info(SessionInfo::from(&response()), true);

    let json = serde_json::to_string(&expected).expect("could not serialize");
    let deserialized: Session = serde_json::from_str(&json).expect("could not deserialize");

    assert_eq!(deserialized, expected);
}

#[test]
fn records_are_thread_safe_values() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}

    assert_send_sync::<SessionInfo>();
    assert_send_sync::<Session>();
}
