#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::{cell::RefCell, fmt};

use paycrypto_data_plane::{
    BuilderConf, DataPlaneCall, DataPlaneError, DataPlaneTransport, Fields, Selector,
    builders::{
        build_encrypt_request, build_kek_validation_request, build_key_translation_request,
        build_mac_request, build_verify_mac_request,
    },
    invoke, invoke_typed,
    models::{GenerateMacResponse, WrappedKeyMaterialFormat},
};
use serde_json::{Value, json};

#[derive(Debug)]
struct ServiceUnavailable;

impl fmt::Display for ServiceUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "service unavailable")
    }
}

impl std::error::Error for ServiceUnavailable {}

/// Records every call and answers with a canned body
struct CannedTransport {
    answer: Option<Value>,
    calls: RefCell<Vec<DataPlaneCall>>,
}

impl CannedTransport {
    fn answering(answer: Value) -> Self {
        Self {
            answer: Some(answer),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            answer: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn last_call(&self) -> DataPlaneCall {
        self.calls.borrow().last().cloned().expect("no call sent")
    }
}

impl DataPlaneTransport for CannedTransport {
    type Error = ServiceUnavailable;

    fn send(&self, call: DataPlaneCall) -> Result<Value, Self::Error> {
        self.calls.borrow_mut().push(call);
        self.answer.clone().ok_or(ServiceUnavailable)
    }
}

fn log_init() {
    paycrypto_logger::log_init(Some("debug"));
}

fn mac_answer() -> Value {
    json!({
        "KeyArn": "arn:aws:payment-cryptography:us-east-2:111122223333:key/kwapwa6qaifllw2h",
        "KeyCheckValue": "2976E7",
        "Mac": "ED87F26E961C6D0D"
    })
}

#[test]
fn generate_mac_returns_the_whole_response_by_default() {
    log_init();
    let request = build_mac_request(
        &Fields::new()
            .with("KeyIdentifier", "arn:kek:1")
            .with("MessageData", "3b313038383439303031303733393431353d32343038")
            .with("GenerationAttributes_Algorithm", "HMAC_SHA256"),
        &BuilderConf::default(),
    )
    .unwrap();
    let transport = CannedTransport::answering(mac_answer());

    let value = invoke(&transport, &request, None).unwrap();
    assert_eq!(value, mac_answer());

    let call = transport.last_call();
    assert_eq!(call.operation, "GenerateMac");
    assert_eq!(call.method, "POST");
    assert_eq!(call.path, "/mac/generate");
    assert_eq!(call.body["GenerationAttributes"], json!({"Algorithm": "HMAC_SHA256"}));
}

#[test]
fn explicit_selector_picks_one_member() {
    log_init();
    let request = build_mac_request(
        &Fields::new()
            .with("KeyIdentifier", "arn:kek:1")
            .with("MessageData", "0F0F"),
        &BuilderConf::default(),
    )
    .unwrap();
    let transport = CannedTransport::answering(mac_answer());

    let mac = invoke(&transport, &request, Some(&"Mac".parse().unwrap())).unwrap();
    assert_eq!(mac, json!("ED87F26E961C6D0D"));

    let err = invoke(
        &transport,
        &request,
        Some(&Selector::Property("PlainText".to_owned())),
    )
    .unwrap_err();
    assert!(matches!(err, DataPlaneError::UnknownProperty(name) if name == "PlainText"));
}

#[test]
fn typed_projection_needs_no_selector() {
    log_init();
    let request = build_verify_mac_request(
        &Fields::new()
            .with("KeyIdentifier", "arn:kek:1")
            .with("MessageData", "0F0F")
            .with("Mac", "ED87F26E961C6D0D")
            .with("VerificationAttributes_Algorithm", "CMAC"),
        &BuilderConf::default(),
    )
    .unwrap();
    let transport = CannedTransport::answering(json!({
        "KeyArn": "arn:kek:1",
        "KeyCheckValue": "2976E7"
    }));

    let kcv = invoke_typed(&transport, &request, |response| response.key_check_value).unwrap();
    assert_eq!(kcv, "2976E7");
    assert_eq!(transport.last_call().path, "/mac/verify");
    assert_eq!(transport.last_call().body["Mac"], json!("ED87F26E961C6D0D"));
}

#[test]
fn translation_defaults_to_the_wrapped_key() {
    log_init();
    let request = build_key_translation_request(
        &Fields::new()
            .with("DiffieHellmanTr31KeyBlock_CertificateAuthorityPublicKeyIdentifier", "arn:ca:1")
            .with("DiffieHellmanTr31KeyBlock_PrivateKeyIdentifier", "arn:priv:1")
            .with("DiffieHellmanTr31KeyBlock_DeriveKeyAlgorithm", "AES_256")
            .with("DerivationData_SharedInformation", "1234")
            .with("Tr31KeyBlock_WrappingKeyIdentifier", "arn:kek:2"),
        &BuilderConf::default(),
    )
    .unwrap();
    let wrapped_key = json!({
        "KeyCheckValue": "7CC6",
        "KeyCheckValueAlgorithm": "CMAC",
        "KeyMaterial": "D0112B0AX00E0000",
        "WrappedKeyMaterialFormat": "TR31_KEY_BLOCK"
    });
    let transport = CannedTransport::answering(json!({ "WrappedKey": wrapped_key }));

    assert_eq!(invoke(&transport, &request, None).unwrap(), wrapped_key);
    let call = transport.last_call();
    assert_eq!(call.path, "/keymaterial/translate");
    assert_eq!(
        call.body["IncomingKeyMaterial"]["DiffieHellmanTr31KeyBlock"]["DerivationData"],
        json!({"SharedInformation": "1234"})
    );
    assert_eq!(
        call.body["OutgoingKeyMaterial"],
        json!({"Tr31KeyBlock": {"WrappingKeyIdentifier": "arn:kek:2"}})
    );
}

#[test]
fn encrypt_puts_the_key_in_the_path() {
    log_init();
    let request = build_encrypt_request(
        &Fields::new()
            .with("KeyIdentifier", "arn:key:3")
            .with("PlainText", "31323334")
            .with("Symmetric_Mode", "CBC")
            .with("Symmetric_InitializationVector", "00000000000000000000000000000000"),
        &BuilderConf::default(),
    )
    .unwrap();
    let transport = CannedTransport::answering(json!({
        "KeyArn": "arn:key:3",
        "CipherText": "33612AB9D6929C3A"
    }));

    let value = invoke(&transport, &request, Some(&Selector::Whole)).unwrap();
    assert_eq!(value["CipherText"], json!("33612AB9D6929C3A"));
    assert_eq!(value["KeyCheckValue"], Value::Null);

    let call = transport.last_call();
    assert_eq!(call.path, "/keys/arn%3Akey%3A3/encrypt");
    assert!(call.body.get("KeyIdentifier").is_none());
    assert_eq!(
        call.body["EncryptionAttributes"],
        json!({"Symmetric": {"Mode": "CBC", "InitializationVector": "00000000000000000000000000000000"}})
    );
}

#[test]
fn kek_validation_round_trip() {
    log_init();
    let request = build_kek_validation_request(
        &Fields::new()
            .with("KeyIdentifier", "arn:kek:4")
            .with("RandomKeySendVariantMask", "VARIANT_MASK_82C0")
            .with("KekValidationRequest_DeriveKeyAlgorithm", "TDES_2KEY"),
        &BuilderConf::default(),
    )
    .unwrap();
    let transport = CannedTransport::answering(json!({
        "KeyArn": "arn:kek:4",
        "KeyCheckValue": "A1B2C3",
        "RandomKeyReceive": "0123",
        "RandomKeySend": "4567"
    }));

    let send = invoke_typed(&transport, &request, |response| response.random_key_send).unwrap();
    assert_eq!(send, "4567");
    let call = transport.last_call();
    assert_eq!(call.operation, "GenerateAs2805KekValidation");
    assert_eq!(call.path, "/as2805kekvalidation/generate");
    assert_eq!(
        call.body["KekValidationType"],
        json!({"KekValidationRequest": {"DeriveKeyAlgorithm": "TDES_2KEY"}})
    );
}

#[test]
fn transport_errors_keep_their_source() {
    log_init();
    let request = build_mac_request(
        &Fields::new()
            .with("KeyIdentifier", "arn:kek:1")
            .with("MessageData", "0F0F"),
        &BuilderConf::default(),
    )
    .unwrap();
    let transport = CannedTransport::failing();

    let err = invoke(&transport, &request, None).unwrap_err();
    let DataPlaneError::Transport(source) = err else {
        panic!("expected a transport error, got {err}");
    };
    assert!(source.downcast_ref::<ServiceUnavailable>().is_some());
    assert_eq!(transport.calls.borrow().len(), 1);
}

#[test]
fn malformed_response_is_reported() {
    log_init();
    let request = build_mac_request(
        &Fields::new()
            .with("KeyIdentifier", "arn:kek:1")
            .with("MessageData", "0F0F"),
        &BuilderConf::default(),
    )
    .unwrap();
    let transport = CannedTransport::answering(json!({"KeyArn": "arn:kek:1"}));

    let err = invoke_typed(&transport, &request, |r: GenerateMacResponse| r.mac).unwrap_err();
    assert!(err.to_string().contains("GenerateMac response"));
}

#[test]
fn unlisted_response_format_is_kept() {
    log_init();
    let request = build_key_translation_request(
        &Fields::new().with("Tr31KeyBlock_WrappingKeyIdentifier", "arn:kek:2"),
        &BuilderConf::default(),
    )
    .unwrap();
    let transport = CannedTransport::answering(json!({
        "WrappedKey": {
            "KeyCheckValue": "7CC6",
            "KeyMaterial": "D0112B0AX00E0000",
            "WrappedKeyMaterialFormat": "TR99_KEY_BLOCK"
        }
    }));

    let format = invoke_typed(&transport, &request, |response| {
        response.wrapped_key.wrapped_key_material_format
    })
    .unwrap();
    assert_eq!(
        format,
        WrappedKeyMaterialFormat::Unknown("TR99_KEY_BLOCK".to_owned())
    );
    assert_eq!(
        invoke(&transport, &request, None).unwrap()["WrappedKeyMaterialFormat"],
        json!("TR99_KEY_BLOCK")
    );
}
