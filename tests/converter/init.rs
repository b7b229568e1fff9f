use crate::common::{client_for, raw_config, setup_server};
use fxdeposit_rs::{
    ConverterConfig, Element, FxError, Locale, Marker, RateConverter, RawConfig, SignPlacement,
};
use httpmock::Method::GET;

#[test]
fn legacy_global_names_validate() {
    let config = raw_config().validate().unwrap();

    assert_eq!(
        config,
        ConverterConfig {
            currency: "usd".into(),
            fixed_amount: 100.into(),
            sign_placement: SignPlacement::Before,
            locale: Locale::parse("en-US"),
            value_separator: false,
            word: "dollars".into(),
            unavailable_message: "Course not available".into(),
        }
    );
}

#[test]
fn first_missing_value_is_reported() {
    let mut raw = raw_config();
    raw.sign_location = None;
    raw.word = None;

    match raw.validate() {
        Err(FxError::MissingConfig(name)) => assert_eq!(name, "sign_location"),
        other => panic!("expected MissingConfig, got {other:?}"),
    }
}

#[test]
fn empty_config_reports_currency_first() {
    let err = RawConfig::default().validate().unwrap_err();
    assert!(matches!(err, FxError::MissingConfig("currency")));
}

#[tokio::test]
async fn missing_config_skips_initialization_without_requests() {
    let server = setup_server();
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("{}");
    });

    let mut raw = raw_config();
    raw.word = None;
    let targets = vec![Element::new("span").marker(Marker::Deposit, "").with_text("keep")];

    let converter = RateConverter::init(client_for(&server), raw, targets, None);

    assert!(converter.is_none());
    any.assert_calls(0);
}

#[test]
fn no_targets_skips_initialization() {
    let candidates = vec![Element::new("p"), Element::new("div").attr("class", "price")];

    let converter: Option<RateConverter<Element>> =
        RateConverter::init(fxdeposit_rs::RatesClient::default(), raw_config(), candidates, None);

    assert!(converter.is_none());
}
