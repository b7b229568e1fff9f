use crate::common::{
    FALLBACK_PATH, PRIMARY_PATH, client_for, init_tracing, mock_fallback, mock_json, mock_primary,
    raw_config, setup_server,
};
use fxdeposit_rs::{Element, Marker, RateConverter, RenderOutcome, Selector};

fn page() -> Vec<Element> {
    vec![
        Element::new("span").marker(Marker::Deposit, ""),
        Element::new("span")
            .marker(Marker::Deposit, "")
            .marker(Marker::RoundUp, ""),
        Element::new("span")
            .marker(Marker::Deposit, "")
            .marker(Marker::Multiply, "5"),
        Element::new("h1").marker(Marker::MultiplyRound, "3"),
        Element::new("span").marker(Marker::MultiplyWord, "2"),
        Element::new("span")
            .marker(Marker::MultiplyWord, "2")
            .marker(Marker::RoundUp, ""),
        Element::new("span").marker(Marker::MultiplyBigNumber, "10000"),
        Element::new("span").marker(Marker::MultiplyBigNumberNoWord, "25000"),
        Element::new("span").marker(Marker::MultiplyBigNumberNoWord, "50"),
        Element::new("span").marker(Marker::Multiply, "5"),
        Element::new("span").marker(Marker::Multiply, "abc"),
        Element::new("span").marker(Marker::RoundUp, ""),
        Element::new("b").attr("class", "deposit"),
        Element::new("p").with_text("untouched"),
    ]
}

fn texts(converter: &RateConverter<Element>) -> Vec<&str> {
    converter.targets().iter().map(Element::text).collect()
}

#[tokio::test]
async fn renders_every_policy_from_primary_rates() {
    let server = setup_server();
    let primary = mock_primary(&server);
    let fallback = mock_fallback(&server);

    let selector = Selector::parse(".deposit").unwrap();
    let mut converter =
        RateConverter::init(client_for(&server), raw_config(), page(), Some(&selector)).unwrap();

    let outcome = converter.run().await;

    primary.assert();
    fallback.assert_calls(0);
    assert_eq!(outcome, RenderOutcome::Rendered { targets: 13 });
    assert_eq!(
        texts(&converter),
        [
            "$112",
            "$120",
            "$112",
            "$340",
            "225 dollars",
            "230 dollars",
            "1.1 million",
            "$3",
            "$5.6",
            "$562",
            "$112",
            "$120",
            "$112",
        ]
    );
}

#[tokio::test]
async fn falls_back_when_primary_is_down() {
    init_tracing();
    let server = setup_server();
    let primary = mock_json(&server, PRIMARY_PATH, 502, "bad gateway");
    let fallback = mock_fallback(&server);

    let targets = vec![Element::new("span").marker(Marker::Deposit, "")];
    let mut converter =
        RateConverter::init(client_for(&server), raw_config(), targets, None).unwrap();

    let outcome = converter.update_converted_amount().await;

    primary.assert();
    fallback.assert();
    assert_eq!(outcome, RenderOutcome::Rendered { targets: 1 });
    assert_eq!(texts(&converter), ["$112"]);
}

#[tokio::test]
async fn both_sources_down_shows_unavailable_message() {
    init_tracing();
    let server = setup_server();
    let primary = mock_json(&server, PRIMARY_PATH, 500, "{}");
    let fallback = mock_json(&server, FALLBACK_PATH, 500, "{}");

    let targets = vec![
        Element::new("span").marker(Marker::Deposit, "").with_text("$99"),
        Element::new("span").marker(Marker::MultiplyWord, "2"),
    ];
    let mut converter =
        RateConverter::init(client_for(&server), raw_config(), targets, None).unwrap();

    let outcome = converter.run().await;

    primary.assert();
    fallback.assert();
    assert_eq!(outcome, RenderOutcome::Unavailable);
    assert_eq!(
        texts(&converter),
        ["Course not available", "Course not available"]
    );
}

#[tokio::test]
async fn unknown_currency_clears_targets() {
    let server = setup_server();
    let _primary = mock_primary(&server);

    let mut raw = raw_config();
    raw.currency = Some("xyz".into());
    let targets = vec![
        Element::new("span").marker(Marker::Deposit, "").with_text("$99"),
        Element::new("span").marker(Marker::MultiplyBigNumber, "10"),
    ];
    let mut converter = RateConverter::init(client_for(&server), raw, targets, None).unwrap();

    let outcome = converter.run().await;

    assert_eq!(outcome, RenderOutcome::Cleared);
    assert_eq!(texts(&converter), ["", ""]);
}

#[tokio::test]
async fn localized_output_after_sign_with_separator() {
    let server = setup_server();
    let _primary = mock_primary(&server);

    let raw = serde_json::from_str(
        r#"{
            "currency": "RUB",
            "fixed_amount": "250",
            "sign_location": "after",
            "format": "ru-RU",
            "value_separator": true,
            "word": "рублей"
        }"#,
    )
    .unwrap();
    let targets = vec![
        Element::new("span").marker(Marker::Deposit, ""),
        Element::new("span").marker(Marker::MultiplyWord, "1"),
        Element::new("span").marker(Marker::MultiplyBigNumber, "100"),
    ];
    let mut converter = RateConverter::init(client_for(&server), raw, targets, None).unwrap();

    converter.run().await;

    // 250 * 93.4411 = 23360.275
    assert_eq!(
        texts(&converter),
        [
            "23\u{a0}360 ₽",
            "23\u{a0}360 рублей",
            "2,3 миллиона",
        ]
    );
}
