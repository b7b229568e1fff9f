use crate::common::{client_for, d, fixture, mock_json, mock_primary, setup_server};
use fxdeposit_rs::{RateTable, RatesBuilder};

#[tokio::test]
async fn primary_nested_rates_are_parsed() {
    let server = setup_server();
    let mock = mock_primary(&server);

    let table = fxdeposit_rs::fetch_rates(&client_for(&server)).await.unwrap();

    mock.assert();
    assert_eq!(table.get("USD"), Some(d("1.1234")));
    assert_eq!(table.get("JPY"), Some(d("176.25")));
    assert!(table.source().unwrap().ends_with("/v6/latest/EUR"));
}

#[tokio::test]
async fn lookups_are_case_insensitive() {
    let server = setup_server();
    let _mock = mock_primary(&server);

    let table = fxdeposit_rs::fetch_rates(&client_for(&server)).await.unwrap();

    assert_eq!(table.get("usd"), table.get("USD"));
    assert_eq!(table.get(" gbp "), Some(d("0.8712")));
}

#[tokio::test]
async fn zero_rate_counts_as_absent() {
    let server = setup_server();
    let _mock = mock_primary(&server);

    let table = fxdeposit_rs::fetch_rates(&client_for(&server)).await.unwrap();

    assert!(!table.contains("BTN"));
    assert!(!table.contains("XYZ"));
}

#[tokio::test]
async fn flat_mapping_keeps_only_numeric_entries() {
    let server = setup_server();
    let mock = mock_json(&server, "/v6/latest/EUR", 200, &fixture("latest_flat_EUR"));

    let table = fxdeposit_rs::fetch_rates(&client_for(&server)).await.unwrap();

    mock.assert();
    assert_eq!(table.len(), 3);
    assert_eq!(table.get("USD"), Some(d("1.1")));
    assert_eq!(table.get("GBP"), Some(d("0.85")));
    assert_eq!(table.get("SEK"), Some(d("11")));
    assert!(!table.contains("BASE"));
}

#[tokio::test]
async fn per_call_base_currency_changes_the_path() {
    let server = setup_server();
    let mock = mock_json(&server, "/v6/latest/USD", 200, r#"{"rates":{"EUR":0.89}}"#);

    let table = RatesBuilder::new(&client_for(&server))
        .base_currency("usd")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(table.get("EUR"), Some(d("0.89")));
}

#[test]
fn table_from_pairs_normalizes_codes() {
    let table: RateTable = [("usd", d("1.1")), ("Eur", d("1"))].into_iter().collect();

    let codes: Vec<_> = table.iter().map(|(code, _)| code).collect();
    assert_eq!(codes, ["EUR", "USD"]);
    assert_eq!(table.source(), None);
}
