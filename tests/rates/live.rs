/// Hits the real feeds. Run explicitly:
///   cargo test --test rates -- --ignored live_default_sources
#[tokio::test]
#[ignore]
async fn live_default_sources() {
    let client = fxdeposit_rs::RatesClient::default();
    let table = fxdeposit_rs::fetch_rates(&client).await.unwrap();

    assert!(table.contains("USD"));
    assert!(table.len() > 20);
}
