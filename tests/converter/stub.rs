use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::BoxFuture;
use fxdeposit_rs::{
    Element, FxError, Marker, RateConverter, RateTable, RatesService, RenderOutcome,
};

use crate::common::{d, raw_config};

/// Serves a fixed table (or a failure) and counts fetches.
struct StubRates {
    table: Option<RateTable>,
    calls: AtomicUsize,
}

impl StubRates {
    fn serving(pairs: &[(&str, &str)]) -> Self {
        Self {
            table: Some(pairs.iter().map(|(code, rate)| (*code, d(rate))).collect()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            table: None,
            calls: AtomicUsize::new(0),
        }
    }
}

impl RatesService for StubRates {
    fn fetch_rates(&self) -> BoxFuture<'_, Result<RateTable, FxError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = self
            .table
            .clone()
            .ok_or(FxError::AllSourcesFailed { attempts: vec![] });
        Box::pin(async move { result })
    }
}

fn deposit() -> Element {
    Element::new("span").marker(Marker::Deposit, "")
}

#[tokio::test]
async fn hundred_at_one_point_ten_renders_110_dollars() {
    let stub = StubRates::serving(&[("USD", "1.10")]);
    let mut converter = RateConverter::init(&stub, raw_config(), vec![deposit()], None).unwrap();

    converter.run().await;

    assert_eq!(converter.targets()[0].text(), "$110");
}

#[tokio::test]
async fn deposit_round_up_on_exact_product_keeps_value() {
    let stub = StubRates::serving(&[("USD", "1.10")]);
    let targets = vec![deposit().marker(Marker::RoundUp, "")];
    let mut converter = RateConverter::init(&stub, raw_config(), targets, None).unwrap();

    converter.run().await;

    assert_eq!(converter.targets()[0].text(), "$110");
}

#[tokio::test]
async fn no_word_big_number_attaches_symbol() {
    let stub = StubRates::serving(&[("USD", "1")]);
    let targets = vec![
        Element::new("span").marker(Marker::MultiplyBigNumberNoWord, "25000000"),
        Element::new("span").marker(Marker::MultiplyBigNumberNoWord, "25000"),
    ];
    let mut converter = RateConverter::init(&stub, raw_config(), targets, None).unwrap();

    converter.run().await;

    let texts: Vec<_> = converter.targets().iter().map(Element::text).collect();
    assert_eq!(texts, ["$2.5", "$3"]);
}

#[tokio::test]
async fn every_update_fetches_again() {
    let stub = StubRates::serving(&[("USD", "1.2")]);
    let mut converter = RateConverter::init(&stub, raw_config(), vec![deposit()], None).unwrap();

    converter.run().await;
    converter.update_converted_amount().await;

    assert_eq!(stub.calls.load(Ordering::SeqCst), 2);
    assert_eq!(converter.targets()[0].text(), "$120");
}

#[tokio::test]
async fn failure_uses_configured_unavailable_message() {
    let stub = StubRates::failing();
    let mut raw = raw_config();
    raw.unavailable_message = Some("Rates are offline".into());
    let mut converter = RateConverter::init(&stub, raw, vec![deposit(), deposit()], None).unwrap();

    let outcome = converter.run().await;

    assert_eq!(outcome, RenderOutcome::Unavailable);
    let texts: Vec<_> = converter.into_targets().into_iter().map(|e| e.text().to_string()).collect();
    assert_eq!(texts, ["Rates are offline", "Rates are offline"]);
}

#[tokio::test]
async fn zero_rate_clears_instead_of_rendering_zero() {
    let stub = StubRates::serving(&[("USD", "0")]);
    let targets = vec![deposit().with_text("stale")];
    let mut converter = RateConverter::init(&stub, raw_config(), targets, None).unwrap();

    let outcome = converter.run().await;

    assert_eq!(outcome, RenderOutcome::Cleared);
    assert_eq!(converter.targets()[0].text(), "");
}

#[tokio::test]
async fn borrowed_targets_are_written_in_place() {
    let stub = StubRates::serving(&[("USD", "1.5")]);
    let mut first = deposit();
    let mut second = Element::new("span").marker(Marker::MultiplyWord, "3");

    {
        let targets = vec![&mut first, &mut second];
        let mut converter = RateConverter::init(&stub, raw_config(), targets, None).unwrap();
        converter.run().await;
    }

    assert_eq!(first.text(), "$150");
    assert_eq!(second.text(), "450 dollars");
}

#[test]
fn render_against_a_known_table() {
    let stub = StubRates::failing();
    let table: RateTable = [("USD", d("2"))].into_iter().collect();
    let mut converter = RateConverter::init(&stub, raw_config(), vec![deposit()], None).unwrap();

    let outcome = converter.render(&table);

    assert_eq!(outcome, RenderOutcome::Rendered { targets: 1 });
    assert_eq!(converter.targets()[0].text(), "$200");
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unrepresentable_multiplier_renders_empty() {
    let stub = StubRates::serving(&[("USD", "1.12")]);
    let targets = vec![
        deposit(),
        Element::new("span")
            .marker(Marker::Multiply, "1e30")
            .with_text("stale"),
        Element::new("span").marker(Marker::MultiplyBigNumber, "1e29"),
    ];
    let mut converter = RateConverter::init(&stub, raw_config(), targets, None).unwrap();

    let outcome = converter.run().await;

    assert_eq!(outcome, RenderOutcome::Rendered { targets: 3 });
    let texts: Vec<_> = converter.targets().iter().map(Element::text).collect();
    assert_eq!(texts, ["$112", "", ""]);
}
