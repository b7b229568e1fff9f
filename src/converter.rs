use crate::config::{ConverterConfig, RawConfig};
use crate::core::{RatesClient, RatesService};
use crate::format::Formatter;
use crate::policy::ConversionPolicy;
use crate::rates::RateTable;
use crate::render::{Marker, RenderTarget, Selector, discover};

/// What a single update run wrote into the targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Every target received a converted amount.
    Rendered {
        /// Number of targets written.
        targets: usize,
    },
    /// Rates were fetched but had no entry for the configured currency; targets were emptied.
    Cleared,
    /// No rate source answered; targets show the unavailable message.
    Unavailable,
}

/// Fetches rates and renders the converted deposit amount into every display target.
pub struct RateConverter<T, S = RatesClient> {
    service: S,
    config: ConverterConfig,
    formatter: Formatter,
    targets: Vec<T>,
}

impl<T: RenderTarget, S: RatesService> RateConverter<T, S> {
    /// Creates a converter over already-discovered targets.
    pub fn new(service: S, config: ConverterConfig, targets: Vec<T>) -> Self {
        let formatter = config.formatter();
        Self {
            service,
            config,
            formatter,
            targets,
        }
    }

    /// Discovers targets among `candidates` and validates `raw`.
    ///
    /// Returns `None`, without touching the network or any target, when a required
    /// configuration value is missing or no candidate qualifies as a display target.
    pub fn init<I>(
        service: S,
        raw: RawConfig,
        candidates: I,
        selector: Option<&Selector>,
    ) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let targets = discover(candidates, selector);

        let config = match raw.validate() {
            Ok(config) => config,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_e, "converter not initialized");
                return None;
            }
        };

        if targets.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("converter not initialized: no display targets");
            return None;
        }

        Some(Self::new(service, config, targets))
    }

    /// Runs the first update; the counterpart of a page-load hook.
    pub async fn run(&mut self) -> RenderOutcome {
        self.update_converted_amount().await
    }

    /// Fetches a fresh rate table and rewrites every target.
    ///
    /// Each call fetches again; nothing is cached between runs.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(currency = %self.config.currency, targets = self.targets.len()))
    )]
    pub async fn update_converted_amount(&mut self) -> RenderOutcome {
        let rates = match self.service.fetch_rates().await {
            Ok(rates) => rates,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_e, "exchange rates unavailable");
                let message = self.config.unavailable_message.clone();
                self.fill(&message);
                return RenderOutcome::Unavailable;
            }
        };

        self.render(&rates)
    }

    /// Renders against an already-fetched table.
    pub fn render(&mut self, rates: &RateTable) -> RenderOutcome {
        let code = self.config.currency.trim().to_ascii_uppercase();
        let Some(rate) = rates.get(&code) else {
            self.fill("");
            return RenderOutcome::Cleared;
        };

        for target in &mut self.targets {
            let round_up = target.has_marker(Marker::RoundUp);
            let policy = ConversionPolicy::select(&*target);
            let text = policy
                .apply(self.config.fixed_amount, rate, round_up, &code, &self.formatter)
                .unwrap_or_else(|| {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(?policy, "converted amount out of range");
                    String::new()
                });
            target.set_text(&text);
        }

        RenderOutcome::Rendered {
            targets: self.targets.len(),
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    pub fn into_targets(self) -> Vec<T> {
        self.targets
    }

    fn fill(&mut self, text: &str) {
        for target in &mut self.targets {
            target.set_text(text);
        }
    }
}
