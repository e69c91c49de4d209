//! Chart data for a disease, one model call per chart

use std::ops::Range;

use medassist_core::{DecodeError, GraphicsResponse, SpreadRate, decode};
use rand::Rng;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::client::{ChatBackend, LlmError};
use super::prompts::{self, Prompt};

/// Range for substituted spread rates (upper bound exclusive)
pub const FALLBACK_RATES: Range<i64> = 10..50;

/// Source of substitute spread rates
pub trait RateSource: Send + Sync {
    fn next_rate(&self) -> i64;
}

/// Uniform random rates in [`FALLBACK_RATES`]
pub struct RandomRates;

impl RateSource for RandomRates {
    fn next_rate(&self) -> i64 {
        rand::thread_rng().gen_range(FALLBACK_RATES)
    }
}

#[derive(Debug, Error)]
enum FetchError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Collect all seven chart lists for `disease`.
///
/// Lists are fetched in order; the first failure stops the sequence and the
/// response keeps the lists gathered so far. Spread rate never fails.
pub async fn collect(
    backend: &dyn ChatBackend,
    rates: &dyn RateSource,
    disease: &str,
) -> GraphicsResponse {
    let mut response = GraphicsResponse::new(disease);

    match fill(backend, rates, disease, &mut response).await {
        Ok(()) => tracing::info!(disease, "Graphics data generated"),
        Err(e) => {
            tracing::warn!(disease, error = %e, "Graphics data incomplete");
            response.fail(format!("Veri çekme hatası: {e}"));
        }
    }

    response
}

async fn fill(
    backend: &dyn ChatBackend,
    rates: &dyn RateSource,
    disease: &str,
    response: &mut GraphicsResponse,
) -> Result<(), FetchError> {
    response.drug_producing_countries =
        Some(fetch(backend, &prompts::DRUG_PRODUCING_COUNTRIES, disease).await?);
    response.countries_with_drug =
        Some(fetch(backend, &prompts::COUNTRIES_WITH_DRUG, disease).await?);
    response.yearly_production = Some(fetch(backend, &prompts::YEARLY_PRODUCTION, disease).await?);
    response.patients_by_country =
        Some(fetch(backend, &prompts::PATIENTS_BY_COUNTRY, disease).await?);
    response.scientists = Some(fetch(backend, &prompts::SCIENTISTS, disease).await?);
    response.risk_factors = Some(fetch(backend, &prompts::RISK_FACTORS, disease).await?);
    response.spread_rate = Some(spread_rate(backend, rates, disease).await);
    Ok(())
}

async fn fetch<T: DeserializeOwned>(
    backend: &dyn ChatBackend,
    prompt: &Prompt,
    disease: &str,
) -> Result<T, FetchError> {
    let raw = backend.complete(prompt.request(disease)).await?;
    Ok(decode(&raw)?)
}

async fn spread_rate(
    backend: &dyn ChatBackend,
    rates: &dyn RateSource,
    disease: &str,
) -> Vec<SpreadRate> {
    match fetch::<Vec<SpreadRate>>(backend, &prompts::SPREAD_RATE, disease).await {
        Ok(mut list) => {
            repair_spread_rates(&mut list, rates);
            list
        }
        Err(e) => {
            tracing::warn!(disease, error = %e, "Spread rate unavailable, using fallback periods");
            fallback_spread_rates(rates)
        }
    }
}

/// Replace every non-positive rate with a substitute
pub fn repair_spread_rates(list: &mut [SpreadRate], rates: &dyn RateSource) {
    for entry in list.iter_mut().filter(|entry| !entry.is_valid()) {
        entry.rate = rates.next_rate();
    }
}

/// Six fixed periods with substitute rates
pub fn fallback_spread_rates(rates: &dyn RateSource) -> Vec<SpreadRate> {
    SpreadRate::FALLBACK_PERIODS
        .iter()
        .map(|period| SpreadRate::new(period, rates.next_rate()))
        .collect()
}
