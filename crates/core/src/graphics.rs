//! Synthetic chart data about a disease.
//!
//! Each list backs one chart on the frontend. Every list is produced by a
//! separate model call, so a response may carry only the lists fetched
//! before a failure.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// Bar chart: countries producing drugs for the disease
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DrugProducingCountry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub country: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub drug_count: i64,
}

/// Line chart: yearly drug production
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct YearlyProduction {
    #[serde(default, deserialize_with = "lenient::text")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub production: i64,
}

/// Heat map: patient counts per country
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientsByCountry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub country: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub patient_count: i64,
}

/// Table: researchers working on the disease
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Scientist {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub institution: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub country: String,
}

/// Pie chart: risk factors and their share
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    #[serde(default, deserialize_with = "lenient::text")]
    pub factor: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub percentage: f64,
}

/// Area chart: spread rate per period
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpreadRate {
    #[serde(default, deserialize_with = "lenient::text")]
    pub period: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub rate: i64,
}

impl SpreadRate {
    /// Periods used when the model gives no usable spread data
    pub const FALLBACK_PERIODS: [&'static str; 6] =
        ["2023 Q1", "2023 Q2", "2023 Q3", "2023 Q4", "2024 Q1", "2024 Q2"];

    pub fn new(period: &str, rate: i64) -> Self {
        Self {
            period: period.to_string(),
            rate,
        }
    }

    /// The chart cannot render non-positive rates
    pub fn is_valid(&self) -> bool {
        self.rate > 0
    }
}

/// All chart data for one disease
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphicsResponse {
    pub success: bool,
    pub disease: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drug_producing_countries: Option<Vec<DrugProducingCountry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries_with_drug: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yearly_production: Option<Vec<YearlyProduction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patients_by_country: Option<Vec<PatientsByCountry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientists: Option<Vec<Scientist>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_factors: Option<Vec<RiskFactor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread_rate: Option<Vec<SpreadRate>>,
}

impl GraphicsResponse {
    /// An empty, successful response to be filled list by list
    pub fn new(disease: &str) -> Self {
        Self {
            success: true,
            disease: disease.to_string(),
            ..Default::default()
        }
    }

    /// Mark the response failed, keeping whatever lists were already set
    pub fn fail(&mut self, error: String) {
        self.success = false;
        self.error = Some(error);
    }
}
