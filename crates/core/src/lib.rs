//! medassist-core: Shared response types and model-output decoding
//!
//! This crate provides the types served by the medassist backend
//! (chat replies, document lists, disease graphics) and the helpers that
//! turn raw model text into those types.

pub mod chat;
pub mod document;
pub mod error;
pub mod error_body;
pub mod graphics;
pub mod lenient;
pub mod payload;

pub use chat::{ChatMessage, Sender};
pub use document::{Document, DocumentPayload, DocumentResponse};
pub use error::DecodeError;
pub use error_body::ErrorBody;
pub use graphics::{
    DrugProducingCountry, GraphicsResponse, PatientsByCountry, RiskFactor, Scientist, SpreadRate,
    YearlyProduction,
};
pub use payload::{decode, strip_code_fence};
