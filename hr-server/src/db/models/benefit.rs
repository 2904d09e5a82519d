//! Benefit Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Benefit ID type
pub type BenefitId = RecordId;

/// Benefit document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benefit {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<BenefitId>,
    pub name: String,
    pub description: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub benefit_type: String,
    pub active: bool,
}

/// Create benefit payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitCreate {
    pub name: String,
    pub description: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub benefit_type: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// Update benefit payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BenefitUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default, rename = "type")]
    pub benefit_type: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}
