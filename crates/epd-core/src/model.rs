use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Environmental impact indicator reported in an EPD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Indicator {
    #[serde(rename = "MKI")]
    Mki,
    #[serde(rename = "CO2")]
    Co2,
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::Mki => write!(f, "MKI"),
            Indicator::Co2 => write!(f, "CO2"),
        }
    }
}

/// SBK determination-method variant the declaration was prepared under.
///
/// Set 1 corresponds to EN 15804+A1, set 2 to EN 15804+A2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetType {
    #[serde(rename = "SBK_SET_1")]
    SbkSet1,
    #[serde(rename = "SBK_SET_2")]
    SbkSet2,
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl fmt::Display for SetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetType::SbkSet1 => write!(f, "SBK_SET_1"),
            SetType::SbkSet2 => write!(f, "SBK_SET_2"),
            SetType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Life-cycle stage an impact value applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    A1,
    A2,
    A3,
    #[serde(rename = "A1_A3")]
    A1A3,
    D,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::A1 => write!(f, "A1"),
            Stage::A2 => write!(f, "A2"),
            Stage::A3 => write!(f, "A3"),
            Stage::A1A3 => write!(f, "A1_A3"),
            Stage::D => write!(f, "D"),
        }
    }
}

/// One impact value found in the document text.
///
/// `set_type` records the set under which the value was searched, which
/// for documents without a recognizable set marker is not necessarily the
/// set the record is eventually classified under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedImpact {
    pub indicator: Indicator,
    pub set_type: SetType,
    pub stage: Stage,
    pub value: Decimal,
}

/// Extraction result for one uploaded EPD document.
///
/// Every scalar field is independently optional; absence means the label
/// was not found, which is the normal outcome for sparse documents. The
/// impacts sequence keeps its extraction order and is not deduplicated:
/// when no set marker is found both sets are searched, and the same text
/// match can appear once per set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEpd {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functional_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lca_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcr_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verifier_name: Option<String>,
    pub standard_set: SetType,
    pub impacts: Vec<ParsedImpact>,
}

/// A confirmed catalog record, as persisted after human review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpdRecord {
    pub id: String,
    #[serde(default)]
    pub epd_file_id: Option<String>,
    pub product_name: String,
    pub functional_unit: String,
    #[serde(default)]
    pub producer_name: Option<String>,
    #[serde(default)]
    pub lca_method: Option<String>,
    #[serde(default)]
    pub pcr_version: Option<String>,
    #[serde(default)]
    pub database_name: Option<String>,
    #[serde(default)]
    pub publication_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub verifier_name: Option<String>,
    pub standard_set: SetType,
    #[serde(default)]
    pub custom_attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub impacts: Vec<ImpactRecord>,
}

/// A persisted impact row. Unlike [`ParsedImpact`], the value may be null
/// when a reviewer cleared an extracted number without replacing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactRecord {
    pub indicator: Indicator,
    pub set_type: SetType,
    pub stage: Stage,
    #[serde(default)]
    pub value: Option<Decimal>,
}
