pub mod dates;
pub mod impacts;
pub mod labels;
pub mod normalize;
pub mod standard_set;

use crate::model::{Indicator, ParsedEpd, ParsedImpact, SetType};
use dates::{add_years, date_from_text};
use impacts::{extract_impacts_for_set, NumberFormat};
use labels::label_match;
use normalize::normalize_line_endings;
use standard_set::detect_standard_set;

const PRODUCT_NAME_LABELS: &[&str] = &["Productnaam", "Product name", "Product"];
const FUNCTIONAL_UNIT_LABELS: &[&str] = &[
    "Functionele eenheid",
    "Functional unit",
    "FE",
    "Eenheid",
    "Unit",
];
const PRODUCER_LABELS: &[&str] = &[
    "Producent",
    "Fabrikant",
    "Leverancier",
    "Manufacturer",
    "Producer",
];
const LCA_METHOD_LABELS: &[&str] = &[
    "LCA standaard",
    "Bepalingsmethode",
    "Bepalingsmethode NMD",
    "Berekeningsmethodiek",
];
const PCR_LABELS: &[&str] = &["PCR", "PCR versie", "PCR version"];
const DATABASE_LABELS: &[&str] = &["Database", "Standaard database", "Background database"];
const VERIFIER_LABELS: &[&str] = &["Naam toetser", "Naam verificateur", "Verifier", "Verificateur"];
const PUBLICATION_DATE_LABELS: &[&str] = &[
    "Datum publicatie",
    "Datum van publicatie",
    "Datum getoetst",
    "Datum geverifieerd",
    "Verification date",
];
const EXPIRATION_DATE_LABELS: &[&str] = &["Einde geldigheid", "Geldig tot", "Validity end date"];

const VALIDITY_YEARS: i32 = 5;

/// Extract a structured EPD record from the raw text of one document.
///
/// Pure and total: any input, including the empty string, yields a result.
/// Fields whose labels are not found stay absent, an unclassifiable
/// document gets `SetType::Unknown`, and when no set marker is present the
/// impact search runs for both sets so nothing is lost before review.
pub fn parse_epd(raw: &str) -> ParsedEpd {
    let text = normalize_line_endings(raw);
    let lower = text.to_lowercase();
    let format = NumberFormat::default();

    let publication_date = date_from_text(&text, PUBLICATION_DATE_LABELS);
    let expiration_date = date_from_text(&text, EXPIRATION_DATE_LABELS)
        .or_else(|| publication_date.and_then(|d| add_years(d, VALIDITY_YEARS)));

    let standard_set = detect_standard_set(&lower);
    let search_sets: &[SetType] = match standard_set {
        SetType::Unknown => &[SetType::SbkSet1, SetType::SbkSet2],
        SetType::SbkSet1 => &[SetType::SbkSet1],
        SetType::SbkSet2 => &[SetType::SbkSet2],
    };

    let mut impacts: Vec<ParsedImpact> = Vec::new();
    for &set_type in search_sets {
        impacts.extend(extract_impacts_for_set(&text, set_type, Indicator::Mki, &format));
        impacts.extend(extract_impacts_for_set(&text, set_type, Indicator::Co2, &format));
    }

    ParsedEpd {
        product_name: label_match(&text, PRODUCT_NAME_LABELS),
        functional_unit: label_match(&text, FUNCTIONAL_UNIT_LABELS),
        producer_name: label_match(&text, PRODUCER_LABELS),
        lca_method: label_match(&text, LCA_METHOD_LABELS),
        pcr_version: label_match(&text, PCR_LABELS),
        database_name: label_match(&text, DATABASE_LABELS),
        publication_date,
        expiration_date,
        verifier_name: label_match(&text, VERIFIER_LABELS),
        standard_set,
        impacts,
    }
}
