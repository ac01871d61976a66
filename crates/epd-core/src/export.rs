//! Catalog export: flatten confirmed records into fixed-order rows for
//! CSV/spreadsheet download.

use crate::error::EpdError;
use crate::model::{EpdRecord, Indicator, SetType, Stage};
use rust_decimal::Decimal;
use std::sync::LazyLock;

const SCALAR_COLUMNS: &[&str] = &[
    "id",
    "product_name",
    "producer_name",
    "functional_unit",
    "lca_method",
    "pcr_version",
    "database_name",
    "publication_date",
    "expiration_date",
    "verifier_name",
    "standard_set",
];

const CUSTOM_ATTRIBUTES_COLUMN: &str = "custom_attributes_json";

const CSV_SEPARATOR: char = ';';

struct ImpactColumn {
    indicator: Indicator,
    set_type: SetType,
    stage: Stage,
    name: String,
}

// One column per indicator x set x stage, e.g. "MKI_SET1_A1". The order is
// part of the export contract: both indicators per stage, stages grouped
// per set, set 1 before set 2.
static IMPACT_COLUMNS: LazyLock<Vec<ImpactColumn>> = LazyLock::new(|| {
    let mut columns = Vec::new();
    for set_type in [SetType::SbkSet1, SetType::SbkSet2] {
        for stage in [Stage::A1, Stage::A2, Stage::A3, Stage::A1A3, Stage::D] {
            for indicator in [Indicator::Mki, Indicator::Co2] {
                columns.push(ImpactColumn {
                    indicator,
                    set_type,
                    stage,
                    name: format!("{}_{}_{}", indicator, set_token(set_type), stage),
                });
            }
        }
    }
    columns
});

fn set_token(set_type: SetType) -> &'static str {
    match set_type {
        SetType::SbkSet1 => "SET1",
        SetType::SbkSet2 => "SET2",
        SetType::Unknown => "UNKNOWN",
    }
}

/// The full export header, in order.
pub fn column_order() -> Vec<String> {
    SCALAR_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(IMPACT_COLUMNS.iter().map(|c| c.name.clone()))
        .chain(std::iter::once(CUSTOM_ATTRIBUTES_COLUMN.to_string()))
        .collect()
}

/// The one hard rule the save step enforces: a record without a product
/// name or functional unit is not a catalog entry.
pub fn validate_record(record: &EpdRecord) -> Result<(), EpdError> {
    if record.product_name.trim().is_empty() {
        return Err(EpdError::InvalidRecord {
            id: record.id.clone(),
            reason: "product_name is required".into(),
        });
    }
    if record.functional_unit.trim().is_empty() {
        return Err(EpdError::InvalidRecord {
            id: record.id.clone(),
            reason: "functional_unit is required".into(),
        });
    }
    Ok(())
}

// First entry matching the key wins. A stored null stays an empty cell
// even if a later duplicate carries a value.
fn find_impact_value(
    record: &EpdRecord,
    indicator: Indicator,
    set_type: SetType,
    stage: Stage,
) -> Option<Decimal> {
    record
        .impacts
        .iter()
        .find(|i| i.indicator == indicator && i.set_type == set_type && i.stage == stage)
        .and_then(|i| i.value)
}

/// Flatten one record into cells aligned with [`column_order`].
pub fn build_export_row(record: &EpdRecord) -> Result<Vec<String>, EpdError> {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();

    let mut row = vec![
        record.id.clone(),
        record.product_name.clone(),
        opt(&record.producer_name),
        record.functional_unit.clone(),
        opt(&record.lca_method),
        opt(&record.pcr_version),
        opt(&record.database_name),
        record
            .publication_date
            .map(|d| d.to_string())
            .unwrap_or_default(),
        record
            .expiration_date
            .map(|d| d.to_string())
            .unwrap_or_default(),
        opt(&record.verifier_name),
        record.standard_set.to_string(),
    ];

    for column in IMPACT_COLUMNS.iter() {
        let value = find_impact_value(record, column.indicator, column.set_type, column.stage);
        row.push(value.map(|v| v.to_string()).unwrap_or_default());
    }

    row.push(serde_json::to_string(&record.custom_attributes)?);
    Ok(row)
}

/// Render the whole catalog as semicolon-separated CSV.
///
/// Cells containing the separator have it replaced by a comma rather than
/// being quoted, so the output stays trivially splittable.
pub fn to_csv(records: &[EpdRecord]) -> Result<String, EpdError> {
    let header = column_order().join(&CSV_SEPARATOR.to_string());

    let mut lines = vec![header];
    for record in records {
        let row = build_export_row(record)?;
        let cells: Vec<String> = row.iter().map(|cell| csv_cell(cell)).collect();
        lines.push(cells.join(&CSV_SEPARATOR.to_string()));
    }

    Ok(lines.join("\n"))
}

fn csv_cell(value: &str) -> String {
    value.replace(CSV_SEPARATOR, ",")
}
