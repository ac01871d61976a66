use crate::model::{Indicator, ParsedImpact, SetType, Stage};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Numeric locale used when reading values out of the document text.
///
/// EPDs for the Dutch market use European notation: `.` groups thousands,
/// `,` marks the decimal point. The default is fixed to that convention;
/// the separators are parameters so the contract stays explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

impl NumberFormat {
    /// Parse a captured numeral: grouping separators are stripped, the
    /// decimal separator becomes `.`. Anything `Decimal` rejects after
    /// that is treated as "no match".
    pub fn parse(&self, raw: &str) -> Option<Decimal> {
        let cleaned: String = raw
            .chars()
            .filter(|c| *c != self.grouping_separator)
            .map(|c| {
                if c == self.decimal_separator {
                    '.'
                } else {
                    c
                }
            })
            .collect();
        Decimal::from_str(&cleaned).ok()
    }

    // Signed decimal token: digits with any number of separator-joined
    // groups, so "1.234,56" is captured whole.
    fn number_pattern(&self) -> String {
        format!(
            r"(-?[0-9]+(?:[{}{}][0-9]+)*)",
            regex::escape(&self.decimal_separator.to_string()),
            regex::escape(&self.grouping_separator.to_string()),
        )
    }
}

fn stage_labels(stage: Stage) -> &'static [&'static str] {
    match stage {
        Stage::A1 => &["A1"],
        Stage::A2 => &["A2"],
        Stage::A3 => &["A3"],
        // Hyphen, en-dash (spaced and unspaced), underscore and space joins.
        Stage::A1A3 => &["A1-A3", "A1 \u{2013} A3", "A1\u{2013}A3", "A1_A3", "A1 A3"],
        Stage::D => &["D"],
    }
}

fn indicator_labels(indicator: Indicator, set_type: SetType) -> &'static [&'static str] {
    match indicator {
        Indicator::Mki => &["mki"],
        // Set 2 declarations report the "totaal" GWP variants.
        Indicator::Co2 => match set_type {
            SetType::SbkSet2 => &["co2 tot", "co2-tot", "gwp tot", "gwp-total", "gwp total"],
            _ => &["co2", "gwp"],
        },
    }
}

/// Find a numeric value textually near both an indicator label and a stage
/// label on one line.
///
/// Per synonym pair, indicator-then-stage order is tried first (up to 12
/// filler characters between the labels, up to 20 before the number), then
/// stage-then-indicator with the same gaps. The first pair that yields a
/// parseable number wins.
fn find_impact_value(
    text: &str,
    indicator_labels: &[&str],
    stage: Stage,
    format: &NumberFormat,
) -> Option<Decimal> {
    let number = format.number_pattern();
    for indicator_label in indicator_labels {
        let ind = regex::escape(indicator_label);
        for stage_label in stage_labels(stage) {
            let stg = regex::escape(stage_label);
            let forward = format!(r"(?i){ind}[^\n\r]{{0,12}}{stg}[^\n\r]{{0,20}}?{number}");
            if let Some(value) = capture_number(text, &forward, format) {
                return Some(value);
            }
            let reversed = format!(r"(?i){stg}[^\n\r]{{0,12}}{ind}[^\n\r]{{0,20}}?{number}");
            if let Some(value) = capture_number(text, &reversed, format) {
                return Some(value);
            }
        }
    }
    None
}

fn capture_number(text: &str, pattern: &str, format: &NumberFormat) -> Option<Decimal> {
    let re = Regex::new(pattern).ok()?;
    let raw = re.captures(text)?.get(1)?.as_str();
    format.parse(raw)
}

/// Extract all stage values for one `(indicator, set)` combination, then
/// derive the combined A1-A3 entry when it was not stated directly.
///
/// At most one A1_A3 entry is appended per call, and only when all three
/// of A1, A2 and A3 were found.
pub fn extract_impacts_for_set(
    text: &str,
    set_type: SetType,
    indicator: Indicator,
    format: &NumberFormat,
) -> Vec<ParsedImpact> {
    let labels = indicator_labels(indicator, set_type);

    let mut impacts = Vec::new();
    for stage in [Stage::A1, Stage::A2, Stage::A3, Stage::A1A3, Stage::D] {
        if let Some(value) = find_impact_value(text, labels, stage, format) {
            impacts.push(ParsedImpact {
                indicator,
                set_type,
                stage,
                value,
            });
        }
    }

    let has_combined = impacts.iter().any(|i| i.stage == Stage::A1A3);
    if !has_combined {
        let stage_value = |stage| {
            impacts
                .iter()
                .find(|i| i.stage == stage)
                .map(|i: &ParsedImpact| i.value)
        };
        if let (Some(a1), Some(a2), Some(a3)) = (
            stage_value(Stage::A1),
            stage_value(Stage::A2),
            stage_value(Stage::A3),
        ) {
            impacts.push(ParsedImpact {
                indicator,
                set_type,
                stage: Stage::A1A3,
                value: a1 + a2 + a3,
            });
        }
    }

    impacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fmt() -> NumberFormat {
        NumberFormat::default()
    }

    #[test]
    fn test_number_format_decimal_comma() {
        assert_eq!(fmt().parse("1,5"), Some(dec!(1.5)));
    }

    #[test]
    fn test_number_format_grouped_thousands() {
        assert_eq!(fmt().parse("1.234,56"), Some(dec!(1234.56)));
    }

    #[test]
    fn test_number_format_plain_integer() {
        assert_eq!(fmt().parse("68"), Some(dec!(68)));
    }

    #[test]
    fn test_number_format_negative() {
        assert_eq!(fmt().parse("-0,10"), Some(dec!(-0.10)));
    }

    #[test]
    fn test_number_format_garbage_is_none() {
        assert_eq!(fmt().parse("1.2.3,4,5"), None);
    }

    #[test]
    fn test_indicator_then_stage() {
        let value = find_impact_value("MKI A1 1,20", &["mki"], Stage::A1, &fmt());
        assert_eq!(value, Some(dec!(1.20)));
    }

    #[test]
    fn test_stage_then_indicator() {
        let value = find_impact_value("A1 MKI 1,20", &["mki"], Stage::A1, &fmt());
        assert_eq!(value, Some(dec!(1.20)));
    }

    #[test]
    fn test_locale_number_within_gap() {
        let value = find_impact_value("MKI A1 waarde 1.234,56", &["mki"], Stage::A1, &fmt());
        assert_eq!(value, Some(dec!(1234.56)));
    }

    #[test]
    fn test_gap_between_labels_too_large() {
        let text = "MKI veel te veel tussenliggende tekst A1 1,20";
        assert_eq!(find_impact_value(text, &["mki"], Stage::A1, &fmt()), None);
    }

    #[test]
    fn test_labels_must_share_a_line() {
        let text = "MKI\nA1 1,20";
        assert_eq!(find_impact_value(text, &["mki"], Stage::A1, &fmt()), None);
    }

    #[test]
    fn test_combined_stage_en_dash() {
        let value = find_impact_value("MKI A1 \u{2013} A3 4,20", &["mki"], Stage::A1A3, &fmt());
        assert_eq!(value, Some(dec!(4.20)));
    }

    #[test]
    fn test_negative_module_d() {
        let value = find_impact_value("MKI D -0,10", &["mki"], Stage::D, &fmt());
        assert_eq!(value, Some(dec!(-0.10)));
    }

    #[test]
    fn test_aggregates_a1_a3_from_stage_values() {
        let text = "MKI A1 1,0\nMKI A2 2,0\nMKI A3 3,0";
        let impacts = extract_impacts_for_set(text, SetType::SbkSet1, Indicator::Mki, &fmt());
        let combined = impacts
            .iter()
            .find(|i| i.stage == Stage::A1A3)
            .expect("aggregated entry");
        assert_eq!(combined.value, dec!(6.0));
        assert_eq!(combined.set_type, SetType::SbkSet1);
    }

    #[test]
    fn test_no_aggregation_when_stage_missing() {
        let text = "MKI A1 1,0\nMKI A3 3,0";
        let impacts = extract_impacts_for_set(text, SetType::SbkSet1, Indicator::Mki, &fmt());
        assert!(impacts.iter().all(|i| i.stage != Stage::A1A3));
    }

    #[test]
    fn test_direct_combined_value_suppresses_aggregation() {
        let text = "MKI A1 1,0\nMKI A2 2,0\nMKI A3 3,0\nMKI A1-A3 6,5";
        let impacts = extract_impacts_for_set(text, SetType::SbkSet1, Indicator::Mki, &fmt());
        let combined: Vec<_> = impacts.iter().filter(|i| i.stage == Stage::A1A3).collect();
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].value, dec!(6.5));
    }

    #[test]
    fn test_co2_set_2_requires_totaal_labels() {
        let text = "CO2 tot A1 12,5";
        let set2 = extract_impacts_for_set(text, SetType::SbkSet2, Indicator::Co2, &fmt());
        assert_eq!(set2.len(), 1);
        assert_eq!(set2[0].value, dec!(12.5));
    }

    #[test]
    fn test_co2_set_1_plain_labels() {
        let text = "CO2 A1 12,5";
        let set1 = extract_impacts_for_set(text, SetType::SbkSet1, Indicator::Co2, &fmt());
        assert_eq!(set1.len(), 1);
        assert_eq!(set1[0].stage, Stage::A1);
    }

    #[test]
    fn test_gwp_synonym() {
        let value = find_impact_value("GWP A2 0,80", &["co2", "gwp"], Stage::A2, &fmt());
        assert_eq!(value, Some(dec!(0.80)));
    }

    #[test]
    fn test_absent_indicator() {
        let impacts = extract_impacts_for_set("geen cijfers", SetType::SbkSet1, Indicator::Mki, &fmt());
        assert!(impacts.is_empty());
    }
}
