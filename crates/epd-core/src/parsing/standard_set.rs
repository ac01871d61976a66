use crate::model::SetType;
use regex::Regex;
use std::sync::LazyLock;

static SET_2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)sbk\s*set\s*2|en\s*15804\s*\+?a2").unwrap());

static SET_1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)sbk\s*set\s*1|en\s*15804\s*\+?a1").unwrap());

/// Classify which SBK determination set the document was prepared under.
///
/// One global decision per document. Set-2 evidence takes priority when
/// markers for both sets appear; no marker at all yields `Unknown`.
pub fn detect_standard_set(text: &str) -> SetType {
    if SET_2_RE.is_match(text) {
        SetType::SbkSet2
    } else if SET_1_RE.is_match(text) {
        SetType::SbkSet1
    } else {
        SetType::Unknown
    }
}
