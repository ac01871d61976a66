use epd_core::model::ParsedEpd;

pub fn format_parsed(epd: &ParsedEpd) -> String {
    let mut out = String::new();

    let field = |name: &str, value: &Option<String>| {
        format!(
            "  {:<18} {}\n",
            name,
            value.as_deref().unwrap_or("-")
        )
    };

    out.push_str("=== Declaration ===\n\n");
    out.push_str(&field("Product", &epd.product_name));
    out.push_str(&field("Functional unit", &epd.functional_unit));
    out.push_str(&field("Producer", &epd.producer_name));
    out.push_str(&field("LCA method", &epd.lca_method));
    out.push_str(&field("PCR version", &epd.pcr_version));
    out.push_str(&field("Database", &epd.database_name));
    out.push_str(&field("Verifier", &epd.verifier_name));
    out.push_str(&field(
        "Published",
        &epd.publication_date.map(|d| d.to_string()),
    ));
    out.push_str(&field(
        "Valid until",
        &epd.expiration_date.map(|d| d.to_string()),
    ));
    out.push_str(&format!("  {:<18} {}\n", "Standard set", epd.standard_set));

    if epd.impacts.is_empty() {
        out.push_str("\n  No impact values found\n");
    } else {
        out.push_str("\n=== Impact values ===\n\n");
        for impact in &epd.impacts {
            out.push_str(&format!(
                "  {:<4} {:<10} {:<6} {}\n",
                impact.indicator, impact.set_type, impact.stage, impact.value
            ));
        }
    }

    out
}
