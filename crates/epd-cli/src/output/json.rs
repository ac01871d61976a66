use epd_core::error::EpdError;
use epd_core::model::ParsedEpd;

pub fn print(epd: &ParsedEpd) -> Result<(), EpdError> {
    let json = serde_json::to_string_pretty(epd)?;
    println!("{json}");
    Ok(())
}
