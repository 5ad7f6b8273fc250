//! Resistor value parsing.

use wb_core::constants::DEFAULT_RESISTANCE;
use wb_core::numeric::Real;

/// Parse a resistor value string ("220", "1000", "470R trailing text") into
/// ohms. Takes the leading decimal digits; a missing, unparseable or zero
/// value falls back to the 220 Ω default.
pub fn parse_resistance(value: Option<&str>) -> Real {
    let Some(value) = value else {
        return DEFAULT_RESISTANCE;
    };
    let digits: &str = {
        let end = value
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(value.len(), |(i, _)| i);
        &value[..end]
    };
    match digits.parse::<Real>() {
        Ok(ohms) if ohms > 0.0 => ohms,
        _ => DEFAULT_RESISTANCE,
    }
}
