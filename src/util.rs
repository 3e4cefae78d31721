// Formatting helpers for the detail panel.

const ABSOLUTE_ZERO_C: f64 = -273.15;

/// `"<k> K (<c>°C)"`, or `"N/A"` when the value is unknown.
pub fn format_kelvin(kelvin: Option<f64>) -> String {
    match kelvin {
        Some(k) => format!("{} K ({:.1}°C)", k, k + ABSOLUTE_ZERO_C),
        None => "N/A".to_string(),
    }
}

/// A value with an optional unit suffix. Missing and zero values read as
/// `"N/A"`, matching how the dataset leaves unmeasured quantities.
pub fn format_measure(value: Option<f64>, unit: Option<&str>) -> String {
    match (value, unit) {
        (Some(v), Some(u)) if v != 0.0 => format!("{v} {u}"),
        (Some(v), None) if v != 0.0 => v.to_string(),
        _ => "N/A".to_string(),
    }
}

pub fn format_mass(mass: f64) -> String {
    format!("{mass:.3} u")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kelvin_with_celsius() {
        assert_eq!(format_kelvin(Some(273.15)), "273.15 K (0.0°C)");
        assert_eq!(format_kelvin(Some(373.15)), "373.15 K (100.0°C)");
        assert_eq!(format_kelvin(Some(234.32)), "234.32 K (-38.8°C)");
        assert_eq!(format_kelvin(None), "N/A");
    }

    #[test]
    fn measure_units_and_fallbacks() {
        assert_eq!(format_measure(Some(126.0), Some("pm")), "126 pm");
        assert_eq!(format_measure(Some(1.83), None), "1.83");
        assert_eq!(format_measure(Some(0.0), Some("kJ/mol")), "N/A");
        assert_eq!(format_measure(None, None), "N/A");
    }

    #[test]
    fn mass_has_three_decimals() {
        assert_eq!(format_mass(1.008), "1.008 u");
        assert_eq!(format_mass(98.0), "98.000 u");
    }
}
