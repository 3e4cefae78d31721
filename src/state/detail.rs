// Display values and chart rows for the element detail panel.

use crate::i18n::{Key, tr};
use crate::model::{ElementData, Language};
use crate::util::{format_kelvin, format_measure};

/// Reference densities (g/cm3) shown next to the selected element.
pub const WATER_DENSITY: f64 = 1.0;
pub const IRON_DENSITY: f64 = 7.87;
pub const GOLD_DENSITY: f64 = 19.3;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub value: f64,
    /// The selected element's own bar, drawn in its category colour.
    pub highlight: bool,
}

pub fn density_rows(e: &ElementData, lang: Language) -> Vec<ChartRow> {
    let reference = |key, value| ChartRow {
        label: tr(lang, key).to_string(),
        value,
        highlight: false,
    };
    vec![
        reference(Key::Water, WATER_DENSITY),
        ChartRow {
            label: e.symbol.clone(),
            value: e.density.unwrap_or(0.0),
            highlight: true,
        },
        reference(Key::Iron, IRON_DENSITY),
        reference(Key::Gold, GOLD_DENSITY),
    ]
}

pub fn phase_rows(e: &ElementData, lang: Language) -> Vec<ChartRow> {
    vec![
        ChartRow {
            label: tr(lang, Key::Melting).to_string(),
            value: e.melting_point.unwrap_or(0.0),
            highlight: true,
        },
        ChartRow {
            label: tr(lang, Key::Boiling).to_string(),
            value: e.boiling_point.unwrap_or(0.0),
            highlight: true,
        },
    ]
}

/// Bar lengths as percentages of the largest value; all zero when nothing is
/// positive.
pub fn bar_percentages(rows: &[ChartRow]) -> Vec<f64> {
    let max = rows.iter().map(|r| r.value).fold(0.0_f64, f64::max);
    rows.iter()
        .map(|r| {
            if max > 0.0 {
                (r.value.max(0.0) / max) * 100.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Labelled property values of the "atomic properties" card.
pub fn atomic_properties(e: &ElementData, lang: Language) -> [(&'static str, String); 4] {
    [
        (
            tr(lang, Key::AtomicRadius),
            format_measure(e.atomic_radius, Some("pm")),
        ),
        (
            tr(lang, Key::Electronegativity),
            format_measure(e.electronegativity, None),
        ),
        (
            tr(lang, Key::IonizationEnergy),
            format_measure(e.ionization_energy, Some("kJ/mol")),
        ),
        (
            tr(lang, Key::ElectronAffinity),
            format_measure(e.electron_affinity, Some("kJ/mol")),
        ),
    ]
}

pub fn melting_boiling(e: &ElementData) -> (String, String) {
    (format_kelvin(e.melting_point), format_kelvin(e.boiling_point))
}

pub fn shells_label(e: &ElementData) -> String {
    e.shells
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn discoverer_label(e: &ElementData, lang: Language) -> String {
    match e.discoverer.as_deref() {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => tr(lang, Key::UnknownDiscoverer).to_string(),
    }
}

pub fn discovery_year_label(e: &ElementData, lang: Language) -> String {
    match e.discovery_year.as_deref() {
        Some(y) if !y.is_empty() => y.to_string(),
        _ => tr(lang, Key::Ancient).to_string(),
    }
}

/// Screen-space rectangle of the tile a detail panel was opened from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OriginRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// CSS `transform-origin` that makes the panel grow out of the clicked tile.
/// The panel is centered in the window, so the origin is the tile center's
/// offset from the window center.
pub fn transform_origin(origin: &OriginRect, window_w: f64, window_h: f64) -> String {
    let dx = origin.left + origin.width / 2.0 - window_w / 2.0;
    let dy = origin.top + origin.height / 2.0 - window_h / 2.0;
    format!("calc(50% + {dx}px) calc(50% + {dy}px)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element;

    #[test]
    fn density_rows_put_element_between_references() {
        let fe = element(26).unwrap();
        let rows = density_rows(fe, Language::En);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Water", "Fe", "Iron", "Gold"]);
        assert!(rows[1].highlight);
        assert!((rows[1].value - 7.874).abs() < 1e-9);
    }

    #[test]
    fn missing_density_charts_as_zero() {
        let og = element(118).unwrap();
        let rows = density_rows(og, Language::Zh);
        assert_eq!(rows[1].value, 0.0);
        assert_eq!(rows[0].label, "水");
    }

    #[test]
    fn percentages_scale_to_largest() {
        let rows = density_rows(element(26).unwrap(), Language::En);
        let pct = bar_percentages(&rows);
        assert!((pct[3] - 100.0).abs() < 1e-9);
        assert!((pct[0] - 100.0 / 19.3).abs() < 1e-9);
    }

    #[test]
    fn percentages_of_all_zero_rows() {
        let rows = phase_rows(element(118).unwrap(), Language::En);
        assert_eq!(bar_percentages(&rows), vec![0.0, 0.0]);
    }

    #[test]
    fn atomic_property_fallbacks() {
        let he = element(2).unwrap();
        let props = atomic_properties(he, Language::En);
        assert_eq!(props[0].1, "31 pm");
        // helium has no Pauling electronegativity and zero affinity
        assert_eq!(props[1].1, "N/A");
        assert_eq!(props[3].1, "N/A");
        assert_eq!(props[2].1, "2372 kJ/mol");
    }

    #[test]
    fn history_fallbacks() {
        let fe = element(26).unwrap();
        assert_eq!(discovery_year_label(fe, Language::En), "Ancient");
        let og = element(118).unwrap();
        assert_eq!(discovery_year_label(og, Language::En), "2006");
        let fm = element(100).unwrap();
        assert_eq!(discoverer_label(fm, Language::En), "Unknown");
    }

    #[test]
    fn shells_are_comma_joined() {
        assert_eq!(shells_label(element(11).unwrap()), "2, 8, 1");
    }

    #[test]
    fn origin_offset_from_window_center() {
        let rect = OriginRect {
            left: 100.0,
            top: 50.0,
            width: 40.0,
            height: 40.0,
        };
        assert_eq!(
            transform_origin(&rect, 800.0, 600.0),
            "calc(50% + -280px) calc(50% + -230px)"
        );
    }
}
