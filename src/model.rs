//! Core data models for Elemental Vision.
//! The element table is embedded at compile time and validated on first use.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::rc::Rc;
use std::sync::OnceLock;
use thiserror::Error;
use yew::Reducible;

use crate::state::detail::OriginRect;

const ELEMENTS_JSON: &str = include_str!("data/elements.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementCategory {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    ReactiveNonmetal,
    NobleGas,
    Lanthanide,
    Actinide,
    Unknown,
}

impl ElementCategory {
    #[cfg(test)]
    pub const ALL: [ElementCategory; 10] = [
        ElementCategory::AlkaliMetal,
        ElementCategory::AlkalineEarthMetal,
        ElementCategory::TransitionMetal,
        ElementCategory::PostTransitionMetal,
        ElementCategory::Metalloid,
        ElementCategory::ReactiveNonmetal,
        ElementCategory::NobleGas,
        ElementCategory::Lanthanide,
        ElementCategory::Actinide,
        ElementCategory::Unknown,
    ];

    /// Wire name, e.g. `alkali-metal`.
    pub fn slug(&self) -> &'static str {
        match self {
            ElementCategory::AlkaliMetal => "alkali-metal",
            ElementCategory::AlkalineEarthMetal => "alkaline-earth-metal",
            ElementCategory::TransitionMetal => "transition-metal",
            ElementCategory::PostTransitionMetal => "post-transition-metal",
            ElementCategory::Metalloid => "metalloid",
            ElementCategory::ReactiveNonmetal => "reactive-nonmetal",
            ElementCategory::NobleGas => "noble-gas",
            ElementCategory::Lanthanide => "lanthanide",
            ElementCategory::Actinide => "actinide",
            ElementCategory::Unknown => "unknown",
        }
    }

    /// Badge text: the slug with dashes turned into spaces.
    pub fn display_name(&self) -> String {
        self.slug().replace('-', " ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    pub number: u32,
    pub symbol: String,
    pub name_en: String,
    pub name_cn: String,
    #[serde(default)]
    pub pinyin: Option<String>,
    pub atomic_mass: f64,
    pub category: ElementCategory,
    pub phase: Phase,
    pub electron_configuration: String,
    pub shells: Vec<u32>,
    pub oxidation_states: String,
    /// kJ/mol
    #[serde(default)]
    pub ionization_energy: Option<f64>,
    /// kJ/mol
    #[serde(default)]
    pub electron_affinity: Option<f64>,
    /// Pauling scale
    #[serde(default)]
    pub electronegativity: Option<f64>,
    /// pm
    #[serde(default)]
    pub atomic_radius: Option<f64>,
    /// Kelvin
    #[serde(default)]
    pub melting_point: Option<f64>,
    /// Kelvin
    #[serde(default)]
    pub boiling_point: Option<f64>,
    /// g/cm3
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub discovery_year: Option<String>,
    #[serde(default)]
    pub discoverer: Option<String>,
    #[serde(default)]
    pub summary_en: String,
    #[serde(default)]
    pub summary_cn: String,
    #[serde(default)]
    pub usage_en: String,
    #[serde(default)]
    pub usage_cn: String,
    #[serde(default)]
    pub hazard_en: Option<String>,
    #[serde(default)]
    pub hazard_cn: Option<String>,
    /// Standard CPK colour, `#RRGGBB`.
    pub cpk_hex: String,
}

impl ElementData {
    pub fn electron_count(&self) -> u32 {
        self.shells.iter().sum()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    En,
    #[default]
    Zh,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Text of the header language button: the language in use.
    pub fn badge(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Zh => "ZH",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualMode {
    #[default]
    Bohr,
    Cloud,
}

/// Application-level UI state shared by the header, table and detail panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub lang: Language,
    pub query: String,
    /// Atomic number of the element whose detail panel is open.
    pub selected: Option<u32>,
    /// Tile rectangle the panel grows out of; `None` for search picks.
    pub origin: Option<OriginRect>,
    /// The panel is playing its exit animation.
    pub closing: bool,
}

pub enum AppAction {
    ToggleLanguage,
    SetQuery(String),
    Select { number: u32, origin: Option<OriginRect> },
    PickSearchResult(u32),
    BeginClose,
    FinishClose,
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use AppAction::*;
        let mut new = (*self).clone();
        match action {
            ToggleLanguage => new.lang = new.lang.toggle(),
            SetQuery(q) => new.query = q,
            Select { number, origin } => {
                new.selected = Some(number);
                new.origin = origin;
                new.closing = false;
            }
            PickSearchResult(number) => {
                new.selected = Some(number);
                new.origin = None;
                new.closing = false;
                new.query.clear();
            }
            BeginClose => {
                if new.selected.is_none() {
                    return self;
                }
                new.closing = true;
            }
            FinishClose => {
                // a new selection during the exit animation wins
                if !new.closing {
                    return self;
                }
                new.selected = None;
                new.origin = None;
                new.closing = false;
            }
        }
        Rc::new(new)
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("element table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("element table is empty")]
    Empty,
    #[error("expected atomic number {expected} at position {index}, found {found}")]
    OutOfOrder {
        index: usize,
        expected: u32,
        found: u32,
    },
    #[error("{symbol} (Z={number}) lists {electrons} electrons in its shells")]
    ShellMismatch {
        number: u32,
        symbol: String,
        electrons: u32,
    },
    #[error("symbol {0} appears more than once")]
    DuplicateSymbol(String),
}

/// Parses and validates an element table.
pub fn parse_elements(raw: &str) -> Result<Vec<ElementData>, DatasetError> {
    let elements: Vec<ElementData> = serde_json::from_str(raw)?;
    if elements.is_empty() {
        return Err(DatasetError::Empty);
    }
    let mut symbols = HashSet::new();
    for (index, e) in elements.iter().enumerate() {
        let expected = index as u32 + 1;
        if e.number != expected {
            return Err(DatasetError::OutOfOrder {
                index,
                expected,
                found: e.number,
            });
        }
        let electrons = e.electron_count();
        if electrons != e.number {
            return Err(DatasetError::ShellMismatch {
                number: e.number,
                symbol: e.symbol.clone(),
                electrons,
            });
        }
        if !symbols.insert(e.symbol.as_str()) {
            return Err(DatasetError::DuplicateSymbol(e.symbol.clone()));
        }
    }
    Ok(elements)
}

static ELEMENTS: OnceLock<Result<Vec<ElementData>, String>> = OnceLock::new();

/// The embedded element table, parsed once.
pub fn load_elements() -> Result<&'static [ElementData], &'static str> {
    ELEMENTS
        .get_or_init(|| {
            parse_elements(ELEMENTS_JSON).map_err(|e| {
                log::error!("failed to load element table: {e}");
                e.to_string()
            })
        })
        .as_deref()
        .map_err(String::as_str)
}

/// The element table, or an empty slice if it failed to load.
pub fn elements() -> &'static [ElementData] {
    load_elements().unwrap_or(&[])
}

pub fn element(number: u32) -> Option<&'static ElementData> {
    let idx = number.checked_sub(1)? as usize;
    elements().get(idx)
}
