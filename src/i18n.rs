//! UI strings in the two supported languages.

use crate::model::{ElementData, Language, Phase};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Title,
    Tagline,
    Intro,
    SearchPlaceholder,
    NoResults,
    ZoomIn,
    ZoomOut,
    ResetView,
    DragHint,
    TouchHint,
    Lanthanides,
    Actinides,
    ElectronConfig,
    Shells,
    OxidationStates,
    AtomicProperties,
    AtomicRadius,
    Electronegativity,
    IonizationEnergy,
    ElectronAffinity,
    PhysicalProperties,
    MeltingPoint,
    BoilingPoint,
    DensityChart,
    PhaseChart,
    Melting,
    Boiling,
    Water,
    Iron,
    Gold,
    History,
    DiscoveredBy,
    Year,
    UnknownDiscoverer,
    Ancient,
    Application,
    Hazard,
    NoSummary,
    BohrTitle,
    BohrSubtitle,
    CloudTitle,
    CloudSubtitle,
    LoadFailed,
    Solid,
    Liquid,
    Gas,
    UnknownPhase,
}

pub fn tr(lang: Language, key: Key) -> &'static str {
    use Key::*;
    let (en, zh) = match key {
        Title => ("Elemental Vision", "元素视界"),
        Tagline => ("See the Unseen", "看见不可见"),
        Intro => (
            "Explore the building blocks of the universe with immersive 3D visualization.",
            "通过沉浸式 3D 可视化，探索构成宇宙的基石。",
        ),
        SearchPlaceholder => ("Search...", "搜索元素..."),
        NoResults => ("No results found", "未找到结果"),
        ZoomIn => ("Zoom In", "放大"),
        ZoomOut => ("Zoom Out", "缩小"),
        ResetView => ("Reset View", "重置视图"),
        DragHint => ("Drag to Pan", "拖动平移"),
        TouchHint => ("Pinch to Zoom • Drag to Move", "双指缩放 • 拖动移动"),
        Lanthanides => ("Lanthanides", "镧系"),
        Actinides => ("Actinides", "锕系"),
        ElectronConfig => ("Electron Config", "电子排布"),
        Shells => ("Shells", "电子层"),
        OxidationStates => ("Oxidation States", "氧化态"),
        AtomicProperties => ("Atomic Properties", "原子性质"),
        AtomicRadius => ("Atomic Radius", "原子半径"),
        Electronegativity => ("Electronegativity", "电负性"),
        IonizationEnergy => ("Ionization Energy", "电离能"),
        ElectronAffinity => ("Electron Affinity", "电子亲和能"),
        PhysicalProperties => ("Physical Properties", "物理性质"),
        MeltingPoint => ("Melting Point", "熔点"),
        BoilingPoint => ("Boiling Point", "沸点"),
        DensityChart => ("Density Comparison (g/cm³)", "密度对比 (g/cm³)"),
        PhaseChart => ("Phase Transition (Kelvin)", "相变温度 (开尔文)"),
        Melting => ("Melting", "熔点"),
        Boiling => ("Boiling", "沸点"),
        Water => ("Water", "水"),
        Iron => ("Iron", "铁"),
        Gold => ("Gold", "金"),
        History => ("History & Story", "历史背景"),
        DiscoveredBy => ("Discovered By", "发现者"),
        Year => ("Year", "年份"),
        UnknownDiscoverer => ("Unknown", "未知"),
        Ancient => ("Ancient", "古代"),
        Application => ("Application", "应用"),
        Hazard => ("Hazard", "危险性"),
        NoSummary => ("No description available yet.", "暂无介绍。"),
        BohrTitle => ("Bohr Model (2D)", "玻尔模型 (2D)"),
        BohrSubtitle => ("Planar Shell Representation", "平面电子层表示"),
        CloudTitle => ("Quantum Cloud", "量子云"),
        CloudSubtitle => ("Probability Density Distribution", "概率密度分布"),
        LoadFailed => ("Element data failed to load", "元素数据加载失败"),
        Solid => ("Solid", "固态"),
        Liquid => ("Liquid", "液态"),
        Gas => ("Gas", "气态"),
        UnknownPhase => ("Unknown", "未知"),
    };
    match lang {
        Language::En => en,
        Language::Zh => zh,
    }
}

pub fn phase_label(lang: Language, phase: Phase) -> &'static str {
    let key = match phase {
        Phase::Solid => Key::Solid,
        Phase::Liquid => Key::Liquid,
        Phase::Gas => Key::Gas,
        Phase::Unknown => Key::UnknownPhase,
    };
    tr(lang, key)
}

/// Per-element text in the chosen language.
pub trait Localized {
    fn name(&self, lang: Language) -> &str;
    fn summary(&self, lang: Language) -> &str;
    fn usage(&self, lang: Language) -> &str;
    fn hazard(&self, lang: Language) -> Option<&str>;
}

impl Localized for ElementData {
    fn name(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.name_en,
            Language::Zh => &self.name_cn,
        }
    }

    fn summary(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.summary_en,
            Language::Zh => &self.summary_cn,
        }
    }

    fn usage(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.usage_en,
            Language::Zh => &self.usage_cn,
        }
    }

    /// Falls back to the other language's note when only one is present.
    fn hazard(&self, lang: Language) -> Option<&str> {
        let (en, cn) = (self.hazard_en.as_deref(), self.hazard_cn.as_deref());
        match lang {
            Language::En => en.or(cn),
            Language::Zh => cn.or(en),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element;

    #[test]
    fn labels_switch_with_language() {
        assert_eq!(tr(Language::En, Key::Title), "Elemental Vision");
        assert_eq!(tr(Language::Zh, Key::Title), "元素视界");
    }

    #[test]
    fn element_text_follows_language() {
        let fe = element(26).unwrap();
        assert_eq!(fe.name(Language::En), "Iron");
        assert_eq!(fe.name(Language::Zh), "铁");
    }

    #[test]
    fn hazard_only_when_present() {
        let he = element(2).unwrap();
        assert!(he.hazard(Language::En).is_none());
        assert!(he.hazard(Language::Zh).is_none());
        let hg = element(80).unwrap();
        assert!(hg.hazard(Language::Zh).is_some());
    }

    #[test]
    fn hazard_in_one_language_shows_in_both() {
        let mut he = element(2).unwrap().clone();
        he.hazard_cn = Some("窒息风险。".to_string());
        assert_eq!(he.hazard(Language::Zh), Some("窒息风险。"));
        assert_eq!(he.hazard(Language::En), Some("窒息风险。"));
        he.hazard_en = Some("Asphyxiant.".to_string());
        assert_eq!(he.hazard(Language::En), Some("Asphyxiant."));
    }

    #[test]
    fn phase_badge_follows_language() {
        assert_eq!(phase_label(Language::En, Phase::Gas), "Gas");
        assert_eq!(phase_label(Language::Zh, Phase::Solid), "固态");
        let hg = element(80).unwrap();
        assert_eq!(phase_label(Language::Zh, hg.phase), "液态");
    }
}
