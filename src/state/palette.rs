use crate::model::ElementCategory;

pub fn category_color(category: ElementCategory) -> &'static str {
    match category {
        ElementCategory::AlkaliMetal => "#ef4444",
        ElementCategory::AlkalineEarthMetal => "#f97316",
        ElementCategory::TransitionMetal => "#eab308",
        ElementCategory::PostTransitionMetal => "#10b981",
        ElementCategory::Metalloid => "#06b6d4",
        ElementCategory::ReactiveNonmetal => "#3b82f6",
        ElementCategory::NobleGas => "#8b5cf6",
        ElementCategory::Lanthanide => "#d946ef",
        ElementCategory::Actinide => "#f43f5e",
        ElementCategory::Unknown => "#64748b",
    }
}

/// Two-layer neon box-shadow in the category colour.
pub fn category_glow(category: ElementCategory) -> String {
    let c = category_color(category);
    format!("0 0 15px {c}80, 0 0 30px {c}40")
}
