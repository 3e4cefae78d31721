use yew::prelude::*;

use super::{atom_canvas::AtomCanvas, property_charts::BarChart};
use crate::i18n::{Key, Localized, phase_label, tr};
use crate::model::{Language, VisualMode, element};
use crate::state::detail::{
    OriginRect, atomic_properties, density_rows, discoverer_label, discovery_year_label,
    melting_boiling, phase_rows, shells_label, transform_origin,
};
use crate::state::palette::{category_color, category_glow};
use crate::util::format_mass;

#[derive(Properties, PartialEq, Clone)]
pub struct ElementDetailProps {
    pub number: u32,
    pub lang: Language,
    /// Tile the panel grows out of; `None` opens from the centre.
    pub origin: Option<OriginRect>,
    pub closing: bool,
    pub on_close: Callback<()>,
}

fn window_size() -> Option<(f64, f64)> {
    let w = web_sys::window()?;
    Some((w.inner_width().ok()?.as_f64()?, w.inner_height().ok()?.as_f64()?))
}

#[function_component(ElementDetail)]
pub fn element_detail(props: &ElementDetailProps) -> Html {
    let mode = use_state(VisualMode::default);
    let Some(data) = element(props.number) else {
        log::warn!("detail requested for unknown element {}", props.number);
        return html! {};
    };
    let lang = props.lang;
    let color = category_color(data.category);

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let mode_cb = |m: VisualMode| {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| mode.set(m))
    };

    let origin_css = props
        .origin
        .zip(window_size())
        .map(|(rect, (w, h))| format!("transform-origin:{};", transform_origin(&rect, w, h)))
        .unwrap_or_default();
    let state_class = if props.closing { "closing" } else { "opening" };

    let (melt, boil) = melting_boiling(data);
    let summary = match data.summary(lang) {
        "" => tr(lang, Key::NoSummary),
        s => s,
    };
    let (view_title, view_subtitle) = match *mode {
        VisualMode::Bohr => (tr(lang, Key::BohrTitle), tr(lang, Key::BohrSubtitle)),
        VisualMode::Cloud => (tr(lang, Key::CloudTitle), tr(lang, Key::CloudSubtitle)),
    };
    let pinyin = match (&data.pinyin, lang) {
        (Some(p), Language::Zh) => html! { <span class="detail-pinyin">{ p.clone() }</span> },
        _ => html! {},
    };
    let hazard = match data.hazard(lang) {
        Some(text) => html! {
            <div class="detail-card hazard">
                <h4>{ tr(lang, Key::Hazard) }</h4>
                <p>{ text }</p>
            </div>
        },
        None => html! {},
    };

    html! {
        <div class={classes!("detail-backdrop", state_class)} onclick={close_cb.clone()}>
            <div
                class={classes!("detail-panel", state_class)}
                style={format!("{origin_css} border-color:{color}; box-shadow:{};", category_glow(data.category))}
                onclick={stop}
            >
                <button class="detail-close" onclick={close_cb}>{"×"}</button>
                <div class="detail-header">
                    <div class="detail-symbol" style={format!("color:{color};")}>{ data.symbol.clone() }</div>
                    <div>
                        <h2>{ data.name(lang) } { pinyin }</h2>
                        <div class="detail-meta">
                            <span>{ format!("#{}", data.number) }</span>
                            <span>{ format_mass(data.atomic_mass) }</span>
                            <span class="category-badge" style={format!("background:{color};")}>
                                { data.category.display_name() }
                            </span>
                            <span class="phase-badge">{ phase_label(lang, data.phase) }</span>
                            <span class="cpk-dot" title="CPK" style={format!("background:{};", data.cpk_hex)}></span>
                        </div>
                    </div>
                </div>

                <div class="detail-body">
                    <div class="detail-visual">
                        <div class="visual-toggle">
                            <button class={classes!((*mode == VisualMode::Bohr).then_some("active"))} onclick={mode_cb(VisualMode::Bohr)}>
                                { tr(lang, Key::BohrTitle) }
                            </button>
                            <button class={classes!((*mode == VisualMode::Cloud).then_some("active"))} onclick={mode_cb(VisualMode::Cloud)}>
                                { tr(lang, Key::CloudTitle) }
                            </button>
                        </div>
                        <AtomCanvas number={data.number} mode={*mode} color={color} />
                        <div class="visual-caption">
                            <strong>{ view_title }</strong>
                            <span>{ view_subtitle }</span>
                        </div>
                    </div>

                    <div class="detail-cards">
                        <div class="detail-card">
                            <dl>
                                <dt>{ tr(lang, Key::ElectronConfig) }</dt>
                                <dd>{ data.electron_configuration.clone() }</dd>
                                <dt>{ tr(lang, Key::Shells) }</dt>
                                <dd>{ shells_label(data) }</dd>
                                <dt>{ tr(lang, Key::OxidationStates) }</dt>
                                <dd>{ data.oxidation_states.clone() }</dd>
                            </dl>
                        </div>
                        <div class="detail-card">
                            <h4>{ tr(lang, Key::AtomicProperties) }</h4>
                            <dl>
                                { for atomic_properties(data, lang).into_iter().map(|(label, value)| html! {
                                    <>
                                        <dt>{ label }</dt>
                                        <dd>{ value }</dd>
                                    </>
                                }) }
                            </dl>
                        </div>
                        <div class="detail-card">
                            <h4>{ tr(lang, Key::PhysicalProperties) }</h4>
                            <dl>
                                <dt>{ tr(lang, Key::MeltingPoint) }</dt>
                                <dd>{ melt }</dd>
                                <dt>{ tr(lang, Key::BoilingPoint) }</dt>
                                <dd>{ boil }</dd>
                            </dl>
                        </div>
                        <BarChart title={tr(lang, Key::DensityChart)} rows={density_rows(data, lang)} color={color} />
                        <BarChart title={tr(lang, Key::PhaseChart)} rows={phase_rows(data, lang)} color={color} />
                        <div class="detail-card">
                            <h4>{ tr(lang, Key::History) }</h4>
                            <p>{ summary }</p>
                            <dl>
                                <dt>{ tr(lang, Key::DiscoveredBy) }</dt>
                                <dd>{ discoverer_label(data, lang) }</dd>
                                <dt>{ tr(lang, Key::Year) }</dt>
                                <dd>{ discovery_year_label(data, lang) }</dd>
                            </dl>
                        </div>
                        <div class="detail-card">
                            <h4>{ tr(lang, Key::Application) }</h4>
                            <p>{ data.usage(lang) }</p>
                        </div>
                        { hazard }
                    </div>
                </div>
            </div>
        </div>
    }
}
