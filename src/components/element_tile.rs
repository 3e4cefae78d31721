use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::i18n::Localized;
use crate::model::{ElementData, Language, element};
use crate::state::detail::OriginRect;
use crate::state::palette::{category_color, category_glow};

#[derive(Properties, PartialEq, Clone)]
pub struct ElementTileProps {
    pub number: u32,
    pub lang: Language,
    /// Grid row/column in the main table; `None` inside an f-block row.
    pub slot: Option<(u32, u32)>,
    pub on_select: Callback<(u32, Option<OriginRect>)>,
}

fn origin_of(e: &MouseEvent) -> Option<OriginRect> {
    let target = e.current_target()?.dyn_into::<Element>().ok()?;
    let r = target.get_bounding_client_rect();
    Some(OriginRect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    })
}

/// Accessible name of a tile, e.g. "26 Iron (Fe)".
fn tile_label(data: &ElementData, lang: Language) -> String {
    format!("{} {} ({})", data.number, data.name(lang), data.symbol)
}

#[function_component(ElementTile)]
pub fn element_tile(props: &ElementTileProps) -> Html {
    let Some(data) = element(props.number) else {
        return html! {};
    };
    let onclick = {
        let cb = props.on_select.clone();
        let number = props.number;
        Callback::from(move |e: MouseEvent| cb.emit((number, origin_of(&e))))
    };
    let color = category_color(data.category);
    let placement = match props.slot {
        Some((row, col)) => format!("grid-row:{row}; grid-column:{col};"),
        None => String::new(),
    };
    html! {
        <button
            type="button"
            class="element-tile"
            aria-label={tile_label(data, props.lang)}
            {onclick}
            style={format!("{placement} border-color:{color}55; --glow:{};", category_glow(data.category))}
        >
            <span class="tile-number">{ data.number }</span>
            <span class="tile-symbol" style={format!("color:{color};")}>{ data.symbol.clone() }</span>
            <span class="tile-name">{ data.name(props.lang) }</span>
        </button>
    }
}
