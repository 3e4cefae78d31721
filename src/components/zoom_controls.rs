use yew::prelude::*;

use crate::i18n::{Key, tr};
use crate::model::Language;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomControlsProps {
    pub lang: Language,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rs = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let lang = props.lang;
    html! {<div class="zoom-controls">
        <div class="zoom-buttons">
            <button onclick={zi} title={tr(lang, Key::ZoomIn)}> {"+"} </button>
            <button onclick={zo} title={tr(lang, Key::ZoomOut)}> {"−"} </button>
            <button onclick={rs} title={tr(lang, Key::ResetView)}> {"⟲"} </button>
        </div>
        <span class="drag-hint">{ tr(lang, Key::DragHint) }</span>
    </div>}
}
