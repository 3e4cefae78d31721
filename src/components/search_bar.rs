use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::i18n::{Key, Localized, tr};
use crate::model::{Language, elements};
use crate::state::palette::category_color;
use crate::state::search::search;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchBarProps {
    pub lang: Language,
    pub query: String,
    pub on_query: Callback<String>,
    pub on_pick: Callback<u32>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = {
        let cb = props.on_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let lang = props.lang;
    let results = search(elements(), &props.query);

    let dropdown = if props.query.is_empty() {
        html! {}
    } else if results.is_empty() {
        html! { <div class="search-results"><div class="search-empty">{ tr(lang, Key::NoResults) }</div></div> }
    } else {
        html! {
            <div class="search-results">
                { for results.iter().map(|e| {
                    let pick = {
                        let cb = props.on_pick.clone();
                        let number = e.number;
                        Callback::from(move |_: MouseEvent| cb.emit(number))
                    };
                    html! {
                        <div key={e.number} class="search-item" onclick={pick}>
                            <span class="search-symbol" style={format!("color:{};", category_color(e.category))}>{ e.symbol.clone() }</span>
                            <span>{ e.name(lang) }</span>
                            <span class="search-number">{ format!("#{}", e.number) }</span>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="search-bar">
            <input
                type="text"
                value={props.query.clone()}
                placeholder={tr(lang, Key::SearchPlaceholder)}
                {oninput}
            />
            { dropdown }
        </div>
    }
}
