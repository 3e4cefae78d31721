use gloo::timers::callback::Timeout;
use yew::prelude::*;

use super::{element_detail::ElementDetail, periodic_table::PeriodicTable, search_bar::SearchBar};
use crate::i18n::{Key, tr};
use crate::model::{AppAction, AppState, load_elements};
use crate::state::detail::OriginRect;

/// Length of the detail panel's exit animation.
const CLOSE_ANIMATION_MS: u32 = 200;

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);
    let close_timer = use_mut_ref(|| None::<Timeout>);
    let lang = state.lang;

    let toggle_lang = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(AppAction::ToggleLanguage))
    };
    let on_query = {
        let state = state.clone();
        Callback::from(move |q: String| state.dispatch(AppAction::SetQuery(q)))
    };
    let on_pick = {
        let state = state.clone();
        let close_timer = close_timer.clone();
        Callback::from(move |number: u32| {
            close_timer.borrow_mut().take();
            state.dispatch(AppAction::PickSearchResult(number));
        })
    };
    let on_select = {
        let state = state.clone();
        let close_timer = close_timer.clone();
        Callback::from(move |(number, origin): (u32, Option<OriginRect>)| {
            log::debug!("select element {number}");
            close_timer.borrow_mut().take();
            state.dispatch(AppAction::Select { number, origin });
        })
    };
    // Closing plays the exit animation, then clears the selection.
    let on_close = {
        let state = state.clone();
        let close_timer = close_timer.clone();
        Callback::from(move |_: ()| {
            if state.closing {
                return;
            }
            state.dispatch(AppAction::BeginClose);
            let finish = state.clone();
            *close_timer.borrow_mut() = Some(Timeout::new(CLOSE_ANIMATION_MS, move || {
                finish.dispatch(AppAction::FinishClose);
            }));
        })
    };

    let table = match load_elements() {
        Ok(_) => html! { <PeriodicTable lang={lang} {on_select} /> },
        Err(reason) => html! {
            <div class="load-error">{ format!("{}: {reason}", tr(lang, Key::LoadFailed)) }</div>
        },
    };
    let detail = match state.selected {
        Some(number) => html! {
            <ElementDetail
                number={number}
                lang={lang}
                origin={state.origin}
                closing={state.closing}
                on_close={on_close}
            />
        },
        None => html! {},
    };

    html! {
        <div class="app" lang={lang.code()}>
            <header class="app-header">
                <h1>{ tr(lang, Key::Title) }</h1>
                <SearchBar lang={lang} query={state.query.clone()} {on_query} {on_pick} />
                <button class="lang-toggle" onclick={toggle_lang}>
                    { lang.badge() }
                </button>
            </header>
            <section class="hero">
                <h2>{ tr(lang, Key::Tagline) }</h2>
                <p>{ tr(lang, Key::Intro) }</p>
            </section>
            { table }
            { detail }
        </div>
    }
}
