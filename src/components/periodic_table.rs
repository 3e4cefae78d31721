use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, MouseEvent, TouchEvent, TouchList, WheelEvent};
use yew::prelude::*;

use super::{element_tile::ElementTile, zoom_controls::ZoomControls};
use crate::i18n::{Key, tr};
use crate::model::{Language, elements};
use crate::state::detail::OriginRect;
use crate::state::layout::{F_BLOCK_PLACEHOLDERS, MAIN_COLUMNS, MAIN_ROWS, TableLayout};
use crate::state::{TouchPoint, ViewportController};

#[derive(Properties, PartialEq, Clone)]
pub struct PeriodicTableProps {
    pub lang: Language,
    pub on_select: Callback<(u32, Option<OriginRect>)>,
}

fn touch_points(list: &TouchList) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchPoint::new(t.client_x() as f64, t.client_y() as f64))
        .collect()
}

/// Runs `op` on the controller and repaints when the revision moved or a
/// gesture started/stopped (the latter toggles the CSS transition). The
/// borrow is released before the repaint is scheduled.
fn apply(
    controller: &RefCell<ViewportController>,
    redraw: &UseForceUpdateHandle,
    op: impl FnOnce(&mut ViewportController),
) {
    let changed = {
        let mut ctl = controller.borrow_mut();
        let (revision, was_interacting) = (ctl.revision(), ctl.is_interacting());
        op(&mut ctl);
        revision != ctl.revision() || was_interacting != ctl.is_interacting()
    };
    if changed {
        redraw.force_update();
    }
}

#[function_component(PeriodicTable)]
pub fn periodic_table(props: &PeriodicTableProps) -> Html {
    let viewport_ref = use_node_ref();
    let controller = use_mut_ref(ViewportController::default);
    let redraw = use_force_update();

    // Measure, then wire wheel/mouse/touch listeners onto the viewport.
    {
        let viewport_ref = viewport_ref.clone();
        let controller = controller.clone();
        let redraw = redraw.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let viewport = viewport_ref.cast::<HtmlElement>();

            if let Some(el) = &viewport {
                let width = el.client_width() as f64;
                apply(&controller, &redraw, |ctl| ctl.measure(width));
            } else {
                log::warn!("periodic table viewport not mounted; pan/zoom disabled");
            }

            let resize_cb = {
                let controller = controller.clone();
                let viewport = viewport.clone();
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    if let Some(el) = &viewport {
                        controller.borrow_mut().measure(el.client_width() as f64);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let wheel_cb = {
                let controller = controller.clone();
                let redraw = redraw.clone();
                Closure::wrap(Box::new(move |e: WheelEvent| {
                    e.prevent_default();
                    e.stop_propagation();
                    apply(&controller, &redraw, |ctl| ctl.wheel_zoom(e.delta_y()));
                }) as Box<dyn FnMut(_)>)
            };
            let mousedown_cb = {
                let controller = controller.clone();
                let redraw = redraw.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    let (x, y) = (e.client_x() as f64, e.client_y() as f64);
                    apply(&controller, &redraw, |ctl| ctl.pointer_down(x, y));
                }) as Box<dyn FnMut(_)>)
            };
            let mousemove_cb = {
                let controller = controller.clone();
                let redraw = redraw.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    if !controller.borrow().is_dragging() {
                        return;
                    }
                    e.prevent_default();
                    let (x, y) = (e.client_x() as f64, e.client_y() as f64);
                    apply(&controller, &redraw, |ctl| ctl.pointer_move(x, y));
                }) as Box<dyn FnMut(_)>)
            };
            let mouseup_cb = {
                let controller = controller.clone();
                let redraw = redraw.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    let mut moved = false;
                    apply(&controller, &redraw, |ctl| moved = ctl.pointer_up());
                    if moved {
                        e.prevent_default();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let mouseleave_cb = {
                let controller = controller.clone();
                let redraw = redraw.clone();
                Closure::wrap(Box::new(move |_: MouseEvent| {
                    apply(&controller, &redraw, |ctl| {
                        ctl.pointer_leave();
                    });
                }) as Box<dyn FnMut(_)>)
            };
            let touch_start_cb = {
                let controller = controller.clone();
                let redraw = redraw.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let touches = touch_points(&e.touches());
                    apply(&controller, &redraw, |ctl| ctl.touch_start(&touches));
                }) as Box<dyn FnMut(_)>)
            };
            let touch_move_cb = {
                let controller = controller.clone();
                let redraw = redraw.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if controller.borrow().is_interacting() {
                        e.prevent_default();
                    }
                    let touches = touch_points(&e.touches());
                    apply(&controller, &redraw, |ctl| ctl.touch_move(&touches));
                }) as Box<dyn FnMut(_)>)
            };
            let touch_end_cb = {
                let controller = controller.clone();
                let redraw = redraw.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let remaining = touch_points(&e.touches());
                    apply(&controller, &redraw, |ctl| ctl.touch_end(&remaining));
                }) as Box<dyn FnMut(_)>)
            };

            let listeners: [(&str, &js_sys::Function); 8] = [
                ("wheel", wheel_cb.as_ref().unchecked_ref()),
                ("mousedown", mousedown_cb.as_ref().unchecked_ref()),
                ("mousemove", mousemove_cb.as_ref().unchecked_ref()),
                ("mouseup", mouseup_cb.as_ref().unchecked_ref()),
                ("mouseleave", mouseleave_cb.as_ref().unchecked_ref()),
                ("touchstart", touch_start_cb.as_ref().unchecked_ref()),
                ("touchmove", touch_move_cb.as_ref().unchecked_ref()),
                ("touchend", touch_end_cb.as_ref().unchecked_ref()),
            ];
            if let Some(el) = &viewport {
                for (name, f) in listeners {
                    if el.add_event_listener_with_callback(name, f).is_err() {
                        log::warn!("could not attach {name} listener");
                    }
                }
                el.add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();
            }
            if let Some(w) = &window {
                w.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                    .ok();
            }

            // Cleanup
            move || {
                if let Some(el) = &viewport {
                    let listeners: [(&str, &js_sys::Function); 9] = [
                        ("wheel", wheel_cb.as_ref().unchecked_ref()),
                        ("mousedown", mousedown_cb.as_ref().unchecked_ref()),
                        ("mousemove", mousemove_cb.as_ref().unchecked_ref()),
                        ("mouseup", mouseup_cb.as_ref().unchecked_ref()),
                        ("mouseleave", mouseleave_cb.as_ref().unchecked_ref()),
                        ("touchstart", touch_start_cb.as_ref().unchecked_ref()),
                        ("touchmove", touch_move_cb.as_ref().unchecked_ref()),
                        ("touchend", touch_end_cb.as_ref().unchecked_ref()),
                        ("touchcancel", touch_end_cb.as_ref().unchecked_ref()),
                    ];
                    for (name, f) in listeners {
                        let _ = el.remove_event_listener_with_callback(name, f);
                    }
                }
                if let Some(w) = &window {
                    let _ = w.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                }
                let _keep_alive = (
                    &resize_cb,
                    &wheel_cb,
                    &mousedown_cb,
                    &mousemove_cb,
                    &mouseup_cb,
                    &mouseleave_cb,
                    &touch_start_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                );
            }
        });
    }

    // zoom buttons
    let control_cb = |op: fn(&mut ViewportController)| {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| apply(&controller, &redraw, op))
    };
    let zoom_in_cb = control_cb(ViewportController::zoom_in);
    let zoom_out_cb = control_cb(ViewportController::zoom_out);
    let reset_cb = control_cb(ViewportController::reset);

    // Tiles ask the controller whether the click ended a drag.
    let tile_select = {
        let controller = controller.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |(number, origin): (u32, Option<OriginRect>)| {
            if controller.borrow().tap_allowed() {
                on_select.emit((number, origin));
            }
        })
    };

    let (transform_css, transition, content_width) = {
        let ctl = controller.borrow();
        let transition = if ctl.is_interacting() {
            "none"
        } else {
            "transform 0.1s ease-out"
        };
        (
            ctl.transform().to_css(),
            transition,
            ctl.config().content_width,
        )
    };

    let lang = props.lang;
    let layout = TableLayout::build(elements());
    let grid_style = format!(
        "display:grid; gap:6px; width:100%; grid-template-columns:repeat({MAIN_COLUMNS}, minmax(0, 1fr));"
    );

    html! {
        <div class="table-wrap">
            <ZoomControls
                lang={lang}
                on_zoom_in={zoom_in_cb}
                on_zoom_out={zoom_out_cb}
                on_reset={reset_cb}
            />
            <div ref={viewport_ref} class="table-viewport">
                <div
                    class="table-content"
                    style={format!("transform:{transform_css}; transition:{transition};")}
                >
                    <div style={format!("min-width:{content_width}px; display:flex; flex-direction:column; align-items:center; user-select:none; padding-bottom:80px;")}>
                        <div style={format!("{grid_style} grid-template-rows:repeat({MAIN_ROWS}, 1fr); margin-bottom:16px;")}>
                            { for layout.main.iter().map(|(e, (row, col))| html! {
                                <ElementTile
                                    key={e.number}
                                    number={e.number}
                                    lang={lang}
                                    slot={Some((*row, *col))}
                                    on_select={tile_select.clone()}
                                />
                            }) }
                            { for F_BLOCK_PLACEHOLDERS.iter().map(|(row, col, label)| html! {
                                <div class="tile-placeholder" style={format!("grid-row:{row}; grid-column:{col};")}>
                                    { *label }
                                </div>
                            }) }
                        </div>
                        <div style={format!("min-width:{content_width}px; margin-top:24px; display:flex; flex-direction:column; gap:8px; width:100%;")}>
                            <div style={grid_style.clone()}>
                                <div class="f-block-label">{ tr(lang, Key::Lanthanides) }</div>
                                { for layout.lanthanides.iter().map(|e| html! {
                                    <ElementTile key={e.number} number={e.number} lang={lang} slot={None::<(u32, u32)>} on_select={tile_select.clone()} />
                                }) }
                            </div>
                            <div style={grid_style.clone()}>
                                <div class="f-block-label">{ tr(lang, Key::Actinides) }</div>
                                { for layout.actinides.iter().map(|e| html! {
                                    <ElementTile key={e.number} number={e.number} lang={lang} slot={None::<(u32, u32)>} on_select={tile_select.clone()} />
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
                <div class="touch-hint">{ tr(lang, Key::TouchHint) }</div>
            </div>
        </div>
    }
}
