mod components;
mod i18n;
mod logger;
mod model;
mod state;
mod util;

fn main() {
    if let Err(e) = logger::init() {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    log::info!("elemental vision starting");
    yew::Renderer::<components::app::App>::new().render();
}
