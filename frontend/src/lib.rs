use folio_app::App;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // `tracing` forwards to `log` here, so this catches both.
    _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}
