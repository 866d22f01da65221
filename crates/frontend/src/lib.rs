pub mod app;
pub mod domain;
pub mod shared;

use app::App;
use leptos::prelude::*;
use shared::config::{SalesConfig, MOUNT_ID};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let mount = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match mount {
        Some(element) => {
            let config = SalesConfig::from_element(&element);
            leptos::mount::mount_to(element, move || view! { <App config=config /> }).forget();
        }
        None => {
            log::warn!("#{} not found, mounting the sales screen into <body>", MOUNT_ID);
            leptos::mount::mount_to_body(|| view! { <App config=SalesConfig::default() /> });
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
