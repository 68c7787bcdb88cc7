pub mod components;
pub mod controller;
pub mod logging;
pub mod page;

use shared::AccordionConfig;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    page::mount_page(&document, AccordionConfig::default());
}
