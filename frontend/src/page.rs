//! Wires the accordion into the current page at load time.

use leptos::*;
use shared::{AccordionConfig, FaqEntry};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::components::faq_list::FaqList;
use crate::controller::{collect_items, AccordionController};

/// How the accordion ended up attached to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mounted {
    /// Entries came from the JSON data island and were rendered by `FaqList`.
    Rendered,
    /// Existing `.faq-item` markup was bound with listeners.
    Bound { items: usize },
}

/// Renders `FaqList` when the page ships a data island and a mount point,
/// otherwise binds the FAQ items already in the markup.
pub fn mount_page(document: &Document, config: AccordionConfig) -> Mounted {
    if let Some(entries) = entries_from_island(document, &config) {
        let root = document
            .get_element_by_id(&config.mount_id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        if let Some(root) = root {
            log::info!("[faq] rendering {} entries", entries.len());
            let list_config = config.clone();
            mount_to(root, move || view! { <FaqList entries=entries config=list_config /> });
            return Mounted::Rendered;
        }
        log::debug!("[faq] data island present but no #{} mount point", config.mount_id);
    }

    let items = collect_items(document, &config);
    let count = items.len();
    AccordionController::initialize(items, config).forget();
    Mounted::Bound { items: count }
}

/// Reads FAQ entries from the `<script type="application/json">` island.
///
/// A missing or malformed island yields `None`.
pub fn entries_from_island(document: &Document, config: &AccordionConfig) -> Option<Vec<FaqEntry>> {
    let island = document.get_element_by_id(&config.data_island_id)?;
    let json = island.text_content().unwrap_or_default();
    match FaqEntry::parse_list(&json) {
        Ok(entries) => Some(entries),
        Err(e) => {
            log::warn!("[faq] ignoring data island: {}", e);
            None
        }
    }
}
