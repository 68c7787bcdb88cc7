//! Binds server-rendered FAQ markup to an [`AccordionState`].
//!
//! Each item gets one click listener. A click updates the model and then a
//! render pass writes the `display` style of every answer region.

use std::cell::RefCell;
use std::rc::Rc;

use shared::{AccordionConfig, AccordionState, Visibility};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

type ClickListener = Closure<dyn FnMut(Event)>;

struct Bound {
    state: AccordionState,
    answers: Vec<Option<HtmlElement>>,
    config: AccordionConfig,
}

impl Bound {
    fn click(&mut self, index: usize) {
        match self.state.toggle(index) {
            Ok(open) => {
                log::debug!("[faq] item {} clicked, open={:?}", index, open);
                self.render();
            }
            Err(e) => log::debug!("[faq] ignoring click: {}", e),
        }
    }

    fn render(&self) {
        for (index, answer) in self.answers.iter().enumerate() {
            let Some(answer) = answer else {
                continue;
            };
            let visibility = self.state.visibility(index).unwrap_or(Visibility::Hidden);
            let display = self.config.display_for(visibility);
            if let Err(e) = answer.style().set_property("display", display) {
                log::debug!("[faq] could not style answer {}: {:?}", index, e);
            }
        }
    }
}

pub struct AccordionController {
    bound: Rc<RefCell<Bound>>,
    listeners: Vec<(Element, ClickListener)>,
}

impl AccordionController {
    /// Registers a click listener on every item and hides all answers.
    ///
    /// Items without an answer region still get a listener, but clicking
    /// them changes nothing.
    pub fn initialize(items: Vec<Element>, config: AccordionConfig) -> Self {
        let answers: Vec<Option<HtmlElement>> = items
            .iter()
            .map(|item| find_answer(item, &config.answer_selector))
            .collect();
        let has_answer = answers.iter().map(Option::is_some).collect();

        let bound = Rc::new(RefCell::new(Bound {
            state: AccordionState::with_answers(has_answer),
            answers,
            config,
        }));

        let mut listeners = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let target = Rc::clone(&bound);
            let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                target.borrow_mut().click(index);
            });
            let callback = listener.as_ref().unchecked_ref();
            match item.add_event_listener_with_callback("click", callback) {
                Ok(()) => listeners.push((item, listener)),
                Err(e) => log::debug!("[faq] could not listen on item {}: {:?}", index, e),
            }
        }

        bound.borrow().render();
        log::info!("[faq] accordion bound to {} items", listeners.len());

        Self { bound, listeners }
    }

    /// Runs the click behavior for item `index` without a DOM event.
    pub fn click(&self, index: usize) {
        self.bound.borrow_mut().click(index);
    }

    pub fn open_item(&self) -> Option<usize> {
        self.bound.borrow().state.open_item()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn detach(&mut self) {
        for (item, listener) in self.listeners.drain(..) {
            let callback = listener.as_ref().unchecked_ref();
            if let Err(e) = item.remove_event_listener_with_callback("click", callback) {
                log::debug!("[faq] could not remove listener: {:?}", e);
            }
        }
    }

    /// Keeps the listeners registered for the lifetime of the page.
    pub fn forget(mut self) {
        for (_, listener) in self.listeners.drain(..) {
            listener.forget();
        }
    }
}

impl Drop for AccordionController {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Looks up every FAQ item in the document, in document order.
pub fn collect_items(document: &Document, config: &AccordionConfig) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(&config.item_selector) else {
        log::debug!("[faq] invalid item selector {:?}", config.item_selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn find_answer(item: &Element, selector: &str) -> Option<HtmlElement> {
    item.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|answer| answer.dyn_into::<HtmlElement>().ok())
}
