use leptos::*;
use shared::{AccordionConfig, AccordionState, FaqEntry, Visibility};

/// FAQ list where at most one answer is open at a time.
#[component]
pub fn FaqList(
    entries: Vec<FaqEntry>,
    #[prop(optional)] config: Option<AccordionConfig>,
) -> impl IntoView {
    let config = store_value(config.unwrap_or_default());
    let has_answer = entries.iter().map(FaqEntry::has_answer).collect();
    let state = create_rw_signal(AccordionState::with_answers(has_answer));

    view! {
        <div class="faq-list">
            {entries.into_iter().enumerate().map(move |(index, entry)| {
                let on_click = move |_| {
                    state.update(|s| {
                        if let Err(e) = s.toggle(index) {
                            log::debug!("[faq] ignoring click: {}", e);
                        }
                    });
                };
                let display = move || {
                    let visibility = state
                        .with(|s| s.visibility(index))
                        .unwrap_or(Visibility::Hidden);
                    config.with_value(|c| c.display_for(visibility).to_string())
                };
                let answer = entry.answer.map(|answer| view! {
                    <div class="faq-answer" style:display=display>
                        {answer}
                    </div>
                });

                view! {
                    <div
                        class="faq-item"
                        style="cursor: pointer; user-select: none;"
                        on:click=on_click
                    >
                        <h3 class="faq-question">{entry.question}</h3>
                        {answer}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(entries: Vec<FaqEntry>) -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let root: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        mount_to(root.clone(), move || view! { <FaqList entries=entries /> });
        root
    }

    fn items(root: &HtmlElement) -> Vec<HtmlElement> {
        let nodes = root.query_selector_all(".faq-item").unwrap();
        (0..nodes.length())
            .map(|i| nodes.item(i).unwrap().dyn_into().unwrap())
            .collect()
    }

    fn displays(root: &HtmlElement) -> Vec<String> {
        items(root)
            .iter()
            .map(|item| {
                match item.query_selector(".faq-answer").unwrap() {
                    Some(answer) => answer
                        .dyn_into::<HtmlElement>()
                        .unwrap()
                        .style()
                        .get_property_value("display")
                        .unwrap(),
                    None => "-".to_string(),
                }
            })
            .collect()
    }

    fn sample() -> Vec<FaqEntry> {
        vec![
            FaqEntry::new("A", "Answer A"),
            FaqEntry::new("B", "Answer B"),
            FaqEntry::new("C", "Answer C"),
        ]
    }

    #[wasm_bindgen_test]
    fn test_renders_all_hidden() {
        let root = mount(sample());
        assert_eq!(items(&root).len(), 3);
        assert_eq!(displays(&root), vec!["none", "none", "none"]);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_single_open_scenario() {
        let root = mount(sample());
        let items = items(&root);

        items[0].click();
        assert_eq!(displays(&root), vec!["block", "none", "none"]);
        items[1].click();
        assert_eq!(displays(&root), vec!["none", "block", "none"]);
        items[1].click();
        assert_eq!(displays(&root), vec!["none", "none", "none"]);
        items[2].click();
        assert_eq!(displays(&root), vec!["none", "none", "block"]);

        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_entry_without_answer() {
        let root = mount(vec![
            FaqEntry::new("A", "Answer A"),
            FaqEntry {
                question: "B".to_string(),
                answer: None,
            },
        ]);
        let items = items(&root);

        items[0].click();
        items[1].click();
        assert_eq!(displays(&root), vec!["block", "-"]);

        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_empty_list() {
        let root = mount(Vec::new());
        assert!(items(&root).is_empty());
        root.remove();
    }
}
