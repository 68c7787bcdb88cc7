use crate::accordion::Visibility;

/// Selectors and display values used to bind the accordion to a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionConfig {
    /// Selector matching every FAQ item (the trigger region).
    pub item_selector: String,
    /// Selector matching the answer region inside an item.
    pub answer_selector: String,
    /// Id of the `<script type="application/json">` element holding entries.
    pub data_island_id: String,
    /// Id of the element the rendered list is mounted into.
    pub mount_id: String,
    pub shown_display: String,
    pub hidden_display: String,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            item_selector: ".faq-item".to_string(),
            answer_selector: ".faq-answer".to_string(),
            data_island_id: "faq-data".to_string(),
            mount_id: "faq-root".to_string(),
            shown_display: "block".to_string(),
            hidden_display: "none".to_string(),
        }
    }
}

impl AccordionConfig {
    /// CSS `display` value for the given visibility.
    pub fn display_for(&self, visibility: Visibility) -> &str {
        match visibility {
            Visibility::Shown => &self.shown_display,
            Visibility::Hidden => &self.hidden_display,
        }
    }
}
