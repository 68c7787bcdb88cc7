use serde::Deserialize;

use crate::error::AccordionError;

/// One FAQ entry as delivered in the page's JSON data island.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    /// Entries without an answer render no answer region and never open.
    #[serde(default)]
    pub answer: Option<String>,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: Some(answer.into()),
        }
    }

    pub fn parse_list(json: &str) -> Result<Vec<FaqEntry>, AccordionError> {
        let entries: Vec<FaqEntry> = serde_json::from_str(json)?;
        log::debug!("[faq] parsed {} entries", entries.len());
        Ok(entries)
    }

    pub fn has_answer(&self) -> bool {
        self.answer.is_some()
    }
}
