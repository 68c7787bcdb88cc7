use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccordionError {
    #[error("item {index} is out of range (accordion has {len} items)")]
    OutOfRange { index: usize, len: usize },

    #[error("item {index} has no answer region")]
    MissingAnswer { index: usize },

    #[error("invalid FAQ data: {0}")]
    InvalidData(#[from] serde_json::Error),
}
