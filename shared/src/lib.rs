//! Platform-independent model for the FAQ accordion.
//!
//! Everything here runs natively, so the single-open behavior can be tested
//! without a browser. The `frontend` crate renders this state into the DOM.

pub mod accordion;
pub mod config;
pub mod entry;
pub mod error;

pub use accordion::{AccordionState, Visibility};
pub use config::AccordionConfig;
pub use entry::FaqEntry;
pub use error::AccordionError;
