use crate::error::AccordionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

/// Which FAQ item, if any, currently has its answer shown.
///
/// Items are fixed at construction. Only the index of the open item is
/// stored, so at most one answer can ever be shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    has_answer: Vec<bool>,
    open: Option<usize>,
}

impl AccordionState {
    /// Creates a state for `len` well-formed items, all hidden.
    pub fn new(len: usize) -> Self {
        Self::with_answers(vec![true; len])
    }

    /// Creates a state where `has_answer[i]` tells whether item `i` has an
    /// answer region. Items without one never open.
    pub fn with_answers(has_answer: Vec<bool>) -> Self {
        Self {
            has_answer,
            open: None,
        }
    }

    pub fn len(&self) -> usize {
        self.has_answer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.has_answer.is_empty()
    }

    pub fn has_answer(&self, index: usize) -> bool {
        self.has_answer.get(index).copied().unwrap_or(false)
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    /// Visibility of item `index`, or `None` if there is no such item.
    pub fn visibility(&self, index: usize) -> Option<Visibility> {
        if index >= self.len() {
            return None;
        }
        if self.open == Some(index) {
            Some(Visibility::Shown)
        } else {
            Some(Visibility::Hidden)
        }
    }

    pub fn visibilities(&self) -> Vec<Visibility> {
        (0..self.len())
            .map(|i| self.visibility(i).unwrap_or(Visibility::Hidden))
            .collect()
    }

    /// Handles a click on item `index` and returns the item now open.
    ///
    /// A hidden item opens and every other item closes. Clicking the open
    /// item closes everything. Malformed items leave the state untouched.
    pub fn toggle(&mut self, index: usize) -> Result<Option<usize>, AccordionError> {
        let has_answer = self
            .has_answer
            .get(index)
            .copied()
            .ok_or(AccordionError::OutOfRange {
                index,
                len: self.len(),
            })?;
        if !has_answer {
            return Err(AccordionError::MissingAnswer { index });
        }

        let was_visible = self.open == Some(index);
        self.collapse_all();
        if !was_visible {
            self.open = Some(index);
        }

        log::trace!(
            "[accordion] toggle {}: was_visible={} open={:?}",
            index,
            was_visible,
            self.open
        );
        Ok(self.open)
    }

    pub fn collapse_all(&mut self) {
        self.open = None;
    }
}
