use thiserror::Error;

use crate::template::TemplateSlot;

/// Raised when a template would lose one of its required placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "the required placeholders for the {slot} template are: {}",
    .slot.required_placeholders().join(",")
)]
pub struct TemplateError {
    pub slot: TemplateSlot,
    pub missing: Vec<&'static str>,
}

impl TemplateError {
    pub fn new(slot: TemplateSlot, missing: Vec<&'static str>) -> Self {
        Self { slot, missing }
    }

    /// Every placeholder the rejected slot requires, not only the missing ones.
    pub fn required(&self) -> &'static [&'static str] {
        self.slot.required_placeholders()
    }
}

pub type TemplateResult<T> = Result<T, TemplateError>;
