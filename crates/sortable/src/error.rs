use thiserror::Error;

use crate::key::RowKey;

#[derive(Debug, Error, PartialEq)]
pub enum SortableError {
    #[error("duplicate row key: {0}")]
    DuplicateKey(RowKey),

    #[error("order does not match data: {missing} missing, {unexpected} unexpected")]
    OrderMismatch { missing: usize, unexpected: usize },

    #[error("order must start with a category, found {0}")]
    LeadingItem(RowKey),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
