use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport failure before a store response was received.
    #[error("{0}")]
    Network(String),
    /// Failure reported by the store itself; the message may be empty when
    /// the response body carried none.
    #[error("{0}")]
    Api(String),
    /// Response arrived but could not be decoded.
    #[error("{0}")]
    Parse(String),
    /// A single-row operation matched a different number of rows.
    #[error("expected exactly one row, got {0}")]
    RowCount(usize),
}

impl StoreError {
    /// Human-readable message, or `None` for failures that carry no text.
    pub fn message(&self) -> Option<String> {
        let text = self.to_string();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_message_reads_as_none() {
        assert_eq!(StoreError::Api("network error".into()).message().as_deref(), Some("network error"));
        assert_eq!(StoreError::Api(String::new()).message(), None);
        assert_eq!(StoreError::RowCount(0).message().as_deref(), Some("expected exactly one row, got 0"));
    }
}
