use store::StoreError;
use thiserror::Error;

/// Failure of a create/update/delete, surfaced to the caller rather than
/// stored in module state. The message is ready for display: the operation's
/// fallback text, extended with the store's own message when it has one.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DataError {
    message: String,
    #[source]
    source: Option<StoreError>,
}

impl DataError {
    pub(crate) fn write(verb: &str, label: &str, source: StoreError) -> Self {
        let message = match source.message() {
            Some(detail) => format!("Failed to {verb} {label}: {detail}"),
            None => format!("Failed to {verb} {label}"),
        };
        Self { message, source: Some(source) }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_appends_store_detail_when_present() {
        let err = DataError::write("delete", "car", StoreError::Api("network error".into()));
        assert_eq!(err.message(), "Failed to delete car: network error");

        let bare = DataError::write("add", "crew member", StoreError::Api(String::new()));
        assert_eq!(bare.message(), "Failed to add crew member");
    }
}
