use smartfridge_core::domain::common::{entities::app_errors::CoreError, in_flight::RequestKind};
use thiserror::Error;

pub mod dashboard;
pub mod items;
pub mod profile;
pub mod recipes;

#[derive(Debug, Error)]
pub enum CommandError {
    /// A core operation failed; rendered as an alert.
    #[error("{source}")]
    Core {
        kind: Option<RequestKind>,
        #[source]
        source: CoreError,
    },

    #[error("Failed to read confirmation: {0}")]
    Prompt(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait During<T> {
    /// Tags a core failure with the request it happened in.
    fn during(self, kind: RequestKind) -> Result<T, CommandError>;
}

impl<T> During<T> for Result<T, CoreError> {
    fn during(self, kind: RequestKind) -> Result<T, CommandError> {
        self.map_err(|source| CommandError::Core {
            kind: Some(kind),
            source,
        })
    }
}

impl From<CoreError> for CommandError {
    fn from(source: CoreError) -> Self {
        CommandError::Core { kind: None, source }
    }
}

#[cfg(test)]
mod tests {
    use smartfridge_core::application::Alert;

    use super::*;

    fn alert_for(err: CommandError) -> String {
        match err {
            CommandError::Core { kind, source } => Alert::from_failure(kind, &source).message,
            other => panic!("expected a core failure, got {other:?}"),
        }
    }

    #[test]
    fn test_untagged_store_failure_gets_generic_alert() {
        let err = CommandError::from(CoreError::LocalStore("disk full".to_string()));

        assert_eq!(alert_for(err), "Something went wrong. Please try again.");
    }

    #[test]
    fn test_tagged_failure_names_the_request() {
        let err = Err::<(), _>(CoreError::RowStore("timeout".to_string()))
            .during(RequestKind::DeleteItem)
            .unwrap_err();

        assert_eq!(alert_for(err), "Failed to delete item");
    }
}
