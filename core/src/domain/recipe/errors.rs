use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeResponseError {
    #[error("response is not valid JSON: {0}")]
    Parse(String),

    #[error("response is not a JSON array")]
    Shape,

    #[error("response contains no well-formed recipe")]
    Empty,
}

/// Failure kinds of the completion endpoint, classified from the status code
/// and structured error body at the client boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionFailure {
    #[error("API key rejected")]
    InvalidApiKey,

    #[error("model not found")]
    ModelNotFound,

    #[error("quota exceeded")]
    QuotaExceeded,

    #[error("service unavailable")]
    Unavailable,

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("no text in completion")]
    EmptyResponse,
}

impl CompletionFailure {
    pub fn user_message(&self) -> &'static str {
        match self {
            CompletionFailure::InvalidApiKey => {
                "Invalid API Key. Please check your Gemini API key in the .env file."
            }
            CompletionFailure::ModelNotFound => {
                "Model not found. The Gemini API may have changed. Please check for updates."
            }
            CompletionFailure::QuotaExceeded => {
                "API quota exceeded. Please check your Gemini API usage limits."
            }
            CompletionFailure::Unavailable
            | CompletionFailure::RequestFailed(_)
            | CompletionFailure::EmptyResponse => {
                "Couldn't generate recipes at the moment. Please try again later or check your internet connection."
            }
        }
    }
}
