pub mod fake_client;
pub mod gemini_client;

pub use fake_client::FakeLLMClient;
pub use gemini_client::GeminiLLMClient;
