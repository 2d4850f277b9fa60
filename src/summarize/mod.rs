mod openai;
mod summarize_error;
mod types;

pub use openai::OpenAiClient;
pub use summarize_error::SummarizeError;
pub use types::{ChatRequest, Message, ReplyFormat};

/// A hosted chat-completion model that turns a prompt into text.
pub trait Summarizer {
    fn complete(&self, prompt: &str, format: ReplyFormat) -> Result<String, SummarizeError>;
}
