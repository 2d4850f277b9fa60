use crate::summarize::types::ChatResponseRaw;
use crate::summarize::{ChatRequest, Message, ReplyFormat, SummarizeError, Summarizer};
use reqwest::blocking::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const AGENT_DESCRIPTION: &str =
    "I am a real estate expert who helps find and analyze properties based on user preferences.";
const MARKDOWN_INSTRUCTION: &str = "Use markdown to format your answers.";

/// Blocking OpenAI chat-completions client bound to one model.
pub struct OpenAiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SummarizeError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SummarizeError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    fn build_request(&self, prompt: &str, format: ReplyFormat) -> ChatRequest {
        let system = match format {
            ReplyFormat::Markdown => format!("{AGENT_DESCRIPTION}\n{MARKDOWN_INSTRUCTION}"),
            ReplyFormat::JsonObject => AGENT_DESCRIPTION.to_string(),
        };

        ChatRequest::new(&self.model)
            .message(Message::system(system))
            .message(Message::user(prompt))
            .format(format)
    }
}

impl Summarizer for OpenAiClient {
    fn complete(&self, prompt: &str, format: ReplyFormat) -> Result<String, SummarizeError> {
        let start = Instant::now();
        let request = self.build_request(prompt, format);

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                SummarizeError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI API error");
            return Err(SummarizeError::Api(format!("OpenAI API error: {}", error_text)));
        }

        let chat_response: ChatResponseRaw = response
            .json()
            .map_err(|e| SummarizeError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| SummarizeError::Parse("No response from OpenAI".into()))?;

        debug!(
            model = %self.model,
            duration_ms = start.elapsed().as_millis(),
            chars = content.len(),
            "OpenAI chat completion"
        );

        Ok(content)
    }
}
