use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::provider::LlmProvider;
use super::types::ChatRequest;
use crate::core::errors::ClientError;

const SERVICE: &str = "groq";

/// Client for Groq's OpenAI-compatible chat completion endpoint.
#[derive(Clone)]
pub struct GroqProvider {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GroqProvider {
    pub fn new(base_url: &str, api_key: String, model: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            client: Client::new(),
        }
    }

    fn build_body(&self, request: &ChatRequest) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": request.messages,
            "stream": false,
        });

        if let (Some(obj), Some(t)) = (body.as_object_mut(), request.temperature) {
            obj.insert("temperature".to_string(), json!(t));
        }

        body
    }
}

fn extract_content(payload: &Value) -> Option<String> {
    payload["choices"][0]["message"]["content"]
        .as_str()
        .map(|content| content.to_string())
}

#[async_trait]
impl LlmProvider for GroqProvider {
    fn name(&self) -> &str {
        SERVICE
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, request: ChatRequest) -> Result<Option<String>, ClientError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = self.build_body(&request);

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::request(SERVICE, e))?;

        if !res.status().is_success() {
            return Err(ClientError::from_response(SERVICE, res).await);
        }

        let payload: Value = res
            .json()
            .await
            .map_err(|e| ClientError::invalid(SERVICE, e))?;

        Ok(extract_content(&payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::types::ChatMessage;

    #[test]
    fn body_carries_model_messages_and_temperature() {
        let provider = GroqProvider::new(
            "https://api.groq.com/openai/v1/",
            "gsk-test".to_string(),
            "llama-3.3-70b-versatile".to_string(),
        );
        let request = ChatRequest::new(vec![
            ChatMessage::system("context"),
            ChatMessage::user("What is anemia?"),
        ])
        .with_temperature(0.0);

        let body = provider.build_body(&request);
        assert_eq!(body["model"], "llama-3.3-70b-versatile");
        assert_eq!(body["temperature"], 0.0);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "What is anemia?");
        assert_eq!(body["stream"], false);
        assert_eq!(provider.base_url, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn content_is_read_from_first_choice() {
        let payload = json!({
            "choices": [{"message": {"role": "assistant", "content": "Drink water."}}]
        });
        assert_eq!(extract_content(&payload).as_deref(), Some("Drink water."));
    }

    #[test]
    fn missing_content_yields_none() {
        assert_eq!(extract_content(&json!({"choices": []})), None);
        assert_eq!(
            extract_content(&json!({"choices": [{"message": {"content": null}}]})),
            None
        );
    }
}
