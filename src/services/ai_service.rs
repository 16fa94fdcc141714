//! AI destination recommendations.
//!
//! The chat model is reached through an OpenAI-compatible completion API
//! (Groq by default). Tools are optional: when a Toolhouse key is configured
//! the model may call them before giving its final answer.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::ai_destination::AiDestination;
use crate::models::preferences::UserPreferences;
use crate::services::response_parser::parse_ai_response;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type", default = "default_tool_type")]
    pub kind: String,
    pub function: FunctionCall,
}

fn default_tool_type() -> String {
    "function".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: "tool".to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Value>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatChoice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    pub fn first_message(&self) -> Option<&ChatMessage> {
        self.choices.first().map(|choice| &choice.message)
    }

    pub fn tool_calls(&self) -> &[ToolCall] {
        self.first_message()
            .and_then(|message| message.tool_calls.as_deref())
            .unwrap_or(&[])
    }
}

#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ApiError>;
}

/// External tools the model may call while answering.
#[async_trait]
pub trait ToolProvider: Send + Sync {
    /// Tool definitions in OpenAI function format.
    async fn get_tools(&self) -> Result<Vec<Value>, ApiError>;

    /// Execute the tool calls requested in `completion`. Returns the assistant
    /// message followed by one `tool` message per call, or nothing when the
    /// model made no calls.
    async fn run_tools(
        &self,
        completion: &ChatCompletionResponse,
    ) -> Result<Vec<ChatMessage>, ApiError>;
}

pub struct GroqClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GroqClient {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs.max(60)))
            .build()?;

        Ok(Self {
            http,
            base_url: config.groq_base_url.trim_end_matches('/').to_string(),
            api_key: config.groq_api_key.clone(),
        })
    }
}

#[async_trait]
impl ChatCompletionClient for GroqClient {
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ApiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ApiError::Config("GROQ_API_KEY not set".to_string()))?;

        let url = format!("{}/chat/completions", self.base_url);
        debug!(
            "Requesting chat completion ({} messages, {} tools)",
            request.messages.len(),
            request.tools.len()
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse completion: {}", e)))
    }
}

pub struct ToolhouseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    metadata: Value,
}

#[derive(Debug, Deserialize)]
struct ToolhouseRunResponse {
    content: ToolhouseToolOutput,
}

#[derive(Debug, Deserialize)]
struct ToolhouseToolOutput {
    tool_call_id: String,
    #[serde(default)]
    content: Value,
}

impl ToolhouseClient {
    pub fn new(config: &AppConfig, api_key: String) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs.max(60)))
            .build()?;

        Ok(Self {
            http,
            base_url: config.toolhouse_base_url.trim_end_matches('/').to_string(),
            api_key,
            metadata: json!({
                "id": config.toolhouse_user_id,
                "timezone": config.toolhouse_timezone,
            }),
        })
    }

    async fn post(&self, path: &str, body: Value) -> Result<reqwest::Response, ApiError> {
        let response = self
            .http
            .post(format!("{}/{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ToolProvider for ToolhouseClient {
    async fn get_tools(&self) -> Result<Vec<Value>, ApiError> {
        let body = json!({
            "provider": "openai",
            "metadata": self.metadata,
            "bundle": "default",
        });
        let response = self.post("get_tools", body).await?;
        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse tool list: {}", e)))
    }

    async fn run_tools(
        &self,
        completion: &ChatCompletionResponse,
    ) -> Result<Vec<ChatMessage>, ApiError> {
        let Some(assistant) = completion.first_message() else {
            return Ok(Vec::new());
        };
        let calls = completion.tool_calls();
        if calls.is_empty() {
            return Ok(Vec::new());
        }

        let mut messages = vec![assistant.clone()];
        for call in calls {
            info!("Running tool '{}'", call.function.name);
            let body = json!({
                "content": call,
                "provider": "openai",
                "metadata": self.metadata,
                "bundle": "default",
            });
            let output = self
                .post("run_tools", body)
                .await?
                .json::<ToolhouseRunResponse>()
                .await
                .map_err(|e| ApiError::Parse(format!("Failed to parse tool output: {}", e)))?;

            let content = match output.content.content {
                Value::String(text) => text,
                other => other.to_string(),
            };
            messages.push(ChatMessage::tool_result(output.content.tool_call_id, content));
        }
        Ok(messages)
    }
}

/// Used when no tool provider is configured.
pub struct NoTools;

#[async_trait]
impl ToolProvider for NoTools {
    async fn get_tools(&self) -> Result<Vec<Value>, ApiError> {
        Ok(Vec::new())
    }

    async fn run_tools(
        &self,
        _completion: &ChatCompletionResponse,
    ) -> Result<Vec<ChatMessage>, ApiError> {
        Ok(Vec::new())
    }
}

/// Build the user prompt sent to the model.
pub fn build_prompt(preferences: &UserPreferences, user_location: Option<&str>) -> String {
    let location = user_location
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .or_else(|| preferences.departure_city())
        .unwrap_or("");
    let interests = preferences
        .interests
        .iter()
        .map(|i| i.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "I'm looking for travel destination recommendations with these preferences:
- Budget: {budget}
- Location: {location}
- Travel Type: {travel_type}
- Interests: {interests}
- Duration: {duration}

Please provide 3-5 destination recommendations that match these preferences.
Format each one as \"Destination N:\" followed by the lines \"Name:\", \"Country:\", \"Image:\", \"Description:\", \"Budget:\", \"Best Time to Visit:\" and \"Why Visit:\" with a bulleted list.",
        budget = preferences.budget,
        location = location,
        travel_type = preferences.travel_type().as_str(),
        interests = interests,
        duration = preferences.duration.as_str(),
    )
}

#[derive(Clone)]
pub struct AiRecommendationService {
    chat: Arc<dyn ChatCompletionClient>,
    tools: Arc<dyn ToolProvider>,
    model: String,
}

impl AiRecommendationService {
    pub fn new(
        chat: Arc<dyn ChatCompletionClient>,
        tools: Arc<dyn ToolProvider>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            chat,
            tools,
            model: model.into(),
        }
    }

    /// Groq for completions, Toolhouse for tools when a key is present.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        let chat: Arc<dyn ChatCompletionClient> = Arc::new(GroqClient::new(config)?);
        let tools: Arc<dyn ToolProvider> = match &config.toolhouse_api_key {
            Some(key) => Arc::new(ToolhouseClient::new(config, key.clone())?),
            None => {
                info!("TOOLHOUSE_API_KEY not set, AI recommendations run without tools");
                Arc::new(NoTools)
            }
        };
        Ok(Self::new(chat, tools, config.groq_model.clone()))
    }

    pub async fn recommend(
        &self,
        preferences: &UserPreferences,
        user_location: Option<&str>,
    ) -> Result<Vec<AiDestination>, ApiError> {
        let mut messages = vec![ChatMessage::user(build_prompt(preferences, user_location))];

        let tools = match self.tools.get_tools().await {
            Ok(tools) => tools,
            Err(e) => {
                warn!("Failed to load tools, continuing without them: {}", e);
                Vec::new()
            }
        };

        let first = self.chat.complete(&self.request(&messages, &tools)).await?;

        let answer = if tools.is_empty() {
            first
        } else {
            let tool_messages = self.tools.run_tools(&first).await?;
            if tool_messages.is_empty() {
                first
            } else {
                messages.extend(tool_messages);
                self.chat.complete(&self.request(&messages, &tools)).await?
            }
        };

        let content = answer
            .first_message()
            .and_then(|message| message.content.clone())
            .unwrap_or_default();
        let destinations = parse_ai_response(&content);
        info!("AI reply yielded {} destinations", destinations.len());
        Ok(destinations)
    }

    fn request(&self, messages: &[ChatMessage], tools: &[Value]) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            tools: tools.to_vec(),
        }
    }
}
