use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use whereto_api::config::AppConfig;
use whereto_api::error::ApiError;
use whereto_api::routes;
use whereto_api::services::ai_service::{
    AiRecommendationService, ChatCompletionClient, ChatCompletionRequest, ChatCompletionResponse,
    NoTools,
};
use whereto_api::state::AppState;

pub mod fake_upstream;

/// Answers every completion with the same text, or fails when `reply` is `None`.
pub struct CannedChat {
    reply: Option<String>,
}

#[async_trait]
impl ChatCompletionClient for CannedChat {
    async fn complete(
        &self,
        _request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ApiError> {
        match &self.reply {
            Some(reply) => Ok(serde_json::from_value(json!({
                "choices": [{
                    "message": {"role": "assistant", "content": reply},
                    "finish_reason": "stop"
                }]
            }))?),
            None => Err(ApiError::Upstream {
                status: 503,
                message: "model overloaded".to_string(),
            }),
        }
    }
}

/// Default config with every upstream pointed at the discard port, where
/// nothing listens, so a stray upstream call fails fast.
pub fn test_config() -> AppConfig {
    AppConfig {
        opentripmap_base_url: "http://127.0.0.1:9".to_string(),
        nominatim_base_url: "http://127.0.0.1:9".to_string(),
        groq_base_url: "http://127.0.0.1:9".to_string(),
        toolhouse_base_url: "http://127.0.0.1:9".to_string(),
        ..AppConfig::default()
    }
}

pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_chat_reply(Some(""))
    }

    pub fn with_chat_reply(reply: Option<&str>) -> Self {
        Self::build(test_config(), reply)
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self::build(config, Some(""))
    }

    fn build(config: AppConfig, reply: Option<&str>) -> Self {
        let chat = Arc::new(CannedChat {
            reply: reply.map(str::to_string),
        });
        let ai = AiRecommendationService::new(chat, Arc::new(NoTools), config.groq_model.clone());
        let state = AppState::with_ai(config, ai).expect("test state");

        Self { state }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(self.state.clone()))
            .configure(routes::configure)
    }
}
