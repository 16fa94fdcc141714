use std::env;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

const OPENTRIPMAP_BASE_URL: &str = "https://api.opentripmap.com/0.1/en";
const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const GROQ_MODEL: &str = "llama-3.3-70b-versatile";
const TOOLHOUSE_BASE_URL: &str = "https://api.toolhouse.ai/v1";

const HTTP_TIMEOUT_SECS: u64 = 15;
const MAX_BUDGET_DISTANCE_KM: f64 = 2000.0;
const PLACE_DETAIL_LIMIT: usize = 10;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub opentripmap_api_key: Option<String>,
    pub opentripmap_base_url: String,
    pub nominatim_base_url: String,
    pub geocoder_user_agent: String,
    pub groq_api_key: Option<String>,
    pub groq_base_url: String,
    pub groq_model: String,
    pub toolhouse_api_key: Option<String>,
    pub toolhouse_base_url: String,
    pub toolhouse_user_id: String,
    pub toolhouse_timezone: String,
    pub http_timeout_secs: u64,
    /// Low-budget trips are restricted to destinations within this radius of the traveller.
    pub max_budget_distance_km: f64,
    /// How many places from a radius search get a detail lookup.
    pub place_detail_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            opentripmap_api_key: None,
            opentripmap_base_url: OPENTRIPMAP_BASE_URL.to_string(),
            nominatim_base_url: NOMINATIM_BASE_URL.to_string(),
            geocoder_user_agent: format!("whereto-api/{}", env!("CARGO_PKG_VERSION")),
            groq_api_key: None,
            groq_base_url: GROQ_BASE_URL.to_string(),
            groq_model: GROQ_MODEL.to_string(),
            toolhouse_api_key: None,
            toolhouse_base_url: TOOLHOUSE_BASE_URL.to_string(),
            toolhouse_user_id: "whereto".to_string(),
            toolhouse_timezone: "0".to_string(),
            http_timeout_secs: HTTP_TIMEOUT_SECS,
            max_budget_distance_km: MAX_BUDGET_DISTANCE_KM,
            place_detail_limit: PLACE_DETAIL_LIMIT,
        }
    }
}

impl AppConfig {
    /// Create the configuration from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parsed_var("PORT").unwrap_or(defaults.port),
            opentripmap_api_key: non_empty_var("OPENTRIPMAP_API_KEY"),
            opentripmap_base_url: env::var("OPENTRIPMAP_BASE_URL")
                .unwrap_or(defaults.opentripmap_base_url),
            nominatim_base_url: env::var("NOMINATIM_BASE_URL")
                .unwrap_or(defaults.nominatim_base_url),
            geocoder_user_agent: env::var("GEOCODER_USER_AGENT")
                .unwrap_or(defaults.geocoder_user_agent),
            groq_api_key: non_empty_var("GROQ_API_KEY").or_else(|| non_empty_var("GROQCLOUD_API_KEY")),
            groq_base_url: env::var("GROQ_BASE_URL").unwrap_or(defaults.groq_base_url),
            groq_model: env::var("GROQ_MODEL").unwrap_or(defaults.groq_model),
            toolhouse_api_key: non_empty_var("TOOLHOUSE_API_KEY"),
            toolhouse_base_url: env::var("TOOLHOUSE_BASE_URL")
                .unwrap_or(defaults.toolhouse_base_url),
            toolhouse_user_id: env::var("TOOLHOUSE_USER_ID").unwrap_or(defaults.toolhouse_user_id),
            toolhouse_timezone: env::var("TOOLHOUSE_TIMEZONE")
                .unwrap_or(defaults.toolhouse_timezone),
            http_timeout_secs: parsed_var("HTTP_TIMEOUT_SECS").unwrap_or(defaults.http_timeout_secs),
            max_budget_distance_km: parsed_var("MAX_BUDGET_DISTANCE_KM")
                .unwrap_or(defaults.max_budget_distance_km),
            place_detail_limit: parsed_var("PLACE_DETAIL_LIMIT")
                .unwrap_or(defaults.place_detail_limit),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

/// Mask a secret for display, keeping only the first and last four characters.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}
