use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelProvider {
    Gemini,
    OpenAi,
}

impl ModelProvider {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Some(ModelProvider::Gemini),
            "openai" | "open-ai" => Some(ModelProvider::OpenAi),
            _ => None,
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            ModelProvider::Gemini => DEFAULT_GEMINI_MODEL,
            ModelProvider::OpenAi => DEFAULT_OPENAI_MODEL,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub model_provider: ModelProvider,
    pub model_name: String,
    pub gemini_api_key: SecretString,
    pub gemini_api_base: String,
    pub openai_api_key: SecretString,
    pub openai_api_base: String,
    pub model_timeout_seconds: u64,
    pub spreadsheet_id: Option<String>,
    pub google_credentials_path: String,
    pub allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let model_provider = match env::var("MODEL_PROVIDER") {
            Ok(raw) => ModelProvider::parse(&raw).unwrap_or_else(|| {
                log::warn!("Unknown MODEL_PROVIDER '{}', falling back to gemini", raw);
                ModelProvider::Gemini
            }),
            Err(_) => ModelProvider::Gemini,
        };

        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            model_provider,
            model_name: non_empty_var("MODEL_NAME")
                .unwrap_or_else(|| model_provider.default_model().to_string()),
            gemini_api_key: SecretString::from(env::var("GEMINI_API_KEY").unwrap_or_default()),
            gemini_api_base: env::var("GEMINI_API_BASE").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model_timeout_seconds: env::var("MODEL_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            spreadsheet_id: non_empty_var("SPREADSHEET_ID"),
            google_credentials_path: env::var("GOOGLE_APPLICATION_CREDENTIALS")
                .unwrap_or_else(|_| "credentials.json".to_string()),
            allowed_origin: non_empty_var("ALLOWED_ORIGIN"),
        }
    }

    /// Checks that the selected model provider has an API key.
    pub fn validate_for_production(&self) -> AppResult<()> {
        let (key, var) = match self.model_provider {
            ModelProvider::Gemini => (&self.gemini_api_key, "GEMINI_API_KEY"),
            ModelProvider::OpenAi => (&self.openai_api_key, "OPENAI_API_KEY"),
        };

        if key.expose_secret().trim().is_empty() {
            return Err(AppError::Configuration(format!(
                "{} is not set for model provider {:?}",
                var, self.model_provider
            )));
        }

        if self.model_timeout_seconds == 0 {
            return Err(AppError::Configuration(
                "MODEL_TIMEOUT_SECONDS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            model_provider: ModelProvider::Gemini,
            model_name: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_key: SecretString::from("test_gemini_key".to_string()),
            gemini_api_base: "http://127.0.0.1:9".to_string(),
            openai_api_key: SecretString::from(String::new()),
            openai_api_base: "http://127.0.0.1:9".to_string(),
            model_timeout_seconds: 5,
            spreadsheet_id: None,
            google_credentials_path: "credentials.json".to_string(),
            allowed_origin: None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
