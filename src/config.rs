use std::env;
use std::path::PathBuf;

/// Client-side configuration, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the generation service, without the `/api/generate` path.
    pub api_base: String,
    /// Provider label sent along with prompt-mode requests.
    pub provider: String,
    /// Directory where downloaded ZIP archives are written.
    pub download_dir: PathBuf,
}

const DEFAULT_API_BASE: &str = "http://127.0.0.1:3000";
const DEFAULT_PROVIDER: &str = "gemini";

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let api_base = env::var("MINISITE_API_BASE")
            .ok()
            .and_then(|raw| match url::Url::parse(&raw) {
                Ok(_) => Some(raw.trim_end_matches('/').to_string()),
                Err(e) => {
                    log::warn!("ignoring invalid MINISITE_API_BASE: {}", e);
                    None
                }
            })
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self {
            api_base,
            provider: env::var("MINISITE_PROVIDER").unwrap_or_else(|_| DEFAULT_PROVIDER.to_string()),
            download_dir: env::var("MINISITE_DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            provider: DEFAULT_PROVIDER.to_string(),
            download_dir: PathBuf::from("."),
        }
    }
}
