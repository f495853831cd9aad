pub mod cli;

/// Connection parameters for the storage service API, immutable per run.
#[derive(Debug, Clone)]
pub struct ApiContext {
    pub base_url: String,
    pub api_user: String,
    pub api_key: String,
}

impl ApiContext {
    pub fn new(base_url: &str, api_user: &str, api_key: &str) -> Self {
        Self {
            // 去掉結尾的 '/',端點組合時再補
            base_url: base_url.trim_end_matches('/').to_string(),
            api_user: api_user.to_string(),
            api_key: api_key.to_string(),
        }
    }
}
