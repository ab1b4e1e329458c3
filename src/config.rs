/// Where the backend lives when `SHAREFOODS_API_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
}

impl Config {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Base URL baked in by the build (Trunk forwards the shell env to cargo).
    pub fn from_build_env() -> Self {
        Self::new(option_env!("SHAREFOODS_API_URL").unwrap_or(DEFAULT_API_BASE))
    }

    /// `GET` target for the backend root.
    pub fn status_url(&self) -> String {
        format!("{}/", self.api_base.trim_end_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
