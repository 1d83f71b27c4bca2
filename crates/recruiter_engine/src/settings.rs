use std::time::Duration;

use url::Url;

/// Address of the local backend the controller talks to.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: Url,
    /// `None` leaves connection setup unbounded.
    pub connect_timeout: Option<Duration>,
    /// `None` lets a request stay pending until the backend answers.
    pub request_timeout: Option<Duration>,
}

impl BackendSettings {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            connect_timeout: None,
            request_timeout: None,
        }
    }

    /// Resolves an endpoint path below the base address, keeping any base path prefix.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, url::ParseError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path.trim_start_matches('/'))
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        let base_url = Url::parse(DEFAULT_BACKEND_URL).expect("default backend url is valid");
        Self::new(base_url)
    }
}
