use crate::constants;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub image_path: String,
    pub image_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: std::env::var(constants::ENV_API_URL)
                .unwrap_or_else(|_| constants::DEFAULT_API_URL.to_string()),
            image_path: std::env::var(constants::ENV_IMAGE_PATH)
                .unwrap_or_else(|_| constants::DEFAULT_IMAGE_PATH.to_string()),
            image_url: std::env::var(constants::ENV_IMAGE_URL)
                .unwrap_or_else(|_| constants::DEFAULT_IMAGE_URL.to_string()),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies CLI overrides on top of the environment values.
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        image_path: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if let Some(image_path) = image_path {
            self.image_path = image_path;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }
        self
    }
}
