use super::Config;

const API_KEY_VARS: [&str; 4] = [
    "BRANDPULSE_API_KEY",
    "GEMINI_API_KEY",
    "GOOGLE_API_KEY",
    "API_KEY",
];

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Some(key) = API_KEY_VARS.iter().find_map(|var| non_empty_env(var)) {
            self.api_key = Some(key);
        }

        if let Some(base) = non_empty_env("BRANDPULSE_API_BASE") {
            self.api_base = base.trim_end_matches('/').to_string();
        }

        if let Some(model) = non_empty_env("BRANDPULSE_TEXT_MODEL") {
            self.text_model = model;
        }

        if let Some(model) = non_empty_env("BRANDPULSE_IMAGE_MODEL") {
            self.image_model = model;
        }
    }
}
