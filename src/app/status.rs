use crate::config::Config;
use crate::ui::style::Ink;

pub fn render_status(config: &Config) -> String {
    let key_state = if config.api_key.is_some() {
        Ink::Good.paint("configured")
    } else {
        Ink::Warn.paint("missing (set GEMINI_API_KEY)")
    };
    let timeout = config
        .request_timeout_secs
        .map_or_else(|| "none".to_string(), |secs| format!("{secs}s"));
    let retries = if config.reliability.max_retries == 0 {
        "disabled".to_string()
    } else {
        format!(
            "{} (base backoff {}ms)",
            config.reliability.max_retries, config.reliability.base_backoff_ms
        )
    };

    [
        format!("◆ {}", Ink::Title.paint("BrandPulse status")),
        String::new(),
        format!("  Version      {}", env!("CARGO_PKG_VERSION")),
        format!("  Config       {}", config.config_path.display()),
        String::new(),
        format!("  API base     {}", config.api_base),
        format!("  API key      {key_state}"),
        format!("  Text model   {}", config.text_model),
        format!("  Image model  {}", config.image_model),
        format!("  Timeout      {timeout}"),
        format!("  Retries      {retries}"),
    ]
    .join("\n")
}
