use log::{info, warn};
use screenfit_core::ScreenConfig;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "screenfit-config";

/// Reads the page's config overrides. Falls back to the defaults when the
/// element is missing, empty, or holds invalid JSON.
pub fn load_config(document: &Document) -> ScreenConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return ScreenConfig::default();
    };
    if text.trim().is_empty() {
        return ScreenConfig::default();
    }
    match parse_config(&text) {
        Ok(config) => {
            info!("loaded config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(err) => {
            warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, err);
            ScreenConfig::default()
        }
    }
}

pub fn parse_config(text: &str) -> anyhow::Result<ScreenConfig> {
    let config: ScreenConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn overrides_are_merged_with_defaults() {
        let_assert!(Ok(config) = parse_config(r##"{ "canvas_selector": "#game", "margin": 0 }"##));
        check!(config.canvas_selector == "#game");
        check!(config.margin == 0.0);
        check!(config.resize_debounce_ms == 300);
    }

    #[test]
    fn invalid_values_are_rejected() {
        check!(let Err(_) = parse_config(r#"{ "target_height": 0 }"#));
        check!(let Err(_) = parse_config("not json"));
    }
}
