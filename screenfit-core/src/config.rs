use serde::{Deserialize, Serialize};

use crate::{Error, FitParams, Result};

pub const DEFAULT_VIEWPORT_CONTENT: &str =
    "width=device-width, height=device-height, initial-scale=1.0, user-scalable=no, shrink-to-fit=yes";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub target_width: f64,
    pub target_height: f64,
    pub margin: f64,
    pub min_width: f64,
    pub min_height: f64,
    pub resize_debounce_ms: u32,
    pub fullscreen_delay_ms: u32,
    pub canvas_selector: String,
    pub container_selector: String,
    pub desktop_class: String,
    pub mobile_class: String,
    pub viewport_content: String,
    pub mobile_tokens: Vec<String>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            target_width: 720.0,
            target_height: 1280.0,
            margin: 20.0,
            min_width: 320.0,
            min_height: 568.0,
            resize_debounce_ms: 300,
            fullscreen_delay_ms: 100,
            canvas_selector: "#unity-canvas".into(),
            container_selector: "#unity-container".into(),
            desktop_class: "unity-desktop".into(),
            mobile_class: "unity-mobile".into(),
            viewport_content: DEFAULT_VIEWPORT_CONTENT.into(),
            mobile_tokens: ["iPhone", "iPad", "iPod", "Android"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ScreenConfig {
    pub fn target_ratio(&self) -> f64 {
        self.target_width / self.target_height
    }

    pub fn fit_params(&self) -> FitParams {
        FitParams {
            target_ratio: self.target_ratio(),
            margin: self.margin,
            min_width: self.min_width,
            min_height: self.min_height,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.target_width > 0.0 && self.target_height > 0.0)
            || !self.target_ratio().is_finite()
        {
            return Err(Error::InvalidArgument(format!(
                "target size must be positive, got {}x{}",
                self.target_width, self.target_height
            )));
        }
        for (name, value) in [
            ("margin", self.margin),
            ("min_width", self.min_width),
            ("min_height", self.min_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
