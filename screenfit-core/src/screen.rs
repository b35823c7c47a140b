use log::{debug, info};

use crate::{
    device::MobileDetector, fit_scaled, fit_with_preference, Environment, Error, FitResult,
    Preference, Result, ScreenConfig, Target, PREFERENCE_SCALE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Mobile,
    Desktop,
}

/// Keeps the canvas sized to the window.
pub struct Screen<E: Environment> {
    config: ScreenConfig,
    env: E,
    detector: MobileDetector,
}

impl<E: Environment> Screen<E> {
    pub fn new(config: ScreenConfig, env: E) -> Result<Self> {
        config.validate()?;
        let detector = MobileDetector::new(&config.mobile_tokens)?;
        Ok(Self {
            config,
            env,
            detector,
        })
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Picks the mode from the user agent and prepares the page for it.
    /// Desktop pages are sized immediately.
    pub fn setup(&mut self) -> Result<Mode> {
        let user_agent = self.env.user_agent()?;
        let mode = if self.detector.is_mobile(&user_agent) {
            self.enter_mobile()?;
            Mode::Mobile
        } else {
            self.update_size()?;
            Mode::Desktop
        };
        info!("screen mode: {:?}", mode);
        Ok(mode)
    }

    fn enter_mobile(&mut self) -> Result<()> {
        self.env.install_viewport_meta(&self.config.viewport_content)?;
        match self.find_target()? {
            Some(mut target) => target.set_mobile_class(&self.config.mobile_class),
            None => Ok(()),
        }
    }

    fn find_target(&self) -> Result<Option<E::Target>> {
        let config = &self.config;
        match self
            .env
            .find_target(&config.canvas_selector, &config.container_selector)
        {
            Ok(target) => Ok(Some(target)),
            Err(Error::ElementNotFound(selector)) => {
                debug!("{} is not on the page, skipping", selector);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Fits the canvas to the current window. Does nothing and returns
    /// `Ok(None)` when the canvas is not on the page.
    pub fn update_size(&mut self) -> Result<Option<FitResult>> {
        let Some(mut target) = self.find_target()? else {
            return Ok(None);
        };
        let (width, height) = self.env.window_size()?;
        let size = self.config.fit_params().fit(width, height)?;
        info!(
            "set canvas size: {}x{} (ratio: {:.3})",
            size.width(),
            size.height(),
            size.ratio()
        );
        target.set_display_size(size.width(), size.height())?;
        target.set_backing_resolution(size.width(), size.height())?;
        target.center_container(&self.config.desktop_class)?;
        Ok(Some(size))
    }

    /// Size the canvas would get under `preference`, without applying it.
    pub fn optimal_size(&self, preference: Preference) -> Result<FitResult> {
        let (width, height) = self.env.window_size()?;
        fit_with_preference(width, height, &self.config.fit_params(), preference)
    }

    /// Restyles the canvas to `width:height` at 90% of the fitted size.
    /// The backing resolution is left as is.
    pub fn set_custom_ratio(&mut self, width: f64, height: f64) -> Result<Option<FitResult>> {
        if !(width > 0.0 && height > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "ratio must be positive, got {width}:{height}"
            )));
        }
        let Some(mut target) = self.find_target()? else {
            return Ok(None);
        };
        let (window_width, window_height) = self.env.window_size()?;
        let size = fit_scaled(window_width, window_height, width / height, PREFERENCE_SCALE)?;
        target.set_display_size(size.width(), size.height())?;
        Ok(Some(size))
    }
}
