use crate::Result;

/// The page: window size, user agent, the document head and element lookup.
pub trait Environment {
    type Target: Target;

    /// Inner `(width, height)` of the window in CSS pixels.
    fn window_size(&self) -> Result<(f64, f64)>;
    fn user_agent(&self) -> Result<String>;
    /// Appends `<meta name="viewport" content=...>` to the document head.
    fn install_viewport_meta(&self, content: &str) -> Result<()>;
    /// Looks up the canvas and its (optional) container.
    /// Fails with [`Error::ElementNotFound`] when the canvas is absent.
    ///
    /// [`Error::ElementNotFound`]: crate::Error::ElementNotFound
    fn find_target(&self, canvas_selector: &str, container_selector: &str)
        -> Result<Self::Target>;
}

/// The canvas being sized and the container wrapping it.
pub trait Target {
    /// Styled size, in CSS pixels.
    fn set_display_size(&mut self, width: u32, height: u32) -> Result<()>;
    /// Pixel buffer size of the canvas.
    fn set_backing_resolution(&mut self, width: u32, height: u32) -> Result<()>;
    /// Centers the container with an absolute 50% offset and a
    /// `translate(-50%, -50%)`, only when it carries `desktop_class`.
    fn center_container(&mut self, desktop_class: &str) -> Result<()>;
    fn set_mobile_class(&mut self, class: &str) -> Result<()>;
}
