use screenfit_core::{Environment, Error, Result, Target};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, HtmlMetaElement, Window};

use crate::util::JsResultExt;

pub struct WebEnvironment {
    window: Window,
    document: Document,
}

impl WebEnvironment {
    pub fn new() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| Error::Environment("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| Error::Environment("window has no document".into()))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn as_number(value: wasm_bindgen::JsValue, what: &str) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| Error::Environment(format!("{} is not a number", what)))
}

impl Environment for WebEnvironment {
    type Target = CanvasTarget;

    fn window_size(&self) -> Result<(f64, f64)> {
        let width = as_number(self.window.inner_width().env_err("innerWidth")?, "innerWidth")?;
        let height = as_number(
            self.window.inner_height().env_err("innerHeight")?,
            "innerHeight",
        )?;
        Ok((width, height))
    }

    fn user_agent(&self) -> Result<String> {
        self.window.navigator().user_agent().env_err("userAgent")
    }

    fn install_viewport_meta(&self, content: &str) -> Result<()> {
        let meta: HtmlMetaElement = self
            .document
            .create_element("meta")
            .env_err("create meta")?
            .dyn_into()
            .map_err(|_| Error::Environment("created element is not a meta".into()))?;
        meta.set_name("viewport");
        meta.set_content(content);
        let head = self
            .document
            .head()
            .ok_or_else(|| Error::ElementNotFound("head".into()))?;
        head.append_child(&meta).env_err("append viewport meta")?;
        Ok(())
    }

    fn find_target(&self, canvas_selector: &str, container_selector: &str) -> Result<CanvasTarget> {
        let canvas = self
            .document
            .query_selector(canvas_selector)
            .env_err(canvas_selector)?
            .ok_or_else(|| Error::ElementNotFound(canvas_selector.into()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| Error::Environment(format!("{} is not a canvas", canvas_selector)))?;
        let container = self
            .document
            .query_selector(container_selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        Ok(CanvasTarget { canvas, container })
    }
}

pub struct CanvasTarget {
    canvas: HtmlCanvasElement,
    container: Option<HtmlElement>,
}

fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element
        .style()
        .set_property(property, value)
        .env_err(property)
}

impl Target for CanvasTarget {
    fn set_display_size(&mut self, width: u32, height: u32) -> Result<()> {
        set_style(&self.canvas, "width", &format!("{}px", width))?;
        set_style(&self.canvas, "height", &format!("{}px", height))
    }

    fn set_backing_resolution(&mut self, width: u32, height: u32) -> Result<()> {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Ok(())
    }

    fn center_container(&mut self, desktop_class: &str) -> Result<()> {
        let Some(container) = &self.container else {
            return Ok(());
        };
        if !container.class_list().contains(desktop_class) {
            return Ok(());
        }
        set_style(container, "left", "50%")?;
        set_style(container, "top", "50%")?;
        set_style(container, "transform", "translate(-50%, -50%)")
    }

    fn set_mobile_class(&mut self, class: &str) -> Result<()> {
        if let Some(container) = &self.container {
            container.set_class_name(class);
        }
        self.canvas.set_class_name(class);
        Ok(())
    }
}
