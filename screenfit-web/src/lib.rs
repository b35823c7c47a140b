pub mod config;
pub mod dom;
pub mod listeners;
mod timer;
pub mod util;

use std::{cell::RefCell, rc::Rc};

use anyhow::anyhow;
use log::*;
use screenfit_core::{FitResult, Mode, Preference, Screen};
use wasm_bindgen::prelude::*;

use crate::{config::load_config, dom::WebEnvironment, listeners::ScreenListeners, util::Shared};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Fitted canvas size handed back to JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
    pub ratio: f64,
}

impl From<FitResult> for CanvasSize {
    fn from(size: FitResult) -> Self {
        Self {
            width: size.width(),
            height: size.height(),
            ratio: size.ratio(),
        }
    }
}

pub struct App {
    screen: Shared<Screen<WebEnvironment>>,
    _listeners: Option<ScreenListeners>,
}

impl App {
    pub fn install() -> anyhow::Result<Self> {
        let env = WebEnvironment::new()?;
        let config = load_config(env.document());
        let mut screen = Screen::new(config, env)?;
        let mode = screen.setup()?;
        let screen = Rc::new(RefCell::new(screen));
        // Mobile pages stay at device size, nothing to track.
        let listeners = match mode {
            Mode::Desktop => Some(ScreenListeners::register(screen.clone())),
            Mode::Mobile => None,
        };
        Ok(Self {
            screen,
            _listeners: listeners,
        })
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

fn with_screen<T>(
    func: impl FnOnce(&mut Screen<WebEnvironment>) -> anyhow::Result<T>,
) -> Result<T, JsValue> {
    APP.with(|app| {
        let app = app.borrow();
        let app = app
            .as_ref()
            .ok_or_else(|| anyhow!("screenfit is not installed"))?;
        let mut screen = app.screen.borrow_mut();
        func(&mut screen)
    })
    .map_err(|err| JsValue::from_str(&format!("{:#}", err)))
}

// This is like the `main` function, except for JavaScript.
#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    info!("start main");
    let app = App::install().map_err(|err| JsValue::from_str(&format!("{:#}", err)))?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    info!("installed screen listeners");
    Ok(())
}

/// Restyles the canvas to `width:height`. Returns `undefined` when the canvas
/// is not on the page.
#[wasm_bindgen]
pub fn set_custom_ratio(width: f64, height: f64) -> Result<Option<CanvasSize>, JsValue> {
    with_screen(|screen| Ok(screen.set_custom_ratio(width, height)?.map(CanvasSize::from)))
}

/// `preference` is one of `balanced`, `width-priority` or `height-priority`.
#[wasm_bindgen]
pub fn optimal_size(preference: Option<String>) -> Result<CanvasSize, JsValue> {
    with_screen(|screen| {
        let preference = match preference {
            Some(preference) => preference.parse()?,
            None => Preference::default(),
        };
        Ok(screen.optimal_size(preference)?.into())
    })
}
