use std::{cell::RefCell, fmt::Display, rc::Rc};

use log::error;
use screenfit_core::Error;
use wasm_bindgen::JsValue;

pub type Shared<T> = Rc<RefCell<T>>;

pub trait ResultExt<T, E> {
    fn log_err(self) -> Self
    where
        E: Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn log_err(self) -> Self
    where
        E: Display,
    {
        if let Err(err) = &self {
            error!("{}", err);
        }
        self
    }
}

/// Turns a failed DOM call into an [`Error::Environment`].
pub trait JsResultExt<T> {
    fn env_err(self, what: &str) -> Result<T, Error>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn env_err(self, what: &str) -> Result<T, Error> {
        self.map_err(|err| Error::Environment(format!("{}: {:?}", what, err)))
    }
}
