use gloo::timers::callback::Timeout;
use screenfit_core::debounce::Timer;

/// Browser `setTimeout`; dropping the handle clears it.
#[derive(Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}
