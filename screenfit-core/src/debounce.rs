//! Last-write-wins debouncing over an arbitrary timer.

/// Schedules one-shot callbacks. Dropping the returned handle must cancel
/// the callback if it has not run yet.
pub trait Timer {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct Debouncer<T: Timer> {
    timer: T,
    delay_ms: u32,
    pending: Option<T::Handle>,
}

impl<T: Timer> Debouncer<T> {
    pub fn new(timer: T, delay_ms: u32) -> Self {
        Self {
            timer,
            delay_ms,
            pending: None,
        }
    }

    /// Runs `callback` after the delay, cancelling whatever was pending.
    pub fn call(&mut self, callback: impl FnOnce() + 'static) {
        // Drop first so the old timeout is cleared before the new one is set.
        self.pending.take();
        self.pending = Some(self.timer.schedule(self.delay_ms, Box::new(callback)));
    }

    pub fn cancel(&mut self) {
        self.pending.take();
    }
}
