//! Leptos Debounce Utilities
//!
//! Single-slot cancellable delay for committing rapid input.
//! Scheduling while a timer is pending cancels and replaces it, so at
//! most one timer exists at any instant.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Single-slot debounce timer handle
#[derive(Clone, Copy)]
pub struct DebounceSlot {
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    delay_ms: u32,
}

impl DebounceSlot {
    /// Create an empty slot that fires `delay_ms` after the last `schedule`
    pub fn new(delay_ms: u32) -> Self {
        Self {
            timer: StoredValue::new_local(None),
            delay_ms,
        }
    }

    /// Schedule `on_fire`, cancelling any pending timer first
    pub fn schedule(&self, on_fire: impl FnOnce() + 'static) {
        let slot = self.timer;
        let timeout = Timeout::new(self.delay_ms, move || {
            slot.set_value(None);
            on_fire();
        });
        self.timer.update_value(|timer| {
            if let Some(pending) = timer.replace(timeout) {
                pending.cancel();
            }
        });
    }

    /// Cancel the pending timer, if any
    pub fn cancel(&self) {
        self.timer.update_value(|timer| {
            if let Some(pending) = timer.take() {
                pending.cancel();
            }
        });
    }
}
