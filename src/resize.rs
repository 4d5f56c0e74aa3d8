use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::EventTarget;

/// Debounced `resize` listener.
///
/// Every event replaces the pending timer, so `on_settled` runs once per
/// quiet period of `delay_ms`. Dropping the subscription removes the listener
/// and cancels a pending call.
pub struct ResizeSubscription {
    listener: Option<EventListener>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl ResizeSubscription {
    pub fn new(target: &EventTarget, delay_ms: u32, on_settled: Rc<dyn Fn()>) -> Self {
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let pending_for_event = pending.clone();
        let listener = EventListener::new(target, "resize", move |_event| {
            let on_settled = on_settled.clone();
            let timeout = Timeout::new(delay_ms, move || on_settled());
            // Replacing the slot drops (and so cancels) the previous timer.
            pending_for_event.borrow_mut().replace(timeout);
        });
        Self {
            listener: Some(listener),
            pending,
        }
    }

    pub fn cancel(&mut self) {
        self.listener.take();
        self.pending.borrow_mut().take();
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
