//! Cancel-on-reschedule debouncing.
//!
//! A [`Debouncer`] delays a callback until `delay` has passed without another
//! [`Debouncer::schedule`] call. Each schedule cancels the pending timer before
//! starting a new one, so only the last value in a burst is delivered.
//!
//! Timers come from a [`TimerDriver`]: `GlooTimers` in the browser, where
//! dropping a `Timeout` cancels it, and [`ManualTimers`] in tests, where time
//! only moves when the test calls [`ManualTimers::advance`].

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Starts one-shot timers. Dropping the returned handle must cancel the timer.
pub trait TimerDriver {
    type Handle;

    fn start(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Delivers the last scheduled value once the input goes quiet.
pub struct Debouncer<D: TimerDriver, T> {
    driver: D,
    delay: Duration,
    callback: Rc<dyn Fn(T)>,
    /// Live timer plus a flag its closure sets once the value is delivered.
    pending: Option<(D::Handle, Rc<Cell<bool>>)>,
}

impl<D: TimerDriver, T: 'static> Debouncer<D, T> {
    pub fn new(driver: D, delay: Duration, callback: impl Fn(T) + 'static) -> Self {
        Self { driver, delay, callback: Rc::new(callback), pending: None }
    }

    /// Cancel any pending call and schedule `value` after the delay.
    pub fn schedule(&mut self, value: T) {
        self.cancel();
        let callback = Rc::clone(&self.callback);
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let handle = self.driver.start(
            self.delay,
            Box::new(move || {
                flag.set(true);
                callback(value);
            }),
        );
        self.pending = Some((handle, fired));
    }

    /// Drop the pending call, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a scheduled value has not been delivered or cancelled yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|(_, fired)| !fired.get())
    }
}

struct ManualTimer {
    id: u64,
    due_ms: u128,
    fire: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualClock {
    now_ms: u128,
    next_id: u64,
    timers: Vec<ManualTimer>,
}

/// Deterministic timer driver for tests and non-browser builds.
#[derive(Clone, Default)]
pub struct ManualTimers {
    clock: Rc<RefCell<ManualClock>>,
}

/// Handle for a [`ManualTimers`] timer; dropping it cancels the timer.
pub struct ManualHandle {
    id: u64,
    clock: Rc<RefCell<ManualClock>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Ok(mut clock) = self.clock.try_borrow_mut() {
            clock.timers.retain(|t| t.id != self.id);
        }
    }
}

impl ManualTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Move time forward and fire every timer that came due, in due order.
    pub fn advance(&self, by: Duration) {
        let due = {
            let mut clock = self.clock.borrow_mut();
            clock.now_ms += by.as_millis();
            let now = clock.now_ms;
            let (mut due, waiting): (Vec<_>, Vec<_>) = clock.timers.drain(..).partition(|t| t.due_ms <= now);
            clock.timers = waiting;
            due.sort_by_key(|t| (t.due_ms, t.id));
            due
        };
        for timer in due {
            (timer.fire)();
        }
    }
}

impl TimerDriver for ManualTimers {
    type Handle = ManualHandle;

    fn start(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        clock.next_id += 1;
        let id = clock.next_id;
        let due_ms = clock.now_ms + delay.as_millis();
        clock.timers.push(ManualTimer { id, due_ms, fire });
        ManualHandle { id, clock: Rc::clone(&self.clock) }
    }
}

/// Browser timers backed by `gloo_timers::callback::Timeout`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimers;

#[cfg(feature = "hydrate")]
impl TimerDriver for GlooTimers {
    type Handle = gloo_timers::callback::Timeout;

    fn start(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Self::Handle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, fire)
    }
}
