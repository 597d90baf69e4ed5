use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::foundation::core::Progress;

/// Where the tall scroll container sits relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    /// Container top edge relative to the viewport top; negative once scrolled past.
    pub container_top: f64,
    pub container_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Container starting at the page top, `height_vh` percent of the viewport tall.
    pub fn for_scroll(scroll_y: f64, height_vh: f64, viewport_height: f64) -> Self {
        Self {
            container_top: -scroll_y,
            container_height: height_vh / 100.0 * viewport_height,
            viewport_height,
        }
    }

    /// `0` with the container's top at the viewport top, `1` with its bottom at the viewport
    /// bottom. A container that does not overflow the viewport reads as `0`.
    pub fn progress(&self) -> Progress {
        let travel = self.container_height - self.viewport_height;
        if !(travel.is_finite() && travel > 0.0) {
            return Progress::START;
        }
        Progress::new(-self.container_top / travel)
    }
}

type Callback = Box<dyn FnMut(Progress)>;

#[derive(Default)]
struct Inner {
    value: Progress,
    next_id: u64,
    subscribers: Vec<(u64, Callback)>,
    notifying: bool,
    dropped_while_notifying: Vec<u64>,
}

/// Single-threaded publisher of the progress scalar.
///
/// Every subscriber of one notification sees the same sampled value. Values set from inside a
/// callback are stored but not re-broadcast until the next external `set`.
#[derive(Clone, Default)]
pub struct ProgressSource {
    inner: Rc<RefCell<Inner>>,
}

impl std::fmt::Debug for ProgressSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ProgressSource")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl ProgressSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Progress {
        self.inner.borrow().value
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Store `value` and notify subscribers if it differs from the last sample.
    pub fn set(&self, value: Progress) -> bool {
        let mut subscribers = {
            let mut inner = self.inner.borrow_mut();
            if inner.value.same_sample(value) {
                return false;
            }
            inner.value = value;
            if inner.notifying {
                return false;
            }
            inner.notifying = true;
            std::mem::take(&mut inner.subscribers)
        };

        for (_, callback) in &mut subscribers {
            callback(value);
        }

        let mut inner = self.inner.borrow_mut();
        let dropped = std::mem::take(&mut inner.dropped_while_notifying);
        subscribers.retain(|(id, _)| !dropped.contains(id));
        // Keep subscribers added during the callbacks after the existing ones.
        subscribers.append(&mut inner.subscribers);
        inner.subscribers = subscribers;
        inner.notifying = false;
        true
    }

    pub fn update(&self, metrics: &ScrollMetrics) -> bool {
        self.set(metrics.progress())
    }

    /// Register `callback`; it stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl FnMut(Progress) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(callback)));
        Subscription {
            source: Rc::downgrade(&self.inner),
            id,
        }
    }
}

/// Unsubscribes on drop.
pub struct Subscription {
    source: Weak<RefCell<Inner>>,
    id: u64,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(shared) = self.source.upgrade() else {
            return;
        };
        let Ok(mut inner) = shared.try_borrow_mut() else {
            return;
        };
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(id, _)| *id != self.id);
        if inner.notifying && inner.subscribers.len() == before {
            inner.dropped_while_notifying.push(self.id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/source.rs"]
mod tests;
