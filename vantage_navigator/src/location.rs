// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Location sources: where navigators read the current path from.
//!
//! ## Overview
//!
//! The current location is owned by an external store. Navigators read it
//! through [`LocationSource::current`] once per render cycle and register
//! interest in changes with [`LocationSource::subscribe`]. The returned
//! [`Subscription`] unsubscribes when dropped, so listener lifetime follows
//! whoever holds it.
//!
//! [`LocationStore`] is a small in-memory observable that implements the trait.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use vantage_navigator::location::{LocationSource, LocationStore};
//!
//! let store = LocationStore::new();
//! let seen = Rc::new(Cell::new(0));
//! let s = seen.clone();
//! let sub = store.subscribe(move |_| s.set(s.get() + 1));
//!
//! store.set("/details/1");
//! assert_eq!(store.current().as_deref(), Some("/details/1"));
//! drop(sub);
//! store.set("/");
//! assert_eq!(seen.get(), 1);
//! ```

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

/// Listener called with the new location after every change.
pub type LocationListener = Rc<dyn Fn(Option<&str>)>;

/// Read-only view of the current location plus change notifications.
pub trait LocationSource {
    /// Current location, if any.
    fn current(&self) -> Option<String>;

    /// Register `listener` for location changes until the returned
    /// [`Subscription`] is dropped.
    fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&str>) + 'static;
}

/// Handle keeping a listener registered.
///
/// Dropping it (or calling [`Subscription::unsubscribe`]) removes the listener.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// A subscription that runs `cancel` when it ends.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to cancel, for sources that never change.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Remove the listener now.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

#[derive(Default)]
struct StoreInner {
    location: Option<String>,
    listeners: Vec<(u64, LocationListener)>,
    next_id: u64,
}

/// In-memory observable location.
///
/// Clones share the same state. Listeners are notified in subscription order,
/// after the new value is stored, and may read the store from inside the
/// callback.
#[derive(Clone, Default)]
pub struct LocationStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl core::fmt::Debug for LocationStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("LocationStore")
            .field("location", &inner.location)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl LocationStore {
    /// An empty store with no location.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store starting at `location`.
    pub fn with_location(location: impl Into<String>) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().location = Some(location.into());
        store
    }

    /// Replace the location and notify listeners.
    pub fn set(&self, location: impl Into<String>) {
        self.replace(Some(location.into()));
    }

    /// Clear the location and notify listeners.
    pub fn clear(&self) {
        self.replace(None);
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn replace(&self, location: Option<String>) {
        // Release the borrow before calling out; listeners may read the store.
        let listeners: Vec<LocationListener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.location == location {
                return;
            }
            inner.location = location.clone();
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        tracing::trace!(location = ?location, listeners = listeners.len(), "location changed");
        for l in listeners {
            l(location.as_deref());
        }
    }
}

impl LocationSource for LocationStore {
    fn current(&self) -> Option<String> {
        self.inner.borrow().location.clone()
    }

    fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&str>) + 'static,
    {
        let listener: LocationListener = Rc::new(listener);
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener));
            id
        };
        let weak: Weak<RefCell<StoreInner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(i, _)| *i != id);
            }
        })
    }
}
