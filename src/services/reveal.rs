//! One-shot scroll reveal bookkeeping.
//!
//! Elements start out tagged with the hidden class. The first time one
//! crosses the viewport threshold it gets the visible class and stops being
//! observed; it is never hidden again.

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be inside the viewport.
    pub threshold: f64,
    /// Bottom root margin in pixels. Negative values shrink the viewport so
    /// elements reveal a bit after they first peek in.
    pub bottom_margin_px: i32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: -100,
        }
    }
}

impl RevealOptions {
    /// `rootMargin` string for `IntersectionObserverInit`.
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin_px)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealClasses {
    pub hidden: String,
    pub visible: String,
}

impl Default for RevealClasses {
    fn default() -> Self {
        Self {
            hidden: "scroll-hidden".to_string(),
            visible: "scroll-show".to_string(),
        }
    }
}

impl RevealClasses {
    pub fn new(hidden: impl Into<String>, visible: impl Into<String>) -> Self {
        Self {
            hidden: hidden.into(),
            visible: visible.into(),
        }
    }

    /// CSS selector matching every element still waiting to be revealed.
    pub fn selector(&self) -> String {
        format!(".{}", self.hidden)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Reveal {
    /// Add the visible class and stop observing the element.
    Show,
    Ignore,
}

#[derive(Debug)]
pub struct RevealTracker<K> {
    observed: HashSet<K>,
}

impl<K> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            observed: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the key was already being observed.
    pub fn observe(&mut self, key: K) -> bool {
        self.observed.insert(key)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    pub fn on_intersection(&mut self, key: &K, intersecting: bool) -> Reveal {
        if intersecting && self.observed.remove(key) {
            Reveal::Show
        } else {
            Reveal::Ignore
        }
    }

    /// Stops observing everything, returning the keys that were still
    /// pending so their observer registrations can be dropped.
    pub fn release(&mut self) -> Vec<K> {
        self.observed.drain().collect()
    }
}
