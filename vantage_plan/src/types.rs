// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: route keys and kinds, stack state, descriptors, and mount states.
//!
//! ## Overview
//!
//! These types describe what the stack router hands to the engine and what the
//! engine hands back. They are referenced by the [`engine`](crate::engine) and
//! by downstream navigators.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ConfigError;

/// Unique key of a route on the stack.
///
/// Keys are assigned by the stack router when a route is pushed and stay
/// stable until it is popped.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteKey(String);

impl RouteKey {
    /// Create a key from anything string-like.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteKey {
    fn from(key: &str) -> Self {
        Self(key.into())
    }
}

impl From<String> for RouteKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl core::fmt::Display for RouteKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static classification of a route.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// The single route rendered as primary full-screen content.
    Main,
    /// A route presented through an overlay slot.
    Modal,
    /// Any other route; kept mounted but never shown by this layer.
    #[default]
    Plain,
}

impl RouteKind {
    /// Classify a route from its declarative option flags.
    ///
    /// Returns [`ConfigError::ConflictingRouteKind`] when both flags are set.
    pub fn from_options(key: &RouteKey, options: RouteOptions) -> Result<Self, ConfigError> {
        match (options.is_main_route, options.is_modal_route) {
            (true, true) => Err(ConfigError::ConflictingRouteKind { key: key.clone() }),
            (true, false) => Ok(Self::Main),
            (false, true) => Ok(Self::Modal),
            (false, false) => Ok(Self::Plain),
        }
    }
}

/// Declarative route options, as written by whoever assembles the route tree.
///
/// Converted once into a [`RouteKind`] with [`RouteKind::from_options`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Render this route as the primary full-screen view.
    pub is_main_route: bool,
    /// Present this route through an overlay slot.
    pub is_modal_route: bool,
}

impl RouteOptions {
    /// Options for the main route.
    pub const MAIN: Self = Self {
        is_main_route: true,
        is_modal_route: false,
    };

    /// Options for a modal route.
    pub const MODAL: Self = Self {
        is_main_route: false,
        is_modal_route: true,
    };
}

/// Snapshot of the stack router's state for one render cycle.
///
/// Invariants (checked by [`StackState::new`] and again by the engine):
/// - `routes` is non-empty;
/// - `focused_index < routes.len()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackState {
    focused_index: usize,
    routes: Vec<RouteKey>,
}

impl StackState {
    /// Create a validated stack state.
    pub fn new(focused_index: usize, routes: Vec<RouteKey>) -> Result<Self, ConfigError> {
        let state = Self {
            focused_index,
            routes,
        };
        state.validate()?;
        Ok(state)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.routes.is_empty() {
            return Err(ConfigError::EmptyStack);
        }
        if self.focused_index >= self.routes.len() {
            return Err(ConfigError::FocusOutOfRange {
                index: self.focused_index,
                len: self.routes.len(),
            });
        }
        Ok(())
    }

    /// Index of the focused route.
    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    /// Routes in stack order, bottom first.
    pub fn routes(&self) -> &[RouteKey] {
        &self.routes
    }

    /// Key of the focused route.
    pub fn focused(&self) -> &RouteKey {
        &self.routes[self.focused_index]
    }

    /// Whether a route with `key` is on the stack.
    pub fn contains(&self, key: &RouteKey) -> bool {
        self.routes.iter().any(|k| k == key)
    }
}

/// A route's render capability plus its static classification.
///
/// Implement this for your own descriptor table entries, or use
/// [`RouteDescriptor`].
pub trait Descriptor {
    /// Rendered output produced by [`Descriptor::render`].
    type Node;
    /// Key of the route this descriptor belongs to.
    fn key(&self) -> &RouteKey;
    /// Static classification of the route.
    fn kind(&self) -> RouteKind;
    /// Produce the route's content for this cycle.
    ///
    /// Must be called on every update cycle for every mounted route, or the
    /// route's internal state falls out of sync with the navigation tree.
    fn render(&self) -> Self::Node;
}

/// A descriptor backed by a boxed render closure.
pub struct RouteDescriptor<N> {
    key: RouteKey,
    kind: RouteKind,
    render: Box<dyn Fn() -> N>,
}

impl<N> RouteDescriptor<N> {
    /// Create a descriptor.
    pub fn new(key: impl Into<RouteKey>, kind: RouteKind, render: impl Fn() -> N + 'static) -> Self {
        Self {
            key: key.into(),
            kind,
            render: Box::new(render),
        }
    }
}

impl<N> core::fmt::Debug for RouteDescriptor<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<N> Descriptor for RouteDescriptor<N> {
    type Node = N;

    fn key(&self) -> &RouteKey {
        &self.key
    }

    fn kind(&self) -> RouteKind {
        self.kind
    }

    fn render(&self) -> N {
        (self.render)()
    }
}

/// How a planned node is mounted.
///
/// The engine only ever produces [`Visible`](MountState::Visible) and
/// [`MountedHidden`](MountState::MountedHidden); unmounting is left to the
/// stack router popping a route.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MountState {
    /// Laid out, focusable, painted and live.
    Visible,
    /// Live but with no layout footprint, not focusable and not painted.
    MountedHidden,
    /// Not mounted.
    Unmounted,
}

impl MountState {
    /// Presentation capabilities implied by this state.
    pub const fn flags(self) -> PresentFlags {
        match self {
            Self::Visible => PresentFlags::all(),
            Self::MountedHidden => PresentFlags::LIVE,
            Self::Unmounted => PresentFlags::empty(),
        }
    }
}

bitflags::bitflags! {
    /// Presentation capabilities of a mounted node.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PresentFlags: u8 {
        /// Node takes part in layout.
        const LAYOUT    = 0b0000_0001;
        /// Node can receive input focus.
        const FOCUSABLE = 0b0000_0010;
        /// Node is painted.
        const PAINTED   = 0b0000_0100;
        /// Node keeps its state and subscriptions alive.
        const LIVE      = 0b0000_1000;
    }
}
