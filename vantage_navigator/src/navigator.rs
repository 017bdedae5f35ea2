// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root and nested responsive navigators.
//!
//! ## Overview
//!
//! A [`Navigator`] ties a [`StackBuilder`], a [`LocationSource`] and the
//! presentation [`Engine`] together. Each call to [`Navigator::render`]:
//!
//! 1. asks the builder for the stack state and descriptors;
//! 2. reads the current location;
//! 3. computes a fresh [`RenderPlan`](vantage_plan::engine::RenderPlan);
//! 4. mounts the main route, the hidden routes and the focused modal through
//!    [`Surface::mount`];
//! 5. presents one overlay per registered modal path.
//!
//! Nothing from a previous cycle is reused. The only state a navigator keeps
//! between cycles is a staleness flag set by its location subscription.
//!
//! ## Variants
//!
//! [`NavigatorVariant::Root`] matches overlay slots by location prefix;
//! [`NavigatorVariant::Nested`] compares only the first path segment, so a
//! nested navigator ignores deeper path changes owned by another slot. The
//! variant is fixed at construction.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use vantage_plan::engine::{Engine, PlannedRoute};
use vantage_plan::error::ConfigError;
use vantage_plan::matching::{MatchMode, ModalPathRegistry};
use vantage_plan::types::{Descriptor, RouteKey, RouteKind};
use vantage_plan::viewport::{DockStyle, FixedViewport, ViewportClassifier};

use crate::builder::{RouteDecl, StackBuilder};
use crate::config::NavigatorConfig;
use crate::location::{LocationSource, Subscription};
use crate::overlay::{DismissHandle, OverlayPresenter, dispatch_overlays};

/// Which navigator flavor to build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavigatorVariant {
    /// Top-level navigator; slots match by location prefix.
    Root,
    /// Navigator nested inside another; slots match the first path segment.
    Nested,
}

impl NavigatorVariant {
    /// Match rule used by this variant.
    pub const fn match_mode(self) -> MatchMode {
        match self {
            Self::Root => MatchMode::Prefix,
            Self::Nested => MatchMode::ExactFirstSegment,
        }
    }
}

/// Consumer of planned routes.
///
/// [`MountState::Visible`](vantage_plan::types::MountState::Visible) routes go
/// inline; [`MountState::MountedHidden`](vantage_plan::types::MountState::MountedHidden)
/// routes go into a container with no layout footprint that is neither
/// focusable nor painted but keeps its children live. The focused modal is
/// always mounted hidden; it is drawn by the overlays, not by the surface.
pub trait Surface<N> {
    /// Mount `route` according to its mount state.
    fn mount(&mut self, route: &PlannedRoute<N>);
}

/// A responsive navigator over a generic stack router.
pub struct Navigator<C, L> {
    variant: NavigatorVariant,
    children: Vec<RouteDecl<C>>,
    engine: Engine,
    location: L,
    dock: DockStyle,
    dismiss: DismissHandle,
    stale: Rc<Cell<bool>>,
}

impl<C, L> core::fmt::Debug for Navigator<C, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Navigator")
            .field("variant", &self.variant)
            .field("children", &self.children.len())
            .field("engine", &self.engine)
            .field("dock", &self.dock)
            .finish_non_exhaustive()
    }
}

impl<C, L: LocationSource> Navigator<C, L> {
    /// Build a navigator.
    ///
    /// `viewport` is polled once, here; it fixes the overlay dock style for
    /// the navigator's lifetime. Fails if `children` does not declare exactly
    /// one main route, repeats a name, or marks a route both main and modal.
    pub fn new(
        variant: NavigatorVariant,
        children: Vec<RouteDecl<C>>,
        registry: ModalPathRegistry,
        location: L,
        viewport: &impl ViewportClassifier,
        dismiss: DismissHandle,
    ) -> Result<Self, ConfigError> {
        validate_children(&children)?;
        let dock = viewport.class().dock_style();
        tracing::debug!(
            ?variant,
            children = children.len(),
            slots = registry.len(),
            ?dock,
            "navigator created"
        );
        Ok(Self {
            variant,
            children,
            engine: Engine::new(registry, variant.match_mode()),
            location,
            dock,
            dismiss,
            stale: Rc::new(Cell::new(true)),
        })
    }

    /// Build a root navigator.
    pub fn root(
        children: Vec<RouteDecl<C>>,
        registry: ModalPathRegistry,
        location: L,
        viewport: &impl ViewportClassifier,
        dismiss: DismissHandle,
    ) -> Result<Self, ConfigError> {
        Self::new(NavigatorVariant::Root, children, registry, location, viewport, dismiss)
    }

    /// Build a nested navigator.
    pub fn nested(
        children: Vec<RouteDecl<C>>,
        registry: ModalPathRegistry,
        location: L,
        viewport: &impl ViewportClassifier,
        dismiss: DismissHandle,
    ) -> Result<Self, ConfigError> {
        Self::new(NavigatorVariant::Nested, children, registry, location, viewport, dismiss)
    }

    /// Build a navigator from a [`NavigatorConfig`] and a known viewport size.
    pub fn from_config(
        variant: NavigatorVariant,
        children: Vec<RouteDecl<C>>,
        config: &NavigatorConfig,
        location: L,
        viewport_size: kurbo::Size,
        dismiss: DismissHandle,
    ) -> Result<Self, ConfigError> {
        let viewport = FixedViewport {
            size: viewport_size,
            breakpoint: config.breakpoint(),
        };
        Self::new(variant, children, config.registry()?, location, &viewport, dismiss)
    }

    /// Navigator variant.
    pub fn variant(&self) -> NavigatorVariant {
        self.variant
    }

    /// Overlay dock style chosen at construction.
    pub fn dock_style(&self) -> DockStyle {
        self.dock
    }

    /// Declared child routes.
    pub fn children(&self) -> &[RouteDecl<C>] {
        &self.children
    }

    /// Listen for location changes; the navigator reports itself stale after
    /// each one until the next [`render`](Self::render).
    pub fn subscribe(&self) -> Subscription {
        let stale = Rc::clone(&self.stale);
        self.location.subscribe(move |_| stale.set(true))
    }

    /// Whether the location changed since the last render.
    ///
    /// Starts out `true` so the first cycle always renders.
    pub fn is_stale(&self) -> bool {
        self.stale.get()
    }

    /// Run one render cycle.
    ///
    /// Returns the builder's navigation handle untouched. Configuration errors
    /// are returned before anything is mounted or presented.
    pub fn render<B, S>(&self, builder: &mut B, surface: &mut S) -> Result<B::Navigation, ConfigError>
    where
        B: StackBuilder<C>,
        S: Surface<<B::Descriptor as Descriptor>::Node>
            + OverlayPresenter<<B::Descriptor as Descriptor>::Node>,
    {
        let _span = tracing::trace_span!("navigator_render", variant = ?self.variant).entered();
        let built = builder.build(&self.children);
        let location = self.location.current();
        let plan = self
            .engine
            .plan(&built.state, &built.descriptors, location.as_deref())?;

        for route in plan.routes() {
            surface.mount(route);
        }
        dispatch_overlays(&plan, self.dock, &self.dismiss, surface);

        self.stale.set(false);
        Ok(built.navigation)
    }
}

fn validate_children<C>(children: &[RouteDecl<C>]) -> Result<(), ConfigError> {
    let mut mains: Vec<&RouteKey> = Vec::new();
    for (i, child) in children.iter().enumerate() {
        if children[..i].iter().any(|c| c.name == child.name) {
            return Err(ConfigError::DuplicateRoute {
                key: child.name.clone(),
            });
        }
        if RouteKind::from_options(&child.name, child.options)? == RouteKind::Main {
            mains.push(&child.name);
        }
    }
    match mains.as_slice() {
        [] => Err(ConfigError::NoMainRoute {
            descriptors: children.len(),
        }),
        [_] => Ok(()),
        [first, second, ..] => Err(ConfigError::MultipleMainRoutes {
            count: mains.len(),
            first: (*first).clone(),
            second: (*second).clone(),
        }),
    }
}
