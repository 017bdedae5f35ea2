// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stack router seam.
//!
//! Navigators never push, pop or replace routes themselves. They hand their
//! child declarations to a [`StackBuilder`] every cycle and get back the
//! router's current [`StackState`], its descriptor table, and an opaque
//! navigation handle that is passed through untouched.

use alloc::vec::Vec;

use vantage_plan::types::{Descriptor, RouteKey, RouteOptions, StackState};

/// Declaration of one child route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDecl<C> {
    /// Route name; used as the route key by simple routers.
    pub name: RouteKey,
    /// Toolkit component rendered for the route.
    pub component: C,
    /// Declarative classification.
    pub options: RouteOptions,
}

impl<C> RouteDecl<C> {
    /// Declare a route with explicit options.
    pub fn new(name: impl Into<RouteKey>, component: C, options: RouteOptions) -> Self {
        Self {
            name: name.into(),
            component,
            options,
        }
    }

    /// Declare the main route.
    pub fn main(name: impl Into<RouteKey>, component: C) -> Self {
        Self::new(name, component, RouteOptions::MAIN)
    }

    /// Declare a modal route.
    pub fn modal(name: impl Into<RouteKey>, component: C) -> Self {
        Self::new(name, component, RouteOptions::MODAL)
    }

    /// Declare a route that is neither main nor modal.
    pub fn plain(name: impl Into<RouteKey>, component: C) -> Self {
        Self::new(name, component, RouteOptions::default())
    }
}

/// What a stack router reports for one cycle.
#[derive(Debug)]
pub struct Built<D, Nav> {
    /// Focused index and routes.
    pub state: StackState,
    /// Opaque navigation handle.
    pub navigation: Nav,
    /// One descriptor per route on the stack.
    pub descriptors: Vec<D>,
}

/// A generic stack router, driven once per render cycle.
pub trait StackBuilder<C> {
    /// Descriptor type the router produces.
    type Descriptor: Descriptor;
    /// Navigation handle passed back to the caller untouched.
    type Navigation;

    /// Report the router's current state for `children`.
    fn build(&mut self, children: &[RouteDecl<C>]) -> Built<Self::Descriptor, Self::Navigation>;
}
