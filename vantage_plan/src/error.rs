// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! Every variant describes a wiring mistake in the route tree handed to the
//! engine or the navigator. None of them are transient: the caller is expected
//! to surface them immediately (for example through an error boundary) rather
//! than retry.

use alloc::string::String;

use crate::types::RouteKey;

/// A fatal configuration error in the route tree or the modal path registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No descriptor is marked as the main route.
    #[error("no main route among {descriptors} descriptors")]
    NoMainRoute {
        /// Number of descriptors that were inspected.
        descriptors: usize,
    },

    /// More than one descriptor is marked as the main route.
    #[error("expected exactly one main route, found {count} ({first} and {second} among them)")]
    MultipleMainRoutes {
        /// Number of main routes found.
        count: usize,
        /// First main route in table order.
        first: RouteKey,
        /// Second main route in table order.
        second: RouteKey,
    },

    /// A route declares itself both main and modal.
    #[error("route {key} is declared both main and modal")]
    ConflictingRouteKind {
        /// The offending route.
        key: RouteKey,
    },

    /// A descriptor's key does not appear in the stack's routes.
    #[error("descriptor {key} has no matching route on the stack")]
    UnknownRoute {
        /// The orphaned descriptor key.
        key: RouteKey,
    },

    /// Two descriptors (or two child declarations) share a key.
    #[error("route key {key} is used more than once")]
    DuplicateRoute {
        /// The repeated key.
        key: RouteKey,
    },

    /// The stack state has no routes.
    #[error("stack state has no routes")]
    EmptyStack,

    /// The focused index points past the end of the route list.
    #[error("focused index {index} is out of range for {len} routes")]
    FocusOutOfRange {
        /// Focused index as reported by the router.
        index: usize,
        /// Number of routes on the stack.
        len: usize,
    },

    /// A modal path prefix is registered twice.
    #[error("modal path {path:?} is registered more than once")]
    DuplicateModalPath {
        /// The repeated prefix.
        path: String,
    },

    /// A modal path prefix is empty and would match every location.
    #[error("modal path prefixes must not be empty")]
    EmptyModalPath,
}
