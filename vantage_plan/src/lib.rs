// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Plan: a deterministic, `no_std` render-plan engine for responsive stack navigation.
//!
//! ## Overview
//!
//! A stack router keeps an ordered list of routes and a focused index. This crate decides, for one
//! render cycle, how those routes are presented:
//!
//! - exactly one [`Main`](crate::types::RouteKind::Main) route is shown full screen;
//! - [`Modal`](crate::types::RouteKind::Modal) routes are shown through overlay slots, one slot per
//!   registered path prefix;
//! - everything else stays mounted but hidden, so in-flight state (form input, scroll position,
//!   pending data) survives navigating away and back.
//!
//! It does not mutate the stack and it does not draw anything.
//! Feed it a [`StackState`](crate::types::StackState), a descriptor table, and the current
//! location, and it returns a [`RenderPlan`](crate::engine::RenderPlan) you can hand to your toolkit.
//!
//! ## Matching
//!
//! Which overlay slots are visible depends on the [`MatchMode`](crate::matching::MatchMode):
//! root navigators use a textual prefix match on the location, nested navigators compare only the
//! first path segment. See [`matching`](crate::matching).
//!
//! ## Mount states
//!
//! Every node in a plan carries a [`MountState`](crate::types::MountState). The engine only
//! produces `Visible` and `MountedHidden`; it never asks for a route to be unmounted.
//! [`MountState::flags`](crate::types::MountState::flags) spells out what each state means for
//! layout, focus and painting.
//!
//! ## Viewports
//!
//! [`viewport`](crate::viewport) classifies a viewport as compact or wide against a
//! [`Breakpoint`](crate::viewport::Breakpoint) and picks the overlay
//! [`DockStyle`](crate::viewport::DockStyle) accordingly.
//!
//! ## Example
//!
//! ```
//! use vantage_plan::engine::{Engine, OverlayContent};
//! use vantage_plan::matching::{MatchMode, ModalPathRegistry};
//! use vantage_plan::types::{MountState, RouteDescriptor, RouteKind, StackState};
//!
//! let engine = Engine::new(ModalPathRegistry::new(["details"]).unwrap(), MatchMode::Prefix);
//! let state = StackState::new(1, vec!["home".into(), "report".into()]).unwrap();
//! let descriptors = vec![
//!     RouteDescriptor::new("home", RouteKind::Main, || "home screen"),
//!     RouteDescriptor::new("report", RouteKind::Modal, || "report screen"),
//! ];
//!
//! let plan = engine.plan(&state, &descriptors, Some("/details/42")).unwrap();
//! assert_eq!(plan.main.node, "home screen");
//! assert_eq!(plan.focused_modal.as_ref().unwrap().mount, MountState::MountedHidden);
//! assert_eq!(plan.content_for(&plan.slots[0]), OverlayContent::Node(&"report screen"));
//! ```
//!
//! ## Errors
//!
//! Malformed route trees (no main route, several main routes, descriptors that are not on the
//! stack) are reported as [`ConfigError`](crate::error::ConfigError). They are wiring mistakes and
//! are not meant to be retried.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod engine;
pub mod error;
pub mod matching;
pub mod types;
pub mod viewport;
