// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Navigator: responsive root and nested navigators over a generic stack router.
//!
//! ## Overview
//!
//! This crate wires three external collaborators to the [`vantage_plan`] engine:
//!
//! - a stack router, reached through [`StackBuilder`](crate::builder::StackBuilder), which owns
//!   push/pop/replace and reports the stack and its descriptors each cycle;
//! - a [`LocationSource`](crate::location::LocationSource), read once per cycle and subscribed to
//!   for change notifications;
//! - the toolkit, which implements [`Surface`](crate::navigator::Surface) to mount routes and
//!   [`OverlayPresenter`](crate::overlay::OverlayPresenter) to show overlay widgets.
//!
//! A [`Navigator`](crate::navigator::Navigator) is a stateless projection: every
//! [`render`](crate::navigator::Navigator::render) recomputes the plan from the router and the
//! location and mounts the result. The main route is mounted visible, every other route (the focused
//! modal included) is mounted hidden but live, and each registered modal path gets one overlay
//! showing the focused modal.
//!
//! ## Variants
//!
//! - [`Navigator::root`](crate::navigator::Navigator::root): slots match by location prefix.
//! - [`Navigator::nested`](crate::navigator::Navigator::nested): slots match the first path segment
//!   only.
//!
//! ## Dismissal
//!
//! Closing an overlay calls [`DismissHandle::dismiss`](crate::overlay::DismissHandle::dismiss),
//! which runs the external dismiss action once. The navigator does not decide how dismissal
//! changes the location or the stack.
//!
//! ## Example
//!
//! ```
//! use vantage_navigator::builder::{Built, RouteDecl, StackBuilder};
//! use vantage_navigator::location::LocationStore;
//! use vantage_navigator::navigator::{Navigator, Surface};
//! use vantage_navigator::overlay::{DismissHandle, Overlay, OverlayPresenter};
//! use vantage_plan::engine::PlannedRoute;
//! use vantage_plan::matching::ModalPathRegistry;
//! use vantage_plan::types::{RouteDescriptor, RouteKind, StackState};
//!
//! // A router that always reports `home` with `report` pushed on top.
//! struct Router;
//! impl StackBuilder<&'static str> for Router {
//!     type Descriptor = RouteDescriptor<&'static str>;
//!     type Navigation = ();
//!     fn build(&mut self, _: &[RouteDecl<&'static str>]) -> Built<Self::Descriptor, ()> {
//!         Built {
//!             state: StackState::new(1, vec!["home".into(), "report".into()]).unwrap(),
//!             navigation: (),
//!             descriptors: vec![
//!                 RouteDescriptor::new("home", RouteKind::Main, || "Home"),
//!                 RouteDescriptor::new("report", RouteKind::Modal, || "Report"),
//!             ],
//!         }
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//! impl Surface<&'static str> for Log {
//!     fn mount(&mut self, r: &PlannedRoute<&'static str>) {
//!         self.0.push(format!("mount {} {:?}", r.node, r.mount));
//!     }
//! }
//! impl OverlayPresenter<&'static str> for Log {
//!     fn present(&mut self, o: Overlay<'_, &'static str>) {
//!         self.0.push(format!("overlay {} visible={}", o.slot, o.visible));
//!     }
//! }
//!
//! let location = LocationStore::with_location("/details/9");
//! let nav = Navigator::root(
//!     vec![RouteDecl::main("home", "Home"), RouteDecl::modal("report", "Report")],
//!     ModalPathRegistry::new(["details"]).unwrap(),
//!     location,
//!     &true,
//!     DismissHandle::noop(),
//! )
//! .unwrap();
//!
//! let mut log = Log::default();
//! nav.render(&mut Router, &mut log).unwrap();
//! assert_eq!(
//!     log.0,
//!     ["mount Home Visible", "mount Report MountedHidden", "overlay details visible=true"]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod builder;
pub mod config;
pub mod location;
pub mod navigator;
pub mod overlay;
