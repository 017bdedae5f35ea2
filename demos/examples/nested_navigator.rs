// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root vs nested matching on a compact viewport.
//!
//! Renders the same stack through a root and a nested navigator while the
//! location walks through deeper paths, showing which overlay slots each
//! variant opens.
//!
//! Run:
//! - `cargo run -p vantage_demos --example nested_navigator`

use kurbo::Size;
use vantage_navigator::builder::{Built, RouteDecl, StackBuilder};
use vantage_navigator::location::LocationStore;
use vantage_navigator::navigator::{Navigator, Surface};
use vantage_navigator::overlay::{DismissHandle, Overlay, OverlayPresenter};
use vantage_plan::engine::PlannedRoute;
use vantage_plan::matching::ModalPathRegistry;
use vantage_plan::types::{RouteDescriptor, RouteKind, StackState};
use vantage_plan::viewport::FixedViewport;

struct FixedStack;

impl StackBuilder<()> for FixedStack {
    type Descriptor = RouteDescriptor<&'static str>;
    type Navigation = ();

    fn build(&mut self, _: &[RouteDecl<()>]) -> Built<Self::Descriptor, ()> {
        Built {
            state: StackState::new(1, vec!["workspaces".into(), "settings".into()]).unwrap(),
            navigation: (),
            descriptors: vec![
                RouteDescriptor::new("workspaces", RouteKind::Main, || "Workspaces"),
                RouteDescriptor::new("settings", RouteKind::Modal, || "Settings"),
            ],
        }
    }
}

#[derive(Default)]
struct OpenSlots(Vec<String>);

impl Surface<&'static str> for OpenSlots {
    fn mount(&mut self, _: &PlannedRoute<&'static str>) {}
}

impl OverlayPresenter<&'static str> for OpenSlots {
    fn present(&mut self, o: Overlay<'_, &'static str>) {
        if o.visible {
            self.0.push(format!("{} ({:?})", o.slot, o.dock));
        }
    }
}

fn main() {
    let location = LocationStore::new();
    let phone = FixedViewport::new(Size::new(390.0, 844.0));
    let children = || {
        vec![
            RouteDecl::main("workspaces", ()),
            RouteDecl::modal("settings", ()),
        ]
    };
    let registry = ModalPathRegistry::new(["settings", "settings/profile", "workspace"]).unwrap();

    let root = Navigator::root(
        children(),
        registry.clone(),
        location.clone(),
        &phone,
        DismissHandle::noop(),
    )
    .unwrap();
    let nested = Navigator::nested(
        children(),
        registry,
        location.clone(),
        &phone,
        DismissHandle::noop(),
    )
    .unwrap();

    for path in ["/settings", "/settings/profile", "/workspace/members", "/workspaces"] {
        location.set(path);
        let mut r = OpenSlots::default();
        let mut n = OpenSlots::default();
        root.render(&mut FixedStack, &mut r).unwrap();
        nested.render(&mut FixedStack, &mut n).unwrap();
        println!("{path:<20} root: {:?}", r.0);
        println!("{:<20} nested: {:?}", "", n.0);
    }
}
