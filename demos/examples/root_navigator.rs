// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root navigator walkthrough.
//!
//! Loads a navigator config from JSON, drives a toy stack router through a
//! push, a location change and a dismissal, and prints every mount and
//! overlay call. Set `RUST_LOG=debug` to see the engine's own logs.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p vantage_demos --example root_navigator`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Size;
use tracing_subscriber::EnvFilter;
use vantage_navigator::builder::{Built, RouteDecl, StackBuilder};
use vantage_navigator::config::NavigatorConfig;
use vantage_navigator::location::LocationStore;
use vantage_navigator::navigator::{Navigator, NavigatorVariant, Surface};
use vantage_navigator::overlay::{DismissHandle, Overlay, OverlayPresenter};
use vantage_plan::engine::{OverlayContent, PlannedRoute};
use vantage_plan::types::{RouteDescriptor, RouteKey, RouteKind, StackState};

/// A minimal stack router: a shared list of pushed route names.
#[derive(Clone, Default)]
struct ToyRouter {
    stack: Rc<RefCell<Vec<RouteKey>>>,
}

impl ToyRouter {
    fn push(&self, key: &str) {
        self.stack.borrow_mut().push(key.into());
    }

    /// Pop the top route, never the root one.
    fn pop(&self) {
        let mut stack = self.stack.borrow_mut();
        if stack.len() > 1 {
            stack.pop();
        }
    }
}

impl StackBuilder<&'static str> for ToyRouter {
    type Descriptor = RouteDescriptor<String>;
    type Navigation = usize;

    fn build(&mut self, children: &[RouteDecl<&'static str>]) -> Built<Self::Descriptor, usize> {
        let stack = self.stack.borrow();
        let descriptors = stack
            .iter()
            .filter_map(|key| {
                let decl = children.iter().find(|c| c.name == *key)?;
                let kind = RouteKind::from_options(key, decl.options).ok()?;
                let component = decl.component;
                Some(RouteDescriptor::new(key.clone(), kind, move || {
                    format!("<{component}/>")
                }))
            })
            .collect();
        Built {
            state: StackState::new(stack.len().saturating_sub(1), stack.clone()).unwrap(),
            navigation: stack.len(),
            descriptors,
        }
    }
}

/// Prints what a toolkit would do.
struct Console;

impl Surface<String> for Console {
    fn mount(&mut self, route: &PlannedRoute<String>) {
        println!("    mount {:<8} {:<14} {}", route.key, format!("{:?}", route.mount), route.node);
    }
}

impl OverlayPresenter<String> for Console {
    fn present(&mut self, o: Overlay<'_, String>) {
        let content = match o.content {
            OverlayContent::Node(n) => n.as_str(),
            OverlayContent::Placeholder => "<placeholder/>",
            OverlayContent::Empty => "",
        };
        println!(
            "    overlay {:<8} visible={:<5} dock={:?} z={} {content}",
            o.slot, o.visible, o.dock, o.stacking
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config: NavigatorConfig =
        serde_json::from_str(r#"{ "modalPaths": ["details", "settings"], "breakpoint": 800 }"#)
            .unwrap();

    let router = ToyRouter::default();
    router.push("home");
    let location = LocationStore::new();

    // Dismissal pops the top route and returns to the root location.
    let dismiss = {
        let (router, location) = (router.clone(), location.clone());
        DismissHandle::new(move || {
            router.pop();
            location.set("/");
        })
    };

    let nav = Navigator::from_config(
        NavigatorVariant::Root,
        vec![
            RouteDecl::main("home", "Home"),
            RouteDecl::modal("details", "Details"),
            RouteDecl::modal("settings", "Settings"),
        ],
        &config,
        location.clone(),
        Size::new(1280.0, 800.0),
        dismiss.clone(),
    )
    .unwrap();
    let _subscription = nav.subscribe();
    let mut builder = router.clone();

    let mut frame = |label: &str| {
        println!("== {label} (stale={}) ==", nav.is_stale());
        let depth = nav.render(&mut builder, &mut Console).unwrap();
        println!("    stack depth {depth}");
    };

    frame("initial");

    // Location first, router one frame later: the slot shows a placeholder.
    location.set("/details/42");
    frame("location points at details");
    router.push("details");
    frame("router pushed details");

    dismiss.dismiss();
    frame("dismissed");

    // A second dismissal keeps the root route.
    dismiss.dismiss();
    frame("dismissed again");
}
