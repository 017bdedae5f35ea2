// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plan basics.
//!
//! Computes render plans for one stack under a handful of locations, with
//! both match modes, and prints what would be mounted and shown.
//!
//! Run:
//! - `cargo run -p vantage_demos --example plan_basics`

use vantage_plan::engine::{Engine, OverlayContent};
use vantage_plan::matching::{MatchMode, ModalPathRegistry};
use vantage_plan::types::{RouteDescriptor, RouteKind, StackState};

fn main() {
    let state = StackState::new(
        2,
        vec!["home".into(), "settings".into(), "report".into()],
    )
    .unwrap();
    let descriptors = vec![
        RouteDescriptor::new("home", RouteKind::Main, || "Home"),
        RouteDescriptor::new("settings", RouteKind::Modal, || "Settings"),
        RouteDescriptor::new("report", RouteKind::Modal, || "Report"),
    ];
    let registry = ModalPathRegistry::new(["details", "details/report", "settings"]).unwrap();

    for mode in [MatchMode::Prefix, MatchMode::ExactFirstSegment] {
        let engine = Engine::new(registry.clone(), mode);
        println!("== {mode:?} ==");
        for location in [None, Some("/"), Some("/details/report/123"), Some("settings/profile")] {
            let plan = engine.plan(&state, &descriptors, location).unwrap();
            println!("  location={location:?}");
            println!("    main:   {} ({:?})", plan.main.node, plan.main.mount);
            for r in &plan.hidden {
                println!("    hidden: {} ({:?})", r.node, r.mount.flags());
            }
            if let Some(m) = &plan.focused_modal {
                println!("    focused modal: {} ({:?})", m.node, m.mount);
            }
            for slot in &plan.slots {
                let content = match plan.content_for(slot) {
                    OverlayContent::Node(n) => *n,
                    OverlayContent::Placeholder => "<placeholder>",
                    OverlayContent::Empty => "<empty>",
                };
                println!(
                    "    slot {:>2} {:<16} visible={:<5} content={content}",
                    slot.stacking, slot.path, slot.visible
                );
            }
        }
    }
}
