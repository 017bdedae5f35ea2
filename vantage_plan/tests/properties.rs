// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for plan computation over generated stacks and locations.

use proptest::prelude::*;
use vantage_plan::engine::{OverlayContent, compute_render_plan};
use vantage_plan::matching::{MatchMode, ModalPathRegistry};
use vantage_plan::types::{MountState, RouteDescriptor, RouteKey, RouteKind, StackState};

/// A generated stack: route kinds (index 0 is always the main route), a
/// focused index, and the position the main route is moved to.
fn stack() -> impl Strategy<Value = (Vec<RouteKind>, usize, usize)> {
    prop::collection::vec(
        prop_oneof![Just(RouteKind::Modal), Just(RouteKind::Plain)],
        0..8,
    )
    .prop_flat_map(|rest| {
        let len = rest.len() + 1;
        (Just(rest), 0..len, 0..len)
    })
    .prop_map(|(rest, focused, main_at)| {
        let mut kinds = rest;
        kinds.insert(main_at, RouteKind::Main);
        (kinds, focused, main_at)
    })
}

fn location() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just(String::new()),
        "/?(r[0-9]|settings|details)(/[a-z0-9]{1,4}){0,2}",
    ])
}

fn mode() -> impl Strategy<Value = MatchMode> {
    prop_oneof![Just(MatchMode::Prefix), Just(MatchMode::ExactFirstSegment)]
}

fn build(kinds: &[RouteKind], focused: usize) -> (StackState, Vec<RouteDescriptor<String>>) {
    let keys: Vec<RouteKey> = (0..kinds.len()).map(|i| RouteKey::new(format!("r{i}"))).collect();
    let state = StackState::new(focused, keys.clone()).unwrap();
    let descriptors = keys
        .into_iter()
        .zip(kinds)
        .map(|(k, kind)| {
            let label = format!("<{k}>");
            RouteDescriptor::new(k, *kind, move || label.clone())
        })
        .collect();
    (state, descriptors)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Exactly one main node, always visible, whatever the location.
    #[test]
    fn main_route_is_always_present((kinds, focused, main_at) in stack(), loc in location(), mode in mode()) {
        let (state, descriptors) = build(&kinds, focused);
        let registry = ModalPathRegistry::new(["r1", "settings", "details"]).unwrap();
        let plan = compute_render_plan(&state, &descriptors, loc.as_deref(), &registry, mode).unwrap();

        prop_assert_eq!(plan.main.key.as_str(), format!("r{main_at}"));
        prop_assert_eq!(plan.main.mount, MountState::Visible);
        prop_assert_eq!(plan.routes().filter(|r| r.kind == RouteKind::Main).count(), 1);
    }

    /// Every modal is either hidden or the focused modal, never both, never omitted.
    #[test]
    fn modals_are_partitioned((kinds, focused, _) in stack(), loc in location(), mode in mode()) {
        let (state, descriptors) = build(&kinds, focused);
        let registry = ModalPathRegistry::new(["r1", "r2"]).unwrap();
        let plan = compute_render_plan(&state, &descriptors, loc.as_deref(), &registry, mode).unwrap();

        for (i, kind) in kinds.iter().enumerate() {
            if *kind != RouteKind::Modal {
                continue;
            }
            let key = RouteKey::new(format!("r{i}"));
            let in_hidden = plan.hidden.iter().any(|r| r.key == key);
            let is_focused = plan.focused_modal.as_ref().is_some_and(|r| r.key == key);
            prop_assert!(in_hidden != is_focused, "modal {key} must be in exactly one place");
            prop_assert_eq!(is_focused, i == focused);
        }
        // Nothing is dropped: every descriptor is planned.
        prop_assert_eq!(plan.routes().count(), kinds.len());
        prop_assert!(plan.routes().all(|r| r.mount != MountState::Unmounted));
    }

    /// Identical inputs give identical plans.
    #[test]
    fn planning_is_idempotent((kinds, focused, _) in stack(), loc in location(), mode in mode()) {
        let (state, descriptors) = build(&kinds, focused);
        let registry = ModalPathRegistry::new(["r1", "settings"]).unwrap();
        let a = compute_render_plan(&state, &descriptors, loc.as_deref(), &registry, mode).unwrap();
        let b = compute_render_plan(&state, &descriptors, loc.as_deref(), &registry, mode).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Visible slots all share the focused modal's node.
    #[test]
    fn visible_slots_share_content((kinds, focused, _) in stack(), loc in location()) {
        let (state, descriptors) = build(&kinds, focused);
        let registry = ModalPathRegistry::new(["r", "r1", "details"]).unwrap();
        let plan = compute_render_plan(&state, &descriptors, loc.as_deref(), &registry, MatchMode::Prefix).unwrap();

        for slot in plan.visible_slots() {
            match (&plan.focused_modal, plan.content_for(slot)) {
                (Some(m), OverlayContent::Node(n)) => prop_assert_eq!(n, &m.node),
                (None, OverlayContent::Placeholder) => {}
                (fm, content) => prop_assert!(false, "unexpected content {content:?} with focused modal {fm:?}"),
            }
        }
    }

    /// Nested matching never shows more than one slot for distinct single-segment prefixes.
    #[test]
    fn nested_mode_shows_at_most_one_slot(loc in location()) {
        let registry = ModalPathRegistry::new(["settings", "details", "r1", "r2"]).unwrap();
        let visible = registry
            .evaluate(loc.as_deref(), MatchMode::ExactFirstSegment)
            .filter(|(_, _, v)| *v)
            .count();
        prop_assert!(visible <= 1);
    }
}
