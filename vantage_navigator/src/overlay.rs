// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay dispatch: one overlay widget per modal path slot.
//!
//! ## Overview
//!
//! [`dispatch_overlays`] walks a [`RenderPlan`]'s slots in registry order and
//! hands each to an [`OverlayPresenter`], visible or not, together with the
//! shared focused-modal content, the dock style, and a [`DismissHandle`].
//!
//! Presenting an overlay never changes how its content is mounted. The content
//! is borrowed from the plan, whose mount states are owned by the
//! [engine](vantage_plan::engine); a slot being hidden only hides the overlay.

use alloc::rc::Rc;

use vantage_plan::engine::{OverlayContent, RenderPlan};
use vantage_plan::viewport::DockStyle;

/// Handle to the external "dismiss modal" action.
///
/// Shared by every slot of a navigator. Each call to [`DismissHandle::dismiss`]
/// invokes the action exactly once; how dismissal changes the location or the
/// stack is up to the action.
#[derive(Clone)]
pub struct DismissHandle {
    action: Rc<dyn Fn()>,
}

impl DismissHandle {
    /// Wrap a dismiss action.
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self {
            action: Rc::new(action),
        }
    }

    /// A handle whose action does nothing.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Request dismissal of the visible overlay.
    pub fn dismiss(&self) {
        tracing::debug!("overlay dismissal requested");
        (self.action)();
    }
}

impl core::fmt::Debug for DismissHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DismissHandle").finish_non_exhaustive()
    }
}

/// One overlay presentation request.
#[derive(Debug)]
pub struct Overlay<'a, N> {
    /// Registered path prefix identifying the slot.
    pub slot: &'a str,
    /// Whether the overlay is shown.
    pub visible: bool,
    /// Content to show inside the overlay.
    pub content: OverlayContent<'a, N>,
    /// Docking style chosen from the viewport class.
    pub dock: DockStyle,
    /// Registry position; higher is stacked on top.
    pub stacking: usize,
    /// Call when the user closes the overlay.
    pub on_dismiss: &'a DismissHandle,
}

/// The overlay widget seam.
///
/// Implemented by the toolkit. Called once per slot per render cycle.
pub trait OverlayPresenter<N> {
    /// Show, update or hide the overlay for `overlay.slot`.
    fn present(&mut self, overlay: Overlay<'_, N>);
}

/// Present every slot of `plan`, bottom of the stack first.
pub fn dispatch_overlays<N, P>(
    plan: &RenderPlan<N>,
    dock: DockStyle,
    dismiss: &DismissHandle,
    presenter: &mut P,
) where
    P: OverlayPresenter<N> + ?Sized,
{
    for slot in &plan.slots {
        presenter.present(Overlay {
            slot: &slot.path,
            visible: slot.visible,
            content: plan.content_for(slot),
            dock,
            stacking: slot.stacking,
            on_dismiss: dismiss,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::Cell;
    use vantage_plan::engine::compute_render_plan;
    use vantage_plan::matching::{MatchMode, ModalPathRegistry};
    use vantage_plan::types::{RouteDescriptor, RouteKind, StackState};

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(String, bool, Option<&'static str>, DockStyle, usize)>,
    }

    impl OverlayPresenter<&'static str> for Recorder {
        fn present(&mut self, o: Overlay<'_, &'static str>) {
            self.seen.push((
                o.slot.into(),
                o.visible,
                o.content.node().copied(),
                o.dock,
                o.stacking,
            ));
        }
    }

    fn plan(location: &str, paths: &[&str]) -> RenderPlan<&'static str> {
        let state = StackState::new(1, vec!["main".into(), "modal".into()]).unwrap();
        let d = vec![
            RouteDescriptor::new("main", RouteKind::Main, || "main"),
            RouteDescriptor::new("modal", RouteKind::Modal, || "modal"),
        ];
        let reg = ModalPathRegistry::new(paths.iter().copied()).unwrap();
        compute_render_plan(&state, &d, Some(location), &reg, MatchMode::Prefix).unwrap()
    }

    #[test]
    fn every_slot_is_presented_in_registry_order() {
        let p = plan("/b/1", &["a", "b"]);
        let mut r = Recorder::default();
        dispatch_overlays(&p, DockStyle::RightDocked, &DismissHandle::noop(), &mut r);
        assert_eq!(
            r.seen,
            vec![
                ("a".into(), false, Some("modal"), DockStyle::RightDocked, 0),
                ("b".into(), true, Some("modal"), DockStyle::RightDocked, 1),
            ]
        );
    }

    #[test]
    fn dismiss_fires_once_per_gesture_from_any_slot() {
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        let dismiss = DismissHandle::new(move || c.set(c.get() + 1));

        struct Closer;
        impl OverlayPresenter<&'static str> for Closer {
            fn present(&mut self, o: Overlay<'_, &'static str>) {
                if o.visible {
                    o.on_dismiss.dismiss();
                }
            }
        }

        let p = plan("/a", &["a", "b"]);
        dispatch_overlays(&p, DockStyle::FullScreen, &dismiss, &mut Closer);
        assert_eq!(calls.get(), 1);

        let p = plan("/b", &["a", "b"]);
        dispatch_overlays(&p, DockStyle::FullScreen, &dismiss, &mut Closer);
        assert_eq!(calls.get(), 2);
    }
}
