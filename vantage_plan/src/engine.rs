// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation engine.
//!
//! ## Overview
//!
//! Turns one snapshot of `(stack state, descriptors, location)` into a
//! [`RenderPlan`]. The computation is pure: the only side effect is calling
//! each descriptor's [`render`](crate::types::Descriptor::render) exactly once.
//!
//! ## Steps
//!
//! 1. Validate the stack state and the descriptor table.
//! 2. Select the single [`Main`](crate::types::RouteKind::Main) route.
//! 3. Split modal routes into the focused modal (the one whose key is the
//!    focused route) and background modals.
//! 4. Evaluate every registry slot with the engine's [`MatchMode`].
//! 5. Render every descriptor. The main route is visible; every other route,
//!    the focused modal included, is mounted hidden. The focused modal reaches
//!    the screen only as overlay content.
//!
//! ## See Also
//!
//! [`matching`](crate::matching) for the slot rules.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ConfigError;
use crate::matching::{MatchMode, ModalPathRegistry};
use crate::types::{Descriptor, MountState, RouteKey, RouteKind, StackState};

/// One rendered route in a plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedRoute<N> {
    /// Route key.
    pub key: RouteKey,
    /// Route classification.
    pub kind: RouteKind,
    /// How the consumer should mount the node.
    pub mount: MountState,
    /// Output of the descriptor's render call for this cycle.
    pub node: N,
}

/// Visibility of one overlay slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotPlan {
    /// Registered path prefix identifying the slot.
    pub path: String,
    /// Whether the slot is shown this cycle.
    pub visible: bool,
    /// Position in the registry; higher is stacked on top.
    pub stacking: usize,
}

/// Content handed to an overlay slot.
#[derive(Debug, PartialEq, Eq)]
pub enum OverlayContent<'a, N> {
    /// The focused modal's node, shared by every slot.
    Node(&'a N),
    /// An empty stand-in while the router catches up with the location.
    Placeholder,
    /// Nothing to show.
    Empty,
}

// Only holds `&N`, so copying must not require `N: Copy`.
impl<N> Clone for OverlayContent<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for OverlayContent<'_, N> {}

impl<'a, N> OverlayContent<'a, N> {
    /// The node, if there is one.
    pub fn node(self) -> Option<&'a N> {
        match self {
            Self::Node(n) => Some(n),
            Self::Placeholder | Self::Empty => None,
        }
    }
}

/// What to draw for one render cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderPlan<N> {
    /// The main route, always visible.
    pub main: PlannedRoute<N>,
    /// Background modals and plain routes, mounted hidden, in descriptor order.
    pub hidden: Vec<PlannedRoute<N>>,
    /// The focused route, when it is a modal route. Always mounted hidden;
    /// overlays borrow its node through [`RenderPlan::content_for`].
    pub focused_modal: Option<PlannedRoute<N>>,
    /// Every registry slot, in registry order.
    pub slots: Vec<SlotPlan>,
    /// Rule the slots were evaluated with.
    pub mode: MatchMode,
}

impl<N> RenderPlan<N> {
    /// Content for `slot`.
    ///
    /// Every slot shares the focused modal's node. Without a focused modal, a
    /// visible slot gets a placeholder under [`MatchMode::Prefix`] and nothing
    /// under [`MatchMode::ExactFirstSegment`].
    pub fn content_for(&self, slot: &SlotPlan) -> OverlayContent<'_, N> {
        match &self.focused_modal {
            Some(m) => OverlayContent::Node(&m.node),
            None if slot.visible && self.mode.placeholder_when_absent() => {
                OverlayContent::Placeholder
            }
            None => OverlayContent::Empty,
        }
    }

    /// Slots shown this cycle, bottom of the stack first.
    pub fn visible_slots(&self) -> impl Iterator<Item = &SlotPlan> {
        self.slots.iter().filter(|s| s.visible)
    }

    /// Every planned route: main, then hidden, then the focused modal.
    pub fn routes(&self) -> impl Iterator<Item = &PlannedRoute<N>> {
        core::iter::once(&self.main)
            .chain(self.hidden.iter())
            .chain(self.focused_modal.iter())
    }
}

/// Presentation engine bound to a registry and a match rule.
///
/// Holds no per-cycle state: [`Engine::plan`] can be called any number of
/// times and always recomputes from its inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    registry: ModalPathRegistry,
    mode: MatchMode,
}

impl Engine {
    /// Create an engine.
    pub fn new(registry: ModalPathRegistry, mode: MatchMode) -> Self {
        Self { registry, mode }
    }

    /// Registry this engine evaluates.
    pub fn registry(&self) -> &ModalPathRegistry {
        &self.registry
    }

    /// Match rule in use.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Compute the plan for one cycle.
    pub fn plan<D: Descriptor>(
        &self,
        state: &StackState,
        descriptors: &[D],
        location: Option<&str>,
    ) -> Result<RenderPlan<D::Node>, ConfigError> {
        compute_render_plan(state, descriptors, location, &self.registry, self.mode)
    }
}

/// Compute the render plan for one cycle.
///
/// Fails only on configuration errors: an invalid stack state, duplicated or
/// orphaned descriptors, or anything other than exactly one main route.
pub fn compute_render_plan<D: Descriptor>(
    state: &StackState,
    descriptors: &[D],
    location: Option<&str>,
    registry: &ModalPathRegistry,
    mode: MatchMode,
) -> Result<RenderPlan<D::Node>, ConfigError> {
    let _span = tracing::trace_span!("compute_render_plan").entered();
    validate(state, descriptors)?;

    let slots: Vec<SlotPlan> = registry
        .evaluate(location, mode)
        .map(|(stacking, path, visible)| SlotPlan {
            path: path.into(),
            visible,
            stacking,
        })
        .collect();
    let focused = state.focused();

    let mut main = None;
    let mut hidden = Vec::new();
    let mut focused_modal = None;
    for d in descriptors {
        let key = d.key().clone();
        match d.kind() {
            RouteKind::Main => {
                main = Some(PlannedRoute {
                    key,
                    kind: RouteKind::Main,
                    mount: MountState::Visible,
                    node: d.render(),
                });
            }
            RouteKind::Modal if key == *focused => {
                focused_modal = Some(PlannedRoute {
                    key,
                    kind: RouteKind::Modal,
                    mount: MountState::MountedHidden,
                    node: d.render(),
                });
            }
            kind @ (RouteKind::Modal | RouteKind::Plain) => hidden.push(PlannedRoute {
                key,
                kind,
                mount: MountState::MountedHidden,
                node: d.render(),
            }),
        }
    }

    let Some(main) = main else {
        return Err(ConfigError::NoMainRoute {
            descriptors: descriptors.len(),
        });
    };

    if focused_modal.is_none() && mode.placeholder_when_absent() {
        for s in slots.iter().filter(|s| s.visible) {
            tracing::debug!(
                slot = %s.path,
                "overlay slot visible before its modal route is on the stack; using placeholder"
            );
        }
    }

    tracing::debug!(
        main = %main.key,
        focused = %focused,
        focused_modal = focused_modal.is_some(),
        hidden = hidden.len(),
        visible_slots = slots.iter().filter(|s| s.visible).count(),
        "computed render plan"
    );

    Ok(RenderPlan {
        main,
        hidden,
        focused_modal,
        slots,
        mode,
    })
}

fn validate<D: Descriptor>(state: &StackState, descriptors: &[D]) -> Result<(), ConfigError> {
    state.validate()?;

    let mut first_main: Option<&RouteKey> = None;
    let mut second_main: Option<&RouteKey> = None;
    let mut mains = 0;
    for (i, d) in descriptors.iter().enumerate() {
        let key = d.key();
        if descriptors[..i].iter().any(|o| o.key() == key) {
            return Err(ConfigError::DuplicateRoute { key: key.clone() });
        }
        if !state.contains(key) {
            return Err(ConfigError::UnknownRoute { key: key.clone() });
        }
        if d.kind() == RouteKind::Main {
            mains += 1;
            match (first_main, second_main) {
                (None, _) => first_main = Some(key),
                (Some(_), None) => second_main = Some(key),
                _ => {}
            }
        }
    }

    match (first_main, second_main) {
        (None, _) => Err(ConfigError::NoMainRoute {
            descriptors: descriptors.len(),
        }),
        (Some(first), Some(second)) => Err(ConfigError::MultipleMainRoutes {
            count: mains,
            first: first.clone(),
            second: second.clone(),
        }),
        (Some(_), None) => Ok(()),
    }
}
