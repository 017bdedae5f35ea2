// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport classification and overlay docking.
//!
//! Wide viewports dock modal overlays to the side of the main route; compact
//! viewports present them full screen. Navigators poll a
//! [`ViewportClassifier`] once, when they are constructed.

use kurbo::Size;

/// Width above which a viewport counts as wide, in logical pixels.
pub const DEFAULT_BREAKPOINT: f64 = 800.0;

/// Viewport size class.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    /// Narrow viewport, typically a phone.
    Compact,
    /// Wide viewport, typically a tablet or desktop window.
    Wide,
}

impl ViewportClass {
    /// Docking style for modal overlays in this class.
    pub const fn dock_style(self) -> DockStyle {
        match self {
            Self::Compact => DockStyle::FullScreen,
            Self::Wide => DockStyle::RightDocked,
        }
    }
}

/// Where an overlay is placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DockStyle {
    /// Docked to the right edge, leaving the main route visible.
    RightDocked,
    /// Covers the whole viewport.
    FullScreen,
}

/// Width threshold separating compact from wide viewports.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Breakpoint {
    /// Threshold width; a viewport must be strictly wider to count as wide.
    pub width: f64,
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self {
            width: DEFAULT_BREAKPOINT,
        }
    }
}

impl Breakpoint {
    /// Classify a viewport size. NaN widths classify as compact.
    pub fn classify(self, size: Size) -> ViewportClass {
        if size.width > self.width {
            ViewportClass::Wide
        } else {
            ViewportClass::Compact
        }
    }
}

/// Capability query for the current viewport.
pub trait ViewportClassifier {
    /// Whether the viewport is wide.
    fn is_wide(&self) -> bool;

    /// Size class of the viewport.
    fn class(&self) -> ViewportClass {
        if self.is_wide() {
            ViewportClass::Wide
        } else {
            ViewportClass::Compact
        }
    }
}

impl ViewportClassifier for bool {
    fn is_wide(&self) -> bool {
        *self
    }
}

/// A viewport of known size, classified against a breakpoint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedViewport {
    /// Viewport size in logical pixels.
    pub size: Size,
    /// Threshold used for classification.
    pub breakpoint: Breakpoint,
}

impl FixedViewport {
    /// A viewport of `size` against the default breakpoint.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            breakpoint: Breakpoint::default(),
        }
    }
}

impl ViewportClassifier for FixedViewport {
    fn is_wide(&self) -> bool {
        self.breakpoint.classify(self.size) == ViewportClass::Wide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        let bp = Breakpoint::default();
        assert_eq!(bp.classify(Size::new(800.0, 600.0)), ViewportClass::Compact);
        assert_eq!(bp.classify(Size::new(800.5, 600.0)), ViewportClass::Wide);
        assert_eq!(bp.classify(Size::new(f64::NAN, 1.0)), ViewportClass::Compact);
    }

    #[test]
    fn fixed_viewport_classifies_against_its_breakpoint() {
        let phone = FixedViewport::new(Size::new(390.0, 844.0));
        assert!(!phone.is_wide());
        assert_eq!(phone.class().dock_style(), DockStyle::FullScreen);

        let tablet = FixedViewport {
            size: Size::new(700.0, 1000.0),
            breakpoint: Breakpoint { width: 600.0 },
        };
        assert!(tablet.is_wide());
        assert_eq!(tablet.class().dock_style(), DockStyle::RightDocked);
    }

    #[test]
    fn bool_is_a_classifier() {
        assert_eq!(true.class(), ViewportClass::Wide);
        assert_eq!(false.class(), ViewportClass::Compact);
    }
}
