// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay slot matching.
//!
//! ## Overview
//!
//! A [`ModalPathRegistry`] lists the path prefixes that own an overlay slot.
//! A [`MatchMode`] decides, from the current location, which slots are visible.
//!
//! ## Rules
//!
//! - One leading `/` is stripped from the location before matching.
//! - An absent or empty location matches no slot.
//! - [`MatchMode::Prefix`]: a slot is visible iff the stripped location equals
//!   its prefix or continues it with a `/`. Several slots may be visible at
//!   once; registry order is their stacking order.
//! - [`MatchMode::ExactFirstSegment`]: a slot is visible iff the first path
//!   segment of the stripped location equals its prefix.
//!
//! ```
//! use vantage_plan::matching::MatchMode;
//!
//! assert!(MatchMode::Prefix.matches(Some("/details/report/123"), "details/report"));
//! assert!(!MatchMode::Prefix.matches(Some("/details/report/123"), "detail"));
//! assert!(!MatchMode::Prefix.matches(Some("/details/report/123"), "details/reportX"));
//! assert!(MatchMode::ExactFirstSegment.matches(Some("settings/profile"), "settings"));
//! assert!(!MatchMode::ExactFirstSegment.matches(Some("settings/profile"), "settings/profile"));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ConfigError;

/// Rule deciding whether an overlay slot is visible for a location.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// The stripped location is the slot's prefix or lies below it, on a
    /// segment boundary (root navigators).
    Prefix,
    /// The first segment of the stripped location equals the slot's prefix
    /// (nested navigators).
    ExactFirstSegment,
}

impl MatchMode {
    /// Whether a slot registered under `prefix` is visible at `location`.
    pub fn matches(self, location: Option<&str>, prefix: &str) -> bool {
        let Some(path) = normalize(location) else {
            return false;
        };
        match self {
            Self::Prefix => match path.strip_prefix(prefix) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            },
            Self::ExactFirstSegment => first_segment(path) == prefix,
        }
    }

    /// Whether a visible slot with no focused modal should show an empty
    /// placeholder rather than no content at all.
    ///
    /// Root navigators see the location change one frame before the router
    /// pushes the modal's route; the placeholder covers that frame.
    pub const fn placeholder_when_absent(self) -> bool {
        matches!(self, Self::Prefix)
    }
}

/// Strip one leading separator; `None` for an absent or empty location.
pub fn normalize(location: Option<&str>) -> Option<&str> {
    let loc = location?;
    let path = loc.strip_prefix('/').unwrap_or(loc);
    (!path.is_empty()).then_some(path)
}

/// First `/`-separated segment of an already-normalized path.
pub fn first_segment(path: &str) -> &str {
    path.split('/').next().unwrap_or(path)
}

/// Ordered list of path prefixes, each owning one overlay slot.
///
/// Order is significant: it is the order slots are presented in, and so their
/// stacking order when more than one is visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalPathRegistry {
    paths: Vec<String>,
}

impl ModalPathRegistry {
    /// Build a registry, rejecting empty or repeated prefixes.
    pub fn new<I, S>(paths: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for p in paths {
            let p = p.into();
            if p.is_empty() {
                return Err(ConfigError::EmptyModalPath);
            }
            if out.contains(&p) {
                return Err(ConfigError::DuplicateModalPath { path: p });
            }
            out.push(p);
        }
        Ok(Self { paths: out })
    }

    /// Prefixes in registry order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the registry has no slots.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate `(stacking, prefix, visible)` for every slot.
    pub fn evaluate<'a>(
        &'a self,
        location: Option<&'a str>,
        mode: MatchMode,
    ) -> impl Iterator<Item = (usize, &'a str, bool)> + 'a {
        self.paths
            .iter()
            .enumerate()
            .map(move |(i, p)| (i, p.as_str(), mode.matches(location, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn prefix_boundaries() {
        let loc = Some("/details/report/123");
        assert!(MatchMode::Prefix.matches(loc, "details"));
        assert!(!MatchMode::Prefix.matches(loc, "detail"));
        assert!(MatchMode::Prefix.matches(loc, "details/report"));
        assert!(!MatchMode::Prefix.matches(loc, "details/reportX"));
        assert!(!MatchMode::Prefix.matches(loc, "report"));
    }

    #[test]
    fn prefix_matches_whole_path_and_deeper_segments() {
        assert!(MatchMode::Prefix.matches(Some("/details"), "details"));
        assert!(MatchMode::Prefix.matches(Some("details/"), "details"));
        assert!(!MatchMode::Prefix.matches(Some("/detailsX/1"), "details"));
        assert!(!MatchMode::Prefix.matches(Some("/details"), "details/report"));
    }

    #[test]
    fn first_segment_is_compared_exactly() {
        let loc = Some("settings/profile");
        assert!(MatchMode::ExactFirstSegment.matches(loc, "settings"));
        assert!(!MatchMode::ExactFirstSegment.matches(loc, "workspace"));
        assert!(!MatchMode::ExactFirstSegment.matches(loc, "setting"));
        assert!(!MatchMode::ExactFirstSegment.matches(loc, "settings/profile"));
        assert!(MatchMode::ExactFirstSegment.matches(Some("/settings"), "settings"));
    }

    #[test]
    fn empty_location_matches_nothing() {
        for mode in [MatchMode::Prefix, MatchMode::ExactFirstSegment] {
            assert!(!mode.matches(None, "a"));
            assert!(!mode.matches(Some(""), "a"));
            assert!(!mode.matches(Some("/"), "a"));
        }
    }

    #[test]
    fn only_one_separator_is_stripped() {
        assert_eq!(normalize(Some("//a")), Some("/a"));
        assert_eq!(normalize(Some("a/b")), Some("a/b"));
        assert_eq!(normalize(Some("/")), None);
    }

    #[test]
    fn registry_rejects_bad_prefixes() {
        assert_eq!(
            ModalPathRegistry::new(["a", ""]),
            Err(ConfigError::EmptyModalPath)
        );
        assert_eq!(
            ModalPathRegistry::new(["a", "b", "a"]),
            Err(ConfigError::DuplicateModalPath { path: "a".into() })
        );
        let r = ModalPathRegistry::new(["a", "b"]).unwrap();
        assert_eq!(r.len(), 2);
        assert!(!r.is_empty());
    }

    #[test]
    fn evaluate_keeps_registry_order() {
        let r = ModalPathRegistry::new(["settings", "workspace"]).unwrap();
        let out: Vec<_> = r
            .evaluate(Some("settings/profile"), MatchMode::ExactFirstSegment)
            .collect();
        assert_eq!(out, vec![(0, "settings", true), (1, "workspace", false)]);
    }
}
