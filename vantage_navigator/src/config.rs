// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigator configuration.
//!
//! Enable the `serde` feature to load a [`NavigatorConfig`] from a
//! configuration file. Missing fields fall back to their defaults.

use alloc::string::String;
use alloc::vec::Vec;

use vantage_plan::error::ConfigError;
use vantage_plan::matching::ModalPathRegistry;
use vantage_plan::viewport::{Breakpoint, DEFAULT_BREAKPOINT};

/// Static settings for one navigator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct NavigatorConfig {
    /// Modal path prefixes, one overlay slot each, in stacking order.
    pub modal_paths: Vec<String>,
    /// Width above which the viewport counts as wide.
    pub breakpoint: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            modal_paths: Vec::new(),
            breakpoint: DEFAULT_BREAKPOINT,
        }
    }
}

impl NavigatorConfig {
    /// Validated registry for [`NavigatorConfig::modal_paths`].
    pub fn registry(&self) -> Result<ModalPathRegistry, ConfigError> {
        ModalPathRegistry::new(self.modal_paths.iter().cloned())
    }

    /// Breakpoint for [`NavigatorConfig::breakpoint`].
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint {
            width: self.breakpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn defaults() {
        let c = NavigatorConfig::default();
        assert!(c.registry().unwrap().is_empty());
        assert_eq!(c.breakpoint().width, 800.0);
    }

    #[test]
    fn registry_errors_surface() {
        let c = NavigatorConfig {
            modal_paths: vec!["a".into(), "a".into()],
            ..NavigatorConfig::default()
        };
        assert_eq!(
            c.registry(),
            Err(ConfigError::DuplicateModalPath { path: "a".into() })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_with_defaults() {
        let c: NavigatorConfig =
            serde_json::from_str(r#"{ "modalPaths": ["details", "settings"] }"#).unwrap();
        assert_eq!(c.modal_paths, vec![String::from("details"), String::from("settings")]);
        assert_eq!(c.breakpoint, 800.0);

        let c: NavigatorConfig = serde_json::from_str(r#"{ "breakpoint": 1024 }"#).unwrap();
        assert!(c.modal_paths.is_empty());
        assert_eq!(c.breakpoint().width, 1024.0);
    }
}
