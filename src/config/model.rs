//! Configuration data structures
//!
//! This module contains the theme used by the diagram renderers.

use std::collections::HashMap;

use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::constants::{
    COMPLETE_COLOR, DECISION_COLOR, END_COLOR, ROLE_COLORS, START_COLOR, UNKNOWN_ROLE_COLOR,
};
use crate::diagram::Direction;

/// Built-in role colours, consulted after the configured ones
static BUILTIN_ROLE_COLORS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ROLE_COLORS.into_iter().collect());

/// Visual settings applied to generated diagrams
///
/// Every field is optional in the configuration file; missing fields keep
/// their built-in values.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Direction of the flowchart
    pub direction: Direction,
    /// Fixed marker and node colours
    pub palette: Palette,
    /// Additional or overriding role colours
    pub roles: HashMap<String, String>,
}

/// Fill colours for markers and decision nodes
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Start marker
    pub start: String,
    /// End marker
    pub end: String,
    /// End marker of role-annotated diagrams
    pub complete: String,
    /// Decision nodes
    pub decision: String,
    /// Roles without a colour of their own
    pub unknown_role: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            start: START_COLOR.to_string(),
            end: END_COLOR.to_string(),
            complete: COMPLETE_COLOR.to_string(),
            decision: DECISION_COLOR.to_string(),
            unknown_role: UNKNOWN_ROLE_COLOR.to_string(),
        }
    }
}

impl Theme {
    /// Looks up the fill colour for a role
    ///
    /// Configured roles win over the built-in table; anything else gets the
    /// neutral `unknown_role` colour.
    pub fn role_color(&self, role: &str) -> &str {
        if let Some(color) = self.roles.get(role) {
            return color;
        }
        BUILTIN_ROLE_COLORS
            .get(role)
            .copied()
            .unwrap_or(self.palette.unknown_role.as_str())
    }

    /// Validates the theme
    ///
    /// Every colour must be written as `#RRGGBB`.
    ///
    /// # Errors
    /// Returns an error naming the first malformed colour
    pub fn validate(&self) -> Result<()> {
        let palette = [
            ("palette.start", &self.palette.start),
            ("palette.end", &self.palette.end),
            ("palette.complete", &self.palette.complete),
            ("palette.decision", &self.palette.decision),
            ("palette.unknown_role", &self.palette.unknown_role),
        ];
        for (key, color) in palette {
            check_color(key, color)?;
        }

        let mut roles: Vec<(&String, &String)> = self.roles.iter().collect();
        roles.sort();
        for (role, color) in roles {
            check_color(&format!("roles.{role}"), color)?;
        }

        Ok(())
    }
}

fn check_color(key: &str, color: &str) -> Result<()> {
    static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^#[0-9a-fA-F]{6}$").expect("Failed to compile regex pattern for HEX_COLOR")
    });

    if HEX_COLOR.is_match(color) {
        Ok(())
    } else {
        Err(anyhow!(
            "Invalid colour '{}' for {}. Colours must be written as #RRGGBB.",
            color,
            key
        ))
    }
}
