//! Block definition model and input parsing.
//!
//! `BlockForm` holds the raw field values exactly as the user supplied them
//! (free text for every numeric field). `BlockForm::parse` turns them into a
//! typed `BlockSpec`, treating any optional value that fails to parse as
//! absent. Only the identifier is mandatory; `validate_id` enforces the
//! non-empty and character-set constraints and reports which one failed.

use thiserror::Error;

/// Default harvest level; a matching value emits no clause.
pub const HARVEST_LEVEL_DEFAULT: i64 = 0;
/// Default light level; a matching value emits no clause.
pub const LIGHT_LEVEL_DEFAULT: i64 = 0;
/// Default light opacity; a matching value emits no clause.
pub const LIGHT_OPACITY_DEFAULT: i64 = 0;
/// Default slipperiness; a matching value emits no clause.
pub const SLIPPERINESS_DEFAULT: f64 = 0.6;

/// Identifier constraint violations. Each variant carries its own
/// user-facing message so callers can report the exact failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("block id must not be empty")]
    EmptyId,

    #[error("block id may only contain letters, digits and underscores: {0:?}")]
    InvalidId(String),
}

/// Raw field values as collected from the CLI, before any parsing.
///
/// Numeric fields stay `Option<String>` here on purpose: the source of each
/// value is free text, and an unparsable entry must degrade to "absent"
/// rather than fail the whole run.
#[derive(Debug, Default, Clone)]
pub struct BlockForm {
    pub id: String,
    pub material: String,
    pub unbreakable: bool,
    pub use_strength: bool,
    pub hardness: Option<String>,
    pub resistance: Option<String>,
    pub hardness_only: Option<String>,
    pub harvest_level: Option<String>,
    pub light_level: Option<String>,
    pub light_opacity: Option<String>,
    pub slipperiness: Option<String>,
}

/// A fully parsed block definition. Rebuilt from a `BlockForm` on every
/// generate action and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSpec {
    pub id: String,
    pub material: String,
    pub unbreakable: bool,
    pub use_strength: bool,
    /// Strength-mode hardness (paired with `resistance`).
    pub hardness: Option<f64>,
    pub resistance: Option<f64>,
    /// Standalone hardness, consulted only outside strength mode.
    pub hardness_only: Option<f64>,
    pub harvest_level: Option<i64>,
    pub light_level: Option<i64>,
    pub light_opacity: Option<i64>,
    pub slipperiness: Option<f64>,
}

impl BlockForm {
    /// Parse the raw form into a `BlockSpec`.
    ///
    /// The identifier is trimmed but not validated here; validation happens
    /// at build time so that a bad id aborts the build with no partial
    /// output. All numeric fields parse leniently via the helpers below.
    pub fn parse(&self) -> BlockSpec {
        BlockSpec {
            id: self.id.trim().to_string(),
            material: self.material.clone(),
            unbreakable: self.unbreakable,
            use_strength: self.use_strength,
            hardness: parse_optional_f64(self.hardness.as_deref()),
            resistance: parse_optional_f64(self.resistance.as_deref()),
            hardness_only: parse_optional_f64(self.hardness_only.as_deref()),
            harvest_level: parse_optional_i64(self.harvest_level.as_deref()),
            light_level: parse_optional_i64(self.light_level.as_deref()),
            light_opacity: parse_optional_i64(self.light_opacity.as_deref()),
            slipperiness: parse_optional_f64(self.slipperiness.as_deref()),
        }
    }
}

/// Check the identifier constraints: non-empty, then `[A-Za-z0-9_]+`.
///
/// The two failures are distinct variants because each surfaces a different
/// message to the user.
pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::InvalidId(id.to_string()));
    }
    Ok(())
}

/// Lenient float parse: `None` input, blank input, or anything `f64` cannot
/// parse all map to `None`. Absence is never an error for optional fields.
pub fn parse_optional_f64(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse().ok()
}

/// Lenient integer parse with the same absence rules as `parse_optional_f64`.
pub fn parse_optional_i64(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}
