//! Script assembly for block registration snippets.
//!
//! This module exposes one public entry, `build_script`, plus the individual
//! clause builders it is composed of. Everything here is a pure function
//! from a `BlockSpec` to text; printing and clipboard work live elsewhere.
//!
//! Assembly order is fixed and never depends on field contents:
//! declaration, hardness clause, unbreakable clause, advanced clauses,
//! register clause.

use crate::block::{
    BlockSpec, HARVEST_LEVEL_DEFAULT, LIGHT_LEVEL_DEFAULT, LIGHT_OPACITY_DEFAULT,
    SLIPPERINESS_DEFAULT, ValidationError, validate_id,
};

/// Builder configuration.
///
/// `positive_hardness_only` selects the stricter line-level behavior where a
/// standalone hardness value must be greater than zero to emit a clause; the
/// default accepts any parsed value.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildOptions {
    pub positive_hardness_only: bool,
}

/// Build the full registration script for `spec`.
///
/// Validates the identifier first; a bad id aborts the whole build and no
/// partial output is produced. On success the returned string is
/// newline-terminated and ends with the register statement.
pub fn build_script(spec: &BlockSpec, options: BuildOptions) -> Result<String, ValidationError> {
    validate_id(&spec.id)?;

    let mut lines = vec![declaration(&spec.id, &spec.material)];
    if let Some(line) = hardness_clause(spec, options) {
        lines.push(line);
    }
    if spec.unbreakable {
        lines.push(unbreakable_clause(&spec.id));
    }
    lines.extend(advanced_clauses(spec));
    lines.push(register_clause(&spec.id));

    Ok(lines.join("\n") + "\n")
}

/// The declaration line binding `id` to a pillar-block constructor, with the
/// id doubling as display name.
pub fn declaration(id: &str, material: &str) -> String {
    format!("val {id} = GenericBlock.createPillar(<blockmaterial:{material}>, \"{id}\");")
}

/// The hardness statement, if any.
///
/// In strength mode a single `setStrength` call covers hardness and blast
/// resistance, and is emitted only when both values parsed. Otherwise a
/// standalone `setHardness` call is emitted when that value is present (and
/// positive, under `positive_hardness_only`). At most one of the two
/// statements can appear.
pub fn hardness_clause(spec: &BlockSpec, options: BuildOptions) -> Option<String> {
    if spec.use_strength {
        let (h, r) = (spec.hardness?, spec.resistance?);
        Some(format!(
            "{}.setStrength({}, {}); // hardness and blast resistance",
            spec.id, h, r
        ))
    } else {
        let h = spec.hardness_only?;
        if options.positive_hardness_only && h <= 0.0 {
            return None;
        }
        Some(format!("{}.setHardness({}); // hardness", spec.id, h))
    }
}

/// The unconditional "cannot be broken" statement. Callers include it only
/// when the unbreakable flag is set.
pub fn unbreakable_clause(id: &str) -> String {
    format!("{id}.setUnbreakable(); // cannot be broken")
}

/// Setter statements for the optional numeric properties, in fixed order:
/// harvest level, light level, light opacity, slipperiness.
///
/// A property contributes a statement only when it is present and differs
/// from its default; otherwise it is skipped entirely, so the result is
/// empty when nothing applies.
pub fn advanced_clauses(spec: &BlockSpec) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(level) = spec.harvest_level
        && level != HARVEST_LEVEL_DEFAULT
    {
        lines.push(format!(
            "{}.setHarvestLevel({level}); // harvest level",
            spec.id
        ));
    }
    if let Some(level) = spec.light_level
        && level != LIGHT_LEVEL_DEFAULT
    {
        lines.push(format!(
            "{}.setLightLevel({level}); // light level (0-15)",
            spec.id
        ));
    }
    if let Some(opacity) = spec.light_opacity
        && opacity != LIGHT_OPACITY_DEFAULT
    {
        lines.push(format!(
            "{}.setLightOpacity({opacity}); // light opacity (0-255)",
            spec.id
        ));
    }
    if let Some(value) = spec.slipperiness
        && value != SLIPPERINESS_DEFAULT
    {
        lines.push(format!(
            "{}.setSlipperiness({value}); // slipperiness (0-1)",
            spec.id
        ));
    }
    lines
}

/// The final registration statement, always the last line of a script.
pub fn register_clause(id: &str) -> String {
    format!("{id}.register(); // register the block")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: &str) -> BlockSpec {
        BlockSpec {
            id: id.into(),
            material: "rock".into(),
            unbreakable: false,
            use_strength: false,
            hardness: None,
            resistance: None,
            hardness_only: None,
            harvest_level: None,
            light_level: None,
            light_opacity: None,
            slipperiness: None,
        }
    }

    #[test]
    fn test_declaration_format() {
        assert_eq!(
            declaration("my_block", "wood"),
            "val my_block = GenericBlock.createPillar(<blockmaterial:wood>, \"my_block\");"
        );
    }

    #[test]
    fn test_minimal_script() {
        let out = build_script(&spec("ore"), BuildOptions::default()).unwrap();
        assert_eq!(
            out,
            "val ore = GenericBlock.createPillar(<blockmaterial:rock>, \"ore\");\n\
             ore.register(); // register the block\n"
        );
    }

    #[test]
    fn test_invalid_id_aborts_with_no_output() {
        let err = build_script(&spec("bad id"), BuildOptions::default()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidId("bad id".into()));
        assert_eq!(
            build_script(&spec(""), BuildOptions::default()).unwrap_err(),
            ValidationError::EmptyId
        );
    }

    #[test]
    fn test_strength_mode_emits_single_statement() {
        let mut s = spec("ore");
        s.use_strength = true;
        s.hardness = Some(3.0);
        s.resistance = Some(15.0);
        // standalone value present too; strength mode must win exclusively
        s.hardness_only = Some(2.0);
        let out = build_script(&s, BuildOptions::default()).unwrap();
        assert!(out.contains("ore.setStrength(3, 15); // hardness and blast resistance"));
        assert!(!out.contains("setHardness"));
    }

    #[test]
    fn test_strength_mode_with_missing_value_emits_nothing() {
        let mut s = spec("ore");
        s.use_strength = true;
        s.hardness = Some(3.0);
        let out = build_script(&s, BuildOptions::default()).unwrap();
        assert!(!out.contains("setStrength"));
        assert!(!out.contains("setHardness"));
    }

    #[test]
    fn test_standalone_hardness() {
        let mut s = spec("ore");
        s.hardness_only = Some(2.5);
        let out = build_script(&s, BuildOptions::default()).unwrap();
        assert!(out.contains("ore.setHardness(2.5); // hardness"));
        assert!(!out.contains("setStrength"));
    }

    #[test]
    fn test_positive_hardness_only_option() {
        let mut s = spec("ore");
        s.hardness_only = Some(0.0);
        let strict = BuildOptions {
            positive_hardness_only: true,
        };
        assert!(hardness_clause(&s, strict).is_none());
        // default accepts any parsed value
        assert!(hardness_clause(&s, BuildOptions::default()).is_some());
    }

    #[test]
    fn test_advanced_defaults_are_omitted() {
        let mut s = spec("ore");
        s.harvest_level = Some(0);
        s.light_level = Some(0);
        s.light_opacity = Some(0);
        s.slipperiness = Some(0.6);
        assert!(advanced_clauses(&s).is_empty());
    }

    #[test]
    fn test_advanced_order_preserved() {
        let mut s = spec("ore");
        s.harvest_level = Some(2);
        s.light_level = Some(15);
        s.light_opacity = Some(255);
        s.slipperiness = Some(0.98);
        let lines = advanced_clauses(&s);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("setHarvestLevel(2)"));
        assert!(lines[1].contains("setLightLevel(15)"));
        assert!(lines[2].contains("setLightOpacity(255)"));
        assert!(lines[3].contains("setSlipperiness(0.98)"));
    }

    #[test]
    fn test_register_is_always_last_line() {
        let mut s = spec("ore");
        s.unbreakable = true;
        s.slipperiness = Some(0.1);
        let out = build_script(&s, BuildOptions::default()).unwrap();
        let last = out.lines().last().unwrap();
        assert_eq!(last, "ore.register(); // register the block");
    }

    #[test]
    fn test_full_example() {
        // id=test_block, material=wood, hardness_only=2.5, unbreakable,
        // harvest_level equal to its default: no harvest clause.
        let mut s = spec("test_block");
        s.material = "wood".into();
        s.hardness_only = Some(2.5);
        s.unbreakable = true;
        s.harvest_level = Some(0);
        let out = build_script(&s, BuildOptions::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "val test_block = GenericBlock.createPillar(<blockmaterial:wood>, \"test_block\");",
                "test_block.setHardness(2.5); // hardness",
                "test_block.setUnbreakable(); // cannot be broken",
                "test_block.register(); // register the block",
            ]
        );
    }
}
