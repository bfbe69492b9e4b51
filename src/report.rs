//! Immunity report over every registered effect
//!
//! Used by the `creature-effects` binary; serializes straight to JSON.

use serde::Serialize;
use std::fmt::Write;

use crate::creature::Creature;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImmunityRow {
    pub effect: String,
    pub name: String,
    pub immune: bool,
    pub resists: bool,
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImmunityReport {
    /// Monster type id, or the character's name
    pub subject: String,
    pub rows: Vec<ImmunityRow>,
}

impl ImmunityReport {
    pub fn row(&self, effect: &str) -> Option<&ImmunityRow> {
        self.rows.iter().find(|row| row.effect == effect)
    }
}

/// One row per registered effect, sorted by id
pub fn build_report(creature: &Creature) -> ImmunityReport {
    let subject = match creature {
        Creature::Monster(m) => m.monster_type().id.to_string(),
        Creature::Character(c) => c.name.clone(),
    };

    let effects = &creature.data().effects;
    let rows = effects
        .ids()
        .into_iter()
        .filter_map(|id| effects.get(id))
        .map(|effect_type| {
            let mut flags: Vec<String> =
                effect_type.flags.iter().map(|f| f.to_string()).collect();
            flags.sort();
            ImmunityRow {
                effect: effect_type.id.to_string(),
                name: effect_type.name.clone(),
                immune: creature.is_immune_effect(&effect_type.id),
                resists: creature.resists_effect(&effect_type.id),
                flags,
            }
        })
        .collect();

    ImmunityReport { subject, rows }
}

/// Fixed-width table for terminal output
pub fn render_text(report: &ImmunityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Effects for {}", report.subject);
    let _ = writeln!(
        out,
        "{:<20} {:<24} {:<7} {:<8} FLAGS",
        "EFFECT", "NAME", "IMMUNE", "RESISTS"
    );
    for row in &report.rows {
        let _ = writeln!(
            out,
            "{:<20} {:<24} {:<7} {:<8} {}",
            row.effect,
            row.name,
            yes_no(row.immune),
            yes_no(row.resists),
            row.flags.join(",")
        );
    }
    out
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
