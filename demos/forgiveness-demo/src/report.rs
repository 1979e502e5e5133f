//! Before/after report for a released confession.

use colored::*;
use serde::Serialize;
use triadic_forgiveness::{ConfessionId, ConfessionRecord, ReleaseConfig};
use triadic_types::{BoundedState, Coordinate, Determination, TriadicState};

use crate::summary::FacetSummary;

/// One coordinate's movement under release.
#[derive(Clone, Debug, Serialize)]
pub struct CoordinateChange {
    pub coordinate: Coordinate,
    pub before: f64,
    pub after: f64,
}

impl CoordinateChange {
    fn label(&self) -> &'static str {
        match self.coordinate {
            Coordinate::Closure => "Closure",
            Coordinate::Dwelling => "Dwelling",
            Coordinate::MemoryFast => "Memory (fast)",
            Coordinate::MemorySlow => "Memory (slow)",
            Coordinate::X1 | Coordinate::X2 | Coordinate::X3 => "Facet",
        }
    }

    fn note(&self) -> &'static str {
        match self.coordinate {
            Coordinate::Closure => "re-opened",
            Coordinate::Dwelling => "restored",
            Coordinate::MemoryFast | Coordinate::MemorySlow => "decayed",
            Coordinate::X1 | Coordinate::X2 | Coordinate::X3 => "preserved",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub confession_id: ConfessionId,
    pub description: String,
    pub time: f64,
    pub witnessed: bool,
    pub summary: FacetSummary,
    pub release: ReleaseConfig,
    pub before: BoundedState,
    pub after: BoundedState,
    pub changes: Vec<CoordinateChange>,
    pub facets_preserved: bool,
    pub determination: Determination,
}

impl Report {
    pub fn new(
        confession: &ConfessionRecord,
        restored: &TriadicState,
        summary: FacetSummary,
        release: ReleaseConfig,
    ) -> Self {
        let before = confession.state().project_bounded();
        let after = restored.project_bounded();
        let changes = [
            Coordinate::Closure,
            Coordinate::Dwelling,
            Coordinate::MemoryFast,
            Coordinate::MemorySlow,
        ]
        .into_iter()
        .map(|coordinate| CoordinateChange {
            coordinate,
            before: before.get(coordinate),
            after: after.get(coordinate),
        })
        .collect();

        Self {
            confession_id: confession.id(),
            description: confession.error_description.clone(),
            time: confession.time,
            witnessed: confession.is_witnessed(),
            summary,
            release,
            before,
            after,
            changes,
            facets_preserved: restored.facets() == confession.state().facets(),
            determination: confession.determination(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", "ERROR STATE DETECTED:".red().bold()));
        out.push_str(&format!(
            "  Closure: {:.3} (locked in)\n",
            self.before.closure
        ));
        out.push_str(&format!(
            "  Divergence: {:.3} (facets misaligned)\n",
            self.summary.divergence
        ));
        out.push_str(&format!(
            "  Dwelling: {:.3} (brittle)\n",
            self.before.dwelling
        ));
        out.push_str(&format!("  Coherence: {:.3}\n\n", self.summary.coherence));

        out.push_str(&format!("{}\n", "CONFESSION RECORDED:".yellow().bold()));
        out.push_str(&format!("  Id: {}\n", self.confession_id));
        out.push_str(&format!("  Error: {}\n", self.description));
        out.push_str(&format!("  Time: {}\n", self.time));
        out.push_str(&format!("  Witnessed: {}\n\n", self.witnessed));

        out.push_str(&format!("{}\n", "FORGIVENESS APPLIED:".green().bold()));
        out.push_str(&format!(
            "  Parameters: decay_rate={} restore_boost={} closure_reduction={}\n",
            self.release.decay_rate, self.release.restore_boost, self.release.closure_reduction
        ));
        for change in &self.changes {
            out.push_str(&format!(
                "  {}: {:.3} {} {:.3} ({})\n",
                change.label(),
                change.before,
                "→".cyan(),
                change.after,
                change.note()
            ));
        }
        if self.facets_preserved {
            out.push_str("  Facets preserved (learning intact)\n");
        }
        out.push('\n');

        out.push_str(&format!("{}\n", "RESULT:".bold()));
        out.push_str(&format!("  Determination: {}\n", self.determination));

        out
    }
}
