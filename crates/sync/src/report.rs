//! Outcome of a sync run.

use std::fmt;

use holocron_core::kind::EntityKind;
use holocron_core::types::DbId;

/// A relationship reference the sync could not link.
///
/// Either the URL carried no id or the target row does not exist locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedReference {
    pub owner: EntityKind,
    pub owner_id: DbId,
    pub target: EntityKind,
    pub url: String,
}

/// What one phase wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
    pub kind: EntityKind,
    /// Records inserted or updated.
    pub upserted: usize,
    /// Relationship pairs written.
    pub linked: usize,
    pub dropped: Vec<DroppedReference>,
}

impl PhaseReport {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            upserted: 0,
            linked: 0,
            dropped: Vec::new(),
        }
    }
}

impl fmt::Display for PhaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} upserted, {} links, {} dropped references",
            self.kind.plural(),
            self.upserted,
            self.linked,
            self.dropped.len()
        )
    }
}

/// The three phases of a full sync, in the order they ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub films: PhaseReport,
    pub starships: PhaseReport,
    pub characters: PhaseReport,
}

impl SyncReport {
    pub fn phases(&self) -> [&PhaseReport; 3] {
        [&self.films, &self.starships, &self.characters]
    }

    pub fn dropped_references(&self) -> impl Iterator<Item = &DroppedReference> {
        self.phases().into_iter().flat_map(|phase| phase.dropped.iter())
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for phase in self.phases() {
            writeln!(f, "{phase}")?;
        }
        Ok(())
    }
}
