//! The three catalog entity kinds.

use std::fmt;

use serde::Serialize;

/// One of the catalog's entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Character,
    Film,
    Starship,
}

impl EntityKind {
    /// Singular display name, used in not-found messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Film => "Film",
            Self::Starship => "Starship",
        }
    }

    /// Plural relationship name, used in missing-reference messages and as
    /// the JSON field holding a relationship array.
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Character => "characters",
            Self::Film => "films",
            Self::Starship => "starships",
        }
    }

    /// Upstream catalog resource path for this kind.
    ///
    /// Characters are published as `people` by the upstream catalog.
    pub const fn resource(self) -> &'static str {
        match self {
            Self::Character => "people",
            Self::Film => "films",
            Self::Starship => "starships",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
