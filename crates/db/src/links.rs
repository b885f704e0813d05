//! Relationship (junction) tables, seen from either endpoint.
//!
//! Each relationship is stored once as a pair table. A [`Link`] names that
//! table plus which column holds the owning entity and which holds the
//! related one, so the same table can be walked in both directions.

/// A directed view over one junction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub table: &'static str,
    pub owner_column: &'static str,
    pub target_column: &'static str,
}

impl Link {
    /// The same junction table walked from the other endpoint.
    pub const fn reversed(self) -> Link {
        Link {
            table: self.table,
            owner_column: self.target_column,
            target_column: self.owner_column,
        }
    }
}

pub const CHARACTER_FILMS: Link = Link {
    table: "character_films",
    owner_column: "character_id",
    target_column: "film_id",
};

pub const CHARACTER_STARSHIPS: Link = Link {
    table: "character_starships",
    owner_column: "character_id",
    target_column: "starship_id",
};

pub const STARSHIP_FILMS: Link = Link {
    table: "starship_films",
    owner_column: "starship_id",
    target_column: "film_id",
};

pub const FILM_CHARACTERS: Link = CHARACTER_FILMS.reversed();
pub const FILM_STARSHIPS: Link = STARSHIP_FILMS.reversed();
pub const STARSHIP_CHARACTERS: Link = CHARACTER_STARSHIPS.reversed();
