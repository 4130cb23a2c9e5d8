use std::fmt::{self, Display, Formatter};

/// Which flat catalog array an entity lives in, and how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityKind {
    /// Film collection
    Collection = 0,
    /// Film that does not belong to a collection
    StandaloneFilm = 1,
    /// Film owned by a collection
    CollectionFilm = 2,
    /// TV show
    Show = 3,
    /// Season of a TV show
    Season = 4,
}

impl EntityKind {
    /// Both film kinds share the film array.
    pub fn is_film(self) -> bool {
        matches!(self, EntityKind::StandaloneFilm | EntityKind::CollectionFilm)
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Collection => write!(f, "Collection"),
            EntityKind::StandaloneFilm => write!(f, "StandaloneFilm"),
            EntityKind::CollectionFilm => write!(f, "CollectionFilm"),
            EntityKind::Show => write!(f, "Show"),
            EntityKind::Season => write!(f, "Season"),
        }
    }
}
