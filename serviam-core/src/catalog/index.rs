use std::{collections::HashMap, fmt, ops::Deref};

use serviam_model::{
    CollectionRecord, EntityKind, FilmRecord, SeasonRecord, ShowRecord,
};
use tracing::{debug, info};

use super::{EntityRef, loader::RecordSource};
use crate::error::Result;

/// Collection whose members are slots into the film array.
pub type Collection = CollectionRecord<usize>;

/// Show whose seasons are slots into the season array.
pub type Show = ShowRecord<usize>;

/// Film plus the collection that owns it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    pub record: FilmRecord,
    pub collection: Option<usize>,
}

impl Film {
    pub fn kind(&self) -> EntityKind {
        match self.collection {
            Some(_) => EntityKind::CollectionFilm,
            None => EntityKind::StandaloneFilm,
        }
    }
}

impl Deref for Film {
    type Target = FilmRecord;

    fn deref(&self) -> &Self::Target {
        &self.record
    }
}

/// Season plus the slot of its show.
#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    pub record: SeasonRecord,
    pub show: usize,
}

impl Deref for Season {
    type Target = SeasonRecord;

    fn deref(&self) -> &Self::Target {
        &self.record
    }
}

/// Borrowed view of whatever an [`EntityRef`] points at.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Film(&'a Film),
    Collection(&'a Collection),
    Show(&'a Show),
    Season(&'a Season),
}

/// Flat, append-only entity arrays and the identifier lookup over them.
///
/// Ingestion order: standalone films, then each collection followed by its
/// members, then each show followed by its seasons. That order is also the
/// baseline ordering, minus collection members and seasons which are only
/// reachable through their parent, search, or direct lookup.
///
/// When two records share an identifier the later one wins the lookup; the
/// earlier entity keeps its slot but is no longer addressable by id.
#[derive(Default)]
pub struct CatalogIndex {
    films: Vec<Film>,
    collections: Vec<Collection>,
    shows: Vec<Show>,
    seasons: Vec<Season>,
    id2ref: HashMap<String, EntityRef>,
    baseline: Vec<EntityRef>,
}

impl fmt::Debug for CatalogIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogIndex")
            .field("films", &self.films.len())
            .field("collections", &self.collections.len())
            .field("shows", &self.shows.len())
            .field("seasons", &self.seasons.len())
            .field("ids", &self.id2ref.len())
            .finish()
    }
}

impl CatalogIndex {
    /// Load every record from `source` and index it.
    pub fn build(source: &impl RecordSource) -> Result<Self> {
        let films = source.films()?;
        let collections = source.collections()?;
        let shows = source.shows()?;

        let index = Self::from_records(films, collections, shows);
        info!(
            collections = index.collections.len(),
            films = index.films.len(),
            shows = index.shows.len(),
            seasons = index.seasons.len(),
            "catalog indexed"
        );
        Ok(index)
    }

    /// Index already-decoded records in ingestion order.
    pub fn from_records(
        films: Vec<FilmRecord>,
        collections: Vec<CollectionRecord>,
        shows: Vec<ShowRecord>,
    ) -> Self {
        let mut index = Self::default();
        for film in films {
            let entity = index.push_film(film, None);
            index.baseline.push(entity);
        }
        for collection in collections {
            index.ingest_collection(collection);
        }
        for show in shows {
            index.ingest_show(show);
        }
        index
    }

    fn register(&mut self, id: &str, entity: EntityRef) {
        if let Some(previous) = self.id2ref.insert(id.to_owned(), entity) {
            debug!(id, ?previous, current = ?entity, "identifier reassigned to later record");
        }
    }

    fn push_film(
        &mut self,
        record: FilmRecord,
        collection: Option<usize>,
    ) -> EntityRef {
        let film = Film { record, collection };
        let entity = EntityRef::new(film.kind(), self.films.len());
        self.register(&film.id, entity);
        self.films.push(film);
        entity
    }

    fn ingest_collection(&mut self, record: CollectionRecord) {
        let slot = self.collections.len();
        let entity = EntityRef::new(EntityKind::Collection, slot);
        self.register(&record.name, entity);
        self.baseline.push(entity);

        let collection =
            record.map_films(|film| self.push_film(film, Some(slot)).slot);
        self.collections.push(collection);
    }

    fn ingest_show(&mut self, record: ShowRecord) {
        let slot = self.shows.len();
        let entity = EntityRef::new(EntityKind::Show, slot);
        self.register(&record.name, entity);
        self.baseline.push(entity);

        let show = record.map_seasons(|season| {
            let season_slot = self.seasons.len();
            self.register(
                &season.id,
                EntityRef::new(EntityKind::Season, season_slot),
            );
            self.seasons.push(Season {
                record: season,
                show: slot,
            });
            season_slot
        });
        self.shows.push(show);
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    pub fn film(&self, slot: usize) -> Option<&Film> {
        self.films.get(slot)
    }

    pub fn collection(&self, slot: usize) -> Option<&Collection> {
        self.collections.get(slot)
    }

    pub fn show(&self, slot: usize) -> Option<&Show> {
        self.shows.get(slot)
    }

    pub fn season(&self, slot: usize) -> Option<&Season> {
        self.seasons.get(slot)
    }

    /// Standalone films, collections and shows in ingestion order.
    pub fn baseline(&self) -> &[EntityRef] {
        &self.baseline
    }

    pub fn lookup(&self, id: &str) -> Option<EntityRef> {
        self.id2ref.get(id).copied()
    }

    /// Number of identifiers currently mapped to entities of `kind`.
    pub fn id_count(&self, kind: EntityKind) -> usize {
        self.id2ref.values().filter(|entity| entity.kind == kind).count()
    }

    pub fn resolve(&self, entity: EntityRef) -> Option<Entity<'_>> {
        match entity.kind {
            EntityKind::StandaloneFilm | EntityKind::CollectionFilm => {
                self.film(entity.slot).map(Entity::Film)
            }
            EntityKind::Collection => {
                self.collection(entity.slot).map(Entity::Collection)
            }
            EntityKind::Show => self.show(entity.slot).map(Entity::Show),
            EntityKind::Season => self.season(entity.slot).map(Entity::Season),
        }
    }

    /// The identifier the entity was registered under.
    pub fn id_of(&self, entity: EntityRef) -> Option<&str> {
        Some(match self.resolve(entity)? {
            Entity::Film(film) => film.id.as_str(),
            Entity::Collection(collection) => collection.name.as_str(),
            Entity::Show(show) => show.name.as_str(),
            Entity::Season(season) => season.id.as_str(),
        })
    }

    /// False when a later record took over this entity's identifier.
    pub fn is_addressable(&self, entity: EntityRef) -> bool {
        self.id_of(entity)
            .and_then(|id| self.lookup(id))
            .is_some_and(|current| current == entity)
    }

    /// Member film refs of `collection`, in on-disk order.
    pub fn members<'a>(
        &'a self,
        collection: &'a Collection,
    ) -> impl Iterator<Item = EntityRef> + 'a {
        collection
            .films
            .iter()
            .map(|&slot| EntityRef::new(EntityKind::CollectionFilm, slot))
    }

    pub fn member_films<'a>(
        &'a self,
        collection: &'a Collection,
    ) -> impl Iterator<Item = &'a Film> + 'a {
        collection.films.iter().filter_map(|&slot| self.film(slot))
    }

    pub fn seasons_of<'a>(
        &'a self,
        show: &'a Show,
    ) -> impl Iterator<Item = &'a Season> + 'a {
        show.seasons.iter().filter_map(|&slot| self.season(slot))
    }
}
