use serviam_model::EntityKind;

use crate::catalog::{CatalogIndex, Entity, EntityRef};

/// Entities whose display name contains `pattern`, ignoring case.
///
/// Standalone films and shows match on their own title/name. A collection
/// whose name matches contributes itself followed by every member; otherwise
/// only its matching members are returned, without the collection. Season and
/// episode text is never searched.
///
/// Results follow ingestion order. Entities whose identifier was taken over by
/// a later record are skipped, so the result visits exactly the entries of the
/// identifier lookup. Callers route an empty pattern to the baseline instead.
pub fn search(index: &CatalogIndex, pattern: &str) -> Vec<EntityRef> {
    let needle = pattern.to_lowercase();
    let matches = |text: &str| text.to_lowercase().contains(&needle);

    let mut output = Vec::new();
    for &entity in index.baseline() {
        if !index.is_addressable(entity) {
            continue;
        }
        match index.resolve(entity) {
            Some(Entity::Film(film))
                if entity.kind == EntityKind::StandaloneFilm =>
            {
                if matches(&film.title) {
                    output.push(entity);
                }
            }
            Some(Entity::Collection(collection)) => {
                if matches(&collection.name) {
                    output.push(entity);
                    output.extend(index.members(collection));
                } else {
                    output.extend(index.members(collection).filter(|member| {
                        index
                            .film(member.slot)
                            .is_some_and(|film| matches(&film.title))
                    }));
                }
            }
            Some(Entity::Show(show)) => {
                if matches(&show.name) {
                    output.push(entity);
                }
            }
            _ => {}
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serviam_model::{CollectionRecord, FilmRecord, ShowRecord};

    fn film(id: &str, title: &str) -> FilmRecord {
        FilmRecord {
            id: id.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn catalog() -> CatalogIndex {
        CatalogIndex::from_records(
            vec![film("heat", "Heat"), film("part", "Partisan")],
            vec![CollectionRecord {
                name: "Trilogy".to_string(),
                films: vec![
                    film("p1", "Part One"),
                    film("p2", "Part Two"),
                    film("p3", "Part Three"),
                ],
                ..Default::default()
            }],
            vec![ShowRecord {
                name: "The Wire".to_string(),
                ..Default::default()
            }],
        )
    }

    fn titles(index: &CatalogIndex, refs: &[EntityRef]) -> Vec<String> {
        refs.iter()
            .map(|&entity| index.id_of(entity).unwrap().to_string())
            .collect()
    }

    #[test]
    fn collection_name_match_includes_every_member() {
        let index = catalog();
        let found = search(&index, "trilogy");
        assert_eq!(
            found,
            vec![
                EntityRef::new(EntityKind::Collection, 0),
                EntityRef::new(EntityKind::CollectionFilm, 2),
                EntityRef::new(EntityKind::CollectionFilm, 3),
                EntityRef::new(EntityKind::CollectionFilm, 4),
            ]
        );
    }

    #[test]
    fn member_matches_exclude_the_collection() {
        let index = catalog();
        let found = search(&index, "TWO");
        assert_eq!(found, vec![EntityRef::new(EntityKind::CollectionFilm, 3)]);
    }

    #[test]
    fn standalone_films_and_members_follow_ingestion_order() {
        let index = catalog();
        let found = search(&index, "part");
        assert_eq!(titles(&index, &found), vec!["part", "p1", "p2", "p3"]);
    }

    #[test]
    fn shows_match_on_name_only() {
        let index = catalog();
        assert_eq!(
            search(&index, "wire"),
            vec![EntityRef::new(EntityKind::Show, 0)]
        );
        assert!(search(&index, "nothing like this").is_empty());
    }

    #[test]
    fn repeated_searches_are_identical() {
        let index = catalog();
        assert_eq!(search(&index, "t"), search(&index, "t"));
    }
}
