//! On-disk catalog fixtures shared by the integration tests.

#![allow(dead_code)]

use std::{fs, path::Path};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Media root in a temp dir with the three kind directories created.
pub struct CatalogFixture {
    dir: TempDir,
}

impl CatalogFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        for kind in ["films", "collections", "shows"] {
            fs::create_dir_all(dir.path().join(kind)).expect("kind dir");
        }
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `<root>/<kind>/<name>/<name>.json`.
    pub fn write(&self, kind: &str, name: &str, record: &Value) -> &Self {
        let item = self.root().join(kind).join(name);
        fs::create_dir_all(&item).expect("item dir");
        fs::write(
            item.join(format!("{name}.json")),
            serde_json::to_vec_pretty(record).expect("encode record"),
        )
        .expect("write record");
        self
    }

    pub fn film(&self, id: &str, title: &str, types: &[&str]) -> &Self {
        self.write("films", id, &film_json(id, title, types))
    }

    pub fn collection(&self, name: &str, films: Vec<Value>) -> &Self {
        self.write(
            "collections",
            name,
            &json!({
                "name": name,
                "poster_file": {
                    "name": "poster",
                    "path": format!("collections/{name}/poster.jpg"),
                    "type": "jpg"
                },
                "films": films,
            }),
        )
    }

    pub fn show(&self, name: &str, seasons: Vec<Value>) -> &Self {
        self.write(
            "shows",
            name,
            &json!({
                "id": name,
                "name": name,
                "first_air_date": "2002-09-20",
                "type": "Scripted",
                "seasons": seasons,
            }),
        )
    }
}

pub fn film_json(id: &str, title: &str, types: &[&str]) -> Value {
    let files: Vec<Value> = types
        .iter()
        .map(|ty| {
            json!({
                "name": title,
                "path": format!("films/{id}/{title}.{ty}"),
                "type": ty,
            })
        })
        .collect();
    json!({
        "id": id,
        "title": title,
        "release_date": "2001-01-01",
        "film_files": files,
    })
}

pub fn season_json(id: &str, episodes: &[&str]) -> Value {
    let episodes: Vec<Value> = episodes
        .iter()
        .enumerate()
        .map(|(n, name)| {
            json!({
                "id": format!("{id}_E{}", n + 1),
                "episode_number": n + 1,
                "name": name,
                "files": [{
                    "name": name,
                    "path": format!("shows/{id}/{name}.mp4"),
                    "type": "mp4",
                }],
            })
        })
        .collect();
    json!({ "id": id, "name": id, "episodes": episodes })
}
