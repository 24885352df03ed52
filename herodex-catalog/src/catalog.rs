use serde::{Deserialize, Serialize};

/// A single catalog record. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: u32,
    pub name: String,
    pub alter_ego: String,
    pub universe: String,
}

/// The fixed hero catalog, defined at process start and never mutated.
/// Order matters: on a normalized-key collision the earlier entry wins.
pub fn builtin_catalog() -> Vec<Hero> {
    [
        (1, "Spider-Man", "Peter Parker", "Marvel"),
        (2, "Iron Man", "Tony Stark", "Marvel"),
        (3, "Captain America", "Steve Rogers", "Marvel"),
        (4, "Batman", "Bruce Wayne", "DC"),
        (5, "Superman", "Clark Kent", "DC"),
    ]
    .into_iter()
    .map(|(id, name, alter_ego, universe)| Hero {
        id,
        name: name.to_string(),
        alter_ego: alter_ego.to_string(),
        universe: universe.to_string(),
    })
    .collect()
}
