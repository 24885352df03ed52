use crate::catalog::Hero;
use crate::normalize::normalize_name;
use ahash::AHashMap;

/// Immutable lookup table from normalized name variants to catalog entries.
///
/// Built once from an ordered catalog and read-only afterwards, so it can be
/// shared freely across threads. Rebuilding from the same catalog produces
/// the same table.
#[derive(Debug, Clone)]
pub struct HeroIndex {
    entries: Vec<Hero>,
    by_key: AHashMap<String, usize>,
}

impl HeroIndex {
    /// Builds the index from an ordered catalog. Every entry contributes its
    /// primary name and alter ego, both run through [`normalize_name`]. On a
    /// key collision the earlier entry wins, silently.
    pub fn new(catalog: Vec<Hero>) -> Self {
        let mut by_key = AHashMap::with_capacity(catalog.len() * 2);
        for (idx, hero) in catalog.iter().enumerate() {
            for variant in [hero.name.as_str(), hero.alter_ego.as_str()] {
                let key = normalize_name(variant);
                if key.is_empty() {
                    continue;
                }
                by_key.entry(key).or_insert(idx);
            }
        }
        Self {
            entries: catalog,
            by_key,
        }
    }

    /// Builds the index over the fixed built-in catalog.
    pub fn from_builtin() -> Self {
        Self::new(crate::catalog::builtin_catalog())
    }

    /// Resolves an arbitrary input string to a catalog entry. Unknown, empty
    /// and whitespace-only inputs yield `None`; resolution never fails.
    pub fn resolve(&self, input: &str) -> Option<&Hero> {
        let key = normalize_name(input);
        if key.is_empty() {
            return None;
        }
        self.by_key.get(&key).map(|&idx| &self.entries[idx])
    }

    /// All catalog entries, in catalog order.
    pub fn entries(&self) -> &[Hero] {
        &self.entries
    }

    /// Returns the number of catalog entries behind the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index was built over an empty catalog.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(id: u32, name: &str, alter_ego: &str, universe: &str) -> Hero {
        Hero {
            id,
            name: name.to_string(),
            alter_ego: alter_ego.to_string(),
            universe: universe.to_string(),
        }
    }

    #[test]
    fn every_builtin_entry_resolves_by_name_and_alter_ego() {
        let index = HeroIndex::from_builtin();
        for entry in index.entries().to_vec() {
            assert_eq!(index.resolve(&entry.name), Some(&entry));
            assert_eq!(index.resolve(&entry.alter_ego), Some(&entry));
        }
    }

    #[test]
    fn resolve_is_insensitive_to_case_and_punctuation() {
        let index = HeroIndex::from_builtin();
        for variant in [
            "Spider-Man",
            "spider-man",
            "SPIDER-MAN",
            "spiderman",
            "SPIDERMAN",
            "Peter Parker",
            "PETER PARKER",
            "peterparker",
        ] {
            let hero = index.resolve(variant).expect("variant resolves");
            assert_eq!(hero.name, "Spider-Man");
            assert_eq!(hero.alter_ego, "Peter Parker");
        }

        assert_eq!(index.resolve("tonystark").map(|h| h.name.as_str()), Some("Iron Man"));
    }

    #[test]
    fn inputs_with_equal_keys_resolve_identically() {
        let index = HeroIndex::from_builtin();
        for (left, right) in [("Bruce Wayne", "BRUCE-WAYNE"), ("Superman", " superman ")] {
            assert_eq!(
                normalize_name(left),
                normalize_name(right),
                "test inputs must share a key"
            );
            assert_eq!(index.resolve(left), index.resolve(right));
        }
    }

    #[test]
    fn unknown_empty_and_whitespace_inputs_yield_none() {
        let index = HeroIndex::from_builtin();
        for input in ["", "   ", "Non-Existent Hero", "Thor", "Random Name"] {
            assert_eq!(index.resolve(input), None, "input {input:?}");
        }
    }

    #[test]
    fn earlier_entry_wins_a_key_collision() {
        let index = HeroIndex::new(vec![
            hero(1, "Black Widow", "Natasha Romanoff", "Marvel"),
            hero(2, "BLACKWIDOW", "Yelena Belova", "Marvel"),
        ]);

        // Both primary names normalize to "blackwidow"; catalog order breaks the tie.
        assert_eq!(index.resolve("black widow").map(|h| h.id), Some(1));
        // The loser is still reachable through its non-colliding alter ego.
        assert_eq!(index.resolve("Yelena Belova").map(|h| h.id), Some(2));
    }

    #[test]
    fn whitespace_only_names_are_not_indexed() {
        let index = HeroIndex::new(vec![hero(1, "   ", "---", "Nowhere")]);
        assert_eq!(index.resolve(""), None);
        assert_eq!(index.resolve("   "), None);
        assert_eq!(index.resolve("---"), None);
    }

    #[test]
    fn rebuilding_from_the_same_catalog_is_idempotent() {
        let first = HeroIndex::from_builtin();
        let second = HeroIndex::from_builtin();
        assert_eq!(first.entries(), second.entries());
        for entry in first.entries() {
            assert_eq!(first.resolve(&entry.name), second.resolve(&entry.name));
        }
    }
}
