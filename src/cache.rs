use herodex_catalog::Hero;
use herodex_monitor::KeyValueStore;
use moka::sync::Cache;
use std::{sync::Arc, time::Duration};

/// Moka-backed store of resolved hero lookups, keyed by normalized name.
/// Eviction and TTL are the store's concern; the monitor only observes the
/// traffic going through it.
#[derive(Clone)]
pub struct HeroCache {
    cache: Cache<String, Arc<Hero>>,
}

impl HeroCache {
    pub fn new(ttl_secs: u64, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_secs.max(1)))
            .max_capacity(max_capacity.max(1))
            .build();

        Self { cache }
    }
}

impl KeyValueStore for HeroCache {
    type Value = Arc<Hero>;

    fn get(&self, key: &str) -> Option<Arc<Hero>> {
        self.cache.get(key)
    }

    fn insert(&self, key: &str, value: Arc<Hero>) {
        self.cache.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) -> Option<Arc<Hero>> {
        self.cache.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hero() -> Arc<Hero> {
        Arc::new(Hero {
            id: 1,
            name: "Spider-Man".to_string(),
            alter_ego: "Peter Parker".to_string(),
            universe: "Marvel".to_string(),
        })
    }

    #[test]
    fn insert_then_get_returns_the_same_entry() {
        let cache = HeroCache::new(300, 16);
        cache.insert("spiderman", sample_hero());

        let found = cache.get("spiderman").expect("entry cached");
        assert_eq!(found.name, "Spider-Man");
        assert!(cache.get("ironman").is_none());
    }

    #[test]
    fn remove_evicts_the_entry() {
        let cache = HeroCache::new(300, 16);
        cache.insert("spiderman", sample_hero());

        assert!(cache.remove("spiderman").is_some());
        assert!(cache.get("spiderman").is_none());
    }
}
