use super::{HERO_LIST, HeroList};
use crate::error::HerodexError;
use crate::server::router::HerodexState;
use herodex_catalog::{Hero, normalize_name};

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use std::sync::Arc;

/// Display payload for the fixed profile route.
#[derive(Debug, Clone, Serialize)]
pub struct HeroProfile {
    pub name: String,
    pub description: String,
}

const SPIDER_MAN_DESCRIPTION: &str = "Peter Parker, a superhero who gained spider-like abilities after being bitten by a radioactive spider.";

/// Fixed route: the Spider-Man profile card.
pub async fn spider_man_handler(
    State(state): State<HerodexState>,
) -> Result<Json<HeroProfile>, HerodexError> {
    let hero = lookup(&state, "Spider-Man")?;
    Ok(Json(HeroProfile {
        name: hero.name.clone(),
        description: SPIDER_MAN_DESCRIPTION.to_string(),
    }))
}

/// Resolves an arbitrary hero name or alter ego to its catalog record.
pub async fn hero_lookup_handler(
    State(state): State<HerodexState>,
    Path(name): Path<String>,
) -> Result<Json<Hero>, HerodexError> {
    let hero = lookup(&state, &name)?;
    Ok(Json(hero.as_ref().clone()))
}

/// Full catalog listing.
pub async fn hero_list_handler() -> Json<HeroList> {
    Json(HERO_LIST.clone())
}

/// Consults the monitored cache first (hit/miss recorded), falling back to
/// the index and populating the cache on success (set recorded).
fn lookup(state: &HerodexState, raw: &str) -> Result<Arc<Hero>, HerodexError> {
    let key = normalize_name(raw);
    if key.is_empty() {
        // Unkeyable input never reaches the cache, so no miss is recorded.
        return Err(HerodexError::HeroNotFound(raw.to_string()));
    }

    if let Some(hero) = state.heroes.get(&key) {
        return Ok(hero);
    }

    let hero = state
        .index
        .resolve(raw)
        .cloned()
        .map(Arc::new)
        .ok_or_else(|| HerodexError::HeroNotFound(raw.to_string()))?;
    state.heroes.insert(&key, hero.clone());
    Ok(hero)
}
