pub mod handlers;

use crate::server::router::HerodexState;
use handlers::{hero_list_handler, hero_lookup_handler, spider_man_handler};
use herodex_catalog::{Hero, builtin_catalog};

use axum::{Router, routing::get};
use serde::Serialize;
use std::sync::LazyLock;

/// Catalog listing payload served by `GET /heroes`.
#[derive(Debug, Clone, Serialize)]
pub struct HeroList {
    pub heroes: Vec<Hero>,
}

impl HeroList {
    pub fn from_catalog() -> Self {
        Self {
            heroes: builtin_catalog(),
        }
    }
}

pub static HERO_LIST: LazyLock<HeroList> = LazyLock::new(HeroList::from_catalog);

pub fn router() -> Router<HerodexState> {
    Router::new()
        .route("/heroes", get(hero_list_handler))
        .route("/heroes/spiderMan", get(spider_man_handler))
        .route("/heroes/{name}", get(hero_lookup_handler))
}
