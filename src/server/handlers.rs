use std::sync::Arc;

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::{engine::genre_query::GenreQuery, model::movie_table::MovieTable, server::render};

#[derive(Debug, Deserialize)]
pub struct GenreForm {
    pub genre: String,
}

pub async fn index() -> Html<String> {
    Html(render::index_page())
}

pub async fn recommend(
    State(table): State<Arc<MovieTable>>,
    Form(form): Form<GenreForm>,
) -> Html<String> {
    let recommendations = GenreQuery::recommend(&table, &form.genre);
    log::info!(
        "Found {} movies for genre {:?}",
        recommendations.len(),
        form.genre
    );

    Html(render::recommendations_page(&form.genre, &recommendations))
}
