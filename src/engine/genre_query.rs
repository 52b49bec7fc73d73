use std::cmp::Ordering;

use crate::model::{movie::Movie, movie_table::MovieTable};

pub struct GenreQuery {}

impl GenreQuery {
    /// Movies whose genres contain `genre` (case-insensitive), best rated first.
    ///
    /// Equal ratings keep table order. Unrated movies come last.
    pub fn recommend<'a>(table: &'a MovieTable, genre: &str) -> Vec<&'a Movie> {
        let mut matches: Vec<&Movie> = table.matching_genre(genre).collect();

        // sort_by is stable, which the tie-break relies on.
        matches.sort_by(|a, b| GenreQuery::by_rating_desc(a.rating, b.rating));
        matches
    }

    fn by_rating_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}
