use crate::model::movie::Movie;

/// Movies in dataset order. Never mutated once built.
#[derive(Debug, Clone, Default)]
pub struct MovieTable {
    movies: Vec<Movie>,
    // Same order as `movies`.
    lowercase_genres: Vec<String>,
}

impl MovieTable {
    pub fn new(movies: Vec<Movie>) -> Self {
        let lowercase_genres = movies.iter().map(|m| m.genres.to_lowercase()).collect();
        MovieTable {
            movies,
            lowercase_genres,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Movies whose genres contain `genre`, ignoring case, in table order.
    pub fn matching_genre<'a>(&'a self, genre: &str) -> impl Iterator<Item = &'a Movie> + 'a {
        let genre = genre.to_lowercase();
        self.movies
            .iter()
            .zip(self.lowercase_genres.iter())
            .filter(move |(_, genres)| genres.contains(genre.as_str()))
            .map(|(movie, _)| movie)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
