pub mod genre_query;
