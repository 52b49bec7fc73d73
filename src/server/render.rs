//! HTML pages for the genre form and its results.

use crate::model::movie::Movie;

pub const MAX_DESCRIPTION_CHARS: usize = 300;

pub fn index_page() -> String {
    page(
        "Movie recommendations",
        "<h1>Find movies by genre</h1>\n\
         <form action=\"/recommend\" method=\"post\">\n\
         <label for=\"genre\">Genre</label>\n\
         <input type=\"text\" id=\"genre\" name=\"genre\" placeholder=\"e.g. Action\">\n\
         <button type=\"submit\">Recommend</button>\n\
         </form>\n",
    )
}

pub fn recommendations_page(genre: &str, movies: &[&Movie]) -> String {
    let mut body = format!(
        "<h1>Movies matching \"{}\"</h1>\n",
        escape_html(genre)
    );

    if movies.is_empty() {
        body.push_str("<p class=\"empty\">No movies found for this genre.</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>Title</th><th>Year</th><th>Genres</th>\
             <th>Description</th><th>Rating</th></tr></thead>\n<tbody>\n",
        );
        for movie in movies {
            body.push_str(&movie_row(movie));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str("<p><a href=\"/\">Search again</a></p>\n");
    page("Recommendations", &body)
}

fn movie_row(movie: &Movie) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        escape_html(&movie.title),
        movie.year,
        escape_html(&movie.genres),
        escape_html(&truncate(&movie.description, MAX_DESCRIPTION_CHARS)),
        movie.rating.map(|r| r.to_string()).unwrap_or_default(),
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
