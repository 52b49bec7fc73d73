use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord};

use crate::{
    error::LoadError,
    model::{
        movie::{Movie, DEFAULT_YEAR},
        movie_table::MovieTable,
    },
};

/// Cells read as missing, the same set pandas' `read_csv` uses by default.
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub struct CsvLoader {}

struct ColumnIndexes {
    title: usize,
    rating: usize,
    year: usize,
    genres: usize,
    description: usize,
}

impl CsvLoader {
    pub fn load_movies_from_csv<P: AsRef<Path>>(file_name: P) -> Result<MovieTable, LoadError> {
        let file = File::open(file_name.as_ref())?;
        let table = CsvLoader::load_movies_from_reader(file)?;
        log::info!(
            "Loaded {} movies from {}",
            table.len(),
            file_name.as_ref().display()
        );
        Ok(table)
    }

    pub fn load_movies_from_reader<R: Read>(reader: R) -> Result<MovieTable, LoadError> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
        let columns = CsvLoader::find_columns(rdr.headers()?)?;

        let mut movies = vec![];
        for (idx, record) in rdr.records().enumerate() {
            movies.push(CsvLoader::movie_from_record(&record?, &columns, idx + 1)?);
        }

        Ok(MovieTable::new(movies))
    }

    fn find_columns(headers: &StringRecord) -> Result<ColumnIndexes, LoadError> {
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(LoadError::MissingColumn(name))
        };

        Ok(ColumnIndexes {
            title: position("title")?,
            rating: position("rating")?,
            year: position("year")?,
            genres: position("genres")?,
            description: position("description")?,
        })
    }

    fn movie_from_record(
        record: &StringRecord,
        columns: &ColumnIndexes,
        row: usize,
    ) -> Result<Movie, LoadError> {
        let field = |idx: usize| record.get(idx).unwrap_or("");

        Ok(Movie {
            title: field(columns.title).to_string(),
            year: CsvLoader::parse_year(field(columns.year), row)?,
            genres: CsvLoader::parse_text(field(columns.genres)),
            description: CsvLoader::parse_text(field(columns.description)),
            rating: CsvLoader::parse_rating(field(columns.rating), row),
        })
    }

    fn is_na(raw: &str) -> bool {
        NA_VALUES.contains(&raw.trim())
    }

    fn parse_text(raw: &str) -> String {
        if CsvLoader::is_na(raw) {
            return String::new();
        }
        raw.trim().to_string()
    }

    fn parse_year(raw: &str, row: usize) -> Result<u32, LoadError> {
        if CsvLoader::is_na(raw) {
            return Ok(DEFAULT_YEAR);
        }

        let raw = raw.trim();
        if let Ok(year) = raw.parse::<u32>() {
            return Ok(year);
        }

        // Integer columns with blanks are often written as floats, e.g. "1999.0".
        match raw.parse::<f64>() {
            Ok(year) if year.fract() == 0.0 && year >= 0.0 && year <= u32::MAX as f64 => {
                Ok(year as u32)
            }
            _ => Err(LoadError::InvalidYear {
                row,
                value: raw.to_string(),
            }),
        }
    }

    fn parse_rating(raw: &str, row: usize) -> Option<f64> {
        if CsvLoader::is_na(raw) {
            log::debug!("Row {} has no rating, it will be ranked last", row);
            return None;
        }

        match raw.trim().parse::<f64>() {
            Ok(rating) if !rating.is_nan() => Some(rating),
            _ => {
                log::warn!(
                    "Row {} has no usable rating ({:?}), it will be ranked last",
                    row,
                    raw
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::engine::genre_query::GenreQuery;

    fn load(content: &str) -> Result<MovieTable, LoadError> {
        CsvLoader::load_movies_from_reader(content.as_bytes())
    }

    #[test]
    fn loads_rows_in_file_order() {
        let table = load(
            "title,rating,year,genres,description\n\
             Heat,8.3,1995,Crime,Bank robbers\n\
             Up,8.2,2009,Animation,Balloons\n",
        )
        .unwrap();

        let titles: Vec<&str> = table.movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Heat", "Up"]);
        assert_eq!(table.movies()[0].year, 1995);
        assert_eq!(table.movies()[0].rating, Some(8.3));
    }

    #[test]
    fn column_order_and_extra_columns_do_not_matter() {
        let table = load(
            "id, description ,genres,year,rating,title\n\
             1,Bank robbers,Crime,1995,8.3,Heat\n",
        )
        .unwrap();

        assert_eq!(
            table.movies()[0],
            Movie {
                title: "Heat".to_string(),
                year: 1995,
                genres: "Crime".to_string(),
                description: "Bank robbers".to_string(),
                rating: Some(8.3),
            }
        );
    }

    #[test]
    fn normalizes_genres_description_and_year() {
        let table = load(
            "title,rating,year,genres,description\n\
             \" Padded \",7.0,,\"  Drama  \",\"  Slow burn \"\n\
             Blank,6.0,1999.0,,\n",
        )
        .unwrap();

        let padded = &table.movies()[0];
        assert_eq!(padded.title, " Padded ");
        assert_eq!(padded.year, DEFAULT_YEAR);
        assert_eq!(padded.genres, "Drama");
        assert_eq!(padded.description, "Slow burn");

        let blank = &table.movies()[1];
        assert_eq!(blank.year, 1999);
        assert_eq!(blank.genres, "");
        assert_eq!(blank.description, "");
    }

    #[test]
    fn short_rows_get_empty_fields() {
        let table = load("title,rating,year,genres,description\nStub,5.5\n").unwrap();

        let stub = &table.movies()[0];
        assert_eq!(stub.rating, Some(5.5));
        assert_eq!(stub.year, DEFAULT_YEAR);
        assert_eq!(stub.genres, "");
    }

    #[test]
    fn unusable_ratings_become_none() {
        let table = load(
            "title,rating,year,genres,description\n\
             A,,2001,Drama,x\n\
             B,great,2002,Drama,x\n\
             C,NaN,2003,Drama,x\n",
        )
        .unwrap();

        assert!(table.movies().iter().all(|m| m.rating.is_none()));
    }

    #[test]
    fn na_tokens_count_as_missing() {
        let table = load(
            "title,rating,year,genres,description\n\
             A,NA,NaN,N/A,null\n\
             B,7.5, NULL ,None,<NA>\n\
             C,6.0,#N/A,nan,n/a\n",
        )
        .unwrap();

        for movie in table.movies() {
            assert_eq!(movie.year, DEFAULT_YEAR);
            assert_eq!(movie.genres, "");
            assert_eq!(movie.description, "");
        }
        assert_eq!(table.movies()[0].rating, None);
        assert_eq!(table.movies()[1].rating, Some(7.5));
    }

    #[test]
    fn na_lookalikes_are_kept_as_text() {
        let table = load(
            "title,rating,year,genres,description\n\
             A,7.0,1990,Nature,Nan Goldin's photographs\n",
        )
        .unwrap();

        assert_eq!(table.movies()[0].genres, "Nature");
        assert_eq!(table.movies()[0].description, "Nan Goldin's photographs");
    }

    #[test]
    fn ratings_keep_full_precision() {
        let table = load(
            "title,rating,year,genres,description\n\
             Low,7.0000001,2001,Drama,x\n\
             High,7.0000002,2002,Drama,x\n",
        )
        .unwrap();

        let ranked: Vec<&str> = GenreQuery::recommend(&table, "drama")
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(ranked, vec!["High", "Low"]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = load("title,rating,genres,description\nA,1.0,Drama,x\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("year")));
    }

    #[test]
    fn reports_first_missing_column() {
        let err = load("genres\nDrama\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("title")));
    }

    #[test]
    fn invalid_year_is_an_error() {
        let err = load(
            "title,rating,year,genres,description\n\
             A,1.0,1990,Drama,x\n\
             B,1.0,nineties,Drama,x\n",
        )
        .unwrap_err();

        match err {
            LoadError::InvalidYear { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "nineties");
            }
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    #[test]
    fn empty_dataset_loads_as_empty_table() {
        let table = load("title,rating,year,genres,description\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title,rating,year,genres,description").unwrap();
        writeln!(file, "Heat,8.3,1995,Crime,Bank robbers").unwrap();

        let table = CsvLoader::load_movies_from_csv(file.path()).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvLoader::load_movies_from_csv(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
