pub const DEFAULT_YEAR: u32 = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: u32,
    pub genres: String,
    pub description: String,
    pub rating: Option<f64>,
}
