use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Width the poster is requested at when building a question.
const POSTER_WIDTH: u32 = 600;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    #[serde(rename = "imDbRating", alias = "rating", default)]
    pub rating: String,
    #[serde(rename = "image", alias = "imageURL", default)]
    pub image_url: String,
}

/// Payload returned by the catalog endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MostPopularMovies {
    #[serde(rename = "errorMessage", default)]
    pub error_message: String,
    #[serde(default)]
    pub items: Vec<Movie>,
}

impl Movie {
    pub fn new(title: &str, rating: &str, image_url: &str) -> Self {
        Self {
            title: title.to_string(),
            rating: rating.to_string(),
            image_url: image_url.to_string(),
        }
    }

    /// Numeric rating; anything that doesn't parse counts as zero.
    pub fn rating_value(&self) -> f32 {
        self.rating.trim().parse().unwrap_or(0.0)
    }

    /// IMDb poster urls carry their sizing after a `._` marker. Swap it for a
    /// fixed-width variant so the download stays small.
    pub fn resized_image_url(&self) -> String {
        match self.image_url.split_once("._") {
            Some((prefix, _)) => format!("{prefix}._V0_UX{POSTER_WIDTH}_.jpg"),
            None => self.image_url.clone(),
        }
    }
}

impl Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.rating)
    }
}

impl MostPopularMovies {
    pub fn is_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_value_parses_decimal_strings() {
        assert_eq!(Movie::new("A", "8.5", "").rating_value(), 8.5);
        assert_eq!(Movie::new("A", " 7.0 ", "").rating_value(), 7.0);
    }

    #[test]
    fn test_unparsable_rating_is_zero() {
        assert_eq!(Movie::new("A", "", "").rating_value(), 0.0);
        assert_eq!(Movie::new("A", "n/a", "").rating_value(), 0.0);
    }

    #[test]
    fn test_resized_image_url() {
        let movie = Movie::new(
            "The Shawshank Redemption",
            "9.2",
            "https://m.media-amazon.com/images/M/MV5BMDFkYT._V1_Ratio0.6716_AL_.jpg",
        );
        assert_eq!(
            movie.resized_image_url(),
            "https://m.media-amazon.com/images/M/MV5BMDFkYT._V0_UX600_.jpg"
        );

        let plain = Movie::new("Plain", "5.0", "https://example.com/poster.jpg");
        assert_eq!(plain.resized_image_url(), "https://example.com/poster.jpg");
    }

    #[test]
    fn test_payload_accepts_both_field_spellings() {
        let imdb = r#"{"errorMessage":"","items":[{"id":"tt1","title":"Heat","fullTitle":"Heat (1995)","imDbRating":"8.3","image":"https://x/heat.jpg"}]}"#;
        let payload: MostPopularMovies = serde_json::from_str(imdb).unwrap();
        assert!(!payload.is_error());
        assert_eq!(payload.items[0], Movie::new("Heat", "8.3", "https://x/heat.jpg"));

        let short = r#"{"errorMessage":"","items":[{"title":"Heat","rating":"8.3","imageURL":"https://x/heat.jpg"}]}"#;
        let payload: MostPopularMovies = serde_json::from_str(short).unwrap();
        assert_eq!(payload.items[0].rating_value(), 8.3);
    }

    #[test]
    fn test_payload_error_message() {
        let payload: MostPopularMovies =
            serde_json::from_str(r#"{"errorMessage":"Limit Exceeded","items":[]}"#).unwrap();
        assert!(payload.is_error());
    }
}
