//! Request and response shapes for the three resources.
//!
//! `id` is output-only: the input structs reject it along with any other
//! unknown key.

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::entities::{director, genre, movie};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieView {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl From<movie::Model> for MovieView {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            trailer: m.trailer,
            year: m.year,
            rating: m.rating,
            genre_id: m.genre_id,
            director_id: m.director_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DirectorView {
    pub id: i32,
    pub name: Option<String>,
}

impl From<director::Model> for DirectorView {
    fn from(m: director::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenreView {
    pub id: i32,
    pub name: Option<String>,
}

impl From<genre::Model> for GenreView {
    fn from(m: genre::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

/// Body of `POST /movies/` and `PUT /movies/{id}`. A missing key is stored
/// as null.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

/// Body of `PATCH /movies/{id}`. The outer `Option` records whether the key
/// was sent at all; `Some(None)` clears the column.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoviePatch {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub trailer: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub rating: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub genre_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub director_id: Option<Option<i32>>,
}

/// Body for creating or replacing a director or genre.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameInput {
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamePatch {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
}

/// `?genre_id=` with no value means no filter, same as leaving it out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MovieFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub director_id: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub genre_id: Option<i32>,
}

// Only runs when the key exists, so absence falls back to `Default` (None).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn movie_input_defaults_missing_fields_to_none() {
        let input: MovieInput = serde_json::from_value(json!({"title": "X", "year": 1999})).unwrap();
        assert_eq!(input.title.as_deref(), Some("X"));
        assert_eq!(input.year, Some(1999));
        assert_eq!(input.rating, None);
        assert_eq!(input.genre_id, None);
    }

    #[test]
    fn movie_input_rejects_id_and_unknown_keys() {
        assert!(serde_json::from_value::<MovieInput>(json!({"id": 3})).is_err());
        assert!(serde_json::from_value::<MovieInput>(json!({"budget": 10})).is_err());
    }

    #[test]
    fn movie_input_is_strict_about_types() {
        assert!(serde_json::from_value::<MovieInput>(json!({"year": "1999"})).is_err());
        assert!(serde_json::from_value::<MovieInput>(json!({"title": 5})).is_err());
    }

    #[test]
    fn patch_distinguishes_absent_from_null() {
        let patch: MoviePatch =
            serde_json::from_value(json!({"year": 2020, "trailer": null})).unwrap();
        assert_eq!(patch.year, Some(Some(2020)));
        assert_eq!(patch.trailer, Some(None));
        assert_eq!(patch.title, None);
        assert_eq!(patch.rating, None);
    }

    #[test]
    fn empty_name_patch_touches_nothing() {
        let patch: NamePatch = serde_json::from_value(json!({})).unwrap();
        assert_eq!(patch, NamePatch::default());
    }

    #[test]
    fn blank_filter_values_mean_no_filter() {
        let filter: MovieFilter = serde_json::from_value(json!({"genre_id": "", "director_id": "3"})).unwrap();
        assert_eq!(filter, MovieFilter { director_id: Some(3), genre_id: None });
        assert!(serde_json::from_value::<MovieFilter>(json!({"genre_id": "drama"})).is_err());
    }

    #[test]
    fn views_keep_non_ascii_text() {
        let view = GenreView { id: 1, name: Some("Драма".to_string()) };
        assert_eq!(serde_json::to_string(&view).unwrap(), r#"{"id":1,"name":"Драма"}"#);
    }
}
