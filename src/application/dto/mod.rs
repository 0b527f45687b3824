// src/application/dto/mod.rs
//
// Data Transfer Objects - the wire shape of every catalog entity
//
// CRITICAL PRINCIPLES:
// - DTOs are boundary representations; every field a caller may omit is
//   an Option so absence survives deserialization and gets validated
// - Collections are Vec<Option<_>> so a JSON null element is reported,
//   not silently dropped
// - Owned children (seasons, episodes, songs) never travel on a parent
//   DTO; they go through the child services

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Language;

// ============================================================================
// MOVIE
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: Option<Uuid>,
    pub czech_name: Option<String>,
    pub original_name: Option<String>,
    pub year: Option<i32>,
    pub language: Option<Language>,
    pub subtitles: Option<Vec<Option<Language>>>,
    /// Lengths of individual media in minutes
    pub media: Option<Vec<Option<i32>>>,
    pub csfd: Option<String>,
    pub imdb_code: Option<i32>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub picture: Option<Uuid>,
    pub note: Option<String>,
    pub position: Option<u32>,
    pub genres: Option<Vec<Option<GenreDto>>>,
}

// ============================================================================
// SHOW / SEASON / EPISODE
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowDto {
    pub id: Option<Uuid>,
    pub czech_name: Option<String>,
    pub original_name: Option<String>,
    pub csfd: Option<String>,
    pub imdb_code: Option<i32>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub picture: Option<Uuid>,
    pub note: Option<String>,
    pub position: Option<u32>,
    pub genres: Option<Vec<Option<GenreDto>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonDto {
    pub id: Option<Uuid>,
    pub number: Option<i32>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub language: Option<Language>,
    pub subtitles: Option<Vec<Option<Language>>>,
    pub note: Option<String>,
    pub position: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeDto {
    pub id: Option<Uuid>,
    pub number: Option<i32>,
    pub name: Option<String>,
    /// Length in minutes
    pub length: Option<i32>,
    pub note: Option<String>,
    pub position: Option<u32>,
}

// ============================================================================
// GAME
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameDto {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub media_count: Option<i32>,
    #[serde(default)]
    pub crack: bool,
    #[serde(default)]
    pub serial_key: bool,
    #[serde(default)]
    pub patch: bool,
    #[serde(default)]
    pub trainer: bool,
    #[serde(default)]
    pub trainer_data: bool,
    #[serde(default)]
    pub editor: bool,
    #[serde(default)]
    pub saves: bool,
    pub other_data: Option<String>,
    pub note: Option<String>,
    pub position: Option<u32>,
}

// ============================================================================
// MUSIC / SONG
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MusicDto {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub media_count: Option<i32>,
    pub note: Option<String>,
    pub position: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SongDto {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    /// Length in seconds
    pub length: Option<i32>,
    pub note: Option<String>,
    pub position: Option<u32>,
}

// ============================================================================
// PROGRAM
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramDto {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub media_count: Option<i32>,
    #[serde(default)]
    pub crack: bool,
    #[serde(default)]
    pub serial_key: bool,
    pub other_data: Option<String>,
    pub note: Option<String>,
    pub position: Option<u32>,
}

// ============================================================================
// BOOK
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: Option<Uuid>,
    pub czech_name: Option<String>,
    pub original_name: Option<String>,
    pub languages: Option<Vec<Option<Language>>>,
    pub note: Option<String>,
    pub position: Option<u32>,
}

// ============================================================================
// GENRE
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenreDto {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub position: Option<u32>,
}

// ============================================================================
// PICTURE
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PictureDto {
    pub id: Option<Uuid>,
    pub content: Option<Vec<u8>>,
    pub position: Option<u32>,
}

// ============================================================================
// IDENTIFIABLE IMPLS
// ============================================================================

macro_rules! impl_identifiable {
    ($($dto:ty),+ $(,)?) => {
        $(
            impl crate::domain::Identifiable for $dto {
                fn id(&self) -> Option<Uuid> {
                    self.id
                }
            }
        )+
    };
}

impl_identifiable!(
    MovieDto, ShowDto, SeasonDto, EpisodeDto, GameDto, MusicDto, SongDto, ProgramDto, BookDto,
    GenreDto, PictureDto,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_array_elements_survive_deserialization() {
        let movie: MovieDto = serde_json::from_value(serde_json::json!({
            "czech_name": "Vetrelec",
            "subtitles": ["CZ", null],
            "genres": [null],
        }))
        .unwrap();

        assert_eq!(movie.subtitles, Some(vec![Some(Language::CZ), None]));
        assert_eq!(movie.genres, Some(vec![None]));
    }

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        let episode: EpisodeDto = serde_json::from_str("{}").unwrap();
        assert_eq!(episode, EpisodeDto::default());
    }
}
