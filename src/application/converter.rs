// src/application/converter.rs
//
// Converters between wire entities and domain entities
//
// CRITICAL PRINCIPLES:
// - Conversion is an opaque, bidirectional, infallible mapping
// - Engines convert only validated input, so absent optional fields fall
//   back to defaults instead of failing
// - Owned children never travel on the wire; converters leave them empty
//   and the engines carry them over from stored state

use crate::application::dto::{
    BookDto, EpisodeDto, GameDto, GenreDto, MovieDto, MusicDto, PictureDto, ProgramDto, SeasonDto,
    ShowDto, SongDto,
};
use crate::domain::{
    Book, Episode, Game, Genre, Language, Movie, Music, Picture, Program, Season, Show, Song,
};

/// Bidirectional mapping between the domain shape and the wire shape.
pub trait Converter<D, E>: Send + Sync {
    fn to_entity(&self, domain: &D) -> E;

    fn to_domain(&self, entity: &E) -> D;

    fn to_entity_list(&self, domains: &[D]) -> Vec<E> {
        domains.iter().map(|domain| self.to_entity(domain)).collect()
    }
}

fn languages_to_wire(languages: &[Language]) -> Option<Vec<Option<Language>>> {
    Some(languages.iter().copied().map(Some).collect())
}

fn languages_to_domain(languages: Option<&Vec<Option<Language>>>) -> Vec<Language> {
    languages
        .map(|list| list.iter().copied().flatten().collect())
        .unwrap_or_default()
}

// ============================================================================
// MOVIE
// ============================================================================

pub struct MovieConverter;

impl Converter<Movie, MovieDto> for MovieConverter {
    fn to_entity(&self, domain: &Movie) -> MovieDto {
        MovieDto {
            id: domain.id,
            czech_name: Some(domain.czech_name.clone()),
            original_name: Some(domain.original_name.clone()),
            year: Some(domain.year),
            language: Some(domain.language),
            subtitles: languages_to_wire(&domain.subtitles),
            media: Some(domain.media.iter().copied().map(Some).collect()),
            csfd: Some(domain.csfd.clone()),
            imdb_code: Some(domain.imdb_code),
            wiki_en: Some(domain.wiki_en.clone()),
            wiki_cz: Some(domain.wiki_cz.clone()),
            picture: domain.picture,
            note: Some(domain.note.clone()),
            position: Some(domain.position),
            genres: Some(GenreConverter.to_entity_list(&domain.genres).into_iter().map(Some).collect()),
        }
    }

    fn to_domain(&self, entity: &MovieDto) -> Movie {
        Movie {
            id: entity.id,
            czech_name: entity.czech_name.clone().unwrap_or_default(),
            original_name: entity.original_name.clone().unwrap_or_default(),
            year: entity.year.unwrap_or_default(),
            language: entity.language.unwrap_or_default(),
            subtitles: languages_to_domain(entity.subtitles.as_ref()),
            media: entity
                .media
                .as_ref()
                .map(|media| media.iter().copied().flatten().collect())
                .unwrap_or_default(),
            csfd: entity.csfd.clone().unwrap_or_default(),
            imdb_code: entity.imdb_code.unwrap_or(-1),
            wiki_en: entity.wiki_en.clone().unwrap_or_default(),
            wiki_cz: entity.wiki_cz.clone().unwrap_or_default(),
            picture: entity.picture,
            note: entity.note.clone().unwrap_or_default(),
            position: entity.position.unwrap_or_default(),
            genres: entity
                .genres
                .as_ref()
                .map(|genres| {
                    genres
                        .iter()
                        .flatten()
                        .map(|genre| GenreConverter.to_domain(genre))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

// ============================================================================
// SHOW / SEASON / EPISODE
// ============================================================================

pub struct ShowConverter;

impl Converter<Show, ShowDto> for ShowConverter {
    fn to_entity(&self, domain: &Show) -> ShowDto {
        ShowDto {
            id: domain.id,
            czech_name: Some(domain.czech_name.clone()),
            original_name: Some(domain.original_name.clone()),
            csfd: Some(domain.csfd.clone()),
            imdb_code: Some(domain.imdb_code),
            wiki_en: Some(domain.wiki_en.clone()),
            wiki_cz: Some(domain.wiki_cz.clone()),
            picture: domain.picture,
            note: Some(domain.note.clone()),
            position: Some(domain.position),
            genres: Some(GenreConverter.to_entity_list(&domain.genres).into_iter().map(Some).collect()),
        }
    }

    fn to_domain(&self, entity: &ShowDto) -> Show {
        Show {
            id: entity.id,
            czech_name: entity.czech_name.clone().unwrap_or_default(),
            original_name: entity.original_name.clone().unwrap_or_default(),
            csfd: entity.csfd.clone().unwrap_or_default(),
            imdb_code: entity.imdb_code.unwrap_or(-1),
            wiki_en: entity.wiki_en.clone().unwrap_or_default(),
            wiki_cz: entity.wiki_cz.clone().unwrap_or_default(),
            picture: entity.picture,
            note: entity.note.clone().unwrap_or_default(),
            position: entity.position.unwrap_or_default(),
            genres: entity
                .genres
                .as_ref()
                .map(|genres| {
                    genres
                        .iter()
                        .flatten()
                        .map(|genre| GenreConverter.to_domain(genre))
                        .collect()
                })
                .unwrap_or_default(),
            seasons: Vec::new(),
        }
    }
}

pub struct SeasonConverter;

impl Converter<Season, SeasonDto> for SeasonConverter {
    fn to_entity(&self, domain: &Season) -> SeasonDto {
        SeasonDto {
            id: domain.id,
            number: Some(domain.number),
            start_year: Some(domain.start_year),
            end_year: Some(domain.end_year),
            language: Some(domain.language),
            subtitles: languages_to_wire(&domain.subtitles),
            note: Some(domain.note.clone()),
            position: Some(domain.position),
        }
    }

    fn to_domain(&self, entity: &SeasonDto) -> Season {
        Season {
            id: entity.id,
            number: entity.number.unwrap_or_default(),
            start_year: entity.start_year.unwrap_or_default(),
            end_year: entity.end_year.unwrap_or_default(),
            language: entity.language.unwrap_or_default(),
            subtitles: languages_to_domain(entity.subtitles.as_ref()),
            note: entity.note.clone().unwrap_or_default(),
            position: entity.position.unwrap_or_default(),
            episodes: Vec::new(),
        }
    }
}

pub struct EpisodeConverter;

impl Converter<Episode, EpisodeDto> for EpisodeConverter {
    fn to_entity(&self, domain: &Episode) -> EpisodeDto {
        EpisodeDto {
            id: domain.id,
            number: Some(domain.number),
            name: Some(domain.name.clone()),
            length: Some(domain.length),
            note: Some(domain.note.clone()),
            position: Some(domain.position),
        }
    }

    fn to_domain(&self, entity: &EpisodeDto) -> Episode {
        Episode {
            id: entity.id,
            number: entity.number.unwrap_or_default(),
            name: entity.name.clone().unwrap_or_default(),
            length: entity.length.unwrap_or_default(),
            note: entity.note.clone().unwrap_or_default(),
            position: entity.position.unwrap_or_default(),
        }
    }
}

// ============================================================================
// GAME
// ============================================================================

pub struct GameConverter;

impl Converter<Game, GameDto> for GameConverter {
    fn to_entity(&self, domain: &Game) -> GameDto {
        GameDto {
            id: domain.id,
            name: Some(domain.name.clone()),
            wiki_en: Some(domain.wiki_en.clone()),
            wiki_cz: Some(domain.wiki_cz.clone()),
            media_count: Some(domain.media_count),
            crack: domain.crack,
            serial_key: domain.serial_key,
            patch: domain.patch,
            trainer: domain.trainer,
            trainer_data: domain.trainer_data,
            editor: domain.editor,
            saves: domain.saves,
            other_data: Some(domain.other_data.clone()),
            note: Some(domain.note.clone()),
            position: Some(domain.position),
        }
    }

    fn to_domain(&self, entity: &GameDto) -> Game {
        Game {
            id: entity.id,
            name: entity.name.clone().unwrap_or_default(),
            wiki_en: entity.wiki_en.clone().unwrap_or_default(),
            wiki_cz: entity.wiki_cz.clone().unwrap_or_default(),
            media_count: entity.media_count.unwrap_or_default(),
            crack: entity.crack,
            serial_key: entity.serial_key,
            patch: entity.patch,
            trainer: entity.trainer,
            trainer_data: entity.trainer_data,
            editor: entity.editor,
            saves: entity.saves,
            other_data: entity.other_data.clone().unwrap_or_default(),
            note: entity.note.clone().unwrap_or_default(),
            position: entity.position.unwrap_or_default(),
        }
    }
}

// ============================================================================
// MUSIC / SONG
// ============================================================================

pub struct MusicConverter;

impl Converter<Music, MusicDto> for MusicConverter {
    fn to_entity(&self, domain: &Music) -> MusicDto {
        MusicDto {
            id: domain.id,
            name: Some(domain.name.clone()),
            wiki_en: Some(domain.wiki_en.clone()),
            wiki_cz: Some(domain.wiki_cz.clone()),
            media_count: Some(domain.media_count),
            note: Some(domain.note.clone()),
            position: Some(domain.position),
        }
    }

    fn to_domain(&self, entity: &MusicDto) -> Music {
        Music {
            id: entity.id,
            name: entity.name.clone().unwrap_or_default(),
            wiki_en: entity.wiki_en.clone().unwrap_or_default(),
            wiki_cz: entity.wiki_cz.clone().unwrap_or_default(),
            media_count: entity.media_count.unwrap_or_default(),
            note: entity.note.clone().unwrap_or_default(),
            position: entity.position.unwrap_or_default(),
            songs: Vec::new(),
        }
    }
}

pub struct SongConverter;

impl Converter<Song, SongDto> for SongConverter {
    fn to_entity(&self, domain: &Song) -> SongDto {
        SongDto {
            id: domain.id,
            name: Some(domain.name.clone()),
            length: Some(domain.length),
            note: Some(domain.note.clone()),
            position: Some(domain.position),
        }
    }

    fn to_domain(&self, entity: &SongDto) -> Song {
        Song {
            id: entity.id,
            name: entity.name.clone().unwrap_or_default(),
            length: entity.length.unwrap_or_default(),
            note: entity.note.clone().unwrap_or_default(),
            position: entity.position.unwrap_or_default(),
        }
    }
}

// ============================================================================
// PROGRAM
// ============================================================================

pub struct ProgramConverter;

impl Converter<Program, ProgramDto> for ProgramConverter {
    fn to_entity(&self, domain: &Program) -> ProgramDto {
        ProgramDto {
            id: domain.id,
            name: Some(domain.name.clone()),
            wiki_en: Some(domain.wiki_en.clone()),
            wiki_cz: Some(domain.wiki_cz.clone()),
            media_count: Some(domain.media_count),
            crack: domain.crack,
            serial_key: domain.serial_key,
            other_data: Some(domain.other_data.clone()),
            note: Some(domain.note.clone()),
            position: Some(domain.position),
        }
    }

    fn to_domain(&self, entity: &ProgramDto) -> Program {
        Program {
            id: entity.id,
            name: entity.name.clone().unwrap_or_default(),
            wiki_en: entity.wiki_en.clone().unwrap_or_default(),
            wiki_cz: entity.wiki_cz.clone().unwrap_or_default(),
            media_count: entity.media_count.unwrap_or_default(),
            crack: entity.crack,
            serial_key: entity.serial_key,
            other_data: entity.other_data.clone().unwrap_or_default(),
            note: entity.note.clone().unwrap_or_default(),
            position: entity.position.unwrap_or_default(),
        }
    }
}

// ============================================================================
// BOOK
// ============================================================================

pub struct BookConverter;

impl Converter<Book, BookDto> for BookConverter {
    fn to_entity(&self, domain: &Book) -> BookDto {
        BookDto {
            id: domain.id,
            czech_name: Some(domain.czech_name.clone()),
            original_name: Some(domain.original_name.clone()),
            languages: languages_to_wire(&domain.languages),
            note: Some(domain.note.clone()),
            position: Some(domain.position),
        }
    }

    fn to_domain(&self, entity: &BookDto) -> Book {
        Book {
            id: entity.id,
            czech_name: entity.czech_name.clone().unwrap_or_default(),
            original_name: entity.original_name.clone().unwrap_or_default(),
            languages: languages_to_domain(entity.languages.as_ref()),
            note: entity.note.clone().unwrap_or_default(),
            position: entity.position.unwrap_or_default(),
        }
    }
}

// ============================================================================
// GENRE
// ============================================================================

pub struct GenreConverter;

impl Converter<Genre, GenreDto> for GenreConverter {
    fn to_entity(&self, domain: &Genre) -> GenreDto {
        GenreDto {
            id: domain.id,
            name: Some(domain.name.clone()),
            position: Some(domain.position),
        }
    }

    fn to_domain(&self, entity: &GenreDto) -> Genre {
        Genre {
            id: entity.id,
            name: entity.name.clone().unwrap_or_default(),
            position: entity.position.unwrap_or_default(),
        }
    }
}

// ============================================================================
// PICTURE
// ============================================================================

pub struct PictureConverter;

impl Converter<Picture, PictureDto> for PictureConverter {
    fn to_entity(&self, domain: &Picture) -> PictureDto {
        PictureDto {
            id: domain.id,
            content: Some(domain.content.clone()),
            position: Some(domain.position),
        }
    }

    fn to_domain(&self, entity: &PictureDto) -> Picture {
        Picture {
            id: entity.id,
            content: entity.content.clone().unwrap_or_default(),
            position: entity.position.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_round_trip_preserves_fields() {
        let movie = Movie {
            id: Some(uuid::Uuid::new_v4()),
            czech_name: "Vetrelec".to_string(),
            original_name: "Alien".to_string(),
            year: 1979,
            language: Language::EN,
            subtitles: vec![Language::CZ],
            media: vec![117],
            csfd: "csfd".to_string(),
            imdb_code: 78748,
            wiki_en: "wiki-en".to_string(),
            wiki_cz: "wiki-cz".to_string(),
            picture: None,
            note: String::new(),
            position: 3,
            genres: vec![Genre {
                id: None,
                name: "Sci-Fi".to_string(),
                position: 0,
            }],
        };

        let round_tripped = MovieConverter.to_domain(&MovieConverter.to_entity(&movie));
        assert_eq!(round_tripped, movie);
    }

    #[test]
    fn test_show_wire_shape_drops_seasons() {
        let show = Show {
            seasons: vec![Season::default()],
            ..Show::default()
        };

        let entity = ShowConverter.to_entity(&show);
        let domain = ShowConverter.to_domain(&entity);
        assert!(domain.seasons.is_empty());
    }
}
