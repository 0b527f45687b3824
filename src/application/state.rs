// src/application/state.rs
//
// Wiring surface: injectable repositories and the fully wired catalog.

use std::sync::Arc;

use crate::application::converter::{
    BookConverter, EpisodeConverter, GameConverter, GenreConverter, MovieConverter, MusicConverter,
    PictureConverter, ProgramConverter, SeasonConverter, ShowConverter, SongConverter,
};
use crate::domain::{
    validate_book, validate_episode, validate_game, validate_genre, validate_movie, validate_music,
    validate_picture, validate_program, validate_season, validate_show, validate_song, Book, Game,
    Genre, Movie, Music, Picture, Program, Season, Show, Song,
};
use crate::events::EventBus;
use crate::repositories::{InMemoryRepository, MovableRepository};
use crate::services::{
    BookService, ChildCatalogService, EpisodeService, GameService, GenreService, MovieService,
    MusicService, NestedParentStore, ParentCatalogService, ParentStore, PictureService,
    ProgramService, RootParentStore, SeasonService, ShowService, SongService,
};
use crate::validation::MovableValidator;

/// The persistence collaborators, one per top-level aggregate type.
///
/// Children (seasons, episodes, songs) have no repository of their own;
/// they are persisted through their owning aggregate.
pub struct CatalogRepositories {
    pub movies: Arc<dyn MovableRepository<Movie>>,
    pub shows: Arc<dyn MovableRepository<Show>>,
    pub games: Arc<dyn MovableRepository<Game>>,
    pub music: Arc<dyn MovableRepository<Music>>,
    pub programs: Arc<dyn MovableRepository<Program>>,
    pub books: Arc<dyn MovableRepository<Book>>,
    pub genres: Arc<dyn MovableRepository<Genre>>,
    pub pictures: Arc<dyn MovableRepository<Picture>>,
}

impl CatalogRepositories {
    pub fn in_memory() -> Self {
        Self {
            movies: Arc::new(InMemoryRepository::<Movie>::new()),
            shows: Arc::new(InMemoryRepository::<Show>::new()),
            games: Arc::new(InMemoryRepository::<Game>::new()),
            music: Arc::new(InMemoryRepository::<Music>::new()),
            programs: Arc::new(InMemoryRepository::<Program>::new()),
            books: Arc::new(InMemoryRepository::<Book>::new()),
            genres: Arc::new(InMemoryRepository::<Genre>::new()),
            pictures: Arc::new(InMemoryRepository::<Picture>::new()),
        }
    }
}

/// All catalog services wired over one set of repositories and one event
/// bus.
///
/// The services are synchronous and stateless between calls; every
/// operation is a fresh read-validate-write cycle against its repository.
/// That cycle is NOT safe under concurrent writers to the same aggregate;
/// the design assumes a single writer at a time (enforced, if at all, by
/// the persistence collaborator).
pub struct Catalog {
    pub movies: MovieService,
    pub shows: ShowService,
    pub seasons: SeasonService,
    pub episodes: EpisodeService,
    pub games: GameService,
    pub music: MusicService,
    pub songs: SongService,
    pub programs: ProgramService,
    pub books: BookService,
    pub genres: GenreService,
    pub pictures: PictureService,
    pub event_bus: Arc<EventBus>,
}

impl Catalog {
    pub fn in_memory() -> Self {
        Self::new(CatalogRepositories::in_memory())
    }

    pub fn new(repositories: CatalogRepositories) -> Self {
        let event_bus = Arc::new(EventBus::new());

        let shows_store: Arc<dyn ParentStore<Show>> =
            Arc::new(RootParentStore::new(repositories.shows.clone()));
        let seasons_store: Arc<dyn ParentStore<Season>> = Arc::new(NestedParentStore::new(
            shows_store.clone(),
            |show: &Show| &show.seasons,
            |show: &mut Show| &mut show.seasons,
        ));
        let music_store: Arc<dyn ParentStore<Music>> =
            Arc::new(RootParentStore::new(repositories.music.clone()));

        Self {
            movies: ParentCatalogService::new(
                repositories.movies,
                Arc::new(MovieConverter),
                MovableValidator::new("Movie", "MOVIE", validate_movie),
                event_bus.clone(),
            ),
            shows: ParentCatalogService::new(
                repositories.shows,
                Arc::new(ShowConverter),
                MovableValidator::new("Show", "SHOW", validate_show),
                event_bus.clone(),
            )
            .with_carry_over(|updated: &mut Show, stored: &Show| {
                updated.seasons = stored.seasons.clone()
            }),
            seasons: ChildCatalogService::new(
                shows_store,
                |show: &Show| &show.seasons,
                |show: &mut Show| &mut show.seasons,
                Arc::new(SeasonConverter),
                MovableValidator::new("Season", "SEASON", validate_season),
                MovableValidator::shallow("Show", "SHOW"),
                event_bus.clone(),
            )
            .with_carry_over(|updated: &mut Season, stored: &Season| {
                updated.episodes = stored.episodes.clone()
            }),
            episodes: ChildCatalogService::new(
                seasons_store,
                |season: &Season| &season.episodes,
                |season: &mut Season| &mut season.episodes,
                Arc::new(EpisodeConverter),
                MovableValidator::new("Episode", "EPISODE", validate_episode),
                MovableValidator::shallow("Season", "SEASON"),
                event_bus.clone(),
            ),
            games: ParentCatalogService::new(
                repositories.games,
                Arc::new(GameConverter),
                MovableValidator::new("Game", "GAME", validate_game),
                event_bus.clone(),
            ),
            music: ParentCatalogService::new(
                repositories.music,
                Arc::new(MusicConverter),
                MovableValidator::new("Music", "MUSIC", validate_music),
                event_bus.clone(),
            )
            .with_carry_over(|updated: &mut Music, stored: &Music| {
                updated.songs = stored.songs.clone()
            }),
            songs: ChildCatalogService::new(
                music_store,
                |music: &Music| &music.songs,
                |music: &mut Music| &mut music.songs,
                Arc::new(SongConverter),
                MovableValidator::new("Song", "SONG", validate_song),
                MovableValidator::shallow("Music", "MUSIC"),
                event_bus.clone(),
            ),
            programs: ParentCatalogService::new(
                repositories.programs,
                Arc::new(ProgramConverter),
                MovableValidator::new("Program", "PROGRAM", validate_program),
                event_bus.clone(),
            ),
            books: ParentCatalogService::new(
                repositories.books,
                Arc::new(BookConverter),
                MovableValidator::new("Book", "BOOK", validate_book),
                event_bus.clone(),
            ),
            genres: ParentCatalogService::new(
                repositories.genres,
                Arc::new(GenreConverter),
                MovableValidator::new("Genre", "GENRE", validate_genre),
                event_bus.clone(),
            ),
            pictures: ParentCatalogService::new(
                repositories.pictures,
                Arc::new(PictureConverter),
                MovableValidator::new("Picture", "PICTURE", validate_picture),
                event_bus.clone(),
            ),
            event_bus,
        }
    }
}
