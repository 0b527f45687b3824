// src/services/child_service_tests.rs
//
// Unit tests for the child aggregate engine: seasons owned by shows, and
// episodes reached through the nested store (seasons inside shows).

use std::sync::Arc;

use uuid::Uuid;

use crate::application::converter::{EpisodeConverter, SeasonConverter, ShowConverter};
use crate::application::dto::{EpisodeDto, SeasonDto, ShowDto};
use crate::domain::{
    validate_episode, validate_season, validate_show, Language, Season, Show,
};
use crate::events::EventBus;
use crate::repositories::{InMemoryRepository, MovableRepository};
use crate::services::{
    ChildCatalogService, EpisodeService, NestedParentStore, ParentCatalogService, ParentStore,
    RootParentStore, SeasonService, ShowService,
};
use crate::validation::MovableValidator;

struct Fixture {
    shows: ShowService,
    seasons: SeasonService,
    episodes: EpisodeService,
}

fn fixture() -> Fixture {
    let repository: Arc<dyn MovableRepository<Show>> = Arc::new(InMemoryRepository::<Show>::new());
    let event_bus = Arc::new(EventBus::new());

    let shows_store: Arc<dyn ParentStore<Show>> =
        Arc::new(RootParentStore::new(repository.clone()));
    let seasons_store: Arc<dyn ParentStore<Season>> = Arc::new(NestedParentStore::new(
        shows_store.clone(),
        |show: &Show| &show.seasons,
        |show: &mut Show| &mut show.seasons,
    ));

    let shows = ParentCatalogService::new(
        repository,
        Arc::new(ShowConverter),
        MovableValidator::new("Show", "SHOW", validate_show),
        event_bus.clone(),
    )
    .with_carry_over(|updated: &mut Show, stored: &Show| updated.seasons = stored.seasons.clone());

    let seasons = ChildCatalogService::new(
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
    });

    let episodes = ChildCatalogService::new(
        seasons_store,
        |season: &Season| &season.episodes,
        |season: &mut Season| &mut season.episodes,
        Arc::new(EpisodeConverter),
        MovableValidator::new("Episode", "EPISODE", validate_episode),
        MovableValidator::shallow("Season", "SEASON"),
        event_bus,
    );

    Fixture {
        shows,
        seasons,
        episodes,
    }
}

fn show_dto(czech_name: &str) -> ShowDto {
    ShowDto {
        czech_name: Some(czech_name.to_string()),
        original_name: Some(czech_name.to_string()),
        csfd: Some(String::new()),
        imdb_code: Some(-1),
        wiki_en: Some(String::new()),
        wiki_cz: Some(String::new()),
        note: Some(String::new()),
        genres: Some(vec![Some(crate::application::dto::GenreDto {
            name: Some("Drama".to_string()),
            ..Default::default()
        })]),
        ..ShowDto::default()
    }
}

fn season_dto(number: i32) -> SeasonDto {
    SeasonDto {
        number: Some(number),
        start_year: Some(2000),
        end_year: Some(2001),
        language: Some(Language::EN),
        subtitles: Some(vec![Some(Language::CZ)]),
        note: Some(String::new()),
        ..SeasonDto::default()
    }
}

fn episode_dto(name: &str) -> EpisodeDto {
    EpisodeDto {
        number: Some(1),
        name: Some(name.to_string()),
        length: Some(45),
        note: Some(String::new()),
        ..EpisodeDto::default()
    }
}

fn stored_show(fixture: &Fixture) -> ShowDto {
    fixture
        .shows
        .get_all()
        .unwrap()
        .into_data()
        .unwrap()
        .remove(0)
}

/// A show with three seasons, returned as (show, seasons).
fn seeded(fixture: &Fixture) -> (ShowDto, Vec<SeasonDto>) {
    fixture.shows.add(Some(&show_dto("Test show"))).unwrap();
    let show = stored_show(fixture);
    for number in 1..=3 {
        let result = fixture.seasons.add(Some(&show), Some(&season_dto(number))).unwrap();
        assert!(result.is_ok());
    }
    let seasons = fixture.seasons.find(Some(&show)).unwrap().into_data().unwrap();
    (show, seasons)
}

fn season_numbers(fixture: &Fixture, show: &ShowDto) -> Vec<i32> {
    fixture
        .seasons
        .find(Some(show))
        .unwrap()
        .into_data()
        .unwrap()
        .into_iter()
        .map(|season| season.number.unwrap())
        .collect()
}

#[test]
fn test_add_appends_to_parent_with_contiguous_positions() {
    let fixture = fixture();
    let (show, seasons) = seeded(&fixture);

    assert_eq!(season_numbers(&fixture, &show), vec![1, 2, 3]);
    let positions: Vec<u32> = seasons.iter().map(|s| s.position.unwrap()).collect();
    assert_eq!(positions, vec![0, 1, 2]);
    assert!(seasons.iter().all(|s| s.id.is_some()));
}

#[test]
fn test_add_to_unknown_parent_reports_exactly_parent_not_exist() {
    let fixture = fixture();
    let phantom = ShowDto {
        id: Some(Uuid::new_v4()),
        ..show_dto("Phantom")
    };

    let result = fixture.seasons.add(Some(&phantom), Some(&season_dto(1))).unwrap();

    // the child was valid, so the parent's event is the only one
    let codes: Vec<&str> = result.events().iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, vec!["SHOW_NOT_EXIST"]);
}

#[test]
fn test_add_merges_parent_and_child_events_parent_first() {
    let fixture = fixture();

    let result = fixture.seasons.add(None, Some(&SeasonDto::default())).unwrap();

    let codes: Vec<&str> = result.events().iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes[0], "SHOW_NULL");
    assert!(codes.contains(&"SEASON_NUMBER_NOT_POSITIVE"));
    assert!(codes.contains(&"SEASON_NOTE_NULL"));
}

#[test]
fn test_add_null_child_reports_child_null() {
    let fixture = fixture();
    fixture.shows.add(Some(&show_dto("Test show"))).unwrap();
    let show = stored_show(&fixture);

    let result = fixture.seasons.add(Some(&show), None).unwrap();

    let codes: Vec<&str> = result.events().iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, vec!["SEASON_NULL"]);
}

#[test]
fn test_find_on_unknown_parent_is_parent_not_exist() {
    let fixture = fixture();
    let phantom = ShowDto {
        id: Some(Uuid::new_v4()),
        ..show_dto("Phantom")
    };

    let result = fixture.seasons.find(Some(&phantom)).unwrap();
    assert_eq!(result.events()[0].code, "SHOW_NOT_EXIST");

    let null_parent = fixture.seasons.find(None).unwrap();
    assert_eq!(null_parent.events()[0].code, "SHOW_NULL");
}

#[test]
fn test_get_scans_all_parents() {
    let fixture = fixture();
    let (_, seasons) = seeded(&fixture);

    let fetched = fixture.seasons.get(seasons[1].id).unwrap().into_data().unwrap();
    assert_eq!(fetched, Some(seasons[1].clone()));

    let unknown = fixture.seasons.get(Some(Uuid::new_v4())).unwrap();
    assert_eq!(unknown.into_data().unwrap(), None);

    let missing_id = fixture.seasons.get(None).unwrap();
    assert_eq!(missing_id.events()[0].code, "ID_NULL");
}

#[test]
fn test_update_preserves_position_and_owned_episodes() {
    let fixture = fixture();
    let (_, seasons) = seeded(&fixture);
    fixture
        .episodes
        .add(Some(&seasons[1]), Some(&episode_dto("Pilot")))
        .unwrap();

    let mut updated = seasons[1].clone();
    updated.number = Some(9);
    updated.position = Some(77);
    let result = fixture.seasons.update(Some(&updated)).unwrap();
    assert!(result.is_ok());

    let show = stored_show(&fixture);
    let stored = fixture.seasons.find(Some(&show)).unwrap().into_data().unwrap();
    assert_eq!(stored[1].number, Some(9));
    assert_eq!(stored[1].position, Some(1));

    let episodes = fixture
        .episodes
        .find(Some(&stored[1]))
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(episodes.len(), 1);
    assert_eq!(episodes[0].name.as_deref(), Some("Pilot"));
}

#[test]
fn test_update_of_orphan_child_is_the_childs_own_not_exist() {
    let fixture = fixture();
    seeded(&fixture);
    let orphan = SeasonDto {
        id: Some(Uuid::new_v4()),
        ..season_dto(1)
    };

    let result = fixture.seasons.update(Some(&orphan)).unwrap();

    let codes: Vec<&str> = result.events().iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, vec!["SEASON_NOT_EXIST"]);
    assert_eq!(result.events()[0].message, "Season doesn't exist.");
}

#[test]
fn test_remove_renumbers_remaining_siblings() {
    let fixture = fixture();
    let (show, seasons) = seeded(&fixture);

    fixture.seasons.remove(Some(&seasons[1])).unwrap();

    assert_eq!(season_numbers(&fixture, &show), vec![1, 3]);
    let positions: Vec<u32> = fixture
        .seasons
        .find(Some(&show))
        .unwrap()
        .into_data()
        .unwrap()
        .iter()
        .map(|s| s.position.unwrap())
        .collect();
    assert_eq!(positions, vec![0, 1]);
}

#[test]
fn test_duplicate_deep_copies_episodes_with_fresh_ids() {
    let fixture = fixture();
    let (show, seasons) = seeded(&fixture);
    fixture
        .episodes
        .add(Some(&seasons[0]), Some(&episode_dto("Pilot")))
        .unwrap();
    let source_episode = fixture
        .episodes
        .find(Some(&seasons[0]))
        .unwrap()
        .into_data()
        .unwrap()
        .remove(0);

    fixture.seasons.duplicate(Some(&seasons[0])).unwrap();

    let all = fixture.seasons.find(Some(&show)).unwrap().into_data().unwrap();
    assert_eq!(all.len(), 4);
    let copy = &all[3];
    assert_eq!(copy.number, seasons[0].number);
    assert_ne!(copy.id, seasons[0].id);
    assert_eq!(copy.position, Some(3));

    let copied_episodes = fixture
        .episodes
        .find(Some(copy))
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(copied_episodes.len(), 1);
    assert_ne!(copied_episodes[0].id, source_episode.id);
}

#[test]
fn test_move_up_swaps_siblings_and_edges_are_immovable() {
    let fixture = fixture();
    let (show, seasons) = seeded(&fixture);

    let result = fixture.seasons.move_up(Some(&seasons[1])).unwrap();
    assert!(result.is_ok());
    assert_eq!(season_numbers(&fixture, &show), vec![2, 1, 3]);

    let first = fixture
        .seasons
        .find(Some(&show))
        .unwrap()
        .into_data()
        .unwrap()
        .remove(0);
    let rejected = fixture.seasons.move_up(Some(&first)).unwrap();
    assert_eq!(rejected.events()[0].code, "SEASON_NOT_MOVABLE");
    assert_eq!(rejected.events()[0].message, "Season can't be moved up.");
    assert_eq!(season_numbers(&fixture, &show), vec![2, 1, 3]);
}

#[test]
fn test_move_down_then_up_restores_sibling_order() {
    let fixture = fixture();
    let (show, seasons) = seeded(&fixture);

    fixture.seasons.move_down(Some(&seasons[0])).unwrap();
    fixture.seasons.move_up(Some(&seasons[0])).unwrap();

    assert_eq!(season_numbers(&fixture, &show), vec![1, 2, 3]);
}

// ---------------------------------------------------------------------------
// Episodes: the same engine one nesting level down
// ---------------------------------------------------------------------------

#[test]
fn test_episode_mutations_persist_through_the_whole_show() {
    let fixture = fixture();
    let (_, seasons) = seeded(&fixture);

    for name in ["Pilot", "Two", "Three"] {
        let result = fixture
            .episodes
            .add(Some(&seasons[0]), Some(&episode_dto(name)))
            .unwrap();
        assert!(result.is_ok());
    }

    let episodes = fixture
        .episodes
        .find(Some(&seasons[0]))
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(episodes.len(), 3);
    let positions: Vec<u32> = episodes.iter().map(|e| e.position.unwrap()).collect();
    assert_eq!(positions, vec![0, 1, 2]);

    fixture.episodes.move_down(Some(&episodes[0])).unwrap();
    let reordered: Vec<String> = fixture
        .episodes
        .find(Some(&seasons[0]))
        .unwrap()
        .into_data()
        .unwrap()
        .into_iter()
        .map(|e| e.name.unwrap())
        .collect();
    assert_eq!(reordered, vec!["Two", "Pilot", "Three"]);

    // the mutation really landed inside the stored show aggregate
    let show = stored_show(&fixture);
    let stored_seasons = fixture.seasons.find(Some(&show)).unwrap().into_data().unwrap();
    let stored_episodes = fixture
        .episodes
        .find(Some(&stored_seasons[0]))
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(stored_episodes[0].name.as_deref(), Some("Two"));
}

#[test]
fn test_episode_update_and_remove_inside_nested_store() {
    let fixture = fixture();
    let (_, seasons) = seeded(&fixture);
    for name in ["Pilot", "Two"] {
        fixture
            .episodes
            .add(Some(&seasons[0]), Some(&episode_dto(name)))
            .unwrap();
    }
    let episodes = fixture
        .episodes
        .find(Some(&seasons[0]))
        .unwrap()
        .into_data()
        .unwrap();

    let mut renamed = episodes[0].clone();
    renamed.name = Some("Renamed".to_string());
    assert!(fixture.episodes.update(Some(&renamed)).unwrap().is_ok());

    assert!(fixture.episodes.remove(Some(&episodes[1])).unwrap().is_ok());

    let remaining = fixture
        .episodes
        .find(Some(&seasons[0]))
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name.as_deref(), Some("Renamed"));
    assert_eq!(remaining[0].position, Some(0));
}

#[test]
fn test_parent_update_carries_seasons_over() {
    let fixture = fixture();
    let (show, _) = seeded(&fixture);

    let mut renamed = show.clone();
    renamed.czech_name = Some("Renamed show".to_string());
    assert!(fixture.shows.update(Some(&renamed)).unwrap().is_ok());

    let stored = stored_show(&fixture);
    assert_eq!(stored.czech_name.as_deref(), Some("Renamed show"));
    assert_eq!(season_numbers(&fixture, &stored), vec![1, 2, 3]);
}
