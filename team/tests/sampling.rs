use std::collections::HashSet;

use pokemap_battle::advance;
use pokemap_protocol::{CatalogEntry, PokemonId, PokemonRecord};
use pokemap_team::{TeamError, TeamInitializer, creatures_from_catalog};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn catalog(size: u32) -> Vec<CatalogEntry> {
    (1..=size)
        .map(|id| CatalogEntry {
            id: Some(format!("doc-{}", id)),
            pokemon: PokemonRecord {
                pokemon_id: PokemonId::Text(id.to_string()),
                name: format!("Species{}", id),
                hp: 30 + id,
                attack: 40 + id,
                defense: 35,
                speed: 45,
                height: 1.0,
                weight: 10.0,
                capture_rate: 45,
                primary_type: "Normal".to_string(),
                secondary_type: None,
            },
            image_path: None,
        })
        .collect()
}

#[test]
fn sampled_teams_come_from_pool_without_repeats() {
    let creatures = creatures_from_catalog(&catalog(15));
    let pool_ids: HashSet<u32> = creatures.iter().map(|c| c.id).collect();
    let initializer = TeamInitializer::new();

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let teams = initializer.start(&creatures, &mut rng).unwrap();

        assert_eq!(teams.user.len(), 7);
        assert_eq!(teams.cpu.len(), 3);

        for team in [&teams.user, &teams.cpu] {
            let ids: HashSet<u32> = team.units.iter().filter_map(|u| u.species_id()).collect();
            assert_eq!(ids.len(), team.len(), "duplicate within a team");
            assert!(ids.is_subset(&pool_ids));
        }
    }
}

#[test]
fn teams_may_overlap() {
    // With exactly ten creatures, seven user picks and three CPU picks
    // overlap for almost every seed
    let creatures = creatures_from_catalog(&catalog(10));
    let initializer = TeamInitializer::new();

    let overlapping = (0..50).any(|seed| {
        let teams = initializer
            .start(&creatures, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        teams
            .cpu
            .units
            .iter()
            .filter_map(|u| u.species_id())
            .any(|id| teams.user.find_by_id(id).is_some())
    });
    assert!(overlapping);
}

#[test]
fn invalid_catalog_entries_are_skipped() {
    let mut entries = catalog(10);
    entries[3].pokemon.primary_type = "Shadow".to_string();

    let creatures = creatures_from_catalog(&entries);
    assert_eq!(creatures.len(), 9);

    let err = TeamInitializer::new()
        .start(&creatures, &mut StdRng::seed_from_u64(1))
        .unwrap_err();
    assert_eq!(
        err,
        TeamError::InsufficientPool {
            available: 9,
            required: 10
        }
    );
}

#[test]
fn started_game_plays_to_completion() {
    let creatures = creatures_from_catalog(&catalog(12));
    let teams = TeamInitializer::new()
        .start(&creatures, &mut StdRng::seed_from_u64(11))
        .unwrap();
    let picks: Vec<u32> = teams
        .user
        .units
        .iter()
        .take(3)
        .filter_map(|u| u.species_id())
        .collect();
    let mut session = teams.into_session(&picks, 3).unwrap();

    let mut turns = 0;
    loop {
        let result = advance(session).unwrap();
        turns += 1;
        if result.game_over {
            assert!(result.winner.is_some());
            break;
        }
        session = result.session;
        assert!(turns <= 11, "battle must end by the turn limit");
    }
}
