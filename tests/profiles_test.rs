use league_ledger::domain::MatchOutcome;
use league_ledger::engine::PlayerEvent;
use league_ledger::report::{
    club_profile, player_profile, tournament_profile, StandingsOutcome, UNKNOWN_CLUB_LABEL,
};
use league_ledger::{ClubId, EventKind, MatchStatus, PlayerId, Snapshot, TournamentId};
use rust_decimal::Decimal;
use serde_json::json;

fn snapshot() -> Snapshot {
    serde_json::from_value(json!({
        "tournaments": [
            {"id": 1, "userId": 1, "name": "Liga Verão", "game": "efootball", "startDate": "2024-01-15"},
            {"id": 2, "userId": 1, "name": "Copa", "game": "pes"}
        ],
        "clubs": [
            {"id": 1, "userId": 1, "name": "Azul FC", "country": "Brasil", "tournamentId": 1},
            {"id": 2, "userId": 1, "name": "Rubro", "country": "Portugal", "tournamentId": 1},
            {"id": 3, "userId": 1, "name": "Cup Club", "country": "Brasil", "tournamentId": 2}
        ],
        "players": [
            {"id": 5, "userId": 1, "name": "Rafa", "clubId": 1, "age": 24, "nationality": "Brasil", "position": "ATA"},
            {"id": 6, "userId": 1, "name": "Hugo", "clubId": 1, "age": 31, "nationality": "Argentina"},
            {"id": 7, "userId": 1, "name": "Lena", "clubId": 1, "nationality": "Brasil"},
            {"id": 8, "userId": 1, "name": "Nuno", "clubId": 2, "age": 22, "nationality": "Portugal"}
        ],
        "matches": [
            {"id": 21, "userId": 1, "tournamentId": 1, "homeTeamId": 2, "awayTeamId": 1, "round": 2,
             "homeScore": 1, "awayScore": 1, "date": "2024-01-27T20:00:00",
             "events": [{"type": "Gol", "playerId": 8}, {"type": "Gol", "playerId": 5},
                        {"type": "Assistência", "player": "Hugo"}]},
            {"id": 11, "userId": 1, "tournamentId": 1, "homeTeamId": 1, "awayTeamId": 2, "round": 1,
             "homeScore": 2, "awayScore": 0, "date": "2024-01-20T20:00:00",
             "events": [{"type": "Gol", "playerId": 5}, {"type": "Cartão Amarelo", "playerId": 5},
                        {"type": "Gol", "playerId": 6}]},
            {"id": 31, "userId": 1, "tournamentId": 1, "homeTeamId": 1, "awayTeamId": 404, "round": 3},
            {"id": 41, "userId": 1, "tournamentId": 2, "homeTeamId": 3, "awayTeamId": 1, "round": 1,
             "homeScore": 0, "awayScore": 3,
             "events": [{"type": "Gol", "playerId": 5}]}
        ]
    }))
    .unwrap()
}

#[test]
fn test_player_profile_spans_all_tournaments() {
    let profile = player_profile(&snapshot(), PlayerId::new(5)).unwrap();
    assert_eq!(profile.club.as_deref(), Some("Azul FC"));
    assert_eq!(profile.stats.matches, 3);
    assert_eq!(profile.stats.goals, 3);
    assert_eq!(profile.stats.yellow_cards, 1);
    // (2 * 3 + 0) / 3
    assert_eq!(profile.rating, Some(Decimal::new(20, 1)));

    let scores: Vec<_> = profile.history.iter().map(|h| h.score.as_str()).collect();
    assert_eq!(scores, vec!["1 - 1", "2 - 0", "0 - 3"]);
    assert_eq!(profile.history[0].home_club, "Rubro");
    assert_eq!(
        profile.history[1].events,
        vec![
            PlayerEvent { sequence: 0, kind: EventKind::Goal },
            PlayerEvent { sequence: 1, kind: EventKind::YellowCard },
        ]
    );
}

#[test]
fn test_player_profile_without_matches_has_no_rating() {
    let profile = player_profile(&snapshot(), PlayerId::new(7)).unwrap();
    assert_eq!(profile.stats.matches, 0);
    assert_eq!(profile.rating, None);
    assert!(profile.history.is_empty());

    let json = serde_json::to_value(&profile).unwrap();
    assert!(json["rating"].is_null());
}

#[test]
fn test_player_rating_serializes_as_number() {
    let profile = player_profile(&snapshot(), PlayerId::new(8)).unwrap();
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["rating"], json!(2.0));
}

#[test]
fn test_club_profile() {
    let profile = club_profile(&snapshot(), ClubId::new(1)).unwrap();
    assert_eq!(profile.tournament.as_deref(), Some("Liga Verão"));

    // Includes the cup match of another tournament; the scheduled match is left out.
    assert_eq!(profile.stats.played, 3);
    assert_eq!((profile.stats.wins, profile.stats.draws, profile.stats.losses), (2, 1, 0));
    assert_eq!(profile.points, 7);
    assert_eq!(profile.goal_difference, 5);

    assert_eq!(profile.squad.players, 3);
    // (24 + 31 + 0) / 3 = 18.33
    assert_eq!(profile.squad.average_age, 18);
    assert_eq!(profile.squad.foreign_players, 1);

    let outcomes: Vec<_> = profile.matches.iter().map(|m| m.outcome).collect();
    assert_eq!(outcomes, vec![MatchOutcome::Draw, MatchOutcome::Win, MatchOutcome::Win]);

    let scorers: Vec<_> = profile
        .top_scorers
        .iter()
        .map(|r| (r.name.as_str(), r.count))
        .collect();
    assert_eq!(scorers, vec![("Rafa", 3), ("Hugo", 1)]);
    assert_eq!(profile.top_assists.len(), 1);
    assert_eq!(profile.top_assists[0].name, "Hugo");

    let hugo = profile.members.iter().find(|m| m.name == "Hugo").unwrap();
    assert_eq!(hugo.stats.matches, 2);
}

#[test]
fn test_tournament_profile() {
    let profile = tournament_profile(&snapshot(), TournamentId::new(1)).unwrap();
    assert_eq!(profile.game, "eFootball");

    let rounds: Vec<_> = profile.rounds.iter().map(|g| g.round).collect();
    assert_eq!(rounds, vec![Some(1), Some(2), Some(3)]);
    let scheduled = &profile.rounds[2].matches[0];
    assert_eq!(scheduled.status, MatchStatus::Scheduled);
    assert_eq!(scheduled.home_score, None);
    assert_eq!(scheduled.away_club, UNKNOWN_CLUB_LABEL);

    match &profile.standings {
        StandingsOutcome::Table(rows) => {
            assert_eq!(rows[0].club_name, "Azul FC");
            assert_eq!(rows[0].points, 4);
        }
        other => panic!("expected standings, got {:?}", other),
    }

    // The cup goal does not count here.
    assert_eq!(profile.top_scorers[0].name, "Rafa");
    assert_eq!(profile.top_scorers[0].count, 2);

    let cards: Vec<_> = profile
        .clubs
        .iter()
        .map(|c| (c.name.as_str(), c.played, c.wins, c.squad_size))
        .collect();
    assert_eq!(cards, vec![("Azul FC", 2, 1, 3), ("Rubro", 2, 0, 1)]);
}

#[test]
fn test_tournament_without_clubs() {
    let mut snapshot = snapshot();
    snapshot.clubs.retain(|c| c.id != ClubId::new(3));
    let profile = tournament_profile(&snapshot, TournamentId::new(2)).unwrap();
    assert_eq!(profile.game, "pes");
    assert_eq!(profile.standings, StandingsOutcome::NoClubs);
    assert!(profile.clubs.is_empty());
}

#[test]
fn test_missing_entities_yield_none() {
    let snapshot = snapshot();
    assert!(player_profile(&snapshot, PlayerId::new(999)).is_none());
    assert!(club_profile(&snapshot, ClubId::new(999)).is_none());
    assert!(tournament_profile(&snapshot, TournamentId::new(999)).is_none());
}
