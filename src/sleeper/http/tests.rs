//! HTTP tests against a mocked Sleeper API

use super::*;
use crate::cli::types::{PlayerId, RosterId};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn mock_client(server: &MockServer) -> SleeperClient {
    SleeperClient::with_base_url(build_client().unwrap(), server.uri())
}

async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_nfl_state_and_last_completed_week() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/state/nfl"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "week": 7,
                "season": "2025",
                "season_type": "regular"
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let state = client.get_nfl_state().await.unwrap();
        assert_eq!(state.week, Some(7));
        assert_eq!(client.last_completed_week().await.unwrap(), Week::new(6));
    }

    #[tokio::test]
    async fn test_preseason_resolves_to_week_one() {
        let server = MockServer::start().await;
        mount_json(&server, "/state/nfl", json!({ "week": 0, "season_type": "pre" })).await;

        let client = mock_client(&server).await;
        assert_eq!(client.last_completed_week().await.unwrap(), Week::new(1));
    }

    #[tokio::test]
    async fn test_null_league_is_no_data() {
        let server = MockServer::start().await;
        mount_json(&server, "/league/42", Value::Null).await;

        let client = mock_client(&server).await;
        let result = client.get_league(LeagueId::new(42)).await;
        assert!(matches!(result, Err(RecapError::NoData { endpoint }) if endpoint == "/league/42"));
    }

    #[tokio::test]
    async fn test_server_error_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/league/42/users"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let result = client.get_users(LeagueId::new(42)).await;
        assert!(matches!(result, Err(RecapError::Http(_))));
    }

    #[tokio::test]
    async fn test_fetch_league_snapshot() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/league/42",
            json!({ "league_id": "42", "name": "Dynasty", "season": "2025" }),
        )
        .await;
        mount_json(
            &server,
            "/league/42/users",
            json!([{ "user_id": "u1", "display_name": "Kodiak" }]),
        )
        .await;
        mount_json(
            &server,
            "/league/42/rosters",
            json!([{ "roster_id": 1, "owner_id": "u1", "players": null, "settings": { "wins": 3 } }]),
        )
        .await;
        mount_json(
            &server,
            "/league/42/matchups/6",
            json!([{ "matchup_id": 1, "roster_id": 1, "points": 101.5, "starters_points": [50.0, 51.5] }]),
        )
        .await;
        mount_json(
            &server,
            "/league/42/transactions/6",
            json!([{ "type": "waiver", "creator": "u1", "adds": { "4046": 1 } }]),
        )
        .await;

        let client = mock_client(&server).await;
        let snapshot = client
            .fetch_league_snapshot(LeagueId::new(42), Week::new(6), PlayerTable::new())
            .await
            .unwrap();

        assert_eq!(snapshot.week, Week::new(6));
        assert_eq!(snapshot.league.name.as_deref(), Some("Dynasty"));
        assert_eq!(snapshot.users.len(), 1);
        assert_eq!(snapshot.rosters[0].roster_id, RosterId::new(1));
        assert_eq!(snapshot.rosters[0].settings.wins, 3);
        assert_eq!(snapshot.matchups[0].starters_total(), Some(101.5));
        assert_eq!(snapshot.transactions[0].kind, "waiver");
    }

    #[tokio::test]
    async fn test_fetch_snapshot_fails_if_any_call_fails() {
        let server = MockServer::start().await;
        mount_json(&server, "/league/42", json!({ "league_id": "42" })).await;
        mount_json(&server, "/league/42/users", json!([])).await;
        // rosters, matchups and transactions are unmounted -> 404

        let client = mock_client(&server).await;
        let result = client
            .fetch_league_snapshot(LeagueId::new(42), Week::new(1), PlayerTable::new())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_players() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/players/nfl",
            json!({
                "4046": { "full_name": "Patrick Mahomes", "position": "QB", "team": "KC", "search_rank": 12 },
                "DEN": { "first_name": "Denver", "last_name": "Broncos", "position": "DEF" }
            }),
        )
        .await;

        let client = mock_client(&server).await;
        let players = client.get_players().await.unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[&PlayerId::from("4046")].search_rank, Some(12));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = SleeperClient::with_base_url(Client::new(), "http://localhost:1/v1/");
        assert_eq!(client.base_url, "http://localhost:1/v1");
    }
}
