use httpmock::prelude::*;
use serde_json::json;
use wynn_api::{Config, Identifier, ItemQuery, WynnClient, WynnError};

fn client_for(server: &MockServer) -> WynnClient {
    WynnClient::new(Config::with_base_url(&server.base_url()))
}

#[test]
fn get_player_against_mock_server() {
    let server = MockServer::start();
    let player_mock = server.mock(|when, then| {
        when.method(GET).path("/v3/player/Salted");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"username": "Salted", "online": false}));
    });

    let player = client_for(&server)
        .get_player(Some("Salted"), None, false)
        .unwrap();

    player_mock.assert();
    assert_eq!(player, json!({"username": "Salted", "online": false}));
}

#[test]
fn full_result_marker_reaches_the_server() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/player/Salted")
            .query_param_exists("fullResult");
        then.status(200).json_body(json!({"characters": {}}));
    });

    let player = client_for(&server)
        .get_player(Some("Salted"), None, true)
        .unwrap();

    mock.assert();
    assert_eq!(player["characters"], json!({}));
}

#[test]
fn item_search_posts_json_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v3/item/search")
            .header("Content-Type", "application/json")
            .json_body(json!({"query": "Sword", "tier": ["rare", "legendary"]}));
        then.status(200).json_body(json!({"Sword of Ice": {"tier": "rare"}}));
    });

    let query = ItemQuery::new("Sword").tier(vec!["rare", "legendary"]);
    let found = client_for(&server).search_items(&query).unwrap();

    mock.assert();
    assert_eq!(found["Sword of Ice"]["tier"], "rare");
}

#[test]
fn guild_lookup_sends_identifier_query() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/guild/prefix/GA")
            .query_param("identifier", "uuid");
        then.status(200).json_body(json!({"prefix": "GA"}));
    });

    let guild = client_for(&server)
        .get_guild(None, Some("GA"), Identifier::Uuid)
        .unwrap();

    mock.assert();
    assert_eq!(guild, json!({"prefix": "GA"}));
}

#[test]
fn error_status_body_is_returned_as_is() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v3/player/nobody");
        then.status(404)
            .json_body(json!({"Error": "Player not found"}));
    });

    let body = client_for(&server)
        .get_player(Some("nobody"), None, false)
        .unwrap();

    mock.assert();
    assert_eq!(body, json!({"Error": "Player not found"}));
}

#[test]
fn non_json_body_is_a_decoding_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v3/latest-news");
        then.status(502).body("<html>Bad Gateway</html>");
    });

    let err = client_for(&server).get_news().unwrap_err();
    assert!(matches!(err, WynnError::JsonError(_)), "got {:?}", err);
}

#[test]
fn parameter_errors_never_reach_the_server() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200).json_body(json!({}));
    });
    let client = client_for(&server);

    assert!(client.get_player(None, None, false).is_err());
    assert!(client
        .get_guild(Some("GuildA"), Some("GA"), Identifier::Username)
        .is_err());
    assert!(client.get_player_character(Some("Salted"), None, None).is_err());

    mock.assert_hits(0);
}

#[test]
fn unreachable_host_is_a_transport_error() {
    // Port 9 (discard) is closed on test machines.
    let client = WynnClient::new(Config::with_base_url("http://127.0.0.1:9"));
    let err = client.get_classes().unwrap_err();
    assert!(matches!(err, WynnError::HttpError(_)), "got {:?}", err);
}

#[test]
fn item_database_larger_than_ten_megabytes_is_read_fully() {
    let items: Vec<serde_json::Value> = (0..220_000)
        .map(|i| json!({"name": format!("Item number {:06}", i), "tier": "common", "lvl": i % 106}))
        .collect();
    let document = json!({"items": items});
    let body = serde_json::to_string(&document).unwrap();
    assert!(body.len() > 10 * 1024 * 1024, "body only {} bytes", body.len());

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/item/database")
            .query_param_exists("fullResult");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(body);
    });

    let database = client_for(&server).get_item_database(false).unwrap();

    mock.assert();
    assert_eq!(database["items"].as_array().map(Vec::len), Some(220_000));
    assert_eq!(database, document);
}

#[test]
fn hash_in_search_text_is_sent_as_text() {
    let server = MockServer::start();
    let truncated = server.mock(|when, then| {
        when.method(GET).path("/v3/search/C");
        then.status(200).json_body(json!({"hit": "truncated"}));
    });
    let full = server.mock(|when, then| {
        when.any_request();
        then.status(200).json_body(json!({"hit": "full"}));
    });

    let found = client_for(&server).search("C#").unwrap();

    truncated.assert_hits(0);
    full.assert_hits(1);
    assert_eq!(found, json!({"hit": "full"}));
}

#[test]
fn nested_document_decodes_to_an_equal_value() {
    let document = json!({
        "uuid": "0a1b2c3d",
        "members": {
            "total": 3,
            "owner": {"Salted": {"online": true, "server": null, "contributed": 9_007_199_254_740_993u64}},
            "recruit": {}
        },
        "banner": {
            "tier": 3,
            "layers": [
                {"colour": "RED", "pattern": "STRIPE_TOP"},
                {"colour": "BLACK", "pattern": "BORDER", "extra": [1, [2, [3, null]]]}
            ]
        },
        "seasonRanks": {"1": {"rating": -42, "finalTerritories": 7, "ratio": 0.125}},
        "xpPercent": 12.5,
        "tags": [],
        "active": false
    });

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v3/guild/GuildA");
        then.status(200).json_body(document.clone());
    });

    let guild = client_for(&server)
        .get_guild(Some("GuildA"), None, Identifier::Username)
        .unwrap();

    assert_eq!(guild, document);
    assert_eq!(
        guild["members"]["owner"]["Salted"]["contributed"].as_u64(),
        Some(9_007_199_254_740_993)
    );
}
