// Endpoint paths below the version prefix. Every caller-supplied value goes
// through `segment` or `query_value` exactly once, so `#`, `?`, `/` and
// spaces reach the server as text instead of changing the URL's structure.

use super::models::{ClassName, Identifier, ServerSelector};

pub const GUILD_LIST: &str = "/guild/list/guild";
pub const TERRITORY_LIST: &str = "/guild/list/territory";
pub const NEWS: &str = "/latest-news";
pub const CLASSES: &str = "/classes";
pub const QUESTS_COUNT: &str = "/map/quests";
pub const MAP_MARKERS: &str = "/map/locations/markers";
pub const PLAYER_LOCATIONS: &str = "/map/locations/player";
pub const ITEM_DATABASE: &str = "/item/database";
pub const ITEM_METADATA: &str = "/item/metadata";
pub const ITEM_SEARCH: &str = "/item/search";

pub const DEFAULT_LEADERBOARD_LIMIT: u32 = 100;

/// Percent-encodes one path segment.
pub fn segment(value: &str) -> String {
    let mut url = url::Url::parse("http://segment.invalid/").expect("constant base URL parses");
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(value);
    }
    url.path().trim_start_matches('/').to_string()
}

/// Encodes one query-string value.
pub fn query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn server_query(server: &ServerSelector) -> String {
    match server {
        ServerSelector::Name(name) => query_value(name),
        ServerSelector::Number(n) => n.to_string(),
        ServerSelector::List(items) => {
            let encoded: Vec<String> = items.iter().map(server_query).collect();
            encoded.join(",")
        }
    }
}

pub fn player(player: &str) -> String {
    format!("/player/{}", segment(player))
}

pub fn player_characters(player: &str) -> String {
    format!("/player/{}/characters", segment(player))
}

pub fn player_character(player: &str, character_uuid: &str) -> String {
    format!(
        "/player/{}/characters/{}",
        segment(player),
        segment(character_uuid)
    )
}

pub fn player_character_abilities(player: &str, character_uuid: &str) -> String {
    format!(
        "/player/{}/characters/{}/abilities",
        segment(player),
        segment(character_uuid)
    )
}

pub fn online_players(identifier: Identifier, server: &ServerSelector) -> String {
    format!("/player?identifier={}&server={}", identifier, server_query(server))
}

pub fn guild_by_name(name: &str, identifier: Identifier) -> String {
    format!("/guild/{}?identifier={}", segment(name), identifier)
}

pub fn guild_by_prefix(prefix: &str, identifier: Identifier) -> String {
    format!("/guild/prefix/{}?identifier={}", segment(prefix), identifier)
}

pub fn guild_list(identifier: Identifier) -> String {
    format!("{}?identifier={}", GUILD_LIST, identifier)
}

pub fn class_info(class: ClassName) -> String {
    format!("{}/{}", CLASSES, class)
}

pub fn ability_tree(class: ClassName) -> String {
    format!("/ability/tree/{}", class)
}

pub fn ability_map(class: ClassName) -> String {
    format!("/ability/map/{}", class)
}

pub fn leaderboard(board: &str, result_limit: u32) -> String {
    format!("/leaderboards/{}?resultLimit={}", segment(board), result_limit)
}

pub fn search(query: &str) -> String {
    format!("/search/{}", segment(query))
}
