use crate::config::Config;
use crate::error::{Result, WynnError};
use serde_json::Value;

use super::endpoints;
use super::models::*;
use super::params::{exactly_one_of, required, with_full_result};
use super::transport::{ApiRequest, Transport, UreqTransport};

/// Client for the Wynncraft v3 API.
///
/// Every method validates its parameters, builds one request and returns the
/// decoded JSON exactly as the server sent it. Error responses come back as
/// ordinary values; inspect them yourself.
#[derive(Debug)]
pub struct WynnClient<T: Transport = UreqTransport> {
    transport: T,
}

impl WynnClient<UreqTransport> {
    pub fn new(config: Config) -> Self {
        WynnClient {
            transport: UreqTransport::new(config),
        }
    }
}

impl Default for WynnClient<UreqTransport> {
    fn default() -> Self {
        WynnClient::new(Config::default())
    }
}

impl<T: Transport> WynnClient<T> {
    pub fn with_transport(transport: T) -> Self {
        WynnClient { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn get(&self, path: String) -> Result<Value> {
        self.transport.execute(&ApiRequest::get(path))
    }

    /// Player profile by username or UUID. `full_stats` also returns every
    /// character.
    pub fn get_player(
        &self,
        username: Option<&str>,
        uuid: Option<&str>,
        full_stats: bool,
    ) -> Result<Value> {
        let player = exactly_one_of(("username", username), ("uuid", uuid))?;
        self.get(with_full_result(endpoints::player(player), full_stats))
    }

    pub fn get_player_character_list(
        &self,
        username: Option<&str>,
        uuid: Option<&str>,
    ) -> Result<Value> {
        let player = exactly_one_of(("username", username), ("uuid", uuid))?;
        self.get(endpoints::player_characters(player))
    }

    pub fn get_player_character(
        &self,
        username: Option<&str>,
        uuid: Option<&str>,
        character_uuid: Option<&str>,
    ) -> Result<Value> {
        let character = required("characterUUID", character_uuid)?;
        let player = exactly_one_of(("username", username), ("uuid", uuid))?;
        self.get(endpoints::player_character(player, character))
    }

    pub fn get_player_character_ability_map(
        &self,
        username: Option<&str>,
        uuid: Option<&str>,
        character_uuid: Option<&str>,
    ) -> Result<Value> {
        let character = required("characterUUID", character_uuid)?;
        let player = exactly_one_of(("username", username), ("uuid", uuid))?;
        self.get(endpoints::player_character_abilities(player, character))
    }

    pub fn get_online_players(
        &self,
        identifier: Identifier,
        server: impl Into<ServerSelector>,
    ) -> Result<Value> {
        self.get(endpoints::online_players(identifier, &server.into()))
    }

    pub fn get_guild(
        &self,
        name: Option<&str>,
        prefix: Option<&str>,
        identifier: Identifier,
    ) -> Result<Value> {
        let guild = exactly_one_of(("name", name), ("prefix", prefix))?;
        let path = if prefix.is_some() {
            endpoints::guild_by_prefix(guild, identifier)
        } else {
            endpoints::guild_by_name(guild, identifier)
        };
        self.get(path)
    }

    pub fn get_guilds_list(&self, identifier: Identifier) -> Result<Value> {
        self.get(endpoints::guild_list(identifier))
    }

    pub fn get_territory_list(&self) -> Result<Value> {
        self.get(endpoints::TERRITORY_LIST.to_string())
    }

    pub fn get_news(&self) -> Result<Value> {
        self.get(endpoints::NEWS.to_string())
    }

    pub fn get_classes(&self) -> Result<Value> {
        self.get(endpoints::CLASSES.to_string())
    }

    pub fn get_class_info(&self, class: ClassName) -> Result<Value> {
        self.get(endpoints::class_info(class))
    }

    pub fn get_quests_count(&self) -> Result<Value> {
        self.get(endpoints::QUESTS_COUNT.to_string())
    }

    pub fn get_map_locations(&self) -> Result<Value> {
        self.get(endpoints::MAP_MARKERS.to_string())
    }

    pub fn get_player_locations(&self) -> Result<Value> {
        self.get(endpoints::PLAYER_LOCATIONS.to_string())
    }

    pub fn get_ability_tree(&self, class: ClassName) -> Result<Value> {
        self.get(endpoints::ability_tree(class))
    }

    pub fn get_ability_map(&self, class: ClassName) -> Result<Value> {
        self.get(endpoints::ability_map(class))
    }

    /// `result_limit` defaults to 100 when `None`.
    pub fn get_leaderboard(&self, board: &str, result_limit: Option<u32>) -> Result<Value> {
        let limit = result_limit.unwrap_or(endpoints::DEFAULT_LEADERBOARD_LIMIT);
        self.get(endpoints::leaderboard(board, limit))
    }

    /// Free-text search over players, guilds, items and more.
    pub fn search(&self, query: &str) -> Result<Value> {
        self.get(endpoints::search(query))
    }

    /// Whole item database. Unpaginated requests carry the `fullResult`
    /// marker.
    pub fn get_item_database(&self, paginated: bool) -> Result<Value> {
        self.get(with_full_result(endpoints::ITEM_DATABASE.to_string(), !paginated))
    }

    pub fn get_item_metadata(&self) -> Result<Value> {
        self.get(endpoints::ITEM_METADATA.to_string())
    }

    pub fn search_items(&self, query: &ItemQuery) -> Result<Value> {
        let body = serde_json::to_value(query)
            .map_err(|e| WynnError::JsonError(e.to_string()))?;
        let path = with_full_result(endpoints::ITEM_SEARCH.to_string(), query.full_result);
        self.transport.execute(&ApiRequest::post(path, body))
    }
}
