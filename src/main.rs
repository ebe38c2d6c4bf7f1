mod display;

use clap::{Parser, Subcommand};
use display::output::{display_error, display_info, display_json, display_leaderboard};
use serde_json::Value;
use wynn_api::{ClassName, Config, Identifier, ItemQuery, ServerSelector, WynnClient};

#[derive(Parser, Debug)]
#[command(name = "wynn")]
#[command(about = "Query the public Wynncraft API", long_about = None)]
struct Args {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Player profile
    Player {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        uuid: Option<String>,
        /// Include every character
        #[arg(long)]
        full: bool,
    },
    /// A player's character list
    Characters {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        uuid: Option<String>,
    },
    /// One character of a player
    Character {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        uuid: Option<String>,
        #[arg(long)]
        character: Option<String>,
        /// Fetch the character's ability map instead
        #[arg(long)]
        abilities: bool,
    },
    /// Online players on the given servers (e.g. WC1,2)
    Online {
        #[arg(long, default_value = "username")]
        identifier: Identifier,
        #[arg(long, value_delimiter = ',', required = true)]
        server: Vec<String>,
    },
    /// Guild by name or prefix
    Guild {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        prefix: Option<String>,
        #[arg(long, default_value = "username")]
        identifier: Identifier,
    },
    /// Every guild
    Guilds {
        #[arg(long, default_value = "username")]
        identifier: Identifier,
    },
    Territories,
    News,
    /// Class list, or one class with --class
    Classes {
        #[arg(long)]
        class: Option<ClassName>,
    },
    Quests,
    Markers,
    /// Players visible on the map
    Locations,
    AbilityTree {
        class: ClassName,
    },
    AbilityMap {
        class: ClassName,
    },
    Leaderboard {
        /// e.g. guildLevel, combatGlobalLevel, huntedContent
        board: String,
        #[arg(short, long)]
        limit: Option<u32>,
        /// Render as a table instead of JSON
        #[arg(long)]
        table: bool,
    },
    Search {
        query: String,
    },
    /// Item database
    Items {
        #[arg(long)]
        paginated: bool,
    },
    ItemMetadata,
    /// Filtered item search
    SearchItems {
        query: String,
        #[arg(long = "type", value_delimiter = ',')]
        item_type: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        tier: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        attack_speed: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        level_range: Vec<i64>,
        #[arg(long, value_delimiter = ',')]
        professions: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        identifications: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        major_ids: Vec<String>,
        #[arg(long)]
        full: bool,
    },
}

fn main() {
    let args = Args::parse();
    wynn_api::logging::init_cli_logger(args.verbose);

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Single values go out as scalars, several as a list.
fn filter<T>(mut values: Vec<T>) -> Option<wynn_api::FilterValue>
where
    T: Into<wynn_api::FilterValue>,
{
    match values.len() {
        0 => None,
        1 => values.pop().map(Into::into),
        _ => Some(values.into()),
    }
}

fn server_selector(mut servers: Vec<String>) -> ServerSelector {
    if servers.len() == 1 {
        if let Some(server) = servers.pop() {
            return match server.parse::<u32>() {
                Ok(n) => ServerSelector::Number(n),
                Err(_) => ServerSelector::Name(server),
            };
        }
    }
    servers.into()
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    if args.verbose {
        display_info(&format!("Using {}", config.endpoint_url("")));
    }
    let client = WynnClient::new(config);

    let value: Value = match args.command {
        Command::Player { username, uuid, full } => {
            client.get_player(username.as_deref(), uuid.as_deref(), full)?
        }
        Command::Characters { username, uuid } => {
            client.get_player_character_list(username.as_deref(), uuid.as_deref())?
        }
        Command::Character {
            username,
            uuid,
            character,
            abilities,
        } => {
            if abilities {
                client.get_player_character_ability_map(
                    username.as_deref(),
                    uuid.as_deref(),
                    character.as_deref(),
                )?
            } else {
                client.get_player_character(
                    username.as_deref(),
                    uuid.as_deref(),
                    character.as_deref(),
                )?
            }
        }
        Command::Online { identifier, server } => {
            client.get_online_players(identifier, server_selector(server))?
        }
        Command::Guild {
            name,
            prefix,
            identifier,
        } => client.get_guild(name.as_deref(), prefix.as_deref(), identifier)?,
        Command::Guilds { identifier } => client.get_guilds_list(identifier)?,
        Command::Territories => client.get_territory_list()?,
        Command::News => client.get_news()?,
        Command::Classes { class } => match class {
            Some(class) => client.get_class_info(class)?,
            None => client.get_classes()?,
        },
        Command::Quests => client.get_quests_count()?,
        Command::Markers => client.get_map_locations()?,
        Command::Locations => client.get_player_locations()?,
        Command::AbilityTree { class } => client.get_ability_tree(class)?,
        Command::AbilityMap { class } => client.get_ability_map(class)?,
        Command::Leaderboard {
            board,
            limit,
            table,
        } => {
            let result = client.get_leaderboard(&board, limit)?;
            if table {
                display_leaderboard(&board, &result);
                return Ok(());
            }
            result
        }
        Command::Search { query } => client.search(&query)?,
        Command::Items { paginated } => client.get_item_database(paginated)?,
        Command::ItemMetadata => client.get_item_metadata()?,
        Command::SearchItems {
            query,
            item_type,
            tier,
            attack_speed,
            level_range,
            professions,
            identifications,
            major_ids,
            full,
        } => {
            let item_query = ItemQuery {
                item_type: filter(item_type),
                tier: filter(tier),
                attack_speed: filter(attack_speed),
                level_range: filter(level_range),
                professions: filter(professions),
                identifications: filter(identifications),
                major_ids: filter(major_ids),
                ..ItemQuery::new(query)
            }
            .full_result(full);
            client.search_items(&item_query)?
        }
    };

    display_json(&value);
    Ok(())
}
