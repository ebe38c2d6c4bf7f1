use colored::*;
use serde_json::Value;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct LeaderboardRow {
    #[tabled(rename = "#")]
    rank: String,
    name: String,
    score: String,
    detail: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    eprintln!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    }
}

fn leaderboard_rows(board: &Value) -> Vec<LeaderboardRow> {
    let Some(entries) = board.as_object() else {
        return Vec::new();
    };

    let mut ranked: Vec<(u64, &Value)> = entries
        .iter()
        .filter_map(|(rank, entry)| rank.parse::<u64>().ok().map(|r| (r, entry)))
        .collect();
    ranked.sort_by_key(|(rank, _)| *rank);

    ranked
        .into_iter()
        .map(|(rank, entry)| {
            // Guild boards have no score, they rank by level.
            let score = entry.get("score").or_else(|| entry.get("level"));
            let detail = entry
                .get("prefix")
                .or_else(|| entry.get("characterType"))
                .or_else(|| entry.get("rank"));
            LeaderboardRow {
                rank: format!("#{}", rank),
                name: text_of(entry.get("name")),
                score: text_of(score),
                detail: text_of(detail),
            }
        })
        .collect()
}

/// Renders a leaderboard response as a table. Anything that doesn't look
/// like a ranking falls back to plain JSON.
pub fn display_leaderboard(board_type: &str, board: &Value) {
    let rows = leaderboard_rows(board);
    if rows.is_empty() {
        display_json(board);
        return;
    }

    println!("\n{}", format!("🏆 Leaderboard: {}", board_type).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leaderboard_rows_sorted_by_numeric_rank() {
        let board = json!({
            "10": {"name": "Tenth", "score": 1},
            "2": {"name": "Second", "score": 50, "characterType": "MAGE"},
            "1": {"name": "GuildA", "level": 120, "prefix": "GA"}
        });

        let rows = leaderboard_rows(&board);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["GuildA", "Second", "Tenth"]);
        assert_eq!(rows[0].score, "120");
        assert_eq!(rows[0].detail, "GA");
        assert_eq!(rows[1].detail, "MAGE");
        assert_eq!(rows[2].detail, "-");
    }

    #[test]
    fn non_ranking_payload_has_no_rows() {
        assert!(leaderboard_rows(&json!({"Error": "Unknown leaderboard"})).is_empty());
        assert!(leaderboard_rows(&json!([1, 2, 3])).is_empty());
    }
}
