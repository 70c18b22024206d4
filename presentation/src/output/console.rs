//! Console output formatter

use colored::Colorize;
use eduquiz_application::{Resolution, ResolveError};
use eduquiz_domain::{Identity, Level, Score, Track};

/// Formats resolution outcomes and score lines for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format only the route (or the empty-set notice)
    pub fn format_route(resolution: &Resolution) -> String {
        match resolution.route() {
            Some(route) => route.path(),
            None => "No questions found in this set.".dimmed().to_string(),
        }
    }

    /// Format the full result with the signed-in user and score
    pub fn format_full(
        resolution: &Resolution,
        identity: &Identity,
        score: Option<Score>,
    ) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} {}\n", "User:".cyan().bold(), identity));
        let score_line = score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "no score yet".to_string());
        output.push_str(&format!("{} {}\n", "Score:".cyan().bold(), score_line));
        match resolution.route() {
            Some(route) => {
                output.push_str(&format!(
                    "{} {}\n",
                    "Question:".cyan().bold(),
                    route.path().green()
                ));
            }
            None => {
                output.push_str(&format!(
                    "{} {}\n",
                    "Question:".cyan().bold(),
                    "no questions found in this set".dimmed()
                ));
            }
        }
        output
    }

    /// Format as JSON
    pub fn format_json(resolution: &Resolution) -> String {
        let value = match resolution.route() {
            Some(route) => serde_json::json!({
                "key": route.key.as_str(),
                "question": route.question.as_str(),
                "path": route.path(),
            }),
            None => serde_json::json!({ "empty": true }),
        };
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format an error as the single displayable message
    pub fn format_error(error: &ResolveError) -> String {
        error.to_string().red().bold().to_string()
    }

    /// Format one live score update line (watch mode)
    pub fn format_score_update(identity: &Identity, score: Score) -> String {
        format!("{} {}", format!("{identity}:").cyan(), score)
    }

    /// Format the available choices, grouped the way the dropdowns are
    pub fn format_choices() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Levels".cyan().bold()));
        for level in Level::all() {
            output.push_str(&format!("  {level}\n"));
        }
        output.push_str(&format!(
            "{}\n",
            "Tracks (A-Level only)".cyan().bold()
        ));
        for track in Track::all() {
            output.push_str(&format!("  {track}\n"));
        }
        output.push_str(&format!("{}\n", "Subjects".cyan().bold()));
        for level in Level::all() {
            output.push_str(&format!("  {}: {}\n", level, level.subjects().join(", ")));
        }
        output
    }

    /// Apply the configured color preference process-wide
    pub fn apply_color_preference(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }
}
