//! Rendering of standings and pairings for the terminal.

use crate::config::OutputFormat;
use swiss_tournament::{Pairing, StandingEntry};

/// Render standings as a ranked table or a JSON array
pub fn render_standings(
    standings: &[StandingEntry],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(standings);
    }

    if standings.is_empty() {
        return Ok("No players registered".to_string());
    }

    let name_width = standings
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = format!(
        "{:>4}  {:>6}  {:<name_width$}  {:>4}  {:>7}",
        "Rank", "ID", "Name", "Wins", "Matches"
    );
    for (rank, entry) in standings.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "{:>4}  {:>6}  {:<name_width$}  {:>4}  {:>7}",
            rank + 1,
            entry.id,
            entry.name,
            entry.wins,
            entry.matches
        ));
    }

    Ok(out)
}

/// Render pairings one per line or as a JSON array
pub fn render_pairings(
    pairings: &[Pairing],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(pairings);
    }

    if pairings.is_empty() {
        return Ok("No pairings".to_string());
    }

    Ok(pairings
        .iter()
        .enumerate()
        .map(|(table, pairing)| format!("Table {}: {}", table + 1, pairing))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiss_tournament::generate_pairings;

    fn standings() -> Vec<StandingEntry> {
        vec![
            StandingEntry::new(1, "Alice", 2, 2),
            StandingEntry::new(2, "Bob", 1, 2),
        ]
    }

    #[test]
    fn test_plain_standings_table() {
        let out = render_standings(&standings(), OutputFormat::Plain).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Rank"));
        assert!(lines[1].contains("Alice"));
        assert!(lines[1].trim_start().starts_with('1'));
        assert!(lines[2].contains("Bob"));
    }

    #[test]
    fn test_empty_standings() {
        let out = render_standings(&[], OutputFormat::Plain).unwrap();
        assert_eq!(out, "No players registered");
    }

    #[test]
    fn test_json_standings() {
        let out = render_standings(&standings(), OutputFormat::Json).unwrap();
        let parsed: Vec<StandingEntry> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, standings());
    }

    #[test]
    fn test_plain_pairings() {
        let pairings = generate_pairings(&standings()).unwrap();
        let out = render_pairings(&pairings, OutputFormat::Plain).unwrap();
        assert_eq!(out, "Table 1: Alice (#1) vs Bob (#2)");
    }

    #[test]
    fn test_empty_pairings() {
        assert_eq!(
            render_pairings(&[], OutputFormat::Plain).unwrap(),
            "No pairings"
        );
        assert_eq!(render_pairings(&[], OutputFormat::Json).unwrap(), "[]");
    }
}
