//! Subcommand parsing for the tournament CLI.

use swiss_tournament::PlayerId;
use thiserror::Error;

/// A single CLI invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply schema migrations
    Migrate,
    /// Register a player
    Register { name: String },
    /// Record a match outcome
    Report { winner: PlayerId, loser: PlayerId },
    /// Print standings
    Standings,
    /// Print next-round pairings
    Pairings,
    /// Print the number of registered players
    Count,
    /// Delete all matches
    ResetMatches,
    /// Delete all players and their matches
    ResetPlayers,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Missing command. Run with --help to see available commands")]
    MissingCommand,

    #[error("Unrecognized command '{0}'. Run with --help to see available commands")]
    UnrecognizedCommand(String),

    #[error("'{command}' expects {expected}")]
    WrongArguments {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid player ID '{0}'. Must be a whole number")]
    InvalidPlayerId(String),
}

/// Parse the positional arguments left after options have been consumed.
///
/// # Examples
///
/// ```ignore
/// let args = vec!["report".to_string(), "3".to_string(), "7".to_string()];
/// assert_eq!(
///     parse_command(&args),
///     Ok(Command::Report { winner: 3, loser: 7 })
/// );
/// ```
pub fn parse_command(args: &[String]) -> Result<Command, ParseError> {
    let (name, rest) = args.split_first().ok_or(ParseError::MissingCommand)?;

    match name.as_str() {
        "migrate" => no_arguments("migrate", rest, Command::Migrate),
        "standings" => no_arguments("standings", rest, Command::Standings),
        "pairings" => no_arguments("pairings", rest, Command::Pairings),
        "count" => no_arguments("count", rest, Command::Count),
        "reset-matches" => no_arguments("reset-matches", rest, Command::ResetMatches),
        "reset-players" => no_arguments("reset-players", rest, Command::ResetPlayers),
        "register" => {
            // Unquoted multi-word names are joined back together
            if rest.is_empty() {
                return Err(ParseError::WrongArguments {
                    command: "register",
                    expected: "a player name",
                });
            }
            Ok(Command::Register {
                name: rest.join(" "),
            })
        }
        "report" => match rest {
            [winner, loser] => Ok(Command::Report {
                winner: parse_player_id(winner)?,
                loser: parse_player_id(loser)?,
            }),
            _ => Err(ParseError::WrongArguments {
                command: "report",
                expected: "WINNER and LOSER player IDs",
            }),
        },
        other => Err(ParseError::UnrecognizedCommand(other.to_string())),
    }
}

fn no_arguments(
    command: &'static str,
    rest: &[String],
    parsed: Command,
) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ParseError::WrongArguments {
            command,
            expected: "no arguments",
        })
    }
}

fn parse_player_id(value: &str) -> Result<PlayerId, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidPlayerId(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_word_commands() {
        assert_eq!(parse_command(&args(&["migrate"])), Ok(Command::Migrate));
        assert_eq!(parse_command(&args(&["standings"])), Ok(Command::Standings));
        assert_eq!(parse_command(&args(&["pairings"])), Ok(Command::Pairings));
        assert_eq!(parse_command(&args(&["count"])), Ok(Command::Count));
        assert_eq!(
            parse_command(&args(&["reset-matches"])),
            Ok(Command::ResetMatches)
        );
        assert_eq!(
            parse_command(&args(&["reset-players"])),
            Ok(Command::ResetPlayers)
        );
    }

    #[test]
    fn test_register_joins_name() {
        assert_eq!(
            parse_command(&args(&["register", "Randy", "Schwartz"])),
            Ok(Command::Register {
                name: "Randy Schwartz".to_string()
            })
        );
    }

    #[test]
    fn test_register_requires_name() {
        assert!(matches!(
            parse_command(&args(&["register"])),
            Err(ParseError::WrongArguments { command: "register", .. })
        ));
    }

    #[test]
    fn test_report_parses_ids() {
        assert_eq!(
            parse_command(&args(&["report", "3", "7"])),
            Ok(Command::Report { winner: 3, loser: 7 })
        );
    }

    #[test]
    fn test_report_rejects_bad_id() {
        assert_eq!(
            parse_command(&args(&["report", "3", "seven"])),
            Err(ParseError::InvalidPlayerId("seven".to_string()))
        );
    }

    #[test]
    fn test_report_requires_two_ids() {
        assert!(matches!(
            parse_command(&args(&["report", "3"])),
            Err(ParseError::WrongArguments { command: "report", .. })
        ));
    }

    #[test]
    fn test_extra_arguments_rejected() {
        assert!(matches!(
            parse_command(&args(&["count", "now"])),
            Err(ParseError::WrongArguments { command: "count", .. })
        ));
    }

    #[test]
    fn test_missing_and_unknown_commands() {
        assert_eq!(parse_command(&[]), Err(ParseError::MissingCommand));
        assert_eq!(
            parse_command(&args(&["bye"])),
            Err(ParseError::UnrecognizedCommand("bye".to_string()))
        );
    }
}
