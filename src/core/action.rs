//! Player commands.
//!
//! Inside the engine a command is a closed enum. The loose boundary forms
//! (single-letter codes, long names, card indices that may arrive as JSON
//! numbers or strings) are accepted only by the parsing functions here.
//!
//! | Code | Long form | Needs index |
//! |---|---|---|
//! | `P` | `play_all` | no |
//! | `C` | `play_that_card` | yes |
//! | `B` | `buy_card` | yes |
//! | `A` | `attack` | no |
//! | `E` | `end_turn` | no |

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{EngineError, EngineResult};

/// A single human command.
///
/// ```
/// use market_duel::core::Command;
///
/// assert_eq!(Command::parse("C", Some("2")).unwrap(), Command::PlayCard(2));
/// assert_eq!(Command::parse("end_turn", None).unwrap(), Command::EndTurn);
/// assert!(Command::parse("dance", None).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "card_index")]
pub enum Command {
    /// Play every card in hand.
    #[serde(rename = "play_all")]
    PlayAll,
    /// Play one card from hand.
    #[serde(rename = "play_that_card")]
    PlayCard(usize),
    /// Buy a market row card, or the supplement at index `row length`.
    #[serde(rename = "buy_card")]
    BuyCard(usize),
    /// Deal accumulated attack to the opponent.
    #[serde(rename = "attack")]
    Attack,
    /// Clean up, redraw, and let the opponent take its turn.
    #[serde(rename = "end_turn")]
    EndTurn,
}

impl Command {
    /// Parse an action token with an optional textual card index.
    pub fn parse(action: &str, card_index: Option<&str>) -> EngineResult<Self> {
        let index = || card_index_from_str(card_index);
        match action.trim() {
            "P" | "play_all" => Ok(Self::PlayAll),
            "C" | "play_that_card" => Ok(Self::PlayCard(index()?)),
            "B" | "buy_card" => Ok(Self::BuyCard(index()?)),
            "A" | "attack" => Ok(Self::Attack),
            "E" | "end_turn" => Ok(Self::EndTurn),
            other => Err(EngineError::invalid_action(other)),
        }
    }

    /// Parse an action token with a card index taken from a JSON request body.
    ///
    /// The index may be a non-negative integer or a string holding one.
    /// `null` counts as absent.
    pub fn from_request(action: &str, card_index: Option<&Value>) -> EngineResult<Self> {
        let raw = match card_index {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        Self::parse(action, raw.as_deref())
    }

    /// The long-form action name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlayAll => "play_all",
            Self::PlayCard(_) => "play_that_card",
            Self::BuyCard(_) => "buy_card",
            Self::Attack => "attack",
            Self::EndTurn => "end_turn",
        }
    }

    /// The card index carried by the command, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::PlayCard(i) | Self::BuyCard(i) => Some(*i),
            _ => None,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index() {
            Some(i) => write!(f, "{} {}", self.name(), i),
            None => write!(f, "{}", self.name()),
        }
    }
}

fn card_index_from_str(raw: Option<&str>) -> EngineResult<usize> {
    let raw = raw.ok_or_else(|| EngineError::invalid_index("none"))?;
    raw.trim()
        .parse::<usize>()
        .map_err(|_| EngineError::invalid_index(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_letter_codes() {
        assert_eq!(Command::parse("P", None).unwrap(), Command::PlayAll);
        assert_eq!(Command::parse("C", Some("0")).unwrap(), Command::PlayCard(0));
        assert_eq!(Command::parse("B", Some("5")).unwrap(), Command::BuyCard(5));
        assert_eq!(Command::parse("A", None).unwrap(), Command::Attack);
        assert_eq!(Command::parse("E", None).unwrap(), Command::EndTurn);
    }

    #[test]
    fn test_parse_long_forms() {
        assert_eq!(Command::parse("play_all", None).unwrap(), Command::PlayAll);
        assert_eq!(Command::parse("play_that_card", Some(" 3 ")).unwrap(), Command::PlayCard(3));
        assert_eq!(Command::parse("buy_card", Some("1")).unwrap(), Command::BuyCard(1));
        assert_eq!(Command::parse("attack", None).unwrap(), Command::Attack);
        assert_eq!(Command::parse("end_turn", None).unwrap(), Command::EndTurn);
    }

    #[test]
    fn test_parse_ignores_index_for_indexless_commands() {
        assert_eq!(Command::parse("attack", Some("junk")).unwrap(), Command::Attack);
    }

    #[test]
    fn test_parse_bad_index() {
        assert_eq!(
            Command::parse("C", Some("abc")),
            Err(EngineError::invalid_index("abc"))
        );
        assert_eq!(Command::parse("B", Some("-1")), Err(EngineError::invalid_index("-1")));
        assert!(matches!(
            Command::parse("buy_card", None),
            Err(EngineError::InvalidCardIndex { .. })
        ));
    }

    #[test]
    fn test_parse_unknown_action() {
        assert_eq!(Command::parse("X", None), Err(EngineError::invalid_action("X")));
        assert_eq!(Command::parse("", None), Err(EngineError::invalid_action("")));
    }

    #[test]
    fn test_from_request() {
        assert_eq!(
            Command::from_request("C", Some(&json!(2))).unwrap(),
            Command::PlayCard(2)
        );
        assert_eq!(
            Command::from_request("buy_card", Some(&json!("4"))).unwrap(),
            Command::BuyCard(4)
        );
        assert_eq!(Command::from_request("P", Some(&Value::Null)).unwrap(), Command::PlayAll);
        assert_eq!(Command::from_request("A", Some(&json!(-3))).unwrap(), Command::Attack);

        assert!(matches!(
            Command::from_request("C", Some(&json!(-1))),
            Err(EngineError::InvalidCardIndex { .. })
        ));
        assert!(matches!(
            Command::from_request("B", Some(&json!(1.5))),
            Err(EngineError::InvalidCardIndex { .. })
        ));
        assert!(matches!(
            Command::from_request("C", Some(&json!([1]))),
            Err(EngineError::InvalidCardIndex { .. })
        ));
        assert!(matches!(
            Command::from_request("Z", Some(&json!(1))),
            Err(EngineError::InvalidAction { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::BuyCard(3).to_string(), "buy_card 3");
        assert_eq!(Command::EndTurn.to_string(), "end_turn");
    }

    #[test]
    fn test_command_serialization() {
        let json = serde_json::to_string(&Command::PlayCard(1)).unwrap();
        assert_eq!(json, r#"{"action":"play_that_card","card_index":1}"#);

        let json = serde_json::to_string(&Command::Attack).unwrap();
        assert_eq!(json, r#"{"action":"attack"}"#);

        let parsed: Command = serde_json::from_str(r#"{"action":"buy_card","card_index":5}"#).unwrap();
        assert_eq!(parsed, Command::BuyCard(5));
    }
}
