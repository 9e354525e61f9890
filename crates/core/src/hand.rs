use serde::{Deserialize, Serialize};

/// One of the three janken hands. Ordinals follow the classic table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    Rock,
    Scissors,
    Paper,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Scissors, Hand::Paper];

    pub fn ordinal(self) -> u8 {
        match self {
            Hand::Rock => 0,
            Hand::Scissors => 1,
            Hand::Paper => 2,
        }
    }

    pub fn from_ordinal(value: u8) -> Option<Self> {
        match value {
            0 => Some(Hand::Rock),
            1 => Some(Hand::Scissors),
            2 => Some(Hand::Paper),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Hand::Rock => "rock",
            Hand::Scissors => "scissors",
            Hand::Paper => "paper",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Hand::Rock => "✊️",
            Hand::Scissors => "✌️",
            Hand::Paper => "🖐️",
        }
    }

    /// Translation key for the hand's display name.
    pub fn label_key(self) -> &'static str {
        match self {
            Hand::Rock => "game.hand.rock",
            Hand::Scissors => "game.hand.scissors",
            Hand::Paper => "game.hand.paper",
        }
    }

    pub fn from_keyword(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        // glyphs may carry a variation selector
        let bare = trimmed.trim_end_matches('\u{fe0f}');
        match bare {
            "✊" => return Some(Hand::Rock),
            "✌" => return Some(Hand::Scissors),
            "🖐" | "✋" => return Some(Hand::Paper),
            _ => {}
        }
        match trimmed.to_lowercase().as_str() {
            "rock" | "r" | "0" | "gu" | "goo" | "グー" => Some(Hand::Rock),
            "scissors" | "s" | "1" | "choki" | "チョキ" => Some(Hand::Scissors),
            "paper" | "p" | "2" | "pa" | "パー" => Some(Hand::Paper),
            _ => None,
        }
    }

    /// True when `self` defeats `other`: Rock > Scissors > Paper > Rock.
    pub fn beats(self, other: Hand) -> bool {
        (other.ordinal() + 3 - self.ordinal()) % 3 == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundResult {
    Win,
    Lose,
    Draw,
}

impl RoundResult {
    pub fn label_key(self) -> &'static str {
        match self {
            RoundResult::Win => "game.result.win",
            RoundResult::Lose => "game.result.lose",
            RoundResult::Draw => "game.result.draw",
        }
    }
}

/// Judges a round from the user's side.
pub fn judge(user: Hand, system: Hand) -> RoundResult {
    if user.beats(system) {
        RoundResult::Win
    } else if system.beats(user) {
        RoundResult::Lose
    } else {
        RoundResult::Draw
    }
}
