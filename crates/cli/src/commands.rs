use janken_core::Hand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit a round; `None` means no hand was chosen.
    Play(Option<Hand>),
    Status,
    Reset,
    Lang(String),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let input = line.trim();
    if input.is_empty() {
        return Command::Play(None);
    }
    if let Some(hand) = Hand::from_keyword(input) {
        return Command::Play(Some(hand));
    }
    let mut parts = input.split_whitespace();
    let head = parts.next().unwrap_or_default().to_lowercase();
    match head.as_str() {
        "status" | "st" => Command::Status,
        "reset" | "new" | "n" => Command::Reset,
        "lang" | "l" => match parts.next() {
            Some(code) => Command::Lang(code.to_string()),
            None => Command::Unknown(input.to_string()),
        },
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_submits_without_hand() {
        assert_eq!(parse_command(""), Command::Play(None));
        assert_eq!(parse_command("   "), Command::Play(None));
    }

    #[test]
    fn parses_hands_before_commands() {
        assert_eq!(parse_command("r"), Command::Play(Some(Hand::Rock)));
        assert_eq!(parse_command("Paper"), Command::Play(Some(Hand::Paper)));
        assert_eq!(parse_command("✌️"), Command::Play(Some(Hand::Scissors)));
    }

    #[test]
    fn parses_session_commands() {
        assert_eq!(parse_command("status"), Command::Status);
        assert_eq!(parse_command("NEW"), Command::Reset);
        assert_eq!(parse_command("lang ja"), Command::Lang("ja".to_string()));
        assert_eq!(parse_command("lang"), Command::Unknown("lang".to_string()));
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(
            parse_command("lizard"),
            Command::Unknown("lizard".to_string())
        );
    }
}
