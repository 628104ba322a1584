/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    NewGame,
    Board,
    Select(Option<String>),
    Move(Option<String>),
    /// `e2e4` shorthand: select the first square, move to the second.
    Play(String, String),
    Guide,
    Log,
    Captured,
    Turn,
    Random,
    Set(Option<String>, Option<String>),
    Help,
    Quit,
    Unknown(String),
}

fn is_square(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 2
        && matches!(bytes[0].to_ascii_lowercase(), b'a'..=b'h')
        && matches!(bytes[1], b'1'..=b'8')
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let arg = |i: usize| parts.get(i).map(|v| (*v).to_string());

    let cmd = match parts[0].to_ascii_lowercase().as_str() {
        "new" => ConsoleCommand::NewGame,
        "board" => ConsoleCommand::Board,
        "select" => ConsoleCommand::Select(arg(1)),
        "move" => ConsoleCommand::Move(arg(1)),
        "guide" => ConsoleCommand::Guide,
        "log" => ConsoleCommand::Log,
        "captured" => ConsoleCommand::Captured,
        "turn" => ConsoleCommand::Turn,
        "random" => ConsoleCommand::Random,
        "set" => ConsoleCommand::Set(arg(1), arg(2)),
        "help" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        word if word.len() == 4 && word.is_char_boundary(2) => {
            let (from, to) = word.split_at(2);
            if parts.len() == 1 && is_square(from) && is_square(to) {
                ConsoleCommand::Play(from.to_string(), to.to_string())
            } else {
                ConsoleCommand::Unknown(trimmed.to_string())
            }
        }
        _ => ConsoleCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
