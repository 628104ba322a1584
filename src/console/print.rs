use crate::board::{Coordinate, GameSnapshot, MoveLog};

use super::ConsoleOptions;

pub const HELP: &[&str] = &[
    "commands:",
    "  new                 start a new game",
    "  board               draw the board",
    "  select <sq>         select a piece of the side to move",
    "  move <sq>           move the selected piece",
    "  <from><to>          select and move in one step, e.g. e2e4",
    "  guide               list destinations of the selected piece",
    "  log                 show the move log",
    "  captured            show captured pieces",
    "  turn                show the side to move",
    "  random              play a random legal move",
    "  set <opt> <value>   guide, coordinates, flip, unicode",
    "  help                this text",
    "  quit                leave",
];

/// Figurine for a piece symbol, keeping the letter's colour convention.
#[must_use]
pub fn glyph(symbol: char) -> char {
    match symbol {
        'K' => '♔',
        'Q' => '♕',
        'R' => '♖',
        'B' => '♗',
        'N' => '♘',
        'P' => '♙',
        'k' => '♚',
        'q' => '♛',
        'r' => '♜',
        'b' => '♝',
        'n' => '♞',
        'p' => '♟',
        other => other,
    }
}

fn display_symbol(symbol: char, options: &ConsoleOptions) -> char {
    if options.unicode {
        glyph(symbol)
    } else {
        symbol
    }
}

/// Draw the board, rank 8 on top unless flipped. Guide cells show `*`.
#[must_use]
pub fn render_board(snapshot: &GameSnapshot, options: &ConsoleOptions) -> Vec<String> {
    let order: Vec<usize> = if options.flip {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };

    let mut lines = Vec::with_capacity(9);
    for &row in &order {
        let cells: Vec<String> = order
            .iter()
            .map(|&column| {
                let at = Coordinate::new(row, column);
                let c = match snapshot.cells[row][column] {
                    Some(symbol) => display_symbol(symbol, options),
                    None if options.guide && snapshot.move_guide.contains(&at) => '*',
                    None => '.',
                };
                c.to_string()
            })
            .collect();
        let cells = cells.join(" ");
        if options.coordinates {
            lines.push(format!("{} {cells}", Coordinate::new(row, 0).rank()));
        } else {
            lines.push(cells);
        }
    }
    if options.coordinates {
        let files: Vec<String> = order
            .iter()
            .map(|&column| Coordinate::new(0, column).file().to_string())
            .collect();
        lines.push(format!("  {}", files.join(" ")));
    }
    lines
}

#[must_use]
pub fn render_guide(guide: &[Coordinate]) -> String {
    if guide.is_empty() {
        return "guide: (none)".to_string();
    }
    let cells: Vec<String> = guide.iter().map(|c| c.to_notation()).collect();
    format!("guide: {}", cells.join(" "))
}

/// Numbered rounds, one per line.
#[must_use]
pub fn render_log(log: &MoveLog) -> Vec<String> {
    log.rounds()
        .map(|round| match round.black {
            Some(black) => format!("{}. {} {}", round.number, round.white, black),
            None => format!("{}. {}", round.number, round.white),
        })
        .collect()
}

#[must_use]
pub fn render_captured(snapshot: &GameSnapshot, options: &ConsoleOptions) -> Vec<String> {
    let list = |symbols: &[char]| {
        if symbols.is_empty() {
            "-".to_string()
        } else {
            symbols
                .iter()
                .map(|&s| display_symbol(s, options).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        }
    };
    vec![
        format!("White lost: {}", list(&snapshot.captured_white)),
        format!("Black lost: {}", list(&snapshot.captured_black)),
    ]
}
