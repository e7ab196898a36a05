//! Text rendering of boards and game status.
//!
//! Every square takes four columns. The middle two hold the glyph; the outer
//! two are blank, or `*` when a piece stands on a highlighted target.
//!
//! ```text
//!      0   1   2   3   4   5   6
//!  0  Y7  ..  ##  @@  ##  ..  Y6
//!  1  ..  Y3  ..  ##  ..  Y2  ..
//!  2  Y1  ..  Y5  ..  Y4  ..  Y8
//!  3  ..  ~~  ~~  ..  ~~  ~~  ..
//! ```

use std::collections::BTreeSet;

use jungle_core::{Board, Coord, GameState, Piece, Player, Terrain, HEIGHT, WIDTH};

use crate::config::ShellConfig;

/// Owner letter for a piece.
fn owner_letter(player: Player) -> char {
    match player {
        Player::One => 'Y',
        Player::Two => 'R',
    }
}

/// Two-character glyph for a piece, e.g. `Y7`.
pub fn piece_glyph(piece: Piece) -> String {
    format!("{}{}", owner_letter(piece.owner()), piece.strength())
}

/// Two-character glyph for an empty square.
pub fn terrain_glyph(terrain: Terrain) -> &'static str {
    match terrain {
        Terrain::Ground => "..",
        Terrain::Trap(_) => "##",
        Terrain::Den(_) => "@@",
        Terrain::Water => "~~",
    }
}

fn cell(board: &Board, coord: Coord, highlighted: bool) -> String {
    match (board.piece_at(coord), highlighted) {
        (Some(piece), true) => format!("*{}*", piece_glyph(piece)),
        (Some(piece), false) => format!(" {} ", piece_glyph(piece)),
        (None, true) => " ** ".to_string(),
        (None, false) => format!(" {} ", terrain_glyph(coord.terrain())),
    }
}

/// Render the board, row 0 on top, marking `targets`.
pub fn render_board(board: &Board, targets: &BTreeSet<Coord>, config: &ShellConfig) -> String {
    let mut out = String::new();

    if config.coordinates {
        let header: String = (0..WIDTH).map(|x| format!(" {}  ", x)).collect();
        out.push_str("   ");
        out.push_str(header.trim_end());
        out.push('\n');
    }

    for y in 0..HEIGHT {
        let mut line = if config.coordinates {
            format!("{:>2} ", y)
        } else {
            String::new()
        };
        for x in 0..WIDTH {
            let coord = Coord::new(x, y);
            line.push_str(&cell(board, coord, targets.contains(&coord)));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// One line describing whose turn it is or who won.
pub fn render_status(state: &GameState, config: &ShellConfig) -> String {
    let [one, two] = state.piece_counts();
    match state.winner() {
        Some(winner) => format!("{} wins ({} vs {} pieces)", config.name(winner), one, two),
        None => format!(
            "{} ({}) to move, {} vs {} pieces",
            config.name(state.current_player()),
            owner_letter(state.current_player()),
            one,
            two
        ),
    }
}

/// Rows holding the den and traps a player defends.
fn defended_rows(player: Player) -> BTreeSet<u8> {
    Coord::all()
        .filter(|coord| coord.terrain().owner() == Some(player))
        .map(Coord::y)
        .collect()
}

/// Glyph key printed by `jungle board`.
pub fn legend(config: &ShellConfig) -> String {
    let mut lines = vec![
        "..  ground     ##  trap".to_string(),
        "@@  den        ~~  water".to_string(),
        "**  legal target (a targeted piece is shown as *Y3*)".to_string(),
    ];
    for player in Player::all() {
        let rows: Vec<String> = defended_rows(player).iter().map(u8::to_string).collect();
        lines.push(format!(
            "{}<n> {}, defending the den and traps on rows {}",
            owner_letter(player),
            config.name(player),
            rows.join(",")
        ));
    }
    lines.push("n is strength:".to_string());
    for strength in 1..=8 {
        let piece = Piece::new(Player::One, strength);
        lines.push(format!("  {}  {}", strength, piece.name()));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
