//! Three-in-a-row detection shared by sub-boards and the super-grid.

use crate::types::{Coord, Player};

/// The eight winning triples, in the order they are checked:
/// rows top to bottom, columns left to right, main diagonal, anti-diagonal.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
    [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)],
    [Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)],
    // Columns
    [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
    [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
    [Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)],
    // Diagonals
    [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
    [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)],
];

/// Returns the owner of the first fully held line in [`LINES`] order.
///
/// `owner` maps a coordinate to the player holding it, if any. The first
/// match is returned even if the grid (illegally) contains several.
pub fn first_winner<F>(owner: F) -> Option<Player>
where
    F: Fn(Coord) -> Option<Player>,
{
    LINES.iter().find_map(|&[a, b, c]| {
        let p = owner(a)?;
        (owner(b) == Some(p) && owner(c) == Some(p)).then_some(p)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: [&str; 3]) -> impl Fn(Coord) -> Option<Player> {
        move |c: Coord| match rows[c.row()].as_bytes()[c.col()] {
            b'X' => Some(Player::X),
            b'O' => Some(Player::O),
            _ => None,
        }
    }

    #[test]
    fn test_empty_grid_has_no_winner() {
        assert_eq!(first_winner(grid(["...", "...", "..."])), None);
    }

    #[test]
    fn test_column_and_diagonals() {
        assert_eq!(first_winner(grid([".O.", ".O.", ".O."])), Some(Player::O));
        assert_eq!(first_winner(grid(["X..", ".X.", "..X"])), Some(Player::X));
        assert_eq!(first_winner(grid(["..O", ".O.", "O.."])), Some(Player::O));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        assert_eq!(first_winner(grid(["XXO", "OOX", "XOX"])), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Both row 0 (O) and row 2 (X) are complete; rows are checked top-down.
        assert_eq!(first_winner(grid(["OOO", "...", "XXX"])), Some(Player::O));
        assert_eq!(first_winner(grid(["X.O", "X.O", "X.O"])), Some(Player::X));
    }
}
