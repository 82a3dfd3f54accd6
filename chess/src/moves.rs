//! Pseudo-legal destination generation, one arm per piece kind.
//!
//! Moves are never checked against leaving the mover's king in check.

use smallvec::SmallVec;

use crate::board::Board;
use crate::point::Point;
use crate::types::{PieceKind, Square};

/// Destination list. A queen in the open has at most 27 targets.
pub type MoveList = SmallVec<[Point; 32]>;

const ROOK_DIRECTIONS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(-1, 0),
];

const BISHOP_DIRECTIONS: [Point; 4] = [
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, -1),
    Point::new(-1, 1),
];

const KNIGHT_OFFSETS: [Point; 8] = [
    Point::new(1, 2),
    Point::new(2, 1),
    Point::new(2, -1),
    Point::new(1, -2),
    Point::new(-1, -2),
    Point::new(-2, -1),
    Point::new(-2, 1),
    Point::new(-1, 2),
];

const KING_OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
];

/// Destinations for the piece standing on `square`.
pub fn possible_moves(square: &Square, board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    match square.kind {
        PieceKind::Empty => {}
        PieceKind::Pawn => pawn_moves(square, board, &mut moves),
        PieceKind::Rook => slide(square, board, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Bishop => slide(square, board, &BISHOP_DIRECTIONS, &mut moves),
        PieceKind::Queen => {
            slide(square, board, &ROOK_DIRECTIONS, &mut moves);
            slide(square, board, &BISHOP_DIRECTIONS, &mut moves);
        }
        PieceKind::Knight => step(square, board, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::King => step(square, board, &KING_OFFSETS, &mut moves),
    }
    moves
}

fn pawn_moves(square: &Square, board: &Board, moves: &mut MoveList) {
    let forward = square.color.forward();
    let one = square.position + Point::new(0, forward);
    let one_is_empty = board.square(one).is_some_and(Square::is_empty);

    if one_is_empty {
        moves.push(one);

        if square.position.y == square.color.pawn_start_row() {
            let two = one + Point::new(0, forward);
            if board.square(two).is_some_and(Square::is_empty) {
                moves.push(two);
            }
        }
    }

    for dx in [-1, 1] {
        let target = square.position + Point::new(dx, forward);
        let Some(occupant) = board.square(target) else {
            continue;
        };
        if occupant.is_occupied_by(square.color.opposite()) || target == board.en_passant_target()
        {
            moves.push(target);
        }
    }
}

fn slide(square: &Square, board: &Board, directions: &[Point], moves: &mut MoveList) {
    for &direction in directions {
        let mut target = square.position + direction;
        while let Some(occupant) = board.square(target) {
            if occupant.is_empty() {
                moves.push(target);
                target = target + direction;
                continue;
            }
            if occupant.color != square.color {
                moves.push(target);
            }
            break;
        }
    }
}

fn step(square: &Square, board: &Board, offsets: &[Point], moves: &mut MoveList) {
    for &offset in offsets {
        let target = square.position + offset;
        match board.square(target) {
            Some(occupant) if !occupant.is_occupied_by(square.color) => moves.push(target),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn moves_at(fen: &str, x: i32, y: i32) -> Vec<Point> {
        let board = Board::from_fen(fen).unwrap();
        let square = *board.square(Point::new(x, y)).unwrap();
        possible_moves(&square, &board).into_vec()
    }

    fn sorted(mut points: Vec<Point>) -> Vec<(i32, i32)> {
        points.sort_by_key(|p| (p.y, p.x));
        points.into_iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn empty_square_has_no_moves() {
        assert!(moves_at("8/8/8/8/8/8/8/8 w - -", 3, 3).is_empty());
    }

    #[test]
    fn rook_stops_at_first_blocker_and_captures_only_enemies() {
        // White rook d4, own pawn d6, black pawn f4.
        let moves = moves_at("8/8/3P4/8/3R1p2/8/8/8 w - -", 3, 4);
        assert!(moves.contains(&Point::new(3, 3)));
        assert!(!moves.contains(&Point::new(3, 2)), "own piece is not a target");
        assert!(!moves.contains(&Point::new(3, 1)), "no move past a blocker");
        assert!(moves.contains(&Point::new(5, 4)), "enemy blocker is captured");
        assert!(!moves.contains(&Point::new(6, 4)));
        assert!(moves.contains(&Point::new(0, 4)));
        assert!(moves.contains(&Point::new(3, 7)));
        assert_eq!(moves.len(), 1 + 3 + 2 + 3);
    }

    #[test]
    fn rook_generation_order_is_down_up_right_left() {
        let moves = moves_at("8/8/8/8/8/8/1p6/pR6 w - -", 1, 7);
        assert_eq!(
            moves,
            vec![
                Point::new(1, 6),
                Point::new(2, 7),
                Point::new(3, 7),
                Point::new(4, 7),
                Point::new(5, 7),
                Point::new(6, 7),
                Point::new(7, 7),
                Point::new(0, 7),
            ]
        );
    }

    #[test]
    fn bishop_slides_diagonally() {
        let moves = moves_at("8/8/8/8/8/8/8/B7 w - -", 0, 7);
        assert_eq!(
            sorted(moves),
            vec![(7, 0), (6, 1), (5, 2), (4, 3), (3, 4), (2, 5), (1, 6)]
        );
    }

    #[test]
    fn queen_is_rook_then_bishop() {
        let board = Board::from_fen("8/8/8/8/3Q4/8/8/8 w - -").unwrap();
        let queen = *board.square(Point::new(3, 4)).unwrap();
        let moves = possible_moves(&queen, &board);
        assert_eq!(moves.len(), 27);
        assert_eq!(moves[0], Point::new(3, 5));
    }

    #[test]
    fn knight_offsets_clip_to_board_and_skip_own_pieces() {
        let moves = moves_at("8/8/8/8/8/8/2P5/N7 w - -", 0, 7);
        assert_eq!(sorted(moves), vec![(1, 5)]);

        let center = moves_at("8/8/8/8/3n4/8/8/8 b - -", 3, 4);
        assert_eq!(center.len(), 8);
    }

    #[test]
    fn king_steps_one_square() {
        let moves = moves_at("8/8/8/8/8/8/3p4/3K4 w - -", 3, 7);
        assert_eq!(sorted(moves), vec![(2, 6), (3, 6), (4, 6), (2, 7), (4, 7)]);
    }

    #[test]
    fn pawn_single_and_double_advance_from_start() {
        let moves = moves_at("8/8/8/8/8/8/4P3/8 w - -", 4, 6);
        assert_eq!(moves, vec![Point::new(4, 5), Point::new(4, 4)]);

        let black = moves_at("8/4p3/8/8/8/8/8/8 b - -", 4, 1);
        assert_eq!(black, vec![Point::new(4, 2), Point::new(4, 3)]);
    }

    #[test]
    fn pawn_double_advance_needs_both_squares_empty() {
        assert!(moves_at("8/8/8/8/8/4n3/4P3/8 w - -", 4, 6).is_empty());
        assert_eq!(
            moves_at("8/8/8/8/4n3/8/4P3/8 w - -", 4, 6),
            vec![Point::new(4, 5)]
        );
    }

    #[test]
    fn pawn_off_start_row_moves_one() {
        assert_eq!(
            moves_at("8/8/8/8/8/4P3/8/8 w - -", 4, 5),
            vec![Point::new(4, 4)]
        );
    }

    #[test]
    fn pawn_captures_diagonally_and_onto_en_passant_target() {
        // White pawn e5, black pawns d6 (capturable) and f5 (just double-pushed).
        let moves = moves_at("8/8/3p4/4Pp2/8/8/8/8 w - 52", 4, 3);
        assert_eq!(
            moves,
            vec![Point::new(4, 2), Point::new(3, 2), Point::new(5, 2)]
        );
    }

    #[test]
    fn pawn_does_not_capture_own_color() {
        let moves = moves_at("8/8/3P4/4P3/8/8/8/8 w - -", 4, 3);
        assert_eq!(moves, vec![Point::new(4, 2)]);
    }

    #[test]
    fn generation_never_includes_origin_or_off_board_points() {
        let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").unwrap();
        for square in board.squares() {
            for target in possible_moves(square, &board) {
                assert!(target.is_inside());
                assert_ne!(target, square.position);
            }
        }
        let knight = *board.square(Point::new(1, 7)).unwrap();
        assert_eq!(knight.color, Color::White);
        assert_eq!(sorted(possible_moves(&knight, &board).into_vec()), vec![(0, 5), (2, 5)]);
    }
}
