//! Cross-checks placement parsing and quiet-position move generation against cozy-chess.

use chess::{Board, Color, PieceKind, Point, START_FEN};
use cozy_chess::{File, Rank, Square};

const POSITIONS: [&str; 4] = [
    START_FEN,
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ -",
];

fn reference(fen: &str) -> cozy_chess::Board {
    format!("{fen} 0 1")
        .parse()
        .unwrap_or_else(|err| panic!("cozy-chess rejected {fen}: {err:?}"))
}

fn to_cozy(point: Point) -> Square {
    Square::new(File::index(point.x as usize), Rank::index(7 - point.y as usize))
}

fn from_cozy(square: Square) -> Point {
    Point::new(square.file() as i32, 7 - square.rank() as i32)
}

fn kind_of(piece: cozy_chess::Piece) -> PieceKind {
    match piece {
        cozy_chess::Piece::Pawn => PieceKind::Pawn,
        cozy_chess::Piece::Knight => PieceKind::Knight,
        cozy_chess::Piece::Bishop => PieceKind::Bishop,
        cozy_chess::Piece::Rook => PieceKind::Rook,
        cozy_chess::Piece::Queen => PieceKind::Queen,
        cozy_chess::Piece::King => PieceKind::King,
    }
}

fn color_of(color: cozy_chess::Color) -> Color {
    match color {
        cozy_chess::Color::White => Color::White,
        cozy_chess::Color::Black => Color::Black,
    }
}

#[test]
fn placement_matches_reference_parser() {
    for fen in POSITIONS {
        let ours = Board::from_fen(fen).unwrap();
        let theirs = reference(fen);
        for square in ours.squares() {
            let at = to_cozy(square.position);
            let expected = theirs
                .piece_on(at)
                .zip(theirs.color_on(at))
                .map(|(piece, color)| (kind_of(piece), color_of(color)));
            assert_eq!(square.occupant(), expected, "{fen} at {}", square.position);
        }
        let side = color_of(theirs.side_to_move());
        assert_eq!(ours.turn(), side, "{fen}");
    }
}

#[test]
fn opening_destinations_match_reference_generator() {
    let ours = Board::from_fen(START_FEN).unwrap();
    let mut expected: Vec<(Point, Point)> = Vec::new();
    reference(START_FEN).generate_moves(|moves| {
        expected.extend(moves.into_iter().map(|mv| (from_cozy(mv.from), from_cozy(mv.to))));
        false
    });

    let mut actual: Vec<(Point, Point)> = ours
        .squares()
        .filter(|sq| sq.is_occupied_by(Color::White))
        .flat_map(|sq| {
            ours.possible_moves(sq.position)
                .into_iter()
                .map(move |to| (sq.position, to))
        })
        .collect();

    let key = |(from, to): &(Point, Point)| (from.y, from.x, to.y, to.x);
    expected.sort_by_key(key);
    actual.sort_by_key(key);
    assert_eq!(actual.len(), 20);
    assert_eq!(actual, expected);
}

#[test]
fn knight_destinations_match_in_open_position() {
    // No pins, no checks: every knight move is also legal.
    let fen = "4k3/8/8/3n4/8/2N5/8/4K3 w - -";
    let ours = Board::from_fen(fen).unwrap();
    let knight = Point::new(2, 5);

    let mut expected: Vec<Point> = Vec::new();
    reference(fen).generate_moves_for(to_cozy(knight).bitboard(), |moves| {
        expected.extend(moves.into_iter().map(|mv| from_cozy(mv.to)));
        false
    });

    let mut actual = ours.possible_moves(knight).into_vec();
    actual.sort_by_key(|p| (p.y, p.x));
    expected.sort_by_key(|p| (p.y, p.x));
    assert_eq!(actual, expected);
}
