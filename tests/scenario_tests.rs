//! End-to-end placement scenarios.
//!
//! Each test builds a small board, runs the region -> kingdom -> placement
//! pipeline, and checks the cells a ruler may be seeded on.

use kingdom_rules::core::{Board, Cell, Grid, Piece, PieceKind, PlayerId, SpecialMarker};
use kingdom_rules::placement::{adjacent_kingdoms, legal_ruler_placements, partition_by_terrain};
use kingdom_rules::regions::{compute_kingdoms, compute_regions, piece_index, RegionId};
use kingdom_rules::rules::KingdomRules;

/// 4x4 ground board, settlement at 5 and temple at 10 (diagonal neighbors).
fn diagonal_board() -> Board {
    let mut board = Board::empty(Grid::new(4, 4));
    board.place_piece(5, Piece::civ(PieceKind::Settlement)).unwrap();
    board.place_piece(10, Piece::civ(PieceKind::Temple)).unwrap();
    board
}

#[test]
fn test_diagonal_pieces_form_separate_regions() {
    let board = diagonal_board();
    let regions = compute_regions(&board);

    let mut expected = vec![0u32; 16];
    expected[5] = 1;
    expected[10] = 2;
    assert_eq!(regions.raw(), expected.as_slice());

    let kingdoms = compute_kingdoms(&regions, &board).unwrap();
    let signed = kingdoms.to_signed();
    assert_eq!(signed[5], -1);
    assert_eq!(signed[10], -2);
    assert_eq!(signed.iter().filter(|&&id| id != 0).count(), 2);
}

#[test]
fn test_cells_around_temple_are_legal() {
    let board = diagonal_board();
    let kingdoms = compute_kingdoms(&compute_regions(&board), &board).unwrap();

    let legal = legal_ruler_placements(&board, &kingdoms).unwrap();
    assert_eq!(legal, vec![6, 9, 11, 14]);
    assert!(!legal.contains(&0));
}

#[test]
fn test_cell_between_two_kingdoms_is_excluded() {
    // r . r .
    // . t . .
    // . . . .
    let mut board = Board::empty(Grid::new(3, 4));
    board.place_piece(0, Piece::ruler(PieceKind::Settlement, PlayerId::new(1))).unwrap();
    board.place_piece(2, Piece::ruler(PieceKind::Temple, PlayerId::new(2))).unwrap();
    board.place_piece(5, Piece::civ(PieceKind::Temple)).unwrap();

    let kingdoms = compute_kingdoms(&compute_regions(&board), &board).unwrap();
    let adjacent = adjacent_kingdoms(&board, &kingdoms).unwrap();
    assert_eq!(adjacent[1].len(), 2);

    let legal = legal_ruler_placements(&board, &kingdoms).unwrap();
    // 1 touches the temple at 5 but sits between two kingdoms.
    // 3 touches the ruling temple at 2 and only that kingdom.
    assert_eq!(legal, vec![3, 4, 6, 9]);
}

#[test]
fn test_empty_board_has_no_moves() {
    let board = Board::empty(Grid::new(5, 5));
    let regions = compute_regions(&board);
    let kingdoms = compute_kingdoms(&regions, &board).unwrap();

    assert!(regions.raw().iter().all(|&id| id == 0));
    assert!(kingdoms.to_signed().iter().all(|&id| id == 0));
    assert!(legal_ruler_placements(&board, &kingdoms).unwrap().is_empty());
}

#[test]
fn test_zero_size_board_gives_empty_outputs() {
    let board = Board::empty(Grid::new(0, 0));
    let regions = compute_regions(&board);
    let kingdoms = compute_kingdoms(&regions, &board).unwrap();

    assert!(regions.raw().is_empty());
    assert!(kingdoms.to_signed().is_empty());
    assert!(legal_ruler_placements(&board, &kingdoms).unwrap().is_empty());
    assert!(piece_index(&board, &regions).unwrap().iter().next().is_none());
    assert!(partition_by_terrain(&board, &[]).unwrap().is_empty());
}

#[test]
fn test_markers_and_rivers_block_placement() {
    // G  t  R
    // G? G! G
    let cells = vec![
        Cell::ground(),
        Cell::ground().with_piece(Piece::civ(PieceKind::Temple)),
        Cell::river(),
        Cell::ground()
            .with_piece(Piece::civ(PieceKind::Settlement))
            .with_special(SpecialMarker::Unification),
        Cell::ground().with_special(SpecialMarker::Catastrophe),
        Cell::ground(),
    ];
    let board = Board::new(Grid::new(2, 3), cells).unwrap();

    let legal = KingdomRules::default().legal_moves(&board).unwrap();
    assert_eq!(legal, vec![0]);
}

#[test]
fn test_growing_a_kingdom() {
    let mut board = diagonal_board();
    let rules = KingdomRules::default();
    let king = Piece::ruler(PieceKind::Settlement, PlayerId::new(1));

    // Next to the temple, touching nothing else.
    rules.place_ruler(&mut board, 11, king).unwrap();

    let analysis = rules.analyze(&board).unwrap();
    assert_eq!(analysis.kingdoms.kingdoms(), vec![RegionId(2)]);
    assert_eq!(analysis.kingdoms.to_signed()[5], -1);

    // 6 touches the temple kingdom and the settlement region; only one of
    // them is a kingdom, so it stays legal.
    let moves = rules.legal_moves(&board).unwrap();
    assert_eq!(moves, vec![6, 9, 14]);

    let pieces = analysis.pieces(&board).unwrap();
    let kingdom = pieces.get(RegionId(2)).unwrap();
    assert_eq!(kingdom.temple, vec![10]);
    assert_eq!(kingdom.rulers[0].cell, 11);
    assert_eq!(kingdom.rulers[0].player, PlayerId::new(1));
}

#[test]
fn test_labeling_length_mismatch_is_rejected() {
    let small = Board::empty(Grid::new(2, 2));
    let large = Board::empty(Grid::new(3, 3));
    let regions = compute_regions(&large);

    assert!(compute_kingdoms(&regions, &small).is_err());
    assert!(piece_index(&small, &regions).is_err());

    let kingdoms = compute_kingdoms(&regions, &large).unwrap();
    assert!(legal_ruler_placements(&small, &kingdoms).is_err());
    assert!(adjacent_kingdoms(&small, &kingdoms).is_err());
}

#[test]
fn test_deserialized_board_with_missing_cells_is_rejected() {
    let json = serde_json::to_string(&Board::empty(Grid::new(1, 2))).unwrap();
    let short = json.replace(r#""rows":1"#, r#""rows":2"#);

    assert!(serde_json::from_str::<Board>(&short).is_err());

    // A well-formed board survives the round trip and still analyzes.
    let board: Board = serde_json::from_str(&json).unwrap();
    assert!(compute_regions(&board).raw().iter().all(|&id| id == 0));
}
