use quoridor::{BoardState, Cell, PlayerId, Wall};

fn cells(raw: &[(u8, u8)]) -> Vec<Cell> {
    raw.iter().map(|&(x, y)| Cell::new(x, y)).collect()
}

fn assert_same_cells(mut actual: Vec<Cell>, expected: &[(u8, u8)]) {
    let mut expected = cells(expected);
    actual.sort_by_key(|c| (c.x, c.y));
    expected.sort_by_key(|c| (c.x, c.y));
    assert_eq!(actual, expected);
}

#[test]
fn fresh_board_start_moves() {
    let state = BoardState::new("one", "two");
    assert_same_cells(
        state.legal_destinations(PlayerId::One, None),
        &[(4, 1), (6, 1), (5, 2)],
    );
    assert_same_cells(
        state.legal_destinations(PlayerId::Two, None),
        &[(4, 9), (6, 9), (5, 8)],
    );
}

#[test]
fn center_pawn_has_four_moves() {
    let mut state = BoardState::new("one", "two");
    state.move_player(PlayerId::One, 5, 5);
    assert_same_cells(
        state.legal_destinations(PlayerId::One, None),
        &[(4, 5), (6, 5), (5, 4), (5, 6)],
    );
}

#[test]
fn straight_jump_over_adjacent_opponent() {
    let mut state = BoardState::new("one", "two");
    state.move_player(PlayerId::One, 5, 5);
    state.move_player(PlayerId::Two, 5, 6);

    let destinations = state.legal_destinations(PlayerId::One, None);
    assert!(destinations.contains(&Cell::new(5, 7)), "straight jump");
    assert!(!destinations.contains(&Cell::new(5, 6)), "opponent cell");
    assert!(!destinations.contains(&Cell::new(4, 6)));
    assert!(!destinations.contains(&Cell::new(6, 6)));
    assert_same_cells(destinations, &[(4, 5), (6, 5), (5, 4), (5, 7)]);
}

#[test]
fn blocked_straight_jump_offers_diagonals() {
    let mut state = BoardState::new("one", "two");
    state.move_player(PlayerId::One, 5, 5);
    state.move_player(PlayerId::Two, 5, 6);
    // Bars the move from (5, 6) up to (5, 7).
    state.place_wall(PlayerId::One, Wall::horizontal(5, 7));

    let destinations = state.legal_destinations(PlayerId::One, None);
    assert!(!destinations.contains(&Cell::new(5, 7)));
    assert!(destinations.contains(&Cell::new(4, 6)), "left diagonal");
    assert!(destinations.contains(&Cell::new(6, 6)), "right diagonal");
    assert_same_cells(destinations, &[(4, 5), (6, 5), (5, 4), (4, 6), (6, 6)]);
}

#[test]
fn jump_against_board_edge_offers_opponent_moves() {
    let mut state = BoardState::new("one", "two");
    state.move_player(PlayerId::One, 5, 8);
    // Opponent still on its start cell (5, 9): the straight jump would land
    // on y = 10, off the board.
    let destinations = state.legal_destinations(PlayerId::One, None);
    assert!(destinations.contains(&Cell::new(4, 9)));
    assert!(destinations.contains(&Cell::new(6, 9)));
    assert!(!destinations.contains(&Cell::new(5, 9)));
    assert_same_cells(destinations, &[(4, 8), (6, 8), (5, 7), (4, 9), (6, 9)]);
}

#[test]
fn diagonal_jump_respects_walls_around_opponent() {
    let mut state = BoardState::new("one", "two");
    state.move_player(PlayerId::One, 5, 5);
    state.move_player(PlayerId::Two, 5, 6);
    state.place_wall(PlayerId::One, Wall::horizontal(5, 7));
    // Bars the move from (5, 6) left to (4, 6), so only the right diagonal
    // remains.
    state.place_wall(PlayerId::One, Wall::vertical(5, 6));

    let destinations = state.legal_destinations(PlayerId::One, None);
    assert!(!destinations.contains(&Cell::new(4, 6)));
    assert!(destinations.contains(&Cell::new(6, 6)));
}

#[test]
fn walls_block_plain_moves() {
    let mut state = BoardState::new("one", "two");
    state.move_player(PlayerId::One, 5, 5);
    // Above, covering columns 5 and 6.
    state.place_wall(PlayerId::One, Wall::horizontal(5, 6));
    // Left, covering rows 5 and 6.
    state.place_wall(PlayerId::One, Wall::vertical(5, 5));

    assert_same_cells(
        state.legal_destinations(PlayerId::One, None),
        &[(6, 5), (5, 4)],
    );
}

#[test]
fn wall_spans_two_columns() {
    let mut state = BoardState::new("one", "two");
    // Anchored at (4, 6): blocks upward movement from (4, 5) and (5, 5).
    state.place_wall(PlayerId::One, Wall::horizontal(4, 6));

    state.move_player(PlayerId::One, 4, 5);
    assert!(!state
        .legal_destinations(PlayerId::One, None)
        .contains(&Cell::new(4, 6)));

    state.move_player(PlayerId::One, 5, 5);
    assert!(!state
        .legal_destinations(PlayerId::One, None)
        .contains(&Cell::new(5, 6)));

    // One column further right the wall has no effect.
    state.move_player(PlayerId::One, 6, 5);
    assert!(state
        .legal_destinations(PlayerId::One, None)
        .contains(&Cell::new(6, 6)));
}

#[test]
fn virtual_position_probes_without_mutating() {
    let state = BoardState::new("one", "two");
    let before = state.clone();

    let destinations = state.legal_destinations(PlayerId::One, Some(Cell::new(3, 3)));
    assert_same_cells(destinations, &[(2, 3), (4, 3), (3, 2), (3, 4)]);
    assert_eq!(state, before);
    assert_eq!(state.player(PlayerId::One).position, Cell::new(5, 1));
}

#[test]
fn destinations_stay_on_board_in_corners() {
    let mut state = BoardState::new("one", "two");
    state.move_player(PlayerId::One, 1, 1);
    state.move_player(PlayerId::Two, 9, 9);

    for cell in state.legal_destinations(PlayerId::One, None) {
        assert!(cell.is_on_board());
    }
    for cell in state.legal_destinations(PlayerId::Two, None) {
        assert!(cell.is_on_board());
    }
    assert_same_cells(state.legal_destinations(PlayerId::One, None), &[(2, 1), (1, 2)]);
}
