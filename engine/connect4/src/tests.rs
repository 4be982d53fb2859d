use super::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[test]
fn test_initial_state() {
    let pos = Position::new();
    assert_eq!(pos.side_to_move(), Player::Red);
    assert_eq!(pos.status(), Status::Ongoing);
    for col in 0..COLS {
        assert_eq!(pos.height(col), 0);
        for row in 0..ROWS {
            assert_eq!(pos.cell(col, row), None);
        }
    }
}

#[test]
fn test_legal_moves() {
    let pos = Position::new();
    assert_eq!(pos.legal_moves(), (0..COLS).collect::<Vec<_>>());

    // After one move every column is still open
    let mut pos = pos;
    pos.make(3).unwrap();
    assert_eq!(pos.legal_moves().len(), COLS);
}

#[test]
fn test_make_drops_to_bottom() {
    let mut pos = Position::new();
    pos.make(3).unwrap();

    assert_eq!(pos.cell(3, 0), Some(Player::Red));
    assert_eq!(pos.height(3), 1);
    assert_eq!(pos.side_to_move(), Player::Yellow);
    assert_eq!(pos.status(), Status::Ongoing);
}

#[test]
fn test_stacking_fills_column() {
    let mut pos = Position::new();

    for i in 0..ROWS {
        pos.make(0).unwrap();
        assert_eq!(pos.height(0), i + 1);
    }

    assert!(!pos.legal_moves().contains(&0));
    assert_eq!(pos.make(0), Err(MoveError::ColumnFull(0)));
}

#[test]
fn test_out_of_range_rejected() {
    let mut pos = Position::new();
    assert_eq!(pos.make(COLS), Err(MoveError::OutOfRange(COLS)));
    assert_eq!(pos.make(99), Err(MoveError::OutOfRange(99)));
}

#[test]
fn test_rejected_move_leaves_position_untouched() {
    let mut pos = Position::new();
    for _ in 0..ROWS {
        pos.make(0).unwrap();
    }

    let before = pos.clone();
    assert!(pos.make(0).is_err());
    assert_eq!(pos, before);
}

#[test]
fn test_horizontal_win() {
    let mut pos = Position::new();

    // Red fills columns 0..3 on row 0, Yellow parks in column 6
    pos.make(0).unwrap(); // Red (0,0)
    pos.make(6).unwrap(); // Yellow (6,0)
    pos.make(1).unwrap(); // Red (1,0)
    pos.make(6).unwrap(); // Yellow (6,1)
    pos.make(2).unwrap(); // Red (2,0)
    pos.make(6).unwrap(); // Yellow (6,2)
    pos.make(3).unwrap(); // Red (3,0) - wins

    assert_eq!(pos.status(), Status::Won(Player::Red));
    assert!(pos.legal_moves().is_empty());
}

#[test]
fn test_vertical_win() {
    let mut pos = Position::new();

    // Red stacks column 0, Yellow stacks column 1
    for _ in 0..3 {
        pos.make(0).unwrap();
        pos.make(1).unwrap();
    }
    pos.make(0).unwrap(); // Red's fourth - wins

    assert_eq!(pos.status(), Status::Won(Player::Red));
}

#[test]
fn test_diagonal_win_ascending() {
    let mut pos = Position::new();

    // Red lands on (0,0), (1,1), (2,2), (3,3); Yellow builds the support
    // stacks in columns 5 and 6 to stay out of the way.
    pos.make(0).unwrap(); // Red (0,0)
    pos.make(5).unwrap(); // Yellow (5,0)
    pos.make(1).unwrap(); // Red (1,0) base
    pos.make(6).unwrap(); // Yellow (6,0)
    pos.make(1).unwrap(); // Red (1,1)
    pos.make(5).unwrap(); // Yellow (5,1)
    pos.make(2).unwrap(); // Red (2,0) base
    pos.make(6).unwrap(); // Yellow (6,1)
    pos.make(2).unwrap(); // Red (2,1)
    pos.make(5).unwrap(); // Yellow (5,2)
    pos.make(2).unwrap(); // Red (2,2)
    pos.make(6).unwrap(); // Yellow (6,2)
    pos.make(3).unwrap(); // Red (3,0) base
    pos.make(5).unwrap(); // Yellow (5,3)
    pos.make(3).unwrap(); // Red (3,1)
    pos.make(6).unwrap(); // Yellow (6,3)
    pos.make(3).unwrap(); // Red (3,2)
    pos.make(5).unwrap(); // Yellow (5,4)
    pos.make(3).unwrap(); // Red (3,3) - wins

    assert_eq!(pos.status(), Status::Won(Player::Red));
}

#[test]
fn test_diagonal_win_descending() {
    let mut pos = Position::new();

    // Red at (3,0), (2,1), (1,2), (0,3)
    pos.make(3).unwrap(); // Red (3,0)
    pos.make(2).unwrap(); // Yellow (2,0)
    pos.make(2).unwrap(); // Red (2,1)
    pos.make(1).unwrap(); // Yellow (1,0)
    pos.make(1).unwrap(); // Red (1,1)
    pos.make(0).unwrap(); // Yellow (0,0)
    pos.make(1).unwrap(); // Red (1,2)
    pos.make(0).unwrap(); // Yellow (0,1)
    pos.make(0).unwrap(); // Red (0,2)
    pos.make(4).unwrap(); // Yellow (4,0)
    pos.make(0).unwrap(); // Red (0,3) - wins

    assert_eq!(pos.status(), Status::Won(Player::Red));
}

#[test]
fn test_move_after_win_rejected() {
    let mut pos = Position::new();
    for _ in 0..3 {
        pos.make(0).unwrap();
        pos.make(1).unwrap();
    }
    pos.make(0).unwrap(); // Red wins vertically

    assert_eq!(pos.status(), Status::Won(Player::Red));
    assert_eq!(pos.make(2), Err(MoveError::GameOver));
}

#[test]
fn test_draw_on_full_board() {
    // Column stacks (bottom to top) that admit no line of four anywhere.
    // Even columns: R R Y Y R R, odd columns: Y Y R R Y Y, last column
    // alternates so both players place exactly 21 pieces.
    let r = Some(Player::Red);
    let y = Some(Player::Yellow);
    let stacks: [[Option<Player>; ROWS]; COLS] = [
        [r, r, y, y, r, r],
        [y, y, r, r, y, y],
        [r, r, y, y, r, r],
        [y, y, r, r, y, y],
        [r, r, y, y, r, r],
        [y, y, r, r, y, y],
        [r, y, r, y, r, y],
    ];

    let mut pos = Position::new();
    pos.board = stacks;
    pos.heights = [6, 6, 6, 6, 6, 6, 6];
    // Leave the top of the last column for the final move.
    pos.board[6][5] = None;
    pos.heights[6] = 5;
    pos.side_to_move = Player::Yellow;

    pos.make(6).unwrap();
    assert_eq!(pos.status(), Status::Draw);
    assert!(pos.legal_moves().is_empty());
}

#[test]
fn test_make_unmake_roundtrip() {
    let mut pos = Position::new();
    pos.make(3).unwrap();
    pos.make(3).unwrap();
    pos.make(4).unwrap();

    let before = pos.clone();
    pos.make(2).unwrap();
    pos.unmake(2);
    assert_eq!(pos, before);
}

#[test]
fn test_unmake_reverses_winning_move() {
    let mut pos = Position::new();
    for _ in 0..3 {
        pos.make(0).unwrap();
        pos.make(1).unwrap();
    }

    let before = pos.clone();
    pos.make(0).unwrap(); // Red wins
    assert_eq!(pos.status(), Status::Won(Player::Red));

    pos.unmake(0);
    assert_eq!(pos, before);
    assert_eq!(pos.side_to_move(), Player::Red);
}

#[test]
fn test_clone_independence() {
    let mut pos = Position::new();
    pos.make(3).unwrap();

    let mut copy = pos.clone();
    copy.make(3).unwrap();
    copy.make(0).unwrap();

    assert_eq!(pos.height(3), 1);
    assert_eq!(pos.height(0), 0);
    assert_eq!(copy.height(3), 2);
}

#[test]
fn test_display() {
    let mut pos = Position::new();
    pos.make(0).unwrap();
    pos.make(1).unwrap();

    let rendered = pos.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), ROWS);
    // Top rows are empty, bottom row holds both pieces.
    assert_eq!(lines[0], ". . . . . . .");
    assert_eq!(lines[ROWS - 1], "R Y . . . . .");
}

#[test]
fn test_random_playout_invariants() {
    for seed in 0..20 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut pos = Position::new();
        let mut per_column = [0usize; COLS];
        let mut move_count = 0;

        while !pos.status().is_over() {
            let legal = pos.legal_moves();
            assert!(
                !legal.is_empty(),
                "ongoing game must have legal moves (seed={}, moves={})",
                seed,
                move_count
            );

            let col = legal[rng.gen_range(0..legal.len())];
            let mover = pos.side_to_move();
            pos.make(col).unwrap();
            per_column[col] += 1;
            move_count += 1;

            assert_eq!(pos.height(col), per_column[col], "seed={}", seed);
            assert!(pos.height(col) <= ROWS, "seed={}", seed);

            if let Status::Won(winner) = pos.status() {
                assert_eq!(winner, mover, "only the mover can win (seed={})", seed);
            }
        }

        assert!(move_count <= COLS * ROWS, "seed={}", seed);
        assert!(pos.legal_moves().is_empty(), "seed={}", seed);
    }
}
