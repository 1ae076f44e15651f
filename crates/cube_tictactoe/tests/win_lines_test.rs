//! Every winning line, completed through the engine by either slot.

use cube_tictactoe::{
    Board, Cell, Coord, GameState, LINE_COUNT, Line, MatchEngine, MoveError, MoveRequest, Phase,
    Slot, check_winner, winning_lines,
};

fn request(slot: Slot, coord: Coord) -> MoveRequest {
    MoveRequest::new(
        i64::from(slot.id()),
        coord.z() as i64,
        coord.y() as i64,
        coord.x() as i64,
    )
}

/// First empty cell off `line` that does not hand `slot` a win.
fn filler(state: &GameState, line: &Line, slot: Slot) -> Coord {
    Coord::all()
        .find(|coord| {
            if line.contains(coord) || !state.board().is_empty(*coord) {
                return false;
            }
            let mut board = state.board().clone();
            board.set(*coord, Cell::Occupied(slot));
            check_winner(&board).is_none()
        })
        .expect("cube has spare cells")
}

fn complete_line(line: &Line, winner: Slot) -> GameState {
    let mut state = GameState::new();
    let mut remaining = line.iter().copied();

    loop {
        let turn = state.current_player();
        let coord = if turn == winner {
            remaining.next().expect("line completes within four moves")
        } else {
            filler(&state, line, turn)
        };
        let snapshot = MatchEngine::submit_move(&mut state, request(turn, coord))
            .expect("move is legal");
        if snapshot.winner.is_some() {
            return state;
        }
    }
}

#[test]
fn test_every_line_wins_for_either_slot() {
    let lines = winning_lines();
    assert_eq!(lines.len(), LINE_COUNT);

    for line in &lines {
        for winner in [Slot::First, Slot::Second] {
            let state = complete_line(line, winner);
            assert_eq!(state.phase(), Phase::Finished(winner), "line {:?}", line);
            assert_eq!(state.winner(), Some(winner));
            let last = state.last_move().expect("winning move recorded");
            assert_eq!(last.player, winner);
            assert!(line.iter().any(|c| (c.z(), c.y(), c.x()) == (last.z, last.y, last.x)));
        }
    }
}

#[test]
fn test_every_line_detected_on_bare_board() {
    for line in winning_lines() {
        for slot in [Slot::First, Slot::Second] {
            let mut board = Board::new();
            for coord in line {
                board.set(coord, Cell::Occupied(slot));
            }
            assert_eq!(check_winner(&board), Some(slot));
        }
    }
}

#[test]
fn test_three_of_four_never_wins() {
    for line in winning_lines() {
        let mut board = Board::new();
        for coord in &line[..3] {
            board.set(*coord, Cell::Occupied(Slot::First));
        }
        assert_eq!(check_winner(&board), None);
    }
}

#[test]
fn test_no_moves_after_a_line_completes() {
    let line = winning_lines()[0];
    let mut state = complete_line(&line, Slot::Second);
    let before = state.clone();

    for slot in [Slot::First, Slot::Second] {
        let free = Coord::all()
            .find(|c| state.board().is_empty(*c))
            .expect("board not full");
        assert_eq!(
            MatchEngine::submit_move(&mut state, request(slot, free)),
            Err(MoveError::GameFinished)
        );
    }
    assert_eq!(state, before);
}
