use mines_core::*;

/// 4x4 board with bombs at (3, 0) and (3, 2), started from the top-left corner.
///
/// After the first open every cell in columns 0..=2 is open and only (3, 1)
/// and (3, 3) remain as closed safe cells.
fn started_session() -> Session<SequenceSource> {
    let config = GameConfig::new((4, 4), 2).unwrap();
    let mut session = Session::new(config, SequenceSource::new([3, 11])).unwrap();
    assert_eq!(session.open((0, 0)), OpenOutcome::Opened);
    session
}

fn opened_count(session: &Session<SequenceSource>) -> usize {
    session
        .snapshot()
        .iter()
        .filter(|cell| cell.is_opened())
        .count()
}

#[test]
fn first_open_floods_safe_start() {
    let session = started_session();
    let grid = session.snapshot();

    assert_eq!(session.status(), Status::Started);
    assert!(session.started_at().is_some());
    assert_eq!(session.finished_at(), None);
    assert_eq!(opened_count(&session), 12);
    assert_eq!(grid[(0, 0)].bombs_around(), 0);
    assert_eq!(grid[(2, 1)].bombs_around(), 2);
    assert!(grid[(3, 0)].has_bomb());
    assert!(grid[(3, 2)].has_bomb());
    assert!(!grid[(3, 1)].is_opened());
    assert!(!grid[(3, 3)].is_opened());
}

#[test]
fn opening_last_safe_cells_wins() {
    let mut session = started_session();

    assert_eq!(session.open((3, 1)), OpenOutcome::Opened);
    assert_eq!(session.status(), Status::Started);

    assert_eq!(session.open((3, 3)), OpenOutcome::Won);
    assert_eq!(session.status(), Status::Win);
    let (started, finished) = (session.started_at().unwrap(), session.finished_at().unwrap());
    assert!(finished >= started);
    assert_eq!(session.elapsed(), Some(finished - started));
}

#[test]
fn opening_bomb_loses_without_opening_more() {
    let mut session = started_session();

    assert_eq!(session.open((3, 0)), OpenOutcome::Lost);

    assert_eq!(session.status(), Status::Lose);
    assert_eq!(opened_count(&session), 13);
    assert!(!session.snapshot()[(3, 1)].is_opened());
    assert_eq!(session.finished_at(), None);
}

#[test]
fn finished_session_ignores_moves() {
    let mut session = started_session();
    session.open((3, 0));
    let before = session.snapshot().clone();

    assert_eq!(session.open((3, 1)), OpenOutcome::NoChange);
    assert_eq!(session.toggle_mark((3, 1)), MarkOutcome::NoChange);

    assert_eq!(session.status(), Status::Lose);
    assert_eq!(session.snapshot(), &before);
}

#[test]
fn chord_with_satisfied_marks_wins() {
    let mut session = started_session();
    session.toggle_mark((3, 0));
    session.toggle_mark((3, 2));

    assert_eq!(session.open((2, 2)), OpenOutcome::Won);

    let grid = session.snapshot();
    assert!(grid[(3, 1)].is_opened());
    assert!(grid[(3, 3)].is_opened());
    assert!(!grid[(3, 0)].is_opened());
    assert!(!grid[(3, 2)].is_opened());
}

#[test]
fn chord_with_missing_marks_does_nothing() {
    let mut session = started_session();
    session.toggle_mark((3, 0));

    assert_eq!(session.open((2, 1)), OpenOutcome::Opened);

    assert_eq!(session.status(), Status::Started);
    assert_eq!(opened_count(&session), 12);
}

#[test]
fn chord_next_to_wrong_mark_loses() {
    let mut session = started_session();
    session.toggle_mark((3, 1));

    assert_eq!(session.open((2, 1)), OpenOutcome::Lost);

    assert_eq!(session.status(), Status::Lose);
}

#[test]
fn marks_never_change_status() {
    let mut session = started_session();

    for y in 0..4 {
        assert_eq!(session.toggle_mark((3, y)), MarkOutcome::Marked);
    }

    assert_eq!(session.bombs_marked(), 4);
    assert_eq!(session.bombs_left(), -2);
    assert_eq!(session.status(), Status::Started);
}

#[test]
fn marked_cell_cannot_be_opened_until_unmarked() {
    let mut session = started_session();
    session.toggle_mark((3, 0));

    assert_eq!(session.open((3, 0)), OpenOutcome::NoChange);
    assert_eq!(session.status(), Status::Started);

    session.toggle_mark((3, 0));
    assert_eq!(session.open((3, 0)), OpenOutcome::Lost);
}

#[test]
fn random_game_keeps_start_area_clear() {
    for seed in 0..16 {
        let config = GameConfig::new((16, 16), 40).unwrap();
        let mut session = Session::new(config, RngSource::seeded(seed)).unwrap();

        let outcome = session.open((8, 8));
        assert!(matches!(outcome, OpenOutcome::Opened | OpenOutcome::Won));

        let grid = session.snapshot();
        assert_eq!(grid.iter().filter(|cell| cell.has_bomb()).count(), 40);
        assert!(!grid[(8, 8)].has_bomb());
        assert_eq!(grid[(8, 8)].bombs_around(), 0);
        assert!(grid.iter_neighbor_cells((8, 8)).all(|cell| !cell.has_bomb() && cell.is_opened()));
    }
}

#[test]
fn seeded_sessions_are_reproducible() {
    let play = |seed| {
        let config = GameConfig::new((10, 8), 12).unwrap();
        let mut session = Session::new(config, RngSource::seeded(seed)).unwrap();
        session.open((2, 3));
        session.snapshot().clone()
    };

    assert_eq!(play(99), play(99));
}

#[test]
fn thread_rng_session_starts() {
    let mut session = Session::with_thread_rng(GameConfig::new((9, 9), 10).unwrap()).unwrap();

    assert!(session.open((4, 4)).has_update());
    assert!(matches!(session.status(), Status::Started | Status::Win));
}

#[test]
fn snapshot_serializes_for_consumers() {
    let session = started_session();

    let json = serde_json::to_string(session.snapshot()).unwrap();
    let restored: Grid = serde_json::from_str(&json).unwrap();

    assert_eq!(&restored, session.snapshot());
}

#[test]
fn render_hides_bombs_while_running() {
    let session = started_session();

    let board = session.render(false);

    assert!(!board.contains('*'));
    assert!(board.contains('#'));
}
