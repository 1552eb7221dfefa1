use std::sync::Arc;

use hunt_core::{CellFlags, FieldDimensions, MoverError, Playfield, Position};
use hunt_runtime::{Hunt, RuntimeConfig, RuntimeError, TableDangerOracle};

fn playfield(players: &[Position]) -> Playfield {
    let mut field = Playfield::new(FieldDimensions::new(8, 8)).unwrap();
    for &player in players {
        field.place_player(player).unwrap();
    }
    field
}

fn oracle(goals: &[Position]) -> Arc<TableDangerOracle> {
    let oracle = goals
        .iter()
        .fold(TableDangerOracle::new(), |oracle, &goal| {
            oracle.with_goal(goal, 2, 1)
        });
    Arc::new(oracle)
}

#[test]
fn build_requires_field_and_oracle() {
    let missing_field = Hunt::builder().oracle(oracle(&[])).build();
    assert!(matches!(
        missing_field,
        Err(RuntimeError::MissingComponent("playfield"))
    ));

    let missing_oracle = Hunt::builder().field(playfield(&[])).build();
    assert!(matches!(
        missing_oracle,
        Err(RuntimeError::MissingComponent("danger oracle"))
    ));
}

#[test]
fn build_spawns_mover_and_marks_goals() {
    let goals = [Position::new(3, 3), Position::new(5, 2)];
    let hunt = Hunt::builder()
        .field(playfield(&[Position::new(7, 7)]))
        .goals(goals)
        .oracle(oracle(&goals))
        .build()
        .unwrap();

    assert_eq!(hunt.mover().position(), Position::ORIGIN);
    assert!(hunt.field().has_mover(Position::ORIGIN));
    for goal in goals {
        assert!(hunt.field().cell(goal).unwrap().contains(CellFlags::GOAL));
    }
}

#[test]
fn out_of_bounds_goal_fails_the_build() {
    let goals = [Position::new(8, 1)];
    let result = Hunt::builder()
        .field(playfield(&[]))
        .goals(goals)
        .oracle(oracle(&goals))
        .build();

    assert!(matches!(result, Err(RuntimeError::Field(_))));
}

#[test]
fn surveyed_goals_track_the_mover() {
    let goals = [Position::new(4, 4)];
    let mut hunt = Hunt::builder()
        .field(playfield(&[Position::new(7, 7), Position::new(0, 7)]))
        .goals(goals)
        .oracle(oracle(&goals))
        .build()
        .unwrap();

    let before = hunt.surveyed_goals()[0];
    assert_eq!(before.spot_distance, 8);
    assert_eq!(before.total_player_distance, 6 + 7);

    hunt.relocate(Position::new(4, 2)).unwrap();
    let after = hunt.surveyed_goals()[0];
    assert_eq!(after.spot_distance, 2);
    assert_eq!(after.total_player_distance, 13);
}

#[test]
fn step_moves_to_the_safest_goal_and_collects_it() {
    // The goal nearer the mover is also farther from the only player.
    let near = Position::new(2, 1);
    let far = Position::new(5, 4);
    let goals = [far, near];
    let mut hunt = Hunt::builder()
        .field(playfield(&[Position::new(7, 6)]))
        .goals(goals)
        .oracle(oracle(&goals))
        .build()
        .unwrap();

    let decision = hunt.step().unwrap();

    assert_eq!(decision.goal.position, near);
    assert_eq!(hunt.mover().position(), near);
    assert!(hunt.field().has_mover(near));
    assert!(!hunt.field().has_mover(Position::ORIGIN));
    assert_eq!(hunt.goals(), &[far]);
    assert!(!hunt.field().cell(near).unwrap().contains(CellFlags::GOAL));
    assert_eq!(hunt.nonce(), 1);

    let decision = hunt.step().unwrap();
    assert_eq!(decision.goal.position, far);
    assert!(hunt.is_finished());

    assert!(matches!(hunt.pick(), Err(RuntimeError::EmptyGoalList)));
}

#[test]
fn invalid_relocation_leaves_the_session_untouched() {
    let goals = [Position::new(3, 3)];
    let mut hunt = Hunt::builder()
        .field(playfield(&[]))
        .goals(goals)
        .oracle(oracle(&goals))
        .build()
        .unwrap();
    hunt.relocate(Position::new(1, 1)).unwrap();

    let result = hunt.relocate(Position::new(-1, 8));

    assert!(matches!(
        result,
        Err(RuntimeError::Mover(MoverError::OutOfBounds { .. }))
    ));
    assert_eq!(hunt.mover().position(), Position::new(1, 1));
    assert!(hunt.field().has_mover(Position::new(1, 1)));
}

#[test]
fn same_seed_replays_the_same_hunt() {
    let goals: Vec<Position> = (1..7).map(|x| Position::new(x, 6 - x)).collect();
    let run = |seed: u64| {
        let config = RuntimeConfig {
            seed,
            ..RuntimeConfig::default()
        };
        let mut hunt = Hunt::builder()
            .config(config)
            .field(playfield(&[]))
            .goals(goals.clone())
            .oracle(oracle(&goals))
            .build()
            .unwrap();

        let mut visited = Vec::new();
        while !hunt.is_finished() {
            visited.push(hunt.step().unwrap().goal.position);
        }
        visited
    };

    let first = run(17);
    assert_eq!(first.len(), goals.len());
    assert_eq!(first, run(17));
}
