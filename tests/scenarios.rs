use std::time::{Duration, Instant};

use conway_machine::domain::{
    Age, EngineError, Field, Fill, Grid, InitPolicy, MirrorMode, RuleConfig, RuleEngine,
    RuleKind, Strategy, mirror, presets,
};
use conway_machine::{RunState, Session};
use rand::{SeedableRng, rngs::StdRng};

fn life_grid(field: &Field) -> &Grid<Age> {
    match field {
        Field::Life(grid) => grid,
        Field::Blur(_) => panic!("expected a life field"),
    }
}

fn ages(field: &Field) -> Vec<u32> {
    let grid = life_grid(field);
    let (width, height) = grid.dimensions();
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| grid.get(x, y).unwrap().0)
        .collect()
}

#[test]
fn blinker_oscillates_and_ages_its_center() {
    let now = Instant::now();
    let mut session = Session::new(3, 3, RuleConfig::default(), Fill::Dead, now).unwrap();
    session.pause();
    for y in 0..3 {
        session.press(1, y).unwrap();
        session.release();
    }
    assert_eq!(ages(session.field()), vec![0, 1, 0, 0, 1, 0, 0, 1, 0]);

    assert!(session.step_once(now));
    assert_eq!(ages(session.field()), vec![0, 0, 0, 1, 2, 1, 0, 0, 0]);

    assert!(session.step_once(now));
    assert_eq!(ages(session.field()), vec![0, 1, 0, 0, 3, 0, 0, 1, 0]);

    // Capped at max_generations = 3
    assert!(session.step_once(now));
    assert_eq!(ages(session.field()), vec![0, 0, 0, 1, 3, 1, 0, 0, 0]);
    assert_eq!(session.generation(), 3);
}

#[test]
fn resize_keeps_overlap_and_drops_the_rest() {
    let now = Instant::now();
    let mut session = Session::new(10, 8, RuleConfig::default(), Fill::Dead, now).unwrap();
    session.press(2, 3).unwrap();

    session.resize(15, 7).unwrap();
    assert_eq!(session.field().dimensions(), (15, 7));
    assert!(session.field().is_live_at(2, 3).unwrap());
    assert_eq!(session.field().population(), 1);

    session.resize(15, 3).unwrap();
    assert_eq!(session.field().population(), 0);
    assert!(matches!(
        session.field().is_live_at(2, 3),
        Err(EngineError::OutOfBounds { .. })
    ));

    // Growing back does not resurrect the dropped row
    session.resize(15, 7).unwrap();
    assert!(!session.field().is_live_at(2, 3).unwrap());
}

#[test]
fn respawn_on_resize_refills_instead_of_migrating() {
    let now = Instant::now();
    let mut session = Session::new(6, 6, RuleConfig::default(), Fill::Dead, now).unwrap();
    session.respawn_on_resize = true;
    session.press(1, 1).unwrap();

    session.resize(8, 8).unwrap();
    assert_eq!(session.field().dimensions(), (8, 8));
    assert_eq!(session.field().population(), 0);
}

#[test]
fn mirror_is_idempotent_for_every_mode() {
    for mode in MirrorMode::all() {
        for (width, height) in [(1, 1), (4, 5), (7, 6), (10, 10)] {
            for y in 0..height {
                for x in 0..width {
                    let once = mirror(x, y, width, height, mode);
                    assert!(once.0 < width && once.1 < height);
                    assert_eq!(mirror(once.0, once.1, width, height, mode), once);
                }
            }
        }
    }
}

#[test]
fn mirrored_press_shows_in_both_halves() {
    let now = Instant::now();
    let config = RuleConfig::default().with_mirror_mode(MirrorMode::Horizontal);
    let mut session = Session::new(10, 4, config, Fill::Dead, now).unwrap();

    session.press(8, 1).unwrap();
    assert!(session.field().is_live_at(2, 1).unwrap());
    assert_eq!(session.stored_cell(8, 1), session.stored_cell(2, 1));
    assert_eq!(session.shade_at_display(8, 1).unwrap(), session.shade_at_display(2, 1).unwrap());
}

#[test]
fn cadence_follows_the_step_interval() {
    let start = Instant::now();
    let config = RuleConfig::default().with_step_interval_ms(10);
    let mut session = Session::new(8, 8, config, Fill::Dead, start).unwrap();
    assert_eq!(session.lifecycle().state(), RunState::Running);

    assert!(!session.tick(start));
    assert!(session.tick(start + Duration::from_millis(10)));
    assert!(!session.tick(start + Duration::from_millis(15)));
    assert!(session.tick(start + Duration::from_millis(25)));
    assert_eq!(session.generation(), 2);

    session.pause();
    assert!(!session.tick(start + Duration::from_millis(100)));
    assert!(session.step_once(start + Duration::from_millis(101)));
    assert!(!session.is_running());
    assert_eq!(session.generation(), 3);

    session.resume();
    assert!(!session.step_once(start + Duration::from_millis(102)));
}

#[test]
fn uniform_blur_is_a_fixed_point() {
    let config = RuleConfig::default().with_rule_kind(RuleKind::BoxBlur);
    let mut field = Field::new(RuleKind::BoxBlur, 9, 7, Fill::Neutral).unwrap();

    for strategy in Strategy::all() {
        RuleEngine::new(strategy).step(&mut field, &config).unwrap();
    }
    let Field::Blur(grid) = &field else {
        panic!("expected a blur field");
    };
    assert!(grid.iter_cells().all(|(_, _, level)| level.value() == 0.5));
}

#[test]
fn parallel_and_serial_agree_on_random_life() {
    let mut rng = StdRng::seed_from_u64(42);
    let grid = Grid::new_with_rng(160, 120, InitPolicy::UniformRandom, &mut rng).unwrap();
    let config = RuleConfig::default().with_max_generations(5);
    let mut serial = Field::Life(grid.clone());
    let mut parallel = Field::Life(grid);

    for _ in 0..8 {
        RuleEngine::new(Strategy::Serial).step(&mut serial, &config).unwrap();
        RuleEngine::new(Strategy::Parallel).step(&mut parallel, &config).unwrap();
    }
    assert_eq!(ages(&serial), ages(&parallel));
}

#[test]
fn stamping_glider_then_switching_rules() {
    let now = Instant::now();
    let mut session = Session::new(20, 20, RuleConfig::default(), Fill::Dead, now).unwrap();
    session.stamp(&presets::glider(), 10, 10).unwrap();
    assert_eq!(session.field().population(), 5);

    // Near the far corner the stamp shifts inward instead of failing
    session.stamp(&presets::glider(), 19, 19).unwrap();
    assert_eq!(session.field().population(), 10);
    assert!(session.field().is_live_at(19, 19).unwrap());

    // A pattern larger than the field writes nothing
    let mut tiny = Session::new(2, 2, RuleConfig::default(), Fill::Dead, now).unwrap();
    assert!(matches!(
        tiny.stamp(&presets::glider(), 1, 1),
        Err(EngineError::OutOfBounds { .. })
    ));
    assert_eq!(tiny.field().population(), 0);

    session.set_rule_kind(RuleKind::BoxBlur).unwrap();
    assert_eq!(session.field().kind(), RuleKind::BoxBlur);
    assert_eq!(session.field().dimensions(), (20, 20));
    assert_eq!(session.generation(), 0);
}
