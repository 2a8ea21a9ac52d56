//! Train movement tests
//!
//! Exercise the engine/follower protocol against the real board layout.

use std::collections::HashMap;

use train_board::simulation::{
    Cargo, CellId, FrameBuffer, RandomSource, Side, SimRng, TrackGraph, Train,
    CAR_EMPTY_BRIGHTNESS, CAR_FULL_BRIGHTNESS, INITIAL_SPEED_MAX, INITIAL_SPEED_MIN, MAX_CARS,
    MAX_SPEED, MIN_SPEED,
};

/// Always answers the same value, clamped into the requested range
struct Fixed(u16);

impl RandomSource for Fixed {
    fn random_range(&mut self, low: u16, high: u16) -> u16 {
        self.0.clamp(low, high.saturating_sub(1).max(low))
    }
}

/// Never takes a fork: the coin flip lands on 1
fn never_fork() -> Fixed {
    Fixed(u16::MAX)
}

fn board() -> TrackGraph {
    TrackGraph::board().expect("board layout should validate")
}

fn locations(train: &Train) -> Vec<u8> {
    train.cars().iter().map(|car| car.location.0).collect()
}

#[test]
fn test_init_places_single_engine() {
    let mut leds = FrameBuffer::new();
    let mut train = Train::new();
    train.init(CellId(69), Cargo(1), &mut Fixed(0), &mut leds);

    assert_eq!(train.len(), 1);
    assert_eq!(train.front(), Some(CellId(69)));
    assert_eq!(train.direction(), Side::Anode);
    assert_eq!(train.speed_counter(), 0);
    assert_eq!(train.speed(), INITIAL_SPEED_MIN);
    assert_eq!(leds.brightness(CellId(69)), CAR_FULL_BRIGHTNESS);

    let mut empty = Train::new();
    empty.init(CellId(0), Cargo::EMPTY, &mut Fixed(u16::MAX), &mut leds);
    assert_eq!(empty.speed(), INITIAL_SPEED_MAX - 1);
    assert_eq!(leds.brightness(CellId(0)), CAR_EMPTY_BRIGHTNESS);
}

#[test]
fn test_init_speed_within_range() {
    let mut leds = FrameBuffer::new();
    let mut rng = SimRng::new_with_seed(11);
    for _ in 0..200 {
        let mut train = Train::new();
        train.init(CellId(0), Cargo::EMPTY, &mut rng, &mut leds);
        assert!((INITIAL_SPEED_MIN..INITIAL_SPEED_MAX).contains(&train.speed()));
    }
}

#[test]
fn test_add_car_scenario_at_cell_69() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut train = Train::new();
    train.init(CellId(69), Cargo(1), &mut never_fork(), &mut leds);

    assert!(train.add_car(Cargo(0), &graph, &mut leds));
    assert!(train.add_car(Cargo(0), &graph, &mut leds));

    assert_eq!(train.len(), 3);
    assert_eq!(locations(&train), vec![69, 100, 101]);
    let cargo: Vec<u8> = train.cars().iter().map(|car| car.cargo.0).collect();
    assert_eq!(cargo, vec![1, 0, 0]);

    assert_eq!(leds.brightness(CellId(69)), CAR_FULL_BRIGHTNESS);
    assert_eq!(leds.brightness(CellId(100)), CAR_EMPTY_BRIGHTNESS);
    assert_eq!(leds.brightness(CellId(101)), CAR_EMPTY_BRIGHTNESS);
}

#[test]
fn test_add_car_stops_at_capacity() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut train = Train::new();
    train.init(CellId(0), Cargo(1), &mut never_fork(), &mut leds);

    for _ in 1..MAX_CARS {
        assert!(train.add_car(Cargo::EMPTY, &graph, &mut leds));
    }
    assert_eq!(train.len(), MAX_CARS);

    let before = train.cars().to_vec();
    let writes = leds.writes;
    assert!(!train.add_car(Cargo(1), &graph, &mut leds));
    assert_eq!(train.cars(), before.as_slice());
    assert_eq!(leds.writes, writes);
}

#[test]
fn test_add_car_needs_an_engine() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut train = Train::new();
    assert!(!train.add_car(Cargo::EMPTY, &graph, &mut leds));
    assert!(train.is_empty());
    assert_eq!(train.front(), None);
}

#[test]
#[cfg_attr(debug_assertions, should_panic)]
fn test_dead_end_keeps_train_in_place() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut train = Train::new();
    // Off the board, so there is no neighbor on either side
    train.init(CellId(200), Cargo(1), &mut never_fork(), &mut leds);
    train.set_speed(60);

    assert!(!train.advance(&graph, &mut never_fork(), &mut leds));
    assert_eq!(train.speed_counter(), 60);

    let writes = leds.writes;
    assert!(!train.advance(&graph, &mut never_fork(), &mut leds));
    assert_eq!(train.front(), Some(CellId(200)));
    assert_eq!(train.speed_counter(), 120);
    assert_eq!(leds.writes, writes);
}

#[test]
fn test_chain_is_contiguous_after_coupling() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut train = Train::new();
    train.init(CellId(0), Cargo(1), &mut never_fork(), &mut leds);
    while train.add_car(Cargo::EMPTY, &graph, &mut leds) {}

    let cars = train.cars();
    for pair in cars.windows(2) {
        let cell = graph.cell(pair[0].location).unwrap();
        assert!(cell.links().any(|link| link == pair[1].location));
    }
    let mut seen: Vec<u8> = locations(&train);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), MAX_CARS);
}

#[test]
fn test_advance_waits_for_accumulator() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut rng = never_fork();
    let mut train = Train::new();
    train.init(CellId(69), Cargo(1), &mut rng, &mut leds);
    train.set_speed(30);

    assert!(!train.advance(&graph, &mut rng, &mut leds));
    assert!(!train.advance(&graph, &mut rng, &mut leds));
    assert!(!train.advance(&graph, &mut rng, &mut leds));
    assert_eq!(train.front(), Some(CellId(69)));

    assert!(train.advance(&graph, &mut rng, &mut leds));
    assert_eq!(train.speed_counter(), 20);
    assert_eq!(train.front(), Some(CellId(103)));
}

#[test]
fn test_advance_rederives_direction() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut rng = never_fork();
    let mut train = Train::new();
    train.init(CellId(69), Cargo(1), &mut rng, &mut leds);
    train.set_speed(MAX_SPEED);

    assert!(train.advance(&graph, &mut rng, &mut leds));
    // 103 lists 69 on its anode side, so the train leaves through the cathode
    assert_eq!(train.front(), Some(CellId(103)));
    assert_eq!(train.direction(), Side::Cathode);

    assert!(train.advance(&graph, &mut rng, &mut leds));
    assert_eq!(train.front(), Some(CellId(116)));
}

#[test]
fn test_advance_moves_leds() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut rng = never_fork();
    let mut train = Train::new();
    train.init(CellId(69), Cargo(1), &mut rng, &mut leds);
    train.add_car(Cargo::EMPTY, &graph, &mut leds);
    train.set_speed(MAX_SPEED);

    assert!(train.advance(&graph, &mut rng, &mut leds));
    assert_eq!(locations(&train), vec![103, 69]);
    assert_eq!(leds.brightness(CellId(100)), 0);
    assert_eq!(leds.brightness(CellId(69)), CAR_EMPTY_BRIGHTNESS);
    assert_eq!(leds.brightness(CellId(103)), CAR_FULL_BRIGHTNESS);
    assert_eq!(leds.lit_count(), 2);
}

#[test]
fn test_movement_keeps_car_count_and_follows_leader() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut rng = SimRng::new_with_seed(3);
    let mut train = Train::new();
    train.init(CellId(0), Cargo(1), &mut rng, &mut leds);
    while train.add_car(Cargo::EMPTY, &graph, &mut leds) {}

    let mut moves = 0;
    for _ in 0..2000 {
        let before = locations(&train);
        if train.advance(&graph, &mut rng, &mut leds) {
            moves += 1;
            let after = locations(&train);
            assert_eq!(after.len(), before.len());
            for i in 1..after.len() {
                assert_eq!(after[i], before[i - 1]);
            }
        } else {
            assert_eq!(locations(&train), before);
        }
        assert_eq!(train.len(), MAX_CARS);
        for car in train.cars() {
            assert_ne!(leds.brightness(car.location), 0);
        }
    }
    assert!(moves > 0);
}

#[test]
fn test_direction_depends_only_on_cell_and_origin() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut rng = SimRng::new_with_seed(5);
    let mut seen: HashMap<(CellId, CellId), Side> = HashMap::new();

    for start in [0u8, 39, 69, 143] {
        let mut train = Train::new();
        train.init(CellId(start), Cargo::EMPTY, &mut rng, &mut leds);
        train.add_car(Cargo::EMPTY, &graph, &mut leds);
        train.set_speed(MAX_SPEED);

        for _ in 0..3000 {
            let from = train.front().unwrap();
            assert!(train.advance(&graph, &mut rng, &mut leds));
            let at = train.front().unwrap();
            let direction = train.direction();
            if let Some(previous) = seen.insert((at, from), direction) {
                assert_eq!(previous, direction, "arriving at {} from {}", at, from);
            }
        }
    }
    assert!(seen.len() > 20);
}

#[test]
fn test_trains_never_enter_platforms() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut rng = SimRng::new_with_seed(9);
    let mut train = Train::new();
    train.init(CellId(143), Cargo::EMPTY, &mut rng, &mut leds);
    train.set_speed(MAX_SPEED);

    for _ in 0..5000 {
        train.advance(&graph, &mut rng, &mut leds);
        assert!(!graph.is_platform(train.front().unwrap()));
    }
}

#[test]
fn test_fork_uses_coin_flip() {
    let graph = board();
    let mut leds = FrameBuffer::new();

    let mut train = Train::new();
    train.init(CellId(39), Cargo::EMPTY, &mut Fixed(0), &mut leds);
    train.set_speed(MAX_SPEED);
    assert!(train.advance(&graph, &mut Fixed(0), &mut leds));
    assert_eq!(train.front(), Some(CellId(66)));

    train.init(CellId(39), Cargo::EMPTY, &mut never_fork(), &mut leds);
    train.set_speed(MAX_SPEED);
    assert!(train.advance(&graph, &mut never_fork(), &mut leds));
    assert_eq!(train.front(), Some(CellId(130)));
}

#[test]
fn test_fork_split_is_even() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut rng = SimRng::new_with_seed(1234);
    let mut primary = 0;
    let mut secondary = 0;

    for _ in 0..1000 {
        let mut train = Train::new();
        train.init(CellId(39), Cargo::EMPTY, &mut rng, &mut leds);
        train.set_speed(MAX_SPEED);
        assert!(train.advance(&graph, &mut rng, &mut leds));
        match train.front() {
            Some(CellId(130)) => primary += 1,
            Some(CellId(66)) => secondary += 1,
            other => panic!("unexpected destination {:?}", other),
        }
    }

    assert_eq!(primary + secondary, 1000);
    assert!((430..=570).contains(&primary), "primary taken {} times", primary);
}

#[test]
fn test_remove_car_keeps_engine() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut train = Train::new();
    train.init(CellId(69), Cargo(1), &mut never_fork(), &mut leds);
    train.add_car(Cargo::EMPTY, &graph, &mut leds);
    train.add_car(Cargo::EMPTY, &graph, &mut leds);

    assert!(train.remove_car(&mut leds));
    assert_eq!(locations(&train), vec![69, 100]);
    assert_eq!(leds.brightness(CellId(101)), 0);

    assert!(train.remove_car(&mut leds));
    assert!(!train.remove_car(&mut leds));
    assert_eq!(train.len(), 1);
}

#[test]
fn test_clear_takes_train_off_board() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut train = Train::new();
    train.init(CellId(69), Cargo(1), &mut never_fork(), &mut leds);
    train.add_car(Cargo::EMPTY, &graph, &mut leds);

    train.clear(&mut leds);
    assert!(train.is_empty());
    assert_eq!(leds.lit_count(), 0);
    assert!(!train.advance(&graph, &mut never_fork(), &mut leds));
}

#[test]
fn test_set_speed_is_clamped() {
    let mut train = Train::new();
    train.set_speed(0);
    assert_eq!(train.speed(), MIN_SPEED);
    train.set_speed(250);
    assert_eq!(train.speed(), MAX_SPEED);
    train.set_speed(42);
    assert_eq!(train.speed(), 42);
}

#[test]
fn test_at_location() {
    let graph = board();
    let mut leds = FrameBuffer::new();
    let mut train = Train::new();
    train.init(CellId(69), Cargo(1), &mut never_fork(), &mut leds);
    train.add_car(Cargo::EMPTY, &graph, &mut leds);

    assert!(train.at_location(CellId(69)));
    assert!(train.at_location(CellId(100)));
    assert!(!train.at_location(CellId(101)));
    assert_eq!(train.caboose().map(|car| car.location), Some(CellId(100)));
}
