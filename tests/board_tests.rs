use broadside::{
    Cell, FleetHits, GameEngine, GridError, Knowledge, KnowledgeGrid, Orientation, OwnGrid,
    ShipType, ShotOutcome, Strike, FLEET,
};

#[test]
fn test_destroyer_scenario() {
    let mut engine = GameEngine::new();
    engine
        .own_grid_mut()
        .occupy(ShipType::Destroyer, 3, 4, Orientation::Horizontal)
        .unwrap();

    assert_eq!(
        engine.resolve_incoming_shot(3, 4).unwrap(),
        ShotOutcome::Hit(ShipType::Destroyer)
    );
    assert_eq!(engine.fleet().hits(ShipType::Destroyer), 1);
    assert!(!engine.fleet().is_sunk(ShipType::Destroyer));

    assert_eq!(
        engine.resolve_incoming_shot(3, 5).unwrap(),
        ShotOutcome::Sunk(ShipType::Destroyer)
    );
    assert_eq!(engine.fleet().hits(ShipType::Destroyer), 2);
    assert!(engine.fleet().is_sunk(ShipType::Destroyer));

    // repeated shot changes nothing
    assert_eq!(
        engine.resolve_incoming_shot(3, 4).unwrap(),
        ShotOutcome::AlreadyResolved(Cell::Hit(ShipType::Destroyer))
    );
    assert_eq!(engine.fleet().hits(ShipType::Destroyer), 2);
}

#[test]
fn test_water_shot_marks_miss_once() {
    let mut grid = OwnGrid::new();
    assert_eq!(grid.strike(0, 0).unwrap(), Strike::Miss);
    assert_eq!(grid.cell(0, 0).unwrap(), Cell::Miss);
    assert_eq!(grid.strike(0, 0).unwrap(), Strike::Repeat(Cell::Miss));
}

#[test]
fn test_occupy_rejects_overlap_bounds_and_duplicates() {
    let mut grid = OwnGrid::new();
    grid.occupy(ShipType::Carrier, 0, 0, Orientation::Horizontal)
        .unwrap();

    assert_eq!(
        grid.occupy(ShipType::Battleship, 0, 2, Orientation::Vertical)
            .unwrap_err(),
        GridError::ShipOverlaps(ShipType::Battleship)
    );
    assert_eq!(
        grid.occupy(ShipType::Battleship, 7, 9, Orientation::Vertical)
            .unwrap_err(),
        GridError::ShipOutOfBounds(ShipType::Battleship)
    );
    assert_eq!(
        grid.occupy(ShipType::Carrier, 5, 5, Orientation::Horizontal)
            .unwrap_err(),
        GridError::ShipAlreadyPlaced(ShipType::Carrier)
    );
    assert_eq!(
        grid.occupy(ShipType::Destroyer, 10, 0, Orientation::Horizontal)
            .unwrap_err(),
        GridError::OutOfRange { row: 10, col: 0 }
    );
    // failed attempts leave the grid untouched
    assert_eq!(grid.occupied_cells(), ShipType::Carrier.length());
    assert!(!grid.is_placed(ShipType::Battleship));
}

#[test]
fn test_out_of_range_queries_fail() {
    let mut grid = OwnGrid::new();
    assert_eq!(
        grid.cell(0, 10).unwrap_err(),
        GridError::OutOfRange { row: 0, col: 10 }
    );
    assert!(grid.strike(12, 1).is_err());

    let mut knowledge = KnowledgeGrid::new();
    assert!(knowledge.record(10, 10, Knowledge::Hit).is_err());
}

#[test]
fn test_ship_tags_are_distinct_and_total() {
    for ship in FLEET {
        assert_eq!(ShipType::from_tag(ship.tag()).unwrap(), ship);
        assert_eq!(ShipType::from_wire_name(ship.wire_name()), Some(ship));
    }
    let mut tags: Vec<char> = FLEET.iter().map(|s| s.tag()).collect();
    tags.sort_unstable();
    tags.dedup();
    assert_eq!(tags.len(), FLEET.len());
    assert!(!tags.contains(&'~'));

    assert_eq!(
        ShipType::from_tag('Z').unwrap_err(),
        GridError::UnknownShipTag('Z')
    );
    assert_eq!(ShipType::from_wire_name("cruiser"), Some(ShipType::Cruiser));
    assert_eq!(ShipType::from_wire_name("DINGHY"), None);
}

#[test]
fn test_grid_from_rows() {
    let grid = OwnGrid::from_rows([
        "CCCCC~~~~~",
        "~~~~~~~~~~",
        "B~~~~~~~~~",
        "B~~RRR~~~~",
        "B~~~~~~~~~",
        "B~~~~~SSS~",
        "~~~~~~~~~~",
        "~~~~~~~~DD",
        "~~~~~~~~~~",
        "~~~~~~~~~~",
    ])
    .unwrap();
    assert_eq!(grid.occupied_cells(), 17);
    assert!(FLEET.iter().all(|&s| grid.is_placed(s)));
    assert_eq!(
        grid.ship_cells(ShipType::Destroyer).collect::<Vec<_>>(),
        vec![(7, 8), (7, 9)]
    );

    let mut rows = ["~~~~~~~~~~"; 10];
    rows[4] = "~~~~Q~~~~~";
    assert_eq!(
        OwnGrid::from_rows(rows).unwrap_err(),
        GridError::UnknownShipTag('Q')
    );
    rows[4] = "~~~~";
    assert!(OwnGrid::from_rows(rows).is_err());
}

#[test]
fn test_fleet_destroyed_only_when_every_ship_sunk() {
    let mut fleet = FleetHits::new();
    for ship in FLEET.iter().skip(1) {
        for _ in 0..ship.length() {
            fleet.record_hit(*ship);
        }
    }
    assert!(!fleet.is_destroyed());
    for _ in 0..ShipType::Carrier.length() {
        fleet.record_hit(ShipType::Carrier);
    }
    assert!(fleet.is_destroyed());
    assert!(fleet.iter().all(|(ship, hits)| hits == ship.length()));
}

#[test]
fn test_last_sinking_reports_fleet_destroyed() {
    let grid = OwnGrid::from_rows([
        "CCCCC~~~~~",
        "BBBB~~~~~~",
        "RRR~~~~~~~",
        "SSS~~~~~~~",
        "DD~~~~~~~~",
        "~~~~~~~~~~",
        "~~~~~~~~~~",
        "~~~~~~~~~~",
        "~~~~~~~~~~",
        "~~~~~~~~~~",
    ])
    .unwrap();
    let mut engine = GameEngine::from_grid(grid, Default::default());
    let mut outcomes = Vec::new();
    for ship in FLEET {
        let cells: Vec<_> = engine.own_grid().ship_cells(ship).collect();
        for (r, c) in cells {
            outcomes.push(engine.resolve_incoming_shot(r, c).unwrap());
        }
    }
    assert_eq!(
        outcomes.last(),
        Some(&ShotOutcome::FleetDestroyed(ShipType::Destroyer))
    );
    let fleet_destroyed = outcomes.iter().filter(|o| o.is_fleet_destroyed()).count();
    assert_eq!(fleet_destroyed, 1);
    assert_eq!(engine.status(), broadside::GameStatus::Lost);
}
