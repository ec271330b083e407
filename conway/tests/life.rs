use conway::rules::{live_neighbors, next_generation};
use conway::{Grid, LifeError, Pattern, Simulator};
use proptest::prelude::*;

fn bits(rows: &[[u8; 6]]) -> Vec<Vec<u8>> {
    rows.iter().map(|row| row.to_vec()).collect()
}

#[test]
fn reset_after_place_is_all_dead() {
    let sim = Simulator::new(6, 6, true).unwrap();
    sim.place("glider", 2, 2).unwrap();
    sim.reset();
    assert_eq!(sim.grid().to_bits(), vec![vec![0u8; 6]; 6]);
}

#[test]
fn place_glider_then_blinker() {
    let sim = Simulator::new(6, 6, true).unwrap();
    sim.place("glider", 2, 2).unwrap();
    assert_eq!(
        sim.grid().to_bits(),
        bits(&[
            [0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0],
            [0, 0, 0, 1, 0, 0],
            [0, 0, 0, 0, 1, 0],
            [0, 0, 1, 1, 1, 0],
            [0, 0, 0, 0, 0, 0],
        ])
    );

    sim.place("blinker", 1, 3).unwrap();
    assert_eq!(
        sim.grid().to_bits(),
        bits(&[
            [0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0],
            [0, 0, 0, 1, 0, 0],
            [0, 1, 1, 1, 1, 0],
            [0, 0, 1, 1, 1, 0],
            [0, 0, 0, 0, 0, 0],
        ])
    );
}

#[test]
fn blinker_has_period_two() {
    for wrap in [false, true] {
        let sim = Simulator::new(6, 6, wrap).unwrap();
        sim.place("blinker", 2, 2).unwrap();
        let start = sim.grid().to_bits();

        sim.step();
        assert_eq!(
            sim.grid().to_bits(),
            bits(&[
                [0, 0, 0, 0, 0, 0],
                [0, 0, 0, 1, 0, 0],
                [0, 0, 0, 1, 0, 0],
                [0, 0, 0, 1, 0, 0],
                [0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0, 0],
            ]),
            "wrap = {wrap}"
        );

        sim.step();
        assert_eq!(sim.grid().to_bits(), start, "wrap = {wrap}");
        assert_eq!(
            start,
            bits(&[
                [0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0, 0],
                [0, 0, 1, 1, 1, 0],
                [0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0, 0],
            ])
        );
    }
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_steps() {
    for wrap in [false, true] {
        let sim = Simulator::new(6, 6, wrap).unwrap();
        sim.place("glider", 1, 1).unwrap();

        for _ in 0..3 {
            sim.step();
        }
        assert_eq!(
            sim.grid().to_bits(),
            bits(&[
                [0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0, 0],
                [0, 0, 1, 0, 0, 0],
                [0, 0, 0, 1, 1, 0],
                [0, 0, 1, 1, 0, 0],
                [0, 0, 0, 0, 0, 0],
            ]),
            "wrap = {wrap}"
        );

        sim.step();
        assert_eq!(
            sim.grid().to_bits(),
            bits(&[
                [0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0, 0],
                [0, 0, 0, 1, 0, 0],
                [0, 0, 0, 0, 1, 0],
                [0, 0, 1, 1, 1, 0],
                [0, 0, 0, 0, 0, 0],
            ]),
            "wrap = {wrap}"
        );
        assert_eq!(sim.generation(), 4);
    }
}

#[test]
fn blinker_across_the_top_edge_matches_an_interior_one() {
    // Vertical blinker occupying rows 5, 0 and 1 of column 2
    let mut straddling = Grid::new(6, 6, true).unwrap();
    for row in [5, 0, 1] {
        straddling.set(row, 2, true).unwrap();
    }
    // The same shape three rows lower, clear of every edge
    let mut interior = Grid::new(6, 6, false).unwrap();
    for row in [2, 3, 4] {
        interior.set(row, 2, true).unwrap();
    }

    for row in 0..6 {
        for col in 0..6 {
            assert_eq!(
                live_neighbors(&straddling, row, col),
                live_neighbors(&interior, (row + 3) % 6, col),
                "cell ({row}, {col})"
            );
        }
    }
    assert_eq!(live_neighbors(&straddling, 0, 2), 2);

    let wrapped = next_generation(&straddling);
    let shifted = next_generation(&interior);
    for row in 0..6 {
        assert_eq!(wrapped[row], shifted[(row + 3) % 6], "row {row}");
    }
    assert_eq!(wrapped[0], vec![false, true, true, true, false, false]);
}

#[test]
fn without_wrap_the_split_blinker_dies() {
    let mut grid = Grid::new(6, 6, false).unwrap();
    for row in [5, 0, 1] {
        grid.set(row, 2, true).unwrap();
    }
    let next = next_generation(&grid);
    assert!(next.iter().flatten().all(|&alive| !alive));
}

#[test]
fn placement_is_checked_even_when_wrapping() {
    let sim = Simulator::new(10, 10, true).unwrap();
    assert!(matches!(
        sim.place("glider", 8, 0),
        Err(LifeError::OutOfBounds { .. })
    ));
    assert!(matches!(
        sim.place("gosper", 0, 0),
        Err(LifeError::OutOfBounds { .. })
    ));
    assert_eq!(sim.population(), 0);
}

#[test]
fn gosper_gun_fits_the_default_board_and_keeps_firing() {
    let sim = Simulator::from_config(conway::LifeConfig::default()).unwrap();
    sim.place("gosper-glider-gun", 1, 1).unwrap();
    assert_eq!(sim.population(), 36);

    for _ in 0..30 {
        sim.step();
    }
    // One period later the gun is back and a glider is on its way
    assert_eq!(sim.population(), 36 + 5);
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..12, 1usize..12, any::<bool>()).prop_flat_map(|(width, height, wrap)| {
        prop::collection::vec(any::<bool>(), width * height).prop_map(move |cells| {
            let mut grid = Grid::new(width, height, wrap).unwrap();
            for (i, alive) in cells.into_iter().enumerate() {
                grid.set(i / width, i % width, alive).unwrap();
            }
            grid
        })
    })
}

fn arb_placement() -> impl Strategy<Value = (Vec<Vec<u8>>, usize, usize, usize, usize)> {
    (1usize..6, 1usize..6).prop_flat_map(|(pw, ph)| {
        (
            prop::collection::vec(prop::collection::vec(0u8..=1, pw), ph),
            pw..pw + 10,
            ph..ph + 10,
        )
            .prop_flat_map(move |(rows, width, height)| {
                (
                    Just(rows),
                    Just(width),
                    Just(height),
                    0..=width - pw,
                    0..=height - ph,
                )
            })
    })
}

proptest! {
    #[test]
    fn fresh_grid_is_dead(width in 1usize..64, height in 1usize..64, wrap in any::<bool>()) {
        let grid = Grid::new(width, height, wrap).unwrap();
        prop_assert_eq!(grid.population(), 0);
        prop_assert_eq!(grid.matrix().len(), height);
        prop_assert!(grid.matrix().iter().all(|row| row.len() == width));
    }

    #[test]
    fn placed_pattern_reads_back((rows, width, height, x, y) in arb_placement(), wrap in any::<bool>()) {
        let refs: Vec<&[u8]> = rows.iter().map(Vec::as_slice).collect();
        let pattern = Pattern::from_bits("random", &refs).unwrap();
        let mut grid = Grid::new(width, height, wrap).unwrap();
        grid.place(&pattern, x, y).unwrap();

        let bits = grid.to_bits();
        for (dy, row) in rows.iter().enumerate() {
            prop_assert_eq!(&bits[y + dy][x..x + row.len()], row.as_slice());
        }
    }

    #[test]
    fn step_is_a_pure_function_of_the_cells(grid in arb_grid()) {
        let first = next_generation(&grid);
        let second = next_generation(&grid);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), grid.height());
        prop_assert!(first.iter().all(|row| row.len() == grid.width()));
    }

    #[test]
    fn empty_three_by_three_stays_empty(steps in 0usize..25, wrap in any::<bool>()) {
        let sim = Simulator::new(3, 3, wrap).unwrap();
        for _ in 0..steps {
            prop_assert_eq!(sim.step().population, 0);
        }
        prop_assert_eq!(sim.population(), 0);
    }
}
