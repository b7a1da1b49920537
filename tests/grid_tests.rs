//! Grid tests - the cell matrix through the public API

use colorbleed::core::Grid;

#[test]
fn test_grid_new_uncolored() {
    let grid = Grid::new(8);
    assert_eq!(grid.size(), 8);
    assert_eq!(grid.cell_count(), 64);
    assert_eq!(grid.colored_count(), 0);

    for row in 0..8 {
        for col in 0..8 {
            assert_eq!(grid.get(row, col), None, "cell ({row}, {col})");
        }
    }
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(6);

    grid.set(1, 4, Some(0));
    assert_eq!(grid.get(1, 4), Some(0));
    assert_eq!(grid.colored_count(), 1);

    grid.set(5, 0, Some(2));
    assert_eq!(grid.get(5, 0), Some(2));
    assert_eq!(grid.colored_count(), 2);

    grid.set(1, 4, None);
    assert_eq!(grid.get(1, 4), None);
    assert_eq!(grid.colored_count(), 1);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_grid_out_of_range_fails_fast() {
    let grid = Grid::new(6);
    let _ = grid.get(0, 6);
}

#[test]
fn test_grid_from_encoded_rows() {
    let rows = vec![
        vec![0, 0, 1, 0],
        vec![0, 2, 0, 0],
        vec![0, 0, 0, 0],
        vec![3, 0, 0, 0],
    ];
    let grid = Grid::from_encoded(&rows);

    assert_eq!(grid.size(), 4);
    assert_eq!(grid.colored_count(), 3);
    assert_eq!(grid.get(0, 2), Some(0));
    assert_eq!(grid.get(1, 1), Some(1));
    assert_eq!(grid.get(3, 0), Some(2));
}

#[test]
fn test_grid_reset_restores_initial_state() {
    let rows = vec![vec![0; 5]; 5];
    let mut grid = Grid::from_encoded(&rows);

    grid.set(2, 2, Some(0));
    grid.set(4, 4, Some(1));
    assert_eq!(grid.colored_count(), 2);

    grid.reset_from_encoded(&rows);
    assert_eq!(grid.colored_count(), 0);
}

#[test]
fn test_grid_write_codes_encoding() {
    let mut grid = Grid::new(3);
    grid.set(1, 1, Some(0));
    grid.set(2, 0, Some(3));

    let mut codes = Vec::new();
    grid.write_codes(&mut codes);

    assert_eq!(codes, vec![0, 0, 0, 0, 1, 0, 4, 0, 0]);
}
