/// Initial layout: obstacle blocks from the shape mask and the dinosaur grid.

use crate::config::*;
pub use crate::config::GridLayout;
use crate::entities::{Block, Dinosaur, Tier};

/// Obstacle mask; every `x` becomes one block.
pub const OBSTACLE_SHAPE: [&str; 7] = [
    "  xxxxxxx",
    " xxxxxxxxx",
    "xxxxxxxxxxx",
    "xxxxxxxxxxx",
    "xxxxxxxxxxx",
    "xxx     xxx",
    "xx       xx",
];

/// Number of filled cells in [`OBSTACLE_SHAPE`].
pub fn blocks_per_obstacle() -> usize {
    OBSTACLE_SHAPE
        .iter()
        .map(|row| row.chars().filter(|&c| c == 'x').count())
        .sum()
}

/// `amount` offsets spread evenly across the screen width.
pub fn obstacle_offsets(screen_width: f32, amount: usize) -> Vec<f32> {
    if amount == 0 {
        return Vec::new();
    }
    let spacing = screen_width / amount as f32;
    (0..amount).map(|k| k as f32 * spacing).collect()
}

/// Append one obstacle to `blocks`, returning how many blocks it added.
/// Calling this twice for the same offset stacks a second obstacle on top.
pub fn create_obstacle(blocks: &mut Vec<Block>, x_start: f32, y_start: f32, offset_x: f32) -> usize {
    let mut created = 0;
    for (row_index, row) in OBSTACLE_SHAPE.iter().enumerate() {
        for (col_index, cell) in row.chars().enumerate() {
            if cell == 'x' {
                let x = x_start + col_index as f32 * BLOCK_SIZE + offset_x;
                let y = y_start + row_index as f32 * BLOCK_SIZE;
                blocks.push(Block::new(x, y));
                created += 1;
            }
        }
    }
    created
}

/// One obstacle per offset.  Returns the number of obstacles created.
pub fn create_multiple_obstacles(
    blocks: &mut Vec<Block>,
    offsets: &[f32],
    x_start: f32,
    y_start: f32,
) -> usize {
    for &offset_x in offsets {
        create_obstacle(blocks, x_start, y_start, offset_x);
    }
    offsets.len()
}

/// A freshly laid out grid.  `positions[i]` is the top-left of `dinosaurs[i]`.
#[derive(Clone, Debug)]
pub struct Formation {
    pub dinosaurs: Vec<Dinosaur>,
    pub positions: Vec<(f32, f32)>,
}

impl Formation {
    pub fn len(&self) -> usize {
        self.dinosaurs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dinosaurs.is_empty()
    }
}

/// Lay out `rows`×`cols` dinosaurs, row-major, tier taken from the row.
pub fn dinosaur_setup(rows: usize, cols: usize, layout: &GridLayout) -> Formation {
    let mut dinosaurs = Vec::with_capacity(rows * cols);
    let mut positions = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let tier = Tier::for_row(row);
        for col in 0..cols {
            let x = col as f32 * layout.x_distance + layout.x_offset;
            let y = row as f32 * layout.y_distance + layout.y_offset;
            dinosaurs.push(Dinosaur::new(tier, x, y));
            positions.push((x, y));
        }
    }
    Formation { dinosaurs, positions }
}
