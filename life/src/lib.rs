mod grid;


use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use rand::Rng;

pub use crate::grid::{Cell, Grid};

/// The Life engine: a toroidal grid plus a parallel buffer of the live
/// neighbour counts for the generation being left behind.
///
/// Owns its [`Grid`] rather than extending it, so raw storage stays
/// independently testable and nothing outside the engine can move the
/// world mid-step.
#[derive(Clone, Debug)]
pub struct Life {
    grid: Grid,
    live_neighbours: Vec<u8>,
}

impl Life {
    /// An engine over an all-dead `width` x `height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Grid::new(width, height).into()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.grid.is_alive(x, y)
    }

    /// Randomize every cell, alive or dead with equal probability.
    ///
    /// The generator is supplied by the caller: the driver hands in an
    /// OS-entropy one, tests hand in a fixed-seed `StdRng`.
    pub fn seed<R: Rng>(&mut self, rng: &mut R) {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let cell = if rng.gen_bool(0.5) {
                    Cell::Alive
                } else {
                    Cell::Dead
                };
                self.grid.set(x, y, cell);
            }
        }
    }

    /// Advance the grid by exactly one generation.
    pub fn step(&mut self) {
        self.count_live_neighbours();
        self.apply_rules();
    }

    // Count pass: fill `live_neighbours` from the current generation.
    // Every cell uses the same eight wrapped offsets; edges and corners
    // differ only in the addresses those offsets resolve to. On a
    // degenerate axis (length <= 2) several offsets can resolve to the
    // same cell, which then counts once per offset.
    fn count_live_neighbours(&mut self) {
        let (w, h) = (self.grid.width(), self.grid.height());
        for y in 0..h {
            for x in 0..w {
                let count = neighbours(x, y, w, h)
                    .filter(|&(nx, ny)| self.grid.is_alive(nx, ny))
                    .count();
                self.live_neighbours[y * w + x] = count as u8;
            }
        }
    }

    // Rules pass: every cell's next state comes from the count snapshot
    // and its own pre-update state, never from a neighbour already
    // rewritten this generation.
    fn apply_rules(&mut self) {
        let (w, h) = (self.grid.width(), self.grid.height());
        for y in 0..h {
            for x in 0..w {
                let count = self.live_neighbours[y * w + x];
                let alive = self.grid.is_alive(x, y);
                let next = if let (2 | 3, true) | (3, false) = (count, alive) {
                    Cell::Alive
                } else {
                    Cell::Dead
                };
                self.grid.set(x, y, next);
            }
        }
    }
}

/// The eight toroidal neighbour addresses of `(x, y)` on a `w` x `h` grid.
fn neighbours(x: usize, y: usize, w: usize, h: usize) -> impl Iterator<Item = (usize, usize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
        .map(move |(dy, dx)| {
            (
                (x as isize + dx).rem_euclid(w as isize) as usize,
                (y as isize + dy).rem_euclid(h as isize) as usize,
            )
        })
}

impl From<Grid> for Life {
    fn from(grid: Grid) -> Self {
        let live_neighbours = vec![0; grid.width() * grid.height()];
        Self {
            grid,
            live_neighbours,
        }
    }
}

impl FromStr for Life {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::from_str(s).map(Self::from)
    }
}

impl Display for Life {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.grid.fmt(f)
    }
}
