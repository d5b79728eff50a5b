//! Dense tile storage addressed by integer grid coordinates.

use std::ops::Range;

use bevy::math::{IVec2, Rect, UVec2, Vec2};

/// Gameplay attributes of one occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub solid: bool,
    pub level_goal: bool,
    pub death_block: bool,
    /// Index into the level palette used when rendering.
    pub palette: u8,
}

/// Axis-aligned grid of optional tiles covering `[origin, origin + size)`.
///
/// Cells are stored row-major starting at the bottom-left corner. The origin
/// is fixed at construction; the grid never grows.
#[derive(Debug, Clone, Default)]
pub struct TileGrid {
    origin: IVec2,
    size: UVec2,
    cells: Vec<Option<Tile>>,
}

impl TileGrid {
    /// Build a grid spanning the bounding box of every authored position.
    /// A position given twice keeps the last tile.
    pub fn from_tiles<I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = (IVec2, Tile)>,
    {
        let tiles: Vec<(IVec2, Tile)> = tiles.into_iter().collect();
        let Some((first, _)) = tiles.first() else {
            return Self::default();
        };

        let (min, max) = tiles
            .iter()
            .fold((*first, *first), |(min, max), (pos, _)| {
                (min.min(*pos), max.max(*pos))
            });

        let size = UVec2::new(
            (i64::from(max.x) - i64::from(min.x) + 1) as u32,
            (i64::from(max.y) - i64::from(min.y) + 1) as u32,
        );
        let mut grid = Self {
            origin: min,
            size,
            cells: vec![None; size.x as usize * size.y as usize],
        };
        for (pos, tile) in tiles {
            if let Some(index) = grid.index(pos.x, pos.y) {
                grid.cells[index] = Some(tile);
            }
        }
        grid
    }

    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// World-space rectangle covered by the grid.
    pub fn bounds(&self) -> Rect {
        let min = self.origin.as_vec2();
        Rect::from_corners(min, min + self.size.as_vec2())
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let dx = i64::from(x) - i64::from(self.origin.x);
        let dy = i64::from(y) - i64::from(self.origin.y);
        if dx < 0 || dy < 0 || dx >= i64::from(self.size.x) || dy >= i64::from(self.size.y) {
            return None;
        }
        Some(dy as usize * self.size.x as usize + dx as usize)
    }

    /// Tile at integer grid coordinates, `None` when empty or out of range.
    pub fn cell(&self, x: i32, y: i32) -> Option<&Tile> {
        self.index(x, y).and_then(|i| self.cells[i].as_ref())
    }

    /// Tile containing the world point `(x, y)`.
    pub fn at(&self, x: f32, y: f32) -> Option<&Tile> {
        let (Some(cx), Some(cy)) = (floor_to_i32(x), floor_to_i32(y)) else {
            return None;
        };
        self.cell(cx, cy)
    }

    pub fn at_point(&self, point: Vec2) -> Option<&Tile> {
        self.at(point.x, point.y)
    }

    /// Occupied cells with their grid coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, &Tile)> + '_ {
        let width = self.size.x.max(1) as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref().map(|tile| {
                let local = IVec2::new((i % width) as i32, (i / width) as i32);
                (self.origin + local, tile)
            })
        })
    }

    /// Occupied cells a rectangle touches, edges inclusive of partial overlap.
    pub fn tiles_overlapping(&self, rect: Rect) -> impl Iterator<Item = (IVec2, &Tile)> + '_ {
        let x_range = clip(cell_span(rect.min.x, rect.max.x), self.origin.x, self.size.x);
        let y_range = clip(cell_span(rect.min.y, rect.max.y), self.origin.y, self.size.y);
        y_range.flat_map(move |y| {
            x_range
                .clone()
                .filter_map(move |x| self.cell(x, y).map(|tile| (IVec2::new(x, y), tile)))
        })
    }
}

/// Cells touched by the half-open span `[min, max)`, widened to at least one
/// cell. NaN input yields nothing.
pub(crate) fn cell_span(min: f32, max: f32) -> Range<i32> {
    match (floor_to_i32(min), ceil_to_i32(max)) {
        (Some(start), Some(end)) => start..end.max(start.saturating_add(1)),
        _ => 0..0,
    }
}

fn clip(range: Range<i32>, start: i32, len: u32) -> Range<i32> {
    let end = start.saturating_add_unsigned(len);
    range.start.max(start)..range.end.min(end)
}

/// `floor` that refuses NaN; `as` saturates outside the `i32` range.
pub(crate) fn floor_to_i32(value: f32) -> Option<i32> {
    (!value.is_nan()).then(|| value.floor() as i32)
}

pub(crate) fn ceil_to_i32(value: f32) -> Option<i32> {
    (!value.is_nan()).then(|| value.ceil() as i32)
}
