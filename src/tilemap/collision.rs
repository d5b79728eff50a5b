//! Swept AABB resolution against the tile grid.
//!
//! A body moves by a delta per step; each axis is resolved by probing the
//! stripe of cells along the leading edge at the tentative destination and
//! snapping flush to the blocking tile. Bodies are expected to move less than
//! one tile per step on each axis.

use bevy::math::{Rect, Vec2};
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use super::grid::{Tile, TileGrid, cell_span, floor_to_i32};

/// Which occupied cells stop a moving body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum CollisionMode {
    /// Only tiles flagged solid block movement.
    #[default]
    SolidOnly,
    /// Any occupied cell blocks, regardless of its flags.
    AnyOccupied,
}

/// Order in which the two axes of a step are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum ResolutionOrder {
    /// Resolve Y, then X from the Y-resolved rectangle.
    #[default]
    VerticalFirst,
    /// Resolve first the axis that reaches its next tile boundary sooner.
    NearestBoundaryFirst,
}

impl ResolutionOrder {
    pub fn toggled(self) -> Self {
        match self {
            ResolutionOrder::VerticalFirst => ResolutionOrder::NearestBoundaryFirst,
            ResolutionOrder::NearestBoundaryFirst => ResolutionOrder::VerticalFirst,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CollisionSettings {
    pub mode: CollisionMode,
    pub order: ResolutionOrder,
    /// How far below the bottom row a body may fall before it counts as dead.
    pub kill_depth: f32,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            mode: CollisionMode::SolidOnly,
            order: ResolutionOrder::VerticalFirst,
            kill_depth: 4.0,
        }
    }
}

impl CollisionMode {
    pub fn blocks(self, tile: &Tile) -> bool {
        match self {
            CollisionMode::SolidOnly => tile.solid,
            CollisionMode::AnyOccupied => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl TileGrid {
    /// Whether the cell at `(x, y)` stops movement under `mode`.
    pub fn blocks(&self, x: i32, y: i32, mode: CollisionMode) -> bool {
        self.cell(x, y).is_some_and(|tile| mode.blocks(tile))
    }

    fn row_blocks(&self, columns: std::ops::Range<i32>, row: i32, mode: CollisionMode) -> bool {
        columns.into_iter().any(|x| self.blocks(x, row, mode))
    }

    fn column_blocks(&self, rows: std::ops::Range<i32>, column: i32, mode: CollisionMode) -> bool {
        rows.into_iter().any(|y| self.blocks(column, y, mode))
    }

    /// Resolved bottom edge after moving `rect` vertically by `dy`.
    pub fn sweep_vertical(&self, rect: Rect, dy: f32, mode: CollisionMode) -> f32 {
        let next_y = rect.min.y + dy;
        if dy == 0.0 {
            return next_y;
        }
        let height = rect.height();
        let columns = cell_span(rect.min.x, rect.max.x);

        if dy < 0.0 {
            let Some(row) = floor_to_i32(next_y) else {
                return next_y;
            };
            if self.row_blocks(columns, row, mode) {
                return next_y.ceil();
            }
        } else {
            let Some(row) = floor_to_i32(next_y + height) else {
                return next_y;
            };
            if self.row_blocks(columns, row, mode) {
                return (next_y + height).floor() - height;
            }
        }
        next_y
    }

    /// Resolved left edge after moving `rect` horizontally by `dx`.
    pub fn sweep_horizontal(&self, rect: Rect, dx: f32, mode: CollisionMode) -> f32 {
        let next_x = rect.min.x + dx;
        if dx == 0.0 {
            return next_x;
        }
        let width = rect.width();
        let rows = cell_span(rect.min.y, rect.max.y);

        if dx < 0.0 {
            let Some(column) = floor_to_i32(next_x) else {
                return next_x;
            };
            if self.column_blocks(rows, column, mode) {
                return next_x.ceil();
            }
        } else {
            let Some(column) = floor_to_i32(next_x + width) else {
                return next_x;
            };
            if self.column_blocks(rows, column, mode) {
                return (next_x + width).floor() - width;
            }
        }
        next_x
    }

    /// Correction to add to `rect.min + delta` so the body ends flush against
    /// any blocking tiles instead of inside them. Zero when nothing was hit.
    pub fn simulate_movement(&self, rect: Rect, delta: Vec2, settings: &CollisionSettings) -> Vec2 {
        let next = rect.min + delta;
        let mode = settings.mode;

        let first = match settings.order {
            ResolutionOrder::VerticalFirst => Axis::Vertical,
            ResolutionOrder::NearestBoundaryFirst => nearest_axis(rect, delta),
        };

        let resolved = match first {
            Axis::Vertical => {
                let y = self.sweep_vertical(rect, delta.y, mode);
                let moved = offset(rect, Vec2::new(0.0, y - rect.min.y));
                let x = self.sweep_horizontal(moved, delta.x, mode);
                Vec2::new(x, y)
            }
            Axis::Horizontal => {
                let x = self.sweep_horizontal(rect, delta.x, mode);
                let moved = offset(rect, Vec2::new(x - rect.min.x, 0.0));
                let y = self.sweep_vertical(moved, delta.y, mode);
                Vec2::new(x, y)
            }
        };

        resolved - next
    }
}

fn offset(rect: Rect, by: Vec2) -> Rect {
    Rect {
        min: rect.min + by,
        max: rect.max + by,
    }
}

/// Axis whose leading edge crosses a tile boundary first. Ties and
/// motionless axes favour vertical.
fn nearest_axis(rect: Rect, delta: Vec2) -> Axis {
    let time_x = time_to_boundary(rect.min.x, rect.max.x, delta.x);
    let time_y = time_to_boundary(rect.min.y, rect.max.y, delta.y);
    if time_x < time_y {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

fn time_to_boundary(min: f32, max: f32, d: f32) -> f32 {
    let distance = if d > 0.0 {
        max.ceil() - max
    } else if d < 0.0 {
        min - min.floor()
    } else {
        return f32::INFINITY;
    };
    distance / d.abs()
}
