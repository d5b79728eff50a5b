//! Tilemap domain: tests for grid queries, swept collision and level building.

use bevy::math::{IVec2, Rect, Vec2};

use super::{
    CollisionMode, CollisionSettings, LevelBuildError, LevelLayout, ResolutionOrder, Tile,
    TileGrid,
};
use crate::content::{LevelDef, TileDef};

const EPS: f32 = 1e-4;

fn solid() -> Tile {
    Tile {
        solid: true,
        ..Tile::default()
    }
}

/// Floor along y = 0 from x = 0..10 and a wall column at x = 5 for y = 1..4.
fn floor_and_wall() -> TileGrid {
    let floor = (0..10).map(|x| (IVec2::new(x, 0), solid()));
    let wall = (1..4).map(|y| (IVec2::new(5, y), solid()));
    TileGrid::from_tiles(floor.chain(wall))
}

fn body(x: f32, y: f32) -> Rect {
    Rect::new(x, y, x + 0.8, y + 0.9)
}

fn tile_def(glyph: char, solid: bool) -> TileDef {
    TileDef {
        glyph,
        name: format!("tile {}", glyph),
        solid,
        level_goal: false,
        death_block: false,
        color: [0.5, 0.5, 0.5],
    }
}

fn level(rows: &[&str], legend: Vec<TileDef>) -> LevelDef {
    LevelDef {
        id: "test".to_string(),
        name: "Test".to_string(),
        legend,
        rows: rows.iter().map(|row| row.to_string()).collect(),
    }
}

// -----------------------------------------------------------------------------
// Grid construction and query tests
// -----------------------------------------------------------------------------

#[test]
fn test_from_tiles_uses_bounding_box() {
    let grid = TileGrid::from_tiles([
        (IVec2::new(-2, 3), solid()),
        (IVec2::new(4, -1), solid()),
    ]);
    assert_eq!(grid.origin(), IVec2::new(-2, -1));
    assert_eq!(grid.size().x, 7);
    assert_eq!(grid.size().y, 5);
}

#[test]
fn test_from_tiles_empty_input() {
    let grid = TileGrid::from_tiles(std::iter::empty());
    assert!(grid.is_empty());
    assert!(grid.cell(0, 0).is_none());
    assert!(grid.at(0.5, 0.5).is_none());
    assert_eq!(grid.iter().count(), 0);
}

#[test]
fn test_from_tiles_later_duplicate_wins() {
    let goal = Tile {
        level_goal: true,
        ..Tile::default()
    };
    let grid = TileGrid::from_tiles([(IVec2::new(1, 1), solid()), (IVec2::new(1, 1), goal)]);
    assert_eq!(grid.cell(1, 1), Some(&goal));
}

#[test]
fn test_queries_outside_range_return_none() {
    let grid = TileGrid::from_tiles([(IVec2::new(2, 2), solid()), (IVec2::new(4, 3), solid())]);

    assert!(grid.cell(1, 2).is_none());
    assert!(grid.cell(5, 2).is_none());
    assert!(grid.cell(2, 1).is_none());
    assert!(grid.cell(2, 4).is_none());
    assert!(grid.cell(i32::MIN, i32::MAX).is_none());
    assert!(grid.at(f32::NAN, 2.5).is_none());
    assert!(grid.at(f32::INFINITY, 2.5).is_none());
    assert!(grid.at(-1.0e12, 2.5).is_none());
}

#[test]
fn test_at_floors_world_coordinates() {
    let grid = floor_and_wall();
    assert!(grid.at(5.99, 3.99).is_some());
    assert!(grid.at(6.0, 3.5).is_none());
    assert!(grid.at_point(Vec2::new(0.1, 0.9)).is_some());
    assert!(grid.at(-0.01, 0.5).is_none());
}

#[test]
fn test_holes_inside_range_are_empty() {
    let grid = floor_and_wall();
    assert!(grid.cell(2, 2).is_none());
    assert_eq!(grid.iter().count(), 13);
}

#[test]
fn test_tiles_overlapping_reports_partial_cells() {
    let grid = floor_and_wall();
    let touched: Vec<IVec2> = grid
        .tiles_overlapping(Rect::new(4.5, 0.5, 5.5, 1.5))
        .map(|(cell, _)| cell)
        .collect();
    assert_eq!(
        touched,
        vec![IVec2::new(4, 0), IVec2::new(5, 0), IVec2::new(5, 1)]
    );
}

#[test]
fn test_tiles_overlapping_unbounded_rect_stays_in_grid() {
    let grid = floor_and_wall();
    let rect = Rect {
        min: Vec2::splat(f32::NEG_INFINITY),
        max: Vec2::splat(f32::INFINITY),
    };
    assert_eq!(grid.tiles_overlapping(rect).count(), 13);
}

// -----------------------------------------------------------------------------
// Collision mode tests
// -----------------------------------------------------------------------------

#[test]
fn test_solid_only_ignores_decorative_tiles() {
    let grid = TileGrid::from_tiles([(IVec2::new(0, 0), Tile::default())]);
    assert!(!grid.blocks(0, 0, CollisionMode::SolidOnly));
    assert!(grid.blocks(0, 0, CollisionMode::AnyOccupied));
    assert!(!grid.blocks(1, 0, CollisionMode::AnyOccupied));
}

#[test]
fn test_any_occupied_mode_blocks_goal_tiles() {
    let goal = Tile {
        level_goal: true,
        ..Tile::default()
    };
    let grid = TileGrid::from_tiles([(IVec2::new(0, 0), goal)]);
    let settings = CollisionSettings {
        mode: CollisionMode::AnyOccupied,
        ..CollisionSettings::default()
    };

    let correction = grid.simulate_movement(body(0.1, 1.05), Vec2::new(0.0, -0.2), &settings);
    assert!((correction.y - 0.15).abs() < EPS);

    let passes = grid.simulate_movement(
        body(0.1, 1.05),
        Vec2::new(0.0, -0.2),
        &CollisionSettings::default(),
    );
    assert_eq!(passes, Vec2::ZERO);
}

// -----------------------------------------------------------------------------
// Swept resolution tests
// -----------------------------------------------------------------------------

#[test]
fn test_falling_body_lands_on_tile_top() {
    let grid = floor_and_wall();
    let rect = body(1.0, 1.1);
    let delta = Vec2::new(0.0, -0.3);

    let correction = grid.simulate_movement(rect, delta, &CollisionSettings::default());
    let resolved = rect.min + delta + correction;

    assert!(correction.y > 0.0);
    assert!((resolved.y - 1.0).abs() < EPS);
    assert_eq!(correction.x, 0.0);
}

#[test]
fn test_free_movement_has_zero_correction() {
    let grid = floor_and_wall();
    let correction = grid.simulate_movement(
        body(1.0, 2.0),
        Vec2::new(0.3, 0.2),
        &CollisionSettings::default(),
    );
    assert_eq!(correction, Vec2::ZERO);
}

#[test]
fn test_rising_body_stops_below_ceiling() {
    let grid = TileGrid::from_tiles([(IVec2::new(0, 3), solid()), (IVec2::new(1, 3), solid())]);
    let rect = body(0.5, 1.9);
    let delta = Vec2::new(0.0, 0.4);

    let correction = grid.simulate_movement(rect, delta, &CollisionSettings::default());
    let resolved = rect.min + delta + correction;

    assert!(correction.y < 0.0);
    assert!((resolved.y + 0.9 - 3.0).abs() < EPS);
}

#[test]
fn test_wall_hit_snaps_x_without_touching_y() {
    let grid = floor_and_wall();
    let rect = body(4.1, 1.0);
    let delta = Vec2::new(0.3, 0.0);

    let correction = grid.simulate_movement(rect, delta, &CollisionSettings::default());
    let resolved = rect.min + delta + correction;

    assert!(correction.x < 0.0);
    assert!((resolved.x + 0.8 - 5.0).abs() < EPS);
    assert_eq!(correction.y, 0.0);
}

#[test]
fn test_left_wall_hit_snaps_to_tile_right_edge() {
    let grid = floor_and_wall();
    let rect = body(6.1, 1.0);
    let delta = Vec2::new(-0.3, 0.0);

    let correction = grid.simulate_movement(rect, delta, &CollisionSettings::default());
    let resolved = rect.min + delta + correction;

    assert!(correction.x > 0.0);
    assert!((resolved.x - 6.0).abs() < EPS);
}

#[test]
fn test_resting_body_walks_along_floor() {
    let grid = floor_and_wall();
    let rect = body(1.0, 1.0);
    let delta = Vec2::new(0.2, -0.05);

    let correction = grid.simulate_movement(rect, delta, &CollisionSettings::default());
    let resolved = rect.min + delta + correction;

    assert!((resolved.y - 1.0).abs() < EPS);
    assert!((resolved.x - 1.2).abs() < EPS);
}

#[test]
fn test_body_flush_against_wall_is_not_pushed_back() {
    let grid = floor_and_wall();
    let rect = body(4.2, 1.0);
    let correction = grid.simulate_movement(
        rect,
        Vec2::new(0.0, -0.05),
        &CollisionSettings::default(),
    );
    assert_eq!(correction.x, 0.0);
}

#[test]
fn test_diagonal_into_corner_resolves_both_axes() {
    let grid = floor_and_wall();
    let rect = body(4.1, 1.1);
    let delta = Vec2::new(0.3, -0.3);

    let correction = grid.simulate_movement(rect, delta, &CollisionSettings::default());
    let resolved = rect.min + delta + correction;

    assert!((resolved.y - 1.0).abs() < EPS);
    assert!((resolved.x + 0.8 - 5.0).abs() < EPS);
}

#[test]
fn test_nearest_boundary_first_resolves_sooner_axis_first() {
    // A single block below and to the right. The right edge reaches its
    // boundary before the bottom edge does, so resolving X first carries the
    // body over the block and lands it on top; Y first drops it beside it.
    let grid = TileGrid::from_tiles([(IVec2::new(2, 0), solid())]);
    let rect = Rect::new(1.15, 1.3, 1.95, 2.2);
    let delta = Vec2::new(0.2, -0.5);

    let vertical = grid.simulate_movement(rect, delta, &CollisionSettings::default());
    let nearest = grid.simulate_movement(
        rect,
        delta,
        &CollisionSettings {
            order: ResolutionOrder::NearestBoundaryFirst,
            ..CollisionSettings::default()
        },
    );

    let vertical_pos = rect.min + delta + vertical;
    let nearest_pos = rect.min + delta + nearest;
    assert!((vertical_pos.y - 0.8).abs() < EPS);
    assert!((vertical_pos.x + 0.8 - 2.0).abs() < EPS);
    assert!((nearest_pos.y - 1.0).abs() < EPS);
    assert!((nearest_pos.x - 1.35).abs() < EPS);
}

#[test]
fn test_resolution_order_toggle() {
    assert_eq!(
        ResolutionOrder::VerticalFirst.toggled(),
        ResolutionOrder::NearestBoundaryFirst
    );
    assert_eq!(
        ResolutionOrder::NearestBoundaryFirst.toggled(),
        ResolutionOrder::VerticalFirst
    );
}

// -----------------------------------------------------------------------------
// Level building tests
// -----------------------------------------------------------------------------

#[test]
fn test_build_level_flips_rows_and_finds_spawn() {
    let def = level(&["#..", "#P.", "###"], vec![tile_def('#', true)]);
    let layout = LevelLayout::build(&def).unwrap();

    assert_eq!(layout.grid.origin(), IVec2::new(0, 0));
    assert_eq!(layout.grid.size().x, 3);
    assert_eq!(layout.grid.size().y, 3);
    assert!(layout.grid.cell(0, 2).is_some());
    assert!(layout.grid.cell(2, 0).is_some());
    assert!(layout.grid.cell(1, 1).is_none());
    assert_eq!(layout.spawn, Vec2::new(1.5, 1.0));
}

#[test]
fn test_build_level_keeps_tile_flags_and_palette() {
    let mut goal = tile_def('G', false);
    goal.level_goal = true;
    goal.color = [1.0, 0.0, 0.0];
    let def = level(&["P G", "###"], vec![tile_def('#', true), goal]);
    let layout = LevelLayout::build(&def).unwrap();

    let tile = layout.grid.cell(2, 1).copied().unwrap();
    assert!(tile.level_goal);
    assert!(!tile.solid);
    assert_eq!(tile.palette, 1);
    assert_eq!(layout.palette.len(), 2);
}

#[test]
fn test_build_level_rejects_unknown_glyph() {
    let def = level(&["P?", "##"], vec![tile_def('#', true)]);
    let err = LevelLayout::build(&def).unwrap_err();
    assert_eq!(
        err,
        LevelBuildError::UnknownGlyph {
            level: "test".to_string(),
            glyph: '?',
            row: 0,
            column: 1,
        }
    );
}

#[test]
fn test_build_level_requires_exactly_one_spawn() {
    let missing = level(&["..", "##"], vec![tile_def('#', true)]);
    assert!(matches!(
        LevelLayout::build(&missing),
        Err(LevelBuildError::MissingSpawn { .. })
    ));

    let twice = level(&["PP", "##"], vec![tile_def('#', true)]);
    assert!(matches!(
        LevelLayout::build(&twice),
        Err(LevelBuildError::DuplicateSpawn { .. })
    ));
}
