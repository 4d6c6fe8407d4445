//! Pathfinding benchmarks.
//!
//! Covers the two regimes the planner runs in:
//! - Line-of-sight fast path (expected majority of real calls)
//! - Full A* search through a slalom of walls
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use marga_nav::{OccupancyMap, PathPlanner, Point};

/// Fully open square map.
fn open_map(size: usize) -> OccupancyMap {
    OccupancyMap::from_walkable(size, size, vec![true; size * size]).unwrap()
}

/// Map with a vertical wall every 16 columns, gaps alternating between the
/// top and bottom rows. Forces the search to zigzag across the whole map.
fn slalom_map(size: usize) -> OccupancyMap {
    let mut walkable = vec![true; size * size];
    for (i, x) in (16..size).step_by(16).enumerate() {
        let gap_y = if i % 2 == 0 { size - 1 } else { 0 };
        for y in 0..size {
            if y != gap_y {
                walkable[y * size + x] = false;
            }
        }
    }
    OccupancyMap::from_walkable(size, size, walkable).unwrap()
}

fn bench_line_of_sight_shortcut(c: &mut Criterion) {
    let map = open_map(256);
    let planner = PathPlanner::with_defaults(&map);

    c.bench_function("find_path/los_shortcut_256", |b| {
        b.iter(|| {
            planner.find_path(
                black_box(Point::new(1.0, 1.0)),
                black_box(Point::new(254.0, 254.0)),
            )
        })
    });
}

fn bench_slalom_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_path/slalom");
    for size in [64usize, 128, 256] {
        let map = slalom_map(size);
        let planner = PathPlanner::with_defaults(&map);
        let goal = Point::new(size as f32 - 2.0, size as f32 / 2.0);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| planner.find_path(black_box(Point::new(1.0, 1.0)), black_box(goal)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_line_of_sight_shortcut, bench_slalom_search);
criterion_main!(benches);
