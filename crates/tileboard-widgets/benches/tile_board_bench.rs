//! Benchmarks for scroll synchronization and input handling.
//!
//! Run with: cargo bench -p tileboard-widgets

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tileboard_core::event::{KeyCode, KeyEvent, PointerEvent};
use tileboard_widgets::{
    CategoryInfo, ScrollSynchronizer, SongInfo, SongLibrary, ThemeLayout, TileBoard,
};

fn library(count: usize) -> SongLibrary {
    let songs = (0..count)
        .map(|i| SongInfo::new(format!("Artist {i}"), format!("Title {i}")))
        .collect();
    SongLibrary::new()
        .with_category(CategoryInfo::new("All", "all.png"), songs)
        .tabs(false)
}

// ============================================================================
// Scroll window
// ============================================================================

fn bench_resync_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_board/resync_refresh");

    for (cols, rows) in [(5, 4), (8, 6), (12, 8)] {
        let sync = ScrollSynchronizer::new(cols, rows);
        let mut slots = Vec::with_capacity(cols * rows);

        group.bench_with_input(
            BenchmarkId::new("grid", format!("{cols}x{rows}")),
            &(),
            |b, _| {
                b.iter(|| {
                    for locked in (0..10_000).step_by(97) {
                        let offset = sync.resync(black_box(locked), 10_000);
                        sync.refresh_slots(offset, 10_000, &mut slots);
                    }
                    black_box(&slots);
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// Input
// ============================================================================

fn bench_key_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_board/keys");

    for count in [23, 1_000, 50_000] {
        let mut lib = library(count);
        let mut board = TileBoard::new(ThemeLayout::default()).expect("default theme");
        board.on_show(&mut lib);
        let keys = [KeyCode::Down, KeyCode::Right, KeyCode::Down, KeyCode::Left];

        group.bench_with_input(BenchmarkId::new("songs", count), &(), |b, _| {
            b.iter(|| {
                for code in keys {
                    let mut key = KeyEvent::release(code);
                    black_box(board.handle_key(&mut key, &mut lib));
                }
            })
        });
    }

    group.finish();
}

fn bench_pointer_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_board/pointer");

    let mut lib = library(1_000);
    let mut board = TileBoard::new(ThemeLayout::default()).expect("default theme");
    board.on_show(&mut lib);
    let bounds = board.rect();
    let points: Vec<_> = (0..64)
        .map(|i| {
            let x = bounds.x + (i % 8) as f32 * bounds.width / 8.0 + 3.0;
            let y = bounds.y + (i / 8) as f32 * bounds.height / 8.0 + 3.0;
            PointerEvent::new(x, y)
        })
        .collect();

    group.bench_function("hover_sweep", |b| {
        b.iter(|| {
            for event in &points {
                black_box(board.handle_pointer(event, &mut lib));
            }
        })
    });

    group.bench_function("wheel", |b| {
        let down = PointerEvent::new(bounds.x + 1.0, bounds.y + 1.0).with_wheel(1);
        let up = PointerEvent::new(bounds.x + 1.0, bounds.y + 1.0).with_wheel(-1);
        b.iter(|| {
            black_box(board.handle_pointer(&down, &mut lib));
            black_box(board.handle_pointer(&up, &mut lib));
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_resync_refresh,
    bench_key_navigation,
    bench_pointer_hover
);
criterion_main!(benches);
