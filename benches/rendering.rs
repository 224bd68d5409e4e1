//! Benchmarks for board rendering and grid updates.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use noteboard::app::{Message, Model, update};
use noteboard::form::{Direction, Focus};
use noteboard::store::NoteStore;
use noteboard::ui::render;

fn board(count: usize) -> Model {
    let mut store = NoteStore::default();
    for i in 0..count {
        let content = format!("Body of note {i}\nsecond line\nthird line");
        let _ = store.add(&format!("Note {i}"), &content);
    }
    Model::new(store, (120, 50))
}

fn bench_render_board(c: &mut Criterion) {
    let model = board(200);
    let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();

    c.bench_function("render_board_200", |b| {
        b.iter(|| {
            terminal
                .draw(|frame| render(black_box(&model), frame))
                .unwrap();
        });
    });
}

fn bench_grid_navigation(c: &mut Criterion) {
    c.bench_function("grid_move_down_200", |b| {
        b.iter_batched(
            || update(board(200), Message::Focus(Focus::Grid)),
            |model| {
                (0..50).fold(model, |model, _| {
                    update(model, Message::GridMove(black_box(Direction::Down)))
                })
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_render_board, bench_grid_navigation);
criterion_main!(benches);
