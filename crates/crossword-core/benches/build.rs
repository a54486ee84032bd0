//! Benchmarks for grid building.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use crossword_core::{Direction, GridSize, Position, Puzzle, PuzzlePayload, WordPlacement};

/// A dense 15x15 layout: every row holds an across word and every column a down word.
fn dense_placements(size: usize) -> Vec<WordPlacement> {
    let word: String = (0..size)
        .map(|i| char::from(b'A' + u8::try_from(i % 26).unwrap()))
        .collect();
    (0..size)
        .flat_map(|i| {
            [
                WordPlacement::new(&word, "row", Direction::Across, Position::new(i, 0)),
                WordPlacement::new(&word, "column", Direction::Down, Position::new(0, i)),
            ]
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let placements = dense_placements(15);
    c.bench_function("build_dense_15x15", |b| {
        b.iter(|| Puzzle::build(GridSize::new(15, 15), black_box(placements.clone())));
    });

    let payload = serde_payload(15);
    c.bench_function("parse_and_build_15x15", |b| {
        b.iter(|| {
            let payload = PuzzlePayload::from_provider_text(black_box(&payload)).unwrap();
            Puzzle::from_payload(&payload).unwrap()
        });
    });
}

fn serde_payload(size: usize) -> String {
    let words: Vec<String> = dense_placements(size)
        .iter()
        .map(|p| {
            format!(
                r#"{{"word":"{}","clue":"{}","direction":"{}","startRow":{},"startCol":{}}}"#,
                p.text(),
                p.clue(),
                p.direction().to_string().to_uppercase(),
                p.start().row(),
                p.start().col(),
            )
        })
        .collect();
    format!(
        "```json\n{{\"theme\":\"bench\",\"gridSize\":{{\"rows\":{size},\"cols\":{size}}},\"words\":[{}]}}\n```",
        words.join(",")
    )
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
