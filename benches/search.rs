//! This bench test simulates searching a large directory of quizzes, where
//! most files only match fuzzily or not at all.

#![allow(missing_docs)]

use std::path::Path;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use quizmaster::{storage, Config, Library, Question, Quiz};
use tempfile::TempDir;

/// Generates a few hundred quizzes spread over nested directories
fn preseed_library(root: &Path) {
    for topic in 0..10 {
        for i in 0..30 {
            let questions = (0..20)
                .map(|q| {
                    Question::new(
                        format!("Question {q} about topic number {topic}, variant {i}?"),
                        format!("Answer {q}"),
                        vec![format!("Decoy {q}"), format!("Another decoy {q}")],
                    )
                })
                .collect();
            let quiz = Quiz::new(format!("Topic {topic} quiz {i}"), questions);
            let path = root.join(format!("topic-{topic}")).join(format!("quiz-{i}.json"));
            storage::save(&path, &quiz).unwrap();
        }
    }
}

fn search(c: &mut Criterion) {
    let tmp_dir = TempDir::new().unwrap();
    preseed_library(tmp_dir.path());

    c.bench_function("search exact", |b| {
        b.iter(|| {
            Library::new(tmp_dir.path().to_path_buf(), Config::default()).search("variant 29")
        });
    });

    c.bench_function("search fuzzy", |b| {
        b.iter(|| {
            Library::new(tmp_dir.path().to_path_buf(), Config::default()).search("varient")
        });
    });

    c.bench_function("search entries", |b| {
        b.iter_batched(
            || Library::open(tmp_dir.path().to_path_buf()),
            |library| library.entries("decoy"),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, search);
criterion_main!(benches);
