use catalog::Photo;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gallery::{filter, group_by_event};

fn sample_photos(n: usize) -> Vec<Photo> {
    (0..n)
        .map(|i| Photo {
            id: i.to_string(),
            title: format!("Event {} - Shot {}", i % 25, i),
            description: format!("Photo number {}", i),
            tags: vec!["community".into(), format!("tag{}", i % 10)],
            category: if i % 2 == 0 { "events".into() } else { "team".into() },
            date: "2024-01-01".into(),
            image_url: format!("https://example.com/{}.jpg", i),
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let photos = sample_photos(5_000);
    c.bench_function("filter_search_term", |b| {
        b.iter(|| filter(black_box(&photos), black_box("tag3"), "all", None))
    });
    c.bench_function("filter_category_and_event", |b| {
        b.iter(|| filter(black_box(&photos), "", "events", Some("Event 7")))
    });
    c.bench_function("group_by_event", |b| b.iter(|| group_by_event(black_box(&photos))));
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
