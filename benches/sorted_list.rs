use criterion::{criterion_group, criterion_main, Criterion};
use navlist::cursor::{count, merge_all, Cursor};
use navlist::{NaturalOrder, SortedList};
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let n = 10000;
    let mut input: Vec<usize> = (0..n).collect();
    input.shuffle(&mut thread_rng());

    c.bench_function("stdlib btreeset insert 10k", |b| {
        b.iter(|| {
            let mut btreeset = std::collections::BTreeSet::new();

            input.iter().for_each(|item| {
                black_box(btreeset.insert(item));
            });

            assert_eq!(btreeset.len(), n);
        })
    });
    c.bench_function("sorted list insert 10k", |b| {
        b.iter(|| {
            let mut list = SortedList::new();

            input.iter().for_each(|item| {
                list.insert(*item);
            });

            assert_eq!(list.len(), n);
        })
    });
    c.bench_function("sorted list insert_all 10k", |b| {
        b.iter(|| {
            let mut list = SortedList::new();
            list.insert_all(input.iter().copied());

            assert_eq!(list.len(), n);
        })
    });

    let stdlib = std::collections::BTreeSet::from_iter(input.iter().copied());
    let list = SortedList::from_iter(input.iter().copied());

    c.bench_function("sorted list merge_sorted 10k", |b| {
        let sorted: Vec<usize> = (0..n).collect();
        b.iter(|| {
            let mut list = list.clone();
            list.merge_sorted(sorted.iter().copied());

            assert_eq!(list.len(), 2 * n);
        })
    });

    c.bench_function("stdlib btreeset contains 10k", |b| {
        b.iter(|| {
            input.iter().for_each(|item| {
                black_box(stdlib.contains(black_box(item)));
            })
        })
    });
    c.bench_function("sorted list contains 10k", |b| {
        b.iter(|| {
            input.iter().for_each(|item| {
                black_box(list.contains(black_box(item)));
            })
        })
    });
    c.bench_function("sorted list floor 10k", |b| {
        b.iter(|| {
            input.iter().for_each(|item| {
                black_box(list.floor(black_box(item)));
            })
        })
    });

    c.bench_function("stdlib btreeset range scan", |b| {
        b.iter(|| black_box(stdlib.range(n / 4..3 * n / 4).count()))
    });
    c.bench_function("sorted list sub scan", |b| {
        b.iter(|| black_box(count(list.sub(&(n / 4), &(3 * n / 4), true, false))))
    });

    let shards: Vec<SortedList<usize>> = (0..8)
        .map(|shard| SortedList::from_iter(input.iter().copied().filter(|item| item % 8 == shard)))
        .collect();
    c.bench_function("merge_all 8 shards", |b| {
        b.iter(|| {
            let cursors = shards.iter().map(|shard| shard.cursor()).collect();
            black_box(count(merge_all(cursors, NaturalOrder)))
        })
    });
    c.bench_function("merge_by 2 lists", |b| {
        b.iter(|| {
            let merged = shards[0].cursor().merge_by(shards[1].cursor(), NaturalOrder);
            black_box(count(merged))
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
