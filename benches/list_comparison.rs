use std::collections::VecDeque;

use rand::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};

use ordtree::{DoublyLinkedList, SinglyLinkedList};

trait List<T>: Default {
    fn push_front(&mut self, value: T);

    fn push_back(&mut self, value: T);

    fn pop_front(&mut self) -> Option<T>;

    fn pop_back(&mut self) -> Option<T>;

    fn get(&self, index: usize) -> Option<&T>;

    fn insert(&mut self, index: usize, value: T);

    fn remove(&mut self, index: usize) -> Option<T>;
}

macro_rules! impl_linked_list {
    ($name:ident) => {
        impl<T> List<T> for $name<T> {
            fn push_front(&mut self, value: T) {
                self.insert_at_start(value)
            }

            fn push_back(&mut self, value: T) {
                self.insert_at_end(value)
            }

            fn pop_front(&mut self) -> Option<T> {
                self.delete_at_start()
            }

            fn pop_back(&mut self) -> Option<T> {
                self.delete_at_end()
            }

            fn get(&self, index: usize) -> Option<&T> {
                $name::get(self, index).ok()
            }

            fn insert(&mut self, index: usize, value: T) {
                // Out of range indexes are ignored, matching the `VecDeque` impl
                let _ = self.insert_at_index(index, value);
            }

            fn remove(&mut self, index: usize) -> Option<T> {
                self.delete_at_index(index).ok()
            }
        }
    };
}

impl_linked_list!(SinglyLinkedList);
impl_linked_list!(DoublyLinkedList);

impl<T> List<T> for VecDeque<T> {
    fn push_front(&mut self, value: T) {
        VecDeque::push_front(self, value)
    }

    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value)
    }

    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn insert(&mut self, index: usize, value: T) {
        if index < self.len() {
            VecDeque::insert(self, index, value)
        }
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        VecDeque::remove(self, index)
    }
}

/// Deterministically generates `n` indexes, each less than the length the list will have when the
/// index is used
fn generate_indexes(n: usize, base_len: usize) -> Vec<usize> {
    // Use seed to make this deterministic
    let mut rng = StdRng::seed_from_u64(45930923092);
    (0..n).map(|_| rng.gen_range(0..base_len)).collect()
}

fn filled<L: List<u64>>(len: usize) -> L {
    let mut list = L::default();
    for value in 0..len as u64 {
        list.push_back(value);
    }
    list
}

/// Pushes onto both ends then drains the list from both ends
fn benchmark_ends<L: List<u64>>(ops: usize) -> L {
    let mut list = L::default();

    for value in 0..ops as u64 {
        if value % 2 == 0 {
            list.push_back(value);
        } else {
            list.push_front(value);
        }
    }

    for i in 0..ops {
        if i % 3 == 0 {
            black_box(list.pop_back());
        } else {
            black_box(list.pop_front());
        }
    }

    list
}

fn benchmark_gets<L: List<u64>>(list: &L, indexes: &[usize]) {
    for &index in indexes {
        black_box(list.get(index));
    }
}

/// Inserts at and then deletes from positions throughout the list, so the length never changes
fn benchmark_middle<L: List<u64>>(list: &mut L, indexes: &[usize]) {
    for &index in indexes {
        list.insert(index, 42);
        black_box(list.remove(index));
    }
}

pub fn bench_list_ends(c: &mut Criterion) {
    const OPS: &[usize] = &[50, 100, 500, 1000, 2000];

    let mut group = c.benchmark_group("list ends");
    for ops in OPS {
        group.bench_with_input(BenchmarkId::new("VecDeque", ops), ops, |b, &ops| {
            b.iter(|| benchmark_ends::<VecDeque<u64>>(ops))
        });
        group.bench_with_input(BenchmarkId::new("SinglyLinkedList", ops), ops, |b, &ops| {
            b.iter(|| benchmark_ends::<SinglyLinkedList<u64>>(ops))
        });
        group.bench_with_input(BenchmarkId::new("DoublyLinkedList", ops), ops, |b, &ops| {
            b.iter(|| benchmark_ends::<DoublyLinkedList<u64>>(ops))
        });
    }
    group.finish();
}

pub fn bench_list_get(c: &mut Criterion) {
    const LENS: &[usize] = &[50, 100, 500, 1000];

    let mut group = c.benchmark_group("list get");
    for len in LENS {
        let indexes = generate_indexes(100, *len);

        group.bench_with_input(BenchmarkId::new("VecDeque", len), len, |b, &len| {
            let list: VecDeque<u64> = filled(len);
            b.iter(|| benchmark_gets(&list, &indexes))
        });
        group.bench_with_input(BenchmarkId::new("SinglyLinkedList", len), len, |b, &len| {
            let list: SinglyLinkedList<u64> = filled(len);
            b.iter(|| benchmark_gets(&list, &indexes))
        });
        group.bench_with_input(BenchmarkId::new("DoublyLinkedList", len), len, |b, &len| {
            let list: DoublyLinkedList<u64> = filled(len);
            b.iter(|| benchmark_gets(&list, &indexes))
        });
    }
    group.finish();
}

pub fn bench_list_middle(c: &mut Criterion) {
    const LENS: &[usize] = &[50, 100, 500, 1000];

    let mut group = c.benchmark_group("list insert/delete at index");
    for len in LENS {
        let indexes = generate_indexes(100, *len);

        group.bench_with_input(BenchmarkId::new("VecDeque", len), len, |b, &len| {
            let mut list: VecDeque<u64> = filled(len);
            b.iter(|| benchmark_middle(&mut list, &indexes))
        });
        group.bench_with_input(BenchmarkId::new("SinglyLinkedList", len), len, |b, &len| {
            let mut list: SinglyLinkedList<u64> = filled(len);
            b.iter(|| benchmark_middle(&mut list, &indexes))
        });
        group.bench_with_input(BenchmarkId::new("DoublyLinkedList", len), len, |b, &len| {
            let mut list: DoublyLinkedList<u64> = filled(len);
            b.iter(|| benchmark_middle(&mut list, &indexes))
        });
    }
    group.finish();
}

criterion_group!(benches,
    bench_list_ends,
    bench_list_get,
    bench_list_middle,
);

criterion_main!(benches);
