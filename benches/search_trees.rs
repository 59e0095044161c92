use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1000;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        keys.push(key);
    }

    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

macro_rules! search_tree_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_trees::{$type_name, Order};
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;
                use criterion::{Criterion, black_box};

                fn build() -> ($type_name<u32>, Vec<u32>) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut tree = $type_name::new();
                    let mut keys = Vec::new();
                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        tree.insert(key);
                        keys.push(key);
                    }
                    (tree, keys)
                }

                pub fn bench_insert(c: &mut Criterion) {
                    let name = format!("bench {} insert", stringify!($module_name));
                    c.bench_function(&name, |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut tree = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            tree.insert(rng.next_u32());
                        }
                    }));
                }

                pub fn bench_contains(c: &mut Criterion) {
                    let (tree, keys) = build();
                    let name = format!("bench {} contains", stringify!($module_name));
                    c.bench_function(&name, move |b| b.iter(|| {
                        for key in &keys {
                            black_box(tree.contains(key));
                        }
                    }));
                }

                pub fn bench_delete(c: &mut Criterion) {
                    let name = format!("bench {} delete", stringify!($module_name));
                    c.bench_function(&name, |b| b.iter(|| {
                        let (mut tree, keys) = build();
                        for key in &keys {
                            black_box(tree.delete(key));
                        }
                    }));
                }

                pub fn bench_traverse(c: &mut Criterion) {
                    let (tree, _) = build();
                    let name = format!("bench {} traverse", stringify!($module_name));
                    c.bench_function(&name, move |b| b.iter(|| {
                        for &order in Order::ALL.iter() {
                            black_box(tree.traverse(order).count());
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreeset_insert,
            bench_btreeset_contains,
            $(
                $module_name::bench_insert,
                $module_name::bench_contains,
                $module_name::bench_delete,
                $module_name::bench_traverse,
            )*
        );
    }
}

search_tree_benches!(
    avl_tree: AvlTree,
    red_black_tree: RedBlackTree,
    bst: BinarySearchTree,
);

criterion_main!(benches);
