#[macro_use]
extern crate log;

use balanced_trees::{AvlTree, BinarySearchTree, Order, RedBlackTree, SearchTree};
use log::LevelFilter;
use rand::{Rng, SeedableRng, XorShiftRng};
use simplelog::{Config, SimpleLogger};
use std::env;

const DEFAULT_MAX_EXPONENT: u32 = 5;
// 10^9 keys is the largest size whose keys still fit in a u32
const MAX_EXPONENT: u32 = 9;
const DEFAULT_SEED: u32 = 1;
const DEMO_KEYS: [u32; 9] = [50, 30, 70, 20, 40, 60, 80, 10, 90];

struct ReportConfig {
    max_exponent: u32,
    seed: u32,
}

impl ReportConfig {
    fn from_args<I>(mut args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        let mut max_exponent = parse_or(args.next(), "max_exponent", DEFAULT_MAX_EXPONENT);
        if max_exponent > MAX_EXPONENT {
            warn!("max_exponent {} is too large, using {}", max_exponent, MAX_EXPONENT);
            max_exponent = MAX_EXPONENT;
        }
        ReportConfig {
            max_exponent,
            seed: parse_or(args.next(), "seed", DEFAULT_SEED),
        }
    }
}

fn parse_or(arg: Option<String>, name: &str, default: u32) -> u32 {
    match arg {
        None => default,
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            warn!("invalid {} `{}`, using {}", name, arg, default);
            default
        }),
    }
}

fn build<S>(keys: &[u32]) -> S
where
    S: SearchTree<u32> + Default,
{
    let mut tree = S::default();
    for &key in keys {
        tree.insert(key);
    }
    if let Err(err) = tree.validate() {
        error!("tree of {} keys is invalid: {}", keys.len(), err);
    }
    tree
}

fn avl_bound(n: usize) -> f64 {
    1.44 * ((n + 2) as f64).log2() - 0.328
}

fn red_black_bound(n: usize) -> f64 {
    2.0 * ((n + 1) as f64).log2()
}

fn report_heights(config: &ReportConfig) {
    // xorshift must not be seeded with all zeros
    let mut rng: XorShiftRng = SeedableRng::from_seed([config.seed, 1, 1, 1]);

    info!(
        "{:>8} {:>6} {:>6} {:>6} {:>10} {:>10}",
        "n", "bst", "avl", "rb", "avl bound", "rb bound",
    );
    for exponent in 1..=config.max_exponent {
        let n = 10u32.pow(exponent);
        let mut keys: Vec<u32> = (0..n).collect();
        let n = keys.len();
        rng.shuffle(&mut keys);

        let bst: BinarySearchTree<u32> = build(&keys);
        let avl: AvlTree<u32> = build(&keys);
        let red_black: RedBlackTree<u32> = build(&keys);

        info!(
            "{:>8} {:>6} {:>6} {:>6} {:>10.2} {:>10.2}",
            n,
            bst.height(),
            avl.height(),
            red_black.height(),
            avl_bound(n),
            red_black_bound(n),
        );
    }
}

fn report_orders() {
    let bst: BinarySearchTree<u32> = DEMO_KEYS.iter().cloned().collect();
    let avl: AvlTree<u32> = DEMO_KEYS.iter().cloned().collect();
    let red_black: RedBlackTree<u32> = DEMO_KEYS.iter().cloned().collect();

    for &order in Order::ALL.iter() {
        info!("bst {}: {:?}", order, SearchTree::keys(&bst, order));
        info!("avl {}: {:?}", order, SearchTree::keys(&avl, order));
        info!("red black {}: {:?}", order, SearchTree::keys(&red_black, order));
    }

    println!("{}", bst);
    println!("{}", avl);
    println!("{}", red_black);
}

fn main() {
    if let Err(err) = SimpleLogger::init(LevelFilter::Info, Config::default()) {
        eprintln!("failed to initialise logger: {}", err);
    }

    let config = ReportConfig::from_args(env::args().skip(1));
    report_heights(&config);
    report_orders();
}
