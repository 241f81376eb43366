use anyhow::{ensure, Result};
use clap::Parser;
use hashbrown::HashSet;
use minsketch::{bbit, MinWise};
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use xxhash_rust::xxh32::xxh32;

/// Field widths swept by the calibration.
const BS: [u32; 6] = [1, 2, 4, 8, 16, 32];

type Hash32 = fn(&[u8]) -> u32;

#[derive(Parser, Debug)]
#[clap(
    name = "minsketch-bbit_acc",
    about = "A program to test mean absolute errors of b-bit min-wise similarity estimates."
)]
struct Args {
    /// Sketch size, i.e., the number of hash functions.
    #[clap(short = 'k', long, default_value = "128")]
    size: usize,

    /// Number of elements per set.
    /// Set A holds [0, n) and set B holds [n/2, 3n/2), so the exact Jaccard
    /// similarity of the pair is 1/3.
    #[clap(short = 'n', long, default_value = "1000")]
    num_elems: usize,

    /// Number of trials, each with a distinct sketch seed.
    #[clap(short = 't', long, default_value = "10")]
    num_trials: usize,

    /// Seed value for random values.
    #[clap(short = 's', long)]
    seed: Option<u64>,
}

fn hash32(elem: &[u8]) -> u32 {
    xxh32(elem, 42)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let size = args.size;
    let num_elems = args.num_elems;
    let num_trials = args.num_trials;

    ensure!(size != 0, "size must not be 0");
    ensure!(num_elems >= 4, "num_elems must be at least 4");
    ensure!(num_trials != 0, "num_trials must not be 0");

    let universe: Vec<Vec<u8>> = (0..num_elems * 3 / 2)
        .map(|i| format!("elem{i}").into_bytes())
        .collect();
    let set_a = &universe[..num_elems];
    let set_b = &universe[num_elems / 2..];

    let exact_jaccard = jaccard_index(set_a, set_b);
    eprintln!("Sketching {num_trials} trial pairs of size {size} (exact_jaccard={exact_jaccard})...");

    let mut seeder =
        rand_xoshiro::SplitMix64::seed_from_u64(args.seed.unwrap_or_else(rand::random::<u64>));
    let trial_seeds: Vec<u64> = (0..num_trials).map(|_| seeder.next_u64()).collect();

    let pairs: Vec<(MinWise<Hash32>, MinWise<Hash32>)> = trial_seeds
        .par_iter()
        .map(|&seed| {
            let mut a = MinWise::new(hash32 as Hash32, size, seed).unwrap();
            let mut b = MinWise::new(hash32 as Hash32, size, seed).unwrap();
            for e in set_a {
                a.push(e);
            }
            for e in set_b {
                b.push(e);
            }
            (a, b)
        })
        .collect();

    let full_mae = pairs
        .iter()
        .map(|(a, b)| (a.similarity(b).unwrap() - exact_jaccard).abs())
        .sum::<f64>()
        / pairs.len() as f64;
    eprintln!("Full-precision mean absolute error: {full_mae}");

    println!("b,num_words,exact_jaccard,mean_estimated_jaccard,mean_absolute_error");
    for b in BS {
        let estimates: Vec<f64> = pairs
            .par_iter()
            .map(|(x, y)| bbit::similarity(&x.signature_bbit(b), &y.signature_bbit(b), b).unwrap())
            .collect();

        let n = estimates.len() as f64;
        let mean = estimates.iter().sum::<f64>() / n;
        let mae = estimates
            .iter()
            .map(|est| (est - exact_jaccard).abs())
            .sum::<f64>()
            / n;
        let num_words = pairs[0].0.signature_bbit(b).len();
        println!("{b},{num_words},{exact_jaccard},{mean},{mae}");
        eprintln!("Processed width {b}...");
    }

    Ok(())
}

fn jaccard_index(xs: &[Vec<u8>], ys: &[Vec<u8>]) -> f64 {
    let x = HashSet::<_>::from_iter(xs);
    let y = HashSet::<_>::from_iter(ys);
    x.intersection(&y).count() as f64 / x.union(&y).count() as f64
}
