use anyhow::{ensure, Result};
use clap::Parser;
use hashbrown::HashSet;
use minsketch::MinWise;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use xxhash_rust::xxh32::xxh32;

/// Sketch sizes swept by the calibration.
const SIZES: [usize; 4] = [64, 128, 256, 512];

type Hash32 = fn(&[u8]) -> u32;

#[derive(Parser, Debug)]
#[clap(
    name = "minsketch-minwise_acc",
    about = "A program to test mean absolute errors of min-wise similarity and cardinality estimates."
)]
struct Args {
    /// Number of distinct elements in the universe.
    /// Set A holds the first 50% and set B the last 82.5%, so the exact
    /// Jaccard similarity of the pair is close to 0.325.
    #[clap(short = 'n', long, default_value = "2000")]
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

    let num_elems = args.num_elems;
    let num_trials = args.num_trials;

    ensure!(num_elems >= 40, "num_elems must be at least 40");
    ensure!(num_trials != 0, "num_trials must not be 0");

    let universe: Vec<Vec<u8>> = (0..num_elems)
        .map(|i| format!("elem{i}").into_bytes())
        .collect();
    let set_a = &universe[..num_elems / 2];
    let set_b = &universe[num_elems * 35 / 200..];

    let exact_jaccard = jaccard_index(set_a, set_b);
    let exact_union = {
        let x = HashSet::<_>::from_iter(set_a);
        let y = HashSet::<_>::from_iter(set_b);
        x.union(&y).count() as f64
    };
    eprintln!(
        "Sweeping {} sketch sizes over {num_trials} trials (exact_jaccard={exact_jaccard}, exact_union={exact_union})...",
        SIZES.len()
    );

    let mut seeder =
        rand_xoshiro::SplitMix64::seed_from_u64(args.seed.unwrap_or_else(rand::random::<u64>));
    let trial_seeds: Vec<u64> = (0..num_trials).map(|_| seeder.next_u64()).collect();

    println!("size,exact_jaccard,mean_estimated_jaccard,jaccard_mae,exact_union,mean_estimated_union,union_mre");
    for size in SIZES {
        let estimates: Vec<(f64, f64)> = trial_seeds
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
                let est_jaccard = a.similarity(&b).unwrap();
                let mut union = a.clone();
                union.merge(&b).unwrap();
                (est_jaccard, union.cardinality() as f64)
            })
            .collect();

        let n = estimates.len() as f64;
        let mean_jaccard = estimates.iter().map(|e| e.0).sum::<f64>() / n;
        let jaccard_mae = estimates
            .iter()
            .map(|e| (e.0 - exact_jaccard).abs())
            .sum::<f64>()
            / n;
        let mean_union = estimates.iter().map(|e| e.1).sum::<f64>() / n;
        let union_mre = estimates
            .iter()
            .map(|e| (e.1 - exact_union).abs() / exact_union)
            .sum::<f64>()
            / n;
        println!("{size},{exact_jaccard},{mean_jaccard},{jaccard_mae},{exact_union},{mean_union},{union_mre}");
        eprintln!("Processed size {size}...");
    }

    Ok(())
}

fn jaccard_index(xs: &[Vec<u8>], ys: &[Vec<u8>]) -> f64 {
    let x = HashSet::<_>::from_iter(xs);
    let y = HashSet::<_>::from_iter(ys);
    x.intersection(&y).count() as f64 / x.union(&y).count() as f64
}
