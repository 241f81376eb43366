use anyhow::{ensure, Result};
use clap::Parser;
use hashbrown::HashSet;
use minsketch::BottomK;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use xxhash_rust::xxh3::Xxh3Builder;

/// Sketch sizes swept by the calibration.
const KS: [usize; 5] = [16, 32, 64, 128, 256];

#[derive(Parser, Debug)]
#[clap(
    name = "minsketch-bottomk_acc",
    about = "A program to test mean absolute errors of bottom-k similarity estimates."
)]
struct Args {
    /// Number of elements per set.
    /// Set A holds [0, n) and set B holds [n/2, 3n/2), so the exact Jaccard
    /// similarity of the pair is 1/3.
    #[clap(short = 'n', long, default_value = "1000")]
    num_elems: usize,

    /// Number of trials, each with a distinct hasher seed.
    #[clap(short = 't', long, default_value = "10")]
    num_trials: usize,

    /// Seed value for random values.
    #[clap(short = 's', long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let num_elems = args.num_elems;
    let num_trials = args.num_trials;

    ensure!(num_elems >= 4, "num_elems must be at least 4");
    ensure!(num_trials != 0, "num_trials must not be 0");

    let universe: Vec<Vec<u8>> = (0..num_elems * 3 / 2)
        .map(|i| format!("elem{i}").into_bytes())
        .collect();
    let set_a = &universe[..num_elems];
    let set_b = &universe[num_elems / 2..];

    let exact_jaccard = jaccard_index(set_a, set_b);
    // A sketch retaining every hash value settles on the intersection ratio
    // |A and B| / max(|A|, |B|), so deviations are measured against that
    // limit rather than the Jaccard ratio it tracks only loosely.
    let retained_limit = {
        let x = HashSet::<_>::from_iter(set_a);
        let y = HashSet::<_>::from_iter(set_b);
        x.intersection(&y).count() as f64 / x.len().max(y.len()) as f64
    };
    eprintln!(
        "Sweeping {} sketch sizes over {num_trials} trials (exact_jaccard={exact_jaccard}, retained_limit={retained_limit})...",
        KS.len()
    );

    let mut seeder =
        rand_xoshiro::SplitMix64::seed_from_u64(args.seed.unwrap_or_else(rand::random::<u64>));
    let trial_seeds: Vec<u64> = (0..num_trials).map(|_| seeder.next_u64()).collect();

    println!("size,exact_jaccard,retained_limit,mean_estimated,mean_absolute_error");
    for k in KS {
        let estimates: Vec<f64> = trial_seeds
            .par_iter()
            .map(|&seed| {
                let mut a = BottomK::new(Xxh3Builder::new().with_seed(seed), k).unwrap();
                let mut b = BottomK::new(Xxh3Builder::new().with_seed(seed), k).unwrap();
                for e in set_a {
                    a.add(e);
                }
                for e in set_b {
                    b.add(e);
                }
                a.similarity(&b).unwrap()
            })
            .collect();

        let n = estimates.len() as f64;
        let mean = estimates.iter().sum::<f64>() / n;
        let mae = estimates
            .iter()
            .map(|est| (est - retained_limit).abs())
            .sum::<f64>()
            / n;
        println!("{k},{exact_jaccard},{retained_limit},{mean},{mae}");
        eprintln!("Processed size {k}...");
    }

    Ok(())
}

fn jaccard_index(xs: &[Vec<u8>], ys: &[Vec<u8>]) -> f64 {
    let x = HashSet::<_>::from_iter(xs);
    let y = HashSet::<_>::from_iter(ys);
    x.intersection(&y).count() as f64 / x.union(&y).count() as f64
}
