//! End-to-end demo: select per-class bandwidths by cross-validation and
//! classify held-out measurements with the Bayes-Parzen rule.
//!
//! Usage:
//!   cargo run --example letter_classification -- <class_a.csv> <class_c.csv> <test.csv>
//!
//! Each training file holds one measurement per row; the test file is
//! classified and the label split is reported.

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use parzen_bayes::bandwidth::select_bandwidth;
use parzen_bayes::classify::classify_bayes_parzen;
use parzen_bayes::config::SweepConfig;
use parzen_bayes::crossval::crossval;
use parzen_bayes::io::read_measurements_csv;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        bail!("Usage: {} <class_a.csv> <class_c.csv> <test.csv>", args[0]);
    }

    let x_a = read_measurements_csv(&args[1]).context("Loading class A measurements")?;
    let x_c = read_measurements_csv(&args[2]).context("Loading class C measurements")?;
    let x_test = read_measurements_csv(&args[3]).context("Loading test measurements")?;

    log::info!(
        "Loaded {} class A, {} class C and {} test measurements",
        x_a.len(),
        x_c.len(),
        x_test.len()
    );

    let config = SweepConfig::default();
    let candidates = config.candidates();
    let mut rng = StdRng::seed_from_u64(config.seed);

    let (itrn_a, itst_a) = crossval(x_a.len(), config.num_folds, &mut rng);
    let (h_a, lh_a) = select_bandwidth(&itrn_a, &itst_a, &x_a, &candidates)
        .context("Bandwidth sweep for class A")?;
    log::info!("Class A: h = {:.4} (log-likelihood {:.4})", h_a, lh_a);

    let (itrn_c, itst_c) = crossval(x_c.len(), config.num_folds, &mut rng);
    let (h_c, lh_c) = select_bandwidth(&itrn_c, &itst_c, &x_c, &candidates)
        .context("Bandwidth sweep for class C")?;
    log::info!("Class C: h = {:.4} (log-likelihood {:.4})", h_c, lh_c);

    // Priors from the training counts.
    let total = (x_a.len() + x_c.len()) as f64;
    let prior_a = x_a.len() as f64 / total;
    let prior_c = x_c.len() as f64 / total;

    let labels = classify_bayes_parzen(&x_test, &x_a, &x_c, prior_a, prior_c, h_a, h_c)?;
    let num_a = labels.iter().filter(|&&l| l).count();

    println!(
        "Classified {} measurements: {} as class A, {} as class C",
        labels.len(),
        num_a,
        labels.len() - num_a
    );
    for (value, label) in x_test.iter().zip(labels.iter()) {
        println!("{:>12.4}  ->  {}", value, if *label { "A" } else { "C" });
    }

    Ok(())
}
