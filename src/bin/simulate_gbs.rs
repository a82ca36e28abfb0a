use clap::Parser;
use genoprob_gbs::{
    hmm::mocks::{simulate_backcross, uniform_rec_fracs},
    io::counts::write_count_matrix,
};
use itertools::Itertools;
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Simulate GBS read counts of backcross individuals
#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    #[clap(short = 'N', long)]
    n_individuals: usize,
    #[clap(short = 'M', long)]
    n_markers: usize,
    /// Recombination fraction between adjacent markers
    #[clap(short = 'r', long, default_value_t = 0.01)]
    rec_frac: f64,
    /// Maximum read depth per marker and individual
    #[clap(short = 'D', long, default_value_t = 10)]
    max_depth: u32,
    #[clap(short = 'e', long, default_value_t = 0.01)]
    error_prob1: f64,
    #[clap(long, default_value_t = 0)]
    seed: u64,
    /// writes PREFIX.a.tsv, PREFIX.b.tsv, PREFIX.rf.txt and PREFIX.true.tsv
    #[clap(long)]
    output_prefix: PathBuf,
}

///
/// `PREFIX.suffix`, keeping any dot already in the prefix
///
fn output_path(prefix: &Path, suffix: &str) -> PathBuf {
    let mut path = prefix.as_os_str().to_owned();
    path.push(".");
    path.push(suffix);
    PathBuf::from(path)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts: Opts = Opts::parse();
    info!("opts={:?}", opts);
    anyhow::ensure!(opts.n_markers > 0, "n_markers must be positive");
    anyhow::ensure!(
        (0.0..=0.5).contains(&opts.rec_frac),
        "rec_frac must be in [0, 0.5]"
    );
    anyhow::ensure!(
        (0.0..=1.0).contains(&opts.error_prob1),
        "error_prob1 must be in [0, 1]"
    );

    let sample = simulate_backcross(
        opts.n_individuals,
        uniform_rec_fracs(opts.n_markers, opts.rec_frac),
        opts.max_depth,
        opts.error_prob1,
        opts.seed,
    );

    let prefix = &opts.output_prefix;
    write_count_matrix(
        &sample.counts_a,
        std::fs::File::create(output_path(prefix, "a.tsv"))?,
    )?;
    write_count_matrix(
        &sample.counts_b,
        std::fs::File::create(output_path(prefix, "b.tsv"))?,
    )?;

    let mut rf = std::fs::File::create(output_path(prefix, "rf.txt"))?;
    for r in sample.rec_fracs.iter() {
        writeln!(rf, "{}", r)?;
    }

    let mut truth = std::fs::File::create(output_path(prefix, "true.tsv"))?;
    for row in sample.genotypes.rows() {
        writeln!(truth, "{}", row.iter().join("\t"))?;
    }
    info!(
        "simulated {} individuals x {} markers",
        sample.n_individuals(),
        sample.n_markers()
    );
    Ok(())
}
