use anyhow::Context;
use clap::Parser;
use genoprob_gbs::{
    calc_genoprob_gbs_with,
    genoprob::NeverInterrupt,
    io::counts::{count_matrix_from_file, rec_fracs_from_file},
};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

/// Genotype probabilities of backcross individuals from GBS read counts
#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    /// Read counts of allele A (markers in rows, individuals in columns)
    #[clap(short = 'a', long)]
    counts_a: std::path::PathBuf,
    /// Read counts of allele B (same shape as allele A)
    #[clap(short = 'b', long)]
    counts_b: std::path::PathBuf,
    /// Recombination fractions between adjacent markers
    #[clap(short = 'r', long)]
    rec_frac: std::path::PathBuf,
    /// Sequencing error rate of a read
    #[clap(short = 'e', long, default_value_t = 0.01)]
    error_prob1: f64,
    /// Probability of the genotype model being wrong
    #[clap(short = 'E', long, default_value_t = 0.01)]
    error_prob2: f64,
    /// Number of threads (0 uses all cores)
    #[clap(short = 't', long, default_value_t = 0)]
    threads: usize,
    /// Output file (TSV, or JSON with --json)
    #[clap(short = 'o', long)]
    output: std::path::PathBuf,
    /// Write JSON instead of TSV
    #[clap(long)]
    json: bool,
    /// Show progress bar
    #[clap(long)]
    progress: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts: Opts = Opts::parse();
    info!("opts={:?}", opts);

    rayon::ThreadPoolBuilder::new()
        .num_threads(opts.threads)
        .build_global()
        .context("failed to build thread pool")?;
    info!("n_threads={}", rayon::current_num_threads());

    let counts_a = count_matrix_from_file(&opts.counts_a)
        .with_context(|| format!("reading {}", opts.counts_a.display()))?;
    let counts_b = count_matrix_from_file(&opts.counts_b)
        .with_context(|| format!("reading {}", opts.counts_b.display()))?;
    let rec_frac = rec_fracs_from_file(&opts.rec_frac)
        .with_context(|| format!("reading {}", opts.rec_frac.display()))?;

    let progress = if opts.progress {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar().template("{elapsed_precise} {bar:40} {pos}/{len} individuals"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let genoprobs = calc_genoprob_gbs_with(
        counts_a.view(),
        counts_b.view(),
        &rec_frac,
        opts.error_prob1,
        opts.error_prob2,
        &NeverInterrupt,
        &progress,
    )?;

    if opts.json {
        genoprobs.to_json_file(&opts.output)?;
    } else {
        genoprobs.to_file(&opts.output)?;
    }
    info!("wrote {}", opts.output.display());
    Ok(())
}
