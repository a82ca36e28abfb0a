//!
//! Genotype probabilities of all individuals
//!
//! Each individual is an independent forward/backward run on its own
//! column of the count matrices, so individuals are processed in parallel
//! and each writes its own slice of the output.
//!
use crate::common::{Count, Genotype, N_GENOTYPES};
use crate::errors::{CalcError, InputError};
use crate::hmm::{GbsModel, GbsParams};
use crate::prob::Prob;
use indicatif::ProgressBar;
use log::{debug, info};
use ndarray::parallel::prelude::*;
use ndarray::{Array3, ArrayView2, ArrayView3, Axis};
use std::sync::atomic::{AtomicBool, Ordering};

///
/// Source of a user interruption, checked between individuals.
///
pub trait Interrupt: Sync {
    fn is_interrupted(&self) -> bool;
}

/// Never interrupts.
pub struct NeverInterrupt;

impl Interrupt for NeverInterrupt {
    fn is_interrupted(&self) -> bool {
        false
    }
}

/// Interrupted once the flag is set (e.g. by a signal handler).
impl Interrupt for AtomicBool {
    fn is_interrupted(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

///
/// Genotype probabilities indexed by `[genotype, individual, marker]`
///
#[derive(Debug, Clone, PartialEq)]
pub struct GenoProbs(Array3<f64>);

impl GenoProbs {
    pub fn n_genotypes(&self) -> usize {
        self.0.len_of(Axis(0))
    }
    pub fn n_individuals(&self) -> usize {
        self.0.len_of(Axis(1))
    }
    pub fn n_markers(&self) -> usize {
        self.0.len_of(Axis(2))
    }
    /// P(genotype of `individual` at `marker` is `genotype`)
    pub fn get(&self, genotype: Genotype, individual: usize, marker: usize) -> f64 {
        self.0[[genotype.index(), individual, marker]]
    }
    /// `(N_GENOTYPES, n_markers)` view of an individual
    pub fn individual(&self, individual: usize) -> ArrayView2<f64> {
        self.0.index_axis(Axis(1), individual)
    }
    pub fn view(&self) -> ArrayView3<f64> {
        self.0.view()
    }
    pub fn into_inner(self) -> Array3<f64> {
        self.0
    }
}

///
/// Check the inputs and build the model.
///
/// Checks are in this order and the first violation is returned:
/// 1. `counts_a` and `counts_b` have the same shape
/// 2. `rec_frac.len() == n_markers - 1`
/// 3. `error_prob1` in `[0, 1]`
/// 4. `error_prob2` in `[0, 1]`
/// 5. every `rec_frac` in `[0, 0.5]`
///
pub fn validate(
    counts_a: ArrayView2<Count>,
    counts_b: ArrayView2<Count>,
    rec_frac: &[f64],
    error_prob1: f64,
    error_prob2: f64,
) -> Result<GbsModel, InputError> {
    if counts_a.dim() != counts_b.dim() {
        return Err(InputError::CountDimMismatch {
            a_markers: counts_a.nrows(),
            a_individuals: counts_a.ncols(),
            b_markers: counts_b.nrows(),
            b_individuals: counts_b.ncols(),
        });
    }
    let n_markers = counts_a.nrows();
    if rec_frac.len() + 1 != n_markers {
        return Err(InputError::RecFracLength {
            got: rec_frac.len(),
            n_markers,
        });
    }
    let params = GbsParams::new(error_prob1, error_prob2)?;
    GbsModel::new(params, rec_frac.to_vec())
}

///
/// Calculate genotype probabilities given multipoint GBS read counts.
///
/// * `counts_a`, `counts_b`: read counts indexed by `[marker, individual]`
/// * `rec_frac`: recombination fractions between adjacent markers
///
/// Returns the probabilities indexed by `[genotype, individual, marker]`.
///
pub fn calc_genoprob_gbs(
    counts_a: ArrayView2<Count>,
    counts_b: ArrayView2<Count>,
    rec_frac: &[f64],
    error_prob1: f64,
    error_prob2: f64,
) -> Result<GenoProbs, CalcError> {
    calc_genoprob_gbs_with(
        counts_a,
        counts_b,
        rec_frac,
        error_prob1,
        error_prob2,
        &NeverInterrupt,
        &ProgressBar::hidden(),
    )
}

///
/// `calc_genoprob_gbs` with an interruption source and a progress bar.
///
/// `interrupt` is checked before each individual. Once interrupted, the
/// whole calculation returns `CalcError::Interrupted`.
///
pub fn calc_genoprob_gbs_with(
    counts_a: ArrayView2<Count>,
    counts_b: ArrayView2<Count>,
    rec_frac: &[f64],
    error_prob1: f64,
    error_prob2: f64,
    interrupt: &dyn Interrupt,
    progress: &ProgressBar,
) -> Result<GenoProbs, CalcError> {
    let model = validate(counts_a, counts_b, rec_frac, error_prob1, error_prob2)?;
    let (n_markers, n_individuals) = counts_a.dim();
    info!(
        "calc_genoprob_gbs n_ind={} n_mar={} {}",
        n_individuals, n_markers, model.params
    );

    let mut probs = Array3::<f64>::zeros((N_GENOTYPES, n_individuals, n_markers));
    progress.set_length(n_individuals as u64);
    probs
        .axis_iter_mut(Axis(1))
        .into_par_iter()
        .enumerate()
        .try_for_each(|(ind, out)| {
            if interrupt.is_interrupted() {
                return Err(CalcError::Interrupted);
            }
            let o = model.run(counts_a.column(ind), counts_b.column(ind));
            o.fill_posteriors(out);
            debug!("ind={} log P(x)={}", ind, o.to_full_prob_forward());
            progress.inc(1);
            Ok(())
        })?;
    progress.finish();

    info!("calc_genoprob_gbs finished");
    Ok(GenoProbs(probs))
}

///
/// Log likelihood `log P(x_i)` of the read counts of each individual.
///
pub fn log_likelihoods(
    counts_a: ArrayView2<Count>,
    counts_b: ArrayView2<Count>,
    rec_frac: &[f64],
    error_prob1: f64,
    error_prob2: f64,
) -> Result<Vec<Prob>, CalcError> {
    let model = validate(counts_a, counts_b, rec_frac, error_prob1, error_prob2)?;
    let n_individuals = counts_a.ncols();
    let ps = (0..n_individuals)
        .into_par_iter()
        .map(|ind| {
            model
                .forward(counts_a.column(ind), counts_b.column(ind))
                .column(counts_a.nrows() - 1)
                .iter()
                .sum::<Prob>()
        })
        .collect();
    Ok(ps)
}
