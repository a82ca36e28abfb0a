//!
//! Combine Forward/Backward into posterior genotype probabilities
//!
//! ```text
//! P(g[m] = g | x) = F[g][m] B[g][m] / sum_h F[h][m] B[h][m]
//! ```
//!
use super::model::GbsModel;
use super::table::HmmTable;
use crate::common::{CountColumn, Genotype, N_GENOTYPES};
use crate::prob::Prob;
use ndarray::{Array2, ArrayViewMut2};

/// Struct for storing `HmmTable` for forward and backward.
///
#[derive(Debug, Clone)]
pub struct HmmOutput {
    /// HmmTable for forward run
    pub forward: HmmTable,
    /// HmmTable for backward run
    pub backward: HmmTable,
}

impl GbsModel {
    ///
    /// Run forward and backward for the read counts of an individual
    /// and returns HmmOutput.
    ///
    pub fn run(&self, counts_a: CountColumn, counts_b: CountColumn) -> HmmOutput {
        let forward = self.forward(counts_a, counts_b);
        let backward = self.backward(counts_a, counts_b);
        HmmOutput::new(forward, backward)
    }
}

impl HmmOutput {
    pub fn new(forward: HmmTable, backward: HmmTable) -> Self {
        assert_eq!(forward.n_markers(), backward.n_markers());
        HmmOutput { forward, backward }
    }
    pub fn n_markers(&self) -> usize {
        self.forward.n_markers()
    }
    ///
    /// Full probability `P(x)` from the last column of forward.
    ///
    pub fn to_full_prob_forward(&self) -> Prob {
        match self.n_markers() {
            0 => Prob::one(),
            n => self.forward.column(n - 1).iter().sum(),
        }
    }
    ///
    /// Full probability `P(x)` from forward and backward at the marker.
    ///
    /// ```text
    /// P(x) = sum_g F[g][m] B[g][m]
    /// ```
    ///
    pub fn to_full_prob_at(&self, marker: usize) -> Prob {
        Genotype::all()
            .iter()
            .map(|&g| self.forward[(g, marker)] * self.backward[(g, marker)])
            .sum()
    }
    ///
    /// Full probability `P(x)` from the first column of backward.
    ///
    pub fn to_full_prob_backward(&self) -> Prob {
        match self.n_markers() {
            0 => Prob::one(),
            _ => self.to_full_prob_at(0),
        }
    }
    ///
    /// Fill `out[g, m]` with the posterior genotype probabilities.
    ///
    /// `out` should have the shape `(N_GENOTYPES, n_markers)`.
    ///
    pub fn fill_posteriors(&self, mut out: ArrayViewMut2<f64>) {
        assert_eq!(out.dim(), (N_GENOTYPES, self.n_markers()));
        for m in 0..self.n_markers() {
            let mut u = [Prob::zero(); N_GENOTYPES];
            for &g in Genotype::all().iter() {
                u[g.index()] = self.forward[(g, m)] * self.backward[(g, m)];
            }
            let z: Prob = u.iter().sum();
            for &g in Genotype::all().iter() {
                out[[g.index(), m]] = (u[g.index()] / z).to_value();
            }
        }
    }
    ///
    /// Posterior genotype probabilities as `(N_GENOTYPES, n_markers)` array.
    ///
    pub fn to_posteriors(&self) -> Array2<f64> {
        let mut out = Array2::zeros((N_GENOTYPES, self.n_markers()));
        self.fill_posteriors(out.view_mut());
        out
    }
}
