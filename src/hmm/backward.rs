//!
//! Backward algorithm definitions
//!
use super::model::GbsModel;
use super::table::HmmTable;
use crate::common::{CountColumn, Genotype};
use crate::prob::Prob;

///
/// Backward Algorithm
///
impl GbsModel {
    ///
    /// Run Backward algorithm to the read counts of an individual
    ///
    /// `B[g][m]` = P(emits `x[m+1],...,x[n-1]` | genotype at marker `m` is `g`)
    ///
    /// The emission of each step is taken at the marker the step moves
    /// into (`m+1`), the mirror image of the forward recursion.
    ///
    pub fn backward(&self, counts_a: CountColumn, counts_b: CountColumn) -> HmmTable {
        let n_markers = counts_a.len();
        // B[g][n-1] = 1
        let mut table = HmmTable::new(n_markers, Prob::one());

        for m in (0..n_markers.saturating_sub(1)).rev() {
            for &gl in Genotype::all().iter() {
                let p: Prob = Genotype::all()
                    .iter()
                    .map(|&gr| {
                        table[(gr, m + 1)]
                            * self.step(gl, gr, m)
                            * self.emit(counts_a[m + 1], counts_b[m + 1], gr)
                    })
                    .sum();
                table[(gl, m)] = p;
            }
        }

        table
    }
}
