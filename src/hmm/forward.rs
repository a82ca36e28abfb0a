//!
//! Forward algorithm definitions
//!
use super::model::GbsModel;
use super::table::HmmTable;
use crate::common::{CountColumn, Genotype};
use crate::prob::Prob;

impl GbsModel {
    ///
    /// Run Forward algorithm to the read counts of an individual
    ///
    /// `F[g][m]` = P(emits `x[0],...,x[m]` and genotype at marker `m` is `g`)
    ///
    pub fn forward(&self, counts_a: CountColumn, counts_b: CountColumn) -> HmmTable {
        let n_markers = counts_a.len();
        let mut table = HmmTable::zero(n_markers);
        if n_markers == 0 {
            return table;
        }

        // init
        for &g in Genotype::all().iter() {
            table[(g, 0)] = self.init(g) * self.emit(counts_a[0], counts_b[0], g);
        }

        // step
        for m in 1..n_markers {
            for &gr in Genotype::all().iter() {
                let p: Prob = Genotype::all()
                    .iter()
                    .map(|&gl| table[(gl, m - 1)] * self.step(gl, gr, m - 1))
                    .sum();
                table[(gr, m)] = p * self.emit(counts_a[m], counts_b[m], gr);
            }
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::super::params::GbsParams;
    use super::*;
    use ndarray::arr1;

    #[test]
    fn forward_single_marker() {
        let model = GbsModel::new(GbsParams::default(), vec![]).unwrap();
        let a = arr1(&[3]);
        let b = arr1(&[0]);
        let f = model.forward(a.view(), b.view());
        assert_eq!(f.n_markers(), 1);
        for &g in Genotype::all().iter() {
            assert_abs_diff_eq!(f[(g, 0)], model.init(g) * model.emit(3, 0, g));
        }
    }
    #[test]
    fn forward_no_reads() {
        // without any reads, forward is the marginal of the markov chain
        let model = GbsModel::new(GbsParams::default(), vec![0.1, 0.3, 0.5]).unwrap();
        let a = arr1(&[0, 0, 0, 0]);
        let b = arr1(&[0, 0, 0, 0]);
        let f = model.forward(a.view(), b.view());
        for m in 0..4 {
            for &g in Genotype::all().iter() {
                assert_relative_eq!(f[(g, m)].to_value(), 0.5, max_relative = 1e-12);
            }
        }
    }
    #[test]
    fn forward_empty() {
        let model = GbsModel::new(GbsParams::default(), vec![]).unwrap();
        let a = arr1(&[]);
        let b = arr1(&[]);
        let f = model.forward(a.view(), b.view());
        assert_eq!(f.n_markers(), 0);
    }
}
