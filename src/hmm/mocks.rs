//!
//! Simulated backcross GBS data for testing
//!
use crate::common::{Count, CountMatrix, Genotype};
use ndarray::Array2;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

///
/// Simulated dataset with the true genotypes
///
#[derive(Debug, Clone)]
pub struct BackcrossSample {
    /// true genotypes indexed by `[marker, individual]`
    pub genotypes: Array2<Genotype>,
    pub counts_a: CountMatrix,
    pub counts_b: CountMatrix,
    pub rec_fracs: Vec<f64>,
}

impl BackcrossSample {
    pub fn n_markers(&self) -> usize {
        self.genotypes.nrows()
    }
    pub fn n_individuals(&self) -> usize {
        self.genotypes.ncols()
    }
}

///
/// Same recombination fraction `rec_frac` between all adjacent markers
///
pub fn uniform_rec_fracs(n_markers: usize, rec_frac: f64) -> Vec<f64> {
    vec![rec_frac; n_markers.saturating_sub(1)]
}

///
/// Simulate backcross individuals and their GBS read counts.
///
/// * genotype of the first marker is AA or AB with probability 1/2
/// * genotype switches between marker `k` and `k+1` with probability `rec_fracs[k]`
/// * read depth of each (marker, individual) is uniform in `0..=max_depth`
/// * a read of AA is allele B with probability `error_prob1`,
///   a read of AB is allele A or B with probability 1/2
///
/// panics if a `rec_fracs` is not in `[0, 0.5]` or `error_prob1` is not in `[0, 1]`.
///
pub fn simulate_backcross(
    n_individuals: usize,
    rec_fracs: Vec<f64>,
    max_depth: Count,
    error_prob1: f64,
    seed: u64,
) -> BackcrossSample {
    assert!(
        rec_fracs.iter().all(|r| (0.0..=0.5).contains(r)),
        "rec_fracs must be in [0, 0.5]"
    );
    assert!(
        (0.0..=1.0).contains(&error_prob1),
        "error_prob1 must be in [0, 1]"
    );
    let n_markers = rec_fracs.len() + 1;
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut genotypes = Array2::from_elem((n_markers, n_individuals), Genotype::Homozygous);
    let mut counts_a = CountMatrix::zeros((n_markers, n_individuals));
    let mut counts_b = CountMatrix::zeros((n_markers, n_individuals));

    for ind in 0..n_individuals {
        let mut g = if rng.gen_bool(0.5) {
            Genotype::Homozygous
        } else {
            Genotype::Heterozygous
        };
        for m in 0..n_markers {
            if m > 0 && rng.gen_bool(rec_fracs[m - 1]) {
                g = g.flip();
            }
            genotypes[[m, ind]] = g;

            let p_b = match g {
                Genotype::Homozygous => error_prob1,
                Genotype::Heterozygous => 0.5,
            };
            let depth = rng.gen_range(0..=max_depth);
            let n_b = (0..depth).filter(|_| rng.gen_bool(p_b)).count() as Count;
            counts_a[[m, ind]] = depth - n_b;
            counts_b[[m, ind]] = n_b;
        }
    }

    BackcrossSample {
        genotypes,
        counts_a,
        counts_b,
        rec_fracs,
    }
}

///
/// Three markers of a single individual with `AA-AB-AA` pattern
///
/// ```text
/// countsA = [5, 0, 5]
/// countsB = [0, 5, 0]
/// ```
///
pub fn mock_three_markers() -> (CountMatrix, CountMatrix) {
    let counts_a = ndarray::arr2(&[[5], [0], [5]]);
    let counts_b = ndarray::arr2(&[[0], [5], [0]]);
    (counts_a, counts_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_shape_and_reproducibility() {
        let s1 = simulate_backcross(7, uniform_rec_fracs(20, 0.1), 10, 0.01, 3);
        let s2 = simulate_backcross(7, uniform_rec_fracs(20, 0.1), 10, 0.01, 3);
        assert_eq!(s1.n_markers(), 20);
        assert_eq!(s1.n_individuals(), 7);
        assert_eq!(s1.counts_a.dim(), (20, 7));
        assert_eq!(s1.counts_a, s2.counts_a);
        assert_eq!(s1.counts_b, s2.counts_b);
        assert_eq!(s1.genotypes, s2.genotypes);
        for (a, b) in s1.counts_a.iter().zip(s1.counts_b.iter()) {
            assert!(a + b <= 10);
        }
    }
    #[test]
    fn simulate_no_error_homozygous_has_no_b() {
        let s = simulate_backcross(5, uniform_rec_fracs(30, 0.2), 8, 0.0, 11);
        for ((g, _a), b) in s
            .genotypes
            .iter()
            .zip(s.counts_a.iter())
            .zip(s.counts_b.iter())
        {
            if *g == Genotype::Homozygous {
                assert_eq!(*b, 0);
            }
        }
    }
    #[test]
    fn simulate_no_recombination() {
        let s = simulate_backcross(4, uniform_rec_fracs(15, 0.0), 5, 0.01, 0);
        for ind in 0..4 {
            let col = s.genotypes.column(ind);
            assert!(col.iter().all(|&g| g == col[0]));
        }
    }
    #[test]
    #[should_panic(expected = "rec_fracs must be in [0, 0.5]")]
    fn simulate_rejects_nan_rec_frac() {
        simulate_backcross(2, vec![0.1, f64::NAN], 5, 0.01, 0);
    }
    #[test]
    #[should_panic(expected = "rec_fracs must be in [0, 0.5]")]
    fn simulate_rejects_large_rec_frac() {
        simulate_backcross(2, vec![0.7], 5, 0.01, 0);
    }
    #[test]
    #[should_panic(expected = "error_prob1 must be in [0, 1]")]
    fn simulate_rejects_error_prob1() {
        simulate_backcross(2, vec![0.1], 5, 1.5, 0);
    }
}
