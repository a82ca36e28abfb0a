//!
//! Table definitions
//!
//! ## HmmTable
//!
//! the prob assigned for each (genotype, marker)
//!
//! F[g][m] or B[g][m]
//!
use crate::common::{Genotype, N_GENOTYPES};
use crate::prob::Prob;
use ndarray::{Array2, ArrayView1};

/// Struct that stores Forward/Backward algorithm result
/// of a single individual.
///
/// Corresponds to a matrix `T[genotype, marker]`.
#[derive(Debug, Clone, PartialEq)]
pub struct HmmTable(pub Array2<Prob>);

/// Constructors of HmmTable
impl HmmTable {
    pub fn new(n_markers: usize, value: Prob) -> Self {
        HmmTable(Array2::from_elem((N_GENOTYPES, n_markers), value))
    }
    pub fn zero(n_markers: usize) -> Self {
        HmmTable::new(n_markers, Prob::zero())
    }
}

/// Accessors of HmmTable
impl HmmTable {
    /// Get the number of markers in the table
    pub fn n_markers(&self) -> usize {
        self.0.ncols()
    }
    /// probs of all genotypes at the marker
    pub fn column(&self, marker: usize) -> ArrayView1<Prob> {
        self.0.column(marker)
    }
}

impl std::ops::Index<(Genotype, usize)> for HmmTable {
    type Output = Prob;
    fn index(&self, (genotype, marker): (Genotype, usize)) -> &Prob {
        &self.0[[genotype.index(), marker]]
    }
}

impl std::ops::IndexMut<(Genotype, usize)> for HmmTable {
    fn index_mut(&mut self, (genotype, marker): (Genotype, usize)) -> &mut Prob {
        &mut self.0[[genotype.index(), marker]]
    }
}

impl std::fmt::Display for HmmTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        // Header
        write!(f, "marker")?;
        for g in Genotype::all().iter() {
            write!(f, "\t{}", g)?;
        }
        writeln!(f)?;
        for marker in 0..self.n_markers() {
            write!(f, "{}", marker)?;
            for &g in Genotype::all().iter() {
                write!(f, "\t{:.4}", self[(g, marker)].to_log_value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
