//!
//! Shared types: genotype state space and read counts
//!
use ndarray::{Array2, ArrayView1};

/// number of reads supporting one allele at a marker
pub type Count = u32;

/// Read counts of a single allele
/// indexed by `[marker, individual]`.
pub type CountMatrix = Array2<Count>;

/// Read counts of one individual along the markers
pub type CountColumn<'a> = ArrayView1<'a, Count>;

/// The number of genotypes in backcross
pub const N_GENOTYPES: usize = 2;

///
/// Genotype of a backcross individual at a marker
///
/// `Homozygous` is the recurrent parent genotype `AA`,
/// `Heterozygous` is `AB`.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Genotype {
    Homozygous = 0,
    Heterozygous = 1,
}

impl Genotype {
    /// index in the genotype axis of tables and output
    pub fn index(self) -> usize {
        self as usize
    }
    pub fn from_index(index: usize) -> Option<Genotype> {
        match index {
            0 => Some(Genotype::Homozygous),
            1 => Some(Genotype::Heterozygous),
            _ => None,
        }
    }
    /// all genotypes in index order
    pub fn all() -> [Genotype; N_GENOTYPES] {
        [Genotype::Homozygous, Genotype::Heterozygous]
    }
    /// the other genotype
    pub fn flip(self) -> Genotype {
        match self {
            Genotype::Homozygous => Genotype::Heterozygous,
            Genotype::Heterozygous => Genotype::Homozygous,
        }
    }
}

impl std::fmt::Display for Genotype {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Genotype::Homozygous => write!(f, "AA"),
            Genotype::Heterozygous => write!(f, "AB"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genotype_index() {
        for (i, g) in Genotype::all().iter().enumerate() {
            assert_eq!(g.index(), i);
            assert_eq!(Genotype::from_index(i), Some(*g));
        }
        assert_eq!(Genotype::from_index(2), None);
        assert_eq!(Genotype::Homozygous.flip(), Genotype::Heterozygous);
        assert_eq!(Genotype::Homozygous.to_string(), "AA");
        assert_eq!(Genotype::Heterozygous.to_string(), "AB");
    }
}
