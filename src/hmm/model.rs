//!
//! Backcross model: init, step (transition) and emit probabilities
//!
use super::params::GbsParams;
use crate::common::{Count, Genotype};
use crate::errors::InputError;
use crate::prob::Prob;

///
/// HMM along the markers of a chromosome for a backcross
/// with GBS read count emissions.
///
#[derive(Debug, Clone)]
pub struct GbsModel {
    pub params: GbsParams,
    /// recombination fraction between marker `k` and `k+1`
    rec_fracs: Vec<f64>,
    /// `1 - r[k]`
    p_stay: Vec<Prob>,
    /// `r[k]`
    p_switch: Vec<Prob>,
}

impl GbsModel {
    ///
    /// Every recombination fraction must be in `[0, 0.5]`.
    ///
    pub fn new(params: GbsParams, rec_fracs: Vec<f64>) -> Result<GbsModel, InputError> {
        if let Some((index, &value)) = rec_fracs
            .iter()
            .enumerate()
            .find(|(_, r)| !(0.0..=0.5).contains(*r))
        {
            return Err(InputError::RecFracOutOfRange { index, value });
        }
        let p_switch: Vec<Prob> = rec_fracs.iter().map(|&r| Prob::from_prob(r)).collect();
        let p_stay = p_switch.iter().map(|p| p.one_minus()).collect();
        Ok(GbsModel {
            params,
            rec_fracs,
            p_stay,
            p_switch,
        })
    }
    /// The number of markers this model spans
    pub fn n_markers(&self) -> usize {
        self.rec_fracs.len() + 1
    }
    pub fn rec_fracs(&self) -> &[f64] {
        &self.rec_fracs
    }
    ///
    /// Prior of the genotype at the first marker.
    /// `AA` and `AB` are equally likely in backcross.
    ///
    pub fn init(&self, _genotype: Genotype) -> Prob {
        Prob::from_prob(0.5)
    }
    ///
    /// Transition probability from `left` at marker `k`
    /// to `right` at marker `k+1`.
    ///
    /// ```text
    /// 1 - r[k] (left == right)
    /// r[k]     (otherwise)
    /// ```
    ///
    pub fn step(&self, left: Genotype, right: Genotype, k: usize) -> Prob {
        if left == right {
            self.p_stay[k]
        } else {
            self.p_switch[k]
        }
    }
    ///
    /// Probability of observing `count_a` reads of allele A
    /// and `count_b` reads of allele B given the true genotype.
    ///
    /// ```text
    /// p_het = (1/2)^(a+b)
    /// p_hom = (1-e1)^a e1^b
    /// emit(AA) = (1-e2) p_hom + e2 p_het
    /// emit(AB) = (1-e2) p_het + e2 p_hom
    /// ```
    ///
    pub fn emit(&self, count_a: Count, count_b: Count, genotype: Genotype) -> Prob {
        let param = &self.params;
        let half = Prob::from_prob(0.5);
        let p_het = half.powi(count_a) * half.powi(count_b);
        let p_hom = param.p_ok1.powi(count_a) * param.p_err1.powi(count_b);
        match genotype {
            Genotype::Homozygous => param.p_ok2 * p_hom + param.p_err2 * p_het,
            Genotype::Heterozygous => param.p_ok2 * p_het + param.p_err2 * p_hom,
        }
    }
}
