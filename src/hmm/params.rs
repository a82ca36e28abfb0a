//!
//! GbsParams: error rates of the emission model
//!
use crate::errors::InputError;
use crate::prob::Prob;

///
/// Error parameters of the GBS emission model
///
/// Only constructed through `GbsParams::new` and its presets,
/// so both rates are always in `[0, 1]`.
///
/// ```compile_fail
/// use genoprob_gbs::hmm::GbsParams;
/// use genoprob_gbs::prob::Prob;
/// let params = GbsParams {
///     error_prob1: 2.0,
///     error_prob2: 0.0,
///     p_err1: Prob::one(),
///     p_ok1: Prob::one(),
///     p_err2: Prob::zero(),
///     p_ok2: Prob::one(),
/// };
/// ```
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbsParams {
    /// per-read sequencing error rate at a homozygous site
    error_prob1: f64,
    /// probability that the genotype model itself is wrong
    error_prob2: f64,
    /// `error_prob1`
    pub(super) p_err1: Prob,
    /// `1 - error_prob1`
    pub(super) p_ok1: Prob,
    /// `error_prob2`
    pub(super) p_err2: Prob,
    /// `1 - error_prob2`
    pub(super) p_ok2: Prob,
}

impl GbsParams {
    ///
    /// Both probabilities must be in `[0, 1]`.
    ///
    pub fn new(error_prob1: f64, error_prob2: f64) -> Result<GbsParams, InputError> {
        if !(0.0..=1.0).contains(&error_prob1) {
            return Err(InputError::ErrorProb1OutOfRange { value: error_prob1 });
        }
        if !(0.0..=1.0).contains(&error_prob2) {
            return Err(InputError::ErrorProb2OutOfRange { value: error_prob2 });
        }
        let p_err1 = Prob::from_prob(error_prob1);
        let p_err2 = Prob::from_prob(error_prob2);
        Ok(GbsParams {
            error_prob1,
            error_prob2,
            p_err1,
            p_ok1: p_err1.one_minus(),
            p_err2,
            p_ok2: p_err2.one_minus(),
        })
    }
    /// no sequencing error and no genotyping error
    pub fn zero_error() -> GbsParams {
        GbsParams::uniform(0.0)
    }
    /// `error_prob1 = error_prob2 = 1%`
    pub fn default() -> GbsParams {
        GbsParams::uniform(0.01)
    }
    /// `error_prob1 = error_prob2 = p`
    ///
    /// panics if `p` is not a probability.
    pub fn uniform(p: f64) -> GbsParams {
        GbsParams::new(p, p).expect("uniform error rate must be in [0, 1]")
    }
    pub fn error_prob1(&self) -> f64 {
        self.error_prob1
    }
    pub fn error_prob2(&self) -> f64 {
        self.error_prob2
    }
}

impl std::fmt::Display for GbsParams {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "error_prob1={} error_prob2={}",
            self.error_prob1, self.error_prob2
        )
    }
}
