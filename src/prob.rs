///
/// probability calculation
/// implements logaddexp
///
use approx::AbsDiffEq;

///
/// Wrapper of f64 that represents probability `0 <= p <= 1`
/// stored as the natural log `log p`.
///
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Prob(f64);

///
/// short-hand of `Prob::from_prob`
///
pub fn p(p: f64) -> Prob {
    Prob::from_prob(p)
}

///
/// short-hand of `Prob::from_log_prob`
///
pub fn lp(lp: f64) -> Prob {
    Prob::from_log_prob(lp)
}

///
/// If two log probs differ more than this, the smaller one is ignored
/// in log-space addition. `exp(-200)` is far below f64 epsilon.
///
pub const ADDLOG_TOLERANCE: f64 = 200.0;

///
/// `log(exp(a) + exp(b))` of two log probabilities.
///
/// Zero probability must be given as `-inf`.
///
pub fn addlog(a: f64, b: f64) -> f64 {
    (lp(a) + lp(b)).to_log_value()
}

impl Prob {
    ///
    ///
    pub fn from_prob(value: f64) -> Prob {
        Prob(value.ln())
    }
    ///
    ///
    pub fn from_log_prob(log_value: f64) -> Prob {
        Prob(log_value)
    }
    ///
    /// Get the probability (in `[0, 1]`)
    pub fn to_value(self) -> f64 {
        self.0.exp()
    }
    ///
    /// Get the log probability
    pub fn to_log_value(self) -> f64 {
        self.0
    }
    ///
    /// Is `p == 0` or not? (log p = -inf)
    ///
    pub fn is_zero(self) -> bool {
        self.0.is_infinite() && self.0.is_sign_negative()
    }
    ///
    /// Is `p == 1`? (log p = 0)
    ///
    pub fn is_one(self) -> bool {
        self.0 == 0.0
    }
    ///
    /// prob=0.0
    ///
    pub fn zero() -> Prob {
        Prob(f64::NEG_INFINITY)
    }
    ///
    /// prob=1.0
    ///
    pub fn one() -> Prob {
        Prob(0.0)
    }
    ///
    /// `p^n` in log space.
    ///
    /// `p^0 = 1` holds even for `p = 0`, so that `0 * log(0)` never becomes NaN.
    ///
    pub fn powi(self, n: u32) -> Prob {
        if n == 0 {
            Prob::one()
        } else {
            Prob(self.0 * n as f64)
        }
    }
    ///
    /// `1 - p`
    ///
    pub fn one_minus(self) -> Prob {
        Prob((-self.0.exp()).ln_1p())
    }
    ///
    /// abs diff of two log probs `= |log p_a - log p_b|`
    ///
    pub fn log_diff(&self, other: Prob) -> f64 {
        if self.is_zero() {
            if other.is_zero() {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            if other.is_zero() {
                f64::INFINITY
            } else {
                (self.to_log_value() - other.to_log_value()).abs()
            }
        }
    }
}

// display
impl std::fmt::Display for Prob {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}({:.4})", self.0, self.to_value())
    }
}

/// Addition of two probabilities `px + py` in log space
///
/// If `px > py`:
///
/// ```text
/// log(exp(x) + exp(y))
///  = log(exp(x) (1 + exp(y-x)))
///  = log(exp(x)) + log(1 + exp(y-x))
///  = x + log(1 + exp(y-x))
/// ```
impl std::ops::Add for Prob {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let x = self.0;
        let y = other.0;
        let (x, y) = if x >= y { (x, y) } else { (y, x) };
        if y == f64::NEG_INFINITY {
            // x + 0 = x (also covers 0 + 0 = 0)
            Prob(x)
        } else if x - y > ADDLOG_TOLERANCE {
            // y is negligible
            Prob(x)
        } else {
            Prob(x + (y - x).exp().ln_1p())
        }
    }
}

/// Multiplication of two probabilities `px * py` in log space
///
/// ```text
/// log(px * py) = log(px) + log(py)
/// ```
impl std::ops::Mul for Prob {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Prob(self.0 + other.0)
    }
}

/// Division of two probabilities `px / py` in log space
///
/// ```text
/// log(px / py) = log(px) - log(py)
/// ```
impl std::ops::Div for Prob {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        Prob(self.0 - other.0)
    }
}

// sum
impl std::iter::Sum for Prob {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Prob::zero(), |a, b| a + b)
    }
}
impl<'a> std::iter::Sum<&'a Self> for Prob {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Prob::zero(), |a, b| a + *b)
    }
}
/// for approx `assert_abs_diff_eq`
impl AbsDiffEq for Prob {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        f64::abs_diff_eq(&self.0, &other.0, epsilon)
    }
}

impl Eq for Prob {}
impl Ord for Prob {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.partial_cmp(other).unwrap_or(std::cmp::Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id() {
        let x = Prob::from_prob(0.3);
        let e = Prob::from_prob(0.0);
        assert_relative_eq!((x + e).0, x.0);
        assert_relative_eq!((x * e).0, e.0);
    }
    #[test]
    fn test_sum() {
        let xs = vec![
            Prob::from_prob(0.1),
            Prob::from_prob(0.1),
            Prob::from_prob(0.1),
        ];
        let x: Prob = xs.iter().sum();
        let y = Prob::from_prob(0.3);
        assert_relative_eq!(x.to_value(), y.to_value(), max_relative = 1e-12);
    }
    #[test]
    fn addlog_matches_naive() {
        let values: [f64; 6] = [-0.1, -1.0, -3.5, -10.0, -50.0, -120.0];
        for &a in values.iter() {
            for &b in values.iter() {
                let naive = (a.exp() + b.exp()).ln();
                assert_relative_eq!(addlog(a, b), naive, max_relative = 1e-12);
                // symmetric
                assert_eq!(addlog(a, b), addlog(b, a));
            }
        }
    }
    #[test]
    fn addlog_with_zero() {
        let ninf = f64::NEG_INFINITY;
        assert_eq!(addlog(ninf, ninf), ninf);
        assert_eq!(addlog(-2.5, ninf), -2.5);
        assert_eq!(addlog(ninf, -2.5), -2.5);
        assert_eq!(addlog(0.0, ninf), 0.0);
    }
    #[test]
    fn addlog_tolerance_shortcut() {
        // difference above tolerance: smaller is dropped exactly
        assert_eq!(addlog(-1.0, -1.0 - ADDLOG_TOLERANCE - 1.0), -1.0);
        assert_eq!(addlog(-1.0 - ADDLOG_TOLERANCE - 1.0, -1.0), -1.0);
        // just below tolerance still matches ln(1 + exp(d)) ~ exp(d) (< eps)
        assert_abs_diff_eq!(addlog(-1.0, -1.0 - ADDLOG_TOLERANCE + 1.0), -1.0);
        // equal values are log(2) larger
        assert_relative_eq!(addlog(-3.0, -3.0), -3.0 + 2f64.ln(), max_relative = 1e-12);
    }
    #[test]
    fn prob_powi() {
        assert_eq!(p(0.0).powi(0), Prob::one());
        assert!(p(0.0).powi(3).is_zero());
        assert_relative_eq!(p(0.5).powi(3).to_value(), 0.125, max_relative = 1e-12);
        assert_relative_eq!(p(0.9).powi(1).to_value(), 0.9, max_relative = 1e-12);
    }
    #[test]
    fn prob_one_minus() {
        assert_relative_eq!(p(0.01).one_minus().to_value(), 0.99, max_relative = 1e-12);
        assert!(p(1.0).one_minus().is_zero());
        assert!(p(0.0).one_minus().is_one());
    }
    #[test]
    fn prob_arith() {
        let x = p(0.4) + p(0.2);
        assert_abs_diff_eq!(x, p(0.6), epsilon = 1e-12);
        let x = x * p(0.5);
        assert_abs_diff_eq!(x, p(0.3), epsilon = 1e-12);
        assert_abs_diff_eq!(x + p(0.0), p(0.3), epsilon = 1e-12);
        assert!((x * p(0.0)).is_zero());
        assert_abs_diff_eq!(x / p(0.5), p(0.6), epsilon = 1e-12);
    }
    #[test]
    fn prob_max_min() {
        let ps = vec![p(0.9), p(0.2), p(0.5), p(0.1), p(1.0), p(0.0)];
        let max = ps.iter().max().unwrap();
        assert_eq!(*max, p(1.0));
        let min = ps.iter().min().unwrap();
        assert_eq!(*min, p(0.0));
        assert!(p(0.0) < p(0.01));
    }
    #[test]
    fn prob_zero_one() {
        assert_eq!(Prob::one(), Prob::from_prob(1.0));
        assert_eq!(Prob::zero(), Prob::from_prob(0.0));
        assert!(Prob::zero().is_zero());
        assert!(Prob::one().is_one());
    }
}
