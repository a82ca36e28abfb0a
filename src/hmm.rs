//!
//! Backcross GBS HMM calculation
//!
//! # Overview of calculation
//!
//! For one individual with `n` markers,
//! x[m] = (a[m], b[m]) : read counts of allele A and B at marker m
//! g[m] in {AA, AB}    : hidden genotype at marker m
//!
//! Forward
//! F[g][m]
//!  = P(emits x[0],...,x[m] and g[m] = g) for 0<=m<n
//!  F[g][0] = init(g) emit(x[0] | g)
//!  F[g][m] = sum_h F[h][m-1] step(h -> g; r[m-1]) emit(x[m] | g)
//!
//! Backward
//! B[g][m]
//!  = P(emits x[m+1],...,x[n-1] | g[m] = g) for 0<=m<n
//!  B[g][n-1] = 1
//!  B[g][m] = sum_h step(g -> h; r[m]) emit(x[m+1] | h) B[h][m+1]
//!
//! Posterior
//! P(g[m] = g | x) = F[g][m] B[g][m] / sum_h F[h][m] B[h][m]
//!
//! `sum_g F[g][n-1]` and `sum_g init(g) emit(x[0] | g) B[g][0]` are both
//! the full likelihood `P(x)`.
//!
pub mod backward;
pub mod forward;
pub mod mocks;
pub mod model;
pub mod params;
pub mod posterior;
pub mod table;
#[cfg(test)]
pub mod tests;

pub use model::GbsModel;
pub use params::GbsParams;
pub use posterior::HmmOutput;
pub use table::HmmTable;
