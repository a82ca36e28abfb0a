//!
//! Plain text input of read counts and output of genotype probabilities
//!
pub mod counts;
pub mod genoprobs;
