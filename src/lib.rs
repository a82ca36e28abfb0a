pub mod common;
pub mod errors;
pub mod genoprob;
pub mod hmm;
pub mod io;
pub mod prob;

#[macro_use]
extern crate approx;

pub use genoprob::{calc_genoprob_gbs, calc_genoprob_gbs_with, GenoProbs};
pub use prob::addlog;
