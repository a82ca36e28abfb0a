//!
//! Tests of forward/backward/posterior on simulated data
//!
use super::mocks::{mock_three_markers, simulate_backcross, uniform_rec_fracs};
use super::{GbsModel, GbsParams};
use crate::common::Genotype;
use ndarray::{s, Axis};

#[test]
fn forward_and_backward_are_consistent() {
    let s = simulate_backcross(10, uniform_rec_fracs(50, 0.05), 6, 0.01, 1);
    let model = GbsModel::new(GbsParams::default(), s.rec_fracs.clone()).unwrap();
    for ind in 0..s.n_individuals() {
        let o = model.run(s.counts_a.column(ind), s.counts_b.column(ind));
        let pf = o.to_full_prob_forward();
        let pb = o.to_full_prob_backward();
        println!("ind={} pf={} pb={}", ind, pf, pb);
        assert!(!pf.is_zero());
        assert!(pf.log_diff(pb) < 1e-8);
        // P(x) can be calculated at any marker
        for m in 0..s.n_markers() {
            assert!(pf.log_diff(o.to_full_prob_at(m)) < 1e-8);
        }
    }
}

#[test]
fn posteriors_are_normalized() {
    let s = simulate_backcross(8, uniform_rec_fracs(40, 0.2), 20, 0.05, 2);
    let model = GbsModel::new(GbsParams::new(0.05, 0.02).unwrap(), s.rec_fracs.clone()).unwrap();
    for ind in 0..s.n_individuals() {
        let post = model
            .run(s.counts_a.column(ind), s.counts_b.column(ind))
            .to_posteriors();
        assert_eq!(post.dim(), (2, 40));
        for col in post.axis_iter(Axis(1)) {
            assert!(col.iter().all(|&p| (0.0..=1.0).contains(&p)));
            assert_abs_diff_eq!(col.sum(), 1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn posteriors_recover_true_genotypes() {
    let s = simulate_backcross(5, uniform_rec_fracs(100, 0.02), 15, 0.01, 5);
    let model = GbsModel::new(GbsParams::default(), s.rec_fracs.clone()).unwrap();
    let mut n_correct = 0;
    for ind in 0..s.n_individuals() {
        let post = model
            .run(s.counts_a.column(ind), s.counts_b.column(ind))
            .to_posteriors();
        for m in 0..s.n_markers() {
            let call = if post[[0, m]] >= 0.5 {
                Genotype::Homozygous
            } else {
                Genotype::Heterozygous
            };
            if call == s.genotypes[[m, ind]] {
                n_correct += 1;
            }
        }
    }
    let accuracy = n_correct as f64 / (s.n_individuals() * s.n_markers()) as f64;
    println!("accuracy={}", accuracy);
    assert!(accuracy > 0.95);
}

#[test]
fn reversing_markers_reverses_posteriors() {
    // uniform prior is stationary for the symmetric transition,
    // so the chain read from the other end gives the same posteriors.
    let s = simulate_backcross(3, vec![0.01, 0.3, 0.1, 0.0, 0.25, 0.5, 0.05], 7, 0.02, 8);
    let model = GbsModel::new(GbsParams::new(0.02, 0.01).unwrap(), s.rec_fracs.clone()).unwrap();
    let mut rev_fracs = s.rec_fracs.clone();
    rev_fracs.reverse();
    let model_rev = GbsModel::new(GbsParams::new(0.02, 0.01).unwrap(), rev_fracs).unwrap();

    for ind in 0..s.n_individuals() {
        let a = s.counts_a.column(ind);
        let b = s.counts_b.column(ind);
        let post = model.run(a, b).to_posteriors();
        let post_rev = model_rev
            .run(a.slice(s![..;-1]), b.slice(s![..;-1]))
            .to_posteriors();
        let post_rev = post_rev.slice(s![.., ..;-1]);
        for (x, y) in post.iter().zip(post_rev.iter()) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-9);
        }
    }
}

#[test]
fn three_markers_with_tight_linkage() {
    // AA-AB-AA with r=0.01 needs two recombinations for the AB call,
    // so the homozygous path dominates every marker.
    let (counts_a, counts_b) = mock_three_markers();
    let model = GbsModel::new(GbsParams::default(), vec![0.01, 0.01]).unwrap();
    let o = model.run(counts_a.column(0), counts_b.column(0));
    let post = o.to_posteriors();
    println!("{}", o.forward);
    println!("{}", o.backward);
    println!("{:?}", post);
    assert_abs_diff_eq!(post[[0, 0]], 0.823_376_771_953_112_9, epsilon = 1e-9);
    assert_abs_diff_eq!(post[[0, 1]], 0.782_254_720_123_793_3, epsilon = 1e-9);
    assert_abs_diff_eq!(post[[0, 2]], 0.823_376_771_953_112_9, epsilon = 1e-9);
    // symmetric around the middle marker
    assert_abs_diff_eq!(post[[0, 0]], post[[0, 2]], epsilon = 1e-12);
    // the middle marker leans towards AB more than the flanking ones
    assert!(post[[1, 1]] > post[[1, 0]]);
}

#[test]
fn three_markers_with_loose_linkage() {
    let (counts_a, counts_b) = mock_three_markers();
    let model = GbsModel::new(GbsParams::default(), vec![0.3, 0.3]).unwrap();
    let post = model
        .run(counts_a.column(0), counts_b.column(0))
        .to_posteriors();
    println!("{:?}", post);
    assert!(post[[0, 0]] > 0.9);
    assert!(post[[1, 1]] > 0.95);
    assert!(post[[0, 2]] > 0.9);
    assert_abs_diff_eq!(post[[1, 1]], 0.955_000_012_643_447_5, epsilon = 1e-9);
}
