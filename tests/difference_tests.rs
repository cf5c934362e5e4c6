//! Tests for the pooled bootstrap difference test and the permutation test.
//!
//! The two procedures use different tie-break inequalities (strict `>` on
//! absolute values for the bootstrap, signed `>=` for the permutation
//! test), so their boundary behavior is tested separately.

use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;
use resample::{
    Config, TailRule, bootstrap_difference_test, permutation_test, statistic::mean_difference,
};

fn config(resamples: usize, seed: u64) -> Config {
    Config {
        resamples,
        seed: Some(seed),
        ..Config::default()
    }
}

fn normal_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

// ============================================================================
// Shared behavior
// ============================================================================

#[test]
fn p_values_are_probabilities() {
    let a = normal_sample(30, 1);
    let b = normal_sample(30, 2);
    let cfg = config(1000, 3);

    for test in [
        bootstrap_difference_test(&a, &b, &mean_difference, &cfg).unwrap(),
        permutation_test(&a, &b, &mean_difference, &cfg).unwrap(),
    ] {
        assert!((0.0..=1.0).contains(&test.p_value));
        assert_eq!(test.p_value, test.exceed_count as f64 / test.resamples as f64);
        assert_eq!(test.distribution.len(), 1000);
    }
}

#[test]
fn fixed_seed_reproduces_both_tests() {
    let a = normal_sample(20, 4);
    let b = normal_sample(20, 5);

    let boot1 = bootstrap_difference_test(&a, &b, &mean_difference, &config(400, 6)).unwrap();
    let boot2 = bootstrap_difference_test(&a, &b, &mean_difference, &config(400, 6)).unwrap();
    assert_eq!(boot1, boot2);

    let perm1 = permutation_test(&a, &b, &mean_difference, &config(400, 6)).unwrap();
    let perm2 = permutation_test(&a, &b, &mean_difference, &config(400, 6)).unwrap();
    assert_eq!(perm1, perm2);
}

#[test]
fn tail_rules_are_recorded() {
    let a = [1.0, 2.0, 3.0];
    let b = [4.0, 5.0, 6.0];
    let cfg = config(100, 7);

    let boot = bootstrap_difference_test(&a, &b, &mean_difference, &cfg).unwrap();
    assert_eq!(boot.tail_rule, TailRule::StrictlyGreater);

    let perm = permutation_test(&a, &b, &mean_difference, &cfg).unwrap();
    assert_eq!(perm.tail_rule, TailRule::GreaterOrEqual);
}

// ============================================================================
// Bootstrap difference test (strict > on absolute values)
// ============================================================================

#[test]
fn bootstrap_p_is_zero_for_maximally_separated_constants() {
    // Pooled draws of {1, 5} can never produce |mean difference| > 4, and
    // the strict inequality excludes the exact-4 ties, so p is exactly 0.
    let a = [5.0; 5];
    let b = [1.0; 5];
    let test = bootstrap_difference_test(&a, &b, &mean_difference, &config(1000, 8)).unwrap();
    assert_eq!(test.observed, 4.0);
    assert_eq!(test.p_value, 0.0);
}

#[test]
fn bootstrap_p_is_zero_for_identical_constant_samples() {
    // Every resampled difference ties the observed 0, and ties do not
    // qualify under the strict rule.
    let a = [2.0; 8];
    let test = bootstrap_difference_test(&a, &a, &mean_difference, &config(500, 9)).unwrap();
    assert_eq!(test.observed, 0.0);
    assert_eq!(test.p_value, 0.0);
}

#[test]
fn bootstrap_p_is_high_when_observed_difference_is_zero() {
    // Same multiset in both groups: the observed difference is 0, while
    // almost every resampled difference is nonzero in magnitude.
    let a = normal_sample(50, 10);
    let mut b = a.clone();
    b.reverse();

    let test = bootstrap_difference_test(&a, &b, &mean_difference, &config(2000, 11)).unwrap();
    assert_eq!(test.observed, 0.0);
    assert!(test.p_value > 0.9);
}

// ============================================================================
// Permutation test (signed >=)
// ============================================================================

#[test]
fn permutation_rejects_a_large_observed_difference() {
    // Spec scenario: constant 5s vs constant 1s, observed difference 4.
    // Only the rare permutations placing every 5 in the first group tie
    // it, so the p-value is essentially 0.
    let a = [5.0; 5];
    let b = [1.0; 5];
    let test = permutation_test(&a, &b, &mean_difference, &config(1000, 12)).unwrap();
    assert_eq!(test.observed, 4.0);
    assert!(test.p_value < 0.05);
}

#[test]
fn permutation_is_signed() {
    // Testing in the direction of the smaller mean: every permuted
    // difference is >= -4, so the signed rule reports p near 1.
    let a = [1.0; 5];
    let b = [5.0; 5];
    let test = permutation_test(&a, &b, &mean_difference, &config(1000, 13)).unwrap();
    assert_eq!(test.observed, -4.0);
    assert_eq!(test.p_value, 1.0);
}

#[test]
fn permutation_counts_ties_as_qualifying() {
    // Identical constant samples: every permuted difference ties the
    // observed 0 and `>=` counts all of them.
    let a = [3.0; 6];
    let test = permutation_test(&a, &a, &mean_difference, &config(300, 14)).unwrap();
    assert_eq!(test.p_value, 1.0);
}

#[test]
fn permutation_p_is_moderate_under_the_null() {
    // Same multiset in both groups: observed difference 0, permuted
    // differences scatter symmetrically around 0, so roughly half qualify.
    let a = normal_sample(50, 15);
    let mut b = a.clone();
    b.reverse();

    let test = permutation_test(&a, &b, &mean_difference, &config(2000, 16)).unwrap();
    assert!(
        test.p_value > 0.3 && test.p_value < 0.7,
        "p-value {} concentrated in a tail",
        test.p_value
    );
}

#[test]
fn permutation_never_duplicates_pool_elements() {
    // With distinct pooled values, each permuted group must hold distinct
    // elements; a with-replacement draw would eventually repeat one.
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [5.0, 6.0, 7.0, 8.0];
    let distinct_check = |x: &[f64], y: &[f64]| {
        let mut seen: Vec<f64> = x.iter().chain(y.iter()).copied().collect();
        seen.sort_by(f64::total_cmp);
        seen.dedup();
        assert_eq!(seen.len(), 8, "permutation repeated a pooled element");
        x.iter().sum::<f64>() - y.iter().sum::<f64>()
    };
    permutation_test(&a, &b, &distinct_check, &config(500, 17)).unwrap();
}
