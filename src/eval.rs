//! Output-quality checks: range, bucket uniformity, determinism.

use crate::alea::Alea;

#[inline]
pub fn in_unit_interval(v: f64) -> bool { (0.0..1.0).contains(&v) }

/// Fraction of samples inside [0, 1).
pub fn unit_interval_rate(samples: &[f64]) -> f64 {
    if samples.is_empty() { return 1.0; }
    let hit = samples.iter().filter(|v| in_unit_interval(**v)).count();
    (hit as f64) / (samples.len() as f64)
}

/// Histogram over `bins` equal buckets of [0, 1). Drifted values land in the edge buckets.
/// No buckets, no counts.
pub fn bucket_counts(samples: &[f64], bins: usize) -> Vec<usize> {
    if bins == 0 { return Vec::new(); }
    let mut counts = vec![0usize; bins];
    for &v in samples {
        let b = ((v * bins as f64).max(0.0) as usize).min(bins - 1);
        counts[b] += 1;
    }
    counts
}

/// Pearson chi-square statistic against a uniform distribution (bins - 1 degrees of freedom).
pub fn chi_square_uniform(samples: &[f64], bins: usize) -> f64 {
    if bins == 0 { return 0.0; }
    let counts = bucket_counts(samples, bins);
    let expected = samples.len() as f64 / bins as f64;
    if expected == 0.0 { return 0.0; }
    counts.iter().map(|&c| { let d = c as f64 - expected; d * d / expected }).sum()
}

/// Wilson score lower bound for a Bernoulli proportion.
pub fn wilson_lower_bound(successes: usize, trials: usize, z: f64) -> f64 {
    assert!(trials > 0);
    let n = trials as f64;
    let phat = (successes as f64) / n;
    let z2 = z * z;
    let denom = 1.0 + z2 / n;
    let center = phat + z2 / (2.0 * n);
    let margin = z * ((phat * (1.0 - phat) + z2 / (4.0 * n)) / n).sqrt();
    (center - margin) / denom
}

/// Index of the first of `n` outputs where two generators disagree (bitwise).
pub fn first_divergence(a: &mut Alea, b: &mut Alea, n: usize) -> Option<usize> {
    (0..n).find(|_| a.next_f64().to_bits() != b.next_f64().to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    fn random_seeds(rng: &mut StdRng) -> Vec<Seed> {
        let k = rng.gen_range(1..4);
        (0..k).map(|_| {
            if rng.gen::<bool>() {
                Seed::from(rng.gen::<f64>() * 1e6)
            } else {
                let len = rng.gen_range(0..12);
                Seed::from((0..len).map(|_| rng.gen::<char>()).collect::<String>())
            }
        }).collect()
    }

    #[test]
    fn determinism_over_ten_thousand_steps() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let seeds = random_seeds(&mut rng);
            let mut a = Alea::new(seeds.clone());
            let mut b = Alea::new(seeds.clone());
            assert_eq!(first_divergence(&mut a, &mut b, 10_000), None, "non-deterministic for {:?}", seeds);
        }
    }

    #[test]
    fn range_and_uniformity_from_fixed_seed() {
        let n = 100_000usize;
        let samples: Vec<f64> = Alea::new(["range"]).take(n).collect();

        let rate = unit_interval_rate(&samples);
        let hits = samples.iter().filter(|v| in_unit_interval(**v)).count();
        let lb = wilson_lower_bound(hits, n, 1.96);
        assert!(rate >= 0.9999 && lb >= 0.9995, "range rate/lower-bound too low: {:.6}/{:.6}", rate, lb);

        // any excursion must stay within rounding distance of the interval
        for &v in &samples { assert!(v > -1e-9 && v < 1.0 + 1e-9, "wild value {}", v); }

        // 99 degrees of freedom: 99.99th percentile is about 161
        let chi2 = chi_square_uniform(&samples, 100);
        assert!(chi2 < 161.0, "chi-square too high: {:.2}", chi2);
    }

    #[test]
    fn distinct_seeds_diverge_immediately() {
        let mut rng = StdRng::seed_from_u64(7);
        for i in 0..200u32 {
            let x: u64 = rng.gen();
            let mut a = Alea::new([Seed::from(x), Seed::from(i)]);
            let mut b = Alea::new([Seed::from(i), Seed::from(x)]);
            assert_eq!(first_divergence(&mut a, &mut b, 1), Some(0));
        }
    }

    #[test]
    fn buckets_clamp_edges() {
        let counts = bucket_counts(&[-1e-17, 0.0, 0.5, 0.999, 1.0], 4);
        assert_eq!(counts, vec![2, 0, 1, 2]);
        assert_eq!(unit_interval_rate(&[]), 1.0);
        assert!(bucket_counts(&[0.5], 0).is_empty());
        assert_eq!(chi_square_uniform(&[0.1, 0.2], 0), 0.0);
    }
}
