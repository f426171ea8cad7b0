// src/strategy/emsr.rs

use crate::error::ControlError;
use crate::model::forecast::DemandForecast;
use crate::strategy::quantile::inverse_normal_cdf;

/// Expected Marginal Seat Revenue heuristic for computing protection
/// levels from a demand forecast.
///
/// All three variants are pure functions over the forecast; the enum is
/// just a tag so callers can pick the heuristic at the call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Heuristic {
    /// Pairwise Littlewood comparisons, summed per class.
    EmsrA,
    /// Each class compared against one synthetic "all higher classes
    /// combined" class with a demand-weighted average fare.
    EmsrB,
    /// EMSR-b inflated by an up-sell factor: the fraction of rejected
    /// low-fare customers who buy up instead of walking away.
    EmsrRevise(f64),
}

impl Heuristic {
    /// Protection levels for the top `1..n` classes, `n - 1` entries.
    pub fn protection_levels(&self, forecast: &DemandForecast) -> Result<Vec<f64>, ControlError> {
        match *self {
            Heuristic::EmsrA => emsr_a(forecast),
            Heuristic::EmsrB => emsr_b(forecast),
            Heuristic::EmsrRevise(alpha) => emsr_revise(forecast, alpha),
        }
    }

    /// Protection levels extended with the full capacity as the last
    /// entry, so the result feeds straight into
    /// [`crate::model::policy::to_booking_limits`]. By definition the
    /// lowest class protects nothing beyond total capacity.
    pub fn full_protection_levels(
        &self,
        forecast: &DemandForecast,
    ) -> Result<Vec<f64>, ControlError> {
        let mut levels = self.protection_levels(forecast)?;
        levels.push(forecast.capacity);
        Ok(levels)
    }
}

/// Littlewood protection for a single class: the demand quantile at
/// which the marginal seat revenue drops to the lower fare.
fn protect_single(mu: f64, sigma: f64, prob: f64) -> Result<f64, ControlError> {
    Ok(mu + sigma * inverse_normal_cdf(prob)?)
}

/// EMSR-a: for each rank `j`, every higher class `i <= j` contributes an
/// independent Littlewood protection computed against class `j + 1`'s
/// fare; the contributions are summed and capped at capacity.
///
/// Returns `n - 1` protection levels, one per `j = 0..n-1`.
pub fn emsr_a(forecast: &DemandForecast) -> Result<Vec<f64>, ControlError> {
    let n = forecast.classes();
    let mut levels = Vec::with_capacity(n.saturating_sub(1));
    for j in 0..n - 1 {
        let mut protected = 0.0;
        for i in 0..=j {
            let prob = 1.0 - forecast.prices[j + 1] / forecast.prices[i];
            protected += protect_single(forecast.mu[i], forecast.sigma[i], prob)?;
        }
        levels.push(protected.min(forecast.capacity));
    }
    Ok(levels)
}

/// EMSR-b: for each rank `j`, the classes above it are merged into one
/// artificial class (summed mean, root-sum-square deviation, demand-
/// weighted average fare) and a single Littlewood protection is computed
/// against that aggregate, capped at capacity.
///
/// Returns `n - 1` protection levels, one per `j = 1..n`.
pub fn emsr_b(forecast: &DemandForecast) -> Result<Vec<f64>, ControlError> {
    let n = forecast.classes();
    let mut levels = Vec::with_capacity(n.saturating_sub(1));
    for j in 1..n {
        let (agg_mu, agg_sigma, agg_price) = aggregate_class(forecast, j)?;
        let prob = 1.0 - forecast.prices[j] / agg_price;
        let protected = protect_single(agg_mu, agg_sigma, prob)?;
        levels.push(protected.min(forecast.capacity));
    }
    Ok(levels)
}

/// EMSR-b adjusted for up-sell: identical aggregation, but the raw
/// protection is divided by `1 - alpha` before the capacity cap, so a
/// larger up-sell fraction protects more seats for the higher fares.
pub fn emsr_revise(forecast: &DemandForecast, alpha: f64) -> Result<Vec<f64>, ControlError> {
    if !(0.0..1.0).contains(&alpha) {
        return Err(ControlError::InvalidParameter(format!(
            "up-sell factor alpha must lie in [0, 1), got {alpha}"
        )));
    }
    let n = forecast.classes();
    let mut levels = Vec::with_capacity(n.saturating_sub(1));
    for j in 1..n {
        let (agg_mu, agg_sigma, agg_price) = aggregate_class(forecast, j)?;
        let prob = 1.0 - forecast.prices[j] / agg_price;
        let protected = protect_single(agg_mu, agg_sigma, prob)? / (1.0 - alpha);
        levels.push(protected.min(forecast.capacity));
    }
    Ok(levels)
}

/// Merges classes `0..j` into the artificial class used by EMSR-b:
/// summed demand, independent-variance deviation, and the demand-
/// weighted average of their fares.
fn aggregate_class(
    forecast: &DemandForecast,
    j: usize,
) -> Result<(f64, f64, f64), ControlError> {
    let agg_mu: f64 = forecast.mu[..j].iter().sum();
    if agg_mu <= 0.0 {
        return Err(ControlError::InvalidParameter(format!(
            "aggregate mean demand of the top {j} classes must be positive to weight fares"
        )));
    }
    let agg_sigma = forecast.sigma[..j].iter().map(|s| s * s).sum::<f64>().sqrt();
    let agg_price = forecast.mu[..j]
        .iter()
        .zip(&forecast.prices[..j])
        .map(|(m, p)| m * p)
        .sum::<f64>()
        / agg_mu;
    Ok((agg_mu, agg_sigma, agg_price))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The four-class example from van Ryzin & Talluri, also used by the
    // original worked scenario: answers known to four decimals.
    fn book_example() -> DemandForecast {
        DemandForecast::new(
            vec![17.3, 45.1, 39.6, 34.0],
            vec![5.8, 15.0, 13.2, 11.3],
            vec![1050.0, 950.0, 699.0, 520.0],
            100.0,
        )
        .unwrap()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-6, "got {actual:?}, expected {expected:?}");
        }
    }

    #[test]
    fn emsr_a_matches_published_levels() {
        let levels = emsr_a(&book_example()).unwrap();
        assert_close(&levels, &[9.706_804_042, 50.460_693_186, 91.631_695_526]);
    }

    #[test]
    fn emsr_b_matches_published_levels() {
        let levels = emsr_b(&book_example()).unwrap();
        assert_close(&levels, &[9.706_804_042, 53.267_964_550, 96.834_650_427]);
    }

    #[test]
    fn emsr_revise_inflates_and_caps_at_capacity() {
        let levels = emsr_revise(&book_example(), 0.05).unwrap();
        // The last level would be 101.93 without the cap.
        assert_close(&levels, &[10.217_688_465, 56.071_541_631, 100.0]);
    }

    #[test]
    fn revise_with_zero_alpha_is_plain_emsr_b() {
        let f = book_example();
        assert_close(&emsr_revise(&f, 0.0).unwrap(), &emsr_b(&f).unwrap());
    }

    #[test]
    fn larger_alpha_never_protects_less() {
        let f = book_example();
        let low = emsr_revise(&f, 0.02).unwrap();
        let high = emsr_revise(&f, 0.10).unwrap();
        for (lo, hi) in low.iter().zip(&high) {
            assert!(hi >= lo);
        }
    }

    #[test]
    fn all_heuristics_respect_the_capacity_cap() {
        // A tiny cabin forces every level onto the cap.
        let f = DemandForecast::new(
            vec![17.3, 45.1, 39.6, 34.0],
            vec![5.8, 15.0, 13.2, 11.3],
            vec![1050.0, 950.0, 699.0, 520.0],
            5.0,
        )
        .unwrap();
        for h in [Heuristic::EmsrA, Heuristic::EmsrB, Heuristic::EmsrRevise(0.3)] {
            for level in h.protection_levels(&f).unwrap() {
                assert!(level <= 5.0);
            }
        }
    }

    #[test]
    fn rejects_alpha_outside_unit_interval() {
        let f = book_example();
        for alpha in [1.0, 1.5, -0.01] {
            let err = emsr_revise(&f, alpha).unwrap_err();
            assert!(matches!(err, ControlError::InvalidParameter(_)));
        }
    }

    #[test]
    fn heuristic_tag_dispatches_to_the_same_numbers() {
        let f = book_example();
        assert_close(
            &Heuristic::EmsrA.protection_levels(&f).unwrap(),
            &emsr_a(&f).unwrap(),
        );
        assert_close(
            &Heuristic::EmsrRevise(0.05).protection_levels(&f).unwrap(),
            &emsr_revise(&f, 0.05).unwrap(),
        );
    }

    #[test]
    fn full_levels_end_at_capacity() {
        let f = book_example();
        let full = Heuristic::EmsrB.full_protection_levels(&f).unwrap();
        assert_eq!(full.len(), f.classes());
        assert!((full[full.len() - 1] - f.capacity).abs() < 1e-12);
    }

    #[test]
    fn two_class_littlewood_agrees_across_variants() {
        // With two classes the aggregate class is just class 0, so
        // EMSR-a and EMSR-b collapse to the same Littlewood level.
        let f = DemandForecast::new(
            vec![20.0, 60.0],
            vec![6.0, 15.0],
            vec![800.0, 450.0],
            120.0,
        )
        .unwrap();
        let a = emsr_a(&f).unwrap();
        let b = emsr_b(&f).unwrap();
        assert_close(&a, &b);
    }
}
