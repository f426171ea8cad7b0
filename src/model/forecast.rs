// src/model/forecast.rs

use crate::error::ControlError;

/// Per-class demand forecast for a single flight leg.
///
/// All vectors are indexed by fare-class rank: rank 0 is the highest
/// fare, rank `n-1` the lowest. The constructor enforces that ordering
/// (strictly decreasing positive fares), which in turn guarantees that
/// every Littlewood probability `1 - p_low / p_high` formed by the EMSR
/// heuristics lands strictly inside (0, 1).
#[derive(Debug, Clone)]
pub struct DemandForecast {
    pub mu: Vec<f64>,
    pub sigma: Vec<f64>,
    pub prices: Vec<f64>,
    pub capacity: f64,
}

impl DemandForecast {
    pub fn new(
        mu: Vec<f64>,
        sigma: Vec<f64>,
        prices: Vec<f64>,
        capacity: f64,
    ) -> Result<Self, ControlError> {
        let n = mu.len();
        if n == 0 {
            return Err(ControlError::InvalidDimensions { expected: 1, actual: 0 });
        }
        if sigma.len() != n {
            return Err(ControlError::InvalidDimensions { expected: n, actual: sigma.len() });
        }
        if prices.len() != n {
            return Err(ControlError::InvalidDimensions { expected: n, actual: prices.len() });
        }
        if capacity < 0.0 || !capacity.is_finite() {
            return Err(ControlError::InvalidParameter(format!(
                "capacity must be a non-negative finite number, got {capacity}"
            )));
        }
        for (k, &s) in sigma.iter().enumerate() {
            if !(s > 0.0) || !s.is_finite() {
                return Err(ControlError::InvalidParameter(format!(
                    "sigma[{k}] must be positive and finite, got {s}"
                )));
            }
        }
        for (k, &p) in prices.iter().enumerate() {
            if !(p > 0.0) || !p.is_finite() {
                return Err(ControlError::InvalidParameter(format!(
                    "prices[{k}] must be positive and finite, got {p}"
                )));
            }
            // Rank 0 is the highest fare; fares must strictly decrease.
            if k > 0 && p >= prices[k - 1] {
                return Err(ControlError::InvalidParameter(format!(
                    "prices must be strictly decreasing: prices[{}] = {} >= prices[{}] = {}",
                    k,
                    p,
                    k - 1,
                    prices[k - 1]
                )));
            }
        }
        for (k, &m) in mu.iter().enumerate() {
            if m < 0.0 || !m.is_finite() {
                return Err(ControlError::InvalidParameter(format!(
                    "mu[{k}] must be non-negative and finite, got {m}"
                )));
            }
        }
        Ok(Self { mu, sigma, prices, capacity })
    }

    /// Number of fare classes.
    pub fn classes(&self) -> usize {
        self.mu.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_example() -> Result<DemandForecast, ControlError> {
        DemandForecast::new(
            vec![17.3, 45.1, 39.6, 34.0],
            vec![5.8, 15.0, 13.2, 11.3],
            vec![1050.0, 950.0, 699.0, 520.0],
            100.0,
        )
    }

    #[test]
    fn accepts_well_formed_forecast() {
        let f = book_example().unwrap();
        assert_eq!(f.classes(), 4);
    }

    #[test]
    fn rejects_empty_vectors() {
        let err = DemandForecast::new(vec![], vec![], vec![], 100.0).unwrap_err();
        assert_eq!(err, ControlError::InvalidDimensions { expected: 1, actual: 0 });
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = DemandForecast::new(
            vec![17.3, 45.1],
            vec![5.8],
            vec![1050.0, 950.0],
            100.0,
        )
        .unwrap_err();
        assert_eq!(err, ControlError::InvalidDimensions { expected: 2, actual: 1 });
    }

    #[test]
    fn rejects_non_positive_sigma() {
        let err = DemandForecast::new(
            vec![17.3, 45.1],
            vec![5.8, 0.0],
            vec![1050.0, 950.0],
            100.0,
        )
        .unwrap_err();
        assert!(matches!(err, ControlError::InvalidParameter(_)));
    }

    #[test]
    fn rejects_non_decreasing_prices() {
        let err = DemandForecast::new(
            vec![17.3, 45.1],
            vec![5.8, 15.0],
            vec![950.0, 950.0],
            100.0,
        )
        .unwrap_err();
        assert!(matches!(err, ControlError::InvalidParameter(_)));
    }

    #[test]
    fn rejects_negative_capacity() {
        let err = DemandForecast::new(
            vec![17.3, 45.1],
            vec![5.8, 15.0],
            vec![1050.0, 950.0],
            -1.0,
        )
        .unwrap_err();
        assert!(matches!(err, ControlError::InvalidParameter(_)));
    }
}
