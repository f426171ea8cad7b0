// src/strategy/quantile.rs

use crate::error::ControlError;

/// Inverse Cumulative Distribution Function (quantile function) for the
/// Standard Normal Distribution.
///
/// Rational approximation due to Peter Acklam; the relative error is
/// below 1.15e-9 over the whole open interval, which is enough to
/// reproduce published EMSR protection levels to well past four
/// decimals.
///
/// The function is only defined on the open interval (0, 1). The tails
/// are mathematically +/- infinity, so anything outside is reported as a
/// domain error rather than silently turned into an infinite protection
/// level.
pub fn inverse_normal_cdf(p: f64) -> Result<f64, ControlError> {
    if !(p > 0.0 && p < 1.0) {
        return Err(ControlError::NumericDomain { prob: p });
    }

    // Coefficients for the central rational approximation.
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_690e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    // Coefficients for the tail approximation.
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];

    // Break-point between the central region and the tails.
    const P_LOW: f64 = 0.02425;

    let x = if p < P_LOW {
        // Lower tail
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        // Central region
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        // Upper tail, by symmetry
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -((((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0))
    };

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_is_zero() {
        assert!(inverse_normal_cdf(0.5).unwrap().abs() < 1e-9);
    }

    #[test]
    fn matches_standard_z_scores() {
        let cases = [
            (0.975, 1.959_963_985),
            (0.95, 1.644_853_627),
            (0.9, 1.281_551_566),
            (0.841_344_746, 1.0),
            (0.1, -1.281_551_566),
            (0.01, -2.326_347_874),
        ];
        for (p, z) in cases {
            let got = inverse_normal_cdf(p).unwrap();
            assert!((got - z).abs() < 1e-7, "ppf({p}) = {got}, expected {z}");
        }
    }

    #[test]
    fn symmetric_around_half() {
        for p in [0.01, 0.1, 0.3, 0.45] {
            let lo = inverse_normal_cdf(p).unwrap();
            let hi = inverse_normal_cdf(1.0 - p).unwrap();
            assert!((lo + hi).abs() < 1e-9);
        }
    }

    #[test]
    fn strictly_increasing_across_the_break_points() {
        let mut prev = f64::NEG_INFINITY;
        let mut p = 0.001;
        while p < 1.0 {
            let z = inverse_normal_cdf(p).unwrap();
            assert!(z > prev, "not increasing at p = {p}");
            prev = z;
            p += 0.001;
        }
    }

    #[test]
    fn closed_boundaries_are_domain_errors() {
        for p in [0.0, 1.0, -0.1, 1.1, f64::NAN] {
            let err = inverse_normal_cdf(p).unwrap_err();
            assert!(matches!(err, ControlError::NumericDomain { .. }));
        }
    }
}
