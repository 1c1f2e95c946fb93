//! Standard normal distribution kernels shared by every pricing formula.

/// Standard normal probability density `phi(x) = e^(-x^2/2) / sqrt(2*pi)`.
pub fn normal_pdf(x: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal cumulative distribution.
///
/// Abramowitz & Stegun 7.1.26 rational approximation, evaluated on `|x|` and
/// reflected for negative arguments. Absolute error stays below 1e-7 across
/// the `d1`/`d2` range that the Black-Scholes formulas produce in practice
/// (roughly `|x| <= 8`).
pub fn normal_cdf(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.231_641_9 * z);
    let poly = t
        * (0.319_381_530
            + t * (-0.356_563_782
                + t * (1.781_477_937 + t * (-1.821_255_978 + t * 1.330_274_429))));
    let approx = 1.0 - normal_pdf(z) * poly;
    if x >= 0.0 { approx } else { 1.0 - approx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pdf_reference_values() {
        assert_relative_eq!(normal_pdf(0.0), 0.398_942_280_401_432_7, epsilon = 1e-15);
        assert_relative_eq!(normal_pdf(1.0), 0.241_970_724_519_143_37, epsilon = 1e-15);
        assert_relative_eq!(normal_pdf(-1.0), normal_pdf(1.0), epsilon = 1e-15);
    }

    #[test]
    fn cdf_reference_values_within_1e7() {
        // Abramowitz & Stegun table 26.1 values.
        let cases = [
            (0.0, 0.5),
            (0.5, 0.691_462_461_274_013),
            (1.0, 0.841_344_746_068_543),
            (1.5, 0.933_192_798_731_142),
            (2.0, 0.977_249_868_051_821),
            (3.0, 0.998_650_101_968_370),
            (4.0, 0.999_968_328_758_167),
        ];
        for (x, expected) in cases {
            assert!(
                (normal_cdf(x) - expected).abs() < 1e-7,
                "cdf({x}) off by more than 1e-7"
            );
        }
    }

    #[test]
    fn cdf_reflection_identity() {
        for x in [0.25, 0.75, 1.3, 2.6, 5.0] {
            assert_relative_eq!(normal_cdf(-x), 1.0 - normal_cdf(x), epsilon = 1e-12);
        }
    }

    #[test]
    fn cdf_saturates_in_the_tails() {
        assert!(normal_cdf(8.0) > 1.0 - 1e-9);
        assert!(normal_cdf(-8.0) < 1e-9);
    }
}
