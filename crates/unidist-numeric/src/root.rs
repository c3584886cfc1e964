//! Bracketed root finding and extremum search
//!
//! [`find_root`] is Brent's method: bisection interleaved with secant and
//! inverse-quadratic interpolation, falling back to bisection whenever an
//! interpolated step would leave the bracket. [`find_maximum`] locates the
//! maximum of a unimodal function by golden-section search.
//!
//! Both require a bracket up front. Callers that only have a guess (the
//! inverse-CDF path on unbounded supports) first grow one with
//! [`expand_bracket`]; the root finder itself never steps outside the
//! interval it was given.
//!
//! Target functions are fallible (`FnMut(f64) -> Result<f64>`) because in
//! this crate they are frequently numerically-derived quantities: a CDF
//! obtained by quadrature can itself fail to converge, and that failure must
//! reach the original caller.

use log::trace;
use unidist_core::{Error, Result};

/// Settings for root finding and extremum search
#[derive(Debug, Clone, Copy)]
pub struct RootConfig {
    /// Convergence tolerance on the bracket width
    pub x_tol: f64,
    /// Convergence tolerance on `|f(x) - target|`
    pub f_tol: f64,
    /// Maximum number of iterations
    pub max_iter: usize,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            x_tol: 1e-10,
            f_tol: 1e-12,
            max_iter: 128,
        }
    }
}

/// Find `x` with `f(x) = target` inside the bracket `[lower, upper]`.
///
/// `f(lower)` and `f(upper)` must straddle the target. The method combines
/// bisection with secant / inverse-quadratic steps; an interpolated point
/// outside the bracket (or converging too slowly) is replaced by a bisection
/// step, which guarantees termination.
///
/// # Errors
///
/// [`Error::InvalidBracket`] if the interval does not straddle the target,
/// [`Error::Convergence`] if the iteration budget runs out, and any error
/// produced by `f` itself.
///
/// # Examples
///
/// ```
/// use unidist_numeric::{find_root, RootConfig};
///
/// let root = find_root(|x| Ok(x * x), 2.0, 0.0, 2.0, &RootConfig::default()).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn find_root<F>(
    mut f: F,
    target: f64,
    lower: f64,
    upper: f64,
    config: &RootConfig,
) -> Result<f64>
where
    F: FnMut(f64) -> Result<f64>,
{
    if !(lower < upper) {
        return Err(Error::InvalidArgument(format!(
            "root bracket [{lower}, {upper}] is empty"
        )));
    }

    let mut a = lower;
    let mut b = upper;
    let mut fa = f(a)? - target;
    let mut fb = f(b)? - target;

    if fa.is_nan() || fb.is_nan() {
        return Err(Error::invalid_argument(
            "target function is not finite at the bracket endpoints",
        ));
    }
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }
    if (fa > 0.0) == (fb > 0.0) {
        return Err(Error::InvalidBracket {
            lower,
            upper,
            target,
        });
    }

    // Keep b the better of the two approximations
    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c = a;
    let mut fc = fa;
    let mut step_before_last = b - a;
    let mut bisected = true;

    for iteration in 0..config.max_iter {
        if fb.abs() <= config.f_tol || (b - a).abs() <= config.x_tol {
            trace!("root converged to {b} after {iteration} iterations");
            return Ok(b);
        }

        let mut s = if fa != fc && fb != fc {
            // Inverse quadratic interpolation through (a, fa), (b, fb), (c, fc)
            a * fb * fc / ((fa - fb) * (fa - fc))
                + b * fa * fc / ((fb - fa) * (fb - fc))
                + c * fa * fb / ((fc - fa) * (fc - fb))
        } else {
            // Secant step
            b - fb * (b - a) / (fb - fa)
        };

        // Reject the interpolated point and bisect instead when it falls
        // outside the inner three quarters of the bracket or shrinks the
        // interval too slowly to guarantee progress
        let inner = (3.0 * a + b) / 4.0;
        let out_of_range = if inner < b {
            s < inner || s > b
        } else {
            s > inner || s < b
        };
        let slow_with_bisection = bisected && (s - b).abs() >= (b - c).abs() / 2.0;
        let slow_without = !bisected && (s - b).abs() >= step_before_last.abs() / 2.0;
        let stalled_with = bisected && (b - c).abs() < config.x_tol;
        let stalled_without = !bisected && step_before_last.abs() < config.x_tol;

        if out_of_range || slow_with_bisection || slow_without || stalled_with || stalled_without {
            s = 0.5 * (a + b);
            bisected = true;
        } else {
            bisected = false;
        }

        let fs = f(s)? - target;

        step_before_last = b - c;
        c = b;
        fc = fb;

        if (fa > 0.0) != (fs > 0.0) {
            b = s;
            fb = fs;
        } else {
            a = s;
            fa = fs;
        }

        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }
    }

    Err(Error::convergence("Brent root search", config.max_iter))
}

/// Inverse golden ratio, `(sqrt(5) - 1) / 2`
const INV_PHI: f64 = 0.618_033_988_749_894_8;

/// Locate the maximum of a unimodal `f` on `[lower, upper]`.
///
/// Golden-section search; the bracket shrinks by the golden ratio each
/// iteration, so convergence is guaranteed within the budget for any
/// reasonable tolerance. If `f` is not unimodal on the interval the result
/// is some local maximum.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for an empty interval, [`Error::Convergence`]
/// if the bracket fails to shrink below tolerance within the budget.
pub fn find_maximum<F>(mut f: F, lower: f64, upper: f64, config: &RootConfig) -> Result<f64>
where
    F: FnMut(f64) -> f64,
{
    if !(lower < upper) {
        return Err(Error::InvalidArgument(format!(
            "search interval [{lower}, {upper}] is empty"
        )));
    }

    let mut a = lower;
    let mut b = upper;
    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut fc = f(c);
    let mut fd = f(d);

    for iteration in 0..config.max_iter {
        if (b - a).abs() <= config.x_tol * a.abs().max(b.abs()).max(1.0) {
            trace!("maximum located near {} after {iteration} iterations", 0.5 * (a + b));
            return Ok(0.5 * (a + b));
        }

        if fc > fd {
            b = d;
            d = c;
            fd = fc;
            c = b - INV_PHI * (b - a);
            fc = f(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + INV_PHI * (b - a);
            fd = f(d);
        }
    }

    Err(Error::convergence("golden-section search", config.max_iter))
}

/// Doubling cap; enough to sweep the whole finite f64 range from unit seeds
const MAX_DOUBLINGS: usize = 1100;

/// Grow `[lower, upper]` outward by repeated doubling until it brackets
/// `target` under the monotone non-decreasing function `f`.
///
/// This is the explicit pre-step for inverse-CDF lookup on unbounded
/// supports: the root finder itself refuses non-bracketing intervals, so the
/// caller expands first. Endpoints on a known support bound are passed with
/// the corresponding `grow_*` flag off and never move.
///
/// # Errors
///
/// [`Error::Convergence`] if the bracket leaves the representable range
/// before straddling the target, plus any error produced by `f`.
pub fn expand_bracket<F>(
    mut f: F,
    target: f64,
    lower: f64,
    upper: f64,
    grow_lower: bool,
    grow_upper: bool,
) -> Result<(f64, f64)>
where
    F: FnMut(f64) -> Result<f64>,
{
    if !(lower < upper) {
        return Err(Error::InvalidArgument(format!(
            "bracket seed [{lower}, {upper}] is empty"
        )));
    }

    let mut lo = lower;
    let mut hi = upper;

    if grow_lower {
        let mut step = (upper - lower).max(1.0);
        let mut steps = 0usize;
        while f(lo)? > target {
            lo -= step;
            step *= 2.0;
            steps += 1;
            if steps > MAX_DOUBLINGS || !lo.is_finite() {
                return Err(Error::convergence("bracket expansion", steps));
            }
        }
    }

    if grow_upper {
        let mut step = (upper - lower).max(1.0);
        let mut steps = 0usize;
        while f(hi)? < target {
            hi += step;
            step *= 2.0;
            steps += 1;
            if steps > MAX_DOUBLINGS || !hi.is_finite() {
                return Err(Error::convergence("bracket expansion", steps));
            }
        }
    }

    trace!("expanded bracket to [{lo}, {hi}] for target {target}");
    Ok((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_find_root_sqrt2() {
        let root = find_root(|x| Ok(x * x), 2.0, 0.0, 2.0, &RootConfig::default()).unwrap();
        assert_relative_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn test_find_root_at_endpoint() {
        let root = find_root(|x| Ok(x), 0.0, 0.0, 1.0, &RootConfig::default()).unwrap();
        assert_eq!(root, 0.0);
    }

    #[test]
    fn test_find_root_transcendental() {
        // x e^x = 1 has its root at the omega constant
        let root = find_root(|x| Ok(x * x.exp()), 1.0, 0.0, 1.0, &RootConfig::default()).unwrap();
        assert_relative_eq!(root, 0.567_143_290_409_783_8, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_bracket() {
        let res = find_root(|x| Ok(x), 5.0, 0.0, 1.0, &RootConfig::default());
        assert!(matches!(res, Err(Error::InvalidBracket { .. })));
    }

    #[test]
    fn test_root_budget_exhaustion() {
        let config = RootConfig {
            x_tol: 1e-14,
            f_tol: 1e-15,
            max_iter: 2,
        };
        let res = find_root(|x| Ok(x * x * x - x - 2.0), 0.0, 1.0, 2.0, &config);
        assert!(matches!(res, Err(Error::Convergence { .. })));
    }

    #[test]
    fn test_error_propagates_from_function() {
        let res = find_root(
            |_| Err(Error::convergence("inner evaluation", 7)),
            0.0,
            0.0,
            1.0,
            &RootConfig::default(),
        );
        assert!(matches!(res, Err(Error::Convergence { .. })));
    }

    #[test]
    fn test_find_maximum_parabola() {
        let m = find_maximum(
            |x| -(x - 1.0) * (x - 1.0),
            0.0,
            3.0,
            &RootConfig::default(),
        )
        .unwrap();
        assert_relative_eq!(m, 1.0, epsilon = 1e-7);
    }

    #[test]
    fn test_find_maximum_at_boundary() {
        // Decreasing function: the maximum sits at the lower endpoint
        let m = find_maximum(|x| (-x).exp(), 0.0, 5.0, &RootConfig::default()).unwrap();
        assert!(m < 1e-6);
    }

    #[test]
    fn test_expand_bracket() {
        let cdf = |x: f64| Ok(unidist_core::math::normal::cdf(x));
        let (lo, hi) = expand_bracket(cdf, 0.999, -1.0, 1.0, true, true).unwrap();
        assert!(unidist_core::math::normal::cdf(lo) <= 0.999);
        assert!(unidist_core::math::normal::cdf(hi) >= 0.999);

        let root = find_root(cdf, 0.999, lo, hi, &RootConfig::default()).unwrap();
        assert_relative_eq!(root, 3.090_232_306_167_813, epsilon = 1e-4);
    }

    #[test]
    fn test_expand_bracket_fixed_side() {
        // Lower end pinned at a support bound must not move
        let cdf = |x: f64| Ok(1.0 - (-x).exp());
        let (lo, hi) = expand_bracket(cdf, 0.99, 0.0, 1.0, false, true).unwrap();
        assert_eq!(lo, 0.0);
        assert!(1.0 - (-hi as f64).exp() >= 0.99);
    }
}
