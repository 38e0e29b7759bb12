//! Derivative-free minimization for smoothing-parameter selection.

/// Configuration for the bounded coordinate-descent search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of full passes over the coordinates.
    pub max_sweeps: usize,
    /// Relative improvement below which the search stops.
    pub tolerance: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_sweeps: 40,
            tolerance: 1e-7,
        }
    }
}

/// Result of a bounded minimization.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best point found.
    pub point: Vec<f64>,
    /// The objective value at that point.
    pub value: f64,
    /// Number of coordinate sweeps performed.
    pub sweeps: usize,
    /// Whether the improvement per sweep fell below the tolerance.
    pub converged: bool,
}

/// Minimize an objective over a box by cyclic coordinate descent.
///
/// Each pass runs a golden-section line search along every coordinate in
/// turn, holding the others fixed. Well suited to smooth low-dimensional
/// objectives such as the smoothing-parameter SSE surface.
///
/// # Arguments
/// * `objective` - The function to minimize
/// * `initial` - Starting point; clamped into the bounds
/// * `bounds` - Inclusive `(low, high)` interval per coordinate
/// * `config` - Search configuration
///
/// # Example
/// ```
/// use retail_forecast::utils::optimization::{minimize_bounded, SearchConfig};
///
/// // Minimize (x-2)^2 + (y+1)^2 over [-5, 5] x [-5, 5]
/// let result = minimize_bounded(
///     |p| (p[0] - 2.0).powi(2) + (p[1] + 1.0).powi(2),
///     &[0.0, 0.0],
///     &[(-5.0, 5.0), (-5.0, 5.0)],
///     SearchConfig::default(),
/// );
///
/// assert!(result.converged);
/// assert!((result.point[0] - 2.0).abs() < 1e-3);
/// assert!((result.point[1] + 1.0).abs() < 1e-3);
/// ```
pub fn minimize_bounded<F>(
    objective: F,
    initial: &[f64],
    bounds: &[(f64, f64)],
    config: SearchConfig,
) -> SearchResult
where
    F: Fn(&[f64]) -> f64,
{
    if initial.is_empty() || initial.len() != bounds.len() {
        return SearchResult {
            point: vec![],
            value: f64::NAN,
            sweeps: 0,
            converged: false,
        };
    }

    let mut point: Vec<f64> = initial
        .iter()
        .zip(bounds.iter())
        .map(|(&x, &(lo, hi))| x.clamp(lo, hi))
        .collect();
    let mut best = objective(&point);

    let mut sweeps = 0;
    let mut converged = false;

    while sweeps < config.max_sweeps {
        sweeps += 1;
        let before = best;

        for i in 0..point.len() {
            let (lo, hi) = bounds[i];
            if hi <= lo {
                continue;
            }
            let line_tolerance = (hi - lo) * 1e-4;
            let mut candidate = point.clone();
            let (x, fx) = golden_section(
                |v| {
                    candidate[i] = v;
                    objective(&candidate)
                },
                lo,
                hi,
                line_tolerance,
            );
            if fx < best {
                point[i] = x;
                best = fx;
            }
        }

        if (before - best).abs() <= config.tolerance * (1.0 + best.abs()) {
            converged = true;
            break;
        }
    }

    SearchResult {
        point,
        value: best,
        sweeps,
        converged,
    }
}

/// Golden-section search for the minimum of `f` on `[lo, hi]`.
fn golden_section<F>(mut f: F, lo: f64, hi: f64, tolerance: f64) -> (f64, f64)
where
    F: FnMut(f64) -> f64,
{
    const INV_PHI: f64 = 0.618_033_988_749_894_8;

    let mut a = lo;
    let mut b = hi;
    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut fc = f(c);
    let mut fd = f(d);

    while (b - a) > tolerance {
        if fc < fd {
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

    let mid = 0.5 * (a + b);
    let fmid = f(mid);
    (mid, fmid)
}
