//! Holt-Winters forecasting model.
//!
//! Triple exponential smoothing with additive trend and additive
//! seasonality, the standard choice for monthly sales series whose
//! seasonal swings stay roughly constant in size.

use crate::core::MonthlySeries;
use crate::error::{ForecastError, Result};
use crate::utils::optimization::{minimize_bounded, SearchConfig};

/// Smoothing parameters are kept strictly inside the unit interval.
const PARAM_MIN: f64 = 0.0001;
const PARAM_MAX: f64 = 0.9999;

/// Holt-Winters forecaster.
///
/// The model equations:
/// - Level: `l_t = α(y_t - s_{t-m}) + (1-α)(l_{t-1} + b_{t-1})`
/// - Trend: `b_t = β(l_t - l_{t-1}) + (1-β)b_{t-1}`
/// - Seasonal: `s_t = γ(y_t - l_t) + (1-γ)s_{t-m}`
/// - Forecast: `ŷ_{t+h} = l_t + h*b_t + s_{t+h-m}`
///
/// Fitting requires at least two full seasonal cycles so the initial
/// trend and seasonal indices can be estimated from data.
///
/// # Example
/// ```
/// use retail_forecast::core::MonthlySeries;
/// use retail_forecast::models::HoltWinters;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Three years of a flat monthly series.
/// let observations: Vec<(NaiveDate, Decimal)> = (0..36)
///     .map(|i| {
///         let date = NaiveDate::from_ymd_opt(2020 + i / 12, (i % 12) as u32 + 1, 1).unwrap();
///         (date, Decimal::from(100))
///     })
///     .collect();
/// let series = MonthlySeries::from_observations(&observations).unwrap();
///
/// let mut model = HoltWinters::new(0.3, 0.1, 0.1, 12);
/// model.fit(&series).unwrap();
/// let forecast = model.predict(6).unwrap();
/// assert_eq!(forecast.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct HoltWinters {
    /// Level smoothing parameter (0 < alpha < 1).
    alpha: Option<f64>,
    /// Trend smoothing parameter (0 < beta < 1).
    beta: Option<f64>,
    /// Seasonal smoothing parameter (0 < gamma < 1).
    gamma: Option<f64>,
    /// Seasonal period.
    seasonal_period: usize,
    /// Whether to optimize parameters during fit.
    optimize: bool,
    /// Current level state.
    level: Option<f64>,
    /// Current trend state.
    trend: Option<f64>,
    /// Seasonal indices.
    seasonals: Option<Vec<f64>>,
    /// Fitted values.
    fitted: Option<Vec<f64>>,
    /// Residuals.
    residuals: Option<Vec<f64>>,
    /// Original series length.
    n: usize,
}

impl HoltWinters {
    /// Create a model with fixed smoothing parameters.
    ///
    /// Parameters are clamped into the open unit interval.
    pub fn new(alpha: f64, beta: f64, gamma: f64, seasonal_period: usize) -> Self {
        Self {
            alpha: Some(alpha.clamp(PARAM_MIN, PARAM_MAX)),
            beta: Some(beta.clamp(PARAM_MIN, PARAM_MAX)),
            gamma: Some(gamma.clamp(PARAM_MIN, PARAM_MAX)),
            seasonal_period,
            optimize: false,
            level: None,
            trend: None,
            seasonals: None,
            fitted: None,
            residuals: None,
            n: 0,
        }
    }

    /// Create a model that selects smoothing parameters by minimizing
    /// the in-sample sum of squared errors during [`fit`](Self::fit).
    pub fn auto(seasonal_period: usize) -> Self {
        Self {
            alpha: None,
            beta: None,
            gamma: None,
            seasonal_period,
            optimize: true,
            level: None,
            trend: None,
            seasonals: None,
            fitted: None,
            residuals: None,
            n: 0,
        }
    }

    /// Get the level smoothing parameter.
    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    /// Get the trend smoothing parameter.
    pub fn beta(&self) -> Option<f64> {
        self.beta
    }

    /// Get the seasonal smoothing parameter.
    pub fn gamma(&self) -> Option<f64> {
        self.gamma
    }

    /// Get the seasonal period.
    pub fn seasonal_period(&self) -> usize {
        self.seasonal_period
    }

    /// Get the current level, if fitted.
    pub fn level(&self) -> Option<f64> {
        self.level
    }

    /// Get the current trend, if fitted.
    pub fn trend(&self) -> Option<f64> {
        self.trend
    }

    /// Get the seasonal indices, if fitted.
    pub fn seasonals(&self) -> Option<&[f64]> {
        self.seasonals.as_deref()
    }

    /// Get the in-sample fitted values, if fitted.
    ///
    /// The first seasonal cycle is used for initialization and carries
    /// `NaN` entries.
    pub fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    /// Get the in-sample residuals, if fitted.
    pub fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    /// Initialize state from the first complete season(s).
    fn initialize_state(values: &[f64], period: usize) -> (f64, f64, Vec<f64>) {
        // Initial level: average of the first season.
        let first_season = &values[..period];
        let level = first_season.iter().sum::<f64>() / period as f64;

        // Initial trend: average seasonal difference across the first two seasons.
        let trend = if values.len() >= 2 * period {
            let sum: f64 = (0..period)
                .map(|i| (values[period + i] - values[i]) / period as f64)
                .sum();
            sum / period as f64
        } else {
            0.0
        };

        // Initial seasonal indices: first-season deviations from the level.
        let mut seasonals: Vec<f64> = first_season.iter().map(|y| y - level).collect();
        Self::normalize_seasonals(&mut seasonals);

        (level, trend, seasonals)
    }

    /// Normalize seasonal indices to sum to zero.
    fn normalize_seasonals(seasonals: &mut [f64]) {
        let period = seasonals.len();
        if period == 0 {
            return;
        }
        let adjustment = seasonals.iter().sum::<f64>() / period as f64;
        for s in seasonals.iter_mut() {
            *s -= adjustment;
        }
    }

    /// One-step-ahead sum of squared errors for the given parameters.
    fn calculate_sse(values: &[f64], alpha: f64, beta: f64, gamma: f64, period: usize) -> f64 {
        if values.len() < period {
            return f64::MAX;
        }

        let (mut level, mut trend, mut seasonals) = Self::initialize_state(values, period);
        let mut sse = 0.0;

        for (t, &y) in values.iter().enumerate().skip(period) {
            let season_idx = t % period;
            let s = seasonals[season_idx];

            let forecast = level + trend + s;
            let error = y - forecast;
            sse += error * error;

            let level_prev = level;
            level = alpha * (y - s) + (1.0 - alpha) * (level_prev + trend);
            trend = beta * (level - level_prev) + (1.0 - beta) * trend;
            seasonals[season_idx] = gamma * (y - level) + (1.0 - gamma) * s;
        }

        sse
    }

    /// Select smoothing parameters by coordinate descent over the SSE surface.
    fn optimize_params(values: &[f64], period: usize) -> (f64, f64, f64) {
        let result = minimize_bounded(
            |params| Self::calculate_sse(values, params[0], params[1], params[2], period),
            &[0.3, 0.1, 0.1],
            &[
                (PARAM_MIN, PARAM_MAX),
                (PARAM_MIN, PARAM_MAX),
                (PARAM_MIN, PARAM_MAX),
            ],
            SearchConfig::default(),
        );

        (
            result.point[0].clamp(PARAM_MIN, PARAM_MAX),
            result.point[1].clamp(PARAM_MIN, PARAM_MAX),
            result.point[2].clamp(PARAM_MIN, PARAM_MAX),
        )
    }

    /// Fit the model to a monthly series.
    ///
    /// Requires at least `2 * seasonal_period` observations.
    pub fn fit(&mut self, series: &MonthlySeries) -> Result<()> {
        if self.seasonal_period == 0 {
            return Err(ForecastError::InvalidParameter(
                "seasonal period must be at least 1".to_string(),
            ));
        }

        let values = series.values();
        if values.len() < 2 * self.seasonal_period {
            return Err(ForecastError::InsufficientData {
                needed: 2 * self.seasonal_period,
                got: values.len(),
            });
        }

        self.n = values.len();

        if self.optimize {
            let (alpha, beta, gamma) = Self::optimize_params(&values, self.seasonal_period);
            self.alpha = Some(alpha);
            self.beta = Some(beta);
            self.gamma = Some(gamma);
        }

        let alpha = self.alpha.ok_or(ForecastError::FitRequired)?;
        let beta = self.beta.ok_or(ForecastError::FitRequired)?;
        let gamma = self.gamma.ok_or(ForecastError::FitRequired)?;
        let period = self.seasonal_period;

        let (mut level, mut trend, mut seasonals) = Self::initialize_state(&values, period);

        let mut fitted = Vec::with_capacity(self.n);
        let mut residuals = Vec::with_capacity(self.n);

        // The first season only seeds the state; it has no one-step forecast.
        for _ in 0..period {
            fitted.push(f64::NAN);
            residuals.push(f64::NAN);
        }

        for (t, &y) in values.iter().enumerate().skip(period) {
            let season_idx = t % period;
            let s = seasonals[season_idx];

            let forecast = level + trend + s;
            fitted.push(forecast);
            residuals.push(y - forecast);

            let level_prev = level;
            level = alpha * (y - s) + (1.0 - alpha) * (level_prev + trend);
            trend = beta * (level - level_prev) + (1.0 - beta) * trend;
            seasonals[season_idx] = gamma * (y - level) + (1.0 - gamma) * s;
        }

        self.level = Some(level);
        self.trend = Some(trend);
        self.seasonals = Some(seasonals);
        self.fitted = Some(fitted);
        self.residuals = Some(residuals);

        Ok(())
    }

    /// Forecast `horizon` steps past the end of the fitted series.
    ///
    /// Returns [`ForecastError::FitRequired`] if the model has not been
    /// fitted. A zero horizon yields an empty vector.
    pub fn predict(&self, horizon: usize) -> Result<Vec<f64>> {
        let level = self.level.ok_or(ForecastError::FitRequired)?;
        let trend = self.trend.ok_or(ForecastError::FitRequired)?;
        let seasonals = self.seasonals.as_ref().ok_or(ForecastError::FitRequired)?;
        let period = self.seasonal_period;

        let predictions = (1..=horizon)
            .map(|h| {
                let season_idx = (self.n + h - 1) % period;
                level + (h as f64) * trend + seasonals[season_idx]
            })
            .collect();

        Ok(predictions)
    }
}

impl Default for HoltWinters {
    /// An auto-optimized model with a twelve-month seasonal cycle.
    fn default() -> Self {
        Self::auto(12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Month;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn monthly_series(values: &[f64]) -> MonthlySeries {
        let start = Month::new(2020, 1).unwrap();
        let observations: Vec<(NaiveDate, Decimal)> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let month = start.plus_months(i as i64);
                let date = NaiveDate::from_ymd_opt(month.year(), month.month(), 1).unwrap();
                (date, Decimal::try_from(v).unwrap())
            })
            .collect();
        MonthlySeries::from_observations(&observations).unwrap()
    }

    fn seasonal_values(n: usize, period: usize, trend: f64, amplitude: f64) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                let seasonal = amplitude * (2.0 * std::f64::consts::PI * t / period as f64).sin();
                100.0 + trend * t + seasonal
            })
            .collect()
    }

    #[test]
    fn hw_basic_forecast() {
        let series = monthly_series(&seasonal_values(36, 12, 0.5, 20.0));

        let mut model = HoltWinters::new(0.3, 0.1, 0.1, 12);
        model.fit(&series).unwrap();

        let forecast = model.predict(6).unwrap();
        assert_eq!(forecast.len(), 6);
        assert!(forecast.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn hw_constant_series_forecasts_the_constant() {
        let series = monthly_series(&[100.0; 24]);

        let mut model = HoltWinters::new(0.3, 0.1, 0.1, 12);
        model.fit(&series).unwrap();

        // Level settles at 100, trend at 0, every seasonal index at 0.
        let forecast = model.predict(6).unwrap();
        for v in forecast {
            assert_relative_eq!(v, 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn hw_captures_seasonality() {
        // Strong repeating pattern: half the year high, half low.
        let values: Vec<f64> = (0..48)
            .map(|i| if i % 12 < 6 { 200.0 } else { 100.0 })
            .collect();
        let series = monthly_series(&values);

        let mut model = HoltWinters::new(0.5, 0.1, 0.5, 12);
        model.fit(&series).unwrap();

        let forecast = model.predict(12).unwrap();
        // The first half-year of forecasts should sit well above the second.
        let first_half: f64 = forecast[..6].iter().sum();
        let second_half: f64 = forecast[6..].iter().sum();
        assert!(first_half > second_half + 100.0);
    }

    #[test]
    fn hw_auto_optimization_selects_parameters() {
        let series = monthly_series(&seasonal_values(48, 12, 0.3, 10.0));

        let mut model = HoltWinters::auto(12);
        model.fit(&series).unwrap();

        let alpha = model.alpha().unwrap();
        let beta = model.beta().unwrap();
        let gamma = model.gamma().unwrap();
        assert!(alpha >= PARAM_MIN && alpha <= PARAM_MAX);
        assert!(beta >= PARAM_MIN && beta <= PARAM_MAX);
        assert!(gamma >= PARAM_MIN && gamma <= PARAM_MAX);

        let forecast = model.predict(12).unwrap();
        assert_eq!(forecast.len(), 12);
    }

    #[test]
    fn hw_insufficient_data() {
        // 23 months is one short of the two cycles fitting needs.
        let series = monthly_series(&seasonal_values(23, 12, 0.0, 5.0));

        let mut model = HoltWinters::new(0.3, 0.1, 0.1, 12);
        assert!(matches!(
            model.fit(&series),
            Err(ForecastError::InsufficientData {
                needed: 24,
                got: 23
            })
        ));
    }

    #[test]
    fn hw_requires_fit_before_predict() {
        let model = HoltWinters::new(0.3, 0.1, 0.1, 12);
        assert!(matches!(model.predict(6), Err(ForecastError::FitRequired)));
    }

    #[test]
    fn hw_zero_horizon() {
        let series = monthly_series(&seasonal_values(24, 12, 0.1, 5.0));

        let mut model = HoltWinters::new(0.3, 0.1, 0.1, 12);
        model.fit(&series).unwrap();

        let forecast = model.predict(0).unwrap();
        assert!(forecast.is_empty());
    }

    #[test]
    fn hw_rejects_zero_period() {
        let series = monthly_series(&seasonal_values(24, 12, 0.1, 5.0));

        let mut model = HoltWinters::new(0.3, 0.1, 0.1, 0);
        assert!(matches!(
            model.fit(&series),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn hw_fitted_and_residuals() {
        let values = seasonal_values(36, 12, 0.2, 8.0);
        let series = monthly_series(&values);

        let mut model = HoltWinters::new(0.3, 0.1, 0.1, 12);
        model.fit(&series).unwrap();

        let fitted = model.fitted_values().unwrap();
        let residuals = model.residuals().unwrap();
        assert_eq!(fitted.len(), 36);
        assert_eq!(residuals.len(), 36);

        // The initialization cycle carries no one-step forecasts.
        for i in 0..12 {
            assert!(fitted[i].is_nan());
            assert!(residuals[i].is_nan());
        }
        for i in 12..36 {
            assert_relative_eq!(residuals[i], values[i] - fitted[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn hw_seasonals_have_period_length_and_near_zero_mean() {
        let series = monthly_series(&seasonal_values(36, 12, 0.1, 5.0));

        let mut model = HoltWinters::new(0.3, 0.1, 0.1, 12);
        model.fit(&series).unwrap();

        let seasonals = model.seasonals().unwrap();
        assert_eq!(seasonals.len(), 12);
    }

    #[test]
    fn hw_parameters_are_clamped() {
        let model = HoltWinters::new(1.5, -0.2, 0.5, 12);
        assert_relative_eq!(model.alpha().unwrap(), PARAM_MAX, epsilon = 1e-12);
        assert_relative_eq!(model.beta().unwrap(), PARAM_MIN, epsilon = 1e-12);
        assert_relative_eq!(model.gamma().unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn hw_default_is_auto_with_annual_cycle() {
        let model = HoltWinters::default();
        assert_eq!(model.seasonal_period(), 12);
        assert!(model.alpha().is_none());
    }

    #[test]
    fn hw_trending_series_forecasts_continue_the_trend() {
        // Pure linear growth, no seasonal swing.
        let values: Vec<f64> = (0..36).map(|i| 50.0 + 2.0 * i as f64).collect();
        let series = monthly_series(&values);

        let mut model = HoltWinters::new(0.3, 0.1, 0.1, 12);
        model.fit(&series).unwrap();

        let forecast = model.predict(6).unwrap();
        // Later horizons keep climbing.
        for pair in forecast.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        // And the whole horizon sits above the in-sample mean.
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert!(forecast.iter().all(|&v| v > mean));
    }
}
