use crate::{Ohlcv, PriceSource};

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Configuration for a streaming [`Indicator`].
///
/// Configs are value types: cheap to clone, compare, and hash.
pub trait IndicatorConfig: Sized + PartialEq + Eq + Hash + Display + Debug {
    /// Builder type for constructing this config.
    type Builder: IndicatorConfigBuilder<Self>;

    /// Returns a new builder with default values.
    fn builder() -> Self::Builder;

    /// Price source to extract from each bar.
    fn source(&self) -> &PriceSource;
}

/// Builder for an [`IndicatorConfig`].
pub trait IndicatorConfigBuilder<Config>
where
    Config: IndicatorConfig,
{
    /// Sets the price source.
    #[must_use]
    fn source(self, source: PriceSource) -> Self;

    /// Builds the config.
    #[must_use]
    fn build(self) -> Config;
}

/// A streaming technical indicator.
///
/// Indicators own all of their state and update incrementally on each call
/// to [`compute`](Indicator::compute). There is no shared value-history
/// object behind them: the last output lives in the indicator itself and is
/// read back through [`value`](Indicator::value).
///
/// Readiness is a two-state machine. An indicator starts UNINITIALIZED,
/// becomes READY on its first successful `compute`, and only returns to
/// UNINITIALIZED through [`reset`](Indicator::reset).
///
/// # Example
///
/// ```
/// use obv_stream::{Indicator, Obv, ObvConfig};
/// # use obv_stream::{Ohlcv, Price, Timestamp};
/// #
/// # struct Bar(f64, f64, u64);
/// # impl Ohlcv for Bar {
/// #     fn open(&self) -> Price { self.0 }
/// #     fn high(&self) -> Price { self.0 }
/// #     fn low(&self) -> Price { self.0 }
/// #     fn close(&self) -> Price { self.0 }
/// #     fn open_time(&self) -> Timestamp { self.2 }
/// #     fn volume(&self) -> f64 { self.1 }
/// # }
///
/// fn feed<I: Indicator>(ind: &mut I, bars: &[Bar]) -> Option<I::Output> {
///     bars.iter().filter_map(|b| ind.compute(b)).last()
/// }
///
/// let mut obv = <Obv as Indicator>::new(ObvConfig::close());
/// assert!(!obv.is_ready());
/// assert_eq!(feed(&mut obv, &[Bar(100.0, 1000.0, 1)]), Some(0.0));
/// assert!(obv.is_ready());
/// ```
pub trait Indicator: Sized + Clone + Display + Debug {
    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Computed output type.
    type Output: Send + Sync + Display + Debug;

    /// Creates a new indicator from the given config.
    fn new(config: Self::Config) -> Self;

    /// Feeds a bar and returns the updated indicator value,
    /// or `None` if no value is available yet.
    fn compute(&mut self, kline: &impl Ohlcv) -> Option<Self::Output>;

    /// Returns the last computed indicator value without advancing state,
    /// or `None` before the first value.
    ///
    /// This is a cached field read, O(1) with no computation.
    fn value(&self) -> Option<Self::Output>;

    /// `true` once the indicator has produced at least one value.
    fn is_ready(&self) -> bool;

    /// Restores the state of a freshly constructed indicator with the same
    /// config.
    fn reset(&mut self);
}
