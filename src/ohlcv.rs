/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead.
pub type Price = f64;

/// Bar open timestamp or sequence number.
///
/// Expected to be non-decreasing between consecutive calls to
/// [`Obv::update`](crate::Obv::update). Ties are allowed. The accumulator
/// never inspects it, so ordering is entirely the caller's responsibility.
pub type Timestamp = u64;

/// OHLCV bar data used as input to the accumulator.
///
/// Implement this on your own kline/candle type to avoid per-tick
/// conversion. [`Obv`](crate::Obv) accepts `&impl Ohlcv`, extracts the
/// configured [`PriceSource`](crate::PriceSource) as the comparison value
/// and reads [`volume`](Ohlcv::volume) as the amount to accumulate.
///
/// # Example
///
/// ```
/// use obv_stream::{Ohlcv, Price, Timestamp};
///
/// struct MyKline {
///     o: f64, h: f64, l: f64, c: f64,
///     v: f64,
///     ts: u64,
/// }
///
/// impl Ohlcv for MyKline {
///     fn open(&self) -> Price { self.o }
///     fn high(&self) -> Price { self.h }
///     fn low(&self) -> Price { self.l }
///     fn close(&self) -> Price { self.c }
///     fn open_time(&self) -> Timestamp { self.ts }
///     fn volume(&self) -> f64 { self.v }
/// }
/// ```
pub trait Ohlcv {
    /// Opening price of the bar.
    fn open(&self) -> Price;

    /// Highest price during the bar.
    fn high(&self) -> Price;

    /// Lowest price during the bar.
    fn low(&self) -> Price;

    /// Closing (or latest) price of the bar.
    fn close(&self) -> Price;

    /// Bar open timestamp or sequence number.
    fn open_time(&self) -> Timestamp;

    /// Trade volume during the bar. Defaults to `0.0`.
    ///
    /// Must be finite and non-negative. Override this on any type fed to
    /// [`Obv`](crate::Obv); with the default every bar contributes nothing.
    fn volume(&self) -> f64 {
        0.0
    }
}
