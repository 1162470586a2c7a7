use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

use crate::{
    Indicator, IndicatorConfig, IndicatorConfigBuilder, ObvError, ObvSnapshot, Ohlcv, Price,
    PriceSource,
};

/// Configuration for the On-Balance-Volume ([`Obv`]) accumulator.
///
/// OBV has no window length. The only parameter is the price source used
/// as the comparison value between consecutive bars.
///
/// # Example
///
/// ```rust
/// use obv_stream::{IndicatorConfig, IndicatorConfigBuilder, ObvConfig, PriceSource};
///
/// let config = ObvConfig::builder().source(PriceSource::HLC3).build();
/// assert_eq!(*config.source(), PriceSource::HLC3);
/// assert_eq!(ObvConfig::default(), ObvConfig::close());
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObvConfig {
    source: PriceSource,
}

impl IndicatorConfig for ObvConfig {
    type Builder = ObvConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        ObvConfigBuilder::new()
    }

    #[inline]
    fn source(&self) -> &PriceSource {
        &self.source
    }
}

impl ObvConfig {
    /// OBV comparing closing prices.
    #[must_use]
    pub fn close() -> Self {
        Self::builder().build()
    }
}

impl Display for ObvConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ObvConfig({})", self.source)
    }
}

/// Builder for [`ObvConfig`].
///
/// Defaults: source = [`PriceSource::Close`].
pub struct ObvConfigBuilder {
    source: PriceSource,
}

impl ObvConfigBuilder {
    fn new() -> Self {
        Self {
            source: PriceSource::Close,
        }
    }
}

impl IndicatorConfigBuilder<ObvConfig> for ObvConfigBuilder {
    #[inline]
    fn source(mut self, source: PriceSource) -> Self {
        self.source = source;
        self
    }

    #[inline]
    fn build(self) -> ObvConfig {
        ObvConfig {
            source: self.source,
        }
    }
}

/// On-Balance-Volume (OBV) accumulator.
///
/// Keeps the comparison value of the last-seen bar and the last emitted
/// cumulative total. On each bar:
///
/// ```text
/// first bar            → 0
/// value == prev        → total
/// value >  prev        → total + volume   (only if total != 0, else 0)
/// value <  prev        → total − volume   (only if total != 0, else 0)
/// ```
///
/// # Zero baseline
///
/// Unlike textbook OBV, volume is never accumulated onto a total of zero.
/// Starting from an empty state the output therefore stays at `0` for
/// every input. A non-zero total can only come from a restored
/// [`ObvSnapshot`], and a total that returns to exactly zero stays there.
/// Downstream consumers depend on this output, so it is kept as is.
///
/// # Bar ordering
///
/// Bars must be fed in chronological order, once each. Nothing is
/// validated: feeding the same bar twice takes the "unchanged" branch the
/// second time and re-emits the current total.
///
/// # Example
///
/// ```rust
/// use obv_stream::{Obv, ObvConfig};
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
/// let mut obv = Obv::new(ObvConfig::close());
///
/// assert_eq!(obv.update(&Bar(100.0, 1_000.0, 1)), 0.0);
/// assert_eq!(obv.update(&Bar(105.0, 500.0, 2)), 0.0); // guarded: total is zero
/// assert_eq!(obv.update(&Bar(105.0, 300.0, 3)), 0.0); // unchanged
/// assert_eq!(obv.update(&Bar(90.0, 400.0, 4)), 0.0);  // guarded: total is zero
/// assert!(obv.is_ready());
/// ```
#[derive(Clone, Debug)]
pub struct Obv {
    config: ObvConfig,
    previous: Option<Price>,
    current: Price,
}

impl Indicator for Obv {
    type Config = ObvConfig;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            previous: None,
            current: 0.0,
        }
    }

    #[inline]
    fn compute(&mut self, kline: &impl Ohlcv) -> Option<Price> {
        Some(self.update(kline))
    }

    #[inline]
    fn value(&self) -> Option<Price> {
        self.is_ready().then_some(self.current)
    }

    #[inline]
    fn is_ready(&self) -> bool {
        self.previous.is_some()
    }

    fn reset(&mut self) {
        tracing::trace!(indicator = %self, total = self.current, "reset");
        self.previous = None;
        self.current = 0.0;
    }
}

impl Obv {
    /// Feeds one bar and returns the new cumulative total.
    ///
    /// The bar's volume must be finite and non-negative and its comparison
    /// value finite. Violations are caught by a debug assertion only; use
    /// [`try_update`](Self::try_update) to reject them instead.
    #[inline]
    pub fn update(&mut self, kline: &impl Ohlcv) -> Price {
        let price = self.config.source.extract(kline);
        let volume = kline.volume();

        debug_assert!(
            volume.is_finite() && volume >= 0.0,
            "volume must be finite and non-negative, got {volume}"
        );
        debug_assert!(price.is_finite(), "comparison value must be finite, got {price}");

        let next = match self.previous {
            None => 0.0,
            Some(previous) => match price.partial_cmp(&previous) {
                Some(Ordering::Equal) => self.current,
                Some(Ordering::Greater) if self.current != 0.0 => self.current + volume,
                Some(Ordering::Less) if self.current != 0.0 => self.current - volume,
                _ => 0.0,
            },
        };

        self.previous = Some(price);
        self.current = next;

        next
    }

    /// Checked form of [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns an [`ObvError`] for a negative or non-finite volume, or a
    /// non-finite comparison value. State is left untouched on error.
    pub fn try_update(&mut self, kline: &impl Ohlcv) -> Result<Price, ObvError> {
        let value = self.config.source.extract(kline);
        let volume = kline.volume();

        let rejection = if !value.is_finite() {
            Some(ObvError::NonFiniteValue { value })
        } else if !volume.is_finite() {
            Some(ObvError::NonFiniteVolume { volume })
        } else if volume < 0.0 {
            Some(ObvError::NegativeVolume { volume })
        } else {
            None
        };

        if let Some(err) = rejection {
            tracing::debug!(
                indicator = %self,
                open_time = kline.open_time(),
                error = %err,
                "bar rejected"
            );
            return Err(err);
        }

        Ok(self.update(kline))
    }

    /// Last cumulative total. `0.0` before the first update.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Price {
        self.current
    }

    /// Configuration this accumulator was built with.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ObvConfig {
        &self.config
    }

    /// Captures the current state.
    #[must_use]
    pub fn snapshot(&self) -> ObvSnapshot {
        match self.previous {
            Some(previous) => ObvSnapshot::seeded(previous, self.current),
            None => ObvSnapshot::empty(),
        }
    }

    /// Replaces the current state with `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns [`ObvError::InvalidSnapshot`] if the snapshot holds a
    /// non-finite number or a non-zero total with no previous bar. State is
    /// left untouched on error.
    pub fn restore(&mut self, snapshot: ObvSnapshot) -> Result<(), ObvError> {
        let snapshot = snapshot.validate()?;

        tracing::trace!(
            indicator = %self,
            previous = ?snapshot.previous(),
            total = snapshot.value(),
            "restore"
        );

        self.previous = snapshot.previous();
        self.current = snapshot.value();

        Ok(())
    }

    /// Builds an accumulator starting from `snapshot`.
    ///
    /// # Errors
    ///
    /// See [`restore`](Self::restore).
    pub fn from_snapshot(config: ObvConfig, snapshot: ObvSnapshot) -> Result<Self, ObvError> {
        let mut obv = Self::new(config);
        obv.restore(snapshot)?;
        Ok(obv)
    }
}

impl Default for Obv {
    fn default() -> Self {
        Self::new(ObvConfig::default())
    }
}

impl Display for Obv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OBV({})", self.config.source)
    }
}
