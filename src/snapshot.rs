use crate::{ObvError, Price};

/// Captured state of an [`Obv`](crate::Obv) accumulator.
///
/// A snapshot holds exactly what the update rule reads: the comparison
/// value of the last-seen bar and the last emitted cumulative total.
/// Restoring one puts an accumulator back into that state, which is also
/// the only way to start from a non-zero total.
///
/// # Example
///
/// ```
/// use obv_stream::{Obv, ObvConfig, ObvSnapshot};
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
/// let seed = ObvSnapshot::seeded(100.0, 1_000.0);
/// let mut obv = Obv::from_snapshot(ObvConfig::close(), seed).unwrap();
///
/// assert_eq!(obv.update(&Bar(105.0, 500.0, 2)), 1_500.0);
/// assert_eq!(obv.snapshot(), ObvSnapshot::seeded(105.0, 1_500.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObvSnapshot {
    previous: Option<Price>,
    value: Price,
}

impl ObvSnapshot {
    /// State of an accumulator that has not seen any bar.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            previous: None,
            value: 0.0,
        }
    }

    /// State after at least one bar: `previous` is the last bar's
    /// comparison value and `value` the cumulative total.
    #[must_use]
    pub const fn seeded(previous: Price, value: Price) -> Self {
        Self {
            previous: Some(previous),
            value,
        }
    }

    /// Comparison value of the last-seen bar, if any.
    #[inline]
    #[must_use]
    pub fn previous(&self) -> Option<Price> {
        self.previous
    }

    /// Cumulative total at the time of capture.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Price {
        self.value
    }

    /// `true` when the captured accumulator had produced a value.
    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.previous.is_some()
    }

    pub(crate) fn validate(self) -> Result<Self, ObvError> {
        if !self.value.is_finite() {
            return Err(ObvError::InvalidSnapshot {
                reason: "value must be finite",
            });
        }

        match self.previous {
            Some(previous) if !previous.is_finite() => Err(ObvError::InvalidSnapshot {
                reason: "previous comparison value must be finite",
            }),
            None if self.value != 0.0 => Err(ObvError::InvalidSnapshot {
                reason: "value must be zero before the first bar",
            }),
            _ => Ok(self),
        }
    }
}

impl Default for ObvSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
