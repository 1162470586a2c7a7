//! Streaming On-Balance-Volume for Rust.
//!
//! [`Obv`] accepts any type implementing [`Ohlcv`] and folds it into a
//! running volume total in O(1) time and constant memory per bar.
//!
//! The accumulator exposes [`new`](Obv::new), [`update`](Obv::update),
//! [`current`](Obv::current), [`is_ready`](Obv::is_ready) and
//! [`reset`](Obv::reset) as inherent methods, so no trait import is
//! needed. Import [`Indicator`] only for generic code.
//!
//! See [`Obv`] for the exact update rule, which deliberately never
//! accumulates onto a zero total.

mod error;
mod indicator;
mod obv;
mod ohlcv;
mod price_source;
mod snapshot;

pub use crate::error::ObvError;
pub use crate::indicator::{Indicator, IndicatorConfig, IndicatorConfigBuilder};
pub use crate::ohlcv::{Ohlcv, Price, Timestamp};
pub use crate::price_source::PriceSource;
pub use crate::snapshot::ObvSnapshot;

pub use crate::obv::{Obv, ObvConfig, ObvConfigBuilder};

macro_rules! impl_indicator_methods {
    ($type:ty, $config:ty, $output:ty) => {
        impl $type {
            /// See [`Indicator::new`].
            #[must_use]
            pub fn new(config: $config) -> Self {
                <Self as Indicator>::new(config)
            }

            /// See [`Indicator::compute`].
            #[inline]
            pub fn compute(&mut self, kline: &impl Ohlcv) -> Option<$output> {
                <Self as Indicator>::compute(self, kline)
            }

            /// See [`Indicator::value`].
            #[must_use]
            #[inline]
            pub fn value(&self) -> Option<$output> {
                <Self as Indicator>::value(self)
            }

            /// See [`Indicator::is_ready`].
            #[must_use]
            #[inline]
            pub fn is_ready(&self) -> bool {
                <Self as Indicator>::is_ready(self)
            }

            /// See [`Indicator::reset`].
            #[inline]
            pub fn reset(&mut self) {
                <Self as Indicator>::reset(self);
            }
        }
    };
}

impl_indicator_methods!(Obv, ObvConfig, Price);

#[cfg(test)]
mod test_util;
