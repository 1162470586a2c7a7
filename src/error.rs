/// Rejections reported by the checked accumulator operations.
///
/// Only [`Obv::try_update`](crate::Obv::try_update) and the snapshot
/// restore paths produce these. The unchecked
/// [`Obv::update`](crate::Obv::update) treats the same conditions as caller
/// contract violations.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ObvError {
    #[error("bar volume must be non-negative, got {volume}")]
    NegativeVolume { volume: f64 },

    #[error("bar volume must be finite, got {volume}")]
    NonFiniteVolume { volume: f64 },

    #[error("bar comparison value must be finite, got {value}")]
    NonFiniteValue { value: f64 },

    #[error("invalid snapshot: {reason}")]
    InvalidSnapshot { reason: &'static str },
}
