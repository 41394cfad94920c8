use thiserror::Error;

use crate::scale::ScaleKind;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("missing values for channel: {0}")]
    MissingChannel(String),

    #[error("{0} channel needs band scale")]
    BandScaleRequired(String),

    #[error("no scale named `{0}` is available")]
    MissingScale(String),

    #[error("invalid {kind} scale: {reason}")]
    InvalidScale { kind: ScaleKind, reason: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    pub(crate) fn invalid_scale(kind: ScaleKind, reason: impl Into<String>) -> Self {
        Self::InvalidScale {
            kind,
            reason: reason.into(),
        }
    }
}
