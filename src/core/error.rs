//! Error handling logic

use thiserror::Error;

/// The three failure kinds the engine reports to its callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A program token could not be understood.
    Parse,
    /// A qubit or basis index, or a vector/operator size, is outside the valid range.
    Dimension,
    /// A state could not be normalized, or drifted away from unit norm.
    Normalization,
}

/// Errors raised by state construction, gate lifting, program interpretation
/// and the algorithm drivers.
///
/// All failures are local and synchronous: a failed gate application aborts
/// the remainder of the program for that call and no partial state is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QvisError {
    /// A token in a gate program did not match any known gate form.
    #[error("Parse Error: unrecognized gate token '{token}'")]
    Parse {
        /// The offending token, as written in the program.
        token: String,
    },

    /// An index or size does not fit the state space it is used with.
    #[error("Dimension Error: {message}")]
    Dimension {
        /// Dimension failure message
        message: String,
    },

    /// Attempt to normalize a vector whose norm is (numerically) zero.
    #[error("Normalization Error: cannot normalize a state vector with norm {norm:e}")]
    Normalization {
        /// Norm of the rejected vector.
        norm: f64,
    },

    /// A state that should be normalized has drifted from unit norm.
    #[error("Normalization Error: state vector norm deviated from 1 (sum |c_i|^2 = {norm_sqr})")]
    NotNormalized {
        /// The observed sum of squared magnitudes.
        norm_sqr: f64,
    },
}

impl QvisError {
    /// Shorthand for building a [`QvisError::Dimension`].
    pub fn dimension(message: impl Into<String>) -> Self {
        QvisError::Dimension { message: message.into() }
    }

    /// Shorthand for building a [`QvisError::Parse`].
    pub fn parse(token: impl Into<String>) -> Self {
        QvisError::Parse { token: token.into() }
    }

    /// Classifies the error into one of the three reported kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            QvisError::Parse { .. } => ErrorKind::Parse,
            QvisError::Dimension { .. } => ErrorKind::Dimension,
            QvisError::Normalization { .. } | QvisError::NotNormalized { .. } => ErrorKind::Normalization,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QvisError>;
