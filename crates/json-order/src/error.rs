use std::fmt;

use thiserror::Error;

/// Which of the two input documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Before => "before",
            Side::After => "after",
        })
    }
}

/// Errors from the text-level entry points.
///
/// Reconciling two parsed values cannot fail; only parsing documents or
/// options can.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("failed to parse {side} document: {source}")]
    Parse {
        side: Side,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid reconcile options: {0}")]
    Options(#[source] serde_json::Error),
}

impl ReconcileError {
    pub(crate) fn parse(side: Side) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| ReconcileError::Parse { side, source }
    }
}
