use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("fill length {fill} exceeds fixture length {fixture}")]
    FillExceedsFixture { fill: usize, fixture: usize },
}

/// Failures of the reflection layer. The benchmarks never trigger these with
/// their literal inputs; they exist so misuse is reported instead of panicking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReflectError {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("wrong number of arguments: expected {expected}, found {found}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("wrong number of results: expected {expected}, found {found}")]
    ResultCount { expected: usize, found: usize },
    #[error("type {0} cannot be used as a map key")]
    NotHashable(&'static str),
    #[error("type {0} is not a struct")]
    NotAStruct(&'static str),
    #[error("{ty} has no field named {field:?}")]
    NoSuchField { ty: &'static str, field: String },
    #[error("{ty} has no method named {method:?}")]
    NoSuchMethod { ty: &'static str, method: String },
    #[error("channel is closed")]
    ChannelClosed,
}

/// Failure of a single benchmark operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpError {
    #[error(transparent)]
    Reflect(#[from] ReflectError),
    #[error("channel receiver disconnected")]
    Disconnected,
    #[error("channel receiver panicked")]
    WorkerPanicked,
}

#[derive(Debug, Error)]
#[error("benchmark {id}: {source}")]
pub struct SuiteError {
    pub id: String,
    #[source]
    pub source: OpError,
}
