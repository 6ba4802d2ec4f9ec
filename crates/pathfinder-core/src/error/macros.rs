//! Error macros for pathfinder

/// Return early with a usage error
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::PathfinderError::UsageError($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::PathfinderError::UsageError(format!($fmt, $($arg)*)))
    };
}
