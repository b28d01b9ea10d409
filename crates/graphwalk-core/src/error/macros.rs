//! Error macros for graphwalk

/// Return a format error for the given input line
#[macro_export]
macro_rules! bail_format {
    ($line:expr, $($arg:tt)+) => {
        return Err($crate::error::GraphError::format($line, format!($($arg)+)))
    };
}

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
