//! Logging macro implementations
//!
//! Every level macro forwards to a single backend dispatcher, [`__log`](crate::__log), whose definition is
//! selected by the `defmt` and `log` features of this crate. Callers must enable the same backend feature so
//! that `::defmt` or `::log` resolves in their own crate.

#[cfg(all(feature = "log", feature = "defmt", not(doc)))]
compile_error!("features `log` and `defmt` are mutually exclusive");

#[cfg(all(not(doc), feature = "defmt"))]
#[doc(hidden)]
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! __log {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {
        ::defmt::$level!($s $(, $x)*)
    };
}

#[cfg(all(not(doc), feature = "log"))]
#[doc(hidden)]
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! __log {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {
        ::log::$level!($s $(, $x)*)
    };
}

#[cfg(any(doc, not(any(feature = "defmt", feature = "log"))))]
#[doc(hidden)]
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! __log {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {{
        let _ = ($(&$x),*);
    }};
}

/// Logs a trace message using the selected backend
#[macro_export]
macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__log!(trace, $s $(, $x)*)
    };
}

/// Logs a debug message using the selected backend
#[macro_export]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__log!(debug, $s $(, $x)*)
    };
}

/// Logs an info message using the selected backend
#[macro_export]
macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__log!(info, $s $(, $x)*)
    };
}

/// Logs a warning using the selected backend
#[macro_export]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__log!(warn, $s $(, $x)*)
    };
}

/// Logs an error using the selected backend
#[macro_export]
macro_rules! error {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__log!(error, $s $(, $x)*)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_trailing_comma_and_no_args() {
        let count = 3u8;
        crate::trace!("no args");
        crate::debug!("count {}", count);
        crate::info!("count {} active {}", count, true,);
        crate::warn!("warn");
        crate::error!("error {}", count);
    }
}
