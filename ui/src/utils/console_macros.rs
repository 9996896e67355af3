/// Macros for browser console logging.
///
/// Each macro wraps the matching `gloo_console` function and prefixes the
/// message with the `js_sys::Date::now()` timestamp and the app tag, so form
/// events can be lined up in the devtools console.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_at {
    ($level:ident, $fmt:expr) => {
        gloo_console::$level!(format!("[{}] [zapfit] {}", js_sys::Date::now(), $fmt))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        gloo_console::$level!(format!(
            "[{}] [zapfit] {}",
            js_sys::Date::now(),
            format!($fmt, $($arg)*)
        ))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => { $crate::__console_at!(info, $($arg)*) };
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => { $crate::__console_at!(log, $($arg)*) };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => { $crate::__console_at!(warn, $($arg)*) };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => { $crate::__console_at!(debug, $($arg)*) };
}
