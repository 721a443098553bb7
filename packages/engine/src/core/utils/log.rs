//! Console logging
//!
//! In the browser: forwards to `console.log` via web-sys.
//! Natively (tests, tools): compiles to nothing, JS imports can't be called there.
//!
//! Usage:
//! ```rust
//! use stress_engine::console_log;
//!
//! let objects = 50;
//! console_log!("spawned {} objects", objects);
//! ```

/// `format!`-style logging to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::log_str(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn log_str(message: &str) {
    web_sys::console::log_1(&message.into());
}
