// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Forward a status line to an `Option<&mut dyn Progress>` if one was given.
///
/// ```ignore
/// progress!(progress, "Fetching combinations for {glaze}...");
/// ```
#[macro_export]
macro_rules! progress {
    ($sink:expr, $($arg:tt)*) => {
        if let Some(p) = $sink.as_deref_mut() {
            p.log(&format!($($arg)*));
        }
    };
}
