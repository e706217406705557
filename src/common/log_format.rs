/// # Examples
/// ```
/// use env_accessor::common::log_format::LogFormat;
///
/// let fn_message = LogFormat::call("EnvAccessor", "as_string", &["'PORT'".to_string()]);
/// assert_eq!(fn_message, "EnvAccessor::as_string('PORT')");
/// ```
pub struct LogFormat;

impl LogFormat {

    pub fn call(class: &str, fn_name: &str, args: &[String]) -> String {
        let args_str = args.join(", ");
        format!("{}::{}({})", class, fn_name, args_str)
    }

    /// Format string argument for log output
    ///
    /// Long arguments are cut at 47 characters.
    ///
    /// # Examples
    /// ```
    /// use env_accessor::common::log_format::LogFormat;
    ///
    /// assert_eq!(LogFormat::format_str_arg("PORT"), "'PORT'");
    /// assert_eq!(LogFormat::format_str_arg(&"K".repeat(60)), format!("'{}'...", "K".repeat(47)));
    /// ```
    pub fn format_str_arg(s: &str) -> String {
        if s.chars().count() > 50 {
            let head: String = s.chars().take(47).collect();
            format!("'{}'...", head)
        } else {
            format!("'{}'", s)
        }
    }
}

/// Log macro: fn call
///
/// Expands to nothing unless the `logging` feature is enabled.
///
/// # Examples
/// ```ignore
/// use crate::fn_log;
///
/// fn_log!("EnvAccessor", "as_string", "SERVICE_web_PORT");
/// // Logs: EnvAccessor::as_string('SERVICE_web_PORT')
/// ```
#[macro_export]
macro_rules! fn_log {
    ($class:expr, $fun:expr $(, $arg:expr)*) => {{
        #[cfg(feature = "logging")]
        {
            let args: Vec<String> = vec![
                $(
                    $crate::common::log_format::LogFormat::format_str_arg($arg),
                )*
            ];
            log::debug!("{}", $crate::common::log_format::LogFormat::call($class, $fun, &args));
        }
        #[cfg(not(feature = "logging"))]
        {
            $( let _ = $arg; )*
        }
    }};
}
