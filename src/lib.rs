//! Typed access to environment variables.
//!
//! An [`EnvAccessor`] is bound to a key template such as `SERVICE_%s_PORT`
//! and its positional arguments. Each `as_*` call formats the key, reads the
//! variable and coerces the raw value.
//!
//! ```
//! use env_accessor::Env;
//! use std::collections::HashMap;
//! use std::time::Duration;
//!
//! let env = Env::with_client(HashMap::from([
//!     ("SERVICE_web_TIMEOUT".to_string(), "1m30s".to_string()),
//!     ("SERVICE_web_HOSTS".to_string(), "a, b".to_string()),
//! ]));
//!
//! let web = |suffix: &str| env.get("SERVICE_%s_%s").arg("web").arg(suffix);
//! assert_eq!(web("TIMEOUT").as_duration(), Ok(Duration::from_secs(90)));
//! assert_eq!(web("HOSTS").as_slice_of_string(","), Ok(vec!["a".to_string(), "b".to_string()]));
//! assert!(web("DEBUG").as_bool_with_default(true));
//! ```

pub mod common;
pub mod env;
pub mod ports;

pub use common::{DurationParseError, KeyTemplate, LogFormat};
pub use env::{get, Env, EnvAccessor};

pub use ports::provided::{EnvError, Result};
pub use ports::required::{EnvClient, SystemEnv};
