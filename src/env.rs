use crate::common::duration;
use crate::common::key_template::KeyTemplate;
use crate::fn_log;
use crate::ports::provided::{EnvError, Result};
use crate::ports::required::{EnvClient, SystemEnv};
use std::collections::HashMap;
use std::fmt::Display;
use std::time::Duration;

const TRIM_CHARS: &[char] = &['\n', '\t', '\r', ' '];

/// Starts a lookup against the process environment.
///
/// # Examples
///
/// ```no_run
/// let port = env_accessor::get("SERVICE_%s_PORT").arg("web").as_integer_with_default(8080);
/// ```
pub fn get(key_template: &str) -> EnvAccessor<SystemEnv> {
    EnvAccessor::new(key_template)
}

/// Reusable entry point bound to one variable source.
///
/// # Examples
///
/// ```
/// use env_accessor::Env;
/// use std::collections::HashMap;
///
/// let vars = HashMap::from([("SERVICE_web_PORT".to_string(), "8080".to_string())]);
/// let env = Env::with_client(vars);
///
/// assert_eq!(env.get("SERVICE_%s_PORT").arg("web").as_integer(), Ok(8080));
/// assert_eq!(env.get("SERVICE_%s_PORT").arg("api").as_integer_with_default(80), 80);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Env<C = SystemEnv> {
    client: C,
}

impl Env<SystemEnv> {
    pub fn new() -> Self {
        Self { client: SystemEnv }
    }
}

impl<C: EnvClient> Env<C> {
    pub fn with_client(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn get(&self, key_template: &str) -> EnvAccessor<&C> {
        EnvAccessor::with_client(&self.client, key_template)
    }
}

/// One pending lookup: a key template, its positional arguments and the
/// source to read from.
///
/// Nothing is formatted or read until an `as_*` method is called, and every
/// call reads the source again.
#[derive(Debug, Clone)]
pub struct EnvAccessor<C = SystemEnv> {
    key_template: String,
    template_args: Vec<String>,
    client: C,
}

impl EnvAccessor<SystemEnv> {
    pub fn new(key_template: &str) -> Self {
        Self::with_client(SystemEnv, key_template)
    }
}

impl<C: EnvClient> EnvAccessor<C> {
    pub fn with_client(client: C, key_template: &str) -> Self {
        Self {
            key_template: key_template.to_string(),
            template_args: Vec::new(),
            client,
        }
    }

    /// Appends one positional template argument.
    pub fn arg(mut self, value: impl Display) -> Self {
        self.template_args.push(value.to_string());
        self
    }

    /// Appends positional template arguments in order.
    pub fn args<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.template_args
            .extend(values.into_iter().map(|value| value.to_string()));
        self
    }

    pub fn key_template(&self) -> &str {
        &self.key_template
    }

    /// The variable name this accessor reads.
    ///
    /// # Examples
    ///
    /// ```
    /// let accessor = env_accessor::get("DB_%s_%d_HOST").arg("tenant").arg(3);
    /// assert_eq!(accessor.key(), "DB_tenant_3_HOST");
    /// ```
    pub fn key(&self) -> String {
        KeyTemplate::format(&self.key_template, &self.template_args)
    }

    /// Raw value, untrimmed. Unset and empty are both `MissingVariable`.
    ///
    /// # Examples
    ///
    /// ```
    /// use env_accessor::{EnvAccessor, EnvError};
    /// use std::collections::HashMap;
    ///
    /// let vars = HashMap::from([
    ///     ("NAME".to_string(), " api ".to_string()),
    ///     ("BLANK".to_string(), "".to_string()),
    /// ]);
    ///
    /// assert_eq!(EnvAccessor::with_client(&vars, "NAME").as_string(), Ok(" api ".to_string()));
    /// assert_eq!(
    ///     EnvAccessor::with_client(&vars, "BLANK").as_string(),
    ///     Err(EnvError::MissingVariable { key: "BLANK".to_string() })
    /// );
    /// ```
    pub fn as_string(&self) -> Result<String> {
        let key = self.key();
        fn_log!("EnvAccessor", "as_string", &key);

        match self.client.get(&key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(EnvError::MissingVariable { key }),
        }
    }

    /// Base-10 `i64`.
    pub fn as_integer(&self) -> Result<i64> {
        fn_log!("EnvAccessor", "as_integer", &self.key_template);

        let value = self.as_string()?;
        value
            .parse::<i64>()
            .map_err(|source| EnvError::InvalidInteger {
                key: self.key(),
                value,
                source,
            })
    }

    pub fn as_integer_with_default(&self, default: i64) -> i64 {
        self.as_integer().unwrap_or(default)
    }

    /// `true`/`false` in any ASCII case; anything else, including a missing
    /// variable, yields `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use env_accessor::EnvAccessor;
    /// use std::collections::HashMap;
    ///
    /// let vars = HashMap::from([
    ///     ("DEBUG".to_string(), "TRUE".to_string()),
    ///     ("VERBOSE".to_string(), "yes".to_string()),
    /// ]);
    ///
    /// assert!(EnvAccessor::with_client(&vars, "DEBUG").as_bool_with_default(false));
    /// assert!(!EnvAccessor::with_client(&vars, "VERBOSE").as_bool_with_default(false));
    /// assert!(EnvAccessor::with_client(&vars, "UNSET").as_bool_with_default(true));
    /// ```
    pub fn as_bool_with_default(&self, default: bool) -> bool {
        fn_log!("EnvAccessor", "as_bool_with_default", &self.key_template);

        match self.as_string() {
            Ok(value) if value.eq_ignore_ascii_case("true") => true,
            Ok(value) if value.eq_ignore_ascii_case("false") => false,
            _ => default,
        }
    }

    /// Duration such as `1h30m`, `500ms` or `1.5s`.
    ///
    /// See [`duration::parse`] for the grammar.
    pub fn as_duration(&self) -> Result<Duration> {
        fn_log!("EnvAccessor", "as_duration", &self.key_template);

        let value = self.as_string()?;
        duration::parse(&value).map_err(|source| EnvError::InvalidDuration {
            key: self.key(),
            value,
            source,
        })
    }

    /// Splits on `separator` and trims spaces, tabs, CR and LF off each element.
    ///
    /// Empty elements keep their position. Fails only when every element is
    /// empty. An empty `separator` yields the whole value as one element.
    ///
    /// # Examples
    ///
    /// ```
    /// use env_accessor::EnvAccessor;
    /// use std::collections::HashMap;
    ///
    /// let vars = HashMap::from([("HOSTS".to_string(), "a, b ,c".to_string())]);
    ///
    /// assert_eq!(
    ///     EnvAccessor::with_client(&vars, "HOSTS").as_slice_of_string(","),
    ///     Ok(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    /// );
    /// ```
    pub fn as_slice_of_string(&self, separator: &str) -> Result<Vec<String>> {
        fn_log!("EnvAccessor", "as_slice_of_string", &self.key_template, separator);

        let value = self.as_string()?;
        let result: Vec<String> = if separator.is_empty() {
            vec![value.trim_matches(TRIM_CHARS).to_string()]
        } else {
            value
                .split(separator)
                .map(|element| element.trim_matches(TRIM_CHARS).to_string())
                .collect()
        };

        if result.iter().all(String::is_empty) {
            return Err(EnvError::EmptySlice {
                value,
                separator: separator.to_string(),
            });
        }

        Ok(result)
    }

    /// Splits on `separator` into entries and each entry on `pair_separator`
    /// into key and value.
    ///
    /// Entries without exactly two non-empty parts are skipped; a later
    /// duplicate key wins. Fails when no entry survives.
    ///
    /// # Examples
    ///
    /// ```
    /// use env_accessor::EnvAccessor;
    /// use std::collections::HashMap;
    ///
    /// let vars = HashMap::from([("LABELS".to_string(), "a=1,b=2,c=,=5".to_string())]);
    /// let labels = EnvAccessor::with_client(&vars, "LABELS").as_map_of_strings(",", "=").unwrap();
    ///
    /// assert_eq!(labels.len(), 2);
    /// assert_eq!(labels["a"], "1");
    /// assert_eq!(labels["b"], "2");
    /// ```
    pub fn as_map_of_strings(
        &self,
        separator: &str,
        pair_separator: &str,
    ) -> Result<HashMap<String, String>> {
        fn_log!(
            "EnvAccessor",
            "as_map_of_strings",
            &self.key_template,
            separator,
            pair_separator
        );

        let value = self.as_string()?;
        let mut result = HashMap::new();

        if !separator.is_empty() && !pair_separator.is_empty() {
            for entry in value.split(separator) {
                let mut parts = entry.split(pair_separator);
                if let (Some(key), Some(pair_value), None) = (parts.next(), parts.next(), parts.next()) {
                    if !key.is_empty() && !pair_value.is_empty() {
                        result.insert(key.to_string(), pair_value.to_string());
                    }
                }
            }
        }

        if result.is_empty() {
            return Err(EnvError::EmptyMap {
                value,
                separator: separator.to_string(),
                pair_separator: pair_separator.to_string(),
            });
        }

        Ok(result)
    }
}
