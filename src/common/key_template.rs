use regex::Regex;
use std::sync::LazyLock;

static VERB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%([%sdv])").unwrap());

/// KeyTemplate - printf-style key formatting
///
/// Pure string utility. `%s`, `%d` and `%v` take the next positional
/// argument, `%%` is a literal percent sign. Anything else is copied as is.
///
/// Design:
/// - single pass, inserted arguments are never re-scanned
/// - a verb without argument renders as `%!s(MISSING)`, surplus arguments are dropped
pub struct KeyTemplate;

impl KeyTemplate {
    /// Substitute `args` into `template`
    ///
    /// # Examples
    ///
    /// ```
    /// use env_accessor::common::key_template::KeyTemplate;
    ///
    /// let key = KeyTemplate::format("SERVICE_%s_PORT", &["web".to_string()]);
    /// assert_eq!(key, "SERVICE_web_PORT");
    ///
    /// let key = KeyTemplate::format("DB_%s_%d_HOST", &["tenant".to_string(), "3".to_string()]);
    /// assert_eq!(key, "DB_tenant_3_HOST");
    /// ```
    ///
    /// # Missing arguments
    ///
    /// ```
    /// use env_accessor::common::key_template::KeyTemplate;
    ///
    /// assert_eq!(KeyTemplate::format("SERVICE_%s_PORT", &[]), "SERVICE_%!s(MISSING)_PORT");
    /// ```
    pub fn format(template: &str, args: &[String]) -> String {
        let mut result = String::with_capacity(template.len());
        let mut args = args.iter();
        let mut last_match = 0;

        for cap in VERB.captures_iter(template) {
            let (Some(m), Some(verb)) = (cap.get(0), cap.get(1)) else {
                continue;
            };

            result.push_str(&template[last_match..m.start()]);

            match verb.as_str() {
                "%" => result.push('%'),
                verb => match args.next() {
                    Some(arg) => result.push_str(arg),
                    None => {
                        result.push_str("%!");
                        result.push_str(verb);
                        result.push_str("(MISSING)");
                    }
                },
            }

            last_match = m.end();
        }

        result.push_str(&template[last_match..]);

        result
    }
}
