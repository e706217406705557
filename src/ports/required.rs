// Required Ports - 値の取得元としてアプリケーションが差し替えられるインターフェース
use std::collections::{BTreeMap, HashMap};

/// ENVクライアント
/// 環境変数取得
pub trait EnvClient: Send + Sync {
    /// 環境変数を取得
    ///
    /// Returns `None` when the variable is not set or cannot be read as UTF-8.
    fn get(&self, key: &str) -> Option<String>;
}

/// Process environment.
///
/// # Examples
/// ```
/// use env_accessor::{EnvClient, SystemEnv};
///
/// assert_eq!(SystemEnv.get("ENV_ACCESSOR_DOC_UNSET_VARIABLE"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvClient for SystemEnv {
    fn get(&self, key: &str) -> Option<String> {
        // std::env::var panics on '=' or NUL in the name
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var(key).ok()
    }
}

impl<C: EnvClient + ?Sized> EnvClient for &C {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl EnvClient for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvClient for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}
