// EnvAccessor coercions against an injected client
use crate::mocks::MockEnvClient;
use env_accessor::{Env, EnvAccessor, EnvError};
use std::collections::HashMap;
use std::time::Duration;

fn service_env() -> Env<MockEnvClient> {
    Env::with_client(
        MockEnvClient::new()
            .with("SERVICE_web_PORT", "8080")
            .with("SERVICE_web_HOSTS", "web-1, web-2 ,web-3")
            .with("SERVICE_web_TIMEOUT", "1h30m")
            .with("SERVICE_web_LABELS", "tier=front,team=core")
            .with("SERVICE_web_DEBUG", "True")
            .with("SERVICE_api_PORT", "eighty"),
    )
}

#[test]
fn test_template_resolves_key() {
    let env = service_env();
    let accessor = env.get("SERVICE_%s_PORT").arg("web");

    assert_eq!(accessor.key(), "SERVICE_web_PORT");
    assert_eq!(accessor.as_string(), Ok("8080".to_string()));
    assert_eq!(env.client().lookups(), vec!["SERVICE_web_PORT"]);
}

#[test]
fn test_typed_values() {
    let env = service_env();
    let web = |suffix: &str| env.get("SERVICE_%s_%s").args(["web", suffix]);

    assert_eq!(web("PORT").as_integer(), Ok(8080));
    assert_eq!(web("TIMEOUT").as_duration(), Ok(Duration::from_secs(90 * 60)));
    assert!(web("DEBUG").as_bool_with_default(false));
    assert_eq!(
        web("HOSTS").as_slice_of_string(","),
        Ok(vec!["web-1".to_string(), "web-2".to_string(), "web-3".to_string()])
    );
    assert_eq!(
        web("LABELS").as_map_of_strings(",", "="),
        Ok(HashMap::from([
            ("tier".to_string(), "front".to_string()),
            ("team".to_string(), "core".to_string()),
        ]))
    );
}

#[test]
fn test_missing_variable_everywhere() {
    let env = service_env();
    let missing = || env.get("SERVICE_%s_PORT").arg("worker");
    let expected = EnvError::MissingVariable { key: "SERVICE_worker_PORT".to_string() };

    assert_eq!(missing().as_string(), Err(expected.clone()));
    assert_eq!(missing().as_integer(), Err(expected.clone()));
    assert_eq!(missing().as_duration(), Err(expected.clone()));
    assert_eq!(missing().as_slice_of_string(","), Err(expected.clone()));
    assert_eq!(missing().as_map_of_strings(",", "="), Err(expected));

    assert_eq!(missing().as_integer_with_default(9000), 9000);
    assert!(missing().as_bool_with_default(true));
    assert!(!missing().as_bool_with_default(false));
}

#[test]
fn test_invalid_value_falls_back_to_default() {
    let env = service_env();
    let api_port = env.get("SERVICE_%s_PORT").arg("api");

    assert!(matches!(api_port.as_integer(), Err(EnvError::InvalidInteger { .. })));
    assert_eq!(api_port.as_integer_with_default(80), 80);
}

#[test]
fn test_default_methods_read_once_per_call() {
    let env = service_env();
    env.get("SERVICE_%s_PORT").arg("api").as_integer_with_default(80);

    assert_eq!(env.client().lookups(), vec!["SERVICE_api_PORT"]);
}

#[test]
fn test_slice_separator_is_honored() {
    let client = MockEnvClient::new().with("PATHS", "/usr/bin:/bin, /opt:/sbin");
    let paths = EnvAccessor::with_client(&client, "PATHS").as_slice_of_string(":");

    assert_eq!(
        paths,
        Ok(vec!["/usr/bin".to_string(), "/bin, /opt".to_string(), "/sbin".to_string()])
    );
}

#[test]
fn test_map_separators_are_not_swapped() {
    let client = MockEnvClient::new().with("LABELS", "a:1");
    let accessor = EnvAccessor::with_client(&client, "LABELS");

    let labels = accessor.as_map_of_strings(";", ":").unwrap();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels["a"], "1");

    assert!(matches!(
        accessor.as_map_of_strings(":", ";"),
        Err(EnvError::EmptyMap { ref separator, ref pair_separator, .. })
            if separator == ":" && pair_separator == ";"
    ));
}

#[test]
fn test_error_messages() {
    let client = MockEnvClient::new()
        .with("TIMEOUT", "soon")
        .with("HOSTS", ",")
        .with("LABELS", "x");
    let get = |key: &str| EnvAccessor::with_client(&client, key);

    assert_eq!(
        get("UNSET").as_string().unwrap_err().to_string(),
        "Env 'UNSET' should be set"
    );
    assert_eq!(
        get("TIMEOUT").as_duration().unwrap_err().to_string(),
        "Cant parse 'TIMEOUT' with value 'soon' as time duration"
    );
    assert_eq!(
        get("HOSTS").as_slice_of_string(",").unwrap_err().to_string(),
        "Can't split ',' with separator ',' to slice of strings"
    );
    assert_eq!(
        get("LABELS").as_map_of_strings(",", "=").unwrap_err().to_string(),
        "Can't split 'x' with separator ',' by pair separator '=' as map of strings"
    );
}
