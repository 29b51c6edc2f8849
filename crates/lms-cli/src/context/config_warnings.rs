use lms_config::{ApiConfig, LmsConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &LmsConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LmsConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.auth.is_configured() && has_single_underscore_key(&env_keys, "LMS_AUTH") {
        warnings.push(
            "Auth config appears default while LMS_AUTH_* env vars exist. Use double underscores (example: LMS_AUTH__TOKEN)."
                .to_string(),
        );
    }

    if config.api.base_url == ApiConfig::default().base_url
        && has_single_underscore_key(&env_keys, "LMS_API")
    {
        warnings.push(
            "API config appears default while LMS_API_* env vars exist. Use double underscores (example: LMS_API__BASE_URL)."
                .to_string(),
        );
    }

    if config.api.base_url.starts_with("http://")
        && !config.api.base_url.contains("localhost")
        && !config.api.base_url.contains("127.0.0.1")
        && config.auth.is_configured()
    {
        warnings.push(format!(
            "Bearer token will be sent over plain HTTP to {}.",
            config.api.base_url
        ));
    }

    warnings
}

/// `LMS_AUTH_TOKEN` (one underscore) instead of `LMS_AUTH__TOKEN`.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
