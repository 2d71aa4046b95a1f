use figment::Jail;
use lgx_config::LogixConfig;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("LOGIX_API__TIMEOUT_SECS", "42");
        jail.set_env("LOGIX_GENERAL__DEFAULT_LIMIT", "5");

        let config = LogixConfig::load().expect("config loads");
        assert_eq!(config.api.timeout_secs, 42);
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn unset_env_keeps_defaults() {
    Jail::expect_with(|_jail| {
        let config = LogixConfig::load().expect("config loads");
        assert_eq!(config.api.user_agent, "logix-cli/0.1");
        Ok(())
    });
}
