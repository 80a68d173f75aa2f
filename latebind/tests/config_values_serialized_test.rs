use latebind::config_values::{
    ConfigEnv, ConfigValueComputed, ConfigValueEntry, ConfigValueSource, DefinedAt, PageConfig,
    get_config_values_serialized,
};
use latebind::error::LatebindError;
use latebind::value::ConfigValue;

fn computed(value: ConfigValue, config_env: ConfigEnv) -> ConfigValueComputed {
    ConfigValueComputed { value, config_env }
}

fn entry(value: ConfigValue, file_path: &str) -> ConfigValueEntry {
    ConfigValueEntry {
        value,
        defined_at: DefinedAt::new(file_path),
    }
}

#[test]
fn serializes_a_page_config_end_to_end() {
    let mut page_config = PageConfig::default();
    page_config.config_values_computed.insert(
        "title".to_string(),
        computed(ConfigValue::String("Home".to_string()), ConfigEnv::Server),
    );
    page_config.config_values.insert(
        "title".to_string(),
        entry(ConfigValue::String("Home".to_string()), "/pages/+config.ts"),
    );
    page_config.config_values_computed.insert(
        "ssr".to_string(),
        computed(ConfigValue::Bool(true), ConfigEnv::ServerAndClient),
    );
    page_config.config_values.insert(
        "ssr".to_string(),
        entry(ConfigValue::Bool(true), "/pages/+config.ts"),
    );
    page_config.config_values_computed.insert(
        "hydrate".to_string(),
        computed(ConfigValue::Bool(false), ConfigEnv::Client),
    );
    page_config.config_values.insert(
        "hydrate".to_string(),
        entry(ConfigValue::Bool(false), "/pages/+config.ts"),
    );

    let server_only = |env: &ConfigEnv, _: Option<&ConfigValueSource>| {
        matches!(env, ConfigEnv::Server | ConfigEnv::ServerAndClient)
    };
    let out = get_config_values_serialized(&page_config, server_only).unwrap();
    assert_eq!(
        out,
        "config.title = \"\\\"Home\\\"\";\nconfig.ssr = \"true\";"
    );
}

#[test]
fn override_sources_are_emitted_after_computed_values() {
    let mut page_config = PageConfig::default();
    page_config.config_values_computed.insert(
        "title".to_string(),
        computed(ConfigValue::String("Home".to_string()), ConfigEnv::Server),
    );
    page_config.config_values.insert(
        "title".to_string(),
        entry(ConfigValue::String("Home".to_string()), "/pages/+config.ts"),
    );
    page_config.config_value_sources.insert(
        "description".to_string(),
        ConfigValueSource {
            config_name: "description".to_string(),
            config_env: ConfigEnv::Server,
            defined_at: DefinedAt::new("/pages/+description.ts"),
        },
    );
    page_config.config_values.insert(
        "description".to_string(),
        entry(
            ConfigValue::String("About".to_string()),
            "/pages/+description.ts",
        ),
    );

    let out = get_config_values_serialized(&page_config, |_, _| true).unwrap();
    assert_eq!(
        out,
        "config.title = \"\\\"Home\\\"\";\nconfig.description = \"\\\"About\\\"\";"
    );
}

#[test]
fn a_function_valued_config_fails_with_guidance() {
    let mut page_config = PageConfig::default();
    page_config.config_values_computed.insert(
        "onRenderClient".to_string(),
        computed(
            ConfigValue::Function {
                name: Some("onRenderClient".to_string()),
            },
            ConfigEnv::Client,
        ),
    );
    page_config.config_values.insert(
        "onRenderClient".to_string(),
        entry(
            ConfigValue::Function {
                name: Some("onRenderClient".to_string()),
            },
            "/renderer/+config.ts",
        ),
    );

    let err = get_config_values_serialized(&page_config, |_, _| true).unwrap_err();
    let LatebindError::Usage { message } = err else {
        panic!("expected a usage error");
    };
    assert!(message.contains("onRenderClient"));
    assert!(message.contains("/renderer/+config.ts"));
    assert!(message.contains("imported"));
}
