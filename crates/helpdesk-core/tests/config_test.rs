use helpdesk_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = HelpdeskConfig::from_toml("").unwrap();

    // Storage defaults
    assert_eq!(config.storage.db_path, "helpdesk.db");
    assert_eq!(config.storage.busy_timeout_ms, 5_000);
    assert_eq!(config.storage.read_pool_size, 4);

    // Embedding defaults
    assert_eq!(config.embedding.provider, "api");
    assert_eq!(config.embedding.dimensions, 1536);
    assert_eq!(config.embedding.batch_size, 50);

    // Completion defaults
    assert_eq!(config.completion.provider, "api");
    assert!((config.completion.temperature - 0.3).abs() < f32::EPSILON);

    // Similarity defaults
    assert_eq!(config.similarity.threshold, 0.5);
    assert_eq!(config.similarity.top_k, 5);

    // Reconciliation defaults
    assert_eq!(config.reconciliation.agreement_pattern_weight, 0.4);
    assert_eq!(config.reconciliation.agreement_history_weight, 0.6);
    assert_eq!(config.reconciliation.partial_pattern_weight, 0.7);
    assert_eq!(config.reconciliation.partial_history_weight, 0.3);
    assert_eq!(config.reconciliation.history_override_threshold, 70);
    assert_eq!(config.reconciliation.disagreement_cap, 70);

    // Session defaults
    assert_eq!(config.session.max_turns, 10);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.taxonomy_path.is_none());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[storage]
db_path = "/var/lib/helpdesk/history.db"

[reconciliation]
disagreement_cap = 60

[similarity]
top_k = 8
"#;
    let config = HelpdeskConfig::from_toml(toml).unwrap();
    assert_eq!(config.storage.db_path, "/var/lib/helpdesk/history.db");
    assert_eq!(config.storage.read_pool_size, 4); // default
    assert_eq!(config.reconciliation.disagreement_cap, 60);
    assert_eq!(config.reconciliation.history_override_threshold, 70); // default
    assert_eq!(config.similarity.top_k, 8);
    assert_eq!(config.similarity.threshold, 0.5); // default
}

#[test]
fn config_rejects_malformed_toml() {
    let err = HelpdeskConfig::from_toml("[storage\ndb_path = 1").unwrap_err();
    assert!(err.to_string().contains("config error"));
}

#[test]
fn config_serde_roundtrip() {
    let config = HelpdeskConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = HelpdeskConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.storage.db_path, config.storage.db_path);
    assert_eq!(roundtripped.reconciliation, config.reconciliation);
}

#[test]
fn builtin_taxonomy_used_without_path() {
    let config = HelpdeskConfig::default();
    let taxonomy = config.load_taxonomy().unwrap();
    assert!(taxonomy.contains("Network Operations"));
}

#[test]
fn taxonomy_loaded_from_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("groups.toml");
    std::fs::write(
        &path,
        "[[groups]]\nname = \"Facilities\"\nresponsibilities = \"Buildings\"\n",
    )
    .unwrap();

    let config = HelpdeskConfig {
        taxonomy_path: Some(path.display().to_string()),
        ..Default::default()
    };
    let taxonomy = config.load_taxonomy().unwrap();
    assert_eq!(taxonomy.names(), vec!["Facilities"]);
}

#[test]
fn missing_taxonomy_file_is_config_error() {
    let config = HelpdeskConfig {
        taxonomy_path: Some("/nonexistent/groups.toml".to_string()),
        ..Default::default()
    };
    assert!(config.load_taxonomy().is_err());
}
