use example_logger::{LevelFilter, Logger};

#[test]
fn init_json_console_keeps_name() {
    let logger = Logger::builder()
        .name("integration-json")
        .json(true)
        .env_filter("integration=debug")
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!("hello from integration test");

    assert_eq!(logger.name(), "integration-json");
}
