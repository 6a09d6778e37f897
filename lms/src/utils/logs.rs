use crate::core::domain::Configuration;

// setup_tracing installs the global subscriber; later calls are no-ops.
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.max_level())
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false);

    let res = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if res.is_ok() {
        tracing::info!(branch_id = config.branch_id.as_str(), "tracing initialized");
    }
}
