use std::env;

pub fn init(verbose: bool) {
    let level = if verbose || env_flag() { "debug" } else { "info" };
    let env = env_logger::Env::default().default_filter_or(level);
    // A host that already installed a logger keeps it
    let _ = env_logger::Builder::from_env(env)
        .format_target(false)
        .try_init();
    log::debug!("verbose logging enabled");
}

pub fn env_flag() -> bool {
    env::var("PLACES_SYNC_VERBOSE")
        .map(|value| parse_bool(value.trim()))
        .unwrap_or(false)
}

fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
