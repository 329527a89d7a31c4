//! Browser console logging.

/// Install the console subscriber and panic hook. A no-op off the browser.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: &str) {
    use tracing_wasm::WASMLayerConfigBuilder;

    console_error_panic_hook::set_once();
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(parse_level(level))
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
    tracing::info!(level, "finance frontend logging initialized");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(_level: &str) {}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn parse_level(level: &str) -> tracing::Level {
    level.parse().unwrap_or(tracing::Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_levels_default_to_info() {
        assert_eq!(parse_level("debug"), tracing::Level::DEBUG);
        assert_eq!(parse_level("WARN"), tracing::Level::WARN);
        assert_eq!(parse_level("chatty"), tracing::Level::INFO);
    }
}
