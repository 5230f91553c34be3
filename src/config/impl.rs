use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Falls back to defaults when `init_config()`
/// has not been called yet.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads configuration from "config.toml" in the current directory plus
/// `SS__*` environment overrides.
///
/// # Examples
/// ```no_run
/// use smartshort::config::init_config;
/// init_config();
/// ```
pub fn init_config() {
    init_config_with(StaticConfig::load());
}

/// Install an already-built configuration (replaces any previous one)
pub fn init_config_with(config: StaticConfig) {
    match CONFIG.get() {
        Some(existing) => existing.store(Arc::new(config)),
        None => {
            if let Err(cell) = CONFIG.set(ArcSwap::from_pointee(config)) {
                // 并发初始化：另一个线程先完成了，覆盖为当前值
                if let Some(existing) = CONFIG.get() {
                    existing.store(cell.load_full());
                }
            }
        }
    }
}
