use std::sync::Once;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "debug")] {
        const LOG_ENV: &str = "deep_equal=trace";
    } else {
        const LOG_ENV: &str = "deep_equal=info";
    }
}
const LOG_ENV_DEBUG: &str = "deep_equal=trace";

static INIT: Once = Once::new();

/// Installs the logger once. The `RUST_LOG` environment variable overrides
/// the default specification.
pub fn init_logger() {
    INIT.call_once(|| {
        init(LOG_ENV);
    });
}

/// Installs the logger once with trace output for this crate, for tests.
pub fn init_logger_debug() {
    INIT.call_once(|| {
        init(LOG_ENV_DEBUG);
    });
}

cfg_if! {
    if #[cfg(feature = "flexi_logger")] {
        use log::info;

        fn init(spec: &str) {
            match flexi_logger::Logger::try_with_env_or_str(spec)
                .and_then(|logger| logger.start())
            {
                Ok(handle) => {
                    // dropping the handle would shut the logger down
                    core::mem::forget(handle);
                    info!("Logger initialized! (Using flexi_logger) {spec}");
                }
                Err(error) => {
                    eprintln!("Failed to initialize logger: {error}");
                }
            }
        }
    }

    else {
        fn init(_spec: &str) {
            println!("No logger enabled. Logs will not be recorded.");
        }
    }
}
