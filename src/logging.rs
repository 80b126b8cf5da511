use std::sync::Once;

use flexi_logger::Logger;
use log::info;

static LOGGER_INIT: Once = Once::new();

/// Start a stderr logger from a log spec string such as `"debug"` or `"int_set=trace"`.
/// Only the first call has any effect.
pub fn init_logger(spec: &str) {
    LOGGER_INIT.call_once(|| {
        let logger = match Logger::try_with_str(spec) {
            Ok(logger) => logger,
            Err(_) => return,
        };

        logger.log_to_stderr().start().ok(); // Ignore errors if logger is already set

        info!("Logger initialized with spec {:?}", spec);
    });
}
