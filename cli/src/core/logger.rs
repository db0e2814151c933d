use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    debug: bool,
}

impl Logger {
    pub fn init(debug: bool) {
        let _ = LOGGER.get_or_init(|| Logger { debug });
    }

    fn get() -> &'static Logger {
        LOGGER
            .get()
            .expect("Logger not initialized. Call Logger::init() in main first.")
    }

    pub fn enabled() -> bool {
        Self::get().debug
    }

    pub fn debug(message: &str) {
        if Self::enabled() {
            eprintln!("[debug] {message}");
        }
    }

    pub fn debug_fmt(args: std::fmt::Arguments) {
        if Self::enabled() {
            eprintln!("[debug] {args}");
        }
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::core::logger::Logger::debug_fmt(format_args!($($arg)*))
    };
}
