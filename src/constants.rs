/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "shiiutils_rs=info";

/// Values cycled by the demo when none are configured
pub const DEFAULT_CYCLE_VALUES: &str = "on,off";

/// Number of generator calls made by the demo when none is configured
pub const DEFAULT_CYCLE_ROUNDS: usize = 5;

/// Environment variable holding the comma-separated demo cycle values
pub const CYCLE_VALUES_VAR: &str = "SHIIUTILS_CYCLE_VALUES";

/// Environment variable holding the demo cycle round count
pub const CYCLE_ROUNDS_VAR: &str = "SHIIUTILS_CYCLE_ROUNDS";
