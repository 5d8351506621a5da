use serde_json::json;
use tracing::{error, info, warn};

use shiiutils_rs::{
    constants::{
        CYCLE_ROUNDS_VAR, CYCLE_VALUES_VAR, DEFAULT_CYCLE_ROUNDS, DEFAULT_CYCLE_VALUES,
        LOG_DIRECTIVE,
    },
    error::Result,
    nested,
    utils::{
        count_by::{count_by, count_by_field},
        cycle::cycle,
        deep_clone::deep_clone,
        flatten::{flatten, flatten_value},
        stack::Stack,
    },
};

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    initialize_logging();

    let config = load_configuration();

    if let Err(e) = run_demo(&config) {
        error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

/// Configuration loaded from environment variables
struct Config {
    cycle_values: Vec<String>,
    cycle_rounds: usize,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load configuration from environment variables, falling back to defaults
fn load_configuration() -> Config {
    let raw_values =
        std::env::var(CYCLE_VALUES_VAR).unwrap_or_else(|_| DEFAULT_CYCLE_VALUES.to_string());
    let cycle_values = raw_values
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let cycle_rounds = match std::env::var(CYCLE_ROUNDS_VAR) {
        Ok(raw) => raw.parse::<usize>().unwrap_or_else(|_| {
            warn!(
                "Invalid {} value '{}', using {}",
                CYCLE_ROUNDS_VAR, raw, DEFAULT_CYCLE_ROUNDS
            );
            DEFAULT_CYCLE_ROUNDS
        }),
        Err(_) => DEFAULT_CYCLE_ROUNDS,
    };

    Config {
        cycle_values,
        cycle_rounds,
    }
}

/// Run every helper over a small example and log the results
fn run_demo(config: &Config) -> Result<()> {
    let floors = count_by(&[6.1, 4.2, 6.3], |n: &f64| n.floor() as i64);
    info!("count_by floor: {:?}", floors);

    let users = vec![
        json!({"name": "ada", "role": "admin"}),
        json!({"name": "bob", "role": "guest"}),
        json!({"name": "eve"}),
    ];
    for (key, count) in count_by_field(&users, "role")? {
        info!("count_by role {}: {}", key, count);
    }

    let mut next = cycle(config.cycle_values.clone())?;
    let produced: Vec<String> = (0..config.cycle_rounds).map(|_| next()).collect();
    info!("cycle {:?}: {:?}", config.cycle_values, produced);

    let original = json!({"user": {"role": "admin"}});
    let mut copy = deep_clone(&original);
    copy["user"]["role"] = json!("guest");
    info!("deep_clone original: {}, copy: {}", original, copy);

    let flat = flatten(nested![1, [2, [3, [4]], 5]]);
    info!("flatten: {:?}", flat);
    let flat_json = flatten_value(&json!(["a", ["b", ["c"]], []]))?;
    info!("flatten_value: {:?}", flat_json);

    let mut stack = Stack::new();
    for item in 1..=3 {
        let size = stack.push(item);
        info!("stack push {} -> size {}", item, size);
    }
    info!("stack pop: {:?}", stack.pop());
    info!("stack peek: {:?}", stack.peek());
    while let Some(item) = stack.pop() {
        info!("stack pop: {}", item);
    }
    info!("stack empty: {}", stack.is_empty());

    Ok(())
}
