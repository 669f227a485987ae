//! Configuring the process-wide registry from JSON
//!
//! Run with: cargo run --example json_config

use ranked_logger::prelude::*;

const CONFIG: &str = r#"{
    "defaultLoggerConfig": { "minLevel": "notice", "maxLevel": "critical" },
    "loggers": {
        "sql": { "minLevel": "debug" },
        "http": { "minLevel": "error" }
    }
}"#;

fn main() -> Result<()> {
    // Configuration is consulted when a name is first requested, so apply it
    // before asking for any logger.
    ranked_logger::configure(GlobalConfig::from_json_str(CONFIG)?);

    let sql = ranked_logger::get_logger("sql");
    let http = ranked_logger::get_logger("http");
    let jobs = ranked_logger::get_logger("jobs");

    sql.debug(Value::list([Value::from("SELECT * FROM users WHERE id ="), Value::from(7)]));
    http.warning("filtered: below error");
    http.error_with_context("upstream timeout", Value::object([("status", 504)]));
    jobs.notice("nightly job scheduled");
    jobs.info("filtered: below notice");

    for name in ranked_logger::global().logger_names() {
        let logger = ranked_logger::get_logger(&name);
        println!(
            "{:>5}: [{}, {}]",
            name,
            logger.min_level(),
            logger.max_level()
        );
    }

    ranked_logger::global().flush()
}
