//! Basic logger usage example
//!
//! Demonstrates named loggers, the default admission window and context
//! payloads on the console.
//!
//! Run with: cargo run --example basic_usage

use ranked_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Ranked Logger - Basic Usage Example ===\n");

    let registry = LoggerRegistry::builder()
        .appender(ConsoleAppender::with_colors(true))
        .build();

    println!("1. Default window (NOTICE and above):");
    let app = registry.get_logger("app");
    app.critical("This is a critical message");
    app.error("This is an error message");
    app.warning("This is a warning message");
    app.notice("This is a notice message");
    app.info("This info message is filtered");
    app.debug("This debug message is filtered");

    println!("\n2. Narrowing the window on a live logger:");
    app.set_min_level(Level::Warning).set_max_level(Level::Error);
    app.critical("Critical is now above the window (hidden)");
    app.error("Error (visible)");
    app.warning("Warning (visible)");

    println!("\n3. Context payloads are snapshotted:");
    let session = Shared::new(Value::object([("user", "alice"), ("step", "login")]));
    app.error_with_context("Session failed", Value::Shared(session.clone()));
    session.set(Value::object([("user", "alice"), ("step", "logout")]));

    println!("\n4. Unknown level names report once and are dropped:");
    app.log("verbose", "never shown");

    registry.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
