//! Stress tests for concurrent registry use
//!
//! These tests verify:
//! - One instance per name when many threads race on first use
//! - Configuration applies once per name under contention
//! - Concurrent logging through shared loggers loses no records

use ranked_logger::appenders::MemoryAppender;
use ranked_logger::core::config::{GlobalConfig, LoggerConfig};
use ranked_logger::core::log_level::Level;
use ranked_logger::core::registry::LoggerRegistry;
use ranked_logger::core::value::{Shared, Value};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_first_use_builds_one_instance() {
    let registry = Arc::new(
        LoggerRegistry::builder()
            .appender(MemoryAppender::new())
            .build(),
    );
    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.get_logger("contended")
            })
        })
        .collect();

    let loggers: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();

    for logger in &loggers {
        assert!(Arc::ptr_eq(logger, &loggers[0]));
    }
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_concurrent_configured_loggers() {
    let memory = MemoryAppender::new();
    let registry = Arc::new(
        LoggerRegistry::builder()
            .appender(memory.clone())
            .config(
                GlobalConfig::new()
                    .with_default_logger_config(
                        LoggerConfig::new()
                            .with_min_level(Level::Debug)
                            .with_max_level(Level::Critical),
                    )
                    .with_logger("quiet", LoggerConfig::new().with_min_level(Level::Critical)),
            )
            .build(),
    );

    let handles: Vec<_> = (0..8)
        .map(|thread_id| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let name = if thread_id % 2 == 0 { "quiet" } else { "loud" };
                let logger = registry.get_logger(name);
                for i in 0..50 {
                    logger.info(format!("Thread {} - Message {}", thread_id, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    // Only the four "loud" threads pass INFO
    assert_eq!(memory.len(), 4 * 50);
    assert_eq!(registry.metrics().filtered_count(), 4 * 50);
    assert_eq!(registry.get_logger("quiet").max_level(), Level::Critical.rank());
}

#[test]
fn test_payload_snapshot_while_writer_thread_mutates() {
    let memory = MemoryAppender::new();
    let registry = LoggerRegistry::builder().appender(memory.clone()).build();
    let logger = registry.get_logger("snapshots");

    let counter = Shared::new(0);
    let writer = {
        let counter = counter.clone();
        thread::spawn(move || {
            for i in 1..=1000 {
                counter.set(i);
            }
        })
    };

    for _ in 0..100 {
        logger.notice_with_context("tick", Value::Shared(counter.clone()));
    }
    writer.join().expect("writer panicked");

    for record in memory.records() {
        match record.context() {
            Some(Value::Shared(copy)) => assert!(!copy.ptr_eq(&counter)),
            other => panic!("expected snapshot, got {:?}", other),
        }
    }
    assert_eq!(memory.len(), 100);
}
