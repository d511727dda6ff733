//! Concurrent first calls to `setup_logging_with_writer`. Own test binary so
//! no earlier test has installed the global subscriber.

mod helpers;

use std::sync::{Arc, Barrier};
use std::thread;

use chronoscope::{LoggingOptions, setup_logging_with_writer};
use helpers::SharedBuffer;

#[test]
fn test_overlapping_setups_all_succeed() {
    const THREADS: usize = 8;
    let barrier = Arc::new(Barrier::new(THREADS));
    let buffer = SharedBuffer::default();

    let workers: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            let buffer = buffer.clone();
            thread::spawn(move || {
                let options = LoggingOptions {
                    ansi: false,
                    ..Default::default()
                };
                barrier.wait();
                setup_logging_with_writer(&options, buffer)
            })
        })
        .collect();

    for worker in workers {
        let result = worker.join().expect("setup thread panicked");
        assert!(result.is_ok(), "{result:?}");
    }

    if std::env::var_os("RUST_LOG").is_none() {
        tracing::info!("installed once");
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert!(lines[0].ends_with(" - INFO - installed once"), "{lines:?}");
    }
}
