use super::*;

fn test_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .unwrap()
}

#[test]
fn delivers_ticks_while_running() {
    let runtime = test_runtime();
    let mut ticker = Ticker::new(runtime.handle().clone(), Duration::from_millis(10));
    ticker.start();
    assert!(ticker.is_running());

    std::thread::sleep(Duration::from_millis(120));
    assert!(ticker.poll_ticks() >= 1);
}

#[test]
fn stop_discards_ticks_already_queued() {
    let runtime = test_runtime();
    let mut ticker = Ticker::new(runtime.handle().clone(), Duration::from_millis(5));
    ticker.start();
    std::thread::sleep(Duration::from_millis(100));
    ticker.stop();

    assert!(!ticker.is_running());
    assert_eq!(ticker.poll_ticks(), 0);
}

#[test]
fn restart_discards_ticks_from_the_previous_task() {
    let runtime = test_runtime();
    let mut ticker = Ticker::new(runtime.handle().clone(), Duration::from_millis(5));
    ticker.start();
    std::thread::sleep(Duration::from_millis(100));

    // Queued messages carry the old generation and must not count.
    ticker.start();
    assert_eq!(ticker.poll_ticks(), 0);
}

#[test]
fn not_running_until_started() {
    let runtime = test_runtime();
    let mut ticker = Ticker::new(runtime.handle().clone(), Duration::from_millis(10));
    assert!(!ticker.is_running());
    assert_eq!(ticker.poll_ticks(), 0);
    ticker.start();
    assert!(ticker.is_running());
    ticker.stop();
    assert!(!ticker.is_running());
}
