use super::*;
use std::sync::atomic::AtomicUsize;

fn counting_guard() -> (TerminalGuard, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let guard = TerminalGuard::with_restore(Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }));
    (guard, calls)
}

#[test]
fn guard_restores_on_drop() {
    let (guard, calls) = counting_guard();
    drop(guard);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn restore_runs_at_most_once_across_all_handles() {
    let (guard, calls) = counting_guard();
    let restorer = guard.restorer();
    let clone = restorer.clone();

    restorer.restore().unwrap();
    clone.restore().unwrap();
    drop(guard);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn restore_error_surfaces_once_and_is_not_retried() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let guard = TerminalGuard::with_restore(Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Err(io::Error::other("tty gone"))
    }));
    let restorer = guard.restorer();

    assert!(restorer.restore().is_err());
    assert!(restorer.restore().is_ok());
    drop(guard);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn termination_signals_map_to_shell_exit_codes() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}
