//! Process-wide panic hook that records panic details for active captures.

use std::backtrace::Backtrace;
use std::cell::{Cell, RefCell};
use std::panic;
use std::sync::Once;

/// Details recorded by the hook for the panicking thread.
#[derive(Debug, Clone)]
pub(crate) struct PanicDetails {
    /// `file:line:column` of the panic, if known.
    pub location: Option<String>,
    /// Rendered backtrace taken inside the hook.
    pub backtrace: String,
}

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static LAST_PANIC: RefCell<Option<PanicDetails>> = const { RefCell::new(None) };
}

static INSTALL: Once = Once::new();

/// Installs the hook once. Panics on threads without an active capture are
/// forwarded to whatever hook was installed before.
fn install() {
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !CAPTURING.with(Cell::get) {
                previous(info);
                return;
            }

            let details = PanicDetails {
                location: info
                    .location()
                    .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column())),
                backtrace: Backtrace::force_capture().to_string(),
            };
            LAST_PANIC.with(|slot| *slot.borrow_mut() = Some(details));
        }));
    });
}

/// Runs `f` with capturing enabled on the current thread.
///
/// Returns the unwind result together with the details the hook recorded,
/// if `f` panicked.
pub(crate) fn capture<F, T>(f: F) -> (std::thread::Result<T>, Option<PanicDetails>)
where
    F: FnOnce() -> T + panic::UnwindSafe,
{
    install();

    LAST_PANIC.with(|slot| slot.borrow_mut().take());
    let was_capturing = CAPTURING.with(|flag| flag.replace(true));
    let result = panic::catch_unwind(f);
    CAPTURING.with(|flag| flag.set(was_capturing));

    let details = LAST_PANIC.with(|slot| slot.borrow_mut().take());
    (result, details)
}
