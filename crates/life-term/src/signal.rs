// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Signal handlers: resize and interrupt.
//
// Two signals, two very different handlers:
//
//   SIGWINCH only flags. The handler stores `true` into an `AtomicBool` and
//   returns. The render loop swaps it back to `false` once per generation,
//   after draw, sleep and evolve, so a resize never tears a generation.
//
//   SIGINT ends the process from inside the handler. It writes the restore
//   bytes (show cursor, full reset) with one raw `write(2)` and calls
//   `_exit(0)`. Both are on the POSIX async-signal-safe list; nothing here
//   allocates, formats, or takes the stdout lock. The grid is never touched;
//   process exit reclaims it.
//
// Handlers are installed once for the lifetime of the process.

#[cfg(unix)]
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

// ─── Resize Flag ─────────────────────────────────────────────────────────────

/// Process-wide flag set by the SIGWINCH handler.
///
/// Written only by the handler (`true`), read and cleared only by the render
/// loop between generations.
pub static RESIZE_PENDING: AtomicBool = AtomicBool::new(false);

/// Consume a pending resize: returns `true` at most once per signal burst.
#[inline]
pub fn take_resize(flag: &AtomicBool) -> bool {
    flag.swap(false, Ordering::AcqRel)
}

// ─── Installation ────────────────────────────────────────────────────────────

#[cfg(unix)]
static HANDLERS_INSTALLED: Once = Once::new();

/// Install the SIGWINCH and SIGINT handlers (once per process).
#[cfg(unix)]
pub fn install_handlers() {
    HANDLERS_INSTALLED.call_once(|| {
        let _ = install(libc::SIGWINCH, sigwinch_handler);
        let _ = install(libc::SIGINT, sigint_handler);
        log::debug!("installed SIGWINCH and SIGINT handlers");
    });
}

#[cfg(not(unix))]
pub fn install_handlers() {
    // No-op on non-unix platforms.
}

/// Register `handler` for `signum`. A failure is logged and reported as
/// `false`; the simulator keeps running without that handler.
#[cfg(unix)]
fn install(signum: libc::c_int, handler: extern "C" fn(libc::c_int)) -> bool {
    let result = unsafe {
        let mut sa: libc::sigaction = std::mem::zeroed();
        sa.sa_sigaction = handler as *const () as usize;
        sa.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&raw mut sa.sa_mask);
        libc::sigaction(signum, &raw const sa, std::ptr::null_mut())
    };

    if result != 0 {
        log::warn!(
            "failed to install handler for signal {signum}: {}",
            std::io::Error::last_os_error()
        );
        return false;
    }
    true
}

// ─── Handlers ────────────────────────────────────────────────────────────────

#[cfg(unix)]
extern "C" fn sigwinch_handler(_sig: libc::c_int) {
    RESIZE_PENDING.store(true, Ordering::Release);
}

#[cfg(unix)]
extern "C" fn sigint_handler(_sig: libc::c_int) {
    crate::terminal::emergency_restore();
    unsafe { libc::_exit(libc::EXIT_SUCCESS) }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
