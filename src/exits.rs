//! Exit handling: signal handlers and terminal restoration.

#[cfg(unix)]
use std::sync::OnceLock;

/// Terminal attributes captured at startup, restored on the way out.
#[cfg(unix)]
static SAVED_TERMIOS: OnceLock<libc::termios> = OnceLock::new();

/// Remember the current stdin attributes, if stdin is a terminal.
#[cfg(unix)]
fn save_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            let _ = SAVED_TERMIOS.set(termios);
        }
    }
}

/// Put back whatever `save_termios` captured. Async-signal-safe.
#[cfg(unix)]
fn restore_termios() {
    if let Some(termios) = SAVED_TERMIOS.get() {
        unsafe {
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, termios);
        }
    }
}

/// Show the cursor and clear attributes, only when stdout is a TTY.
#[cfg(unix)]
fn restore_cursor() {
    const SEQ: &[u8] = b"\x1b[0m\x1b[?25h";
    unsafe {
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            libc::write(
                libc::STDOUT_FILENO,
                SEQ.as_ptr() as *const libc::c_void,
                SEQ.len(),
            );
        }
    }
}

#[cfg(unix)]
extern "C" fn cleanup_on_exit() {
    restore_termios();
}

/// SIGINT/SIGTERM/SIGHUP: restore the terminal and leave without unwinding.
#[cfg(unix)]
extern "C" fn on_terminate(sig: libc::c_int) {
    restore_termios();
    restore_cursor();
    unsafe { libc::_exit(128 + sig) }
}

/// SIGSEGV/SIGABRT: restore the terminal, then re-raise for the default action.
#[cfg(unix)]
extern "C" fn on_crash(sig: libc::c_int) {
    restore_termios();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Capture terminal state and install handlers. Call first thing in main().
#[cfg(unix)]
pub fn install_handlers() {
    save_termios();
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, on_terminate as *const () as libc::sighandler_t);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, on_crash as *const () as libc::sighandler_t);
        }
    }
}

#[cfg(not(unix))]
pub fn install_handlers() {}

/// Keep secrets out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    if unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) } != 0 {
        tracing::debug!("PR_SET_DUMPABLE failed");
    }
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}
