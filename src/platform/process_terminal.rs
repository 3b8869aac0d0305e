//! Process terminal: raw mode on the controlling TTY, a stdin reader thread and a signal thread.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
#[cfg(unix)]
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
#[cfg(unix)]
use std::thread::{self, JoinHandle};
#[cfg(unix)]
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::config::EnvConfig;
use crate::core::terminal::{EventSink, Terminal};

#[cfg(unix)]
use crate::core::terminal::TerminalEvent;
#[cfg(unix)]
use crate::platform::stdin_buffer::StdinBuffer;
#[cfg(unix)]
use libc::{self, c_int};
#[cfg(unix)]
use signal_hook::consts::{SIGINT, SIGTERM, SIGWINCH};
#[cfg(unix)]
use signal_hook::iterator::{Handle, Signals};

const DEFAULT_COLUMNS: u16 = 80;
const DEFAULT_ROWS: u16 = 24;
#[cfg(unix)]
const ESCAPE_TIMEOUT_MS: u64 = 10;
#[cfg(unix)]
const POLL_INTERVAL_MS: i32 = 50;

#[cfg(unix)]
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0))
        .as_millis() as u64
}

#[cfg(unix)]
fn wait_writable(fd: c_int) -> io::Result<()> {
    let mut fds = libc::pollfd {
        fd,
        events: libc::POLLOUT,
        revents: 0,
    };
    loop {
        let result = unsafe { libc::poll(&mut fds, 1, -1) };
        if result < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }
        if result == 0 {
            continue;
        }
        if (fds.revents & libc::POLLOUT) != 0 {
            return Ok(());
        }

        return Err(io::Error::other(format!(
            "poll(POLLOUT) returned revents=0x{:x}",
            fds.revents
        )));
    }
}

/// Write every byte, retrying on EINTR and waiting out EAGAIN.
#[cfg(unix)]
fn write_all_fd_with<FWrite, FWait>(
    fd: c_int,
    bytes: &[u8],
    mut write_once: FWrite,
    mut wait_writable: FWait,
) -> io::Result<()>
where
    FWrite: FnMut(c_int, &[u8]) -> io::Result<usize>,
    FWait: FnMut(c_int) -> io::Result<()>,
{
    let mut written = 0;
    while written < bytes.len() {
        match write_once(fd, &bytes[written..]) {
            Ok(0) => {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "write returned 0"));
            }
            Ok(count) => {
                if count > bytes.len() - written {
                    return Err(io::Error::other("write returned more bytes than requested"));
                }
                written += count;
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) if err.kind() == io::ErrorKind::WouldBlock => wait_writable(fd)?,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

#[cfg(unix)]
fn write_fd(fd: c_int, data: &str) -> io::Result<()> {
    if data.is_empty() {
        return Ok(());
    }
    write_all_fd_with(
        fd,
        data.as_bytes(),
        |fd, buf| {
            let result = unsafe { libc::write(fd, buf.as_ptr() as *const libc::c_void, buf.len()) };
            if result < 0 {
                Err(io::Error::last_os_error())
            } else {
                Ok(result as usize)
            }
        },
        wait_writable,
    )
}

#[cfg(unix)]
fn read_winsize(fd: c_int) -> Option<(u16, u16)> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut size) };
    if result == 0 && size.ws_col > 0 && size.ws_row > 0 {
        Some((size.ws_col, size.ws_row))
    } else {
        None
    }
}

#[cfg(unix)]
fn poll_readable(fd: c_int, timeout_ms: i32) -> bool {
    let mut fds = libc::pollfd {
        fd,
        events: libc::POLLIN,
        revents: 0,
    };
    let result = unsafe { libc::poll(&mut fds, 1, timeout_ms) };
    result > 0 && (fds.revents & libc::POLLIN) != 0
}

#[cfg(unix)]
fn get_termios(fd: c_int) -> io::Result<libc::termios> {
    let mut termios = unsafe { std::mem::zeroed::<libc::termios>() };
    let result = unsafe { libc::tcgetattr(fd, &mut termios) };
    if result != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(termios)
}

#[cfg(unix)]
fn set_termios(fd: c_int, termios: &libc::termios) -> io::Result<()> {
    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, termios) };
    if result != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// Appends a copy of terminal output to a file. Gives up silently after the first failure.
#[derive(Debug, Default)]
struct WriteLog {
    path: Option<PathBuf>,
    failed: bool,
}

impl WriteLog {
    fn record(&mut self, data: &str) {
        if self.failed {
            return;
        }
        let Some(path) = self.path.as_ref() else {
            return;
        };
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(data.as_bytes()));
        if result.is_err() {
            self.failed = true;
        }
    }
}

#[cfg(unix)]
pub struct ProcessTerminal {
    stdin_fd: c_int,
    stdout_fd: c_int,
    original_termios: Option<libc::termios>,
    input_thread: Option<JoinHandle<()>>,
    stop_flag: Arc<AtomicBool>,
    drain_mode: Arc<AtomicBool>,
    last_input_time: Arc<AtomicU64>,
    write_log: WriteLog,
    signal_handle: Option<Handle>,
    signal_thread: Option<JoinHandle<()>>,
}

#[cfg(unix)]
impl ProcessTerminal {
    /// Terminal on stdin/stdout, teeing output to `JOURNEY_WRITE_LOG` when set.
    pub fn new() -> Self {
        Self::with_config(&EnvConfig::from_env())
    }

    pub fn with_config(config: &EnvConfig) -> Self {
        Self {
            stdin_fd: libc::STDIN_FILENO,
            stdout_fd: libc::STDOUT_FILENO,
            original_termios: None,
            input_thread: None,
            stop_flag: Arc::new(AtomicBool::new(false)),
            drain_mode: Arc::new(AtomicBool::new(false)),
            last_input_time: Arc::new(AtomicU64::new(now_ms())),
            write_log: WriteLog {
                path: config.write_log.as_ref().map(PathBuf::from),
                failed: false,
            },
            signal_handle: None,
            signal_thread: None,
        }
    }

    fn enable_raw_mode(&mut self) -> io::Result<()> {
        let original = match self.original_termios {
            Some(original) => original,
            None => {
                let original = get_termios(self.stdin_fd)?;
                self.original_termios = Some(original);
                original
            }
        };
        let mut raw = original;
        unsafe {
            libc::cfmakeraw(&mut raw);
        }
        set_termios(self.stdin_fd, &raw)
    }

    fn restore_raw_mode(&mut self) -> io::Result<()> {
        if let Some(original) = self.original_termios.as_ref() {
            set_termios(self.stdin_fd, original)?;
        }
        Ok(())
    }

    fn start_input_thread(&mut self, events: Arc<dyn EventSink>) {
        let stdin_fd = self.stdin_fd;
        let stop_flag = Arc::clone(&self.stop_flag);
        let drain_mode = Arc::clone(&self.drain_mode);
        let last_input_time = Arc::clone(&self.last_input_time);

        self.input_thread = Some(thread::spawn(move || {
            let mut buffer = [0u8; 4096];
            let mut stdin_buffer = StdinBuffer::new(ESCAPE_TIMEOUT_MS);

            while !stop_flag.load(Ordering::SeqCst) {
                let now = Instant::now();
                let timeout_ms = stdin_buffer.next_timeout_ms(now, POLL_INTERVAL_MS);
                let sequences = if poll_readable(stdin_fd, timeout_ms) {
                    let read_len = unsafe {
                        libc::read(stdin_fd, buffer.as_mut_ptr() as *mut _, buffer.len())
                    };
                    if read_len <= 0 {
                        Vec::new()
                    } else {
                        last_input_time.store(now_ms(), Ordering::SeqCst);
                        stdin_buffer.process(&buffer[..read_len as usize])
                    }
                } else {
                    stdin_buffer.flush_due(now)
                };

                if drain_mode.load(Ordering::SeqCst) {
                    continue;
                }
                for sequence in sequences {
                    events.push(TerminalEvent::Input(sequence.into_wire()));
                }
            }
        }));
    }

    fn stop_input_thread(&mut self) {
        self.stop_flag.store(true, Ordering::SeqCst);
        if let Some(handle) = self.input_thread.take() {
            let _ = handle.join();
        }
    }

    fn start_signal_thread(&mut self, events: Arc<dyn EventSink>) -> io::Result<()> {
        let mut signals = Signals::new([SIGWINCH, SIGINT, SIGTERM])?;
        let handle = signals.handle();

        let thread = thread::spawn(move || {
            for signal in signals.forever() {
                match signal {
                    SIGWINCH => events.push(TerminalEvent::Resize),
                    _ => events.push(TerminalEvent::Interrupt),
                }
            }
        });

        self.signal_handle = Some(handle);
        self.signal_thread = Some(thread);
        Ok(())
    }

    fn stop_signal_thread(&mut self) {
        if let Some(handle) = self.signal_handle.take() {
            handle.close();
        }
        if let Some(thread) = self.signal_thread.take() {
            let _ = thread.join();
        }
    }
}

#[cfg(unix)]
impl Default for ProcessTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
impl Terminal for ProcessTerminal {
    fn start(&mut self, events: Arc<dyn EventSink>) -> io::Result<()> {
        self.stop_flag.store(false, Ordering::SeqCst);
        self.drain_mode.store(false, Ordering::SeqCst);
        self.last_input_time.store(now_ms(), Ordering::SeqCst);

        self.enable_raw_mode()?;
        if let Err(err) = self.start_signal_thread(Arc::clone(&events)) {
            let _ = self.restore_raw_mode();
            return Err(err);
        }
        // Deliver the starting size through the same channel as later changes.
        unsafe {
            libc::raise(SIGWINCH);
        }

        self.start_input_thread(events);
        Ok(())
    }

    fn stop(&mut self) -> io::Result<()> {
        self.stop_input_thread();
        self.stop_signal_thread();

        // Flush input before leaving raw mode so buffered bytes do not leak to the shell.
        let _ = unsafe { libc::tcflush(self.stdin_fd, libc::TCIFLUSH) };

        self.restore_raw_mode()
    }

    fn drain_input(&mut self, max_ms: u64, idle_ms: u64) {
        self.drain_mode.store(true, Ordering::SeqCst);
        self.last_input_time.store(now_ms(), Ordering::SeqCst);

        let end_time = now_ms().saturating_add(max_ms);
        loop {
            let now = now_ms();
            if now >= end_time {
                break;
            }
            let last_input = self.last_input_time.load(Ordering::SeqCst);
            if now.saturating_sub(last_input) >= idle_ms {
                break;
            }

            let remaining = end_time.saturating_sub(now);
            thread::sleep(Duration::from_millis(idle_ms.min(remaining).max(1)));
        }

        self.drain_mode.store(false, Ordering::SeqCst);
    }

    fn write(&mut self, data: &str) -> io::Result<()> {
        write_fd(self.stdout_fd, data)?;
        self.write_log.record(data);
        Ok(())
    }

    fn columns(&self) -> u16 {
        read_winsize(self.stdout_fd)
            .map(|(cols, _)| cols)
            .unwrap_or(DEFAULT_COLUMNS)
    }

    fn rows(&self) -> u16 {
        read_winsize(self.stdout_fd)
            .map(|(_, rows)| rows)
            .unwrap_or(DEFAULT_ROWS)
    }
}

/// Placeholder for platforms without termios; `start` always fails.
#[cfg(not(unix))]
#[derive(Debug, Default)]
pub struct ProcessTerminal {
    write_log: WriteLog,
}

#[cfg(not(unix))]
impl ProcessTerminal {
    pub fn new() -> Self {
        Self::with_config(&EnvConfig::from_env())
    }

    pub fn with_config(config: &EnvConfig) -> Self {
        Self {
            write_log: WriteLog {
                path: config.write_log.as_ref().map(PathBuf::from),
                failed: false,
            },
        }
    }
}

#[cfg(not(unix))]
impl Terminal for ProcessTerminal {
    fn start(&mut self, _events: Arc<dyn EventSink>) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "raw terminal mode is only supported on unix",
        ))
    }

    fn stop(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn drain_input(&mut self, _max_ms: u64, _idle_ms: u64) {}

    fn write(&mut self, data: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(data.as_bytes())?;
        stdout.flush()?;
        self.write_log.record(data);
        Ok(())
    }

    fn columns(&self) -> u16 {
        DEFAULT_COLUMNS
    }

    fn rows(&self) -> u16 {
        DEFAULT_ROWS
    }
}
