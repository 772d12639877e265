//! Line transport to the actuator.
//!
//! The device speaks newline-terminated ASCII. Optionally it announces
//! itself with a `RDY` line, after which the host sends one framed command
//! stream.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::time::Duration;

use waypath_core::{Error, Result};

/// Line the device sends when it is ready to receive.
pub const READY: &str = "RDY";

/// A line-buffered, bidirectional byte channel.
pub struct Link<T: Read + Write> {
    inner: BufReader<T>,
    pending: Vec<u8>,
}

impl<T: Read + Write> Link<T> {
    /// Wrap a channel.
    pub fn new(channel: T) -> Self {
        Self {
            inner: BufReader::new(channel),
            pending: Vec::new(),
        }
    }

    /// Read one line, decoding invalid UTF-8 lossily.
    ///
    /// Read timeouts are retried and keep any partial line. Returns `None`
    /// at EOF.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        loop {
            match self.inner.read_until(b'\n', &mut self.pending) {
                Ok(0) if self.pending.is_empty() => return Ok(None),
                Ok(_) => {
                    let line = String::from_utf8_lossy(&self.pending).trim().to_string();
                    self.pending.clear();
                    if !line.is_empty() {
                        log::info!("< {line}");
                    }
                    return Ok(Some(line));
                }
                Err(e) if is_retryable(e.kind()) => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Block until the device sends [`READY`].
    pub fn wait_ready(&mut self) -> Result<()> {
        log::info!("waiting for {READY}...");
        loop {
            match self.read_line()? {
                Some(line) if line == READY => return Ok(()),
                Some(_) => {}
                None => {
                    return Err(Error::Io(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        format!("link closed before {READY}"),
                    )));
                }
            }
        }
    }

    /// Send each line followed by `\n`, then flush.
    pub fn send_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        let w = self.inner.get_mut();
        for line in lines {
            let line = line.as_ref();
            log::info!("> {line}");
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
        }
        w.flush()?;
        Ok(())
    }

    /// Unwrap the channel. Buffered but unread input is dropped.
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

fn is_retryable(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
    )
}

/// Open a serial device for a [`Link`].
pub fn open_serial(
    port: &str,
    baud: u32,
    timeout: Duration,
) -> Result<Box<dyn serialport::SerialPort>> {
    log::info!("opening {port} at {baud} baud");
    serialport::new(port, baud)
        .timeout(timeout)
        .open()
        .map_err(|e| Error::Io(io::Error::other(format!("open {port} failed: {e}"))))
}
