/*
[INPUT]:  Log filter directives, tracing output bytes
[OUTPUT]: Installed tracing subscriber (stderr or in-memory ring buffer)
[POS]:    Binary logging setup shared by both front ends
[UPDATE]: When changing log destinations or buffer capacity
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

pub const LOG_BUFFER_CAPACITY: usize = 500;

pub type LogBufferHandle = Arc<Mutex<LogBuffer>>;

/// Bounded line buffer; the oldest line is dropped once full.
#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn handle(capacity: usize) -> LogBufferHandle {
        Arc::new(Mutex::new(Self::new(capacity)))
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// Lock a buffer even if a writer panicked while holding it.
pub fn lock_buffer(buffer: &LogBufferHandle) -> MutexGuard<'_, LogBuffer> {
    buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial.drain(..=pos);
            lock_buffer(&self.buffer).push_line(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            lock_buffer(&self.buffer).push_line(line);
        }
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

/// Prompt mode: human-readable lines on stderr so stdout stays for results.
pub fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

/// Form mode: lines go to the in-memory buffer rendered by the log panel.
pub fn init_tracing_with_buffer(log_level: &str, buffer: LogBufferHandle) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(LogWriterFactory::new(buffer))
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_drops_oldest_line_when_full() {
        let mut buffer = LogBuffer::new(2);
        buffer.push_line("one".into());
        buffer.push_line("two".into());
        buffer.push_line("three".into());
        assert_eq!(buffer.snapshot(), vec!["two", "three"]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut buffer = LogBuffer::new(0);
        buffer.push_line("ignored".into());
        assert!(buffer.snapshot().is_empty());
    }

    #[test]
    fn writer_splits_lines_and_flushes_tail() {
        let handle = LogBuffer::handle(10);
        let factory = LogWriterFactory::new(handle.clone());
        {
            let mut writer = factory.make_writer();
            writer.write_all(b"first\r\nsec").unwrap();
            writer.write_all(b"ond\nthird").unwrap();
        }
        assert_eq!(lock_buffer(&handle).snapshot(), vec!["first", "second", "third"]);
    }

    #[test]
    fn bad_filter_is_rejected() {
        let buffer = LogBuffer::handle(1);
        assert!(init_tracing_with_buffer("adapter=loudest", buffer).is_err());
    }
}
