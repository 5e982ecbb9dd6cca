use std::fmt;

/// One line of trace output: the stream offset it describes and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    pub offset: u64,
    pub text: String,
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>8} {}", self.offset, self.text)
    }
}

/// Receives trace lines in stream order.
pub trait TraceSink {
    fn emit(&mut self, offset: u64, text: &str);
}

/// Sink that collects the trace in memory.
#[derive(Debug, Default)]
pub struct TraceBuffer {
    lines: Vec<TraceLine>,
}

impl TraceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[TraceLine] {
        &self.lines
    }
}

impl TraceSink for TraceBuffer {
    fn emit(&mut self, offset: u64, text: &str) {
        self.lines.push(TraceLine {
            offset,
            text: text.to_owned(),
        });
    }
}

impl fmt::Display for TraceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Sink that prints every line to stdout as soon as it is emitted.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn emit(&mut self, offset: u64, text: &str) {
        println!("{:>8} {}", offset, text);
    }
}
