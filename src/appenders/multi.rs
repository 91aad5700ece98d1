//! Fan-out writer
//!
//! Every line goes to each output in order. One failing output does not stop
//! the others; the first error is reported once all outputs have been tried.

use std::fmt;
use std::io::{self, Write};

/// Writes each buffer to several outputs
///
/// # Examples
///
/// ```
/// use srelab_log::appenders::MultiWriter;
/// use std::io::{self, Write};
///
/// let mut out = MultiWriter::new().with(io::sink()).with(Vec::new());
/// out.write_all(b"level=info msg=hello\n")?;
/// assert_eq!(out.len(), 2);
/// # Ok::<(), io::Error>(())
/// ```
#[derive(Default)]
pub struct MultiWriter {
    outputs: Vec<Box<dyn Write + Send>>,
}

impl MultiWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.push(output);
        self
    }

    pub fn push<W: Write + Send + 'static>(&mut self, output: W) {
        self.outputs.push(Box::new(output));
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl Write for MultiWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut first_error = None;
        for output in &mut self.outputs {
            if let Err(e) = output.write_all(buf) {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut first_error = None;
        for output in &mut self.outputs {
            if let Err(e) = output.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl fmt::Debug for MultiWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiWriter")
            .field("outputs", &self.outputs.len())
            .finish()
    }
}
