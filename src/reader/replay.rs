//! Line source backed by any buffered reader: a capture file or stdin.

use super::{Frame, LineSource};
use crate::errors::{AppError, AppResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub struct ReplayReader<R> {
    inner: R,
}

impl<R: BufRead> ReplayReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl ReplayReader<Box<dyn BufRead>> {
    /// Open a capture file, or stdin when `path` is `-`.
    pub fn open(path: &str) -> AppResult<Self> {
        let inner: Box<dyn BufRead> = if path == "-" {
            Box::new(BufReader::new(io::stdin()))
        } else {
            Box::new(BufReader::new(File::open(Path::new(path))?))
        };
        Ok(Self::new(inner))
    }
}

impl<R: BufRead> LineSource for ReplayReader<R> {
    fn read_frame(&mut self) -> AppResult<Frame> {
        let mut buf = Vec::new();
        let n = self.inner.read_until(b'\n', &mut buf)?;
        if n == 0 {
            return Ok(Frame::Closed);
        }

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }

        String::from_utf8(buf)
            .map(Frame::Line)
            .map_err(|e| AppError::Decode(format!("not valid UTF-8: {e}")))
    }
}
