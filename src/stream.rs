use std::io::{ErrorKind, Read};

use crate::Error;

pub trait ReadExt: Read {
    /// Fill `buf` completely, failing with `TruncatedInput` when the stream
    /// ends early.
    fn read_full(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let filled = self.read_some(buf)?;
        if filled < buf.len() {
            return Err(Error::TruncatedInput {
                needed: buf.len(),
                remaining: filled,
            });
        }

        Ok(())
    }

    /// Like `read_full`, but a stream that ends before the first byte is a
    /// clean end of input and returns `false`.
    fn read_full_or_eof(&mut self, buf: &mut [u8]) -> Result<bool, Error> {
        let filled = self.read_some(buf)?;
        if filled == 0 && !buf.is_empty() {
            return Ok(false);
        }

        if filled < buf.len() {
            return Err(Error::TruncatedInput {
                needed: buf.len(),
                remaining: filled,
            });
        }

        Ok(true)
    }

    fn read_vec(&mut self, len: usize) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0; len];
        self.read_full(&mut buf)?;
        Ok(buf)
    }

    /// Read until `buf` is full or the stream ends, returning the number of
    /// bytes read.
    fn read_some(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(filled)
    }
}

impl<T> ReadExt for T where T: Read {}
