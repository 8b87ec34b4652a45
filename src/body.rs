use std::fmt;
use std::io::{self, Cursor, Read};
use std::sync::{Mutex, PoisonError};

/// A request or response payload.
///
/// A body is either a buffer that is already in memory or a stream that is
/// read on demand (a response coming off the wire, a file). Streams are
/// released when the body is dropped, so whichever layer ends up owning the
/// body is the one that closes it.
pub struct Body {
    kind: Kind,
}

enum Kind {
    Bytes(Cursor<Vec<u8>>),
    // The mutex is never contended: it is only reached through `&mut self`
    // and exists so that a `Body` is `Sync` while the reader is only `Send`.
    Reader(Mutex<Box<dyn Read + Send>>),
}

impl Body {
    pub fn empty() -> Body {
        Body::from(Vec::new())
    }

    pub fn from_reader<R>(reader: R) -> Body
    where
        R: Read + Send + 'static,
    {
        Body {
            kind: Kind::Reader(Mutex::new(Box::new(reader))),
        }
    }

    /// Returns the unread bytes if the body is buffered.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match &self.kind {
            Kind::Bytes(cursor) => {
                let position = (cursor.position() as usize).min(cursor.get_ref().len());
                Some(&cursor.get_ref()[position..])
            }
            Kind::Reader(_) => None,
        }
    }

    /// Reads whatever is left of the body into memory, releasing the
    /// underlying stream.
    pub fn into_bytes(self) -> io::Result<Vec<u8>> {
        match self.try_into_buffer() {
            Ok(bytes) => Ok(bytes),
            Err(mut stream) => {
                let mut bytes = Vec::new();
                stream.read_to_end(&mut bytes)?;
                Ok(bytes)
            }
        }
    }

    pub fn into_string(self) -> io::Result<String> {
        String::from_utf8(self.into_bytes()?)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Releases the body without reading the rest of it.
    pub fn close(self) {}

    /// Hands back the buffer of an in-memory body, or the body itself when
    /// it is a stream.
    pub(crate) fn try_into_buffer(self) -> Result<Vec<u8>, Body> {
        match self.kind {
            Kind::Bytes(cursor) => {
                let position = cursor.position() as usize;
                let mut bytes = cursor.into_inner();
                bytes.drain(..position.min(bytes.len()));
                Ok(bytes)
            }
            kind => Err(Body { kind }),
        }
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.kind {
            Kind::Bytes(cursor) => cursor.read(buf),
            Kind::Reader(reader) => reader
                .get_mut()
                .unwrap_or_else(PoisonError::into_inner)
                .read(buf),
        }
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Bytes(cursor) => f
                .debug_struct("Body")
                .field("len", &cursor.get_ref().len())
                .finish(),
            Kind::Reader(_) => f.write_str("Body(<stream>)"),
        }
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Body {
            kind: Kind::Bytes(Cursor::new(bytes)),
        }
    }
}

impl From<&[u8]> for Body {
    fn from(bytes: &[u8]) -> Self {
        Body::from(bytes.to_vec())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::from(text.into_bytes())
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::from(text.as_bytes())
    }
}
