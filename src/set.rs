//! Framing shared by NetFlow v9 flow sets and IPFIX sets.
//!
//! ```text
//! +--------------------------------------------------+
//! | Set ID                | Length                   |
//! +--------------------------------------------------+
//! | records ...                                      |
//! +--------------------------------------------------+
//! | padding to a 4 byte boundary                     |
//! +--------------------------------------------------+
//! ```
//!
//! Length covers the set header, the records and the padding.

use std::io::Read;

use bytes::Bytes;

use crate::config::UnknownTemplate;
use crate::schema::padding;
use crate::stream::ReadExt;
use crate::template::count_u16;
use crate::wire::{BytesMut, OnWire};
use crate::{Error, wire_schema};

pub const SET_HEADER_SIZE: usize = 4;

/// Sets are padded to this many bytes.
pub const SET_ALIGNMENT: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetHeader {
    pub id: u16,
    pub length: u16,
}

wire_schema! {
    SetHeader {
        1 => id: u16,
        2 => length: u16,
    }
}

/// Read a set header, the caller decides whether the set fits before the
/// body is read.
pub(crate) fn read_set_header<R: Read>(reader: &mut R) -> Result<SetHeader, Error> {
    let mut buf = [0u8; SET_HEADER_SIZE];
    reader.read_full(&mut buf)?;

    let header = SetHeader::decode(&mut &buf[..])?;
    if (header.length as usize) < SET_HEADER_SIZE {
        return Err(Error::InvalidSetLength(header.length));
    }

    Ok(header)
}

pub(crate) fn read_set_body<R: Read>(reader: &mut R, header: &SetHeader) -> Result<Vec<u8>, Error> {
    reader.read_vec(header.length as usize - SET_HEADER_SIZE)
}

/// Append a set with id `id` whose records are written by `body`, then
/// pad it and patch its length. Returns the set length.
pub(crate) fn encode_set<F>(id: u16, buf: &mut BytesMut, body: F) -> Result<usize, Error>
where
    F: FnOnce(&mut BytesMut) -> Result<(), Error>,
{
    encode_padded(id, usize::MAX, buf, body)
}

/// Like `encode_set` for a data set whose smallest record is
/// `record_size` bytes. Padding must be shorter than any record, so the
/// set is left unaligned when a whole record would fit in the padding.
/// A `record_size` of 0 means the record shape is unknown and the set is
/// never padded.
///
/// https://datatracker.ietf.org/doc/html/rfc7011#section-3.3.1
pub(crate) fn encode_data_set<F>(
    id: u16,
    record_size: usize,
    buf: &mut BytesMut,
    body: F,
) -> Result<usize, Error>
where
    F: FnOnce(&mut BytesMut) -> Result<(), Error>,
{
    encode_padded(id, record_size, buf, body)
}

fn encode_padded<F>(id: u16, max_padding: usize, buf: &mut BytesMut, body: F) -> Result<usize, Error>
where
    F: FnOnce(&mut BytesMut) -> Result<(), Error>,
{
    let start = buf.len();
    SetHeader { id, length: 0 }.encode(buf)?;
    body(buf)?;

    let pad = padding(buf.len() - start, SET_ALIGNMENT);
    if pad < max_padding {
        buf.resize(buf.len() + pad, 0);
    }

    let length = buf.len() - start;
    let wire_length = count_u16("set length", length)?;
    buf[start + 2..start + 4].copy_from_slice(&wire_length.to_be_bytes());

    Ok(length)
}

/// Decode records until fewer than `min` bytes remain, what is left is
/// padding.
pub(crate) fn decode_records<T: OnWire>(mut body: &[u8], min: usize) -> Result<Vec<T>, Error> {
    let mut records = Vec::new();
    while body.len() >= min {
        records.push(T::decode(&mut body)?);
    }

    Ok(records)
}

/// A data set arrived before its template. Depending on `policy` the body
/// is handed back untouched or the set is refused.
pub(crate) fn unknown_data_set(
    policy: UnknownTemplate,
    domain: u32,
    id: u16,
    body: Vec<u8>,
) -> Result<Bytes, Error> {
    match policy {
        UnknownTemplate::Error => {
            warn!(
                message = "no template for data set",
                domain,
                template = id,
            );

            Err(Error::NoMatchingTemplate(id))
        }
        UnknownTemplate::Raw => {
            debug!(
                message = "keeping data set without template undecoded",
                domain,
                template = id,
                length = body.len(),
            );

            Ok(Bytes::from(body))
        }
    }
}
