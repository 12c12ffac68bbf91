//! Conversion of scalars to and from network byte order.
//!
//! Every multi byte value is big endian on the wire, floats included.

use std::net::{Ipv4Addr, Ipv6Addr};

use bytes::{Buf, BufMut};

pub use bytes::BytesMut;

use crate::Error;

/// A type that knows its own wire representation.
///
/// Record types normally get this implementation from
/// [`wire_schema!`](crate::wire_schema), types with layouts the member engine
/// cannot express (conditional members, derived counts) implement it by hand.
pub trait OnWire: Sized {
    /// Size of every value of this type, if it does not depend on the value.
    const FIXED_SIZE: Option<usize> = None;

    /// Number of bytes `encode` appends.
    fn wire_size(&self) -> usize;

    fn encode(&self, buf: &mut BytesMut) -> Result<(), Error>;

    /// Decode one value from the front of `buf`, advancing it past the
    /// consumed bytes.
    fn decode(buf: &mut &[u8]) -> Result<Self, Error>;
}

/// Fail with `TruncatedInput` unless `buf` holds at least `needed` bytes.
#[inline]
pub fn ensure(buf: &[u8], needed: usize) -> Result<(), Error> {
    if buf.len() < needed {
        return Err(Error::TruncatedInput {
            needed,
            remaining: buf.len(),
        });
    }

    Ok(())
}

/// Split `n` bytes off the front of `buf`.
#[inline]
pub fn take<'a>(buf: &mut &'a [u8], n: usize) -> Result<&'a [u8], Error> {
    ensure(buf, n)?;

    let (head, tail) = buf.split_at(n);
    *buf = tail;

    Ok(head)
}

/// Skip `n` bytes, usually alignment padding.
#[inline]
pub fn skip(buf: &mut &[u8], n: usize) -> Result<(), Error> {
    take(buf, n).map(|_| ())
}

/// Decode a `T` found `offset` bytes into `data`, returning the value and the
/// number of bytes it occupied.
pub fn decode_at<T: OnWire>(data: &[u8], offset: usize) -> Result<(T, usize), Error> {
    ensure(data, offset)?;

    let mut buf = &data[offset..];
    let before = buf.len();
    let value = T::decode(&mut buf)?;

    Ok((value, before - buf.len()))
}

/// Encode a single value into a fresh buffer.
pub fn to_bytes<T: OnWire>(value: &T) -> Result<BytesMut, Error> {
    let mut buf = BytesMut::with_capacity(value.wire_size());
    value.encode(&mut buf)?;
    Ok(buf)
}

macro_rules! impl_scalar {
    ($($ty:ty => $put:ident, $get:ident;)+) => {
        $(
            impl OnWire for $ty {
                const FIXED_SIZE: Option<usize> = Some(size_of::<$ty>());

                #[inline]
                fn wire_size(&self) -> usize {
                    size_of::<$ty>()
                }

                #[inline]
                fn encode(&self, buf: &mut BytesMut) -> Result<(), Error> {
                    buf.$put(*self);
                    Ok(())
                }

                #[inline]
                fn decode(buf: &mut &[u8]) -> Result<Self, Error> {
                    ensure(buf, size_of::<$ty>())?;
                    Ok(buf.$get())
                }
            }
        )+
    };
}

impl_scalar! {
    u8 => put_u8, get_u8;
    u16 => put_u16, get_u16;
    u32 => put_u32, get_u32;
    u64 => put_u64, get_u64;
    i8 => put_i8, get_i8;
    i16 => put_i16, get_i16;
    i32 => put_i32, get_i32;
    i64 => put_i64, get_i64;
    f32 => put_f32, get_f32;
    f64 => put_f64, get_f64;
}

impl OnWire for Ipv4Addr {
    const FIXED_SIZE: Option<usize> = Some(4);

    fn wire_size(&self) -> usize {
        4
    }

    fn encode(&self, buf: &mut BytesMut) -> Result<(), Error> {
        buf.put_slice(&self.octets());
        Ok(())
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, Error> {
        u32::decode(buf).map(Ipv4Addr::from)
    }
}

impl OnWire for Ipv6Addr {
    const FIXED_SIZE: Option<usize> = Some(16);

    fn wire_size(&self) -> usize {
        16
    }

    fn encode(&self, buf: &mut BytesMut) -> Result<(), Error> {
        buf.put_slice(&self.octets());
        Ok(())
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, Error> {
        ensure(buf, 16)?;
        Ok(Ipv6Addr::from(buf.get_u128()))
    }
}

impl<const N: usize> OnWire for [u8; N] {
    const FIXED_SIZE: Option<usize> = Some(N);

    fn wire_size(&self) -> usize {
        N
    }

    fn encode(&self, buf: &mut BytesMut) -> Result<(), Error> {
        buf.put_slice(self);
        Ok(())
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, Error> {
        let mut out = [0u8; N];
        out.copy_from_slice(take(buf, N)?);
        Ok(out)
    }
}

/// Sequences have no count on the wire, decoding consumes elements until the
/// input is shorter than the smallest possible element or an element takes
/// no input.
impl<T: OnWire> OnWire for Vec<T> {
    fn wire_size(&self) -> usize {
        match T::FIXED_SIZE {
            Some(size) => size * self.len(),
            None => self.iter().map(OnWire::wire_size).sum(),
        }
    }

    fn encode(&self, buf: &mut BytesMut) -> Result<(), Error> {
        for item in self {
            item.encode(buf)?;
        }

        Ok(())
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, Error> {
        let min = T::FIXED_SIZE.unwrap_or(1).max(1);

        let mut items = Vec::with_capacity(buf.len() / min);
        while buf.len() >= min {
            let before = buf.len();
            let item = T::decode(buf)?;
            if buf.len() == before {
                // elements that take no bytes would repeat forever
                break;
            }

            items.push(item);
        }

        Ok(items)
    }
}

/// Write `value` as ASCII, characters outside the ASCII range become `?`.
/// Nothing marks the end of the string, the length travels out of band.
pub fn encode_ascii(value: &str, buf: &mut BytesMut) {
    buf.reserve(value.len());
    for ch in value.chars() {
        buf.put_u8(if ch.is_ascii() { ch as u8 } else { b'?' });
    }
}

pub fn decode_ascii(buf: &mut &[u8], length: usize) -> Result<String, Error> {
    let data = take(buf, length)?;

    Ok(data
        .iter()
        .map(|b| if b.is_ascii() { *b as char } else { '?' })
        .collect())
}

/// Size of the length prefix carried in front of a variable length value.
///
/// https://datatracker.ietf.org/doc/html/rfc7011#section-7
#[inline]
pub fn length_prefix_size(length: usize) -> usize {
    if length < 255 { 1 } else { 3 }
}

pub fn encode_length_prefix(length: usize, buf: &mut BytesMut) -> Result<(), Error> {
    if length < 255 {
        buf.put_u8(length as u8);
        return Ok(());
    }

    let length = u16::try_from(length).map_err(|_| Error::Oversized {
        what: "variable length value",
        size: length,
    })?;
    buf.put_u8(255);
    buf.put_u16(length);

    Ok(())
}

pub fn decode_length_prefix(buf: &mut &[u8]) -> Result<usize, Error> {
    match u8::decode(buf)? {
        255 => u16::decode(buf).map(usize::from),
        short => Ok(short as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_big_endian() {
        let buf = to_bytes(&0x0102_0304u32).unwrap();
        assert_eq!(&buf[..], &[1, 2, 3, 4]);

        let buf = to_bytes(&-2i16).unwrap();
        assert_eq!(&buf[..], &[0xff, 0xfe]);

        let buf = to_bytes(&0x0102_0304_0506_0708u64).unwrap();
        assert_eq!(&buf[..], &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn floats_are_big_endian() {
        let buf = to_bytes(&1.0f32).unwrap();
        assert_eq!(&buf[..], &[0x3f, 0x80, 0, 0]);

        let (value, consumed) = decode_at::<f64>(&2.5f64.to_be_bytes(), 0).unwrap();
        assert_eq!(value, 2.5);
        assert_eq!(consumed, 8);
    }

    #[test]
    fn addresses() {
        let addr = Ipv4Addr::new(192, 168, 1, 10);
        let buf = to_bytes(&addr).unwrap();
        assert_eq!(&buf[..], &[192, 168, 1, 10]);

        let addr: Ipv6Addr = "2001:db8::1".parse().unwrap();
        let buf = to_bytes(&addr).unwrap();
        assert_eq!(buf.len(), 16);
        assert_eq!(decode_at::<Ipv6Addr>(&buf, 0).unwrap(), (addr, 16));
    }

    #[test]
    fn decode_at_offset() {
        let data = [0xaa, 0xbb, 0x00, 0x10, 0xcc];
        let (value, consumed) = decode_at::<u16>(&data, 2).unwrap();
        assert_eq!(value, 16);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn truncated() {
        let tests: [(&[u8], usize); 3] = [(&[0, 1], 0), (&[], 0), (&[1, 2, 3, 4], 2)];

        for (data, offset) in tests {
            let err = decode_at::<u32>(data, offset).unwrap_err();
            assert!(
                matches!(err, Error::TruncatedInput { needed: 4, .. }),
                "{data:?} at {offset}: {err}"
            );
        }

        let err = decode_at::<u8>(&[1], 3).unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedInput {
                needed: 3,
                remaining: 1
            }
        ));
    }

    #[test]
    fn sequences() {
        let items = vec![1u16, 2, 3];
        assert_eq!(items.wire_size(), 6);

        let buf = to_bytes(&items).unwrap();
        let mut data = &buf[..];
        assert_eq!(Vec::<u16>::decode(&mut data).unwrap(), items);
        assert!(data.is_empty());

        // a trailing odd byte is too short for another element and stays
        let mut data: &[u8] = &[0, 1, 0, 2, 9];
        assert_eq!(Vec::<u16>::decode(&mut data).unwrap(), vec![1, 2]);
        assert_eq!(data, &[9]);
    }

    #[test]
    fn ascii() {
        let mut buf = BytesMut::new();
        encode_ascii("eth0", &mut buf);
        encode_ascii("né", &mut buf);
        assert_eq!(&buf[..], b"eth0n?");

        let mut data = &buf[..];
        assert_eq!(decode_ascii(&mut data, 4).unwrap(), "eth0");
        assert_eq!(data, b"n?");
        assert!(decode_ascii(&mut data, 3).is_err());
    }

    #[test]
    fn length_prefix() {
        let tests = [(0usize, vec![0u8]), (254, vec![254]), (255, vec![255, 0, 255]), (1000, vec![255, 3, 232])];

        for (length, expected) in tests {
            let mut buf = BytesMut::new();
            encode_length_prefix(length, &mut buf).unwrap();
            assert_eq!(&buf[..], &expected[..], "length {length}");
            assert_eq!(length_prefix_size(length), expected.len());

            let mut data = &buf[..];
            assert_eq!(decode_length_prefix(&mut data).unwrap(), length);
            assert!(data.is_empty());
        }

        let mut buf = BytesMut::new();
        assert!(encode_length_prefix(70_000, &mut buf).is_err());
    }
}
