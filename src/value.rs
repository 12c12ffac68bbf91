use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use bytes::BufMut;
use elements::Kind;
use serde::{Serialize, Serializer};

use crate::wire::{BytesMut, encode_ascii};

/// A single decoded field value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Mac([u8; 6]),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    String(String),
    Bytes(Vec<u8>),
}

impl Value {
    /// Interpret `data` as a value of `kind`.
    ///
    /// Integers may use reduced size encoding, so the width comes from the
    /// data rather than the element. Anything that does not fit its kind is
    /// kept as raw bytes.
    pub fn decode(kind: Kind, data: &[u8]) -> Value {
        match kind {
            Kind::Unsigned
            | Kind::DateTimeSeconds
            | Kind::DateTimeMilliseconds
            | Kind::DateTimeMicroseconds
            | Kind::DateTimeNanoseconds => match data.len() {
                1 => Value::U8(data[0]),
                2 => Value::U16(u16::from_be_bytes([data[0], data[1]])),
                4 => Value::U32(u32::from_be_bytes([data[0], data[1], data[2], data[3]])),
                8 => Value::U64(u64::from_be_bytes(array(data))),
                _ => Value::Bytes(data.to_vec()),
            },
            Kind::Signed => match data.len() {
                1 => Value::I8(data[0] as i8),
                2 => Value::I16(i16::from_be_bytes([data[0], data[1]])),
                4 => Value::I32(i32::from_be_bytes([data[0], data[1], data[2], data[3]])),
                8 => Value::I64(i64::from_be_bytes(array(data))),
                _ => Value::Bytes(data.to_vec()),
            },
            Kind::Float => match data.len() {
                4 => Value::F32(f32::from_be_bytes([data[0], data[1], data[2], data[3]])),
                8 => Value::F64(f64::from_be_bytes(array(data))),
                _ => Value::Bytes(data.to_vec()),
            },
            Kind::Boolean => match data {
                // https://datatracker.ietf.org/doc/html/rfc7011#section-6.1.5
                [1] => Value::Bool(true),
                [2] => Value::Bool(false),
                _ => Value::Bytes(data.to_vec()),
            },
            Kind::MacAddress => match data.len() {
                6 => Value::Mac(array(data)),
                _ => Value::Bytes(data.to_vec()),
            },
            Kind::Ipv4Address => match data.len() {
                4 => Value::Ipv4(Ipv4Addr::new(data[0], data[1], data[2], data[3])),
                _ => Value::Bytes(data.to_vec()),
            },
            Kind::Ipv6Address => match data.len() {
                16 => Value::Ipv6(Ipv6Addr::from(array::<16>(data))),
                _ => Value::Bytes(data.to_vec()),
            },
            Kind::String => Value::String(
                data.iter()
                    .map(|b| if b.is_ascii() { *b as char } else { '?' })
                    .collect(),
            ),
            Kind::Octets => Value::Bytes(data.to_vec()),
        }
    }

    pub fn wire_size(&self) -> usize {
        match self {
            Value::U8(_) | Value::I8(_) | Value::Bool(_) => 1,
            Value::U16(_) | Value::I16(_) => 2,
            Value::U32(_) | Value::I32(_) | Value::F32(_) | Value::Ipv4(_) => 4,
            Value::U64(_) | Value::I64(_) | Value::F64(_) => 8,
            Value::Mac(_) => 6,
            Value::Ipv6(_) => 16,
            // one byte per char, see encode_ascii
            Value::String(s) => s.chars().count(),
            Value::Bytes(b) => b.len(),
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) {
        match self {
            Value::U8(v) => buf.put_u8(*v),
            Value::U16(v) => buf.put_u16(*v),
            Value::U32(v) => buf.put_u32(*v),
            Value::U64(v) => buf.put_u64(*v),
            Value::I8(v) => buf.put_i8(*v),
            Value::I16(v) => buf.put_i16(*v),
            Value::I32(v) => buf.put_i32(*v),
            Value::I64(v) => buf.put_i64(*v),
            Value::F32(v) => buf.put_f32(*v),
            Value::F64(v) => buf.put_f64(*v),
            Value::Bool(v) => buf.put_u8(if *v { 1 } else { 2 }),
            Value::Mac(v) => buf.put_slice(v),
            Value::Ipv4(v) => buf.put_slice(&v.octets()),
            Value::Ipv6(v) => buf.put_slice(&v.octets()),
            Value::String(v) => encode_ascii(v, buf),
            Value::Bytes(v) => buf.put_slice(v),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

#[inline]
fn array<const N: usize>(data: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&data[..N]);
    out
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::U8(v) => v.fmt(f),
            Value::U16(v) => v.fmt(f),
            Value::U32(v) => v.fmt(f),
            Value::U64(v) => v.fmt(f),
            Value::I8(v) => v.fmt(f),
            Value::I16(v) => v.fmt(f),
            Value::I32(v) => v.fmt(f),
            Value::I64(v) => v.fmt(f),
            Value::F32(v) => v.fmt(f),
            Value::F64(v) => v.fmt(f),
            Value::Bool(v) => v.fmt(f),
            Value::Mac(v) => write!(
                f,
                "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
                v[0], v[1], v[2], v[3], v[4], v[5]
            ),
            Value::Ipv4(v) => v.fmt(f),
            Value::Ipv6(v) => v.fmt(f),
            Value::String(v) => f.write_str(v),
            Value::Bytes(v) => {
                for b in v {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::U8(v) => serializer.serialize_u8(*v),
            Value::U16(v) => serializer.serialize_u16(*v),
            Value::U32(v) => serializer.serialize_u32(*v),
            Value::U64(v) => serializer.serialize_u64(*v),
            Value::I8(v) => serializer.serialize_i8(*v),
            Value::I16(v) => serializer.serialize_i16(*v),
            Value::I32(v) => serializer.serialize_i32(*v),
            Value::I64(v) => serializer.serialize_i64(*v),
            Value::F32(v) => serializer.serialize_f32(*v),
            Value::F64(v) => serializer.serialize_f64(*v),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::Bytes(v) => serializer.serialize_bytes(v),
            Value::Mac(_) | Value::Ipv4(_) | Value::Ipv6(_) => serializer.collect_str(self),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )+
    };
}

impl_from! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    [u8; 6] => Mac,
    Ipv4Addr => Ipv4,
    Ipv6Addr => Ipv6,
    String => String,
    Vec<u8> => Bytes,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}
