//! Declarative wire layouts.
//!
//! A record type lists its members with an ordinal, and the same ordered
//! list drives `size`, `encode` and `decode`, so the three can not disagree
//! about the layout. Members are sorted by ordinal, ties keep declaration
//! order.
//!
//! ```text
//! wire_schema! {
//!     Header {
//!         1 => version: u16,
//!         2 => count: u16,
//!     }
//! }
//! ```
//!
//! A member's size comes from its type when the type is fixed size, otherwise
//! the value is asked through [`OnWire::wire_size`], which recurses into
//! nested records and sums sequences element by element.

use crate::Error;
use crate::wire::{BytesMut, OnWire};

pub struct Member<T> {
    pub ordinal: u16,
    pub name: &'static str,
    pub fixed_size: Option<usize>,
    pub size: fn(&T) -> usize,
    pub encode: fn(&T, &mut BytesMut) -> Result<(), Error>,
    pub decode: fn(&mut T, &mut &[u8]) -> Result<(), Error>,
}

pub trait Schema: Default + Sized + 'static {
    const NAME: &'static str;

    /// Encoded size is rounded up to a multiple of this many bytes.
    const ALIGNMENT: usize = 1;

    /// Members in wire order.
    fn members() -> &'static [Member<Self>];
}

#[inline]
pub const fn padding(size: usize, alignment: usize) -> usize {
    if alignment <= 1 {
        return 0;
    }

    (alignment - size % alignment) % alignment
}

#[inline]
pub const fn align(size: usize, alignment: usize) -> usize {
    size + padding(size, alignment)
}

/// Total size of a record whose members are all fixed size.
pub const fn fixed_total(sizes: &[Option<usize>], alignment: usize) -> Option<usize> {
    let mut total = 0;
    let mut i = 0;
    while i < sizes.len() {
        match sizes[i] {
            Some(size) => total += size,
            None => return None,
        }
        i += 1;
    }

    Some(align(total, alignment))
}

/// Sort members into wire order.
pub fn ordered<T>(mut members: Vec<Member<T>>) -> Vec<Member<T>> {
    // stable, declaration order breaks ties
    members.sort_by_key(|member| member.ordinal);
    members
}

fn members<T: Schema>() -> Result<&'static [Member<T>], Error> {
    let members = T::members();
    if members.is_empty() {
        return Err(Error::NoSerializableMembers(T::NAME));
    }

    Ok(members)
}

/// Sum of member sizes before alignment.
pub fn unaligned_size<T: Schema>(value: &T) -> usize {
    T::members()
        .iter()
        .map(|member| member.fixed_size.unwrap_or_else(|| (member.size)(value)))
        .sum()
}

/// On wire size of `value`, alignment padding included.
pub fn size<T: Schema>(value: &T) -> Result<usize, Error> {
    members::<T>()?;

    Ok(align(unaligned_size(value), T::ALIGNMENT))
}

/// Append every member in wire order. Alignment padding is left to the
/// caller, see [`encode_padded`].
pub fn encode<T: Schema>(value: &T, buf: &mut BytesMut) -> Result<(), Error> {
    for member in members::<T>()? {
        (member.encode)(value, buf)?;
    }

    Ok(())
}

/// Like [`encode`], followed by zero filled alignment padding.
pub fn encode_padded<T: Schema>(value: &T, buf: &mut BytesMut) -> Result<(), Error> {
    let start = buf.len();
    encode(value, buf)?;

    let pad = padding(buf.len() - start, T::ALIGNMENT);
    buf.resize(buf.len() + pad, 0);

    Ok(())
}

/// Decode every member in wire order. Trailing padding is not consumed.
pub fn decode<T: Schema>(buf: &mut &[u8]) -> Result<T, Error> {
    let mut value = T::default();
    for member in members::<T>()? {
        (member.decode)(&mut value, buf)?;
    }

    Ok(value)
}

/// Like [`decode`], then skips alignment padding.
pub fn decode_padded<T: Schema>(buf: &mut &[u8]) -> Result<T, Error> {
    let before = buf.len();
    let value = decode::<T>(buf)?;

    let pad = padding(before - buf.len(), T::ALIGNMENT);
    crate::wire::skip(buf, pad)?;

    Ok(value)
}

/// Declare the wire layout of a struct and implement [`Schema`] and
/// [`OnWire`] for it.
///
/// The struct must implement `Default`, decoding starts from the default
/// value and overwrites one member at a time.
#[macro_export]
macro_rules! wire_schema {
    (
        $ty:ident $(align = $align:literal)? {
            $($ordinal:literal => $field:ident : $fty:ty),+ $(,)?
        }
    ) => {
        impl $crate::schema::Schema for $ty {
            const NAME: &'static str = stringify!($ty);
            $(const ALIGNMENT: usize = $align;)?

            fn members() -> &'static [$crate::schema::Member<Self>] {
                static MEMBERS: std::sync::OnceLock<Vec<$crate::schema::Member<$ty>>> =
                    std::sync::OnceLock::new();

                MEMBERS.get_or_init(|| {
                    $crate::schema::ordered(vec![
                        $(
                            $crate::schema::Member {
                                ordinal: $ordinal,
                                name: stringify!($field),
                                fixed_size: <$fty as $crate::wire::OnWire>::FIXED_SIZE,
                                size: |this: &$ty| $crate::wire::OnWire::wire_size(&this.$field),
                                encode: |this: &$ty, buf: &mut $crate::wire::BytesMut| {
                                    $crate::wire::OnWire::encode(&this.$field, buf)
                                },
                                decode: |this: &mut $ty, buf: &mut &[u8]| {
                                    this.$field = <$fty as $crate::wire::OnWire>::decode(buf)?;
                                    Ok(())
                                },
                            },
                        )+
                    ])
                })
            }
        }

        impl $crate::wire::OnWire for $ty {
            const FIXED_SIZE: Option<usize> = $crate::schema::fixed_total(
                &[$(<$fty as $crate::wire::OnWire>::FIXED_SIZE),+],
                <$ty as $crate::schema::Schema>::ALIGNMENT,
            );

            fn wire_size(&self) -> usize {
                $crate::schema::align(
                    $crate::schema::unaligned_size(self),
                    <$ty as $crate::schema::Schema>::ALIGNMENT,
                )
            }

            fn encode(&self, buf: &mut $crate::wire::BytesMut) -> Result<(), $crate::Error> {
                $crate::schema::encode_padded(self, buf)
            }

            fn decode(buf: &mut &[u8]) -> Result<Self, $crate::Error> {
                $crate::schema::decode_padded(buf)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;
    use crate::wire::to_bytes;

    #[derive(Debug, Default, PartialEq)]
    struct Aligned {
        tail: u8,
        head: u16,
        body: u32,
    }

    wire_schema! {
        Aligned align = 4 {
            3 => tail: u8,
            1 => head: u16,
            2 => body: u32,
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Tied {
        first: u8,
        second: u8,
    }

    wire_schema! {
        Tied {
            1 => second: u8,
            1 => first: u8,
        }
    }

    #[derive(Debug, PartialEq)]
    struct Nested {
        addr: Ipv4Addr,
        tags: Vec<u16>,
    }

    impl Default for Nested {
        fn default() -> Self {
            Nested {
                addr: Ipv4Addr::UNSPECIFIED,
                tags: vec![],
            }
        }
    }

    wire_schema! {
        Nested {
            1 => addr: Ipv4Addr,
            2 => tags: Vec<u16>,
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Tags {
        tags: Vec<u16>,
    }

    wire_schema! {
        Tags {
            1 => tags: Vec<u16>,
        }
    }

    #[derive(Debug, Default)]
    struct Empty;

    impl Schema for Empty {
        const NAME: &'static str = "Empty";

        fn members() -> &'static [Member<Self>] {
            &[]
        }
    }

    #[test]
    fn members_follow_ordinals() {
        let names = Aligned::members()
            .iter()
            .map(|member| member.name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["head", "body", "tail"]);

        let names = Tied::members()
            .iter()
            .map(|member| member.name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["second", "first"]);
    }

    #[test]
    fn aligned_layout() {
        let aligned = Aligned {
            tail: 0xee,
            head: 0x0102,
            body: 0x0a0b0c0d,
        };

        assert_eq!(Aligned::FIXED_SIZE, Some(8));
        assert_eq!(size(&aligned).unwrap(), 8);
        assert_eq!(unaligned_size(&aligned), 7);

        // the engine itself never pads
        let mut buf = BytesMut::new();
        encode(&aligned, &mut buf).unwrap();
        assert_eq!(&buf[..], &[0x01, 0x02, 0x0a, 0x0b, 0x0c, 0x0d, 0xee]);

        let buf = to_bytes(&aligned).unwrap();
        assert_eq!(&buf[..], &[0x01, 0x02, 0x0a, 0x0b, 0x0c, 0x0d, 0xee, 0x00]);

        let mut data = &buf[..];
        assert_eq!(Aligned::decode(&mut data).unwrap(), aligned);
        assert!(data.is_empty());
    }

    #[test]
    fn variable_members() {
        let nested = Nested {
            addr: Ipv4Addr::new(10, 0, 0, 1),
            tags: vec![7, 8, 9],
        };

        assert_eq!(Nested::FIXED_SIZE, None);
        assert_eq!(nested.wire_size(), 10);

        let buf = to_bytes(&nested).unwrap();
        assert_eq!(buf.len(), 10);

        let mut data = &buf[..];
        assert_eq!(Nested::decode(&mut data).unwrap(), nested);
    }

    #[test]
    fn nested_records() {
        let aligned = vec![
            Aligned {
                tail: 1,
                head: 2,
                body: 3,
            },
            Aligned {
                tail: 4,
                head: 5,
                body: 6,
            },
        ];

        assert_eq!(aligned.wire_size(), 16);

        let buf = to_bytes(&aligned).unwrap();
        let mut data = &buf[..];
        assert_eq!(Vec::<Aligned>::decode(&mut data).unwrap(), aligned);
    }

    #[test]
    fn elements_without_bytes() {
        // a one byte tail is too short for a tag, every element is empty
        let mut data: &[u8] = &[0x00, 0x01, 0x00, 0x02, 0x07];
        let tags = Tags::decode(&mut data).unwrap();
        assert_eq!(tags.tags, vec![1, 2]);
        assert_eq!(data, &[0x07]);

        let decoded = Vec::<Tags>::decode(&mut data).unwrap();
        assert!(decoded.is_empty());
        assert_eq!(data, &[0x07]);
    }

    #[test]
    fn no_members() {
        let tests = [
            size(&Empty).map(|_| ()),
            encode(&Empty, &mut BytesMut::new()),
            decode::<Empty>(&mut &[0u8; 4][..]).map(|_| ()),
        ];

        for result in tests {
            assert!(matches!(result, Err(Error::NoSerializableMembers("Empty"))));
        }
    }

    #[test]
    fn padding_values() {
        let tests = [
            (0, 4, 0),
            (1, 4, 3),
            (2, 4, 2),
            (3, 4, 1),
            (4, 4, 0),
            (22, 4, 2),
            (7, 1, 0),
        ];

        for (size, alignment, expected) in tests {
            assert_eq!(padding(size, alignment), expected, "{size} % {alignment}");
            assert_eq!(align(size, alignment) % alignment, 0);
        }
    }
}
