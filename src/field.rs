use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use bytes::BufMut;
use elements::{Catalog, Element, Kind, VARIABLE_LENGTH, lookup};

use crate::Error;
use crate::wire::{BytesMut, OnWire};

const ENTERPRISE_BIT: u16 = 0x8000;

/// Anything that describes one value slot of a data record.
pub trait FieldDescriptor {
    /// Information element or field type, without the enterprise bit.
    fn element(&self) -> u16;

    /// Declared length, [`VARIABLE_LENGTH`] when the length is carried in
    /// front of every value.
    fn length(&self) -> u16;

    fn catalog(&self) -> Catalog;

    fn enterprise_number(&self) -> Option<u32> {
        None
    }

    #[inline]
    fn is_variable(&self) -> bool {
        self.length() == VARIABLE_LENGTH
    }

    /// Catalog entry of a standard element, vendor elements have none.
    fn meta(&self) -> Option<&'static Element> {
        match self.enterprise_number() {
            Some(_) => None,
            None => lookup(self.catalog(), self.element()),
        }
    }

    /// Name used for the field in a decoded record.
    fn name(&self) -> Cow<'static, str> {
        if self.enterprise_number().is_some() {
            return Cow::Owned(format!("Enterprise{}", self.element()));
        }

        match self.meta() {
            Some(element) => Cow::Borrowed(element.name),
            None => Cow::Owned(format!("Unknown{}", self.element())),
        }
    }

    /// How the raw bytes should be interpreted, unknown and vendor elements
    /// stay raw octets.
    fn kind(&self) -> Kind {
        self.meta().map_or(Kind::Octets, |element| element.kind)
    }
}

/// IPFIX field specifier.
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |E|  Information Element ident. |        Field Length           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                      Enterprise Number                        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// https://datatracker.ietf.org/doc/html/rfc7011#section-3.2
#[derive(Clone, Copy, Debug, Eq)]
pub struct FieldSpecifier {
    identifier: i16,
    length: u16,
    // present exactly when the enterprise bit of `identifier` is set
    enterprise_number: Option<u32>,
}

impl FieldSpecifier {
    /// A standard IANA element. Only the low 15 bits of `element` are used.
    pub fn new(element: u16, length: u16) -> Self {
        FieldSpecifier {
            identifier: (element & !ENTERPRISE_BIT) as i16,
            length,
            enterprise_number: None,
        }
    }

    /// A vendor element scoped by its private enterprise number.
    pub fn enterprise(element: u16, length: u16, enterprise_number: u32) -> Self {
        FieldSpecifier {
            identifier: (element | ENTERPRISE_BIT) as i16,
            length,
            enterprise_number: Some(enterprise_number),
        }
    }

    /// Build a specifier for an IANA element, taking the length from the
    /// catalog unless one is given.
    pub fn from_catalog(element: u16, length: Option<u16>) -> Result<Self, Error> {
        let length = resolve_length(Catalog::Ipfix, element, length)?;
        Ok(FieldSpecifier::new(element, length))
    }

    /// The raw identifier as it appears on the wire, negative for
    /// enterprise elements.
    #[inline]
    pub fn identifier(&self) -> i16 {
        self.identifier
    }

    #[inline]
    pub fn is_enterprise(&self) -> bool {
        self.identifier < 0
    }

    /// The element number with the enterprise bit stripped, so a wire
    /// identifier of `0xFFFB` yields 32763, not its absolute value 5.
    #[inline]
    pub fn information_element(&self) -> u16 {
        self.identifier as u16 & !ENTERPRISE_BIT
    }
}

/// Length of `element` in `catalog`, or `length` when the caller gives one.
/// A given length may narrow a numeric element but not widen it.
pub fn resolve_length(catalog: Catalog, element: u16, length: Option<u16>) -> Result<u16, Error> {
    let meta = lookup(catalog, element);

    let Some(length) = length else {
        return meta
            .ok_or(Error::UnknownFieldType(element))?
            .default_length()
            .ok_or(Error::NonFixedFieldType(element));
    };

    let widened = meta
        .filter(|meta| matches!(meta.kind, Kind::Unsigned | Kind::Signed))
        .filter(|meta| meta.max_length().is_some_and(|max| length > max));
    if let Some(meta) = widened {
        return Err(Error::Oversized {
            what: meta.name,
            size: length as usize,
        });
    }

    Ok(length)
}

impl PartialEq for FieldSpecifier {
    fn eq(&self, other: &Self) -> bool {
        if self.identifier != other.identifier || self.length != other.length {
            return false;
        }

        if self.is_enterprise() && other.is_enterprise() {
            return self.enterprise_number == other.enterprise_number;
        }

        true
    }
}

impl Hash for FieldSpecifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
        self.length.hash(state);
    }
}

impl OnWire for FieldSpecifier {
    fn wire_size(&self) -> usize {
        if self.is_enterprise() { 8 } else { 4 }
    }

    fn encode(&self, buf: &mut BytesMut) -> Result<(), Error> {
        buf.put_i16(self.identifier);
        buf.put_u16(self.length);
        if self.is_enterprise() {
            buf.put_u32(self.enterprise_number.unwrap_or_default());
        }

        Ok(())
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, Error> {
        let identifier = i16::decode(buf)?;
        let length = u16::decode(buf)?;
        let enterprise_number = if identifier < 0 {
            Some(u32::decode(buf)?)
        } else {
            None
        };

        Ok(FieldSpecifier {
            identifier,
            length,
            enterprise_number,
        })
    }
}

impl FieldDescriptor for FieldSpecifier {
    fn element(&self) -> u16 {
        self.information_element()
    }

    fn length(&self) -> u16 {
        self.length
    }

    fn catalog(&self) -> Catalog {
        Catalog::Ipfix
    }

    fn enterprise_number(&self) -> Option<u32> {
        self.enterprise_number
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::wire::{decode_at, to_bytes};

    #[test]
    fn enterprise_specifier() {
        let spec = FieldSpecifier::enterprise(5, 4, 12345);
        assert!(spec.is_enterprise());
        assert!(spec.identifier() < 0);
        assert_eq!(spec.information_element(), 5);
        assert_eq!(spec.wire_size(), 8);

        let buf = to_bytes(&spec).unwrap();
        assert_eq!(&buf[..], &[0x80, 0x05, 0x00, 0x04, 0x00, 0x00, 0x30, 0x39]);

        let (decoded, consumed) = decode_at::<FieldSpecifier>(&buf, 0).unwrap();
        assert_eq!(consumed, 8);
        assert_eq!(decoded, spec);
        assert_eq!(decoded.enterprise_number(), Some(12345));
        assert_eq!(decoded.name(), "Enterprise5");
        assert_eq!(decoded.kind(), Kind::Octets);
    }

    #[test]
    fn standard_specifier() {
        let spec = FieldSpecifier::new(8, 4);
        assert!(!spec.is_enterprise());
        assert_eq!(spec.enterprise_number(), None);

        let buf = to_bytes(&spec).unwrap();
        assert_eq!(&buf[..], &[0x00, 0x08, 0x00, 0x04]);

        let (decoded, consumed) = decode_at::<FieldSpecifier>(&buf, 0).unwrap();
        assert_eq!(consumed, 4);
        assert_eq!(decoded, spec);
        assert_eq!(decoded.name(), "sourceIPv4Address");
        assert_eq!(decoded.kind(), Kind::Ipv4Address);
    }

    #[test]
    fn element_number_is_masked() {
        let spec = FieldSpecifier::new(0x8001, 8);
        assert!(!spec.is_enterprise());
        assert_eq!(spec.information_element(), 1);
    }

    #[test]
    fn equality() {
        let tests = [
            (FieldSpecifier::new(1, 8), FieldSpecifier::new(1, 8), true),
            (FieldSpecifier::new(1, 8), FieldSpecifier::new(1, 4), false),
            (FieldSpecifier::new(1, 8), FieldSpecifier::new(2, 8), false),
            (
                FieldSpecifier::enterprise(1, 4, 9),
                FieldSpecifier::enterprise(1, 4, 9),
                true,
            ),
            (
                FieldSpecifier::enterprise(1, 4, 9),
                FieldSpecifier::enterprise(1, 4, 10),
                false,
            ),
            (
                FieldSpecifier::enterprise(1, 4, 9),
                FieldSpecifier::new(1, 4),
                false,
            ),
        ];

        for (a, b, equal) in tests {
            assert_eq!(a == b, equal, "{a:?} vs {b:?}");
        }

        // enterprise numbers only matter when both sides are enterprise
        let a = FieldSpecifier {
            identifier: 1,
            length: 4,
            enterprise_number: Some(1),
        };
        let b = FieldSpecifier {
            identifier: 1,
            length: 4,
            enterprise_number: Some(2),
        };
        assert_eq!(a, b);
        assert_eq!(HashSet::from([a, b]).len(), 1);
    }

    #[test]
    fn catalog_lengths() {
        let spec = FieldSpecifier::from_catalog(27, None).unwrap();
        assert_eq!(spec.length(), 16);

        let spec = FieldSpecifier::from_catalog(82, Some(16)).unwrap();
        assert_eq!(spec.length(), 16);

        // reduced size encoding of octetDeltaCount
        let spec = FieldSpecifier::from_catalog(1, Some(4)).unwrap();
        assert_eq!(spec.length(), 4);

        let err = FieldSpecifier::from_catalog(1, Some(16)).unwrap_err();
        assert!(matches!(
            err,
            Error::Oversized {
                what: "octetDeltaCount",
                size: 16
            }
        ));

        let err = FieldSpecifier::from_catalog(82, None).unwrap_err();
        assert!(matches!(err, Error::NonFixedFieldType(82)));

        let err = FieldSpecifier::from_catalog(0x7ff0, None).unwrap_err();
        assert!(matches!(err, Error::UnknownFieldType(0x7ff0)));
    }

    #[test]
    fn truncated_enterprise_number() {
        let err = decode_at::<FieldSpecifier>(&[0x80, 0x05, 0x00, 0x04, 0x00], 0).unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedInput {
                needed: 4,
                remaining: 1
            }
        ));
    }

    #[test]
    fn unknown_element_name() {
        let spec = FieldSpecifier::new(0x7ff0, 2);
        assert_eq!(spec.name(), "Unknown32752");
        assert!(!spec.is_variable());
        assert!(FieldSpecifier::new(82, VARIABLE_LENGTH).is_variable());
    }
}
