//! Static information element catalogs for NetFlow v9 and IPFIX.
//!
//! NetFlow v9 field types: https://www.rfc-editor.org/rfc/rfc3954#section-8
//! IPFIX information elements: https://www.iana.org/assignments/ipfix/ipfix.xhtml

pub mod ipfix;
pub mod netflow9;

/// The length used by a field specifier to announce a variable length value.
pub const VARIABLE_LENGTH: u16 = 65535;

/// Semantic type of an element, used to pick a decoder for the raw bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Unsigned,
    Signed,
    Float,
    Boolean,
    MacAddress,
    Ipv4Address,
    Ipv6Address,
    String,
    Octets,
    DateTimeSeconds,
    DateTimeMilliseconds,
    DateTimeMicroseconds,
    DateTimeNanoseconds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Length {
    Fixed(u16),
    Variable,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Element {
    pub id: u16,
    pub name: &'static str,
    pub length: Length,
    pub kind: Kind,
}

impl Element {
    pub(crate) const fn fixed(id: u16, name: &'static str, length: u16, kind: Kind) -> Self {
        Element {
            id,
            name,
            length: Length::Fixed(length),
            kind,
        }
    }

    pub(crate) const fn variable(id: u16, name: &'static str, kind: Kind) -> Self {
        Element {
            id,
            name,
            length: Length::Variable,
            kind,
        }
    }

    /// The length an exporter uses when it does not say otherwise, `None`
    /// for variable length elements.
    #[inline]
    pub fn default_length(&self) -> Option<u16> {
        match self.length {
            Length::Fixed(length) => Some(length),
            Length::Variable => None,
        }
    }

    /// Numeric elements may be sent with reduced size encoding, but never
    /// wider than their default length.
    #[inline]
    pub fn max_length(&self) -> Option<u16> {
        self.default_length()
    }
}

/// Which catalog a field identifier belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Catalog {
    NetFlow9,
    NetFlow9Scope,
    Ipfix,
}

pub fn lookup(catalog: Catalog, id: u16) -> Option<&'static Element> {
    let table = match catalog {
        Catalog::NetFlow9 => netflow9::FIELDS,
        Catalog::NetFlow9Scope => netflow9::SCOPES,
        Catalog::Ipfix => ipfix::ELEMENTS,
    };

    table
        .binary_search_by_key(&id, |element| element.id)
        .ok()
        .map(|index| &table[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        for table in [netflow9::FIELDS, netflow9::SCOPES, ipfix::ELEMENTS] {
            for pair in table.windows(2) {
                assert!(
                    pair[0].id < pair[1].id,
                    "{} ({}) must come before {} ({})",
                    pair[0].name,
                    pair[0].id,
                    pair[1].name,
                    pair[1].id
                );
            }
        }
    }

    #[test]
    fn lookup_known() {
        let tests = [
            (Catalog::NetFlow9, 8, "IPV4_SRC_ADDR", Some(4)),
            (Catalog::NetFlow9, 82, "IF_NAME", None),
            (Catalog::NetFlow9Scope, 2, "Interface", Some(4)),
            (Catalog::Ipfix, 1, "octetDeltaCount", Some(8)),
            (Catalog::Ipfix, 27, "sourceIPv6Address", Some(16)),
            (Catalog::Ipfix, 82, "interfaceName", None),
        ];

        for (catalog, id, name, length) in tests {
            let element = lookup(catalog, id).unwrap();
            assert_eq!(element.name, name);
            assert_eq!(element.default_length(), length);
        }
    }

    #[test]
    fn lookup_unknown() {
        assert!(lookup(Catalog::NetFlow9, 43).is_none());
        assert!(lookup(Catalog::NetFlow9Scope, 6).is_none());
        assert!(lookup(Catalog::Ipfix, 0).is_none());
    }
}
