use bytes::BufMut;

use crate::field::{FieldDescriptor, FieldSpecifier};
use crate::schema::padding;
use crate::template::{Layout, TemplateRecord, check_template_id, count_u16};
use crate::wire::{self, BytesMut, OnWire};
use crate::Error;

/// ```text
/// +--------------------------------------------------+
/// | Template ID           | Field Count              |
/// +--------------------------------------------------+
/// | Scope Field Count     | Scope Field Specifier 1  |
/// +--------------------------------------------------+
/// | ...                   | Field Specifier N        |
/// +--------------------------------------------------+
/// | Padding                                          |
/// +--------------------------------------------------+
/// ```
///
/// Field count covers scope and option fields. A record without any field
/// is a withdrawal and carries only the id and a zero field count.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionsTemplateRecord {
    id: u16,
    scope_fields: Vec<FieldSpecifier>,
    option_fields: Vec<FieldSpecifier>,
}

impl OptionsTemplateRecord {
    pub fn new(id: u16) -> Result<Self, Error> {
        Self::with_fields(id, Vec::new(), Vec::new())
    }

    pub fn with_fields(
        id: u16,
        scope_fields: Vec<FieldSpecifier>,
        option_fields: Vec<FieldSpecifier>,
    ) -> Result<Self, Error> {
        check_template_id(id)?;

        Ok(OptionsTemplateRecord {
            id,
            scope_fields,
            option_fields,
        })
    }

    #[inline]
    pub fn id(&self) -> u16 {
        self.id
    }

    #[inline]
    pub fn scope_fields(&self) -> &[FieldSpecifier] {
        &self.scope_fields
    }

    #[inline]
    pub fn option_fields(&self) -> &[FieldSpecifier] {
        &self.option_fields
    }

    pub fn push_scope(&mut self, field: FieldSpecifier) -> &mut Self {
        self.scope_fields.push(field);
        self
    }

    pub fn push_option(&mut self, field: FieldSpecifier) -> &mut Self {
        self.option_fields.push(field);
        self
    }

    #[inline]
    pub fn is_withdrawal(&self) -> bool {
        self.scope_fields.is_empty() && self.option_fields.is_empty()
    }

    fn unpadded_size(&self) -> usize {
        if self.is_withdrawal() {
            return 4;
        }

        6 + self.scope_fields.wire_size() + self.option_fields.wire_size()
    }
}

impl OnWire for OptionsTemplateRecord {
    fn wire_size(&self) -> usize {
        let size = self.unpadded_size();
        size + padding(size, 4)
    }

    fn encode(&self, buf: &mut BytesMut) -> Result<(), Error> {
        buf.put_u16(self.id);
        if self.is_withdrawal() {
            buf.put_u16(0);
            return Ok(());
        }

        if self.scope_fields.is_empty() {
            return Err(Error::EmptyScope(self.id));
        }

        let field_count = self.scope_fields.len() + self.option_fields.len();
        buf.put_u16(count_u16("field count", field_count)?);
        buf.put_u16(count_u16("scope field count", self.scope_fields.len())?);
        self.scope_fields.encode(buf)?;
        self.option_fields.encode(buf)?;
        buf.put_bytes(0, padding(self.unpadded_size(), 4));

        Ok(())
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, Error> {
        let id = u16::decode(buf)?;
        check_template_id(id)?;

        let field_count = u16::decode(buf)?;
        if field_count == 0 {
            return OptionsTemplateRecord::new(id);
        }

        let scope_field_count = u16::decode(buf)?;
        if scope_field_count == 0 {
            return Err(Error::EmptyScope(id));
        }
        if scope_field_count > field_count {
            return Err(Error::Oversized {
                what: "scope field count",
                size: scope_field_count as usize,
            });
        }

        let scope_fields = (0..scope_field_count)
            .map(|_| FieldSpecifier::decode(buf))
            .collect::<Result<Vec<_>, _>>()?;
        let option_fields = (scope_field_count..field_count)
            .map(|_| FieldSpecifier::decode(buf))
            .collect::<Result<Vec<_>, _>>()?;

        let record = OptionsTemplateRecord {
            id,
            scope_fields,
            option_fields,
        };

        let pad = padding(record.unpadded_size(), 4).min(buf.len());
        wire::skip(buf, pad)?;

        Ok(record)
    }
}

impl Layout for OptionsTemplateRecord {
    fn template_id(&self) -> u16 {
        self.id
    }

    fn fields(&self) -> Vec<&dyn FieldDescriptor> {
        self.scope_fields
            .iter()
            .chain(self.option_fields.iter())
            .map(|field| field as &dyn FieldDescriptor)
            .collect()
    }

    fn scope_field_count(&self) -> usize {
        self.scope_fields.len()
    }
}

/// A template learned from, or announced on, an IPFIX stream.
#[derive(Clone, Debug, PartialEq)]
pub enum Template {
    Basic(TemplateRecord<FieldSpecifier>),
    Options(OptionsTemplateRecord),
}

impl Template {
    pub fn id(&self) -> u16 {
        match self {
            Template::Basic(template) => template.id(),
            Template::Options(template) => template.id(),
        }
    }
}

impl Layout for Template {
    fn template_id(&self) -> u16 {
        self.id()
    }

    fn fields(&self) -> Vec<&dyn FieldDescriptor> {
        match self {
            Template::Basic(template) => Layout::fields(template),
            Template::Options(template) => Layout::fields(template),
        }
    }

    fn scope_field_count(&self) -> usize {
        match self {
            Template::Basic(_) => 0,
            Template::Options(template) => template.scope_field_count(),
        }
    }
}

impl From<TemplateRecord<FieldSpecifier>> for Template {
    fn from(template: TemplateRecord<FieldSpecifier>) -> Self {
        Template::Basic(template)
    }
}

impl From<OptionsTemplateRecord> for Template {
    fn from(template: OptionsTemplateRecord) -> Self {
        Template::Options(template)
    }
}
