use bytes::BufMut;
use elements::Catalog;

use crate::field::{FieldDescriptor, resolve_length};
use crate::schema::padding;
use crate::template::{Layout, TemplateRecord, check_template_id, count_u16};
use crate::wire::{self, BytesMut, OnWire};
use crate::{Error, wire_schema};

/// Field type and length pair of a NetFlow v9 template. There is no
/// enterprise bit in v9, every 16 bit value is a plain field type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TemplateField {
    pub field_type: u16,
    pub length: u16,
}

wire_schema! {
    TemplateField {
        1 => field_type: u16,
        2 => length: u16,
    }
}

impl TemplateField {
    pub fn new(field_type: u16, length: u16) -> Self {
        TemplateField { field_type, length }
    }

    /// Length from the field type catalog unless one is given.
    pub fn from_catalog(field_type: u16, length: Option<u16>) -> Result<Self, Error> {
        let length = resolve_length(Catalog::NetFlow9, field_type, length)?;
        Ok(TemplateField { field_type, length })
    }
}

impl FieldDescriptor for TemplateField {
    fn element(&self) -> u16 {
        self.field_type
    }

    fn length(&self) -> u16 {
        self.length
    }

    fn catalog(&self) -> Catalog {
        Catalog::NetFlow9
    }
}

/// Scope of an options template, System, Interface, LineCard, Cache or
/// Template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScopeField {
    pub scope_type: u16,
    pub length: u16,
}

wire_schema! {
    ScopeField {
        1 => scope_type: u16,
        2 => length: u16,
    }
}

impl ScopeField {
    pub fn new(scope_type: u16, length: u16) -> Self {
        ScopeField { scope_type, length }
    }

    pub fn from_catalog(scope_type: u16, length: Option<u16>) -> Result<Self, Error> {
        let length = resolve_length(Catalog::NetFlow9Scope, scope_type, length)?;
        Ok(ScopeField { scope_type, length })
    }
}

impl FieldDescriptor for ScopeField {
    fn element(&self) -> u16 {
        self.scope_type
    }

    fn length(&self) -> u16 {
        self.length
    }

    fn catalog(&self) -> Catalog {
        Catalog::NetFlow9Scope
    }
}

/// ```text
/// +--------------------------------------------------+
/// | Template ID           | Option Scope Length      |
/// +--------------------------------------------------+
/// | Option Length         | Scope 1 Field Type       |
/// +--------------------------------------------------+
/// | Scope 1 Field Length  | ...                      |
/// +--------------------------------------------------+
/// | Option 1 Field Type   | Option 1 Field Length    |
/// +--------------------------------------------------+
/// | ...                   | Padding                  |
/// +--------------------------------------------------+
/// ```
///
/// Both lengths count bytes, not fields, and are derived from the field
/// lists.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionsTemplateRecord {
    id: u16,
    scope_fields: Vec<ScopeField>,
    option_fields: Vec<TemplateField>,
}

impl OptionsTemplateRecord {
    pub fn new(id: u16) -> Result<Self, Error> {
        Self::with_fields(id, Vec::new(), Vec::new())
    }

    pub fn with_fields(
        id: u16,
        scope_fields: Vec<ScopeField>,
        option_fields: Vec<TemplateField>,
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
    pub fn scope_fields(&self) -> &[ScopeField] {
        &self.scope_fields
    }

    #[inline]
    pub fn option_fields(&self) -> &[TemplateField] {
        &self.option_fields
    }

    pub fn push_scope(&mut self, field: ScopeField) -> &mut Self {
        self.scope_fields.push(field);
        self
    }

    pub fn push_option(&mut self, field: TemplateField) -> &mut Self {
        self.option_fields.push(field);
        self
    }

    fn unpadded_size(&self) -> usize {
        6 + self.scope_fields.wire_size() + self.option_fields.wire_size()
    }
}

impl OnWire for OptionsTemplateRecord {
    fn wire_size(&self) -> usize {
        let size = self.unpadded_size();
        size + padding(size, 4)
    }

    fn encode(&self, buf: &mut BytesMut) -> Result<(), Error> {
        if self.scope_fields.is_empty() {
            return Err(Error::EmptyScope(self.id));
        }

        buf.put_u16(self.id);
        buf.put_u16(count_u16("option scope length", self.scope_fields.wire_size())?);
        buf.put_u16(count_u16("option length", self.option_fields.wire_size())?);
        self.scope_fields.encode(buf)?;
        self.option_fields.encode(buf)?;
        buf.put_bytes(0, padding(self.unpadded_size(), 4));

        Ok(())
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, Error> {
        let id = u16::decode(buf)?;
        check_template_id(id)?;

        let scope_length = u16::decode(buf)?;
        let option_length = u16::decode(buf)?;
        for length in [scope_length, option_length] {
            if length % 4 != 0 {
                return Err(Error::InvalidFieldListLength(length));
            }
        }

        let scope_fields = (0..scope_length / 4)
            .map(|_| ScopeField::decode(buf))
            .collect::<Result<Vec<_>, _>>()?;
        let option_fields = (0..option_length / 4)
            .map(|_| TemplateField::decode(buf))
            .collect::<Result<Vec<_>, _>>()?;

        let record = OptionsTemplateRecord {
            id,
            scope_fields,
            option_fields,
        };

        // the last record of a set may lack its padding when the set
        // length was not rounded
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
            .map(|field| field as &dyn FieldDescriptor)
            .chain(
                self.option_fields
                    .iter()
                    .map(|field| field as &dyn FieldDescriptor),
            )
            .collect()
    }

    fn scope_field_count(&self) -> usize {
        self.scope_fields.len()
    }
}

/// A template learned from, or announced on, a NetFlow v9 stream.
#[derive(Clone, Debug, PartialEq)]
pub enum Template {
    Basic(TemplateRecord<TemplateField>),
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
            Template::Basic(template) => template.scope_field_count(),
            Template::Options(template) => template.scope_field_count(),
        }
    }
}

impl From<TemplateRecord<TemplateField>> for Template {
    fn from(template: TemplateRecord<TemplateField>) -> Self {
        Template::Basic(template)
    }
}

impl From<OptionsTemplateRecord> for Template {
    fn from(template: OptionsTemplateRecord) -> Self {
        Template::Options(template)
    }
}
