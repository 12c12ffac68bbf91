use std::collections::HashMap;

use bytes::BufMut;

use crate::Error;
use crate::field::FieldDescriptor;
use crate::wire::{BytesMut, OnWire};

/// Template ids below this are reserved for set ids.
pub const MIN_TEMPLATE_ID: u16 = 256;

#[inline]
pub(crate) fn check_template_id(id: u16) -> Result<(), Error> {
    if id < MIN_TEMPLATE_ID {
        return Err(Error::InvalidTemplateId(id));
    }

    Ok(())
}

/// The record shape a template declares for its data sets.
pub trait Layout {
    fn template_id(&self) -> u16;

    /// Every field of a record in wire order, scope fields first.
    fn fields(&self) -> Vec<&dyn FieldDescriptor>;

    /// How many of the leading fields are scope fields.
    fn scope_field_count(&self) -> usize {
        0
    }

    /// Declared size of one record. A variable length field counts as its
    /// shortest encoding, a single length byte.
    fn record_size(&self) -> usize {
        self.fields()
            .iter()
            .map(|field| {
                if field.is_variable() {
                    1
                } else {
                    field.length() as usize
                }
            })
            .sum()
    }
}

/// TemplateRecord is a single template that describes structure of a Flow
/// Record (the actual NetFlow data).
///
/// The field count on the wire is always derived from `fields`.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateRecord<F> {
    /// Each of the newly generated template record is given a unique template
    /// id. This uniqueness is local to the observation domain that generated
    /// the template id. Template ids of data flow sets are numbered from 256
    /// to 65535.
    id: u16,

    fields: Vec<F>,
}

impl<F> TemplateRecord<F> {
    pub fn new(id: u16) -> Result<Self, Error> {
        Self::with_fields(id, Vec::new())
    }

    pub fn with_fields(id: u16, fields: Vec<F>) -> Result<Self, Error> {
        check_template_id(id)?;

        Ok(TemplateRecord { id, fields })
    }

    #[inline]
    pub fn id(&self) -> u16 {
        self.id
    }

    #[inline]
    pub fn fields(&self) -> &[F] {
        &self.fields
    }

    #[inline]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn push(&mut self, field: F) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// A template without fields withdraws a previously announced template.
    pub fn is_withdrawal(&self) -> bool {
        self.fields.is_empty()
    }
}

pub(crate) fn count_u16(what: &'static str, count: usize) -> Result<u16, Error> {
    u16::try_from(count).map_err(|_| Error::Oversized { what, size: count })
}

impl<F: OnWire> OnWire for TemplateRecord<F> {
    fn wire_size(&self) -> usize {
        4 + self.fields.wire_size()
    }

    fn encode(&self, buf: &mut BytesMut) -> Result<(), Error> {
        buf.put_u16(self.id);
        buf.put_u16(count_u16("template field count", self.fields.len())?);
        self.fields.encode(buf)
    }

    fn decode(buf: &mut &[u8]) -> Result<Self, Error> {
        let id = u16::decode(buf)?;
        check_template_id(id)?;

        let field_count = u16::decode(buf)?;
        let fields = (0..field_count)
            .map(|_| F::decode(buf))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TemplateRecord { id, fields })
    }
}

impl<F: FieldDescriptor> Layout for TemplateRecord<F> {
    fn template_id(&self) -> u16 {
        self.id
    }

    fn fields(&self) -> Vec<&dyn FieldDescriptor> {
        self.fields
            .iter()
            .map(|field| field as &dyn FieldDescriptor)
            .collect()
    }
}

#[inline]
fn template_key(domain: u32, template_id: u16) -> u64 {
    ((domain as u64) << 16) | template_id as u64
}

/// Templates learned from, or announced to, one stream. Template ids are
/// only unique within an observation domain (IPFIX) or source id (NetFlow
/// v9), so both make up the key.
#[derive(Debug)]
pub struct TemplateCache<T> {
    inner: HashMap<u64, T>,
    limit: usize,
}

impl<T> Default for TemplateCache<T> {
    fn default() -> Self {
        TemplateCache::with_limit(usize::MAX)
    }
}

impl<T> TemplateCache<T> {
    pub fn with_limit(limit: usize) -> Self {
        TemplateCache {
            inner: HashMap::new(),
            limit,
        }
    }

    pub fn get(&self, domain: u32, template_id: u16) -> Option<&T> {
        self.inner.get(&template_key(domain, template_id))
    }

    /// Insert or replace a template, returning the replaced one. New
    /// templates are dropped once the cache is full.
    pub fn add(&mut self, domain: u32, template_id: u16, template: T) -> Option<T> {
        let key = template_key(domain, template_id);
        if self.inner.len() >= self.limit && !self.inner.contains_key(&key) {
            warn!(
                message = "template cache is full, dropping template",
                domain,
                template = template_id,
                limit = self.limit,
            );

            return None;
        }

        debug!(
            message = "adding new template",
            domain,
            template = template_id,
        );

        self.inner.insert(key, template)
    }

    pub fn remove(&mut self, domain: u32, template_id: u16) -> Option<T> {
        debug!(
            message = "withdrawing template",
            domain,
            template = template_id,
        );

        self.inner.remove(&template_key(domain, template_id))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T: Layout> TemplateCache<T> {
    /// Remember a template seen on the wire. A template without fields is a
    /// withdrawal and forgets the template with its id.
    pub fn learn(&mut self, domain: u32, template: T) {
        let id = template.template_id();
        if template.fields().is_empty() {
            self.remove(domain, id);
        } else {
            self.add(domain, id, template);
        }
    }
}
