use crate::Error;
use crate::template::{Layout, MIN_TEMPLATE_ID};
use crate::value::Value;
use crate::wire::{self, BytesMut, decode_length_prefix, encode_length_prefix};

/// Records of one template, stored flat: record `r`, field `f` lives at
/// `values[r * field_count + f]`. The values mean nothing without the
/// template whose id equals the set id.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSet {
    id: u16,
    values: Vec<Value>,
}

impl DataSet {
    pub fn new(id: u16) -> Result<Self, Error> {
        Self::with_values(id, Vec::new())
    }

    pub fn with_values(id: u16, values: Vec<Value>) -> Result<Self, Error> {
        if id < MIN_TEMPLATE_ID {
            return Err(Error::InvalidDataSetId(id));
        }

        Ok(DataSet { id, values })
    }

    #[inline]
    pub fn id(&self) -> u16 {
        self.id
    }

    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[inline]
    pub(crate) fn values_mut(&mut self) -> &mut [Value] {
        &mut self.values
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append one record, fields in template order.
    pub fn push_record<I>(&mut self, record: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.values.extend(record.into_iter().map(Into::into));
        self
    }

    /// Append a single value, records are completed field by field.
    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        self.values.push(value.into());
        self
    }

    /// Records in this set when every record has `field_count` fields.
    pub fn record_count(&self, field_count: usize) -> usize {
        if field_count == 0 {
            return 0;
        }

        self.values.len() / field_count
    }

    /// Check that every value fits the field declared for it.
    pub fn validate(&self, layout: &dyn Layout) -> Result<(), Error> {
        let fields = layout.fields();
        if fields.is_empty() || self.values.len() % fields.len() != 0 {
            return Err(Error::IncompleteRecord {
                id: self.id,
                values: self.values.len(),
                fields: fields.len(),
            });
        }

        for (index, value) in self.values.iter().enumerate() {
            let field = fields[index % fields.len()];
            let actual = value.wire_size();

            if field.is_variable() {
                if actual >= u16::MAX as usize {
                    return Err(Error::SizeMismatch {
                        field: index % fields.len(),
                        expected: u16::MAX as usize - 1,
                        actual,
                    });
                }
            } else if actual != field.length() as usize {
                return Err(Error::SizeMismatch {
                    field: index % fields.len(),
                    expected: field.length() as usize,
                    actual,
                });
            }
        }

        Ok(())
    }

    /// Encode the records. With a layout the values are validated against it
    /// and variable length values get their length prefix, without one the
    /// values are written back to back.
    pub fn encode_body(&self, layout: Option<&dyn Layout>, buf: &mut BytesMut) -> Result<(), Error> {
        let Some(layout) = layout else {
            for value in &self.values {
                value.encode(buf);
            }

            return Ok(());
        };

        self.validate(layout)?;

        let fields = layout.fields();
        for (index, value) in self.values.iter().enumerate() {
            if fields[index % fields.len()].is_variable() {
                encode_length_prefix(value.wire_size(), buf)?;
            }

            value.encode(buf);
        }

        Ok(())
    }

    /// Decode records from a set body. Trailing bytes too short to hold
    /// another record are padding and ignored, anything longer is read as
    /// a record even when it is all zero.
    pub fn decode_body(id: u16, layout: &dyn Layout, mut body: &[u8]) -> Result<DataSet, Error> {
        let mut set = DataSet::new(id)?;

        let fields = layout.fields();
        let record_size = layout.record_size();
        if fields.is_empty() || record_size == 0 {
            return Ok(set);
        }

        set.values.reserve(body.len() / record_size * fields.len());
        while body.len() >= record_size {
            for field in &fields {
                let length = if field.is_variable() {
                    decode_length_prefix(&mut body)?
                } else {
                    field.length() as usize
                };

                let data = wire::take(&mut body, length)?;
                set.values.push(Value::decode(field.kind(), data));
            }
        }

        Ok(set)
    }
}
