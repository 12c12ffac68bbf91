//! Named access to the records of a data set through its template.

use std::borrow::Cow;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::Error;
use crate::data::DataSet;
use crate::field::FieldDescriptor;
use crate::template::Layout;
use crate::value::Value;

/// One decoded record, field names in template order. Names are not
/// guaranteed to be unique, a template may carry the same element twice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldMap(Vec<(Cow<'static, str>, Value)>);

impl FieldMap {
    /// First value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_ref(), value))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<(Cow<'static, str>, Value)> {
        self.0
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A data set seen through the template with the same id. The view borrows
/// both, so neither can change while it is alive.
pub struct View<'a> {
    set: &'a DataSet,
    fields: Vec<&'a dyn FieldDescriptor>,
}

impl<'a> View<'a> {
    pub fn new(set: &'a DataSet, layout: &'a dyn Layout) -> Result<Self, Error> {
        if layout.template_id() != set.id() {
            return Err(Error::NoMatchingTemplate(set.id()));
        }

        Ok(View {
            set,
            fields: layout.fields(),
        })
    }

    /// Bind `set` to the first of `layouts` with a matching id.
    pub fn find<L, I>(set: &'a DataSet, layouts: I) -> Result<Self, Error>
    where
        L: Layout + 'a,
        I: IntoIterator<Item = &'a L>,
    {
        let layout = layouts
            .into_iter()
            .find(|layout| layout.template_id() == set.id())
            .ok_or(Error::NoMatchingTemplate(set.id()))?;

        View::new(set, layout)
    }

    #[inline]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn record_count(&self) -> usize {
        self.set.record_count(self.fields.len())
    }

    pub fn field(&self, index: usize) -> Result<&'a dyn FieldDescriptor, Error> {
        self.fields
            .get(index)
            .copied()
            .ok_or(Error::FieldIndexOutOfRange {
                index,
                count: self.fields.len(),
            })
    }

    /// Byte offset of field `index` within an encoded record.
    pub fn field_offset(&self, index: usize) -> Result<usize, Error> {
        field_offset(&self.fields, index)
    }

    /// Index of the first field carrying `element`.
    pub fn field_index_of(&self, element: u16) -> Result<usize, Error> {
        field_index_of(&self.fields, element)
    }

    /// Byte offset of the first field carrying `element`.
    pub fn field_offset_of(&self, element: u16) -> Result<usize, Error> {
        self.field_offset(self.field_index_of(element)?)
    }

    pub fn value(&self, record: usize, field: usize) -> Result<&'a Value, Error> {
        let index = value_index(self.set, self.fields.len(), record, field)?;
        Ok(&self.set.values()[index])
    }

    /// Every field of one record, named after its template field.
    pub fn record(&self, index: usize) -> Result<FieldMap, Error> {
        let start = value_index(self.set, self.fields.len(), index, 0)?;
        let values = &self.set.values()[start..start + self.fields.len()];

        Ok(FieldMap(
            self.fields
                .iter()
                .zip(values)
                .map(|(field, value)| (field.name(), value.clone()))
                .collect(),
        ))
    }

    pub fn records(&self) -> impl Iterator<Item = FieldMap> + '_ {
        (0..self.record_count()).filter_map(|index| self.record(index).ok())
    }

    /// Fail unless `value` could replace the value of field `index`.
    pub fn check_value(&self, value: &Value, index: usize) -> Result<(), Error> {
        check_value(&self.fields, value, index)
    }
}

/// Like [`View`], but allows replacing values.
pub struct ViewMut<'a> {
    set: &'a mut DataSet,
    fields: Vec<&'a dyn FieldDescriptor>,
}

impl<'a> ViewMut<'a> {
    pub fn new(set: &'a mut DataSet, layout: &'a dyn Layout) -> Result<Self, Error> {
        if layout.template_id() != set.id() {
            return Err(Error::NoMatchingTemplate(set.id()));
        }

        Ok(ViewMut {
            set,
            fields: layout.fields(),
        })
    }

    pub fn check_value(&self, value: &Value, index: usize) -> Result<(), Error> {
        check_value(&self.fields, value, index)
    }

    /// Replace one value, returning the old one.
    pub fn set(&mut self, record: usize, field: usize, value: impl Into<Value>) -> Result<Value, Error> {
        let value = value.into();
        self.check_value(&value, field)?;

        let index = value_index(self.set, self.fields.len(), record, field)?;
        Ok(std::mem::replace(&mut self.set.values_mut()[index], value))
    }

    pub fn as_view(&self) -> View<'_> {
        View {
            set: self.set,
            fields: self.fields.clone(),
        }
    }
}

fn field_offset(fields: &[&dyn FieldDescriptor], index: usize) -> Result<usize, Error> {
    if index >= fields.len() {
        return Err(Error::FieldIndexOutOfRange {
            index,
            count: fields.len(),
        });
    }

    let mut offset = 0;
    for field in &fields[..index] {
        if field.is_variable() {
            return Err(Error::VariableLengthOffset(index));
        }

        offset += field.length() as usize;
    }

    Ok(offset)
}

fn field_index_of(fields: &[&dyn FieldDescriptor], element: u16) -> Result<usize, Error> {
    fields
        .iter()
        .position(|field| field.element() == element)
        .ok_or(Error::FieldNotFound(element))
}

fn value_index(set: &DataSet, field_count: usize, record: usize, field: usize) -> Result<usize, Error> {
    if field >= field_count {
        return Err(Error::FieldIndexOutOfRange {
            index: field,
            count: field_count,
        });
    }

    let records = set.record_count(field_count);
    if record >= records {
        return Err(Error::RecordIndexOutOfRange {
            index: record,
            count: records,
        });
    }

    Ok(record * field_count + field)
}

fn check_value(fields: &[&dyn FieldDescriptor], value: &Value, index: usize) -> Result<(), Error> {
    let field = fields.get(index).ok_or(Error::FieldIndexOutOfRange {
        index,
        count: fields.len(),
    })?;

    let actual = value.wire_size();
    if field.is_variable() {
        if actual < u16::MAX as usize {
            return Ok(());
        }

        return Err(Error::SizeMismatch {
            field: index,
            expected: u16::MAX as usize - 1,
            actual,
        });
    }

    if actual != field.length() as usize {
        return Err(Error::SizeMismatch {
            field: index,
            expected: field.length() as usize,
            actual,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use elements::VARIABLE_LENGTH;

    use super::*;
    use crate::field::FieldSpecifier;
    use crate::template::TemplateRecord;

    fn template(id: u16) -> TemplateRecord<FieldSpecifier> {
        TemplateRecord::with_fields(
            id,
            vec![
                FieldSpecifier::new(8, 4),
                FieldSpecifier::new(7, 2),
                FieldSpecifier::enterprise(12, 4, 29305),
                FieldSpecifier::new(82, VARIABLE_LENGTH),
                FieldSpecifier::new(1, 8),
            ],
        )
        .unwrap()
    }

    fn data_set() -> DataSet {
        let mut set = DataSet::new(300).unwrap();
        set.push_record([
            Value::from(Ipv4Addr::new(10, 0, 0, 1)),
            Value::U16(53),
            Value::U32(7),
            Value::from("eth0"),
            Value::U64(1500),
        ])
        .push_record([
            Value::from(Ipv4Addr::new(10, 0, 0, 2)),
            Value::U16(443),
            Value::U32(8),
            Value::from("eth1"),
            Value::U64(9000),
        ]);
        set
    }

    #[test]
    fn matching() {
        let set = data_set();
        let other = template(301);
        assert!(matches!(
            View::new(&set, &other),
            Err(Error::NoMatchingTemplate(300))
        ));

        let templates = [template(299), template(300), template(301)];
        let view = View::find(&set, &templates).unwrap();
        assert_eq!(view.field_count(), 5);
        assert_eq!(view.record_count(), 2);

        assert!(matches!(
            View::find(&set, &templates[..1]),
            Err(Error::NoMatchingTemplate(300))
        ));
    }

    #[test]
    fn offsets() {
        let set = data_set();
        let template = template(300);
        let view = View::new(&set, &template).unwrap();

        let tests = [(0, 0), (1, 4), (2, 6), (3, 10)];
        for (index, offset) in tests {
            assert_eq!(view.field_offset(index).unwrap(), offset, "field {index}");
        }

        assert!(matches!(
            view.field_offset(4),
            Err(Error::VariableLengthOffset(4))
        ));
        assert!(matches!(
            view.field_offset(5),
            Err(Error::FieldIndexOutOfRange { index: 5, count: 5 })
        ));

        assert_eq!(view.field_offset_of(7).unwrap(), 4);
        // the enterprise field carries element 12 as well
        assert_eq!(view.field_offset_of(12).unwrap(), 6);
        assert!(matches!(
            view.field_offset_of(27),
            Err(Error::FieldNotFound(27))
        ));
    }

    #[test]
    fn records() {
        let set = data_set();
        let template = template(300);
        let view = View::new(&set, &template).unwrap();

        let record = view.record(1).unwrap();
        let names = record.iter().map(|(name, _)| name).collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "sourceIPv4Address",
                "sourceTransportPort",
                "Enterprise12",
                "interfaceName",
                "octetDeltaCount"
            ]
        );
        assert_eq!(record.get("sourceTransportPort"), Some(&Value::U16(443)));
        assert_eq!(record.get("interfaceName").and_then(Value::as_str), Some("eth1"));
        assert_eq!(record.get("missing"), None);

        assert!(matches!(
            view.record(2),
            Err(Error::RecordIndexOutOfRange { index: 2, count: 2 })
        ));
        assert_eq!(view.records().count(), 2);

        let json = serde_json::to_string(&view.record(0).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"sourceIPv4Address":"10.0.0.1","sourceTransportPort":53,"Enterprise12":7,"interfaceName":"eth0","octetDeltaCount":1500}"#
        );
    }

    #[test]
    fn check_and_set() {
        let mut set = data_set();
        let template = template(300);

        {
            let view = View::new(&set, &template).unwrap();
            view.check_value(&Value::U16(1), 1).unwrap();
            view.check_value(&Value::from("a much longer name"), 3).unwrap();
            assert!(matches!(
                view.check_value(&Value::U32(1), 1),
                Err(Error::SizeMismatch {
                    field: 1,
                    expected: 2,
                    actual: 4
                })
            ));
        }

        let mut view = ViewMut::new(&mut set, &template).unwrap();
        assert_eq!(view.set(0, 1, 8080u16).unwrap(), Value::U16(53));
        assert!(view.set(0, 1, 8080u32).is_err());
        assert!(view.set(5, 1, 8080u16).is_err());
        assert_eq!(view.as_view().value(0, 1).unwrap(), &Value::U16(8080));

        assert_eq!(set.values()[1], Value::U16(8080));
    }
}
