use std::net::Ipv4Addr;

use flowcodec::data::DataSet;
use flowcodec::elements::VARIABLE_LENGTH;
use flowcodec::elements::ipfix::*;
use flowcodec::field::{FieldDescriptor, FieldSpecifier};
use flowcodec::ipfix::{Header, Message, OptionsTemplateRecord, Reader, Set, Writer};
use flowcodec::state::State;
use flowcodec::template::TemplateRecord;
use flowcodec::view::{View, ViewMut};
use flowcodec::wire::{decode_at, to_bytes};
use flowcodec::{Error, ErrorKind, Value};
use pretty_assertions::assert_eq;

const PEN: u32 = 12345;

fn flow_template() -> TemplateRecord<FieldSpecifier> {
    TemplateRecord::with_fields(
        300,
        vec![
            FieldSpecifier::from_catalog(SOURCE_IPV4_ADDRESS, None).unwrap(),
            FieldSpecifier::from_catalog(SOURCE_TRANSPORT_PORT, None).unwrap(),
            FieldSpecifier::enterprise(5, 4, PEN),
            FieldSpecifier::from_catalog(INTERFACE_NAME, Some(VARIABLE_LENGTH)).unwrap(),
            FieldSpecifier::new(OCTET_DELTA_COUNT, 4),
        ],
    )
    .unwrap()
}

fn flows() -> DataSet {
    let mut set = DataSet::new(300).unwrap();
    set.push_record([
        Value::from(Ipv4Addr::new(10, 0, 0, 1)),
        Value::from(53u16),
        Value::from(vec![0u8, 0, 0, 7]),
        Value::from("eth0"),
        Value::from(1500u32),
    ]);
    set.push_record([
        Value::from(Ipv4Addr::new(10, 0, 0, 2)),
        Value::from(443u16),
        Value::from(vec![0u8, 0, 0, 9]),
        Value::from("a-much-longer-interface-name"),
        Value::from(64u32),
    ]);

    set
}

fn sampling_template() -> OptionsTemplateRecord {
    OptionsTemplateRecord::with_fields(
        301,
        vec![FieldSpecifier::new(EXPORTING_PROCESS_ID, 4)],
        vec![
            FieldSpecifier::new(SAMPLING_INTERVAL, 4),
            FieldSpecifier::new(SAMPLING_ALGORITHM, 1),
        ],
    )
    .unwrap()
}

fn message() -> Message {
    let mut sampling = DataSet::new(301).unwrap();
    sampling.push(9u32).push(1000u32).push(2u8);

    Message {
        header: Header {
            export_time: 1_700_000_000,
            sequence_number: 7,
            observation_domain_id: 3,
            ..Default::default()
        },
        sets: vec![
            Set::Templates(vec![flow_template()]),
            Set::OptionsTemplates(vec![sampling_template()]),
            Set::Data(flows()),
            Set::Data(sampling),
        ],
    }
}

#[test]
fn enterprise_field_specifier() {
    let spec = FieldSpecifier::enterprise(5, 4, PEN);
    assert!(spec.is_enterprise());
    assert!(spec.identifier() < 0);
    assert_eq!(spec.information_element(), 5);
    assert_eq!(spec.enterprise_number(), Some(PEN));

    let buf = to_bytes(&spec).unwrap();
    assert_eq!(&buf[..], &[0x80, 0x05, 0x00, 0x04, 0x00, 0x00, 0x30, 0x39]);

    let (decoded, consumed) = decode_at::<FieldSpecifier>(&buf, 0).unwrap();
    assert_eq!(consumed, 8);
    assert_eq!(decoded, spec);
    assert_eq!(decoded.enterprise_number(), Some(PEN));
}

#[test]
fn standard_field_specifier() {
    let spec = FieldSpecifier::new(SOURCE_IPV4_ADDRESS, 4);
    assert!(!spec.is_enterprise());
    assert_eq!(spec.enterprise_number(), None);

    let buf = to_bytes(&spec).unwrap();
    assert_eq!(&buf[..], &[0x00, 0x08, 0x00, 0x04]);

    assert!(matches!(
        FieldSpecifier::from_catalog(INTERFACE_NAME, None),
        Err(Error::NonFixedFieldType(INTERFACE_NAME))
    ));
}

#[test]
fn truncated_scalar() {
    let err = decode_at::<u32>(&[0x00, 0x01], 0).unwrap_err();
    assert!(matches!(
        err,
        Error::TruncatedInput {
            needed: 4,
            remaining: 2
        }
    ));
    assert_eq!(err.kind(), ErrorKind::Data);
}

#[test]
fn round_trip() {
    let message = message();

    let buf = message.encode().unwrap();
    assert_eq!(buf.len() % 4, 0);
    assert_eq!(
        u16::from_be_bytes([buf[2], buf[3]]) as usize,
        buf.len(),
        "header length covers the whole message"
    );

    let mut reader = Reader::new(&buf[..]);
    let decoded = reader.read_message().unwrap().unwrap();
    assert_eq!(decoded.header.length as usize, buf.len());
    assert_eq!(decoded.header.observation_domain_id, 3);
    assert_eq!(decoded.sets, message.sets);
    assert_eq!(reader.state(), State::AwaitingPacketHeader);
    assert!(reader.read_message().unwrap().is_none());
}

#[test]
fn set_lengths() {
    let message = message();

    let mut writer = Writer::new(Vec::new());
    writer
        .write_header(&Header {
            length: 160,
            observation_domain_id: 3,
            ..Default::default()
        })
        .unwrap();

    let lengths = message
        .sets
        .iter()
        .map(|set| writer.write_set(set).unwrap())
        .collect::<Vec<_>>();

    // template: 4 + 4 + 4 * 4 + 8
    // options template: 4 + 6 + 3 * 4 = 22, padded to 24
    // flows: 4 + (4 + 2 + 4 + 1 + 4 + 4) + (4 + 2 + 4 + 1 + 28 + 4) = 66, padded to 68
    // sampling: 4 + 4 + 4 + 1 = 13, padded to 16
    assert_eq!(lengths, vec![32, 24, 68, 16]);
    assert_eq!(writer.state(), State::AwaitingFlowSet);
}

#[test]
fn long_variable_value() {
    let template = TemplateRecord::with_fields(
        310,
        vec![FieldSpecifier::new(INTERFACE_NAME, VARIABLE_LENGTH)],
    )
    .unwrap();

    let name = "x".repeat(300);
    let mut set = DataSet::new(310).unwrap();
    set.push(name.as_str());

    let message = Message {
        header: Header::default(),
        sets: vec![Set::Templates(vec![template]), Set::Data(set.clone())],
    };

    let buf = message.encode().unwrap();
    // data set: header, 0xff, u16 length, value. Records may be a single
    // byte so the set is not padded.
    let data = &buf[buf.len() - 307..];
    assert_eq!(&data[..7], &[0x01, 0x36, 0x01, 0x33, 0xff, 0x01, 0x2c]);

    let decoded = Message::decode(&buf).unwrap();
    assert_eq!(decoded.sets[1], Set::Data(set));
}

#[test]
fn non_ascii_string() {
    let template = TemplateRecord::with_fields(
        300,
        vec![
            FieldSpecifier::new(INTERFACE_NAME, VARIABLE_LENGTH),
            FieldSpecifier::new(SOURCE_TRANSPORT_PORT, 2),
        ],
    )
    .unwrap();

    let mut set = DataSet::new(300).unwrap();
    set.push("né").push(80u16).push("lo").push(443u16);

    let message = Message {
        header: Header::default(),
        sets: vec![Set::Templates(vec![template]), Set::Data(set)],
    };

    let buf = message.encode().unwrap();
    let decoded = Message::decode(&buf).unwrap();

    let Set::Data(set) = &decoded.sets[1] else {
        panic!("expected a data set, got {:?}", decoded.sets[1]);
    };
    assert_eq!(
        set.values(),
        &[
            Value::from("n?"),
            Value::U16(80),
            Value::from("lo"),
            Value::U16(443),
        ]
    );
}

#[test]
fn zero_valued_records() {
    let template =
        TemplateRecord::with_fields(300, vec![FieldSpecifier::new(SOURCE_TRANSPORT_PORT, 2)])
            .unwrap();

    let mut set = DataSet::new(300).unwrap();
    set.push(0u16).push(0u16).push(0u16);

    let message = Message {
        header: Header::default(),
        sets: vec![Set::Templates(vec![template]), Set::Data(set.clone())],
    };

    let buf = message.encode().unwrap();
    // 16 + (4 + 8) + (4 + 3 * 2), two bytes of padding would pass for a record
    assert_eq!(buf.len(), 38);

    let decoded = Message::decode(&buf).unwrap();
    assert_eq!(decoded.sets[1], Set::Data(set));
}

#[test]
fn budget_is_enforced() {
    let buf = message().encode().unwrap();

    // announce a message that ends in the middle of the data set
    let mut short = buf.clone();
    short[2..4].copy_from_slice(&80u16.to_be_bytes());

    let mut reader = Reader::new(&short[..]);
    reader.read_header().unwrap();
    reader.read_set().unwrap();
    reader.read_set().unwrap();

    let err = reader.read_set().unwrap_err();
    assert!(matches!(
        err,
        Error::BudgetExceeded {
            needed: 68,
            remaining: 8
        }
    ));
    assert_eq!(err.kind(), ErrorKind::Sequence);

    reader.reset();
    assert_eq!(reader.state(), State::AwaitingPacketHeader);
}

#[test]
fn view() {
    let buf = message().encode().unwrap();
    let mut reader = Reader::new(&buf[..]);
    let message = reader.read_message().unwrap().unwrap();

    let Set::Data(set) = &message.sets[2] else {
        panic!("expected a data set, got {:?}", message.sets[2]);
    };
    let templates = [reader.template(300).unwrap()];
    let view = View::find(set, templates).unwrap();

    assert_eq!(view.field_count(), 5);
    assert_eq!(view.record_count(), 2);
    assert_eq!(view.field_offset(2).unwrap(), 6);
    assert!(matches!(
        view.field_offset(4),
        Err(Error::VariableLengthOffset(4))
    ));
    assert!(matches!(
        view.field(5),
        Err(Error::FieldIndexOutOfRange { index: 5, count: 5 })
    ));
    assert!(matches!(
        view.value(2, 0),
        Err(Error::RecordIndexOutOfRange { index: 2, count: 2 })
    ));

    let record = view.record(0).unwrap();
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        serde_json::json!({
            "sourceIPv4Address": "10.0.0.1",
            "sourceTransportPort": 53,
            "Enterprise5": [0, 0, 0, 7],
            "interfaceName": "eth0",
            "octetDeltaCount": 1500,
        })
    );

    let names = view
        .records()
        .map(|record| record.get("interfaceName").cloned())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            Some(Value::from("eth0")),
            Some(Value::from("a-much-longer-interface-name")),
        ]
    );
}

#[test]
fn update_through_view() {
    let template = flow_template();
    let mut set = flows();

    let mut view = ViewMut::new(&mut set, &template).unwrap();
    assert!(matches!(
        view.set(0, 1, 80u32),
        Err(Error::SizeMismatch {
            field: 1,
            expected: 2,
            actual: 4
        })
    ));

    assert_eq!(view.set(1, 1, 8443u16).unwrap(), Value::U16(443));
    assert_eq!(view.as_view().value(1, 1).unwrap(), &Value::U16(8443));
}

#[test]
fn view_needs_matching_template() {
    let set = flows();
    let template = TemplateRecord::with_fields(999, vec![FieldSpecifier::new(1, 8)]).unwrap();

    assert!(matches!(
        View::new(&set, &template),
        Err(Error::NoMatchingTemplate(300))
    ));
}

#[test]
fn withdrawal() {
    let message = Message {
        header: Header::default(),
        sets: vec![Set::Templates(vec![flow_template()])],
    };
    let withdraw = Message {
        header: Header::default(),
        sets: vec![Set::Templates(vec![TemplateRecord::new(300).unwrap()])],
    };

    let mut buf = message.encode().unwrap();
    buf.extend(withdraw.encode().unwrap());

    let mut reader = Reader::new(&buf[..]);
    reader.read_message().unwrap();
    assert!(reader.template(300).is_some());
    reader.read_message().unwrap();
    assert!(reader.template(300).is_none());
}

#[test]
fn domains_do_not_share_templates() {
    let announce = Message {
        header: Header {
            observation_domain_id: 1,
            ..Default::default()
        },
        sets: vec![Set::Templates(vec![flow_template()])],
    };
    let data = Message {
        header: Header {
            observation_domain_id: 2,
            ..Default::default()
        },
        sets: vec![Set::Data(flows())],
    };

    let mut writer = Writer::new(Vec::new());
    writer.write_message(&announce).unwrap();
    assert!(matches!(
        writer.write_message(&data),
        Err(Error::NoMatchingTemplate(300))
    ));
    assert!(writer.templates().get(1, 300).is_some());
}
