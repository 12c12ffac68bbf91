use std::net::Ipv4Addr;

use flowcodec::Error;
use flowcodec::config::WriterConfig;
use flowcodec::netflow5::{HEADER_SIZE, Header, Packet, RECORD_SIZE, Reader, Record, Writer};
use flowcodec::state::State;
use pretty_assertions::assert_eq;

fn record(i: u8) -> Record {
    Record {
        src_addr: Ipv4Addr::new(10, 0, 0, i),
        dst_addr: Ipv4Addr::new(172, 16, 0, i),
        next_hop: Ipv4Addr::new(10, 0, 0, 254),
        input: 1,
        output: 2,
        packets: 10 * u32::from(i),
        octets: 1500 * u32::from(i),
        first: 1000,
        last: 2000,
        src_port: 40000 + u16::from(i),
        dst_port: 443,
        tcp_flags: 0x1b,
        protocol: 6,
        src_as: 64512,
        dst_as: 64513,
        src_mask: 24,
        dst_mask: 16,
        ..Default::default()
    }
}

fn packet() -> Packet {
    Packet {
        header: Header {
            sys_uptime: 3_600_000,
            unix_secs: 1_700_000_000,
            unix_nsecs: 500,
            flow_sequence: 99,
            engine_type: 1,
            engine_id: 2,
            sampling_interval: 0x4000 | 64,
            ..Default::default()
        },
        records: (1..=3).map(record).collect(),
    }
}

#[test]
fn round_trip() {
    let packet = packet();

    let buf = packet.encode().unwrap();
    assert_eq!(buf.len(), HEADER_SIZE + 3 * RECORD_SIZE);
    assert_eq!(&buf[..4], &[0, 5, 0, 3]);

    let decoded = Packet::decode(&buf).unwrap();
    assert_eq!(decoded.header.count, 3);
    assert_eq!(decoded.header.sampling_rate(), 64);
    assert_eq!(decoded.records, packet.records);
}

#[test]
fn stream_of_packets() {
    let config = WriterConfig {
        fill_export_time: false,
        ..Default::default()
    };
    let mut writer = Writer::with_config(Vec::new(), config);
    writer.write_packet(&packet()).unwrap();
    writer.write_packet(&Packet::default()).unwrap();
    writer.write_packet(&packet()).unwrap();
    writer.flush().unwrap();

    let buf = writer.into_inner();
    let mut reader = Reader::new(&buf[..]);

    let mut counts = Vec::new();
    while let Some(packet) = reader.read_packet().unwrap() {
        counts.push(packet.records.len());
    }

    assert_eq!(counts, vec![3, 0, 3]);
}

#[test]
fn count_gates_records() {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_header(&Header {
            count: 1,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(writer.state(), State::AwaitingFlowSet);

    writer.write_record(&record(1)).unwrap();
    assert_eq!(writer.state(), State::AwaitingPacketHeader);

    assert!(matches!(
        writer.write_record(&record(2)),
        Err(Error::ProtocolSequence {
            expected: "packet header",
            got: "flow set"
        })
    ));
}

#[test]
fn truncated_packet() {
    let buf = packet().encode().unwrap();

    assert!(matches!(
        Packet::decode(&buf[..HEADER_SIZE + RECORD_SIZE + 10]),
        Err(Error::TruncatedInput {
            needed: RECORD_SIZE,
            remaining: 10
        })
    ));
}
