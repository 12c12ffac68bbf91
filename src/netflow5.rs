//! NetFlow version 5, fixed layout flow records.
//!
//! https://www.cisco.com/c/en/us/td/docs/net_mgmt/netflow_collection_engine/3-6/user/guide/format.html

use std::io::{Read, Write};
use std::net::Ipv4Addr;

use crate::config::WriterConfig;
use crate::state::{Budget, Sequencer, State};
use crate::stream::ReadExt;
use crate::wire::{BytesMut, OnWire};
use crate::{Error, wire_schema};

pub const VERSION: u16 = 5;
pub const HEADER_SIZE: usize = 24;
pub const RECORD_SIZE: usize = 48;

/// Exporters never put more records than this into one datagram.
pub const MAX_RECORDS: usize = 30;

#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    pub version: u16,
    /// Number of flow records in this packet.
    pub count: u16,
    /// Milliseconds since the device booted.
    pub sys_uptime: u32,
    pub unix_secs: u32,
    pub unix_nsecs: u32,
    /// Sequence counter of total flows seen.
    pub flow_sequence: u32,
    pub engine_type: u8,
    pub engine_id: u8,
    /// First two bits hold the sampling mode, the remaining 14 bits the
    /// sampling interval.
    pub sampling_interval: u16,
}

impl Default for Header {
    fn default() -> Self {
        Header {
            version: VERSION,
            count: 0,
            sys_uptime: 0,
            unix_secs: 0,
            unix_nsecs: 0,
            flow_sequence: 0,
            engine_type: 0,
            engine_id: 0,
            sampling_interval: 0,
        }
    }
}

wire_schema! {
    Header {
        1 => version: u16,
        2 => count: u16,
        3 => sys_uptime: u32,
        4 => unix_secs: u32,
        5 => unix_nsecs: u32,
        6 => flow_sequence: u32,
        7 => engine_type: u8,
        8 => engine_id: u8,
        9 => sampling_interval: u16,
    }
}

impl Header {
    #[inline]
    pub fn sampling_mode(&self) -> u8 {
        (self.sampling_interval >> 14) as u8
    }

    #[inline]
    pub fn sampling_rate(&self) -> u16 {
        self.sampling_interval & 0x3fff
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub src_addr: Ipv4Addr,
    pub dst_addr: Ipv4Addr,
    pub next_hop: Ipv4Addr,
    /// SNMP index of input interface.
    pub input: u16,
    /// SNMP index of output interface.
    pub output: u16,
    pub packets: u32,
    pub octets: u32,
    /// SysUptime at start of flow.
    pub first: u32,
    /// SysUptime at the time the last packet of the flow was received.
    pub last: u32,
    pub src_port: u16,
    pub dst_port: u16,
    pub pad1: u8,
    /// Cumulative OR of TCP flags.
    pub tcp_flags: u8,
    pub protocol: u8,
    pub tos: u8,
    pub src_as: u16,
    pub dst_as: u16,
    pub src_mask: u8,
    pub dst_mask: u8,
    pub pad2: u16,
}

impl Default for Record {
    fn default() -> Self {
        Record {
            src_addr: Ipv4Addr::UNSPECIFIED,
            dst_addr: Ipv4Addr::UNSPECIFIED,
            next_hop: Ipv4Addr::UNSPECIFIED,
            input: 0,
            output: 0,
            packets: 0,
            octets: 0,
            first: 0,
            last: 0,
            src_port: 0,
            dst_port: 0,
            pad1: 0,
            tcp_flags: 0,
            protocol: 0,
            tos: 0,
            src_as: 0,
            dst_as: 0,
            src_mask: 0,
            dst_mask: 0,
            pad2: 0,
        }
    }
}

wire_schema! {
    Record {
        1 => src_addr: Ipv4Addr,
        2 => dst_addr: Ipv4Addr,
        3 => next_hop: Ipv4Addr,
        4 => input: u16,
        5 => output: u16,
        6 => packets: u32,
        7 => octets: u32,
        8 => first: u32,
        9 => last: u32,
        10 => src_port: u16,
        11 => dst_port: u16,
        12 => pad1: u8,
        13 => tcp_flags: u8,
        14 => protocol: u8,
        15 => tos: u8,
        16 => src_as: u16,
        17 => dst_as: u16,
        18 => src_mask: u8,
        19 => dst_mask: u8,
        20 => pad2: u16,
    }
}

/// Reads packets from a stream, the header count gates how many records
/// follow.
pub struct Reader<R> {
    inner: R,
    sequencer: Sequencer,
}

impl<R: Read> Reader<R> {
    pub fn new(inner: R) -> Self {
        Reader {
            inner,
            sequencer: Sequencer::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.sequencer.state()
    }

    /// Read the next packet header, `None` once the stream is exhausted.
    pub fn read_header(&mut self) -> Result<Option<Header>, Error> {
        self.sequencer.expect_packet_header()?;

        let mut buf = [0u8; HEADER_SIZE];
        if !self.inner.read_full_or_eof(&mut buf)? {
            return Ok(None);
        }

        let header = Header::decode(&mut &buf[..])?;
        if header.version != VERSION {
            return Err(Error::IncompatibleVersion(header.version));
        }

        self.sequencer
            .begin_packet(Budget::Count(header.count as usize))?;

        Ok(Some(header))
    }

    pub fn read_record(&mut self) -> Result<Record, Error> {
        self.sequencer.expect_flow_set()?;

        let mut buf = [0u8; RECORD_SIZE];
        self.inner.read_full(&mut buf)?;
        let record = Record::decode(&mut &buf[..])?;

        self.sequencer.consume(RECORD_SIZE)?;

        Ok(record)
    }

    /// Read a header and every record it announces.
    pub fn read_packet(&mut self) -> Result<Option<Packet>, Error> {
        let Some(header) = self.read_header()? else {
            return Ok(None);
        };

        let mut records = Vec::with_capacity(header.count as usize);
        while self.sequencer.state() == State::AwaitingFlowSet {
            records.push(self.read_record()?);
        }

        Ok(Some(Packet { header, records }))
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

pub struct Writer<W> {
    inner: W,
    config: WriterConfig,
    sequencer: Sequencer,
    buf: BytesMut,
}

impl<W: Write> Writer<W> {
    pub fn new(inner: W) -> Self {
        Self::with_config(inner, WriterConfig::default())
    }

    pub fn with_config(inner: W, config: WriterConfig) -> Self {
        Writer {
            inner,
            config,
            sequencer: Sequencer::default(),
            buf: BytesMut::with_capacity(HEADER_SIZE + MAX_RECORDS * RECORD_SIZE),
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.sequencer.state()
    }

    /// Write a header, `count` records must follow.
    pub fn write_header(&mut self, header: &Header) -> Result<(), Error> {
        self.sequencer.expect_packet_header()?;
        if header.version != VERSION {
            return Err(Error::IncompatibleVersion(header.version));
        }

        let mut header = header.clone();
        if self.config.fill_export_time && header.unix_secs == 0 {
            let now = chrono::Utc::now();
            header.unix_secs = now.timestamp() as u32;
            header.unix_nsecs = now.timestamp_subsec_nanos();
        }

        self.buf.clear();
        header.encode(&mut self.buf)?;
        self.inner.write_all(&self.buf)?;

        self.sequencer
            .begin_packet(Budget::Count(header.count as usize))
    }

    pub fn write_record(&mut self, record: &Record) -> Result<(), Error> {
        self.sequencer.check(RECORD_SIZE)?;

        self.buf.clear();
        record.encode(&mut self.buf)?;
        self.inner.write_all(&self.buf)?;

        self.sequencer.consume(RECORD_SIZE)
    }

    /// Write a whole packet, the header count is taken from the records.
    pub fn write_packet(&mut self, packet: &Packet) -> Result<(), Error> {
        let count = u16::try_from(packet.records.len()).map_err(|_| Error::Oversized {
            what: "netflow v5 record count",
            size: packet.records.len(),
        })?;

        if packet.records.len() > MAX_RECORDS {
            warn!(
                message = "netflow v5 packet exceeds the usual record limit",
                records = packet.records.len(),
                limit = MAX_RECORDS,
            );
        }

        let header = Header {
            count,
            ..packet.header.clone()
        };
        self.write_header(&header)?;

        for record in &packet.records {
            self.write_record(record)?;
        }

        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush().map_err(Into::into)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// A whole NetFlow v5 datagram.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Packet {
    pub header: Header,
    pub records: Vec<Record>,
}

impl Packet {
    pub fn decode(data: &[u8]) -> Result<Packet, Error> {
        Reader::new(data)
            .read_packet()?
            .ok_or(Error::TruncatedInput {
                needed: HEADER_SIZE,
                remaining: 0,
            })
    }

    /// Encode with the header as given, except for the derived count.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        let config = WriterConfig {
            fill_export_time: false,
            ..WriterConfig::default()
        };

        let mut writer = Writer::with_config(
            Vec::with_capacity(HEADER_SIZE + self.records.len() * RECORD_SIZE),
            config,
        );
        writer.write_packet(self)?;

        Ok(writer.into_inner())
    }
}
