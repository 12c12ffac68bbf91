use std::io::Write;

use super::{FlowSet, HEADER_SIZE, Header, OPTIONS_TEMPLATE_SET_ID, Packet, TEMPLATE_SET_ID, Template, VERSION};
use crate::config::WriterConfig;
use crate::set::{encode_data_set, encode_set};
use crate::state::{Budget, Sequencer, State};
use crate::template::{Layout, TemplateCache};
use crate::wire::{BytesMut, OnWire};
use crate::Error;

/// Writes NetFlow v9 packets. Templates written through the writer are
/// remembered so data sets can be checked against them.
pub struct Writer<W> {
    inner: W,
    config: WriterConfig,
    sequencer: Sequencer,
    source_id: u32,
    templates: TemplateCache<Template>,
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
            source_id: 0,
            templates: TemplateCache::default(),
            buf: BytesMut::with_capacity(1500),
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.sequencer.state()
    }

    #[inline]
    pub fn templates(&self) -> &TemplateCache<Template> {
        &self.templates
    }

    /// Write a header, `count` flow sets must follow.
    pub fn write_header(&mut self, header: &Header) -> Result<(), Error> {
        self.sequencer.expect_packet_header()?;
        if header.version != VERSION {
            return Err(Error::IncompatibleVersion(header.version));
        }

        let mut header = header.clone();
        if self.config.fill_export_time && header.unix_seconds == 0 {
            header.unix_seconds = chrono::Utc::now().timestamp() as u32;
        }

        self.buf.clear();
        header.encode(&mut self.buf)?;
        self.inner.write_all(&self.buf)?;

        self.source_id = header.source_id;
        self.sequencer
            .begin_packet(Budget::Count(header.count as usize))
    }

    /// Write one flow set, padded to 4 bytes. Returns the flow set length.
    pub fn write_flow_set(&mut self, flow_set: &FlowSet) -> Result<usize, Error> {
        self.sequencer.expect_flow_set()?;

        let buf = &mut self.buf;
        buf.clear();

        let length = match flow_set {
            FlowSet::Templates(templates) => {
                encode_set(TEMPLATE_SET_ID, buf, |buf| templates.encode(buf))?
            }
            FlowSet::OptionsTemplates(templates) => {
                encode_set(OPTIONS_TEMPLATE_SET_ID, buf, |buf| templates.encode(buf))?
            }
            FlowSet::Data(set) => {
                let layout = self.templates.get(self.source_id, set.id());
                if layout.is_none() && self.config.validate_data {
                    return Err(Error::NoMatchingTemplate(set.id()));
                }

                let layout = layout.map(|template| template as &dyn Layout);
                let record_size = layout.map_or(0, |layout| layout.record_size());
                encode_data_set(set.id(), record_size, buf, |buf| set.encode_body(layout, buf))?
            }
            FlowSet::Raw { id, data } => encode_set(*id, buf, |buf| {
                buf.extend_from_slice(data);
                Ok(())
            })?,
        };

        self.sequencer.check(length)?;
        self.inner.write_all(&self.buf)?;
        self.sequencer.consume(length)?;

        for template in flow_set.templates() {
            self.templates.learn(self.source_id, template);
        }

        Ok(length)
    }

    /// Write a whole packet, the header count is taken from the flow sets.
    pub fn write_packet(&mut self, packet: &Packet) -> Result<usize, Error> {
        let count = u16::try_from(packet.flow_sets.len()).map_err(|_| Error::Oversized {
            what: "netflow v9 flow set count",
            size: packet.flow_sets.len(),
        })?;

        let header = Header {
            count,
            ..packet.header.clone()
        };
        self.write_header(&header)?;

        let mut written = HEADER_SIZE;
        for flow_set in &packet.flow_sets {
            written += self.write_flow_set(flow_set)?;
        }

        Ok(written)
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush().map_err(Into::into)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
