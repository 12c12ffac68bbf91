use std::io::Read;

use bytes::Bytes;

use super::{
    FlowSet, HEADER_SIZE, Header, OPTIONS_TEMPLATE_SET_ID, OptionsTemplateRecord, Packet,
    TEMPLATE_SET_ID, Template, TemplateField, VERSION,
};
use crate::config::ReaderConfig;
use crate::data::DataSet;
use crate::set::{decode_records, read_set_body, read_set_header, unknown_data_set};
use crate::state::{Budget, Sequencer, State};
use crate::stream::ReadExt;
use crate::template::{MIN_TEMPLATE_ID, TemplateCache, TemplateRecord};
use crate::wire::OnWire;
use crate::Error;

/// Reads NetFlow v9 packets from a stream, learning templates as they pass.
///
/// Templates are remembered per source id for the lifetime of the reader,
/// so data sets can refer to templates sent in earlier packets.
pub struct Reader<R> {
    inner: R,
    config: ReaderConfig,
    sequencer: Sequencer,
    source_id: u32,
    templates: TemplateCache<Template>,
}

impl<R: Read> Reader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, ReaderConfig::default())
    }

    pub fn with_config(inner: R, config: ReaderConfig) -> Self {
        Reader {
            inner,
            templates: TemplateCache::with_limit(config.max_templates),
            config,
            sequencer: Sequencer::default(),
            source_id: 0,
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

    /// Template `id` of the source id of the last packet header.
    pub fn template(&self, id: u16) -> Option<&Template> {
        self.templates.get(self.source_id, id)
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

        self.source_id = header.source_id;
        self.sequencer
            .begin_packet(Budget::Count(header.count as usize))?;

        Ok(Some(header))
    }

    /// Read one flow set of the current packet.
    pub fn read_flow_set(&mut self) -> Result<FlowSet, Error> {
        self.sequencer.expect_flow_set()?;

        let header = read_set_header(&mut self.inner)?;
        let body = read_set_body(&mut self.inner, &header)?;
        self.sequencer.consume(header.length as usize)?;

        let flow_set = match header.id {
            TEMPLATE_SET_ID => {
                let templates: Vec<TemplateRecord<TemplateField>> = decode_records(&body, 4)?;
                FlowSet::Templates(templates)
            }
            OPTIONS_TEMPLATE_SET_ID => {
                let templates: Vec<OptionsTemplateRecord> = decode_records(&body, 6)?;
                FlowSet::OptionsTemplates(templates)
            }
            id if id >= MIN_TEMPLATE_ID => match self.templates.get(self.source_id, id) {
                Some(template) => FlowSet::Data(DataSet::decode_body(id, template, &body)?),
                None => FlowSet::Raw {
                    id,
                    data: unknown_data_set(self.config.unknown_template, self.source_id, id, body)?,
                },
            },
            id => {
                warn!(
                    message = "skipping flow set with reserved id",
                    id,
                    length = header.length,
                );

                FlowSet::Raw {
                    id,
                    data: Bytes::from(body),
                }
            }
        };

        for template in flow_set.templates() {
            self.templates.learn(self.source_id, template);
        }

        Ok(flow_set)
    }

    /// Read a header and every flow set it announces.
    pub fn read_packet(&mut self) -> Result<Option<Packet>, Error> {
        let Some(header) = self.read_header()? else {
            return Ok(None);
        };

        let mut flow_sets = Vec::with_capacity(header.count as usize);
        while self.sequencer.state() == State::AwaitingFlowSet {
            flow_sets.push(self.read_flow_set()?);
        }

        Ok(Some(Packet { header, flow_sets }))
    }

    /// Drop the rest of the current packet, the next read must be a
    /// header. Learned templates are kept.
    pub fn reset(&mut self) {
        self.sequencer.reset();
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
