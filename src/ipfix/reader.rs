use std::io::Read;

use bytes::Bytes;

use super::{
    HEADER_SIZE, Header, Message, OPTIONS_TEMPLATE_SET_ID, OptionsTemplateRecord, Set,
    TEMPLATE_SET_ID, Template, VERSION,
};
use crate::Error;
use crate::config::ReaderConfig;
use crate::data::DataSet;
use crate::field::FieldSpecifier;
use crate::set::{decode_records, read_set_body, read_set_header, unknown_data_set};
use crate::state::{Budget, Sequencer, State};
use crate::stream::ReadExt;
use crate::template::{MIN_TEMPLATE_ID, TemplateCache, TemplateRecord};
use crate::wire::OnWire;

/// Reads IPFIX messages from a stream. The header length bounds how many
/// bytes of sets follow, a set that would cross it is refused before its
/// body is read.
pub struct Reader<R> {
    inner: R,
    config: ReaderConfig,
    sequencer: Sequencer,
    observation_domain_id: u32,
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
            observation_domain_id: 0,
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

    /// Template `id` of the observation domain of the last message header.
    pub fn template(&self, id: u16) -> Option<&Template> {
        self.templates.get(self.observation_domain_id, id)
    }

    /// Read the next message header, `None` once the stream is exhausted.
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
        if (header.length as usize) < HEADER_SIZE {
            return Err(Error::InvalidMessageLength(header.length));
        }

        self.observation_domain_id = header.observation_domain_id;
        self.sequencer
            .begin_packet(Budget::Bytes(header.length as usize - HEADER_SIZE))?;

        Ok(Some(header))
    }

    /// Read one set of the current message.
    pub fn read_set(&mut self) -> Result<Set, Error> {
        self.sequencer.expect_flow_set()?;

        let header = read_set_header(&mut self.inner)?;
        self.sequencer.check(header.length as usize)?;
        let body = read_set_body(&mut self.inner, &header)?;
        self.sequencer.consume(header.length as usize)?;

        let domain = self.observation_domain_id;
        let set = match header.id {
            TEMPLATE_SET_ID => {
                let templates: Vec<TemplateRecord<FieldSpecifier>> = decode_records(&body, 4)?;
                Set::Templates(templates)
            }
            OPTIONS_TEMPLATE_SET_ID => {
                let templates: Vec<OptionsTemplateRecord> = decode_records(&body, 4)?;
                Set::OptionsTemplates(templates)
            }
            id if id >= MIN_TEMPLATE_ID => match self.templates.get(domain, id) {
                Some(template) => Set::Data(DataSet::decode_body(id, template, &body)?),
                None => Set::Raw {
                    id,
                    data: unknown_data_set(self.config.unknown_template, domain, id, body)?,
                },
            },
            id => {
                warn!(
                    message = "skipping set with reserved id",
                    id,
                    length = header.length,
                );

                Set::Raw {
                    id,
                    data: Bytes::from(body),
                }
            }
        };

        for template in set.templates() {
            self.templates.learn(domain, template);
        }

        Ok(set)
    }

    /// Read a header and every set within its length.
    pub fn read_message(&mut self) -> Result<Option<Message>, Error> {
        let Some(header) = self.read_header()? else {
            return Ok(None);
        };

        let mut sets = Vec::new();
        while self.sequencer.state() == State::AwaitingFlowSet {
            sets.push(self.read_set()?);
        }

        Ok(Some(Message { header, sets }))
    }

    /// Drop the rest of the current message, the next read must be a
    /// header. Learned templates are kept.
    pub fn reset(&mut self) {
        self.sequencer.reset();
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
