use std::io::Write;

use super::{HEADER_SIZE, Header, Message, OPTIONS_TEMPLATE_SET_ID, Set, TEMPLATE_SET_ID, Template, VERSION};
use crate::Error;
use crate::config::WriterConfig;
use crate::set::{encode_data_set, encode_set};
use crate::state::{Budget, Sequencer, State};
use crate::template::{Layout, TemplateCache, count_u16};
use crate::wire::{BytesMut, OnWire};

/// Writes IPFIX messages.
///
/// With [`Writer::write_header`] the caller announces the message length up
/// front and every set is checked against it. [`Writer::write_message`]
/// derives the length from the sets instead.
pub struct Writer<W> {
    inner: W,
    config: WriterConfig,
    sequencer: Sequencer,
    observation_domain_id: u32,
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
            observation_domain_id: 0,
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

    /// Write a header, sets totalling `length - 16` bytes must follow.
    pub fn write_header(&mut self, header: &Header) -> Result<(), Error> {
        self.sequencer.expect_packet_header()?;
        if header.version != VERSION {
            return Err(Error::IncompatibleVersion(header.version));
        }
        if (header.length as usize) < HEADER_SIZE {
            return Err(Error::InvalidMessageLength(header.length));
        }

        let mut header = header.clone();
        if self.config.fill_export_time && header.export_time == 0 {
            header.export_time = chrono::Utc::now().timestamp() as u32;
        }

        self.buf.clear();
        header.encode(&mut self.buf)?;
        self.inner.write_all(&self.buf)?;

        self.observation_domain_id = header.observation_domain_id;
        self.sequencer
            .begin_packet(Budget::Bytes(header.length as usize - HEADER_SIZE))
    }

    /// Write one set, padded to 4 bytes. Returns the set length.
    pub fn write_set(&mut self, set: &Set) -> Result<usize, Error> {
        self.sequencer.expect_flow_set()?;

        let layout = match set {
            Set::Data(data) => self.templates.get(self.observation_domain_id, data.id()),
            _ => None,
        };

        self.buf.clear();
        let length = encode(set, layout, self.config.validate_data, &mut self.buf)?;

        self.sequencer.check(length)?;
        self.inner.write_all(&self.buf)?;
        self.sequencer.consume(length)?;

        for template in set.templates() {
            self.templates.learn(self.observation_domain_id, template);
        }

        Ok(length)
    }

    /// Write a whole message, the header length is taken from the sets.
    /// Data sets may use templates announced earlier in the same message.
    pub fn write_message(&mut self, message: &Message) -> Result<usize, Error> {
        self.sequencer.expect_packet_header()?;

        let domain = message.header.observation_domain_id;
        let mut announced: Vec<Template> = Vec::new();
        let mut body = BytesMut::new();
        let mut lengths = Vec::with_capacity(message.sets.len());

        for set in &message.sets {
            let layout = match set {
                Set::Data(data) => announced
                    .iter()
                    .rev()
                    .find(|template| template.id() == data.id())
                    .or_else(|| self.templates.get(domain, data.id())),
                _ => None,
            };

            lengths.push(encode(set, layout, self.config.validate_data, &mut body)?);
            announced.extend(set.templates());
        }

        let header = Header {
            length: count_u16("ipfix message length", HEADER_SIZE + body.len())?,
            ..message.header.clone()
        };
        self.write_header(&header)?;

        self.inner.write_all(&body)?;
        for length in lengths {
            self.sequencer.consume(length)?;
        }

        for template in announced {
            self.templates.learn(domain, template);
        }

        Ok(HEADER_SIZE + body.len())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush().map_err(Into::into)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Append `set` to `buf`, data sets are encoded against `layout` when one
/// is known.
fn encode(
    set: &Set,
    layout: Option<&Template>,
    validate_data: bool,
    buf: &mut BytesMut,
) -> Result<usize, Error> {
    match set {
        Set::Templates(templates) => encode_set(TEMPLATE_SET_ID, buf, |buf| templates.encode(buf)),
        Set::OptionsTemplates(templates) => {
            encode_set(OPTIONS_TEMPLATE_SET_ID, buf, |buf| templates.encode(buf))
        }
        Set::Data(data) => {
            if layout.is_none() && validate_data {
                return Err(Error::NoMatchingTemplate(data.id()));
            }

            let layout = layout.map(|template| template as &dyn Layout);
            let record_size = layout.map_or(0, |layout| layout.record_size());
            encode_data_set(data.id(), record_size, buf, |buf| data.encode_body(layout, buf))
        }
        Set::Raw { id, data } => encode_set(*id, buf, |buf| {
            buf.extend_from_slice(data);
            Ok(())
        }),
    }
}

#[cfg(test)]
mod tests {
    use elements::ipfix::*;

    use super::*;
    use crate::data::DataSet;
    use crate::field::FieldSpecifier;
    use crate::template::TemplateRecord;

    fn template() -> TemplateRecord<FieldSpecifier> {
        TemplateRecord::with_fields(
            300,
            vec![
                FieldSpecifier::new(SOURCE_TRANSPORT_PORT, 2),
                FieldSpecifier::new(PROTOCOL_IDENTIFIER, 1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn message_length_is_derived() {
        let mut data = DataSet::new(300).unwrap();
        data.push(53u16).push(17u8);

        let message = Message {
            header: Header {
                // overwritten from the sets
                length: 0,
                export_time: 1,
                ..Default::default()
            },
            sets: vec![Set::Templates(vec![template()]), Set::Data(data)],
        };

        let mut writer = Writer::new(Vec::new());
        let written = writer.write_message(&message).unwrap();
        assert_eq!(writer.state(), State::AwaitingPacketHeader);
        assert!(writer.templates().get(0, 300).is_some());

        // 16 + (4 + 12) + (4 + 3 + 1)
        assert_eq!(written, 40);

        let buf = writer.into_inner();
        assert_eq!(buf.len(), 40);
        assert_eq!(&buf[2..4], &[0, 40]);
        assert_eq!(&buf[4..8], &[0, 0, 0, 1]);
    }

    #[test]
    fn announced_length_is_enforced() {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_header(&Header {
                length: 24,
                ..Default::default()
            })
            .unwrap();

        // 4 + 12 does not fit into 8
        assert!(matches!(
            writer.write_set(&Set::Templates(vec![template()])),
            Err(Error::BudgetExceeded {
                needed: 16,
                remaining: 8
            })
        ));
        assert_eq!(writer.state(), State::AwaitingFlowSet);
    }

    #[test]
    fn data_needs_template() {
        let mut data = DataSet::new(300).unwrap();
        data.push(1u8);

        let message = Message {
            header: Header::default(),
            sets: vec![Set::Data(data)],
        };

        let mut writer = Writer::new(Vec::new());
        assert!(matches!(
            writer.write_message(&message),
            Err(Error::NoMatchingTemplate(300))
        ));
        // nothing was written
        assert!(writer.into_inner().is_empty());
    }
}
