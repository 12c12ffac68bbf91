//! IP Flow Information Export.
//!
//! https://www.rfc-editor.org/rfc/rfc7011
//!
//! ```text
//! +--------+--------------------------------------------------------+
//! |        | +----------+ +---------+ +-----------+     +---------+ |
//! |Message | | Template | | Data    | | Options   |     | Data    | |
//! | Header | | Set      | | Set     | | Template  | ... | Set     | |
//! |        | |          | |         | | Set       |     |         | |
//! |        | +----------+ +---------+ +-----------+     +---------+ |
//! +--------+--------------------------------------------------------+
//! ```
//!
//! Unlike NetFlow v9 the header carries the total message length, sets
//! follow until those bytes are used up.

mod reader;
mod template;
mod writer;

use bytes::Bytes;

pub use reader::Reader;
pub use template::{OptionsTemplateRecord, Template};
pub use writer::Writer;

use crate::config::WriterConfig;
use crate::data::DataSet;
use crate::field::FieldSpecifier;
use crate::template::TemplateRecord;
use crate::{Error, wire_schema};

pub const VERSION: u16 = 10;
pub const HEADER_SIZE: usize = 16;

pub const TEMPLATE_SET_ID: u16 = 2;
pub const OPTIONS_TEMPLATE_SET_ID: u16 = 3;

/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |       Version Number          |            Length             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                           Export Time                         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                       Sequence Number                         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                    Observation Domain ID                      |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    pub version: u16,
    /// Total length of the message in bytes, header included.
    pub length: u16,
    /// Seconds since the UNIX epoch at which the message left the exporter.
    pub export_time: u32,
    /// Count of data records sent before this message, modulo 2^32.
    pub sequence_number: u32,
    pub observation_domain_id: u32,
}

impl Default for Header {
    fn default() -> Self {
        Header {
            version: VERSION,
            length: HEADER_SIZE as u16,
            export_time: 0,
            sequence_number: 0,
            observation_domain_id: 0,
        }
    }
}

wire_schema! {
    Header {
        1 => version: u16,
        2 => length: u16,
        3 => export_time: u32,
        4 => sequence_number: u32,
        5 => observation_domain_id: u32,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Set {
    Templates(Vec<TemplateRecord<FieldSpecifier>>),
    OptionsTemplates(Vec<OptionsTemplateRecord>),
    Data(DataSet),
    /// A set kept undecoded, either because its id is reserved or because
    /// no template was known for it.
    Raw { id: u16, data: Bytes },
}

impl Set {
    pub fn id(&self) -> u16 {
        match self {
            Set::Templates(_) => TEMPLATE_SET_ID,
            Set::OptionsTemplates(_) => OPTIONS_TEMPLATE_SET_ID,
            Set::Data(set) => set.id(),
            Set::Raw { id, .. } => *id,
        }
    }

    pub(crate) fn templates(&self) -> Vec<Template> {
        match self {
            Set::Templates(templates) => templates.iter().cloned().map(Template::from).collect(),
            Set::OptionsTemplates(templates) => {
                templates.iter().cloned().map(Template::from).collect()
            }
            Set::Data(_) | Set::Raw { .. } => Vec::new(),
        }
    }
}

impl From<DataSet> for Set {
    fn from(set: DataSet) -> Self {
        Set::Data(set)
    }
}

/// A whole IPFIX message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Message {
    pub header: Header,
    pub sets: Vec<Set>,
}

impl Message {
    /// Decode a standalone message, data sets can only use templates
    /// carried in the same message.
    pub fn decode(data: &[u8]) -> Result<Message, Error> {
        Reader::new(data)
            .read_message()?
            .ok_or(Error::TruncatedInput {
                needed: HEADER_SIZE,
                remaining: 0,
            })
    }

    /// Encode with the header as given, except for the derived length.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        let config = WriterConfig {
            fill_export_time: false,
            ..WriterConfig::default()
        };

        let mut writer = Writer::with_config(Vec::new(), config);
        writer.write_message(self)?;

        Ok(writer.into_inner())
    }
}
