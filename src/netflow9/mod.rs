//! NetFlow version 9.
//!
//! https://www.rfc-editor.org/rfc/rfc3954
//!
//! ```text
//! +--------+-------------------------------------------------------------+
//! | Packet | Template | Data     | Options  | Data     | Template | Data |
//! | Header | FlowSet  | FlowSet  | Template | FlowSet  | FlowSet  | ...  |
//! |        |          |          | FlowSet  |          |          |      |
//! +--------+-------------------------------------------------------------+
//! ```
//!
//! The header count announces how many flow sets follow.

mod reader;
mod template;
mod writer;

use bytes::Bytes;

pub use reader::Reader;
pub use template::{OptionsTemplateRecord, ScopeField, Template, TemplateField};
pub use writer::Writer;

use crate::config::WriterConfig;
use crate::data::DataSet;
use crate::wire_schema;
use crate::{Error, template::TemplateRecord};

pub const VERSION: u16 = 9;
pub const HEADER_SIZE: usize = 20;

pub const TEMPLATE_SET_ID: u16 = 0;
pub const OPTIONS_TEMPLATE_SET_ID: u16 = 1;

#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    pub version: u16,
    /// Number of flow sets in this packet.
    pub count: u16,
    /// Milliseconds since the device booted.
    pub sys_uptime: u32,
    /// Seconds since 0000 UTC 1970, at which the packet was exported.
    pub unix_seconds: u32,
    /// Incremental sequence counter of all export packets sent by this
    /// device.
    pub sequence_number: u32,
    /// Identifies the exporter observation domain, template ids are only
    /// unique per source id.
    pub source_id: u32,
}

impl Default for Header {
    fn default() -> Self {
        Header {
            version: VERSION,
            count: 0,
            sys_uptime: 0,
            unix_seconds: 0,
            sequence_number: 0,
            source_id: 0,
        }
    }
}

wire_schema! {
    Header {
        1 => version: u16,
        2 => count: u16,
        3 => sys_uptime: u32,
        4 => unix_seconds: u32,
        5 => sequence_number: u32,
        6 => source_id: u32,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FlowSet {
    Templates(Vec<TemplateRecord<TemplateField>>),
    OptionsTemplates(Vec<OptionsTemplateRecord>),
    Data(DataSet),
    /// A set kept undecoded, either because its id is reserved or because
    /// no template was known for it.
    Raw { id: u16, data: Bytes },
}

impl FlowSet {
    pub fn id(&self) -> u16 {
        match self {
            FlowSet::Templates(_) => TEMPLATE_SET_ID,
            FlowSet::OptionsTemplates(_) => OPTIONS_TEMPLATE_SET_ID,
            FlowSet::Data(set) => set.id(),
            FlowSet::Raw { id, .. } => *id,
        }
    }

    /// Templates announced by this flow set, withdrawals included.
    pub(crate) fn templates(&self) -> Vec<Template> {
        match self {
            FlowSet::Templates(templates) => {
                templates.iter().cloned().map(Template::from).collect()
            }
            FlowSet::OptionsTemplates(templates) => {
                templates.iter().cloned().map(Template::from).collect()
            }
            FlowSet::Data(_) | FlowSet::Raw { .. } => Vec::new(),
        }
    }
}

impl From<DataSet> for FlowSet {
    fn from(set: DataSet) -> Self {
        FlowSet::Data(set)
    }
}

/// A whole NetFlow v9 datagram.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Packet {
    pub header: Header,
    pub flow_sets: Vec<FlowSet>,
}

impl Packet {
    /// Decode a standalone datagram. Data sets can only use templates
    /// carried in the same datagram, use a [`Reader`] to keep templates
    /// across packets.
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

        let mut writer = Writer::with_config(Vec::new(), config);
        writer.write_packet(self)?;

        Ok(writer.into_inner())
    }
}
