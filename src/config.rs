use serde::{Deserialize, Serialize};

/// What a reader does with a data set whose template it has not seen.
#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTemplate {
    /// Fail with `NoMatchingTemplate`.
    #[default]
    Error,

    /// Return the set undecoded.
    Raw,
}

const fn default_max_templates() -> usize {
    4096
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReaderConfig {
    #[serde(default)]
    pub unknown_template: UnknownTemplate,

    /// Upper bound of templates remembered per reader, further templates
    /// are dropped with a warning.
    #[serde(default = "default_max_templates")]
    pub max_templates: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            unknown_template: UnknownTemplate::default(),
            max_templates: default_max_templates(),
        }
    }
}

const fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WriterConfig {
    /// Refuse data sets whose template was not written first. Otherwise such
    /// sets are written as plain concatenated values. Sets with a known
    /// template are always checked against it.
    #[serde(default = "default_true")]
    pub validate_data: bool,

    /// Stamp headers that carry a zero export time with the current time.
    #[serde(default = "default_true")]
    pub fill_export_time: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            validate_data: true,
            fill_export_time: true,
        }
    }
}
