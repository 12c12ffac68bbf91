/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A record type or template is misconfigured. These are programming
    /// mistakes and should be caught when the value is constructed.
    Schema,
    /// The input (or the value handed to a writer) is malformed.
    Data,
    /// Reader or writer operations were called out of protocol order.
    Sequence,
    /// The underlying stream failed.
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(std::io::Error),

    #[error("truncated input, need {needed} bytes but only {remaining} remain")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error("type {0} declares no wire members")]
    NoSerializableMembers(&'static str),

    #[error("field type {0} is variable length and no explicit length was given")]
    NonFixedFieldType(u16),

    #[error("unknown field type {0}")]
    UnknownFieldType(u16),

    #[error("invalid template id {0}, must be 256 or above")]
    InvalidTemplateId(u16),

    #[error("invalid data set id {0}, must be 256 or above")]
    InvalidDataSetId(u16),

    #[error("options template {0} has no scope fields")]
    EmptyScope(u16),

    #[error("field {field} expects {expected} bytes, but value is {actual} bytes")]
    SizeMismatch {
        field: usize,
        expected: usize,
        actual: usize,
    },

    #[error("data set {id} holds {values} values, not a multiple of {fields} fields")]
    IncompleteRecord {
        id: u16,
        values: usize,
        fields: usize,
    },

    #[error("no template matches data set {0}")]
    NoMatchingTemplate(u16),

    #[error("information element {0} not found in template")]
    FieldNotFound(u16),

    #[error("field index {index} out of range, template has {count} fields")]
    FieldIndexOutOfRange { index: usize, count: usize },

    #[error("record index {index} out of range, data set has {count} records")]
    RecordIndexOutOfRange { index: usize, count: usize },

    #[error("offset of field {0} depends on a variable length field")]
    VariableLengthOffset(usize),

    #[error("incompatible version {0}")]
    IncompatibleVersion(u16),

    #[error("invalid set length {0}")]
    InvalidSetLength(u16),

    #[error("options template field list of {0} bytes is not a whole number of fields")]
    InvalidFieldListLength(u16),

    #[error("invalid message length {0}")]
    InvalidMessageLength(u16),

    #[error("{what} is {size} bytes, larger than the wire format allows")]
    Oversized { what: &'static str, size: usize },

    #[error("expected {expected}, but {got} was requested")]
    ProtocolSequence {
        expected: &'static str,
        got: &'static str,
    },

    #[error("flow set of {needed} bytes exceeds the remaining budget of {remaining}")]
    BudgetExceeded { needed: usize, remaining: usize },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,

            Error::NoSerializableMembers(_)
            | Error::NonFixedFieldType(_)
            | Error::UnknownFieldType(_)
            | Error::InvalidTemplateId(_)
            | Error::InvalidDataSetId(_)
            | Error::EmptyScope(_) => ErrorKind::Schema,

            Error::ProtocolSequence { .. } | Error::BudgetExceeded { .. } => ErrorKind::Sequence,

            Error::TruncatedInput { .. }
            | Error::SizeMismatch { .. }
            | Error::IncompleteRecord { .. }
            | Error::NoMatchingTemplate(_)
            | Error::FieldNotFound(_)
            | Error::FieldIndexOutOfRange { .. }
            | Error::RecordIndexOutOfRange { .. }
            | Error::VariableLengthOffset(_)
            | Error::IncompatibleVersion(_)
            | Error::InvalidSetLength(_)
            | Error::InvalidFieldListLength(_)
            | Error::InvalidMessageLength(_)
            | Error::Oversized { .. } => ErrorKind::Data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let tests = [
            (Error::NoSerializableMembers("Empty"), ErrorKind::Schema),
            (Error::EmptyScope(300), ErrorKind::Schema),
            (Error::InvalidTemplateId(12), ErrorKind::Schema),
            (
                Error::TruncatedInput {
                    needed: 4,
                    remaining: 2,
                },
                ErrorKind::Data,
            ),
            (Error::NoMatchingTemplate(256), ErrorKind::Data),
            (
                Error::ProtocolSequence {
                    expected: "packet header",
                    got: "flow set",
                },
                ErrorKind::Sequence,
            ),
            (
                Error::from(std::io::Error::other("broken pipe")),
                ErrorKind::Io,
            ),
        ];

        for (err, kind) in tests {
            assert_eq!(err.kind(), kind, "{err}");
        }
    }

    #[test]
    fn display() {
        let err = Error::TruncatedInput {
            needed: 4,
            remaining: 2,
        };
        assert_eq!(
            err.to_string(),
            "truncated input, need 4 bytes but only 2 remain"
        );
    }
}
