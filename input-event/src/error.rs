use num_enum::TryFromPrimitiveError;
use thiserror::Error;

use crate::EventKind;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid event kind: `{0}`")]
    InvalidEventKind(#[from] TryFromPrimitiveError<EventKind>),
}
