pub use crate::app::App;

pub use herald_types::error::{Error, HrResult};
pub use herald_types::types::{now, Timestamp};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
