pub use crate::app::App;
pub use crate::error::{Error, HrResult};
pub use crate::types::{now, Timestamp};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
