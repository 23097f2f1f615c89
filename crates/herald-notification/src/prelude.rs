pub use herald_core::app::App;
pub use herald_types::error::{Error, HrResult};

pub use tracing::{debug, info, warn};

// vim: ts=4
