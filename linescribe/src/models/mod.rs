mod format;
mod record;
mod status;

pub use format::*;
pub use record::*;
pub use status::*;
