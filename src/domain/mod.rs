pub mod deadline;
pub mod normalize;
pub mod record;
pub mod status;
pub mod summary;

pub use record::{Field, Record, Table};
pub use summary::RecordSummary;
