mod column;
mod dataset;
mod ids;
mod record;

pub use column::Column;
pub use dataset::Dataset;
pub use ids::ComplexId;
pub use record::{Record, RecordBuilder};
