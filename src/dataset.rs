//! Loading, normalizing and caching the complex-declaration table.
//!
//! `DatasetProvider` owns a lazily populated cache slot in front of a
//! `DataSource`; `decode_payload` turns either accepted payload shape into a
//! `Dataset`.

mod decode;
mod error;
mod provider;

pub use decode::decode_payload;
pub use error::DatasetError;
pub use provider::DatasetProvider;
