pub mod decode;
pub mod error;

pub use decode::{decode_batch, decode_batch_file};
pub use error::IngestError;
