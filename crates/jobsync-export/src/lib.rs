pub mod csv_writer;
pub mod error;
pub mod upload;

pub use csv_writer::write_table;
pub use error::{SerializationError, UploadError};
pub use upload::{s3_destination, S3Uploader};
