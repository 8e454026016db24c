pub mod client;
pub mod error;
pub mod extract;
pub mod table;
pub mod types;

pub use client::JobsClient;
pub use error::{DataShapeError, FetchError, TableBuildError};
pub use extract::extract_row;
pub use table::build_table;
pub use types::{JobsResponse, RawListing};
