pub mod assembler;
pub mod time_formatting;

pub use assembler::{assemble, build_frame, flatten_object, flatten_records, parse_payload};
pub use time_formatting::{datetime_to_httpdate, httpdate_to_datetime, offset_httpdate};
