pub mod datetime;
pub mod passkey;
pub mod test_utils;

pub use datetime::{format_date_time, format_instant, parse_instant, FormattedDateTime};
