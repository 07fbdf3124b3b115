pub mod currency_format;
pub mod lenient_parse;

pub use currency_format::{format_amount, format_currency};
pub use lenient_parse::{parse_leading_decimal, parse_leading_int};
