pub mod decimal_utils;
pub mod time_utils;

pub use decimal_utils::{parse_amount, parse_non_negative_amount, saturating_sum};
pub use time_utils::{is_within, start_of_month};
