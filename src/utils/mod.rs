mod format_utils;
mod maths_utils;

pub use format_utils::{format_currency, format_optional, format_thousands};

pub(crate) use maths_utils::{position_max_by_key, position_min_by_key, remap, round_to};
