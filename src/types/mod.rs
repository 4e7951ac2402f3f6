//! Built-in concrete types.
//!
//! The only shipped implementation is [`DateTimeType`], which doubles as the
//! worked example for the full capability contract: parsing with ordered
//! layout fallback, pass-through validation, configurable serialization,
//! chronological ordering and self-documentation.

pub mod datetime;

pub use datetime::{DEFAULT_PARSE_LAYOUTS, DateTimeType, LAYOUT_RFC822Z, LAYOUT_RFC1123Z, LAYOUT_RFC3339};

#[cfg(test)]
mod type_assertions {
    use super::DateTimeType;
    use crate::capability::{DocType, LesserType, Type};

    // The reference type must carry the full capability set.
    fn _assert_contract(value: &DateTimeType) {
        let _: &dyn Type = value;
        let _: &dyn DocType = value;
        let _: &dyn LesserType = value;
    }
}
