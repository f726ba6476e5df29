// crates/trellis-core/src/props.rs
use std::collections::HashMap;

/// A small fixed-width scalar stored in a widget's attribute bag.
///
/// Every variant fits in 8 bytes. `Ptr` carries an opaque pointer-sized
/// value whose meaning is entirely up to the writer and reader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropValue {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Ptr(usize),
}

macro_rules! prop_from {
    ($($variant:ident: $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PropValue {
                fn from(value: $ty) -> Self {
                    PropValue::$variant(value)
                }
            }
        )*
    };
}

prop_from! {
    I8: i8, I16: i16, I32: i32, I64: i64,
    U8: u8, U16: u16, U32: u32, U64: u64,
    F32: f32, F64: f64, Ptr: usize,
}

/// Per-widget attribute store: an out-of-band configuration channel keyed
/// by string, read by container widgets that lay the owner out.
///
/// Two rules the flex engine depends on:
/// - the first write for a key wins; later writes for the same key are
///   dropped, so callers must not rely on update-in-place;
/// - an absent key is reported as `None`, never as a default value. The
///   reader supplies its own default.
#[derive(Debug, Clone, Default)]
pub struct WidgetProps {
    map: HashMap<String, PropValue>,
}

macro_rules! prop_getter {
    ($($name:ident, $variant:ident => $ty:ty),* $(,)?) => {
        $(
            pub fn $name(&self, key: &str) -> Option<$ty> {
                match self.map.get(key) {
                    Some(PropValue::$variant(v)) => Some(*v),
                    _ => None,
                }
            }
        )*
    };
}

impl WidgetProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key` unless the key is already present.
    pub fn set(&mut self, key: &str, value: impl Into<PropValue>) {
        self.map.entry(key.to_string()).or_insert_with(|| value.into());
    }

    pub fn get(&self, key: &str) -> Option<PropValue> {
        self.map.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    prop_getter! {
        get_i8, I8 => i8,
        get_i16, I16 => i16,
        get_i32, I32 => i32,
        get_i64, I64 => i64,
        get_u8, U8 => u8,
        get_u16, U16 => u16,
        get_u32, U32 => u32,
        get_u64, U64 => u64,
        get_f32, F32 => f32,
        get_f64, F64 => f64,
        get_ptr, Ptr => usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_is_none() {
        let props = WidgetProps::new();
        assert_eq!(props.get_i32("flex"), None);
        assert!(!props.contains("flex"));
    }

    #[test]
    fn test_first_write_wins() {
        let mut props = WidgetProps::new();
        props.set("flex", 2i32);
        props.set("flex", 5i32);
        assert_eq!(props.get_i32("flex"), Some(2));
    }

    #[test]
    fn test_kind_mismatch_is_none() {
        let mut props = WidgetProps::new();
        props.set("weight", 1.5f32);
        assert_eq!(props.get_i32("weight"), None);
        assert_eq!(props.get_f64("weight"), None);
        assert_eq!(props.get_f32("weight"), Some(1.5));
    }

    #[test]
    fn test_each_scalar_kind_round_trips() {
        let mut props = WidgetProps::new();
        props.set("a", -3i8);
        props.set("b", 1000i16);
        props.set("c", 70_000u32);
        props.set("d", u64::MAX);
        props.set("e", 2.5f64);
        props.set("f", 42usize);
        assert_eq!(props.get_i8("a"), Some(-3));
        assert_eq!(props.get_i16("b"), Some(1000));
        assert_eq!(props.get_u32("c"), Some(70_000));
        assert_eq!(props.get_u64("d"), Some(u64::MAX));
        assert_eq!(props.get_f64("e"), Some(2.5));
        assert_eq!(props.get_ptr("f"), Some(42));
    }
}
