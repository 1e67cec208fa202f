// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Number, Value};
use crate::error::QuillError;

fn type_error(expected: &str, value: &Value) -> QuillError {
    QuillError::TypeError {
        message: format!("Expected {}, got {}", expected, value.type_name()),
    }
}

impl TryFrom<Value> for String {
    type Error = QuillError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(type_error("string", &other)),
        }
    }
}

/// Floats accept both numeric forms.
impl TryFrom<Value> for f64 {
    type Error = QuillError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_number()
            .map(|n| n.as_f64())
            .ok_or_else(|| type_error("number", &value))
    }
}

impl TryFrom<Value> for f32 {
    type Error = QuillError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

/// Integers reject floats, even whole ones like `2.0`, and out-of-range values.
macro_rules! impl_integer_conversion {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = QuillError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::Number(Number::Int(i)) => <$ty>::try_from(i).map_err(|_| {
                            QuillError::TypeError {
                                message: format!(
                                    "Number {} out of range for {}",
                                    i,
                                    stringify!($ty)
                                ),
                            }
                        }),
                        other => Err(type_error("integer", &other)),
                    }
                }
            }
        )*
    };
}

impl_integer_conversion!(i64, i32, u8, u16, u32, u64, usize);

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = QuillError>,
{
    type Error = QuillError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items.into_iter().map(T::try_from).collect(),
            other => Err(type_error("array", &other)),
        }
    }
}
