//! Macros for building field sets.

/// Build a [`Fields`](crate::Fields) map from `key => value` pairs.
///
/// Values go through [`FieldValue::from`](crate::FieldValue), so anything
/// with a `From` conversion can be used directly.
///
/// # Examples
///
/// ```
/// use wrapped_json_log::{fields, FieldValue};
///
/// let fields = fields! {
///     "kind" => "request",
///     "status" => 200,
///     "cached" => false,
/// };
/// assert_eq!(fields.len(), 3);
/// assert_eq!(fields["status"], FieldValue::from(200));
///
/// let empty = fields! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert(::std::string::String::from($key), $crate::FieldValue::from($value));
        )+
        fields
    }};
}
