mod record;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Record)] derive macro
// ============================================================================

/// Derive macro for the `Record` trait.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Debug, Serialize, Deserialize, Record)]
/// #[burrow(name = "widgets")]
/// struct Widget {
///     pub name: String,
///     #[burrow(id)]
///     pub num: i64,
///     pub float: f64,
/// }
/// ```
///
/// - `#[burrow(name = "...")]` sets the storage namespace.
///   If omitted, defaults to the struct name (`Widget`).
/// - `#[burrow(id)]` (or `#[burrow(tag = "ID")]`) annotates the identifier field.
///   A field named `id` is an identifier without any annotation.
/// - `#[burrow(skip)]` and `#[serde(skip)]` hide a field from identifier resolution.
/// - `#[serde(flatten)]` fields must be `Record`s; their fields are visible as if
///   declared in place.
///
/// Enums, tuple structs and unit structs derive a descriptor too, but the store
/// rejects them at runtime: only structs with named fields are records.
#[proc_macro_derive(Record, attributes(burrow))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
