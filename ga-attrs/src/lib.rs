mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `ga-error` for the given struct.
///
/// The report is customized with the `error` attribute:
/// ```ignore
/// use ga_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "expected a term", label = "add a term here")]
/// pub struct EmptyTerm;
/// ```
///
/// | Tag       | Description                                                           |
/// | --------- | --------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the report.                       |
/// | `label`   | Text attached to the first span of the error. Other spans are marked. |
/// | `help`    | Optional help text describing how to fix the error.                   |
///
/// Each tag accepts an expression implementing [`ToString`]. For structs with named fields, the
/// fields are in scope by name while the expressions are evaluated. Tuple structs are rejected.
///
/// The crate using the derive must depend on both `ariadne` and `ga-error`.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    quote! { #target }.into()
}
