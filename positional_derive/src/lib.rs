extern crate proc_macro;

mod derive;
mod options;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Implements `positional::HasPosition<I>` for every position `I` of a
/// struct, along with `positional::Positional`.
///
/// The path used to reach the runtime crate can be changed with
/// `#[positional(crate = "path::to::positional")]`.
#[proc_macro_derive(Positional, attributes(positional))]
pub fn derive_positional(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    derive::expand(input)
        .unwrap_or_else(|error| error.to_compile_error())
        .into()
}
