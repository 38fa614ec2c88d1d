mod expand;
mod parse;
mod utils;

use proc_macro::TokenStream;
use syn::Error;

fn parse_expand(input: TokenStream) -> TokenStream {
    let output = parse::parse(input.into())
        .and_then(expand::expand)
        .unwrap_or_else(Error::into_compile_error);
    #[cfg(feature = "debug")]
    if let Err(err) = utils::debug(output.clone()) {
        let message = format!("failed to write macro expansion: {err}");
        return quote::quote! { ::core::compile_error!(#message); }.into();
    }
    output.into()
}

#[proc_macro]
pub fn ipv4(input: TokenStream) -> TokenStream {
    parse_expand(input)
}
