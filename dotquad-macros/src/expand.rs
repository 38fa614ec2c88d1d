use crate::{parse::Input, utils::dotquad_ident};
use proc_macro2::TokenStream;
use quote::quote;

pub fn expand(Input { lit }: Input) -> syn::Result<TokenStream> {
    let dotquad_ident = dotquad_ident()?;
    Ok(quote! {
        #dotquad_ident::Ipv4Str::__new_unchecked(#lit)
    })
}
