use proc_macro2::TokenStream;
use syn::{parse2, LitStr};

pub struct Input {
    pub lit: LitStr,
}

pub fn parse(input: TokenStream) -> syn::Result<Input> {
    let lit = parse2::<LitStr>(input)
        .map_err(|err| syn::Error::new(err.span(), "expected string literal"))?;
    if dotquad_core::is_valid_address(lit.value().as_bytes()) {
        Ok(Input { lit })
    } else {
        Err(syn::Error::new_spanned(lit, "invalid IPv4 address"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn valid_literal() {
        let input = parse(quote! { "10.0.0.1" }).unwrap();
        assert_eq!(input.lit.value(), "10.0.0.1");
    }

    #[test]
    fn invalid_literal() {
        for tokens in [
            quote! { "10.0.0.256" },
            quote! { "10.0.0" },
            quote! { " 10.0.0.1" },
            quote! { "" },
        ] {
            let err = parse(tokens).err().unwrap();
            assert_eq!(err.to_string(), "invalid IPv4 address");
        }
    }

    #[test]
    fn not_a_literal() {
        for tokens in [
            quote! { 10 },
            quote! { addr },
            quote! { "10.0.0.1", "10.0.0.2" },
            quote! {},
        ] {
            let err = parse(tokens).err().unwrap();
            assert_eq!(err.to_string(), "expected string literal");
        }
    }
}
