use proc_macro2::Ident;
use quote::format_ident;

#[cfg(feature = "proc-macro-crate")]
pub fn dotquad_ident() -> syn::Result<Ident> {
    use proc_macro_crate::{crate_name, FoundCrate};
    match crate_name("dotquad") {
        Ok(FoundCrate::Itself) => Ok(format_ident!("dotquad")),
        Ok(FoundCrate::Name(name)) => Ok(format_ident!("{name}")),
        Err(err) => Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            format!("expected `dotquad` package in `Cargo.toml`: {err}"),
        )),
    }
}

#[cfg(not(feature = "proc-macro-crate"))]
pub fn dotquad_ident() -> syn::Result<Ident> {
    Ok(format_ident!("dotquad"))
}

#[cfg(feature = "debug")]
pub fn debug(tokens: proc_macro2::TokenStream) -> Result<(), Box<dyn std::error::Error>> {
    use rust_format::{Formatter as _, RustFmt};
    use std::{env, fs, path::PathBuf};
    let dir = match env::var("CARGO_TARGET_DIR") {
        Ok(target_dir) => PathBuf::from(target_dir).join("dotquad"),
        Err(_) => PathBuf::from("target/dotquad"),
    };
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join("macros_debug.rs"),
        RustFmt::default().format_tokens(tokens)?,
    )
    .map_err(Into::into)
}
