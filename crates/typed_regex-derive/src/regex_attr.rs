//! Argument parsing and expansion for `#[typed_regex]`.

use proc_macro2::TokenStream;
use syn::parse::{Parse, ParseStream};
use syn::{Fields, Ident, ItemStruct, LitBool, LitStr, Token};
use typed_regex_codegen::{PatternSpec, RegexOptions, Synthesizer, resolve};

/// `"pattern", flag, flag = bool, ...`
pub struct RegexArgs {
    pattern: LitStr,
    options: RegexOptions,
}

impl Parse for RegexArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let pattern: LitStr = input.parse()?;
        let mut options = RegexOptions::default();

        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }

            let flag: Ident = input.parse()?;
            let enabled = if input.peek(Token![=]) {
                input.parse::<Token![=]>()?;
                input.parse::<LitBool>()?.value
            } else {
                true
            };

            if !options.set(&flag.to_string(), enabled) {
                return Err(syn::Error::new(
                    flag.span(),
                    format!(
                        "unknown regex option `{flag}`; expected one of: {}",
                        RegexOptions::NAMES.join(", ")
                    ),
                ));
            }
        }

        Ok(Self { pattern, options })
    }
}

pub fn expand_typed_regex(args: RegexArgs, item: ItemStruct) -> syn::Result<TokenStream> {
    if !matches!(item.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            &item.fields,
            "#[typed_regex] must be placed on a unit struct, e.g. `pub struct IsoDate;`",
        ));
    }
    if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "#[typed_regex] structs cannot declare generics; the `'t` lifetime is added for you",
        ));
    }

    let spec = PatternSpec::new(item.ident.to_string(), args.pattern.value())
        .with_options(args.options);

    let to_error = |err: typed_regex_codegen::GenerateError| {
        syn::Error::new(args.pattern.span(), err.to_string())
    };
    let resolved = resolve(&spec).map_err(to_error)?;

    Synthesizer::new(&spec, &resolved)
        .visibility(item.vis)
        .attributes(item.attrs)
        .emit()
        .map_err(to_error)
}
