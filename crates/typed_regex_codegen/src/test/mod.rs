
use proc_macro2::TokenStream;
use syn::{ImplItem, Item};

/// Accessor method names of every inherent impl in `tokens`, in order.
/// Accessors are the methods carrying `#[allow(non_snake_case)]`.
pub(crate) fn accessor_names(tokens: TokenStream) -> Vec<String> {
    let file: syn::File = syn::parse2(tokens).expect("generated code should parse");
    inherent_fns(&file.items)
        .filter(|f| f.attrs.iter().any(|a| a.path().is_ident("allow")))
        .map(|f| f.sig.ident.to_string())
        .collect()
}

/// Every method of every inherent impl, descending into modules.
pub(crate) fn inherent_fns(items: &[Item]) -> impl Iterator<Item = &syn::ImplItemFn> {
    let mut fns = Vec::new();
    collect_fns(items, &mut fns);
    fns.into_iter()
}

fn collect_fns<'a>(items: &'a [Item], out: &mut Vec<&'a syn::ImplItemFn>) {
    for item in items {
        match item {
            Item::Impl(imp) if imp.trait_.is_none() => {
                for impl_item in &imp.items {
                    if let ImplItem::Fn(f) = impl_item {
                        out.push(f);
                    }
                }
            }
            Item::Mod(m) => {
                if let Some((_, content)) = &m.content {
                    collect_fns(content, out);
                }
            }
            _ => {}
        }
    }
}
