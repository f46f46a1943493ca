//! Emits the matcher type for a resolved pattern.
//!
//! The generated type `Name<'t>` borrows the searched text. It stores the raw
//! `Captures` plus one `MatchGroup` per accessor group, all bound when the
//! match is constructed:
//!
//! ```ignore
//! pub struct IsoDate<'t> {
//!     captures: ::typed_regex::__private::Captures<'t>,
//!     groups: [::typed_regex::MatchGroup<'t>; 6],
//! }
//!
//! impl<'t> IsoDate<'t> {
//!     pub fn is_match(text: &str) -> bool { .. }
//!     pub fn find(text: &'t str) -> Option<Self> { .. }
//!     pub fn try_match(text: &'t str, found: &mut Option<Self>) -> bool { .. }
//!     pub fn matches(text: &'t str) -> ::typed_regex::Matches<'t, Self> { .. }
//!     pub fn Year(&self) -> &::typed_regex::MatchGroup<'t> { &self.groups[0] }
//!     // ...
//! }
//! ```

use ahash::AHashMap;
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{Attribute, Path, Visibility, parse_quote};

use crate::doc::{accessor_doc, type_doc};
use crate::error::GenerateError;
use crate::pattern_spec::PatternSpec;
use crate::resolver::{GroupDescriptor, ResolvedPattern};

/// Associated constants of the generated type. They share a namespace with
/// the accessors.
const RESERVED_MEMBERS: [&str; 2] = ["PATTERN", "GROUP_COUNT"];

/// Path generated code uses to reach the runtime crate.
pub const DEFAULT_RUNTIME_PATH: &str = "::typed_regex";

/// Builds the declaration block for one resolved pattern.
pub struct Synthesizer<'a> {
    spec: &'a PatternSpec,
    resolved: &'a ResolvedPattern,
    visibility: Visibility,
    attributes: Vec<Attribute>,
    runtime: Path,
}

impl<'a> Synthesizer<'a> {
    pub fn new(spec: &'a PatternSpec, resolved: &'a ResolvedPattern) -> Self {
        Self {
            spec,
            resolved,
            visibility: parse_quote!(pub),
            attributes: Vec::new(),
            runtime: parse_quote!(::typed_regex),
        }
    }

    /// Visibility of the generated type. Defaults to `pub`.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Outer attributes copied onto the generated type, such as the docs of
    /// the placeholder declaration.
    pub fn attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn runtime_path(mut self, runtime: Path) -> Self {
        self.runtime = runtime;
        self
    }

    /// Validate every name, then emit the declaration.
    pub fn emit(&self) -> Result<TokenStream, GenerateError> {
        let name = parse_ident(&self.spec.type_name).ok_or_else(|| {
            GenerateError::InvalidTypeName {
                name: self.spec.type_name.clone(),
            }
        })?;
        let modules = self
            .spec
            .module_path
            .iter()
            .map(|segment| {
                parse_ident(segment).ok_or_else(|| GenerateError::InvalidModulePath {
                    segment: segment.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let accessors = accessor_idents(self.resolved.accessor_groups())?;

        let mut tokens = self.declaration(&name, &accessors);
        for module in modules.iter().rev() {
            tokens = quote! {
                pub mod #module {
                    #tokens
                }
            };
        }

        tracing::debug!(
            type_name = %self.spec.type_name,
            accessors = accessors.len(),
            "emitted matcher type"
        );
        Ok(tokens)
    }

    fn declaration(&self, name: &Ident, accessors: &[(Ident, &GroupDescriptor)]) -> TokenStream {
        let rt = &self.runtime;
        let vis = &self.visibility;
        let attrs = &self.attributes;
        let pattern = self.spec.pattern.as_str();
        let group_count = accessors.len();
        let doc = type_doc(self.spec);

        let builder_calls = self.spec.options.builder_calls();

        let bindings = accessors.iter().map(|(_, group)| {
            let index = group.index;
            let raw_name = if group.named {
                let raw_name = group.raw_name.as_str();
                quote! { ::std::option::Option::Some(#raw_name) }
            } else {
                quote! { ::std::option::Option::None }
            };
            quote! { #rt::MatchGroup::new(#index, #raw_name, captures.get(#index)) }
        });

        let accessor_fns = accessors.iter().enumerate().map(|(slot, (ident, group))| {
            let doc = accessor_doc(group);
            quote! {
                #[doc = #doc]
                #[allow(non_snake_case)]
                #[inline]
                pub fn #ident(&self) -> &#rt::MatchGroup<'t> {
                    &self.groups[#slot]
                }
            }
        });

        quote! {
            #(#attrs)*
            #[doc = #doc]
            #[derive(Debug)]
            #vis struct #name<'t> {
                captures: #rt::__private::Captures<'t>,
                groups: [#rt::MatchGroup<'t>; #group_count],
            }

            impl<'t> #rt::TypedMatch<'t> for #name<'t> {
                const PATTERN: &'static str = #pattern;

                fn regex() -> &'static #rt::__private::Regex {
                    static REGEX: ::std::sync::LazyLock<#rt::__private::Regex> =
                        ::std::sync::LazyLock::new(|| {
                            #[allow(unused_mut)]
                            let mut builder = #rt::__private::RegexBuilder::new(#pattern);
                            #(#builder_calls)*
                            #rt::__private::compile(&builder)
                        });
                    &REGEX
                }

                fn from_captures(captures: #rt::__private::Captures<'t>) -> Self {
                    let groups = [#(#bindings),*];
                    Self { captures, groups }
                }

                fn captures(&self) -> &#rt::__private::Captures<'t> {
                    &self.captures
                }

                fn groups(&self) -> &[#rt::MatchGroup<'t>] {
                    &self.groups
                }
            }

            #[allow(dead_code)]
            impl<'t> #name<'t> {
                /// The pattern this type was generated from.
                pub const PATTERN: &'static str = #pattern;

                /// Number of capture group accessors, the whole match excluded.
                pub const GROUP_COUNT: usize = #group_count;

                /// The compiled regular expression, built once on first use.
                pub fn regex() -> &'static #rt::__private::Regex {
                    <Self as #rt::TypedMatch<'t>>::regex()
                }

                /// Check whether `text` contains a match anywhere.
                pub fn is_match(text: &str) -> bool {
                    <Self as #rt::TypedMatch<'t>>::is_match(text)
                }

                /// Find the leftmost match in `text`, or `None` if there is none.
                pub fn find(text: &'t str) -> ::std::option::Option<Self> {
                    <Self as #rt::TypedMatch<'t>>::find(text)
                }

                /// Find the leftmost match in `text`, storing it in `found`.
                /// Returns `true` iff a match was stored.
                pub fn try_match(text: &'t str, found: &mut ::std::option::Option<Self>) -> bool {
                    <Self as #rt::TypedMatch<'t>>::try_match(text, found)
                }

                /// Iterate over every non-overlapping match in `text`, left to right.
                pub fn matches(text: &'t str) -> #rt::Matches<'t, Self> {
                    <Self as #rt::TypedMatch<'t>>::matches(text)
                }

                /// The text matched by the whole expression.
                pub fn value(&self) -> &'t str {
                    <Self as #rt::TypedMatch<'t>>::value(self)
                }

                /// Byte range of the whole match within the searched text.
                pub fn range(&self) -> ::std::ops::Range<usize> {
                    <Self as #rt::TypedMatch<'t>>::range(self)
                }

                /// The underlying `regex` captures.
                pub fn raw_match(&self) -> &#rt::__private::Captures<'t> {
                    &self.captures
                }

                /// Every accessor group, in pattern order.
                pub fn groups(&self) -> &[#rt::MatchGroup<'t>] {
                    &self.groups
                }

                #(#accessor_fns)*
            }

            impl ::std::fmt::Display for #name<'_> {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(self.value())
                }
            }
        }
    }
}

fn parse_ident(name: &str) -> Option<Ident> {
    syn::parse_str::<Ident>(name).ok()
}

/// Parse every accessor identifier and reject collisions.
fn accessor_idents(
    groups: &[GroupDescriptor],
) -> Result<Vec<(Ident, &GroupDescriptor)>, GenerateError> {
    let mut seen: AHashMap<&str, usize> = AHashMap::with_capacity(groups.len());
    let mut accessors = Vec::with_capacity(groups.len());

    for group in groups {
        let ident = parse_ident(&group.identifier).ok_or_else(|| GenerateError::InvalidAccessor {
            index: group.index,
            raw_name: group.raw_name.clone(),
            identifier: group.identifier.clone(),
        })?;

        if RESERVED_MEMBERS.contains(&group.identifier.as_str()) {
            return Err(GenerateError::ReservedAccessor {
                index: group.index,
                identifier: group.identifier.clone(),
            });
        }
        if let Some(&first) = seen.get(group.identifier.as_str()) {
            return Err(GenerateError::DuplicateAccessor {
                identifier: group.identifier.clone(),
                first,
                second: group.index,
            });
        }
        seen.insert(&group.identifier, group.index);
        accessors.push((ident, group));
    }

    Ok(accessors)
}
