use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, FieldsNamed, Ident, Type, Variant};

/// Parsed view of a single error variant.
struct VariantMeta<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg_attrs: Vec<Attribute>,
}

impl VariantMeta<'_> {
    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }
}

pub(crate) fn expand(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let ext_trait = format_ident!("{}Ext", name);

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("mymove_error can only be applied to enums"); };
    };

    let variants = match data.variants.iter().map(parse_variant).collect::<Result<Vec<_>, _>>() {
        Ok(v) => v,
        Err(err) => return err.to_compile_error(),
    };
    if let Some(err) = source_without_context(&variants) {
        return err.to_compile_error();
    }

    let derives = missing_derives(&input);
    let kind_impl = kind_method(name, &variants);
    let ext_impl = context_trait(name, &ext_trait, &variants);
    let from_impls = variants.iter().filter_map(|v| source_conversions(name, &ext_trait, v));
    let internal_impls = internal_conversions(name, &variants);

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #kind_impl
        #ext_impl
        #(#from_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    }
}

fn parse_variant(v: &Variant) -> Result<VariantMeta<'_>, syn::Error> {
    let Fields::Named(fields) = &v.fields else {
        return Err(syn::Error::new_spanned(
            v,
            "mymove_error requires named fields (`message`/`source` and `context`)",
        ));
    };

    let has_context = context_field(fields)?.is_some();
    let source = source_field(fields).and_then(|f| f.ident.as_ref().map(|ident| (ident, &f.ty)));
    let cfg_attrs = v.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).cloned().collect();

    Ok(VariantMeta { ident: &v.ident, source, has_context, cfg_attrs })
}

fn context_field(fields: &FieldsNamed) -> Result<Option<&Field>, syn::Error> {
    let Some(field) = fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|i| i == "context"))
    else {
        return Ok(None);
    };
    if is_optional_static_cow(&field.ty) {
        Ok(Some(field))
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn source_field(fields: &FieldsNamed) -> Option<&Field> {
    fields.named.iter().find(|field| {
        field.ident.as_ref().is_some_and(|ident| ident == "source")
            || has_attr(field, "source")
            || has_attr(field, "from")
    })
}

fn has_attr(field: &Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

fn source_without_context(variants: &[VariantMeta<'_>]) -> Option<syn::Error> {
    variants.iter().find(|v| v.source.is_some() && !v.has_context).map(|v| {
        syn::Error::new_spanned(
            v.ident,
            "mymove_error requires `context: Option<Cow<'static, str>>` on variants with a source",
        )
    })
}

fn missing_derives(input: &DeriveInput) -> TokenStream {
    let present = derived_trait_names(&input.attrs);
    let mut tokens = Vec::new();
    if !present.contains("Debug") {
        tokens.push(quote! { Debug });
    }
    if !present.contains("Error") {
        tokens.push(quote! { ::thiserror::Error });
    }
    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(seg) = meta.path.segments.last() {
                traits.insert(seg.ident.to_string());
            }
            Ok(())
        });
    }
    traits
}

/// `kind()` returns the variant name, used as a stable `error.kind` log field.
fn kind_method(name: &Ident, variants: &[VariantMeta<'_>]) -> TokenStream {
    let arms = variants.iter().map(|v| {
        let ident = v.ident;
        let cfg_attrs = &v.cfg_attrs;
        let label = ident.to_string();
        quote! { #(#cfg_attrs)* Self::#ident { .. } => #label, }
    });

    quote! {
        #[automatically_derived]
        impl #name {
            /// Name of the error variant.
            #[must_use]
            pub const fn kind(&self) -> &'static str {
                match self {
                    #(#arms)*
                }
            }
        }
    }
}

fn context_trait(name: &Ident, ext_trait: &Ident, variants: &[VariantMeta<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        let cfg_attrs = &v.cfg_attrs;
        quote! { #(#cfg_attrs)* #name::#ident { context: c, .. } => *c = Some(context.into()), }
    });

    quote! {
        pub trait #ext_trait<T> {
            /// Attaches a human-readable context to the error.
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext_trait<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut e| {
                    match &mut e {
                        #(#arms)*
                        _ => {}
                    }
                    e
                })
            }
        }
    }
}

fn source_conversions(
    name: &Ident,
    ext_trait: &Ident,
    v: &VariantMeta<'_>,
) -> Option<TokenStream> {
    if v.is_internal() {
        return None;
    }
    let (field, ty) = v.source?;
    let ident = v.ident;
    let cfg_attrs = &v.cfg_attrs;

    Some(quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
        }

        #(#cfg_attrs)*
        impl<T> #ext_trait<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_conversions(name: &Ident, variants: &[VariantMeta<'_>]) -> TokenStream {
    let Some(internal) = variants.iter().find(|v| v.is_internal()) else {
        return quote!();
    };
    let cfg_attrs = &internal.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None } }
        }
        #(#cfg_attrs)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::Internal { message: std::borrow::Cow::Owned(s), context: None } }
        }
    }
}

/// Matches `Option<Cow<'static, str>>` by path segment names.
fn is_optional_static_cow(ty: &Type) -> bool {
    let Some(cow) = single_generic_type(ty, "Option") else {
        return false;
    };
    let Type::Path(path) = cow else {
        return false;
    };
    let Some(seg) = path.path.segments.last() else {
        return false;
    };
    if seg.ident != "Cow" {
        return false;
    }
    let syn::PathArguments::AngleBracketed(args) = &seg.arguments else {
        return false;
    };
    let mut args = args.args.iter();
    let Some(syn::GenericArgument::Lifetime(lt)) = args.next() else {
        return false;
    };
    let Some(syn::GenericArgument::Type(Type::Path(inner))) = args.next() else {
        return false;
    };
    lt.ident == "static" && inner.path.segments.last().is_some_and(|s| s.ident == "str")
}

fn single_generic_type<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let seg = path.path.segments.last()?;
    if seg.ident != wrapper {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &seg.arguments else {
        return None;
    };
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
