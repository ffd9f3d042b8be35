use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Ident, Lit, LitStr, Token, Type, UnOp, Visibility};

/// Associated items generated on every handle; enumerants may not shadow them.
const RESERVED: &[&str] = &["ENTRIES", "enumeration"];

struct Declaration {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
    ty: Type,
    enumerants: Punctuated<Enumerant, Token![,]>,
}

struct Enumerant {
    attrs: Vec<Attribute>,
    ident: Ident,
    value: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Text,
    Integer,
}

impl Parse for Declaration {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        let ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let ty = input.parse()?;

        let body;
        syn::braced!(body in input);
        let enumerants = body.parse_terminated(Enumerant::parse, Token![,])?;

        Ok(Self { attrs, vis, ident, ty, enumerants })
    }
}

impl Parse for Enumerant {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let value = input.parse()?;
        Ok(Self { attrs, ident, value })
    }
}

pub fn expand_backed_enum(input: TokenStream) -> TokenStream {
    let declaration = match syn::parse2::<Declaration>(input) {
        Ok(declaration) => declaration,
        Err(err) => return err.to_compile_error(),
    };

    if let Err(err) = check_enumerants(&declaration) {
        return err.to_compile_error();
    }

    generate(&declaration)
}

fn check_enumerants(declaration: &Declaration) -> syn::Result<()> {
    let mut seen = FxHashSet::default();
    let mut first_category = None;

    for enumerant in &declaration.enumerants {
        let name = enumerant.ident.to_string();

        if RESERVED.contains(&name.as_str()) {
            return Err(syn::Error::new_spanned(
                &enumerant.ident,
                format!("`{name}` is reserved for a generated associated item"),
            ));
        }

        if !seen.insert(name.clone()) {
            return Err(syn::Error::new_spanned(
                &enumerant.ident,
                format!("duplicate enumerant `{name}`"),
            ));
        }

        let Some(category) = category_of(&enumerant.value) else {
            return Err(syn::Error::new_spanned(
                &enumerant.value,
                "backing values must be string or integer literals",
            ));
        };

        match first_category {
            None => first_category = Some(category),
            Some(expected) if expected != category => {
                return Err(syn::Error::new_spanned(
                    &enumerant.value,
                    "backing values must all be text or all be integers",
                ));
            },
            Some(_) => {},
        }
    }

    Ok(())
}

fn category_of(expr: &Expr) -> Option<Category> {
    match expr {
        Expr::Lit(ExprLit { lit: Lit::Str(_), .. }) => Some(Category::Text),
        Expr::Lit(ExprLit { lit: Lit::Int(_), .. }) => Some(Category::Integer),
        Expr::Unary(ExprUnary { op: UnOp::Neg(_), expr, .. }) => {
            matches!(&**expr, Expr::Lit(ExprLit { lit: Lit::Int(_), .. }))
                .then_some(Category::Integer)
        },
        Expr::Group(group) => category_of(&group.expr),
        Expr::Paren(paren) => category_of(&paren.expr),
        _ => None,
    }
}

fn generate(declaration: &Declaration) -> TokenStream {
    let Declaration { attrs, vis, ident, ty, enumerants } = declaration;
    let krate = quote! { ::backed_enum };

    let constants = enumerants.iter().map(|e| {
        let Enumerant { attrs, ident, value } = e;
        quote! {
            #(#attrs)*
            pub const #ident: #ty = #value;
        }
    });

    let table = enumerants.iter().map(|e| {
        let ident = &e.ident;
        let name = LitStr::new(&ident.to_string(), ident.span());
        quote! { (#name, Self::#ident) }
    });

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #vis struct #ident;

        #[allow(non_upper_case_globals)]
        impl #ident {
            #(#constants)*

            /// Every enumerant as `(name, backing value)`, in declaration order.
            pub const ENTRIES: &'static [(&'static str, #ty)] = &[#(#table),*];

            /// Returns the process-wide enumeration built from [`Self::ENTRIES`].
            #[must_use]
            pub fn enumeration() -> &'static #krate::BackedEnum<#ty> {
                static ENUMERATION: ::std::sync::LazyLock<#krate::BackedEnum<#ty>> =
                    ::std::sync::LazyLock::new(|| #krate::BackedEnum::new(#ident::ENTRIES.iter().copied()));
                &ENUMERATION
            }
        }

        #[automatically_derived]
        impl ::std::ops::Deref for #ident {
            type Target = #krate::BackedEnum<#ty>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                Self::enumeration()
            }
        }
    }
}
