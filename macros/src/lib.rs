use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{
    parse_macro_input, parse_quote, Data, DataEnum, DeriveInput, Fields, GenericParam, Generics,
    LitStr, Variant,
};

/// Derives `Display`, `std::error::Error` and `outcome::Diagnostic` for an enum.
///
/// Every variant has to carry a `#[diagnostic("...")]` message. Unit variants
/// display the message as is, single field tuple variants display
/// `message: field`.
///
/// ```ignore
/// #[derive(Debug, Diagnostic)]
/// enum FetchError {
///     #[diagnostic("url is malformed")]
///     BadUrl,
///     #[diagnostic("server refused the request")]
///     Refused(u16),
/// }
/// ```
#[proc_macro_derive(Diagnostic, attributes(diagnostic))]
pub fn derive_diagnostic(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    // Used in the quasi-quotation below as `#name`.
    let name = input.ident;

    let data = match input.data {
        Data::Enum(ref data) => data,
        Data::Struct(_) | Data::Union(_) => {
            return syn::Error::new(name.span(), "Diagnostic can only be derived for enums")
                .to_compile_error()
                .into()
        }
    };

    let arms = match display_arms(data) {
        Ok(arms) => arms,
        Err(e) => return e.to_compile_error().into(),
    };

    // Add a bound `T: Display + Debug` to every type parameter T.
    let generics = add_trait_bounds(input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::std::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(#arms)*
                }
            }
        }

        impl #impl_generics ::std::error::Error for #name #ty_generics #where_clause {}

        impl #impl_generics ::outcome::Diagnostic for #name #ty_generics #where_clause {}
    };

    // Hand the output tokens back to the compiler.
    proc_macro::TokenStream::from(expanded)
}

// Add a bound `T: Display + Debug` to every type parameter T.
fn add_trait_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(ref mut type_param) = *param {
            type_param.bounds.push(parse_quote!(::std::fmt::Display));
            type_param.bounds.push(parse_quote!(::std::fmt::Debug));
        }
    }
    generics
}

fn display_arms(data: &DataEnum) -> syn::Result<Vec<TokenStream>> {
    if data.variants.is_empty() {
        return Err(syn::Error::new(
            data.brace_token.span,
            "Diagnostic needs at least one variant",
        ));
    }

    data.variants.iter().map(display_arm).collect()
}

fn display_arm(variant: &Variant) -> syn::Result<TokenStream> {
    let ident = &variant.ident;
    let message = message(variant)?;

    match variant.fields {
        Fields::Unit => Ok(quote_spanned!(variant.span() =>
            Self::#ident => f.write_str(#message),
        )),
        // Single field, expand to:
        //
        // Self::Variant(inner) => write!(f, "{}: {}", message, inner)
        Fields::Unnamed(ref fields) if fields.unnamed.len() == 1 => {
            Ok(quote_spanned!(variant.span() =>
                Self::#ident(inner) => write!(f, "{}: {}", #message, inner),
            ))
        }
        Fields::Unnamed(_) | Fields::Named(_) => Err(syn::Error::new(
            variant.span(),
            "Diagnostic supports unit variants and single field tuple variants only",
        )),
    }
}

fn message(variant: &Variant) -> syn::Result<LitStr> {
    variant
        .attrs
        .iter()
        .find(|attr| attr.path.is_ident("diagnostic"))
        .ok_or_else(|| {
            syn::Error::new(
                variant.span(),
                format!("missing #[diagnostic(\"...\")] on {}", variant.ident),
            )
        })?
        .parse_args::<LitStr>()
}
