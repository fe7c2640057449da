use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// A single `tag = expr` pair inside the `error` attribute.
struct Tag {
    name: Ident,
    value: Expr,
}

impl Parse for Tag {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![=]>()?;
        Ok(Self { name, value: input.parse()? })
    }
}

/// The arguments that can be passed to the `error` attribute.
#[derive(Default)]
struct ErrorArgs {
    message: Option<Expr>,
    label: Option<Expr>,
    help: Option<Expr>,
}

impl ErrorArgs {
    /// Reads the `error` attribute out of the given attributes, if present.
    fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut args = Self::default();
        let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("error")) else {
            return Ok(args);
        };

        let tags = attr.parse_args_with(Punctuated::<Tag, Token![,]>::parse_terminated)?;
        for Tag { name, value } in tags {
            let slot = match name.to_string().as_str() {
                "message" => &mut args.message,
                "label" => &mut args.label,
                "help" => &mut args.help,
                other => return Err(syn::Error::new_spanned(&name, format!("unknown tag `{}`", other))),
            };
            *slot = Some(value);
        }

        Ok(args)
    }
}

/// The struct to derive `ErrorKind` for.
pub struct ErrorKindTarget {
    name: Ident,
    fields: Fields,
    args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<ItemStruct>()?;
        let args = ErrorArgs::from_attrs(&item.attrs)?;
        Ok(Self {
            name: item.ident,
            fields: item.fields,
            args,
        })
    }
}

impl ErrorKindTarget {
    /// Brings the named fields of the struct into scope.
    fn destructure(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.fields {
            Fields::Named(fields) => {
                let fields = fields.named.iter().map(|field| &field.ident);
                quote! { let #name { #(#fields),* } = self; }
            },
            Fields::Unnamed(_) => quote_spanned! {
                name.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
            Fields::Unit => quote! {},
        }
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let name = &self.name;
        let destructure = self.destructure();
        let message = self.args.message.as_ref()
            .map_or_else(|| quote! { stringify!(#name) }, |e| quote! { #e });
        let label = self.args.label.as_ref()
            .map_or_else(|| quote! { "" }, |e| quote! { #e });
        let help = self.args.help.as_ref().map(|e| quote! { builder.set_help(#e); });

        tokens.extend(quote! {
            impl ga_error::ErrorKind for #name {
                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }

                fn build_report<'a>(
                    &self,
                    src_id: &'a str,
                    spans: &[::std::ops::Range<usize>],
                ) -> ::ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                    #[allow(unused_variables)]
                    #destructure

                    let offset = spans.first().map_or(0, |span| span.start);
                    let mut builder = ::ariadne::Report::build(::ariadne::ReportKind::Error, src_id, offset)
                        .with_message(#message);

                    let label_str = ::std::string::ToString::to_string(&#label);
                    for (i, span) in spans.iter().enumerate() {
                        let mut label = ::ariadne::Label::new((src_id, span.clone()))
                            .with_color(ga_error::EXPR);
                        if i == 0 && !label_str.is_empty() {
                            label = label.with_message(&label_str);
                        }
                        builder.add_label(label);
                    }

                    #help
                    builder.finish()
                }
            }
        });
    }
}
