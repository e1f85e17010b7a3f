use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{parse_quote, Attribute, LitStr, Path, Token};

/// Settings given through `#[positional(...)]` on the deriving struct.
#[derive(Default)]
pub struct Options {
    krate: Option<Path>,
}

enum Setting {
    Crate(Span, Path),
}

impl Parse for Setting {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(Token![crate]) {
            let token = input.parse::<Token![crate]>()?;
            input.parse::<Token![=]>()?;
            let path = input.parse::<LitStr>()?.parse::<Path>()?;
            Ok(Setting::Crate(token.span, path))
        } else {
            Err(lookahead.error())
        }
    }
}

impl Options {
    pub fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = Options::default();

        for attr in attrs.iter().filter(|attr| attr.path.is_ident("positional")) {
            let settings = attr.parse_args_with(Punctuated::<Setting, Token![,]>::parse_terminated)?;

            for setting in settings {
                match setting {
                    Setting::Crate(span, path) => {
                        if options.krate.is_some() {
                            return Err(syn::Error::new(span, "duplicate `crate` option"));
                        }
                        options.krate = Some(path);
                    }
                }
            }
        }

        Ok(options)
    }

    /// Path of the runtime crate in generated code.
    pub fn krate(&self) -> Path {
        self.krate.clone().unwrap_or_else(|| parse_quote!(::positional))
    }
}
