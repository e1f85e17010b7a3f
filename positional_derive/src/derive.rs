use proc_macro2::{Literal, TokenStream};
use quote::{quote, ToTokens};
use syn::ext::IdentExt;
use syn::{Data, DataStruct, DeriveInput, Fields, Generics, Ident, Index, Member, Path, Type};

use positional::{Accessor, ConstructorKind, Record, Repr};

use crate::options::Options;

struct FieldDef {
    member: Member,
    name: Option<Ident>,
    ty: Type,
}

struct Target<'a> {
    krate: Path,
    ident: &'a Ident,
    generics: &'a Generics,
}

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let options = Options::from_attributes(&input.attrs)?;

    let data = match input.data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new(data.enum_token.span, "cannot derive Positional for enums"));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(data.union_token.span, "cannot derive Positional for unions"));
        }
    };

    let (kind, fields) = field_defs(data);
    let record = Repr::record(input.ident.unraw().to_string(), kind, fields).normalize();

    let target = Target {
        krate: options.krate(),
        ident: &input.ident,
        generics: &input.generics,
    };

    let positional_impl = derive_positional(&target, &record);
    let position_impls = record.accessors()
        .map(|accessor| derive_position(&target, record.name(), accessor))
        .collect::<TokenStream>();

    Ok(quote! {
        #positional_impl
        #position_impls
    })
}

fn field_defs(data: DataStruct) -> (ConstructorKind, Vec<FieldDef>) {
    let kind = match data.fields {
        Fields::Named(_) => ConstructorKind::Named,
        Fields::Unnamed(_) => ConstructorKind::Tuple,
        Fields::Unit => ConstructorKind::Unit,
    };

    let fields = data.fields.into_iter().enumerate().map(|(index, field)| {
        // tuple struct fields are reached by index
        let member = field.ident.clone()
            .map(Member::Named)
            .unwrap_or_else(|| Member::Unnamed(Index::from(index)));

        FieldDef { member, name: field.ident, ty: field.ty }
    }).collect();

    (kind, fields)
}

fn derive_positional(target: &Target, record: &Record<FieldDef>) -> TokenStream {
    let Target { krate, ident, generics } = target;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let name = record.name();
    let field_count = Literal::usize_unsuffixed(record.len());
    let kind = match record.kind() {
        ConstructorKind::Named => quote!(#krate::ConstructorKind::Named),
        ConstructorKind::Tuple => quote!(#krate::ConstructorKind::Tuple),
        ConstructorKind::Unit => quote!(#krate::ConstructorKind::Unit),
    };

    let field_infos = record.fields().map(|field| {
        let name = match &field.name {
            Some(name) => {
                let name = name.unraw().to_string();
                quote!(::std::option::Option::Some(#name))
            }
            None => quote!(::std::option::Option::None),
        };
        let ty = field.ty.to_token_stream().to_string();

        quote!(#krate::FieldInfo::new(#name, #ty))
    });

    quote! {
        impl #impl_generics #krate::Positional for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            const FIELD_COUNT: usize = #field_count;

            fn representation() -> #krate::Repr<#krate::FieldInfo> {
                #krate::Repr::record(#name, #kind, ::std::vec![#(#field_infos),*])
            }

            fn record() -> &'static #krate::Record<#krate::FieldInfo> {
                static RECORD: #krate::__private::OnceCell<#krate::Record<#krate::FieldInfo>> =
                    #krate::__private::OnceCell::new();

                #krate::__private::cached_record(&RECORD, <Self as #krate::Positional>::representation)
            }
        }
    }
}

fn derive_position(target: &Target, record_name: &str, accessor: Accessor<FieldDef>) -> TokenStream {
    let Target { krate, ident, generics } = target;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let FieldDef { member, ty, .. } = accessor.field();
    let position = Literal::usize_unsuffixed(accessor.position());
    let doc = format!(
        "Position {} of `{}` is field `{}`, {}.",
        accessor.position(),
        record_name,
        member_name(member),
        describe_path(&accessor),
    );

    quote! {
        #[doc = #doc]
        impl #impl_generics #krate::HasPosition<#position> for #ident #ty_generics #where_clause {
            type Field = #ty;

            #[inline]
            fn position(&self) -> &#ty {
                &self.#member
            }

            #[inline]
            fn position_mut(&mut self) -> &mut #ty {
                &mut self.#member
            }
        }
    }
}

fn member_name(member: &Member) -> String {
    match member {
        Member::Named(ident) => ident.unraw().to_string(),
        Member::Unnamed(index) => index.index.to_string(),
    }
}

fn describe_path(accessor: &Accessor<FieldDef>) -> String {
    if accessor.depth() == 0 {
        return "the only field".to_owned();
    }

    let steps = accessor.path()
        .map(|direction| direction.to_string())
        .collect::<Vec<_>>();

    format!("reached by going {}", steps.join(", then "))
}
