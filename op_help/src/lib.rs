use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, parse_macro_input};

/// 收集变体上的文档注释，每行去掉rustdoc补上的一个前导空格。
fn extract_doc(attrs: &[syn::Attribute]) -> String {
    let mut lines = Vec::new();
    for attr in attrs {
        if attr.path().is_ident("doc")
            && let syn::Meta::NameValue(nv) = &attr.meta
            && let syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Str(s), .. }) = &nv.value
        {
            let line = s.value();
            lines.push(line.strip_prefix(' ').map(str::to_owned).unwrap_or(line));
        }
    }
    lines.join("\n")
}

/// 文档首行的第一个词即命令名，例如`:map`。
fn command_of(doc: &str) -> String {
    doc.split_whitespace().next().unwrap_or_default().to_owned()
}

#[proc_macro_derive(OpHelp)]
pub fn op_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(enum_name, "OpHelp can only be derived on enums").to_compile_error().into();
    };

    // help(&self)：当前变体的文档
    let help_entries = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let doc = extract_doc(&v.attrs);
        let pattern = match &v.fields {
            Fields::Unit => quote! { #variant_name },
            Fields::Unnamed(_) => quote! { #variant_name(..) },
            Fields::Named(_) => quote! { #variant_name { .. } },
        };
        quote! {
            Self::#pattern => #doc,
        }
    });

    // all_help()：所有 (命令, 文档)
    let all_help_entries = variants.iter().map(|v| {
        let doc = extract_doc(&v.attrs);
        let command = command_of(&doc);
        quote! {
            (#command, #doc)
        }
    });

    let expanded = quote! {
        impl #enum_name {
            /// 当前命令的帮助信息。
            pub fn help(&self) -> &'static str {
                match self {
                    #(#help_entries)*
                }
            }

            /// 全部命令的帮助信息：[(command, help), ...]
            pub fn all_help() -> &'static [(&'static str, &'static str)] {
                &[
                    #(#all_help_entries),*
                ]
            }
        }
    };

    TokenStream::from(expanded)
}
