use proc_macro::{self, TokenStream};
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

enum Method {
    Get,
    Post,
    Put,
}

fn derive_method(input: TokenStream, method: Method) -> TokenStream {
    let DeriveInput { ident, .. } = parse_macro_input!(input);
    let output = match method {
        Method::Get => quote! { impl Get for #ident {} },
        Method::Post => quote! { impl Post for #ident {} },
        Method::Put => quote! { impl Put for #ident {} },
    };
    output.into()
}

#[proc_macro_derive(Get)]
pub fn derive_get(input: TokenStream) -> TokenStream {
    derive_method(input, Method::Get)
}

#[proc_macro_derive(Post)]
pub fn derive_post(input: TokenStream) -> TokenStream {
    derive_method(input, Method::Post)
}

#[proc_macro_derive(Put)]
pub fn derive_put(input: TokenStream) -> TokenStream {
    derive_method(input, Method::Put)
}
