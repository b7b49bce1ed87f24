//! Code generation for the `#[tool]` attribute

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Expr, ExprLit, FnArg, ItemFn, Lit, LitStr, Meta};

use crate::parse::ToolArgs;

/// Main entry point for code generation
///
/// Emits the original function unchanged, followed by a generated
/// `{fn_name}_tool()` constructor that builds the tool through
/// `toolsmith::ToolBuilder`. Sync or async dispatch is fixed here from the
/// function's `async` keyword.
pub fn expand(args: &ToolArgs, item: &ItemFn) -> syn::Result<TokenStream> {
    if let Some(name) = &args.name {
        if name.value().trim().is_empty() {
            return Err(syn::Error::new(name.span(), "tool name must not be empty"));
        }
    }

    let fn_ident = &item.sig.ident;
    let tool_name = args
        .name
        .as_ref()
        .map_or_else(|| fn_ident.to_string(), LitStr::value);

    let docstring = doc_text(&item.attrs);
    if docstring.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.sig,
            "#[tool] requires a doc comment describing what the tool does",
        ));
    }

    check_shape(item)?;

    let signature = signature_text(&item.sig);
    let ctor_ident = format_ident!("{}_tool", fn_ident);
    let ctor_doc = format!("Builds the `{tool_name}` tool from [`{fn_ident}`].");
    let vis = &item.vis;

    let return_direct = args
        .return_direct
        .as_ref()
        .map_or_else(TokenStream::new, |flag| quote! { .return_direct(#flag) });

    let examples = if args.examples.is_empty() {
        TokenStream::new()
    } else {
        let lits = &args.examples;
        quote! { .examples([#(#lits),*]) }
    };

    let register_fn = if item.sig.asyncness.is_some() {
        format_ident!("async_fn")
    } else {
        format_ident!("sync_fn")
    };

    Ok(quote! {
        #item

        #[doc = #ctor_doc]
        #vis fn #ctor_ident() -> ::toolsmith::Result<::toolsmith::FnTool> {
            ::toolsmith::ToolBuilder::new(#tool_name)
                .docstring(#docstring)
                .signature(#signature)
                #return_direct
                #examples
                .#register_fn(#fn_ident)
                .build()
        }
    })
}

/// Collect the function's doc comment into a single docstring
///
/// Each `///` line is trimmed and the lines are joined with newlines, so
/// blank separator lines survive in multi-paragraph docs.
fn doc_text(attrs: &[syn::Attribute]) -> String {
    let mut lines = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        if let Meta::NameValue(nv) = &attr.meta {
            if let Expr::Lit(ExprLit {
                lit: Lit::Str(text),
                ..
            }) = &nv.value
            {
                lines.push(text.value().trim().to_string());
            }
        }
    }
    lines.join("\n").trim().to_string()
}

/// Reject function shapes the tool contract cannot express
fn check_shape(item: &ItemFn) -> syn::Result<()> {
    if let Some(FnArg::Receiver(receiver)) = item.sig.inputs.first() {
        return Err(syn::Error::new_spanned(
            receiver,
            "#[tool] does not support methods; apply it to a free function",
        ));
    }
    if item.sig.inputs.len() != 2 {
        return Err(syn::Error::new_spanned(
            &item.sig,
            "#[tool] functions take exactly two parameters: the input string and the session context",
        ));
    }
    if !item.sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.sig.generics,
            "#[tool] functions cannot be generic",
        ));
    }
    Ok(())
}

/// Render the declared parameter list as prompt-ready text
///
/// Produces `(q: String, ctx: Arc<SessionContext>)` for the corresponding
/// declaration. The trailing context parameter is stripped later, when the
/// builder composes the description.
fn signature_text(sig: &syn::Signature) -> String {
    let params: Vec<String> = sig
        .inputs
        .iter()
        .filter_map(|arg| match arg {
            FnArg::Typed(pat) => {
                let name = pat.pat.to_token_stream().to_string();
                let ty = tidy_type_text(&pat.ty.to_token_stream().to_string());
                Some(format!("{name}: {ty}"))
            }
            FnArg::Receiver(_) => None,
        })
        .collect();
    format!("({})", params.join(", "))
}

/// Normalize the token-stream rendering of a type into source-like text
///
/// `TokenStream::to_string` separates tokens with spaces
/// (`Arc < SessionContext >`), which is not what a prompt should show.
fn tidy_type_text(raw: &str) -> String {
    let mut text = raw.trim().to_string();
    text = text.replace(" :: ", "::");
    text = text.replace(":: ", "::");
    text = text.replace(" ::", "::");
    text = text.replace(" ,", ",");
    text = text.replace(" < ", "<");
    text = text.replace("< ", "<");
    text = text.replace(" <", "<");
    text = text.replace(" >", ">");
    text = text.replace(" ;", ";");
    text = text.replace("& ", "&");
    text = text.replace("* const ", "*const ");
    text = text.replace("* mut ", "*mut ");
    // keep the space in `-> (` while gluing `Fn (` and `fn (`
    text = text.replace("-> (", "\u{1}");
    text = text.replace(" (", "(");
    text.replace('\u{1}', "-> (")
}
