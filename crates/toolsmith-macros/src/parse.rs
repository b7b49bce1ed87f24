//! Argument parsing for the `#[tool]` attribute

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, LitBool, LitStr, Token, parenthesized};

/// Parsed arguments of a `#[tool(...)]` attribute
///
/// Three call shapes are accepted: bare (`#[tool]`), named
/// (`#[tool("name", ...)]` with the name literal first), and keyword-only
/// (`#[tool(return_direct = true)]`, `#[tool(examples("..."))]`).
#[derive(Debug)]
pub struct ToolArgs {
    /// Explicit tool name; defaults to the function identifier
    pub name: Option<LitStr>,
    /// Whether the tool's output goes straight to the end user
    pub return_direct: Option<LitBool>,
    /// Sample invocations for prompting
    pub examples: Vec<LitStr>,
}

impl Parse for ToolArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = ToolArgs {
            name: None,
            return_direct: None,
            examples: Vec::new(),
        };
        let mut first = true;

        while !input.is_empty() {
            if input.peek(LitStr) {
                let lit: LitStr = input.parse()?;
                if !first {
                    return Err(syn::Error::new(
                        lit.span(),
                        "too many arguments for #[tool]; a single name literal is accepted, in first position",
                    ));
                }
                args.name = Some(lit);
            } else if input.peek(Ident) {
                let ident: Ident = input.parse()?;
                if ident == "return_direct" {
                    if args.return_direct.is_some() {
                        return Err(syn::Error::new(
                            ident.span(),
                            "duplicate `return_direct` argument",
                        ));
                    }
                    input.parse::<Token![=]>()?;
                    args.return_direct = Some(input.parse()?);
                } else if ident == "examples" {
                    if !args.examples.is_empty() {
                        return Err(syn::Error::new(ident.span(), "duplicate `examples` argument"));
                    }
                    let content;
                    parenthesized!(content in input);
                    let lits: Punctuated<LitStr, Token![,]> = Punctuated::parse_terminated(&content)?;
                    args.examples = lits.into_iter().collect();
                } else {
                    return Err(syn::Error::new(
                        ident.span(),
                        "unsupported argument for #[tool]; expected a name literal, `return_direct = <bool>`, or `examples(\"...\")`",
                    ));
                }
            } else {
                return Err(input.error(
                    "unsupported argument for #[tool]; expected a name literal, `return_direct = <bool>`, or `examples(\"...\")`",
                ));
            }

            first = false;
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}
