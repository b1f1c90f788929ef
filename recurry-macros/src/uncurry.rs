//! Implementation of the `uncurry!` procedural macro.
//!
//! `uncurry!(curried, 3)` expands to
//!
//! ```text
//! {
//!     let __recurry_curried = curried;
//!     move |__recurry_argument_0, __recurry_argument_1, __recurry_argument_2| {
//!         __recurry_curried(__recurry_argument_0)(__recurry_argument_1)(__recurry_argument_2)
//!     }
//! }
//! ```
//!
//! Without an arity the input must be a chain of unary closures
//! (`|a| move |b| ..`) and the arity is its nesting depth.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, Token};

use crate::curry::parse_arity;

pub fn expand(input: TokenStream) -> syn::Result<TokenStream> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions = syn::parse::Parser::parse2(parser, input)?;
    let mut iterator = expressions.into_iter();

    let (curried, arity) = match (iterator.next(), iterator.next(), iterator.next()) {
        (Some(curried), Some(arity), None) => {
            let arity = parse_arity(&arity)?;
            (curried, arity)
        }
        (Some(closure @ Expr::Closure(_)), None, None) => {
            let arity = closure_depth(&closure)?;
            (closure, arity)
        }
        (Some(other), None, None) => {
            return Err(syn::Error::new(
                other.span(),
                "uncurry! requires an arity unless given a chain of closures: uncurry!(curried, 2)",
            ));
        }
        _ => {
            return Err(syn::Error::new(
                Span::call_site(),
                "uncurry! requires a curried function and an arity",
            ));
        }
    };

    Ok(generate_uncurried(arity, &curried))
}

fn closure_depth(expression: &Expr) -> syn::Result<usize> {
    match expression {
        Expr::Closure(closure) if closure.inputs.len() == 1 => Ok(1 + closure_depth(&closure.body)?),
        Expr::Closure(closure) => Err(syn::Error::new(
            closure.span(),
            "uncurry! expects closures taking exactly one argument",
        )),
        _ => Ok(0),
    }
}

fn generate_uncurried(arity: usize, curried: &Expr) -> TokenStream {
    if arity == 0 {
        return quote! {
            {
                let __recurry_curried = #curried;
                move || ::core::clone::Clone::clone(&__recurry_curried)
            }
        };
    }

    let argument_identifiers: Vec<_> = (0..arity)
        .map(|index| format_ident!("__recurry_argument_{}", index))
        .collect();

    quote! {
        {
            let __recurry_curried = #curried;
            move |#(#argument_identifiers),*| {
                __recurry_curried #((#argument_identifiers))*
            }
        }
    }
}
