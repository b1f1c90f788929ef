//! Implementation of the `curry!` procedural macro.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `curry!(|a, b| body)`
//! 2. Closure with a declared arity: `curry!(|a, b| body, 2)`
//! 3. Function + arity form: `curry!(function_name, 3)`, where the function
//!    may be any expression
//!
//! # Generated Code Structure
//!
//! For an arity of two or more the function and every argument but the last
//! are shared between the nested closures through `Rc`, so curried closures
//! and partial applications can be called more than once:
//!
//! ```text
//! {
//!     let __recurry_function = Rc::new(add);
//!     move |__recurry_argument_0| {
//!         let __recurry_argument_0 = Rc::new(__recurry_argument_0);
//!         let __recurry_function = Rc::clone(&__recurry_function);
//!         move |__recurry_argument_1| __recurry_function(
//!             Rc::unwrap_or_clone(Rc::clone(&__recurry_argument_0)),
//!             __recurry_argument_1
//!         )
//!     }
//! }
//! ```
//!
//! Arity one wraps the function in a single closure. Arity zero calls the
//! function right away, so the expansion is its result.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, ExprClosure, ExprLit, Lit, Token};

enum CurryInput {
    Closure { closure: ExprClosure, arity: usize },
    FunctionWithArity { function: Expr, arity: usize },
}

pub fn expand(input: TokenStream) -> syn::Result<TokenStream> {
    let expanded = match parse_curry_input(input)? {
        CurryInput::Closure { closure, arity } => generate_nested_closures(arity, &quote! { #closure }),
        CurryInput::FunctionWithArity { function, arity } => {
            generate_nested_closures(arity, &quote! { #function })
        }
    };
    Ok(expanded)
}

fn parse_curry_input(input: TokenStream) -> syn::Result<CurryInput> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions = syn::parse::Parser::parse2(parser, input)?;
    let mut iterator = expressions.into_iter();

    match (iterator.next(), iterator.next(), iterator.next()) {
        (Some(Expr::Closure(closure)), None, None) => {
            let arity = closure.inputs.len();
            Ok(CurryInput::Closure { closure, arity })
        }
        (Some(Expr::Closure(closure)), Some(arity), None) => {
            let declared = parse_arity(&arity)?;
            let actual = closure.inputs.len();
            if declared != actual {
                return Err(syn::Error::new(
                    arity.span(),
                    format!("curry! arity mismatch: closure takes {actual} arguments but arity {declared} was declared"),
                ));
            }
            Ok(CurryInput::Closure {
                closure,
                arity: declared,
            })
        }
        (Some(path @ Expr::Path(_)), None, None) => Err(syn::Error::new(
            path.span(),
            "curry! with a function name requires an arity: curry!(function_name, 2)",
        )),
        (Some(function), Some(arity), None) => Ok(CurryInput::FunctionWithArity {
            arity: parse_arity(&arity)?,
            function,
        }),
        _ => Err(syn::Error::new(
            Span::call_site(),
            "curry! requires a closure or a function name with arity",
        )),
    }
}

pub fn parse_arity(expression: &Expr) -> syn::Result<usize> {
    match expression {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal_integer),
            ..
        }) => literal_integer.base10_parse::<usize>(),
        other => Err(syn::Error::new(
            other.span(),
            "expected an integer literal for arity",
        )),
    }
}

fn generate_nested_closures(argument_count: usize, function_expression: &TokenStream) -> TokenStream {
    let parameters: Vec<Ident> = (0..argument_count)
        .map(|index| format_ident!("__recurry_argument_{}", index))
        .collect();

    match parameters.as_slice() {
        [] => quote! {
            {
                let __recurry_function = #function_expression;
                __recurry_function()
            }
        },
        [only] => quote! {
            {
                let __recurry_function = #function_expression;
                move |#only| __recurry_function(#only)
            }
        },
        _ => {
            let chain = closure_at_level(&parameters, 0);
            quote! {
                {
                    let __recurry_function = ::std::rc::Rc::new(#function_expression);
                    #chain
                }
            }
        }
    }
}

/// The closure receiving `parameters[level]`.
///
/// Every parameter before `level` is already bound to an `Rc` in the
/// enclosing closure. The last level clones them out and calls the function.
fn closure_at_level(parameters: &[Ident], level: usize) -> TokenStream {
    let (received, bound) = (&parameters[level], &parameters[..level]);

    if level + 1 == parameters.len() {
        return quote! {
            move |#received| __recurry_function(
                #(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#bound)),)*
                #received
            )
        };
    }

    let inner = closure_at_level(parameters, level + 1);
    quote! {
        move |#received| {
            let #received = ::std::rc::Rc::new(#received);
            let __recurry_function = ::std::rc::Rc::clone(&__recurry_function);
            #(let #bound = ::std::rc::Rc::clone(&#bound);)*
            #inner
        }
    }
}
