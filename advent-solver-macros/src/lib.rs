//! Procedural macros for the advent-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, LitInt, parse_macro_input};

/// Derive macro generating the `Solver` dispatch impl from `PartSolver` impls
///
/// Reads the maximum part count from the `#[advent_solver(max_parts = N)]`
/// attribute and generates a `Solver` impl whose `solve_part` dispatches each
/// part number to the matching `PartSolver<N>` implementation.
///
/// # Requirements
///
/// The type must implement `AdventParser` and `PartSolver<N>` for every
/// `N` in `1..=max_parts`; a missing part impl is a compile-time error at
/// the generated dispatch arm.
///
/// # Example
///
/// ```ignore
/// use advent_solver::{AdventParser, ParseError, PartSolver, SolveError};
/// use advent_solver_macros::AdventSolver;
///
/// #[derive(AdventSolver)]
/// #[advent_solver(max_parts = 2)]
/// struct Day1Solver;
///
/// impl AdventParser for Day1Solver { /* ... */ }
/// impl PartSolver<1> for Day1Solver { /* ... */ }
/// impl PartSolver<2> for Day1Solver { /* ... */ }
/// ```
#[proc_macro_derive(AdventSolver, attributes(advent_solver))]
pub fn derive_advent_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    // Find the #[advent_solver(...)] attribute
    let solver_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("advent_solver"))
        .expect("AdventSolver derive macro requires #[advent_solver(...)] attribute");

    let mut max_parts: Option<u8> = None;

    solver_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("max_parts") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    max_parts = Some(lit_int.base10_parse()?);
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[advent_solver(...)] attribute");

    let max_parts = max_parts.expect("Missing required 'max_parts' attribute");

    // One dispatch arm per part, each bound to its PartSolver impl
    let arms = (1..=max_parts).map(|n| {
        let part = LitInt::new(&n.to_string(), proc_macro2::Span::call_site());
        quote! {
            #part => <Self as ::advent_solver::PartSolver<#part>>::solve(shared),
        }
    });
    let parts_lit = LitInt::new(&max_parts.to_string(), proc_macro2::Span::call_site());

    let expanded = quote! {
        impl ::advent_solver::Solver for #name {
            const PARTS: u8 = #parts_lit;

            fn solve_part(
                shared: &mut Self::SharedData<'_>,
                part: u8,
            ) -> ::std::result::Result<::std::string::String, ::advent_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::std::result::Result::Err(
                        ::advent_solver::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// This macro generates the necessary code to register a solver with the inventory
/// system, allowing it to be discovered and registered automatically.
///
/// # Attributes
///
/// - `year`: Required. The puzzle year (e.g., 2021)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["easy", "parsing"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If the trait is not implemented,
/// you will get a clear compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
///   |
///   | struct YourSolver;
///   |        ^^^^^^^^^^ unsatisfied trait bound
///   |
/// help: the trait `Solver` is not implemented for `YourSolver`
/// ```
///
/// # Example
///
/// ```ignore
/// use advent_solver::{AdventParser, ParseError, SolveError, Solver};
/// use advent_solver_macros::AutoRegisterSolver;
///
/// #[derive(AutoRegisterSolver)]
/// #[advent(year = 2021, day = 1, tags = ["easy", "parsing"])]
/// struct Day1Solver;
///
/// impl Solver for Day1Solver {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(advent))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // Extract the struct name
    let name = &input.ident;

    // Find the #[advent(...)] attribute
    let advent_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("advent"))
        .expect("AutoRegisterSolver derive macro requires #[advent(...)] attribute");

    // Parse the attribute arguments
    let mut year: Option<u32> = None;
    let mut day: Option<u32> = None;
    let mut tags: Vec<String> = Vec::new();

    // Parse nested meta items
    advent_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("year") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    year = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("day") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    day = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("tags") {
                // Parse array of string literals: tags = ["a", "b"]
                let _ = meta.value()?; // Consume the '='
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    let lit: Lit = content.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        tags.push(lit_str.value());
                    }
                    // Skip comma if present
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[advent(...)] attribute");

    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");
    let year = LitInt::new(&format!("{}u16", year), proc_macro2::Span::call_site());
    let day = LitInt::new(&format!("{}u8", day), proc_macro2::Span::call_site());

    // Generate the tags array
    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    // Generate the code with a compile-time trait bound check
    let expanded = quote! {
        // Compile-time check that the type implements Solver trait
        // This generates a helpful error message if the trait is not implemented
        const _: () = {
            // Custom trait to provide a better error message
            trait MustImplementSolver: ::advent_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::advent_solver::inventory::submit! {
            ::advent_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
