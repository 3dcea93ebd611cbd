//! Advent of Code Solver Library
//!
//! A flexible and type-safe framework for solving Advent of Code puzzles across multiple years and days.
//! Each puzzle is implemented as a solver with custom input parsing and can produce results
//! for multiple parts.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers
//! - Compile-time checked per-part implementations via const generics
//! - Type-safe parsing and result handling
//! - A registry system for managing multiple solvers
//! - Parse and solve timing on every instance
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{AdventParser, ParseError, PartSolver, RegistryBuilder, SolveError, register_solver};
//!
//! // Define a solver
//! pub struct MyDay1;
//!
//! impl AdventParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! // Generate the Solver dispatch impl by hand or with #[derive(AdventSolver)]
//! impl advent_solver::Solver for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(
//!         shared: &mut Self::SharedData<'_>,
//!         part: u8,
//!     ) -> Result<String, SolveError> {
//!         match part {
//!             1 => <Self as PartSolver<1>>::solve(shared),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! // Use the solver with builder pattern
//! let mut builder = RegistryBuilder::new();
//! register_solver!(builder, MyDay1, 2023, 1);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! let answer = solver.solve(1).unwrap();
//! assert_eq!(answer.answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Parser and Part Traits
//!
//! The [`AdventParser`] trait defines the shared data type (`SharedData<'a>`)
//! and how raw input becomes it. Each part is a [`PartSolver<N>`] impl; the
//! [`Solver`] trait ties them together with a `PARTS` count and a dispatch
//! method, normally generated by `#[derive(AdventSolver)]`.
//!
//! ## DynSolver Trait
//!
//! The [`DynSolver`] trait provides type erasure for working with different solver types uniformly.
//! `solve(part)` computes the answer with timing; parse timing is captured at
//! construction.
//!
//! ## Plugin System and Derive Macros
//!
//! Use `#[derive(AutoRegisterSolver)]` to automatically register solvers:
//! ```ignore
//! #[derive(AdventSolver, AutoRegisterSolver)]
//! #[advent_solver(max_parts = 2)]
//! #[advent(year = 2023, day = 1, tags = ["easy"])]
//! struct Day1Solver;
//! ```

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
    SolverStorage,
};
pub use solver::{AdventParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
