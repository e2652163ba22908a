// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Step-driven 3D animation engine for array-algorithm visualizations.
//!
//! Algoviz turns a trace of declarative steps (array contents, highlighted
//! indices, pointers, swaps, sliding windows) into a scene of visual
//! entities plus the tweens that animate the transition between steps.
//!
//! # Key entry points
//!
//! - [`engine::VisualizationEngine`] - routes steps to the family
//!   visualizers and advances their animations
//! - [`animation::TweenScheduler`] - active/delayed tween queues on one
//!   clock
//! - [`scene::Scene`] - the entity container reconcilers attach to
//! - [`step::StepFile`] - JSON trace loading and family classification
//! - [`options::Options`] - runtime configuration (layout, colors, motion,
//!   playback)
//!
//! # Architecture
//!
//! Each algorithm family (pointer, sorting, sliding window) has its own
//! visualizer owning its entities and its own scheduler. Every step fully
//! disposes and rebuilds that family's entities, releasing their graphics
//! resources first, then queues entrance and feedback tweens. The caller
//! drives a single clock through [`engine::VisualizationEngine::advance`]
//! once per frame; a rendering layer reads entity transforms and materials
//! from the scene.

pub mod animation;
pub mod engine;
pub mod error;
pub mod options;
pub mod player;
pub mod scene;
pub mod step;
pub mod util;
