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
// Complexity limits
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

//! Camera controller and procedural mesh generation for an OpenGL
//! rendering sandbox.
//!
//! The crate holds the host-side pieces a renderer needs and can test
//! without a GPU: a four-mode camera that produces view and projection
//! matrices, and pure generators that produce interleaved vertex and index
//! buffers ready for upload.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - first-person, third-person, free-flight and orbit
//!   camera, driven by [`camera::CameraCommand`]s
//! - [`mesh::primitives`] - cube, sphere, plane, cylinder, cone, torus and
//!   capsule generators
//! - [`input::InputProcessor`] - raw window events to camera commands
//! - [`scene::MeshLibrary`] / [`scene::Scene`] - shared meshes, placement
//!   and frustum culling
//! - [`lighting::LightManager`] / [`lighting::Material`] - Phong lights and
//!   surfaces packed into uniform-ready arrays
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame loop
//!
//! Window events go through the input processor, which answers discrete
//! actions immediately and reports held movement keys once per frame. The
//! resulting commands mutate the camera; the renderer then reads
//! `view_matrix()` and `projection_matrix()`, culls scene objects against
//! `frustum()` and uploads the light array alongside each object's
//! material.

pub mod camera;
pub mod error;
pub mod input;
pub mod lighting;
pub mod mesh;
pub mod options;
pub mod scene;
pub mod util;
