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
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Lit 3D room scene driven by a first-person fly camera.
//!
//! The crate computes everything a renderer needs per frame (camera
//! matrices, per-object model-view-projection transforms, materials and
//! view-space lights) and leaves the actual drawing to a [`FrameSink`].
//!
//! # Key entry points
//!
//! - [`math`] - pure matrix builders (translate, scale, axis-angle rotate,
//!   look-at, perspective)
//! - [`camera::Camera`] - yaw/pitch camera with pull-based recompute
//! - [`camera::FlyController`] - walking, looking and jumping
//! - [`scene::Scene`] - the scene context: objects, lights, camera
//! - [`SceneEngine`] - input + timing + scene, one `tick` per frame
//! - [`options::Options`] - TOML configuration
//!
//! # Frame order
//!
//! Input is folded into a [`input::FrameInput`], applied to the camera by
//! the controller, then [`camera::Camera::recompute`] rebuilds the basis
//! and matrices before [`scene::Scene::build_frame`] reads them. Reading a
//! stale camera is an error, not a silent one-frame lag.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod math;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{Camera, FlyController, FlySettings, Projection};
pub use engine::{FrameSink, SceneEngine};
pub use error::SceneError;
pub use input::{Action, FrameInput, InputEvent, InputProcessor};
pub use options::Options;
pub use scene::{FrameData, Scene};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
