//! Multi-touch rectangle board.
//!
//! Users place up to five fixed-size rectangles over a background image and
//! drag them around with one or more fingers. The crate compiles for the
//! browser (WebAssembly) but keeps all board logic in [`engine::EngineCore`],
//! which has no browser dependencies and is what the tests drive. The host
//! page forwards touch events to [`engine::Engine`] and redraws whenever an
//! [`engine::Action::RenderNeeded`] comes back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine, testable [`engine::EngineCore`], DOM touch translation |
//! | [`rects`] | Rectangle type and the bounded store that owns them |
//! | [`input`] | Touch events, gesture state, pointer bindings |
//! | [`hit`] | Fixed-radius hit testing |
//! | [`render`] | Drawing-surface trait and the 2D-canvas implementation |
//! | [`geom`] | Points and viewport size |
//! | [`config`] | Board configuration and its validation errors |
//! | [`consts`] | Stock board constants (capacity, sizes, fill) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod rects;
pub mod render;
