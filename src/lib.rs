//! Interactive hex-grid canvas engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! hex geometry (cube coordinates, pixel-to-hex conversion with correct
//! rounding, polygon-corner generation) and the per-overlay redraw state
//! machines for three stacked canvases: a background lattice, a
//! pointer-trail highlight, and a click-editable terrain height map. The
//! host JavaScript layer is responsible only for wiring DOM events to
//! [`engine::Engine`] and scheduling a `requestAnimationFrame` callback
//! whenever an input method asks for one:
//!
//! ```js
//! const engine = new Engine(gridCanvas, mouseCanvas, mapCanvas);
//! const raf = () => requestAnimationFrame(() => engine.frame());
//!
//! if (engine.resized(innerWidth, innerHeight)) raf();
//! document.addEventListener("mousemove", (e) => {
//!     if (engine.pointer_moved(e.clientX, e.clientY)) raf();
//! });
//! document.addEventListener("click", (e) => {
//!     if (engine.clicked(e.clientX, e.clientY, e.altKey)) raf();
//! });
//! window.onresize = () => {
//!     if (engine.resized(innerWidth, innerHeight)) raf();
//! };
//! ```
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`hex`] | Cube-coordinate [`hex::Hex`] and fractional rounding |
//! | [`layout`] | Orientation matrices and hex/pixel mapping |
//! | [`scene`] | Overlay content: hover trail, height map, grid sweep |
//! | [`input`] | Modifier keys and the frame-coalescing gate |
//! | [`engine`] | Event routing and the testable [`engine::EngineCore`] |
//! | [`render`] | Surface binding and draw-command execution |
//! | [`consts`] | Shared numeric constants (cell size, height clamp, colors) |

pub mod consts;
pub mod engine;
pub mod hex;
pub mod input;
pub mod layout;
pub mod render;
pub mod scene;
