//! Engine: routes input events through the geometry into per-overlay frame
//! gates, and drains the gates into draw-command lists once per scheduled
//! frame.
//!
//! [`EngineCore`] holds all state that doesn't depend on a browser canvas,
//! so event routing, coalescing, and draw-command generation are testable
//! natively. [`Engine`] wraps it with the three bound canvas surfaces and is
//! the type exported to the JavaScript host.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::consts::MOUSE_FILL_COLOR;
use crate::input::{FrameGate, MapFrame, Modifiers, MouseFrame};
use crate::layout::{Layout, Point};
use crate::render::Surface;
use crate::scene::{HeightMap, HexTrail, grid_hexes, terrain_color};

/// A single polygon to put on a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Corner pixels in drawing order; the path closes back to the first.
    pub corners: [Point; 6],
    /// Fill the polygon instead of stroking its outline.
    pub filled: bool,
    /// CSS color; `None` means the surface default.
    pub color: Option<String>,
}

/// Draw-command lists produced by one engine frame.
///
/// Each overlay that had a frame pending gets its full command list; `None`
/// means that overlay is untouched this frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutput {
    /// Background lattice commands, if the grid overlay was pending.
    pub grid: Option<Vec<DrawCommand>>,
    /// Pointer-trail commands, if the mouse overlay was pending.
    pub mouse: Option<Vec<DrawCommand>>,
    /// Terrain commands, if the map overlay was pending.
    pub map: Option<Vec<DrawCommand>>,
}

impl FrameOutput {
    /// Whether no overlay produced commands this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid.is_none() && self.mouse.is_none() && self.map.is_none()
    }
}

/// Core engine state — everything that doesn't depend on a browser canvas.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    /// The shared hex/pixel mapping.
    pub layout: Layout,
    /// Mouse-overlay content.
    pub trail: HexTrail,
    /// Map-overlay content.
    pub terrain: HeightMap,
    grid_gate: FrameGate<()>,
    mouse_gate: FrameGate<MouseFrame>,
    map_gate: FrameGate<MapFrame>,
    viewport_width: f64,
    viewport_height: f64,
    last_pointer: Option<Point>,
}

impl EngineCore {
    /// Fresh engine state for the given layout. The viewport starts at zero;
    /// the host reports real dimensions through [`EngineCore::on_resize`].
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self { layout, ..Self::default() }
    }

    /// Current viewport dimensions as `(width, height)`.
    #[must_use]
    pub fn viewport(&self) -> (f64, f64) {
        (self.viewport_width, self.viewport_height)
    }

    /// The most recent pointer position, tracked so a resize never has to
    /// reach back into a stale input event.
    #[must_use]
    pub fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }

    /// Pointer moved: resolve the hex under it and schedule a mouse-overlay
    /// frame. Returns whether the host should request an animation frame.
    pub fn on_pointer_move(&mut self, at: Point) -> bool {
        self.last_pointer = Some(at);
        let hex = self.layout.pixel_to_hex(at).round();
        self.mouse_gate.schedule(MouseFrame::Track(hex))
    }

    /// Click: resolve the clicked hex and schedule a map edit. A held alt
    /// modifier lowers terrain instead of raising it. Returns whether the
    /// host should request an animation frame.
    pub fn on_click(&mut self, at: Point, modifiers: Modifiers) -> bool {
        self.last_pointer = Some(at);
        let location = self.layout.pixel_to_hex(at).round();
        self.map_gate.schedule(MapFrame::Edit { location, lower: modifiers.alt })
    }

    /// Viewport changed: adopt the new dimensions and schedule a repaint of
    /// every overlay's current state against them. Returns whether the host
    /// should request an animation frame.
    pub fn on_resize(&mut self, width: f64, height: f64) -> bool {
        self.viewport_width = width;
        self.viewport_height = height;
        log::debug!("viewport resized to {width}x{height}");
        let grid = self.grid_gate.schedule(());
        let mouse = self.mouse_gate.schedule(MouseFrame::Repaint);
        let map = self.map_gate.schedule(MapFrame::Repaint);
        grid || mouse || map
    }

    /// Run one display frame: drain each pending gate, apply the mutation it
    /// carried, and emit the owning overlay's full command list. Gates return
    /// to idle, so the next event schedules a fresh frame.
    pub fn frame(&mut self) -> FrameOutput {
        let mut out = FrameOutput::default();
        if self.grid_gate.take().is_some() {
            out.grid = Some(self.grid_commands());
        }
        if let Some(pending) = self.mouse_gate.take() {
            if let MouseFrame::Track(hex) = pending {
                self.trail.track(hex);
            }
            out.mouse = Some(self.mouse_commands());
        }
        if let Some(pending) = self.map_gate.take() {
            if let MapFrame::Edit { location, lower } = pending {
                self.terrain.adjust(location, if lower { -1 } else { 1 });
            }
            out.map = Some(self.map_commands());
        }
        out
    }

    fn grid_commands(&self) -> Vec<DrawCommand> {
        grid_hexes(&self.layout, self.viewport_width, self.viewport_height)
            .into_iter()
            .map(|hex| DrawCommand {
                corners: self.layout.polygon_corners(hex),
                filled: false,
                color: None,
            })
            .collect()
    }

    fn mouse_commands(&self) -> Vec<DrawCommand> {
        self.trail
            .iter()
            .map(|hex| DrawCommand {
                corners: self.layout.polygon_corners(hex),
                filled: true,
                color: Some(MOUSE_FILL_COLOR.to_owned()),
            })
            .collect()
    }

    fn map_commands(&self) -> Vec<DrawCommand> {
        self.terrain
            .iter()
            .map(|cell| DrawCommand {
                corners: self.layout.polygon_corners(cell.location),
                filled: true,
                color: Some(terrain_color(cell.height)),
            })
            .collect()
    }
}

/// The full engine, bound to the three stacked overlay canvases.
///
/// The host wires DOM events to the input methods and calls
/// [`Engine::frame`] from a `requestAnimationFrame` callback whenever an
/// input method returned `true`. See the crate docs for the wiring snippet.
#[wasm_bindgen]
pub struct Engine {
    grid: Surface,
    mouse: Surface,
    map: Surface,
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Bind the three overlay canvases: the background lattice, the pointer
    /// trail, and the editable terrain.
    ///
    /// Also installs the panic hook and console logger; a second engine on
    /// the same page skips re-initialising them.
    ///
    /// # Errors
    ///
    /// Fails if any canvas cannot provide a 2d drawing context.
    #[wasm_bindgen(constructor)]
    pub fn new(
        grid: HtmlCanvasElement,
        mouse: HtmlCanvasElement,
        map: HtmlCanvasElement,
    ) -> Result<Engine, JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::debug!("console logger already initialised");
        }
        let engine = Self {
            grid: Surface::bind(grid)?,
            mouse: Surface::bind(mouse)?,
            map: Surface::bind(map)?,
            core: EngineCore::new(Layout::default()),
        };
        log::info!("hexgrid engine bound to overlay canvases");
        Ok(engine)
    }

    /// Pointer-move event in canvas pixels. `true` asks the host to request
    /// an animation frame.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        self.core.on_pointer_move(Point::new(x, y))
    }

    /// Click event in canvas pixels. `alt` lowers terrain instead of raising
    /// it. `true` asks the host to request an animation frame.
    pub fn clicked(&mut self, x: f64, y: f64, alt: bool) -> bool {
        self.core
            .on_click(Point::new(x, y), Modifiers { alt, ..Modifiers::default() })
    }

    /// Viewport-resize event (also used to report the initial size). `true`
    /// asks the host to request an animation frame.
    pub fn resized(&mut self, width: f64, height: f64) -> bool {
        self.core.on_resize(width, height)
    }

    /// Run one display frame: repaint every overlay with a pending redraw.
    /// Resetting a surface to the viewport size clears it, so each repaint
    /// starts from a blank canvas.
    pub fn frame(&mut self) {
        let (width, height) = self.core.viewport();
        let output = self.core.frame();
        if let Some(commands) = output.grid {
            self.grid.reset(width, height);
            self.grid.draw(&commands);
        }
        if let Some(commands) = output.mouse {
            self.mouse.reset(width, height);
            self.mouse.draw(&commands);
        }
        if let Some(commands) = output.map {
            self.map.reset(width, height);
            self.map.draw(&commands);
        }
    }
}
