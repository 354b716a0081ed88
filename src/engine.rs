use tracing::{debug, trace, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, TouchList};

use crate::config::{BoardConfig, ConfigError};
use crate::geom::Viewport;
use crate::hit;
use crate::input::{GestureState, PointerBindings, PointerId, PointerSample, TouchEvent};
use crate::rects::{RectId, RectStore, Rectangle};
use crate::render::{self, CanvasSurface, Surface};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from touch handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A rectangle was added to the board.
    RectCreated(Rectangle),
    /// The board was full and every rectangle was dropped before an insert.
    BoardCleared { evicted: usize },
    /// Board state changed; the host should schedule a redraw.
    RenderNeeded,
}

/// Core engine state: everything that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub rects: RectStore,
    pub bindings: PointerBindings,
    pub gesture: GestureState,
    pub viewport: Viewport,
    config: BoardConfig,
}

impl Default for EngineCore {
    fn default() -> Self {
        let config = BoardConfig::default();
        Self {
            rects: RectStore::with_capacity(config.capacity),
            bindings: PointerBindings::new(),
            gesture: GestureState::Idle,
            viewport: Viewport::default(),
            config,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a core from a caller-supplied config.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` describes an unusable board.
    pub fn with_config(config: BoardConfig) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            warn!(error = %e, "rejected board config");
            return Err(e);
        }
        Ok(Self { rects: RectStore::with_capacity(config.capacity), config, ..Self::default() })
    }

    // --- Viewport ---

    /// Record the measured size of the hosting element.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    // --- Touch input ---

    /// Apply one touch event and report what changed.
    pub fn handle_touch(&mut self, event: TouchEvent) -> Vec<Action> {
        match event {
            TouchEvent::PrimaryDown(sample) => self.on_primary_down(sample),
            TouchEvent::SecondaryDown(sample) => self.on_secondary_down(sample),
            TouchEvent::Move(samples) => self.on_move(&samples),
            TouchEvent::PrimaryUp(_) => self.on_primary_up(),
            TouchEvent::SecondaryUp(sample) => self.on_secondary_up(sample.id),
            TouchEvent::Cancel => self.on_cancel(),
        }
    }

    fn on_primary_down(&mut self, sample: PointerSample) -> Vec<Action> {
        self.reset_bindings();
        self.gesture = GestureState::Active { primary: sample.id };

        let mut actions = Vec::new();
        self.grab(sample, &mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    fn on_secondary_down(&mut self, sample: PointerSample) -> Vec<Action> {
        debug!(pointer = sample.id, "pointer down");
        if !self.gesture.is_active() {
            self.gesture = GestureState::Active { primary: sample.id };
        }

        let mut actions = Vec::new();
        self.grab(sample, &mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    fn on_move(&mut self, samples: &[PointerSample]) -> Vec<Action> {
        trace!(pointers = samples.len(), "move");
        for sample in samples {
            let Some(id) = self.bindings.get(sample.id) else {
                continue;
            };
            if !self.rects.move_to(&id, sample.point.truncated()) {
                trace!(pointer = sample.id, "bound rectangle was evicted");
            }
        }
        vec![Action::RenderNeeded]
    }

    fn on_primary_up(&mut self) -> Vec<Action> {
        self.reset_bindings();
        self.gesture = GestureState::Idle;
        vec![Action::RenderNeeded]
    }

    fn on_secondary_up(&mut self, pointer: PointerId) -> Vec<Action> {
        self.bindings.release(pointer);
        vec![Action::RenderNeeded]
    }

    fn on_cancel(&mut self) -> Vec<Action> {
        trace!("gesture cancelled");
        self.gesture = GestureState::Idle;
        Vec::new()
    }

    /// Find or create the rectangle under `sample`, snap it under the pointer,
    /// and bind the pointer to it.
    fn grab(&mut self, sample: PointerSample, actions: &mut Vec<Action>) {
        let pt = sample.point.truncated();
        let id = match hit::hit_test(pt, &self.rects, self.config.hit_radius) {
            Some(id) => id,
            None => {
                let rect = Rectangle::centered(pt, self.config.rect_size);
                let inserted = self.rects.insert(rect.clone());
                if inserted.evicted > 0 {
                    debug!(evicted = inserted.evicted, "board full, cleared all rectangles");
                    actions.push(Action::BoardCleared { evicted: inserted.evicted });
                }
                debug!(id = %rect.id, x = rect.x, y = rect.y, "added rectangle");
                actions.push(Action::RectCreated(rect));
                inserted.id
            }
        };

        if let Some(rect) = self.rects.get_mut(&id) {
            rect.x = pt.x;
            rect.y = pt.y;
            rect.length = self.config.rect_size;
            rect.width = self.config.rect_size;
        }
        self.bindings.bind(sample.id, id);
    }

    fn reset_bindings(&mut self) {
        trace!(count = self.bindings.len(), "clearing pointer bindings");
        self.bindings.clear();
    }

    // --- Render ---

    /// Draw the current board to `surface`.
    ///
    /// # Errors
    ///
    /// Propagates the first surface error.
    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::draw(surface, &self.rects, self.viewport, &self.config.fill)
    }

    // --- Queries ---

    /// The rectangle a pointer is dragging, if it is bound to one still on the board.
    #[must_use]
    pub fn bound_rect(&self, pointer: PointerId) -> Option<&Rectangle> {
        self.bindings.get(pointer).and_then(|id| self.rects.get(&id))
    }

    /// Look up a rectangle by id.
    #[must_use]
    pub fn rect(&self, id: &RectId) -> Option<&Rectangle> {
        self.rects.get(id)
    }

    /// The active board config.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }
}

// =============================================================
// DOM touch translation
// =============================================================

/// Map the changed touches of a `touchstart` to board events.
///
/// When the changed touches are all the touches on the surface a new gesture
/// starts: the first becomes the primary pointer. Otherwise every changed touch
/// joins the running gesture.
#[must_use]
pub fn start_events(changed: &[PointerSample], active: u32) -> Vec<TouchEvent> {
    let starts_gesture = usize::try_from(active).map_or(false, |n| n == changed.len());
    changed
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            if starts_gesture && i == 0 {
                TouchEvent::PrimaryDown(s)
            } else {
                TouchEvent::SecondaryDown(s)
            }
        })
        .collect()
}

/// Map the changed touches of a `touchend` to board events.
///
/// `remaining` is the number of touches still on the surface. The last touch
/// to leave ends the gesture.
#[must_use]
pub fn end_events(changed: &[PointerSample], remaining: u32) -> Vec<TouchEvent> {
    let last = changed.len().saturating_sub(1);
    changed
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            if remaining == 0 && i == last {
                TouchEvent::PrimaryUp(s)
            } else {
                TouchEvent::SecondaryUp(s)
            }
        })
        .collect()
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser elements.
pub struct Engine {
    canvas: HtmlCanvasElement,
    background: HtmlImageElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas and decoded background image.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, background: HtmlImageElement) -> Self {
        Self { canvas, background, core: EngineCore::new() }
    }

    /// Create an engine with a caller-supplied config.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is unusable.
    pub fn with_config(
        canvas: HtmlCanvasElement,
        background: HtmlImageElement,
        config: BoardConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self { canvas, background, core: EngineCore::with_config(config)? })
    }

    // --- Viewport ---

    /// Update viewport dimensions after layout.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.core.set_viewport(width, height);
    }

    // --- Input events ---

    pub fn on_touch_start(&mut self, event: &web_sys::TouchEvent) -> Vec<Action> {
        let changed = self.samples(&event.changed_touches());
        self.dispatch(start_events(&changed, event.touches().length()))
    }

    pub fn on_touch_move(&mut self, event: &web_sys::TouchEvent) -> Vec<Action> {
        let active = self.samples(&event.touches());
        self.core.handle_touch(TouchEvent::Move(active))
    }

    pub fn on_touch_end(&mut self, event: &web_sys::TouchEvent) -> Vec<Action> {
        let changed = self.samples(&event.changed_touches());
        self.dispatch(end_events(&changed, event.touches().length()))
    }

    pub fn on_touch_cancel(&mut self, _event: &web_sys::TouchEvent) -> Vec<Action> {
        self.core.handle_touch(TouchEvent::Cancel)
    }

    fn dispatch(&mut self, events: Vec<TouchEvent>) -> Vec<Action> {
        let mut actions = Vec::new();
        for event in events {
            for action in self.core.handle_touch(event) {
                if action != Action::RenderNeeded || !actions.contains(&Action::RenderNeeded) {
                    actions.push(action);
                }
            }
        }
        actions
    }

    /// Touch positions relative to the canvas origin.
    fn samples(&self, list: &TouchList) -> Vec<PointerSample> {
        let origin = self.canvas.get_bounding_client_rect();
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(|t| {
                PointerSample::new(
                    t.identifier(),
                    f64::from(t.client_x()) - origin.left(),
                    f64::from(t.client_y()) - origin.top(),
                )
            })
            .collect()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or any draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let mut surface = CanvasSurface::new(&ctx, &self.background);
        self.core.render(&mut surface)
    }
}
