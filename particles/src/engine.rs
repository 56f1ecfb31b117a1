//! Browser host for a particle field: canvas lookup, listeners, frame loop.
//!
//! ARCHITECTURE
//! ============
//! [`ParticleField`] is a cheap, clonable handle. At most one run is active per
//! handle. A run owns the canvas, its 2D context, the pointer listeners and the
//! `requestAnimationFrame` closure; the simulation itself lives in a shared
//! [`FieldCore`]. The decision of whether a call to
//! [`ParticleField::try_initialize`] may start a run is the pure
//! [`plan_start`], so it is covered by native tests.
//!
//! LIFECYCLE
//! =========
//! Each frame first checks that the run was not stopped and that the canvas
//! is still connected to the document. Once either fails, the run detaches
//! its listeners and frees the slot so a later canvas can start a fresh run.
//!
//! The frame closure is only ever dropped from inside its own callback. A
//! frame is always scheduled while a run is alive, so stopping a run from
//! outside only raises a flag; the next frame sees it and releases the
//! closure.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent};

use crate::config::FieldConfig;
use crate::field::FieldCore;
use crate::particle::Point;
use crate::render;

/// What [`ParticleField::try_initialize`] should do given the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPlan {
    /// A run is active on a connected canvas; leave it alone.
    Keep,
    /// No canvas yet; not an error.
    Wait,
    /// No run is active and a canvas is present.
    Start,
    /// The active run's canvas was detached and a new canvas is present.
    Restart,
}

/// Decide whether to start a run.
///
/// `active` is `None` when no run exists, otherwise whether the running
/// canvas is still connected. `canvas_found` reports the id lookup.
#[must_use]
pub fn plan_start(active: Option<bool>, canvas_found: bool) -> StartPlan {
    match (active, canvas_found) {
        (Some(true), _) => StartPlan::Keep,
        (Some(false), true) => StartPlan::Restart,
        (None, true) => StartPlan::Start,
        (_, false) => StartPlan::Wait,
    }
}

/// Outcome of the check at the top of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameStep {
    /// Step and draw, then schedule the next frame.
    Draw,
    /// The run was stopped from outside; nothing left to do.
    Stopped,
    /// The canvas left the document; the run must free its slot.
    Detached,
}

/// The scheduled frame closure plus its stop flag.
///
/// Shared by a run and the closure it schedules. Generic over the closure
/// type so the release rules are testable without a browser.
struct FrameLoop<C> {
    callback: Rc<RefCell<Option<C>>>,
    stopped: Rc<Cell<bool>>,
}

impl<C> Clone for FrameLoop<C> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
            stopped: Rc::clone(&self.stopped),
        }
    }
}

impl<C> FrameLoop<C> {
    fn new() -> Self {
        Self {
            callback: Rc::new(RefCell::new(None)),
            stopped: Rc::new(Cell::new(false)),
        }
    }

    fn install(&self, callback: C) {
        *self.callback.borrow_mut() = Some(callback);
    }

    /// Ask the loop to end. The closure stays alive for the frame already
    /// scheduled.
    fn stop(&self) {
        self.stopped.set(true);
    }

    /// Called first thing in every frame, from inside the callback.
    ///
    /// Releases the closure whenever the loop ends, which breaks its
    /// self-reference.
    fn begin_frame(&self, canvas_connected: bool) -> FrameStep {
        let step = if self.stopped.get() {
            FrameStep::Stopped
        } else if canvas_connected {
            FrameStep::Draw
        } else {
            FrameStep::Detached
        };
        if step != FrameStep::Draw {
            self.stopped.set(true);
            self.callback.borrow_mut().take();
        }
        step
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;
type MouseCallback = Closure<dyn FnMut(MouseEvent)>;

struct Listener {
    event: &'static str,
    callback: MouseCallback,
}

/// One animation run bound to one canvas element.
struct Run {
    id: u64,
    canvas: HtmlCanvasElement,
    listeners: Vec<Listener>,
    frames: FrameLoop<FrameCallback>,
}

impl Run {
    fn is_connected(&self) -> bool {
        self.canvas.is_connected()
    }

    /// Detach listeners and stop the frame loop.
    ///
    /// The frame closure is left in place: a frame is still scheduled and
    /// releases it when it runs.
    fn teardown(self) {
        self.frames.stop();
        for listener in &self.listeners {
            if let Err(e) = self.canvas.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            ) {
                log::warn!(
                    "particles: failed to detach {} listener: {e:?}",
                    listener.event
                );
            }
        }
    }
}

#[derive(Default)]
struct Slot {
    run: Option<Run>,
    next_id: u64,
}

/// Handle to the decorative particle background.
#[derive(Clone)]
pub struct ParticleField {
    config: Rc<FieldConfig>,
    slot: Rc<RefCell<Slot>>,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl ParticleField {
    #[must_use]
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config: Rc::new(config),
            slot: Rc::new(RefCell::new(Slot::default())),
        }
    }

    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Whether a run is active on a canvas that is still in the document.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.slot
            .borrow()
            .run
            .as_ref()
            .is_some_and(Run::is_connected)
    }

    /// Start animating the configured canvas if it exists and no run is active.
    ///
    /// Safe to call any number of times; returns `true` only when a new run
    /// was started.
    pub fn try_initialize(&self) -> bool {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let found = document
            .get_element_by_id(&self.config.canvas_id)
            .and_then(as_canvas);

        let active = self.slot.borrow().run.as_ref().map(Run::is_connected);
        match (plan_start(active, found.is_some()), found) {
            (StartPlan::Start | StartPlan::Restart, Some(canvas)) => {
                self.stop();
                match self.start(canvas) {
                    Ok(()) => true,
                    Err(e) => {
                        log::warn!("particles: failed to start: {e:?}");
                        false
                    }
                }
            }
            _ => false,
        }
    }

    /// Stop the active run, if any.
    pub fn stop(&self) {
        let run = self.slot.borrow_mut().run.take();
        if let Some(run) = run {
            run.teardown();
        }
    }

    fn start(&self, canvas: HtmlCanvasElement) -> Result<(), wasm_bindgen::JsValue> {
        let width = self.config.resolve_width(canvas.offset_width());
        let height = self.config.height;
        canvas.set_width(whole_pixels(width));
        canvas.set_height(whole_pixels(height));

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut rng = SmallRng::seed_from_u64(random_seed());
        let core = Rc::new(RefCell::new(FieldCore::new(
            &self.config,
            width,
            height,
            &mut rng,
        )));

        let listeners = attach_pointer_listeners(&canvas, &core)?;

        let id = {
            let mut slot = self.slot.borrow_mut();
            slot.next_id += 1;
            slot.next_id
        };
        let frames = FrameLoop::new();
        frames.install(frame_callback(
            id,
            canvas.clone(),
            ctx,
            core,
            frames.clone(),
            Rc::clone(&self.slot),
        ));

        self.slot.borrow_mut().run = Some(Run {
            id,
            canvas,
            listeners,
            frames: frames.clone(),
        });
        log::info!(
            "Particles initialized ({width}x{height}, {} particles)",
            self.config.particle_count
        );

        request_frame(&frames);
        Ok(())
    }
}

fn as_canvas(el: Element) -> Option<HtmlCanvasElement> {
    match el.dyn_into::<HtmlCanvasElement>() {
        Ok(canvas) => Some(canvas),
        Err(el) => {
            log::warn!("particles: #{} is not a canvas element", el.id());
            None
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_pixels(v: f64) -> u32 {
    v.max(0.0).round() as u32
}

fn random_seed() -> u64 {
    js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits()
}

fn attach_pointer_listeners(
    canvas: &HtmlCanvasElement,
    core: &Rc<RefCell<FieldCore>>,
) -> Result<Vec<Listener>, wasm_bindgen::JsValue> {
    let move_core = Rc::clone(core);
    let move_canvas = canvas.clone();
    let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
        let rect = move_canvas.get_bounding_client_rect();
        let at = Point::new(
            f64::from(event.client_x()) - rect.left(),
            f64::from(event.client_y()) - rect.top(),
        );
        move_core.borrow_mut().pointer_moved(at);
    }) as Box<dyn FnMut(MouseEvent)>);

    let leave_core = Rc::clone(core);
    let on_leave = Closure::wrap(Box::new(move |_event: MouseEvent| {
        leave_core.borrow_mut().pointer_left();
    }) as Box<dyn FnMut(MouseEvent)>);

    let listeners = vec![
        Listener {
            event: "mousemove",
            callback: on_move,
        },
        Listener {
            event: "mouseleave",
            callback: on_leave,
        },
    ];
    for listener in &listeners {
        canvas.add_event_listener_with_callback(
            listener.event,
            listener.callback.as_ref().unchecked_ref(),
        )?;
    }
    Ok(listeners)
}

fn frame_callback(
    id: u64,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    core: Rc<RefCell<FieldCore>>,
    frames: FrameLoop<FrameCallback>,
    slot: Rc<RefCell<Slot>>,
) -> FrameCallback {
    Closure::wrap(Box::new(move |_ts: f64| {
        match frames.begin_frame(canvas.is_connected()) {
            FrameStep::Draw => {}
            FrameStep::Stopped => return,
            FrameStep::Detached => {
                let run = {
                    let mut slot = slot.borrow_mut();
                    if slot.run.as_ref().is_some_and(|run| run.id == id) {
                        slot.run.take()
                    } else {
                        None
                    }
                };
                if let Some(run) = run {
                    run.teardown();
                }
                log::debug!("particles: canvas detached, run {id} stopped");
                return;
            }
        }

        core.borrow_mut().step();
        if let Err(e) = render::draw(&ctx, &core.borrow()) {
            log::warn!("particles: draw failed: {e:?}");
        }
        request_frame(&frames);
    }) as Box<dyn FnMut(f64)>)
}

fn request_frame(frames: &FrameLoop<FrameCallback>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = frames.callback.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            log::warn!("particles: requestAnimationFrame failed: {e:?}");
        }
    }
}
