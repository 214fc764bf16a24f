use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ResizeObserver, Window};

use super::canvas::WebCanvas;
use crate::animation::{Activation, FrameOutcome, HelixAnimation, Motion, StartupProbe};
use crate::config::HelixConfig;
use crate::error::HelixError;
use crate::surface::Surface;

struct Mounted {
    window: Window,
    animation: HelixAnimation,
    canvas: WebCanvas,
    pending_frame: Option<i32>,
    observer: Option<ResizeObserver>,
}

/// A live helix. Dropping the handle does not stop it; call
/// [`HelixHandle::teardown`].
pub struct HelixHandle {
    inner: Rc<RefCell<Mounted>>,
}

impl HelixHandle {
    /// Cancel the pending frame and stop observing resizes. Safe to call
    /// any number of times.
    pub fn teardown(&self) {
        teardown(&self.inner);
    }

    /// `true` until torn down, including after a reduced-motion helix has
    /// drawn its only frame.
    pub fn is_mounted(&self) -> bool {
        !self.inner.borrow().animation.is_torn_down()
    }
}

fn teardown(inner: &Rc<RefCell<Mounted>>) {
    let mut mounted = inner.borrow_mut();
    if !mounted.animation.teardown() {
        return;
    }
    if let Some(id) = mounted.pending_frame.take() {
        if let Err(e) = mounted.window.cancel_animation_frame(id) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
    if let Some(observer) = mounted.observer.take() {
        observer.disconnect();
    }
    log::info!("helix torn down");
}

fn media_matches(window: &Window, query: &str) -> Result<bool, HelixError> {
    Ok(window
        .match_media(query)?
        .map(|list| list.matches())
        .unwrap_or(false))
}

/// Current logical box of the canvas and the device pixel ratio.
fn measure(window: &Window, canvas: &HtmlCanvasElement) -> Surface {
    let rect = canvas.get_bounding_client_rect();
    let dpr = match window.device_pixel_ratio() {
        r if r > 0.0 => r,
        _ => 1.0,
    };
    Surface::new(rect.width(), rect.height(), dpr)
}

/// Attach the helix to the canvas named in `config`. Returns `Ok(None)` when
/// the page has no such canvas or the viewport is too narrow.
pub fn mount(config: &HelixConfig) -> Result<Option<HelixHandle>, HelixError> {
    let window = web_sys::window().ok_or(HelixError::NoWindow)?;
    let document = window.document().ok_or(HelixError::NoDocument)?;

    let canvas = document
        .get_element_by_id(&config.canvas_id)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());

    let probe = StartupProbe {
        has_mount: canvas.is_some(),
        narrow_screen: media_matches(&window, &config.narrow_screen_query)?,
        reduced_motion: media_matches(&window, &config.reduced_motion_query)?,
    };
    let motion = match Activation::decide(probe) {
        Activation::Skip(reason) => {
            log::debug!("helix not mounted: {:?}", reason);
            return Ok(None);
        }
        Activation::StaticFrame => Motion::Static,
        Activation::Animate => Motion::Animate,
    };
    let Some(canvas) = canvas else {
        return Ok(None);
    };

    start(window, canvas, motion).map(Some)
}

/// Size the surface and kick off the frame loop, resize observer and
/// unload hook.
fn start(
    window: Window,
    canvas: HtmlCanvasElement,
    motion: Motion,
) -> Result<HelixHandle, HelixError> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(HelixError::ContextUnavailable)?
        .dyn_into()
        .map_err(|_| HelixError::ContextUnavailable)?;

    let surface = measure(&window, &canvas);
    let mut canvas = WebCanvas::new(canvas, ctx);
    surface.apply(&mut canvas);

    let started_at = window.performance().map(|p| p.now()).unwrap_or(0.0);
    log::info!(
        "helix mounted: {:?}, physical {:?} @ {}",
        motion,
        surface.physical_size(),
        surface.scale()
    );

    let inner = Rc::new(RefCell::new(Mounted {
        window: window.clone(),
        animation: HelixAnimation::new(surface, motion, started_at),
        canvas,
        pending_frame: None,
        observer: None,
    }));

    // Animation loop
    // `f` holds the animation-frame closure so it can re-register itself
    // with `request_animation_frame` from inside its own body.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    {
        let inner = inner.clone();
        let window = window.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            let mut mounted = inner.borrow_mut();
            mounted.pending_frame = None;
            let measured = measure(&window, &mounted.canvas.element);
            let Mounted {
                animation, canvas, ..
            } = &mut *mounted;
            if animation.frame(canvas, measured, now) != FrameOutcome::Reschedule {
                return;
            }
            if let Some(cb) = f.borrow().as_ref() {
                match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => mounted.pending_frame = Some(id),
                    Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
                }
            }
        }) as Box<dyn FnMut(f64)>));
    }
    if let Some(cb) = g.borrow().as_ref() {
        let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        inner.borrow_mut().pending_frame = Some(id);
    }

    // Resize observer on the wrapper element
    let resize_closure = {
        let inner = inner.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            let mut mounted = inner.borrow_mut();
            let surface = measure(&window, &mounted.canvas.element);
            let Mounted {
                animation, canvas, ..
            } = &mut *mounted;
            animation.resize(canvas, surface);
        }) as Box<dyn FnMut()>)
    };
    let observer = ResizeObserver::new(resize_closure.as_ref().unchecked_ref())?;
    {
        let mounted = inner.borrow();
        match mounted.canvas.element.parent_element() {
            Some(parent) => observer.observe(&parent),
            None => observer.observe(&mounted.canvas.element),
        }
    }
    inner.borrow_mut().observer = Some(observer);
    resize_closure.forget();

    // Cleanup on unload
    let unload_closure = {
        let inner = inner.clone();
        Closure::wrap(Box::new(move || teardown(&inner)) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback(
        "beforeunload",
        unload_closure.as_ref().unchecked_ref(),
    )?;
    unload_closure.forget();

    Ok(HelixHandle { inner })
}
