// Browser host for the particle field: owns the field and renderer, forwards
// window resizes and canvas mouse moves into it, and drives it from
// requestAnimationFrame.

use crate::config::FieldConfig;
use crate::error::HostError;
use crate::field::{FrameStats, ParticleField};
use crate::renderer::CanvasRenderer;
use crate::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

struct Host {
    field: ParticleField,
    renderer: CanvasRenderer,
    profile: bool,
    frames: u64,
}

impl Host {
    fn frame(&mut self) -> Result<FrameStats, JsValue> {
        let _timer = if self.profile {
            Some(Timer::new("ParticleField::step"))
        } else {
            None
        };
        self.frames += 1;
        self.field.step(&mut self.renderer)
    }

    fn resize(&mut self, window: &Window) -> Result<(), JsValue> {
        let [width, height] = self.renderer.fit_to_window(window)?;
        self.field.resize(width, height);
        Ok(())
    }
}

#[wasm_bindgen]
pub struct ParticleApp {
    canvas_id: String,
    config: FieldConfig,
    profile: bool,
    host: Option<Rc<RefCell<Host>>>,
}

#[wasm_bindgen]
impl ParticleApp {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> ParticleApp {
        ParticleApp {
            canvas_id: canvas_id.to_owned(),
            config: FieldConfig::default(),
            profile: false,
            host: None,
        }
    }

    pub fn set_particle_count(&mut self, count: u32) {
        self.config.particle_count = count as usize;
    }

    pub fn set_radius_range(&mut self, min_radius: f64, max_radius: f64) {
        self.config.min_radius = min_radius;
        self.config.max_radius = max_radius;
    }

    pub fn set_unique_links(&mut self, unique: bool) {
        self.config.unique_links = unique;
    }

    // Zero or negative removes the cap
    pub fn set_max_speed(&mut self, max_speed: f64) {
        self.config.max_speed = if max_speed > 0.0 { Some(max_speed) } else { None };
    }

    pub fn set_profiling(&mut self, profile: bool) {
        self.profile = profile;
    }

    /// Frames rendered so far, 0 before `start`.
    pub fn frames(&self) -> f64 {
        self.host
            .as_ref()
            .map(|host| host.borrow().frames as f64)
            .unwrap_or(0.0)
    }

    pub fn particle_count(&self) -> u32 {
        self.host
            .as_ref()
            .map(|host| host.borrow().field.particles().len() as u32)
            .unwrap_or(0)
    }

    pub fn bounds(&self) -> Vec<f64> {
        self.host
            .as_ref()
            .map(|host| host.borrow().field.bounds().to_vec())
            .unwrap_or_default()
    }

    /// Last pointer position seen by the field, empty before `start`.
    pub fn pointer(&self) -> Vec<f64> {
        self.host
            .as_ref()
            .map(|host| host.borrow().field.pointer().to_vec())
            .unwrap_or_default()
    }

    // Feed a pointer position directly, in canvas coordinates
    pub fn set_pointer(&self, x: f64, y: f64) {
        if let Some(host) = &self.host {
            host.borrow_mut().field.set_pointer(x, y);
        }
    }

    /// Renders a single frame without waiting for the animation loop.
    pub fn step(&self) -> Result<u32, JsValue> {
        match &self.host {
            Some(host) => Ok(host.borrow_mut().frame()?.links as u32),
            None => Ok(0),
        }
    }

    /// Hooks the field up to the page. Returns `false`, doing nothing, when
    /// the canvas element isn't on the page.
    pub fn start(&mut self) -> Result<bool, JsValue> {
        if self.host.is_some() {
            log::warn!("particle field on #{} already started", self.canvas_id);
            return Ok(true);
        }
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        let canvas = match document.get_element_by_id(&self.canvas_id) {
            Some(element) => element
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| HostError::NotACanvas(self.canvas_id.clone()))?,
            None => {
                log::warn!("no #{} element, particle field disabled", self.canvas_id);
                return Ok(false);
            }
        };

        let renderer = CanvasRenderer::new(canvas.clone())?;
        let bounds = renderer.fit_to_window(&window)?;
        let field = ParticleField::new(bounds, self.config.clone(), &mut rand::thread_rng());
        let host = Rc::new(RefCell::new(Host {
            field,
            renderer,
            profile: self.profile,
            frames: 0,
        }));

        listen_resize(&window, host.clone())?;
        listen_pointer(&canvas, host.clone())?;
        start_frame_loop(host.clone())?;
        log::info!(
            "particle field started on #{} ({}x{}, {} particles)",
            self.canvas_id,
            bounds[0],
            bounds[1],
            self.config.particle_count
        );
        self.host = Some(host);
        Ok(true)
    }
}

fn listen_resize(window: &Window, host: Rc<RefCell<Host>>) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move || {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        if let Err(e) = host.borrow_mut().resize(&window) {
            log::error!("resize failed: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    // Lives as long as the page
    closure.forget();
    Ok(())
}

fn listen_pointer(canvas: &HtmlCanvasElement, host: Rc<RefCell<Host>>) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
        host.borrow_mut()
            .field
            .set_pointer(event.offset_x() as f64, event.offset_y() as f64);
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    let callback: &js_sys::Function = callback.as_ref().unchecked_ref();
    web_sys::window()
        .ok_or(HostError::NoWindow)?
        .request_animation_frame(callback)
}

// Each frame re-registers itself, so frames never overlap and the loop runs
// until the page goes away. A failed frame is logged and the loop carries on.
fn start_frame_loop(host: Rc<RefCell<Host>>) -> Result<(), JsValue> {
    let next: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = next.clone();

    *first.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(e) = host.borrow_mut().frame() {
            log::error!("frame failed: {:?}", e);
        }
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                log::error!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    let scheduled = match first.borrow().as_ref() {
        Some(callback) => request_animation_frame(callback).map(|_| ()),
        None => Ok(()),
    };
    scheduled
}
