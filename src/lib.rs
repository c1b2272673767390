extern crate nalgebra_glm as glm;

mod utils;

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod particle;
pub mod renderer;
pub mod surface;

pub use app::ParticleApp;
pub use color::Color;
pub use config::FieldConfig;
pub use error::HostError;
pub use field::{FrameStats, ParticleField};
pub use particle::Particle;
pub use surface::Surface;

use wasm_bindgen::prelude::*;
use web_sys::console;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    // Only the first call installs the logger
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::debug!("console logger installed");
    }
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
