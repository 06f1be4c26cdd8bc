pub mod abacus;
pub mod bead;
pub mod camera;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod interaction;
pub mod keys;
pub mod layout;
pub mod mesh;
pub mod scene;
pub mod value;

pub use abacus::*;
pub use bead::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use controller::{Bounds, Neighbors, Snap};
pub use error::*;
pub use interaction::*;
pub use keys::*;
pub use layout::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
