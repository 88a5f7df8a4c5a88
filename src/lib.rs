pub mod math;
pub mod error;
pub mod axis;
pub mod fractal;
pub mod field;
pub mod contour;
pub mod image;
pub mod config;
pub mod visualizer;

pub use math::C;
pub use error::{FieldError, Result};
pub use axis::{AxisSpec, SampledAxis};
pub use fractal::{EscapeConfig, GridPoint, Recurrence, evaluate};
pub use field::{EscapeField, EscapeSurface, assemble, generate};
pub use contour::ContourLevels;
pub use crate::image::{render_gray, save_png};
pub use config::SceneConfig;
pub use visualizer::show_surface;
