pub mod arc;
pub mod path;
pub mod polar;
pub mod smooth;
pub mod types;

pub use arc::{
    ArcSpec, FULL_TURN_DEG, MAX_SWEEP_DEG, TickLine, arc_path, circle_path, gauge_tick_lines,
    normalized_sweep_deg, ring_segment_path, scale_label_angles,
};
pub use path::{Path, PathCommand};
pub use polar::point_on_circle;
pub use smooth::{
    DEFAULT_TENSION, append_baseline_closure, curve_through, normalize_samples, smooth_path,
};
pub use types::{Point, Viewport};
