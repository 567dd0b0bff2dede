pub mod category_scale;
pub mod layout;
pub mod spline;
pub mod value_scale;

pub use category_scale::CategoryScale;
pub use layout::{ChartArea, LayoutInsets};
pub use spline::{ControlPoints, MAX_CURVE_SEGMENTS, control_points, flatten_cubic, smooth_run};
pub use value_scale::{MAX_TICKS, ValueScale};
