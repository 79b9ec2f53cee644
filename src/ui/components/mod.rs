//! Reusable UI Components
//!
//! - `DialogFrame` - Centered dialog overlay with rounded borders
//! - `InputField` - Text input with focus handling, secret masking, and errors
//! - `StatusIndicator` - Spinner, success, and error indicators

mod dialog_frame;
mod input_field;
mod status_indicator;

pub use dialog_frame::{calculate_total_dialog_height, render_dialog_frame, DialogFrameConfig};
pub use input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
pub use status_indicator::{get_spinner_char, render_status_indicator, StatusIndicatorType};
