pub mod formatter;

pub use formatter::{
    format_grid, format_json, format_result, format_validation_failure, should_use_colors,
    should_use_colors_on_stderr,
};
