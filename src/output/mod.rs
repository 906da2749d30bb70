pub mod formatter;

pub use formatter::{
    format_grade, format_grade_list, format_prediction, format_score_report, format_subjects,
    should_use_colors, to_json,
};
