pub mod sheet;
pub mod types;

pub use sheet::load_grades;
pub use types::{GradeRecord, WeightingTable};
