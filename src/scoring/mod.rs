pub mod composite;
pub mod error;
pub mod prediction;
pub mod simulation;
pub mod subjects;
pub mod vocabulary;

pub use composite::{
    round2, score, CompositeScore, ExamScore, GermanExamScore, PreExamScore, ScoreDetails,
    PASS_THRESHOLD,
};
pub use error::ScoringError;
pub use prediction::{predict, Prediction, NO_DATA_MESSAGE};
pub use simulation::{simulate, SimulatedGrades};
pub use subjects::{subject_averages, SubjectAverage};
pub use vocabulary::{classify, Bucket};
