//! Fixed subject / assessment-type vocabulary.
//!
//! Every label the composite scorer recognizes lives in [`VOCABULARY`]. Both the
//! legacy labels ("Vornote", "Prüfung") and the current ones ("Schulprüfung",
//! "Gymiprüfung") map to the same bucket. Matching is exact and case-sensitive.

pub const MATH: &str = "Mathematik";
pub const GERMAN: &str = "Deutsch";

/// Aggregation bucket a grade record contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    PreExamMath = 0,
    PreExamGerman = 1,
    ExamMath = 2,
    ExamGermanEssay = 3,
    ExamGermanLanguageAnalysis = 4,
}

impl Bucket {
    pub const ALL: [Bucket; 5] = [
        Bucket::PreExamMath,
        Bucket::PreExamGerman,
        Bucket::ExamMath,
        Bucket::ExamGermanEssay,
        Bucket::ExamGermanLanguageAnalysis,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Bucket::PreExamMath => "Vornote Mathematik",
            Bucket::PreExamGerman => "Vornote Deutsch",
            Bucket::ExamMath => "Prüfung Mathematik",
            Bucket::ExamGermanEssay => "Prüfung Deutsch Aufsatz",
            Bucket::ExamGermanLanguageAnalysis => "Prüfung Deutsch Sprachbetrachtung",
        }
    }
}

/// (subject, assessment type, bucket)
pub const VOCABULARY: &[(&str, &str, Bucket)] = &[
    (MATH, "Vornote", Bucket::PreExamMath),
    (MATH, "Schulprüfung", Bucket::PreExamMath),
    (GERMAN, "Vornote", Bucket::PreExamGerman),
    (GERMAN, "Schulprüfung", Bucket::PreExamGerman),
    (MATH, "Prüfung", Bucket::ExamMath),
    (MATH, "Gymiprüfung", Bucket::ExamMath),
    (GERMAN, "Aufsatz", Bucket::ExamGermanEssay),
    (GERMAN, "Aufsatz (Prüfung)", Bucket::ExamGermanEssay),
    (GERMAN, "Aufsatz (Gymiprüfung)", Bucket::ExamGermanEssay),
    (GERMAN, "Sprachbetrachtung", Bucket::ExamGermanLanguageAnalysis),
    (GERMAN, "Sprachbetrachtung (Prüfung)", Bucket::ExamGermanLanguageAnalysis),
    (GERMAN, "Sprachbetrachtung (Gymiprüfung)", Bucket::ExamGermanLanguageAnalysis),
];

/// Map a (subject, assessment type) pair to its bucket, if recognized.
pub fn classify(subject: &str, assessment_type: &str) -> Option<Bucket> {
    VOCABULARY
        .iter()
        .find(|(s, t, _)| *s == subject && *t == assessment_type)
        .map(|(_, _, bucket)| *bucket)
}
