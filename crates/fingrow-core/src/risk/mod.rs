pub mod classifier;
pub mod profile;
pub mod questionnaire;
pub mod survey;
