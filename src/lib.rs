pub mod biomarker;
pub mod cli;
pub mod ctx;
pub mod io;
pub mod patient;
pub mod pipeline;
pub mod prediction;
pub mod schema {
    pub mod v1;
}
pub mod scores;
