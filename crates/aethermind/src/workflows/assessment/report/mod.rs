mod model;
pub mod views;

pub use model::{
    BreakdownScore, Penalties, Recommendation, Regulation, RegulationCategory, Report,
    ReportError, ScoreComponent, MAX_RISK_SCORE,
};
