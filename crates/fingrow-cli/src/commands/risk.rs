use clap::{Args, ValueEnum};
use serde_json::Value;

use fingrow_core::risk::classifier::RiskStrategy;
use fingrow_core::risk::profile::assess_risk;
use fingrow_core::risk::questionnaire::build_survey_questionnaire;
use fingrow_core::risk::survey::SurveyAnswers;

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Points for tolerance, method and instrument types
    Scored,
    /// Loss tolerance picks the tier
    Direct,
}

impl From<StrategyArg> for RiskStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Scored => RiskStrategy::Scored,
            StrategyArg::Direct => RiskStrategy::Direct,
        }
    }
}

/// Arguments for survey risk classification
#[derive(Args)]
pub struct ClassifyRiskArgs {
    /// Path to a JSON/YAML survey answers file (or pipe JSON on stdin)
    #[arg(long)]
    pub input: Option<String>,

    /// Classification rule set
    #[arg(long, value_enum, default_value_t = StrategyArg::Scored)]
    pub strategy: StrategyArg,
}

pub fn run_classify_risk(args: ClassifyRiskArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let answers: SurveyAnswers = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if let Some(answers) = input::stdin::read_stdin()? {
        answers
    } else {
        return Err("--input <survey.json> or stdin required for risk classification".into());
    };
    let result = assess_risk(&answers, args.strategy.into());
    Ok(serde_json::to_value(result)?)
}

pub fn run_questionnaire() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(build_survey_questionnaire())?)
}
