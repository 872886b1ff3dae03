use serde::{Deserialize, Serialize};

use crate::risk::survey::{InvestmentGoal, InvestmentMethod, LossTolerance, PreferredInvestmentType};

/// One selectable answer. `value` is the exact enum the classifier accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyOption<T> {
    pub value: T,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyQuestionnaire {
    pub investment_method_options: Vec<SurveyOption<InvestmentMethod>>,
    pub loss_tolerance_options: Vec<SurveyOption<LossTolerance>>,
    pub investment_type_options: Vec<SurveyOption<PreferredInvestmentType>>,
    pub goal_options: Vec<SurveyOption<InvestmentGoal>>,
}

fn options<T: Copy>(rows: &[(T, &str, &str)]) -> Vec<SurveyOption<T>> {
    rows.iter()
        .map(|&(value, label, description)| SurveyOption {
            value,
            label: label.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Static onboarding questionnaire.
pub fn build_survey_questionnaire() -> SurveyQuestionnaire {
    SurveyQuestionnaire {
        investment_method_options: options(&[
            (InvestmentMethod::OneTimeOnePlace, "한번에 한곳", "한 번에 한 곳에 투자"),
            (InvestmentMethod::OneTimeMultiplePlaces, "한번에 여러곳", "한 번에 여러 곳에 분산 투자"),
            (InvestmentMethod::MultipleTimesOnePlace, "여러번에 한곳", "여러 번에 걸쳐 한 곳에 투자"),
            (InvestmentMethod::MultipleTimesMultiplePlaces, "여러번에 여러곳", "여러 번에 걸쳐 여러 곳에 분산 투자"),
        ]),
        loss_tolerance_options: options(&[
            (LossTolerance::None, "손실 감내 못함", "원금 손실을 전혀 받아들일 수 없음"),
            (LossTolerance::TenPercent, "10%", "10% 정도의 손실까지 감내 가능"),
            (LossTolerance::TwentyToThirtyPercent, "20~30%", "20~30% 손실까지 감내 가능"),
            (LossTolerance::HalfOrMore, "절반이상", "투자금의 절반 이상 손실도 감내 가능"),
        ]),
        investment_type_options: options(&[
            (PreferredInvestmentType::DepositSavings, "예/적금", "안전한 예금과 적금"),
            (PreferredInvestmentType::Etf, "ETF", "상장지수펀드"),
            (PreferredInvestmentType::GovernmentBonds, "국채", "국가가 발행하는 채권"),
            (PreferredInvestmentType::Funds, "펀드", "전문가가 운용하는 투자상품"),
        ]),
        goal_options: options(&[
            (InvestmentGoal::Retirement, "은퇴 준비", "노후 자금 마련"),
            (InvestmentGoal::HousePurchase, "주택 마련", "내 집 마련 자금"),
            (InvestmentGoal::Education, "교육비 준비", "자녀 교육비 마련"),
            (InvestmentGoal::EmergencyFund, "비상 자금", "응급상황 대비 자금"),
            (InvestmentGoal::WealthBuilding, "자산 증대", "보유 자산 확대"),
            (InvestmentGoal::Travel, "여행 자금", "여행 및 휴가 자금"),
            (InvestmentGoal::Wedding, "결혼 자금", "결혼 준비 자금"),
            (InvestmentGoal::CarPurchase, "자동차 구매", "차량 구매 자금"),
            (InvestmentGoal::BusinessStartup, "창업", "사업 시작 자금"),
            (InvestmentGoal::Other, "기타", "기타 목적"),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::survey::SurveyAnswers;
    use serde_json::json;

    #[test]
    fn test_option_counts() {
        let q = build_survey_questionnaire();
        assert_eq!(q.investment_method_options.len(), 4);
        assert_eq!(q.loss_tolerance_options.len(), 4);
        assert_eq!(q.investment_type_options.len(), 4);
        assert_eq!(q.goal_options.len(), 10);
    }

    #[test]
    fn test_serialised_values_feed_back_into_survey() {
        let q = serde_json::to_value(build_survey_questionnaire()).unwrap();
        let method = q["investment_method_options"][3]["value"].clone();
        let tolerance = q["loss_tolerance_options"][2]["value"].clone();
        let kind = q["investment_type_options"][1]["value"].clone();
        assert_eq!(kind, json!("ETF"));

        let answers: SurveyAnswers = serde_json::from_value(json!({
            "loss_tolerance": tolerance,
            "investment_method": method,
            "preferred_investment_types": [kind],
        }))
        .unwrap();
        assert_eq!(answers.investment_method, InvestmentMethod::MultipleTimesMultiplePlaces);
        assert_eq!(answers.loss_tolerance, LossTolerance::TwentyToThirtyPercent);
    }
}
