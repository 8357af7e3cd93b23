use super::domain::Industry;
use serde::Serialize;

/// An entry in an industry's use-case catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UseCase {
    pub key: &'static str,
    pub label: &'static str,
}

const fn use_case(key: &'static str, label: &'static str) -> UseCase {
    UseCase { key, label }
}

const FINANCIAL_SERVICES: &[UseCase] = &[
    use_case("credit_scoring", "Credit Scoring & Loan Approval"),
    use_case("loan_underwriting", "Automated Loan Underwriting"),
    use_case("fraud_detection", "Fraud Detection & Prevention"),
    use_case("investment_recommendation", "Investment Recommendations"),
    use_case("customer_risk_profiling", "Customer Risk Profiling"),
    use_case("algorithmic_trading", "Algorithmic Trading"),
];

const HEALTHCARE: &[UseCase] = &[
    use_case("medical_diagnosis", "AI-Assisted Medical Diagnosis"),
    use_case("treatment_recommendation", "Treatment Recommendation Systems"),
    use_case("patient_risk_stratification", "Patient Risk Stratification"),
    use_case("medical_imaging", "Medical Imaging Analysis"),
    use_case("drug_discovery", "Drug Discovery & Development"),
    use_case("predictive_health_analytics", "Predictive Health Analytics"),
];

const RETAIL_ECOMMERCE: &[UseCase] = &[
    use_case("recommendation_engine", "Product Recommendation Engine"),
    use_case("dynamic_pricing", "Dynamic Pricing Algorithms"),
    use_case("personalized_marketing", "Personalized Marketing & Ads"),
    use_case("inventory_prediction", "Inventory & Demand Prediction"),
    use_case("customer_segmentation", "Customer Segmentation"),
    use_case("chatbot_support", "AI Customer Service Chatbots"),
];

const TECHNOLOGY: &[UseCase] = &[
    use_case("content_moderation", "Content Moderation Systems"),
    use_case("search_ranking", "Search & Ranking Algorithms"),
    use_case("recommendation_systems", "Content Recommendation"),
    use_case("user_profiling", "User Profiling & Targeting"),
    use_case("sentiment_analysis", "Sentiment Analysis"),
    use_case("code_generation", "AI Code Generation Tools"),
];

const HUMAN_RESOURCES: &[UseCase] = &[
    use_case("hiring", "Resume Screening & Hiring"),
    use_case("employee_performance", "Employee Performance Evaluation"),
    use_case("workforce_planning", "Workforce Planning & Analytics"),
    use_case("talent_matching", "Talent Matching Systems"),
    use_case(
        "training_recommendation",
        "Training & Development Recommendations",
    ),
];

const EDUCATION: &[UseCase] = &[
    use_case("student_assessment", "Automated Student Assessment"),
    use_case("admission_decisions", "Admissions Decision Systems"),
    use_case("personalized_learning", "Personalized Learning Paths"),
    use_case("proctoring", "AI Proctoring Systems"),
    use_case("scholarship_allocation", "Scholarship & Aid Allocation"),
];

/// Ordered use-case catalog offered for an industry.
pub const fn use_cases(industry: Industry) -> &'static [UseCase] {
    match industry {
        Industry::FinancialServices => FINANCIAL_SERVICES,
        Industry::Healthcare => HEALTHCARE,
        Industry::RetailEcommerce => RETAIL_ECOMMERCE,
        Industry::Technology => TECHNOLOGY,
        Industry::HumanResources => HUMAN_RESOURCES,
        Industry::Education => EDUCATION,
    }
}

pub fn find_use_case(industry: Industry, key: &str) -> Option<&'static UseCase> {
    let key = key.trim();
    use_cases(industry).iter().find(|entry| entry.key == key)
}
