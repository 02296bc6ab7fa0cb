use super::domain::RiskCategory;

pub const FALLBACK_RECOMMENDATION: &str = "No recommendations available.";

const INFRASTRUCTURE: [&str; 3] = [
    "Conduct a full audit of hardware assets.",
    "Implement a disaster recovery strategy with redundancy.",
    "Ensure all firmware is regularly patched and access is controlled.",
];

const APPLICATION: [&str; 3] = [
    "Enforce regular security testing on applications.",
    "Audit and update permission sets and roles.",
    "Ensure secure development lifecycle (SDLC) procedures are followed.",
];

const VENDOR: [&str; 3] = [
    "Review third-party SLAs and risk scoring.",
    "Request updated compliance certifications from all vendors.",
    "Develop fallback plans in case a key vendor fails.",
];

const CYBERSECURITY: [&str; 3] = [
    "Roll out organization-wide phishing simulation training.",
    "Implement stronger endpoint protection and MFA.",
    "Invest in centralized logging and intrusion detection.",
];

const OPERATIONAL: [&str; 3] = [
    "Strengthen change management processes.",
    "Ensure regular staff training for IT operations.",
    "Analyze support tickets for recurring issues.",
];

pub fn for_category(category: RiskCategory) -> &'static [&'static str] {
    match category {
        RiskCategory::Infrastructure => &INFRASTRUCTURE,
        RiskCategory::Application => &APPLICATION,
        RiskCategory::Vendor => &VENDOR,
        RiskCategory::Cybersecurity => &CYBERSECURITY,
        RiskCategory::Operational => &OPERATIONAL,
    }
}

/// Recommended actions keyed by category label; unknown labels get the fallback.
pub fn recommendations_for(label: &str) -> Vec<&'static str> {
    match RiskCategory::from_label(label) {
        Some(category) => for_category(category).to_vec(),
        None => vec![FALLBACK_RECOMMENDATION],
    }
}
