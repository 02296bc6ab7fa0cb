use super::domain::{Question, RiskCategory, QUESTION_COUNT, QUESTIONS_PER_CATEGORY};

const TITLE: &str = "NLNB Risk Assessment Tool";

const PROMPTS: [&str; QUESTION_COUNT] = [
    // Infrastructure
    "Are all critical hardware assets regularly maintained and inventoried?",
    "Is the network infrastructure protected with redundant failover systems?",
    "Do systems and storage devices have current firmware and patch levels?",
    "Is there a disaster recovery plan for server and data center outages?",
    "Are access controls and physical security measures in place for all infrastructure?",
    // Application
    "Is there a version control system in place for application software?",
    "Are user roles and permissions reviewed periodically across all apps?",
    "Is customer transaction data encrypted in transit and at rest?",
    "Are application logs regularly monitored for anomalies?",
    "Do applications undergo regular security and functionality testing?",
    // Vendor
    "Do vendors have a documented incident response policy?",
    "Is there a current and binding SLA for each critical vendor?",
    "Are vendor systems audited for compliance with banking standards?",
    "Does the bank have contingency plans if a vendor fails?",
    "Are vendor security controls aligned with NLNB's policies?",
    // Cybersecurity
    "Are endpoint security solutions (AV/EDR) deployed across all user machines?",
    "Is multi-factor authentication enforced for all administrative access?",
    "Are phishing and social engineering simulations conducted regularly?",
    "Is there a centralized log management system to detect threats?",
    "Are firewalls and intrusion detection systems regularly updated?",
    // Operational
    "Are employee access rights promptly removed upon termination?",
    "Are there defined and tested backup and recovery procedures?",
    "Are change management procedures followed for all system updates?",
    "Are helpdesk incident trends analyzed for root causes?",
    "Is staff training provided regularly for IT and cybersecurity protocols?",
];

/// Static question catalogue: 25 prompts in five contiguous category groups.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    title: &'static str,
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn standard() -> Self {
        let questions = PROMPTS
            .into_iter()
            .enumerate()
            .filter_map(|(index, text)| {
                RiskCategory::for_question(index).map(|category| Question { text, category })
            })
            .collect();

        Self {
            title: TITLE,
            questions,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions_for(&self, category: RiskCategory) -> &[Question] {
        &self.questions[category.question_indices()]
    }

    pub fn category_for(&self, index: usize) -> Option<RiskCategory> {
        self.question(index).map(|question| question.category)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterates `(category, questions)` in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = (RiskCategory, &[Question])> + '_ {
        RiskCategory::ordered()
            .into_iter()
            .map(move |category| (category, self.questions_for(category)))
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_questionnaire_has_five_groups_of_five() {
        let questionnaire = Questionnaire::standard();
        assert_eq!(questionnaire.len(), QUESTION_COUNT);
        for (category, questions) in questionnaire.groups() {
            assert_eq!(questions.len(), QUESTIONS_PER_CATEGORY);
            assert!(questions.iter().all(|q| q.category == category));
        }
    }

    #[test]
    fn question_seven_is_about_encryption() {
        let questionnaire = Questionnaire::standard();
        let question = questionnaire.question(7).expect("question 7 exists");
        assert_eq!(question.category, RiskCategory::Application);
        assert!(question.text.contains("encrypted"));
        assert!(questionnaire.question(25).is_none());
    }

    #[test]
    fn category_lookup_follows_question_groups() {
        let questionnaire = Questionnaire::standard();
        assert_eq!(questionnaire.category_for(0), Some(RiskCategory::Infrastructure));
        assert_eq!(questionnaire.category_for(4), Some(RiskCategory::Infrastructure));
        assert_eq!(questionnaire.category_for(7), Some(RiskCategory::Application));
        assert_eq!(questionnaire.category_for(24), Some(RiskCategory::Operational));
        assert_eq!(questionnaire.category_for(25), None);
        for index in 0..QUESTION_COUNT {
            assert_eq!(
                questionnaire.category_for(index),
                RiskCategory::for_question(index)
            );
        }
    }
}
