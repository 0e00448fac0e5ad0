//! Interview question banks
//!
//! Stakeholder questions capture goals and the 30,000-foot view; end-user
//! questions capture what the work actually looks like day to day.

use crate::domain::entities::Industry;

/// A titled group of questions
pub struct QuestionSection {
    pub title: &'static str,
    pub questions: &'static [&'static str],
}

/// Which interview sets to include in a guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterviewRoles {
    #[default]
    Both,
    Stakeholder,
    EndUser,
}

impl InterviewRoles {
    pub fn includes_stakeholders(&self) -> bool {
        matches!(self, InterviewRoles::Both | InterviewRoles::Stakeholder)
    }

    pub fn includes_end_users(&self) -> bool {
        matches!(self, InterviewRoles::Both | InterviewRoles::EndUser)
    }
}

impl std::fmt::Display for InterviewRoles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterviewRoles::Both => write!(f, "both"),
            InterviewRoles::Stakeholder => write!(f, "stakeholder"),
            InterviewRoles::EndUser => write!(f, "enduser"),
        }
    }
}

impl std::str::FromStr for InterviewRoles {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "both" | "" => Ok(InterviewRoles::Both),
            "stakeholder" | "stakeholders" => Ok(InterviewRoles::Stakeholder),
            "enduser" | "end-user" | "end_user" | "endusers" => Ok(InterviewRoles::EndUser),
            _ => Err(format!(
                "Unknown interview role: {}. Use: both, stakeholder, enduser",
                s
            )),
        }
    }
}

pub const STAKEHOLDER_SECTIONS: &[QuestionSection] = &[
    QuestionSection {
        title: "Role Overview",
        questions: &[
            "Can you describe your role and your team's primary responsibilities?",
            "What are the main goals or KPIs your team is responsible for this quarter/year?",
            "Could you walk me through your team's structure?",
        ],
    },
    QuestionSection {
        title: "Processes",
        questions: &[
            "From a high level, what are the most critical processes your team manages?",
            "Where do you see the biggest bottlenecks or delays in your team's workflow?",
            "Which tasks seem to consume the most man-hours or resources?",
        ],
    },
    QuestionSection {
        title: "Technology",
        questions: &[
            "What are the main software systems or tools your team relies on?",
            "What are your biggest frustrations with your current technology stack?",
            "Are there important processes that happen outside of your main software?",
        ],
    },
    QuestionSection {
        title: "Pain Points",
        questions: &[
            "What are the biggest challenges your team is facing right now?",
            "If you had a magic wand, what problem would you solve overnight?",
            "What is preventing your team from being more efficient?",
        ],
    },
    QuestionSection {
        title: "Vision",
        questions: &[
            "Where do you see the biggest opportunities for improvement?",
            "How does your team generally respond to new technology?",
        ],
    },
];

pub const END_USER_SECTIONS: &[QuestionSection] = &[
    QuestionSection {
        title: "Daily Work",
        questions: &[
            "Can you walk me through a typical day or week in your role?",
            "What are the 1-3 most common tasks you perform every day?",
            "How much time is spent on core work versus administrative/repetitive tasks?",
        ],
    },
    QuestionSection {
        title: "Process Deep Dive",
        questions: &[
            "Walk me through the exact steps to complete [specific common task]",
            "Which part is the most manual or takes the most time?",
            "What information do you need and where do you get it?",
        ],
    },
    QuestionSection {
        title: "Tools",
        questions: &[
            "What software do you spend most of your day in?",
            "What do you find most frustrating about your tools?",
            "Is there double-entry or copying between systems?",
        ],
    },
    QuestionSection {
        title: "Pain Points",
        questions: &[
            "What is the most boring or repetitive part of your job?",
            "If you had an assistant, what tasks would you give them immediately?",
            "How do you currently track and report on your work?",
        ],
    },
];

/// Tailored questions for known industries; `None` for anything else
pub fn industry_questions(industry: &Industry) -> Option<&'static [&'static str]> {
    match industry {
        Industry::Healthcare => Some(&[
            "How do you currently handle patient intake and documentation?",
            "What compliance requirements create the most administrative burden?",
            "How much time is spent on insurance and billing-related tasks?",
            "What patient communication happens manually vs. automated?",
        ]),
        Industry::AgedCare => Some(&[
            "How are incidents recorded and reported to the regulator today?",
            "How do you gather evidence against the quality standards?",
            "How are care minutes tracked across shifts?",
            "How are families kept informed about care updates?",
        ]),
        Industry::ProfessionalServices => Some(&[
            "How do you currently track billable hours and client work?",
            "What's your process for client onboarding?",
            "How much time goes into creating proposals and reports?",
            "What research or document review tasks are most time-consuming?",
        ]),
        Industry::RetailEcommerce => Some(&[
            "How do you handle inventory management and forecasting?",
            "What's your process for handling customer inquiries and returns?",
            "How do you currently manage product listings and pricing?",
            "What manual work goes into order fulfillment?",
        ]),
        Industry::Finance => Some(&[
            "How do you handle data entry and reconciliation?",
            "What reporting tasks are most time-intensive?",
            "How do you currently manage compliance documentation?",
            "What client communication is done manually?",
        ]),
        Industry::Manufacturing => Some(&[
            "How do you track production and quality metrics?",
            "What manual work goes into supply chain management?",
            "How do you handle equipment maintenance scheduling?",
            "What reporting and documentation is most time-consuming?",
        ]),
        Industry::Other(_) => None,
    }
}
