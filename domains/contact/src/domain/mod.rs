//! Domain model for the contact form

pub mod state;
pub mod validation;

/// One selectable query type: stable value plus display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTypeOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Fixed catalog of query types offered by the form
pub const QUERY_TYPES: &[QueryTypeOption] = &[
    QueryTypeOption {
        value: "hireMe",
        label: "Freelance Project Proposal",
    },
    QueryTypeOption {
        value: "collaboration",
        label: "Collaboration Opportunity",
    },
    QueryTypeOption {
        value: "consultation",
        label: "Technical Consultation",
    },
    QueryTypeOption {
        value: "job",
        label: "Job Opportunity",
    },
    QueryTypeOption {
        value: "other",
        label: "Other",
    },
];
