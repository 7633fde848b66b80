//! Job application record collected during the interview.

use serde::Serialize;

/// Applicant and job fields gathered interactively.
///
/// Values are stored as typed; none of them are validated for format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct JobDetails {
    pub company_name: String,
    pub job_title: String,
    /// Comma-separated highlights from the job description.
    pub job_description: String,
    pub your_name: String,
    pub industry: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
}

impl JobDetails {
    /// `city, country` as printed in prompts and the document header.
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    /// Contact line for the document header: `city, country | phone | email`.
    pub fn contact_line(&self) -> String {
        format!("{} | {} | {}", self.location(), self.phone, self.email)
    }
}
