//! Data types returned by the Harvest projects endpoint
//!
//! The types mirror the JSON schema of `GET /v2/projects`. Fields the service may send as `null`
//! (or omit) are modeled as [`Option`] of their concrete type.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

time::serde::format_description!(calendar_date, Date, "[year]-[month]-[day]");

/// One page of the project listing
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectList {
    pub projects: Vec<Project>,
    pub per_page: u32,
    pub total_pages: u32,
    pub total_entries: u32,
    pub next_page: Option<u32>,
    pub previous_page: Option<u32>,
    pub page: u32,
    pub links: PaginationLinks,
}

impl ProjectList {
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Whether the service reported a page after this one. It is never fetched.
    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }
}

impl<'a> IntoIterator for &'a ProjectList {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ProjectList {
    type Item = Project;
    type IntoIter = std::vec::IntoIter<Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.into_iter()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaginationLinks {
    pub first: String,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub last: String,
}

/// A billable work entity tracked by Harvest
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub code: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_billable: bool,
    #[serde(default)]
    pub is_fixed_fee: bool,
    #[serde(default)]
    pub bill_by: String,
    /// Budget in hours, when budgeting by time
    pub budget: Option<f64>,
    #[serde(default)]
    pub budget_by: String,
    #[serde(default)]
    pub budget_is_monthly: bool,
    #[serde(default)]
    pub notify_when_over_budget: bool,
    pub over_budget_notification_percentage: Option<f64>,
    #[serde(default)]
    pub show_budget_to_all: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(default, with = "calendar_date::option")]
    pub starts_on: Option<Date>,
    #[serde(default, with = "calendar_date::option")]
    pub ends_on: Option<Date>,
    #[serde(default, with = "calendar_date::option")]
    pub over_budget_notification_date: Option<Date>,
    pub notes: Option<String>,
    /// Monetary budget, when budgeting by money
    pub cost_budget: Option<f64>,
    #[serde(default)]
    pub cost_budget_include_expenses: bool,
    pub hourly_rate: Option<f64>,
    /// Amount to invoice, fixed-fee projects only
    pub fee: Option<f64>,
    pub client: ProjectClient,
}

/// The billing entity associated with a [`Project`]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectClient {
    pub id: u64,
    pub name: String,
    pub currency: String,
}
