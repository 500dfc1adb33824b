//! Tenant-scoped record kinds
//!
//! This module defines the closed allow-list of record kinds that live
//! inside a workspace, and the typed record structs for each. Every
//! record carries exactly one `workspace_id`, assigned at construction;
//! a record with no resolvable workspace is unrepresentable.
//!
//! The [`TenantRecord`] trait is sealed: record kinds outside this
//! module cannot implement it, which makes the allow-list a compile-time
//! property of the gateway rather than a runtime check.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of tenant-scoped record kinds.
///
/// Maps one-to-one onto the tenant-scoped tables of the relational
/// store. Kinds outside this enumeration cannot be queried through the
/// gateway.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Design project
    Project,

    /// Client record
    Client,

    /// Project task
    Task,

    /// Budget line item
    BudgetLine,

    /// Document template
    DocTemplate,
}

impl EntityKind {
    /// Get the store table name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "projects",
            Self::Client => "clients",
            Self::Task => "tasks",
            Self::BudgetLine => "budget_lines",
            Self::DocTemplate => "doc_templates",
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Project {}
    impl Sealed for super::Client {}
    impl Sealed for super::Task {}
    impl Sealed for super::BudgetLine {}
    impl Sealed for super::DocTemplate {}
}

/// A record kind that lives inside a workspace.
///
/// Sealed: implemented only by the record structs in this module, so the
/// gateway's allow-list is closed at compile time.
pub trait TenantRecord: Serialize + DeserializeOwned + Send + Sync + sealed::Sealed {
    /// The kind this record type maps to.
    const KIND: EntityKind;

    /// The record's own id.
    fn id(&self) -> Uuid;

    /// The workspace this record belongs to.
    fn workspace_id(&self) -> Uuid;
}

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// In progress
    Active,

    /// Paused by the firm or the client
    OnHold,

    /// Completed or abandoned
    Archived,
}

impl ProjectStatus {
    /// Whether the project counts against the active-project limit.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A design project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project ID
    pub id: Uuid,

    /// Workspace this project belongs to
    pub workspace_id: Uuid,

    /// Project name
    pub name: String,

    /// Client this project is for, if assigned
    pub client_id: Option<Uuid>,

    /// Lifecycle status
    pub status: ProjectStatus,

    /// When the project was created
    pub created_at: DateTime<Utc>,

    /// When the project was last updated
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new active project in a workspace.
    ///
    /// # Arguments
    ///
    /// * `workspace_id` - The owning workspace
    /// * `name` - The project name
    pub fn new(workspace_id: Uuid, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            workspace_id,
            name: name.into(),
            client_id: None,
            status: ProjectStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Assign the client this project is for.
    pub fn with_client(mut self, client_id: Uuid) -> Self {
        self.client_id = Some(client_id);
        self
    }
}

impl TenantRecord for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> Uuid {
        self.id
    }

    fn workspace_id(&self) -> Uuid {
        self.workspace_id
    }
}

/// A client of the firm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Unique client ID
    pub id: Uuid,

    /// Workspace this client belongs to
    pub workspace_id: Uuid,

    /// Client name
    pub name: String,

    /// Contact email
    pub email: Option<String>,

    /// Contact phone
    pub phone: Option<String>,

    /// When the client record was created
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// Creates a new client record in a workspace.
    pub fn new(workspace_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            workspace_id,
            name: name.into(),
            email: None,
            phone: None,
            created_at: Utc::now(),
        }
    }

    /// Set the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl TenantRecord for Client {
    const KIND: EntityKind = EntityKind::Client;

    fn id(&self) -> Uuid {
        self.id
    }

    fn workspace_id(&self) -> Uuid {
        self.workspace_id
    }
}

/// A task on a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID
    pub id: Uuid,

    /// Workspace this task belongs to
    pub workspace_id: Uuid,

    /// Project this task belongs to, if any
    pub project_id: Option<Uuid>,

    /// Task title
    pub title: String,

    /// Whether the task is done
    pub done: bool,

    /// Due date, if set
    pub due_on: Option<DateTime<Utc>>,

    /// When the task was created
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open task in a workspace.
    pub fn new(workspace_id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            workspace_id,
            project_id: None,
            title: title.into(),
            done: false,
            due_on: None,
            created_at: Utc::now(),
        }
    }

    /// Attach the task to a project.
    pub fn with_project(mut self, project_id: Uuid) -> Self {
        self.project_id = Some(project_id);
        self
    }
}

impl TenantRecord for Task {
    const KIND: EntityKind = EntityKind::Task;

    fn id(&self) -> Uuid {
        self.id
    }

    fn workspace_id(&self) -> Uuid {
        self.workspace_id
    }
}

/// A budget line item on a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Unique line ID
    pub id: Uuid,

    /// Workspace this line belongs to
    pub workspace_id: Uuid,

    /// Project this line belongs to
    pub project_id: Uuid,

    /// Line label (e.g. "Joinery", "Lighting fixtures")
    pub label: String,

    /// Amount in minor currency units
    pub amount_cents: i64,

    /// When the line was created
    pub created_at: DateTime<Utc>,
}

impl BudgetLine {
    /// Creates a new budget line for a project.
    pub fn new(
        workspace_id: Uuid,
        project_id: Uuid,
        label: impl Into<String>,
        amount_cents: i64,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            workspace_id,
            project_id,
            label: label.into(),
            amount_cents,
            created_at: Utc::now(),
        }
    }
}

impl TenantRecord for BudgetLine {
    const KIND: EntityKind = EntityKind::BudgetLine;

    fn id(&self) -> Uuid {
        self.id
    }

    fn workspace_id(&self) -> Uuid {
        self.workspace_id
    }
}

/// A document template (proposals, contracts, invoices).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocTemplate {
    /// Unique template ID
    pub id: Uuid,

    /// Workspace this template belongs to
    pub workspace_id: Uuid,

    /// Template name
    pub name: String,

    /// Template body
    pub body: String,

    /// When the template was created
    pub created_at: DateTime<Utc>,
}

impl DocTemplate {
    /// Creates a new document template in a workspace.
    pub fn new(workspace_id: Uuid, name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            workspace_id,
            name: name.into(),
            body: body.into(),
            created_at: Utc::now(),
        }
    }
}

impl TenantRecord for DocTemplate {
    const KIND: EntityKind = EntityKind::DocTemplate;

    fn id(&self) -> Uuid {
        self.id
    }

    fn workspace_id(&self) -> Uuid {
        self.workspace_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_carry_their_workspace() {
        let workspace_id = Uuid::now_v7();

        let project = Project::new(workspace_id, "Penthouse refit");
        assert_eq!(project.workspace_id(), workspace_id);
        assert_eq!(Project::KIND, EntityKind::Project);

        let client = Client::new(workspace_id, "A. Moreau").with_email("a@moreau.example");
        assert_eq!(client.workspace_id(), workspace_id);

        let task = Task::new(workspace_id, "Order samples").with_project(project.id);
        assert_eq!(task.project_id, Some(project.id));
        assert!(!task.done);
    }

    #[test]
    fn test_project_status() {
        let workspace_id = Uuid::now_v7();
        let mut project = Project::new(workspace_id, "Loft");
        assert!(project.status.is_active());

        project.status = ProjectStatus::Archived;
        assert!(!project.status.is_active());
    }

    #[test]
    fn test_kind_table_names() {
        assert_eq!(EntityKind::Project.as_str(), "projects");
        assert_eq!(EntityKind::BudgetLine.as_str(), "budget_lines");
    }
}
