//! Display implementation for application messages.
//!
//! All message text is defined here so that wording stays consistent between
//! the CLI output and the server log.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskCreateFailed(err) => format!("Failed to create task: {}", err),
            Message::TaskRejected(err) => format!("Task rejected before write: {}", err),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskDeleteFailed(id, err) => format!("Failed to delete task {}: {}", id, err),
            Message::TaskDeleteForbidden(id) => format!("Refused to delete task {}: caller is not the owner", id),
            Message::TaskNothingToDelete(id) => format!("Task {} does not exist, nothing deleted", id),
            Message::TasksHeader(owner) => format!("Tasks of {}", owner),
            Message::TasksNotFoundForOwner(owner) => format!("No tasks found for {}", owner),
            Message::TasksNotFound => "No tasks stored yet".to_string(),

            // === COMMENT MESSAGES ===
            Message::CommentCreated(id, task_id) => format!("Comment {} added to task {}", id, task_id),
            Message::CommentCreateFailed(err) => format!("Failed to add comment: {}", err),
            Message::CommentSkipped => "Comment skipped: no named session or empty body".to_string(),
            Message::CommentDeleted(id) => format!("Comment {} deleted", id),
            Message::CommentDeleteFailed(id, err) => format!("Failed to delete comment {}: {}", id, err),
            Message::CommentDeleteForbidden(id) => format!("Refused to delete comment {}: caller is not the author", id),

            // === SESSION MESSAGES ===
            Message::IdentityProviderUnavailable(err) => format!("Identity provider unavailable, treating request as anonymous: {}", err),
            Message::SessionMissingRedirect(path) => format!("No session for {}, redirecting to /", path),

            // === LIVE LIST MESSAGES ===
            Message::SubscriptionAcquired(owner, active) => format!("Live list subscribed for {} ({} active)", owner, active),
            Message::SubscriptionReleased(owner, active) => format!("Live list released for {} ({} active)", owner, active),
            Message::SubscriptionLagged(owner, skipped) => format!("Live list for {} skipped {} notifications, resyncing", owner, skipped),
            Message::LiveSendFailed(err) => format!("Live list client went away: {}", err),

            // === HOME COUNTERS MESSAGES ===
            Message::CountersHeader => "Totals".to_string(),
            Message::CountersRefreshed(tasks, comments) => format!("Home counters refreshed: {} tasks, {} comments", tasks, comments),
            Message::CountersRefreshFailed(err) => format!("Failed to refresh home counters, serving previous values: {}", err),

            // === SERVER MESSAGES ===
            Message::ServerStarting(addr) => format!("Server listening on http://{}", addr),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::ShutdownSignalFailed(err) => format!("Failed to listen for shutdown signal: {}", err),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleIdentity => "Identity provider settings".to_string(),
            Message::ConfigModuleStore => "Storage settings".to_string(),
            Message::ConfigModuleHome => "Home page settings".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),
            Message::ConfigParseFailed(err) => format!("Configuration file is not valid JSON: {}", err),
            Message::ConfigInvalidBaseUrl(url) => format!("Base URL {} must start with http:// or https://", url),
            Message::ConfigInvalidEnv(var, value) => format!("Ignoring {}={}: not a valid value", var, value),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptServerHost => "Address to bind".to_string(),
            Message::PromptServerPort => "Port to listen on".to_string(),
            Message::PromptServerBaseUrl => "Public base URL used in share links".to_string(),
            Message::PromptIdentityUrl => "Identity provider URL".to_string(),
            Message::PromptIdentitySessionPath => "Session endpoint path".to_string(),
            Message::PromptStorePath => "Database file (empty for the default location)".to_string(),
            Message::PromptRevalidateSecs => "Home counters revalidation interval (seconds)".to_string(),
            Message::PromptDateFormat => "Date format for task pages".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, err) => format!("Migration v{} failed: {}", version, err),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };
        write!(f, "{}", s)
    }
}
