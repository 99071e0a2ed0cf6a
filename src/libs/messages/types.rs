/// Every user-facing line the application prints or logs through the `msg_*` macros.
///
/// Variants carry the dynamic parts of the text; the wording itself lives in
/// the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),               // task id
    TaskCreateFailed(String),          // error
    TaskRejected(String),              // validation error
    TaskDeleted(String),               // task id
    TaskDeleteFailed(String, String),  // task id, error
    TaskDeleteForbidden(String),       // task id
    TaskNothingToDelete(String),       // task id
    TasksHeader(String),               // owner
    TasksNotFoundForOwner(String),     // owner
    TasksNotFound,

    // === COMMENT MESSAGES ===
    CommentCreated(String, String),       // comment id, task id
    CommentCreateFailed(String),          // error
    CommentSkipped,
    CommentDeleted(String),               // comment id
    CommentDeleteFailed(String, String),  // comment id, error
    CommentDeleteForbidden(String),       // comment id

    // === SESSION MESSAGES ===
    IdentityProviderUnavailable(String), // error
    SessionMissingRedirect(String),      // path

    // === LIVE LIST MESSAGES ===
    SubscriptionAcquired(String, usize), // owner, active count
    SubscriptionReleased(String, usize), // owner, active count
    SubscriptionLagged(String, u64),     // owner, skipped events
    LiveSendFailed(String),              // error

    // === HOME COUNTERS MESSAGES ===
    CountersHeader,
    CountersRefreshed(usize, usize),  // tasks, comments
    CountersRefreshFailed(String),    // error

    // === SERVER MESSAGES ===
    ServerStarting(String), // address
    ServerStopped,
    ShutdownSignalFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleServer,
    ConfigModuleIdentity,
    ConfigModuleStore,
    ConfigModuleHome,
    ConfigModuleDisplay,
    ConfigParseFailed(String),             // error
    ConfigInvalidBaseUrl(String),          // url
    ConfigInvalidEnv(String, String), // variable, value

    // === PROMPTS ===
    PromptSelectModules,
    PromptServerHost,
    PromptServerPort,
    PromptServerBaseUrl,
    PromptIdentityUrl,
    PromptIdentitySessionPath,
    PromptStorePath,
    PromptRevalidateSecs,
    PromptDateFormat,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
}
