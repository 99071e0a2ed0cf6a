#[cfg(test)]
mod tests {
    use tarefas::db::db::Db;
    use tarefas::libs::comment::NewComment;
    use tarefas::libs::session::Identity;
    use tarefas::libs::store::{StoreError, TaskStore};
    use tarefas::libs::task::{NewTask, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        _temp_dir: TempDir,
        store: TaskStore,
        ana: Identity,
        bob: Identity,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("tarefas.db")).unwrap();
            StoreTestContext {
                _temp_dir: temp_dir,
                store: TaskStore::new(db),
                ana: Identity::new("ana@example.com", Some("Ana")),
                bob: Identity::new("bob@example.com", Some("Bob")),
            }
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_create_and_get_task(ctx: &mut StoreTestContext) {
        let id = ctx
            .store
            .create_task(&ctx.ana, &NewTask::new(&ctx.ana.email, "Study", "Ch.1-3\nCh.4", true))
            .unwrap();

        let task = ctx.store.get_task(&id).unwrap().unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.title, "Study");
        assert_eq!(task.description, "Ch.1-3\nCh.4");
        assert_eq!(task.user, "ana@example.com");
        assert!(task.is_public);
        assert!(task.created.seconds > 0);

        assert!(ctx.store.get_task("missing").unwrap().is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_empty_title_never_writes(ctx: &mut StoreTestContext) {
        for title in ["", "   ", "\n\t"] {
            let result = ctx.store.create_task(&ctx.ana, &NewTask::new(&ctx.ana.email, title, "x", false));
            assert!(matches!(result, Err(StoreError::Validation(_))));
        }
        assert_eq!(ctx.store.counts().unwrap().tasks, 0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_cannot_create_task_for_someone_else(ctx: &mut StoreTestContext) {
        let result = ctx.store.create_task(&ctx.bob, &NewTask::new(&ctx.ana.email, "Study", "", false));
        assert!(matches!(result, Err(StoreError::Forbidden { .. })));
        assert_eq!(ctx.store.counts().unwrap().tasks, 0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_own_tasks_newest_first(ctx: &mut StoreTestContext) {
        for title in ["First", "Second", "Third"] {
            ctx.store.create_task(&ctx.ana, &NewTask::new(&ctx.ana.email, title, "", false)).unwrap();
        }
        ctx.store.create_task(&ctx.bob, &NewTask::new(&ctx.bob.email, "Bob's", "", true)).unwrap();

        let titles: Vec<String> = ctx.store.own_tasks(&ctx.ana.email).unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);

        assert_eq!(ctx.store.list_tasks(&TaskFilter::All).unwrap().len(), 4);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_only_owner_deletes_task(ctx: &mut StoreTestContext) {
        let id = ctx.store.create_task(&ctx.ana, &NewTask::new(&ctx.ana.email, "Study", "", false)).unwrap();

        let result = ctx.store.delete_task(&ctx.bob, &id);
        assert!(matches!(result, Err(StoreError::Forbidden { .. })));
        assert!(ctx.store.get_task(&id).unwrap().is_some());

        assert!(ctx.store.delete_task(&ctx.ana, &id).unwrap());
        assert!(ctx.store.get_task(&id).unwrap().is_none());

        // Second delete finds nothing
        assert!(!ctx.store.delete_task(&ctx.ana, &id).unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_deleting_task_keeps_its_comments(ctx: &mut StoreTestContext) {
        let id = ctx.store.create_task(&ctx.ana, &NewTask::new(&ctx.ana.email, "Study", "", true)).unwrap();
        ctx.store
            .create_comment(&ctx.bob, &NewComment::new(&id, &ctx.bob, "Bob", "Good luck"))
            .unwrap();

        ctx.store.delete_task(&ctx.ana, &id).unwrap();

        let orphans = ctx.store.comments_for_task(&id).unwrap();
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].comment, "Good luck");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_comment_on_unknown_task_is_accepted(ctx: &mut StoreTestContext) {
        let comment = ctx
            .store
            .create_comment(&ctx.ana, &NewComment::new("no-such-task", &ctx.ana, "Ana", "Hello?"))
            .unwrap();
        assert_eq!(comment.task_id, "no-such-task");
        assert_eq!(ctx.store.counts().unwrap().comments, 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_comments_in_store_order(ctx: &mut StoreTestContext) {
        let id = ctx.store.create_task(&ctx.ana, &NewTask::new(&ctx.ana.email, "Study", "", true)).unwrap();
        ctx.store.create_comment(&ctx.ana, &NewComment::new(&id, &ctx.ana, "Ana", "one")).unwrap();
        ctx.store.create_comment(&ctx.bob, &NewComment::new(&id, &ctx.bob, "Bob", "two")).unwrap();
        ctx.store.create_comment(&ctx.ana, &NewComment::new("other", &ctx.ana, "Ana", "elsewhere")).unwrap();

        let bodies: Vec<String> = ctx.store.comments_for_task(&id).unwrap().into_iter().map(|c| c.comment).collect();
        assert_eq!(bodies, vec!["one", "two"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_only_author_deletes_comment(ctx: &mut StoreTestContext) {
        let comment = ctx.store.create_comment(&ctx.ana, &NewComment::new("t1", &ctx.ana, "Ana", "mine")).unwrap();

        let result = ctx.store.delete_comment(&ctx.bob, &comment.id);
        assert!(matches!(result, Err(StoreError::Forbidden { .. })));
        assert_eq!(ctx.store.comments_for_task("t1").unwrap().len(), 1);

        assert!(ctx.store.delete_comment(&ctx.ana, &comment.id).unwrap());
        assert!(ctx.store.comments_for_task("t1").unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_deleting_missing_comment_changes_nothing(ctx: &mut StoreTestContext) {
        ctx.store.create_comment(&ctx.ana, &NewComment::new("t1", &ctx.ana, "Ana", "stay")).unwrap();

        assert!(!ctx.store.delete_comment(&ctx.ana, "missing").unwrap());
        assert_eq!(ctx.store.counts().unwrap().comments, 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_comment_author_must_be_actor(ctx: &mut StoreTestContext) {
        let forged = NewComment::new("t1", &ctx.ana, "Ana", "not really Ana");
        let result = ctx.store.create_comment(&ctx.bob, &forged);
        assert!(matches!(result, Err(StoreError::Forbidden { .. })));
        assert_eq!(ctx.store.counts().unwrap().comments, 0);
    }
}
