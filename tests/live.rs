#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tarefas::db::db::Db;
    use tarefas::libs::comment::NewComment;
    use tarefas::libs::live::TaskSubscription;
    use tarefas::libs::session::Identity;
    use tarefas::libs::store::TaskStore;
    use tarefas::libs::task::NewTask;
    use tokio::time::timeout;

    fn store() -> TaskStore {
        TaskStore::new(Db::open_in_memory().unwrap())
    }

    fn ana() -> Identity {
        Identity::new("ana@example.com", Some("Ana"))
    }

    async fn titles(subscription: &mut TaskSubscription) -> Vec<String> {
        let tasks = timeout(Duration::from_secs(5), subscription.next())
            .await
            .expect("no snapshot within 5s")
            .expect("feed closed")
            .unwrap();
        tasks.into_iter().map(|t| t.title).collect()
    }

    #[tokio::test]
    async fn test_first_snapshot_is_current_list() {
        let store = store();
        let ana = ana();
        store.create_task(&ana, &NewTask::new(&ana.email, "Existing", "", false)).unwrap();

        let mut subscription = store.subscribe_own_tasks(&ana.email);
        assert_eq!(titles(&mut subscription).await, vec!["Existing"]);
    }

    #[tokio::test]
    async fn test_each_change_yields_full_snapshot() {
        let store = store();
        let ana = ana();
        let bob = Identity::new("bob@example.com", Some("Bob"));

        let mut subscription = store.subscribe_own_tasks(&ana.email);
        assert!(titles(&mut subscription).await.is_empty());

        let first = store.create_task(&ana, &NewTask::new(&ana.email, "First", "", false)).unwrap();
        assert_eq!(titles(&mut subscription).await, vec!["First"]);

        store.create_task(&ana, &NewTask::new(&ana.email, "Second", "", true)).unwrap();
        assert_eq!(titles(&mut subscription).await, vec!["Second", "First"]);

        // Writes by someone else, or to comments, do not wake the subscription
        store.create_task(&bob, &NewTask::new(&bob.email, "Bob's", "", false)).unwrap();
        store.create_comment(&ana, &NewComment::new(&first, &ana, "Ana", "note")).unwrap();

        store.delete_task(&ana, &first).unwrap();
        assert_eq!(titles(&mut subscription).await, vec!["Second"]);
    }

    #[tokio::test]
    async fn test_lagging_subscriber_resyncs() {
        let store = store();
        let ana = ana();
        let mut subscription = store.subscribe_own_tasks(&ana.email);
        titles(&mut subscription).await;

        for i in 0..300 {
            store.create_task(&ana, &NewTask::new(&ana.email, &format!("Task {}", i), "", false)).unwrap();
        }

        let snapshot = titles(&mut subscription).await;
        assert_eq!(snapshot.len(), 300);
        assert_eq!(snapshot[0], "Task 299");
    }

    #[tokio::test]
    async fn test_drop_releases_subscription() {
        let store = store();
        let ana = ana();
        assert_eq!(store.active_subscriptions(), 0);

        let first = store.subscribe_own_tasks(&ana.email);
        let second = store.subscribe_own_tasks("bob@example.com");
        assert_eq!(store.active_subscriptions(), 2);

        drop(first);
        assert_eq!(store.active_subscriptions(), 1);

        // Released from inside an aborted task as well
        let handle = tokio::spawn(async move {
            let mut second = second;
            loop {
                if second.next().await.is_none() {
                    break;
                }
            }
        });
        handle.abort();
        let _ = handle.await;
        assert_eq!(store.active_subscriptions(), 0);
    }
}
