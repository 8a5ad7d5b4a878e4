#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use tasker::db::tasks::Tasks;
    use tasker::libs::analytics::AnalyticsStore;
    use tasker::libs::importer::ImportStore;
    use tasker::libs::task::{Task, TaskFilter, TaskPatch};
    use tempfile::TempDir;

    fn open_store() -> (TempDir, Tasks) {
        let dir = tempfile::tempdir().unwrap();
        let store = Tasks::open(&dir.path().join("tasker.db")).unwrap();
        (dir, store)
    }

    fn task(title: &str, priority: &str, status: &str, due_in_days: i64) -> Task {
        let mut task = Task::new(title, "", priority, Utc::now() + Duration::days(due_in_days));
        task.status = status.to_string();
        task.stamp(Utc::now());
        task
    }

    #[test]
    fn test_create_and_fetch() {
        let (_dir, store) = open_store();

        let id = store.create(&task("Buy milk", "low", "pending", 1)).unwrap();
        assert!(id > 0);

        let tasks = store.fetch(&TaskFilter::default()).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, Some(id));
        assert_eq!(tasks[0].title, "Buy milk");
        assert_eq!(tasks[0].priority, "low");
        assert_eq!(tasks[0].status, "pending");
        assert!(tasks[0].due_date.is_some());
        assert!(tasks[0].created_at.is_some());
        assert!(tasks[0].updated_at.is_some());
    }

    #[test]
    fn test_fetch_with_filters() {
        let (_dir, store) = open_store();

        store.create(&task("Buy milk", "low", "pending", 1)).unwrap();
        store.create(&task("Ship release", "high", "in_progress", 2)).unwrap();
        store.create(&task("Ship docs", "high", "done", 3)).unwrap();

        let by_status = store
            .fetch(&TaskFilter {
                status: Some("in_progress".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_status.len(), 1);
        assert_eq!(by_status[0].title, "Ship release");

        let by_priority = store
            .fetch(&TaskFilter {
                priority: Some("high".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_priority.len(), 2);

        let by_title = store
            .fetch(&TaskFilter {
                title: Some("Ship".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_title.len(), 2);
    }

    #[test]
    fn test_update_applies_patch() {
        let (_dir, store) = open_store();

        let id = store.create(&task("Buy milk", "low", "pending", 1)).unwrap();
        store
            .update(
                id,
                &TaskPatch {
                    title: Some("Buy oat milk".to_string()),
                    status: Some("done".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let tasks = store.fetch(&TaskFilter::default()).unwrap();
        assert_eq!(tasks[0].title, "Buy oat milk");
        assert_eq!(tasks[0].status, "done");
        assert_eq!(tasks[0].priority, "low");
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let (_dir, store) = open_store();

        let err = store
            .update(
                42,
                &TaskPatch {
                    title: Some("Anything".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_update_empty_patch_fails() {
        let (_dir, store) = open_store();

        let id = store.create(&task("Buy milk", "low", "pending", 1)).unwrap();
        let err = store.update(id, &TaskPatch::default()).unwrap_err();
        assert!(err.to_string().contains("no changes"));
    }

    #[test]
    fn test_delete() {
        let (_dir, store) = open_store();

        let id = store.create(&task("Buy milk", "low", "pending", 1)).unwrap();
        store.delete(id).unwrap();
        assert!(store.fetch(&TaskFilter::default()).unwrap().is_empty());

        let err = store.delete(id).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_delete_expired() {
        let (_dir, store) = open_store();

        store.create(&task("Long gone", "low", "pending", -10)).unwrap();
        store.create(&task("Still relevant", "low", "pending", 3)).unwrap();

        let deleted = store.delete_expired().unwrap();
        assert_eq!(deleted, 1);

        let tasks = store.fetch(&TaskFilter::default()).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Still relevant");
    }

    #[tokio::test]
    async fn test_import_tasks_is_one_batch() {
        let (_dir, store) = open_store();

        let inserted = store.import_tasks(&[task("First", "low", "", 1), task("Second", "high", "", 2)]).await.unwrap();
        assert_eq!(inserted, 2);

        let tasks = store.fetch(&TaskFilter::default()).unwrap();
        assert_eq!(tasks.len(), 2);
    }

    #[tokio::test]
    async fn test_import_tasks_rolls_back_on_failure() {
        let (_dir, store) = open_store();

        store.create(&task("Existing", "low", "pending", 1)).unwrap();

        let mut broken = task("Broken", "low", "", 2);
        broken.due_date = None;

        let err = store.import_tasks(&[task("Fresh", "low", "", 2), broken]).await.unwrap_err();
        assert!(err.to_string().contains("due date"));

        // the valid half of the batch must not be visible
        let tasks = store.fetch(&TaskFilter::default()).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Existing");
    }

    #[tokio::test]
    async fn test_count_by_status() {
        let (_dir, store) = open_store();

        store.create(&task("One", "low", "pending", 1)).unwrap();
        store.create(&task("Two", "low", "pending", 2)).unwrap();
        store.create(&task("Three", "low", "done", 3)).unwrap();

        let counts = store.task_count_by_status().await.unwrap();
        assert_eq!(counts.get("pending"), Some(&2));
        assert_eq!(counts.get("done"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[tokio::test]
    async fn test_average_execution_time() {
        let (_dir, store) = open_store();
        let now = Utc::now();

        let mut quick = Task::new("Quick", "", "low", now + Duration::hours(2));
        quick.status = "done".to_string();
        quick.stamp(now);
        store.create(&quick).unwrap();

        let mut slow = Task::new("Slow", "", "low", now + Duration::hours(3));
        slow.status = "done".to_string();
        slow.stamp(now);
        store.create(&slow).unwrap();

        // a pending task must not contribute to the average
        store.create(&task("Ignored", "low", "pending", 10)).unwrap();

        let average = store.average_execution_time().await.unwrap();
        assert_eq!(average, "2h30m0s");
    }

    #[tokio::test]
    async fn test_average_execution_time_without_completed_tasks() {
        let (_dir, store) = open_store();

        store.create(&task("Open", "low", "pending", 1)).unwrap();

        let average = store.average_execution_time().await.unwrap();
        assert_eq!(average, "0s");
    }

    #[tokio::test]
    async fn test_report_period() {
        let (_dir, store) = open_store();
        let now = Utc::now();

        // completed inside the window
        store.create(&task("Recent win", "low", "done", 5)).unwrap();

        // completed long before the window
        let mut old_win = Task::new("Old win", "", "low", now + Duration::days(20));
        old_win.status = "done".to_string();
        old_win.stamp(now - Duration::days(10));
        store.create(&old_win).unwrap();

        // overdue and not completed
        store.create(&task("Late", "low", "pending", -1)).unwrap();

        // due in the future, not overdue
        store.create(&task("On track", "low", "in_progress", 2)).unwrap();

        let report = store.report_period().await.unwrap();
        assert_eq!(report.completed_tasks, 1);
        assert_eq!(report.overdue_tasks, 1);
    }
}
