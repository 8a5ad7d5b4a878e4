#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use tasker::libs::importer::{ImportError, ImportStore, TaskImporter};
    use tasker::libs::task::Task;

    /// Import store stub that records every batch it receives.
    struct RecordingStore {
        batches: Mutex<Vec<Vec<Task>>>,
        fail: bool,
    }

    impl RecordingStore {
        fn new() -> Arc<Self> {
            Arc::new(RecordingStore {
                batches: Mutex::new(Vec::new()),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(RecordingStore {
                batches: Mutex::new(Vec::new()),
                fail: true,
            })
        }

        fn batches(&self) -> Vec<Vec<Task>> {
            self.batches.lock().clone()
        }
    }

    #[async_trait]
    impl ImportStore for RecordingStore {
        async fn import_tasks(&self, tasks: &[Task]) -> anyhow::Result<usize> {
            if self.fail {
                anyhow::bail!("insert failed");
            }
            self.batches.lock().push(tasks.to_vec());
            Ok(tasks.len())
        }
    }

    fn valid_task(title: &str) -> Task {
        Task::new(title, "", "medium", Utc::now() + Duration::days(3))
    }

    #[tokio::test]
    async fn test_import_all_valid() {
        let store = RecordingStore::new();
        let importer = TaskImporter::new(store.clone());

        let report = importer
            .import(vec![valid_task("first"), valid_task("second"), valid_task("third")])
            .await
            .unwrap();

        assert_eq!(report.inserted, 3);
        assert!(report.failures.is_empty());

        // one batched insert carrying every task, all stamped
        let batches = store.batches();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 3);
        for task in &batches[0] {
            assert!(task.created_at.is_some());
            assert!(task.updated_at.is_some());
        }
    }

    #[tokio::test]
    async fn test_import_preserves_input_order() {
        let store = RecordingStore::new();
        let importer = TaskImporter::new(store.clone());

        let report = importer
            .import(vec![valid_task("first"), valid_task("second"), valid_task("third")])
            .await
            .unwrap();

        assert!(report.failures.is_empty());
        let titles: Vec<String> = store.batches()[0].iter().map(|task| task.title.clone()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_import_all_invalid_skips_store() {
        let store = RecordingStore::new();
        let importer = TaskImporter::new(store.clone());

        let mut task = valid_task("first");
        task.priority = "crazy".to_string();

        let err = importer.import(vec![task]).await.unwrap_err();
        match err {
            ImportError::AllInvalid { failures } => {
                assert_eq!(failures, vec!["Task 1: некорректный приоритет задачи: crazy".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(store.batches().is_empty());
    }

    #[tokio::test]
    async fn test_import_partial_success_is_not_an_error() {
        let store = RecordingStore::new();
        let importer = TaskImporter::new(store.clone());

        let mut broken = valid_task("third");
        broken.title = String::new();

        let report = importer
            .import(vec![valid_task("first"), valid_task("second"), broken])
            .await
            .unwrap();

        assert_eq!(report.inserted, 2);
        assert_eq!(report.failures, vec!["Task 3: название задачи не может быть пустым".to_string()]);
        assert_eq!(store.batches()[0].len(), 2);
    }

    #[tokio::test]
    async fn test_import_failures_follow_input_positions() {
        let store = RecordingStore::new();
        let importer = TaskImporter::new(store.clone());

        let mut first = valid_task("first");
        first.title = String::new();
        let mut third = valid_task("third");
        third.priority = "crazy".to_string();
        let mut fifth = valid_task("fifth");
        fifth.due_date = None;

        let report = importer
            .import(vec![first, valid_task("second"), third, valid_task("fourth"), fifth])
            .await
            .unwrap();

        assert_eq!(report.inserted, 2);
        assert_eq!(
            report.failures,
            vec![
                "Task 1: название задачи не может быть пустым".to_string(),
                "Task 3: некорректный приоритет задачи: crazy".to_string(),
                "Task 5: не указана дата завершения задачи".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_import_store_failure_keeps_validation_failures() {
        let store = RecordingStore::failing();
        let importer = TaskImporter::new(store.clone());

        let mut broken = valid_task("second");
        broken.priority = "crazy".to_string();

        let err = importer.import(vec![valid_task("first"), broken]).await.unwrap_err();
        match err {
            ImportError::Store { failures, .. } => {
                assert_eq!(failures, vec!["Task 2: некорректный приоритет задачи: crazy".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        // nothing was retained by the store
        assert!(store.batches().is_empty());
    }

    #[tokio::test]
    async fn test_import_empty_input_is_all_invalid() {
        let store = RecordingStore::new();
        let importer = TaskImporter::new(store.clone());

        let err = importer.import(Vec::new()).await.unwrap_err();
        match err {
            ImportError::AllInvalid { failures } => assert!(failures.is_empty()),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(store.batches().is_empty());
    }

    #[tokio::test]
    async fn test_import_error_message_is_stable() {
        let store = RecordingStore::new();
        let importer = TaskImporter::new(store.clone());

        let mut task = valid_task("first");
        task.title = String::new();

        let err = importer.import(vec![task]).await.unwrap_err();
        assert_eq!(err.to_string(), "все задачи невалидны");
    }
}
