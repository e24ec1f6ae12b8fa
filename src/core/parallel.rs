//! Parallel processing utilities

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Progress update information for long-running operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl ProgressUpdate {
    /// Create a new progress update
    pub fn new(current: usize, total: usize, message: impl Into<String>) -> Self {
        Self {
            current,
            total,
            message: message.into(),
        }
    }

    /// Calculate progress percentage
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.current as f64 / self.total as f64) * 100.0
        }
    }
}

/// Map `f` over `items` on the rayon pool, reporting each completion.
///
/// The output keeps the input order regardless of which item finished first.
pub fn parallel_process_with_progress<T, F, R, P>(items: Vec<T>, f: F, progress_callback: P) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> (R, String) + Send + Sync,
    P: Fn(ProgressUpdate) + Send + Sync,
{
    let total = items.len();
    let counter = AtomicUsize::new(0);

    items
        .into_par_iter()
        .map(|item| {
            let (result, label) = f(item);
            let done = counter.fetch_add(1, Ordering::SeqCst) + 1;
            progress_callback(ProgressUpdate::new(done, total, label));
            result
        })
        .collect()
}

/// Sequential counterpart of [`parallel_process_with_progress`]
pub fn sequential_process_with_progress<T, F, R, P>(items: Vec<T>, f: F, progress_callback: P) -> Vec<R>
where
    F: Fn(T) -> (R, String),
    P: Fn(ProgressUpdate),
{
    let total = items.len();

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let (result, label) = f(item);
            progress_callback(ProgressUpdate::new(index + 1, total, label));
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_progress_percentage() {
        assert_eq!(ProgressUpdate::new(1, 4, "x").percentage(), 25.0);
        assert_eq!(ProgressUpdate::new(0, 0, "x").percentage(), 0.0);
    }

    #[test]
    fn test_parallel_keeps_input_order() {
        let items: Vec<usize> = (0..200).collect();
        let seen = Mutex::new(Vec::new());

        let results = parallel_process_with_progress(
            items,
            |n| (n * 2, format!("item {}", n)),
            |update| seen.lock().unwrap().push(update.current),
        );

        assert_eq!(results, (0..200).map(|n| n * 2).collect::<Vec<_>>());
        let mut counts = seen.into_inner().unwrap();
        counts.sort();
        assert_eq!(counts, (1..=200).collect::<Vec<_>>());
    }

    #[test]
    fn test_sequential_reports_in_order() {
        let seen = Mutex::new(Vec::new());
        let results = sequential_process_with_progress(
            vec!["a", "b", "c"],
            |s| (s.to_uppercase(), s.to_string()),
            |update| seen.lock().unwrap().push((update.current, update.message)),
        );

        assert_eq!(results, vec!["A", "B", "C"]);
        assert_eq!(
            seen.into_inner().unwrap(),
            vec![(1, "a".to_string()), (2, "b".to_string()), (3, "c".to_string())]
        );
    }
}
