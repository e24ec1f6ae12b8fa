//! Grouping of file records into directory modules

use std::collections::HashMap;

use crate::models::file_record::FileRecord;
use crate::models::module_summary::ModuleSummary;
use crate::utils::paths::module_key;

/// Collects records per containing directory, keeping first-seen order.
///
/// Keys are registered with [`observe`](Self::observe) while walking, before
/// any analysis result is known, so concurrent analysis can never reorder
/// modules. Only one thread may hold the aggregator mutably.
#[derive(Debug, Default)]
pub struct ModuleAggregator {
    order: Vec<String>,
    modules: HashMap<String, ModuleSummary>,
}

impl ModuleAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module key in walk order. Repeated keys keep their first slot.
    pub fn observe(&mut self, key: &str) {
        if !self.modules.contains_key(key) {
            self.order.push(key.to_string());
            self.modules
                .insert(key.to_string(), ModuleSummary::new(key));
        }
    }

    /// Add a successful record to its containing module
    pub fn record(&mut self, record: FileRecord) {
        let key = module_key(&record.path);
        self.observe(&key);
        if let Some(module) = self.modules.get_mut(&key) {
            module.push(record);
        }
    }

    /// Running totals across all modules: (files, lines)
    pub fn totals(&self) -> (usize, usize) {
        self.modules.values().fold((0, 0), |(files, lines), module| {
            (files + module.total_files, lines + module.total_lines)
        })
    }

    /// Modules in first-seen order, dropping those with no records
    pub fn finish(mut self) -> Vec<ModuleSummary> {
        self.order
            .iter()
            .filter_map(|key| self.modules.remove(key))
            .filter(|module| !module.is_empty())
            .collect()
    }
}
