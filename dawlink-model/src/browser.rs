use serde::{Deserialize, Serialize};

use crate::bank::{Bank, BankItem};

/// Label shown for a result slot the host left empty.
pub const NO_PRESET: &str = "no preset";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BrowserResult {
    /// `None` when the host reports an empty slot.
    pub name: Option<String>,
}

impl BrowserResult {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(NO_PRESET)
    }
}

impl BankItem for BrowserResult {
    fn retire(&mut self) {
        self.name = None;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Browser {
    pub results: Bank<BrowserResult>,
    /// 0-based index into `results`.
    pub selected_index: Option<usize>,
}

impl Browser {
    pub fn new(result_count: usize) -> Self {
        Self {
            results: Bank::new(result_count),
            selected_index: None,
        }
    }

    pub fn result(&self, index: usize) -> Option<&BrowserResult> {
        self.results.get(index)
    }

    pub fn result_mut(&mut self, index: usize) -> Option<&mut BrowserResult> {
        self.results.get_mut(index)
    }

    /// Resize the result bank. A selection outside the new range is cleared.
    pub fn set_result_count(&mut self, count: usize) {
        self.results.set_count(count);
        if self.selected_index.is_some_and(|i| i >= self.results.count()) {
            self.selected_index = None;
        }
    }

    pub fn selected_result(&self) -> Option<&BrowserResult> {
        self.selected_index.and_then(|i| self.results.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_reads_as_no_preset() {
        let browser = Browser::new(4);
        assert_eq!(browser.result(0).map(|r| r.display_name()), Some(NO_PRESET));
    }

    #[test]
    fn selected_result_follows_index() {
        let mut browser = Browser::new(4);
        if let Some(result) = browser.result_mut(2) {
            result.name = Some("Warm Pad".to_string());
        }
        browser.selected_index = Some(2);
        assert_eq!(
            browser.selected_result().map(|r| r.display_name()),
            Some("Warm Pad")
        );
        browser.selected_index = Some(9);
        assert!(browser.selected_result().is_none());
    }

    #[test]
    fn shrinking_results_clears_stale_selection() {
        let mut browser = Browser::new(16);
        browser.selected_index = Some(2);
        browser.set_result_count(8);
        assert_eq!(browser.selected_index, Some(2));
        browser.set_result_count(2);
        assert_eq!(browser.selected_index, None);
        browser.set_result_count(16);
        assert_eq!(browser.selected_index, None);
    }
}
