/// Popup state: current URL list, history ring, load lifecycle
use crate::extract::extract;
use crate::history::{HistoryRecord, HistoryRing};
use crate::urls::{Mode, UrlEntry, generate};
use thiserror::Error;

/// User-visible rejections of a parse request. The message text is what
/// the status line shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Enter at least one ID or keyword")]
    EmptyInput,
    #[error("No valid IDs or keywords found")]
    NoCandidates,
}

/// Single owner of everything the popup mutates. Handlers receive this
/// instead of reaching for shared module state.
///
/// History starts in an explicit loading phase: `history()` is empty and
/// `history_loaded()` is false until the session-store read completes and
/// `complete_history_load` runs. Callers must not treat an unloaded ring
/// as "no history".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopupController {
    parsed: Vec<UrlEntry>,
    history: HistoryRing,
    history_loaded: bool,
}

impl PopupController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert raw input into the current URL list and record the event.
    /// Returns the number of URLs generated.
    pub fn parse(&mut self, mode: Mode, raw_text: &str, now_ms: i64) -> Result<usize, ParseError> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let ids = extract(text);
        if ids.is_empty() {
            return Err(ParseError::NoCandidates);
        }

        let urls = generate(mode, &ids);
        self.parsed = urls.clone();
        self.history.record(HistoryRecord {
            mode,
            text: text.to_string(),
            urls,
            timestamp: now_ms,
        });

        Ok(self.parsed.len())
    }

    /// Reload a history record's URLs as the current list. Returns the
    /// number of URLs loaded, or `None` when the index is out of range.
    pub fn recall(&mut self, index: usize) -> Option<usize> {
        let record = self.history.get(index)?;
        self.parsed = record.urls.clone();
        Some(self.parsed.len())
    }

    /// Finish the asynchronous initialization phase with whatever the
    /// session store held (empty when the store is missing or unreadable).
    pub fn complete_history_load(&mut self, records: Vec<HistoryRecord>) {
        self.history = HistoryRing::from_records(records);
        self.history_loaded = true;
    }

    pub fn parsed(&self) -> &[UrlEntry] {
        &self.parsed
    }

    pub fn history(&self) -> &[HistoryRecord] {
        self.history.list()
    }

    pub fn history_loaded(&self) -> bool {
        self.history_loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_empty_input() {
        let mut controller = PopupController::new();
        assert_eq!(
            controller.parse(Mode::Artwork, "", 0),
            Err(ParseError::EmptyInput)
        );
        assert_eq!(
            controller.parse(Mode::Artwork, "   \n  ", 0),
            Err(ParseError::EmptyInput)
        );
        assert!(controller.history().is_empty());
    }

    #[test]
    fn test_parse_rejects_input_without_candidates() {
        let mut controller = PopupController::new();
        assert_eq!(
            controller.parse(Mode::Artwork, "12345", 0),
            Err(ParseError::NoCandidates)
        );
        assert!(controller.parsed().is_empty());
        assert!(controller.history().is_empty());
    }

    #[test]
    fn test_parse_records_history() {
        let mut controller = PopupController::new();
        let count = controller
            .parse(Mode::Artwork, "  123456\n789012  ", 42)
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(controller.parsed().len(), 2);
        assert_eq!(controller.parsed()[0].url, "https://www.pixiv.net/artworks/123456");

        let head = &controller.history()[0];
        assert_eq!(head.mode, Mode::Artwork);
        assert_eq!(head.text, "123456\n789012");
        assert_eq!(head.urls, controller.parsed());
        assert_eq!(head.timestamp, 42);
    }

    #[test]
    fn test_recall_restores_older_urls() {
        let mut controller = PopupController::new();
        controller.parse(Mode::Artwork, "111111", 1).unwrap();
        controller.parse(Mode::User, "222222", 2).unwrap();

        // Index 1 is the older record.
        assert_eq!(controller.recall(1), Some(1));
        assert_eq!(controller.parsed()[0].url, "https://www.pixiv.net/artworks/111111");

        assert_eq!(controller.recall(5), None);
    }

    #[test]
    fn test_eleven_parses_keep_ten_records() {
        let mut controller = PopupController::new();
        for i in 1..=11 {
            controller
                .parse(Mode::Artwork, &format!("{:06}", i), i)
                .unwrap();
        }

        assert_eq!(controller.history().len(), 10);
        assert_eq!(controller.history()[0].text, "000011");
        assert_eq!(controller.history()[9].text, "000002");
    }

    #[test]
    fn test_history_load_phase() {
        let mut controller = PopupController::new();
        assert!(!controller.history_loaded());
        assert!(controller.history().is_empty());

        let restored = vec![HistoryRecord {
            mode: Mode::Keyword,
            text: "東方".to_string(),
            urls: generate(Mode::Keyword, &["東方".to_string()]),
            timestamp: 7,
        }];
        controller.complete_history_load(restored.clone());

        assert!(controller.history_loaded());
        assert_eq!(controller.history(), restored.as_slice());
    }
}
