use std::collections::VecDeque;

pub const MAX_LOG_LINES: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub seq: u64,
    pub text: String,
}

/// Lines shown in the on-page debug console: the newest `capacity` lines,
/// oldest first. While paused, new lines are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugLog {
    lines: VecDeque<LogLine>,
    capacity: usize,
    next_seq: u64,
    paused: bool,
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::with_capacity(MAX_LOG_LINES)
    }
}

impl DebugLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
            next_seq: 0,
            paused: false,
        }
    }

    /// Returns whether the line was kept.
    pub fn push(&mut self, text: String) -> bool {
        if self.paused || self.capacity == 0 {
            return false;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(LogLine { seq: self.next_seq, text });
        self.next_seq += 1;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_newest_lines() {
        let mut log = DebugLog::default();
        for i in 0..MAX_LOG_LINES + 5 {
            assert!(log.push(format!("line {i}")));
        }

        let lines = log.lines();
        assert_eq!(lines.len(), MAX_LOG_LINES);
        assert_eq!(lines[0].text, "line 5");
        assert_eq!(lines[MAX_LOG_LINES - 1].text, format!("line {}", MAX_LOG_LINES + 4));
    }

    #[test]
    fn paused_log_drops_new_lines() {
        let mut log = DebugLog::with_capacity(3);
        log.push("before".to_string());
        assert!(log.toggle_pause());
        assert!(!log.push("while paused".to_string()));
        assert!(!log.toggle_pause());
        log.push("after".to_string());

        let texts: Vec<String> = log.lines().into_iter().map(|line| line.text).collect();
        assert_eq!(texts, ["before", "after"]);
    }

    #[test]
    fn sequence_numbers_stay_unique_across_clear() {
        let mut log = DebugLog::with_capacity(2);
        log.push("a".to_string());
        log.push("b".to_string());
        log.clear();
        log.push("c".to_string());

        assert_eq!(log.len(), 1);
        assert_eq!(log.lines()[0].seq, 2);
    }
}
