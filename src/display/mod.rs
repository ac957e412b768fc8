// Display sinks the calculator buffer is pushed to

/// Write-only text surface.
///
/// The session calls [`show`](DisplaySink::show) with the full buffer text
/// after every processed input. Nothing flows back into the calculator.
pub trait DisplaySink {
    fn show(&mut self, text: &str);
}

/// Mock display recording every value shown, oldest first
#[derive(Debug, Clone)]
pub struct MockDisplay {
    pub lines: Vec<String>,
}

impl MockDisplay {
    pub fn new() -> Self {
        MockDisplay { lines: Vec::new() }
    }

    /// Most recent value, if anything has been shown yet
    pub fn current(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// All shown values joined with newlines
    pub fn get_output(&self) -> String {
        self.lines.join("\n")
    }
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for MockDisplay {
    fn show(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

/// Display that only keeps the latest value (the TUI display pane reads it)
#[derive(Debug, Clone, Default)]
pub struct LatestDisplay {
    text: String,
}

impl LatestDisplay {
    pub fn new(initial: &str) -> Self {
        LatestDisplay {
            text: initial.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl DisplaySink for LatestDisplay {
    fn show(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}
