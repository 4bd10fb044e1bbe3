use crate::domain::ports::Console;

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn warn(&mut self, text: &str) {
        eprintln!("{}", text);
    }
}

/// Captures a transcript in memory, keeping warnings apart from regular lines.
#[derive(Debug, Default, Clone)]
pub struct MemoryConsole {
    pub lines: Vec<String>,
    pub warnings: Vec<String>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }

    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|line| line == text)
    }
}

impl Console for MemoryConsole {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn warn(&mut self, text: &str) {
        self.warnings.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_separates_warnings() {
        let mut console = MemoryConsole::new();
        console.line("first");
        console.blank();
        console.warn("careful");

        assert_eq!(console.lines, vec!["first".to_string(), String::new()]);
        assert_eq!(console.warnings, vec!["careful".to_string()]);
        assert_eq!(console.transcript(), "first\n");
    }
}
