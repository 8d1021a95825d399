//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a warning or error message.
    fn warning(&mut self, msg: &str);

    /// Render a status message beside the results, never mixed into them.
    fn note(&mut self, msg: &str);

    /// Write text verbatim, without appending a newline.
    fn raw(&mut self, text: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn note(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn raw(&mut self, text: &str) {
        print!("{}", text);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Output that records lines in memory, for tests.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn section(&mut self, name: &str) {
        self.stdout.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.stdout.push(format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.stdout.push(format!("  {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.stderr.push(msg.to_string());
    }

    fn note(&mut self, msg: &str) {
        self.stderr.push(msg.to_string());
    }

    fn raw(&mut self, text: &str) {
        self.stdout.push(text.to_string());
    }

    fn preformatted(&mut self, text: &str) {
        self.stdout.push(text.to_string());
    }
}
