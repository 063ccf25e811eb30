//! Fluent prompt builder

/// Assembles a prompt from text pieces, conditional parts and markdown headings
///
/// Pieces are concatenated exactly as given; the builder never inserts
/// separators on its own.
///
/// # Examples
///
/// ```
/// use agent_prompt::PromptBuilder;
///
/// let outputs = [("research", "Revenue is up."), ("analysis", "Low debt.")];
///
/// let prompt = PromptBuilder::new()
///     .text("Current Task: recommend a position.")
///     .when(!outputs.is_empty(), "\n\nContext:")
///     .each(outputs, |b, (task, output)| b.section(task).text(output))
///     .build();
///
/// assert!(prompt.contains("## research\nRevenue is up."));
/// assert!(prompt.find("research").unwrap() < prompt.find("analysis").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    parts: Vec<String>,
}

impl PromptBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text verbatim
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.parts.push(content.into());
        self
    }

    pub fn newline(self) -> Self {
        self.text("\n")
    }

    /// Two newlines, ending the current paragraph
    pub fn blank_line(self) -> Self {
        self.text("\n\n")
    }

    /// Markdown `##` heading on its own line
    pub fn section(self, title: impl Into<String>) -> Self {
        self.text(format!("\n## {}\n", title.into()))
    }

    /// Append `content` only when `condition` holds
    pub fn when(self, condition: bool, content: impl Into<String>) -> Self {
        if condition { self.text(content) } else { self }
    }

    /// Fold every item of `items` into the builder, in order
    pub fn each<I, F>(self, items: I, mut f: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(Self, I::Item) -> Self,
    {
        items.into_iter().fold(self, |builder, item| f(builder, item))
    }

    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(String::is_empty)
    }

    /// Concatenate all pieces
    pub fn build(self) -> String {
        self.parts.concat()
    }
}

impl From<PromptBuilder> for String {
    fn from(builder: PromptBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_verbatim() {
        let prompt = PromptBuilder::new().text("You are ").text("{{ not a var }}").build();
        assert_eq!(prompt, "You are {{ not a var }}");
    }

    #[test]
    fn test_paragraphs() {
        let prompt = PromptBuilder::new()
            .text("Task")
            .blank_line()
            .text("Criteria")
            .newline()
            .build();
        assert_eq!(prompt, "Task\n\nCriteria\n");
    }

    #[test]
    fn test_section() {
        let prompt = PromptBuilder::new()
            .text("Intro")
            .section("research (Market Researcher)")
            .build();
        assert_eq!(prompt, "Intro\n## research (Market Researcher)\n");
    }

    #[test]
    fn test_conditional() {
        let prompt = PromptBuilder::new()
            .text("Base")
            .when(true, " with context")
            .when(false, " never")
            .build();
        assert_eq!(prompt, "Base with context");
    }

    #[test]
    fn test_each_preserves_order() {
        let prompt = PromptBuilder::new()
            .each(["a", "b", "c"], |b, item| b.text(item).text(";"))
            .build();
        assert_eq!(prompt, "a;b;c;");

        let empty: [&str; 0] = [];
        assert!(PromptBuilder::new().each(empty, |b, i| b.text(i)).is_empty());
    }

    #[test]
    fn test_is_empty_and_into_string() {
        assert!(PromptBuilder::new().is_empty());
        assert!(PromptBuilder::new().text("").is_empty());

        let s: String = PromptBuilder::new().text("Hello").into();
        assert_eq!(s, "Hello");
    }
}
