use crate::cli::ui::formatting::Formatter;
use crate::core::utils::parse_choice;

/// A single numbered option and the action it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem<A> {
    pub number: usize,
    pub label: String,
    pub action: A,
}

/// Declarative numbered menu.
///
/// Items render in insertion order; selection matches on the option number,
/// so `0` can sit last on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<A> {
    pub title: Option<String>,
    pub context: Vec<String>,
    pub items: Vec<MenuItem<A>>,
}

impl<A> Menu<A> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            context: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn untitled() -> Self {
        Self {
            title: None,
            context: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn with_context(mut self, line: impl Into<String>) -> Self {
        self.context.push(line.into());
        self
    }

    pub fn item(mut self, number: usize, label: impl Into<String>, action: A) -> Self {
        self.items.push(MenuItem {
            number,
            label: label.into(),
            action,
        });
        self
    }

    /// Resolves raw user input to an action; non-numeric or unknown numbers yield `None`.
    pub fn select(&self, input: &str) -> Option<&A> {
        let choice = parse_choice(input)?;
        self.items
            .iter()
            .find(|item| item.number == choice)
            .map(|item| &item.action)
    }

    pub fn render(&self, formatter: &Formatter) -> String {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(String::new());
            lines.push(formatter.header_text(title));
            lines.push(String::new());
        }
        if !self.context.is_empty() {
            lines.extend(self.context.iter().map(|line| formatter.detail_text(line)));
            lines.push(String::new());
        }
        lines.extend(
            self.items
                .iter()
                .map(|item| formatter.option_text(item.number, &item.label)),
        );
        lines.push(String::new());
        lines.join("\n")
    }
}
