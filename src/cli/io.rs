use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    io::{self, BufRead, Write},
    rc::Rc,
};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::cli::CliError;

/// Source of answers for the menu prompts.
pub trait LineReader {
    /// Shows `prompt` and reads one line; `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
}

/// Interactive reader backed by a rustyline editor with in-session history.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads plain lines from any buffered source, echoing each answer so the
/// transcript on stdout reads like an interactive session.
pub struct ScriptReader<R> {
    reader: R,
}

impl<R: BufRead> ScriptReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineReader for ScriptReader<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        // Non-UTF-8 bytes are replaced, not reported as an I/O error.
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            writeln!(stdout)?;
            return Ok(None);
        }
        let answer = String::from_utf8_lossy(&raw)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        writeln!(stdout, "{answer}")?;
        Ok(Some(answer))
    }
}

/// Pre-loaded answers, handed out in order.
///
/// Clones share the same queue, so a caller can keep a handle after boxing
/// the reader into a shell and inspect what was consumed.
#[derive(Debug, Default, Clone)]
pub struct QueueReader {
    answers: Rc<RefCell<VecDeque<String>>>,
    reads_past_end: Rc<Cell<usize>>,
}

impl QueueReader {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Rc::new(RefCell::new(answers.into_iter().map(Into::into).collect())),
            reads_past_end: Rc::default(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    /// True once a prompt found the queue empty, i.e. the run ended on
    /// closed input rather than an explicit exit.
    pub fn exhausted(&self) -> bool {
        self.reads_past_end.get() > 0
    }
}

impl LineReader for QueueReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let answer = self.answers.borrow_mut().pop_front();
        match &answer {
            Some(value) => println!("{prompt}{value}"),
            None => {
                self.reads_past_end.set(self.reads_past_end.get() + 1);
                println!("{prompt}");
            }
        }
        Ok(answer)
    }
}
