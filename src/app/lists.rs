//! Named sender/receiver lists and the list-builder working set

use indexmap::IndexSet;
use std::fs;
use std::path::Path;

use crate::emails::{extract_emails, merge_into};
use crate::error::ValidationError;
use crate::models::{ListKind, NamedList, NamedLists};

/// Both categories of lists as last loaded from the backend
#[derive(Clone, Debug, Default)]
pub struct ListBook {
    lists: NamedLists,
}

impl ListBook {
    pub fn load_all(&mut self, lists: NamedLists) {
        self.lists = lists;
    }

    pub fn clear(&mut self) {
        self.lists = NamedLists::default();
    }

    pub fn all(&self) -> &NamedLists {
        &self.lists
    }

    pub fn of(&self, kind: ListKind) -> &[NamedList] {
        self.lists.of(kind)
    }

    pub fn names(&self, kind: ListKind) -> Vec<&str> {
        self.of(kind).iter().map(|l| l.list_name.as_str()).collect()
    }

    pub fn find(&self, kind: ListKind, name: &str) -> Option<&NamedList> {
        self.of(kind).iter().find(|l| l.list_name == name)
    }

    /// Replace the list with the same name or append it
    pub fn upsert(&mut self, kind: ListKind, list: NamedList) {
        let lists = self.lists.of_mut(kind);
        match lists.iter_mut().find(|l| l.list_name == list.list_name) {
            Some(existing) => *existing = list,
            None => lists.push(list),
        }
    }

    pub fn remove(&mut self, kind: ListKind, name: &str) -> bool {
        let lists = self.lists.of_mut(kind);
        let before = lists.len();
        lists.retain(|l| l.list_name != name);
        lists.len() != before
    }
}

/// Focusable inputs on the list-builder page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Name,
    Emails,
    File,
}

impl EditorField {
    pub fn next(&self) -> EditorField {
        match self {
            EditorField::Name => EditorField::Emails,
            EditorField::Emails => EditorField::File,
            EditorField::File => EditorField::Name,
        }
    }

    pub fn prev(&self) -> EditorField {
        match self {
            EditorField::Name => EditorField::File,
            EditorField::Emails => EditorField::Name,
            EditorField::File => EditorField::Emails,
        }
    }
}

/// Working set being edited before a list is saved.
///
/// Manually entered addresses and addresses imported from a file are kept
/// apart until save, where they are unioned.
#[derive(Clone, Debug, Default)]
pub struct ListEditor {
    pub kind: ListKind,
    pub name: String,
    pub email_input: String,
    pub file_path: String,
    pub field: EditorField,
    pub show_emails: bool,
    pub selected_email: usize,
    manual: IndexSet<String>,
    staged: IndexSet<String>,
    staged_file: Option<String>,
    existing_cursor: Option<usize>,
}

impl ListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manual(&self) -> &IndexSet<String> {
        &self.manual
    }

    pub fn staged(&self) -> &IndexSet<String> {
        &self.staged
    }

    pub fn staged_file(&self) -> Option<&str> {
        self.staged_file.as_deref()
    }

    /// Manual addresses followed by staged ones, as displayed
    pub fn all_emails(&self) -> Vec<&String> {
        self.manual.iter().chain(self.staged.iter()).collect()
    }

    pub fn email_count(&self) -> usize {
        self.manual.len() + self.staged.len()
    }

    /// Merge every valid address in `text` into the manual set
    pub fn add_manual_emails(&mut self, text: &str) -> Result<usize, ValidationError> {
        let found = extract_emails(text);
        if found.is_empty() {
            return Err(ValidationError::NoValidEmails);
        }
        Ok(merge_into(&mut self.manual, found))
    }

    /// Add whatever is typed in the email input, clearing it on success
    pub fn add_from_input(&mut self) -> Result<usize, ValidationError> {
        if self.email_input.trim().is_empty() {
            return Ok(0);
        }
        let input = std::mem::take(&mut self.email_input);
        match self.add_manual_emails(&input) {
            Ok(added) => Ok(added),
            Err(e) => {
                self.email_input = input;
                Err(e)
            }
        }
    }

    /// Replace the staged set with the valid addresses found in a file's contents
    pub fn import_from_file(&mut self, file_name: &str, contents: &str) -> Result<usize, ValidationError> {
        self.staged_file = Some(file_name.to_string());
        self.staged = extract_emails(contents).into_iter().collect();
        if self.staged.is_empty() {
            return Err(ValidationError::NoValidEmailsInFile);
        }
        Ok(self.staged.len())
    }

    /// Read the file named in the path input and stage its addresses
    pub fn import_path(&mut self) -> Result<usize, ValidationError> {
        let raw = self.file_path.trim().to_string();
        if raw.is_empty() {
            return Err(ValidationError::MissingField("File path"));
        }
        let path = expand_home(&raw);
        let contents = fs::read_to_string(Path::new(&path)).map_err(|e| {
            tracing::warn!(path = %path, error = %e, "Could not read import file");
            ValidationError::UnreadableFile
        })?;
        let file_name = Path::new(&path)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or(raw);
        self.import_from_file(&file_name, &contents)
    }

    /// Validate and build the list to persist: manual ∪ staged
    pub fn prepare_save(&self) -> Result<NamedList, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingListName);
        }
        if self.manual.is_empty() && self.staged.is_empty() {
            return Err(ValidationError::NoEmails);
        }
        let mut all = self.manual.clone();
        merge_into(&mut all, self.staged.iter().cloned());
        Ok(NamedList {
            list_name: name.to_string(),
            emails: all.into_iter().collect(),
        })
    }

    /// After a confirmed save: staged file state goes, manual entries stay
    pub fn mark_saved(&mut self) {
        self.staged.clear();
        self.staged_file = None;
        self.file_path.clear();
        self.clamp_selection();
    }

    pub fn prepare_delete(&self) -> Result<String, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingListName);
        }
        Ok(name.to_string())
    }

    /// Clear all editing state, keeping the selected category
    pub fn reset(&mut self) {
        *self = ListEditor {
            kind: self.kind,
            ..Self::default()
        };
    }

    /// Load a stored list, replacing the working set
    pub fn select_existing(&mut self, list: &NamedList) {
        self.name = list.list_name.clone();
        self.manual = list.emails.iter().cloned().collect();
        self.staged.clear();
        self.staged_file = None;
        self.selected_email = 0;
    }

    /// Step through the stored lists of the current category
    pub fn cycle_existing(&mut self, book: &ListBook) -> Option<String> {
        let lists = book.of(self.kind);
        if lists.is_empty() {
            return None;
        }
        let next = self.existing_cursor.map(|i| (i + 1) % lists.len()).unwrap_or(0);
        self.existing_cursor = Some(next);
        let list = &lists[next];
        self.select_existing(list);
        Some(list.list_name.clone())
    }

    pub fn switch_kind(&mut self) {
        self.kind = self.kind.toggle();
        self.existing_cursor = None;
    }

    pub fn toggle_view(&mut self) {
        self.show_emails = !self.show_emails && self.email_count() > 0;
    }

    pub fn next_email(&mut self) {
        let count = self.email_count();
        if count > 0 {
            self.selected_email = (self.selected_email + 1) % count;
        }
    }

    pub fn prev_email(&mut self) {
        let count = self.email_count();
        if count > 0 {
            self.selected_email = self.selected_email.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Remove by position in the combined manual-then-staged view
    pub fn remove_email(&mut self, index: usize) -> Option<String> {
        let removed = if index < self.manual.len() {
            self.manual.shift_remove_index(index)
        } else {
            self.staged.shift_remove_index(index - self.manual.len())
        };
        self.clamp_selection();
        removed
    }

    fn clamp_selection(&mut self) {
        let count = self.email_count();
        if self.selected_email >= count {
            self.selected_email = count.saturating_sub(1);
        }
        if count == 0 {
            self.show_emails = false;
        }
    }

    /// Text of the focused input
    pub fn input_mut(&mut self) -> &mut String {
        match self.field {
            EditorField::Name => &mut self.name,
            EditorField::Emails => &mut self.email_input,
            EditorField::File => &mut self.file_path,
        }
    }
}

fn expand_home(path: &str) -> String {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return format!("{}{}", home.to_string_lossy(), rest);
        }
    }
    path.to_string()
}

/// Cursor and popup state of the list manager page
#[derive(Clone, Debug, Default)]
pub struct ListManagerView {
    pub kind: ListKind,
    pub selected: usize,
    pub viewing: Option<String>,
}

impl ListManagerView {
    pub fn switch_kind(&mut self) {
        self.kind = self.kind.toggle();
        self.selected = 0;
        self.viewing = None;
    }

    pub fn next(&mut self, book: &ListBook) {
        let len = book.of(self.kind).len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn prev(&mut self, book: &ListBook) {
        let len = book.of(self.kind).len();
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn selected_name(&self, book: &ListBook) -> Option<String> {
        book.of(self.kind).get(self.selected).map(|l| l.list_name.clone())
    }

    pub fn clamp(&mut self, book: &ListBook) {
        let len = book.of(self.kind).len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
