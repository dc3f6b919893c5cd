// src/domain/bookmark.rs
use crate::domain::error::{DomainError, DomainResult};
use std::fmt;
use std::path::{Path, PathBuf};

/// A named alias for a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub name: String,
    pub path: PathBuf,
}

impl Bookmark {
    /// Creates a bookmark after checking the name syntax.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> DomainResult<Self> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(DomainError::InvalidName(name));
        }
        Ok(Self {
            name,
            path: path.into(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.path.display())
    }
}

/// Bookmark names are non-empty and consist of ASCII letters, digits and `_` only,
/// so that they are valid as part of a shell variable name.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// All bookmarks of a store, in file order.
///
/// Names are unique: inserting an existing name replaces that entry in place,
/// a new name is appended at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookmarks {
    entries: Vec<Bookmark>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Bookmark> {
        self.entries.iter().find(|b| b.name == name)
    }

    /// Inserts or replaces, returning the previous entry for that name.
    pub fn insert(&mut self, bookmark: Bookmark) -> Option<Bookmark> {
        match self.entries.iter_mut().find(|b| b.name == bookmark.name) {
            Some(existing) => Some(std::mem::replace(existing, bookmark)),
            None => {
                self.entries.push(bookmark);
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Bookmark> {
        let idx = self.entries.iter().position(|b| b.name == name)?;
        Some(self.entries.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bookmark> {
        self.entries.iter()
    }
}

impl FromIterator<Bookmark> for Bookmarks {
    fn from_iter<I: IntoIterator<Item = Bookmark>>(iter: I) -> Self {
        let mut bookmarks = Bookmarks::new();
        for bookmark in iter {
            bookmarks.insert(bookmark);
        }
        bookmarks
    }
}

impl<'a> IntoIterator for &'a Bookmarks {
    type Item = &'a Bookmark;
    type IntoIter = std::slice::Iter<'a, Bookmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bm(name: &str, path: &str) -> Bookmark {
        Bookmark::new(name, path).unwrap()
    }

    #[test]
    fn given_invalid_names_when_validate_then_false() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("a b"));
        assert!(!is_valid_name("a-b"));
        assert!(!is_valid_name("näme"));
        assert!(!is_valid_name("a/b"));
    }

    #[test]
    fn given_valid_names_when_validate_then_true() {
        assert!(is_valid_name("abc_123"));
        assert!(is_valid_name("_"));
        assert!(is_valid_name("PROJECTS"));
    }

    #[test]
    fn given_invalid_name_when_new_bookmark_then_error() {
        let result = Bookmark::new("a-b", "/tmp");
        assert!(matches!(result, Err(DomainError::InvalidName(n)) if n == "a-b"));
    }

    #[test]
    fn given_existing_name_when_insert_then_replaced_in_place() {
        let mut bookmarks: Bookmarks = vec![bm("a", "/x"), bm("b", "/y")].into_iter().collect();

        let previous = bookmarks.insert(bm("a", "/z"));

        assert_eq!(previous, Some(bm("a", "/x")));
        let names: Vec<_> = bookmarks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(bookmarks.get("a").unwrap().path(), Path::new("/z"));
    }

    #[test]
    fn given_new_name_when_insert_then_appended() {
        let mut bookmarks = Bookmarks::new();
        assert!(bookmarks.insert(bm("b", "/y")).is_none());
        assert!(bookmarks.insert(bm("a", "/x")).is_none());

        let names: Vec<_> = bookmarks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn given_missing_name_when_remove_then_none_and_unchanged() {
        let mut bookmarks: Bookmarks = vec![bm("a", "/x")].into_iter().collect();
        let before = bookmarks.clone();

        assert!(bookmarks.remove("nope").is_none());
        assert_eq!(bookmarks, before);
        assert_eq!(bookmarks.remove("a"), Some(bm("a", "/x")));
        assert!(bookmarks.is_empty());
    }
}
