use crate::models::RepositorySummary;

/// Number of repository cards rendered per "load more".
pub const PAGE_SIZE: usize = 6;

/// Repositories of the current user and how many of them have been rendered.
///
/// A new state is built for every successful repository fetch; the previous
/// user's list is dropped, never merged.
#[derive(Debug, Default, Clone)]
pub struct PaginationState {
    repos: Vec<RepositorySummary>,
    cursor: usize,
}

/// One batch handed to the repository renderer.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a> {
    pub items: &'a [RepositorySummary],
    /// First page of the sequence: the rendered list is replaced, not extended.
    pub replace: bool,
    /// Whether the "load more" control stays visible after this page.
    pub has_more: bool,
}

impl PaginationState {
    pub fn new(repos: Vec<RepositorySummary>) -> Self {
        Self { repos, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    /// Number of repositories rendered so far.
    pub fn cursor(&self) -> usize {
        self.cursor.min(self.repos.len())
    }

    /// Take the next slice of at most [`PAGE_SIZE`] repositories and advance
    /// the cursor by a page. The first call always replaces the rendered list,
    /// even when the sequence is empty. Once the sequence is exhausted this
    /// returns an empty, non-replacing page and leaves the cursor alone.
    pub fn next_page(&mut self) -> Page<'_> {
        let len = self.repos.len();
        let start = self.cursor;
        let replace = start == 0;
        if replace || start < len {
            self.cursor = start + PAGE_SIZE;
        }

        Page {
            items: &self.repos[start.min(len)..(start + PAGE_SIZE).min(len)],
            replace,
            has_more: self.cursor < len,
        }
    }
}
