// In: src/table/column.rs

//! Column descriptors: what a column is called, what the user may do with it,
//! and how its value is displayed.

use std::fmt;

use crate::types::CellValue;

/// Display-only formatting for a cell. Must be pure.
pub type Renderer<R> = Box<dyn Fn(&CellValue, &R) -> String + Send + Sync>;

pub struct ColumnDescriptor<R> {
    /// Matches the key the record type answers in `Record::value`.
    pub key: String,
    pub display_label: String,
    pub sortable: bool,
    pub filterable: bool,
    pub hideable: bool,
    render: Option<Renderer<R>>,
}

impl<R> ColumnDescriptor<R> {
    /// A sortable, hideable, non-filterable column with no custom renderer.
    pub fn new(key: impl Into<String>, display_label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_label: display_label.into(),
            sortable: true,
            filterable: false,
            hideable: true,
            render: None,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn hideable(mut self, hideable: bool) -> Self {
        self.hideable = hideable;
        self
    }

    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &R) -> String + Send + Sync + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    pub fn has_render(&self) -> bool {
        self.render.is_some()
    }

    /// Formats `value` for display. Falls back to the raw text.
    pub fn render(&self, value: &CellValue, record: &R) -> String {
        match &self.render {
            Some(render) => render(value, record),
            None => value.to_string(),
        }
    }
}

impl<R> fmt::Debug for ColumnDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("display_label", &self.display_label)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("hideable", &self.hideable)
            .field("render", &self.has_render())
            .finish()
    }
}

pub(crate) fn find_column<'a, R>(
    columns: &'a [ColumnDescriptor<R>],
    key: &str,
) -> Option<&'a ColumnDescriptor<R>> {
    columns.iter().find(|c| c.key == key)
}
