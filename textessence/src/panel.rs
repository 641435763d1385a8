use shared::Error;
use shared_http::api::MembershipRecord;

use crate::context::CorpusSelection;
use crate::render;

/// One row of the corpus selection table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipRow {
    pub source: String,
    pub checked: bool,
}

impl From<MembershipRecord> for MembershipRow {
    fn from(record: MembershipRecord) -> Self {
        Self {
            source: record.source,
            checked: record.checked.is_included(),
        }
    }
}

/// View state of the corpus selection panel.
///
/// Starts hidden and empty. A successful fetch replaces every row and shows
/// the panel; a failed one hides it and keeps only the error message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipPanel {
    rows: Vec<MembershipRow>,
    visible: bool,
    error: Option<String>,
}

impl MembershipPanel {
    pub fn rows(&self) -> &[MembershipRow] {
        &self.rows
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn show(&mut self, records: Vec<MembershipRecord>) {
        self.rows.clear();
        self.rows.extend(records.into_iter().map(MembershipRow::from));
        self.visible = true;
        self.error = None;
    }

    pub(crate) fn fail(&mut self, error: &Error) {
        self.rows.clear();
        self.visible = false;
        self.error = Some(error.to_string());
    }

    /// Flips the checkbox of the row at `index`. Returns false when there is no such row.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.checked = !row.checked;
                true
            }
            None => false,
        }
    }

    /// Corpora whose checkbox is ticked, in row order.
    pub fn selected_corpora(&self) -> CorpusSelection {
        CorpusSelection::new(
            self.rows
                .iter()
                .filter(|row| row.checked)
                .map(|row| row.source.as_str()),
        )
    }

    pub fn render_html(&self) -> String {
        render::table_body(&self.rows)
    }
}
