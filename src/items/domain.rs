use crate::core::domain::Identifiable;
use crate::core::library::ItemStatus;

pub mod model;

// Item is the shared capability of catalog holdings. Print and electronic
// variants produce the same base description; the electronic variant appends
// its file size through the default describe below.
pub(crate) trait Item: Identifiable {
    fn title(&self) -> String;
    fn author(&self) -> String;
    fn genre(&self) -> String;
    fn publication_year(&self) -> i32;
    fn status(&self) -> ItemStatus;
    fn file_size_mb(&self) -> Option<f64>;

    // case-insensitive substring test against the title only
    fn matches(&self, keyword: &str) -> bool {
        self.title().to_lowercase().contains(keyword.to_lowercase().as_str())
    }

    fn describe(&self) -> String {
        let base = format!("{} by {} ({}, {}) - {}",
                           self.title(), self.author(), self.genre(),
                           self.publication_year(), self.status());
        match self.file_size_mb() {
            Some(size) => format!("{} [E-Book: {}MB]", base, size),
            None => base,
        }
    }
}
