#[derive(Debug, Clone)]
pub struct SavedLink {
    // rowid of the article, only meaningful for removal
    pub id: i64,
    // user snowflake of whoever saved it
    pub owner: u64,
    pub url: String,
}

impl SavedLink {
    #[inline(always)]
    pub const fn new(id: i64, owner: u64, url: String) -> SavedLink {
        SavedLink { id, owner, url }
    }
}

impl PartialEq for SavedLink {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SavedLink {}
