use crate::structs::ranked_category::RankedCategory;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoverageRanking {
    pub entries: Vec<RankedCategory>,
    pub next_target: Option<String>,
}

impl CoverageRanking {
    pub fn next_target_entry(&self) -> Option<&RankedCategory> {
        let target = self.next_target.as_deref()?;
        self.entries.iter().find(|entry| entry.name == target)
    }

    pub const fn is_complete(&self) -> bool {
        self.next_target.is_none()
    }
}
