use crate::endpoints::talents::ListTalents;

pub struct TalentRepository;

impl TalentRepository {
    pub fn new() -> Self {
        Self {}
    }

    /// The endpoint has no server-side search; filtering happens in the caller.
    pub fn list(&self) -> ListTalents {
        ListTalents::default()
    }
}

impl Default for TalentRepository {
    fn default() -> Self {
        Self::new()
    }
}
