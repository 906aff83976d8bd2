//! Campaign collection for the signed-in user

use crate::models::{Campaign, CampaignFields};

/// Load lifecycle of the collection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loading {
        request_id: u64,
    },
    Loaded,
}

/// Campaigns ordered most-recent-first, plus list cursor and detail selection
#[derive(Clone, Debug, Default)]
pub struct CampaignBook {
    items: Vec<Campaign>,
    load: LoadState,
    selected: usize,
    detail: Option<i64>,
}

impl CampaignBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything. Returns the id of a load still in flight, if any.
    pub fn clear(&mut self) -> Option<u64> {
        let in_flight = self.loading_id();
        *self = Self::default();
        in_flight
    }

    /// Start a load. Returns the id of the load it supersedes.
    pub fn begin_load(&mut self, request_id: u64) -> Option<u64> {
        let superseded = self.loading_id();
        self.load = LoadState::Loading { request_id };
        superseded
    }

    /// Apply a load result. Responses from superseded loads are discarded.
    pub fn finish_load(&mut self, request_id: u64, campaigns: Vec<Campaign>) -> bool {
        if self.loading_id() != Some(request_id) {
            return false;
        }
        self.items = campaigns;
        self.load = LoadState::Loaded;
        self.selected = 0;
        true
    }

    /// A failed load leaves the collection empty but settled
    pub fn fail_load(&mut self, request_id: u64) -> bool {
        if self.loading_id() != Some(request_id) {
            return false;
        }
        self.items.clear();
        self.load = LoadState::Loaded;
        self.selected = 0;
        true
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading { .. })
    }

    fn loading_id(&self) -> Option<u64> {
        match self.load {
            LoadState::Loading { request_id } => Some(request_id),
            _ => None,
        }
    }

    pub fn items(&self) -> &[Campaign] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Campaign> {
        self.items.iter().find(|c| c.id == id)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&Campaign> {
        self.items.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.items.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.items.len() - 1);
        }
    }

    /// Prepend a record returned by a successful create
    pub fn insert_created(&mut self, campaign: Campaign) {
        self.items.insert(0, campaign);
        self.selected = 0;
    }

    /// Merge confirmed update fields into the matching record
    pub fn apply_update(&mut self, id: i64, fields: &CampaignFields) -> bool {
        match self.items.iter_mut().find(|c| c.id == id) {
            Some(campaign) => {
                campaign.merge(fields);
                true
            }
            None => false,
        }
    }

    /// Remove a record after the server confirmed deletion. Unknown ids are a no-op.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|c| c.id != id);
        if self.detail == Some(id) {
            self.detail = None;
        }
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
        self.items.len() != before
    }

    pub fn open_detail(&mut self, id: i64) {
        if self.get(id).is_some() {
            self.detail = Some(id);
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn detail(&self) -> Option<&Campaign> {
        self.detail.and_then(|id| self.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(id: i64, name: &str) -> Campaign {
        Campaign {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_superseded_load_is_discarded() {
        let mut book = CampaignBook::new();
        assert_eq!(book.begin_load(1), None);
        assert_eq!(book.begin_load(2), Some(1));

        assert!(!book.finish_load(1, vec![campaign(1, "stale")]));
        assert!(book.is_empty());
        assert!(book.is_loading());

        assert!(book.finish_load(2, vec![campaign(2, "fresh")]));
        assert_eq!(book.items()[0].name, "fresh");
        assert_eq!(book.load_state(), LoadState::Loaded);
    }

    #[test]
    fn test_created_campaign_is_prepended() {
        let mut book = CampaignBook::new();
        book.begin_load(1);
        book.finish_load(1, vec![campaign(1, "older")]);
        book.select_next();

        book.insert_created(campaign(2, "newer"));
        assert_eq!(book.items()[0].id, 2);
        assert_eq!(book.selected().map(|c| c.id), Some(2));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut book = CampaignBook::new();
        book.insert_created(campaign(1, "only"));
        assert!(!book.remove(42));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_delete_clears_open_detail() {
        let mut book = CampaignBook::new();
        book.insert_created(campaign(1, "a"));
        book.insert_created(campaign(2, "b"));
        book.open_detail(1);
        assert_eq!(book.detail().map(|c| c.id), Some(1));

        assert!(book.remove(2));
        assert!(book.detail().is_some());
        assert!(book.remove(1));
        assert!(book.detail().is_none());
        assert_eq!(book.selected_index(), 0);
    }

    #[test]
    fn test_update_merges_into_matching_record() {
        let mut book = CampaignBook::new();
        book.insert_created(campaign(5, "before"));
        let fields = CampaignFields {
            name: "after".into(),
            recipient_emails: vec!["b@y.com".into()],
            ..Default::default()
        };
        assert!(book.apply_update(5, &fields));
        assert!(!book.apply_update(6, &fields));
        let c = book.get(5).unwrap();
        assert_eq!(c.name, "after");
        assert_eq!(c.recipient_emails, vec!["b@y.com"]);
    }

    #[test]
    fn test_clear_reports_in_flight_load() {
        let mut book = CampaignBook::new();
        book.begin_load(9);
        assert_eq!(book.clear(), Some(9));
        assert_eq!(book.load_state(), LoadState::Unloaded);
        assert_eq!(book.clear(), None);
    }
}
