//! Three-step campaign create/edit form: Details -> Recipients -> Finalize

use crate::app::lists::ListBook;
use crate::constants::{MAX_RECIPIENT_SLOTS, MAX_SENDER_SLOTS};
use crate::emails::is_valid_email;
use crate::error::ValidationError;
use crate::models::{Campaign, CampaignDraft, ListKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Details,
    Recipients,
    Finalize,
}

impl WizardStep {
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Details => 1,
            WizardStep::Recipients => 2,
            WizardStep::Finalize => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Details => "Details",
            WizardStep::Recipients => "Recipients",
            WizardStep::Finalize => "Finalize",
        }
    }
}

/// An input on the current step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardField {
    Topic,
    Subtopic,
    Sender(usize),
    Recipient(usize),
    Name,
}

/// State of the campaign modal. `editing` holds the id of the record being edited.
#[derive(Clone, Debug)]
pub struct CampaignWizard {
    pub editing: Option<i64>,
    pub step: WizardStep,
    pub focus: usize,
    pub topic: String,
    pub subtopic: String,
    pub name: String,
    pub senders: Vec<String>,
    pub recipients: Vec<String>,
    pub sender_list: Option<String>,
    pub recipient_list: Option<String>,
}

impl Default for CampaignWizard {
    fn default() -> Self {
        CampaignWizard {
            editing: None,
            step: WizardStep::Details,
            focus: 0,
            topic: String::new(),
            subtopic: String::new(),
            name: String::new(),
            senders: vec![String::new()],
            recipients: vec![String::new()],
            sender_list: None,
            recipient_list: None,
        }
    }
}

impl CampaignWizard {
    /// Fresh form for a new campaign
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled from an existing record
    pub fn edit(campaign: &Campaign) -> Self {
        let draft = campaign.to_draft();
        CampaignWizard {
            editing: Some(campaign.id),
            senders: slots(&draft.sender_emails),
            recipients: slots(&draft.recipient_emails),
            topic: draft.topic,
            subtopic: draft.subtopic,
            name: draft.name,
            ..Self::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// Inputs shown on the current step, in focus order
    pub fn fields(&self) -> Vec<WizardField> {
        match self.step {
            WizardStep::Details => {
                let mut fields = vec![WizardField::Topic, WizardField::Subtopic];
                fields.extend((0..self.senders.len()).map(WizardField::Sender));
                fields
            }
            WizardStep::Recipients => (0..self.recipients.len()).map(WizardField::Recipient).collect(),
            WizardStep::Finalize => vec![WizardField::Name],
        }
    }

    pub fn focused(&self) -> Option<WizardField> {
        self.fields().get(self.focus).copied()
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focused()? {
            WizardField::Topic => Some(&mut self.topic),
            WizardField::Subtopic => Some(&mut self.subtopic),
            WizardField::Sender(i) => self.senders.get_mut(i),
            WizardField::Recipient(i) => self.recipients.get_mut(i),
            WizardField::Name => Some(&mut self.name),
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(input) = self.focused_input() {
            input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input() {
            input.pop();
        }
    }

    pub fn next_field(&mut self) {
        let len = self.fields().len();
        if len > 0 {
            self.focus = (self.focus + 1) % len;
        }
    }

    pub fn prev_field(&mut self) {
        let len = self.fields().len();
        if len > 0 {
            self.focus = self.focus.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Grow the email slots of the current step, up to its limit
    pub fn add_slot(&mut self) {
        match self.step {
            WizardStep::Details if self.senders.len() < MAX_SENDER_SLOTS => {
                self.senders.push(String::new())
            }
            WizardStep::Recipients if self.recipients.len() < MAX_RECIPIENT_SLOTS => {
                self.recipients.push(String::new())
            }
            _ => {}
        }
    }

    /// Drop the last email slot of the current step, keeping at least one
    pub fn remove_slot(&mut self) {
        match self.step {
            WizardStep::Details if self.senders.len() > 1 => {
                self.senders.pop();
            }
            WizardStep::Recipients if self.recipients.len() > 1 => {
                self.recipients.pop();
            }
            _ => {}
        }
        let len = self.fields().len();
        if self.focus >= len {
            self.focus = len.saturating_sub(1);
        }
    }

    /// Category of list that can be loaded on this step
    pub fn list_kind(&self) -> Option<ListKind> {
        match self.step {
            WizardStep::Details => Some(ListKind::Senders),
            WizardStep::Recipients => Some(ListKind::Receivers),
            WizardStep::Finalize => None,
        }
    }

    /// Load the next stored list of this step's category into its slots
    pub fn cycle_list(&mut self, book: &ListBook) -> Option<String> {
        let kind = self.list_kind()?;
        let lists = book.of(kind);
        if lists.is_empty() {
            return None;
        }
        let current = match kind {
            ListKind::Senders => self.sender_list.as_deref(),
            ListKind::Receivers => self.recipient_list.as_deref(),
        };
        let next = current
            .and_then(|name| lists.iter().position(|l| l.list_name == name))
            .map(|i| (i + 1) % lists.len())
            .unwrap_or(0);
        let list = &lists[next];
        match kind {
            ListKind::Senders => {
                self.senders = slots(&list.emails);
                self.sender_list = Some(list.list_name.clone());
            }
            ListKind::Receivers => {
                self.recipients = slots(&list.emails);
                self.recipient_list = Some(list.list_name.clone());
            }
        }
        self.focus = 0;
        Some(list.list_name.clone())
    }

    /// Check the inputs of the current step
    pub fn validate_step(&self) -> Result<(), ValidationError> {
        match self.step {
            WizardStep::Details => {
                if self.topic.trim().is_empty() {
                    return Err(ValidationError::MissingField("Campaign topic"));
                }
                if self.subtopic.trim().is_empty() {
                    return Err(ValidationError::MissingField("Subtopic"));
                }
                check_slots(&self.senders, "Sender email")
            }
            WizardStep::Recipients => check_slots(&self.recipients, "Client email"),
            WizardStep::Finalize => Ok(()),
        }
    }

    /// Move forward when the step is valid. On the last step, yields the draft to submit.
    pub fn advance(&mut self) -> Result<Option<CampaignDraft>, ValidationError> {
        self.validate_step()?;
        match self.step {
            WizardStep::Details => self.step = WizardStep::Recipients,
            WizardStep::Recipients => self.step = WizardStep::Finalize,
            WizardStep::Finalize => return Ok(Some(self.draft())),
        }
        self.focus = 0;
        Ok(None)
    }

    /// Step back without losing anything typed
    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::Details | WizardStep::Recipients => WizardStep::Details,
            WizardStep::Finalize => WizardStep::Recipients,
        };
        self.focus = 0;
    }

    pub fn draft(&self) -> CampaignDraft {
        CampaignDraft {
            name: self.name.trim().to_string(),
            topic: self.topic.trim().to_string(),
            subtopic: self.subtopic.trim().to_string(),
            sender_emails: self.senders.clone(),
            recipient_emails: self.recipients.clone(),
        }
    }
}

/// One slot per stored address. The slot limits only bound `add_slot`.
fn slots(emails: &[String]) -> Vec<String> {
    if emails.is_empty() {
        return vec![String::new()];
    }
    emails.to_vec()
}

fn check_slots(slots: &[String], label: &'static str) -> Result<(), ValidationError> {
    for slot in slots {
        let slot = slot.trim();
        if slot.is_empty() {
            return Err(ValidationError::MissingField(label));
        }
        if !is_valid_email(slot) {
            return Err(ValidationError::InvalidEmail(slot.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NamedList;

    fn type_str(wizard: &mut CampaignWizard, text: &str) {
        text.chars().for_each(|c| wizard.push_char(c));
    }

    #[test]
    fn test_details_require_topic_and_valid_senders() {
        let mut wizard = CampaignWizard::new();
        assert_eq!(wizard.advance(), Err(ValidationError::MissingField("Campaign topic")));

        type_str(&mut wizard, "Q4 Launch");
        wizard.next_field();
        type_str(&mut wizard, "New feature");
        wizard.next_field();
        assert_eq!(wizard.focused(), Some(WizardField::Sender(0)));
        type_str(&mut wizard, "not-an-email");
        assert!(matches!(wizard.advance(), Err(ValidationError::InvalidEmail(_))));
        assert_eq!(wizard.step, WizardStep::Details);

        wizard.senders[0] = "a@x.com".into();
        assert_eq!(wizard.advance(), Ok(None));
        assert_eq!(wizard.step, WizardStep::Recipients);
    }

    #[test]
    fn test_back_keeps_data() {
        let mut wizard = CampaignWizard::new();
        wizard.topic = "T".into();
        wizard.subtopic = "S".into();
        wizard.senders[0] = "a@x.com".into();
        wizard.advance().unwrap();
        wizard.recipients[0] = "b@y.com".into();
        wizard.advance().unwrap();
        assert_eq!(wizard.step, WizardStep::Finalize);

        wizard.back();
        wizard.back();
        assert_eq!(wizard.step, WizardStep::Details);
        assert_eq!(wizard.topic, "T");
        assert_eq!(wizard.recipients, vec!["b@y.com"]);
    }

    #[test]
    fn test_finalize_yields_draft_with_duplicates() {
        let mut wizard = CampaignWizard::new();
        wizard.topic = "Q4 Launch".into();
        wizard.subtopic = "New feature".into();
        wizard.senders[0] = "a@x.com".into();
        wizard.advance().unwrap();
        wizard.add_slot();
        wizard.recipients = vec!["b@y.com".into(), "b@y.com".into()];
        wizard.advance().unwrap();

        let draft = wizard.advance().unwrap().expect("draft on last step");
        let fields = draft.into_fields();
        assert_eq!(fields.name, "Q4 Launch - New feature");
        assert_eq!(fields.recipient_emails.len(), 2);
    }

    #[test]
    fn test_slot_limits() {
        let mut wizard = CampaignWizard::new();
        for _ in 0..20 {
            wizard.add_slot();
        }
        assert_eq!(wizard.senders.len(), MAX_SENDER_SLOTS);
        for _ in 0..20 {
            wizard.remove_slot();
        }
        assert_eq!(wizard.senders.len(), 1);
    }

    #[test]
    fn test_cycle_list_replaces_slots() {
        let mut book = ListBook::default();
        book.upsert(
            ListKind::Senders,
            NamedList {
                list_name: "Team".into(),
                emails: vec!["a@x.com".into(), "b@x.com".into()],
            },
        );
        let mut wizard = CampaignWizard::new();
        wizard.senders[0] = "typed@x.com".into();
        assert_eq!(wizard.cycle_list(&book).as_deref(), Some("Team"));
        assert_eq!(wizard.senders, vec!["a@x.com", "b@x.com"]);

        wizard.step = WizardStep::Recipients;
        assert_eq!(wizard.cycle_list(&book), None);
    }

    #[test]
    fn test_edit_prefills() {
        let campaign = Campaign {
            id: 3,
            name: "N".into(),
            topic: "T".into(),
            subtopic: "S".into(),
            sender_emails: vec![],
            recipient_emails: vec!["r@x.com".into()],
            created_at: None,
        };
        let wizard = CampaignWizard::edit(&campaign);
        assert!(wizard.is_edit());
        assert_eq!(wizard.senders, vec![""]);
        assert_eq!(wizard.recipients, vec!["r@x.com"]);
    }

    #[test]
    fn test_edit_keeps_senders_beyond_slot_limit() {
        let senders: Vec<String> = (0..15).map(|i| format!("s{}@x.com", i)).collect();
        let campaign = Campaign {
            id: 8,
            name: "Big".into(),
            topic: "T".into(),
            subtopic: "S".into(),
            sender_emails: senders.clone(),
            recipient_emails: vec!["r@x.com".into()],
            created_at: None,
        };
        let mut wizard = CampaignWizard::edit(&campaign);
        assert_eq!(wizard.senders.len(), 15);

        wizard.add_slot();
        assert_eq!(wizard.senders.len(), 15);

        assert_eq!(wizard.advance(), Ok(None));
        assert_eq!(wizard.advance(), Ok(None));
        let fields = wizard.advance().unwrap().expect("draft on last step").into_fields();
        assert_eq!(fields.sender_emails, senders);
    }

    #[test]
    fn test_cycle_list_keeps_long_list() {
        let emails: Vec<String> = (0..15).map(|i| format!("m{}@x.com", i)).collect();
        let mut book = ListBook::default();
        book.upsert(
            ListKind::Senders,
            NamedList {
                list_name: "Everyone".into(),
                emails: emails.clone(),
            },
        );
        let mut wizard = CampaignWizard::new();
        wizard.cycle_list(&book);
        assert_eq!(wizard.senders, emails);
    }
}
