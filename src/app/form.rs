//! Shared create/edit form for travel records.
//!
//! A single [`FormMediator`] serves both creating and editing. Its mode is an
//! explicit state machine:
//!
//! ```text
//!            begin_create                 submit (valid) / cancel
//!   Idle ─────────────────▶ Creating ──────────────────────────▶ Idle
//!     │      begin_edit(id)                submit (valid) / cancel
//!     └───────────────────▶ Editing(id) ───────────────────────▶ Idle
//! ```
//!
//! An invalid submit leaves the mode unchanged and flags the form so blank
//! fields are highlighted. The mediator writes to the [`RecordStore`]; the
//! caller re-renders the table and shows the toast for the returned
//! [`SubmitOutcome`].

use crate::domain::{RecordFields, RecordId, TravelRecord};
use crate::storage::RecordStore;
use std::fmt;

/// Input fields in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormField {
    #[default]
    Name,
    Rank,
    Destination,
    Purpose,
    Departure,
    Return,
}

impl FormField {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Rank,
        Self::Destination,
        Self::Purpose,
        Self::Departure,
        Self::Return,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Rank => "Rank",
            Self::Destination => "Destination",
            Self::Purpose => "Purpose",
            Self::Departure => "Departure",
            Self::Return => "Return",
        }
    }

    const fn position(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn value(self, fields: &RecordFields) -> &str {
        match self {
            Self::Name => &fields.name,
            Self::Rank => &fields.rank,
            Self::Destination => &fields.destination,
            Self::Purpose => &fields.purpose,
            Self::Departure => &fields.departure,
            Self::Return => &fields.return_date,
        }
    }

    fn value_mut(self, fields: &mut RecordFields) -> &mut String {
        match self {
            Self::Name => &mut fields.name,
            Self::Rank => &mut fields.rank,
            Self::Destination => &mut fields.destination,
            Self::Purpose => &mut fields.purpose,
            Self::Departure => &mut fields.departure,
            Self::Return => &mut fields.return_date,
        }
    }
}

/// Required fields left blank on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub missing: Vec<FormField>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.missing.iter().map(|field| field.label()).collect();
        write!(f, "required fields are blank: {}", labels.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks that every attribute is present.
///
/// Presence only: any non-empty value passes, including whitespace, and
/// values are returned untouched.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing every blank field in tab order.
///
/// # Examples
///
/// ```
/// use travel_authority::app::form::{validate, FormField};
/// use travel_authority::domain::RecordFields;
///
/// let fields = RecordFields { name: "  ".into(), ..Default::default() };
/// let errors = validate(&fields).unwrap_err();
/// assert_eq!(errors.missing.len(), 5);
/// assert_eq!(errors.missing[0], FormField::Rank);
/// ```
pub fn validate(fields: &RecordFields) -> Result<RecordFields, ValidationErrors> {
    let missing: Vec<FormField> = FormField::ALL
        .into_iter()
        .filter(|field| field.value(fields).is_empty())
        .collect();

    if missing.is_empty() {
        Ok(fields.clone())
    } else {
        Err(ValidationErrors { missing })
    }
}

/// Which operation the form is currently serving.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Idle,
    Creating,
    Editing(RecordId),
}

/// What a submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(RecordId),
    Updated(RecordId),
    /// Validation failed; the form stays open and flagged.
    Invalid(ValidationErrors),
    /// The edited record vanished from the store; the form was closed.
    TargetMissing(RecordId),
    /// Submit while idle.
    NotOpen,
}

#[derive(Debug, Clone, Default)]
pub struct FormMediator {
    mode: FormMode,
    fields: RecordFields,
    focus: FormField,
    was_validated: bool,
}

impl FormMediator {
    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Idle
    }

    #[must_use]
    pub const fn fields(&self) -> &RecordFields {
        &self.fields
    }

    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    #[must_use]
    pub const fn was_validated(&self) -> bool {
        self.was_validated
    }

    /// Identifier of the record being edited, if any.
    #[must_use]
    pub const fn edit_target(&self) -> Option<&RecordId> {
        match &self.mode {
            FormMode::Editing(id) => Some(id),
            FormMode::Idle | FormMode::Creating => None,
        }
    }

    /// Returns `true` if `field` should be drawn as invalid.
    #[must_use]
    pub fn is_invalid(&self, field: FormField) -> bool {
        self.was_validated && field.value(&self.fields).is_empty()
    }

    /// Opens the form blank for a new record.
    pub fn begin_create(&mut self) {
        tracing::debug!("form opened for new record");
        self.reset();
        self.mode = FormMode::Creating;
    }

    /// Opens the form pre-filled with `record`.
    pub fn begin_edit(&mut self, record: &TravelRecord) {
        tracing::debug!(record_id = %record.id, "form opened for edit");
        self.reset();
        self.fields = record.fields.clone();
        self.mode = FormMode::Editing(record.id.clone());
    }

    /// Closes the form and discards its contents.
    pub fn cancel(&mut self) {
        tracing::debug!(mode = ?self.mode, "form cancelled");
        self.reset();
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn push_char(&mut self, c: char) {
        self.focus.value_mut(&mut self.fields).push(c);
    }

    pub fn pop_char(&mut self) {
        self.focus.value_mut(&mut self.fields).pop();
    }

    /// Validates and writes the form to `store`.
    ///
    /// On success the form resets to [`FormMode::Idle`].
    pub fn submit(&mut self, store: &mut RecordStore) -> SubmitOutcome {
        let _span = tracing::debug_span!("form_submit", mode = ?self.mode).entered();

        if self.mode == FormMode::Idle {
            return SubmitOutcome::NotOpen;
        }

        let fields = match validate(&self.fields) {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!(%errors, "form submission blocked");
                self.was_validated = true;
                return SubmitOutcome::Invalid(errors);
            }
        };

        let outcome = match std::mem::take(&mut self.mode) {
            FormMode::Creating => {
                let record = TravelRecord::create(fields);
                let id = record.id.clone();
                store.upsert(record);
                SubmitOutcome::Created(id)
            }
            FormMode::Editing(id) if store.contains(&id) => {
                store.upsert(TravelRecord::with_id(id.clone(), fields));
                SubmitOutcome::Updated(id)
            }
            FormMode::Editing(id) => {
                tracing::debug!(record_id = %id, "edit target no longer exists");
                SubmitOutcome::TargetMissing(id)
            }
            FormMode::Idle => SubmitOutcome::NotOpen,
        };

        self.reset();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut FormMediator, values: [&str; 6]) {
        for value in values {
            value.chars().for_each(|c| form.push_char(c));
            form.focus_next();
        }
    }

    const JANE: [&str; 6] = ["Jane Doe", "Capt", "Manila", "Training", "2024-01-10", "2024-01-15"];

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut field = FormField::Name;
        for _ in 0..FormField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Return);
    }

    #[test]
    fn create_submit_appends_and_resets() {
        let mut store = RecordStore::transient();
        let mut form = FormMediator::default();
        form.begin_create();
        fill(&mut form, JANE);

        let SubmitOutcome::Created(id) = form.submit(&mut store) else {
            panic!("expected create");
        };

        assert_eq!(store.get(&id).unwrap().fields.destination, "Manila");
        assert_eq!(form.mode(), &FormMode::Idle);
        assert_eq!(form.fields(), &RecordFields::default());
    }

    #[test]
    fn edit_submit_replaces_in_place() {
        let mut store = RecordStore::transient();
        let record = TravelRecord::create(RecordFields {
            name: "Jane Doe".to_string(),
            rank: "Capt".to_string(),
            destination: "Manila".to_string(),
            purpose: "Training".to_string(),
            departure: "2024-01-10".to_string(),
            return_date: "2024-01-15".to_string(),
        });
        store.upsert(record.clone());

        let mut form = FormMediator::default();
        form.begin_edit(&record);
        assert_eq!(form.edit_target(), Some(&record.id));

        form.focus_next();
        form.focus_next();
        for _ in 0.."Manila".len() {
            form.pop_char();
        }
        "Cebu".chars().for_each(|c| form.push_char(c));

        assert_eq!(form.submit(&mut store), SubmitOutcome::Updated(record.id.clone()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&record.id).unwrap().fields.destination, "Cebu");
        assert_eq!(form.edit_target(), None);
    }

    #[test]
    fn blank_name_blocks_submission() {
        let mut store = RecordStore::transient();
        let mut form = FormMediator::default();
        form.begin_create();
        fill(&mut form, ["", "Capt", "Manila", "Training", "2024-01-10", "2024-01-15"]);

        let outcome = form.submit(&mut store);

        assert_eq!(
            outcome,
            SubmitOutcome::Invalid(ValidationErrors { missing: vec![FormField::Name] })
        );
        assert!(store.is_empty());
        assert_eq!(form.mode(), &FormMode::Creating);
        assert!(form.is_invalid(FormField::Name));
        assert!(!form.is_invalid(FormField::Rank));
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut store = RecordStore::transient();
        let mut form = FormMediator::default();
        form.begin_create();
        fill(&mut form, ["   ", "Capt", "Manila", "Training", "2024-01-10", "2024-01-15"]);

        assert!(matches!(form.submit(&mut store), SubmitOutcome::Created(_)));
        assert_eq!(store.records()[0].fields.name, "   ");
    }

    #[test]
    fn edit_of_vanished_record_is_ignored() {
        let mut store = RecordStore::transient();
        let record = TravelRecord::create(RecordFields {
            name: "Gone".to_string(),
            rank: "Sgt".to_string(),
            destination: "Iloilo".to_string(),
            purpose: "Audit".to_string(),
            departure: "x".to_string(),
            return_date: "y".to_string(),
        });
        let mut form = FormMediator::default();
        form.begin_edit(&record);

        assert_eq!(form.submit(&mut store), SubmitOutcome::TargetMissing(record.id));
        assert!(store.is_empty());
        assert!(!form.is_open());
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut form = FormMediator::default();
        form.begin_create();
        form.push_char('x');
        form.cancel();

        assert!(!form.is_open());
        assert_eq!(form.fields(), &RecordFields::default());
        assert_eq!(form.submit(&mut RecordStore::transient()), SubmitOutcome::NotOpen);
    }

    #[test]
    fn validate_keeps_values_untouched() {
        let fields = RecordFields {
            name: " Jane ".to_string(),
            rank: "Capt".to_string(),
            destination: "Manila".to_string(),
            purpose: "Training".to_string(),
            departure: "2024-01-15".to_string(),
            return_date: "2024-01-10".to_string(),
        };
        assert_eq!(validate(&fields), Ok(fields.clone()));
    }
}
