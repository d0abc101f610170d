use folio::contact::{ContactField, ContactRequest, ProjectType, ValidationErrors};
use strum::IntoEnumIterator;

/// Contact form state. Submissions are validated only; nothing is sent.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub request: ContactRequest,
    errors: Option<ValidationErrors>,
    submitted: bool,
}

impl ContactForm {
    pub fn project_labels() -> Vec<String> {
        ProjectType::iter().map(|p| p.to_string()).collect()
    }

    pub fn set_project(&mut self, index: u32) {
        if let Some(project) = ProjectType::iter().nth(index as usize) {
            self.request.project = project;
        }
    }

    pub fn edit(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.request.name = value,
            ContactField::Email => self.request.email = value,
            ContactField::Company => self.request.company = value,
            ContactField::Budget => self.request.budget = value,
            ContactField::Message => self.request.message = value,
        }
        self.submitted = false;
    }

    pub fn submit(&mut self) -> bool {
        self.submitted = true;
        match self.request.validate() {
            Ok(()) => {
                log::info!("Contact request from {} is valid", self.request.email.trim());
                self.errors = None;
                true
            }
            Err(e) => {
                log::debug!("Contact request rejected: {}", e);
                self.errors = Some(e);
                false
            }
        }
    }

    /// Error text for one field, empty when it is fine or the form was not submitted.
    pub fn error(&self, field: ContactField) -> String {
        self.errors
            .as_ref()
            .and_then(|e| e.for_field(field))
            .map(|e| e.to_string())
            .unwrap_or_default()
    }

    pub fn status(&self) -> String {
        match (self.submitted, &self.errors) {
            (true, None) => format!("Thanks {}, your message is ready to send.", self.request.name.trim()),
            (true, Some(e)) => format!("Please fix {} field(s).", e.errors().len()),
            (false, _) => String::new(),
        }
    }
}
