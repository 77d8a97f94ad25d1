use crate::{
    config::{PromptDefaults, WorkflowConfig},
    models::{PromptField, PromptParameters},
};
use serde::Serialize;

/// Render the prompt sentence for `params` about `subject`.
pub fn assemble(params: &PromptParameters, subject: &str) -> String {
    format!(
        "A {} type image of {} in the style of {} with {} finishing touches.",
        params.style, subject, params.artist, params.finishing_touches
    )
}

/// Parameter fields plus the editable prompt text box they feed.
#[derive(Debug, Clone, Serialize)]
pub struct PromptForm {
    params: PromptParameters,
    prompt: String,
    manually_edited: bool,
    #[serde(skip)]
    subject: String,
    #[serde(skip)]
    defaults: PromptDefaults,
}

impl PromptForm {
    pub fn new(subject: impl Into<String>, defaults: PromptDefaults) -> Self {
        let subject = subject.into();
        let params = PromptParameters::from(&defaults);
        let prompt = assemble(&params, &subject);

        Self {
            params,
            prompt,
            manually_edited: false,
            subject,
            defaults,
        }
    }

    pub fn from_config(config: &WorkflowConfig) -> Self {
        Self::new(config.subject.clone(), config.defaults.clone())
    }

    pub fn params(&self) -> &PromptParameters {
        &self.params
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn is_manually_edited(&self) -> bool {
        self.manually_edited
    }

    /// The sentence the current parameters render to, regardless of edits.
    pub fn assembled(&self) -> String {
        assemble(&self.params, &self.subject)
    }

    pub fn set_style(&mut self, style: impl Into<String>) {
        self.set_field(PromptField::Style, style);
    }

    pub fn set_artist(&mut self, artist: impl Into<String>) {
        self.set_field(PromptField::Artist, artist);
    }

    pub fn set_finishing_touches(&mut self, finishing_touches: impl Into<String>) {
        self.set_field(PromptField::FinishingTouches, finishing_touches);
    }

    /// Update one field and re-render from the new value. A blank value
    /// falls back to the configured default.
    pub fn set_field(&mut self, field: PromptField, value: impl Into<String>) {
        let value = value.into();
        let value = if value.trim().is_empty() {
            self.default_for(field).to_string()
        } else {
            value.trim().to_string()
        };

        log::debug!("Prompt field {} set to '{}'", field.as_str(), value);
        self.params.set(field, value);

        if !self.manually_edited {
            self.prompt = self.assembled();
        }
    }

    pub fn edit_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
        self.manually_edited = true;
    }

    /// Drop manual edits and go back to the rendered sentence.
    pub fn reset_prompt(&mut self) {
        self.manually_edited = false;
        self.prompt = self.assembled();
    }

    /// Empty the text box after a successful generation. The box then follows
    /// parameter changes again.
    pub(crate) fn clear_prompt(&mut self) {
        self.prompt.clear();
        self.manually_edited = false;
    }

    fn default_for(&self, field: PromptField) -> &str {
        match field {
            PromptField::Style => &self.defaults.style,
            PromptField::Artist => &self.defaults.artist,
            PromptField::FinishingTouches => &self.defaults.finishing_touches,
        }
    }
}

impl Default for PromptForm {
    fn default() -> Self {
        Self::from_config(&WorkflowConfig::default())
    }
}
