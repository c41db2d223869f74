//! Conversation orchestrator.
//!
//! A [`StressBot`] owns one conversation: its history, the stress record and
//! the user profile. Each turn runs classifier → prompt → model and records
//! both sides of the exchange.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::intent::{Intent, classify};
use crate::llm::{LlmError, ModelClient};
use crate::profile::{
    LoadOutcome, PROFILE_SAVED, PersistedProfile, ProfileError, ProfileStore, ProfileUpdate,
    UserProfile,
};
use crate::prompt::build_prompt;
use crate::stress::{StressInfo, StressInfoUpdate};

/// Author of a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Stress-management assistant for a single conversation.
pub struct StressBot {
    model: Arc<dyn ModelClient>,
    profile: UserProfile,
    stress_info: StressInfo,
    history: Vec<ChatMessage>,
}

impl StressBot {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self {
            model,
            profile: UserProfile::default(),
            stress_info: StressInfo::default(),
            history: Vec::new(),
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn stress_info(&self) -> &StressInfo {
        &self.stress_info
    }

    /// Conversation so far, oldest first.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) -> &'static str {
        self.profile.update(update)
    }

    pub fn set_stress_info(&mut self, update: StressInfoUpdate) -> &'static str {
        self.stress_info.update(update)
    }

    /// Copy of the profile and stress record in their persisted shape.
    pub fn snapshot(&self) -> PersistedProfile {
        PersistedProfile {
            profile: self.profile.clone(),
            stress_info: self.stress_info.clone(),
        }
    }

    /// Persist profile and stress record; returns the confirmation message.
    pub fn save_profile(&self, store: &ProfileStore) -> Result<&'static str, ProfileError> {
        store.save(&self.snapshot())?;
        Ok(PROFILE_SAVED)
    }

    /// Replace profile and stress record from the store.
    ///
    /// When no file exists the current state is kept and the
    /// "no profile yet" message is returned.
    pub fn load_profile(&mut self, store: &ProfileStore) -> Result<&'static str, ProfileError> {
        let outcome = store.load()?;
        Ok(self.apply_load(outcome))
    }

    /// Apply a load result read elsewhere; `NotFound` keeps the current state.
    pub fn apply_load(&mut self, outcome: LoadOutcome) -> &'static str {
        let message = outcome.message();
        if let LoadOutcome::Loaded(data) = outcome {
            self.profile = data.profile;
            self.stress_info = data.stress_info;
        }
        message
    }

    /// Run one chat turn and return the model's reply.
    ///
    /// On a model failure the user entry stays in history and no assistant
    /// entry is recorded.
    pub async fn process_message(&mut self, message: &str) -> Result<String, LlmError> {
        self.history.push(ChatMessage::user(message));

        let classification = classify(message);
        if let Some(level) = classification.level {
            debug!(%level, "stress level taken from message");
            self.stress_info.set_level(level);
        }

        let prompt = build_prompt(classification.intent, &self.stress_info, message);
        info!(
            intent = %classification.intent,
            provider = self.model.provider(),
            prompt_len = prompt.len(),
            "generating reply"
        );
        let reply = self.model.generate(&prompt).await?;

        self.history.push(ChatMessage::assistant(reply.clone()));
        Ok(reply)
    }

    /// Stress assessment from the current record, outside the conversation.
    pub async fn assess_stress_level(&self) -> Result<String, LlmError> {
        self.generate_for(Intent::Assess).await
    }

    pub async fn suggest_coping_strategies(&self) -> Result<String, LlmError> {
        self.generate_for(Intent::Cope).await
    }

    pub async fn provide_relaxation_exercises(&self) -> Result<String, LlmError> {
        self.generate_for(Intent::Relax).await
    }

    pub async fn suggest_lifestyle_changes(&self) -> Result<String, LlmError> {
        self.generate_for(Intent::Lifestyle).await
    }

    async fn generate_for(&self, intent: Intent) -> Result<String, LlmError> {
        let prompt = build_prompt(intent, &self.stress_info, "");
        self.model.generate(&prompt).await
    }
}
