//! Prompt templates, one per [`Intent`].

use crate::intent::Intent;
use crate::stress::StressInfo;

const NONE_SPECIFIED: &str = "None specified";
const NOT_SPECIFIED: &str = "Not specified";

/// Render the model prompt for `intent`.
///
/// `message` is only quoted by the general template.
pub fn build_prompt(intent: Intent, info: &StressInfo, message: &str) -> String {
    match intent {
        Intent::Assess => assess(info),
        Intent::Cope => cope(info),
        Intent::Relax => relax(info),
        Intent::Lifestyle => lifestyle(info),
        Intent::General => general(info, message),
    }
}

fn list(values: &[String]) -> String {
    if values.is_empty() {
        NONE_SPECIFIED.to_string()
    } else {
        values.join(", ")
    }
}

fn level(info: &StressInfo) -> &str {
    info.stress_level
        .as_ref()
        .map(|l| l.as_str())
        .unwrap_or(NOT_SPECIFIED)
}

fn sleep(info: &StressInfo) -> &str {
    info.sleep_quality.as_deref().unwrap_or(NOT_SPECIFIED)
}

fn assess(info: &StressInfo) -> String {
    format!(
        "Assess the stress level of a person with the following information:\n\
         \n\
         Stress triggers: {triggers}\n\
         Physical symptoms: {physical}\n\
         Emotional symptoms: {emotional}\n\
         Sleep quality: {sleep}\n\
         \n\
         Provide:\n\
         1. An assessment of their current stress level (low, moderate, high, or severe)\n\
         2. Potential health risks associated with their current stress level\n\
         3. Recommendations for stress reduction\n\
         4. Signs that indicate they should seek professional help\n",
        triggers = list(&info.stress_triggers),
        physical = list(&info.physical_symptoms),
        emotional = list(&info.emotional_symptoms),
        sleep = sleep(info),
    )
}

fn cope(info: &StressInfo) -> String {
    format!(
        "Suggest personalized stress management strategies based on:\n\
         Stress level: {level}\n\
         Stress triggers: {triggers}\n\
         Current coping mechanisms: {coping}\n\
         \n\
         Include:\n\
         1. Immediate stress relief techniques\n\
         2. Long-term stress management strategies\n\
         3. Mindfulness and meditation exercises\n\
         4. Physical activity recommendations\n\
         5. Sleep improvement tips\n\
         6. Time management strategies\n\
         7. Boundary-setting techniques\n",
        level = level(info),
        triggers = list(&info.stress_triggers),
        coping = list(&info.coping_mechanisms),
    )
}

fn relax(info: &StressInfo) -> String {
    format!(
        "Provide relaxation exercises based on:\n\
         Stress level: {level}\n\
         Physical symptoms: {physical}\n\
         Emotional symptoms: {emotional}\n\
         \n\
         Include:\n\
         1. Breathing exercises with step-by-step instructions\n\
         2. Progressive muscle relaxation techniques\n\
         3. Guided imagery exercises\n\
         4. Mindfulness meditation scripts\n\
         5. Body scan exercises\n\
         6. Quick relaxation techniques for busy situations\n",
        level = level(info),
        physical = list(&info.physical_symptoms),
        emotional = list(&info.emotional_symptoms),
    )
}

fn lifestyle(info: &StressInfo) -> String {
    format!(
        "Suggest lifestyle changes to reduce stress based on:\n\
         Stress level: {level}\n\
         Sleep quality: {sleep}\n\
         Stress triggers: {triggers}\n\
         \n\
         Include:\n\
         1. Sleep hygiene recommendations\n\
         2. Dietary changes to support stress reduction\n\
         3. Exercise recommendations\n\
         4. Social connection strategies\n\
         5. Work-life balance techniques\n\
         6. Time management tips\n\
         7. Digital wellness practices\n",
        level = level(info),
        sleep = sleep(info),
        triggers = list(&info.stress_triggers),
    )
}

fn general(info: &StressInfo, message: &str) -> String {
    format!(
        "You are a helpful stress management assistant. The user has provided the following information:\n\
         Stress level: {level}\n\
         Stress triggers: {triggers}\n\
         Physical symptoms: {physical}\n\
         Emotional symptoms: {emotional}\n\
         \n\
         Please provide a helpful response to: {message}\n\
         \n\
         Focus on:\n\
         1. Stress assessment\n\
         2. Coping strategies\n\
         3. Relaxation techniques\n\
         4. Lifestyle changes\n\
         5. When to seek professional help\n",
        level = level(info),
        triggers = list(&info.stress_triggers),
        physical = list(&info.physical_symptoms),
        emotional = list(&info.emotional_symptoms),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stress::{StressInfoUpdate, StressLevel};

    fn filled() -> StressInfo {
        let mut info = StressInfo::default();
        info.update(StressInfoUpdate {
            stress_level: Some("high".into()),
            triggers: Some(vec!["deadlines", "noise"].into()),
            coping_mechanisms: Some("walking".into()),
            sleep_quality: Some("restless".into()),
            physical_symptoms: Some("headache".into()),
            emotional_symptoms: Some(vec!["anxiety", "irritability"].into()),
        });
        info
    }

    #[test]
    fn empty_record_uses_placeholders() {
        let info = StressInfo::default();
        let prompt = build_prompt(Intent::Assess, &info, "");
        assert!(prompt.contains("Stress triggers: None specified"));
        assert!(prompt.contains("Sleep quality: Not specified"));

        let prompt = build_prompt(Intent::Cope, &info, "");
        assert!(prompt.contains("Stress level: Not specified"));
        assert!(prompt.contains("Current coping mechanisms: None specified"));
    }

    #[test]
    fn lists_are_joined_with_commas() {
        let prompt = build_prompt(Intent::Relax, &filled(), "");
        assert!(prompt.contains("Emotional symptoms: anxiety, irritability"));
        assert!(prompt.contains("Physical symptoms: headache"));
        assert!(prompt.contains("Stress level: high"));
    }

    #[test]
    fn assess_template_has_four_sections() {
        let prompt = build_prompt(Intent::Assess, &filled(), "");
        assert!(prompt.starts_with("Assess the stress level"));
        assert!(prompt.contains("Stress triggers: deadlines, noise"));
        assert!(prompt.contains("4. Signs that indicate they should seek professional help"));
        assert!(!prompt.contains("5."));
    }

    #[test]
    fn cope_and_lifestyle_have_seven_sections() {
        let cope = build_prompt(Intent::Cope, &filled(), "");
        assert!(cope.contains("Current coping mechanisms: walking"));
        assert!(cope.contains("7. Boundary-setting techniques"));

        let lifestyle = build_prompt(Intent::Lifestyle, &filled(), "");
        assert!(lifestyle.contains("Sleep quality: restless"));
        assert!(lifestyle.contains("7. Digital wellness practices"));
    }

    #[test]
    fn general_template_quotes_the_message() {
        let prompt = build_prompt(Intent::General, &filled(), "I can't focus today");
        assert!(prompt.contains("Please provide a helpful response to: I can't focus today"));
        assert!(prompt.contains("5. When to seek professional help"));
    }

    #[test]
    fn free_text_level_is_rendered() {
        let info = StressInfo {
            stress_level: Some(StressLevel::Other("overwhelmed".into())),
            ..Default::default()
        };
        let prompt = build_prompt(Intent::Lifestyle, &info, "");
        assert!(prompt.contains("Stress level: overwhelmed"));
    }
}
