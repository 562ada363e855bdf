use crate::config::AssistantConfig;

/// Live figures from the records store that ground the assistant's answers
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    pub total_documents: u64,
    pub unique_patients: u64,
    /// Most common conditions, most frequent first
    pub top_conditions: Vec<String>,
    /// Most prescribed medications, most frequent first
    pub top_medications: Vec<String>,
    pub active_transfers: u64,
    /// Patients with critical alerts
    pub critical_alerts: u64,
}

/// Build the system prompt for a new call
pub fn build_system_prompt(assistant: &AssistantConfig, context: &CallContext) -> String {
    format!(
        "You are {}, the helpful voice assistant of {}. \
         There are currently {} documents and {} unique patients in the system. \
         The most common conditions are: {}. \
         The most prescribed medications are: {}. \
         Answer user questions using this context.",
        assistant.name,
        assistant.organization,
        context.total_documents,
        context.unique_patients,
        top_three(&context.top_conditions),
        top_three(&context.top_medications),
    )
}

/// Canned text answer for the widget's typed questions
pub fn build_answer(assistant: &AssistantConfig, context: &CallContext) -> String {
    format!(
        "I am {} of {}. Based on the latest patient records, there are {} patients, \
         {} active transfers, and {} patients with critical alerts.",
        assistant.name,
        assistant.organization,
        context.unique_patients,
        context.active_transfers,
        context.critical_alerts,
    )
}

fn top_three(items: &[String]) -> String {
    items.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
}
