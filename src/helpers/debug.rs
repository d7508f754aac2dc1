//! Systematic debugging helper.
//!
//! Builds structured debugging prompts, optionally prefixed with the
//! systematic-debugging skill, and dispatches them with a fixed task
//! category.

use crate::orchestrator::{DispatchError, Orchestrator, TaskCategory};
use crate::providers::AiResponse;
use crate::skills::{wrap_skill, SkillLibrary};

/// Skill file consulted for the debugging workflow.
const DEBUG_SKILL: &str = "systematic-debugging.md";

pub struct DebugHelper {
    orchestrator: Orchestrator,
    skill: Option<String>,
}

impl DebugHelper {
    pub fn new(orchestrator: Orchestrator, skills: &SkillLibrary) -> Self {
        Self {
            orchestrator,
            skill: skills.load(DEBUG_SKILL),
        }
    }

    fn build_prompt(&self, request: &str) -> String {
        match &self.skill {
            Some(skill) => format!("{}\n\n<request>\n{request}\n</request>", wrap_skill(skill)),
            None => request.to_string(),
        }
    }

    /// Analyze an error message, optionally with code context.
    pub async fn analyze_error(
        &self,
        error_message: &str,
        code_context: &str,
    ) -> Result<AiResponse, DispatchError> {
        let mut request = format!(
            "Analyze the following error and propose the root cause and a fix.\n\n\
             Error message:\n```\n{error_message}\n```\n"
        );
        if !code_context.is_empty() {
            request.push_str(&format!("\nCode context:\n```\n{code_context}\n```\n"));
        }
        request.push_str(
            "\nCover:\n\
             1. What kind of error this is and what it means\n\
             2. Plausible causes (list more than one)\n\
             3. How to verify each cause\n\
             4. The recommended fix",
        );
        self.orchestrator
            .execute(&self.build_prompt(&request), Some(TaskCategory::Debugging))
            .await
    }

    /// Generate hypotheses for a bug symptom.
    pub async fn generate_hypothesis(
        &self,
        symptom: &str,
        context: &str,
    ) -> Result<AiResponse, DispatchError> {
        let mut request = format!(
            "Generate hypotheses for the following bug symptom.\n\nSymptom:\n{symptom}\n"
        );
        if !context.is_empty() {
            request.push_str(&format!("\nContext:\n{context}\n"));
        }
        request.push_str(
            "\nFor each hypothesis give:\n\
             1. A description of the hypothesis\n\
             2. What should be observable if it is correct\n\
             3. How to test it\n\
             4. A likelihood estimate (high/medium/low)",
        );
        self.orchestrator
            .execute(&self.build_prompt(&request), Some(TaskCategory::Debugging))
            .await
    }

    /// Suggest where to add debug logging in a piece of code.
    pub async fn suggest_logging(&self, code: &str) -> Result<AiResponse, DispatchError> {
        let request = format!(
            "Suggest where to add debug logging in the following code.\n\n\
             ```\n{code}\n```\n\n\
             Include:\n\
             1. The places worth logging\n\
             2. What each log line should record\n\
             3. A log level for each (debug/info/warn/error)\n\
             4. Example log statements"
        );
        self.orchestrator
            .execute(&request, Some(TaskCategory::Debugging))
            .await
    }

    /// Verify that a fix actually resolves the original issue.
    /// Dispatched as a code review rather than a debugging task.
    pub async fn verify_fix(
        &self,
        original_issue: &str,
        fix_description: &str,
        fixed_code: &str,
    ) -> Result<AiResponse, DispatchError> {
        let request = format!(
            "Verify whether the following fix is sound.\n\n\
             Original issue:\n{original_issue}\n\n\
             Fix description:\n{fix_description}\n\n\
             Fixed code:\n```\n{fixed_code}\n```\n\n\
             Check:\n\
             1. Is the original issue actually resolved\n\
             2. Does the change introduce new problems\n\
             3. Are edge cases covered\n\
             4. Could the same defect exist elsewhere\n\
             5. Suggested regression tests"
        );
        self.orchestrator
            .execute(&self.build_prompt(&request), Some(TaskCategory::CodeReview))
            .await
    }
}
