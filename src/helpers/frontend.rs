//! Frontend development helper.
//!
//! Builds frontend prompts guided by the design and React skills and
//! dispatches them with a fixed task category.

use crate::orchestrator::{DispatchError, Orchestrator, TaskCategory};
use crate::providers::AiResponse;
use crate::skills::{wrap_skill, SkillLibrary};

const DESIGN_SKILL: &str = "frontend-design.md";
const REACT_SKILL: &str = "react-best-practices.md";

pub struct FrontendHelper {
    orchestrator: Orchestrator,
    design_skill: Option<String>,
    react_skill: Option<String>,
}

impl FrontendHelper {
    pub fn new(orchestrator: Orchestrator, skills: &SkillLibrary) -> Self {
        Self {
            orchestrator,
            design_skill: skills.load(DESIGN_SKILL),
            react_skill: skills.load(REACT_SKILL),
        }
    }

    fn build_prompt(&self, request: &str) -> String {
        let mut parts = Vec::new();
        if let Some(skill) = &self.design_skill {
            parts.push(wrap_skill(skill));
        }
        if let Some(skill) = &self.react_skill {
            parts.push(wrap_skill(skill));
        }
        parts.push(format!("<request>\n{request}\n</request>"));
        parts.join("\n\n")
    }

    /// Generate a React component from a description.
    pub async fn generate_component(
        &self,
        description: &str,
    ) -> Result<AiResponse, DispatchError> {
        let request = format!(
            "Generate a production-quality React component for the following requirements.\n\n\
             Requirements:\n{description}\n\n\
             Output constraints:\n\
             - Written in TypeScript\n\
             - Styled with Tailwind CSS\n\
             - Accessible\n\
             - Responsive\n\
             - Includes prop type definitions"
        );
        self.orchestrator
            .execute(&self.build_prompt(&request), Some(TaskCategory::Frontend))
            .await
    }

    /// Review UI code and point out improvements.
    pub async fn review_ui(&self, code: &str) -> Result<AiResponse, DispatchError> {
        let request = format!(
            "Review the following UI code and point out improvements.\n\n\
             ```\n{code}\n```\n\n\
             Review for:\n\
             1. Design quality\n\
             2. Accessibility\n\
             3. Responsive behavior\n\
             4. Performance\n\
             5. Code quality"
        );
        self.orchestrator
            .execute(&self.build_prompt(&request), Some(TaskCategory::CodeReview))
            .await
    }

    /// Propose a UI design for a product context.
    pub async fn suggest_design(&self, context: &str) -> Result<AiResponse, DispatchError> {
        let request = format!(
            "Propose a UI design for the following context.\n\n\
             Context:\n{context}\n\n\
             Include:\n\
             - Color palette\n\
             - Typography\n\
             - Layout structure\n\
             - Component breakdown\n\
             - Interaction design"
        );
        self.orchestrator
            .execute(&self.build_prompt(&request), Some(TaskCategory::Frontend))
            .await
    }

    /// Convert plain CSS to Tailwind utility classes.
    pub async fn convert_to_tailwind(&self, css_code: &str) -> Result<AiResponse, DispatchError> {
        let request = format!(
            "Convert the following CSS to Tailwind utility classes.\n\n\
             ```css\n{css_code}\n```\n\n\
             Conversion rules:\n\
             - Prefer standard utility classes\n\
             - Use arbitrary values where needed\n\
             - Keep @apply to a minimum"
        );
        self.orchestrator
            .execute(&request, Some(TaskCategory::SimpleCode))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoutingConfig;
    use crate::orchestrator::ModelRouter;
    use crate::providers::{Backend, BackendError};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct RecordingBackend {
        prompts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Backend for RecordingBackend {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn model(&self) -> &str {
            "recorder-model"
        }

        fn is_configured(&self) -> bool {
            true
        }

        fn matches_hint(&self, hint: &str) -> bool {
            hint.contains("recorder")
        }

        async fn invoke(&self, prompt: &str, model: &str) -> Result<AiResponse, BackendError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(AiResponse {
                model: model.to_string(),
                content: "ok".to_string(),
                tokens_used: None,
                cost_estimate: None,
            })
        }
    }

    fn recording_helper(
        skill_dir: &std::path::Path,
    ) -> (FrontendHelper, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let mut config = RoutingConfig::default();
        for category in ["frontend", "code_review", "simple_code"] {
            config
                .chains
                .insert(category.to_string(), vec!["recorder".to_string()]);
        }
        let orchestrator = Orchestrator::with_backends(
            vec![Box::new(RecordingBackend {
                prompts: prompts.clone(),
            })],
            Box::new(RecordingBackend {
                prompts: Arc::new(Mutex::new(Vec::new())),
            }),
            ModelRouter::from_config(&config),
        );
        let skills = SkillLibrary::with_dir(skill_dir);
        (FrontendHelper::new(orchestrator, &skills), prompts)
    }

    #[tokio::test]
    async fn test_generate_component_includes_both_skills() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DESIGN_SKILL), "design guidance").unwrap();
        std::fs::write(dir.path().join(REACT_SKILL), "react guidance").unwrap();
        let (helper, prompts) = recording_helper(dir.path());

        helper.generate_component("a pricing table").await.unwrap();
        let prompt = prompts.lock().unwrap().pop().unwrap();
        assert!(prompt.contains("design guidance"));
        assert!(prompt.contains("react guidance"));
        assert!(prompt.contains("<request>"));
        assert!(prompt.contains("a pricing table"));
    }

    #[tokio::test]
    async fn test_missing_skills_leave_only_the_request() {
        let dir = tempfile::tempdir().unwrap();
        let (helper, prompts) = recording_helper(dir.path());

        helper.suggest_design("a landing page").await.unwrap();
        let prompt = prompts.lock().unwrap().pop().unwrap();
        assert!(!prompt.contains("<skill>"));
        assert!(prompt.starts_with("<request>"));
    }

    #[tokio::test]
    async fn test_convert_to_tailwind_uses_raw_prompt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DESIGN_SKILL), "design guidance").unwrap();
        let (helper, prompts) = recording_helper(dir.path());

        helper
            .convert_to_tailwind(".card { margin: 0 auto; }")
            .await
            .unwrap();
        let prompt = prompts.lock().unwrap().pop().unwrap();
        assert!(!prompt.contains("<skill>"));
        assert!(prompt.contains(".card { margin: 0 auto; }"));
    }
}
