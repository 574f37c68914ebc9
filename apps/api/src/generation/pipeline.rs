//! Application package — orchestrates parse → job analysis → assessment →
//! revision + cover letter → QA review.
//!
//! The parser's record is the only résumé content the generation service
//! ever sees; raw résumé text is never forwarded.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::assessment::{extract_fit_score, FitAssessment};
use crate::generation::attribution::{check_attribution, AttributionCheck};
use crate::generation::prompts::{
    ASSESSMENT_PROMPT_TEMPLATE, ASSESSMENT_SYSTEM, COVER_LETTER_PROMPT_TEMPLATE,
    COVER_LETTER_SYSTEM, JOB_ANALYSIS_PROMPT_TEMPLATE, JOB_ANALYSIS_SYSTEM, QA_PROMPT_TEMPLATE,
    QA_SYSTEM, REVISION_PROMPT_TEMPLATE, REVISION_SYSTEM,
};
use crate::generation::service::ContentGenerator;
use crate::llm_client::prompts::{ATTRIBUTION_INSTRUCTION, MARKDOWN_OUTPUT_INSTRUCTION};
use crate::models::resume::StructuredResume;
use crate::parser::{ParseWarning, ResumeParser};

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationPackage {
    pub resume: StructuredResume,
    pub warnings: Vec<ParseWarning>,
    /// Markdown summary of the job description's requirements.
    pub job_analysis: String,
    pub fit: FitAssessment,
    pub revised_resume: String,
    pub cover_letter: String,
    pub attribution: AttributionCheck,
    /// Model-written review of the revised résumé and cover letter.
    pub qa_report: String,
    pub generator_backend: String,
}

/// Runs the full application pipeline.
///
/// Steps:
/// 1. parse the résumé text into a `StructuredResume`
/// 2. job description analysis
/// 3. fit assessment from the record, the job description and its analysis
/// 4. revised résumé and cover letter, concurrently, both given the assessment
/// 5. attribution check of the revised résumé against the record
/// 6. QA review of both generated texts against the record
pub async fn build_application(
    parser: &ResumeParser,
    generator: &dyn ContentGenerator,
    request: &ApplicationRequest,
) -> Result<ApplicationPackage, AppError> {
    let job_description = request.job_description.trim();
    if job_description.is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let report = parser.parse(&request.resume_text)?;
    info!(
        "Parsed résumé: {} positions, {} warnings",
        report.resume.positions.len(),
        report.warnings.len()
    );
    if report.resume.is_empty() {
        warn!("Parsed résumé has no positions, education or skills; generation has no ground truth");
    }

    let resume_json = serde_json::to_string_pretty(&report.resume)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize résumé: {e}")))?;

    let job_analysis_prompt =
        JOB_ANALYSIS_PROMPT_TEMPLATE.replace("{job_description}", job_description);
    let job_analysis = generator
        .generate(
            &job_analysis_prompt,
            &format!("{JOB_ANALYSIS_SYSTEM} {MARKDOWN_OUTPUT_INSTRUCTION}"),
        )
        .await?;

    let assessment_prompt = ASSESSMENT_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{job_analysis}", &job_analysis)
        .replace("{resume_json}", &resume_json);
    let assessment_text = generator
        .generate(&assessment_prompt, &system_prompt(ASSESSMENT_SYSTEM))
        .await?;
    let fit = extract_fit_score(&assessment_text);
    info!("Fit score: {}/100 ({:?})", fit.score, fit.category);

    let revision_prompt = fill_with_assessment(
        REVISION_PROMPT_TEMPLATE,
        job_description,
        &resume_json,
        &fit.narrative,
    );
    let cover_letter_prompt = fill_with_assessment(
        COVER_LETTER_PROMPT_TEMPLATE,
        job_description,
        &resume_json,
        &fit.narrative,
    );
    let revision_system = system_prompt(REVISION_SYSTEM);
    let cover_letter_system = system_prompt(COVER_LETTER_SYSTEM);

    let (revised_resume, cover_letter) = tokio::join!(
        generator.generate(&revision_prompt, &revision_system),
        generator.generate(&cover_letter_prompt, &cover_letter_system),
    );
    let revised_resume = revised_resume?;
    let cover_letter = cover_letter?;

    let attribution = check_attribution(&report.resume, &revised_resume);

    let qa_prompt = QA_PROMPT_TEMPLATE
        .replace("{resume_json}", &resume_json)
        .replace("{revised_resume}", &revised_resume)
        .replace("{cover_letter}", &cover_letter);
    let qa_report = generator.generate(&qa_prompt, &system_prompt(QA_SYSTEM)).await?;

    Ok(ApplicationPackage {
        resume: report.resume,
        warnings: report.warnings,
        job_analysis,
        fit,
        revised_resume,
        cover_letter,
        attribution,
        qa_report,
        generator_backend: generator.backend().to_string(),
    })
}

fn system_prompt(role: &str) -> String {
    format!("{role} {ATTRIBUTION_INSTRUCTION} {MARKDOWN_OUTPUT_INSTRUCTION}")
}

fn fill_with_assessment(
    template: &str,
    job_description: &str,
    resume_json: &str,
    assessment: &str,
) -> String {
    template
        .replace("{job_description}", job_description)
        .replace("{resume_json}", resume_json)
        .replace("{assessment}", assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const RESUME: &str = "EXPERIENCE\nAcme Corp – Consulting\nAnalyst, NY 2020 - 2021\n• Did X\nBeta Inc – Retail\nManager 2021 - 2022\n• Did Z\nEDUCATION\nBA, State University";

    /// Answers by prompt kind and records every prompt it sees.
    struct ScriptedGenerator {
        revised: String,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn new(revised: &str) -> Self {
            Self {
                revised: revised.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ContentGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str, _system: &str) -> Result<String, AppError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if prompt.starts_with("JOB DESCRIPTION TO ANALYZE:") {
                Ok("## Core Responsibilities\n- Store-level retail analysis".to_string())
            } else if prompt.contains("Carefully verify") {
                Ok("Approval Status: Approved".to_string())
            } else if prompt.contains("Assess how well") {
                Ok("## Fit Score: 78%\n**Category:** HIGH FIT".to_string())
            } else if prompt.contains("Rewrite the résumé") {
                Ok(self.revised.clone())
            } else {
                Ok("Dear Hiring Manager,".to_string())
            }
        }

        fn backend(&self) -> &'static str {
            "scripted"
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl ContentGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, AppError> {
            Err(AppError::Generation("upstream timeout".to_string()))
        }

        fn backend(&self) -> &'static str {
            "failing"
        }
    }

    fn request(resume_text: &str, job_description: &str) -> ApplicationRequest {
        ApplicationRequest {
            resume_text: resume_text.to_string(),
            job_description: job_description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_package_contains_every_artifact() {
        let generator = ScriptedGenerator::new("## Acme Corp\n- Did X\n## Beta Inc\n- Did Z");
        let package = build_application(
            &ResumeParser::default(),
            &generator,
            &request(RESUME, "Retail analyst role"),
        )
        .await
        .unwrap();

        assert_eq!(package.resume.positions.len(), 2);
        assert_eq!(package.fit.score, 78);
        assert!(package.revised_resume.contains("Beta Inc"));
        assert_eq!(package.cover_letter, "Dear Hiring Manager,");
        assert!(package.job_analysis.contains("retail analysis"));
        assert_eq!(package.qa_report, "Approval Status: Approved");
        assert!(package.attribution.passed);
        assert_eq!(package.generator_backend, "scripted");
    }

    #[tokio::test]
    async fn test_prompts_carry_the_structured_record() {
        let generator = ScriptedGenerator::new("Acme Corp Beta Inc");
        build_application(
            &ResumeParser::default(),
            &generator,
            &request(RESUME, "Retail analyst role"),
        )
        .await
        .unwrap();

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 5);
        // Job analysis sees the job description only.
        assert!(prompts[0].contains("Retail analyst role"));
        assert!(!prompts[0].contains("Acme Corp"));
        assert!(prompts[1..]
            .iter()
            .all(|p| p.contains("\"employer\": \"Acme Corp\"")));
        // Assessment sees the job analysis; revision and cover letter see the assessment.
        assert!(prompts[1].contains("Store-level retail analysis"));
        assert!(prompts[2..4].iter().all(|p| p.contains("Fit Score: 78%")));
        // QA review sees both generated texts.
        assert!(prompts[4].contains("Acme Corp Beta Inc"));
        assert!(prompts[4].contains("Dear Hiring Manager,"));
    }

    #[tokio::test]
    async fn test_dropped_employer_fails_attribution() {
        let generator = ScriptedGenerator::new("## Acme Corp\n- Did X");
        let package = build_application(
            &ResumeParser::default(),
            &generator,
            &request(RESUME, "Retail analyst role"),
        )
        .await
        .unwrap();

        assert!(!package.attribution.passed);
        assert_eq!(package.attribution.missing_employers, vec!["Beta Inc"]);
    }

    #[tokio::test]
    async fn test_empty_job_description_is_rejected() {
        let err = build_application(
            &ResumeParser::default(),
            &ScriptedGenerator::new(""),
            &request(RESUME, "   "),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_empty_resume_is_an_extraction_failure() {
        let err = build_application(
            &ResumeParser::default(),
            &ScriptedGenerator::new(""),
            &request("", "Retail analyst role"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[tokio::test]
    async fn test_generation_failure_propagates() {
        let err = build_application(
            &ResumeParser::default(),
            &FailingGenerator,
            &request(RESUME, "Retail analyst role"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Generation(_)));
    }
}
