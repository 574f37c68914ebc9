// Prompt templates for the application package.
// Placeholders are filled by generation::pipeline; the record arrives as the
// serialized `StructuredResume` JSON, so its field names are part of this contract.

pub const JOB_ANALYSIS_SYSTEM: &str = "\
    You are an expert at reading job descriptions and summarizing what \
    really matters for a candidate.";

/// Replace `{job_description}` before sending. Sees no résumé content.
pub const JOB_ANALYSIS_PROMPT_TEMPLATE: &str = r#"JOB DESCRIPTION TO ANALYZE:
{job_description}

Extract and present:
1. Core responsibilities (bullet list)
2. Required technical skills
3. Required soft skills
4. Qualifications (education, years of experience)
5. Any hints about culture, mission, or values

Return a well-structured Markdown summary."#;

pub const ASSESSMENT_SYSTEM: &str = "\
    You are an experienced recruiter who is honest and concrete about a \
    candidate's strengths and weaknesses.";

/// Replace `{job_description}`, `{job_analysis}` and `{resume_json}` before sending.
pub const ASSESSMENT_PROMPT_TEMPLATE: &str = r#"JOB DESCRIPTION:
{job_description}

JOB ANALYSIS:
{job_analysis}

STRUCTURED RÉSUMÉ JSON (fields: positions[].employer, title, dates, location, responsibilities; education; skills.technical, skills.soft):
{resume_json}

Assess how well the candidate fits the role. Format your answer as:
## Fit Score: XX%
**Category:** [HIGH/MEDIUM/LOW] FIT

### Key Strengths:
- 3-5 strengths, each naming the employer it comes from

### Gaps:
- 2-4 missing requirements

### Overall Assessment:
2-3 paragraphs

### Recommendation:
one paragraph"#;

pub const REVISION_SYSTEM: &str = "\
    You are a résumé strategist who would rather omit content than \
    misattribute an achievement to the wrong employer.";

/// Replace `{job_description}`, `{resume_json}` and `{assessment}` before sending.
pub const REVISION_PROMPT_TEMPLATE: &str = r#"STRUCTURED RÉSUMÉ JSON (ground truth):
{resume_json}

JOB DESCRIPTION:
{job_description}

FIT ASSESSMENT:
{assessment}

Rewrite the résumé for this role:
- Keep every position and every responsibility under its own employer.
- You may reorder and lightly rephrase responsibilities within a position.
- Start with a short professional summary.
- Sections: Name & Contact (placeholders), Professional Summary, Professional Experience (one subsection per employer, using the employer name as its heading), Education, Skills."#;

pub const COVER_LETTER_SYSTEM: &str = "\
    You write persuasive cover letters and never claim an achievement \
    happened at the wrong organization.";

/// Replace `{job_description}`, `{resume_json}` and `{assessment}` before sending.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"JOB DESCRIPTION:
{job_description}

STRUCTURED RÉSUMÉ JSON:
{resume_json}

FIT ASSESSMENT:
{assessment}

Write a 250-400 word cover letter. Highlight one or two achievements, each as
"In my role as [title] at [employer from the JSON], I ...". Close with enthusiasm
and next steps."#;

pub const QA_SYSTEM: &str = "\
    You are the final gatekeeper. You cross-check everything against the \
    structured résumé and flag any misattribution or dropped content.";

/// Replace `{resume_json}`, `{revised_resume}` and `{cover_letter}` before sending.
pub const QA_PROMPT_TEMPLATE: &str = r#"STRUCTURED RÉSUMÉ JSON (ground truth):
{resume_json}

REVISED RÉSUMÉ:
{revised_resume}

COVER LETTER:
{cover_letter}

Carefully verify:
1. Every position in the JSON appears in the revised résumé.
2. No responsibility is missing.
3. No responsibility appears under the wrong employer.
4. No new experience or numbers were invented.
5. Achievements mentioned in the cover letter name the right employer.

Return a QA report in Markdown:
Approval Status: [Approved / Approved with Minor Revisions / Major Revisions Required]

1. Factual Accuracy:
- ...

2. Completeness:
- ...

3. Employer-Achievement Mapping:
- ...

4. Cover Letter Accuracy:
- ...

5. Suggestions:
- ..."#;
