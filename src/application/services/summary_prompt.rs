pub const DEFAULT_SUMMARY_CHAR_BUDGET: usize = 4500;

const PROMPT_TEMPLATE: &str = r#"You are a professional reviewer of academic journal quality.

Analyse the document below objectively and technically.
Do NOT rewrite the document.
Do NOT summarise the document.

Use formal academic English.

DOCUMENT TEXT:
{document}

RESPOND WITH VALID JSON ONLY (no markdown code block):

{
    "structure_detection": {
        "abstract": "present/absent",
        "introduction": "present/absent",
        "methodology": "present/absent",
        "results_discussion": "present/absent",
        "conclusion": "present/absent"
    },
    "methodology_strength": {
        "score": "Strong/Moderate/Weak",
        "explanation": "2-3 sentences on why the methodology is strong, moderate or weak",
        "strengths": ["point 1", "point 2"]
    },
    "variable_clarity": {
        "status": "Clear/Somewhat Clear/Unclear",
        "identified_variables": ["variable 1", "variable 2"],
        "notes": "describe any clarity problems"
    },
    "consistency": {
        "aims_vs_methodology": "Consistent/Partly Consistent/Inconsistent",
        "methodology_vs_results": "Consistent/Partly Consistent/Inconsistent",
        "aims_vs_conclusion": "Consistent/Partly Consistent/Inconsistent",
        "notes": "describe inconsistencies if any"
    },
    "weaknesses": {
        "structural": ["weakness 1", "weakness 2"],
        "methodological": ["weakness 1", "weakness 2"],
        "writing": ["weakness 1", "weakness 2"]
    },
    "overall_score": {
        "grade": "A/B/C/D",
        "interpretation": "Excellent/Good/Fair/Needs Improvement",
        "recommendation": "short advice for improvement"
    }
}

IMPORTANT: output must be valid JSON without markdown fences or backticks."#;

/// Returns at most `budget` leading characters of `text`.
pub fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}

pub fn build_summary_prompt(text: &str, budget: usize) -> String {
    PROMPT_TEMPLATE.replace("{document}", truncate_chars(text, budget))
}
