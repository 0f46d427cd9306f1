use crate::domain::{CompanySearchParams, PersonSearchParams};

pub fn company_domain_prompt(params: &CompanySearchParams) -> String {
    format!(
        r#"You are a domain intelligence expert. Find the official website domain for the company: "{company}".
{context}
Task:
1. **Use Google Search** to find the official website.
2. **Identify the Primary Domain**:
    - Distinguish between consumer-facing brands and corporate entities.
    - If a company has a distinct corporate website (e.g., 'thekrogerco.com' for Kroger, 'aboutamazon.com' for Amazon) versus a consumer site (e.g., 'kroger.com', 'amazon.com'), **prefer the corporate/parent entity domain** as the primary result, as this is more accurate for business identification.
    - If the corporate domain is not widely used, fall back to the main consumer domain.
3. **Return Data**:
    - Provide the primary domain.
    - List the consumer domain or other regional domains as 'alternatives'.
    - Provide a confidence score based on the search results.

Output Format:
Return the result **strictly** as a valid JSON object with the following structure. Do not wrap in markdown code blocks if possible.
{{
  "domain": "string (the primary corporate domain)",
  "confidence": "High" | "Medium" | "Low",
  "reasoning": "string (brief explanation of why this domain was chosen, mentioning corporate vs consumer sites if relevant)",
  "alternatives": ["string", "string"] (list of related domains)
}}
"#,
        company = params.company_name,
        context = context_lines(&[
            ("Industry", params.industry.as_deref()),
            ("Location", params.location.as_deref()),
        ]),
    )
}

pub fn person_email_prompt(params: &PersonSearchParams) -> String {
    format!(
        r#"You are a professional contact researcher. Find the professional email address for:
Name: "{person}"
Company: "{company}"
{context}
Task:
1. **Use Google Search** to find public professional profiles, company press releases, or contact pages.
2. **Identify or Deduce Email**:
    - Look for an exact match for the professional email address.
    - If the exact email is not publicly listed, find the standard email pattern for the company (e.g., 'first.last@company.com', 'f.last@company.com') and apply it to the person's name.
3. **Reasoning**:
    - Clearly state if the email was found directly or deduced from a pattern.

Output Format:
Return the result **strictly** as a valid JSON object.
{{
  "email": "string (the found or most likely email address)",
  "confidence": "High" | "Medium" | "Low",
  "reasoning": "string (explain if this is a direct find or a pattern deduction)",
  "pattern": "string (e.g., '{{first}}.{{last}}@domain.com' or 'N/A' if direct match)"
}}
"#,
        person = params.person_name,
        company = params.company_name,
        context = context_lines(&[
            ("Job Title", params.job_title.as_deref()),
            ("Location", params.location.as_deref()),
        ]),
    )
}

/// One `Label: value` line per provided field.
fn context_lines(fields: &[(&str, Option<&str>)]) -> String {
    fields
        .iter()
        .filter_map(|(label, value)| value.map(|v| format!("{}: {}\n", label, v)))
        .collect()
}
