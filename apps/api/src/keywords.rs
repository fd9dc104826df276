//! RIASEC keyword mapping: translates a Holland-code string into the
//! job-title keywords used to query the upstream search API.
//!
//! The six category tables are fixed at compile time. Only the first two
//! letters of a code are consulted: the primary category contributes its
//! full list, the secondary its first five titles.

use std::collections::HashSet;

/// Keyword returned when the caller supplies no code at all.
const FALLBACK_KEYWORD: &str = "Remote";

/// How many titles the secondary category contributes.
const SECONDARY_TITLE_COUNT: usize = 5;

// Realistic (doers)
const REALISTIC: &[&str] = &[
    "Mechanical Engineer",
    "Electrical Engineer",
    "Civil Engineer",
    "Technician",
    "Mechanic",
    "Carpenter",
    "Electrician",
    "Driver",
    "Construction Manager",
    "Safety Officer",
    "Network Engineer",
];

// Investigative (thinkers)
const INVESTIGATIVE: &[&str] = &[
    "Data Scientist",
    "Software Engineer",
    "Research Scientist",
    "Data Analyst",
    "Biologist",
    "Chemist",
    "Pharmacist",
    "Systems Analyst",
    "Backend Developer",
    "Algorithm Engineer",
];

// Artistic (creators)
const ARTISTIC: &[&str] = &[
    "Graphic Designer",
    "UX Designer",
    "Product Designer",
    "Art Director",
    "Copywriter",
    "Content Creator",
    "Architect",
    "Illustrator",
    "Video Editor",
    "Frontend Developer",
];

// Social (helpers)
const SOCIAL: &[&str] = &[
    "Registered Nurse",
    "Teacher",
    "Social Worker",
    "Counselor",
    "Human Resources Manager",
    "Recruiter",
    "Customer Success Manager",
    "Physical Therapist",
    "Occupational Therapist",
    "Corporate Trainer",
];

// Enterprising (persuaders)
const ENTERPRISING: &[&str] = &[
    "Sales Manager",
    "Account Executive",
    "Product Manager",
    "Marketing Manager",
    "Business Development Representative",
    "Real Estate Agent",
    "Project Manager",
    "Chief of Staff",
];

// Conventional (organizers)
const CONVENTIONAL: &[&str] = &[
    "Accountant",
    "Financial Analyst",
    "Auditor",
    "Bookkeeper",
    "Administrative Assistant",
    "Compliance Officer",
    "Data Entry",
    "Bank Teller",
    "Logistics Coordinator",
    "Quality Assurance",
];

fn titles_for(category: char) -> Option<&'static [&'static str]> {
    match category {
        'R' => Some(REALISTIC),
        'I' => Some(INVESTIGATIVE),
        'A' => Some(ARTISTIC),
        'S' => Some(SOCIAL),
        'E' => Some(ENTERPRISING),
        'C' => Some(CONVENTIONAL),
        _ => None,
    }
}

/// Generates the job-title keywords for a RIASEC code.
///
/// The first letter is the primary category and contributes its full title
/// list; the second letter (if any) is the secondary category and contributes
/// its first five titles. Letters beyond the second are ignored, matching is
/// case-insensitive, and unrecognized letters contribute nothing. Duplicates
/// are removed; the output order carries no contract.
///
/// An empty code falls back to a single generic keyword so the search still
/// returns something useful.
pub fn keywords_for_code(code: &str) -> Vec<String> {
    if code.is_empty() {
        return vec![FALLBACK_KEYWORD.to_string()];
    }

    let mut letters = code.chars();
    let primary = letters.next().map(|c| c.to_ascii_uppercase());
    let secondary = letters.next().map(|c| c.to_ascii_uppercase());

    let mut titles: Vec<&'static str> = Vec::new();

    if let Some(list) = primary.and_then(titles_for) {
        titles.extend_from_slice(list);
    }

    if let Some(list) = secondary.and_then(titles_for) {
        titles.extend(list.iter().take(SECONDARY_TITLE_COUNT));
    }

    let mut seen = HashSet::new();
    titles.retain(|t| seen.insert(*t));

    titles.into_iter().map(str::to_string).collect()
}
