// Prompt builders for the letter endpoints.
// Pure functions: (section, context) in, prompt string out.

use crate::letter::models::{Section, StudentContext};
use crate::llm_client::prompts::{PLAIN_TEXT_INSTRUCTION, WRITER_PERSONA};

/// Returns the "Label: value" lines for every populated context field, in the
/// fixed order name, GPA, major, goals, achievements, involvement, financial need.
/// `existing_text` is never included here.
pub fn context_lines(context: &StudentContext) -> Vec<String> {
    let fields = [
        ("Student Name", &context.name),
        ("GPA", &context.gpa),
        ("Major", &context.major),
        ("Career Goals", &context.goals),
        ("Achievements", &context.achievements),
        ("Extracurricular Involvement", &context.involvement),
        ("Financial Need", &context.financial_need),
    ];

    fields
        .iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| format!("{label}: {}", v.trim())))
        .collect()
}

/// Section-specific direction appended to generate prompts.
pub fn section_guidance(section: &Section) -> Option<&'static str> {
    let sentence = match section {
        Section::Introduction => {
            "Open by introducing the student and their field of study, state that they are \
             applying for this scholarship, and give a brief, engaging preview of what makes \
             them a strong candidate."
        }
        Section::AcademicAchievements => {
            "Highlight the student's academic record, including their GPA, notable coursework, \
             honors, and awards, and show how these reflect dedication and ability."
        }
        Section::CareerGoals => {
            "Describe the student's career aspirations, how their major prepares them for that \
             path, and how this scholarship will help them reach their goals."
        }
        Section::ExtracurricularActivities => {
            "Describe the student's involvement outside the classroom, emphasizing leadership, \
             teamwork, and the impact they have had on their community."
        }
        Section::FinancialNeed => {
            "Explain the student's financial circumstances honestly and respectfully, and \
             describe how this scholarship would ease that burden and let them focus on their studies."
        }
        Section::Conclusion => {
            "Close the letter by summarizing why the student is a strong candidate, thanking the \
             committee for their consideration, and ending on a confident, forward-looking note."
        }
        Section::Other(_) => return None,
    };
    Some(sentence)
}

/// Appends a labelled block of context lines, or nothing if the context is empty.
fn push_context_block(prompt: &mut String, heading: &str, context: &StudentContext) {
    let lines = context_lines(context);
    if lines.is_empty() {
        return;
    }
    prompt.push_str(heading);
    prompt.push('\n');
    for line in lines {
        prompt.push_str(&line);
        prompt.push('\n');
    }
    prompt.push('\n');
}

/// Prompt asking the model to write a fresh paragraph for `section`.
/// Any `existing_text` on the context is deliberately ignored.
pub fn build_generate_prompt(section: &Section, context: &StudentContext) -> String {
    let mut prompt = format!(
        "{WRITER_PERSONA}\n\n\
         Write the '{section}' section of a scholarship application letter as a single, \
         well-structured paragraph in the first person, using the student information provided.\n\n"
    );

    push_context_block(&mut prompt, "Student information:", context);

    if let Some(guidance) = section_guidance(section) {
        prompt.push_str(guidance);
        prompt.push_str("\n\n");
    }

    prompt.push_str(PLAIN_TEXT_INSTRUCTION);
    prompt
}

/// Prompt asking the model to rewrite `existing_text`. Ends with the cue
/// `Improved text for the '<section>' section:`.
pub fn build_improve_prompt(
    section: &Section,
    existing_text: &str,
    context: &StudentContext,
) -> String {
    let mut prompt = format!(
        "{WRITER_PERSONA}\n\n\
         Here is the current '{section}' section of a scholarship application letter:\n\n\
         \"{existing_text}\"\n\n\
         Improve this text for clarity, concision, and grammar while preserving the student's \
         voice and original intent. Do not invent facts that are not supported by the text or \
         the information below.\n\n"
    );

    push_context_block(&mut prompt, "Supporting student information:", context);

    prompt.push_str(PLAIN_TEXT_INSTRUCTION);
    prompt.push_str(&format!("\n\nImproved text for the '{section}' section:"));
    prompt
}

/// Prompt asking the model to critique `existing_text` as a bulleted list.
/// Ends with the cue
/// `Constructive feedback for the '<section>' section (as a bulleted list):`.
pub fn build_feedback_prompt(
    section: &Section,
    existing_text: &str,
    context: &StudentContext,
) -> String {
    let mut prompt = format!(
        "{WRITER_PERSONA}\n\n\
         Review the following '{section}' section of a scholarship application letter:\n\n\
         \"{existing_text}\"\n\n\
         Give specific, actionable feedback on its content, structure, tone, and grammar. \
         Format the feedback as a bulleted list where each bullet names one concrete change \
         the student can make.\n\n"
    );

    push_context_block(&mut prompt, "Supporting student information:", context);

    prompt.push_str(&format!(
        "Constructive feedback for the '{section}' section (as a bulleted list):"
    ));
    prompt
}
