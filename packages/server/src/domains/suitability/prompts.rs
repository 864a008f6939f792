use super::schema::FORM_FIELDS;

const PREAMBLE: &str = "You are a financial advisor assistant that helps analyze user input and extract relevant information to fill out a financial suitability form. The form has the following fields with their descriptions:";

const INSTRUCTIONS: &str = "Analyze the user's input and return ONLY the fields that can be confidently determined from the provided information. Do not make assumptions or fill in fields without clear evidence from the user's input. Use null for every field that cannot be determined. Return with JSON format.";

/// System instruction for the extraction call, one `name: description`
/// line per form field.
pub fn build_system_prompt() -> String {
    let fields = FORM_FIELDS
        .iter()
        .map(|f| format!("{}: {}", f.name, f.description))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n{}\n\n{}", PREAMBLE, fields, INSTRUCTIONS)
}
