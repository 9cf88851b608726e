//! Prompt engineering for verdict field extraction
//!
//! The instruction template is the entire contract handed to the generation
//! model: any change to the extracted fields is made here, never in the
//! provider or the orchestrator.

/// Builds the extraction prompt for one document
pub struct PromptBuilder {
    text: String,
}

impl PromptBuilder {
    /// Create a prompt builder for the given document text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build the complete extraction prompt.
    ///
    /// A deterministic concatenation of the fixed instruction template and
    /// the verbatim document text; total over every input, including the
    /// empty string.
    pub fn build(&self) -> String {
        let mut prompt = String::with_capacity(EXTRACTION_INSTRUCTIONS.len() + self.text.len() + 2);
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");
        prompt.push_str(&self.text);
        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"I have a court verdict in Hebrew. I need you to extract specific information and provide it to me as a JSON object with the following fields:

* court name (string): The name of the court that issued the verdict.
* name of file (string): The file name as it appears at the top of the document (e.g., "ME-22-11-62899-242").
* name of case (string): The case name (e.g., "תפ 62899-11-22 מדינת ישראל נ' קירמה").
* Articles of conviction (list of strings): A list of the specific offenses the defendant was convicted of.
* prison term (number): The length of the prison sentence imposed (in months).
* Service work (boolean): Indicate whether the prison term is to be served as community service. (true/false).
* suspended sentence (boolean): Indicate if there is a suspended sentence. (true/false).

Here is the verdict text:"#;
