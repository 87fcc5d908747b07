//! Prompt template value object and selector

use std::fmt;

use super::prompt_type::PromptType;

const TRANSCRIPT: &str = "Transcribe the video. Return only the spoken dialogue, verbatim. Omit any additional text or descriptions.";

const TIMESTAMPS: &str = "Generate a timestamped transcript of the video. Each line must follow this format precisely: [hh:mm:ss] Dialogue. Return only the timestamp and spoken content; omit any other text or formatting.";

const SUMMARY: &str = "Provide a concise summary of the main points in nested bullets, using quotes only when absolutely essential for clarity. Start output directly with the response.";

const SCENE: &str = r#"Please provide a detailed description of the scene in the video, including:

Setting: Where the scene takes place (e.g., indoors, outdoors, specific location). Be specific - is it a forest, a city street, a living room?

Objects: Prominent objects visible in the scene (e.g., furniture, vehicles, natural elements). Include details like color, size, and material if discernible.

People: Description of any people present, including their appearance (clothing, hair, etc.), approximate age, and any actions they are performing.

Lighting: The overall lighting of the scene (e.g., bright, dim, natural, artificial). Note any specific light sources (lamps, sunlight).

Colors: Dominant colors and color palettes used in the scene.

Camera Angle/Movement: Describe the camera perspective (e.g., close-up, wide shot, aerial view) and any camera movement (panning, zooming, static).

Start output directly with the response -- do not include any introductory text or explanations."#;

const CLIPS: &str = r#"Extract shareable clips for social media. Each clip must include:

* **Timestamp:** [hh:mm:ss]-[hh:mm:ss]
* **Transcript:** Verbatim dialogue/text within the clip.
* **Rationale:** A concise explanation (under 20 words) of the clip's social media appeal (e.g., "humorous," "controversial," "inspiring," "informative"). Focus on virality, engagement potential (shares, likes, comments).

Start output directly with the response -- do not include any introductory text or explanations."#;

const FALLBACK: &str = "Summarize this YouTube video with a focus on actionable insights. Use nested bullets and include relevant quotes. Specifically, highlight any recommended tools, strategies, or resources mentioned.";

/// Value object holding the instruction text sent alongside a video.
/// Always bound to exactly one prompt type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    prompt_type: PromptType,
    text: &'static str,
}

impl PromptTemplate {
    /// Get the template for a prompt type
    pub const fn for_type(prompt_type: PromptType) -> Self {
        let text = match prompt_type {
            PromptType::Transcript => TRANSCRIPT,
            PromptType::Timestamps => TIMESTAMPS,
            PromptType::Summary => SUMMARY,
            PromptType::Scene => SCENE,
            PromptType::Clips => CLIPS,
            PromptType::Fallback => FALLBACK,
        };
        Self { prompt_type, text }
    }

    /// The prompt type this template belongs to
    pub const fn prompt_type(&self) -> PromptType {
        self.prompt_type
    }

    /// Get the template text
    pub const fn text(&self) -> &'static str {
        self.text
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Select the template for a prompt type identifier.
///
/// Unknown or missing identifiers get the fallback template.
pub fn select(identifier: Option<&str>) -> PromptTemplate {
    PromptTemplate::for_type(PromptType::resolve(identifier))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::prompt::ALL_PROMPT_TYPES;

    #[test]
    fn templates_not_empty() {
        for prompt_type in ALL_PROMPT_TYPES {
            assert!(!PromptTemplate::for_type(*prompt_type).text().is_empty());
        }
    }

    #[test]
    fn templates_are_distinct() {
        let texts: HashSet<&str> = ALL_PROMPT_TYPES
            .iter()
            .map(|t| PromptTemplate::for_type(*t).text())
            .collect();
        assert_eq!(texts.len(), ALL_PROMPT_TYPES.len());
    }

    #[test]
    fn template_knows_its_type() {
        for prompt_type in ALL_PROMPT_TYPES {
            assert_eq!(
                PromptTemplate::for_type(*prompt_type).prompt_type(),
                *prompt_type
            );
        }
    }

    #[test]
    fn select_known_identifiers() {
        assert_eq!(select(Some("transcript")).text(), TRANSCRIPT);
        assert_eq!(select(Some("timestamps")).text(), TIMESTAMPS);
        assert_eq!(select(Some("summary")).text(), SUMMARY);
        assert_eq!(select(Some("scene")).text(), SCENE);
        assert_eq!(select(Some("clips")).text(), CLIPS);
        assert_eq!(select(Some("fallback")).text(), FALLBACK);
    }

    #[test]
    fn select_unknown_gets_fallback() {
        assert_eq!(select(Some("bogus")).prompt_type(), PromptType::Fallback);
        assert_eq!(select(Some("")).prompt_type(), PromptType::Fallback);
        assert_eq!(select(None).prompt_type(), PromptType::Fallback);
        assert_eq!(select(Some("Transcript")).text(), FALLBACK);
    }

    #[test]
    fn select_is_idempotent() {
        assert_eq!(select(Some("scene")), select(Some("scene")));
        assert_eq!(select(Some("nope")), select(Some("nope")));
    }

    #[test]
    fn timestamps_template_has_format() {
        assert!(select(Some("timestamps")).text().contains("[hh:mm:ss] Dialogue"));
    }

    #[test]
    fn display_writes_text() {
        let template = select(Some("summary"));
        assert_eq!(template.to_string(), SUMMARY);
    }
}
