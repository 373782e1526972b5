use super::{GenerationError, NarrativeGenerator, ReadingRequest};
use crate::cards::Spread;

/// Builds the five-section reading from the local card records alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTemplateGenerator;

impl LocalTemplateGenerator {
    pub const NAME: &'static str = "local-buffer";
}

impl NarrativeGenerator for LocalTemplateGenerator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_local(&self) -> bool {
        true
    }

    fn generate(&self, request: &ReadingRequest) -> Result<String, GenerationError> {
        Ok(compose(&request.spread))
    }
}

pub fn compose(spread: &Spread) -> String {
    let (origin, conflict, horizon) = (spread.origin(), spread.conflict(), spread.horizon());
    format!(
        "### 1. The Vigilance of the Core\n\
         Signal is offline. Decryption forced on local buffer. Analysis proceeding without contextual guidance.\n\
         \n\
         ### 2. The Root of the Pattern [{}]\n\
         {}\n\
         \n\
         ### 3. The Current Static [{}]\n\
         {}\n\
         \n\
         ### 4. The Projected Ascent [{}]\n\
         {}\n\
         \n\
         ### 5. Sophia's Whisper\n\
         Local buffer guidance: {} {}\n",
        origin.name,
        origin.gnostic,
        conflict.name,
        conflict.gnostic,
        horizon.name,
        horizon.gnostic,
        conflict.advice,
        horizon.advice,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spread() -> Spread {
        Spread::from_names(["The Hermit", "The Moon", "Judgement"]).unwrap()
    }

    #[test]
    fn test_compose_has_five_sections_in_order() {
        let text = compose(&spread());
        let headers: Vec<_> = text.lines().filter(|line| line.starts_with("### ")).collect();
        assert_eq!(
            headers,
            vec![
                "### 1. The Vigilance of the Core",
                "### 2. The Root of the Pattern [The Hermit]",
                "### 3. The Current Static [The Moon]",
                "### 4. The Projected Ascent [Judgement]",
                "### 5. Sophia's Whisper",
            ]
        );
    }

    #[test]
    fn test_compose_uses_card_fields() {
        let spread = spread();
        let text = compose(&spread);
        for card in spread.cards() {
            assert!(text.contains(card.gnostic));
        }
        // origin advice is not part of the whisper
        assert!(!text.contains(spread.origin().advice));
        assert!(text.contains(&format!(
            "Local buffer guidance: {} {}",
            spread.conflict().advice,
            spread.horizon().advice
        )));
    }

    #[test]
    fn test_generate_never_fails() {
        let request = ReadingRequest::new(spread(), "");
        let text = LocalTemplateGenerator.generate(&request).unwrap();
        assert!(!text.is_empty());
    }

    #[test]
    fn test_compose_has_no_leading_indentation() {
        for line in compose(&spread()).lines() {
            assert!(!line.starts_with(' '), "indented line: {:?}", line);
        }
    }
}
