use super::errors::GenerationError;
use super::model::GenerationRequest;

pub const SYSTEM_INSTRUCTION: &str = r#"You are Legends & Luminaries, an AI knowledge hub about successful people, entrepreneurs, brilliant young achievers and philosophers.

Guidelines:
- Answer clearly and factually; say so when you are not sure about a detail
- Prefer concrete lessons, habits and turning points over generic praise
- Keep answers focused and readable (short paragraphs or bullet points)
- Never invent quotes; only cite words the person is widely documented to have said"#;

/// Builds a request from raw user input using the fixed instruction.
///
/// Input is trimmed; nothing else about it is altered.
pub fn build_request(user_input: &str) -> Result<GenerationRequest, GenerationError> {
    let input = validated_input(user_input)?;
    Ok(GenerationRequest::new(
        SYSTEM_INSTRUCTION.to_string(),
        input.to_string(),
    ))
}

/// Builds a role-play request in which the model answers as `persona`.
///
/// A blank persona falls back to [`build_request`].
pub fn build_roleplay_request(
    user_input: &str,
    persona: &str,
) -> Result<GenerationRequest, GenerationError> {
    let input = validated_input(user_input)?;
    let persona = persona.trim();
    if persona.is_empty() {
        return build_request(input);
    }

    let instruction = format!(
        r#"{}

Role-play mode: answer in the first person as {}, using their known views, voice and life experience.
Stay in character, but if asked about events after their lifetime or about facts you cannot verify, say so plainly."#,
        SYSTEM_INSTRUCTION, persona
    );

    Ok(GenerationRequest::new(instruction, input.to_string()))
}

fn validated_input(user_input: &str) -> Result<&str, GenerationError> {
    let trimmed = user_input.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::InvalidInput);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_reject_empty_input() {
        assert_eq!(build_request(""), Err(GenerationError::InvalidInput));
    }

    #[test]
    fn should_reject_whitespace_only_input() {
        assert_eq!(build_request("   "), Err(GenerationError::InvalidInput));
        assert_eq!(build_request("\n\t "), Err(GenerationError::InvalidInput));
    }

    #[test]
    fn should_combine_fixed_instruction_with_input() {
        let request = build_request("Tell me about a dragon").unwrap();
        assert_eq!(request.instruction(), SYSTEM_INSTRUCTION);
        assert_eq!(request.user_input(), "Tell me about a dragon");
    }

    #[test]
    fn should_trim_surrounding_whitespace() {
        let request = build_request("  Who was Ada Lovelace?\n").unwrap();
        assert_eq!(request.user_input(), "Who was Ada Lovelace?");
    }

    #[test]
    fn should_mention_persona_in_roleplay_instruction() {
        let request = build_roleplay_request("What drove you?", "Marie Curie").unwrap();
        assert!(request.instruction().starts_with(SYSTEM_INSTRUCTION));
        assert!(request.instruction().contains("as Marie Curie"));
        assert_eq!(request.user_input(), "What drove you?");
    }

    #[test]
    fn should_fall_back_to_fixed_instruction_when_persona_blank() {
        let request = build_roleplay_request("What drove you?", "  ").unwrap();
        assert_eq!(request.instruction(), SYSTEM_INSTRUCTION);
    }

    #[test]
    fn should_validate_input_in_roleplay_mode() {
        assert_eq!(
            build_roleplay_request(" ", "Nelson Mandela"),
            Err(GenerationError::InvalidInput)
        );
    }

    proptest! {
        #[test]
        fn should_keep_trimmed_input_verbatim(
            input in "[A-Za-z0-9]([A-Za-z0-9 ,.?!'-]{0,80}[A-Za-z0-9.?!])?"
        ) {
            let request = build_request(&input).unwrap();
            prop_assert_eq!(request.user_input(), input.as_str());
        }

        #[test]
        fn should_reject_any_whitespace_only_input(input in "[ \t\n\r]{0,20}") {
            prop_assert_eq!(build_request(&input), Err(GenerationError::InvalidInput));
        }
    }
}
