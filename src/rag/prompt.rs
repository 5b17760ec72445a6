use crate::llm::ChatMessage;
use crate::vector::RetrievedPassage;

const CONTEXT_SLOT: &str = "{context}";
const PASSAGE_SEPARATOR: &str = "\n\n";

pub const SYSTEM_PROMPT: &str = "You are an assistant for question-answering tasks. \
Use the following pieces of retrieved context to answer the question. \
If you don't know the answer, say that you don't know. \
Use three sentences maximum and keep the answer concise.\n\n{context}";

/// Joins the passage texts in retrieval order.
pub fn format_context(passages: &[RetrievedPassage]) -> String {
    passages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join(PASSAGE_SEPARATOR)
}

/// Builds the system + user message pair sent to the model.
pub fn build_prompt(question: &str, passages: &[RetrievedPassage]) -> Vec<ChatMessage> {
    let system = SYSTEM_PROMPT.replace(CONTEXT_SLOT, &format_context(passages));
    vec![ChatMessage::system(system), ChatMessage::user(question)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(text: &str) -> RetrievedPassage {
        RetrievedPassage {
            id: text.to_string(),
            text: text.to_string(),
            score: 0.5,
            source: None,
        }
    }

    #[test]
    fn passages_fill_the_context_slot_in_order() {
        let messages = build_prompt(
            "How is acne treated?",
            &[passage("Benzoyl peroxide."), passage("Topical retinoids.")],
        );

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[0]
            .content
            .ends_with("keep the answer concise.\n\nBenzoyl peroxide.\n\nTopical retinoids."));
        assert!(!messages[0].content.contains(CONTEXT_SLOT));
        assert_eq!(messages[1], ChatMessage::user("How is acne treated?"));
    }

    #[test]
    fn no_passages_leaves_empty_context() {
        let messages = build_prompt("Hi", &[]);
        assert!(messages[0].content.ends_with("concise.\n\n"));
    }
}
