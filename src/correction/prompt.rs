//! Prompt assembly for the corrector model.

/// Instructions sent ahead of every student answer.
pub const PREAMBLE: &str = "Você é um assistente de correção de provas. Analise o texto seguinte, que é a resposta de um aluno. Corrija a resposta de forma clara e concisa, explicando os erros, se houver, e fornecendo a resposta correta. Seja direto e objetivo.";

/// Substituted when the model answers without any usable text.
pub const NO_CORRECTION_FALLBACK: &str = "Não foi possível obter uma correção.";

/// Build the full prompt for a student's answer.
///
/// The answer is embedded exactly as submitted, surrounding whitespace included.
pub fn build_prompt(answer: &str) -> String {
    format!("{PREAMBLE}\n\nResposta do aluno: \"{answer}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_layout() {
        let prompt = build_prompt("2+2=5");
        assert!(prompt.starts_with(PREAMBLE));
        assert!(prompt.ends_with("\n\nResposta do aluno: \"2+2=5\""));
    }

    #[test]
    fn test_answer_is_not_trimmed() {
        let prompt = build_prompt("  x  ");
        assert!(prompt.ends_with("Resposta do aluno: \"  x  \""));
    }
}
