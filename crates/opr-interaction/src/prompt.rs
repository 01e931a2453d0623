//! Prompt template for report drafting.
//!
//! The rendered text tells the model to answer with a bare JSON object
//! holding `summary` and `objectives`; the response parser relies on that.

use minijinja::Environment;
use opr_core::Result;
use opr_core::generation::{GenerationRequest, Tone};
use serde::Serialize;

const TEMPLATE_NAME: &str = "opr_prompt.txt";

const REPORT_PROMPT_TEMPLATE: &str = r#"Anda adalah pembantu admin sekolah yang pakar. Sila bantu saya menulis kandungan untuk Laporan Satu Halaman (One Page Report - OPR) bagi aktiviti sekolah.

Maklumat Program:
Nama: {{ program_name }}
Nota Kasar/Butiran: {{ notes }}

Sila hasilkan output dalam format JSON sahaja tanpa markdown formatting (```json ... ```) dengan struktur berikut:
{
  "summary": "Satu perenggan laporan eksekutif yang formal (sekitar 80-100 patah perkataan) menceritakan perjalanan program dan impaknya dalam Bahasa Melayu baku.",
  "objectives": ["Objektif 1", "Objektif 2", "Objektif 3"]
}

Pastikan bahasa yang digunakan adalah formal, profesional, dan sesuai untuk laporan rasmi sekolah kerajaan Malaysia.
{%- if tone == "formal" %}
Gunakan nada yang tegas dan berwibawa sepanjang laporan.
{%- elif tone == "enthusiastic" %}
Gunakan nada yang bersemangat dan positif, namun kekal sesuai untuk laporan rasmi.
{%- endif %}"#;

/// Template context for one drafting request.
#[derive(Debug, Clone, Serialize)]
pub struct ReportPrompt<'a> {
    program_name: &'a str,
    notes: &'a str,
    tone: Option<&'static str>,
}

impl<'a> ReportPrompt<'a> {
    pub fn new(request: &'a GenerationRequest) -> Self {
        Self {
            program_name: &request.program_name,
            notes: &request.notes,
            tone: request.tone.as_ref().map(Tone::as_str),
        }
    }

    /// Renders the prompt. Program name and notes are embedded verbatim.
    pub fn render(&self) -> Result<String> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, REPORT_PROMPT_TEMPLATE)?;
        let prompt = env.get_template(TEMPLATE_NAME)?.render(self)?;
        Ok(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest::new(
            "Gotong Royong Perdana",
            "- Dimulakan dengan senamrobik\n- Ramai ibu bapa hadir",
        )
    }

    #[test]
    fn test_embeds_program_and_notes_verbatim() {
        let prompt = ReportPrompt::new(&request()).render().unwrap();

        assert!(prompt.contains("Nama: Gotong Royong Perdana"));
        assert!(prompt.contains(
            "Nota Kasar/Butiran: - Dimulakan dengan senamrobik\n- Ramai ibu bapa hadir"
        ));
    }

    #[test]
    fn test_requests_bare_json_with_both_keys() {
        let prompt = ReportPrompt::new(&request()).render().unwrap();

        assert!(prompt.contains("format JSON sahaja tanpa markdown formatting"));
        assert!(prompt.contains("\"summary\":"));
        assert!(prompt.contains("\"objectives\":"));
        assert!(prompt.contains("80-100 patah perkataan"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let req = request();
        assert_eq!(
            ReportPrompt::new(&req).render().unwrap(),
            ReportPrompt::new(&req).render().unwrap()
        );
    }

    #[test]
    fn test_markup_in_notes_is_not_escaped_or_expanded() {
        let req = GenerationRequest::new("A & B", "<b>{{ notes }}</b>");
        let prompt = ReportPrompt::new(&req).render().unwrap();

        assert!(prompt.contains("Nama: A & B"));
        assert!(prompt.contains("<b>{{ notes }}</b>"));
    }

    #[test]
    fn test_tone_adds_a_single_line() {
        let base = ReportPrompt::new(&request()).render().unwrap();
        let toned_request = request().with_tone(Tone::Enthusiastic);
        let toned = ReportPrompt::new(&toned_request).render().unwrap();

        assert!(toned.starts_with(&base));
        assert_eq!(toned.lines().count(), base.lines().count() + 1);
        assert!(toned.ends_with("kekal sesuai untuk laporan rasmi."));
        assert!(base.ends_with("laporan rasmi sekolah kerajaan Malaysia."));
    }
}
