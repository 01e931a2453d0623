//! Editor session: owns the report for one editing session and routes edits,
//! the AI assist flow and printing through it.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use opr_core::Result;
use opr_core::config::GeminiConfig;
use opr_core::generation::{
    AssistState, ContentGenerator, GenerationRequest, GenerationResult, Tone,
};
use opr_core::print::PrintHost;
use opr_core::report::{Report, ReportAction};
use opr_interaction::GeminiReportDrafter;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::preview::render_preview;

/// Editor views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorTab {
    /// Report fields ("Butiran")
    #[default]
    Details,
    /// Image slots ("Gambar")
    Photos,
    /// AI assist ("AI Assist")
    Ai,
}

/// One editing session.
///
/// The report is replaced wholesale on every edit. The assist flow holds no
/// lock while the generator runs, so edits made in the meantime are kept and
/// the result is merged into whatever the report is when it arrives.
pub struct EditorSession {
    session_id: String,
    report: RwLock<Report>,
    /// Free-text notes for the assist flow; not part of the report.
    notes: RwLock<String>,
    tone: RwLock<Option<Tone>>,
    active_tab: RwLock<EditorTab>,
    /// Never held across an await point.
    assist_state: Mutex<AssistState>,
    generator: Arc<dyn ContentGenerator>,
    printer: Arc<dyn PrintHost>,
}

impl EditorSession {
    /// Starts a session with a default report dated today.
    pub fn new(generator: Arc<dyn ContentGenerator>, printer: Arc<dyn PrintHost>) -> Self {
        Self::with_report(Report::default(), generator, printer)
    }

    pub fn with_report(
        report: Report,
        generator: Arc<dyn ContentGenerator>,
        printer: Arc<dyn PrintHost>,
    ) -> Self {
        let session_id = Uuid::new_v4().to_string();
        tracing::debug!(session_id = %session_id, "Editor session started");
        Self {
            session_id,
            report: RwLock::new(report),
            notes: RwLock::new(String::new()),
            tone: RwLock::new(None),
            active_tab: RwLock::new(EditorTab::default()),
            assist_state: Mutex::new(AssistState::Idle),
            generator,
            printer,
        }
    }

    /// Starts a session drafting through Gemini.
    ///
    /// Fails with a configuration error when the credential is missing.
    pub fn with_gemini(config: GeminiConfig, printer: Arc<dyn PrintHost>) -> Result<Self> {
        let generator = Arc::new(GeminiReportDrafter::gemini(config)?);
        Ok(Self::new(generator, printer))
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns a snapshot of the current report.
    pub async fn report(&self) -> Report {
        self.report.read().await.clone()
    }

    /// Applies one edit. On error the report is left as it was.
    pub async fn apply(&self, action: ReportAction) -> Result<Report> {
        let mut report = self.report.write().await;
        let next = report.apply(action)?;
        *report = next.clone();
        Ok(next)
    }

    /// Reads an image file and stores it in slot `index`.
    pub async fn load_image_into_slot(
        &self,
        index: usize,
        path: impl AsRef<Path>,
    ) -> Result<Report> {
        let payload = opr_infrastructure::load_image(path).await?;
        self.apply(ReportAction::SetImage { index, payload }).await
    }

    pub async fn notes(&self) -> String {
        self.notes.read().await.clone()
    }

    pub async fn set_notes(&self, notes: impl Into<String>) {
        *self.notes.write().await = notes.into();
    }

    pub async fn set_tone(&self, tone: Option<Tone>) {
        *self.tone.write().await = tone;
    }

    pub async fn active_tab(&self) -> EditorTab {
        *self.active_tab.read().await
    }

    pub async fn switch_tab(&self, tab: EditorTab) {
        *self.active_tab.write().await = tab;
    }

    pub fn assist_state(&self) -> AssistState {
        self.lock_assist_state().clone()
    }

    /// True while an assist request is outstanding.
    pub fn is_generating(&self) -> bool {
        self.lock_assist_state().is_requesting()
    }

    /// Runs the assist flow.
    ///
    /// Requires a program name and notes; without them no request is made.
    /// Rejected with `AssistBusy` while another request is outstanding. On
    /// success the summary is replaced, the objectives are replaced only if
    /// the result has any, and the editor switches back to the details tab.
    /// On failure the report is not touched.
    pub async fn assist(&self) -> Result<Report> {
        let request = self.build_request().await;
        if let Err(err) = request.ensure_ready() {
            tracing::warn!(
                session_id = %self.session_id,
                error = %err,
                "Assist precondition not met"
            );
            return Err(err);
        }

        let guard = self.begin_request()?;
        tracing::info!(
            session_id = %self.session_id,
            program_name = %request.program_name,
            "Generating report content"
        );

        let outcome = match self.generator.generate(&request).await {
            Ok(result) => Ok(self.merge_into_report(result).await),
            Err(err) => Err(err),
        };
        // Leaves `Requesting` only once the merge is written.
        guard.finish(&outcome);
        let merged = outcome?;
        self.switch_tab(EditorTab::Details).await;

        tracing::info!(
            session_id = %self.session_id,
            objectives = merged.objectives.len(),
            "Report content generated"
        );
        Ok(merged)
    }

    /// Renders the print preview of the current report.
    pub async fn preview(&self) -> Result<String> {
        let report = self.report.read().await;
        render_preview(&report)
    }

    /// Renders the preview and hands it to the print host.
    pub async fn print(&self) -> Result<()> {
        let document = self.preview().await?;
        tracing::info!(session_id = %self.session_id, "Sending report to print host");
        self.printer.print(&document)
    }

    async fn merge_into_report(&self, result: GenerationResult) -> Report {
        let mut report = self.report.write().await;
        let next = report.merge_generation(result);
        *report = next.clone();
        next
    }

    async fn build_request(&self) -> GenerationRequest {
        let program_name = self.report.read().await.program_name.clone();
        let notes = self.notes.read().await.clone();
        let mut request = GenerationRequest::new(program_name, notes);
        request.tone = *self.tone.read().await;
        request
    }

    fn begin_request(&self) -> Result<RequestGuard<'_>> {
        let mut state = self.lock_assist_state();
        *state = state.begin().inspect_err(|_| {
            tracing::warn!(session_id = %self.session_id, "Assist already in progress");
        })?;
        Ok(RequestGuard {
            state: &self.assist_state,
            finished: false,
        })
    }

    fn lock_assist_state(&self) -> MutexGuard<'_, AssistState> {
        self.assist_state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Holds the `Requesting` state for one assist call. If the call is dropped
/// before finishing, the state falls back to `Idle` so the flow can run again.
struct RequestGuard<'a> {
    state: &'a Mutex<AssistState>,
    finished: bool,
}

impl RequestGuard<'_> {
    fn finish<T>(mut self, outcome: &Result<T>) {
        *self.lock() = AssistState::finish(outcome);
        self.finished = true;
    }

    fn lock(&self) -> MutexGuard<'_, AssistState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for RequestGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            *self.lock() = AssistState::Idle;
        }
    }
}
