use crate::{AnalysisMode, InputRejected};

pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

pub const DIAGNOSIS_PATH: &str = "/api/diagnosis";
pub const MODE_PARAM: &str = "type";
pub const IMAGE_FIELD: &str = "image";

pub fn is_accepted_mime(mime: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&mime)
}

/// `{base}/api/diagnosis?type={mode}`; `base` may be empty for same-origin requests.
pub fn diagnosis_url(base: &str, mode: AnalysisMode) -> String {
    format!(
        "{}{}?{}={}",
        base.trim_end_matches('/'),
        DIAGNOSIS_PATH,
        MODE_PARAM,
        mode
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    InFlight,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<F> {
    pub name: String,
    pub mime: String,
    pub handle: F,
}

/// What to send once a submission has been accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<F> {
    pub file: SelectedFile<F>,
    pub mode: AnalysisMode,
}

/// State behind the upload card: a single file slot, the analysis mode and the
/// status of the one outstanding request.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadForm<F> {
    file: Option<SelectedFile<F>>,
    mode: AnalysisMode,
    status: RequestStatus,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            file: None,
            mode: AnalysisMode::default(),
            status: RequestStatus::Idle,
        }
    }
}

impl<F: Clone> UploadForm<F> {
    pub fn file(&self) -> Option<&SelectedFile<F>> {
        self.file.as_ref()
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == RequestStatus::InFlight
    }

    /// Replaces whatever file was selected before.
    pub fn select(
        &mut self,
        name: impl Into<String>,
        mime: impl Into<String>,
        handle: F,
    ) -> Result<(), InputRejected> {
        let mime = mime.into();
        if !is_accepted_mime(&mime) {
            return Err(InputRejected::UnsupportedType(mime));
        }
        self.file = Some(SelectedFile {
            name: name.into(),
            mime,
            handle,
        });
        Ok(())
    }

    pub fn set_mode(&mut self, mode: AnalysisMode) {
        self.mode = mode;
    }

    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.is_in_flight()
    }

    pub fn begin_submit(&mut self) -> Result<Submission<F>, InputRejected> {
        if self.is_in_flight() {
            return Err(InputRejected::RequestInFlight);
        }
        let file = self.file.clone().ok_or(InputRejected::NoFileSelected)?;
        self.status = RequestStatus::InFlight;
        Ok(Submission {
            file,
            mode: self.mode,
        })
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        if self.is_in_flight() {
            self.status = RequestStatus::Failed(reason.into());
        }
    }

    pub fn finish(&mut self) {
        if self.is_in_flight() {
            self.status = RequestStatus::Idle;
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
