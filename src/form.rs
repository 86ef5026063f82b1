/// The submission form for the moderation service, held as plain state: the
/// caller fills in `token` and `file`, awaits `submit`, then reads back
/// exactly one of `report` or `error`.
pub struct ModerationForm {
    pub endpoint: String,
    pub token: String,
    pub file: Option<std::path::PathBuf>,
    pub report: Option<crate::api::moderate::SafetyReport>,
    pub loading: bool,
    pub error: String,
}

enum Outcome {
    Report(crate::api::moderate::SafetyReport),
    Rejected(Option<String>),
    Failed(String),
}

impl ModerationForm {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: String::new(),
            file: None,
            report: None,
            loading: false,
            error: String::new(),
        }
    }

    pub async fn submit(&mut self) {
        if self.token.is_empty() {
            self.error = "Please enter a token".to_owned();
            return;
        }
        let file = if let Some(file) = self.file.clone() {
            file
        } else {
            self.error = "Please select an image file".to_owned();
            return;
        };

        self.error.clear();
        self.report = None;
        self.loading = true;

        let bytes = match tokio::fs::read(&file).await {
            Ok(bytes) => bytes,
            Err(e) => {
                self.finish(Outcome::Failed(e.to_string()));
                return;
            }
        };

        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_owned());
        log::info!("moderating {} ({} bytes)", file.display(), bytes.len());

        let client = crate::api::Client::new(&self.endpoint, &self.token);
        let outcome = match client.moderate(file_name, bytes).await {
            Ok(report) => Outcome::Report(report),
            Err(crate::api::Error::Api { detail, .. }) => Outcome::Rejected(detail),
            Err(crate::api::Error::Reqwest(e)) => Outcome::Failed(e.to_string()),
            Err(crate::api::Error::SerdeJson(e)) => Outcome::Failed(e.to_string()),
        };
        self.finish(outcome);
    }

    // The single point where an in-flight submission settles, so `loading`
    // drops back to false exactly once no matter which way it went.
    fn finish(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Report(report) => {
                log::info!("report: {} categories", report.categories.len());
                self.report = Some(report);
            }
            Outcome::Rejected(detail) => {
                self.error = detail.unwrap_or_else(|| "Failed to moderate image".to_owned());
            }
            Outcome::Failed(message) => {
                self.error = format!("Error: {}", message);
            }
        }
        self.loading = false;
    }

    /// One line per category, in server order.
    pub fn report_lines(&self) -> Vec<String> {
        self.report
            .as_ref()
            .map(|report| {
                report
                    .categories
                    .iter()
                    .map(|c| format!("{}: {:.1}%", c.category, c.confidence * 100.0))
                    .collect()
            })
            .unwrap_or_default()
    }
}
