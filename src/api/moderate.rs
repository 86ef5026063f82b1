#[derive(serde::Deserialize, Clone, Debug)]
pub struct SafetyCategory {
    pub category: String,
    pub confidence: f64,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct SafetyReport {
    pub categories: Vec<SafetyCategory>,
}
