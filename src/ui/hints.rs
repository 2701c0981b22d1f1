//! Guidance text printed after the checks.
//!
//! Each guide is a numbered list of steps; continuation lines are indented
//! under the step they belong to.

/// Where to get the dataset the notebook reads.
pub const DATASET_URL: &str = "https://grouplens.org/datasets/movielens/latest/";

/// Display name of the registered kernel, as the notebook UI shows it.
pub const KERNEL_DISPLAY_NAME: &str = "Python (Movie Recommendation)";

/// Shown when the kernel listing lacks the expected kernel.
pub const KERNEL_SETUP_HINT: &str =
    "Run: ./setup_kernel.sh (macOS/Linux) or setup_kernel.bat (Windows)";

/// One numbered step and any indented detail lines under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideStep {
    pub title: String,
    pub details: Vec<String>,
}

impl GuideStep {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: Vec::new(),
        }
    }

    fn detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }
}

/// What to do once the environment is ready.
pub fn next_steps() -> Vec<GuideStep> {
    vec![
        GuideStep::new("Download the MovieLens dataset from:").detail(DATASET_URL),
        GuideStep::new("Update the data_path in the notebook (Cell 4)"),
        GuideStep::new("Open the notebook: jupyter notebook"),
        GuideStep::new(format!("Select kernel: '{}'", KERNEL_DISPLAY_NAME)),
    ]
}

/// How to fix a failing environment.
pub fn remediation_steps() -> Vec<GuideStep> {
    vec![
        GuideStep::new("Activate virtual environment:")
            .detail("source venv/bin/activate  # macOS/Linux")
            .detail("venv\\Scripts\\activate     # Windows"),
        GuideStep::new("Install packages: pip install -r requirements.txt"),
        GuideStep::new("Run setup script: ./setup_kernel.sh"),
    ]
}
