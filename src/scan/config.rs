use crate::geometry::NITROGEN;

/// How a candidate file's name is compared against the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionCase {
    /// `mol.XYZ` is not a candidate for `.xyz`.
    #[default]
    Sensitive,
    Insensitive,
}

/// What to do when a candidate file cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the scan and return the parse error.
    #[default]
    Abort,
    /// Log a warning, record the file in [`crate::Report::skipped`] and continue.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Element whose closest pair is measured.
    pub target: String,
    /// File-name suffix selecting candidate files, including the dot.
    pub extension: String,
    pub extension_case: ExtensionCase,
    pub on_error: ErrorPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target: NITROGEN.to_string(),
            extension: ".xyz".to_string(),
            extension_case: ExtensionCase::default(),
            on_error: ErrorPolicy::default(),
        }
    }
}

impl ScanConfig {
    pub fn matches_extension(&self, file_name: &str) -> bool {
        match self.extension_case {
            ExtensionCase::Sensitive => file_name.ends_with(&self.extension),
            ExtensionCase::Insensitive => {
                let (name, ext) = (file_name.as_bytes(), self.extension.as_bytes());
                name.len() >= ext.len() && name[name.len() - ext.len()..].eq_ignore_ascii_case(ext)
            }
        }
    }
}
