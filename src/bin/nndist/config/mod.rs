use nndist::{ErrorPolicy, ExtensionCase, ScanConfig};

use crate::cli::ScanOptions;

pub fn build_scan_config(opts: &ScanOptions) -> ScanConfig {
    ScanConfig {
        target: opts.element.trim().to_string(),
        extension_case: if opts.ignore_ext_case {
            ExtensionCase::Insensitive
        } else {
            ExtensionCase::Sensitive
        },
        on_error: if opts.skip_invalid {
            ErrorPolicy::Skip
        } else {
            ErrorPolicy::Abort
        },
        ..ScanConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_library_defaults() {
        let opts = ScanOptions {
            element: "N".to_string(),
            ignore_ext_case: false,
            skip_invalid: false,
        };
        assert_eq!(build_scan_config(&opts), ScanConfig::default());
    }

    #[test]
    fn flags_switch_policies() {
        let opts = ScanOptions {
            element: " O ".to_string(),
            ignore_ext_case: true,
            skip_invalid: true,
        };
        let config = build_scan_config(&opts);
        assert_eq!(config.target, "O");
        assert_eq!(config.extension_case, ExtensionCase::Insensitive);
        assert_eq!(config.on_error, ErrorPolicy::Skip);
    }
}
