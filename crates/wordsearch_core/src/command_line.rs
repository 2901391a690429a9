//! Argument lists for the external generator.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use shared::{
    domain::PdfOptions,
    protocol::{OptionFlag, JSON_FLAG, OUTPUT_FLAG},
};

/// What the generator should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Pdf { output_path: PathBuf },
    Json,
}

/// `<word-list> (-o <output> | --json) [--flag=value]...`
///
/// Values are attached to their flag so text starting with `-` (a title like
/// "- Week 3 -") is never read as another option.
pub fn build_args(word_list: &Path, mode: &OutputMode, options: &PdfOptions) -> Vec<OsString> {
    let mut args = vec![word_list.as_os_str().to_os_string()];

    let flags: &[OptionFlag] = match mode {
        OutputMode::Pdf { output_path } => {
            args.push(OUTPUT_FLAG.into());
            args.push(output_path_arg(output_path));
            &OptionFlag::ALL
        }
        OutputMode::Json => {
            args.push(JSON_FLAG.into());
            &OptionFlag::GRID_ONLY
        }
    };

    args.extend(
        flags
            .iter()
            .map(|flag| OsString::from(format!("{}={}", flag.as_str(), flag.value(options)))),
    );

    args
}

/// `-o` takes a separate token, so a relative path such as `-draft.pdf`
/// needs a `./` prefix to stay a value.
fn output_path_arg(path: &Path) -> OsString {
    if path.is_relative() && path.as_os_str().to_string_lossy().starts_with('-') {
        Path::new(".").join(path).into_os_string()
    } else {
        path.as_os_str().to_os_string()
    }
}

/// Renders an argument list for log lines.
pub fn display_args(args: &[OsString]) -> String {
    args.iter()
        .map(|arg| {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                format!("{arg:?}")
            } else {
                arg.into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "tests/command_line_tests.rs"]
mod tests;
